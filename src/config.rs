use std::io::{BufRead, Write};

use clap::{Parser, ValueEnum};

use crate::core::actions::render_fractal::render_fractal::RenderStrategy;
use crate::core::data::iteration_limit::IterationLimit;
use crate::core::data::pixel_grid::PixelGrid;
use crate::input::prompt::iteration_prompt::{ACCEPTED, PromptError, prompt_iteration_limit};

/// Interactive Mandelbrot and Julia set explorer.
///
/// Left-click explores the Julia set for a point, right-click and drag zooms.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "fractal_explorer", version)]
pub struct ExplorerArgs {
    /// Maximum iterations per pixel (3 to 300); asked for on stdin when omitted
    #[arg(long, value_parser = parse_iteration_limit)]
    pub iterations: Option<IterationLimit>,

    /// How each frame walks the pixel grid
    #[arg(long, value_enum, default_value_t = CliRenderStrategy::Sequential)]
    pub render_strategy: CliRenderStrategy,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliRenderStrategy {
    Sequential,
    ParallelRows,
}

impl From<CliRenderStrategy> for RenderStrategy {
    fn from(value: CliRenderStrategy) -> Self {
        match value {
            CliRenderStrategy::Sequential => RenderStrategy::Sequential,
            CliRenderStrategy::ParallelRows => RenderStrategy::ParallelRows,
        }
    }
}

fn parse_iteration_limit(value: &str) -> Result<IterationLimit, String> {
    value.parse().map_err(|err| format!("{err}"))
}

/// Session settings, fixed once the window opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub iteration_limit: IterationLimit,
    pub render_strategy: RenderStrategy,
    pub grid: PixelGrid,
}

impl Settings {
    /// Fills in anything the command line left out, prompting on `input` for the iteration limit.
    pub fn resolve<R: BufRead, W: Write>(
        args: &ExplorerArgs,
        input: &mut R,
        output: &mut W,
    ) -> Result<Self, PromptError> {
        let iteration_limit = match args.iterations {
            Some(limit) => {
                writeln!(output, "{ACCEPTED}")?;
                limit
            }
            None => prompt_iteration_limit(input, output)?,
        };

        Ok(Self {
            iteration_limit,
            render_strategy: args.render_strategy.into(),
            grid: PixelGrid::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::prompt::iteration_prompt::PROMPT;
    use std::io::Cursor;

    #[test]
    fn test_defaults_without_flags() {
        let args = ExplorerArgs::try_parse_from(["fractal_explorer"]).unwrap();

        assert_eq!(args.iterations, None);
        assert_eq!(args.render_strategy, CliRenderStrategy::Sequential);
    }

    #[test]
    fn test_parses_flags() {
        let args = ExplorerArgs::try_parse_from([
            "fractal_explorer",
            "--iterations",
            "120",
            "--render-strategy",
            "parallel-rows",
        ])
        .unwrap();

        assert_eq!(args.iterations, Some(IterationLimit::new(120).unwrap()));
        assert_eq!(
            RenderStrategy::from(args.render_strategy),
            RenderStrategy::ParallelRows
        );
    }

    #[test]
    fn test_rejects_invalid_iterations() {
        for value in ["2", "301", "lots"] {
            assert!(
                ExplorerArgs::try_parse_from(["fractal_explorer", "--iterations", value]).is_err(),
                "expected --iterations {value} to be rejected"
            );
        }
    }

    #[test]
    fn test_resolve_skips_prompt_when_flag_given() {
        let args = ExplorerArgs::try_parse_from(["fractal_explorer", "--iterations", "64"]).unwrap();
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();

        let settings = Settings::resolve(&args, &mut input, &mut output).unwrap();

        assert_eq!(settings.iteration_limit.get(), 64);
        assert_eq!(settings.render_strategy, RenderStrategy::Sequential);
        assert_eq!(settings.grid, PixelGrid::new(800, 800).unwrap());
        assert!(!String::from_utf8(output).unwrap().contains(PROMPT));
    }

    #[test]
    fn test_resolve_prompts_when_flag_missing() {
        let args = ExplorerArgs::try_parse_from(["fractal_explorer"]).unwrap();
        let mut input = Cursor::new(b"25\n".to_vec());
        let mut output = Vec::new();

        let settings = Settings::resolve(&args, &mut input, &mut output).unwrap();

        assert_eq!(settings.iteration_limit.get(), 25);
        assert!(String::from_utf8(output).unwrap().starts_with(PROMPT));
    }
}
