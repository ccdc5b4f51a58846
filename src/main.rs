use std::io;

use clap::Parser;
use env_logger::Env;

use fractal_explorer::{
    ExplorerArgs, PixelsPresenterFactory, RunGuiCommand, Settings, write_usage_hint,
    write_welcome,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = ExplorerArgs::parse();
    write_welcome(&mut io::stdout())?;
    let settings = Settings::resolve(&args, &mut io::stdin().lock(), &mut io::stdout())?;
    write_usage_hint(&mut io::stdout())?;

    log::info!(
        "starting with {} iterations on a {}x{} grid, {} rendering",
        settings.iteration_limit,
        settings.grid.width(),
        settings.grid.height(),
        settings.render_strategy.display_name()
    );

    let command = RunGuiCommand::new(PixelsPresenterFactory::new(), settings);
    command.execute()?;

    Ok(())
}
