use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_limit::IterationLimit;

pub const PALETTE_STOPS: [Colour; 6] = [
    Colour::new(15, 10, 30),   // almost black
    Colour::new(128, 0, 128),  // deep purple
    Colour::new(255, 0, 0),    // red
    Colour::new(255, 128, 0),  // orange
    Colour::new(220, 230, 23), // soft yellow
    Colour::new(0, 3, 10),     // darkness
];

fn lerp_channel(from: u8, to: u8, frac: f64) -> u8 {
    // truncation, not rounding
    (from as f64 + (to as f64 - from as f64) * frac) as u8
}

/// Picks a colour for `t ∈ [0, 1]` by interpolating linearly between adjacent stops.
#[must_use]
pub fn pick_colour(t: f64, stops: &[Colour]) -> Colour {
    let (Some(&first), Some(&last)) = (stops.first(), stops.last()) else {
        return Colour::default();
    };

    if t <= 0.0 {
        return first;
    }
    if t >= 1.0 {
        return last;
    }

    let scaled_t = t * (stops.len() - 1) as f64;
    let i = scaled_t as usize;
    let frac = scaled_t - i as f64;

    let from = stops[i];
    let to = stops[i + 1];

    Colour {
        r: lerp_channel(from.r, to.r, frac),
        g: lerp_channel(from.g, to.g, frac),
        b: lerp_channel(from.b, to.b, frac),
    }
}

#[must_use]
pub fn colour_for(iteration: u32, max_iterations: u32) -> Colour {
    let t = iteration as f64 / max_iterations as f64;

    pick_colour(t, &PALETTE_STOPS)
}

/// Escape counts coloured along the six-stop palette, interior points ending on the last stop.
#[derive(Debug)]
pub struct PaletteGradient {
    max_iterations: IterationLimit,
}

impl ColourMap<u32> for PaletteGradient {
    fn map(&self, iterations: u32) -> Colour {
        colour_for(iterations, self.max_iterations.get())
    }

    fn display_name(&self) -> &str {
        "Palette gradient"
    }
}

impl PaletteGradient {
    #[must_use]
    pub fn new(max_iterations: IterationLimit) -> Self {
        Self { max_iterations }
    }
}
