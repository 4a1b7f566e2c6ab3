mod direction;
mod error;
mod grid;
mod image_io;
mod observer;
mod pattern;
mod propagator;
mod reconstruct;
mod rules;
mod solve;
mod table;
#[cfg(test)]
mod test_utils;
mod wave;

pub use error::{Error, Result};
pub use grid::{Symbol, SymbolGrid};
pub use image_io::Image;
pub use pattern::{extract_patterns, Pattern, PatternTable};
pub use rules::{build_rules, RuleTable};
pub use solve::{solve, Config};

/// Decodes `image` into a symbol grid, solves it per `cfg`, and re-encodes
/// the result back into an image using the palette recovered while decoding.
///
/// This is the thin image front end described as an external collaborator
/// of the core solver: it owns no solving logic itself, just the pixel
/// packing/unpacking around a call to [`solve`].
pub fn generate(image: Image, cfg: Config) -> Result<Image> {
    let (example, palette) = image_io::grid_from_image(&image)?;
    let output = solve(&example, cfg)?;
    Ok(image_io::image_from_grid(&output, &palette))
}
