use rustc_hash::FxHashMap;

use crate::error::Result;
use crate::grid::{Symbol, SymbolGrid};

/// An `image` crate RGB texture, the shape both the CLI and the GUI-less
/// host in this crate read example textures from and write results to.
pub type Image = image::ImageBuffer<image::Rgb<u8>, Vec<u8>>;

/// Packs an `Rgb<u8>` pixel into a [`Symbol`], recovering a palette of every
/// distinct color seen along the way.
#[derive(Debug, Default)]
pub struct Palette {
    color_to_symbol: FxHashMap<[u8; 3], Symbol>,
    symbol_to_color: FxHashMap<Symbol, [u8; 3]>,
}

impl Palette {
    fn pack(&mut self, pixel: image::Rgb<u8>) -> Symbol {
        let rgb = pixel.0;
        if let Some(&symbol) = self.color_to_symbol.get(&rgb) {
            return symbol;
        }
        let symbol = (rgb[0] as u32) << 16 | (rgb[1] as u32) << 8 | rgb[2] as u32;
        self.color_to_symbol.insert(rgb, symbol);
        self.symbol_to_color.insert(symbol, rgb);
        symbol
    }

    /// Looks up the color a symbol packs to. Infallible for any symbol that
    /// descends from a call to [`Palette::pack`], which every symbol in a
    /// solver output does, since the solver only ever emits symbols that
    /// were present in the example it was given.
    fn unpack(&self, symbol: Symbol) -> image::Rgb<u8> {
        let rgb = self
            .symbol_to_color
            .get(&symbol)
            .copied()
            .unwrap_or([0, 0, 0]);
        image::Rgb(rgb)
    }
}

/// Packs an RGB image into a [`SymbolGrid`], returning the grid plus the
/// palette needed to unpack a solved grid back into pixels.
pub fn grid_from_image(image: &Image) -> Result<(SymbolGrid, Palette)> {
    let (width, height) = image.dimensions();
    let mut palette = Palette::default();
    let mut symbols = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            symbols.push(palette.pack(*image.get_pixel(x, y)));
        }
    }
    let grid = SymbolGrid::new(height as usize, width as usize, symbols)?;
    Ok((grid, palette))
}

/// Unpacks a solved [`SymbolGrid`] back into pixels using `palette`.
pub fn image_from_grid(grid: &SymbolGrid, palette: &Palette) -> Image {
    let mut image = Image::new(grid.cols() as u32, grid.rows() as u32);
    for y in 0..grid.rows() {
        for x in 0..grid.cols() {
            let symbol = grid.get(x, y).expect("in-bounds by construction");
            image.put_pixel(x as u32, y as u32, palette.unpack(symbol));
        }
    }
    image
}
