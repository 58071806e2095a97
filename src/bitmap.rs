use std::io::Cursor;
use std::ops::{ Index, IndexMut };
use std::path::Path;

use image::{ ImageFormat, RgbImage };

use crate::color::Color;
use crate::error::{ Result, TracerError };

/// A bitmap of rendered pixels.
///
/// Stores one `Color` per pixel in a flattened, row-major vector, top row
/// first. The dimensions are fixed at construction; pixel values can be
/// changed in place.
///
/// Encoding to a file format is delegated to the `image` crate. The bitmap
/// hands it a buffer of 3 bytes per pixel (see `to_rgb_bytes`).
#[derive(Clone, Default, Debug, PartialEq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Bitmap {
    /// Creates a black bitmap of `width * height` pixels.
    pub fn new(width: usize, height: usize) -> Bitmap {
        Bitmap {
            width,
            height,
            pixels: vec![Color::black(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    fn offset(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(TracerError::PixelOutOfRange {
                x, y, width: self.width, height: self.height,
            });
        }

        Ok(y * self.width + x)
    }

    /// Writes a color at column `x`, row `y` (both zero-indexed).
    ///
    /// # Examples
    ///
    /// ```
    /// # use visibility_tracer::color::Color;
    /// # use visibility_tracer::bitmap::Bitmap;
    /// let purple = Color::rgb(1.0, 0.0, 1.0);
    /// let mut bitmap = Bitmap::new(8, 8);
    /// bitmap.set_pixel(4, 2, purple).unwrap();
    /// assert_eq!(bitmap.get_pixel(4, 2).unwrap(), purple);
    /// ```
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) -> Result<()> {
        let i = self.offset(x, y)?;
        self.pixels[i] = color;

        Ok(())
    }

    /// Reads the color at column `x`, row `y`.
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<Color> {
        Ok(self.pixels[self.offset(x, y)?])
    }

    /// The pixel buffer as R, G, B bytes per pixel, top row first.
    ///
    /// Each channel is scaled by 255 and clamped into `0..=255`.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_bytes()).collect()
    }

    fn to_image(&self) -> Result<RgbImage> {
        let invalid = || TracerError::InvalidDimensions {
            width: self.width,
            height: self.height,
        };

        if self.width == 0 || self.height == 0 {
            return Err(invalid());
        }

        let width = u32::try_from(self.width).map_err(|_| invalid())?;
        let height = u32::try_from(self.height).map_err(|_| invalid())?;

        RgbImage::from_raw(width, height, self.to_rgb_bytes()).ok_or_else(invalid)
    }

    /// Encodes the bitmap as an in-memory PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut out = Cursor::new(Vec::new());
        self.to_image()?.write_to(&mut out, ImageFormat::Png)?;

        Ok(out.into_inner())
    }

    /// Saves the bitmap to a PNG file.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.to_image()?.save_with_format(path, ImageFormat::Png)?;
        log::info!("saved {}x{} bitmap to {}", self.width, self.height, path.display());

        Ok(())
    }
}

/// Unchecked access by `(x, y)`. Panics when out of range, like slice
/// indexing.
impl Index<(usize, usize)> for Bitmap {
    type Output = Color;

    fn index(&self, (x, y): (usize, usize)) -> &Color {
        assert!(x < self.width && y < self.height, "pixel ({}, {}) out of range", x, y);
        &self.pixels[y * self.width + x]
    }
}

impl IndexMut<(usize, usize)> for Bitmap {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Color {
        assert!(x < self.width && y < self.height, "pixel ({}, {}) out of range", x, y);
        &mut self.pixels[y * self.width + x]
    }
}

#[test]
fn new_bitmap_is_black() {
    let b = Bitmap::new(4, 3);

    assert_eq!(b.width(), 4);
    assert_eq!(b.height(), 3);
    assert_eq!(b.pixels().len(), 12);
    assert_eq!(b.get_pixel(2, 2).unwrap(), Color::black());
}

#[test]
fn set_and_get_pixel() {
    let mut b = Bitmap::new(4, 4);
    b.set_pixel(2, 1, Color::rgb(1.0, 0.0, 1.0)).unwrap();

    assert_eq!(b.get_pixel(2, 1).unwrap(), Color::rgb(1.0, 0.0, 1.0));
    assert_eq!(b[(2, 1)], Color::rgb(1.0, 0.0, 1.0));
    assert_eq!(b.pixels()[4 + 2], Color::rgb(1.0, 0.0, 1.0));

    b[(0, 3)] = Color::red();
    assert_eq!(b.get_pixel(0, 3).unwrap(), Color::red());
}

#[test]
fn out_of_range_pixels_are_errors() {
    let mut b = Bitmap::new(4, 4);

    assert!(matches!(b.get_pixel(4, 0), Err(TracerError::PixelOutOfRange { .. })));
    assert!(matches!(b.set_pixel(0, 4, Color::red()), Err(TracerError::PixelOutOfRange { .. })));
}

#[test]
fn clone_is_deep() {
    let mut a = Bitmap::new(2, 2);
    let b = a.clone();
    a[(1, 1)] = Color::red();

    assert_eq!(b[(1, 1)], Color::black());
}

#[test]
fn rgb_bytes_layout() {
    let mut b = Bitmap::new(2, 2);
    b[(1, 0)] = Color::rgb(1.0, 0.5, 0.0);
    b[(0, 1)] = Color::rgb(2.0, -1.0, 1.0);

    assert_eq!(b.to_rgb_bytes(), vec![
        0, 0, 0,     255, 127, 0,
        255, 0, 255, 0, 0, 0,
    ]);
}

#[test]
fn encodes_png_signature() {
    let mut b = Bitmap::new(3, 2);
    b[(1, 1)] = Color::red();
    let png = b.encode_png().unwrap();

    assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
}

#[test]
fn empty_bitmap_cannot_be_encoded() {
    let b = Bitmap::new(0, 5);

    assert!(matches!(b.encode_png(), Err(TracerError::InvalidDimensions { .. })));
}
