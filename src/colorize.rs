// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turns a sample grid into pixels.

use bands::for_each_band;
use errors::RenderError;
use samples::SampleGrid;
use transfer::{Color, TransferFn};

/// A `width × height` grid of colors, stored row by row: row 0 left
/// to right, then row 1, and so on.  That is also the order the
/// pixels are written out in.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Columns in the image.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rows in the image.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The pixel at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Color {
        self.pixels[y * self.width + x]
    }

    /// Every pixel in row-major order.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> ::std::slice::Chunks<Color> {
        self.pixels.chunks(self.width)
    }

    /// The raw `R, G, B` bytes of every pixel in row-major order.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for c in &self.pixels {
            bytes.extend_from_slice(&[c.0, c.1, c.2]);
        }
        bytes
    }
}

// Averaged samples fall between counts; snap to the nearest one.
#[inline]
fn count(sample: f32) -> u32 {
    sample.round() as u32
}

fn colorize_band(samples: &[f32], pixels: &mut [Color], max_iterations: u32, transfer: TransferFn) {
    for (pixel, sample) in pixels.iter_mut().zip(samples) {
        *pixel = transfer(count(*sample), max_iterations);
    }
}

/// Applies `transfer` to every sample.
pub fn colorize(samples: &SampleGrid, max_iterations: u32, transfer: TransferFn) -> ImageBuffer {
    let mut pixels = vec![Color::BLACK; samples.width() * samples.height()];
    colorize_band(samples.as_slice(), &mut pixels, max_iterations, transfer);
    ImageBuffer {
        width: samples.width(),
        height: samples.height(),
        pixels,
    }
}

/// Applies `transfer` to every sample, with the rows split across
/// `threads` workers.
pub fn colorize_threaded(
    samples: &SampleGrid,
    max_iterations: u32,
    transfer: TransferFn,
    threads: usize,
) -> Result<ImageBuffer, RenderError> {
    let (width, height) = (samples.width(), samples.height());
    let mut pixels = vec![Color::BLACK; width * height];
    for_each_band(&mut pixels, width, 0..height, threads, |rows, band| {
        let source = &samples.as_slice()[rows.start * width..rows.end * width];
        colorize_band(source, band, max_iterations, transfer)
    })?;
    Ok(ImageBuffer {
        width,
        height,
        pixels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use transfer::{linear, maximum, minimum};

    fn grid(width: usize, height: usize, values: &[f32]) -> SampleGrid {
        SampleGrid::from_values(width, height, values.to_vec()).unwrap()
    }

    #[test]
    fn all_zero_samples_are_black() {
        let samples = SampleGrid::new(7, 5);
        let image = colorize(&samples, 100, linear);
        assert_eq!(image.width(), 7);
        assert_eq!(image.height(), 5);
        assert!(image.pixels().iter().all(|&p| p == Color::BLACK));
    }

    #[test]
    fn pixels_keep_their_position() {
        let samples = grid(3, 2, &[0.0, 50.0, 100.0, 100.0, 0.0, 25.0]);
        let image = colorize(&samples, 100, linear);
        assert_eq!(image.get(0, 0), Color::BLACK);
        assert_eq!(image.get(2, 0), Color::WHITE);
        assert_eq!(image.get(0, 1), Color::WHITE);
        assert_eq!(image.get(2, 1), Color::gray(64));
        assert_eq!(image.rows().count(), 2);
        assert_eq!(image.rows().nth(1).unwrap()[0], Color::WHITE);
    }

    #[test]
    fn averages_round_to_the_nearest_count() {
        let samples = grid(3, 1, &[99.75, 99.25, 0.25]);
        let image = colorize(&samples, 100, maximum);
        assert_eq!(image.get(0, 0), Color::WHITE);
        assert_eq!(image.get(1, 0), Color::BLACK);
        assert_eq!(colorize(&samples, 100, minimum).get(2, 0), Color::BLACK);
    }

    #[test]
    fn bytes_are_row_major_triples() {
        let samples = grid(2, 2, &[0.0, 100.0, 0.0, 0.0]);
        let bytes = colorize(&samples, 100, linear).to_rgb_bytes();
        assert_eq!(bytes.len(), 12);
        assert_eq!(&bytes[..6], &[0, 0, 0, 255, 255, 255]);
        assert!(bytes[6..].iter().all(|&b| b == 0));
    }

    #[test]
    fn threaded_colorizing_matches() {
        let values: Vec<f32> = (0..11 * 9).map(|v| (v % 40) as f32).collect();
        let samples = grid(11, 9, &values);
        let single = colorize(&samples, 40, linear);
        for &threads in &[1, 2, 4, 9, 20] {
            assert_eq!(colorize_threaded(&samples, 40, linear, threads).unwrap(), single);
        }
    }
}
