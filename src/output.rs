// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Writes finished images as binary PPM (P6) files.

use image::pnm::PNMEncoder;
use image::pnm::{PNMSubtype, SampleEncoding};
use image::ColorType;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use colorize::ImageBuffer;
use errors::RenderError;

/// Encodes `image` as a P6 pixmap with a maxval of 255 into `out`.
pub fn encode_ppm<W: Write>(out: W, image: &ImageBuffer) -> Result<(), RenderError> {
    let bytes = image.to_rgb_bytes();
    let mut encoder =
        PNMEncoder::new(out).with_subtype(PNMSubtype::Pixmap(SampleEncoding::Binary));
    encoder.encode(
        &bytes[..],
        image.width() as u32,
        image.height() as u32,
        ColorType::RGB(8),
    )?;
    Ok(())
}

/// Creates (or truncates) the file at `path` and writes `image` to it.
pub fn write_ppm<P: AsRef<Path>>(path: P, image: &ImageBuffer) -> Result<(), RenderError> {
    let path = path.as_ref();
    let output = File::create(path)?;
    encode_ppm(output, image)?;
    info!("Wrote {}x{} image to {}", image.width(), image.height(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use colorize::colorize;
    use samples::SampleGrid;
    use transfer::linear;

    #[test]
    fn ppm_is_header_then_raw_triples() {
        let samples = SampleGrid::from_values(2, 1, vec![0.0, 10.0]).unwrap();
        let image = colorize(&samples, 10, linear);
        let mut out: Vec<u8> = vec![];
        encode_ppm(&mut out, &image).unwrap();
        assert!(out.starts_with(b"P6"));
        let body = &out[out.len() - 6..];
        assert_eq!(body, &[0, 0, 0, 255, 255, 255]);
        let header = String::from_utf8_lossy(&out[..out.len() - 6]);
        let fields: Vec<&str> = header.split_whitespace().collect();
        assert_eq!(fields, vec!["P6", "2", "1", "255"]);
    }

    #[test]
    fn unwritable_paths_are_io_errors() {
        let image = colorize(&SampleGrid::new(1, 1), 10, linear);
        match write_ppm("/nonexistent-dir/for/sure/image.ppm", &image) {
            Err(RenderError::Io(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }
}
