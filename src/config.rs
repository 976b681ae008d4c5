// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The description of a single render.

use std::path::PathBuf;

use complex::Complex;
use errors::RenderError;
use planes::PlaneMapper;
use transfer::TransferId;

/// Everything a render needs.  Build one, call [`validate`], and
/// hand it to [`render`](../fn.render.html); the renderer only ever
/// borrows it.
///
/// [`validate`]: #method.validate
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Top-left corner of the region on the complex plane.
    pub top_left: Complex,
    /// Bottom-right corner of the region on the complex plane.
    pub bottom_right: Complex,
    /// Iteration bound for every sample.
    pub max_iterations: u32,
    /// How iteration counts become colors.
    pub transfer: TransferId,
    /// Where the image is written.
    pub output: PathBuf,
    /// Worker threads for sampling and colorizing.
    pub threads: usize,
}

impl Default for RenderConfig {
    /// The whole set at 900x600.
    fn default() -> Self {
        RenderConfig {
            width: 900,
            height: 600,
            top_left: Complex::new(-2.0, 1.0),
            bottom_right: Complex::new(1.0, -1.0),
            max_iterations: 500,
            transfer: TransferId::Linear,
            output: PathBuf::from("image.ppm"),
            threads: 1,
        }
    }
}

impl RenderConfig {
    /// Rejects configurations the sampler cannot work with, before
    /// any memory is allocated for them.
    pub fn validate(&self) -> Result<(), RenderError> {
        self.plane().map(|_| ())
    }

    /// The validated mapping between the pixel grid and the region.
    pub fn plane(&self) -> Result<PlaneMapper, RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.max_iterations == 0 {
            return Err(RenderError::InvalidIterationBound);
        }
        if self.threads == 0 {
            return Err(RenderError::InvalidThreadCount);
        }
        PlaneMapper::new(self.width, self.height, self.top_left, self.bottom_right)
    }
}
