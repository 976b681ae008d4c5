// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong between a configuration and a written
//! image.  The first five variants are configuration problems and are
//! reported before any buffer is allocated.

use std::io;

/// The renderer's error type.
#[derive(Debug, Fail)]
pub enum RenderError {
    /// The image would have no pixels.
    #[fail(display = "Image dimensions must be non-zero, got {}x{}", width, height)]
    InvalidDimensions {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// Every sample would trivially report zero iterations.
    #[fail(display = "The iteration bound must be greater than zero")]
    InvalidIterationBound,

    /// The complex rectangle has no width or no height, so no step
    /// size can be computed.
    #[fail(display = "The region has zero (or non-finite) width or height")]
    DegenerateRegion,

    /// The top-left corner is below the bottom-right corner.
    #[fail(display = "The top left corner is not above the bottom right corner")]
    InvertedRegion,

    /// Rendering needs at least one worker.
    #[fail(display = "Thread count must be at least 1")]
    InvalidThreadCount,

    /// A buffer does not hold exactly the cells its shape calls for.
    #[fail(display = "Buffer holds {} cells, expected {}", actual, expected)]
    BufferSize {
        /// Cells the shape calls for.
        expected: usize,
        /// Cells the buffer holds.
        actual: usize,
    },

    /// A render worker panicked before finishing its band.
    #[fail(display = "A render worker thread panicked")]
    WorkerPanicked,

    /// The image could not be written.
    #[fail(display = "Could not write image: {}", _0)]
    Io(#[cause] io::Error),
}

impl From<io::Error> for RenderError {
    fn from(e: io::Error) -> Self {
        RenderError::Io(e)
    }
}
