#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set is the set of points `c` on the complex plane
//! for which repeatedly squaring a number and adding `c`, starting
//! from zero, never runs off to infinity.  Points outside the set run
//! off at different speeds, and the number of iterations each one
//! survives before leaving a disc of radius 2 is the "escape time"
//! used to color the image.
//!
//! A render goes: a [`RenderConfig`] names a region and a resolution;
//! the [`PlaneMapper`] turns that into a grid of points; the sampler
//! evaluates four points per pixel and averages them into a
//! [`SampleGrid`]; a transfer function turns each average into a
//! [`Color`], producing an [`ImageBuffer`]; and the image is written
//! out as a binary PPM.
//!
//! [`RenderConfig`]: config/struct.RenderConfig.html
//! [`PlaneMapper`]: planes/struct.PlaneMapper.html
//! [`SampleGrid`]: samples/struct.SampleGrid.html
//! [`Color`]: transfer/struct.Color.html
//! [`ImageBuffer`]: colorize/struct.ImageBuffer.html

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate image;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;

pub mod bands;
pub mod colorize;
pub mod complex;
pub mod config;
pub mod errors;
pub mod escape;
pub mod output;
pub mod planes;
pub mod samples;
pub mod transfer;

pub use colorize::{colorize, colorize_threaded, ImageBuffer};
pub use complex::Complex;
pub use config::RenderConfig;
pub use errors::RenderError;
pub use escape::escape_time;
pub use output::write_ppm;
pub use planes::PlaneMapper;
pub use samples::{sample_plane, sample_plane_threaded, SampleGrid};
pub use transfer::{Color, TransferId};

use std::time::Instant;

/// Validates `config` and produces its image.  Nothing is written to
/// disk; see [`write_ppm`](output/fn.write_ppm.html).
pub fn render(config: &RenderConfig) -> Result<ImageBuffer, RenderError> {
    let plane = config.plane()?;
    info!(
        "Rendering {}x{} from {} to {}, {} iterations, {} transfer",
        config.width,
        config.height,
        config.top_left,
        config.bottom_right,
        config.max_iterations,
        config.transfer
    );

    let started = Instant::now();
    let samples = if config.threads > 1 {
        sample_plane_threaded(&plane, config.max_iterations, config.threads)?
    } else {
        sample_plane(&plane, config.max_iterations)
    };
    debug!("Sampled in {:?}", started.elapsed());

    let transfer = config.transfer.function();
    let image = if config.threads > 1 {
        colorize_threaded(&samples, config.max_iterations, transfer, config.threads)?
    } else {
        colorize(&samples, config.max_iterations, transfer)
    };
    debug!("Rendered in {:?}", started.elapsed());
    Ok(image)
}
