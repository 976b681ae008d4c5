// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The plane sampler.
//!
//! Every pixel of the grid is the mean of four escape-time
//! evaluations taken half a step either side of the pixel's nominal
//! point, which softens the jagged edges a single sample per pixel
//! produces along the boundary of the set.
//!
//! Because the set is its own mirror image across the real axis, a
//! region that straddles the axis only needs one side of it sampled;
//! the rows on the other side are copies.  See [`Symmetry`] for which
//! rows are sampled and which are copied.
//!
//! [`Symmetry`]: ../planes/enum.Symmetry.html

use itertools::iproduct;
use std::convert::Infallible;
use std::ops::Range;

use bands::for_each_band;
use errors::RenderError;
use escape::escape_time;
use planes::{Pixel, PlaneMapper, Symmetry};

/// A `width × height` grid of averaged iteration counts, stored row
/// by row in a single buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleGrid {
    width: usize,
    height: usize,
    values: Vec<f32>,
}

impl SampleGrid {
    /// A grid of zero samples.
    pub fn new(width: usize, height: usize) -> SampleGrid {
        SampleGrid {
            width,
            height,
            values: vec![0.0; width * height],
        }
    }

    /// Wraps an existing row-major buffer of `width * height` samples.
    pub fn from_values(
        width: usize,
        height: usize,
        values: Vec<f32>,
    ) -> Result<SampleGrid, RenderError> {
        if values.len() != width * height {
            return Err(RenderError::BufferSize {
                expected: width * height,
                actual: values.len(),
            });
        }
        Ok(SampleGrid {
            width,
            height,
            values,
        })
    }

    /// Columns in the grid.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rows in the grid.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The sample at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.values[y * self.width + x]
    }

    /// One row of samples, left to right.
    pub fn row(&self, y: usize) -> &[f32] {
        &self.values[y * self.width..(y + 1) * self.width]
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> ::std::slice::Chunks<f32> {
        self.values.chunks(self.width)
    }

    /// The whole buffer in row-major order.
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    fn rows_mut(&mut self, rows: &Range<usize>) -> &mut [f32] {
        &mut self.values[rows.start * self.width..rows.end * self.width]
    }

    /// Overwrites row `to` with a copy of row `from`.
    fn copy_row(&mut self, from: usize, to: usize) {
        let w = self.width;
        self.values.copy_within(from * w..(from + 1) * w, to * w);
    }
}

/// The mean escape time of a pixel's four sub-samples.
pub fn supersample(plane: &PlaneMapper, pixel: &Pixel, max_iterations: u32) -> f32 {
    let total: u64 = plane
        .subsamples(pixel)
        .iter()
        .map(|c| u64::from(escape_time(*c, max_iterations)))
        .sum();
    (total as f64 / 4.0) as f32
}

/// Samples the rows in `rows` directly into `band`, which holds
/// exactly those rows.
fn sample_rows(plane: &PlaneMapper, max_iterations: u32, rows: Range<usize>, band: &mut [f32]) {
    let width = plane.width();
    let first = rows.start;
    for (row, column) in iproduct!(rows, 0..width) {
        band[(row - first) * width + column] = supersample(plane, &Pixel(column, row), max_iterations);
    }
}

/// Which rows are sampled and which rows are copied, and from where.
struct SamplePlan {
    direct: Vec<Range<usize>>,
    // (target rows, axis row): target row `y` copies row `2 * axis - y`
    mirrored: Option<(Range<usize>, usize)>,
}

impl SamplePlan {
    fn new(plane: &PlaneMapper) -> SamplePlan {
        let height = plane.height();
        match plane.symmetry() {
            Symmetry::Disjoint => SamplePlan {
                direct: vec![0..height],
                mirrored: None,
            },
            Symmetry::AboveLarger(axis) => SamplePlan {
                direct: vec![0..axis + 1],
                mirrored: Some((axis + 1..height, axis)),
            },
            Symmetry::BelowLarger(axis) => SamplePlan {
                direct: vec![0..axis + 1, 2 * axis + 1..height],
                mirrored: Some((axis + 1..2 * axis + 1, axis)),
            },
        }
    }

    /// Fills `grid`: `sample` is handed each directly sampled row
    /// range with the slice backing it, then the mirrored rows are
    /// copied from rows that are already filled.
    fn apply<E, F>(self, grid: &mut SampleGrid, mut sample: F) -> Result<(), E>
    where
        F: FnMut(Range<usize>, &mut [f32]) -> Result<(), E>,
    {
        for rows in self.direct {
            let band = grid.rows_mut(&rows);
            sample(rows, band)?;
        }
        if let Some((targets, axis)) = self.mirrored {
            for y in targets {
                grid.copy_row(2 * axis - y, y);
            }
        }
        Ok(())
    }
}

/// Produces the sample grid for `plane` on the calling thread.
pub fn sample_plane(plane: &PlaneMapper, max_iterations: u32) -> SampleGrid {
    let mut grid = SampleGrid::new(plane.width(), plane.height());
    let filled = SamplePlan::new(plane).apply(&mut grid, |rows, band| -> Result<(), Infallible> {
        sample_rows(plane, max_iterations, rows, band);
        Ok(())
    });
    match filled {
        Ok(()) => grid,
        Err(never) => match never {},
    }
}

/// Produces the same grid as [`sample_plane`], splitting the sampled
/// rows into bands across `threads` workers.
///
/// [`sample_plane`]: fn.sample_plane.html
pub fn sample_plane_threaded(
    plane: &PlaneMapper,
    max_iterations: u32,
    threads: usize,
) -> Result<SampleGrid, RenderError> {
    let width = plane.width();
    let mut grid = SampleGrid::new(width, plane.height());
    debug!(
        "Sampling {}x{} grid on {} threads, {:?}",
        width,
        plane.height(),
        threads,
        plane.symmetry()
    );
    SamplePlan::new(plane).apply(&mut grid, |rows, band| {
        for_each_band(band, width, rows, threads, |rows, band| {
            sample_rows(plane, max_iterations, rows, band)
        })
    })?;
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use complex::Complex;

    fn mapper(w: u32, h: u32, tl: (f32, f32), br: (f32, f32)) -> PlaneMapper {
        PlaneMapper::new(w, h, Complex::new(tl.0, tl.1), Complex::new(br.0, br.1)).unwrap()
    }

    // Every row sampled, no mirroring at all.
    fn sample_everything(plane: &PlaneMapper, max_iterations: u32) -> SampleGrid {
        let mut values = vec![0.0; plane.len()];
        sample_rows(plane, max_iterations, 0..plane.height(), &mut values);
        SampleGrid::from_values(plane.width(), plane.height(), values).unwrap()
    }

    #[test]
    fn from_values_checks_the_shape() {
        assert!(SampleGrid::from_values(3, 2, vec![0.0; 6]).is_ok());
        match SampleGrid::from_values(3, 2, vec![0.0; 5]) {
            Err(RenderError::BufferSize {
                expected: 6,
                actual: 5,
            }) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn grid_has_requested_shape() {
        let grid = sample_plane(&mapper(30, 20, (-2.0, 1.0), (1.0, -1.0)), 50);
        assert_eq!(grid.width(), 30);
        assert_eq!(grid.height(), 20);
        assert_eq!(grid.rows().count(), 20);
        assert!(grid.as_slice().iter().all(|&v| v >= 0.0 && v <= 50.0));
    }

    #[test]
    fn supersample_averages_four_points() {
        // the lower two sub-samples sit inside the main cardioid, the
        // upper two are past the threshold before the first iteration
        let plane = mapper(1, 1, (-0.25, 1.5), (-0.05, -1.1));
        let s = plane.subsamples(&Pixel(0, 0));
        let expect: u32 = s.iter().map(|c| escape_time(*c, 100)).sum();
        assert_eq!(expect, 200);
        assert_eq!(supersample(&plane, &Pixel(0, 0), 100), 50.0);
    }

    #[test]
    fn averages_are_not_rounded() {
        let plane = mapper(1, 1, (-0.25, 1.5), (-0.05, -1.1));
        assert_eq!(supersample(&plane, &Pixel(0, 0), 101), 50.5);
    }

    #[test]
    fn disjoint_regions_are_sampled_directly() {
        let above = mapper(24, 16, (-2.0, 1.2), (0.6, 0.1));
        assert_eq!(above.symmetry(), Symmetry::Disjoint);
        assert_eq!(sample_plane(&above, 80), sample_everything(&above, 80));

        let below = mapper(24, 16, (-2.0, -0.1), (0.6, -1.2));
        assert_eq!(below.symmetry(), Symmetry::Disjoint);
        assert_eq!(sample_plane(&below, 80), sample_everything(&below, 80));
    }

    #[test]
    fn mirrored_rows_reflect_the_axis_row() {
        let plane = mapper(300, 200, (-2.0, 1.0), (1.0, -1.0));
        let axis = match plane.symmetry() {
            Symmetry::AboveLarger(axis) => axis,
            other => panic!("unexpected {:?}", other),
        };
        let grid = sample_plane(&plane, 100);
        for k in 1..200 - axis {
            assert_eq!(grid.row(axis + k), grid.row(axis - k), "k = {}", k);
        }
    }

    #[test]
    fn exact_axis_mirror_matches_direct_sampling() {
        // steps of 0.25 land a row exactly on the axis, so reflections
        // are exact conjugates
        let plane = mapper(16, 8, (-2.0, 1.0), (1.0, -1.0));
        assert_eq!(plane.symmetry(), Symmetry::AboveLarger(4));
        assert_eq!(sample_plane(&plane, 200), sample_everything(&plane, 200));
    }

    #[test]
    fn below_larger_covers_every_row() {
        let plane = mapper(16, 8, (-2.0, 0.5), (1.0, -1.5));
        assert_eq!(plane.symmetry(), Symmetry::BelowLarger(2));
        let grid = sample_plane(&plane, 200);
        assert_eq!(grid, sample_everything(&plane, 200));
        assert_eq!(grid.row(3), grid.row(1));
        assert_eq!(grid.row(4), grid.row(0));
    }

    #[test]
    fn axis_on_the_first_row() {
        let plane = mapper(8, 8, (-2.0, 0.01), (1.0, -1.0));
        assert_eq!(plane.symmetry(), Symmetry::BelowLarger(0));
        let grid = sample_plane(&plane, 50);
        assert_eq!(grid, sample_everything(&plane, 50));
    }

    #[test]
    fn threaded_sampling_matches() {
        for &(tl, br) in &[
            ((-2.0, 1.0), (1.0, -1.0)),
            ((-2.0, 0.5), (1.0, -1.5)),
            ((-0.8, 0.3), (-0.6, 0.1)),
        ] {
            let plane = mapper(40, 30, tl, br);
            let single = sample_plane(&plane, 120);
            for &threads in &[1, 2, 3, 8] {
                assert_eq!(sample_plane_threaded(&plane, 120, threads).unwrap(), single);
            }
        }
    }
}
