// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Splits a row-major buffer into contiguous bands of whole rows and
//! hands each band to its own scoped thread.  Bands never overlap, so
//! the workers write without any locking.

extern crate crossbeam;

use std::ops::Range;

use errors::RenderError;

/// Number of rows each of `threads` workers receives out of `rows`.
/// The last band may be shorter.  There are never more bands than
/// rows, however many threads are asked for.
pub fn band_height(rows: usize, threads: usize) -> usize {
    let threads = threads.min(rows).max(1);
    (rows / threads + (rows % threads != 0) as usize).max(1)
}

/// Run `fill` over `rows` of a grid `width` cells wide.  `buffer` must
/// hold exactly those rows.  `fill` receives the absolute row range of
/// its band and the slice of `buffer` backing it.  With one thread
/// (or one row) no worker is spawned.
pub fn for_each_band<T, F>(
    buffer: &mut [T],
    width: usize,
    rows: Range<usize>,
    threads: usize,
    fill: F,
) -> Result<(), RenderError>
where
    T: Send,
    F: Fn(Range<usize>, &mut [T]) + Sync,
{
    if threads == 0 {
        return Err(RenderError::InvalidThreadCount);
    }
    let expected = width * (rows.end - rows.start);
    if buffer.len() != expected {
        return Err(RenderError::BufferSize {
            expected,
            actual: buffer.len(),
        });
    }
    if rows.start == rows.end || width == 0 {
        return Ok(());
    }

    let count = rows.end - rows.start;
    let per_band = band_height(count, threads);
    if threads == 1 || per_band >= count {
        fill(rows, buffer);
        return Ok(());
    }

    debug!(
        "Splitting rows {}..{} into bands of {} across {} threads",
        rows.start,
        rows.end,
        per_band,
        count / per_band + (count % per_band != 0) as usize
    );

    let fill = &fill;
    let start = rows.start;
    crossbeam::scope(|spawner| {
        for (i, band) in buffer.chunks_mut(per_band * width).enumerate() {
            let first = start + i * per_band;
            let last = first + band.len() / width;
            spawner.spawn(move |_| fill(first..last, band));
        }
    })
    .map_err(|_| RenderError::WorkerPanicked)
}
