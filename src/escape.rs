// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time evaluator.
//!
//! A point `c` on the complex plane belongs to the Mandelbrot set if
//! repeatedly squaring and adding `c`, starting from zero, never
//! carries the orbit further than 2 from the origin.  We can't iterate
//! forever, so we iterate up to some bound and report how long the
//! orbit stayed inside; that count is the "velocity" the renderer
//! turns into color.
//!
//! Two large regions of the set, the main cardioid and the period-2
//! bulb to its left, have closed-form membership tests.  Points inside
//! them would otherwise burn the entire iteration budget, so we check
//! them first.

use complex::{add, multiply, squared_magnitude, Complex};

/// An orbit that leaves the disc of this radius never returns.
pub const THRESHOLD: f32 = 2.0;

const THRESHOLD_SQR: f32 = THRESHOLD * THRESHOLD;
const D4: f32 = 1.0 / 4.0;
const D16: f32 = D4 / 4.0;

/// True if `c` lies inside the main cardioid.
#[inline]
pub fn in_main_cardioid(c: Complex) -> bool {
    let x = c.re - D4;
    let y = c.im * c.im;
    let q = x * x + y;
    q * (q + x) < D4 * y
}

/// True if `c` lies inside the period-2 bulb centered on -1.
#[inline]
pub fn in_period2_bulb(c: Complex) -> bool {
    let x = c.re + 1.0;
    x * x + c.im * c.im < D16
}

/// Returns the number of iterations `c`'s orbit survived inside the
/// escape threshold, capped at `max_iterations`.  A point whose first
/// iterate is already outside (|c| > 2) returns 0; a point that never
/// escapes, or that is known to be inside the set, returns
/// `max_iterations`.
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    if in_main_cardioid(c) || in_period2_bulb(c) {
        return max_iterations;
    }

    let mut z = Complex::new(0.0, 0.0);
    for i in 0..max_iterations {
        z = add(multiply(z, z), c);
        if squared_magnitude(z) > THRESHOLD_SQR {
            return i;
        }
    }
    max_iterations
}
