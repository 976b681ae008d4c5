// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Single-precision complex arithmetic.  The renderer never needs
//! more than `f32`; deep zooms are not something it attempts.

use num;

/// A point on the complex plane.  The real part is the x-component
/// and the imaginary part the y-component.
pub type Complex = num::Complex<f32>;

/// Component-wise sum.
#[inline]
pub fn add(a: Complex, b: Complex) -> Complex {
    a + b
}

/// Standard complex product.
#[inline]
pub fn multiply(a: Complex, b: Complex) -> Complex {
    a * b
}

/// `re² + im²`.  Only ever compared against a squared threshold, so
/// the square root is never taken.
#[inline]
pub fn squared_magnitude(a: Complex) -> f32 {
    a.norm_sqr()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_commutative() {
        let a = Complex::new(1.5, -0.25);
        let b = Complex::new(-3.0, 2.0);
        assert_eq!(add(a, b), add(b, a));
        assert_eq!(add(a, b), Complex::new(-1.5, 1.75));
    }

    #[test]
    fn multiply_is_commutative() {
        let a = Complex::new(1.5, -0.25);
        let b = Complex::new(-3.0, 2.0);
        assert_eq!(multiply(a, b), multiply(b, a));
    }

    #[test]
    fn multiply_follows_i_squared() {
        let i = Complex::new(0.0, 1.0);
        assert_eq!(multiply(i, i), Complex::new(-1.0, 0.0));
        assert_eq!(
            multiply(Complex::new(1.0, 2.0), Complex::new(3.0, 4.0)),
            Complex::new(-5.0, 10.0)
        );
    }

    #[test]
    fn squared_magnitude_skips_the_root() {
        assert_eq!(squared_magnitude(Complex::new(3.0, 4.0)), 25.0);
        assert_eq!(squared_magnitude(Complex::new(0.0, 0.0)), 0.0);
    }
}
