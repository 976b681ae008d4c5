// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Transfer functions map an iteration count (and the bound it was
//! counted against) to a color.  Each one is a plain function of type
//! [`TransferFn`]; [`TransferId`] names them so they can be picked
//! from the command line.
//!
//! [`TransferFn`]: type.TransferFn.html
//! [`TransferId`]: enum.TransferId.html

use num::clamp;
use std::fmt;
use std::str::FromStr;

/// An 8-bit red, green, blue triple.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// All channels off.
    pub const BLACK: Color = Color(0, 0, 0);
    /// All channels saturated.
    pub const WHITE: Color = Color(255, 255, 255);

    /// A gray with every channel set to `v`.
    pub fn gray(v: u8) -> Color {
        Color(v, v, v)
    }
}

/// The signature every transfer function shares.
pub type TransferFn = fn(u32, u32) -> Color;

/// `round(255 * numerator / denominator)`, saturated to a channel.  A
/// zero denominator saturates too.
fn channel(numerator: u32, denominator: u32) -> u8 {
    if denominator == 0 {
        return 255;
    }
    let v = (255.0 * f64::from(numerator) / f64::from(denominator)).round();
    clamp(v, 0.0, 255.0) as u8
}

/// Grayscale ramp from black at 0 iterations to white at the bound.
pub fn linear(iterations: u32, max_iterations: u32) -> Color {
    Color::gray(channel(iterations, max_iterations))
}

/// White for points that never escaped, black otherwise.  Shows set
/// membership.
pub fn maximum(iterations: u32, max_iterations: u32) -> Color {
    if iterations == max_iterations {
        Color::WHITE
    } else {
        Color::BLACK
    }
}

/// White for points that survived at least one iteration, black for
/// those that escaped at once.
pub fn minimum(iterations: u32, _max_iterations: u32) -> Color {
    if iterations > 0 {
        Color::WHITE
    } else {
        Color::BLACK
    }
}

/// A yellow-green rendition: red rises with the count, green with its
/// inverse, which saturates everywhere but right at the bound.
pub fn confuse(iterations: u32, max_iterations: u32) -> Color {
    Color(
        channel(iterations, max_iterations),
        channel(max_iterations, iterations),
        0,
    )
}

/// Names the available transfer functions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TransferId {
    /// See [`linear`](fn.linear.html).
    Linear,
    /// See [`maximum`](fn.maximum.html).
    Maximum,
    /// See [`minimum`](fn.minimum.html).
    Minimum,
    /// See [`confuse`](fn.confuse.html).
    Confuse,
}

impl TransferId {
    /// Every transfer function, in the order they are listed in help.
    pub const ALL: [TransferId; 4] = [
        TransferId::Linear,
        TransferId::Maximum,
        TransferId::Minimum,
        TransferId::Confuse,
    ];

    /// The name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            TransferId::Linear => "linear",
            TransferId::Maximum => "maximum",
            TransferId::Minimum => "minimum",
            TransferId::Confuse => "confuse",
        }
    }

    /// The function this id names.
    pub fn function(self) -> TransferFn {
        match self {
            TransferId::Linear => linear,
            TransferId::Maximum => maximum,
            TransferId::Minimum => minimum,
            TransferId::Confuse => confuse,
        }
    }

    /// Applies the named function.
    pub fn apply(self, iterations: u32, max_iterations: u32) -> Color {
        (self.function())(iterations, max_iterations)
    }
}

impl Default for TransferId {
    fn default() -> Self {
        TransferId::Linear
    }
}

impl fmt::Display for TransferId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransferId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransferId::ALL
            .iter()
            .cloned()
            .find(|t| t.name() == s)
            .ok_or_else(|| format!("Unknown transfer function '{}'", s))
    }
}
