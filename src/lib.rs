//! Heatmap coloring of table cells.
//!
//! - [`Heatmap`]: a gradient between two color stops, driven by the
//!   position of a value relative to the maximum of its batch.
//! - [`colorize`] and [`colorize_elements`] apply it to any
//!   [`Element`] sink.
//! - [`HeatmapTable`] is a ready made sink producing HTML tables.
//!
//! ```
//! use heatmap_cells::Heatmap;
//! let colors: Vec<_> = Heatmap::default().colors(&[0., 50., 100.])
//!     .iter().map(|c| c.to_string()).collect();
//! assert_eq!(colors, ["rgb(255,255,255)", "rgb(255,255,126)",
//!                     "rgb(255,255,-3)"]);
//! ```

use rgb::RGB8;

mod cell;
mod element;
mod error;
mod stop;
pub mod table;

pub use cell::{CellColor, parse_int};
pub use element::{Element, colorize, colorize_elements};
pub use error::{Error, Result};
pub use stop::parse_stop;
pub use table::HeatmapTable;

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange<Color> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> Color;
}

/// Positions are percentages of the batch maximum.
const PERCENT: f64 = 100.;

/// Return the largest of `values`, ignoring NaN.  Return NaN if
/// there is no such value (in particular if `values` is empty).
///
/// ```
/// use heatmap_cells::maximum;
/// assert_eq!(maximum(&[3., f64::NAN, 7., -1.]), 7.);
/// assert!(maximum(&[]).is_nan());
/// ```
pub fn maximum(values: &[f64]) -> f64 {
    // `f64::max` returns the other argument when one is NaN.
    values.iter().copied().fold(f64::NAN, f64::max)
}

/// Round half-way cases towards +∞.
#[inline]
fn round_half_up(x: f64) -> f64 {
    // `x + 0.5` is inexact for large odd integers.
    let f = x.floor();
    if x - f >= 0.5 { f + 1. } else { f }
}

/// Gradient from a start color stop to an end color stop, sampled at
/// integer percentages.
///
/// The color at position `pos` has channels
/// `round(start + pos * (end - start) / (n - 1))` where `n` is the
/// number of [`steps`][Heatmap::steps].  Positions run up to 100 while
/// the denominator is `n - 1`, so with the default `n = 100` the
/// maximum overshoots the end stop by about 1%: nothing is clamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Heatmap {
    start: RGB8,
    end: RGB8,
    steps: u32,
}

impl Default for Heatmap {
    /// White to yellow in 100 steps.
    fn default() -> Self { Heatmap::new(Heatmap::WHITE, Heatmap::YELLOW) }
}

impl Heatmap {
    pub const WHITE: RGB8 = RGB8 { r: 255, g: 255, b: 255 };
    pub const YELLOW: RGB8 = RGB8 { r: 255, g: 255, b: 0 };
    /// Default number of interpolation steps.
    pub const STEPS: u32 = 100;

    /// Return the gradient from `start` to `end` with
    /// [`Heatmap::STEPS`] steps.
    pub fn new(start: RGB8, end: RGB8) -> Self {
        Heatmap { start, end, steps: Self::STEPS }
    }

    /// Use `n` interpolation steps.  Return an error if `n < 2`.
    pub fn steps(mut self, n: u32) -> Result<Self> {
        if n < 2 { return Err(Error::Steps(n)) }
        self.steps = n;
        Ok(self)
    }

    pub fn start(&self) -> RGB8 { self.start }

    pub fn end(&self) -> RGB8 { self.end }

    pub fn n_steps(&self) -> u32 { self.steps }

    /// Integer percentage of `value` with respect to `max`.  It is
    /// NaN whenever `value / max` is NaN (e.g. `max` is NaN or both
    /// are `0.`).
    #[inline]
    pub fn position(value: f64, max: f64) -> f64 {
        round_half_up(value / max * PERCENT)
    }

    /// Return the color at the position `pos` (see [`Heatmap`]).
    pub fn color_at(&self, pos: f64) -> CellColor {
        let denom = (self.steps - 1) as f64;
        let channel = |x0: u8, x1: u8| {
            let x0 = x0 as f64;
            let x = (x0 + pos * (x1 as f64 - x0) / denom).round();
            // Infinite channels are not integers.
            if x.is_finite() { x } else { f64::NAN }
        };
        CellColor::new(channel(self.start.r, self.end.r),
                       channel(self.start.g, self.end.g),
                       channel(self.start.b, self.end.b))
    }

    /// Return the color of each of the `values`, relative to their
    /// [`maximum`].  The `i`th color corresponds to `values[i]`.
    pub fn colors(&self, values: &[f64]) -> Vec<CellColor> {
        let max = maximum(values);
        values.iter().map(|&v| self.rgb(v / max)).collect()
    }

    /// Sample `n` colors for evenly spaced ratios in \[0, 1\] (both
    /// bounds included when `n ≥ 2`).
    pub fn legend(&self, n: usize) -> Vec<CellColor> {
        if n == 1 { return vec![self.rgb(0.)] }
        let dt = 1. / (n as f64 - 1.);
        (0 .. n).map(|i| self.rgb(i as f64 * dt)).collect()
    }
}

impl ColorRange<CellColor> for Heatmap {
    /// Color of a value whose ratio to the maximum is `t`.  `t` is not
    /// restricted to \[0, 1\] (negative values give colors beyond the
    /// start stop).
    fn rgb(&self, t: f64) -> CellColor {
        self.color_at(Self::position(t, 1.))
    }
}
