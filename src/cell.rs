//! Cell colors and cell text.

use std::fmt;
use rgb::{RGB, RGB8};

/// Background color computed for a cell.
///
/// Channels are integral but *not* clamped: they may leave \[0, 255\]
/// or be NaN when the cell value (or the batch maximum) is not a
/// number.  Such a color is said to be degenerate.  The [`Display`]
/// implementation produces the CSS form `rgb(R,G,B)`, verbatim.
///
/// [`Display`]: fmt::Display
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellColor {
    rgb: RGB<f64>,
}

impl CellColor {
    pub(crate) fn new(r: f64, g: f64, b: f64) -> Self {
        CellColor { rgb: RGB { r, g, b } }
    }

    /// Return the raw (unclamped, possibly NaN) channels.
    #[inline]
    pub fn channels(&self) -> RGB<f64> { self.rgb }

    /// Says whether some channel is NaN.
    pub fn is_degenerate(&self) -> bool {
        self.rgb.r.is_nan() || self.rgb.g.is_nan() || self.rgb.b.is_nan()
    }

    /// Return the color a browser paints for this value: channels are
    /// clamped to \[0, 255\].  Degenerate colors are rejected by
    /// browsers, hence `None`.
    ///
    /// ```
    /// use heatmap_cells::Heatmap;
    /// let c = Heatmap::default().colors(&[7.])[0];
    /// assert_eq!(c.to_string(), "rgb(255,255,-3)");
    /// assert_eq!(c.to_rgb8(), Some(rgb::RGB8::new(255, 255, 0)));
    /// ```
    pub fn to_rgb8(&self) -> Option<RGB8> {
        if self.is_degenerate() { return None }
        let clamp = |x: f64| x.clamp(0., 255.) as u8;
        Some(RGB8 { r: clamp(self.rgb.r), g: clamp(self.rgb.g),
                    b: clamp(self.rgb.b) })
    }
}

fn write_channel(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_nan() { f.write_str("NaN") }
    else { write!(f, "{}", x + 0.) } // -0 → 0
}

impl fmt::Display for CellColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("rgb(")?;
        write_channel(f, self.rgb.r)?;
        f.write_str(",")?;
        write_channel(f, self.rgb.g)?;
        f.write_str(",")?;
        write_channel(f, self.rgb.b)?;
        f.write_str(")")
    }
}

/// Parse the integer at the start of a cell text.
///
/// Leading white space is skipped, then an optional sign, an optional
/// `0x` (or `0X`) hexadecimal prefix and the longest run of digits are
/// read; whatever follows is ignored.  Return NaN if there are no
/// digits.
///
/// ```
/// use heatmap_cells::parse_int;
/// assert_eq!(parse_int(" 42 reviews"), 42.);
/// assert_eq!(parse_int("-0x1F"), -31.);
/// assert!(parse_int("n/a").is_nan());
/// ```
pub fn parse_int(s: &str) -> f64 {
    let s = s.trim_start();
    let (neg, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s) };
    let (radix, s) = {
        if s.starts_with("0x") || s.starts_with("0X") { (16, &s[2..]) }
        else { (10, s) } };
    let len = s.find(|c: char| !c.is_digit(radix)).unwrap_or(s.len());
    if len == 0 { return f64::NAN }
    let x = s[.. len].chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0., |x, d| x * radix as f64 + d as f64);
    if neg { -x } else { x }
}
