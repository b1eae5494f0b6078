//! Color stops given as text.

use std::collections::HashMap;
use lazy_static::lazy_static;
use rgb::RGB8;
use crate::{Error, Result};

lazy_static! {
    /// CSS color keywords usable as gradient stops.
    static ref NAMED_COLORS: HashMap<&'static str, RGB8> = {
        [("white", [255, 255, 255]),
         ("yellow", [255, 255, 0]),
         ("black", [0, 0, 0]),
         ("red", [255, 0, 0]),
         ("lime", [0, 255, 0]),
         ("green", [0, 128, 0]),
         ("blue", [0, 0, 255]),
         ("orange", [255, 165, 0]),
         ("gold", [255, 215, 0]),
         ("salmon", [250, 128, 114]),
         ("tomato", [255, 99, 71]),
         ("lightyellow", [255, 255, 224]),
         ("lightblue", [173, 216, 230]),
         ("gray", [128, 128, 128]),
         ("grey", [128, 128, 128]),
         ("silver", [192, 192, 192])]
            .into_iter()
            .map(|(name, [r, g, b])| (name, RGB8 { r, g, b }))
            .collect()
    };
}

/// Parse a color stop: a CSS keyword (such as `white` or `yellow`),
/// `#rrggbb`, `#rgb` or `rgb(r,g,b)`.
///
/// ```
/// use heatmap_cells::parse_stop;
/// use rgb::RGB8;
/// assert_eq!(parse_stop("yellow").unwrap(), RGB8::new(255, 255, 0));
/// assert_eq!(parse_stop("rgb(67, 147, 195)").unwrap(),
///            RGB8::new(67, 147, 195));
/// assert!(parse_stop("#12345").is_err());
/// ```
pub fn parse_stop(s: &str) -> Result<RGB8> {
    let err = || Error::Color(s.to_string());
    let t = s.trim().to_ascii_lowercase();
    if let Some(&c) = NAMED_COLORS.get(t.as_str()) {
        return Ok(c)
    }
    if let Some(hex) = t.strip_prefix('#') {
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) { return Err(err()) }
        let byte = |h: &str| u8::from_str_radix(h, 16).map_err(|_| err());
        return match hex.len() {
            6 => Ok(RGB8 { r: byte(&hex[0 .. 2])?, g: byte(&hex[2 .. 4])?,
                           b: byte(&hex[4 .. 6])? }),
            // `#abc` is `#aabbcc`.
            3 => Ok(RGB8 { r: byte(&hex[0 .. 1])? * 17,
                           g: byte(&hex[1 .. 2])? * 17,
                           b: byte(&hex[2 .. 3])? * 17 }),
            _ => Err(err()),
        }
    }
    if let Some(args) = t.strip_prefix("rgb(")
        .and_then(|t| t.strip_suffix(')')) {
        let c: Vec<u8> = args.split(',')
            .map(|c| c.trim().parse::<u8>().map_err(|_| err()))
            .collect::<Result<_>>()?;
        return match c.as_slice() {
            &[r, g, b] => Ok(RGB8 { r, g, b }),
            _ => Err(err()),
        }
    }
    Err(err())
}
