//! Applying heatmap colors to elements of a document.

use std::borrow::Cow;
use tracing::{debug, warn};
use crate::{CellColor, Heatmap, Error, Result, parse_int};

/// An element of a document whose background may be colored.
pub trait Element {
    /// The displayed text of the element.
    fn text(&self) -> Cow<'_, str>;

    /// Set the background color of the element.  Degenerate colors
    /// are passed as well; it is up to the element to decide how to
    /// render them.
    fn set_background(&mut self, color: CellColor);

    /// Labels (row titles, headers,...) are not colored.
    fn is_label(&self) -> bool { false }
}

/// Color `elements[i]` according to `values[i]` relative to the
/// maximum of all `values`.
///
/// Return an error, and leave all elements untouched, if the two
/// slices have different lengths.
pub fn colorize<E: Element>(
    heatmap: &Heatmap, values: &[f64], elements: &mut [E],
) -> Result<()> {
    if values.len() != elements.len() {
        return Err(Error::LengthMismatch { values: values.len(),
                                          elements: elements.len() })
    }
    apply(heatmap, values, elements);
    Ok(())
}

/// Color `elements` with `values`; both have the same length.
fn apply<E: Element>(heatmap: &Heatmap, values: &[f64], elements: &mut [E]) {
    let colors = heatmap.colors(values);
    let degenerate = colors.iter().filter(|c| c.is_degenerate()).count();
    if degenerate > 0 {
        warn!(degenerate, total = colors.len(),
              "cells without a numeric position");
    }
    for (e, c) in elements.iter_mut().zip(colors) {
        e.set_background(c);
    }
}

/// Color all elements that are not labels according to the integer
/// at the start of their text.  The texts are all read before any
/// element is modified.  Return the number of colored elements.
///
/// ```
/// use std::borrow::Cow;
/// use heatmap_cells::{CellColor, Element, Heatmap, colorize_elements};
///
/// struct Td { text: &'static str, style: String }
///
/// impl Element for Td {
///     fn text(&self) -> Cow<'_, str> { Cow::Borrowed(self.text) }
///     fn set_background(&mut self, c: CellColor) {
///         self.style = format!("background-color: {c}");
///     }
/// }
///
/// let mut cells = [Td { text: "0", style: String::new() },
///                  Td { text: "50", style: String::new() },
///                  Td { text: "100", style: String::new() }];
/// assert_eq!(colorize_elements(&Heatmap::default(), &mut cells), 3);
/// assert_eq!(cells[1].style, "background-color: rgb(255,255,126)");
/// ```
pub fn colorize_elements<E: Element>(
    heatmap: &Heatmap, elements: &mut [E],
) -> usize {
    let mut targets: Vec<&mut E> = elements.iter_mut()
        .filter(|e| !e.is_label()).collect();
    let values: Vec<f64> = targets.iter().map(|e| parse_int(&e.text()))
        .collect();
    debug!(cells = values.len(), "colorizing");
    apply(heatmap, &values, &mut targets);
    values.len()
}

impl<E: Element + ?Sized> Element for &mut E {
    fn text(&self) -> Cow<'_, str> { (**self).text() }

    fn set_background(&mut self, color: CellColor) {
        (**self).set_background(color)
    }

    fn is_label(&self) -> bool { (**self).is_label() }
}
