//! Heatmap tables.
//!
//! A [`HeatmapTable`] has a header row of column titles and body rows
//! made of a label cell (class `stats-title`) followed by count
//! cells.  Tables are usually loaded from JSON:
//!
//! ```json
//! { "title": "Reviews",
//!   "columns": ["★☆☆☆☆", {"title": "★★★★★", "key": "star5"}],
//!   "rows": [ {"label": "Battery", "anchor": "battery",
//!              "counts": [3, "12"]} ] }
//! ```
//!
//! `id` (default `heat-map-3`) and `corner`, the title of the label
//! column (default `Attribute`), are optional.  Cells link to
//! `#anchor-key` when both the row anchor and the column key are
//! given.

use std::{fmt,
          io::{Read, Write},
          str::FromStr};
use std::borrow::Cow;
use serde::Deserialize;
use crate::{CellColor, Element, Heatmap, Result, colorize_elements,
            maximum, parse_int};

/// Number of swatches of the legend strip.
const LEGEND_LEN: usize = 100;

const STYLE: &str = "\
body { font-family: sans-serif; }
table.heat-map { border-collapse: collapse; }
table.heat-map th, table.heat-map td { padding: 4px 10px; \
border: 1px solid #ddd; text-align: center; }
table.heat-map td.stats-title { text-align: left; }
table.heat-map td a { color: inherit; text-decoration: none; }
table.legend { border-spacing: 0px; margin-top: 12px; }
table.legend td { width: 3px; height: 14px; padding: 0px; }";

/// A column of a [`HeatmapTable`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "ColumnData")]
pub struct Column {
    pub title: String,
    /// Suffix of the anchors of the cells of this column.
    pub key: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColumnData {
    Title(String),
    Full { title: String, #[serde(default)] key: Option<String> },
}

impl From<ColumnData> for Column {
    fn from(c: ColumnData) -> Self {
        match c {
            ColumnData::Title(title) => Column { title, key: None },
            ColumnData::Full { title, key } => Column { title, key },
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Count {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Count::Int(i) => write!(f, "{i}"),
            Count::Float(x) => write!(f, "{x}"),
            Count::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Deserialize)]
struct RowData {
    label: String,
    #[serde(default)]
    anchor: Option<String>,
    counts: Vec<Count>,
}

#[derive(Deserialize)]
struct TableData {
    #[serde(default = "default_id")]
    id: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default = "default_corner")]
    corner: String,
    columns: Vec<Column>,
    rows: Vec<RowData>,
}

fn default_id() -> String { "heat-map-3".to_string() }

fn default_corner() -> String { "Attribute".to_string() }

/// A cell of the body of a [`HeatmapTable`].
#[derive(Clone, Debug, PartialEq)]
pub struct TableCell {
    text: String,
    href: Option<String>,
    label: bool,
    background: Option<CellColor>,
}

impl TableCell {
    #[inline]
    pub fn text(&self) -> &str { &self.text }

    #[inline]
    pub fn href(&self) -> Option<&str> { self.href.as_deref() }

    /// Return the background set by the last coloring, if any.
    #[inline]
    pub fn background(&self) -> Option<CellColor> { self.background }
}

impl Element for TableCell {
    fn text(&self) -> Cow<'_, str> { Cow::Borrowed(&self.text) }

    fn set_background(&mut self, color: CellColor) {
        self.background = Some(color)
    }

    fn is_label(&self) -> bool { self.label }
}

/// A table whose count cells are colored as a heatmap.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "TableData")]
pub struct HeatmapTable {
    id: String,
    title: Option<String>,
    corner: String,
    columns: Vec<Column>,
    rows: Vec<Vec<TableCell>>, // label cell first
}

impl From<TableData> for HeatmapTable {
    fn from(t: TableData) -> Self {
        let mut table = HeatmapTable { id: t.id, title: t.title,
                                       corner: t.corner, columns: t.columns,
                                       rows: vec![] };
        for r in t.rows {
            let counts: Vec<_> = r.counts.iter().map(|c| c.to_string())
                .collect();
            table.push_row(&r.label, r.anchor.as_deref(), &counts);
        }
        table
    }
}

impl FromStr for HeatmapTable {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> { Ok(serde_json::from_str(s)?) }
}

impl HeatmapTable {
    /// Return an empty table with the given `id` and columns.
    pub fn new(id: &str, columns: Vec<Column>) -> Self {
        HeatmapTable { id: id.to_string(), title: None,
                       corner: default_corner(), columns, rows: vec![] }
    }

    /// Read a table from its JSON description.
    pub fn from_reader(rdr: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(rdr)?)
    }

    pub fn id(&self) -> &str { &self.id }

    pub fn title(&self) -> Option<&str> { self.title.as_deref() }

    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string())
    }

    pub fn columns(&self) -> &[Column] { &self.columns }

    /// Body rows; the first cell of each row is its label.
    pub fn rows(&self) -> &[Vec<TableCell>] { &self.rows }

    /// Append a row.  Count cells link to `#anchor-key` when the
    /// column of the cell has a key.
    pub fn push_row(&mut self, label: &str, anchor: Option<&str>,
                    counts: &[impl AsRef<str>]) {
        let mut row = Vec::with_capacity(counts.len() + 1);
        row.push(TableCell { text: label.to_string(),
                             href: anchor.map(|a| format!("#{a}")),
                             label: true, background: None });
        for (i, c) in counts.iter().enumerate() {
            let key = self.columns.get(i).and_then(|c| c.key.as_deref());
            let href = match (anchor, key) {
                (Some(a), Some(k)) => Some(format!("#{a}-{k}")),
                _ => None };
            row.push(TableCell { text: c.as_ref().to_string(), href,
                                 label: false, background: None });
        }
        self.rows.push(row)
    }

    /// Values of the count cells, in document order.
    pub fn values(&self) -> Vec<f64> {
        self.rows.iter().flatten().filter(|c| !c.label)
            .map(|c| parse_int(&c.text)).collect()
    }

    /// Color the count cells (see [`colorize_elements`]).  Return the
    /// number of colored cells.
    pub fn colorize(&mut self, heatmap: &Heatmap) -> usize {
        let mut cells: Vec<&mut TableCell> = self.rows.iter_mut().flatten()
            .collect();
        colorize_elements(heatmap, &mut cells)
    }

    /// Write the HTML `<table>` element.
    pub fn write_table(&self, fh: &mut impl Write) -> std::io::Result<()> {
        writeln!(fh, "<table class=\"heat-map\" cellpadding=\"0\" \
                      cellspacing=\"0\" border=\"0\" id=\"{}\">",
                 Escaped(&self.id))?;
        write!(fh, "<thead><tr><th class=\"first\">{}</th>",
               Escaped(&self.corner))?;
        let n = self.columns.len();
        for (i, c) in self.columns.iter().enumerate() {
            if i + 1 == n {
                write!(fh, "<th class=\"last\">{}</th>", Escaped(&c.title))?;
            } else {
                write!(fh, "<th>{}</th>", Escaped(&c.title))?;
            }
        }
        writeln!(fh, "</tr></thead>\n<tbody>")?;
        for row in &self.rows {
            write!(fh, "<tr class=\"stats-row\">")?;
            for c in row {
                write_cell(fh, c)?;
            }
            writeln!(fh, "</tr>")?;
        }
        writeln!(fh, "</tbody>\n</table>")
    }

    /// Write a complete HTML page showing the table and a legend of
    /// `heatmap`.
    pub fn write_page(&self, fh: &mut impl Write, heatmap: &Heatmap)
                      -> std::io::Result<()> {
        let title = self.title.as_deref().unwrap_or("Heatmap");
        writeln!(fh, "<!DOCTYPE html>\n\
                      <html>\n\
                      <head>\n\
                      <meta charset=\"UTF-8\">\n\
                      <title>{}</title>\n\
                      <style type=\"text/css\">\n{}\n</style>\n\
                      </head>\n\
                      <body>\n\
                      <h1>{}</h1>",
                 Escaped(title), STYLE, Escaped(title))?;
        self.write_table(fh)?;
        let max = maximum(&self.values());
        // No numeric cell, nothing to explain.
        if !max.is_nan() { write_legend(fh, heatmap, max)?; }
        writeln!(fh, "</body>\n\
                      </html>")
    }
}

/// Legend strip from 0 to `max`.
fn write_legend(fh: &mut impl Write, heatmap: &Heatmap, max: f64)
                -> std::io::Result<()> {
    writeln!(fh, "<table class=\"legend\"><tr>")?;
    writeln!(fh, "<td style=\"width: auto; padding-right: 6px\">0</td>")?;
    for c in heatmap.legend(LEGEND_LEN) {
        writeln!(fh, "  <td style=\"background-color: {c}\"></td>")?;
    }
    writeln!(fh, "<td style=\"width: auto; padding-left: 6px\">{}</td>\
                  </tr></table>", max)
}

fn write_cell(fh: &mut impl Write, c: &TableCell) -> std::io::Result<()> {
    if c.label {
        write!(fh, "<td class=\"stats-title\">")?;
    } else if let Some(bg) = c.background {
        write!(fh, "<td style=\"background-color: {bg}\">")?;
    } else {
        write!(fh, "<td>")?;
    }
    match &c.href {
        Some(h) => write!(fh, "<a href=\"{}\">{}</a></td>",
                          Escaped(h), Escaped(&c.text)),
        None => write!(fh, "{}</td>", Escaped(&c.text)),
    }
}

/// Text escaped for HTML content and attribute values.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut last = 0;
        for (i, ch) in self.0.char_indices() {
            let rep = match ch {
                '&' => "&amp;",
                '<' => "&lt;",
                '>' => "&gt;",
                '"' => "&quot;",
                '\'' => "&#39;",
                _ => continue };
            f.write_str(&self.0[last .. i])?;
            f.write_str(rep)?;
            last = i + 1;
        }
        f.write_str(&self.0[last ..])
    }
}
