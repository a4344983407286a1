//! Spreadsheet export
//!
//! Every cell (header and data) is written white on a dark background with a
//! thin border. Each column carries a number format chosen by its
//! [`FormatKind`] and a fixed width.

use std::fs;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook};
use tracing::info;

use crate::ScreenerResult;

/// Cell background
pub const BACKGROUND_COLOR: u32 = 0x0A0A23;
/// Cell font color
pub const FONT_COLOR: u32 = 0xFFFFFF;
/// Width applied to every declared column
pub const COLUMN_WIDTH: f64 = 25.0;

/// How a column's values are displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
  String,
  Dollar,
  Integer,
  Float,
  Percent,
}

impl FormatKind {
  /// Excel number format for the kind; `None` for plain text
  pub fn num_format(&self) -> Option<&'static str> {
    match self {
      FormatKind::String => None,
      FormatKind::Dollar => Some("$0.00"),
      FormatKind::Integer => Some("0"),
      FormatKind::Float => Some("0.00"),
      FormatKind::Percent => Some("0.0%"),
    }
  }

  fn format(&self) -> Format {
    let format = Format::new()
      .set_font_color(Color::RGB(FONT_COLOR))
      .set_background_color(Color::RGB(BACKGROUND_COLOR))
      .set_border(FormatBorder::Thin);

    match self.num_format() {
      Some(num_format) => format.set_num_format(num_format),
      None => format,
    }
  }
}

/// Header label and display kind for one column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnFormat {
  pub header: String,
  pub kind: FormatKind,
}

impl ColumnFormat {
  pub fn new(header: impl Into<String>, kind: FormatKind) -> Self {
    Self { header: header.into(), kind }
  }
}

/// One value in the exported table
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
  Text(String),
  Number(f64),
  Empty,
}

impl From<Option<f64>> for Cell {
  fn from(value: Option<f64>) -> Self {
    value.map_or(Cell::Empty, Cell::Number)
  }
}

/// Destination workbook and sheet
#[derive(Debug, Clone, PartialEq)]
pub struct OutputTarget {
  pub path: PathBuf,
  pub sheet_name: String,
}

impl OutputTarget {
  pub fn new(path: impl Into<PathBuf>, sheet_name: impl Into<String>) -> Self {
    Self { path: path.into(), sheet_name: sheet_name.into() }
  }

  /// Same sheet, different file
  pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
    self.path = path.into();
    self
  }
}

/// Writes tables to `.xlsx` files
#[derive(Debug, Default)]
pub struct SpreadsheetExporter;

impl SpreadsheetExporter {
  pub fn new() -> Self {
    Self
  }

  /// Write `rows` under a header row built from `columns`.
  ///
  /// Rows shorter than `columns` get styled blank cells; extra cells are
  /// ignored.
  pub fn write(&self, target: &OutputTarget, columns: &[ColumnFormat], rows: &[Vec<Cell>]) -> ScreenerResult<()> {
    ensure_parent_dir(&target.path)?;

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&target.sheet_name)?;

    let formats: Vec<Format> = columns.iter().map(|c| c.kind.format()).collect();

    for (col, (column, format)) in columns.iter().zip(&formats).enumerate() {
      let col = col as u16;
      worksheet.set_column_width(col, COLUMN_WIDTH)?;
      worksheet.set_column_format(col, format)?;
      worksheet.write_string_with_format(0, col, &column.header, format)?;
    }

    for (row_idx, row) in rows.iter().enumerate() {
      let xl_row = row_idx as u32 + 1;
      for (col, format) in formats.iter().enumerate() {
        let col = col as u16;
        match row.get(col as usize).unwrap_or(&Cell::Empty) {
          Cell::Text(text) => {
            worksheet.write_string_with_format(xl_row, col, text, format)?;
          }
          Cell::Number(value) if value.is_finite() => {
            worksheet.write_number_with_format(xl_row, col, *value, format)?;
          }
          Cell::Number(_) | Cell::Empty => {
            worksheet.write_blank(xl_row, col, format)?;
          }
        }
      }
    }

    workbook.save(&target.path)?;
    info!("Wrote {} rows to {} [{}]", rows.len(), target.path.display(), target.sheet_name);
    Ok(())
  }
}

fn ensure_parent_dir(path: &Path) -> ScreenerResult<()> {
  match path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => Ok(fs::create_dir_all(parent)?),
    _ => Ok(()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ScreenerError;
  use calamine::{open_workbook, Data, Reader, Xlsx};
  use pretty_assertions::assert_eq;
  use std::io::Read;

  fn columns() -> Vec<ColumnFormat> {
    vec![
      ColumnFormat::new("Ticker", FormatKind::String),
      ColumnFormat::new("Price", FormatKind::Dollar),
      ColumnFormat::new("Number of Shares to Buy", FormatKind::Integer),
      ColumnFormat::new("Price-to-Book Ratio", FormatKind::Float),
      ColumnFormat::new("HQM Score", FormatKind::Percent),
    ]
  }

  #[test]
  fn test_num_formats() {
    assert_eq!(FormatKind::String.num_format(), None);
    assert_eq!(FormatKind::Dollar.num_format(), Some("$0.00"));
    assert_eq!(FormatKind::Integer.num_format(), Some("0"));
    assert_eq!(FormatKind::Float.num_format(), Some("0.00"));
    assert_eq!(FormatKind::Percent.num_format(), Some("0.0%"));
  }

  #[test]
  fn test_cell_from_option() {
    assert_eq!(Cell::from(Some(1.5)), Cell::Number(1.5));
    assert_eq!(Cell::from(None), Cell::Empty);
  }

  #[test]
  fn test_round_trip_headers_and_values() {
    let dir = tempfile::tempdir().unwrap();
    let target = OutputTarget::new(dir.path().join("nested/out/trades.xlsx"), "Momentum Strategy");
    let rows = vec![
      vec![
        Cell::Text("AAPL".to_string()),
        Cell::Number(131.86),
        Cell::Number(37.0),
        Cell::Number(41.3),
        Cell::Number(0.875),
      ],
      vec![Cell::Text("XYZ".to_string()), Cell::Empty, Cell::Number(0.0)],
    ];

    SpreadsheetExporter::new().write(&target, &columns(), &rows).unwrap();

    let mut workbook: Xlsx<_> = open_workbook(&target.path).unwrap();
    assert_eq!(workbook.sheet_names(), vec!["Momentum Strategy".to_string()]);
    let range = workbook.worksheet_range("Momentum Strategy").unwrap();

    let headers: Vec<String> = (0..5)
      .map(|c| match range.get_value((0, c)) {
        Some(Data::String(s)) => s.clone(),
        other => panic!("expected header string, got {:?}", other),
      })
      .collect();
    let expected: Vec<String> = columns().into_iter().map(|c| c.header).collect();
    assert_eq!(headers, expected);

    assert_eq!(range.get_value((1, 0)), Some(&Data::String("AAPL".to_string())));
    assert_eq!(range.get_value((1, 1)), Some(&Data::Float(131.86)));
    assert_eq!(range.get_value((1, 4)), Some(&Data::Float(0.875)));
    assert_eq!(range.get_value((2, 2)), Some(&Data::Float(0.0)));
  }

  fn read_part(path: &Path, name: &str) -> String {
    let mut archive = zip::ZipArchive::new(fs::File::open(path).unwrap()).unwrap();
    let mut xml = String::new();
    archive.by_name(name).unwrap().read_to_string(&mut xml).unwrap();
    xml
  }

  fn attr<'a>(element: &'a str, name: &str) -> Option<&'a str> {
    let start = element.find(&format!(" {}=\"", name))? + name.len() + 3;
    element[start..].split('"').next()
  }

  #[test]
  fn test_written_styles_match_column_kinds() {
    let dir = tempfile::tempdir().unwrap();
    let target = OutputTarget::new(dir.path().join("styled.xlsx"), "Value Strategy");
    let rows = vec![vec![
      Cell::Text("AAPL".to_string()),
      Cell::Number(131.86),
      Cell::Number(37.0),
      Cell::Number(41.3),
      Cell::Number(0.875),
    ]];

    SpreadsheetExporter::new().write(&target, &columns(), &rows).unwrap();

    let styles = read_part(&target.path, "xl/styles.xml");
    assert!(styles.contains(r#"formatCode="$0.00""#));
    assert!(styles.contains(r#"formatCode="0.0%""#));
    // "0" and "0.00" may be stored as Excel built-ins 1 and 2
    assert!(styles.contains(r#"numFmtId="1""#) || styles.contains(r#"formatCode="0""#));
    assert!(styles.contains(r#"numFmtId="2""#) || styles.contains(r#"formatCode="0.00""#));
    assert!(styles.contains(r#"patternType="solid""#));
    assert!(styles.contains(r#"rgb="FF0A0A23""#));
    assert!(styles.contains(r#"rgb="FFFFFFFF""#));
    assert!(styles.contains(r#"<left style="thin">"#));

    let sheet = read_part(&target.path, "xl/worksheets/sheet1.xml");
    let cols: Vec<&str> = sheet.split("<col ").skip(1).map(|c| c.split("/>").next().unwrap()).collect();
    assert_eq!(cols.len(), columns().len());
    for col in &cols {
      assert!(attr(col, "width").unwrap().starts_with("25.71"), "unexpected width in {}", col);
      assert!(attr(col, "style").is_some(), "missing style in {}", col);
    }

    // five kinds, five distinct cell styles
    let mut styles_used: Vec<&str> = cols.iter().filter_map(|c| attr(c, "style")).collect();
    styles_used.dedup();
    assert_eq!(styles_used.len(), 5);
  }

  #[test]
  fn test_invalid_sheet_name_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let target = OutputTarget::new(dir.path().join("bad.xlsx"), "no/slashes[allowed]");
    let result = SpreadsheetExporter::new().write(&target, &columns(), &[]);
    assert!(matches!(result, Err(ScreenerError::SpreadsheetError(_))));
  }

  #[test]
  fn test_unwritable_path_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let target = OutputTarget::new(blocker.join("out.xlsx"), "Sheet");
    let result = SpreadsheetExporter::new().write(&target, &columns(), &[]);
    assert!(result.is_err());
  }
}
