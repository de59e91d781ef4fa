//! Export serialization: flat rows plus the delimited file they become.

use crate::error::Result;
use crate::model::{Category, Item};
use chrono::NaiveDate;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Human-readable column labels, in output order.
pub const EXPORT_HEADERS: [&str; 5] = [
    "Item Name",
    "Category",
    "Quantity",
    "Total Price",
    "Date Received",
];

/// A flattened item as it appears in the export file: the descriptive
/// fields plus the derived line total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub name: String,
    pub category: Category,
    pub quantity: i64,
    pub total: i64,
    pub date_received: NaiveDate,
}

/// Project items into export rows, in input order. The only place a
/// total is computed for export; it reuses [`Item::total`] so export and
/// display can never disagree.
pub fn to_export_rows(items: &[Item]) -> Vec<ExportRow> {
    items
        .iter()
        .map(|item| ExportRow {
            name: item.name.clone(),
            category: item.category,
            quantity: item.quantity,
            total: item.total(),
            date_received: item.date_received,
        })
        .collect()
}

/// Write rows as comma-separated text: a UTF-8 byte-order mark, the
/// header row, then one row per item. Dates pass through in their stored
/// `YYYY-MM-DD` form.
pub fn write_csv<W: Write>(mut writer: W, rows: &[ExportRow]) -> Result<()> {
    writer.write_all("\u{feff}".as_bytes())?;
    writeln!(writer, "{}", EXPORT_HEADERS.join(","))?;
    for row in rows {
        writeln!(
            writer,
            "{},{},{},{},{}",
            csv_field(&row.name),
            row.category,
            row.quantity,
            row.total,
            row.date_received,
        )?;
    }
    Ok(())
}

/// Write rows to the export file at `path`, creating or truncating it.
pub fn export_to_file<P: AsRef<Path>>(path: P, rows: &[ExportRow]) -> Result<()> {
    let file = File::create(path)?;
    write_csv(file, rows)
}

/// Quote a free-text field when it contains the delimiter, a quote, or a
/// line break; embedded quotes double up.
fn csv_field(value: &str) -> String {
    if value.contains(['"', ',', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
