//! Delimited-text rendering of export tables

use csv::WriterBuilder;
use isoportal_core::export::ExportTable;

use crate::errors::RestResult;

pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

fn finish(writer: csv::Writer<Vec<u8>>) -> RestResult<Vec<u8>> {
    writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()).into())
}

/// Comma-separated export: the title on its own line, then headers and rows
pub fn table_csv(table: &ExportTable) -> RestResult<Vec<u8>> {
    let mut writer = WriterBuilder::new().flexible(true).from_writer(Vec::new());
    writer.write_record([table.title.as_str()])?;
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    finish(writer)
}

/// Two-column `Field;Value` export of a single container, with a UTF-8 BOM
/// so spreadsheet tools pick the right encoding.
pub fn detail_csv(rows: &[(&str, String)]) -> RestResult<Vec<u8>> {
    let mut writer = WriterBuilder::new().delimiter(b';').from_writer(UTF8_BOM.to_vec());
    writer.write_record(["Field", "Value"])?;
    for (field, value) in rows {
        writer.write_record([*field, value.as_str()])?;
    }
    finish(writer)
}
