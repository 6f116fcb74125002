//! CSV writer for resolved records.

use std::fs::{File, OpenOptions};
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;

use super::WriteDisposition;
use crate::models::ResultRecord;

/// Writes records to `path` according to the disposition.
///
/// Create and overwrite start with the `domain,dns_server,record_type,value`
/// header; append adds headerless rows so the existing header is not
/// repeated mid-file. Rows are written in the given order.
///
/// Returns the number of records written.
pub fn write_records(
    path: &Path,
    records: &[ResultRecord],
    disposition: WriteDisposition,
) -> Result<usize> {
    let (file, headers) = match disposition {
        WriteDisposition::Create | WriteDisposition::Overwrite => {
            let file = File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?;
            (file, true)
        }
        WriteDisposition::Append => {
            let file = OpenOptions::new().append(true).open(path).with_context(|| {
                format!("Failed to open output file for append: {}", path.display())
            })?;
            (file, false)
        }
    };

    // Header written explicitly so an empty batch still produces one
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
    if headers {
        writer.write_record(["domain", "dns_server", "record_type", "value"])?;
    }
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush().context("Failed to flush CSV output")?;

    Ok(records.len())
}
