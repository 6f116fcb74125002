//! CSV persistence with existing-file conflict handling.
//!
//! The engine hands records over in the exact order it produced them; this
//! module only decides where they go (create, overwrite, append, or not at
//! all) and encodes them.

mod csv;

pub use self::csv::write_records;

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::OnConflict;

/// How the output file will be written once the conflict is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteDisposition {
    /// The file does not exist yet; create it with a header row.
    Create,
    /// Replace the existing file, header included.
    Overwrite,
    /// Append rows to the existing file without repeating the header.
    Append,
}

/// Decides what to do with the output path.
///
/// A missing file is always created. For an existing file the `--on-conflict`
/// flag decides; `Ask` prompts the operator on stdin. `None` means the write
/// was cancelled.
pub fn resolve_conflict(path: &Path, mode: OnConflict) -> Result<Option<WriteDisposition>> {
    if !path.exists() {
        return Ok(Some(WriteDisposition::Create));
    }
    match mode {
        OnConflict::Overwrite => Ok(Some(WriteDisposition::Overwrite)),
        OnConflict::Append => Ok(Some(WriteDisposition::Append)),
        OnConflict::Cancel => Ok(None),
        OnConflict::Ask => prompt_disposition(path),
    }
}

/// Interactive `[1] overwrite [2] append [3] cancel` prompt.
///
/// Any input other than `1` or `2` cancels.
fn prompt_disposition(path: &Path) -> Result<Option<WriteDisposition>> {
    println!("{} already exists.", path.display());
    print!("Choose: [1] overwrite [2] append [3] cancel: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut choice = String::new();
    io::stdin()
        .lock()
        .read_line(&mut choice)
        .context("Failed to read choice from stdin")?;

    Ok(match choice.trim() {
        "1" => Some(WriteDisposition::Overwrite),
        "2" => Some(WriteDisposition::Append),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_created_regardless_of_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dns_records.csv");
        for mode in [
            OnConflict::Ask,
            OnConflict::Overwrite,
            OnConflict::Append,
            OnConflict::Cancel,
        ] {
            let disposition = resolve_conflict(&path, mode).unwrap();
            assert_eq!(disposition, Some(WriteDisposition::Create));
        }
    }

    #[test]
    fn test_existing_file_non_interactive_modes() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(
            resolve_conflict(file.path(), OnConflict::Overwrite).unwrap(),
            Some(WriteDisposition::Overwrite)
        );
        assert_eq!(
            resolve_conflict(file.path(), OnConflict::Append).unwrap(),
            Some(WriteDisposition::Append)
        );
        assert_eq!(resolve_conflict(file.path(), OnConflict::Cancel).unwrap(), None);
    }
}
