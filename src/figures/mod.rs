//! Figure filename handling, date stamped names with an auto incremented
//! number or a caller supplied suffix.

use std::fs::{create_dir_all, read_dir};
use std::io::Result;
use std::path::{Path, PathBuf};
use chrono::Local;


/// Returns today's date as a 2 digit day, 3 letter month, 2 digit year stamp
pub fn date_stamp() -> String {
    Local::now().format("%d%b%y").to_string()
}

/// Extracts the trailing figure number from a filename of the
/// form `v<stamp>_<number>.png`
fn figure_number(filename: &str) -> Option<u32> {
    let stem = filename.strip_suffix(".png")?;
    let number = stem.rsplit('_').next()?;

    number.parse::<u32>().ok()
}

/// Scans the output directory for the highest numbered prior figure and
/// returns the next number as a zero padded string, creating the directory
/// if it does not exist and starting at `01` when it is empty
pub fn next_figure_number(dir: &Path) -> Result<String> {
    if !dir.exists() {
        create_dir_all(dir)?;
        return Ok(String::from("01"));
    }

    let mut highest: u32 = 0;
    for entry in read_dir(dir)? {
        let entry = entry?;
        if let Some(name) = entry.file_name().to_str() {
            if let Some(number) = figure_number(name) {
                if number > highest {
                    highest = number;
                }
            }
        }
    }

    Ok(format!("{:02}", highest + 1))
}

/// Builds the output path `dir/v<stamp>_<suffix>.png`, using the given
/// suffix when present and the next auto assigned number otherwise
pub fn resolve_figure_path(dir: &Path, stamp: &str, suffix: Option<&str>) -> Result<PathBuf> {
    let suffix = match suffix {
        Some(value) => String::from(value),
        None => next_figure_number(dir)?,
    };

    if !dir.exists() {
        create_dir_all(dir)?;
    }

    Ok(dir.join(format!("v{}_{}.png", stamp, suffix)))
}
