//! CSV cargo manifests
//!
//! Header row required:
//! id,length,width,weight,x,y
//!
//! Lengths in metres, weight in kg, `x`/`y` locate the front-left corner.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use loadplan_domain::model::CargoItem;
use loadplan_types::{Error, ProfileError, Result};

const REQUIRED_COLUMNS: [&str; 6] = ["id", "length", "width", "weight", "x", "y"];

pub fn load_cargo_manifest(path: &Path) -> Result<Vec<CargoItem>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    read_cargo_manifest(File::open(path)?)
}

pub fn read_cargo_manifest<R: Read>(reader: R) -> Result<Vec<CargoItem>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(ProfileError::InvalidCargoRow {
                row: 1,
                message: format!("missing column '{}'", column),
            }
            .into());
        }
    }

    let mut items = Vec::new();
    for (row_idx, result) in reader.deserialize::<CargoItem>().enumerate() {
        // +2: 0-based index and the header row
        let row = row_idx + 2;
        let item = result.map_err(|e| ProfileError::InvalidCargoRow {
            row,
            message: e.to_string(),
        })?;
        if item.id.is_empty() {
            return Err(ProfileError::InvalidCargoRow {
                row,
                message: "empty id".to_string(),
            }
            .into());
        }
        items.push(item);
    }

    Ok(items)
}

pub fn write_cargo_manifest<W: Write>(writer: W, items: &[CargoItem]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for item in items {
        writer.serialize(item)?;
    }
    writer.flush()?;
    Ok(())
}
