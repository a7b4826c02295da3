//! CSV pedigree loading.
//!
//! The on-disk format is a CSV with a `name,mother,father,trait` header.
//! `mother` and `father` must both be blank or both be names appearing in
//! the file. `trait` is `1` (present), `0` (absent), or blank (unknown).

use std::io;
use std::path::Path;

use hd_common::{Error, Result};
use serde::Deserialize;
use tracing::debug;

use super::model::{Pedigree, PersonRecord};

/// One CSV row, before any validation.
#[derive(Debug, Deserialize)]
struct RawRecord {
    name: String,
    #[serde(default)]
    mother: String,
    #[serde(default)]
    father: String,
    #[serde(rename = "trait", default)]
    observed_trait: String,
}

/// Load a pedigree from a CSV file.
pub fn load_pedigree(path: &Path) -> Result<Pedigree> {
    let reader = csv::Reader::from_path(path)?;
    let pedigree = collect(reader)?;
    debug!(
        people = pedigree.len(),
        path = %path.display(),
        "pedigree loaded"
    );
    Ok(pedigree)
}

/// Load a pedigree from any CSV source.
pub fn read_pedigree<R: io::Read>(source: R) -> Result<Pedigree> {
    collect(csv::Reader::from_reader(source))
}

fn collect<R: io::Read>(mut reader: csv::Reader<R>) -> Result<Pedigree> {
    let mut records = Vec::new();
    for row in reader.deserialize() {
        let raw: RawRecord = row?;
        let observed_trait = parse_trait(&raw.name, &raw.observed_trait)?;
        records.push(PersonRecord {
            name: raw.name,
            mother: non_blank(raw.mother),
            father: non_blank(raw.father),
            observed_trait,
        });
    }
    Pedigree::from_records(records)
}

fn non_blank(field: String) -> Option<String> {
    if field.is_empty() {
        None
    } else {
        Some(field)
    }
}

fn parse_trait(name: &str, value: &str) -> Result<Option<bool>> {
    match value {
        "1" => Ok(Some(true)),
        "0" => Ok(Some(false)),
        "" => Ok(None),
        other => Err(Error::InvalidTrait {
            name: name.to_string(),
            value: other.to_string(),
        }),
    }
}
