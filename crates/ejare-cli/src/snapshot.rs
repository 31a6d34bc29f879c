//! Snapshot files: one YAML or JSON mapping of field name to numeral.
//!
//! ```yaml
//! effectiveRate: "۲۰"
//! lastYearRent: 1,000,000
//! lastYearMortgage: 10000000
//! nextYearRent: 1200000
//! ```
//!
//! Values may be strings or bare numbers. Keys accept the camelCase wire
//! names as well as kebab/snake spellings.

use std::collections::BTreeMap;
use std::path::Path;

use ejare_common::{Field, RawInputs};
use serde::Deserialize;

use crate::error::CliError;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Text(s) => s,
            Scalar::Int(i) => i.to_string(),
            Scalar::Float(f) => f.to_string(),
        }
    }
}

/// Read a snapshot file. `.json` files go through `serde_json`, anything
/// else through `serde_yaml`.
pub fn load_snapshot(path: &Path) -> Result<RawInputs, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let entries: BTreeMap<String, Option<Scalar>> = if is_json {
        serde_json::from_str(&text).map_err(|source| CliError::Json {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        serde_yaml::from_str(&text).map_err(|source| CliError::Yaml {
            path: path.to_path_buf(),
            source,
        })?
    };
    to_raw_inputs(entries)
}

/// Parse snapshot text held in memory (YAML, which also accepts JSON).
pub fn parse_snapshot(text: &str) -> Result<RawInputs, CliError> {
    let entries: BTreeMap<String, Option<Scalar>> =
        serde_yaml::from_str(text).map_err(|source| CliError::Yaml {
            path: "<inline>".into(),
            source,
        })?;
    to_raw_inputs(entries)
}

fn to_raw_inputs(entries: BTreeMap<String, Option<Scalar>>) -> Result<RawInputs, CliError> {
    let mut raw = RawInputs::new();
    for (key, value) in entries {
        let field = Field::parse(&key).ok_or_else(|| CliError::UnknownField(key.clone()))?;
        if let Some(value) = value {
            raw.set(field, value.into_text());
        }
    }
    Ok(raw)
}
