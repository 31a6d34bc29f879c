use std::path::Path;

use ejare_eval::CalcConfig;
use ejare_parse::{DigitScript, Locale};
use serde::{Deserialize, Serialize};

use crate::error::CliError;
use crate::messages::Language;

/// How results are shown. Never affects the numbers themselves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    pub digits: DigitScript,
    pub language: Language,
    /// Unit label after amounts; `None` picks the language default.
    pub currency: Option<String>,
    pub percent_decimals: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            digits: DigitScript::Persian,
            language: Language::Fa,
            currency: None,
            percent_decimals: 2,
        }
    }
}

impl DisplayOptions {
    pub fn locale(&self) -> Locale {
        Locale::for_script(self.digits)
    }

    pub fn currency_label(&self) -> &str {
        self.currency
            .as_deref()
            .unwrap_or_else(|| self.language.default_currency())
    }
}

/// Contents of a `--config` file.
///
/// ```yaml
/// calc:
///   zero_base_policy: reject
/// display:
///   digits: latin
///   language: en
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub calc: CalcConfig,
    pub display: DisplayOptions,
}

impl Settings {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text).map_err(|source| CliError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }
}
