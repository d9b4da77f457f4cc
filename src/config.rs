use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::error::{Error, Result};

/// How the CLI prints a parsed document.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    PartialEq,
    Eq,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pretty,
    Compact,
    Debug,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsecConfig {
    /// Reject documents that leave input unconsumed.
    #[serde(default = "default_true")]
    pub strict: bool,

    /// Strip surrounding whitespace before parsing; the grammar never skips it.
    #[serde(default = "default_true")]
    pub trim_input: bool,

    #[serde(default)]
    pub output: OutputFormat,
}

impl Default for ParsecConfig {
    fn default() -> Self {
        Self {
            strict: default_true(),
            trim_input: default_true(),
            output: OutputFormat::default(),
        }
    }
}

impl ParsecConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        from_file(path)
    }
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| Error::config(format!("Failed to open {}: {}", path.display(), e)))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .map_err(|e| Error::config(format!("Failed to parse {}: {}", path.display(), e)))?;
    Ok(config)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> Result<T> {
    let config = serde_json::from_str(s)
        .map_err(|e| Error::config(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

// デフォルト値の定義
fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::str::FromStr;

    #[test]
    fn test_defaults() {
        let config: ParsecConfig = from_str("{}").unwrap();
        assert_eq!(config, ParsecConfig::default());
        assert!(config.strict);
        assert!(config.trim_input);
        assert_eq!(config.output, OutputFormat::Pretty);
    }

    #[test]
    fn test_partial_override() {
        let config: ParsecConfig = from_str(r#"{"strict": false, "output": "compact"}"#).unwrap();
        assert!(!config.strict);
        assert!(config.trim_input);
        assert_eq!(config.output, OutputFormat::Compact);
    }

    #[test]
    fn test_invalid_config_is_config_error() {
        let result: Result<ParsecConfig> = from_str(r#"{"output": "yaml"}"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_output_format_strum() {
        assert_eq!(OutputFormat::from_str("debug").unwrap(), OutputFormat::Debug);
        assert_eq!(OutputFormat::Compact.to_string(), "compact");
        assert!(OutputFormat::from_str("xml").is_err());
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("parsec-config-{}.json", std::process::id()));
        let mut file = File::create(&path).unwrap();
        write!(file, r#"{{"trim_input": false}}"#).unwrap();
        drop(file);

        let config = ParsecConfig::from_file(&path).unwrap();
        assert!(!config.trim_input);
        assert!(config.strict);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let result = ParsecConfig::from_file("/nonexistent/parsec.json");
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
