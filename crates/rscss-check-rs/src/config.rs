//! Configuration loading.

use camino::Utf8Path;
use rscss_diagnostics::RuleOptions;
use serde::Deserialize;
use std::fs;
use thiserror::Error;

/// Config file names probed in the workspace root, in order.
pub const CONFIG_FILE_NAMES: &[&str] = &["rscss.config.json", ".rscssrc.json"];

/// A configuration file error.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// The config file path.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The file could not be parsed.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// The config file path.
        path: String,
        /// The underlying JSON error.
        source: serde_json::Error,
    },
}

/// Project configuration: the rule options plus host-side settings.
///
/// The rule options are flattened, so a config file reads:
///
/// ```json
/// {
///     // Named shapes or {"type": "custom", "pattern": "..."} objects.
///     "component": "twoWords",
///     "maxDepth": 4,
///     "componentWhitelist": ["container"],
///     "ignore": ["**/legacy/**"]
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileConfig {
    /// Options for the naming rule.
    #[serde(flatten)]
    pub rule: RuleOptions,

    /// Glob patterns to exclude from the check.
    #[serde(default)]
    pub ignore: Vec<String>,

    /// File extensions to check.
    #[serde(default)]
    pub extensions: Vec<String>,
}

impl FileConfig {
    /// Loads configuration for a workspace.
    ///
    /// An explicit path wins; otherwise the well-known file names are
    /// probed. A missing config file means defaults, an unreadable or
    /// invalid one is a startup error.
    pub fn load(workspace: &Utf8Path, explicit: Option<&Utf8Path>) -> Result<Self, ConfigFileError> {
        if let Some(path) = explicit {
            return Self::parse_file(path);
        }

        for name in CONFIG_FILE_NAMES {
            let path = workspace.join(name);
            if path.exists() {
                return Self::parse_file(&path);
            }
        }

        Ok(Self::default())
    }

    fn parse_file(path: &Utf8Path) -> Result<Self, ConfigFileError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigFileError::Read {
            path: path.to_string(),
            source,
        })?;
        let content = strip_json_comments(&content);
        serde_json::from_str(&content).map_err(|source| ConfigFileError::Parse {
            path: path.to_string(),
            source,
        })
    }

    /// Returns the file extensions to check.
    pub fn file_extensions(&self) -> Vec<&str> {
        if self.extensions.is_empty() {
            vec![".css"]
        } else {
            self.extensions.iter().map(String::as_str).collect()
        }
    }
}

/// Removes `//` and `/* */` comments from JSON, leaving strings intact.
fn strip_json_comments(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut chars = json.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                in_string = !in_string;
                out.push(c);
            }
            '\\' if in_string => {
                out.push(c);
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            }
            '/' if !in_string && chars.peek() == Some(&'/') => {
                while let Some(&next) = chars.peek() {
                    if next == '\n' {
                        break;
                    }
                    chars.next();
                }
            }
            '/' if !in_string && chars.peek() == Some(&'*') => {
                chars.next();
                while let Some(next) = chars.next() {
                    if next == '*' && chars.peek() == Some(&'/') {
                        chars.next();
                        break;
                    }
                }
            }
            _ => out.push(c),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strip_comments() {
        let json = r#"{
            // line comment
            "maxDepth": 3 /* inline */
        }"#;
        let cleaned = strip_json_comments(json);
        assert!(!cleaned.contains("//"));
        assert!(!cleaned.contains("/*"));
        assert!(cleaned.contains("\"maxDepth\""));
    }

    #[test]
    fn test_strip_comments_keeps_slashes_in_strings() {
        let json = r#"{"ignore": ["**/vendor/**"]}"#;
        assert_eq!(strip_json_comments(json), json);
    }

    #[test]
    fn test_default_extensions() {
        let config = FileConfig::default();
        assert_eq!(config.file_extensions(), vec![".css"]);
    }

    #[test]
    fn test_missing_config_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = camino::Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap();
        let config = FileConfig::load(&path, None).unwrap();
        assert!(config.rule.max_depth.is_none());
        assert!(config.ignore.is_empty());
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = camino::Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap();
        std::fs::write(
            path.join("rscss.config.json"),
            r#"{
                // Project rules.
                "component": "pascal",
                "maxDepth": 2,
                "ignore": ["**/legacy/**"]
            }"#,
        )
        .unwrap();

        let config = FileConfig::load(&path, None).unwrap();
        assert_eq!(config.rule.max_depth, Some(2));
        assert_eq!(config.ignore, vec!["**/legacy/**"]);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = camino::Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap();
        std::fs::write(path.join(".rscssrc.json"), "{ not json").unwrap();

        assert!(matches!(
            FileConfig::load(&path, None),
            Err(ConfigFileError::Parse { .. })
        ));
    }
}
