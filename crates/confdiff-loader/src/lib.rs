//! Document loader for confdiff.
//!
//! Turns a file path into a [`confdiff_core::Value`] tree. The serialization
//! format is picked by extension ([`Format::detect`]): `.json` parses as
//! JSON, `.toml` as TOML, and everything else as YAML — which, being a JSON
//! superset, also covers JSON content under an unexpected extension.

use std::fs;
use std::path::Path;

use confdiff_core::Value;

pub mod convert;
pub mod error;
pub mod format;

pub use convert::{from_json, from_toml, from_yaml};
pub use error::{LoadError, LoadResult};
pub use format::Format;

/// Load a document from disk.
pub fn load(path: &Path) -> LoadResult<Value> {
    let format = Format::detect(path);
    tracing::debug!(path = %path.display(), ?format, "loading document");

    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match format {
        Format::Json => {
            let parsed: serde_json::Value =
                serde_json::from_str(&text).map_err(|e| LoadError::Parse {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
            Ok(from_json(parsed))
        }
        Format::Toml => {
            let parsed: toml::Value = toml::from_str(&text).map_err(|e| LoadError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
            Ok(from_toml(parsed))
        }
        Format::Yaml => {
            let parsed: serde_yaml::Value =
                serde_yaml::from_str(&text).map_err(|e| LoadError::Parse {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
            from_yaml(parsed).map_err(|message| LoadError::InvalidDocument {
                path: path.to_path_buf(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_yaml_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "config.yaml", "env: prod\nreplicas: 3\n");
        let value = load(&path).unwrap();
        let map = value.as_mapping().unwrap();
        assert_eq!(map["env"], Value::from("prod"));
        assert_eq!(map["replicas"], Value::from(3i64));
    }

    #[test]
    fn loads_json_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "config.json", r#"{"ports": [80, 443]}"#);
        let value = load(&path).unwrap();
        let map = value.as_mapping().unwrap();
        assert_eq!(
            map["ports"],
            Value::Sequence(vec![80i64.into(), 443i64.into()])
        );
    }

    #[test]
    fn loads_toml_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "config.toml", "name = \"svc\"\n");
        let value = load(&path).unwrap();
        assert_eq!(value.as_mapping().unwrap()["name"], Value::from("svc"));
    }

    #[test]
    fn json_content_under_yaml_extension_still_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "config.yml", r#"{"a": 1}"#);
        let value = load(&path).unwrap();
        assert_eq!(value.as_mapping().unwrap()["a"], Value::from(1i64));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "bad.json", "{not json");
        let err = load(&path).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn malformed_yaml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "bad.yaml", "a: [1, 2\n");
        let err = load(&path).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn yaml_tag_is_invalid_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "tagged.yaml", "key: !Custom {a: 1}\n");
        let err = load(&path).unwrap_err();
        assert!(matches!(err, LoadError::InvalidDocument { .. }));
    }
}
