//! Input format detection.

use std::path::Path;

/// The on-disk serialization format of a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
    Toml,
}

impl Format {
    /// Pick a format from the file extension.
    ///
    /// Unknown or missing extensions fall back to YAML, which also accepts
    /// JSON content (YAML is a superset).
    pub fn detect(path: &Path) -> Format {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Format::Json,
            Some("toml") => Format::Toml,
            _ => Format::Yaml,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_by_extension() {
        assert_eq!(Format::detect(Path::new("a.json")), Format::Json);
        assert_eq!(Format::detect(Path::new("a.toml")), Format::Toml);
        assert_eq!(Format::detect(Path::new("a.yaml")), Format::Yaml);
        assert_eq!(Format::detect(Path::new("a.yml")), Format::Yaml);
    }

    #[test]
    fn case_insensitive_extension() {
        assert_eq!(Format::detect(Path::new("a.JSON")), Format::Json);
        assert_eq!(Format::detect(Path::new("a.Toml")), Format::Toml);
    }

    #[test]
    fn unknown_extension_falls_back_to_yaml() {
        assert_eq!(Format::detect(Path::new("a.conf")), Format::Yaml);
        assert_eq!(Format::detect(Path::new("noext")), Format::Yaml);
    }
}
