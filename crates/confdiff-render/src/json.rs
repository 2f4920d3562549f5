//! Machine-readable JSON rendering.

use confdiff_core::DiffReport;

use crate::error::RenderError;

/// Render a report as pretty-printed JSON.
///
/// The shape is the serde form of [`DiffReport`]: the four classification
/// sets plus a `records` array where each record carries a `kind` tag and
/// its path.
pub fn render_json(report: &DiffReport) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use confdiff_core::Value;
    use std::collections::BTreeMap;

    #[test]
    fn json_shape() {
        let current = Value::Mapping(BTreeMap::from([
            ("env".to_string(), Value::from("prod")),
            ("replicas".to_string(), Value::from(3i64)),
        ]));
        let past = Value::Mapping(BTreeMap::from([
            ("env".to_string(), Value::from("staging")),
            ("replicas".to_string(), Value::from(3i64)),
        ]));
        let report = DiffReport::compute(&current, &past).unwrap();

        let rendered = render_json(&report).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(parsed["classification"]["unchanged"][0], "replicas");
        assert_eq!(parsed["classification"]["changed"][0], "env");
        assert_eq!(parsed["records"][0]["kind"], "scalar_mismatch");
        assert_eq!(parsed["records"][0]["path"], "/env");
        assert_eq!(parsed["records"][0]["left"], "prod");
        assert_eq!(parsed["records"][0]["right"], "staging");
    }

    #[test]
    fn empty_report_serializes() {
        let d = Value::Mapping(BTreeMap::new());
        let report = DiffReport::compute(&d, &d).unwrap();
        let parsed: serde_json::Value =
            serde_json::from_str(&render_json(&report).unwrap()).unwrap();
        assert!(parsed["records"].as_array().unwrap().is_empty());
    }
}
