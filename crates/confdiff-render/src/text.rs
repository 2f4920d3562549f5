//! Human-readable text rendering.
//!
//! Color is applied through the `colored` crate's global controls; callers
//! that want plain output (pipes, `--no-color`) disable it with
//! `colored::control::set_override(false)`.

use std::collections::BTreeSet;
use std::fmt::Write;

use colored::Colorize;
use confdiff_core::{DiffReport, DivergenceRecord};

/// Render a report as text: one section per root classification, then one
/// line per divergence record.
pub fn render_text(report: &DiffReport) -> String {
    let mut out = String::new();
    let c = &report.classification;

    section(&mut out, "Added", &c.added, |key| {
        format!("{} {}", "+".green(), key)
    });
    section(&mut out, "Removed", &c.removed, |key| {
        format!("{} {}", "-".red(), key)
    });
    section(&mut out, "Unchanged", &c.unchanged, |key| {
        format!("{} {}", "=".dimmed(), key)
    });
    section(&mut out, "Changed", &c.changed, |key| {
        format!("{} {}", "~".yellow(), key.yellow())
    });

    if !report.records.is_empty() {
        let _ = writeln!(out, "\nDivergences:");
        for record in &report.records {
            let _ = writeln!(out, "  {}", record_line(record));
        }
    }

    if !report.has_differences() {
        let _ = writeln!(out, "\n{} Documents are identical.", "✓".green().bold());
    }

    out
}

fn section(out: &mut String, title: &str, keys: &BTreeSet<String>, line: impl Fn(&str) -> String) {
    let _ = writeln!(out, "{} ({}):", title.bold(), keys.len());
    for key in keys {
        let _ = writeln!(out, "  {}", line(key));
    }
}

/// One line per record, tagged with the divergence kind and path.
pub fn record_line(record: &DivergenceRecord) -> String {
    match record {
        DivergenceRecord::TypeMismatch { path, left, right } => format!(
            "{} {}: {} vs {}",
            "[type]".red().bold(),
            path.cyan(),
            left,
            right
        ),
        DivergenceRecord::ScalarMismatch { path, left, right } => format!(
            "{} {}: {} != {}",
            "[value]".yellow().bold(),
            path.cyan(),
            left,
            right
        ),
        DivergenceRecord::KeyAdded { path, key } => format!(
            "{} {}: {}",
            "[key added]".green().bold(),
            path.cyan(),
            key
        ),
        DivergenceRecord::KeyRemoved { path, key } => format!(
            "{} {}: {}",
            "[key removed]".red().bold(),
            path.cyan(),
            key
        ),
        DivergenceRecord::ListLengthMismatch {
            path,
            left_len,
            right_len,
        } => format!(
            "{} {}: {} vs {}",
            "[list length]".red().bold(),
            path.cyan(),
            left_len,
            right_len
        ),
        DivergenceRecord::ListItemMismatch {
            path, left, right, ..
        } => format!(
            "{} {}: {} != {}",
            "[list item]".yellow().bold(),
            path.cyan(),
            left,
            right
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confdiff_core::Value;
    use std::collections::BTreeMap;

    fn doc(pairs: &[(&str, Value)]) -> Value {
        Value::Mapping(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect::<BTreeMap<_, _>>(),
        )
    }

    fn plain(s: &str) -> String {
        // colored may be force-disabled globally by other tests; strip any
        // escape codes so assertions see bare text either way.
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(ch) = chars.next() {
            if ch == '\u{1b}' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(ch);
            }
        }
        out
    }

    #[test]
    fn sections_and_record_lines() {
        let current = doc(&[
            ("env", "prod".into()),
            ("replicas", 3i64.into()),
            ("tags", Value::Sequence(vec![])),
        ]);
        let past = doc(&[
            ("env", "staging".into()),
            ("replicas", 3i64.into()),
            ("ports", Value::Sequence(vec![])),
        ]);
        let report = DiffReport::compute(&current, &past).unwrap();

        let text = plain(&render_text(&report));
        assert!(text.contains("Added (1):"));
        assert!(text.contains("+ tags"));
        assert!(text.contains("Removed (1):"));
        assert!(text.contains("- ports"));
        assert!(text.contains("Unchanged (1):"));
        assert!(text.contains("= replicas"));
        assert!(text.contains("Changed (1):"));
        assert!(text.contains("~ env"));
        assert!(text.contains("[value] /env: prod != staging"));
    }

    #[test]
    fn identical_documents_say_so() {
        let d = doc(&[("a", 1i64.into())]);
        let report = DiffReport::compute(&d, &d).unwrap();
        let text = plain(&render_text(&report));
        assert!(text.contains("Documents are identical."));
        assert!(!text.contains("Divergences:"));
    }

    #[test]
    fn record_lines_cover_all_kinds() {
        let records = vec![
            DivergenceRecord::TypeMismatch {
                path: "/a".into(),
                left: Value::Null,
                right: 1i64.into(),
            },
            DivergenceRecord::KeyAdded {
                path: "/a".into(),
                key: "k".into(),
            },
            DivergenceRecord::KeyRemoved {
                path: "/a".into(),
                key: "k".into(),
            },
            DivergenceRecord::ListLengthMismatch {
                path: "/a".into(),
                left_len: 2,
                right_len: 0,
            },
            DivergenceRecord::ListItemMismatch {
                path: "/a/[0]".into(),
                index: 0,
                left: 1i64.into(),
                right: 2i64.into(),
            },
        ];
        let lines: Vec<String> = records.iter().map(|r| plain(&record_line(r))).collect();
        assert_eq!(lines[0], "[type] /a: null vs 1");
        assert_eq!(lines[1], "[key added] /a: k");
        assert_eq!(lines[2], "[key removed] /a: k");
        assert_eq!(lines[3], "[list length] /a: 2 vs 0");
        assert_eq!(lines[4], "[list item] /a/[0]: 1 != 2");
    }
}
