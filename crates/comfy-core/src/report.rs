//! Read-only device state reports and their line rendering.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// Column width for the key field at indent 0; shrinks as nesting deepens
/// so the `:` separators stay aligned per level.
const KEY_COLUMN: usize = 25;

/// Spaces added per nesting level.
const INDENT_STEP: usize = 4;

/// A leaf value in a device report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Null,
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
            Self::Null => f.write_str("null"),
        }
    }
}

/// One value in a report: a scalar, the display name of an enumerated
/// option variant, or a nested report (arbitrary depth).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReportValue {
    Scalar(Scalar),
    Variant(&'static str),
    Nested(DeviceReport),
}

/// Nested key/value report returned by the read and dump operations.
///
/// Iteration order is insertion order, never sorted -- the rendering
/// contract preserves the order the session (or wire payload) produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DeviceReport {
    entries: IndexMap<String, ReportValue>,
}

impl DeviceReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: ReportValue) {
        self.entries.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&ReportValue> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReportValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the report as indented `key : value` lines.
    ///
    /// Nested reports print their key alone and recurse one step deeper;
    /// leaf keys are left-padded to a column width that shrinks with the
    /// indent so values at one level line up.
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::new();
        self.render_into(0, &mut lines);
        lines
    }

    fn render_into(&self, indent: usize, lines: &mut Vec<String>) {
        let width = KEY_COLUMN.saturating_sub(indent);
        for (key, value) in &self.entries {
            match value {
                ReportValue::Nested(inner) => {
                    lines.push(format!("{:indent$}{key}", ""));
                    inner.render_into(indent + INDENT_STEP, lines);
                }
                ReportValue::Variant(name) => {
                    lines.push(format!("{:indent$}{key:<width$}: {name}", ""));
                }
                ReportValue::Scalar(scalar) => {
                    lines.push(format!("{:indent$}{key:<width$}: {scalar}", ""));
                }
            }
        }
    }
}

impl FromIterator<(String, ReportValue)> for DeviceReport {
    fn from_iter<I: IntoIterator<Item = (String, ReportValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{DeviceReport, ReportValue, Scalar};

    fn sample() -> DeviceReport {
        let mut nested = DeviceReport::new();
        nested.insert("temp", ReportValue::Scalar(Scalar::Float(21.5)));

        let mut report = DeviceReport::new();
        report.insert("power", ReportValue::Variant("On"));
        report.insert("nested", ReportValue::Nested(nested));
        report
    }

    #[test]
    fn renders_two_top_level_lines_with_child_indented_by_four() {
        let lines = sample().render();
        assert_eq!(
            lines,
            vec![
                "power                    : On".to_owned(),
                "nested".to_owned(),
                "    temp                 : 21.5".to_owned(),
            ]
        );
    }

    #[test]
    fn key_column_shrinks_with_indent_depth() {
        // At indent 0 the key field is 25 wide; at indent 4 it is 21, so
        // the colons of both levels land in the same terminal column.
        let lines = sample().render();
        let top_colon = lines[0].find(':').unwrap();
        let child_colon = lines[2].find(':').unwrap();
        assert_eq!(top_colon, child_colon);
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let mut report = DeviceReport::new();
        report.insert("zulu", ReportValue::Scalar(Scalar::Int(1)));
        report.insert("alpha", ReportValue::Scalar(Scalar::Int(2)));
        let keys: Vec<&str> = report.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["zulu", "alpha"]);
    }

    #[test]
    fn deep_nesting_keeps_stepping_right() {
        let mut inner = DeviceReport::new();
        inner.insert("leaf", ReportValue::Scalar(Scalar::Bool(true)));
        let mut mid = DeviceReport::new();
        mid.insert("inner", ReportValue::Nested(inner));
        let mut outer = DeviceReport::new();
        outer.insert("mid", ReportValue::Nested(mid));

        let lines = outer.render();
        assert_eq!(lines[0], "mid");
        assert_eq!(lines[1], "    inner");
        assert!(lines[2].starts_with("        leaf"));
    }
}
