//! Validation of raw catalog records.
//!
//! Unlike [`Catalog::new`](crate::Catalog::new), which stops at the first
//! problem, this walks the untyped JSON and reports everything it finds:
//! missing fields, bad values, texture files that are not on disk, and
//! duplicate names. Used by maintenance tooling before a catalog ships.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;
use std::path::Path;

use serde_json::Value;

use crate::body::{BodyKind, RenderMode, Tint};

/// Fields every catalog record must carry with a non-empty value.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "size", "color", "texture"];

/// Texture files above this size get a warning.
pub const LARGE_TEXTURE_BYTES: u64 = 5 * 1024 * 1024;

/// How serious a validation finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The catalog should not ship with this.
    Error,
    /// Suspicious but usable.
    Warning,
}

/// A single finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// The record the finding is about (its name, or `Object #n`).
    pub subject: String,
    /// What is wrong.
    pub message: String,
    /// Error or warning.
    pub severity: Severity,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{level}: {}: {}", self.subject, self.message)
    }
}

/// Everything found while validating a catalog file.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// All findings, in the order they were found.
    pub issues: Vec<ValidationIssue>,
    /// Number of records inspected.
    pub total: usize,
    /// Record count per `type` value (`unknown` when absent).
    pub by_kind: BTreeMap<String, usize>,
    /// Record count per `renderMode` value (`not specified` when absent).
    pub by_render_mode: BTreeMap<String, usize>,
}

impl ValidationReport {
    /// Findings with [`Severity::Error`].
    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    /// Findings with [`Severity::Warning`].
    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }

    /// Whether any error was found.
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    fn error(&mut self, subject: &str, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            subject: subject.to_string(),
            message: message.into(),
            severity: Severity::Error,
        });
    }

    fn warning(&mut self, subject: &str, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            subject: subject.to_string(),
            message: message.into(),
            severity: Severity::Warning,
        });
    }
}

/// Validate catalog JSON text.
///
/// Texture files are only checked when `texture_dir` is given.
pub fn validate_json(json: &str, texture_dir: Option<&Path>) -> ValidationReport {
    match serde_json::from_str::<Value>(json) {
        Ok(value) => validate_records(&value, texture_dir),
        Err(e) => {
            let mut report = ValidationReport::default();
            report.error("catalog", format!("not valid JSON: {e}"));
            report
        }
    }
}

/// Validate an already-parsed JSON document.
pub fn validate_records(value: &Value, texture_dir: Option<&Path>) -> ValidationReport {
    let mut report = ValidationReport::default();

    let Some(records) = value.as_array() else {
        report.error("catalog", "should contain an array");
        return report;
    };
    if records.is_empty() {
        report.error("catalog", "is empty");
        return report;
    }
    report.total = records.len();

    let mut names: Vec<&str> = Vec::new();
    for (idx, record) in records.iter().enumerate() {
        let subject = record
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Object #{idx}"));

        if let Some(name) = record.get("name").and_then(Value::as_str) {
            names.push(name);
        }
        check_record(record, &subject, texture_dir, &mut report);

        let kind = record
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or("unknown");
        *report.by_kind.entry(kind.to_string()).or_default() += 1;
        let mode = record
            .get("renderMode")
            .and_then(Value::as_str)
            .unwrap_or("not specified");
        *report.by_render_mode.entry(mode.to_string()).or_default() += 1;
    }

    let mut seen = HashSet::new();
    let duplicates: BTreeSet<&str> = names.into_iter().filter(|n| !seen.insert(*n)).collect();
    if !duplicates.is_empty() {
        let list: Vec<&str> = duplicates.into_iter().collect();
        report.error("catalog", format!("duplicate object names: {}", list.join(", ")));
    }

    report
}

fn check_record(
    record: &Value,
    subject: &str,
    texture_dir: Option<&Path>,
    report: &mut ValidationReport,
) {
    if !record.is_object() {
        report.error(subject, "record is not an object");
        return;
    }

    for field in REQUIRED_FIELDS {
        match record.get(field) {
            None => report.error(subject, format!("missing required field '{field}'")),
            Some(v) if is_blank(v) => report.error(subject, format!("field '{field}' is empty")),
            Some(_) => {}
        }
    }

    if let Some(size) = record.get("size") {
        match as_number(size) {
            Some(n) if n <= 0.0 => {
                report.error(subject, format!("size must be positive (got {n})"));
            }
            Some(_) => {}
            None => report.error(subject, format!("size must be a number (got {size})")),
        }
    }

    if let Some(color) = record.get("color") {
        match as_integer(color) {
            Some(c) if !(0..=i64::from(Tint::MAX)).contains(&c) => {
                report.warning(subject, format!("color value seems unusual ({c})"));
            }
            Some(_) => {}
            None => report.error(subject, format!("color must be an integer (got {color})")),
        }
    }

    let texture = record
        .get("texture")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty());
    if let (Some(dir), Some(texture)) = (texture_dir, texture) {
        let path = dir.join(texture);
        match std::fs::metadata(&path) {
            Ok(meta) if meta.is_file() => {
                if meta.len() > LARGE_TEXTURE_BYTES {
                    let mb = meta.len() as f64 / 1024.0 / 1024.0;
                    report.warning(subject, format!("texture file is large ({mb:.1} MB)"));
                }
            }
            _ => report.error(subject, format!("texture file not found: {}", path.display())),
        }
    }

    let kind = record.get("type");
    if let Some(k) = kind {
        let valid = k.as_str().is_some_and(|s| BodyKind::parse(s).is_ok());
        if !valid {
            let expected: Vec<&str> = BodyKind::ALL.iter().map(|k| k.as_str()).collect();
            report.error(
                subject,
                format!("invalid type {k} (must be one of {})", expected.join(", ")),
            );
        }
    }

    if let Some(m) = record.get("renderMode") {
        let valid = m.as_str().is_some_and(|s| RenderMode::parse(s).is_ok());
        if !valid {
            let expected: Vec<&str> = RenderMode::ALL.iter().map(|m| m.as_str()).collect();
            report.error(
                subject,
                format!("invalid renderMode {m} (must be one of {})", expected.join(", ")),
            );
        }
    }

    if record.get("parent").is_some() && kind.and_then(Value::as_str) != Some("moon") {
        report.warning(subject, "has 'parent' field but type is not 'moon'");
    }

    if let Some(e) = record.get("emissive").filter(|e| !e.is_boolean()) {
        report.error(subject, format!("emissive must be a boolean (got {e})"));
    }
}

/// Values that count as "present but empty".
fn is_blank(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// A number, or a string holding one.
fn as_number(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// An integer, or a string holding one. Fractional numbers truncate.
fn as_integer(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}
