//! Irregular-forms exception tables loaded from `.exc` files.

use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashMap;
use log::debug;

use crate::error::{GlossaError, Result};

/// A precomputed table of irregular forms for one part of speech.
///
/// Each line of the source file lists one or more related surface forms
/// followed by their root (e.g. `geese goose`). Irregular forms bypass
/// rule-based transformation entirely.
#[derive(Debug, Clone, Default)]
pub struct ExceptionTable {
    /// Surface form -> root.
    root_of: AHashMap<String, String>,
    /// Root -> surface forms that resolve to it.
    forms_of: AHashMap<String, Vec<String>>,
}

impl ExceptionTable {
    /// Create an empty table.
    pub fn new() -> ExceptionTable {
        ExceptionTable::default()
    }

    /// Load an exception table from a file.
    ///
    /// Failure to open or read the file is fatal to the load; a malformed
    /// line is skipped and logged.
    pub fn load(path: impl AsRef<Path>) -> Result<ExceptionTable> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| {
            GlossaError::resource(format!(
                "failed to open exception file '{}': {e}",
                path.display()
            ))
        })?;
        let mut table = ExceptionTable::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| {
                GlossaError::resource(format!(
                    "failed to read exception file '{}': {e}",
                    path.display()
                ))
            })?;
            table.push_line(&line);
        }
        Ok(table)
    }

    /// Build a table from in-memory lines. Used by tests and callers that
    /// already hold the file contents.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> ExceptionTable {
        let mut table = ExceptionTable::new();
        for line in lines {
            table.push_line(line);
        }
        table
    }

    fn push_line(&mut self, line: &str) {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 2 {
            if !line.trim().is_empty() {
                debug!("skipping malformed exception line: {line:?}");
            }
            return;
        }
        let root = tokens[tokens.len() - 1].to_lowercase();
        for form in &tokens[..tokens.len() - 1] {
            let form = form.replace('_', " ").to_lowercase();
            self.root_of.insert(form.clone(), root.clone());
            let forms = self.forms_of.entry(root.clone()).or_default();
            if !forms.contains(&form) {
                forms.push(form);
            }
        }
    }

    /// Root of an irregular surface form, if the form is listed.
    pub fn root_of(&self, form: &str) -> Option<&str> {
        self.root_of.get(form).map(String::as_str)
    }

    /// Irregular surface forms listing `root` as their value.
    pub fn forms_of(&self, root: &str) -> &[String] {
        self.forms_of.get(root).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of surface-form entries.
    pub fn len(&self) -> usize {
        self.root_of.len()
    }

    /// True when the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.root_of.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let table = ExceptionTable::from_lines(["geese goose", "ran run", "running run"]);
        assert_eq!(table.root_of("geese"), Some("goose"));
        assert_eq!(table.root_of("ran"), Some("run"));
        let forms = table.forms_of("run");
        assert!(forms.contains(&"ran".to_string()));
        assert!(forms.contains(&"running".to_string()));
    }

    #[test]
    fn test_multi_form_line() {
        let table = ExceptionTable::from_lines(["was were be"]);
        assert_eq!(table.root_of("was"), Some("be"));
        assert_eq!(table.root_of("were"), Some("be"));
        assert_eq!(table.forms_of("be").len(), 2);
    }

    #[test]
    fn test_malformed_line_skipped() {
        let table = ExceptionTable::from_lines(["lonely", "", "geese goose"]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_missing_file_is_resource_error() {
        let err = ExceptionTable::load("/nonexistent/path.exc").unwrap_err();
        assert!(matches!(err, GlossaError::Resource(_)));
    }
}
