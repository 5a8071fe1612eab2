//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{GlossaArgs, OutputFormat};
use crate::error::Result;

/// Result structure for synonym lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct SynonymResults {
    pub word: String,
    pub root: String,
    pub part_of_speech: String,
    pub synonyms: Vec<String>,
    pub duration_ms: u64,
}

/// Result structure for root finding.
#[derive(Debug, Serialize, Deserialize)]
pub struct RootResult {
    pub word: String,
    pub part_of_speech: String,
    pub root: String,
}

/// Result structure for form generation.
#[derive(Debug, Serialize, Deserialize)]
pub struct FormsResult {
    pub word: String,
    pub root: String,
    pub part_of_speech: String,
    pub forms: Vec<String>,
}

/// One bound verbal with its grammatical participants, by surface text.
#[derive(Debug, Serialize, Deserialize)]
pub struct BoundPredicate {
    pub verbal: String,
    pub subjects: Vec<String>,
    pub direct_objects: Vec<String>,
    pub indirect_objects: Vec<String>,
    pub modifiers: Vec<String>,
}

/// Result structure for document binding.
#[derive(Debug, Serialize, Deserialize)]
pub struct BindResults {
    pub title: String,
    pub paragraphs: usize,
    pub sentences: usize,
    pub words: usize,
    pub predicates: Vec<BoundPredicate>,
    pub duration_ms: u64,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &GlossaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &GlossaArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    if std::any::type_name::<T>().contains("BindResults") {
        output_bind_results_human(&value)
    } else {
        output_generic_human(&value)
    }
}

/// Output bind results in human format.
fn output_bind_results_human(value: &serde_json::Value) -> Result<()> {
    let Some(obj) = value.as_object() else {
        return Ok(());
    };

    if let Some(title) = obj.get("title").and_then(|t| t.as_str()) {
        println!("Document: {title}");
        println!("═════════");
    }
    for key in ["paragraphs", "sentences", "words"] {
        if let Some(count) = obj.get(key).and_then(|c| c.as_u64()) {
            println!("{key}: {count}");
        }
    }

    if let Some(predicates) = obj.get("predicates").and_then(|p| p.as_array()) {
        for (i, predicate) in predicates.iter().enumerate() {
            println!();
            let verbal = predicate
                .get("verbal")
                .and_then(|v| v.as_str())
                .unwrap_or("?");
            println!("Predicate {}: {verbal}", i + 1);
            println!("─────────────");
            for role in ["subjects", "direct_objects", "indirect_objects", "modifiers"] {
                if let Some(members) = predicate.get(role).and_then(|m| m.as_array())
                    && !members.is_empty()
                {
                    let joined = members
                        .iter()
                        .filter_map(|m| m.as_str())
                        .collect::<Vec<_>>()
                        .join(", ");
                    println!("  {role}: {joined}");
                }
            }
        }
        println!();
    }

    if let Some(duration) = obj.get("duration_ms").and_then(|d| d.as_u64()) {
        println!("Bind time: {duration}ms");
    }
    Ok(())
}

/// Output generic data in human format.
fn output_generic_human(value: &serde_json::Value) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &GlossaArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(
            format_value(&serde_json::Value::String("test".to_string())),
            "test"
        );
        assert_eq!(
            format_value(&serde_json::Value::Number(serde_json::Number::from(42))),
            "42"
        );
        assert_eq!(format_value(&serde_json::Value::Bool(false)), "false");
        assert_eq!(format_value(&serde_json::Value::Null), "null");
    }

    #[test]
    fn test_synonym_results_serialize() {
        let results = SynonymResults {
            word: "ran".to_string(),
            root: "run".to_string(),
            part_of_speech: "verb".to_string(),
            synonyms: vec!["run".to_string(), "walk".to_string()],
            duration_ms: 3,
        };
        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json["root"], "run");
        assert_eq!(json["synonyms"].as_array().unwrap().len(), 2);
    }
}
