//! Output utilities for CLI tools.

use std::fs::File;
use std::io::Write;
use std::str::FromStr;

use serde_json::Value;

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Indented JSON, with arrays split into indexed paragraphs (default).
    #[default]
    Pretty,
    /// Indented JSON.
    Json,
    /// YAML.
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(OutputFormat::Pretty),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

/// Renders a value as text.
///
/// In `Pretty` mode each element of an array is rendered as its own
/// paragraph prefixed with its index; anything else renders like `Json`.
pub fn format_value(value: &Value, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_json(value),
        OutputFormat::Pretty => match value {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(idx, item)| format!("[{}] {}", idx, to_json(item)))
                .collect::<Vec<_>>()
                .join("\n\n"),
            _ => to_json(value),
        },
        OutputFormat::Yaml => {
            serde_yaml::to_string(value).unwrap_or_else(|_| to_json(value))
        }
    }
}

fn to_json(value: &Value) -> String {
    // Serializing a Value cannot fail: map keys are always strings.
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Output configuration.
pub struct Output {
    pub format: OutputFormat,
    pub file: Option<String>,
}

impl Output {
    /// Creates a new output configuration.
    pub fn new(format: OutputFormat, file: Option<String>) -> Self {
        Self { format, file }
    }

    /// Outputs the result to the file, or stdout when none is set.
    pub fn write(&self, value: &Value) -> std::io::Result<()> {
        let mut output = format_value(value, self.format);
        if !output.ends_with('\n') {
            output.push('\n');
        }

        match &self.file {
            Some(path) => {
                let mut file = File::create(path)?;
                file.write_all(output.as_bytes())?;
            }
            None => {
                print!("{}", output);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_round_trips() {
        let values = [
            json!({"id": "pay_1", "amount": 1000, "approved": true, "metadata": null}),
            json!([1, "two", {"three": [3.5]}]),
            json!("plain"),
            json!(null),
        ];
        for value in values {
            let text = format_value(&value, OutputFormat::Json);
            let parsed: Value = serde_json::from_str(&text).unwrap();
            assert_eq!(parsed, value);
        }
    }

    #[test]
    fn test_json_uses_two_space_indent() {
        let text = format_value(&json!({"a": 1}), OutputFormat::Json);
        assert_eq!(text, "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_pretty_array_paragraphs() {
        let text = format_value(&json!([{"id": "a"}, {"id": "b"}]), OutputFormat::Pretty);
        let paragraphs: Vec<&str> = text.split("\n\n").collect();
        assert_eq!(paragraphs.len(), 2);
        assert!(paragraphs[0].starts_with("[0] {"));
        assert!(paragraphs[0].contains("\"id\": \"a\""));
        assert!(paragraphs[1].starts_with("[1] {"));
        assert!(paragraphs[1].contains("\"id\": \"b\""));
    }

    #[test]
    fn test_pretty_non_array_matches_json() {
        let value = json!({"data": [1, 2]});
        assert_eq!(
            format_value(&value, OutputFormat::Pretty),
            format_value(&value, OutputFormat::Json)
        );
    }

    #[test]
    fn test_pretty_empty_array() {
        assert_eq!(format_value(&json!([]), OutputFormat::Pretty), "");
    }

    #[test]
    fn test_yaml() {
        let text = format_value(&json!({"id": "pay_1"}), OutputFormat::Yaml);
        assert_eq!(text.trim(), "id: pay_1");
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("PRETTY".parse::<OutputFormat>(), Ok(OutputFormat::Pretty));
        assert_eq!("yml".parse::<OutputFormat>(), Ok(OutputFormat::Yaml));
        assert!("table".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let output = Output::new(OutputFormat::Json, Some(path.to_string_lossy().into_owned()));

        output.write(&json!({"ok": true})).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "{\n  \"ok\": true\n}\n");
    }
}
