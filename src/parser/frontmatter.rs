//! YAML frontmatter parsing.

use crate::error::{LinkerError, Result};
use serde_yaml::Value;
use std::path::Path;

/// Result of splitting a note into frontmatter and body.
#[derive(Debug, Clone)]
pub struct FrontmatterSplit<'a> {
    /// The raw YAML string (without delimiters).
    pub yaml: Option<&'a str>,
    /// The content after the frontmatter.
    pub body: &'a str,
}

/// Split content into frontmatter and body.
///
/// Frontmatter must open with `---` on the very first line and close with a
/// line containing only `---`. Anything else means the whole content is body.
pub fn split_frontmatter(content: &str) -> FrontmatterSplit<'_> {
    let no_frontmatter = FrontmatterSplit {
        yaml: None,
        body: content,
    };

    let Some(first_line_end) = content.find('\n') else {
        return no_frontmatter;
    };
    if content[..first_line_end].trim_end_matches('\r') != "---" {
        return no_frontmatter;
    }

    // Walk lines after the opener looking for the closing delimiter.
    let yaml_start = first_line_end + 1;
    let mut line_start = yaml_start;
    while line_start <= content.len() {
        let line_end = content[line_start..]
            .find('\n')
            .map(|i| line_start + i)
            .unwrap_or(content.len());
        let line = content[line_start..line_end].trim_end_matches('\r');
        if line == "---" {
            let body_start = if line_end < content.len() {
                line_end + 1
            } else {
                content.len()
            };
            return FrontmatterSplit {
                yaml: Some(&content[yaml_start..line_start]),
                body: &content[body_start..],
            };
        }
        if line_end == content.len() {
            break;
        }
        line_start = line_end + 1;
    }

    no_frontmatter
}

/// Parse frontmatter into a `serde_yaml::Value`, with path context for error
/// messages.
pub fn parse_frontmatter(content: &str, path: &Path) -> Result<Option<Value>> {
    match split_frontmatter(content).yaml {
        Some(yaml) => {
            let value: Value = serde_yaml::from_str(yaml).map_err(|e| {
                LinkerError::Other(format!(
                    "Invalid frontmatter in {}: {}",
                    path.display(),
                    e
                ))
            })?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

/// Extract the `keywords` field from parsed frontmatter.
///
/// Accepts either a YAML sequence of scalars or a single scalar. Non-string
/// entries are stringified; anything else yields no keywords.
pub fn keywords_from_frontmatter(fm: &Value) -> Vec<String> {
    match fm.get("keywords") {
        Some(Value::Sequence(seq)) => seq.iter().filter_map(scalar_to_string).collect(),
        Some(scalar) => scalar_to_string(scalar).into_iter().collect(),
        None => Vec::new(),
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_split_no_frontmatter() {
        let split = split_frontmatter("Just content");
        assert!(split.yaml.is_none());
        assert_eq!(split.body, "Just content");
    }

    #[test]
    fn test_split_with_frontmatter() {
        let content = "---\ntitle: Test\n---\nBody here";
        let split = split_frontmatter(content);
        assert_eq!(split.yaml, Some("title: Test\n"));
        assert_eq!(split.body, "Body here");
    }

    #[test]
    fn test_split_unclosed_frontmatter() {
        let content = "---\ntitle: Test\nno closing";
        let split = split_frontmatter(content);
        assert!(split.yaml.is_none());
        assert_eq!(split.body, content);
    }

    #[test]
    fn test_split_delimiter_not_first_line() {
        let content = "intro\n---\nnot frontmatter\n---\n";
        let split = split_frontmatter(content);
        assert!(split.yaml.is_none());
    }

    #[test]
    fn test_split_crlf() {
        let content = "---\r\ntitle: Test\r\n---\r\nBody";
        let split = split_frontmatter(content);
        assert!(split.yaml.is_some());
        assert_eq!(split.body, "Body");
    }

    #[test]
    fn test_parse_frontmatter() {
        let content = "---\nkeywords:\n  - DL\n  - ml\n---\nBody";
        let fm = parse_frontmatter(content, &PathBuf::from("note.md"))
            .unwrap()
            .unwrap();
        let keywords = keywords_from_frontmatter(&fm);
        assert_eq!(keywords, vec!["DL", "ml"]);
    }

    #[test]
    fn test_parse_invalid_frontmatter() {
        let content = "---\n: [unbalanced\n---\nBody";
        let result = parse_frontmatter(content, &PathBuf::from("note.md"));
        assert!(result.is_err());
    }

    #[test]
    fn test_keywords_scalar() {
        let fm: Value = serde_yaml::from_str("keywords: solo").unwrap();
        assert_eq!(keywords_from_frontmatter(&fm), vec!["solo"]);
    }

    #[test]
    fn test_keywords_absent() {
        let fm: Value = serde_yaml::from_str("title: x").unwrap();
        assert!(keywords_from_frontmatter(&fm).is_empty());
    }

    #[test]
    fn test_keywords_numeric_entry() {
        let fm: Value = serde_yaml::from_str("keywords:\n  - 42\n  - word").unwrap();
        assert_eq!(keywords_from_frontmatter(&fm), vec!["42", "word"]);
    }
}
