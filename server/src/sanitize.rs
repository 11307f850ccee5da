//! Input screening applied to titles at the HTTP boundary.
//!
//! Runs in front of use-case validation, not instead of it: empty and
//! over-length titles are still the use case's call. Screening only accepts
//! or rejects; `escape_html` is handed to the use case and applied to the
//! title once it has been validated.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

type PatternSet = Result<Vec<Regex>, regex::Error>;

static SQL_PATTERNS: Lazy<PatternSet> = Lazy::new(|| {
    compile(&[
        r"(?i)\b(INSERT\s+INTO|DELETE\s+FROM|UPDATE\s+\w+\s+SET|DROP\s+TABLE|ALTER\s+TABLE)\b",
    ])
});

static SCRIPT_PATTERNS: Lazy<PatternSet> = Lazy::new(|| {
    compile(&[
        r"(?is)<script.*?>.*?</script>",
        r"(?i)javascript:",
        r#"(?i)on\w+=".*?""#,
    ])
});

fn compile(patterns: &[&str]) -> PatternSet {
    patterns.iter().map(|p| Regex::new(p)).collect()
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SanitizeError {
    #[error("title contains SQL statements")]
    SqlPattern,

    #[error("title contains script content")]
    ScriptPattern,

    #[error("screening pattern failed to compile: {0}")]
    InvalidPattern(String),
}

impl SanitizeError {
    /// Whether the title itself was at fault, as opposed to the screen.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, SanitizeError::InvalidPattern(_))
    }
}

/// Rejects titles that look like SQL statements or script payloads.
pub fn screen_title(title: &str) -> Result<(), SanitizeError> {
    if matches_any(&SQL_PATTERNS, title)? {
        return Err(SanitizeError::SqlPattern);
    }
    if matches_any(&SCRIPT_PATTERNS, title)? {
        return Err(SanitizeError::ScriptPattern);
    }
    Ok(())
}

fn matches_any(patterns: &PatternSet, title: &str) -> Result<bool, SanitizeError> {
    let patterns = patterns
        .as_ref()
        .map_err(|err| SanitizeError::InvalidPattern(err.to_string()))?;
    Ok(patterns.iter().any(|re| re.is_match(title)))
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
