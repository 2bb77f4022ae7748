//! Error type for input and config handling, with stable formatting.
use core::fmt;
use std::collections::BTreeMap;

use crate::gold::error_catalog::{default_locale_message, GoldErrorCode};

const CONTEXT_VALUE_MAX: usize = 256;

fn sanitize_value(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .map(|ch| if matches!(ch, '\n' | '\r' | '\t') { ' ' } else { ch })
        .collect();
    if cleaned.chars().count() > CONTEXT_VALUE_MAX {
        let mut truncated: String = cleaned.chars().take(CONTEXT_VALUE_MAX - 1).collect();
        truncated.push('…');
        truncated
    } else {
        cleaned
    }
}

fn render_template(template: &str, context: &BTreeMap<String, String>) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut chars = template.chars();
    while let Some(ch) = chars.next() {
        if ch != '{' {
            rendered.push(ch);
            continue;
        }
        let key: String = chars.by_ref().take_while(|&c| c != '}').collect();
        match context.get(&key) {
            Some(value) if !key.is_empty() => rendered.push_str(value),
            _ => {
                rendered.push('{');
                rendered.push_str(&key);
                rendered.push('}');
            }
        }
    }
    rendered
}

/// Glue-layer error with structured context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoldError {
    pub code: GoldErrorCode,
    pub context: BTreeMap<String, String>,
}

impl GoldError {
    pub fn new(code: GoldErrorCode) -> Self {
        Self { code, context: BTreeMap::new() }
    }

    /// Adds a key/value pair to the context. Empty keys are ignored.
    pub fn with_context<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: ToString,
    {
        let key = key.into();
        if !key.is_empty() {
            self.context.insert(key, sanitize_value(&value.to_string()));
        }
        self
    }

    fn resolved_message(&self) -> String {
        render_template(default_locale_message(self.code), &self.context)
    }

    /// Short message for the terminal: `[GOLD-000N] ...`.
    pub fn to_user_string(&self) -> String {
        format!("[{}] {}", self.code.code(), self.resolved_message())
    }

    /// One-line JSON for logs. Keys are emitted in sorted order.
    pub fn to_log_json(&self) -> String {
        serde_json::json!({
            "code": self.code.code(),
            "title": self.code.title(),
            "message": self.resolved_message(),
            "context": self.context,
        })
        .to_string()
    }
}

impl fmt::Display for GoldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_user_string())
    }
}

impl std::error::Error for GoldError {}

pub type Result<T> = std::result::Result<T, GoldError>;

#[macro_export]
macro_rules! gold_err {
  ($code:expr) => {{
    $crate::gold::error::GoldError::new($code)
  }};
  ($code:expr, $($key:ident => $value:expr),+ $(,)?) => {{
    let mut err = $crate::gold::error::GoldError::new($code);
    $(
      err = err.with_context(stringify!($key), $value);
    )+
    err
  }};
}

#[macro_export]
macro_rules! gold_bail {
  ($($tt:tt)*) => {
    return Err($crate::gold_err!($($tt)*))
  };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_string_fills_placeholders() {
        let err = GoldError::new(GoldErrorCode::UnknownField).with_context("field", "weight");
        assert_eq!(err.to_user_string(), "[GOLD-0001] 'weight' is not an input field");
    }

    #[test]
    fn missing_placeholder_left_as_is() {
        let err = GoldError::new(GoldErrorCode::UnknownField);
        assert_eq!(err.to_user_string(), "[GOLD-0001] '{field}' is not an input field");
    }

    #[test]
    fn log_json_shape() {
        let err = GoldError::new(GoldErrorCode::MalformedAssignment).with_context("line", "rate");
        let v: serde_json::Value = serde_json::from_str(&err.to_log_json()).unwrap();
        assert_eq!(v["code"], "GOLD-0002");
        assert_eq!(v["title"], "Malformed assignment");
        assert_eq!(v["message"], "expected field=value, got 'rate'");
        assert_eq!(v["context"]["line"], "rate");
    }

    #[test]
    fn macro_variants() {
        let err = gold_err!(GoldErrorCode::ConfigInvalid, path => "a.toml", detail => "bad");
        assert_eq!(err.code, GoldErrorCode::ConfigInvalid);
        assert_eq!(err.context.get("path").map(String::as_str), Some("a.toml"));
        assert_eq!(err.to_user_string(), "[GOLD-0004] invalid config a.toml: bad");

        fn bails() -> Result<()> {
            gold_bail!(GoldErrorCode::UnknownField, field => "x");
        }
        assert_eq!(bails().unwrap_err().code, GoldErrorCode::UnknownField);
    }
}
