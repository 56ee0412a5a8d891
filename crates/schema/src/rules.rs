//! Compiled validation-rule descriptors.
//!
//! A [`ValidationRule`] is the unit of output of the directive compiler and
//! the wire contract with the downstream content-validation engine: the
//! engine dispatches on `ruleKind`, reads its parameters from `config`, and
//! shows `errorMessage` to editors when content fails the rule. The kind
//! names and per-kind config keys serialized here must match that engine
//! exactly.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// RULE KIND
// ============================================================================

/// The kind of a compiled validation rule.
///
/// Serialized in SCREAMING_SNAKE_CASE. The numeric/date/datetime kinds are
/// shared across scalar kinds; which one applies is recoverable from the
/// config keys (`valueMinInt` vs `dateMin`, …), which are never ambiguous
/// across kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleKind {
    Pattern,
    ImageWidth,
    ImageHeight,
    MaxFileSize,
    FileType,
    MinLength,
    MaxLength,
    LengthRange,
    MinValue,
    MaxValue,
    ValueRange,
    Required,
}

// ============================================================================
// SCALAR VALUE
// ============================================================================

/// A coerced argument value, and the value type of a rule's config map.
///
/// `Display` renders the bare value, unquoted, because it feeds
/// default-message synthesis ("should be between 1 and 10").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Int(i64),
    Float(f64),
    String(String),
}

impl ScalarValue {
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ScalarValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric view; integers widen to `f64`.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            ScalarValue::Int(n) => Some(*n as f64),
            ScalarValue::Float(f) => Some(*f),
            ScalarValue::String(_) => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScalarValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Int(n) => write!(f, "{n}"),
            ScalarValue::Float(v) => write!(f, "{v}"),
            ScalarValue::String(s) => f.write_str(s),
        }
    }
}

// ============================================================================
// VALIDATION RULE
// ============================================================================

/// The config parameters of a rule, keyed by wire-contract names.
///
/// Insertion-ordered so a range rule always serializes its min key before
/// its max key.
pub type RuleConfig = IndexMap<String, ScalarValue>;

/// One compiled validation rule: `{ruleKind, config, errorMessage}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRule {
    #[serde(rename = "ruleKind")]
    pub kind: RuleKind,
    pub config: RuleConfig,
    pub error_message: String,
}

impl ValidationRule {
    /// Creates a rule with a single config entry.
    #[must_use]
    pub(crate) fn new(
        kind: RuleKind,
        key: &str,
        value: ScalarValue,
        error_message: String,
    ) -> Self {
        let mut config = RuleConfig::new();
        config.insert(key.to_owned(), value);
        Self {
            kind,
            config,
            error_message,
        }
    }

    /// The REQUIRED rule appended for non-null fields: empty config,
    /// fixed message.
    #[must_use]
    pub fn required() -> Self {
        Self {
            kind: RuleKind::Required,
            config: RuleConfig::new(),
            error_message: "this field is required".to_owned(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn rule_kind_serializes_screaming_snake_case() {
        assert_eq!(
            serde_json::to_value(RuleKind::LengthRange).unwrap(),
            json!("LENGTH_RANGE")
        );
        assert_eq!(
            serde_json::to_value(RuleKind::ImageWidth).unwrap(),
            json!("IMAGE_WIDTH")
        );
        assert_eq!(
            serde_json::to_value(RuleKind::Required).unwrap(),
            json!("REQUIRED")
        );
    }

    #[test]
    fn scalar_value_serializes_untagged() {
        assert_eq!(serde_json::to_value(ScalarValue::Int(5)).unwrap(), json!(5));
        assert_eq!(
            serde_json::to_value(ScalarValue::Float(0.5)).unwrap(),
            json!(0.5)
        );
        assert_eq!(
            serde_json::to_value(ScalarValue::String("png".into())).unwrap(),
            json!("png")
        );
    }

    #[test]
    fn scalar_value_display_is_bare() {
        assert_eq!(ScalarValue::Int(10).to_string(), "10");
        assert_eq!(ScalarValue::Float(1.5).to_string(), "1.5");
        assert_eq!(ScalarValue::String("^a$".into()).to_string(), "^a$");
    }

    #[test]
    fn int_widens_to_float_but_not_the_reverse() {
        assert_eq!(ScalarValue::Int(3).as_float(), Some(3.0));
        assert_eq!(ScalarValue::Float(3.0).as_int(), None);
    }

    #[test]
    fn rule_wire_shape() {
        let rule = ValidationRule::new(
            RuleKind::Pattern,
            "pattern",
            ScalarValue::String("^[a-z]+$".into()),
            "should match ^[a-z]+$".into(),
        );
        assert_eq!(
            serde_json::to_value(&rule).unwrap(),
            json!({
                "ruleKind": "PATTERN",
                "config": { "pattern": "^[a-z]+$" },
                "errorMessage": "should match ^[a-z]+$",
            })
        );
    }

    #[test]
    fn required_rule_has_empty_config_and_fixed_message() {
        let rule = ValidationRule::required();
        assert_eq!(rule.kind, RuleKind::Required);
        assert!(rule.config.is_empty());
        assert_eq!(rule.error_message, "this field is required");
    }

    #[test]
    fn config_preserves_insertion_order() {
        let mut config = RuleConfig::new();
        config.insert("lengthMin".to_owned(), ScalarValue::Int(2));
        config.insert("lengthMax".to_owned(), ScalarValue::Int(80));
        let keys: Vec<&str> = config.keys().map(String::as_str).collect();
        assert_eq!(keys, ["lengthMin", "lengthMax"]);
    }
}
