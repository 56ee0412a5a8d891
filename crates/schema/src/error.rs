//! Compile-time errors for validation-directive processing.
//!
//! A malformed annotation is a schema-authoring mistake, not a runtime
//! condition: the first error aborts the whole compile call for the field
//! and no partial rule list is returned. Messages embed the offending
//! argument name so callers can surface them to the schema author as-is.

use thiserror::Error;

/// An error raised while compiling a field's validation directives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// The argument's literal does not match the expected scalar grammar:
    /// a wrong literal kind, a malformed regular expression, or a date or
    /// datetime string outside its strict canonical form.
    #[error("argument `{argument}`: {message}")]
    Format { argument: String, message: String },

    /// The argument parses but violates the rule's domain constraint:
    /// a non-positive dimension or size, an empty pattern or file type,
    /// or a minimum bound above its maximum.
    #[error("argument `{argument}`: {message}")]
    Semantic { argument: String, message: String },

    /// The field's declared type does not resolve to a known scalar kind.
    #[error("field `{field}`: unknown type `{type_name}`")]
    Resolution { field: String, type_name: String },
}

impl CompileError {
    /// Creates a [`CompileError::Format`] for the given argument.
    pub fn format(argument: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Format {
            argument: argument.into(),
            message: message.into(),
        }
    }

    /// Creates a [`CompileError::Semantic`] for the given argument.
    pub fn semantic(argument: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Semantic {
            argument: argument.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_embeds_argument_name() {
        let err = CompileError::semantic("width", "was expecting a positive integer");
        assert_eq!(
            err.to_string(),
            "argument `width`: was expecting a positive integer"
        );
    }

    #[test]
    fn resolution_display_names_field_and_type() {
        let err = CompileError::Resolution {
            field: "author".into(),
            type_name: "Author".into(),
        };
        assert_eq!(err.to_string(), "field `author`: unknown type `Author`");
    }
}
