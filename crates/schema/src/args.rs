//! Typed extraction of directive arguments.
//!
//! An extractor call names one argument, the scalar kind it must coerce to,
//! and a semantic check to run on the coerced value. Absent arguments are
//! `Ok(None)` and the check never runs for them. Coercion fails closed: the
//! literal's intrinsic kind must match the target (integers widen to float,
//! nothing else converts).

use crate::ast::{Argument, Value};
use crate::error::CompileError;
use crate::rules::ScalarValue;

/// The scalar kind an argument is coerced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ArgKind {
    Int,
    Float,
    Str,
}

impl ArgKind {
    fn expects(self) -> &'static str {
        match self {
            ArgKind::Int => "an integer literal",
            ArgKind::Float => "a numeric literal",
            ArgKind::Str => "a string literal",
        }
    }
}

fn coerce(value: &Value, kind: ArgKind) -> Option<ScalarValue> {
    match (kind, value) {
        (ArgKind::Int, Value::Int(n)) => Some(ScalarValue::Int(*n)),
        (ArgKind::Float, Value::Float(f)) => Some(ScalarValue::Float(*f)),
        (ArgKind::Float, Value::Int(n)) => Some(ScalarValue::Float(*n as f64)),
        (ArgKind::Str, Value::String(s)) => Some(ScalarValue::String(s.clone())),
        _ => None,
    }
}

/// Extracts and coerces the first argument named `name`, without a
/// semantic check.
pub(crate) fn extract(
    arguments: &[Argument],
    name: &str,
    kind: ArgKind,
) -> Result<Option<ScalarValue>, CompileError> {
    let Some(argument) = arguments.iter().find(|a| a.name == name) else {
        return Ok(None);
    };
    match coerce(&argument.value, kind) {
        Some(value) => Ok(Some(value)),
        None => Err(CompileError::format(
            name,
            format!(
                "expected {}, found {}",
                kind.expects(),
                argument.value.kind_name()
            ),
        )),
    }
}

/// Extracts, coerces, and runs `check` on the value. Absent arguments skip
/// the check; a failed check aborts the compile.
pub(crate) fn extract_with(
    arguments: &[Argument],
    name: &str,
    kind: ArgKind,
    check: impl FnOnce(&ScalarValue) -> Result<(), CompileError>,
) -> Result<Option<ScalarValue>, CompileError> {
    match extract(arguments, name, kind)? {
        Some(value) => {
            check(&value)?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> Vec<Argument> {
        vec![
            Argument::new("width", Value::Int(100)),
            Argument::new("ratio", Value::Float(1.5)),
            Argument::new("fileType", Value::String("png".into())),
            Argument::new("width", Value::Int(999)),
        ]
    }

    #[test]
    fn absent_argument_is_none() {
        assert_eq!(extract(&args(), "height", ArgKind::Int).unwrap(), None);
    }

    #[test]
    fn first_matching_argument_wins() {
        assert_eq!(
            extract(&args(), "width", ArgKind::Int).unwrap(),
            Some(ScalarValue::Int(100))
        );
    }

    #[test]
    fn int_literal_widens_to_float_target() {
        assert_eq!(
            extract(&args(), "width", ArgKind::Float).unwrap(),
            Some(ScalarValue::Float(100.0))
        );
    }

    #[test]
    fn float_literal_does_not_narrow_to_int_target() {
        let err = extract(&args(), "ratio", ArgKind::Int).unwrap_err();
        assert_eq!(
            err,
            CompileError::format("ratio", "expected an integer literal, found a float literal")
        );
    }

    #[test]
    fn string_where_int_expected_fails_closed() {
        let err = extract(&args(), "fileType", ArgKind::Int).unwrap_err();
        assert!(matches!(err, CompileError::Format { .. }));
    }

    #[test]
    fn check_runs_only_when_present() {
        let mut ran = false;
        let absent = extract_with(&args(), "height", ArgKind::Int, |_| {
            ran = true;
            Ok(())
        })
        .unwrap();
        assert_eq!(absent, None);
        assert!(!ran);

        let err = extract_with(&args(), "width", ArgKind::Int, |_| {
            Err(CompileError::semantic("width", "rejected"))
        })
        .unwrap_err();
        assert!(matches!(err, CompileError::Semantic { .. }));
    }
}
