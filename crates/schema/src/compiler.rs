//! The validation-directive compiler.
//!
//! A field's `@validation` annotations compile into an ordered list of
//! [`ValidationRule`] descriptors. Each scalar kind owns a fixed, ordered
//! list of sub-validations; every sub-validation is a static descriptor,
//! either a [`SingleRule`] (one argument, one rule) or a [`RangeRule`]
//! (a `min`/`max` pair that merges into one range rule when both bounds
//! are present). The set of scalar kinds is closed, so the whole dispatch
//! is a table of plain `fn` pointers; nothing here allocates state between
//! calls.
//!
//! Error policy is fail-fast: the first malformed argument aborts the
//! compile for the whole field and no partial rule list escapes.

use tracing::{debug, trace};

use crate::args::{self, ArgKind};
use crate::ast::{Directive, FieldDefinition};
use crate::error::CompileError;
use crate::rules::{RuleConfig, RuleKind, ScalarValue, ValidationRule};
use crate::scalar::{ScalarKind, resolve_field_type};
use crate::temporal;

/// Name of the directive the compiler consumes.
pub const VALIDATION_DIRECTIVE: &str = "validation";

/// Name of the optional override-message argument.
const ERROR_MESSAGE_ARGUMENT: &str = "errorMessage";

/// Semantic check run on a coerced argument value. The first parameter is
/// the argument name, for error context.
type Check = fn(&str, &ScalarValue) -> Result<(), CompileError>;

/// Order predicate for range bounds: `true` when `a` is greater than `b`.
type Exceeds = fn(&ScalarValue, &ScalarValue) -> bool;

/// Default message for a single-argument rule.
type SingleMessage = fn(&ScalarValue) -> String;

/// Default message for a range rule; either bound may be absent.
type BoundsMessage = fn(Option<&ScalarValue>, Option<&ScalarValue>) -> String;

// ============================================================================
// SEMANTIC CHECKS
// ============================================================================

/// No domain constraint beyond coercion (length and numeric bounds).
fn accept(_argument: &str, _value: &ScalarValue) -> Result<(), CompileError> {
    Ok(())
}

fn positive_int(argument: &str, value: &ScalarValue) -> Result<(), CompileError> {
    match value.as_int() {
        Some(n) if n > 0 => Ok(()),
        _ => Err(CompileError::semantic(
            argument,
            "was expecting a positive integer",
        )),
    }
}

fn well_formed_pattern(argument: &str, value: &ScalarValue) -> Result<(), CompileError> {
    match value.as_str() {
        Some(pattern) if pattern.trim().is_empty() => Err(CompileError::semantic(
            argument,
            "pattern should not be empty",
        )),
        Some(pattern) => regex::Regex::new(pattern).map(|_| ()).map_err(|e| {
            CompileError::format(argument, format!("invalid regular expression: {e}"))
        }),
        None => Err(CompileError::format(argument, "expected a string literal")),
    }
}

fn non_empty_file_type(argument: &str, value: &ScalarValue) -> Result<(), CompileError> {
    match value.as_str() {
        Some("") => Err(CompileError::semantic(
            argument,
            "file type can not be empty",
        )),
        Some(_) => Ok(()),
        None => Err(CompileError::format(argument, "expected a string literal")),
    }
}

fn date_literal(argument: &str, value: &ScalarValue) -> Result<(), CompileError> {
    match value.as_str() {
        Some(literal) if temporal::parse_date(literal).is_some() => Ok(()),
        _ => Err(CompileError::format(
            argument,
            "invalid date format, only accepts: YYYY-MM-DD",
        )),
    }
}

fn date_time_literal(argument: &str, value: &ScalarValue) -> Result<(), CompileError> {
    match value.as_str() {
        Some(literal) if temporal::parse_date_time(literal).is_some() => Ok(()),
        _ => Err(CompileError::format(
            argument,
            "invalid datetime format, only accepts: YYYY-MM-DDTHH:MM:SS.SSSZ",
        )),
    }
}

// ============================================================================
// ORDER PREDICATES
// ============================================================================

fn int_exceeds(a: &ScalarValue, b: &ScalarValue) -> bool {
    match (a.as_int(), b.as_int()) {
        (Some(a), Some(b)) => a > b,
        _ => false,
    }
}

fn float_exceeds(a: &ScalarValue, b: &ScalarValue) -> bool {
    match (a.as_float(), b.as_float()) {
        (Some(a), Some(b)) => a > b,
        _ => false,
    }
}

// Both bounds have already passed their strict literal checks by the time
// the date predicates run.

fn date_exceeds(a: &ScalarValue, b: &ScalarValue) -> bool {
    let parse = |v: &ScalarValue| v.as_str().and_then(temporal::parse_date);
    match (parse(a), parse(b)) {
        (Some(a), Some(b)) => a > b,
        _ => false,
    }
}

fn date_time_exceeds(a: &ScalarValue, b: &ScalarValue) -> bool {
    let parse = |v: &ScalarValue| v.as_str().and_then(temporal::parse_date_time);
    match (parse(a), parse(b)) {
        (Some(a), Some(b)) => a > b,
        _ => false,
    }
}

// ============================================================================
// DEFAULT MESSAGES
// ============================================================================

fn pattern_message(value: &ScalarValue) -> String {
    format!("should match {value}")
}

fn image_width_message(value: &ScalarValue) -> String {
    format!("the image width should be {value}px")
}

fn image_height_message(value: &ScalarValue) -> String {
    format!("the image height should be {value}px")
}

fn max_file_size_message(value: &ScalarValue) -> String {
    format!("the file size should not exceed {value} kB")
}

fn file_type_message(value: &ScalarValue) -> String {
    format!("invalid file type, it should be {value}")
}

fn length_bounds_message(min: Option<&ScalarValue>, max: Option<&ScalarValue>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => {
            format!("should have a length between {min} and {max} characters")
        }
        (Some(min), None) => format!("should be at least {min} characters long"),
        (None, Some(max)) => format!("should be maximum {max} characters long"),
        // Both-absent directives return before message synthesis.
        (None, None) => String::new(),
    }
}

fn value_bounds_message(min: Option<&ScalarValue>, max: Option<&ScalarValue>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("should be between {min} and {max}"),
        (Some(min), None) => format!("should be greater than or equal to {min}"),
        (None, Some(max)) => format!("should be less than or equal to {max}"),
        (None, None) => String::new(),
    }
}

/// Resolves the explicit `errorMessage` argument, if any. An empty
/// explicit message falls back to the synthesized default.
fn explicit_message(directive: &Directive) -> Result<Option<String>, CompileError> {
    let message = args::extract(&directive.arguments, ERROR_MESSAGE_ARGUMENT, ArgKind::Str)?;
    Ok(message.and_then(|value| match value {
        ScalarValue::String(s) if !s.is_empty() => Some(s),
        _ => None,
    }))
}

// ============================================================================
// SINGLE-VALUE RULES
// ============================================================================

/// A sub-validation bound to one argument: extract it, check it, emit one
/// rule with one config entry. An absent argument contributes nothing.
struct SingleRule {
    argument: &'static str,
    literal: ArgKind,
    kind: RuleKind,
    config_key: &'static str,
    check: Check,
    default_message: SingleMessage,
}

impl SingleRule {
    fn compile(
        &self,
        directive: &Directive,
        rules: &mut Vec<ValidationRule>,
    ) -> Result<(), CompileError> {
        let value = args::extract_with(&directive.arguments, self.argument, self.literal, |v| {
            (self.check)(self.argument, v)
        })?;
        let Some(value) = value else {
            return Ok(());
        };

        let message =
            explicit_message(directive)?.unwrap_or_else(|| (self.default_message)(&value));
        rules.push(ValidationRule::new(
            self.kind,
            self.config_key,
            value,
            message,
        ));
        Ok(())
    }
}

// ============================================================================
// RANGE RULES
// ============================================================================

/// A sub-validation bound to a `min`/`max` argument pair.
///
/// Both bounds present merge into one rule of the range kind with both
/// config keys set; a lone bound emits the matching single-bound kind. A
/// minimum above its maximum is a semantic error before any rule exists.
struct RangeRule {
    arguments: [&'static str; 2],
    literal: ArgKind,
    /// `[min-only kind, max-only kind, range kind]`.
    kinds: [RuleKind; 3],
    config_keys: [&'static str; 2],
    check: Check,
    exceeds: Exceeds,
    default_message: BoundsMessage,
}

impl RangeRule {
    fn compile(
        &self,
        directive: &Directive,
        rules: &mut Vec<ValidationRule>,
    ) -> Result<(), CompileError> {
        let [min_name, max_name] = self.arguments;
        let [min_key, max_key] = self.config_keys;

        // min extracts first: the ordering check must be able to reference
        // it while max is being validated, whichever order the schema
        // author declared the bounds in.
        let min = args::extract_with(&directive.arguments, min_name, self.literal, |v| {
            (self.check)(min_name, v)
        })?;
        let max = args::extract_with(&directive.arguments, max_name, self.literal, |v| {
            (self.check)(max_name, v)?;
            match &min {
                Some(min) if (self.exceeds)(min, v) => Err(CompileError::semantic(
                    max_name,
                    format!("{max_name} should be equal or greater than {min_name}"),
                )),
                _ => Ok(()),
            }
        })?;

        if min.is_none() && max.is_none() {
            return Ok(());
        }

        let message = explicit_message(directive)?
            .unwrap_or_else(|| (self.default_message)(min.as_ref(), max.as_ref()));

        // A closed interval is always one range rule, never two bound rules.
        let rule = match (min, max) {
            (Some(min), Some(max)) => {
                let mut config = RuleConfig::new();
                config.insert(min_key.to_owned(), min);
                config.insert(max_key.to_owned(), max);
                ValidationRule {
                    kind: self.kinds[2],
                    config,
                    error_message: message,
                }
            }
            (Some(min), None) => ValidationRule::new(self.kinds[0], min_key, min, message),
            (None, Some(max)) => ValidationRule::new(self.kinds[1], max_key, max, message),
            (None, None) => return Ok(()),
        };
        rules.push(rule);
        Ok(())
    }
}

// ============================================================================
// FACTORY TABLE
// ============================================================================

static PATTERN: SingleRule = SingleRule {
    argument: "pattern",
    literal: ArgKind::Str,
    kind: RuleKind::Pattern,
    config_key: "pattern",
    check: well_formed_pattern,
    default_message: pattern_message,
};

static IMAGE_WIDTH: SingleRule = SingleRule {
    argument: "width",
    literal: ArgKind::Int,
    kind: RuleKind::ImageWidth,
    config_key: "imageWidth",
    check: positive_int,
    default_message: image_width_message,
};

static IMAGE_HEIGHT: SingleRule = SingleRule {
    argument: "height",
    literal: ArgKind::Int,
    kind: RuleKind::ImageHeight,
    config_key: "imageHeight",
    check: positive_int,
    default_message: image_height_message,
};

static MAX_FILE_SIZE: SingleRule = SingleRule {
    argument: "maxSize",
    literal: ArgKind::Int,
    kind: RuleKind::MaxFileSize,
    config_key: "maxFileSize",
    check: positive_int,
    default_message: max_file_size_message,
};

static FILE_TYPE: SingleRule = SingleRule {
    argument: "fileType",
    literal: ArgKind::Str,
    kind: RuleKind::FileType,
    config_key: "fileType",
    check: non_empty_file_type,
    default_message: file_type_message,
};

static LENGTH_BOUNDS: RangeRule = RangeRule {
    arguments: ["minLength", "maxLength"],
    literal: ArgKind::Int,
    kinds: [RuleKind::MinLength, RuleKind::MaxLength, RuleKind::LengthRange],
    config_keys: ["lengthMin", "lengthMax"],
    check: accept,
    exceeds: int_exceeds,
    default_message: length_bounds_message,
};

static INT_BOUNDS: RangeRule = RangeRule {
    arguments: ["min", "max"],
    literal: ArgKind::Int,
    kinds: [RuleKind::MinValue, RuleKind::MaxValue, RuleKind::ValueRange],
    config_keys: ["valueMinInt", "valueMaxInt"],
    check: accept,
    exceeds: int_exceeds,
    default_message: value_bounds_message,
};

static FLOAT_BOUNDS: RangeRule = RangeRule {
    arguments: ["min", "max"],
    literal: ArgKind::Float,
    kinds: [RuleKind::MinValue, RuleKind::MaxValue, RuleKind::ValueRange],
    config_keys: ["valueMinFloat", "valueMaxFloat"],
    check: accept,
    exceeds: float_exceeds,
    default_message: value_bounds_message,
};

static DATE_BOUNDS: RangeRule = RangeRule {
    arguments: ["min", "max"],
    literal: ArgKind::Str,
    kinds: [RuleKind::MinValue, RuleKind::MaxValue, RuleKind::ValueRange],
    config_keys: ["dateMin", "dateMax"],
    check: date_literal,
    exceeds: date_exceeds,
    default_message: value_bounds_message,
};

static DATE_TIME_BOUNDS: RangeRule = RangeRule {
    arguments: ["min", "max"],
    literal: ArgKind::Str,
    kinds: [RuleKind::MinValue, RuleKind::MaxValue, RuleKind::ValueRange],
    config_keys: ["dateTimeMin", "dateTimeMax"],
    check: date_time_literal,
    exceeds: date_time_exceeds,
    default_message: value_bounds_message,
};

// ============================================================================
// DISPATCH
// ============================================================================

/// One entry of a scalar kind's ordered sub-validation list.
enum SubValidation {
    Single(&'static SingleRule),
    Range(&'static RangeRule),
}

impl SubValidation {
    fn compile(
        &self,
        directive: &Directive,
        rules: &mut Vec<ValidationRule>,
    ) -> Result<(), CompileError> {
        match self {
            SubValidation::Single(rule) => rule.compile(directive, rules),
            SubValidation::Range(rule) => rule.compile(directive, rules),
        }
    }
}

static TEXT_VALIDATIONS: [SubValidation; 2] = [
    SubValidation::Range(&LENGTH_BOUNDS),
    SubValidation::Single(&PATTERN),
];
static INT_VALIDATIONS: [SubValidation; 1] = [SubValidation::Range(&INT_BOUNDS)];
static FLOAT_VALIDATIONS: [SubValidation; 1] = [SubValidation::Range(&FLOAT_BOUNDS)];
static DATE_VALIDATIONS: [SubValidation; 1] = [SubValidation::Range(&DATE_BOUNDS)];
static DATE_TIME_VALIDATIONS: [SubValidation; 1] = [SubValidation::Range(&DATE_TIME_BOUNDS)];
// Image runs its dimension checks and then the same size/type checks as
// every other asset kind.
static IMAGE_VALIDATIONS: [SubValidation; 4] = [
    SubValidation::Single(&IMAGE_WIDTH),
    SubValidation::Single(&IMAGE_HEIGHT),
    SubValidation::Single(&MAX_FILE_SIZE),
    SubValidation::Single(&FILE_TYPE),
];
static FILE_VALIDATIONS: [SubValidation; 2] = [
    SubValidation::Single(&MAX_FILE_SIZE),
    SubValidation::Single(&FILE_TYPE),
];

/// The fixed per-scalar dispatch table.
fn sub_validations(scalar: ScalarKind) -> &'static [SubValidation] {
    use ScalarKind::*;
    match scalar {
        String | Id | SinglelineText | MultilineText | RichText => &TEXT_VALIDATIONS,
        Int => &INT_VALIDATIONS,
        Float => &FLOAT_VALIDATIONS,
        Date => &DATE_VALIDATIONS,
        DateTime => &DATE_TIME_VALIDATIONS,
        Image => &IMAGE_VALIDATIONS,
        File | Audio | Video => &FILE_VALIDATIONS,
        Boolean | Json | Location | Color => &[],
    }
}

// ============================================================================
// ENTRY POINT
// ============================================================================

/// Compiles one field's `@validation` directives into its rule list.
///
/// Order is deterministic: directives in declaration order, and within a
/// directive the scalar kind's fixed sub-validation order. Multi-value
/// fields skip type-based validations entirely. A non-null field gets
/// exactly one trailing REQUIRED rule, whether or not it carries
/// directives.
///
/// Any malformed argument aborts the whole call; no partial rule list.
pub fn compile_field_rules(field: &FieldDefinition) -> Result<Vec<ValidationRule>, CompileError> {
    let field_type = resolve_field_type(field)?;
    debug!(
        field = %field.name,
        scalar = ?field_type.scalar,
        "compiling validation directives"
    );

    let mut rules = Vec::new();
    for directive in field
        .directives
        .iter()
        .filter(|d| d.name == VALIDATION_DIRECTIVE)
    {
        if field_type.has_multiple_values {
            continue;
        }
        for validation in sub_validations(field_type.scalar) {
            validation.compile(directive, &mut rules)?;
        }
    }

    if field_type.required {
        rules.push(ValidationRule::required());
    }

    trace!(field = %field.name, rules = rules.len(), "directive compilation finished");
    Ok(rules)
}

// ============================================================================
// TESTS
// ============================================================================
