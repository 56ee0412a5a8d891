//! Scalar kinds and field-type resolution.
//!
//! `resolve_field_type` maps a field's declared [`TypeNode`] to the flat
//! `{scalar, has_multiple_values, required}` descriptor the rule compiler
//! dispatches on: the outermost `NonNull` marks the field required, any
//! `List` wrapper marks it multi-valued, and the innermost named type must
//! resolve to a known [`ScalarKind`].

use serde::{Deserialize, Serialize};

use crate::ast::{FieldDefinition, TypeNode};
use crate::error::CompileError;

// ============================================================================
// SCALAR KIND
// ============================================================================

/// The primitive declared type of a field.
///
/// The set is closed: every scalar the content backend stores is listed
/// here, and the per-kind validation dispatch table is total over it.
/// Kinds without a dispatch row (e.g. `Boolean`, `Json`) simply produce no
/// type-based rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarKind {
    String,
    Id,
    SinglelineText,
    MultilineText,
    RichText,
    Int,
    Float,
    Boolean,
    Date,
    DateTime,
    Json,
    Image,
    File,
    Audio,
    Video,
    Location,
    Color,
}

impl ScalarKind {
    /// Resolves a schema type name to a scalar kind, if it names one.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "String" => Some(Self::String),
            "ID" => Some(Self::Id),
            "SinglelineText" => Some(Self::SinglelineText),
            "MultilineText" => Some(Self::MultilineText),
            "RichText" => Some(Self::RichText),
            "Int" => Some(Self::Int),
            "Float" => Some(Self::Float),
            "Boolean" => Some(Self::Boolean),
            "Date" => Some(Self::Date),
            "DateTime" => Some(Self::DateTime),
            "Json" => Some(Self::Json),
            "Image" => Some(Self::Image),
            "File" => Some(Self::File),
            "Audio" => Some(Self::Audio),
            "Video" => Some(Self::Video),
            "Location" => Some(Self::Location),
            "Color" => Some(Self::Color),
            _ => None,
        }
    }
}

// ============================================================================
// FIELD TYPE
// ============================================================================

/// The resolved shape of a field: scalar kind, cardinality, requiredness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldType {
    pub scalar: ScalarKind,
    pub has_multiple_values: bool,
    pub required: bool,
}

/// Resolves a field's declared type node to a [`FieldType`].
///
/// Deterministic and total over trees the schema parser produces; the only
/// failure is a named type that is not a known scalar kind, which is a
/// [`CompileError::Resolution`] the caller surfaces to the schema author.
pub fn resolve_field_type(field: &FieldDefinition) -> Result<FieldType, CompileError> {
    let required = matches!(field.ty, TypeNode::NonNull(_));

    let mut node = &field.ty;
    let mut has_multiple_values = false;
    let name = loop {
        match node {
            TypeNode::NonNull(inner) => node = inner,
            TypeNode::List(inner) => {
                has_multiple_values = true;
                node = inner;
            }
            TypeNode::Named(name) => break name,
        }
    };

    let scalar = ScalarKind::from_name(name).ok_or_else(|| CompileError::Resolution {
        field: field.name.clone(),
        type_name: name.clone(),
    })?;

    Ok(FieldType {
        scalar,
        has_multiple_values,
        required,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn field(ty: TypeNode) -> FieldDefinition {
        FieldDefinition::new("title", ty)
    }

    #[test]
    fn named_scalar_is_optional_single() {
        let ft = resolve_field_type(&field(TypeNode::named("String"))).unwrap();
        assert_eq!(ft.scalar, ScalarKind::String);
        assert!(!ft.has_multiple_values);
        assert!(!ft.required);
    }

    #[test]
    fn non_null_marks_required() {
        let ft = resolve_field_type(&field(TypeNode::named("Int").non_null())).unwrap();
        assert_eq!(ft.scalar, ScalarKind::Int);
        assert!(ft.required);
    }

    #[test]
    fn list_marks_multiple_values() {
        // [String!]! is a required list of non-null strings
        let ft = resolve_field_type(&field(
            TypeNode::named("String").non_null().list().non_null(),
        ))
        .unwrap();
        assert_eq!(ft.scalar, ScalarKind::String);
        assert!(ft.has_multiple_values);
        assert!(ft.required);
    }

    #[test]
    fn inner_non_null_alone_does_not_mark_required() {
        // [String!] is an optional list of non-null strings
        let ft = resolve_field_type(&field(TypeNode::named("String").non_null().list())).unwrap();
        assert!(ft.has_multiple_values);
        assert!(!ft.required);
    }

    #[test]
    fn unknown_type_name_is_a_resolution_error() {
        let err = resolve_field_type(&field(TypeNode::named("Author"))).unwrap_err();
        assert!(matches!(
            err,
            CompileError::Resolution { ref type_name, .. } if type_name == "Author"
        ));
    }

    #[test]
    fn every_known_scalar_name_round_trips() {
        for name in [
            "String",
            "ID",
            "SinglelineText",
            "MultilineText",
            "RichText",
            "Int",
            "Float",
            "Boolean",
            "Date",
            "DateTime",
            "Json",
            "Image",
            "File",
            "Audio",
            "Video",
            "Location",
            "Color",
        ] {
            assert!(ScalarKind::from_name(name).is_some(), "missing {name}");
        }
        assert!(ScalarKind::from_name("Unknown").is_none());
    }
}
