//! Content-type descriptor building.
//!
//! Maps a parsed type definition to the input the backend's content-type
//! service consumes: the display name, a derived API identifier, and the
//! per-field inputs with their compiled validation rules.

use serde::{Deserialize, Serialize};

use crate::ast::{FieldDefinition, TypeDefinition};
use crate::compiler::compile_field_rules;
use crate::error::CompileError;
use crate::rules::ValidationRule;

/// One field of a content-type input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldInput {
    pub name: String,
    pub validations: Vec<ValidationRule>,
}

/// The content-type input: `{name, apiId, fields}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeInput {
    pub name: String,
    pub api_id: String,
    pub fields: Vec<FieldInput>,
}

/// Derives the API identifier from a type name: `_` is inserted between a
/// lowercase letter followed directly by an uppercase letter, then the
/// whole string is upper-cased. `BlogPost` becomes `BLOG_POST`.
#[must_use]
pub fn api_id(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_is_lower = false;
    for c in name.chars() {
        if prev_is_lower && c.is_ascii_uppercase() {
            out.push('_');
        }
        prev_is_lower = c.is_ascii_lowercase();
        out.push(c.to_ascii_uppercase());
    }
    out
}

fn field_input(field: &FieldDefinition) -> Result<FieldInput, CompileError> {
    Ok(FieldInput {
        name: field.name.clone(),
        validations: compile_field_rules(field)?,
    })
}

/// Builds the content-type input for one type definition.
///
/// Fields stay in declaration order; a compile error in any field aborts
/// the whole definition.
pub fn content_type_input(definition: &TypeDefinition) -> Result<ContentTypeInput, CompileError> {
    Ok(ContentTypeInput {
        name: definition.name.clone(),
        api_id: api_id(&definition.name),
        fields: definition
            .fields
            .iter()
            .map(field_input)
            .collect::<Result<_, _>>()?,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Directive, TypeNode, Value};
    use crate::rules::RuleKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn api_id_splits_camel_case() {
        assert_eq!(api_id("BlogPost"), "BLOG_POST");
        assert_eq!(api_id("blogPostDraft"), "BLOG_POST_DRAFT");
    }

    #[test]
    fn api_id_leaves_single_words_and_acronym_runs() {
        assert_eq!(api_id("Article"), "ARTICLE");
        assert_eq!(api_id("SEOPage"), "SEOPAGE");
        assert_eq!(api_id("already_split"), "ALREADY_SPLIT");
    }

    #[test]
    fn builds_fields_in_declaration_order() {
        let definition = TypeDefinition::new("BlogPost")
            .with_field(FieldDefinition::new(
                "title",
                TypeNode::named("String").non_null(),
            ))
            .with_field(FieldDefinition::new("body", TypeNode::named("RichText")));

        let input = content_type_input(&definition).unwrap();
        assert_eq!(input.name, "BlogPost");
        assert_eq!(input.api_id, "BLOG_POST");
        let names: Vec<&str> = input.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["title", "body"]);
        assert_eq!(input.fields[0].validations[0].kind, RuleKind::Required);
        assert!(input.fields[1].validations.is_empty());
    }

    #[test]
    fn field_error_aborts_the_definition() {
        let definition = TypeDefinition::new("BlogPost")
            .with_field(FieldDefinition::new("title", TypeNode::named("String")))
            .with_field(
                FieldDefinition::new("slug", TypeNode::named("String")).with_directive(
                    Directive::new("validation")
                        .with_argument("pattern", Value::String(String::new())),
                ),
            );

        assert!(content_type_input(&definition).is_err());
    }
}
