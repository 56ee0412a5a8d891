//! # vellum-schema
//!
//! Compiles field-level `@validation` directives from a parsed content
//! model into the rule descriptors the Vellum backend enforces on content.
//!
//! ## Quick Start
//!
//! ```rust
//! use vellum_schema::ast::{Directive, FieldDefinition, TypeNode, Value};
//! use vellum_schema::compile_field_rules;
//!
//! let field = FieldDefinition::new("title", TypeNode::named("String").non_null())
//!     .with_directive(
//!         Directive::new("validation")
//!             .with_argument("minLength", Value::Int(2))
//!             .with_argument("maxLength", Value::Int(80)),
//!     );
//!
//! let rules = compile_field_rules(&field)?;
//! assert_eq!(rules.len(), 2); // LENGTH_RANGE + REQUIRED
//! # Ok::<(), vellum_schema::CompileError>(())
//! ```
//!
//! ## Pipeline
//!
//! The schema parser (upstream) produces the read-only tree in [`ast`];
//! [`scalar::resolve_field_type`] flattens a field's declared type to
//! `{scalar, has_multiple_values, required}`; [`compile_field_rules`]
//! dispatches each `@validation` directive through a fixed per-scalar table
//! of sub-validations and returns the ordered [`rules::ValidationRule`]
//! list. [`content_type::content_type_input`] wraps the per-field compile
//! for a whole type definition.
//!
//! Compilation is synchronous and side-effect free; a malformed annotation
//! fails the whole field fast with a [`CompileError`] meant for the schema
//! author.

pub mod ast;
pub mod content_type;
pub mod error;
pub mod rules;
pub mod scalar;
pub mod temporal;

mod args;
mod compiler;

pub use compiler::{VALIDATION_DIRECTIVE, compile_field_rules};
pub use content_type::{ContentTypeInput, FieldInput, api_id, content_type_input};
pub use error::CompileError;
pub use rules::{RuleConfig, RuleKind, ScalarValue, ValidationRule};
pub use scalar::{FieldType, ScalarKind, resolve_field_type};
