//! Read-only schema AST consumed by the rule compiler.
//!
//! The schema-description-language parser lives upstream; this module only
//! models the already-parsed tree the compiler walks: type definitions,
//! field definitions with their declared type nodes, and the directive
//! annotations (with typed literal arguments) attached to each field.
//!
//! All nodes are plain immutable data. Builder-style constructors exist so
//! callers (and tests) can assemble trees without naming every field.

// ============================================================================
// LITERAL VALUES
// ============================================================================

/// A literal argument value as written in the schema source.
///
/// Literals carry their intrinsic scalar kind; coercion to an argument's
/// target kind happens at extraction time and fails closed on a mismatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer literal, e.g. `maxLength: 80`.
    Int(i64),
    /// A float literal, e.g. `min: 0.5`.
    Float(f64),
    /// A string literal, e.g. `pattern: "^[a-z]+$"`.
    String(String),
    /// A boolean literal.
    Boolean(bool),
    /// An enum literal (a bare identifier in the schema source).
    Enum(String),
}

impl Value {
    /// Human-readable kind name, used in coercion error messages.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "an integer literal",
            Value::Float(_) => "a float literal",
            Value::String(_) => "a string literal",
            Value::Boolean(_) => "a boolean literal",
            Value::Enum(_) => "an enum literal",
        }
    }
}

// ============================================================================
// DIRECTIVES
// ============================================================================

/// One named argument of a directive: `maxLength: 80`.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub name: String,
    pub value: Value,
}

impl Argument {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A directive annotation attached to a field, e.g.
/// `@validation(minLength: 2, maxLength: 80)`.
///
/// Argument order is preserved from the schema source.
#[derive(Debug, Clone, PartialEq)]
pub struct Directive {
    pub name: String,
    pub arguments: Vec<Argument>,
}

impl Directive {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    /// Appends an argument.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_argument(mut self, name: impl Into<String>, value: Value) -> Self {
        self.arguments.push(Argument::new(name, value));
        self
    }
}

// ============================================================================
// TYPE NODES
// ============================================================================

/// The declared type of a field, as nested wrapper nodes around a name.
///
/// `tags: [String!]!` parses to
/// `NonNull(List(NonNull(Named("String"))))`.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeNode {
    /// A named type reference.
    Named(String),
    /// A non-null wrapper.
    NonNull(Box<TypeNode>),
    /// A list wrapper.
    List(Box<TypeNode>),
}

impl TypeNode {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        TypeNode::Named(name.into())
    }

    /// Wraps this node in a non-null marker.
    #[must_use = "builder methods must be chained or built"]
    pub fn non_null(self) -> Self {
        TypeNode::NonNull(Box::new(self))
    }

    /// Wraps this node in a list marker.
    #[must_use = "builder methods must be chained or built"]
    pub fn list(self) -> Self {
        TypeNode::List(Box::new(self))
    }
}

// ============================================================================
// FIELD AND TYPE DEFINITIONS
// ============================================================================

/// One field of a content-type definition.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefinition {
    pub name: String,
    pub ty: TypeNode,
    pub directives: Vec<Directive>,
}

impl FieldDefinition {
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeNode) -> Self {
        Self {
            name: name.into(),
            ty,
            directives: Vec::new(),
        }
    }

    /// Attaches a directive annotation. Order is preserved.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }
}

/// A content-type definition: a named object type with its fields.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDefinition {
    pub name: String,
    pub fields: Vec<FieldDefinition>,
}

impl TypeDefinition {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field definition. Order is preserved.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================
