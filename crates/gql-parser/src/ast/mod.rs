//! The direct, immutable abstract syntax tree produced by [`crate::parse`].
//!
//! Grounded on the teacher's `apollo-compiler::ast` module (plain owned
//! structs rather than a rowan CST), generalized with the `Location`
//! back-pointer spec.md §3.3/§9 requires and with comment attribution
//! (spec.md §3.3, §4.3.1) which the teacher's AST does not model.

mod comment;
mod type_system;

pub use comment::{Comment, CommentGroup};
pub use type_system::{
    DirectiveDefinition, EnumTypeDefinition, EnumValueDefinition, FieldDefinition,
    InputObjectTypeDefinition, InputValueDefinition, InterfaceTypeDefinition,
    ObjectTypeDefinition, OperationTypeDefinition, ScalarTypeDefinition, SchemaDefinition,
    UnionTypeDefinition,
};

use crate::source::Source;

/// A rune-offset range into a [`Source`] (the same units as `Token::start`/
/// `end`), with an optional borrowed back-pointer to the source it came from
/// (spec.md §3.3, §9).
///
/// The lifetime `'s` ties every AST node back to the `&Source` passed to
/// [`crate::parse`]; `NoSource` (spec.md §5) is modeled by leaving `source`
/// `None`, which also lets `Location` (and therefore the whole AST) be
/// used without keeping the source text around, e.g. across a
/// serialization boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location<'s> {
    pub start: usize,
    pub end: usize,
    pub source: Option<&'s Source>,
}

impl<'s> Location<'s> {
    pub fn new(start: usize, end: usize, source: Option<&'s Source>) -> Self {
        debug_assert!(start <= end);
        Self { start, end, source }
    }

    /// The union of two locations; used when a parsed node's range must
    /// span from its first to its last child token.
    pub fn join(&self, other: &Location<'s>) -> Location<'s> {
        Location {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            source: self.source.or(other.source),
        }
    }
}

/// Root of a parsed GraphQL document: an ordered sequence of top-level
/// definitions, plus the complete flat list of comment groups observed
/// while parsing (spec.md §3.3).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document<'s> {
    pub definitions: Vec<Definition<'s>>,
    pub comments: Vec<CommentGroup<'s>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Definition<'s> {
    Operation(OperationDefinition<'s>),
    Fragment(FragmentDefinition<'s>),
    Schema(SchemaDefinition<'s>),
    Scalar(ScalarTypeDefinition<'s>),
    Object(ObjectTypeDefinition<'s>),
    Interface(InterfaceTypeDefinition<'s>),
    Union(UnionTypeDefinition<'s>),
    Enum(EnumTypeDefinition<'s>),
    InputObject(InputObjectTypeDefinition<'s>),
    /// `extend type ...`; spec.md §3.3 "TypeExtension (wraps one
    /// ObjectDefinition)" and §4.3.2's `TypeExtensionDefinition := 'extend' ObjectDefinition`.
    TypeExtension(ObjectTypeDefinition<'s>),
    Directive(DirectiveDefinition<'s>),
}

impl<'s> Definition<'s> {
    pub fn location(&self) -> &Location<'s> {
        match self {
            Definition::Operation(d) => &d.location,
            Definition::Fragment(d) => &d.location,
            Definition::Schema(d) => &d.location,
            Definition::Scalar(d) => &d.location,
            Definition::Object(d) => &d.location,
            Definition::Interface(d) => &d.location,
            Definition::Union(d) => &d.location,
            Definition::Enum(d) => &d.location,
            Definition::InputObject(d) => &d.location,
            Definition::TypeExtension(d) => &d.location,
            Definition::Directive(d) => &d.location,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Query => "query",
            OperationType::Mutation => "mutation",
            OperationType::Subscription => "subscription",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDefinition<'s> {
    pub location: Location<'s>,
    pub operation: OperationType,
    pub name: Option<String>,
    pub variable_definitions: Vec<VariableDefinition<'s>>,
    pub directives: Vec<Directive<'s>>,
    pub selection_set: Vec<Selection<'s>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentDefinition<'s> {
    pub location: Location<'s>,
    pub name: String,
    pub type_condition: String,
    pub directives: Vec<Directive<'s>>,
    pub selection_set: Vec<Selection<'s>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDefinition<'s> {
    pub location: Location<'s>,
    pub name: String,
    pub ty: Type<'s>,
    pub default_value: Option<Value<'s>>,
    pub directives: Vec<Directive<'s>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<'s> {
    Field(Field<'s>),
    FragmentSpread(FragmentSpread<'s>),
    InlineFragment(InlineFragment<'s>),
}

impl<'s> Selection<'s> {
    pub fn location(&self) -> &Location<'s> {
        match self {
            Selection::Field(f) => &f.location,
            Selection::FragmentSpread(f) => &f.location,
            Selection::InlineFragment(f) => &f.location,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field<'s> {
    pub location: Location<'s>,
    pub alias: Option<String>,
    pub name: String,
    pub arguments: Vec<Argument<'s>>,
    pub directives: Vec<Directive<'s>>,
    pub selection_set: Vec<Selection<'s>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentSpread<'s> {
    pub location: Location<'s>,
    pub name: String,
    pub directives: Vec<Directive<'s>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineFragment<'s> {
    pub location: Location<'s>,
    pub type_condition: Option<String>,
    pub directives: Vec<Directive<'s>>,
    pub selection_set: Vec<Selection<'s>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument<'s> {
    pub location: Location<'s>,
    pub name: String,
    pub value: Value<'s>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive<'s> {
    pub location: Location<'s>,
    pub name: String,
    pub arguments: Vec<Argument<'s>>,
}

/// A literal value. `null` is intentionally absent (spec.md §3.3, §8.5):
/// the identifier `null` is rejected by the parser as a syntax error rather
/// than being represented here.
///
/// Int and Float keep their original textual form rather than being parsed
/// into a numeric type, so that precision is preserved until a downstream
/// consumer coerces them (spec.md §9 "Dynamic value types").
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value<'s> {
    Variable {
        location: Location<'s>,
        name: String,
    },
    Int {
        location: Location<'s>,
        value: String,
    },
    Float {
        location: Location<'s>,
        value: String,
    },
    String {
        location: Location<'s>,
        value: String,
    },
    Boolean {
        location: Location<'s>,
        value: bool,
    },
    Enum {
        location: Location<'s>,
        value: String,
    },
    List {
        location: Location<'s>,
        values: Vec<Value<'s>>,
    },
    Object {
        location: Location<'s>,
        fields: Vec<ObjectField<'s>>,
    },
}

impl<'s> Value<'s> {
    pub fn location(&self) -> &Location<'s> {
        match self {
            Value::Variable { location, .. }
            | Value::Int { location, .. }
            | Value::Float { location, .. }
            | Value::String { location, .. }
            | Value::Boolean { location, .. }
            | Value::Enum { location, .. }
            | Value::List { location, .. }
            | Value::Object { location, .. } => location,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectField<'s> {
    pub location: Location<'s>,
    pub name: String,
    pub value: Value<'s>,
}

/// A GraphQL type reference. `NonNull` never wraps another `NonNull`
/// (spec.md §3.4 invariant 6) — the grammar in `parser/grammar/ty.rs`
/// enforces this structurally rather than needing a runtime check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type<'s> {
    Named {
        location: Location<'s>,
        name: String,
    },
    List {
        location: Location<'s>,
        of_type: Box<Type<'s>>,
    },
    NonNull {
        location: Location<'s>,
        of_type: Box<Type<'s>>,
    },
}

impl<'s> Type<'s> {
    pub fn location(&self) -> &Location<'s> {
        match self {
            Type::Named { location, .. }
            | Type::List { location, .. }
            | Type::NonNull { location, .. } => location,
        }
    }

    /// The innermost named type, unwrapping any `List`/`NonNull` layers.
    pub fn inner_name(&self) -> &str {
        match self {
            Type::Named { name, .. } => name,
            Type::List { of_type, .. } | Type::NonNull { of_type, .. } => of_type.inner_name(),
        }
    }
}
