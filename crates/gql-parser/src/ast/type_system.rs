use super::{CommentGroup, Directive, Location, Type, Value};

/// `schema { query: Query ... }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDefinition<'s> {
    pub location: Location<'s>,
    pub directives: Vec<Directive<'s>>,
    pub root_operations: Vec<OperationTypeDefinition<'s>>,
    pub doc: Option<CommentGroup<'s>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationTypeDefinition<'s> {
    pub location: Location<'s>,
    pub operation: super::OperationType,
    pub named_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarTypeDefinition<'s> {
    pub location: Location<'s>,
    pub name: String,
    pub directives: Vec<Directive<'s>>,
    pub doc: Option<CommentGroup<'s>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectTypeDefinition<'s> {
    pub location: Location<'s>,
    pub name: String,
    pub implements_interfaces: Vec<String>,
    pub directives: Vec<Directive<'s>>,
    pub fields: Vec<FieldDefinition<'s>>,
    pub doc: Option<CommentGroup<'s>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceTypeDefinition<'s> {
    pub location: Location<'s>,
    pub name: String,
    pub implements_interfaces: Vec<String>,
    pub directives: Vec<Directive<'s>>,
    pub fields: Vec<FieldDefinition<'s>>,
    pub doc: Option<CommentGroup<'s>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionTypeDefinition<'s> {
    pub location: Location<'s>,
    pub name: String,
    pub directives: Vec<Directive<'s>>,
    pub members: Vec<String>,
    pub doc: Option<CommentGroup<'s>>,
    pub comment: Option<CommentGroup<'s>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumTypeDefinition<'s> {
    pub location: Location<'s>,
    pub name: String,
    pub directives: Vec<Directive<'s>>,
    pub values: Vec<EnumValueDefinition<'s>>,
    pub doc: Option<CommentGroup<'s>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValueDefinition<'s> {
    pub location: Location<'s>,
    pub value: String,
    pub directives: Vec<Directive<'s>>,
    pub doc: Option<CommentGroup<'s>>,
    pub comment: Option<CommentGroup<'s>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputObjectTypeDefinition<'s> {
    pub location: Location<'s>,
    pub name: String,
    pub directives: Vec<Directive<'s>>,
    pub fields: Vec<InputValueDefinition<'s>>,
    pub doc: Option<CommentGroup<'s>>,
}

/// A field declared inside an object/interface type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition<'s> {
    pub location: Location<'s>,
    pub name: String,
    pub arguments: Vec<InputValueDefinition<'s>>,
    pub ty: Type<'s>,
    pub directives: Vec<Directive<'s>>,
    pub doc: Option<CommentGroup<'s>>,
    pub comment: Option<CommentGroup<'s>>,
}

/// An input value: either a directive/field argument definition or an
/// input-object field definition. Input-object fields never carry an
/// argument list (spec.md §4.3.2); that distinction lives in the grammar,
/// not in this shared node type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputValueDefinition<'s> {
    pub location: Location<'s>,
    pub name: String,
    pub ty: Type<'s>,
    pub default_value: Option<Value<'s>>,
    pub directives: Vec<Directive<'s>>,
    pub doc: Option<CommentGroup<'s>>,
    pub comment: Option<CommentGroup<'s>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveDefinition<'s> {
    pub location: Location<'s>,
    pub name: String,
    pub arguments: Vec<InputValueDefinition<'s>>,
    pub repeatable: bool,
    pub locations: Vec<String>,
    pub doc: Option<CommentGroup<'s>>,
}
