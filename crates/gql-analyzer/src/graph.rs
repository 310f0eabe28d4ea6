use indexmap::IndexMap;

use gql_parser::ast::{
    Definition, Document, FieldDefinition, InputValueDefinition, ObjectTypeDefinition, Type,
};

use crate::error::AnalyzerError;

/// The built-in scalars never appear as graph nodes; a reference to one of
/// these is never a cycle participant and never needs resolving.
const BUILTIN_SCALARS: [&str; 5] = ["ID", "String", "Int", "Float", "Boolean"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    Scalar,
}

#[derive(Debug, Clone)]
pub struct TypeNode {
    pub kind: Kind,
    /// Every type this node's fields (or union members) reference, in
    /// declaration order; duplicates are kept since they feed the use-count
    /// tally (spec.md §4.5 step 2).
    pub edges: Vec<String>,
}

/// Index of named type definitions plus their outgoing field-reference
/// edges, built in one pass per spec.md §4.5 step 1, with a second pass to
/// fold `extend type` blocks into the base definition they extend.
pub struct TypeGraph {
    pub nodes: IndexMap<String, TypeNode>,
}

pub fn build(doc: &Document) -> Result<TypeGraph, AnalyzerError> {
    let mut nodes: IndexMap<String, TypeNode> = IndexMap::new();
    let mut extensions: Vec<&ObjectTypeDefinition<'_>> = Vec::new();

    for def in &doc.definitions {
        let (name, kind, edges) = match def {
            Definition::Object(obj) => (
                obj.name.clone(),
                Kind::Object,
                field_edges(&obj.fields),
            ),
            Definition::Interface(interface) => (
                interface.name.clone(),
                Kind::Interface,
                field_edges(&interface.fields),
            ),
            Definition::Union(union) => (union.name.clone(), Kind::Union, union.members.clone()),
            Definition::Enum(enum_def) => (enum_def.name.clone(), Kind::Enum, Vec::new()),
            Definition::InputObject(input) => (
                input.name.clone(),
                Kind::InputObject,
                input_edges(&input.fields),
            ),
            Definition::Scalar(scalar) => (scalar.name.clone(), Kind::Scalar, Vec::new()),
            Definition::TypeExtension(obj) => {
                extensions.push(obj);
                continue;
            }
            Definition::Schema(_) | Definition::Directive(_) | Definition::Operation(_)
            | Definition::Fragment(_) => continue,
        };

        if nodes.contains_key(&name) {
            return Err(AnalyzerError::DuplicateTypeName(name));
        }
        nodes.insert(name, TypeNode { kind, edges });
    }

    for obj in extensions {
        match nodes.get_mut(&obj.name) {
            Some(node) => node.edges.extend(field_edges(&obj.fields)),
            None => return Err(AnalyzerError::ExtensionOfUndefinedType(obj.name.clone())),
        }
    }

    for (name, node) in &nodes {
        for target in &node.edges {
            if !nodes.contains_key(target) && !BUILTIN_SCALARS.contains(&target.as_str()) {
                return Err(AnalyzerError::UndefinedType {
                    referenced_from: name.clone(),
                    name: target.clone(),
                });
            }
        }
    }

    Ok(TypeGraph { nodes })
}

fn field_edges(fields: &[FieldDefinition]) -> Vec<String> {
    fields
        .iter()
        .map(|f| inner_name(&f.ty).to_string())
        .collect()
}

fn input_edges(fields: &[InputValueDefinition]) -> Vec<String> {
    fields
        .iter()
        .map(|f| inner_name(&f.ty).to_string())
        .collect()
}

fn inner_name(ty: &Type) -> &str {
    ty.inner_name()
}
