/// Intermediate Representation (IR) - parsed record schema
use serde::{Deserialize, Serialize};

/// Complete record schema: the root struct plus every nested struct and
/// enum-constrained field discovered while walking the schema properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schema {
    /// Name of the top-level struct.
    pub root: String,
    /// Struct definitions, leaf-first: a nested struct always precedes the
    /// struct that references it.
    pub structs: Vec<StructDef>,
    /// Enum definitions, in schema encounter order.
    pub enums: Vec<EnumDef>,
}

impl Schema {
    pub fn enum_def(&self, name: &str) -> Option<&EnumDef> {
        self.enums.iter().find(|e| e.name == name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructDef {
    pub name: String,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    /// Property key exactly as written in the schema.
    pub name: String,
    pub ty: FieldType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FieldType {
    Bool,
    Int,
    Str,
    /// Array of a primitive element type.
    Array(Primitive),
    /// Reference to an [`EnumDef`] by canonical name.
    Enum(String),
    /// Reference to a nested [`StructDef`] by name.
    Struct(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Primitive {
    Bool,
    Int,
    Str,
}

/// An enum-constrained field lifted into a named definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumDef {
    /// Canonical PascalCase name, e.g. `RootSomeStringEnum`.
    pub name: String,
    /// Property key the enum was attached to, e.g. `someStringEnum`.
    pub key: String,
    /// Declared primitive type of the property.
    pub base: Primitive,
    /// Allowed values, in schema order.
    pub values: Vec<EnumValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EnumValue {
    Bool(bool),
    Int(i64),
    Str(String),
}
