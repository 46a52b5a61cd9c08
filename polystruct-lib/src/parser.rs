use anyhow::{bail, Context, Result};
use serde_json::Value;

use crate::ir::*;

/// Parse a JSON schema document into IR
pub fn parse(input: &str) -> Result<Schema> {
    let doc: Value = serde_json::from_str(input).context("schema file is not valid JSON")?;

    let root = doc
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or("Root")
        .to_string();

    let props = doc
        .get("properties")
        .and_then(Value::as_object)
        .ok_or_else(|| anyhow::anyhow!("schema has no \"properties\" object"))?;

    let mut structs = Vec::new();
    let mut enums = Vec::new();
    parse_struct(&root, props, &mut structs, &mut enums)?;

    Ok(Schema { root, structs, enums })
}

/// Walk one properties object. Nested structs are pushed before the struct
/// that references them, so `structs` ends up leaf-first.
fn parse_struct(
    name: &str,
    props: &serde_json::Map<String, Value>,
    structs: &mut Vec<StructDef>,
    enums: &mut Vec<EnumDef>,
) -> Result<()> {
    let mut fields = Vec::new();

    for (key, prop) in props {
        let type_name = prop
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| anyhow::anyhow!("property {:?} has no \"type\"", key))?;

        let ty = match type_name {
            "boolean" | "integer" | "string" => {
                let base = primitive(type_name);
                match prop.get("enum") {
                    Some(list) => {
                        let def = parse_enum(name, key, base, list)?;
                        let enum_name = def.name.clone();
                        enums.push(def);
                        FieldType::Enum(enum_name)
                    }
                    None => match base {
                        Primitive::Bool => FieldType::Bool,
                        Primitive::Int => FieldType::Int,
                        Primitive::Str => FieldType::Str,
                    },
                }
            }
            "array" => {
                let item_type = prop
                    .get("items")
                    .and_then(|items| items.get("type"))
                    .and_then(Value::as_str)
                    .ok_or_else(|| {
                        anyhow::anyhow!("array property {:?} has no items type", key)
                    })?;
                match item_type {
                    "boolean" | "integer" | "string" => FieldType::Array(primitive(item_type)),
                    other => bail!(
                        "array property {:?} has unsupported item type {:?}",
                        key,
                        other
                    ),
                }
            }
            "object" => {
                let nested_name = format!("{}{}", name, capitalize(key));
                let nested_props = prop
                    .get("properties")
                    .and_then(Value::as_object)
                    .ok_or_else(|| {
                        anyhow::anyhow!("object property {:?} has no \"properties\"", key)
                    })?;
                parse_struct(&nested_name, nested_props, structs, enums)?;
                FieldType::Struct(nested_name)
            }
            other => bail!("property {:?} has unsupported type {:?}", key, other),
        };

        fields.push(Field {
            name: key.clone(),
            ty,
        });
    }

    structs.push(StructDef {
        name: name.to_string(),
        fields,
    });

    Ok(())
}

fn parse_enum(parent: &str, key: &str, base: Primitive, list: &Value) -> Result<EnumDef> {
    let items = list
        .as_array()
        .ok_or_else(|| anyhow::anyhow!("enum of property {:?} is not an array", key))?;

    let mut values = Vec::new();
    for item in items {
        let value = match (base, item) {
            (Primitive::Bool, Value::Bool(b)) => EnumValue::Bool(*b),
            (Primitive::Int, Value::Number(n)) => EnumValue::Int(
                n.as_i64()
                    .ok_or_else(|| anyhow::anyhow!("enum value {} is not an integer", n))?,
            ),
            (Primitive::Str, Value::String(s)) => EnumValue::Str(s.clone()),
            _ => bail!(
                "enum value {} does not match declared type of property {:?}",
                item,
                key
            ),
        };
        values.push(value);
    }

    if values.is_empty() {
        bail!("enum of property {:?} is empty", key);
    }

    Ok(EnumDef {
        name: format!("{}{}", parent, capitalize(key)),
        key: key.to_string(),
        base,
        values,
    })
}

fn primitive(type_name: &str) -> Primitive {
    match type_name {
        "boolean" => Primitive::Bool,
        "integer" => Primitive::Int,
        _ => Primitive::Str,
    }
}

pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
