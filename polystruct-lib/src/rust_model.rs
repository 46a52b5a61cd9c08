/// Rust model generator
///
/// Emits serde-derive structs: camelCase on the wire, snake_case fields.
/// String enums become real Rust enums; boolean and integer enums become
/// newtype wrappers, since serde renames only cover string representations.

use anyhow::Result;

use crate::ir::*;

#[derive(Debug)]
pub struct RustModelGenerator;

impl crate::Codegen for RustModelGenerator {
    fn generate(&self, schema: &Schema) -> Result<crate::GeneratedCode> {
        let mut content = String::new();
        content.push_str("// Generated by polystruct\n");
        content.push_str("use serde::{Deserialize, Serialize};\n\n");

        for def in &schema.enums {
            content.push_str(&generate_enum(def));
            content.push('\n');
        }

        for def in &schema.structs {
            content.push_str(&generate_struct(def)?);
            content.push('\n');
        }

        Ok(crate::GeneratedCode {
            files: vec![crate::GeneratedFile {
                path: "struct.rs".to_string(),
                content,
            }],
        })
    }

    fn language(&self) -> &str {
        "rust"
    }
}

fn generate_enum(def: &EnumDef) -> String {
    let mut output = String::new();

    match def.base {
        Primitive::Str => {
            output.push_str("#[derive(Debug, Clone, Serialize, Deserialize)]\n");
            output.push_str(&format!("pub enum {} {{\n", def.name));
            for value in &def.values {
                if let EnumValue::Str(s) = value {
                    output.push_str(&format!("    #[serde(rename = \"{}\")]\n", s));
                    output.push_str(&format!("    {},\n", capitalize(s)));
                }
            }
            output.push_str("}\n");
        }
        Primitive::Bool | Primitive::Int => {
            let inner = match def.base {
                Primitive::Bool => "bool",
                _ => "i64",
            };
            let allowed: Vec<String> = def
                .values
                .iter()
                .map(|v| match v {
                    EnumValue::Bool(b) => b.to_string(),
                    EnumValue::Int(i) => i.to_string(),
                    EnumValue::Str(s) => s.clone(),
                })
                .collect();
            output.push_str(&format!("/// Allowed values: {}\n", allowed.join(", ")));
            output.push_str("#[derive(Debug, Clone, Serialize, Deserialize)]\n");
            output.push_str(&format!("pub struct {}(pub {});\n", def.name, inner));
        }
    }

    output
}

fn generate_struct(def: &StructDef) -> Result<String> {
    let mut output = String::new();

    output.push_str("#[derive(Debug, Clone, Serialize, Deserialize)]\n");
    output.push_str("#[serde(rename_all = \"camelCase\")]\n");
    output.push_str(&format!("pub struct {} {{\n", def.name));
    for field in &def.fields {
        output.push_str(&format!(
            "    pub {}: {},\n",
            to_snake_case(&field.name),
            rust_type(&field.ty)
        ));
    }
    output.push_str("}\n");

    Ok(output)
}

fn rust_type(ty: &FieldType) -> String {
    match ty {
        FieldType::Bool => "bool".to_string(),
        FieldType::Int => "i64".to_string(),
        FieldType::Str => "String".to_string(),
        FieldType::Array(item) => format!("Vec<{}>", rust_primitive(*item)),
        FieldType::Enum(name) | FieldType::Struct(name) => name.clone(),
    }
}

fn rust_primitive(item: Primitive) -> &'static str {
    match item {
        Primitive::Bool => "bool",
        Primitive::Int => "i64",
        Primitive::Str => "String",
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, ch) in s.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 && !result.ends_with('_') {
                result.push('_');
            }
            result.push(ch.to_ascii_lowercase());
        } else {
            result.push(ch);
        }
    }
    result
}
