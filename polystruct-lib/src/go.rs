/// Go struct generator
///
/// Enum-constrained fields become named types (`type someStringEnumStruct
/// string`) with a `const` block of allowed values, declared ahead of the
/// structs that reference them.

use anyhow::Result;

use crate::ir::*;

#[derive(Debug)]
pub struct GoGenerator;

impl crate::Codegen for GoGenerator {
    fn generate(&self, schema: &Schema) -> Result<crate::GeneratedCode> {
        let mut content = String::from("package main\n\n");

        for def in &schema.enums {
            content.push_str(&generate_enum(def));
            content.push('\n');
        }

        for def in &schema.structs {
            content.push_str(&generate_struct(def, schema)?);
            content.push('\n');
        }

        Ok(crate::GeneratedCode {
            files: vec![crate::GeneratedFile {
                path: "struct.go".to_string(),
                content,
            }],
        })
    }

    fn language(&self) -> &str {
        "go"
    }
}

/// On-the-wire name of an enum type: the property key plus `Struct`,
/// e.g. `someStringEnumStruct`, `whaStruct`.
fn go_enum_name(def: &EnumDef) -> String {
    format!("{}Struct", def.key)
}

fn generate_enum(def: &EnumDef) -> String {
    let name = go_enum_name(def);
    let base = match def.base {
        Primitive::Bool => "bool",
        Primitive::Int => "int",
        Primitive::Str => "string",
    };

    let mut output = String::new();
    output.push_str(&format!("type {} {}\n\n", name, base));
    output.push_str("const (\n");
    for value in &def.values {
        match value {
            EnumValue::Bool(b) => {
                output.push_str(&format!(
                    "\t{} {} = {}\n",
                    capitalize(&b.to_string()),
                    name,
                    b
                ));
            }
            EnumValue::Int(i) => {
                output.push_str(&format!("\t{}{} {} = {}\n", capitalize(&def.key), i, name, i));
            }
            EnumValue::Str(s) => {
                output.push_str(&format!("\t{} {} = \"{}\"\n", capitalize(s), name, s));
            }
        }
    }
    output.push_str(")\n");

    output
}

fn generate_struct(def: &StructDef, schema: &Schema) -> Result<String> {
    let mut output = String::new();

    output.push_str(&format!("type {} struct {{\n", def.name));
    for field in &def.fields {
        output.push_str(&format!("\t{} {}\n", field.name, go_type(&field.ty, schema)?));
    }
    output.push_str("}\n");

    Ok(output)
}

fn go_type(ty: &FieldType, schema: &Schema) -> Result<String> {
    Ok(match ty {
        FieldType::Bool => "bool".to_string(),
        FieldType::Int => "int".to_string(),
        FieldType::Str => "string".to_string(),
        FieldType::Array(item) => format!("[]{}", go_primitive(*item)),
        FieldType::Enum(name) => {
            let def = schema
                .enum_def(name)
                .ok_or_else(|| anyhow::anyhow!("unknown enum {}", name))?;
            go_enum_name(def)
        }
        FieldType::Struct(name) => name.clone(),
    })
}

fn go_primitive(item: Primitive) -> &'static str {
    match item {
        Primitive::Bool => "bool",
        Primitive::Int => "int",
        Primitive::Str => "string",
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
