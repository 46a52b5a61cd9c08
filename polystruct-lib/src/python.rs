/// Python TypedDict generator

use anyhow::Result;

use crate::ir::*;

#[derive(Debug)]
pub struct PythonGenerator;

impl crate::Codegen for PythonGenerator {
    fn generate(&self, schema: &Schema) -> Result<crate::GeneratedCode> {
        let needs_literal = !schema.enums.is_empty();
        let mut content = if needs_literal {
            String::from("from typing import Literal, TypedDict\n\n\n")
        } else {
            String::from("from typing import TypedDict\n\n\n")
        };

        for def in &schema.structs {
            content.push_str(&generate_class(def, schema)?);
            content.push('\n');
        }

        Ok(crate::GeneratedCode {
            files: vec![crate::GeneratedFile {
                path: "struct.py".to_string(),
                content,
            }],
        })
    }

    fn language(&self) -> &str {
        "python"
    }
}

fn generate_class(def: &StructDef, schema: &Schema) -> Result<String> {
    let mut output = String::new();

    output.push_str(&format!("class {}(TypedDict):\n", def.name));
    if def.fields.is_empty() {
        output.push_str("\tpass\n");
    }
    for field in &def.fields {
        output.push_str(&format!(
            "\t{}: {}\n",
            field.name,
            py_type(&field.ty, schema)?
        ));
    }

    Ok(output)
}

fn py_type(ty: &FieldType, schema: &Schema) -> Result<String> {
    Ok(match ty {
        FieldType::Bool => "bool".to_string(),
        FieldType::Int => "int".to_string(),
        FieldType::Str => "str".to_string(),
        FieldType::Array(item) => format!("list[{}]", py_primitive(*item)),
        FieldType::Enum(name) => {
            let def = schema
                .enum_def(name)
                .ok_or_else(|| anyhow::anyhow!("unknown enum {}", name))?;
            let literals: Vec<String> = def
                .values
                .iter()
                .map(|v| match v {
                    EnumValue::Bool(b) => if *b { "True" } else { "False" }.to_string(),
                    EnumValue::Int(i) => i.to_string(),
                    EnumValue::Str(s) => format!("'{}'", s),
                })
                .collect();
            format!("Literal[{}]", literals.join(", "))
        }
        FieldType::Struct(name) => name.clone(),
    })
}

fn py_primitive(item: Primitive) -> &'static str {
    match item {
        Primitive::Bool => "bool",
        Primitive::Int => "int",
        Primitive::Str => "str",
    }
}
