/// TypeScript type-alias generator

use anyhow::Result;

use crate::ir::*;

#[derive(Debug)]
pub struct TypeScriptGenerator;

impl crate::Codegen for TypeScriptGenerator {
    fn generate(&self, schema: &Schema) -> Result<crate::GeneratedCode> {
        let mut content = String::new();

        for def in &schema.structs {
            content.push_str(&generate_type(def, schema)?);
            content.push('\n');
        }

        Ok(crate::GeneratedCode {
            files: vec![crate::GeneratedFile {
                path: "struct.ts".to_string(),
                content,
            }],
        })
    }

    fn language(&self) -> &str {
        "typescript"
    }
}

fn generate_type(def: &StructDef, schema: &Schema) -> Result<String> {
    let mut output = String::new();

    output.push_str(&format!("type {} = {{\n", def.name));
    for field in &def.fields {
        output.push_str(&format!("\t{}: {}\n", field.name, ts_type(&field.ty, schema)?));
    }
    output.push_str("}\n");

    Ok(output)
}

fn ts_type(ty: &FieldType, schema: &Schema) -> Result<String> {
    Ok(match ty {
        FieldType::Bool => "boolean".to_string(),
        FieldType::Int => "number".to_string(),
        FieldType::Str => "string".to_string(),
        FieldType::Array(item) => format!("Array<{}>", ts_primitive(*item)),
        FieldType::Enum(name) => {
            let def = schema
                .enum_def(name)
                .ok_or_else(|| anyhow::anyhow!("unknown enum {}", name))?;
            let literals: Vec<String> = def.values.iter().map(ts_literal).collect();
            literals.join(" | ")
        }
        FieldType::Struct(name) => name.clone(),
    })
}

fn ts_primitive(item: Primitive) -> &'static str {
    match item {
        Primitive::Bool => "boolean",
        Primitive::Int => "number",
        Primitive::Str => "string",
    }
}

fn ts_literal(value: &EnumValue) -> String {
    match value {
        EnumValue::Bool(b) => b.to_string(),
        EnumValue::Int(i) => i.to_string(),
        EnumValue::Str(s) => format!("'{}'", s),
    }
}
