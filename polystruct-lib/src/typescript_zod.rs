/// Zod object-schema generator

use anyhow::Result;

use crate::ir::*;

#[derive(Debug)]
pub struct ZodGenerator;

impl crate::Codegen for ZodGenerator {
    fn generate(&self, schema: &Schema) -> Result<crate::GeneratedCode> {
        let mut content = String::from("import { z } from 'zod'\n\n");

        for def in &schema.structs {
            content.push_str(&generate_object(def, schema)?);
            content.push('\n');
        }

        Ok(crate::GeneratedCode {
            files: vec![crate::GeneratedFile {
                path: "struct2.ts".to_string(),
                content,
            }],
        })
    }

    fn language(&self) -> &str {
        "typescript-zod"
    }
}

fn generate_object(def: &StructDef, schema: &Schema) -> Result<String> {
    let mut output = String::new();

    output.push_str(&format!("const {} = z.object({{\n", def.name));
    for field in &def.fields {
        output.push_str(&format!(
            "\t{}: {},\n",
            field.name,
            zod_type(&field.ty, schema)?
        ));
    }
    output.push_str("})\n");

    Ok(output)
}

fn zod_type(ty: &FieldType, schema: &Schema) -> Result<String> {
    Ok(match ty {
        FieldType::Bool => "z.boolean()".to_string(),
        FieldType::Int => "z.number().int()".to_string(),
        FieldType::Str => "z.string()".to_string(),
        FieldType::Array(item) => format!("z.array({})", zod_primitive(*item)),
        FieldType::Enum(name) => {
            let def = schema
                .enum_def(name)
                .ok_or_else(|| anyhow::anyhow!("unknown enum {}", name))?;
            zod_enum(def)
        }
        FieldType::Struct(name) => name.clone(),
    })
}

fn zod_primitive(item: Primitive) -> &'static str {
    match item {
        Primitive::Bool => "z.boolean()",
        Primitive::Int => "z.number().int()",
        Primitive::Str => "z.string()",
    }
}

/// `z.enum` only accepts string values; boolean and integer enums become
/// literal unions instead.
fn zod_enum(def: &EnumDef) -> String {
    match def.base {
        Primitive::Str => {
            let values: Vec<String> = def
                .values
                .iter()
                .map(|v| match v {
                    EnumValue::Str(s) => format!("'{}'", s),
                    EnumValue::Bool(b) => format!("'{}'", b),
                    EnumValue::Int(i) => format!("'{}'", i),
                })
                .collect();
            format!("z.enum([{}])", values.join(", "))
        }
        _ => {
            let mut literals: Vec<String> = def
                .values
                .iter()
                .map(|v| match v {
                    EnumValue::Bool(b) => format!("z.literal({})", b),
                    EnumValue::Int(i) => format!("z.literal({})", i),
                    EnumValue::Str(s) => format!("z.literal('{}')", s),
                })
                .collect();
            if literals.len() == 1 {
                literals.remove(0)
            } else {
                format!("z.union([{}])", literals.join(", "))
            }
        }
    }
}
