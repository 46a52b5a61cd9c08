/// polystruct - generate struct declarations from a JSON schema
///
/// A schema is parsed once into IR, then each target-language emitter turns
/// the IR into source text. Implement [`Codegen`] to add a target.

pub mod ir;
pub mod parser;

pub mod go;
pub mod python;
pub mod rust_model;
pub mod sample;
pub mod typescript;
pub mod typescript_zod;

pub use crate::ir::*;

/// Codegen trait - implement this for each target language
pub trait Codegen: std::fmt::Debug {
    fn generate(&self, schema: &Schema) -> anyhow::Result<GeneratedCode>;
    fn language(&self) -> &str;
}

pub struct GeneratedCode {
    pub files: Vec<GeneratedFile>,
}

pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}
