use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use polystruct_lib::go::GoGenerator;
use polystruct_lib::python::PythonGenerator;
use polystruct_lib::rust_model::RustModelGenerator;
use polystruct_lib::typescript::TypeScriptGenerator;
use polystruct_lib::typescript_zod::ZodGenerator;
use polystruct_lib::{parser, Codegen};

#[derive(Parser)]
#[command(name = "polystruct")]
#[command(about = "Generate struct declarations from a JSON schema")]
struct Args {
    /// Input JSON schema file
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "output")]
    output: PathBuf,

    /// Target language (typescript, typescript-zod, go, rust, python, all)
    #[arg(short, long, default_value = "all")]
    target: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("📖 Reading schema: {}", args.input.display());
    let input = std::fs::read_to_string(&args.input)?;

    println!("🔍 Parsing...");
    let schema = parser::parse(&input)?;

    let generators = select_targets(&args.target)?;

    std::fs::create_dir_all(&args.output)?;
    for generator in generators {
        println!("🎨 Generating {} code...", generator.language());
        let code = generator.generate(&schema)?;
        for file in code.files {
            let path = args.output.join(&file.path);
            println!("💾 Writing to: {}", path.display());
            std::fs::write(path, file.content)?;
        }
    }

    println!("✅ Done!");
    Ok(())
}

fn select_targets(target: &str) -> Result<Vec<Box<dyn Codegen>>> {
    Ok(match target {
        "typescript" => vec![Box::new(TypeScriptGenerator)],
        "typescript-zod" => vec![Box::new(ZodGenerator)],
        "go" => vec![Box::new(GoGenerator)],
        "rust" => vec![Box::new(RustModelGenerator)],
        "python" => vec![Box::new(PythonGenerator)],
        "all" => vec![
            Box::new(TypeScriptGenerator),
            Box::new(ZodGenerator),
            Box::new(GoGenerator),
            Box::new(RustModelGenerator),
            Box::new(PythonGenerator),
        ],
        _ => anyhow::bail!("Unsupported target: {}", target),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_expands_to_every_target() {
        let generators = select_targets("all").unwrap();
        let languages: Vec<&str> = generators.iter().map(|g| g.language()).collect();
        assert_eq!(
            languages,
            vec!["typescript", "typescript-zod", "go", "rust", "python"]
        );
    }

    #[test]
    fn unknown_target_is_rejected() {
        let err = select_targets("cobol").unwrap_err();
        assert!(err.to_string().contains("Unsupported target"));
    }
}
