/// Integration test for every target against the sample schema

use polystruct_lib::*;

const SCHEMA: &str = include_str!("../testdata/schema.json");

fn sample_schema() -> Schema {
    parser::parse(SCHEMA).unwrap()
}

fn single_file(result: GeneratedCode, expected_path: &str) -> String {
    assert_eq!(result.files.len(), 1);
    assert_eq!(result.files[0].path, expected_path);
    result.files[0].content.clone()
}

#[test]
fn typescript_output_is_golden() {
    let ts = typescript::TypeScriptGenerator;
    let content = single_file(ts.generate(&sample_schema()).unwrap(), "struct.ts");

    let expected = "\
type RootSomeObjectSubobj = {
\twha: 'uwu' | 'owo' | 'rawr'
}

type RootSomeObject = {
\tkey1: string
\tkey2: number
\tsubobj: RootSomeObjectSubobj
}

type Root = {
\tsomeBoolean: boolean
\tsomeInteger: number
\tsomeString: string
\tsomeBooleanEnum: true
\tsomeIntegerEnum: 0 | 3
\tsomeStringEnum: 'a' | 'b' | 'c'
\tsomeArrayOfBooleans: Array<boolean>
\tsomeArrayOfIntegers: Array<number>
\tsomeArrayOfStrings: Array<string>
\tsomeObject: RootSomeObject
}

";
    assert_eq!(content, expected);
}

#[test]
fn zod_output_declares_object_schemas() {
    let zod = typescript_zod::ZodGenerator;
    let content = single_file(zod.generate(&sample_schema()).unwrap(), "struct2.ts");

    assert!(content.starts_with("import { z } from 'zod'\n"));
    assert!(content.contains("const Root = z.object({\n"));
    assert!(content.contains("\tsomeBoolean: z.boolean(),\n"));
    assert!(content.contains("\tsomeInteger: z.number().int(),\n"));
    assert!(content.contains("\tsomeString: z.string(),\n"));
    assert!(content.contains("\tsomeBooleanEnum: z.literal(true),\n"));
    assert!(content.contains("\tsomeIntegerEnum: z.union([z.literal(0), z.literal(3)]),\n"));
    assert!(content.contains("\tsomeStringEnum: z.enum(['a', 'b', 'c']),\n"));
    assert!(content.contains("\tsomeArrayOfStrings: z.array(z.string()),\n"));
    assert!(content.contains("\tsomeObject: RootSomeObject,\n"));
    assert!(content.contains("const RootSomeObject = z.object({\n"));
    assert!(content.contains("\tsubobj: RootSomeObjectSubobj,\n"));
    assert!(content.contains("\twha: z.enum(['uwu', 'owo', 'rawr']),\n"));

    // Referenced schema consts must be declared before use
    let subobj = content.find("const RootSomeObjectSubobj").unwrap();
    let object = content.find("const RootSomeObject =").unwrap();
    let root = content.find("const Root =").unwrap();
    assert!(subobj < object && object < root);
}

#[test]
fn go_output_declares_enum_types() {
    let go = go::GoGenerator;
    let content = single_file(go.generate(&sample_schema()).unwrap(), "struct.go");

    assert!(content.starts_with("package main\n"));

    // Enum-constrained fields get named types plus const blocks
    assert!(content.contains("type someBooleanEnumStruct bool\n"));
    assert!(content.contains("\tTrue someBooleanEnumStruct = true\n"));
    assert!(content.contains("type someIntegerEnumStruct int\n"));
    assert!(content.contains("\tSomeIntegerEnum0 someIntegerEnumStruct = 0\n"));
    assert!(content.contains("\tSomeIntegerEnum3 someIntegerEnumStruct = 3\n"));
    assert!(content.contains("type someStringEnumStruct string\n"));
    assert!(content.contains("\tA someStringEnumStruct = \"a\"\n"));
    assert!(content.contains("type whaStruct string\n"));
    assert!(content.contains("\tRawr whaStruct = \"rawr\"\n"));

    assert!(content.contains("type Root struct {\n"));
    assert!(content.contains("\tsomeBoolean bool\n"));
    assert!(content.contains("\tsomeBooleanEnum someBooleanEnumStruct\n"));
    assert!(content.contains("\tsomeStringEnum someStringEnumStruct\n"));
    assert!(content.contains("\tsomeArrayOfIntegers []int\n"));
    assert!(content.contains("\tsomeObject RootSomeObject\n"));
    assert!(content.contains("\twha whaStruct\n"));
    assert!(content.contains("\tkey1 string\n"));
    assert!(content.contains("\tkey2 int\n"));

    // Leaf structs come first
    let subobj = content.find("type RootSomeObjectSubobj struct").unwrap();
    let root = content.find("type Root struct").unwrap();
    assert!(subobj < root);
}

#[test]
fn rust_output_matches_checked_in_sample() {
    let rust = rust_model::RustModelGenerator;
    let content = single_file(rust.generate(&sample_schema()).unwrap(), "struct.rs");

    assert!(content.contains("pub struct RootSomeBooleanEnum(pub bool);\n"));
    assert!(content.contains("/// Allowed values: 0, 3\n"));
    assert!(content.contains("pub struct RootSomeIntegerEnum(pub i64);\n"));
    assert!(content.contains("pub enum RootSomeStringEnum {\n"));
    assert!(content.contains("    #[serde(rename = \"a\")]\n    A,\n"));
    assert!(content.contains("#[serde(rename_all = \"camelCase\")]\n"));
    assert!(content.contains("    pub some_boolean: bool,\n"));
    assert!(content.contains("    pub some_array_of_integers: Vec<i64>,\n"));
    assert!(content.contains("    pub some_object: RootSomeObject,\n"));
    assert!(content.contains("    pub wha: RootSomeObjectSubobjWha,\n"));

    // Every generated declaration line must exist verbatim in src/sample.rs,
    // which keeps the checked-in module honest.
    let sample_src = include_str!("../src/sample.rs");
    for line in content.lines().skip(1).filter(|line| !line.is_empty()) {
        assert!(
            sample_src.contains(line),
            "src/sample.rs is out of sync with the rust target: {:?}",
            line
        );
    }
}

#[test]
fn python_output_declares_typed_dicts() {
    let py = python::PythonGenerator;
    let content = single_file(py.generate(&sample_schema()).unwrap(), "struct.py");

    assert!(content.starts_with("from typing import Literal, TypedDict\n"));
    assert!(content.contains("class Root(TypedDict):\n"));
    assert!(content.contains("\tsomeBoolean: bool\n"));
    assert!(content.contains("\tsomeInteger: int\n"));
    assert!(content.contains("\tsomeString: str\n"));
    assert!(content.contains("\tsomeBooleanEnum: Literal[True]\n"));
    assert!(content.contains("\tsomeIntegerEnum: Literal[0, 3]\n"));
    assert!(content.contains("\tsomeStringEnum: Literal['a', 'b', 'c']\n"));
    assert!(content.contains("\tsomeArrayOfBooleans: list[bool]\n"));
    assert!(content.contains("\tsomeObject: RootSomeObject\n"));
    assert!(content.contains("class RootSomeObjectSubobj(TypedDict):\n"));
    assert!(content.contains("\twha: Literal['uwu', 'owo', 'rawr']\n"));
}

#[test]
fn python_import_skips_literal_without_enums() {
    let schema = parser::parse(r#"{ "properties": { "x": { "type": "string" } } }"#).unwrap();
    let py = python::PythonGenerator;
    let content = py.generate(&schema).unwrap().files.remove(0).content;
    assert!(content.starts_with("from typing import TypedDict\n"));
}
