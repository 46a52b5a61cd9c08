/// Reference output of the `rust` target for `testdata/schema.json`, checked
/// in as a compiled module so the generated record shape stays testable.
/// The integration tests assert the generator still produces these
/// declarations.
use serde::{Deserialize, Serialize};

/// Allowed values: true
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootSomeBooleanEnum(pub bool);

/// Allowed values: 0, 3
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootSomeIntegerEnum(pub i64);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RootSomeStringEnum {
    #[serde(rename = "a")]
    A,
    #[serde(rename = "b")]
    B,
    #[serde(rename = "c")]
    C,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RootSomeObjectSubobjWha {
    #[serde(rename = "uwu")]
    Uwu,
    #[serde(rename = "owo")]
    Owo,
    #[serde(rename = "rawr")]
    Rawr,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootSomeObjectSubobj {
    pub wha: RootSomeObjectSubobjWha,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootSomeObject {
    pub key1: String,
    pub key2: i64,
    pub subobj: RootSomeObjectSubobj,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Root {
    pub some_boolean: bool,
    pub some_integer: i64,
    pub some_string: String,
    pub some_boolean_enum: RootSomeBooleanEnum,
    pub some_integer_enum: RootSomeIntegerEnum,
    pub some_string_enum: RootSomeStringEnum,
    pub some_array_of_booleans: Vec<bool>,
    pub some_array_of_integers: Vec<i64>,
    pub some_array_of_strings: Vec<String>,
    pub some_object: RootSomeObject,
}
