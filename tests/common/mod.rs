//! Shared test utilities for integration tests
#![allow(dead_code)]

use exprmod::{parser, ContextDef, DimensionalScope, NormalizationModifier, SelectionScope};

/// Load a test fixture from the tests/test_data directory
pub fn load_fixture(name: &str) -> ContextDef {
    init_tracing();
    let path = format!("tests/test_data/{}", name);
    if name.ends_with(".json") {
        return parser::parse_json_file(&path)
            .unwrap_or_else(|e| panic!("Failed to load test data {}: {}", name, e));
    }
    parser::parse_file(&path)
        .unwrap_or_else(|e| panic!("Failed to load test data {}: {}", name, e))
}

/// Load a fixture and replace its modifier
pub fn with_modifier(name: &str, modifier: NormalizationModifier) -> ContextDef {
    let mut def = load_fixture(name);
    def.modifier = modifier;
    def
}

/// Modifier from the integer scope codes, the way the properties store it
pub fn modifier(selection_scope: u8, dimensional_scope: u8) -> NormalizationModifier {
    let selection_scope = match selection_scope {
        0 => SelectionScope::CurrentSelection,
        1 => SelectionScope::SelectField {
            field: "Product".to_string(),
            value: "Jeans".to_string(),
        },
        _ => SelectionScope::IgnoreAllSelections,
    };
    let dimensional_scope = match dimensional_scope {
        0 => DimensionalScope::RespectOne { dimension: 0 },
        1 => DimensionalScope::RespectAll,
        _ => DimensionalScope::DisregardAll,
    };
    NormalizationModifier::new(selection_scope, dimensional_scope)
}

/// Route library logs to the test output, once
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
