use abigen_core::{AbstractClass, FRAMEBASE_8, RDI, TypeCategory, TypeDescriptor};

use crate::{Config, DeclarationEmitter};

static SAMPLE: TypeCategory = TypeCategory {
    name: "Sample Types",
    types: &[
        TypeDescriptor::new("long long", AbstractClass::Integer64, RDI),
        TypeDescriptor::new("long double _Complex", AbstractClass::CplxFloat128, FRAMEBASE_8),
    ],
};

fn render(config: &Config) -> String {
    let mut emitter = DeclarationEmitter::new(config);
    emitter.begin_category(&SAMPLE);
    for ty in SAMPLE.types {
        emitter.declaration(ty);
    }
    emitter.null_case();
    emitter.finish()
}

#[test]
fn declarations_default_config() {
    insta::assert_snapshot!(render(&Config::new()), @r#"
    // @generated by abigen. Do not edit.

    // Sample Types
    extern "C" void test_long_long(long long x) {}
    extern "C" void test_long_double__Complex(long double _Complex x) {}

    // Register Allocation - Null Types
    extern "C" void test_void() {}
    "#);
}

#[test]
fn declarations_custom_param_name() {
    let output = render(&Config::new().param_name("value"));
    assert!(output.contains("extern \"C\" void test_long_long(long long value) {}\n"));
    assert!(output.contains("extern \"C\" void test_void() {}\n"));
}

#[test]
fn null_case_takes_no_parameters() {
    let config = Config::new();
    let mut emitter = DeclarationEmitter::new(&config);
    emitter.null_case();
    let output = emitter.finish();

    assert_eq!(output.matches("extern \"C\"").count(), 1);
    assert!(output.ends_with("extern \"C\" void test_void() {}\n"));
}
