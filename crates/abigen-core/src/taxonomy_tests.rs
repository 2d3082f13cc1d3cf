use crate::{AbstractClass, FRAMEBASE_8, RDI, TAXONOMY, XMM0, type_count};

fn category_names() -> Vec<&'static str> {
    TAXONOMY.iter().map(|c| c.name).collect()
}

#[test]
fn categories_iterate_in_output_order() {
    assert_eq!(
        category_names(),
        [
            "Integral Types",
            "Signed Integral Types",
            "Unsigned Integral Types",
            "Floating Point Types",
            "UTF Types",
            "Size Types",
            "Fixed-width Integral Types",
            "Unsigned Fixed-width Integral Types",
        ]
    );
}

#[test]
fn type_count_covers_every_category() {
    assert_eq!(type_count(TAXONOMY), 56);
    assert_eq!(type_count(&TAXONOMY[..1]), 6);
}

#[test]
fn fixed_width_typedefs_are_unclassified() {
    for category in TAXONOMY.iter().filter(|c| c.name.contains("Fixed-width")) {
        for ty in category.types {
            assert_eq!(ty.abstract_class, None, "{} should omit its class", ty.source_name);
            assert_eq!(ty.expected_location, RDI);
        }
    }
}

#[test]
fn standard_types_are_classified() {
    for category in TAXONOMY.iter().filter(|c| !c.name.contains("Fixed-width")) {
        for ty in category.types {
            assert!(
                ty.abstract_class.is_some(),
                "{} should carry a class",
                ty.source_name
            );
        }
    }
}

#[test]
fn locations_follow_register_class() {
    for ty in TAXONOMY.iter().flat_map(|c| c.types) {
        let expected = match ty.abstract_class {
            Some(AbstractClass::Float32 | AbstractClass::Float64) => XMM0,
            Some(
                AbstractClass::Float128
                | AbstractClass::CplxFloat32
                | AbstractClass::CplxFloat64
                | AbstractClass::CplxFloat128,
            ) => FRAMEBASE_8,
            _ => RDI,
        };
        assert_eq!(ty.expected_location, expected, "{}", ty.source_name);
    }
}

#[test]
fn long_long_descriptor() {
    let ty = TAXONOMY[0]
        .types
        .iter()
        .find(|t| t.source_name == "long long")
        .unwrap();
    assert_eq!(ty.abstract_class, Some(AbstractClass::Integer64));
    assert_eq!(ty.expected_location, "%rdi");
}

#[test]
fn descriptor_serializes_without_missing_class() {
    let classified = serde_json::to_value(TAXONOMY[3].types[0]).unwrap();
    assert_eq!(
        classified,
        serde_json::json!({"source_name": "float", "class": "Float32", "location": "%xmm0"})
    );

    let unclassified = serde_json::to_value(TAXONOMY[6].types[0]).unwrap();
    assert_eq!(
        unclassified,
        serde_json::json!({"source_name": "int8_t", "location": "%rdi"})
    );
}
