use abigen_core::{AbstractClass, FRAMEBASE_8, RDI, TAXONOMY, TypeCategory, TypeDescriptor};

use super::list::{render_json, render_text};

static SAMPLE: &[TypeCategory] = &[TypeCategory {
    name: "Sample Types",
    types: &[
        TypeDescriptor::new("long double _Complex", AbstractClass::CplxFloat128, FRAMEBASE_8),
        TypeDescriptor::unclassified("int8_t", RDI),
    ],
}];

#[test]
fn text_lists_symbol_class_and_location() {
    insta::assert_snapshot!(render_text(SAMPLE), @r"
    Sample Types (2):
      test_long_double__Complex  long double _Complex   CplxFloat128  framebase+8
      test_int8_t                int8_t                 -             %rdi
    ");
}

#[test]
fn json_omits_missing_class_and_size() {
    let json: serde_json::Value = serde_json::from_str(&render_json(SAMPLE).unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "name": "Sample Types",
            "functions": [
                {
                    "symbol": "test_long_double__Complex",
                    "source_name": "long double _Complex",
                    "class": "CplxFloat128",
                    "size": 32,
                    "location": "framebase+8"
                },
                {
                    "symbol": "test_int8_t",
                    "source_name": "int8_t",
                    "location": "%rdi"
                }
            ]
        }])
    );
}

#[test]
fn text_has_one_header_per_category() {
    let output = render_text(TAXONOMY);
    let headers = output.lines().filter(|l| !l.starts_with(' ')).count();
    assert_eq!(headers, TAXONOMY.len());
}
