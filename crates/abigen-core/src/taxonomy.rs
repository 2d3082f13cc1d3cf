//! The static type taxonomy for the x86-64 System V calling convention.
//!
//! Every entry describes a function taking a single parameter of that type,
//! so the expected location is always the first slot of the parameter's
//! register class: `%rdi` for INTEGER, `%xmm0` for SSE, and the first
//! eightbyte above the frame base for anything passed in memory.

use serde::Serialize;

use crate::AbstractClass::{self, *};

/// First INTEGER-class argument register.
pub const RDI: &str = "%rdi";
/// First SSE-class argument register.
pub const XMM0: &str = "%xmm0";
/// First stack-passed argument, relative to the frame base.
pub const FRAMEBASE_8: &str = "framebase+8";

/// One concrete parameter type under test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TypeDescriptor {
    /// Spelling of the type in a declaration, e.g. `long double _Complex`.
    pub source_name: &'static str,
    /// Expected classification. `None` for typedefs whose width the
    /// language leaves to the implementation.
    #[serde(rename = "class", skip_serializing_if = "Option::is_none")]
    pub abstract_class: Option<AbstractClass>,
    /// Expected location string, compared byte-for-byte.
    #[serde(rename = "location")]
    pub expected_location: &'static str,
}

impl TypeDescriptor {
    pub const fn new(
        source_name: &'static str,
        abstract_class: AbstractClass,
        expected_location: &'static str,
    ) -> Self {
        Self {
            source_name,
            abstract_class: Some(abstract_class),
            expected_location,
        }
    }

    /// Descriptor that only asserts a location.
    pub const fn unclassified(source_name: &'static str, expected_location: &'static str) -> Self {
        Self {
            source_name,
            abstract_class: None,
            expected_location,
        }
    }
}

/// A named group of related types.
#[derive(Clone, Copy, Debug)]
pub struct TypeCategory {
    pub name: &'static str,
    pub types: &'static [TypeDescriptor],
}

const fn t(name: &'static str, class: AbstractClass, loc: &'static str) -> TypeDescriptor {
    TypeDescriptor::new(name, class, loc)
}

const fn u(name: &'static str) -> TypeDescriptor {
    TypeDescriptor::unclassified(name, RDI)
}

/// Categories in output order.
pub static TAXONOMY: &[TypeCategory] = &[
    TypeCategory {
        name: "Integral Types",
        types: &[
            t("bool", Integer8, RDI),
            t("char", Integer8, RDI),
            t("short", Integer16, RDI),
            t("int", Integer32, RDI),
            t("long", Integer64, RDI),
            t("long long", Integer64, RDI),
        ],
    },
    TypeCategory {
        name: "Signed Integral Types",
        types: &[
            t("signed", Integer32, RDI),
            t("signed char", Integer8, RDI),
            t("signed short", Integer16, RDI),
            t("signed int", Integer32, RDI),
            t("signed long", Integer64, RDI),
            t("signed long long", Integer64, RDI),
        ],
    },
    TypeCategory {
        name: "Unsigned Integral Types",
        types: &[
            t("unsigned", Integer32, RDI),
            t("unsigned char", Integer8, RDI),
            t("unsigned short", Integer16, RDI),
            t("unsigned int", Integer32, RDI),
            t("unsigned long", Integer64, RDI),
            t("unsigned long long", Integer64, RDI),
        ],
    },
    TypeCategory {
        name: "Floating Point Types",
        types: &[
            t("float", Float32, XMM0),
            t("double", Float64, XMM0),
            t("long double", Float128, FRAMEBASE_8),
            t("float _Complex", CplxFloat32, FRAMEBASE_8),
            t("double _Complex", CplxFloat64, FRAMEBASE_8),
            t("long double _Complex", CplxFloat128, FRAMEBASE_8),
        ],
    },
    TypeCategory {
        name: "UTF Types",
        types: &[
            t("wchar_t", Integer32, RDI),
            t("char16_t", Integer16, RDI),
            t("char32_t", Integer32, RDI),
        ],
    },
    TypeCategory {
        name: "Size Types",
        types: &[
            t("size_t", Integer64, RDI),
            t("intmax_t", Integer64, RDI),
            t("uintmax_t", Integer64, RDI),
            t("intptr_t", Integer64, RDI),
            t("uintptr_t", Integer64, RDI),
        ],
    },
    // Width is implementation-defined; any INTEGER-class scalar still lands in %rdi.
    TypeCategory {
        name: "Fixed-width Integral Types",
        types: &[
            u("int8_t"),
            u("int16_t"),
            u("int32_t"),
            u("int64_t"),
            u("int_fast8_t"),
            u("int_fast16_t"),
            u("int_fast32_t"),
            u("int_fast64_t"),
            u("int_least8_t"),
            u("int_least16_t"),
            u("int_least32_t"),
            u("int_least64_t"),
        ],
    },
    TypeCategory {
        name: "Unsigned Fixed-width Integral Types",
        types: &[
            u("uint8_t"),
            u("uint16_t"),
            u("uint32_t"),
            u("uint64_t"),
            u("uint_fast8_t"),
            u("uint_fast16_t"),
            u("uint_fast32_t"),
            u("uint_fast64_t"),
            u("uint_least8_t"),
            u("uint_least16_t"),
            u("uint_least32_t"),
            u("uint_least64_t"),
        ],
    },
];
