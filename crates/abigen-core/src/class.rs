//! ABI-level parameter classification.

use std::fmt;

use serde::Serialize;

/// Classification an inspector assigns to a parameter's type, independent
/// of its source-language spelling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum AbstractClass {
    Integer8,
    Integer16,
    Integer32,
    Integer64,
    Float32,
    Float64,
    Float128,
    CplxFloat32,
    CplxFloat64,
    CplxFloat128,
}

impl AbstractClass {
    /// The spelling an inspector reports for this class.
    pub fn as_str(self) -> &'static str {
        match self {
            AbstractClass::Integer8 => "Integer8",
            AbstractClass::Integer16 => "Integer16",
            AbstractClass::Integer32 => "Integer32",
            AbstractClass::Integer64 => "Integer64",
            AbstractClass::Float32 => "Float32",
            AbstractClass::Float64 => "Float64",
            AbstractClass::Float128 => "Float128",
            AbstractClass::CplxFloat32 => "CplxFloat32",
            AbstractClass::CplxFloat64 => "CplxFloat64",
            AbstractClass::CplxFloat128 => "CplxFloat128",
        }
    }

    /// Width of the value in bytes.
    pub fn size_in_bytes(self) -> usize {
        match self {
            AbstractClass::Integer8 => 1,
            AbstractClass::Integer16 => 2,
            AbstractClass::Integer32 | AbstractClass::Float32 => 4,
            AbstractClass::Integer64 | AbstractClass::Float64 | AbstractClass::CplxFloat32 => 8,
            AbstractClass::Float128 | AbstractClass::CplxFloat64 => 16,
            AbstractClass::CplxFloat128 => 32,
        }
    }
}

impl fmt::Display for AbstractClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
