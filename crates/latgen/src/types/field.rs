use core::fmt::Display;
use core::str::FromStr;
use std::borrow::Cow;

use crate::error::CatalogError;

/// Scalar type of a container.
///
/// The declaration order is the enumeration order, downstream generation depends on it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum FieldType {
    /// Real double precision.
    #[serde(rename = "double")]
    Double,
    /// Complex double precision.
    #[serde(rename = "complex")]
    ComplexDouble,
}

impl FieldType {
    /// Short symbolic tag, used when building identifiers.
    pub const fn tag(&self) -> &'static str {
        match self {
            FieldType::Double => "double",
            FieldType::ComplexDouble => "complex",
        }
    }

    /// Name of the scalar type in the generated sources.
    pub const fn cpp_name(&self) -> &'static str {
        match self {
            FieldType::Double => "double",
            FieldType::ComplexDouble => "std::complex<double>",
        }
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, FieldType::ComplexDouble)
    }
}

impl Display for FieldType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.cpp_name())
    }
}

impl FromStr for FieldType {
    type Err = CatalogError;

    /// Accepts both the symbolic tag and the target type name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "double" => Ok(FieldType::Double),
            "complex" | "std::complex<double>" => Ok(FieldType::ComplexDouble),
            other => Err(CatalogError::UnknownField(other.to_string())),
        }
    }
}

/// Field component of a solver catalog entry, before it is resolved to a [FieldType].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldTag {
    /// The symbolic `complex` tag, expanding to complex double precision.
    Complex,
    /// Any other tag, taken as a literal type name.
    Literal(Cow<'static, str>),
}

impl FieldTag {
    pub const fn literal(name: &'static str) -> Self {
        FieldTag::Literal(Cow::Borrowed(name))
    }

    /// Map the tag to the concrete field type shared by every role of the entry.
    pub fn resolve(&self) -> Result<FieldType, CatalogError> {
        match self {
            FieldTag::Complex => Ok(FieldType::ComplexDouble),
            FieldTag::Literal(name) => name.parse(),
        }
    }

    /// The tag exactly as written in the catalog.
    pub fn as_str(&self) -> &str {
        match self {
            FieldTag::Complex => "complex",
            FieldTag::Literal(name) => name,
        }
    }
}

impl From<&str> for FieldTag {
    fn from(value: &str) -> Self {
        match value {
            "complex" => FieldTag::Complex,
            other => FieldTag::Literal(Cow::Owned(other.to_string())),
        }
    }
}

impl Display for FieldTag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
