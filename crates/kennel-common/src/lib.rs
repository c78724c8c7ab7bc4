//! Kennel Common - Shared types and error definitions
//!
//! This crate provides the foundational types used across all Kennel components:
//! - Error types and field-level validation errors
//! - The breed size enumeration

pub mod error;

// Re-exports for convenience
pub use error::{FieldErrors, KennelError, NON_FIELD_ERRORS};

/// Size class of a breed, stored and transmitted as its one-letter code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum BreedSize {
    #[serde(rename = "T")]
    Tiny,
    #[serde(rename = "S")]
    Small,
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "L")]
    Large,
}

impl BreedSize {
    /// Every size, smallest first
    pub const ALL: [BreedSize; 4] = [
        BreedSize::Tiny,
        BreedSize::Small,
        BreedSize::Medium,
        BreedSize::Large,
    ];

    pub fn code(self) -> &'static str {
        match self {
            BreedSize::Tiny => "T",
            BreedSize::Small => "S",
            BreedSize::Medium => "M",
            BreedSize::Large => "L",
        }
    }

    /// Human readable label
    pub fn label(self) -> &'static str {
        match self {
            BreedSize::Tiny => "Tiny",
            BreedSize::Small => "Small",
            BreedSize::Medium => "Medium",
            BreedSize::Large => "Large",
        }
    }
}

impl std::fmt::Display for BreedSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for BreedSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BreedSize::ALL
            .into_iter()
            .find(|size| size.code() == s)
            .ok_or_else(|| format!("Invalid breed size: {}", s))
    }
}
