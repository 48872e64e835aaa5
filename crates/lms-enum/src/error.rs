//! # Error Types
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - `MetaError` is returned by lookups. Every variant names the enum type
//!   and member involved so the caller can point at the declaration that
//!   needs fixing. Lookups never recover from these internally.
//! - `DefinitionError` is returned while building a registry or validating
//!   a manifest, before any lookup runs.
//! - `ManifestError` wraps parse failures of YAML/JSON manifests.

use thiserror::Error;

use crate::annotation::AnnotationKind;

/// Failure of a single metadata lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetaError {
    /// The operand is not a declared member of a known enumeration.
    #[error("invalid operand: {reason}")]
    InvalidOperand {
        /// What was wrong with the operand.
        reason: String,
    },

    /// More than one annotation of the sought kind on one member.
    #[error("too many {kind} annotations ({count}) on enum '{type_name}', member '{member}'")]
    AmbiguousAnnotation {
        /// Declaring enum type.
        type_name: String,
        /// Offending member.
        member: String,
        /// Annotation kind that was sought.
        kind: AnnotationKind,
        /// Number of annotations found.
        count: usize,
    },

    /// No annotation of the sought kind, and the member's policy is `Fail`.
    #[error("no {kind} annotation on enforced enum '{type_name}', member '{member}'")]
    MissingAnnotation {
        /// Declaring enum type.
        type_name: String,
        /// Offending member.
        member: String,
        /// Annotation kind that was sought.
        kind: AnnotationKind,
    },
}

impl MetaError {
    pub(crate) fn invalid_operand(reason: impl Into<String>) -> Self {
        Self::InvalidOperand {
            reason: reason.into(),
        }
    }
}

/// Defect in how an enumeration's metadata table was authored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    /// Enum type declared without a name.
    #[error("enum type name must not be empty")]
    EmptyTypeName,

    /// Two members of one type share a name.
    #[error("enum '{type_name}' declares member '{member}' more than once")]
    DuplicateMemberName {
        /// Declaring enum type.
        type_name: String,
        /// Repeated member name.
        member: String,
    },

    /// Two members of one type share an underlying integer.
    #[error("enum '{type_name}' members '{first}' and '{second}' share value {value}")]
    DuplicateMemberValue {
        /// Declaring enum type.
        type_name: String,
        /// First member holding the value.
        first: String,
        /// Second member holding the value.
        second: String,
        /// Shared integer.
        value: i64,
    },

    /// The same enum type was registered or declared twice.
    #[error("enum '{type_name}' is already registered")]
    DuplicateType {
        /// Repeated type name.
        type_name: String,
    },
}

/// Error loading an enum manifest.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// YAML parsing failed.
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The manifest parsed but declares an inconsistent enum.
    #[error("definition error: {0}")]
    Definition(#[from] DefinitionError),
}
