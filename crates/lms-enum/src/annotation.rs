//! # Annotation Kinds and Enforcement Policies
//!
//! Defines the two annotation kinds a member can carry (`Description`,
//! `Message`), the annotation record itself, and the per-member
//! `Enforcement` policy consulted when the sought annotation is absent.
//!
//! Both enums have a stable snake_case identifier shared by `as_str()`,
//! `Display`, `FromStr`, and serde, so manifests and CLI flags use the same
//! spelling as the Rust API.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::MetaError;

/// Which piece of human-readable metadata is being resolved.
///
/// The two kinds are independent: resolving one never inspects
/// annotations of the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationKind {
    /// Short human label.
    Description,
    /// Longer human-facing message.
    Message,
}

impl AnnotationKind {
    /// Returns both kinds in canonical order.
    pub fn all_kinds() -> &'static [AnnotationKind] {
        &[Self::Description, Self::Message]
    }

    /// Returns the snake_case string identifier for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Description => "description",
            Self::Message => "message",
        }
    }
}

impl std::fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnnotationKind {
    type Err = MetaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "description" => Ok(Self::Description),
            "message" => Ok(Self::Message),
            other => Err(MetaError::InvalidOperand {
                reason: format!("unknown annotation kind: {other:?}"),
            }),
        }
    }
}

/// What to do when a member has no annotation of the sought kind.
///
/// Attached per member, never per type. A member without a policy behaves
/// as [`Enforcement::FallbackToName`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Enforcement {
    /// Resolution fails with [`MetaError::MissingAnnotation`].
    Fail,
    /// Resolution succeeds with the member's declared name.
    FallbackToName,
}

impl Enforcement {
    /// Returns the snake_case string identifier for this policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fail => "fail",
            Self::FallbackToName => "fallback_to_name",
        }
    }
}

impl std::fmt::Display for Enforcement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Enforcement {
    type Err = MetaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fail" => Ok(Self::Fail),
            "fallback_to_name" => Ok(Self::FallbackToName),
            other => Err(MetaError::InvalidOperand {
                reason: format!("unknown enforcement policy: {other:?}"),
            }),
        }
    }
}

/// One piece of static metadata attached to a single enum member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Annotation {
    /// Kind of metadata this annotation carries.
    pub kind: AnnotationKind,
    /// Declared text, returned verbatim on successful resolution.
    pub text: &'static str,
}

impl Annotation {
    /// Create an annotation of the given kind.
    pub const fn new(kind: AnnotationKind, text: &'static str) -> Self {
        Self { kind, text }
    }

    /// Shorthand for a `Description` annotation.
    pub const fn description(text: &'static str) -> Self {
        Self::new(AnnotationKind::Description, text)
    }

    /// Shorthand for a `Message` annotation.
    pub const fn message(text: &'static str) -> Self {
        Self::new(AnnotationKind::Message, text)
    }
}
