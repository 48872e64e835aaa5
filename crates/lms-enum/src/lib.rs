//! # lms-enum — Enum Metadata Resolution
//!
//! Resolves a human-readable **description** (short label) and **message**
//! (longer human-facing text) for members of an enumeration, from
//! annotations declared per member alongside the enumeration.
//!
//! ## Key Design Principles
//!
//! 1. **Static tables, not introspection.** Every enumeration owns one
//!    `'static` [`EnumMeta`] listing its members, their annotations, and
//!    their enforcement policy. Lookups read that table and nothing else.
//!
//! 2. **One decision routine.** Description and message lookups run the same
//!    precedence, parametrized by [`AnnotationKind`]: one annotation wins,
//!    several are [`MetaError::AmbiguousAnnotation`], none falls back to the
//!    declared name unless the member's [`Enforcement`] is `Fail`.
//!
//! 3. **Policy is a field.** The enforcement policy is an
//!    `Option<Enforcement>` on the member, so a member has at most one and
//!    reading the table tells you which.
//!
//! 4. **Defects are reported, never masked.** Ambiguous or missing
//!    annotations are errors naming the type and member; the crate never
//!    substitutes a default for them.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Lookups are pure and read only immutable data; every public type is
//!   safe to share across threads.

mod macros;

pub mod annotation;
pub mod audit;
pub mod error;
pub mod manifest;
pub mod meta;
pub mod registry;
pub mod resolve;

// Re-export primary types for ergonomic imports.
pub use annotation::{Annotation, AnnotationKind, Enforcement};
pub use audit::{audit_enum, AuditReport, EnumTally, Finding, Problem};
pub use error::{DefinitionError, ManifestError, MetaError};
pub use manifest::{EnumDefinition, EnumManifest, MemberDefinition};
pub use meta::{EnumMeta, MemberMeta};
pub use registry::{EnumRegistry, EnumRegistryBuilder};
pub use resolve::{resolve, resolve_description, resolve_message, DescriptiveEnum};
