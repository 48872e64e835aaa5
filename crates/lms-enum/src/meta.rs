//! # Static Enum Metadata Tables
//!
//! `EnumMeta` and `MemberMeta` are the plain keyed table that replaces
//! call-time type introspection: each enum type owns one `'static` table,
//! built once (usually by [`descriptive_enum!`](crate::descriptive_enum)),
//! listing every member with its annotations and optional enforcement
//! policy. Tables hold only `'static` borrowed data, so they are `Sync` and
//! can be read from any thread without locking.
//!
//! ## Invariants
//!
//! Within one type, member names are unique and member values are unique.
//! [`EnumMeta::validate`] checks both; the registry calls it on
//! registration.

use std::collections::{HashMap, HashSet};

use crate::annotation::{Annotation, AnnotationKind, Enforcement};
use crate::error::{DefinitionError, MetaError};
use crate::resolve::resolve_annotation;

/// Metadata declared for one member of an enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberMeta {
    /// Declared member name, returned by the name fallback.
    pub name: &'static str,
    /// Underlying integer value.
    pub value: i64,
    /// Annotations in declaration order, of either kind.
    pub annotations: &'static [Annotation],
    /// Policy applied when the sought annotation is absent.
    pub enforcement: Option<Enforcement>,
}

impl MemberMeta {
    /// A member with no annotations and no enforcement policy.
    pub const fn new(name: &'static str, value: i64) -> Self {
        Self {
            name,
            value,
            annotations: &[],
            enforcement: None,
        }
    }

    /// Replace the member's annotations.
    pub const fn with_annotations(self, annotations: &'static [Annotation]) -> Self {
        Self {
            annotations,
            ..self
        }
    }

    /// Replace the member's enforcement policy.
    pub const fn with_enforcement(self, enforcement: Option<Enforcement>) -> Self {
        Self {
            enforcement,
            ..self
        }
    }

    /// Texts of this member's annotations of `kind`, in declaration order.
    pub fn annotations_of(&self, kind: AnnotationKind) -> impl Iterator<Item = &'static str> {
        let annotations: &'static [Annotation] = self.annotations;
        annotations
            .iter()
            .filter(move |a| a.kind == kind)
            .map(|a| a.text)
    }

    /// Resolve `kind` for this member. `type_name` is only used in errors.
    pub fn resolve(&self, type_name: &str, kind: AnnotationKind) -> Result<&'static str, MetaError> {
        resolve_annotation(
            type_name,
            self.name,
            kind,
            self.annotations_of(kind),
            self.enforcement,
        )
    }
}

/// Metadata table for one enumeration type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumMeta {
    /// Name of the enum type.
    pub type_name: &'static str,
    /// Every declared member, in declaration order.
    pub members: &'static [MemberMeta],
}

impl EnumMeta {
    pub const fn new(type_name: &'static str, members: &'static [MemberMeta]) -> Self {
        Self { type_name, members }
    }

    /// Look up the single member declared with `name`.
    ///
    /// Fails with [`MetaError::InvalidOperand`] when no member, or more than
    /// one member, carries that name.
    pub fn member_named(&self, name: &str) -> Result<&'static MemberMeta, MetaError> {
        let members: &'static [MemberMeta] = self.members;
        let mut matches = members.iter().filter(|m| m.name == name);
        match (matches.next(), matches.next()) {
            (Some(member), None) => Ok(member),
            (None, _) => Err(MetaError::invalid_operand(format!(
                "'{name}' is not a declared member of enum '{}'",
                self.type_name
            ))),
            (Some(_), Some(_)) => Err(MetaError::invalid_operand(format!(
                "'{name}' names more than one member of enum '{}'",
                self.type_name
            ))),
        }
    }

    /// Look up the single member whose underlying integer is `value`.
    pub fn member_by_value(&self, value: i64) -> Result<&'static MemberMeta, MetaError> {
        let members: &'static [MemberMeta] = self.members;
        let mut matches = members.iter().filter(|m| m.value == value);
        match (matches.next(), matches.next()) {
            (Some(member), None) => Ok(member),
            (None, _) => Err(MetaError::invalid_operand(format!(
                "{value} is not the value of any member of enum '{}'",
                self.type_name
            ))),
            (Some(_), Some(_)) => Err(MetaError::invalid_operand(format!(
                "{value} is the value of more than one member of enum '{}'",
                self.type_name
            ))),
        }
    }

    /// Resolve `kind` for the member named `name`.
    pub fn resolve_name(&self, name: &str, kind: AnnotationKind) -> Result<&'static str, MetaError> {
        self.member_named(name)?.resolve(self.type_name, kind)
    }

    /// Resolve `kind` for the member whose underlying integer is `value`.
    pub fn resolve_value(&self, value: i64, kind: AnnotationKind) -> Result<&'static str, MetaError> {
        self.member_by_value(value)?.resolve(self.type_name, kind)
    }

    /// Check name and value uniqueness across members.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        validate_members(
            self.type_name,
            self.members.iter().map(|m| (m.name, m.value)),
        )
    }
}

/// Uniqueness check shared by static tables and manifests.
pub(crate) fn validate_members<'a>(
    type_name: &str,
    members: impl IntoIterator<Item = (&'a str, i64)>,
) -> Result<(), DefinitionError> {
    if type_name.is_empty() {
        return Err(DefinitionError::EmptyTypeName);
    }

    let mut names: HashSet<&str> = HashSet::new();
    let mut values: HashMap<i64, &str> = HashMap::new();

    for (name, value) in members {
        if !names.insert(name) {
            return Err(DefinitionError::DuplicateMemberName {
                type_name: type_name.to_string(),
                member: name.to_string(),
            });
        }
        if let Some(first) = values.insert(value, name) {
            return Err(DefinitionError::DuplicateMemberValue {
                type_name: type_name.to_string(),
                first: first.to_string(),
                second: name.to_string(),
                value,
            });
        }
    }

    Ok(())
}
