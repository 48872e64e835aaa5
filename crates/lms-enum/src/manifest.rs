//! # Enum Manifests
//!
//! Owned, serde-backed counterpart of the static tables, for enumerations
//! whose metadata is authored as YAML or JSON rather than Rust. Lookups go
//! through the same decision routine as static tables, so a manifest and a
//! `descriptive_enum!` declaration with the same content resolve the same
//! way.
//!
//! ```yaml
//! enums:
//!   - name: Status
//!     members:
//!       - name: Active
//!         value: 1
//!         descriptions: ["Currently active."]
//!       - name: Closed
//!         value: 2
//!         enforcement: fail
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::annotation::{AnnotationKind, Enforcement};
use crate::audit::AuditReport;
use crate::error::{DefinitionError, ManifestError, MetaError};
use crate::meta::{validate_members, EnumMeta, MemberMeta};
use crate::resolve::resolve_annotation;

/// A set of enumeration definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumManifest {
    #[serde(default)]
    pub enums: Vec<EnumDefinition>,
}

/// One enumeration type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumDefinition {
    pub name: String,
    #[serde(default)]
    pub members: Vec<MemberDefinition>,
}

/// One member with its annotations and optional policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemberDefinition {
    pub name: String,
    pub value: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforcement: Option<Enforcement>,
}

impl EnumManifest {
    /// Parse and validate a YAML manifest.
    pub fn from_yaml_str(s: &str) -> Result<Self, ManifestError> {
        let manifest: Self = serde_yaml::from_str(s)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Parse and validate a JSON manifest.
    pub fn from_json_str(s: &str) -> Result<Self, ManifestError> {
        let manifest: Self = serde_json::from_str(s)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Check type-name uniqueness and each definition's members.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        let mut seen = HashSet::new();
        for def in &self.enums {
            def.validate()?;
            if !seen.insert(def.name.as_str()) {
                return Err(DefinitionError::DuplicateType {
                    type_name: def.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// The definition named `name`.
    pub fn find_enum(&self, name: &str) -> Result<&EnumDefinition, MetaError> {
        self.enums
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| MetaError::invalid_operand(format!("'{name}' is not a declared enum")))
    }

    /// Audit every member of every definition for `kinds`.
    pub fn audit(&self, kinds: &[AnnotationKind]) -> AuditReport {
        let mut report = AuditReport::default();
        for def in &self.enums {
            report.merge(def.audit(kinds));
        }
        report
    }
}

impl EnumDefinition {
    pub fn validate(&self) -> Result<(), DefinitionError> {
        validate_members(
            &self.name,
            self.members.iter().map(|m| (m.name.as_str(), m.value)),
        )
    }

    /// The single member named `name`.
    pub fn member_named(&self, name: &str) -> Result<&MemberDefinition, MetaError> {
        single(
            self.members.iter().filter(|m| m.name == name),
            || format!("'{name}' is not a declared member of enum '{}'", self.name),
            || format!("'{name}' names more than one member of enum '{}'", self.name),
        )
    }

    /// The single member whose integer is `value`.
    pub fn member_by_value(&self, value: i64) -> Result<&MemberDefinition, MetaError> {
        single(
            self.members.iter().filter(|m| m.value == value),
            || format!("{value} is not the value of any member of enum '{}'", self.name),
            || format!("{value} is the value of more than one member of enum '{}'", self.name),
        )
    }

    /// Resolve `kind` for the member named `name`.
    pub fn resolve_name(&self, name: &str, kind: AnnotationKind) -> Result<&str, MetaError> {
        self.member_named(name)?.resolve(&self.name, kind)
    }

    /// Resolve `kind` for the member whose integer is `value`.
    pub fn resolve_value(&self, value: i64, kind: AnnotationKind) -> Result<&str, MetaError> {
        self.member_by_value(value)?.resolve(&self.name, kind)
    }

    pub fn audit(&self, kinds: &[AnnotationKind]) -> AuditReport {
        let mut report = AuditReport::default();
        report.begin(&self.name);
        for member in &self.members {
            for &kind in kinds {
                report.record(&self.name, &member.name, kind, &member.resolve(&self.name, kind));
            }
        }
        report
    }
}

impl MemberDefinition {
    /// Declared texts of `kind`.
    pub fn annotations_of(&self, kind: AnnotationKind) -> &[String] {
        match kind {
            AnnotationKind::Description => &self.descriptions,
            AnnotationKind::Message => &self.messages,
        }
    }

    /// Resolve `kind` for this member. `type_name` is only used in errors.
    pub fn resolve(&self, type_name: &str, kind: AnnotationKind) -> Result<&str, MetaError> {
        resolve_annotation(
            type_name,
            &self.name,
            kind,
            self.annotations_of(kind).iter().map(String::as_str),
            self.enforcement,
        )
    }
}

impl From<&MemberMeta> for MemberDefinition {
    fn from(member: &MemberMeta) -> Self {
        let texts = |kind: AnnotationKind| -> Vec<String> {
            member.annotations_of(kind).map(str::to_string).collect()
        };
        Self {
            name: member.name.to_string(),
            value: member.value,
            descriptions: texts(AnnotationKind::Description),
            messages: texts(AnnotationKind::Message),
            enforcement: member.enforcement,
        }
    }
}

impl From<&EnumMeta> for EnumDefinition {
    fn from(meta: &EnumMeta) -> Self {
        Self {
            name: meta.type_name.to_string(),
            members: meta.members.iter().map(MemberDefinition::from).collect(),
        }
    }
}

fn single<'a, T>(
    mut matches: impl Iterator<Item = &'a T>,
    none: impl FnOnce() -> String,
    many: impl FnOnce() -> String,
) -> Result<&'a T, MetaError> {
    match (matches.next(), matches.next()) {
        (Some(found), None) => Ok(found),
        (None, _) => Err(MetaError::invalid_operand(none())),
        (Some(_), Some(_)) => Err(MetaError::invalid_operand(many())),
    }
}
