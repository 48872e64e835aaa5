//! # Type-Erased Enum Registry
//!
//! Resolves metadata for operands whose concrete type is not known at the
//! call site (`&dyn Any`, boxed values, or a type name plus a raw integer).
//! The operand is validated against the registered enumerations first;
//! anything else is [`MetaError::InvalidOperand`].
//!
//! ## Lifecycle
//!
//! Build once, read many. [`EnumRegistryBuilder`] validates and collects
//! registrations; [`EnumRegistryBuilder::build`] freezes them into an
//! [`EnumRegistry`] with no mutating methods. Share it by reference or put it
//! in a `std::sync::OnceLock` for process-wide use.

use std::any::{Any, TypeId};
use std::collections::{BTreeMap, HashMap};

use crate::annotation::AnnotationKind;
use crate::audit::{audit_enum, AuditReport};
use crate::error::{DefinitionError, MetaError};
use crate::manifest::{EnumDefinition, EnumManifest};
use crate::meta::EnumMeta;
use crate::resolve::DescriptiveEnum;

#[derive(Clone, Copy)]
struct Registration {
    meta: &'static EnumMeta,
    member_name: fn(&dyn Any) -> Option<&'static str>,
}

fn erased_member_name<E: DescriptiveEnum>(value: &dyn Any) -> Option<&'static str> {
    value.downcast_ref::<E>().map(E::member_name)
}

/// Frozen set of enumerations, keyed by `TypeId` and by type name.
#[derive(Default)]
pub struct EnumRegistry {
    by_type: HashMap<TypeId, Registration>,
    by_name: BTreeMap<&'static str, TypeId>,
}

/// Collects registrations for an [`EnumRegistry`].
#[derive(Debug, Default)]
pub struct EnumRegistryBuilder {
    registry: EnumRegistry,
}

impl EnumRegistryBuilder {
    /// Register `E`, validating its table.
    ///
    /// Fails if the table has duplicate names or values, or if another type
    /// with the same name (or `E` itself) is already registered.
    pub fn register<E: DescriptiveEnum>(mut self) -> Result<Self, DefinitionError> {
        let meta = E::enum_meta();
        meta.validate()?;

        let type_id = TypeId::of::<E>();
        if self.registry.by_type.contains_key(&type_id)
            || self.registry.by_name.contains_key(meta.type_name)
        {
            return Err(DefinitionError::DuplicateType {
                type_name: meta.type_name.to_string(),
            });
        }

        tracing::trace!(
            type_name = meta.type_name,
            members = meta.members.len(),
            "registered enum"
        );

        self.registry.by_type.insert(
            type_id,
            Registration {
                meta,
                member_name: erased_member_name::<E>,
            },
        );
        self.registry.by_name.insert(meta.type_name, type_id);
        Ok(self)
    }

    /// Freeze the registrations.
    pub fn build(self) -> EnumRegistry {
        self.registry
    }
}

impl EnumRegistry {
    pub fn builder() -> EnumRegistryBuilder {
        EnumRegistryBuilder::default()
    }

    /// Number of registered enumerations.
    pub fn len(&self) -> usize {
        self.by_type.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }

    /// Whether `E` is registered.
    pub fn contains<E: DescriptiveEnum>(&self) -> bool {
        self.by_type.contains_key(&TypeId::of::<E>())
    }

    /// Table of the enumeration registered under `type_name`.
    pub fn enum_meta(&self, type_name: &str) -> Option<&'static EnumMeta> {
        let type_id = self.by_name.get(type_name)?;
        self.by_type.get(type_id).map(|r| r.meta)
    }

    /// Registered tables, ordered by type name.
    pub fn tables(&self) -> impl Iterator<Item = &'static EnumMeta> + '_ {
        self.by_name
            .values()
            .filter_map(|id| self.by_type.get(id))
            .map(|r| r.meta)
    }

    /// Resolve `kind` for an untyped operand.
    ///
    /// `None` is "no metadata". An operand whose type is not a registered
    /// enumeration fails with [`MetaError::InvalidOperand`]. Pass boxed
    /// values as `boxed.as_ref()`, not `&boxed`.
    pub fn resolve_any(
        &self,
        value: Option<&dyn Any>,
        kind: AnnotationKind,
    ) -> Result<Option<&'static str>, MetaError> {
        let Some(value) = value else {
            return Ok(None);
        };

        let registration = self.by_type.get(&value.type_id()).ok_or_else(|| {
            MetaError::invalid_operand("value parameter must be a registered enum")
        })?;
        let name = (registration.member_name)(value).ok_or_else(|| {
            MetaError::invalid_operand(format!(
                "value does not downcast to enum '{}'",
                registration.meta.type_name
            ))
        })?;

        registration
            .meta
            .resolve_name(name, kind)
            .map(Some)
    }

    /// Resolve the description of an untyped operand.
    pub fn describe_any(&self, value: Option<&dyn Any>) -> Result<Option<&'static str>, MetaError> {
        self.resolve_any(value, AnnotationKind::Description)
    }

    /// Resolve the message of an untyped operand.
    pub fn message_any(&self, value: Option<&dyn Any>) -> Result<Option<&'static str>, MetaError> {
        self.resolve_any(value, AnnotationKind::Message)
    }

    /// Resolve `kind` for the member of `type_name` whose integer is `raw`.
    ///
    /// An unknown type name, or an integer no member declares, fails with
    /// [`MetaError::InvalidOperand`].
    pub fn resolve_value(
        &self,
        type_name: &str,
        raw: i64,
        kind: AnnotationKind,
    ) -> Result<&'static str, MetaError> {
        let meta = self.enum_meta(type_name).ok_or_else(|| {
            MetaError::invalid_operand(format!("'{type_name}' is not a registered enum"))
        })?;
        meta.resolve_value(raw, kind)
    }

    /// Audit every member of every registered enumeration for `kinds`.
    pub fn audit(&self, kinds: &[AnnotationKind]) -> AuditReport {
        let mut report = AuditReport::default();
        for meta in self.tables() {
            report.merge(audit_enum(meta, kinds));
        }
        report
    }

    /// Export the registered tables as an owned manifest.
    pub fn to_manifest(&self) -> EnumManifest {
        EnumManifest {
            enums: self.tables().map(EnumDefinition::from).collect(),
        }
    }
}

impl std::fmt::Debug for EnumRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnumRegistry")
            .field("types", &self.by_name.keys().collect::<Vec<_>>())
            .finish()
    }
}
