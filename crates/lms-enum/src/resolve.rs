//! # Metadata Resolution
//!
//! One decision routine, parametrized by [`AnnotationKind`], backs every
//! lookup in the crate: typed enums, the type-erased registry, and
//! manifests all end up in [`resolve_annotation`].
//!
//! ## Precedence
//!
//! 1. Exactly one annotation of the sought kind: return its text.
//! 2. More than one: [`MetaError::AmbiguousAnnotation`], whatever the policy.
//! 3. None: consult the member's policy. No policy or `FallbackToName`
//!    returns the declared name; `Fail` returns
//!    [`MetaError::MissingAnnotation`].
//!
//! A `None` operand is "no metadata" (`Ok(None)`), not an error.

use crate::annotation::{AnnotationKind, Enforcement};
use crate::error::MetaError;
use crate::meta::{EnumMeta, MemberMeta};

/// An enumeration with a static metadata table.
///
/// Usually implemented through [`descriptive_enum!`](crate::descriptive_enum).
/// A hand-written implementation must keep `member_name()` in sync with the
/// table returned by `enum_meta()`; a name missing from the table surfaces
/// as [`MetaError::InvalidOperand`].
pub trait DescriptiveEnum: 'static {
    /// The type's metadata table.
    fn enum_meta() -> &'static EnumMeta;

    /// Declared name of this member.
    fn member_name(&self) -> &'static str;

    /// Table entry for this member.
    fn member(&self) -> Result<&'static MemberMeta, MetaError> {
        Self::enum_meta().member_named(self.member_name())
    }

    /// Resolve `kind` for this member.
    fn resolve(&self, kind: AnnotationKind) -> Result<&'static str, MetaError> {
        let meta = Self::enum_meta();
        meta.member_named(self.member_name())?
            .resolve(meta.type_name, kind)
    }

    /// Resolve this member's description.
    fn description(&self) -> Result<&'static str, MetaError> {
        self.resolve(AnnotationKind::Description)
    }

    /// Resolve this member's message.
    fn message(&self) -> Result<&'static str, MetaError> {
        self.resolve(AnnotationKind::Message)
    }
}

/// Resolve `kind` for an optional enum value.
pub fn resolve<E: DescriptiveEnum>(
    value: Option<&E>,
    kind: AnnotationKind,
) -> Result<Option<&'static str>, MetaError> {
    value.map(|v| v.resolve(kind)).transpose()
}

/// Resolve the description of an optional enum value.
pub fn resolve_description<E: DescriptiveEnum>(
    value: Option<&E>,
) -> Result<Option<&'static str>, MetaError> {
    resolve(value, AnnotationKind::Description)
}

/// Resolve the message of an optional enum value.
pub fn resolve_message<E: DescriptiveEnum>(
    value: Option<&E>,
) -> Result<Option<&'static str>, MetaError> {
    resolve(value, AnnotationKind::Message)
}

/// Apply the precedence rules to one member's annotations of `kind`.
///
/// `annotations` must already be filtered to `kind`. `type_name` is only
/// used to build errors.
pub(crate) fn resolve_annotation<'a, I>(
    type_name: &str,
    member: &'a str,
    kind: AnnotationKind,
    annotations: I,
    enforcement: Option<Enforcement>,
) -> Result<&'a str, MetaError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut found = annotations.into_iter();

    let Some(text) = found.next() else {
        return match enforcement.unwrap_or(Enforcement::FallbackToName) {
            Enforcement::FallbackToName => {
                tracing::debug!(type_name, member, %kind, "no annotation; using declared name");
                Ok(member)
            }
            Enforcement::Fail => {
                tracing::debug!(type_name, member, %kind, "missing annotation on enforced member");
                Err(MetaError::MissingAnnotation {
                    type_name: type_name.to_string(),
                    member: member.to_string(),
                    kind,
                })
            }
        };
    };

    let extra = found.count();
    if extra > 0 {
        tracing::debug!(type_name, member, %kind, count = extra + 1, "ambiguous annotations");
        return Err(MetaError::AmbiguousAnnotation {
            type_name: type_name.to_string(),
            member: member.to_string(),
            kind,
            count: extra + 1,
        });
    }

    Ok(text)
}
