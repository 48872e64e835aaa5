//! # Resolution Scenarios
//!
//! End-to-end checks of the public API against the `Status` examples:
//! one annotation, name fallback, enforced failure, ambiguity, operand
//! validation, idempotence, and description/message independence.

use std::any::Any;

use lms_enum::{
    descriptive_enum, resolve_description, resolve_message, Annotation, AnnotationKind,
    DescriptiveEnum, EnumMeta, EnumRegistry, MemberMeta, MetaError,
};

descriptive_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Status {
        Active = 1 => [Description("Currently active.")],
        Inactive = 2,
        Suspended = 3 enforce Fail,
        Pending = 4 enforce FallbackToName,
        Conflicted = 5 => [Description("One"), Description("Two")] enforce FallbackToName,
        Expired = 6 => [Description("Expired"), Message("Renew to continue.")] enforce Fail,
    }
}

/// Hand-written impl whose table omits one of its own variants.
#[derive(Debug, Clone, Copy)]
enum Drifted {
    Known,
    Forgotten,
}

static DRIFTED: EnumMeta = EnumMeta::new(
    "Drifted",
    &[MemberMeta::new("Known", 0).with_annotations(&[Annotation::description("Known member")])],
);

impl DescriptiveEnum for Drifted {
    fn enum_meta() -> &'static EnumMeta {
        &DRIFTED
    }

    fn member_name(&self) -> &'static str {
        match self {
            Self::Known => "Known",
            Self::Forgotten => "Forgotten",
        }
    }
}

#[test]
fn single_description_is_returned() {
    assert_eq!(Status::Active.description(), Ok("Currently active."));
    assert_eq!(resolve_description(Some(&Status::Active)), Ok(Some("Currently active.")));
}

#[test]
fn missing_description_without_policy_returns_name() {
    assert_eq!(Status::Inactive.description(), Ok("Inactive"));
}

#[test]
fn missing_description_with_fallback_policy_returns_name() {
    assert_eq!(Status::Pending.description(), Ok("Pending"));
}

#[test]
fn missing_description_with_fail_policy_is_missing_annotation() {
    assert_eq!(
        Status::Suspended.description(),
        Err(MetaError::MissingAnnotation {
            type_name: "Status".into(),
            member: "Suspended".into(),
            kind: AnnotationKind::Description,
        })
    );
}

#[test]
fn two_descriptions_are_ambiguous_whatever_the_policy() {
    let err = Status::Conflicted.description().unwrap_err();
    assert!(matches!(
        err,
        MetaError::AmbiguousAnnotation { count: 2, ref member, .. } if member == "Conflicted"
    ));
}

#[test]
fn none_is_no_metadata() {
    assert_eq!(resolve_description::<Status>(None), Ok(None));
    assert_eq!(resolve_message::<Status>(None), Ok(None));
}

#[test]
fn non_enum_operand_is_invalid() {
    let registry = EnumRegistry::builder()
        .register::<Status>()
        .unwrap()
        .build();
    let operand: &dyn Any = &7_u8;
    assert!(matches!(
        registry.describe_any(Some(operand)),
        Err(MetaError::InvalidOperand { .. })
    ));
}

#[test]
fn member_missing_from_table_is_invalid() {
    assert_eq!(Drifted::Known.description(), Ok("Known member"));
    assert!(matches!(
        Drifted::Forgotten.description(),
        Err(MetaError::InvalidOperand { .. })
    ));
}

#[test]
fn resolution_is_idempotent() {
    let all = [
        Status::Active,
        Status::Inactive,
        Status::Suspended,
        Status::Pending,
        Status::Conflicted,
        Status::Expired,
    ];
    for status in all {
        for &kind in AnnotationKind::all_kinds() {
            assert_eq!(status.resolve(kind), status.resolve(kind), "{status:?}/{kind}");
        }
    }
}

#[test]
fn description_and_message_are_independent() {
    // Two descriptions do not affect the message lookup.
    assert_eq!(Status::Conflicted.message(), Ok("Conflicted"));
    // The policy applies to each kind separately.
    assert!(matches!(
        Status::Suspended.message(),
        Err(MetaError::MissingAnnotation {
            kind: AnnotationKind::Message,
            ..
        })
    ));
    assert_eq!(Status::Expired.description(), Ok("Expired"));
    assert_eq!(Status::Expired.message(), Ok("Renew to continue."));
    assert_eq!(Status::Active.message(), Ok("Active"));
}

#[test]
fn registry_and_typed_lookups_agree() {
    let registry = EnumRegistry::builder()
        .register::<Status>()
        .unwrap()
        .build();
    for (raw, status) in [(1, Status::Active), (3, Status::Suspended), (5, Status::Conflicted)] {
        let operand: &dyn Any = &status;
        assert_eq!(
            registry.describe_any(Some(operand)),
            status.description().map(Some)
        );
        assert_eq!(
            registry.resolve_value("Status", raw, AnnotationKind::Description),
            status.description()
        );
    }
}

#[test]
fn exported_manifest_round_trips_through_yaml() {
    let registry = EnumRegistry::builder()
        .register::<Status>()
        .unwrap()
        .build();
    let yaml = serde_yaml::to_string(&registry.to_manifest()).unwrap();
    let manifest = lms_enum::EnumManifest::from_yaml_str(&yaml).unwrap();
    assert_eq!(
        manifest.audit(AnnotationKind::all_kinds()),
        registry.audit(AnnotationKind::all_kinds())
    );
}
