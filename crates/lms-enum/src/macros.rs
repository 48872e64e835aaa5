//! # `descriptive_enum!`
//!
//! Declares a fieldless enum together with its static metadata table and
//! the [`DescriptiveEnum`](crate::DescriptiveEnum) implementation, so the
//! table cannot drift from the variant list.
//!
//! ```rust
//! use lms_enum::{descriptive_enum, DescriptiveEnum};
//!
//! descriptive_enum! {
//!     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//!     pub enum Status {
//!         Active = 1 => [Description("Currently active.")],
//!         Archived = 2 => [Message("This record is archived.")] enforce Fail,
//!         Draft = 3,
//!     }
//! }
//!
//! assert_eq!(Status::Active.description().unwrap(), "Currently active.");
//! assert_eq!(Status::Draft.description().unwrap(), "Draft");
//! assert!(Status::Archived.description().is_err());
//! ```
//!
//! Each variant takes an explicit integer value, an optional annotation list
//! (`Description(..)` / `Message(..)`, repeated entries are kept and reported
//! as ambiguous at lookup), and an optional `enforce Fail` or
//! `enforce FallbackToName` policy.

#[macro_export]
macro_rules! descriptive_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:literal
                $( => [ $( $kind:ident ( $text:literal ) ),* $(,)? ] )?
                $( enforce $policy:ident )?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant = $value,
            )+
        }

        impl $crate::DescriptiveEnum for $name {
            fn enum_meta() -> &'static $crate::EnumMeta {
                static META: $crate::EnumMeta = $crate::EnumMeta {
                    type_name: stringify!($name),
                    members: &[
                        $(
                            $crate::MemberMeta {
                                name: stringify!($variant),
                                value: $value,
                                annotations: &[
                                    $( $(
                                        $crate::Annotation {
                                            kind: $crate::AnnotationKind::$kind,
                                            text: $text,
                                        },
                                    )* )?
                                ],
                                enforcement: $crate::__enforcement!($( $policy )?),
                            },
                        )+
                    ],
                };
                &META
            }

            fn member_name(&self) -> &'static str {
                match self {
                    $( Self::$variant => stringify!($variant), )+
                }
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __enforcement {
    () => {
        ::core::option::Option::None
    };
    ($policy:ident) => {
        ::core::option::Option::Some($crate::Enforcement::$policy)
    };
}

#[cfg(test)]
mod tests {
    use crate::{AnnotationKind, DescriptiveEnum, Enforcement, MetaError};

    descriptive_enum! {
        /// Lifecycle of a course enrolment.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        enum Enrolment {
            /// Learner is taking the course.
            Active = 1 => [
                Description("Currently active."),
                Message("You are enrolled in this course."),
            ],
            Completed = 2 => [Description("Completed")] enforce Fail,
            Withdrawn = 3 enforce Fail,
            Paused = 4 enforce FallbackToName,
            Pending = -1,
            Duplicate = 5 => [Description("First"), Description("Second")],
        }
    }

    #[test]
    fn discriminants_follow_declared_values() {
        assert_eq!(Enrolment::Active as i64, 1);
        assert_eq!(Enrolment::Pending as i64, -1);
    }

    #[test]
    fn table_mirrors_declaration() {
        let meta = Enrolment::enum_meta();
        assert_eq!(meta.type_name, "Enrolment");
        assert_eq!(meta.members.len(), 6);
        assert!(meta.validate().is_ok());

        let completed = Enrolment::Completed.member().unwrap();
        assert_eq!(completed.value, 2);
        assert_eq!(completed.enforcement, Some(Enforcement::Fail));
        assert_eq!(Enrolment::Pending.member().unwrap().enforcement, None);
    }

    #[test]
    fn generated_impl_resolves_both_kinds() {
        assert_eq!(Enrolment::Active.description(), Ok("Currently active."));
        assert_eq!(
            Enrolment::Active.message(),
            Ok("You are enrolled in this course.")
        );
        assert_eq!(Enrolment::Pending.resolve(AnnotationKind::Message), Ok("Pending"));
        assert_eq!(Enrolment::Paused.description(), Ok("Paused"));
    }

    #[test]
    fn generated_impl_honours_policies() {
        assert!(matches!(
            Enrolment::Withdrawn.description(),
            Err(MetaError::MissingAnnotation { .. })
        ));
        // Description present, message missing under the same policy.
        assert_eq!(Enrolment::Completed.description(), Ok("Completed"));
        assert!(matches!(
            Enrolment::Completed.message(),
            Err(MetaError::MissingAnnotation {
                kind: AnnotationKind::Message,
                ..
            })
        ));
        assert!(matches!(
            Enrolment::Duplicate.description(),
            Err(MetaError::AmbiguousAnnotation { count: 2, .. })
        ));
    }
}
