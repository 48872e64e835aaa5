//! # Resolve Subcommand
//!
//! Resolves one member's description or message from a manifest. The member
//! is selected by name (`--member`) or by underlying integer (`--value`).

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use lms_enum::{AnnotationKind, EnumManifest, MetaError};

/// Arguments for the `lms resolve` subcommand.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Manifest file (.yaml, .yml, or .json).
    #[arg(value_name = "MANIFEST")]
    pub manifest: PathBuf,

    /// Enum type to look up.
    #[arg(long = "enum", value_name = "TYPE")]
    pub enum_name: String,

    /// Declared member name.
    #[arg(long, conflicts_with = "value", required_unless_present = "value")]
    pub member: Option<String>,

    /// Underlying integer of the member.
    #[arg(long, allow_negative_numbers = true)]
    pub value: Option<i64>,

    /// Annotation kind to resolve.
    #[arg(long, default_value = "description")]
    pub kind: AnnotationKind,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ResolveOutput<'a> {
    #[serde(rename = "enum")]
    enum_name: &'a str,
    kind: AnnotationKind,
    text: &'a str,
}

/// Execute the resolve subcommand.
///
/// Returns exit code: 0 on success, 1 when the lookup fails.
pub fn run_resolve(args: &ResolveArgs) -> Result<u8> {
    let manifest = crate::load_manifest(&args.manifest)?;

    match lookup(&manifest, args) {
        Ok(text) => {
            if args.json {
                let output = ResolveOutput {
                    enum_name: &args.enum_name,
                    kind: args.kind,
                    text,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("{text}");
            }
            Ok(0)
        }
        Err(e) => {
            tracing::debug!(enum_name = %args.enum_name, kind = %args.kind, "lookup failed");
            eprintln!("ERROR: {e}");
            Ok(1)
        }
    }
}

/// Select the member named by `args` and resolve `args.kind`.
pub fn lookup<'m>(manifest: &'m EnumManifest, args: &ResolveArgs) -> Result<&'m str, MetaError> {
    let def = manifest.find_enum(&args.enum_name)?;
    match (&args.member, args.value) {
        (Some(name), _) => def.resolve_name(name, args.kind),
        (None, Some(value)) => def.resolve_value(value, args.kind),
        (None, None) => Err(MetaError::InvalidOperand {
            reason: "either a member name or a value is required".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest() -> EnumManifest {
        EnumManifest::from_yaml_str(
            r#"
enums:
  - name: Status
    members:
      - name: Active
        value: 1
        descriptions: ["Currently active."]
      - name: Closed
        value: -1
        enforcement: fail
"#,
        )
        .unwrap()
    }

    fn args(member: Option<&str>, value: Option<i64>, kind: AnnotationKind) -> ResolveArgs {
        ResolveArgs {
            manifest: PathBuf::from("enums.yaml"),
            enum_name: "Status".to_string(),
            member: member.map(str::to_string),
            value,
            kind,
            json: false,
        }
    }

    #[test]
    fn lookup_by_name_and_value() {
        let manifest = manifest();
        assert_eq!(
            lookup(&manifest, &args(Some("Active"), None, AnnotationKind::Description)),
            Ok("Currently active.")
        );
        assert_eq!(
            lookup(&manifest, &args(None, Some(1), AnnotationKind::Message)),
            Ok("Active")
        );
    }

    #[test]
    fn lookup_surfaces_enforced_failure() {
        let manifest = manifest();
        assert!(matches!(
            lookup(&manifest, &args(None, Some(-1), AnnotationKind::Description)),
            Err(MetaError::MissingAnnotation { .. })
        ));
    }

    #[test]
    fn lookup_without_selector_is_invalid() {
        let manifest = manifest();
        assert!(matches!(
            lookup(&manifest, &args(None, None, AnnotationKind::Description)),
            Err(MetaError::InvalidOperand { .. })
        ));
    }

    #[test]
    fn run_resolve_exit_codes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("enums.yaml");
        std::fs::write(&path, fixture_yaml()).unwrap();

        let mut ok = args(Some("Active"), None, AnnotationKind::Description);
        ok.manifest = path.clone();
        assert_eq!(run_resolve(&ok).unwrap(), 0);

        let mut failing = args(Some("Closed"), None, AnnotationKind::Description);
        failing.manifest = path;
        assert_eq!(run_resolve(&failing).unwrap(), 1);

        let mut missing_file = args(Some("Active"), None, AnnotationKind::Description);
        missing_file.manifest = dir.path().join("absent.yaml");
        assert!(run_resolve(&missing_file).is_err());
    }

    fn fixture_yaml() -> &'static str {
        "enums:\n  - name: Status\n    members:\n      - { name: Active, value: 1, descriptions: [\"Currently active.\"] }\n      - { name: Closed, value: 2, enforcement: fail }\n"
    }
}
