//! # Audit Subcommand
//!
//! Runs every lookup a manifest can answer and reports the ambiguous and
//! missing annotations, one summary line per enum followed by its failures.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use lms_enum::{AnnotationKind, AuditReport};

/// Arguments for the `lms audit` subcommand.
#[derive(Args, Debug)]
pub struct AuditArgs {
    /// Manifest file (.yaml, .yml, or .json).
    #[arg(value_name = "MANIFEST")]
    pub manifest: PathBuf,

    /// Audit only this annotation kind (default: both).
    #[arg(long)]
    pub kind: Option<AnnotationKind>,

    /// Print the full report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the audit subcommand.
///
/// Returns exit code: 0 when the manifest is clean, 1 otherwise.
pub fn run_audit(args: &AuditArgs) -> Result<u8> {
    let manifest = crate::load_manifest(&args.manifest)?;
    let kinds = crate::selected_kinds(args.kind);
    let report = manifest.audit(&kinds);

    tracing::info!(
        checked = report.checked,
        passed = report.passed,
        "audited manifest"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_summary(&report));
    }

    Ok(if report.is_clean() { 0 } else { 1 })
}

/// Human-readable summary of `report`, one block per audited enumeration.
pub fn render_summary(report: &AuditReport) -> String {
    let mut out = String::new();

    for tally in &report.enums {
        let _ = writeln!(
            out,
            "{}: {}/{} passed",
            tally.type_name, tally.passed, tally.checked
        );

        for finding in report.findings_for(&tally.type_name) {
            let _ = writeln!(
                out,
                "  FAIL: {}::{} ({}): {}",
                finding.type_name, finding.member, finding.kind, finding.detail
            );
        }
    }

    if !report.is_clean() {
        let _ = writeln!(
            out,
            "\n{} lookup(s) failed out of {} total.",
            report.failed(),
            report.checked
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lms_enum::EnumManifest;

    const MANIFEST: &str = r#"
enums:
  - name: Status
    members:
      - name: Active
        value: 1
        descriptions: ["Currently active."]
      - name: Closed
        value: 2
        enforcement: fail
  - name: Role
    members:
      - name: Admin
        value: 1
"#;

    #[test]
    fn summary_lists_failures_per_enum() {
        let manifest = EnumManifest::from_yaml_str(MANIFEST).unwrap();
        let report = manifest.audit(&[AnnotationKind::Description]);
        let summary = render_summary(&report);

        assert!(summary.contains("Status: 1/2 passed"));
        assert!(summary.contains("  FAIL: Status::Closed (description): "));
        assert!(summary.contains("Role: 1/1 passed"));
        assert!(summary.contains("1 lookup(s) failed out of 3 total."));
    }

    #[test]
    fn clean_summary_has_no_trailer() {
        let manifest = EnumManifest::from_yaml_str(MANIFEST).unwrap();
        let clean = EnumManifest {
            enums: vec![manifest.find_enum("Role").unwrap().clone()],
        };
        let report = clean.audit(AnnotationKind::all_kinds());
        assert!(report.is_clean());
        assert_eq!(render_summary(&report), "Role: 2/2 passed\n");
    }

    #[test]
    fn summary_counts_every_audited_kind() {
        let manifest = EnumManifest::from_yaml_str(
            r#"
enums:
  - name: Gate
    members:
      - name: A
        value: 1
        enforcement: fail
"#,
        )
        .unwrap();
        let report = manifest.audit(AnnotationKind::all_kinds());
        let summary = render_summary(&report);

        assert!(summary.starts_with("Gate: 0/2 passed\n"));
        assert!(summary.contains("  FAIL: Gate::A (description): "));
        assert!(summary.contains("  FAIL: Gate::A (message): "));
        assert!(summary.contains("2 lookup(s) failed out of 2 total."));
    }

    #[test]
    fn run_audit_exit_codes() {
        let dir = tempfile::tempdir().unwrap();
        let dirty = dir.path().join("dirty.yaml");
        std::fs::write(&dirty, MANIFEST).unwrap();
        let clean = dir.path().join("clean.json");
        std::fs::write(
            &clean,
            r#"{"enums":[{"name":"Role","members":[{"name":"Admin","value":1}]}]}"#,
        )
        .unwrap();

        let audit = |manifest: PathBuf| AuditArgs {
            manifest,
            kind: None,
            json: true,
        };
        assert_eq!(run_audit(&audit(dirty)).unwrap(), 1);
        assert_eq!(run_audit(&audit(clean)).unwrap(), 0);
    }
}
