//! # lms-cli — Enum Metadata Command-Line Interface
//!
//! Provides the `lms` command for enumerations whose metadata lives in
//! YAML or JSON manifests.
//!
//! ## Subcommands
//!
//! - `lms resolve` — Resolve one member's description or message.
//! - `lms audit` — Report every ambiguous or missing annotation.
//!
//! ```bash
//! lms resolve enums.yaml --enum Status --member Active
//! lms resolve enums.yaml --enum Status --value 2 --kind message
//! lms audit enums.yaml --json
//! ```
//!
//! ## Exit Codes
//!
//! 0 on success, 1 when a lookup or audit fails, 2 on operational errors
//! (unreadable or malformed manifest).

pub mod audit;
pub mod resolve;

use std::path::Path;

use anyhow::{bail, Context, Result};
use lms_enum::{AnnotationKind, EnumManifest};

/// Load and validate a manifest, choosing the format by file extension.
pub fn load_manifest(path: &Path) -> Result<EnumManifest> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read manifest {}", path.display()))?;

    let parsed = match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => EnumManifest::from_yaml_str(&content),
        Some("json") => EnumManifest::from_json_str(&content),
        _ => bail!(
            "unsupported manifest format: {} (expected .yaml, .yml, or .json)",
            path.display()
        ),
    };
    let manifest = parsed.with_context(|| format!("invalid manifest {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        enums = manifest.enums.len(),
        "loaded manifest"
    );
    Ok(manifest)
}

/// Kinds selected by an optional `--kind` flag; both when absent.
pub fn selected_kinds(kind: Option<AnnotationKind>) -> Vec<AnnotationKind> {
    match kind {
        Some(kind) => vec![kind],
        None => AnnotationKind::all_kinds().to_vec(),
    }
}
