//! # Authoring Audit
//!
//! Runs every lookup an enumeration can answer and records the ones that
//! fail. A clean report means no member is ambiguous and no enforced member
//! is missing an annotation, for the kinds that were audited.

use serde::{Deserialize, Serialize};

use crate::annotation::AnnotationKind;
use crate::error::MetaError;
use crate::meta::EnumMeta;

/// Why a lookup failed during an audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "problem")]
pub enum Problem {
    /// More than one annotation of the kind.
    Ambiguous {
        /// Number of annotations found.
        count: usize,
    },
    /// No annotation of the kind on an enforced member.
    Missing,
    /// The member could not be looked up at all.
    InvalidOperand,
}

impl From<&MetaError> for Problem {
    fn from(err: &MetaError) -> Self {
        match err {
            MetaError::AmbiguousAnnotation { count, .. } => Self::Ambiguous { count: *count },
            MetaError::MissingAnnotation { .. } => Self::Missing,
            MetaError::InvalidOperand { .. } => Self::InvalidOperand,
        }
    }
}

/// One failed lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub type_name: String,
    pub member: String,
    pub kind: AnnotationKind,
    #[serde(flatten)]
    pub problem: Problem,
    /// Rendered error message.
    pub detail: String,
}

/// Lookup counts for one enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumTally {
    pub type_name: String,
    pub checked: usize,
    pub passed: usize,
}

impl EnumTally {
    pub fn failed(&self) -> usize {
        self.checked.saturating_sub(self.passed)
    }
}

/// Result of auditing one or more enumerations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    /// Lookups performed (members × kinds).
    pub checked: usize,
    /// Lookups that succeeded.
    pub passed: usize,
    /// Per-enumeration counts, in audit order.
    #[serde(default)]
    pub enums: Vec<EnumTally>,
    pub findings: Vec<Finding>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Lookups that failed.
    pub fn failed(&self) -> usize {
        self.checked.saturating_sub(self.passed)
    }

    /// Counts for `type_name`, if it was audited.
    pub fn tally_for(&self, type_name: &str) -> Option<&EnumTally> {
        self.enums.iter().find(|t| t.type_name == type_name)
    }

    /// Open (or reopen) the tally for `type_name`, so enumerations without
    /// members still appear in the report.
    pub fn begin(&mut self, type_name: &str) -> &mut EnumTally {
        match self.enums.iter().position(|t| t.type_name == type_name) {
            Some(index) => &mut self.enums[index],
            None => {
                self.enums.push(EnumTally {
                    type_name: type_name.to_string(),
                    checked: 0,
                    passed: 0,
                });
                let last = self.enums.len() - 1;
                &mut self.enums[last]
            }
        }
    }

    /// Record the outcome of one lookup.
    pub fn record<T>(
        &mut self,
        type_name: &str,
        member: &str,
        kind: AnnotationKind,
        outcome: &Result<T, MetaError>,
    ) {
        let tally = self.begin(type_name);
        tally.checked += 1;
        if outcome.is_ok() {
            tally.passed += 1;
        }

        self.checked += 1;
        match outcome {
            Ok(_) => self.passed += 1,
            Err(err) => self.findings.push(Finding {
                type_name: type_name.to_string(),
                member: member.to_string(),
                kind,
                problem: Problem::from(err),
                detail: err.to_string(),
            }),
        }
    }

    /// Fold another report into this one.
    pub fn merge(&mut self, other: AuditReport) {
        self.checked += other.checked;
        self.passed += other.passed;
        for tally in other.enums {
            let ours = self.begin(&tally.type_name);
            ours.checked += tally.checked;
            ours.passed += tally.passed;
        }
        self.findings.extend(other.findings);
    }

    /// Findings for one enumeration.
    pub fn findings_for<'a>(&'a self, type_name: &'a str) -> impl Iterator<Item = &'a Finding> + 'a {
        self.findings.iter().filter(move |f| f.type_name == type_name)
    }
}

/// Audit every member of `meta` for each of `kinds`.
pub fn audit_enum(meta: &EnumMeta, kinds: &[AnnotationKind]) -> AuditReport {
    let mut report = AuditReport::default();
    report.begin(meta.type_name);
    for member in meta.members {
        for &kind in kinds {
            report.record(
                meta.type_name,
                member.name,
                kind,
                &member.resolve(meta.type_name, kind),
            );
        }
    }
    report
}
