//! Capability annotation: appending serde markers to derive lists.
//!
//! The annotator is a pure function over a scanned unit. Every line that does
//! not belong to a rewritten derive attribute is copied through unchanged, so
//! the output differs from the input only where markers were inserted.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use ffi_serde_model::{Classification, DeclarativeRules, DeriveList, ExclusionReason};
use ffi_serde_scan::SourceUnit;

use crate::classify::classify_declarative;

const MARKERS: &str = "Serialize, Deserialize";

/// Result of annotating one source unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotated {
    pub text: String,
    pub report: AnnotationReport,
}

impl Annotated {
    /// Returns true if at least one derive list was rewritten.
    pub fn changed(&self) -> bool {
        self.report.annotated_count() > 0
    }
}

/// Per-unit counts of annotation decisions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationReport {
    /// Names of annotated declarations, in source order.
    pub annotated: Vec<String>,
    pub already_satisfied: usize,
    pub excluded: usize,
    pub no_derive: usize,
}

impl AnnotationReport {
    pub fn annotated_count(&self) -> usize {
        self.annotated.len()
    }

    /// Total number of declarations seen.
    pub fn total(&self) -> usize {
        self.annotated.len() + self.already_satisfied + self.excluded + self.no_derive
    }

    fn record(&mut self, name: &str, decision: Classification) {
        match decision {
            Classification::DeclarativeEligible => self.annotated.push(name.to_string()),
            Classification::Excluded(ExclusionReason::AlreadySatisfied) => {
                self.already_satisfied += 1;
            }
            Classification::Excluded(ExclusionReason::NoDeriveList) => self.no_derive += 1,
            _ => self.excluded += 1,
        }
    }
}

/// Appends `Serialize, Deserialize` to the derive list of every declaratively
/// eligible declaration in `unit`.
///
/// Running the annotator over its own output yields the same text.
pub fn annotate(unit: &SourceUnit, rules: &DeclarativeRules) -> Annotated {
    let mut report = AnnotationReport::default();
    // Keyed by first attribute line: (end line, replacement text).
    let mut rewrites: BTreeMap<usize, (usize, String)> = BTreeMap::new();

    for declaration in unit.declarations() {
        let decision = classify_declarative(declaration, rules);
        trace!(name = %declaration.name, %decision, "declarative decision");
        report.record(&declaration.name, decision);
        if decision != Classification::DeclarativeEligible {
            continue;
        }
        let Some((index, derive)) = declaration.derive_attribute() else {
            continue;
        };
        let attribute = &declaration.attributes[index];
        rewrites.insert(
            attribute.lines.start,
            (attribute.lines.end, insert_markers(&attribute.text, &derive)),
        );
    }

    let lines = unit.lines();
    let mut text = String::with_capacity(lines.iter().map(String::len).sum::<usize>());
    let mut index = 0;
    while index < lines.len() {
        if let Some((end, replacement)) = rewrites.get(&index) {
            text.push_str(replacement);
            index = *end;
        } else {
            text.push_str(&lines[index]);
            index += 1;
        }
    }

    debug!(
        annotated = report.annotated_count(),
        already_satisfied = report.already_satisfied,
        excluded = report.excluded,
        no_derive = report.no_derive,
        "annotated source unit"
    );
    Annotated { text, report }
}

/// Inserts the markers into the attribute text of a parsed derive list.
fn insert_markers(attribute: &str, derive: &DeriveList) -> String {
    let before_close = &attribute[..derive.span.end];
    let anchor = before_close.trim_end();
    let insertion = match anchor.chars().last() {
        Some('(') => MARKERS.to_string(),
        Some(',') => format!(" {MARKERS},"),
        _ => format!(", {MARKERS}"),
    };
    let at = anchor.len();
    let mut rewritten = String::with_capacity(attribute.len() + insertion.len());
    rewritten.push_str(&attribute[..at]);
    rewritten.push_str(&insertion);
    rewritten.push_str(&attribute[at..]);
    rewritten
}
