//! Eligibility classification for the two serialization paths.

use ffi_serde_model::{
    Classification, ClassifiedDeclaration, Declaration, DeclarationKind, DeclarativeRules,
    EligibilityRules, ExclusionReason, ManualRules,
};
use ffi_serde_scan::SourceUnit;

/// Classifies a declaration for the `#[derive(Serialize, Deserialize)]` path.
///
/// A declaration with a serde marker in any of its derive attributes is left
/// as is, so repeated annotation runs are no-ops.
pub fn classify_declarative(declaration: &Declaration, rules: &DeclarativeRules) -> Classification {
    if declaration.derive_attribute().is_none() {
        return Classification::Excluded(ExclusionReason::NoDeriveList);
    }
    if declaration.derives_serde() {
        return Classification::Excluded(ExclusionReason::AlreadySatisfied);
    }
    if rules.exclude_unions && declaration.kind == DeclarationKind::Union {
        return Classification::Excluded(ExclusionReason::Union);
    }
    if rules.excluded.contains(&declaration.name) {
        return Classification::Excluded(ExclusionReason::Listed);
    }
    Classification::DeclarativeEligible
}

/// Classifies a declaration for the generated byte-copy path.
pub fn classify_manual(declaration: &Declaration, rules: &ManualRules) -> Classification {
    if rules.hand_written.contains(&declaration.name) {
        Classification::HandWritten
    } else if declaration.is_generic() {
        Classification::Excluded(ExclusionReason::Generic)
    } else {
        Classification::ManualEligible
    }
}

/// Classifies every declaration of a unit on both paths.
pub fn classify_unit(unit: &SourceUnit, rules: &EligibilityRules) -> Vec<ClassifiedDeclaration> {
    unit.declarations()
        .iter()
        .map(|declaration| ClassifiedDeclaration {
            kind: declaration.kind,
            name: declaration.name.clone(),
            line: declaration.line_number(),
            declarative: classify_declarative(declaration, &rules.declarative),
            manual: classify_manual(declaration, &rules.manual),
        })
        .collect()
}
