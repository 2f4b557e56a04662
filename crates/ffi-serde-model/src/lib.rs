//! Data model for retrofitting serde support onto bindgen declarations.

pub mod classification;
pub mod declaration;
pub mod rules;

pub use classification::{Classification, ClassifiedDeclaration, ExclusionReason};
pub use declaration::{Attribute, Declaration, DeclarationKind, DeriveList};
pub use rules::{
    BASE_EXCLUSIONS, BITFIELD_UNIT, DeclarativeRules, EligibilityRules, ExclusionSet,
    INCOMPLETE_ARRAY_FIELD, ManualRules, WRAPPER_TYPES,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_serializes_with_reason() {
        let json = serde_json::to_string(&Classification::Excluded(ExclusionReason::Union))
            .expect("serialize classification");
        assert_eq!(json, r#"{"decision":"excluded","reason":"union"}"#);

        let round: Classification = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(round, Classification::Excluded(ExclusionReason::Union));
    }

    #[test]
    fn classification_display() {
        assert_eq!(Classification::ManualEligible.to_string(), "generated");
        assert_eq!(
            Classification::Excluded(ExclusionReason::Listed).to_string(),
            "skip (listed)"
        );
        assert!(Classification::Excluded(ExclusionReason::Generic).is_excluded());
        assert!(!Classification::HandWritten.is_excluded());
    }
}
