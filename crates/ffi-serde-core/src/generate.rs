//! Manual codec generation.
//!
//! The generated unit is rebuilt from scratch on every run: a header line,
//! the fixed [`PREAMBLE`], and one byte-copy pair per manual-eligible
//! declaration in source order.

use tracing::{debug, warn};

use ffi_serde_model::{Classification, Declaration, ExclusionReason, ManualRules};
use ffi_serde_scan::SourceUnit;

use crate::classify::classify_manual;
use crate::error::{GenerateError, Result};
use crate::template::{PREAMBLE, render_pair};

/// Default header written at the top of generated units.
pub const DEFAULT_HEADER: &str = "// Generated by ffi-serde. Do not edit.";

/// Options for codec generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// File name prefix of generated units (`serialize_`).
    pub output_prefix: String,
    /// Comment line(s) placed before the preamble.
    pub header: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            output_prefix: "serialize_".to_string(),
            header: DEFAULT_HEADER.to_string(),
        }
    }
}

/// A generated codec unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub text: String,
    pub report: GenerationReport,
}

/// What the generator emitted for one unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Names that received a templated pair, in source order.
    pub generated: Vec<String>,
    /// Wrapper names covered by the preamble.
    pub hand_written: Vec<String>,
    /// Generated names whose derive list already carries a serde marker.
    /// Compiling both would produce conflicting impls.
    pub conflicts: Vec<String>,
}

impl GenerationReport {
    /// Total number of declarations seen.
    pub fn total(&self) -> usize {
        self.generated.len() + self.hand_written.len()
    }
}

/// Generates the codec unit for `unit`.
///
/// # Errors
///
/// Returns [`GenerateError::UnsupportedGenerics`] for a generic declaration
/// that the preamble does not cover, and [`GenerateError::NotGeneratable`]
/// for any other declaration left out of the manual path.
pub fn generate(
    unit: &SourceUnit,
    rules: &ManualRules,
    options: &GenerateOptions,
) -> Result<Generated> {
    let mut report = GenerationReport::default();
    let mut text = String::new();
    text.push_str(options.header.trim_end());
    text.push_str("\n\n");
    text.push_str(PREAMBLE);

    for declaration in unit.declarations() {
        match classify_manual(declaration, rules) {
            Classification::HandWritten => report.hand_written.push(declaration.name.clone()),
            Classification::ManualEligible => {
                if declaration.derives_serde() {
                    warn!(
                        name = %declaration.name,
                        line = declaration.line_number(),
                        "declaration already derives serde; generated impls will conflict"
                    );
                    report.conflicts.push(declaration.name.clone());
                }
                text.push('\n');
                text.push_str(&render_pair(&declaration.name));
                report.generated.push(declaration.name.clone());
            }
            decision @ (Classification::DeclarativeEligible | Classification::Excluded(_)) => {
                return Err(rejection(declaration, decision));
            }
        }
    }

    debug!(
        generated = report.generated.len(),
        hand_written = report.hand_written.len(),
        conflicts = report.conflicts.len(),
        "generated codec unit"
    );
    Ok(Generated { text, report })
}

/// The error for a declaration the generator cannot emit a pair for.
fn rejection(declaration: &Declaration, decision: Classification) -> GenerateError {
    let name = declaration.name.clone();
    let line = declaration.line_number();
    match decision {
        Classification::Excluded(ExclusionReason::Generic) => {
            GenerateError::UnsupportedGenerics { name, line }
        }
        decision => GenerateError::NotGeneratable {
            name,
            line,
            decision,
        },
    }
}

/// Maps `<input_prefix><suffix>` to `<output_prefix><suffix>`.
///
/// Returns `None` when `input` does not start with `input_prefix` or has
/// nothing after it.
pub fn output_file_name(input: &str, input_prefix: &str, output_prefix: &str) -> Option<String> {
    let suffix = input.strip_prefix(input_prefix)?;
    if suffix.is_empty() {
        return None;
    }
    Some(format!("{output_prefix}{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ffi_serde_scan::scan;

    fn generate_text(text: &str) -> Result<Generated> {
        let unit = scan(text).expect("scan");
        generate(&unit, &ManualRules::default(), &GenerateOptions::default())
    }

    #[test]
    fn empty_unit_gets_header_and_preamble() {
        let generated = generate_text("").expect("generate");
        assert_eq!(generated.text, format!("{DEFAULT_HEADER}\n\n{PREAMBLE}"));
        assert!(generated.report.generated.is_empty());
    }

    #[test]
    fn emits_pairs_in_source_order() {
        let generated = generate_text(
            "pub struct kvm_b {\n    pub x: u8,\n}\npub union kvm_a {\n    pub y: u8,\n}\n",
        )
        .expect("generate");
        assert_eq!(generated.report.generated, vec!["kvm_b", "kvm_a"]);
        let b = generated.text.find("impl Serialize for kvm_b").expect("kvm_b pair");
        let a = generated.text.find("impl Serialize for kvm_a").expect("kvm_a pair");
        assert!(b < a);
    }

    #[test]
    fn wrappers_are_not_templated() {
        let generated = generate_text(
            "pub struct __IncompleteArrayField<T>(::std::marker::PhantomData<T>, [T; 0]);\n",
        )
        .expect("generate");
        assert_eq!(generated.report.hand_written, vec!["__IncompleteArrayField"]);
        assert_eq!(
            generated.text.matches("for __IncompleteArrayField<T>").count(),
            2
        );
    }

    #[test]
    fn other_generics_are_rejected() {
        let err = generate_text("\n\npub struct Wrapper<T> {\n    pub inner: T,\n}\n")
            .expect_err("generic");
        match err {
            GenerateError::UnsupportedGenerics { name, line } => {
                assert_eq!(name, "Wrapper");
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn other_exclusions_are_not_reported_as_generics() {
        let unit =
            scan("#[repr(C)]\npub struct kvm_regs {\n    pub rax: u64,\n}\n").expect("scan");
        let declaration = &unit.declarations()[0];
        let decision = Classification::Excluded(ExclusionReason::Listed);
        match rejection(declaration, decision) {
            GenerateError::NotGeneratable {
                name,
                line,
                decision: reported,
            } => {
                assert_eq!(name, "kvm_regs");
                assert_eq!(line, 2);
                assert_eq!(reported, decision);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(matches!(
            rejection(declaration, Classification::Excluded(ExclusionReason::Generic)),
            GenerateError::UnsupportedGenerics { .. }
        ));
    }

    #[test]
    fn reports_serde_conflicts() {
        let generated = generate_text(
            "#[derive(Debug, Serialize, Deserialize)]\npub struct kvm_done {\n    pub x: u8,\n}\n",
        )
        .expect("generate");
        assert_eq!(generated.report.conflicts, vec!["kvm_done"]);
        assert_eq!(generated.report.generated, vec!["kvm_done"]);
    }

    #[test]
    fn custom_header() {
        let unit = scan("").expect("scan");
        let options = GenerateOptions {
            header: "// Copyright example\n".to_string(),
            ..Default::default()
        };
        let generated = generate(&unit, &ManualRules::default(), &options).expect("generate");
        assert!(generated.text.starts_with("// Copyright example\n\nuse ffi_serde_codec"));
    }

    #[test]
    fn maps_output_file_names() {
        assert_eq!(
            output_file_name("bindings_v4_14_0.rs", "bindings_", "serialize_").as_deref(),
            Some("serialize_v4_14_0.rs")
        );
        assert_eq!(output_file_name("mod.rs", "bindings_", "serialize_"), None);
        assert_eq!(output_file_name("bindings_", "bindings_", "serialize_"), None);
    }
}
