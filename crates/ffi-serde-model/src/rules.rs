//! Exclusion rules shared by the annotator and the codec generator.
//!
//! Both paths start from one base list but use it differently: the
//! declarative path skips listed types (and every union) when adding
//! `#[derive(Serialize, Deserialize)]`, while the manual path only needs to
//! know which wrapper types the generated preamble already covers.

use std::collections::BTreeSet;

/// bindgen's packed bit-range storage wrapper.
pub const BITFIELD_UNIT: &str = "__BindgenBitfieldUnit";

/// bindgen's zero-size flexible array member placeholder.
pub const INCOMPLETE_ARRAY_FIELD: &str = "__IncompleteArrayField";

/// Structs that cannot take a serde derive.
///
/// Each holds a field serde's derive rejects, typically an array longer
/// than 32 elements.
pub const BASE_EXCLUSIONS: &[&str] = &[
    "kvm_enable_cap",
    "kvm_hyperv_exit__bindgen_ty_1__bindgen_ty_2",
    "kvm_ioapic_state",
    "kvm_ioeventfd",
    "kvm_lapic_state",
    "kvm_ppc_pvinfo",
    "kvm_xsave",
];

/// Generic wrapper types whose pairs are written by hand in the preamble.
pub const WRAPPER_TYPES: &[&str] = &[BITFIELD_UNIT, INCOMPLETE_ARRAY_FIELD];

/// A set of type names matched exactly against declaration names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    names: BTreeSet<String>,
}

impl ExclusionSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

/// Rules for the `#[derive(Serialize, Deserialize)]` path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarativeRules {
    pub excluded: ExclusionSet,
    /// Unions never derive serde traits.
    pub exclude_unions: bool,
}

impl DeclarativeRules {
    pub fn from_base(base: &[&str]) -> Self {
        Self {
            excluded: ExclusionSet::new(base.iter().copied()),
            exclude_unions: true,
        }
    }
}

impl Default for DeclarativeRules {
    fn default() -> Self {
        Self::from_base(BASE_EXCLUSIONS)
    }
}

/// Rules for the generated byte-copy path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualRules {
    /// Types covered by the fixed preamble; never templated.
    pub hand_written: ExclusionSet,
}

impl Default for ManualRules {
    fn default() -> Self {
        Self {
            hand_written: ExclusionSet::new(WRAPPER_TYPES.iter().copied()),
        }
    }
}

/// Both rule sets, derived from the same base list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EligibilityRules {
    pub declarative: DeclarativeRules,
    pub manual: ManualRules,
}

impl EligibilityRules {
    /// Builds the rule sets from a custom base exclusion list.
    pub fn from_base(base: &[&str]) -> Self {
        Self {
            declarative: DeclarativeRules::from_base(base),
            manual: ManualRules::default(),
        }
    }
}
