//! Verdict and report types
//!
//! Every predicate answers with a [`Verdict`]: a boolean result, and a
//! counterexample sentence exactly when the property fails. Reports bundle
//! one verdict per property under a fixed key set so a rendering collaborator
//! can consume the whole analysis as a single map.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The outcome of a single property check
///
/// Invariant: `counterexample` is `Some` if and only if `result` is false.
/// The constructors maintain this; building a verdict by hand is possible
/// but there is no reason to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Whether the property holds
    pub result: bool,
    /// A concrete witness of failure, absent when the property holds
    pub counterexample: Option<String>,
}

impl Verdict {
    /// A positive verdict: the property holds, no counterexample
    pub fn holds() -> Self {
        Self {
            result: true,
            counterexample: None,
        }
    }

    /// A negative verdict carrying its counterexample
    pub fn fails(counterexample: impl Into<String>) -> Self {
        Self {
            result: false,
            counterexample: Some(counterexample.into()),
        }
    }
}

/// The relation properties the engine decides
///
/// Serialized keys (and [`RelationProperty::key`]) match the map keys the
/// collaborator displays: `totality` is the comparability check, `total` is
/// the total-order check built on top of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationProperty {
    /// Every element relates to itself
    Reflexive,
    /// No element relates to itself
    AntiReflexive,
    /// Every pair has its mirror
    Symmetric,
    /// No distinct pair has its mirror
    AntiSymmetric,
    /// Every two-step path has its shortcut
    Transitive,
    /// Reflexive, symmetric, and transitive
    Equivalent,
    /// Reflexive, anti-symmetric, and transitive
    Partial,
    /// Every two elements are comparable (self-pairs included)
    Totality,
    /// A partial order satisfying totality
    Total,
}

impl RelationProperty {
    /// All relation properties, in report order
    pub const ALL: [RelationProperty; 9] = [
        RelationProperty::Reflexive,
        RelationProperty::AntiReflexive,
        RelationProperty::Symmetric,
        RelationProperty::AntiSymmetric,
        RelationProperty::Transitive,
        RelationProperty::Equivalent,
        RelationProperty::Partial,
        RelationProperty::Totality,
        RelationProperty::Total,
    ];

    /// The fixed map key for this property
    pub fn key(&self) -> &'static str {
        match self {
            RelationProperty::Reflexive => "reflexive",
            RelationProperty::AntiReflexive => "antiReflexive",
            RelationProperty::Symmetric => "symmetric",
            RelationProperty::AntiSymmetric => "antiSymmetric",
            RelationProperty::Transitive => "transitive",
            RelationProperty::Equivalent => "equivalent",
            RelationProperty::Partial => "partial",
            RelationProperty::Totality => "totality",
            RelationProperty::Total => "total",
        }
    }
}

impl fmt::Display for RelationProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The function properties the engine decides
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FunctionProperty {
    /// Every domain node has exactly one outgoing edge
    IsFunction,
    /// No codomain node has two preimages
    IsInjective,
    /// Every codomain node has a preimage
    IsSurjective,
    /// Injective and surjective
    IsBijective,
}

impl FunctionProperty {
    /// All function properties, in report order
    pub const ALL: [FunctionProperty; 4] = [
        FunctionProperty::IsFunction,
        FunctionProperty::IsInjective,
        FunctionProperty::IsSurjective,
        FunctionProperty::IsBijective,
    ];

    /// The fixed map key for this property
    pub fn key(&self) -> &'static str {
        match self {
            FunctionProperty::IsFunction => "isFunction",
            FunctionProperty::IsInjective => "isInjective",
            FunctionProperty::IsSurjective => "isSurjective",
            FunctionProperty::IsBijective => "isBijective",
        }
    }
}

impl fmt::Display for FunctionProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One verdict per relation property
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationReport {
    /// Verdict for reflexivity
    pub reflexive: Verdict,
    /// Verdict for anti-reflexivity
    pub anti_reflexive: Verdict,
    /// Verdict for symmetry
    pub symmetric: Verdict,
    /// Verdict for anti-symmetry
    pub anti_symmetric: Verdict,
    /// Verdict for transitivity
    pub transitive: Verdict,
    /// Verdict for being an equivalence relation
    pub equivalent: Verdict,
    /// Verdict for being a partial order
    pub partial: Verdict,
    /// Verdict for totality
    pub totality: Verdict,
    /// Verdict for being a total order
    pub total: Verdict,
}

impl RelationReport {
    /// Returns the verdict for the given property
    pub fn get(&self, property: RelationProperty) -> &Verdict {
        match property {
            RelationProperty::Reflexive => &self.reflexive,
            RelationProperty::AntiReflexive => &self.anti_reflexive,
            RelationProperty::Symmetric => &self.symmetric,
            RelationProperty::AntiSymmetric => &self.anti_symmetric,
            RelationProperty::Transitive => &self.transitive,
            RelationProperty::Equivalent => &self.equivalent,
            RelationProperty::Partial => &self.partial,
            RelationProperty::Totality => &self.totality,
            RelationProperty::Total => &self.total,
        }
    }

    /// Iterates over (property, verdict) entries, in report order
    pub fn iter(&self) -> impl Iterator<Item = (RelationProperty, &Verdict)> {
        RelationProperty::ALL.into_iter().map(move |p| (p, self.get(p)))
    }
}

/// One verdict per function property
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionReport {
    /// Verdict for well-definedness
    pub is_function: Verdict,
    /// Verdict for injectivity
    pub is_injective: Verdict,
    /// Verdict for surjectivity
    pub is_surjective: Verdict,
    /// Verdict for bijectivity
    pub is_bijective: Verdict,
}

impl FunctionReport {
    /// Returns the verdict for the given property
    pub fn get(&self, property: FunctionProperty) -> &Verdict {
        match property {
            FunctionProperty::IsFunction => &self.is_function,
            FunctionProperty::IsInjective => &self.is_injective,
            FunctionProperty::IsSurjective => &self.is_surjective,
            FunctionProperty::IsBijective => &self.is_bijective,
        }
    }

    /// Iterates over (property, verdict) entries, in report order
    pub fn iter(&self) -> impl Iterator<Item = (FunctionProperty, &Verdict)> {
        FunctionProperty::ALL.into_iter().map(move |p| (p, self.get(p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_constructors_keep_invariant() {
        let positive = Verdict::holds();
        assert!(positive.result);
        assert!(positive.counterexample.is_none());

        let negative = Verdict::fails("a does not relate to itself");
        assert!(!negative.result);
        assert_eq!(
            negative.counterexample.as_deref(),
            Some("a does not relate to itself")
        );
    }

    #[test]
    fn property_keys_are_fixed() {
        let keys: Vec<_> = RelationProperty::ALL.iter().map(|p| p.key()).collect();
        assert_eq!(
            keys,
            vec![
                "reflexive",
                "antiReflexive",
                "symmetric",
                "antiSymmetric",
                "transitive",
                "equivalent",
                "partial",
                "totality",
                "total",
            ]
        );
        assert_eq!(FunctionProperty::IsFunction.key(), "isFunction");
        assert_eq!(FunctionProperty::IsBijective.to_string(), "isBijective");
    }
}
