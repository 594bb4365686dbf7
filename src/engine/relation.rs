//! Relation property evaluator
//!
//! One function per predicate. Predicates that quantify over elements
//! (reflexivity, totality, and the composites built on them) take the
//! universe; the pair-local predicates take the relation alone. Every
//! verdict cites the complete set of offending elements or pairs, in
//! first-occurrence order.

use rustc_hash::FxHashSet;

use crate::instance::{Relation, Universe};
use crate::parser::parse_relation;
use crate::verdict::{RelationReport, Verdict};

/// Checks that every element relates to itself
pub fn reflexive(universe: &Universe, relation: &Relation) -> Verdict {
    let mut missing: Vec<&str> = Vec::new();
    for element in universe.iter() {
        if !relation.contains(element, element) {
            missing.push(element);
        }
    }
    if missing.is_empty() {
        Verdict::holds()
    } else {
        Verdict::fails(format!(
            "This relation is not reflexive as {} do not point to themselves.",
            missing.join(", ")
        ))
    }
}

/// Checks that no element relates to itself
pub fn anti_reflexive(relation: &Relation) -> Verdict {
    let mut looped: Vec<&str> = Vec::new();
    for pair in relation.distinct_pairs() {
        if pair.is_loop() {
            looped.push(pair.source.as_str());
        }
    }
    if looped.is_empty() {
        Verdict::holds()
    } else {
        Verdict::fails(format!(
            "This relation is not anti-reflexive as {} point to themselves.",
            looped.join(", ")
        ))
    }
}

/// Checks that every non-loop pair has its mirror
pub fn symmetric(relation: &Relation) -> Verdict {
    let mut violating: Vec<String> = Vec::new();
    let mut missing: Vec<String> = Vec::new();
    for pair in relation.distinct_pairs() {
        if !pair.is_loop() && !relation.contains(&pair.target, &pair.source) {
            violating.push(format!("({},{})", pair.source, pair.target));
            missing.push(format!("({},{})", pair.target, pair.source));
        }
    }
    if violating.is_empty() {
        Verdict::holds()
    } else {
        Verdict::fails(format!(
            "This relation is not symmetric as the edges {} exist, \
             however their symmetric pairs {} do not exist.",
            violating.join(", "),
            missing.join(", ")
        ))
    }
}

/// Checks that no two distinct elements relate in both directions
///
/// A mutual pair is reported once: whichever direction is seen first stands
/// for both.
pub fn anti_symmetric(relation: &Relation) -> Verdict {
    let mut reported: FxHashSet<(&str, &str)> = FxHashSet::default();
    let mut mutual: Vec<(&str, &str)> = Vec::new();
    for pair in relation.distinct_pairs() {
        let (a, b) = (pair.source.as_str(), pair.target.as_str());
        if a != b && relation.contains(b, a) && !reported.contains(&(b, a)) {
            reported.insert((a, b));
            mutual.push((a, b));
        }
    }
    if mutual.is_empty() {
        Verdict::holds()
    } else {
        let cited: Vec<String> = mutual
            .iter()
            .map(|(a, b)| format!("({a}, {b}) and ({b}, {a}) but {a} ≠ {b}"))
            .collect();
        Verdict::fails(format!(
            "This relation is not anti-symmetric, as {}.",
            cited.join(", ")
        ))
    }
}

/// Checks that every two-step path has its shortcut
///
/// Brute-force scan over all pairs of pairs; cubic in the edge count once
/// the membership probe is included, acceptable for the small universes the
/// engine supports. Every violating triple is cited.
pub fn transitive(relation: &Relation) -> Verdict {
    let pairs = relation.distinct_pairs();
    let mut violations: Vec<String> = Vec::new();
    for first in &pairs {
        for second in &pairs {
            if first.target == second.source && !relation.contains(&first.source, &second.target) {
                violations.push(format!(
                    "({},{}) and ({},{}) exist but ({},{}) does not",
                    first.source,
                    first.target,
                    second.source,
                    second.target,
                    first.source,
                    second.target
                ));
            }
        }
    }
    if violations.is_empty() {
        Verdict::holds()
    } else {
        Verdict::fails(format!(
            "This relation is not transitive, as the edges {}.",
            violations.join("; ")
        ))
    }
}

/// Checks for an equivalence relation: reflexive, symmetric, and transitive
///
/// The counterexample names exactly the constituent properties that failed.
pub fn equivalence(universe: &Universe, relation: &Relation) -> Verdict {
    let mut failing: Vec<&str> = Vec::new();
    if !reflexive(universe, relation).result {
        failing.push("not reflexive");
    }
    if !symmetric(relation).result {
        failing.push("not symmetric");
    }
    if !transitive(relation).result {
        failing.push("not transitive");
    }
    if failing.is_empty() {
        Verdict::holds()
    } else {
        Verdict::fails(format!(
            "It is not equivalent as it is {}.",
            failing.join(" and ")
        ))
    }
}

/// Checks for a partial order: reflexive, anti-symmetric, and transitive
pub fn partial_order(universe: &Universe, relation: &Relation) -> Verdict {
    let mut failing: Vec<&str> = Vec::new();
    if !reflexive(universe, relation).result {
        failing.push("not reflexive");
    }
    if !anti_symmetric(relation).result {
        failing.push("not anti-symmetric");
    }
    if !transitive(relation).result {
        failing.push("not transitive");
    }
    if failing.is_empty() {
        Verdict::holds()
    } else {
        Verdict::fails(format!(
            "It is not a partial order as it is {}.",
            failing.join(" and ")
        ))
    }
}

/// Checks totality: every two elements are comparable
///
/// Comparability here includes each element with itself, so a missing
/// self-pair fails totality too. The counterexample lists every missing
/// pair as `a,b`, self-pairs included.
pub fn total(universe: &Universe, relation: &Relation) -> Verdict {
    let mut missing: Vec<String> = Vec::new();

    for element in universe.iter() {
        if !relation.contains(element, element) {
            let entry = format!("{element},{element}");
            if !missing.contains(&entry) {
                missing.push(entry);
            }
        }
    }

    let labels: Vec<&str> = universe.iter().collect();
    for i in 0..labels.len() {
        for j in (i + 1)..labels.len() {
            let (a, b) = (labels[i], labels[j]);
            if !relation.contains(a, b) && !relation.contains(b, a) {
                let entry = format!("{a},{b}");
                if !missing.contains(&entry) {
                    missing.push(entry);
                }
            }
        }
    }

    if missing.is_empty() {
        Verdict::holds()
    } else {
        Verdict::fails(format!(
            "does not satisfy totality because the following nodes \
             do not relate to each other: {}",
            missing.join("; ")
        ))
    }
}

/// Checks for a total order: a partial order satisfying totality
///
/// The counterexample composes the failure messages of both constituents.
pub fn total_order(universe: &Universe, relation: &Relation) -> Verdict {
    let partial = partial_order(universe, relation);
    let totality = total(universe, relation);

    let mut reasons: Vec<String> = Vec::new();
    if !partial.result {
        reasons.push("does not satisfy partial order".to_string());
    }
    if let Some(text) = totality.counterexample {
        reasons.push(text);
    }

    if reasons.is_empty() {
        Verdict::holds()
    } else {
        Verdict::fails(format!("This relation {}.", reasons.join(" and ")))
    }
}

/// Runs every relation predicate and bundles the verdicts
pub fn analyze(universe: &Universe, relation: &Relation) -> RelationReport {
    RelationReport {
        reflexive: reflexive(universe, relation),
        anti_reflexive: anti_reflexive(relation),
        symmetric: symmetric(relation),
        anti_symmetric: anti_symmetric(relation),
        transitive: transitive(relation),
        equivalent: equivalence(universe, relation),
        partial: partial_order(universe, relation),
        totality: total(universe, relation),
        total: total_order(universe, relation),
    }
}

/// Parses relation text and runs the full analysis
///
/// This is the call the diagram collaborator makes on every edit: it hands
/// over its element labels and the re-derived relation string.
pub fn analyze_text(universe: &Universe, text: &str) -> RelationReport {
    analyze(universe, &parse_relation(text))
}
