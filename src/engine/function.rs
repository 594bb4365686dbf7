//! Function property evaluator
//!
//! Decides whether the edges of a bipartite diagram form a function, and if
//! so whether that function is injective, surjective, or bijective. The
//! evaluator never assumes well-definedness: it proves or disproves it, and
//! the other three properties refuse to evaluate a non-function.
//!
//! All comparisons and counterexamples go through node labels, never
//! internal ids; nodes sharing a label are indistinguishable here.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::instance::FunctionGraph;
use crate::verdict::{FunctionReport, Verdict};

/// Counterexample used when injectivity, surjectivity, or bijectivity is
/// asked of an edge set that is not a function to begin with.
const NOT_A_FUNCTION: &str = "it is not even a function";

/// Checks that every domain node has exactly one outgoing edge
///
/// Both violation classes are cited together: domain nodes with no output,
/// and domain nodes with more than one output (each listing every target it
/// maps to).
pub fn well_defined(graph: &FunctionGraph) -> Verdict {
    let mut outgoing: FxHashMap<&str, Vec<&str>> = FxHashMap::default();
    for node in graph.domain_nodes() {
        outgoing.entry(node.id.as_str()).or_default();
    }
    for edge in graph.edges() {
        if let Some(targets) = outgoing.get_mut(edge.source.as_str()) {
            targets.push(edge.target.as_str());
        }
    }

    let mut no_output: Vec<&str> = Vec::new();
    let mut multiple_outputs: Vec<String> = Vec::new();
    for node in graph.domain_nodes() {
        let targets = match outgoing.get(node.id.as_str()) {
            Some(targets) => targets,
            None => continue,
        };
        if targets.is_empty() {
            no_output.push(node.label.as_str());
        } else if targets.len() > 1 {
            let target_labels: Vec<&str> = targets
                .iter()
                .map(|&id| graph.label_of(id).unwrap_or(id))
                .collect();
            multiple_outputs.push(format!("{} -> {}", node.label, target_labels.join(", ")));
        }
    }

    let mut problems: Vec<String> = Vec::new();
    if !no_output.is_empty() {
        problems.push(format!(
            "An input in its domain does not have an output: {}",
            no_output.join(", ")
        ));
    }
    if !multiple_outputs.is_empty() {
        problems.push(format!(
            "An input in its domain has more than one output: {}",
            multiple_outputs.join("; ")
        ));
    }

    if problems.is_empty() {
        Verdict::holds()
    } else {
        Verdict::fails(problems.join(" and "))
    }
}

/// Checks that no codomain node is the image of two distinct domain nodes
///
/// Fails immediately with a not-a-function counterexample when the edge set
/// is not well-defined. Otherwise every codomain label with two or more
/// preimages is cited, naming the first two colliding domain labels.
pub fn injective(graph: &FunctionGraph) -> Verdict {
    if !well_defined(graph).result {
        return Verdict::fails(NOT_A_FUNCTION);
    }

    let (order, preimages) = inverse_image(graph);
    let mut violations: Vec<String> = Vec::new();
    for target in order {
        let sources = &preimages[target];
        if sources.len() > 1 {
            violations.push(format!(
                "{} maps to {} and {} also maps to {} but {} and {} are not equal",
                sources[0], target, sources[1], target, sources[0], sources[1]
            ));
        }
    }

    if violations.is_empty() {
        Verdict::holds()
    } else {
        Verdict::fails(violations.join("; "))
    }
}

/// Checks that every codomain node is the image of some domain node
///
/// Fails immediately with a not-a-function counterexample when the edge set
/// is not well-defined. Otherwise every unreached codomain label is cited.
pub fn surjective(graph: &FunctionGraph) -> Verdict {
    if !well_defined(graph).result {
        return Verdict::fails(NOT_A_FUNCTION);
    }

    let (_, preimages) = inverse_image(graph);
    let mut unreached: Vec<&str> = Vec::new();
    for node in graph.codomain_nodes() {
        if !preimages.contains_key(node.label.as_str()) {
            unreached.push(node.label.as_str());
        }
    }

    if unreached.is_empty() {
        Verdict::holds()
    } else {
        Verdict::fails(format!(
            "there does not exist any element in the domain mapping to: {}",
            unreached.join(", ")
        ))
    }
}

/// Checks bijectivity: injective and surjective
///
/// The counterexample names which of the two constituents failed.
pub fn bijective(graph: &FunctionGraph) -> Verdict {
    if !well_defined(graph).result {
        return Verdict::fails(NOT_A_FUNCTION);
    }

    let injectivity = injective(graph);
    let surjectivity = surjective(graph);
    if injectivity.result && surjectivity.result {
        return Verdict::holds();
    }

    let mut failing: Vec<&str> = Vec::new();
    if !injectivity.result {
        failing.push("is not injective");
    }
    if !surjectivity.result {
        failing.push("is not surjective");
    }
    Verdict::fails(format!(
        "The relation is not bijective because it {}.",
        failing.join(" and ")
    ))
}

/// Runs every function predicate and bundles the verdicts
///
/// When the edge set is not a function, the other three verdicts
/// short-circuit to false rather than being evaluated on a non-function.
pub fn analyze(graph: &FunctionGraph) -> FunctionReport {
    let is_function = well_defined(graph);
    if !is_function.result {
        return FunctionReport {
            is_function,
            is_injective: Verdict::fails(NOT_A_FUNCTION),
            is_surjective: Verdict::fails(NOT_A_FUNCTION),
            is_bijective: Verdict::fails(NOT_A_FUNCTION),
        };
    }
    FunctionReport {
        is_function,
        is_injective: injective(graph),
        is_surjective: surjective(graph),
        is_bijective: bijective(graph),
    }
}

/// Inverse image of the edge set: codomain label to the domain labels
/// mapping to it, with first-reached codomain labels first
///
/// Edges with an unresolvable endpoint are skipped.
fn inverse_image(graph: &FunctionGraph) -> (Vec<&str>, FxHashMap<&str, Vec<&str>>) {
    let mut order: Vec<&str> = Vec::new();
    let mut preimages: FxHashMap<&str, Vec<&str>> = FxHashMap::default();
    for edge in graph.edges() {
        let (source, target) = match (graph.node(&edge.source), graph.node(&edge.target)) {
            (Some(source), Some(target)) => (source, target),
            _ => continue,
        };
        let entry = preimages.entry(target.label.as_str()).or_default();
        if entry.is_empty() {
            order.push(target.label.as_str());
        }
        entry.push(source.label.as_str());
    }
    (order, preimages)
}

/// The coarse shape of an arbitrary edge set
///
/// Classifies by fan-in and fan-out alone, with no well-definedness
/// requirement, so it applies to diagrams the function predicates reject.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MappingShape {
    /// No node has more than one incoming or outgoing edge
    #[serde(rename = "1-to-1")]
    OneToOne,
    /// Some node fans out, none fans in
    #[serde(rename = "1-to-Many")]
    OneToMany,
    /// Some node fans in, none fans out
    #[serde(rename = "Many-to-1")]
    ManyToOne,
    /// Fan-in and fan-out both occur
    #[serde(rename = "Many-to-Many")]
    ManyToMany,
}

impl fmt::Display for MappingShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MappingShape::OneToOne => "1-to-1",
            MappingShape::OneToMany => "1-to-Many",
            MappingShape::ManyToOne => "Many-to-1",
            MappingShape::ManyToMany => "Many-to-Many",
        };
        f.write_str(name)
    }
}

/// Classifies the diagram's edge set by fan-in and fan-out
pub fn mapping_shape(graph: &FunctionGraph) -> MappingShape {
    let mut incoming: FxHashMap<&str, usize> = FxHashMap::default();
    let mut outgoing: FxHashMap<&str, usize> = FxHashMap::default();
    for node in graph.nodes() {
        incoming.insert(node.id.as_str(), 0);
        outgoing.insert(node.id.as_str(), 0);
    }
    for edge in graph.edges() {
        if let Some(count) = outgoing.get_mut(edge.source.as_str()) {
            *count += 1;
        }
        if let Some(count) = incoming.get_mut(edge.target.as_str()) {
            *count += 1;
        }
    }

    let fans_in = incoming.values().any(|&count| count > 1);
    let fans_out = outgoing.values().any(|&count| count > 1);
    match (fans_in, fans_out) {
        (false, false) => MappingShape::OneToOne,
        (false, true) => MappingShape::OneToMany,
        (true, false) => MappingShape::ManyToOne,
        (true, true) => MappingShape::ManyToMany,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::{DiagramNode, Edge};

    fn graph(domain: &[(&str, &str)], codomain: &[(&str, &str)], edges: &[(&str, &str)]) -> FunctionGraph {
        let mut nodes = Vec::new();
        for &(id, label) in domain {
            nodes.push(DiagramNode::domain(id, label));
        }
        for &(id, label) in codomain {
            nodes.push(DiagramNode::codomain(id, label));
        }
        let edges = edges
            .iter()
            .map(|&(source, target)| Edge::new(source, target))
            .collect();
        FunctionGraph::new(nodes, edges)
    }

    #[test]
    fn well_defined_needs_exactly_one_output() {
        let ok = graph(
            &[("A-1", "a"), ("A-2", "b")],
            &[("B-1", "x")],
            &[("A-1", "B-1"), ("A-2", "B-1")],
        );
        assert!(well_defined(&ok).result);

        let silent = graph(&[("A-1", "a")], &[("B-1", "x")], &[]);
        let verdict = well_defined(&silent);
        assert!(!verdict.result);
        assert!(verdict
            .counterexample
            .unwrap()
            .contains("does not have an output: a"));

        let noisy = graph(
            &[("A-1", "a")],
            &[("B-1", "x"), ("B-2", "y")],
            &[("A-1", "B-1"), ("A-1", "B-2")],
        );
        let verdict = well_defined(&noisy);
        assert!(!verdict.result);
        let text = verdict.counterexample.unwrap();
        assert!(text.contains("more than one output"));
        assert!(text.contains("a -> x, y"));
    }

    #[test]
    fn both_violation_classes_reported_together() {
        let g = graph(
            &[("A-1", "a"), ("A-2", "b")],
            &[("B-1", "x"), ("B-2", "y")],
            &[("A-1", "B-1"), ("A-1", "B-2")],
        );
        let text = well_defined(&g).counterexample.unwrap();
        assert!(text.contains("does not have an output: b"));
        assert!(text.contains(" and "));
        assert!(text.contains("more than one output"));
    }

    #[test]
    fn injectivity_names_the_colliding_pair() {
        let g = graph(
            &[("A-1", "a"), ("A-2", "b")],
            &[("B-1", "x"), ("B-2", "y")],
            &[("A-1", "B-1"), ("A-2", "B-1")],
        );
        let verdict = injective(&g);
        assert!(!verdict.result);
        let text = verdict.counterexample.unwrap();
        assert!(text.contains("a maps to x"));
        assert!(text.contains("b also maps to x"));
    }

    #[test]
    fn surjectivity_lists_unreached_codomain() {
        let g = graph(
            &[("A-1", "a"), ("A-2", "b")],
            &[("B-1", "x"), ("B-2", "y")],
            &[("A-1", "B-1"), ("A-2", "B-1")],
        );
        let verdict = surjective(&g);
        assert!(!verdict.result);
        assert!(verdict.counterexample.unwrap().ends_with("mapping to: y"));
    }

    #[test]
    fn non_function_short_circuits_everything() {
        let g = graph(&[("A-1", "a")], &[("B-1", "x")], &[]);
        for verdict in [injective(&g), surjective(&g), bijective(&g)] {
            assert!(!verdict.result);
            assert_eq!(verdict.counterexample.as_deref(), Some(NOT_A_FUNCTION));
        }
    }

    #[test]
    fn dangling_edges_are_ignored() {
        // an edge leaving an unknown id affects no domain node's outdegree
        // and contributes no preimage
        let g = graph(
            &[("A-1", "a")],
            &[("B-1", "x")],
            &[("A-1", "B-1"), ("A-9", "B-1")],
        );
        assert!(well_defined(&g).result);
        let (order, preimages) = inverse_image(&g);
        assert_eq!(order, vec!["x"]);
        assert_eq!(preimages["x"], vec!["a"]);
    }

    #[test]
    fn mapping_shape_quadrants() {
        let one_to_one = graph(
            &[("A-1", "a"), ("A-2", "b")],
            &[("B-1", "x"), ("B-2", "y")],
            &[("A-1", "B-1"), ("A-2", "B-2")],
        );
        assert_eq!(mapping_shape(&one_to_one), MappingShape::OneToOne);

        let one_to_many = graph(
            &[("A-1", "a")],
            &[("B-1", "x"), ("B-2", "y")],
            &[("A-1", "B-1"), ("A-1", "B-2")],
        );
        assert_eq!(mapping_shape(&one_to_many), MappingShape::OneToMany);

        let many_to_one = graph(
            &[("A-1", "a"), ("A-2", "b")],
            &[("B-1", "x")],
            &[("A-1", "B-1"), ("A-2", "B-1")],
        );
        assert_eq!(mapping_shape(&many_to_one), MappingShape::ManyToOne);

        let many_to_many = graph(
            &[("A-1", "a"), ("A-2", "b")],
            &[("B-1", "x"), ("B-2", "y")],
            &[
                ("A-1", "B-1"),
                ("A-1", "B-2"),
                ("A-2", "B-1"),
            ],
        );
        assert_eq!(mapping_shape(&many_to_many), MappingShape::ManyToMany);
    }
}
