//! Tests for the function property evaluator

use relcheck::engine::function;
use relcheck::engine::MappingShape;
use relcheck::instance::{DiagramNode, Edge, FunctionGraph};

/// A diagram with domain {a, b} and codomain {x, y}
fn two_by_two(edges: &[(&str, &str)]) -> FunctionGraph {
    let nodes = vec![
        DiagramNode::domain("A-1", "a"),
        DiagramNode::domain("A-2", "b"),
        DiagramNode::codomain("B-1", "x"),
        DiagramNode::codomain("B-2", "y"),
    ];
    let edges = edges
        .iter()
        .map(|&(source, target)| Edge::new(source, target))
        .collect();
    FunctionGraph::new(nodes, edges)
}

#[test]
fn collapsing_map_is_a_function_but_nothing_more() {
    // a -> x, b -> x
    let graph = two_by_two(&[("A-1", "B-1"), ("A-2", "B-1")]);
    let report = function::analyze(&graph);

    assert!(report.is_function.result);
    assert!(!report.is_injective.result);
    assert!(!report.is_surjective.result);
    assert!(!report.is_bijective.result);

    let injective = report.is_injective.counterexample.as_deref().unwrap();
    assert!(injective.contains("a maps to x"));
    assert!(injective.contains("b also maps to x"));

    let surjective = report.is_surjective.counterexample.as_deref().unwrap();
    assert!(surjective.ends_with("mapping to: y"));

    let bijective = report.is_bijective.counterexample.as_deref().unwrap();
    assert!(bijective.contains("not injective"));
    assert!(bijective.contains("not surjective"));
}

#[test]
fn pairing_map_is_a_bijection() {
    // a -> x, b -> y
    let graph = two_by_two(&[("A-1", "B-1"), ("A-2", "B-2")]);
    let report = function::analyze(&graph);

    for (property, verdict) in report.iter() {
        assert!(verdict.result, "{property} should hold");
        assert!(verdict.counterexample.is_none());
    }
}

#[test]
fn input_without_output_is_not_even_a_function() {
    // a has no outgoing edge
    let graph = two_by_two(&[("A-2", "B-2")]);
    let report = function::analyze(&graph);

    assert!(!report.is_function.result);
    let text = report.is_function.counterexample.as_deref().unwrap();
    assert!(text.contains("does not have an output: a"));

    for verdict in [
        &report.is_injective,
        &report.is_surjective,
        &report.is_bijective,
    ] {
        assert!(!verdict.result);
        assert_eq!(
            verdict.counterexample.as_deref(),
            Some("it is not even a function")
        );
    }
}

#[test]
fn multiple_outputs_list_every_target() {
    let graph = two_by_two(&[("A-1", "B-1"), ("A-1", "B-2"), ("A-2", "B-1")]);
    let verdict = function::well_defined(&graph);
    assert!(!verdict.result);
    let text = verdict.counterexample.unwrap();
    assert!(text.contains("more than one output"));
    assert!(text.contains("a -> x, y"));
}

#[test]
fn bijectivity_agrees_with_its_parts_on_every_edge_set() {
    let candidates = [
        ("A-1", "B-1"),
        ("A-1", "B-2"),
        ("A-2", "B-1"),
        ("A-2", "B-2"),
    ];
    for mask in 0..16u32 {
        let edges: Vec<(&str, &str)> = candidates
            .iter()
            .enumerate()
            .filter(|&(i, _)| mask & (1 << i) != 0)
            .map(|(_, &edge)| edge)
            .collect();
        let graph = two_by_two(&edges);
        let report = function::analyze(&graph);

        if report.is_function.result {
            assert_eq!(
                report.is_bijective.result,
                report.is_injective.result && report.is_surjective.result,
                "mask {mask}"
            );
        } else {
            // a non-function short-circuits the other three properties
            assert!(!report.is_injective.result, "mask {mask}");
            assert!(!report.is_surjective.result, "mask {mask}");
            assert!(!report.is_bijective.result, "mask {mask}");
        }
    }
}

#[test]
fn verdicts_carry_counterexamples_exactly_when_false() {
    for edges in [
        &[("A-1", "B-1"), ("A-2", "B-2")] as &[(&str, &str)],
        &[("A-1", "B-1"), ("A-2", "B-1")],
        &[("A-2", "B-2")],
        &[],
    ] {
        let report = function::analyze(&two_by_two(edges));
        for (property, verdict) in report.iter() {
            assert_eq!(verdict.result, verdict.counterexample.is_none(), "{property}");
        }
    }
}

#[test]
fn labels_not_ids_drive_the_verdicts() {
    // two domain nodes sharing a label collide into one preimage name
    let nodes = vec![
        DiagramNode::domain("A-1", "a"),
        DiagramNode::domain("A-2", "a"),
        DiagramNode::codomain("B-1", "x"),
    ];
    let edges = vec![Edge::new("A-1", "B-1"), Edge::new("A-2", "B-1")];
    let graph = FunctionGraph::new(nodes, edges);

    let verdict = function::injective(&graph);
    assert!(!verdict.result);
    assert!(verdict
        .counterexample
        .unwrap()
        .contains("a maps to x and a also maps to x"));
}

#[test]
fn mapping_shape_classifies_by_fan_in_and_fan_out() {
    let shapes = [
        (&[("A-1", "B-1"), ("A-2", "B-2")] as &[(&str, &str)], MappingShape::OneToOne),
        (&[("A-1", "B-1"), ("A-1", "B-2")], MappingShape::OneToMany),
        (&[("A-1", "B-1"), ("A-2", "B-1")], MappingShape::ManyToOne),
        (
            &[("A-1", "B-1"), ("A-1", "B-2"), ("A-2", "B-1")],
            MappingShape::ManyToMany,
        ),
    ];
    for (edges, expected) in shapes {
        assert_eq!(function::mapping_shape(&two_by_two(edges)), expected);
    }
}
