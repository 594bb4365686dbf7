//! Instance types: Universe, Pair, Relation, and FunctionGraph
//!
//! These types define the domain of discourse for the evaluators: an ordered
//! sequence of element labels, the relation drawn over them, and the
//! bipartite diagram analyzed by the function evaluator.

use std::fmt;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// An ordered sequence of element labels
///
/// A universe provides the domain for the relation predicates that quantify
/// over elements (reflexivity, totality, and the structures built from them).
/// Labels are opaque; uniqueness is assumed by callers but never enforced
/// here, and duplicate labels are tolerated by every evaluator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Universe {
    elements: Vec<String>,
}

impl Universe {
    /// Creates a universe from a slice of element labels, in order
    pub fn new(elements: &[&str]) -> Self {
        Self {
            elements: elements.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Creates a universe from an owned label sequence
    pub fn from_labels(elements: Vec<String>) -> Self {
        Self { elements }
    }

    /// Returns the number of elements in this universe
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if this universe has no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the label at the given position
    pub fn label(&self, index: usize) -> Option<&str> {
        self.elements.get(index).map(|s| s.as_str())
    }

    /// Returns true if this universe contains the given label
    pub fn contains(&self, label: &str) -> bool {
        self.elements.iter().any(|e| e == label)
    }

    /// Returns an iterator over the labels, in universe order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().map(|s| s.as_str())
    }
}

/// An ordered pair of element labels
///
/// One edge of a relation: `source` relates to `target`. Formats as
/// `(source,target)` with no interior whitespace, the same shape the parser
/// consumes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    /// Label of the element the edge leaves
    pub source: String,
    /// Label of the element the edge enters
    pub target: String,
}

impl Pair {
    /// Creates a pair from source and target labels
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Returns true if this pair is a self-loop
    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.source, self.target)
    }
}

/// An ordered sequence of pairs over a universe
///
/// Duplicate pairs are permitted and never change a verdict: every predicate
/// works on the induced set of distinct pairs. Formats as
/// `{(a,b), (c,d)}`, or `{}` when empty, which is exactly the text the
/// parser accepts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Relation {
    pairs: Vec<Pair>,
}

impl Relation {
    /// Creates an empty relation
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a relation from a pair sequence, preserving order
    pub fn from_pairs(pairs: Vec<Pair>) -> Self {
        Self { pairs }
    }

    /// Appends a pair to this relation
    pub fn push(&mut self, pair: Pair) {
        self.pairs.push(pair);
    }

    /// Returns the number of pairs, duplicates included
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if this relation has no pairs
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns an iterator over the pairs, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Pair> {
        self.pairs.iter()
    }

    /// Returns true if the pair (source, target) is present
    pub fn contains(&self, source: &str, target: &str) -> bool {
        self.pairs
            .iter()
            .any(|p| p.source == source && p.target == target)
    }

    /// Returns the distinct pairs, in first-occurrence order
    ///
    /// This is the view every predicate iterates, which keeps duplicate
    /// pairs from being reported as separate violations.
    pub fn distinct_pairs(&self) -> Vec<&Pair> {
        let mut seen: FxHashSet<(&str, &str)> = FxHashSet::default();
        let mut distinct = Vec::with_capacity(self.pairs.len());
        for pair in &self.pairs {
            if seen.insert((pair.source.as_str(), pair.target.as_str())) {
                distinct.push(pair);
            }
        }
        distinct
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, pair) in self.pairs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", pair)?;
        }
        write!(f, "}}")
    }
}

impl FromIterator<Pair> for Relation {
    fn from_iter<I: IntoIterator<Item = Pair>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

/// Which side of the bipartite diagram a node belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Partition {
    /// Input side: every node here is expected to map somewhere
    Domain,
    /// Output side: the candidate images
    Codomain,
}

/// A node in a function diagram
///
/// Nodes carry an internal id (used by edges) and a display label (used in
/// comparisons and counterexamples). Two nodes with the same label are
/// indistinguishable to the evaluator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramNode {
    /// Internal identifier, referenced by edges
    pub id: String,
    /// Display label, used for comparisons and counterexamples
    pub label: String,
    /// Side of the diagram this node belongs to
    pub partition: Partition,
}

impl DiagramNode {
    /// Creates a node
    pub fn new(id: impl Into<String>, label: impl Into<String>, partition: Partition) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            partition,
        }
    }

    /// Creates a domain-side node
    pub fn domain(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, label, Partition::Domain)
    }

    /// Creates a codomain-side node
    pub fn codomain(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, label, Partition::Codomain)
    }
}

/// An edge connecting two diagram nodes by id
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Id of the node the edge leaves
    pub source: String,
    /// Id of the node the edge enters
    pub target: String,
}

impl Edge {
    /// Creates an edge from source and target node ids
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// A bipartite diagram: tagged nodes plus the edges drawn between them
///
/// The function evaluator proves or disproves well-definedness over this
/// graph; it never assumes the edges already form a function. Edges whose
/// endpoints match no node are ignored rather than rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionGraph {
    nodes: Vec<DiagramNode>,
    edges: Vec<Edge>,
}

impl FunctionGraph {
    /// Creates a graph from a node list and an edge list
    pub fn new(nodes: Vec<DiagramNode>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Returns all nodes, in insertion order
    pub fn nodes(&self) -> &[DiagramNode] {
        &self.nodes
    }

    /// Returns all edges, in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the domain-side nodes, in insertion order
    pub fn domain_nodes(&self) -> impl Iterator<Item = &DiagramNode> {
        self.nodes
            .iter()
            .filter(|n| n.partition == Partition::Domain)
    }

    /// Returns the codomain-side nodes, in insertion order
    pub fn codomain_nodes(&self) -> impl Iterator<Item = &DiagramNode> {
        self.nodes
            .iter()
            .filter(|n| n.partition == Partition::Codomain)
    }

    /// Looks up a node by id
    pub fn node(&self, id: &str) -> Option<&DiagramNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Returns the label of the node with the given id, if any
    pub fn label_of(&self, id: &str) -> Option<&str> {
        self.node(id).map(|n| n.label.as_str())
    }
}
