//! # relcheck
//!
//! Property analysis for finite binary relations and function graphs.
//!
//! The engine classifies a relation drawn over a small, explicitly enumerated
//! universe of elements: reflexivity, symmetry, transitivity, and the order
//! and equivalence structures built from them. A sibling evaluator classifies
//! a bipartite function diagram as well-defined, injective, surjective, or
//! bijective. Every predicate returns a [`verdict::Verdict`]: a boolean
//! result plus, when the property fails, a counterexample naming the
//! offending elements or pairs.
//!
//! All evaluators are pure, synchronous functions of their inputs. Nothing is
//! cached between calls; a caller re-runs the analysis whenever its node or
//! edge set changes.
//!
//! ## Example
//!
//! ```rust
//! use relcheck::engine::relation;
//! use relcheck::instance::Universe;
//! use relcheck::parser::parse_relation;
//!
//! let universe = Universe::new(&["A", "B"]);
//! let rel = parse_relation("{(A,A), (B,B), (A,B)}");
//!
//! assert!(relation::reflexive(&universe, &rel).result);
//!
//! let symmetric = relation::symmetric(&rel);
//! assert!(!symmetric.result);
//! assert!(symmetric.counterexample.is_some());
//! ```

#![warn(missing_docs)]
#![warn(rust_2024_compatibility)]

/// Property evaluators for relations and function graphs
pub mod engine;

/// Universe, pair, relation, and function diagram types
pub mod instance;

/// Parser for the serialized relation text format
pub mod parser;

/// Verdicts, property keys, and analysis reports
pub mod verdict;
