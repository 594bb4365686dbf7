//! Property evaluators
//!
//! Two sibling evaluators share this module: [`relation`] decides the eight
//! relation predicates plus totality over a universe, and [`function`]
//! decides well-definedness, injectivity, surjectivity, and bijectivity over
//! a bipartite diagram. Both are pure; each call recomputes its verdicts
//! from scratch.

pub mod function;
pub mod relation;

pub use function::MappingShape;
