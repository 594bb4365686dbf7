//! Parser for the serialized relation text format
//!
//! The collaborator re-derives a relation string of the shape
//! `{(a,b), (c,d)}` from its edge list on every edit and hands it back for
//! analysis. Parsing is total: malformed text degrades toward the empty
//! relation instead of erroring, so every downstream evaluator stays defined
//! for all inputs.

use crate::instance::{Pair, Relation};

/// Parses relation text of the shape `{(a,b), (c,d)}` into a [`Relation`]
///
/// `{}` (and any input with nothing between the braces) yields the empty
/// relation. Whitespace around identifiers is insignificant; identifiers may
/// contain any characters other than the delimiters `{`, `}`, `(`, `)`, and
/// `,`. A fragment that does not contain both halves of a pair is skipped.
pub fn parse_relation(text: &str) -> Relation {
    let cleaned: String = text.chars().filter(|c| *c != '{' && *c != '}').collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return Relation::new();
    }

    let mut pairs = Vec::new();
    for chunk in cleaned.split("),") {
        let chunk: String = chunk.chars().filter(|c| *c != '(' && *c != ')').collect();
        let mut idents = chunk.split(',').map(str::trim);
        let source = match idents.next() {
            Some(s) => s,
            None => continue,
        };
        let target = match idents.next() {
            Some(t) => t,
            None => continue,
        };
        pairs.push(Pair::new(source, target));
    }
    Relation::from_pairs(pairs)
}
