//! Property-based tests for tree expansion
//!
//! Random trees are generated directly (not from text) so every shape is
//! reachable, then checked against:
//! - the length law of each node kind
//! - re-parsing of the canonical notation a tree prints as

use commkit::ast::Token;
use commkit::{flatten, parse, Comm, Expr, Span};
use proptest::prelude::*;

/// Generate valid move tokens
fn token_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["R", "U'", "F2", "M", "x", "Rw'", "d2", "S'", "B", "E2"])
        .prop_map(String::from)
}

/// Generate a leaf of one to three moves
fn leaf_strategy() -> impl Strategy<Value = Expr> {
    prop::collection::vec(token_strategy(), 1..4).prop_map(|texts| Expr::Sequence {
        tokens: texts
            .into_iter()
            .map(|text| Token {
                text,
                span: Span::default(),
            })
            .collect(),
    })
}

/// Generate arbitrary trees a few levels deep
fn tree_strategy() -> impl Strategy<Value = Expr> {
    leaf_strategy().prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|e| Expr::Doubled { inner: Box::new(e) }),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Expr::Conjugate {
                setup: Box::new(a),
                nested: Box::new(b),
            }),
            (inner.clone(), inner).prop_map(|(a, b)| Expr::Commutator {
                first: Box::new(a),
                second: Box::new(b),
            }),
        ]
    })
}

fn len(expr: &Expr) -> usize {
    flatten(expr).unwrap().len()
}

/// Checks the length law at every node of the tree.
fn assert_length_law(expr: &Expr) {
    match expr {
        Expr::Sequence { tokens } => assert_eq!(len(expr), tokens.len()),
        Expr::Doubled { inner } => {
            assert_eq!(len(expr), 2 * len(inner));
            assert_length_law(inner);
        }
        Expr::Conjugate { setup, nested } => {
            assert_eq!(len(expr), 2 * len(setup) + len(nested));
            assert_length_law(setup);
            assert_length_law(nested);
        }
        Expr::Commutator { first, second } => {
            assert_eq!(len(expr), 2 * (len(first) + len(second)));
            assert_length_law(first);
            assert_length_law(second);
        }
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_length_law_holds_everywhere(tree in tree_strategy()) {
            assert_length_law(&tree);
            prop_assert_eq!(len(&tree), tree.move_count());
        }

        #[test]
        fn test_canonical_notation_reparses(tree in tree_strategy()) {
            let notation = tree.to_string();
            let reparsed = parse(&notation);

            prop_assert!(reparsed.is_ok(), "Failed to parse: {}", notation);
            let reparsed = reparsed.unwrap();

            prop_assert_eq!(reparsed.to_string(), notation.clone());
            prop_assert_eq!(flatten(&reparsed).unwrap(), flatten(&tree).unwrap());
        }

        #[test]
        fn test_display_is_original_text(tree in tree_strategy(), pad in "[ ]{0,3}") {
            let source = format!("{}{}{}", pad, tree, pad);
            let comm = Comm::parse(source.clone()).unwrap();
            prop_assert_eq!(comm.to_string(), source);
        }
    }
}
