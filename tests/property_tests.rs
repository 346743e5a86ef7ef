//! Property-based tests for the lexer and parser.
//!
//! 1. **Lexer never panics** - arbitrary input yields tokens or an error
//! 2. **Token spans are ordered** - spans stay inside the input and never overlap
//! 3. **Parser never panics** - any token stream yields a tree or an error
//! 4. **Generated programs parse** - one statement node per generated statement

use exprparse::{ast::ast::NodeKind, lexer::lexer::tokenize, parser::parser::parse};
use proptest::prelude::*;

fn variable() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

fn expression() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![(0u32..10_000).prop_map(|n| n.to_string()), variable()];

    leaf.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (inner.clone(), prop::sample::select(vec!['+', '-', '*', '/']), inner.clone())
                .prop_map(|(left, op, right)| format!("{} {} {}", left, op, right)),
            inner.prop_map(|expr| format!("({})", expr)),
        ]
    })
}

fn program() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        (variable(), expression()).prop_map(|(name, expr)| format!("{} = {};", name, expr)),
        0..8,
    )
}

proptest! {
    #[test]
    fn lexer_never_panics(source in "\\PC{0,64}") {
        let _ = tokenize(source, None);
    }

    #[test]
    fn token_spans_are_ordered(source in "[a-z0-9 +*/()=;'.\\-]{0,64}") {
        if let Ok(tokens) = tokenize(source.clone(), None) {
            let mut last_end = 0;
            for token in &tokens {
                prop_assert!(token.span.start.0 >= last_end);
                prop_assert!(token.span.end.0 > token.span.start.0);
                prop_assert!(token.span.end.0 as usize <= source.len());
                last_end = token.span.end.0;
            }
        }
    }

    #[test]
    fn parser_never_panics(source in "[a-z0-9 +*/()=;\\-]{0,64}") {
        if let Ok(tokens) = tokenize(source, None) {
            let _ = parse(tokens);
        }
    }

    #[test]
    fn generated_programs_parse(statements in program()) {
        let source = statements.join("\n");
        let tokens = tokenize(source, None).unwrap();
        let program = parse(tokens).unwrap();
        let root = program.as_node();

        prop_assert_eq!(root.kind(), NodeKind::Program);
        prop_assert_eq!(root.children().len(), statements.len());
    }
}
