//! Integration tests for grammars built from the public API.

use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
};

use braid::{BoxedParser, FailureKind, Parser, SequenceResult, choice, lazy, literal, pattern};

fn balanced() -> BoxedParser<usize> {
    literal("(")
        .then(lazy(balanced).optional())
        .then(")")
        .map(|seq| seq.first().next().map_or(1, |depth| depth + 1))
        .boxed()
}

#[test]
fn test_balanced_parentheses() {
    let parser = balanced().end();

    let result = parser.parse("((()))");
    assert!(result.is_success());
    assert_eq!(result.text(), "((()))");
    assert_eq!(result.into_value(), Some(3));
}

#[test]
fn test_unbalanced_parentheses() {
    let result = balanced().end().parse("(()");

    assert_eq!(result.failure_kind(), Some(FailureKind::Parsing));
    assert_eq!(result.index(), 3);
    assert_eq!(result.message(), "Expected \")\" at index 3");
}

#[test]
fn test_trailing_input_is_termination() {
    let result = balanced().end().parse("()()");

    assert_eq!(result.failure_kind(), Some(FailureKind::Termination));
    assert_eq!(result.index(), 2);
}

#[test]
fn test_sequence_values_flatten() {
    let parser = literal("let")
        .then(pattern(r"\s+").unwrap())
        .then(pattern(r"[a-z]+").unwrap())
        .then(" = ")
        .then(pattern(r"\d+").unwrap().try_map(|n| n.parse::<i32>()));

    let result = parser.parse("let  x = 42");
    assert_eq!(result.text(), "let  x = 42");

    let (keyword, _, name, _, value) = result.into_value().unwrap().into_tuple5();
    assert_eq!(keyword, "let");
    assert_eq!(name, "x");
    assert_eq!(value, 42);
}

#[test]
fn test_sequence_result_rendering() {
    let parser = literal("a").then("b").then("c");

    let value = parser.parse("abc").into_value().unwrap();
    assert_eq!(
        value,
        SequenceResult::new(
            SequenceResult::new("a".to_string(), "b".to_string()),
            "c".to_string()
        )
    );
    assert_eq!(value.to_string(), r#"Seq("a" ~ "b" ~ "c")"#);
}

#[test]
fn test_grammar_rendering() {
    let number = pattern(r"\d+").unwrap();
    let list = literal("(")
        .then(number.repeat1().separated_by(","))
        .then(")")
        .map(|seq| seq.into_tuple3().1.len());
    let parser = list.or(literal("nil").map(|_| 0));

    assert_eq!(
        parser.to_string(),
        r#""(" ~ Repeat[1- ](/\d+//",") ~ ")" | "nil""#
    );
    assert_eq!(parser.parse("(1,2)").into_value(), Some(2));
    assert_eq!(parser.parse("nil").into_value(), Some(0));
}

#[test]
fn test_choice_failure_lists_alternatives() {
    let keyword = choice(vec![
        literal("if").boxed(),
        literal("else").boxed(),
        literal("while").boxed(),
    ]);

    let result = keyword.parse_at("x = 1; for", 7);
    assert_eq!(result.failure_kind(), Some(FailureKind::Parsing));
    assert_eq!(
        result.message(),
        r#"Expected at least one of the following at index 7: "if", "else", "while""#
    );
}

#[test]
fn test_choice_prefers_termination_failure() {
    let parser = literal("ab").end().or(literal("xyz"));

    let result = parser.parse("abc");
    assert_eq!(result.failure_kind(), Some(FailureKind::Termination));
    assert_eq!(result.index(), 2);
}

#[test]
fn test_keyword_guard_with_not() {
    let identifier = pattern("[a-z]+").unwrap();
    let keyword = literal("if").or("else");
    let name = keyword
        .then(pattern("[a-z]").unwrap().not())
        .not()
        .then(identifier)
        .map(|seq| seq.into_parts().1);

    assert_eq!(name.parse("iffy").into_value().as_deref(), Some("iffy"));
    assert_eq!(name.parse("foo").into_value().as_deref(), Some("foo"));

    let result = name.parse("if");
    assert_eq!(result.failure_kind(), Some(FailureKind::Inversion));
    assert_eq!(result.index(), 0);
}

#[test]
fn test_concurrent_parsing_shares_lazy_grammar() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let digits = lazy(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        pattern(r"\d+").unwrap().try_map(|n| n.parse::<u64>())
    });
    let grammar = digits
        .repeat1()
        .separated_by("+")
        .map(|terms| terms.iter().sum::<u64>())
        .end()
        .shared();

    thread::scope(|scope| {
        for offset in 0..8u64 {
            let grammar = Arc::clone(&grammar);
            scope.spawn(move || {
                let input = format!("{offset}+1+2");
                let result = grammar.parse(&input);
                assert_eq!(result.into_value(), Some(offset + 3));
            });
        }
    });

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
