use commkit::parser::helpers::find_first_unbracketed;
use commkit::{parse, parse_with, Comm, CommError, Expr, ParseOptions, Span};
use rstest::rstest;

#[rstest]
#[case("[R, L")]
#[case("R]")]
#[case("][")]
#[case("[[R, U], L")]
#[case("[R, U]]: L")]
fn mismatched_brackets_are_rejected(#[case] input: &str) {
    let err = parse(input).unwrap_err();
    assert!(
        matches!(err, CommError::UnbalancedBrackets { .. }),
        "{}: {:?}",
        input,
        err
    );
}

#[test]
fn unbalanced_error_points_at_stray_close() {
    let err = parse("R U]").unwrap_err();
    assert_eq!(err.span(), Span::new(3, 4));
    assert_eq!(err.code(), "C0001");
}

#[rstest]
#[case("[R,L][U,D]")]
#[case("[R, L] [U, D]")]
#[case("[R, L] U")]
#[case("(U M)2 R")]
fn independent_groups_are_unsupported(#[case] input: &str) {
    let err = parse(input).unwrap_err();
    assert!(
        matches!(err, CommError::UnsupportedMultiSegment { .. }),
        "{}: {:?}",
        input,
        err
    );
}

#[rstest]
#[case("[R U]", "R U")]
#[case("[]", "")]
#[case("[[R, U]]", "[R, U]")]
fn groups_without_separator_are_malformed(#[case] input: &str, #[case] fragment: &str) {
    match parse(input).unwrap_err() {
        CommError::MalformedGroup { fragment: f, .. } => assert_eq!(f, fragment),
        other => panic!("{}: unexpected {:?}", input, other),
    }
}

#[test]
fn malformed_group_span_is_inside_brackets() {
    let err = parse("U: [R U]").unwrap_err();
    assert_eq!(err.span(), Span::new(4, 7));
}

#[test]
fn plain_sequence_is_a_leaf() {
    let tree = parse("  R U R' U'  ").unwrap();
    match &tree {
        Expr::Sequence { tokens } => {
            let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
            assert_eq!(texts, vec!["R", "U", "R'", "U'"]);
            assert_eq!(tokens[0].span, Span::new(2, 3));
        }
        other => panic!("expected sequence, got {:?}", other),
    }
}

#[test]
fn empty_input_is_an_empty_sequence() {
    assert_eq!(parse("").unwrap(), Expr::Sequence { tokens: vec![] });
    assert_eq!(parse("   ").unwrap().move_count(), 0);
}

#[test]
fn unbracketed_colon_wins_over_bracket_group() {
    // `[A,B]:C` must be a conjugate of a commutator, not a malformed group
    let tree = parse("[R, U]: D").unwrap();
    match tree {
        Expr::Conjugate { setup, nested } => {
            assert!(matches!(*setup, Expr::Commutator { .. }));
            assert_eq!(nested.to_string(), "D");
        }
        other => panic!("expected conjugate, got {:?}", other),
    }
}

#[test]
fn colon_then_bracketed_commutator() {
    // tokens are not lexed at parse time, so placeholders are fine here
    let tree = parse("A:[B,C]").unwrap();
    assert_eq!(tree.to_string(), "[A: [B, C]]");
}

#[test]
fn comma_is_preferred_over_colon_inside_a_group() {
    let tree = parse("[R: U, D]").unwrap();
    assert_eq!(tree.to_string(), "[[R: U], D]");
}

#[test]
fn doubled_wraps_inner_expression() {
    let tree = parse("(U M U M')2").unwrap();
    match tree {
        Expr::Doubled { inner } => assert_eq!(inner.to_string(), "U M U M'"),
        other => panic!("expected doubled, got {:?}", other),
    }
}

#[test]
fn scanner_finds_outer_colon() {
    let s = "[A:B]:C";
    assert_eq!(find_first_unbracketed(s, ':'), Some(5));

    let s = "[[A:B]:C]:D";
    assert_eq!(find_first_unbracketed(s, ':'), Some(9));
}

fn nested_commutators(levels: usize) -> String {
    let mut s = "L".to_string();
    for _ in 0..levels {
        s = format!("[R, {}]", s);
    }
    s
}

#[test]
fn nesting_within_limit_parses() {
    let options = ParseOptions::new().with_max_depth(4);
    let tree = parse_with(&nested_commutators(4), &options).unwrap();
    assert_eq!(tree.depth(), 5);
}

#[test]
fn nesting_beyond_limit_is_reported() {
    let options = ParseOptions::new().with_max_depth(4);
    match parse_with(&nested_commutators(5), &options).unwrap_err() {
        CommError::ExcessiveNesting { depth, limit, fragment, .. } => {
            assert_eq!(depth, 5);
            assert_eq!(limit, 4);
            // the left operand of the innermost commutator is reached first
            assert_eq!(fragment, "R");
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn adversarial_depth_does_not_overflow() {
    let err = parse(&nested_commutators(2_000)).unwrap_err();
    assert!(matches!(err, CommError::ExcessiveNesting { .. }));
}

/// Parses on a fresh thread with the default 2 MiB stack, so the result
/// does not depend on the test harness's main-thread stack size.
fn parse_on_default_stack(levels: usize, options: ParseOptions) -> Result<usize, CommError> {
    std::thread::spawn(move || parse_with(&nested_commutators(levels), &options).map(|t| t.depth()))
        .join()
        .expect("parser thread panicked")
}

#[rstest]
#[case(ParseOptions::STRICT)]
#[case(ParseOptions::PERMISSIVE)]
#[case(ParseOptions::default())]
fn preset_limit_is_reachable_on_default_stack(#[case] options: ParseOptions) {
    let limit = options.depth_limit();
    assert_eq!(parse_on_default_stack(limit, options).unwrap(), limit + 1);

    match parse_on_default_stack(limit + 1, options).unwrap_err() {
        CommError::ExcessiveNesting { depth, limit: reported, .. } => {
            assert_eq!(depth, limit + 1);
            assert_eq!(reported, limit);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn oversized_limit_is_clamped() {
    let options = ParseOptions::new().with_max_depth(10_000);
    assert_eq!(options.max_depth, ParseOptions::MAX_SUPPORTED_DEPTH);

    match parse_on_default_stack(1_000, options).unwrap_err() {
        CommError::ExcessiveNesting { limit, .. } => {
            assert_eq!(limit, ParseOptions::MAX_SUPPORTED_DEPTH)
        }
        other => panic!("unexpected {:?}", other),
    }

    // a limit written straight into the field is clamped as well
    let options = ParseOptions { max_depth: 10_000 };
    let err = parse_on_default_stack(1_000, options).unwrap_err();
    assert!(matches!(err, CommError::ExcessiveNesting { limit: 256, .. }));
}

#[test]
fn deeply_doubled_move_count_saturates() {
    let mut s = "R".to_string();
    for _ in 0..70 {
        s = format!("({})2", s);
    }

    let comm = Comm::parse(&s).unwrap();
    assert_eq!(comm.root().depth(), 71);
    assert_eq!(comm.root().move_count(), usize::MAX);

    let conjugated = parse(&format!("[{}: U]", s)).unwrap();
    assert_eq!(conjugated.move_count(), usize::MAX);
}

#[rstest]
#[case("[R, L]")]
#[case("  U' : [S , R' B R]  ")]
#[case("M2' : (U M U M')2")]
#[case("[R'   :[U' R' U,M]]")]
fn display_returns_original_text(#[case] input: &str) {
    let comm = Comm::parse(input).unwrap();
    assert_eq!(comm.to_string(), input);
    assert_eq!(comm.source(), input);
}

#[test]
fn comm_serialises_tree() {
    let comm = Comm::parse("[R, U]").unwrap();
    let json = serde_json::to_value(&comm).unwrap();
    assert_eq!(json["source"], "[R, U]");
    assert_eq!(json["root"]["kind"], "commutator");
    assert_eq!(json["root"]["first"]["tokens"][0]["text"], "R");
}
