use pretty_assertions::assert_eq;
use shunt::{analyze_line, analyze_source, Error, Outcome};
use shunt_eval::EvalError;
use shunt_lexer::Operator;
use shunt_ast::ExpressionNode;
use shunt_parser::parser::{MAX_NESTING_DEPTH, MAX_TREE_DEPTH};
use shunt_parser::ParseError;
use tests::{chain, nest};

fn init_test_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .try_init();
}

fn values(line: &str) -> (Result<i64, Error>, Result<i64, Error>) {
    let report = analyze_line(line).unwrap();
    (report.postfix_value, report.tree_value)
}

#[test]
fn test_reference_lines() {
    init_test_logger();
    for (line, postfix, value) in [
        ("8 - 3 - 2", "8 3 - 2 -", 3),
        ("2 + 3 * 4", "2 3 4 * +", 14),
        ("( 2 + 3 ) * 4", "2 3 + 4 *", 20),
        ("2 ^ 3 ^ 2", "2 3 ^ 2 ^", 64),
        ("( 1 + 2 ) * ( 3 + 4 )", "1 2 + 3 4 + *", 21),
        ("( ( 1 + 2 ) * 3 - 4 ) % 5 ^ 2", "1 2 + 3 * 4 - 5 2 ^ %", 5),
        ("5", "5", 5),
    ] {
        let report = analyze_line(line).unwrap();
        assert_eq!(report.postfix.as_ref().unwrap().to_string(), postfix, "{line}");
        assert_eq!(report.postfix_value, Ok(value), "{line}");
        assert_eq!(report.tree_value, Ok(value), "{line}");
    }
}

#[test]
fn test_zero_divisors() {
    let division: Result<i64, Error> = Err(Error::Eval(EvalError::DivisionByZero));
    assert_eq!(values("5 / 0"), (division.clone(), division));
    let modulo: Result<i64, Error> = Err(Error::Eval(EvalError::ModuloByZero));
    assert_eq!(values("5 % 0"), (modulo.clone(), modulo));
}

#[test]
fn test_trailing_operator_diverges() {
    let (postfix, tree) = values("3 +");
    assert_eq!(
        postfix,
        Err(Error::Eval(EvalError::InsufficientOperands(Operator::Plus)))
    );
    assert_eq!(tree, Ok(3));
}

#[test]
fn test_unbalanced_parentheses() {
    for line in ["( 1 + 2", "1 + 2 )", ") 1 (", "( ( 1 )"] {
        let (postfix, tree) = values(line);
        let expected: Result<i64, Error> = Err(Error::Parse(ParseError::UnbalancedParenthesis));
        assert_eq!(postfix, expected, "{line}");
        assert_eq!(tree, expected, "{line}");
    }
}

#[test]
fn test_nesting_limit() {
    let allowed = nest(&chain("+", &[1, 2]), MAX_NESTING_DEPTH);
    assert_eq!(values(&allowed), (Ok(3), Ok(3)));

    let too_deep = nest("1", MAX_NESTING_DEPTH + 1);
    let (postfix, tree) = values(&too_deep);
    assert!(
        matches!(postfix, Err(Error::Parse(ParseError::NestingTooDeep(_)))),
        "{postfix:?}"
    );
    assert_eq!(postfix, tree);
}

#[test]
fn test_overflow_and_negative_exponent() {
    let (postfix, tree) = values("9223372036854775807 * 2");
    assert!(matches!(postfix, Err(Error::Eval(EvalError::Overflow { .. }))));
    assert_eq!(postfix, tree);

    let (postfix, tree) = values("2 ^ -1");
    assert_eq!(postfix, Err(Error::Eval(EvalError::InvalidExponent(-1))));
    assert_eq!(postfix, tree);
}

#[test]
fn test_long_chains_stay_left_associative() {
    let terms: Vec<i64> = (1..=200).collect();
    let sum: i64 = terms.iter().sum();
    assert_eq!(values(&chain("+", &terms)), (Ok(sum), Ok(sum)));
    let difference = 1000 - terms.iter().sum::<i64>();
    let mut with_head = vec![1000];
    with_head.extend(&terms);
    assert_eq!(
        values(&chain("-", &with_head)),
        (Ok(difference), Ok(difference))
    );
}

#[test]
fn test_source_file_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("expressions.txt");
    std::fs::write(&path, "( 1 + 2 ) * 3\n\n1 + banana\n7 % 4\n").unwrap();
    let source = std::fs::read_to_string(&path).unwrap();

    let reports = analyze_source(&source);
    assert_eq!(reports.len(), 3);
    assert_eq!(reports[0].tree_value, Outcome::Value(9));
    assert!(reports[1].has_errors());
    assert_eq!(reports[2].number, 3);
    assert_eq!(reports[2].postfix, Outcome::Value("7 4 %".to_string()));

    let json = serde_json::to_value(&reports).unwrap();
    assert_eq!(json[1]["tree_value"]["error"], "malformed number: 'banana'");
    assert_eq!(json[2]["postfix_value"]["value"], 3);
    assert!(json[1].get("tree").is_none());

    let tree: ExpressionNode = serde_json::from_value(json[0]["tree"].clone()).unwrap();
    assert_eq!(tree.to_string(), "((1 + 2) * 3)");
    assert_eq!(Some(tree), reports[0].tree);
}

#[test]
fn test_chain_longer_than_tree_limit() {
    let at_limit = vec![1; MAX_TREE_DEPTH];
    let n = MAX_TREE_DEPTH as i64;
    assert_eq!(values(&chain("+", &at_limit)), (Ok(n), Ok(n)));

    // Postfix evaluation has no depth limit, only the tree path refuses
    let beyond = vec![1; 5 * MAX_TREE_DEPTH];
    let (postfix, tree) = values(&chain("+", &beyond));
    assert_eq!(postfix, Ok(5 * n));
    assert_eq!(
        tree,
        Err(Error::Parse(ParseError::TreeTooDeep(MAX_TREE_DEPTH)))
    );
}
