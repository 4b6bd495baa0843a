use proptest::prelude::*;
use shunt_eval::{evaluate_expression, evaluate_postfix};
use shunt_lexer::tokenize;
use shunt_parser::{infix_to_postfix, infix_to_tree};

fn operator() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["+", "-", "*", "/", "%", "^"])
}

// Well-formed infix: every operator has two operands and parentheses match
fn expression() -> impl Strategy<Value = String> {
    let leaf = (-50i64..50).prop_map(|n| n.to_string());
    leaf.prop_recursive(6, 48, 2, |inner| {
        prop_oneof![
            (inner.clone(), operator(), inner.clone())
                .prop_map(|(left, op, right)| format!("{left} {op} {right}")),
            inner.prop_map(|e| format!("( {e} )")),
        ]
    })
}

proptest! {
    #[test]
    fn tree_and_postfix_agree(source in expression()) {
        let tokens = tokenize(&source).unwrap();
        let tree = infix_to_tree(&tokens).unwrap();
        let postfix = infix_to_postfix(&tokens).unwrap();

        prop_assert_eq!(tree.to_postfix(), postfix.clone());
        prop_assert_eq!(evaluate_expression(&tree), evaluate_postfix(&postfix));
    }

    #[test]
    fn postfix_keeps_every_operand_and_operator(source in expression()) {
        let tokens = tokenize(&source).unwrap();
        let postfix = infix_to_postfix(&tokens).unwrap();
        let non_paren = tokens.iter().filter(|t| t.is_operand() || t.as_operator().is_some()).count();
        prop_assert_eq!(postfix.len(), non_paren);
    }
}
