//! Integration tests for the JSON API common syntax operator: the arity
//! contract and canonical unparse of both variants.

use sql_json_syntax::{
    standard_operator_map, JsonApiCommonSyntaxOperator, OperandTypeRule, ReturnTypeRule, SqlCall,
    SqlKind, SqlNode, SqlOpError, SqlSpecialOperator, SqlTypeFamily, SqlTypeName, SqlWriter,
};

fn with_path() -> JsonApiCommonSyntaxOperator {
    JsonApiCommonSyntaxOperator::new("JSON_API_COMMON_SYNTAX", true)
}

fn without_path() -> JsonApiCommonSyntaxOperator {
    JsonApiCommonSyntaxOperator::new("JSON_API_COMMON_SYNTAX_WITHOUT_PATH", false)
}

fn ident(name: &str) -> SqlNode {
    SqlNode::identifier(name)
}

fn string(s: &str) -> SqlNode {
    SqlNode::string(s)
}

fn check(op: &dyn SqlSpecialOperator, operands: Vec<SqlNode>, expected: &str) {
    let call = SqlCall::new(operands);
    op.check_operand_count(&call)
        .unwrap_or_else(|e| panic!("arity check failed for {:?}: {}", call, e));
    let mut writer = SqlWriter::new();
    op.unparse(&mut writer, &call, 0, 0)
        .unwrap_or_else(|e| panic!("unparse failed for {:?}: {}", call, e));
    assert_eq!(writer.as_str(), expected, "call: {:?}", call);
}

fn check_unparse_err(op: &dyn SqlSpecialOperator, operands: Vec<SqlNode>) -> (SqlOpError, SqlWriter) {
    let call = SqlCall::new(operands);
    let mut writer = SqlWriter::new();
    let err = op
        .unparse(&mut writer, &call, 0, 0)
        .err()
        .unwrap_or_else(|| panic!("expected unparse error for {:?}", call));
    (err, writer)
}

// ------------------------------------------------------------------ Unparse

#[test]
fn unparse_json_value_and_path() {
    check(&with_path(), vec![ident("X"), string("$.a")], "X, '$.a'");
}

#[test]
fn unparse_single_passing_binding() {
    check(
        &with_path(),
        vec![ident("X"), string("$.a"), ident("V"), ident("N")],
        "X, '$.a' PASSING V AS N",
    );
}

#[test]
fn unparse_multiple_passing_bindings() {
    check(
        &with_path(),
        vec![
            ident("X"),
            string("$.a"),
            ident("V1"),
            ident("N1"),
            ident("V2"),
            ident("N2"),
        ],
        "X, '$.a' PASSING V1 AS N1 V2 AS N2",
    );
}

#[test]
fn unparse_json_value_only() {
    check(&without_path(), vec![ident("X")], "X");
}

// The tail walk starts at index 2 for the path-less variant too, so the
// operand at index 1 never appears in the emitted PASSING clause.
#[test]
fn pathless_tail_starts_at_index_two() {
    check(
        &without_path(),
        vec![ident("X"), ident("A"), ident("B"), ident("C")],
        "X PASSING B AS C",
    );
}

#[test]
fn pathless_three_operand_tail_is_malformed() {
    let (err, writer) = check_unparse_err(&without_path(), vec![ident("X"), ident("V"), ident("N")]);
    assert!(matches!(err, SqlOpError::MalformedCall(_)), "got: {}", err);
    // Frame is still released on the error path.
    assert_eq!(writer.frame_depth(), 0);
}

#[test]
fn odd_tail_with_path_is_malformed() {
    let (err, writer) = check_unparse_err(
        &with_path(),
        vec![ident("X"), string("$.a"), ident("V")],
    );
    assert!(matches!(err, SqlOpError::MalformedCall(_)), "got: {}", err);
    assert_eq!(writer.frame_depth(), 0);
}

#[test]
fn passing_keyword_iff_tail_present() {
    let op = with_path();
    let call = SqlCall::new(vec![ident("X"), string("$.a")]);
    let mut writer = SqlWriter::new();
    op.unparse(&mut writer, &call, 0, 0).unwrap();
    assert!(!writer.as_str().contains("PASSING"));

    let call = SqlCall::new(vec![ident("X"), string("$.a"), ident("V"), ident("N")]);
    let mut writer = SqlWriter::new();
    op.unparse(&mut writer, &call, 0, 0).unwrap();
    assert!(writer.as_str().contains("PASSING"));
}

#[test]
fn unparse_is_deterministic() {
    let op = with_path();
    let call = SqlCall::new(vec![ident("X"), string("$.a"), ident("V"), ident("N")]);
    let mut first = SqlWriter::new();
    op.unparse(&mut first, &call, 0, 0).unwrap();
    let mut second = SqlWriter::new();
    op.unparse(&mut second, &call, 0, 0).unwrap();
    assert_eq!(first.as_str(), second.as_str());
}

#[test]
fn unparse_literal_operands() {
    check(
        &with_path(),
        vec![
            SqlNode::literal(serde_json::json!({"foo": "bar"})),
            string("lax $.foo"),
        ],
        "'{\"foo\":\"bar\"}', 'lax $.foo'",
    );
}

// -------------------------------------------------------------------- Arity

#[test]
fn arity_error_with_path() {
    let op = with_path();
    let err = op
        .check_operand_count(&SqlCall::new(vec![ident("X")]))
        .unwrap_err();
    assert_eq!(
        err,
        SqlOpError::ArityError("JSON API common syntax requires at least 2 parameters".to_string())
    );
}

#[test]
fn arity_error_without_path() {
    let op = without_path();
    let err = op.check_operand_count(&SqlCall::new(vec![])).unwrap_err();
    assert_eq!(
        err,
        SqlOpError::ArityError("JSON API common syntax requires at least 1 parameter".to_string())
    );
}

#[test]
fn arity_boundaries() {
    let op = with_path();
    assert!(op
        .check_operand_count(&SqlCall::new(vec![ident("X"), string("$.a")]))
        .is_ok());
    // Surplus PASSING operands are accepted by the arity gate.
    assert!(op
        .check_operand_count(&SqlCall::new(vec![
            ident("X"),
            string("$.a"),
            ident("V"),
            ident("N"),
        ]))
        .is_ok());

    let op = without_path();
    assert!(op.check_operand_count(&SqlCall::new(vec![ident("X")])).is_ok());
}

// --------------------------------------------------------------- Attributes

#[test]
fn operator_attributes_are_fixed() {
    for op in [with_path(), without_path()] {
        assert_eq!(op.kind(), SqlKind::JsonApiCommonSyntax);
        assert_eq!(op.precedence(), 100);
        assert!(op.is_left_assoc());
        assert_eq!(
            op.return_type_rule(),
            &ReturnTypeRule::Explicit(SqlTypeName::Any)
        );
    }
}

#[test]
fn operand_type_rule_matches_variant() {
    assert!(with_path().has_path());
    assert!(!without_path().has_path());
    assert_eq!(
        with_path().operand_type_rule(),
        &OperandTypeRule::family([SqlTypeFamily::Any, SqlTypeFamily::String])
    );
    assert_eq!(
        without_path().operand_type_rule(),
        &OperandTypeRule::family([SqlTypeFamily::Any])
    );
}

// ----------------------------------------------------------------- Registry

#[test]
fn standard_operator_map_holds_both_variants() {
    let map = standard_operator_map();
    assert_eq!(map.len(), 2);

    let op = map.get("JSON_API_COMMON_SYNTAX").unwrap();
    assert_eq!(op.operand_type_rule().families().len(), 2);

    let op = map.get("JSON_API_COMMON_SYNTAX_WITHOUT_PATH").unwrap();
    assert_eq!(op.operand_type_rule().families().len(), 1);
}
