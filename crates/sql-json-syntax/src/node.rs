//! Expression and call nodes consumed by operator unparse.

use crate::writer::SqlWriter;
use serde_json::Value;

/// An operand expression node. Emits its own canonical text given a writer
/// and left/right precedence hints.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlNode {
    /// A bare identifier, printed as-is.
    Identifier(String),
    /// A literal value. Strings print single-quoted with `''` escaping,
    /// numbers via their JSON representation, booleans as `TRUE`/`FALSE`,
    /// null as `NULL`. Arrays and objects print as single-quoted JSON text.
    Literal(Value),
}

impl SqlNode {
    pub fn identifier(name: impl Into<String>) -> Self {
        SqlNode::Identifier(name.into())
    }

    pub fn literal(value: Value) -> Self {
        SqlNode::Literal(value)
    }

    /// String literal shorthand.
    pub fn string(s: impl Into<String>) -> Self {
        SqlNode::Literal(Value::String(s.into()))
    }

    /// Emit this node's canonical text. Leaf nodes take no parentheses, so
    /// the precedence hints are unused; they exist for parity with the
    /// engine-wide unparse signature.
    pub fn unparse(&self, writer: &mut SqlWriter, _left_prec: u32, _right_prec: u32) {
        match self {
            SqlNode::Identifier(name) => writer.identifier(name),
            SqlNode::Literal(value) => writer.literal(&literal_to_sql(value)),
        }
    }
}

fn literal_to_sql(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(true) => "TRUE".to_string(),
        Value::Bool(false) => "FALSE".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => single_quoted(s),
        other => single_quoted(&other.to_string()),
    }
}

fn single_quoted(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// A parsed call: an ordered sequence of operand expressions, immutable
/// from the operator's perspective.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlCall {
    operands: Vec<SqlNode>,
}

impl SqlCall {
    pub fn new(operands: Vec<SqlNode>) -> Self {
        Self { operands }
    }

    pub fn operand_count(&self) -> usize {
        self.operands.len()
    }

    /// The operand at `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    pub fn operand(&self, i: usize) -> &SqlNode {
        &self.operands[i]
    }

    pub fn operand_list(&self) -> &[SqlNode] {
        &self.operands
    }
}
