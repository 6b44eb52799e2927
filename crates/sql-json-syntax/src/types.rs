//! Operator attribute types: kind tags, type names, and type-rule declarations.

/// Kind tag identifying an operator family to the surrounding engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlKind {
    /// Shared head of the SQL/JSON querying functions (`JSON_VALUE`,
    /// `JSON_QUERY`, `JSON_EXISTS`, `JSON_TABLE`, ...).
    JsonApiCommonSyntax,
}

/// Concrete type names usable in an explicit return-type rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlTypeName {
    Any,
}

/// Abstract type classes used by the operand-type checker to accept or
/// reject operand types before full type inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlTypeFamily {
    Any,
    String,
}

/// Return-type rule advertised by an operator.
#[derive(Debug, Clone, PartialEq)]
pub enum ReturnTypeRule {
    /// Fixed, explicit return type.
    Explicit(SqlTypeName),
}

/// Declared operand families for the fixed operand prefix of a call.
///
/// Trailing operands beyond the declared prefix are not constrained by the
/// rule; the engine checks them elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct OperandTypeRule {
    families: Vec<SqlTypeFamily>,
}

impl OperandTypeRule {
    /// Rule accepting operands of the given families, in order.
    pub fn family(families: impl Into<Vec<SqlTypeFamily>>) -> Self {
        Self {
            families: families.into(),
        }
    }

    pub fn families(&self) -> &[SqlTypeFamily] {
        &self.families
    }
}
