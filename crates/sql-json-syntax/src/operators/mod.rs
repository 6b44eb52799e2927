//! Operator definitions and the shared-instance registry.

pub mod json_api;

pub use json_api::JsonApiCommonSyntaxOperator;

use crate::error::SqlOpError;
use crate::node::SqlCall;
use crate::types::{OperandTypeRule, ReturnTypeRule, SqlKind};
use crate::writer::SqlWriter;
use std::collections::HashMap;
use std::sync::Arc;

/// Standard interface of special operators: fixed attributes plus the two
/// hooks the engine calls during validation and unparse.
pub trait SqlSpecialOperator {
    fn name(&self) -> &str;
    fn kind(&self) -> SqlKind;
    fn precedence(&self) -> u32;
    fn is_left_assoc(&self) -> bool;
    fn return_type_rule(&self) -> &ReturnTypeRule;
    fn operand_type_rule(&self) -> &OperandTypeRule;

    /// Arity gate, run during validation before the general operand-type
    /// check.
    fn check_operand_count(&self, call: &SqlCall) -> Result<(), SqlOpError>;

    /// Emit the canonical surface form of `call`.
    fn unparse(
        &self,
        writer: &mut SqlWriter,
        call: &SqlCall,
        left_prec: u32,
        right_prec: u32,
    ) -> Result<(), SqlOpError>;
}

/// A globally shareable operator instance.
pub type SharedOperator = Arc<dyn SqlSpecialOperator + Send + Sync>;

/// Map of operator name -> shared instance.
pub type OperatorMap = HashMap<String, SharedOperator>;

/// The standard instances of this operator family: one per
/// (name, has_path) pair, shared rather than re-constructed.
pub fn standard_operators() -> Vec<SharedOperator> {
    vec![
        Arc::new(JsonApiCommonSyntaxOperator::new(
            "JSON_API_COMMON_SYNTAX",
            true,
        )),
        Arc::new(JsonApiCommonSyntaxOperator::new(
            "JSON_API_COMMON_SYNTAX_WITHOUT_PATH",
            false,
        )),
    ]
}

/// Builds an `OperatorMap` from a list of operator instances.
pub fn operators_to_map(operators: Vec<SharedOperator>) -> OperatorMap {
    let mut map = HashMap::new();
    for op in operators {
        map.insert(op.name().to_string(), op);
    }
    map
}

/// Map of the standard instances.
pub fn standard_operator_map() -> OperatorMap {
    operators_to_map(standard_operators())
}
