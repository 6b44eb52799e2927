//! The JSON API common syntax operator, the shared head of the SQL/JSON
//! querying functions.

use crate::error::SqlOpError;
use crate::node::SqlCall;
use crate::operators::SqlSpecialOperator;
use crate::types::{OperandTypeRule, ReturnTypeRule, SqlKind, SqlTypeFamily, SqlTypeName};
use crate::writer::{FrameType, SqlWriter};

// The PASSING tail walk starts at this index for both variants.
const PASSING_TAIL_START: usize = 2;

/// The JSON API common syntax, optionally including a path specification.
///
/// Carries the JSON input expression, an optional JSON path literal, and a
/// sequence of `expr AS name` bindings introduced by the keyword `PASSING`.
/// The canonical surface form is:
///
/// ```text
/// <json value> [, <path>] [PASSING <expr> AS <name> ...]
/// ```
///
/// Stateless after construction; a single instance is safely shared across
/// concurrent validation and unparse.
#[derive(Debug, Clone)]
pub struct JsonApiCommonSyntaxOperator {
    name: String,
    // If true, the syntax must contain a JSON path expression,
    // e.g. '{"foo":"bar"}', 'lax $.foo'; otherwise JSON text only,
    // e.g. '{"foo":"bar"}'.
    has_path: bool,
    return_type: ReturnTypeRule,
    operand_rule: OperandTypeRule,
}

impl JsonApiCommonSyntaxOperator {
    pub fn new(name: impl Into<String>, has_path: bool) -> Self {
        let operand_rule = if has_path {
            OperandTypeRule::family([SqlTypeFamily::Any, SqlTypeFamily::String])
        } else {
            OperandTypeRule::family([SqlTypeFamily::Any])
        };
        Self {
            name: name.into(),
            has_path,
            return_type: ReturnTypeRule::Explicit(SqlTypeName::Any),
            operand_rule,
        }
    }

    pub fn has_path(&self) -> bool {
        self.has_path
    }

    fn unparse_call(&self, writer: &mut SqlWriter, call: &SqlCall) -> Result<(), SqlOpError> {
        let operands = call.operand_list();
        let json_value = operands
            .first()
            .ok_or_else(|| SqlOpError::MalformedCall("call has no operands".to_string()))?;
        json_value.unparse(writer, 0, 0);
        if self.has_path {
            writer.sep(",", true);
            let path = operands.get(1).ok_or_else(|| {
                SqlOpError::MalformedCall("call has no path operand".to_string())
            })?;
            path.unparse(writer, 0, 0);
        }
        let has_tail = if self.has_path {
            operands.len() > 2
        } else {
            operands.len() > 1
        };
        if has_tail {
            writer.keyword("PASSING");
            let mut i = PASSING_TAIL_START;
            while i < operands.len() {
                operands[i].unparse(writer, 0, 0);
                writer.keyword("AS");
                let alias = operands.get(i + 1).ok_or_else(|| {
                    SqlOpError::MalformedCall(format!(
                        "PASSING operand at index {i} has no alias"
                    ))
                })?;
                alias.unparse(writer, 0, 0);
                i += 2;
            }
        }
        Ok(())
    }
}

impl SqlSpecialOperator for JsonApiCommonSyntaxOperator {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> SqlKind {
        SqlKind::JsonApiCommonSyntax
    }

    fn precedence(&self) -> u32 {
        100
    }

    fn is_left_assoc(&self) -> bool {
        true
    }

    fn return_type_rule(&self) -> &ReturnTypeRule {
        &self.return_type
    }

    fn operand_type_rule(&self) -> &OperandTypeRule {
        &self.operand_rule
    }

    fn check_operand_count(&self, call: &SqlCall) -> Result<(), SqlOpError> {
        if self.has_path {
            if call.operand_count() < 2 {
                return Err(SqlOpError::ArityError(
                    "JSON API common syntax requires at least 2 parameters".to_string(),
                ));
            }
        } else if call.operand_count() < 1 {
            return Err(SqlOpError::ArityError(
                "JSON API common syntax requires at least 1 parameter".to_string(),
            ));
        }
        Ok(())
    }

    fn unparse(
        &self,
        writer: &mut SqlWriter,
        call: &SqlCall,
        _left_prec: u32,
        _right_prec: u32,
    ) -> Result<(), SqlOpError> {
        let frame = writer.start_list(FrameType::Simple);
        let result = self.unparse_call(writer, call);
        // Frame must be released on the error path as well.
        writer.end_fun_call(frame);
        result
    }
}
