//! SQL/JSON API common syntax operator.
//!
//! # Overview
//!
//! The JSON API common syntax is the shared prefix grammar of the SQL/JSON
//! querying functions (`JSON_VALUE`, `JSON_QUERY`, `JSON_EXISTS`,
//! `JSON_TABLE`, ...): the JSON input expression, an optional JSON path
//! literal, and an optional list of `expr AS name` bindings introduced by
//! the keyword `PASSING`. This crate implements the operator that carries
//! that prefix inside a SQL engine: its operand-arity contract and its
//! canonical textual reproduction (unparse).
//!
//! # Example
//!
//! ```
//! use sql_json_syntax::{
//!     JsonApiCommonSyntaxOperator, SqlCall, SqlNode, SqlSpecialOperator, SqlWriter,
//! };
//!
//! let op = JsonApiCommonSyntaxOperator::new("JSON_API_COMMON_SYNTAX", true);
//! let call = SqlCall::new(vec![
//!     SqlNode::identifier("data"),
//!     SqlNode::string("lax $.foo"),
//! ]);
//!
//! op.check_operand_count(&call).unwrap();
//!
//! let mut writer = SqlWriter::new();
//! op.unparse(&mut writer, &call, 0, 0).unwrap();
//! assert_eq!(writer.as_str(), "data, 'lax $.foo'");
//! ```

pub mod error;
pub mod node;
pub mod operators;
pub mod types;
pub mod writer;

// Re-export the core public API
pub use error::SqlOpError;
pub use node::{SqlCall, SqlNode};
pub use operators::{
    operators_to_map, standard_operator_map, standard_operators, JsonApiCommonSyntaxOperator,
    OperatorMap, SharedOperator, SqlSpecialOperator,
};
pub use types::{OperandTypeRule, ReturnTypeRule, SqlKind, SqlTypeFamily, SqlTypeName};
pub use writer::{Frame, FrameType, SqlWriter};
