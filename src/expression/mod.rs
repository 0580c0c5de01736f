//! Expression trees over a single repeated digit

mod ast;
mod constants;
mod display;
mod edit;
mod equality;
mod errors;
mod eval;

pub use ast::{BinaryOp, Expression, NodeId, NodeKind};
pub use errors::ExpressionError;
