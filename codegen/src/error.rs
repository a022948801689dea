use thiserror::Error;

use crate::token::TokenKind;

/// Unified error type for the backend. Emitters validate their inputs
/// before the first append, so a returned error means the section
/// buffers are unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Unrecognized arithmetic operator: {0:?}")]
    InvalidOperator(TokenKind),

    #[error("Symbol `{0}` is not a name")]
    InvalidOperand(String),

    #[error("Unsupported data width: {0} bytes")]
    InvalidWidth(u8),

    #[error("Unknown symbol id: {0}")]
    UnknownSymbol(usize),

    #[error("Operand stack underflow: needed {needed}, have {pending}")]
    StackUnderflow { needed: usize, pending: usize },

    #[error(transparent)]
    Template(#[from] arch::template::TemplateError),
}
