//! NASM x86-64 backend for the compiler.
//!
//! The frontend walks the expression/statement tree in evaluation order
//! (post-order for expressions) and calls one emitter per node. Each
//! emitter instantiates an instruction template and appends the result to
//! one of two section buffers: declarations go to `.data`, everything
//! else to `.text`. Expression evaluation uses the machine stack as an
//! implicit operand stack, so every emitted subtree leaves exactly one
//! value pushed; assignments and value extraction pop it back off.
//!
//! The generated sections target the Linux x86-64 calling convention and
//! are handed to the external assembler driver as plain text.

pub mod emit;
pub mod error;
pub mod section;
pub mod symbols;
pub mod templates;
pub mod token;
