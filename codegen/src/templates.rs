//! The NASM assembly templates.
//!
//! Placeholders are named slots (`{name}`, `{value}`, `{reg}`) bound at
//! the call site through `arch::template`, so NASM's own `%` syntax
//! needs no escaping anywhere.

use std::collections::HashMap;

use arch::template::{ParamKind, Template};
use once_cell::sync::Lazy;

use crate::token::TokenKind;

use arch::template::ParamKind::{Int, Str};

/// File prelude, prepended by the assembler driver when it writes the
/// finished program.
pub const PRELUDE: &str = "global _start\n\n";

// Section headers and the program entry label.
pub const SECTION_DATA: &str = "section .data\n";
pub const SECTION_TEXT: &str = "section .text\n";
pub const START: &str = "_start:\n";

// Data definitions. Slots are the variable name and its initializer.
pub const DATA_BYTE: Template =
    Template::new("{name} db {value}\n", &[("name", Str), ("value", Str)]);
pub const DATA_WORD: Template =
    Template::new("{name} dw {value}\n", &[("name", Str), ("value", Str)]);
pub const DATA_DWORD: Template =
    Template::new("{name} dd {value}\n", &[("name", Str), ("value", Str)]);
pub const DATA_QWORD: Template =
    Template::new("{name} dq {value}\n", &[("name", Str), ("value", Str)]);

/// exp: number. The literal itself is the result of the subtree, so it
/// goes straight onto the operand stack.
pub const EXP_NUM: Template =
    Template::new("mov eax, {value}\npush rax\n", &[("value", Int)]);

/// exp: name. Load the variable from memory at its declared width, then
/// push the value as the subtree's result.
pub const EXP_NAME: Template = Template::new(
    "mov {reg}, [{name}]\npush rax\n",
    &[("reg", Str), ("name", Str)],
);

/// Both operand values are on the stack: pop them (right first), apply
/// the operator, push the result back.
pub const ARITH_SETUP: &str = "pop rbx\npop rax\n";
pub const ARITH_FINISH: &str = "push rax\n";

/// name = exp. The top of the stack holds the result of exp; pop it and
/// store it at the variable's declared width.
pub const ASSIGN: Template = Template::new(
    "pop rax\nmov [{name}], {reg}\n",
    &[("name", Str), ("reg", Str)],
);

/// Pop the final expression value into rax, for callers that need the
/// computed value outside the stack protocol.
pub const EXP_VAL: &str = "pop rax\n";

/// Operator token → instruction. Arithmetic always runs at quad-word
/// width, so mul/div keep their implicit operand in rax and take rbx as
/// the explicit one regardless of the declared variable widths.
pub static OP_INST: Lazy<HashMap<TokenKind, &'static str>> = Lazy::new(|| {
    let mut map: HashMap<TokenKind, &'static str> = HashMap::new();
    map.insert(TokenKind::Plus, "add rax, rbx\n");
    map.insert(TokenKind::Minus, "sub rax, rbx\n");
    map.insert(TokenKind::Star, "mul rbx\n");
    map.insert(TokenKind::Slash, "div rbx\n");
    map
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn op_table_covers_exactly_the_arithmetic_tokens() {
        assert_eq!(OP_INST.len(), 4);
        for op in [
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
        ] {
            assert!(OP_INST.contains_key(&op));
        }
        assert!(!OP_INST.contains_key(&TokenKind::Name));
        assert!(!OP_INST.contains_key(&TokenKind::Number));
    }

    #[test]
    fn data_templates_take_name_and_value() {
        for tpl in [DATA_BYTE, DATA_WORD, DATA_DWORD, DATA_QWORD] {
            assert_eq!(tpl.arity(), 2);
        }
    }
}
