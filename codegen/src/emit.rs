//! Expression/statement emitters.
//!
//! `CodeGen` is one generation session: it owns the two section buffers
//! and the count of values pending on the implicit operand stack. The
//! tree walker drives it bottom-up; every call validates its inputs
//! before the first append, so a failed call leaves both sections
//! byte-for-byte unchanged.

use std::fmt;

use arch::reg::Reg;
use arch::template::Arg;
use arch::width::Width;

use crate::error::Error;
use crate::section::{Section, SectionKind};
use crate::symbols::{SymbolEntry, SymbolId, SymbolTable};
use crate::templates;
use crate::token::TokenKind;

#[derive(Debug)]
pub struct CodeGen {
    data: Section,
    text: Section,
    pending: usize,
}

impl CodeGen {
    pub fn new() -> Self {
        CodeGen {
            data: Section::new(SectionKind::Data),
            text: Section::new(SectionKind::Text),
            pending: 0,
        }
    }

    /// Re-initialize for an independent run. Both sections come back
    /// with only their headers, and the pending count drops to zero.
    pub fn reset(&mut self) {
        *self = CodeGen::new();
    }

    /// exp: number. Pushes the literal as the subtree's result.
    pub fn gen_number(&mut self, value: i32) -> Result<(), Error> {
        let text = templates::EXP_NUM.expand(&[Arg::Int(value as i64)])?;
        self.text.append(&text);
        self.pending += 1;
        Ok(())
    }

    /// exp: name. Loads the variable at its declared width and pushes
    /// the value.
    pub fn gen_name(&mut self, symbols: &SymbolTable, id: SymbolId) -> Result<(), Error> {
        let (name, entry) = self.entry(symbols, id)?;
        let reg = Reg::acc(entry.width).to_string();
        let text = templates::EXP_NAME.expand(&[Arg::Str(&reg), Arg::Str(name)])?;
        self.text.append(&text);
        self.pending += 1;
        Ok(())
    }

    /// exp: exp op exp. Pops both operands (right first), applies the
    /// operator, pushes the single result.
    pub fn gen_arith(&mut self, op: TokenKind) -> Result<(), Error> {
        let inst = templates::OP_INST
            .get(&op)
            .ok_or(Error::InvalidOperator(op))?;
        self.need(2)?;
        let mut text = String::from(templates::ARITH_SETUP);
        text.push_str(inst);
        text.push_str(templates::ARITH_FINISH);
        self.text.append(&text);
        self.pending -= 1;
        Ok(())
    }

    /// Pop the pending expression result into rax, for use outside the
    /// stack protocol. Usually called at the root of the tree.
    pub fn gen_value(&mut self) -> Result<(), Error> {
        self.need(1)?;
        self.text.append(templates::EXP_VAL);
        self.pending -= 1;
        Ok(())
    }

    /// name = exp. Pops the pending result and stores it at the
    /// variable's declared width.
    pub fn gen_assign(&mut self, symbols: &SymbolTable, id: SymbolId) -> Result<(), Error> {
        let (name, entry) = self.entry(symbols, id)?;
        self.need(1)?;
        let reg = Reg::acc(entry.width).to_string();
        let text = templates::ASSIGN.expand(&[Arg::Str(name), Arg::Str(&reg)])?;
        self.text.append(&text);
        self.pending -= 1;
        Ok(())
    }

    /// Global variable declaration: one data-definition line in `.data`.
    /// The width arrives as a raw byte count from the declaration
    /// subsystem.
    pub fn gen_static(&mut self, name: &str, value: &str, size: u8) -> Result<(), Error> {
        let width = Width::try_from(size).map_err(|_| Error::InvalidWidth(size))?;
        let template = match width {
            Width::Byte => templates::DATA_BYTE,
            Width::Word => templates::DATA_WORD,
            Width::Dword => templates::DATA_DWORD,
            Width::Qword => templates::DATA_QWORD,
        };
        let text = template.expand(&[Arg::Str(name), Arg::Str(value)])?;
        self.data.append(&text);
        Ok(())
    }

    /// Number of values currently pending on the implicit operand stack.
    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn data(&self) -> &str {
        self.data.as_str()
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn finish(self) -> Program {
        Program {
            data: self.data.into_string(),
            text: self.text.into_string(),
        }
    }

    fn entry<'a>(
        &self,
        symbols: &'a SymbolTable,
        id: SymbolId,
    ) -> Result<(&'a str, &'a SymbolEntry), Error> {
        let (name, entry) = symbols.get(id).ok_or(Error::UnknownSymbol(id))?;
        if entry.kind != TokenKind::Name {
            return Err(Error::InvalidOperand(name.to_string()));
        }
        Ok((name, entry))
    }

    fn need(&self, needed: usize) -> Result<(), Error> {
        if self.pending < needed {
            return Err(Error::StackUnderflow {
                needed,
                pending: self.pending,
            });
        }
        Ok(())
    }
}

impl Default for CodeGen {
    fn default() -> Self {
        CodeGen::new()
    }
}

/// The finished output of one session, ready for the assembler driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub data: String,
    pub text: String,
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}\n{}", templates::PRELUDE, self.data, self.text)
    }
}
