//! Parameterized instruction templates.
//!
//! A template is a fixed pattern with named placeholders written as
//! `{slot}`. Each slot has a declared kind, and instantiation binds an
//! ordered tuple of arguments to the slots, checking arity and kind.
//! Output goes into an owned, growable `String`, so instantiation can
//! never truncate; a malformed call site is a table bug and is reported
//! as a `TemplateError`.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Str,
    Int,
}

/// One bound argument. Borrows its text for the duration of the call.
#[derive(Debug, Clone, Copy)]
pub enum Arg<'a> {
    Str(&'a str),
    Int(i64),
}

impl Arg<'_> {
    fn kind(&self) -> ParamKind {
        match self {
            Arg::Str(_) => ParamKind::Str,
            Arg::Int(_) => ParamKind::Int,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Expected {expected} template arguments, found {found}")]
    ArityMismatch { expected: usize, found: usize },

    #[error("Argument for slot `{0}` has the wrong kind")]
    KindMismatch(String),

    #[error("Unknown slot in pattern: `{0}`")]
    UnknownSlot(String),

    #[error("Unclosed `{{` in pattern")]
    UnclosedSlot,
}

#[derive(Debug, Clone, Copy)]
pub struct Template {
    pattern: &'static str,
    params: &'static [(&'static str, ParamKind)],
}

impl Template {
    pub const fn new(
        pattern: &'static str,
        params: &'static [(&'static str, ParamKind)],
    ) -> Self {
        Template { pattern, params }
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Instantiate the template with one argument per declared slot, in
    /// declaration order.
    pub fn expand(&self, args: &[Arg]) -> Result<String, TemplateError> {
        if args.len() != self.params.len() {
            return Err(TemplateError::ArityMismatch {
                expected: self.params.len(),
                found: args.len(),
            });
        }
        for ((slot, kind), arg) in self.params.iter().zip(args) {
            if arg.kind() != *kind {
                return Err(TemplateError::KindMismatch(slot.to_string()));
            }
        }

        let mut out = String::with_capacity(self.pattern.len() + 16 * args.len());
        let mut rest = self.pattern;
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            rest = &rest[open + 1..];
            let close = rest.find('}').ok_or(TemplateError::UnclosedSlot)?;
            let slot = &rest[..close];
            let idx = self
                .params
                .iter()
                .position(|(name, _)| *name == slot)
                .ok_or_else(|| TemplateError::UnknownSlot(slot.to_string()))?;
            match args[idx] {
                Arg::Str(s) => out.push_str(s),
                Arg::Int(n) => out.push_str(&n.to_string()),
            }
            rest = &rest[close + 1..];
        }
        out.push_str(rest);
        Ok(out)
    }
}
