use arch::width::Width;
use indexmap::IndexMap;

use crate::token::TokenKind;

/// Opaque handle the tree walker passes to the emitters. Stable for the
/// lifetime of the table (insertion index).
pub type SymbolId = usize;

#[derive(Debug, Clone)]
pub struct SymbolEntry {
    pub kind: TokenKind,
    pub width: Width,
}

/// Name → entry map owned by the frontend. The backend only reads
/// entries by id, one borrow per emitter call.
#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: IndexMap<String, SymbolEntry>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            entries: IndexMap::new(),
        }
    }

    /// Insert a symbol, or return the id of the existing entry with the
    /// same name.
    pub fn intern(&mut self, name: &str, kind: TokenKind, width: Width) -> SymbolId {
        if let Some(id) = self.entries.get_index_of(name) {
            return id;
        }
        let (id, _) = self
            .entries
            .insert_full(name.to_string(), SymbolEntry { kind, width });
        id
    }

    pub fn get(&self, id: SymbolId) -> Option<(&str, &SymbolEntry)> {
        self.entries
            .get_index(id)
            .map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn lookup(&self, name: &str) -> Option<SymbolId> {
        self.entries.get_index_of(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
