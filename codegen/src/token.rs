/// Token kinds the tree walker hands to the backend: the value-class tags
/// carried by symbol entries and the arithmetic operator codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Name,
    Number,
    Plus,  // '+'
    Minus, // '-'
    Star,  // '*'
    Slash, // '/'
}
