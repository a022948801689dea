use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Storage width of a declared variable, in bytes. The frontend hands the
/// width over as a raw byte count, so the conversion is fallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Width {
    Byte = 1,
    Word = 2,
    Dword = 4,
    Qword = 8,
}
