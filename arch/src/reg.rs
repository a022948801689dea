use strum::{Display, EnumString};

use crate::width::Width;

/// The accumulator-register family. Expression results always travel
/// through the `a` register at the granularity of the operand's width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Reg {
    AL,
    AX,
    EAX,
    RAX,
}

impl Reg {
    /// Accumulator register matching a storage width.
    pub fn acc(width: Width) -> Reg {
        match width {
            Width::Byte => Reg::AL,
            Width::Word => Reg::AX,
            Width::Dword => Reg::EAX,
            Width::Qword => Reg::RAX,
        }
    }
}
