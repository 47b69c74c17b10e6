use thiserror::Error;

use crate::inst::Word;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Word `{0}` is outside 000-999")]
    OutOfRange(Word),

    #[error("Undefined opcode: `{0}{1:0>2}`")]
    UndefinedOpCode(u8, u8),

    #[error("Undefined I/O function: `9{0:0>2}`")]
    UndefinedIoFunc(u8),
}
