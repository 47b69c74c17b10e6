use arch::{error::DecodeError, inst::Word};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid instruction at {addr:0>2}: `{word}`")]
    InvalidOpcode {
        addr: u8,
        word: Word,
        #[source]
        source: DecodeError,
    },

    #[error("Address out of range: {addr} (expected 00-99)")]
    OutOfRangeAddress { addr: usize },

    #[error("Machine already halted at {pc:0>2}")]
    Halted { pc: u8 },

    #[error("No input available for INP at {addr:0>2}")]
    MissingInput { addr: u8 },

    #[error("Accumulator overflow at {addr:0>2}: `{word:0>3}`")]
    ArithmeticOverflow { addr: u8, word: Word },

    #[error("Cannot output {value} as a character at {addr:0>2}")]
    InvalidCharacter { addr: u8, value: i32 },

    #[error("Cycle limit reached: {0}")]
    CycleLimit(u64),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to parse dump config: {0}")]
    DumpConfig(String, #[source] serde_yaml::Error),
}

impl Error {
    /// Address of the instruction that failed, when there is one.
    pub fn addr(&self) -> Option<u8> {
        match self {
            Error::InvalidOpcode { addr, .. }
            | Error::MissingInput { addr }
            | Error::ArithmeticOverflow { addr, .. }
            | Error::InvalidCharacter { addr, .. } => Some(*addr),
            _ => None,
        }
    }
}
