use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Source-level instruction names. Matching is case-sensitive.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    Display,
)]
pub enum Mnemonic {
    LDA,
    STA,
    ADD,
    SUB,
    INP,
    OUT,
    OTC,
    HLT,
    BRZ,
    BRP,
    BRA,
    DAT,
}

impl Mnemonic {
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }

    pub fn is_mnemonic(s: &str) -> bool {
        Self::parse(s).is_some()
    }
}

/// What a mnemonic takes after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg {
    /// Nothing.
    None,
    /// A memory address, 00-99. Required.
    Addr,
    /// A data literal, 0-999. Optional, defaults to zero.
    Data,
}

impl Mnemonic {
    pub fn arg_field(&self) -> Arg {
        use Mnemonic::*;
        match self {
            HLT | INP | OUT | OTC => Arg::None,
            LDA | STA | ADD | SUB | BRZ | BRP | BRA => Arg::Addr,
            DAT => Arg::Data,
        }
    }
}

/// Leading digit of an encoded word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum OpCode {
    HLT = 0,
    ADD = 1,
    SUB = 2,
    STA = 3,
    LDA = 5,
    BRA = 6,
    BRZ = 7,
    BRP = 8,
    IO = 9,
}

/// Address-register values selecting the device operation under `OpCode::IO`.
pub struct IoFunc;

impl IoFunc {
    pub const INP: u8 = 1;
    pub const OUT: u8 = 2;
    pub const OTC: u8 = 22;
}
