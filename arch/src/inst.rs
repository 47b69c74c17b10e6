use crate::{
    error::DecodeError,
    op::{IoFunc, Mnemonic, OpCode},
};

use color_print::cformat;
use serde::{Deserialize, Serialize};

/// One memory cell. Code and data share the same representation.
pub type Word = i32;

/// Largest value a cell can hold and still be a valid instruction or literal.
pub const WORD_MAX: Word = 999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Inst {
    HLT(),
    ADD(u8),
    SUB(u8),
    STA(u8),
    LDA(u8),
    BRA(u8),
    BRZ(u8),
    BRP(u8),
    INP(),
    OUT(),
    OTC(),
}

/// Split a word into (instruction register, address register).
pub fn split(word: Word) -> Result<(u8, u8), DecodeError> {
    if !(0..=WORD_MAX).contains(&word) {
        return Err(DecodeError::OutOfRange(word));
    }
    Ok(((word / 100) as u8, (word % 100) as u8))
}

impl Inst {
    /// Build the instruction a source mnemonic denotes.
    /// Returns `None` for `DAT`, or when the argument does not fit the mnemonic.
    pub fn from_mnemonic(mnemonic: Mnemonic, addr: Option<u8>) -> Option<Inst> {
        match (mnemonic, addr) {
            (Mnemonic::HLT, None) => Some(Inst::HLT()),
            (Mnemonic::INP, None) => Some(Inst::INP()),
            (Mnemonic::OUT, None) => Some(Inst::OUT()),
            (Mnemonic::OTC, None) => Some(Inst::OTC()),
            (Mnemonic::ADD, Some(a)) => Some(Inst::ADD(a)),
            (Mnemonic::SUB, Some(a)) => Some(Inst::SUB(a)),
            (Mnemonic::STA, Some(a)) => Some(Inst::STA(a)),
            (Mnemonic::LDA, Some(a)) => Some(Inst::LDA(a)),
            (Mnemonic::BRA, Some(a)) => Some(Inst::BRA(a)),
            (Mnemonic::BRZ, Some(a)) => Some(Inst::BRZ(a)),
            (Mnemonic::BRP, Some(a)) => Some(Inst::BRP(a)),
            _ => None,
        }
    }

    pub fn mnemonic(&self) -> Mnemonic {
        match self {
            Inst::HLT() => Mnemonic::HLT,
            Inst::ADD(_) => Mnemonic::ADD,
            Inst::SUB(_) => Mnemonic::SUB,
            Inst::STA(_) => Mnemonic::STA,
            Inst::LDA(_) => Mnemonic::LDA,
            Inst::BRA(_) => Mnemonic::BRA,
            Inst::BRZ(_) => Mnemonic::BRZ,
            Inst::BRP(_) => Mnemonic::BRP,
            Inst::INP() => Mnemonic::INP,
            Inst::OUT() => Mnemonic::OUT,
            Inst::OTC() => Mnemonic::OTC,
        }
    }

    pub fn to_word(self) -> Word {
        fn word(op: OpCode, ar: u8) -> Word {
            u8::from(op) as Word * 100 + ar as Word
        }
        match self {
            Inst::HLT() => word(OpCode::HLT, 0),
            Inst::ADD(a) => word(OpCode::ADD, a),
            Inst::SUB(a) => word(OpCode::SUB, a),
            Inst::STA(a) => word(OpCode::STA, a),
            Inst::LDA(a) => word(OpCode::LDA, a),
            Inst::BRA(a) => word(OpCode::BRA, a),
            Inst::BRZ(a) => word(OpCode::BRZ, a),
            Inst::BRP(a) => word(OpCode::BRP, a),
            Inst::INP() => word(OpCode::IO, IoFunc::INP),
            Inst::OUT() => word(OpCode::IO, IoFunc::OUT),
            Inst::OTC() => word(OpCode::IO, IoFunc::OTC),
        }
    }

    /// Decode the fields produced by [`split`].
    /// A leading zero halts whatever the address register holds.
    pub fn from_fields(ir: u8, ar: u8) -> Result<Inst, DecodeError> {
        let op = OpCode::try_from(ir).map_err(|_| DecodeError::UndefinedOpCode(ir, ar))?;
        match op {
            OpCode::HLT => Ok(Inst::HLT()),
            OpCode::ADD => Ok(Inst::ADD(ar)),
            OpCode::SUB => Ok(Inst::SUB(ar)),
            OpCode::STA => Ok(Inst::STA(ar)),
            OpCode::LDA => Ok(Inst::LDA(ar)),
            OpCode::BRA => Ok(Inst::BRA(ar)),
            OpCode::BRZ => Ok(Inst::BRZ(ar)),
            OpCode::BRP => Ok(Inst::BRP(ar)),
            OpCode::IO => match ar {
                IoFunc::INP => Ok(Inst::INP()),
                IoFunc::OUT => Ok(Inst::OUT()),
                IoFunc::OTC => Ok(Inst::OTC()),
                _ => Err(DecodeError::UndefinedIoFunc(ar)),
            },
        }
    }

    pub fn from_word(word: Word) -> Result<Inst, DecodeError> {
        let (ir, ar) = split(word)?;
        Inst::from_fields(ir, ar)
    }
}

impl Inst {
    pub fn cformat(&self) -> String {
        macro_rules! addr {
            ($name:expr, $addr:expr) => {
                cformat!("<r>{:<4}</><y>{:0>2}</>", $name.to_string(), $addr)
            };
        }
        macro_rules! bare {
            ($name:expr) => {
                cformat!("<r>{:<4}</>  ", $name.to_string())
            };
        }
        match self {
            Inst::ADD(a)
            | Inst::SUB(a)
            | Inst::STA(a)
            | Inst::LDA(a)
            | Inst::BRA(a)
            | Inst::BRZ(a)
            | Inst::BRP(a) => addr!(self.mnemonic(), a),
            Inst::HLT() | Inst::INP() | Inst::OUT() | Inst::OTC() => bare!(self.mnemonic()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_inst {
        ($($name:ident: $inst:expr => $word:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let inst = $inst;
                    assert_eq!(inst.to_word(), $word);
                    assert_eq!(Inst::from_word($word), Ok(inst));
                }
            )*
        }
    }

    test_inst! {
        test_hlt: Inst::HLT() => 0,
        test_add: Inst::ADD(27) => 127,
        test_sub: Inst::SUB(5) => 205,
        test_sta: Inst::STA(99) => 399,
        test_lda: Inst::LDA(0) => 500,
        test_bra: Inst::BRA(7) => 607,
        test_brz: Inst::BRZ(14) => 714,
        test_brp: Inst::BRP(25) => 825,
        test_inp: Inst::INP() => 901,
        test_out: Inst::OUT() => 902,
        test_otc: Inst::OTC() => 922,
    }

    #[test]
    fn data_words_with_leading_zero_halt() {
        assert_eq!(Inst::from_word(5), Ok(Inst::HLT()));
        assert_eq!(Inst::from_word(99), Ok(Inst::HLT()));
    }

    #[test]
    fn undefined_words() {
        assert_eq!(Inst::from_word(400), Err(DecodeError::UndefinedOpCode(4, 0)));
        assert_eq!(Inst::from_word(903), Err(DecodeError::UndefinedIoFunc(3)));
        assert_eq!(Inst::from_word(1000), Err(DecodeError::OutOfRange(1000)));
        assert_eq!(Inst::from_word(-1), Err(DecodeError::OutOfRange(-1)));
    }

    #[test]
    fn from_mnemonic_checks_arity() {
        assert_eq!(Inst::from_mnemonic(Mnemonic::ADD, Some(3)), Some(Inst::ADD(3)));
        assert_eq!(Inst::from_mnemonic(Mnemonic::ADD, None), None);
        assert_eq!(Inst::from_mnemonic(Mnemonic::OUT, Some(3)), None);
        assert_eq!(Inst::from_mnemonic(Mnemonic::DAT, Some(3)), None);
    }
}
