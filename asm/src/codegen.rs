use arch::{
    inst::{Inst, Word, WORD_MAX},
    mem::Memory,
    op::Arg,
};

use crate::{error::Error, resolver::Resolved};

/// Encode one resolved line into its memory word.
pub fn encode(line: &Resolved) -> Result<Word, Error> {
    let idx = line.addr as usize;
    let operand = line.operand.as_deref();

    match line.mnemonic.arg_field() {
        Arg::Data => match operand {
            None => Ok(0),
            Some(text) => match text.parse::<i64>() {
                Ok(val) if (0..=WORD_MAX as i64).contains(&val) => Ok(val as Word),
                _ => Err(Error::InvalidLiteral {
                    idx,
                    line: line.to_string(),
                    value: text.to_string(),
                }),
            },
        },
        Arg::Addr => {
            let addr = match operand.map(|text| (text, text.parse::<u8>())) {
                Some((_, Ok(addr))) if (addr as usize) < arch::mem::SIZE => Some(addr),
                Some((text, _)) => {
                    return Err(Error::OutOfRangeAddress {
                        idx,
                        line: line.to_string(),
                        value: text.to_string(),
                    })
                }
                None => None,
            };
            inst(line, addr)
        }
        Arg::None => inst(line, None),
    }
}

fn inst(line: &Resolved, addr: Option<u8>) -> Result<Word, Error> {
    Inst::from_mnemonic(line.mnemonic, addr)
        .map(Inst::to_word)
        .ok_or_else(|| Error::MalformedInstruction {
            idx: line.addr as usize,
            line: line.to_string(),
            reason: format!("operand does not fit `{}`", line.mnemonic),
        })
}

/// Lay the resolved lines out in a fresh memory image.
pub fn generate(lines: &[Resolved]) -> Result<Memory, Error> {
    let mut memory = Memory::new();
    for line in lines {
        let word = encode(line)?;
        if !memory.set(line.addr, word) {
            return Err(Error::OutOfRangeAddress {
                idx: line.addr as usize,
                line: line.to_string(),
                value: line.addr.to_string(),
            });
        }
    }
    Ok(memory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arch::op::Mnemonic;

    fn line(mnemonic: Mnemonic, operand: Option<&str>) -> Resolved {
        Resolved {
            addr: 4,
            mnemonic,
            operand: operand.map(str::to_string),
        }
    }

    macro_rules! test_encode {
        ($($name:ident: $mnemonic:ident $operand:expr => $word:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    assert_eq!(encode(&line(Mnemonic::$mnemonic, $operand)), Ok($word));
                }
            )*
        }
    }

    test_encode! {
        hlt: HLT None => 0,
        inp: INP None => 901,
        out: OUT None => 902,
        otc: OTC None => 922,
        dat_empty: DAT None => 0,
        dat_zero_filled: DAT Some("00") => 0,
        dat_value: DAT Some("7") => 7,
        dat_wide: DAT Some("123") => 123,
        add: ADD Some("27") => 127,
        sub: SUB Some("27") => 227,
        sta: STA Some("27") => 327,
        lda: LDA Some("27") => 527,
        bra: BRA Some("05") => 605,
        brz: BRZ Some("5") => 705,
        brp: BRP Some("99") => 899,
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(
            encode(&line(Mnemonic::ADD, Some("100"))),
            Err(Error::OutOfRangeAddress { idx: 4, .. })
        ));
        assert!(matches!(
            encode(&line(Mnemonic::BRA, Some("-1"))),
            Err(Error::OutOfRangeAddress { .. })
        ));
        assert!(matches!(
            encode(&line(Mnemonic::DAT, Some("1000"))),
            Err(Error::InvalidLiteral { .. })
        ));
        assert!(matches!(
            encode(&line(Mnemonic::DAT, Some("-5"))),
            Err(Error::InvalidLiteral { .. })
        ));
        assert!(matches!(
            encode(&line(Mnemonic::HLT, Some("5"))),
            Err(Error::MalformedInstruction { .. })
        ));
    }

    #[test]
    fn unwritten_cells_stay_zero() {
        let lines = vec![
            Resolved {
                addr: 0,
                mnemonic: Mnemonic::INP,
                operand: None,
            },
            Resolved {
                addr: 1,
                mnemonic: Mnemonic::OUT,
                operand: None,
            },
        ];
        let memory = generate(&lines).unwrap();
        assert_eq!(memory.len(), 100);
        assert_eq!(&memory.cells()[..3], &[901, 902, 0]);
        assert!(memory.cells()[2..].iter().all(|w| *w == 0));
    }
}
