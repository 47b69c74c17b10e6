use arch::op::{Arg, Mnemonic};

use crate::error::Error;

// ----------------------------------------------------------------------------
// Statement

/// One source line, classified but not yet resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stmt {
    pub label: Option<String>,
    pub mnemonic: Mnemonic,
    pub operand: Option<String>,
}

impl Stmt {
    /// Classify a normalized line by its word count.
    ///
    /// - `OP`
    /// - `OP ARG` when the first word is a mnemonic, otherwise `LABEL OP`
    /// - `LABEL OP ARG`
    pub fn parse(idx: usize, code: &str) -> Result<Stmt, Error> {
        let words: Vec<&str> = code.split_whitespace().collect();

        let malformed = |reason: String| Error::MalformedInstruction {
            idx,
            line: code.to_string(),
            reason,
        };
        let mnemonic = |word: &str| {
            Mnemonic::parse(word).ok_or_else(|| Error::UnknownMnemonic {
                idx,
                line: code.to_string(),
                mnemonic: word.to_string(),
            })
        };

        let (label, op, operand) = match words.as_slice() {
            [] => {
                return Err(malformed(format!(
                    "empty line still occupies address {:0>2}",
                    idx
                )))
            }
            [op] => (None, mnemonic(*op)?, None),
            [op, arg] if Mnemonic::is_mnemonic(op) => {
                (None, mnemonic(*op)?, Some(arg.to_string()))
            }
            [label, op] => (Some(label.to_string()), mnemonic(*op)?, None),
            [label, op, arg] => {
                let op = mnemonic(*op)?;
                let arg = match op {
                    Mnemonic::DAT => strip_data_padding(arg),
                    _ => arg.to_string(),
                };
                (Some(label.to_string()), op, Some(arg))
            }
            _ => {
                return Err(malformed(format!(
                    "expected 1 to 3 words, found {}",
                    words.len()
                )))
            }
        };

        let operand = match (op.arg_field(), operand) {
            (Arg::None, Some(_)) => return Err(malformed(format!("`{}` takes no operand", op))),
            (Arg::Addr, None) => return Err(malformed(format!("`{}` requires an address", op))),
            // A labelled `DAT` without a value is materialized as zero.
            (Arg::Data, None) if label.is_some() => Some("00".to_string()),
            (_, operand) => operand,
        };

        Ok(Stmt {
            label,
            mnemonic: op,
            operand,
        })
    }
}

/// `DAT 007` is written back as `07`: only a 3-character literal starting with `0` is touched.
fn strip_data_padding(arg: &str) -> String {
    match arg.strip_prefix('0') {
        Some(rest) if arg.len() == 3 => rest.to_string(),
        _ => arg.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stmt(label: Option<&str>, mnemonic: Mnemonic, operand: Option<&str>) -> Stmt {
        Stmt {
            label: label.map(str::to_string),
            mnemonic,
            operand: operand.map(str::to_string),
        }
    }

    #[test]
    fn word_counts() {
        use Mnemonic::*;
        assert_eq!(Stmt::parse(0, "INP"), Ok(stmt(None, INP, None)));
        assert_eq!(Stmt::parse(0, "DAT"), Ok(stmt(None, DAT, None)));
        assert_eq!(Stmt::parse(0, "STA VALUE"), Ok(stmt(None, STA, Some("VALUE"))));
        assert_eq!(Stmt::parse(0, "DONE HLT"), Ok(stmt(Some("DONE"), HLT, None)));
        assert_eq!(Stmt::parse(0, "SUM DAT"), Ok(stmt(Some("SUM"), DAT, Some("00"))));
        assert_eq!(
            Stmt::parse(0, "OUTER LDA ZERO"),
            Ok(stmt(Some("OUTER"), LDA, Some("ZERO")))
        );
    }

    #[test]
    fn data_padding() {
        use Mnemonic::*;
        assert_eq!(Stmt::parse(0, "ONE DAT 001"), Ok(stmt(Some("ONE"), DAT, Some("01"))));
        assert_eq!(Stmt::parse(0, "ZERO DAT 000"), Ok(stmt(Some("ZERO"), DAT, Some("00"))));
        assert_eq!(Stmt::parse(0, "A DAT 0"), Ok(stmt(Some("A"), DAT, Some("0"))));
        assert_eq!(Stmt::parse(0, "B DAT 0007"), Ok(stmt(Some("B"), DAT, Some("0007"))));
        assert_eq!(Stmt::parse(0, "C DAT 123"), Ok(stmt(Some("C"), DAT, Some("123"))));
        // Only the labelled form is rewritten.
        assert_eq!(Stmt::parse(0, "DAT 001"), Ok(stmt(None, DAT, Some("001"))));
    }

    #[test]
    fn unknown_mnemonic() {
        assert!(matches!(
            Stmt::parse(3, "FOO"),
            Err(Error::UnknownMnemonic { idx: 3, ref mnemonic, .. }) if mnemonic == "FOO"
        ));
        assert!(matches!(
            Stmt::parse(3, "LOOP JMP"),
            Err(Error::UnknownMnemonic { ref mnemonic, .. }) if mnemonic == "JMP"
        ));
        assert!(matches!(
            Stmt::parse(3, "lda ONE"),
            Err(Error::UnknownMnemonic { ref mnemonic, .. }) if mnemonic == "ONE"
        ));
    }

    #[test]
    fn three_words_always_start_with_a_label() {
        use Mnemonic::*;
        assert_eq!(
            Stmt::parse(1, "OUT LDA ONE"),
            Ok(stmt(Some("OUT"), LDA, Some("ONE")))
        );
        assert!(matches!(
            Stmt::parse(1, "ADD ONE TWO"),
            Err(Error::UnknownMnemonic { ref mnemonic, .. }) if mnemonic == "ONE"
        ));
    }

    #[test]
    fn empty_line_names_its_address() {
        assert!(matches!(
            Stmt::parse(7, ""),
            Err(Error::MalformedInstruction { ref reason, .. }) if reason.contains("address 07")
        ));
    }

    #[test]
    fn malformed() {
        for code in [
            "",
            "A B C D",
            "HLT 5",
            "DONE OUT 5",
            "ADD",
            "LOOP BRA",
        ] {
            assert!(
                matches!(Stmt::parse(7, code), Err(Error::MalformedInstruction { idx: 7, .. })),
                "{:?}",
                code
            );
        }
    }
}
