use std::fmt;

use arch::{mem, op::Mnemonic};
use color_print::cformat;

use crate::{
    error::{Error, Warning},
    label::Labels,
    parser::Stmt,
};

/// An instruction after label substitution: `<addr> <mnemonic> [<operand>]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub addr: u8,
    pub mnemonic: Mnemonic,
    pub operand: Option<String>,
}

impl fmt::Display for Resolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0>2} {}", self.addr, self.mnemonic)?;
        if let Some(operand) = &self.operand {
            write!(f, " {}", operand)?;
        }
        Ok(())
    }
}

impl Resolved {
    pub fn cformat(&self) -> String {
        cformat!(
            "<g>{:0>2}</> <r>{:<4}</><y>{}</>",
            self.addr,
            self.mnemonic.to_string(),
            self.operand.as_deref().unwrap_or("")
        )
    }
}

#[derive(Debug, Clone)]
pub struct Resolution {
    pub lines: Vec<Resolved>,
    pub labels: Labels,
    pub warnings: Vec<Warning>,
}

/// Two passes over normalized text. The first classifies every line and
/// collects labels, the second substitutes label operands with addresses,
/// so a label may be used before the line defining it.
pub fn resolve(text: &str) -> Result<Resolution, Error> {
    let source: Vec<&str> = match text {
        "" => vec![],
        text => text.split('\n').collect(),
    };

    // 1. Classify lines & collect labels
    let mut labels = Labels::new();
    let mut warnings = vec![];
    let mut stmts = Vec::with_capacity(source.len());
    for (idx, code) in source.iter().enumerate() {
        let addr = match u8::try_from(idx) {
            Ok(addr) if idx < mem::SIZE => addr,
            _ => {
                return Err(Error::OutOfRangeAddress {
                    idx,
                    line: code.to_string(),
                    value: idx.to_string(),
                })
            }
        };
        let stmt = Stmt::parse(idx, code)?;
        if let Some(name) = &stmt.label {
            if let Some(prev) = labels.insert(name.clone(), idx, addr) {
                warnings.push(Warning::RedefinedLabel {
                    name: name.clone(),
                    idx,
                    line: code.to_string(),
                    prev_idx: prev.line_idx,
                    prev_line: source[prev.line_idx].to_string(),
                });
            }
        }
        stmts.push((addr, stmt));
    }

    // 2. Substitute labels
    let mut lines = Vec::with_capacity(stmts.len());
    for (addr, stmt) in stmts {
        let operand = match stmt.operand {
            Some(operand) => Some(match labels.get_val(&operand) {
                Some(val) => format!("{:0>2}", val),
                None if is_numeric(&operand) => operand,
                None => {
                    return Err(Error::UnresolvedLabel {
                        idx: addr as usize,
                        line: source[addr as usize].to_string(),
                        label: operand,
                    })
                }
            }),
            None => None,
        };
        lines.push(Resolved {
            addr,
            mnemonic: stmt.mnemonic,
            operand,
        });
    }

    Ok(Resolution {
        lines,
        labels,
        warnings,
    })
}

fn is_numeric(s: &str) -> bool {
    s.parse::<i64>().is_ok()
}
