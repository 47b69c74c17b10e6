use thiserror::Error;

use crate::msg::{report, Level, Span};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Malformed instruction: {reason}")]
    MalformedInstruction {
        idx: usize,
        line: String,
        reason: String,
    },

    #[error("Unknown mnemonic: `{mnemonic}`")]
    UnknownMnemonic {
        idx: usize,
        line: String,
        mnemonic: String,
    },

    #[error("Undefined label: `{label}`")]
    UnresolvedLabel {
        idx: usize,
        line: String,
        label: String,
    },

    #[error("Address out of range: `{value}` (expected 00-99)")]
    OutOfRangeAddress {
        idx: usize,
        line: String,
        value: String,
    },

    #[error("Invalid data literal: `{value}` (expected 0-999)")]
    InvalidLiteral {
        idx: usize,
        line: String,
        value: String,
    },
}

impl Error {
    /// Zero-based line index and text of the offending line.
    pub fn location(&self) -> (usize, &str) {
        match self {
            Error::MalformedInstruction { idx, line, .. }
            | Error::UnknownMnemonic { idx, line, .. }
            | Error::UnresolvedLabel { idx, line, .. }
            | Error::OutOfRangeAddress { idx, line, .. }
            | Error::InvalidLiteral { idx, line, .. } => (*idx, line),
        }
    }

    /// Print with file location and the offending line.
    pub fn print_diag(&self, file: &str) {
        let (idx, line) = self.location();
        report(Level::Error, &self.to_string(), Span::new(file, idx, line));
    }
}

/// Non-fatal findings collected while assembling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    RedefinedLabel {
        name: String,
        idx: usize,
        line: String,
        prev_idx: usize,
        prev_line: String,
    },
}

impl Warning {
    pub fn print_diag(&self, file: &str) {
        match self {
            Warning::RedefinedLabel {
                name,
                idx,
                line,
                prev_idx,
                prev_line,
            } => {
                report(
                    Level::Warn,
                    &format!("Re-defined label: `{}`", name),
                    Span::new(file, *idx, line),
                );
                report(
                    Level::Note,
                    "Already defined here. The later definition wins.",
                    Span::new(file, *prev_idx, prev_line),
                );
            }
        }
    }
}
