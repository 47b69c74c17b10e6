//! Assembler for the Little Man Computer.
//!
//! Source text goes through three stages:
//! 1. [`normalize`] strips comments and redundant whitespace.
//! 2. [`resolver::resolve`] classifies every line, collects labels and
//!    substitutes them with addresses.
//! 3. [`codegen::generate`] encodes the resolved lines into a [`Memory`] image.

pub mod codegen;
pub mod error;
pub mod label;
pub mod msg;
pub mod normalize;
pub mod parser;
pub mod resolver;

use arch::mem::Memory;

pub use error::{Error, Warning};
pub use label::Labels;
pub use normalize::normalize;
pub use resolver::Resolved;

/// Everything produced by one assembly.
#[derive(Debug, Clone)]
pub struct Program {
    pub normalized: String,
    pub lines: Vec<Resolved>,
    pub labels: Labels,
    pub warnings: Vec<Warning>,
    pub memory: Memory,
}

impl Program {
    /// The resolved lines in their text form.
    pub fn listing(&self) -> Vec<String> {
        self.lines.iter().map(|line| line.to_string()).collect()
    }
}

pub fn assemble(source: &str) -> Result<Program, Error> {
    let normalized = normalize(source);
    let resolution = resolver::resolve(&normalized)?;
    let memory = codegen::generate(&resolution.lines)?;
    Ok(Program {
        normalized,
        lines: resolution.lines,
        labels: resolution.labels,
        warnings: resolution.warnings,
        memory,
    })
}
