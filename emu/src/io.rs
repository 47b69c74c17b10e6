use std::collections::VecDeque;
use std::io::{BufRead, Write};

use arch::inst::Word;
use color_print::{cprint, cprintln};

/// The machine's only contact with the outside world.
pub trait Port {
    /// Next value for `INP`. `None` when the supply is exhausted.
    fn read(&mut self) -> Option<Word>;
    /// Called once for every `OUT` / `OTC` token.
    fn emit(&mut self, token: &str);
}

/// Pre-supplied inputs consumed front to back; emitted tokens are collected.
#[derive(Debug, Clone, Default)]
pub struct Queue {
    inputs: VecDeque<Word>,
    outputs: Vec<String>,
}

impl Queue {
    pub fn new(inputs: impl IntoIterator<Item = Word>) -> Self {
        Queue {
            inputs: inputs.into_iter().collect(),
            outputs: vec![],
        }
    }

    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl Port for Queue {
    fn read(&mut self) -> Option<Word> {
        self.inputs.pop_front()
    }

    fn emit(&mut self, token: &str) {
        self.outputs.push(token.to_string());
    }
}

/// Prompts on stdin for every `INP`, prints every token to stdout.
pub struct Console<R: BufRead> {
    reader: R,
}

impl Console<std::io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Console {
            reader: std::io::stdin().lock(),
        }
    }
}

impl<R: BufRead> Console<R> {
    pub fn new(reader: R) -> Self {
        Console { reader }
    }
}

impl<R: BufRead> Port for Console<R> {
    fn read(&mut self) -> Option<Word> {
        loop {
            cprint!("<c,s>INP</> >>> ");
            std::io::stdout().flush().ok()?;
            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) | Err(_) => return None,
                Ok(_) => match line.trim().parse::<Word>() {
                    Ok(val) => return Some(val),
                    Err(_) => cprintln!("<y>Not an integer</>: {:?}", line.trim()),
                },
            }
        }
    }

    fn emit(&mut self, token: &str) {
        cprintln!(" > <r,s>{}</>", token);
    }
}
