use color_print::cformat;

use crate::inst::Word;

/// Number of cells, and therefore the number of valid addresses.
pub const SIZE: usize = 100;

/// The 100-cell store shared by code and data. Every cell starts at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory([Word; SIZE]);

impl Memory {
    pub fn new() -> Self {
        Memory([0; SIZE])
    }

    pub fn get(&self, addr: impl Into<usize>) -> Option<Word> {
        self.0.get(addr.into()).copied()
    }

    /// Returns `false` without writing when `addr` is outside the store.
    pub fn set(&mut self, addr: impl Into<usize>, val: Word) -> bool {
        match self.0.get_mut(addr.into()) {
            Some(cell) => {
                *cell = val;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn cells(&self) -> &[Word] {
        &self.0
    }

    /// Zero-padded three-digit text of every cell.
    pub fn words(&self) -> Vec<String> {
        self.0.iter().map(|w| fmt_word(*w)).collect()
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

/// Text form of a cell. Values outside 000-999 can only come from `STA` at run time.
pub fn fmt_word(word: Word) -> String {
    if word < 0 {
        format!("-{:0>3}", -(word as i64))
    } else {
        format!("{:0>3}", word)
    }
}

impl Memory {
    /// 10x10 grid, row `r` holding addresses `r0`-`r9`.
    pub fn cformat(&self) -> String {
        let mut out = String::new();
        out.push_str(&cformat!("<blue>    |</>"));
        for col in 0..10 {
            out.push_str(&cformat!("<blue>  {:>2} </>", col));
        }
        out.push('\n');
        out.push_str(&cformat!("<blue>----+{}</>\n", "-".repeat(50)));
        for (row, cells) in self.0.chunks(10).enumerate() {
            out.push_str(&cformat!("<blue> {:>1}0 |</>", row));
            for word in cells {
                let text = fmt_word(*word);
                if *word == 0 {
                    out.push_str(&format!(" {:>4}", text));
                } else {
                    out.push_str(&cformat!(" <y>{:>4}</>", text));
                }
            }
            out.push('\n');
        }
        out
    }
}
