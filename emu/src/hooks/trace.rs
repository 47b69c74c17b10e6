use arch::inst::Word;

use super::Hook;
use crate::model::{Snapshot, State};

/// Records a snapshot of every cycle.
#[derive(Debug, Default)]
pub struct Trace {
    pub steps: Vec<(u8, Word, Snapshot)>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Hook for Trace {
    fn exec(&mut self, _time: u64, addr: u8, code: Word, state: &State) {
        self.steps.push((addr, code, state.snapshot()));
    }
}
