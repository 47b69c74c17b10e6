pub mod dump;
pub mod trace;

use arch::inst::Word;

use crate::model::State;

/// Observer called around the fetch-execute loop. Hooks only look at the state.
pub trait Hook {
    fn init(&mut self, _state: &State) {}
    /// Called after every completed cycle with the address and word that were fetched.
    fn exec(&mut self, time: u64, addr: u8, code: Word, state: &State);
}
