use arch::mem::Memory;

use crate::{error::Error, hooks::Hook, io::Port, model::State};

/// A machine plus the hooks observing it. Build one per run.
pub struct Computer<'a> {
    state: State,
    hooks: Vec<&'a mut dyn Hook>,
    tmax: Option<u64>,
}

impl<'a> Computer<'a> {
    pub fn new(memory: Memory) -> Self {
        Computer {
            state: State::new(memory),
            hooks: vec![],
            tmax: None,
        }
    }

    pub fn hook(mut self, hook: &'a mut dyn Hook) -> Self {
        self.hooks.push(hook);
        self
    }

    /// Give up with [`Error::CycleLimit`] after this many cycles.
    pub fn tmax(mut self, tmax: Option<u64>) -> Self {
        self.tmax = tmax;
        self
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn into_state(self) -> State {
        self.state
    }

    /// Execute one cycle and notify the hooks.
    pub fn step(&mut self, port: &mut dyn Port) -> Result<(), Error> {
        let time = self.state.cycles();
        let (addr, code) = self.state.exec(port)?;
        for hook in self.hooks.iter_mut() {
            hook.exec(time, addr, code, &self.state);
        }
        Ok(())
    }

    /// Run until `HLT`. Returns the output sequence.
    pub fn run(&mut self, port: &mut dyn Port) -> Result<Vec<String>, Error> {
        for hook in self.hooks.iter_mut() {
            hook.init(&self.state);
        }

        let tmax = self.tmax.unwrap_or(u64::MAX);
        while !self.state.is_terminated() {
            if self.state.cycles() >= tmax {
                return Err(Error::CycleLimit(tmax));
            }
            self.step(port)?;
        }
        Ok(self.state.output().to_vec())
    }
}

/// Run a memory image against a fixed list of inputs.
pub fn run(memory: Memory, inputs: impl IntoIterator<Item = i32>) -> Result<Vec<String>, Error> {
    let mut port = crate::io::Queue::new(inputs);
    Computer::new(memory).run(&mut port)
}
