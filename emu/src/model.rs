use arch::inst::{self, Inst, Word};
use arch::mem::Memory;
use serde::Serialize;

use crate::{error::Error, io::Port};

/// Everything one run owns: the memory image and the registers.
#[derive(Debug, Clone)]
pub struct State {
    memory: Memory,
    pc: u8,
    acc: i32,
    ir: u8,
    ar: u8,
    output: Vec<String>,
    cycles: u64,
    halted: bool,
}

/// Register values after a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub cycles: u64,
    pub pc: u8,
    pub acc: i32,
    pub ir: u8,
    pub ar: u8,
    pub halted: bool,
}

// Memory access
impl State {
    pub fn get(&self, addr: u8) -> Option<Word> {
        self.memory.get(addr)
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn pc(&self) -> u8 {
        self.pc
    }

    pub fn acc(&self) -> i32 {
        self.acc
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cycles: self.cycles,
            pc: self.pc,
            acc: self.acc,
            ir: self.ir,
            ar: self.ar,
            halted: self.halted,
        }
    }
}

impl State {
    pub fn new(memory: Memory) -> Self {
        State {
            memory,
            pc: 0,
            acc: 0,
            ir: 0,
            ar: 0,
            output: vec![],
            cycles: 0,
            halted: false,
        }
    }

    pub fn is_terminated(&self) -> bool {
        self.halted
    }

    /// One fetch-decode-execute cycle. Returns the fetched address and word.
    /// Fails with [`Error::Halted`] once `HLT` has run.
    pub fn exec(&mut self, port: &mut dyn Port) -> Result<(u8, Word), Error> {
        if self.halted {
            return Err(Error::Halted { pc: self.pc });
        }
        let addr = self.pc;
        let word = self.memory.get(addr).ok_or(Error::OutOfRangeAddress {
            addr: addr as usize,
        })?;
        self.pc += 1;
        self.cycles += 1;

        let invalid = |source| Error::InvalidOpcode { addr, word, source };
        let (ir, ar) = inst::split(word).map_err(invalid)?;
        self.ir = ir;
        self.ar = ar;
        let inst = Inst::from_fields(ir, ar).map_err(invalid)?;

        match inst {
            Inst::HLT() => self.halted = true,
            Inst::ADD(a) => {
                let val = self.load(a)?;
                self.acc = self
                    .acc
                    .checked_add(val)
                    .ok_or(Error::ArithmeticOverflow { addr, word })?;
            }
            Inst::SUB(a) => {
                let val = self.load(a)?;
                self.acc = self
                    .acc
                    .checked_sub(val)
                    .ok_or(Error::ArithmeticOverflow { addr, word })?;
            }
            Inst::STA(a) => self.store(a, self.acc)?,
            Inst::LDA(a) => self.acc = self.load(a)?,
            Inst::BRA(a) => self.pc = a,
            Inst::BRZ(a) => {
                if self.acc == 0 {
                    self.pc = a;
                }
            }
            Inst::BRP(a) => {
                if self.acc >= 0 {
                    self.pc = a;
                }
            }
            Inst::INP() => self.acc = port.read().ok_or(Error::MissingInput { addr })?,
            Inst::OUT() => self.emit(self.acc.to_string(), port),
            Inst::OTC() => {
                let c = u32::try_from(self.acc)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or(Error::InvalidCharacter {
                        addr,
                        value: self.acc,
                    })?;
                self.emit(c.to_string(), port);
            }
        }
        Ok((addr, word))
    }

    fn load(&self, addr: u8) -> Result<Word, Error> {
        self.memory.get(addr).ok_or(Error::OutOfRangeAddress {
            addr: addr as usize,
        })
    }

    fn store(&mut self, addr: u8, val: Word) -> Result<(), Error> {
        match self.memory.set(addr, val) {
            true => Ok(()),
            false => Err(Error::OutOfRangeAddress { addr: addr as usize }),
        }
    }

    fn emit(&mut self, token: String, port: &mut dyn Port) {
        port.emit(&token);
        self.output.push(token);
    }
}
