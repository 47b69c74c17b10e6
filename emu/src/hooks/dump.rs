use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;

use arch::{
    inst::{Inst, Word},
    mem::fmt_word,
};
use color_print::cprintln;
use serde::{Deserialize, Serialize};

use super::Hook;
use crate::{error::Error, model::State};

/// Prints registers (and selected memory cells) after chosen instructions.
#[derive(Debug)]
pub struct Dump {
    file: Option<String>,
    all: bool,
    list: List,
}

/// Address of the instruction -> what to print after it runs.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct List(pub HashMap<u8, Config>);

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub memory: Vec<u8>,
}

impl Dump {
    pub fn arg(file: Option<String>, all: bool) -> Result<Self, Error> {
        match file {
            Some(fname) => {
                let file = File::open(&fname).map_err(|e| Error::FileOpen(fname.clone(), e))?;
                let list: List = serde_yaml::from_reader(BufReader::new(file))
                    .map_err(|e| Error::DumpConfig(fname.clone(), e))?;
                Ok(Self {
                    file: Some(fname),
                    list,
                    all,
                })
            }
            None => Ok(Self {
                file,
                list: List::default(),
                all,
            }),
        }
    }

    pub fn parse(yaml: &str, all: bool) -> Result<Self, Error> {
        let list: List =
            serde_yaml::from_str(yaml).map_err(|e| Error::DumpConfig("<inline>".into(), e))?;
        Ok(Self {
            file: None,
            list,
            all,
        })
    }

    fn get(&self, addr: u8) -> Option<&Config> {
        self.list.0.get(&addr)
    }
}

impl Hook for Dump {
    fn init(&mut self, _state: &State) {
        if self.all {
            println!(" * Dump all");
        }
        if let Some(fname) = &self.file {
            println!(" * Dump[{}] {:?}", self.list.0.len(), fname);
        }
    }

    fn exec(&mut self, time: u64, addr: u8, code: Word, state: &State) {
        if let Some(cfg) = self.get(addr) {
            print_reg(time, addr, code, state);
            print_memory(state, &cfg.memory);
        } else if self.all {
            print_reg(time, addr, code, state);
        }
    }
}

pub fn print_reg(time: u64, addr: u8, code: Word, state: &State) {
    let snap = state.snapshot();
    let inst = match Inst::from_word(code) {
        Ok(inst) => inst.cformat(),
        Err(_) => "??????".to_string(),
    };
    cprintln!(
        " [{:0>4}] <g>{:0>2}</> {} {} | pc: {:0>2} | acc: {:>5} | ir: {} | ar: {:0>2} |",
        time,
        addr,
        fmt_word(code),
        inst,
        snap.pc,
        snap.acc,
        snap.ir,
        snap.ar
    );
}

pub fn print_memory(state: &State, addrs: &[u8]) {
    for addr in addrs {
        match state.get(*addr) {
            Some(word) => println!("        | {:0>2} : {}", addr, fmt_word(word)),
            None => cprintln!("        | {:0>2} : <r>out of range</>", addr),
        }
    }
}
