use clap::Parser;
use color_print::cprintln;

use arch::mem::fmt_word;
use lmcemu::{
    hooks::dump::Dump,
    io::{Console, Port, Queue},
    Computer, Error,
};

#[derive(Parser, Debug)]
#[clap(
    name = "LMC Emulator",
    version = "v1.0.0",
    about = "Emulator for the Little Man Computer"
)]
struct Args {
    /// Stop after this many cycles
    #[arg(short = 't', long)]
    tmax: Option<u64>,

    /// YAML file: instruction address -> memory cells to print
    #[arg(short, long)]
    dump_cfg: Option<String>,

    /// Print registers after every cycle
    #[arg(short = 'a', long)]
    dump_all: bool,

    /// Input values for INP, comma separated. Prompts on stdin when omitted.
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
    input: Option<Vec<i32>>,

    #[arg(default_value = "main.lmc")]
    input_file: String,
}

fn main() {
    let args = Args::parse();
    println!("LMC Emulator");

    println!("+-----------------------------------------------+");
    println!("| {:<45} |", args.input_file);
    println!("+-----------------------------------------------+");

    // ------------------------------------------------------------------------
    // Assemble
    let source = match std::fs::read_to_string(&args.input_file) {
        Ok(source) => source,
        Err(err) => fail(Error::FileOpen(args.input_file.clone(), err)),
    };
    let program = match lmcasm::assemble(&source) {
        Ok(program) => program,
        Err(err) => {
            err.print_diag(&args.input_file);
            std::process::exit(1);
        }
    };
    for warning in &program.warnings {
        warning.print_diag(&args.input_file);
    }

    // ------------------------------------------------------------------------
    // Initialize hooks
    println!("[INIT]");
    let mut dump = match Dump::arg(args.dump_cfg, args.dump_all) {
        Ok(dump) => dump,
        Err(err) => fail(err),
    };
    let mut port: Box<dyn Port> = match args.input {
        Some(values) => Box::new(Queue::new(values)),
        None => Box::new(Console::stdin()),
    };

    // ------------------------------------------------------------------------
    // Main loop
    let mut computer = Computer::new(program.memory)
        .hook(&mut dump)
        .tmax(args.tmax);
    let result = computer.run(port.as_mut());

    println!("=================================================");
    match result {
        Ok(output) => println!("Output: [{}]", output.join(", ")),
        Err(err) => {
            cprintln!("<red,bold>error</>: {}", err);
            let state = computer.state();
            if let Some(addr) = err.addr() {
                let word = state.get(addr).unwrap_or_default();
                cprintln!("     <blue>--></> <underline>{:0>2}: {}</>", addr, fmt_word(word));
            }
            print!("{}", serde_yaml::to_string(&state.snapshot()).unwrap_or_default());
            println!("Output: [{}]", state.output().join(", "));
            std::process::exit(1);
        }
    }
}

fn fail(err: Error) -> ! {
    cprintln!("<red,bold>error</>: {}", err);
    std::process::exit(1);
}
