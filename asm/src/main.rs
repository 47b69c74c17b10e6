mod util;

use color_print::cprintln;
use lmcasm::{codegen, normalize, resolver};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {author}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(author, version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file
    #[clap(default_value = "main.lmc")]
    input: String,

    /// Dump resolved listing
    #[clap(short, long)]
    dump: bool,

    /// Print the memory image as a 10x10 grid
    #[clap(short, long)]
    memory: bool,
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    println!("LMC Assembler");

    println!("1. Read File");
    println!("  < {}", args.input);
    let source = match std::fs::read_to_string(&args.input) {
        Ok(source) => source,
        Err(err) => {
            cprintln!("<r,s>Failed to open File</>: {}: {}", args.input, err);
            std::process::exit(1);
        }
    };

    println!("2. Normalize & Resolve Labels");
    let normalized = normalize(&source);
    let resolution = match resolver::resolve(&normalized) {
        Ok(resolution) => resolution,
        Err(err) => {
            err.print_diag(&args.input);
            std::process::exit(1);
        }
    };
    for warning in &resolution.warnings {
        warning.print_diag(&args.input);
    }
    println!(
        "  {} lines, {} labels",
        resolution.lines.len(),
        resolution.labels.len()
    );

    println!("3. Generate Memory");
    let memory = match codegen::generate(&resolution.lines) {
        Ok(memory) => memory,
        Err(err) => {
            err.print_diag(&args.input);
            std::process::exit(1);
        }
    };

    if args.dump {
        util::print_dump(&args.input, &resolution.lines, &resolution.labels, &memory);
    }
    if args.memory {
        print!("{}", memory.cformat());
    }
}
