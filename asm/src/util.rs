use arch::{
    inst::Inst,
    mem::{fmt_word, Memory},
};
use color_print::cformat;
use lmcasm::{Labels, Resolved};

pub fn print_dump(path: &str, lines: &[Resolved], labels: &Labels, memory: &Memory) {
    println!(
        "+------+------+-----+------------+{}",
        "-".repeat(30)
    );
    println!("| {:<59} |", path);
    println!(
        "+------+------+-----+------------+{}",
        "-".repeat(30)
    );
    for line in lines {
        let word = memory.get(line.addr).unwrap_or_default();
        // Data cells may decode to anything; only show the decoded form for code.
        let decoded = match line.mnemonic {
            arch::op::Mnemonic::DAT => cformat!("<c>DAT</>   "),
            _ => Inst::from_word(word)
                .map(|inst| inst.cformat())
                .unwrap_or_else(|_| cformat!("<r,s>??????</>")),
        };
        let label = labels
            .iter()
            .find(|(_, label)| label.addr == line.addr)
            .map(|(name, _)| cformat!("<g>{}</>", name))
            .unwrap_or_default();
        println!(
            "| {:>4} |  {:0>2}  | {} | {} | {:<16} {}",
            line.addr as usize + 1,
            line.addr,
            fmt_word(word),
            decoded,
            line.to_string(),
            label
        );
    }
    println!(
        "+------+------+-----+------------+{}",
        "-".repeat(30)
    );
}
