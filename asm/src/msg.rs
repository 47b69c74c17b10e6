use color_print::cprintln;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Warn,
    Note,
}

/// Where a diagnostic points: the file and one source line.
/// A line's zero-based index is also the mailbox it is assembled into.
#[derive(Debug, Clone, Copy)]
pub struct Span<'a> {
    pub file: &'a str,
    pub idx: usize,
    pub text: &'a str,
}

impl<'a> Span<'a> {
    pub fn new(file: &'a str, idx: usize, text: &'a str) -> Self {
        Span { file, idx, text }
    }
}

/// Print a rustc-style diagnostic: headline, location, then the line in a gutter
/// labelled with its line number and mailbox address.
pub fn report(level: Level, msg: &str, span: Span) {
    match level {
        Level::Error => cprintln!("<red,bold>error</>: {}", msg),
        Level::Warn => cprintln!("<yellow,bold>warn</>: {}", msg),
        Level::Note => cprintln!("<green,bold>note</>: {}", msg),
    }
    let line = span.idx + 1;
    cprintln!("     <blue>--></> <underline>{}:{}</>", span.file, line);
    cprintln!("      <blue>|</>");
    cprintln!(" <blue>{:>4} |</> <dim>[{:0>2}]</> {}", line, span.idx, span.text);
    cprintln!("      <blue>|</>");
}
