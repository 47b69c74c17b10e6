/// Strip `//` comments and redundant spaces from every line.
///
/// Blank lines keep their place (a line's index is its address), but the
/// empty lines a trailing newline leaves at the end of the text are dropped.
pub fn normalize(text: &str) -> String {
    let mut lines: Vec<String> = text.split('\n').map(normalize_line).collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

fn normalize_line(raw: &str) -> String {
    let raw = raw.strip_suffix('\r').unwrap_or(raw);
    let code = match raw.split_once("//") {
        Some((code, _comment)) => code,
        None => raw,
    };
    code.split([' ', '\t'])
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! case {
        ($($name:ident: $raw:expr => $expect:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    assert_eq!(normalize($raw), $expect);
                }
            )*
        }
    }

    case! {
        plain: "INP\nOUT\nHLT" => "INP\nOUT\nHLT",
        comment: "INP // read\nHLT" => "INP\nHLT",
        comment_only_line: "// header\nHLT" => "\nHLT",
        collapse_spaces: "LOOP   LDA    ONE" => "LOOP LDA ONE",
        trim_edges: "  ADD ONE  " => "ADD ONE",
        tabs: "\tLOOP\tBRA LOOP" => "LOOP BRA LOOP",
        crlf: "INP\r\nOUT\r\n" => "INP\nOUT",
        trailing_newlines: "HLT\n\n\n" => "HLT",
        blank_line_kept: "INP\n\nHLT" => "INP\n\nHLT",
        slash_inside: "ONE DAT 1 // a // b" => "ONE DAT 1",
        single_slash: "ONE DAT 1 / 2" => "ONE DAT 1 / 2",
        empty: "" => "",
    }

    #[test]
    fn idempotent() {
        let sources = [
            "  INP  // x\n\n STA   VALUE \nHLT\n\n",
            "A\n\n",
            "\t\tLOOP BRA LOOP\r\n",
            "",
        ];
        for src in sources {
            let once = normalize(src);
            assert_eq!(normalize(&once), once);
        }
    }
}
