use super::whitespace::{is_whitespace, trim};

/// Splits command content into whitespace-delimited arguments.
///
/// Double quotes group text containing whitespace into one argument and may
/// produce an empty argument (`""`). A backslash makes the next character
/// literal, inside or outside quotes. An unterminated quote or a trailing
/// backslash never fails; whatever was collected is emitted as the last
/// argument.
///
/// ```
/// use chatcmd_engine::parsing::split_args;
///
/// assert_eq!(split_args(r#""java" "foo bar" 2"#), vec!["java", "foo bar", "2"]);
/// ```
pub fn split_args(content: &str) -> Vec<String> {
    let mut args = Vec::new();
    if trim(content).is_empty() {
        return args;
    }

    let mut in_quotes = false;
    let mut escape_next = false;
    let mut buf = String::new();

    for c in content.chars() {
        if escape_next {
            buf.push(c);
            escape_next = false;
            continue;
        }

        if is_whitespace(c) && !in_quotes {
            if !buf.is_empty() {
                args.push(std::mem::take(&mut buf));
            }
            continue;
        }

        match c {
            '"' => {
                if in_quotes {
                    args.push(std::mem::take(&mut buf));
                }
                in_quotes = !in_quotes;
            }
            '\\' => escape_next = true,
            _ => buf.push(c),
        }
    }

    if !buf.is_empty() {
        args.push(buf);
    }

    args
}
