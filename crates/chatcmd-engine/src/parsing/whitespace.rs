/// Whitespace that separates the command name and arguments.
///
/// ASCII controls `\t`, `\n`, `\u{B}`, `\u{C}`, `\r` and the separators
/// `\u{1C}`..=`\u{1F}`, plus Unicode space, line and paragraph separators.
/// Non-breaking spaces (`\u{A0}`, `\u{2007}`, `\u{202F}`) and `\u{85}` are not
/// whitespace, so `/define\u{A0}java` is a single word.
pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{B}'
            | '\u{C}'
            | '\r'
            | '\u{1C}'..='\u{1F}'
            | ' '
            | '\u{1680}'
            | '\u{2000}'..='\u{2006}'
            | '\u{2008}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// Trims control characters and ASCII space from both ends.
///
/// Unicode spaces such as `\u{3000}` are kept.
pub fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ')
}
