// Word splitting shared by the camelCase and dot.case formatters

/// Whitespace as ECMAScript defines it: the `WhiteSpace` and
/// `LineTerminator` sets. Unlike [`char::is_whitespace`] this includes the
/// byte order mark U+FEFF and excludes NEL U+0085.
pub fn is_whitespace(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Characters that separate words: whitespace, `-` and `_`.
pub fn is_separator(ch: char) -> bool {
    is_whitespace(ch) || ch == '-' || ch == '_'
}

/// Split `text` into its words, in order.
///
/// Any run of separators counts as a single boundary, leading and trailing
/// separators are ignored, and every returned word is non-empty. Case is
/// left untouched.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split(is_separator)
        .filter(|word| !word.is_empty())
        .collect()
}
