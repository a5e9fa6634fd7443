use super::tokenizer::{is_separator, split_words};
use crate::error::CaseError;
use crate::input::validate_text;

/// Convert `text` to kebab-case.
///
/// Lower-to-upper transitions (`fooBar`) become word boundaries, runs of
/// whitespace, underscores and hyphens collapse into one hyphen, and anything
/// that is not an ASCII letter, digit or hyphen is dropped. Never fails:
/// degenerate input such as `""` or `"!!!"` yields an empty string.
pub fn to_kebab_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    let mut pending_hyphen = false;
    let mut prev: Option<char> = None;

    for ch in text.chars() {
        if let Some(p) = prev {
            if p.is_ascii_lowercase() && ch.is_ascii_uppercase() {
                pending_hyphen = true;
            }
        }
        prev = Some(ch);

        if is_separator(ch) {
            pending_hyphen = true;
        } else if ch.is_ascii_alphanumeric() {
            // Leading hyphens are stripped, inner runs collapse to one
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(ch.to_ascii_lowercase());
        }
    }

    out
}

/// Convert `text` to camelCase.
///
/// The first word is lowercased, every following word is lowercased and
/// then has its first character uppercased.
pub fn camel_case(text: &str) -> Result<String, CaseError> {
    let words = validated_words(text)?;
    let mut out = String::with_capacity(text.len());

    for (i, word) in words.iter().enumerate() {
        let lower = word.to_lowercase();
        if i == 0 {
            out.push_str(&lower);
            continue;
        }
        let mut chars = lower.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }

    Ok(out)
}

/// Convert `text` to dot.case: every word lowercased, joined with `.`.
pub fn dot_case(text: &str) -> Result<String, CaseError> {
    let words = validated_words(text)?;
    Ok(words
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("."))
}

fn validated_words(text: &str) -> Result<Vec<&str>, CaseError> {
    let text = validate_text(text)?;
    let words = split_words(text);
    if words.is_empty() {
        return Err(CaseError::NoValidWords);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_camel_boundaries() {
        assert_eq!(to_kebab_case("fooBarBaz"), "foo-bar-baz");
        assert_eq!(to_kebab_case("PascalCase"), "pascal-case");
        // only a lower-to-upper pair is a boundary
        assert_eq!(to_kebab_case("XMLHttpRequest"), "xmlhttp-request");
        assert_eq!(to_kebab_case("aBC"), "a-bc");
    }

    #[test]
    fn test_kebab_separators() {
        assert_eq!(to_kebab_case("first name"), "first-name");
        assert_eq!(to_kebab_case("SCREEN_NAME"), "screen-name");
        assert_eq!(to_kebab_case("  many   spaces__and--dashes "), "many-spaces-and-dashes");
        assert_eq!(to_kebab_case("-leading and trailing-"), "leading-and-trailing");
    }

    #[test]
    fn test_kebab_drops_punctuation() {
        assert_eq!(to_kebab_case("hello, world!"), "hello-world");
        assert_eq!(to_kebab_case("v1.2.3"), "v123");
        // removal happens after boundary detection
        assert_eq!(to_kebab_case("a.B"), "ab");
        assert_eq!(to_kebab_case("a - . - b"), "a-b");
        assert_eq!(to_kebab_case("café au lait"), "caf-au-lait");
    }

    #[test]
    fn test_kebab_degenerate_input() {
        assert_eq!(to_kebab_case(""), "");
        assert_eq!(to_kebab_case("   "), "");
        assert_eq!(to_kebab_case("!!!"), "");
        assert_eq!(to_kebab_case("---"), "");
    }

    #[test]
    fn test_unusual_whitespace() {
        assert_eq!(to_kebab_case("a\u{FEFF}b"), "a-b");
        assert_eq!(to_kebab_case("a\u{0085}b"), "ab");
        assert_eq!(camel_case("\u{FEFF}"), Err(CaseError::EmptyInput));
        assert_eq!(dot_case("\u{FEFF} \u{FEFF}"), Err(CaseError::EmptyInput));
        assert_eq!(dot_case("a\u{FEFF}b").unwrap(), "a.b");
        assert_eq!(camel_case("user\u{3000}id").unwrap(), "userId");
        // NEL is an ordinary character, not blank
        assert_eq!(dot_case("\u{0085}").unwrap(), "\u{0085}");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("first name").unwrap(), "firstName");
        assert_eq!(camel_case("user_id").unwrap(), "userId");
        assert_eq!(camel_case("SCREEN_NAME").unwrap(), "screenName");
        assert_eq!(camel_case("mobile-number").unwrap(), "mobileNumber");
    }

    #[test]
    fn test_camel_case_single_char_words() {
        assert_eq!(camel_case("a b c").unwrap(), "aBC");
        assert_eq!(camel_case("x").unwrap(), "x");
        assert_eq!(camel_case("point 3d").unwrap(), "point3d");
    }

    #[test]
    fn test_camel_case_does_not_split_humps() {
        assert_eq!(camel_case("fooBar baz").unwrap(), "foobarBaz");
    }

    #[test]
    fn test_camel_case_errors() {
        assert_eq!(camel_case(""), Err(CaseError::EmptyInput));
        assert_eq!(camel_case("   "), Err(CaseError::EmptyInput));
        assert_eq!(camel_case("---"), Err(CaseError::NoValidWords));
        assert_eq!(camel_case(" _ "), Err(CaseError::NoValidWords));
    }

    #[test]
    fn test_dot_case() {
        assert_eq!(dot_case("first name").unwrap(), "first.name");
        assert_eq!(dot_case("user_id").unwrap(), "user.id");
        assert_eq!(dot_case("SCREEN_NAME").unwrap(), "screen.name");
        assert_eq!(dot_case("mobile-number").unwrap(), "mobile.number");
    }

    #[test]
    fn test_dot_case_is_idempotent() {
        let once = dot_case("Some Mixed_input-here").unwrap();
        assert_eq!(once, "some.mixed.input.here");
        assert_eq!(dot_case(&once).unwrap(), once);
    }

    #[test]
    fn test_dot_case_keeps_existing_dots_inside_words() {
        // a dot is not a separator, so it survives untouched
        assert_eq!(dot_case("Version 1.2").unwrap(), "version.1.2");
    }

    #[test]
    fn test_dot_case_errors() {
        assert_eq!(dot_case("\t\n"), Err(CaseError::EmptyInput));
        assert_eq!(dot_case("_-_"), Err(CaseError::NoValidWords));
    }

    #[test]
    fn test_output_shape() {
        for input in ["first name", "  Leading space", "MIXED-case_Input here", "x_y_z"] {
            let camel = camel_case(input).unwrap();
            assert!(!camel.chars().any(|c| c.is_whitespace() || c == '-' || c == '_'));
            assert!(camel.chars().next().map_or(true, |c| !c.is_uppercase()));

            let dotted = dot_case(input).unwrap();
            let segments: Vec<_> = dotted.split('.').collect();
            assert_eq!(segments.len(), split_words(input).len());
            assert!(segments.iter().all(|s| *s == s.to_lowercase()));
        }
    }
}
