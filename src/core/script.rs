// src/core/script.rs
use unicode_script::{Script, UnicodeScript};

/// Cyrillic script and a letter (not a combining mark such as U+0483).
pub fn is_cyrillic_letter(ch: char) -> bool {
    ch.script() == Script::Cyrillic && ch.is_alphabetic()
}

/// Classifies a name by its first character only.
pub fn starts_cyrillic(s: &str) -> bool {
    s.chars().next().is_some_and(is_cyrillic_letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_first_char() {
        assert!(starts_cyrillic("Иванов"));
        assert!(starts_cyrillic("ёлкин"));
        assert!(!starts_cyrillic("Ivanov"));
        assert!(!starts_cyrillic("7Иванов"));
        assert!(!starts_cyrillic(""));
        assert!(!starts_cyrillic("\u{0483}"));
    }
}
