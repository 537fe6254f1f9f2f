// src/profile/surname.rs
//! Feminine → masculine surname forms.
//!
//! Suffixes are matched against the NFC-normalized input, case-sensitively,
//! as true suffixes. The `-ова/-ева/-ёва` and `-ина` checks both look at the
//! original string but trim the same buffer; the adjectival `-ая` check looks
//! at that buffer afterwards.
use crate::core::sanitize::normalize_name;
use crate::error::SurnameError;

const POSSESSIVE: [&str; 3] = ["ова", "ева", "ёва"];
const POSSESSIVE_IN: &str = "ина";
const ADJECTIVAL: &str = "ая";

/// `-ая` endings after these letters take `-ий` (Достоевская → Достоевский);
/// everything else takes `-ой` (Толстая → Толстой).
const SOFT_STEM_ENDINGS: [char; 7] = ['к', 'г', 'х', 'ж', 'ш', 'щ', 'ч'];

pub fn masculinize(last_name: &str) -> Result<String, SurnameError> {
    let original = normalize_name(last_name);
    if original.is_empty() {
        return Err(SurnameError::Empty);
    }

    let mut current = original.clone();

    if let Some(suffix) = POSSESSIVE.iter().copied().find(|s| original.ends_with(*s)) {
        require_stem(&original, suffix)?;
        current.pop();
    }
    if original.ends_with(POSSESSIVE_IN) {
        require_stem(&original, POSSESSIVE_IN)?;
        current.pop();
    }

    if current.ends_with(ADJECTIVAL) {
        require_stem(&current, ADJECTIVAL)?;
        current.truncate(current.len() - ADJECTIVAL.len());
        let ending = match current.chars().last() {
            Some(c) if SOFT_STEM_ENDINGS.contains(&c) => "ий",
            _ => "ой",
        };
        current.push_str(ending);
    }

    Ok(current)
}

fn require_stem(name: &str, suffix: &'static str) -> Result<(), SurnameError> {
    if name.chars().count() > suffix.chars().count() {
        Ok(())
    } else {
        Err(SurnameError::TooShort { surname: name.to_string(), suffix })
    }
}
