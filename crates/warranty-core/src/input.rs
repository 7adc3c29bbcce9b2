//! Input masks for the code entry and phone fields.
//!
//! Both masks replace the field content on every edit: strip what does
//! not belong, truncate, re-insert separators at fixed offsets.

use crate::code::{CODE_LEN, GROUP_LEN, SEPARATOR};

/// Maximum digits in a national mobile number.
const PHONE_MAX_DIGITS: usize = 11;

/// Format raw text as a warranty code.
///
/// Uppercases, drops everything outside `A-Z`/`0-9`, truncates to 16
/// characters and inserts a hyphen after every complete group of four.
/// Idempotent: formatting an already-formatted value yields the same
/// string.
pub fn format_code(raw: &str) -> String {
    let cleaned = raw
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        .take(CODE_LEN);

    let mut out = String::with_capacity(CODE_LEN + 3);
    for (i, c) in cleaned.enumerate() {
        if i > 0 && i % GROUP_LEN == 0 {
            out.push(SEPARATOR);
        }
        out.push(c);
    }
    out
}

/// Format raw text as a national mobile number.
///
/// Strips non-digits, truncates to 11 digits, then hyphenates at fixed
/// offsets: no separator under 4 digits, one after the 3rd digit up to
/// 7 digits, two (after the 3rd and 7th) beyond that. Never produces a
/// trailing separator.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(PHONE_MAX_DIGITS)
        .collect();

    match digits.len() {
        0..=3 => digits,
        4..=7 => format!("{}-{}", &digits[..3], &digits[3..]),
        _ => format!("{}-{}-{}", &digits[..3], &digits[3..7], &digits[7..]),
    }
}

/// Editable state of the code entry field.
///
/// Owns the formatted value and the cursor position, so edits are applied
/// without consulting any ambient widget state. The cursor moves to the
/// end of the content after every transform; users enter these codes
/// left-to-right, so relative cursor tracking is not worth its weight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeInput {
    value: String,
    cursor: usize,
}

impl CodeInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current formatted field content.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position, in characters from the start of the value.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the whole field content, e.g. a paste over a selection.
    pub fn set(&mut self, text: &str) {
        self.value = format_code(text);
        self.cursor = self.value.chars().count();
    }

    /// Insert typed text at the cursor.
    pub fn insert(&mut self, text: &str) {
        let chars: Vec<char> = self.value.chars().collect();
        let at = self.cursor.min(chars.len());
        let mut next: String = chars[..at].iter().collect();
        next.push_str(text);
        next.extend(&chars[at..]);
        self.set(&next);
    }

    /// Delete one character before the cursor.
    ///
    /// When the character before the cursor is a separator, the deletion
    /// skips it and removes the preceding code character in the same
    /// step; the user is never stuck against a separator.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut chars: Vec<char> = self.value.chars().collect();
        let mut at = self.cursor.min(chars.len());
        if at == 0 {
            return;
        }
        if chars[at - 1] == SEPARATOR {
            at -= 1;
        }
        if at == 0 {
            return;
        }
        chars.remove(at - 1);
        let remaining: String = chars.into_iter().collect();
        self.set(&remaining);
    }
}
