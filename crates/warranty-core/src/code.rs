//! Warranty code parsing and structural validation.

use crate::error::FormatError;
use serde::Serialize;
use std::fmt;

/// Raw code length, without separators.
pub const CODE_LEN: usize = 16;

/// Characters per display group.
pub const GROUP_LEN: usize = 4;

/// Number of display groups.
pub const GROUP_COUNT: usize = 4;

/// Separator between display groups.
pub const SEPARATOR: char = '-';

/// Fixed letter each display group must end in. Not a checksum, just a
/// lightweight format check printed on the certificate.
pub const GROUP_MARKERS: [char; GROUP_COUNT] = ['C', 'U', 'K', 'E'];

/// A structurally valid 16-character warranty code.
///
/// Holds only the raw uppercase alphanumeric characters; hyphens are
/// display formatting and never reach the backend. Construction goes
/// through [`WarrantyCode::parse`], so a value of this type always
/// satisfies the group and marker invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WarrantyCode(String);

impl WarrantyCode {
    /// Parse a formatted field value (hyphen-separated groups) into a code.
    ///
    /// Checks run in the order the code entry screen reports them:
    /// stripped length first, then group structure and markers.
    pub fn parse(formatted: &str) -> Result<Self, FormatError> {
        let raw: String = formatted
            .trim()
            .chars()
            .filter(|c| *c != SEPARATOR)
            .collect();

        if raw.chars().count() != CODE_LEN {
            return Err(FormatError::Length);
        }

        if !raw
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        {
            return Err(FormatError::Structure);
        }

        let groups: Vec<&str> = formatted.trim().split(SEPARATOR).collect();
        if groups.len() != GROUP_COUNT {
            return Err(FormatError::Structure);
        }
        for (group, marker) in groups.iter().zip(GROUP_MARKERS) {
            if group.len() != GROUP_LEN || !group.ends_with(marker) {
                return Err(FormatError::Structure);
            }
        }

        Ok(Self(raw))
    }

    /// The raw 16 characters, as sent to the backend.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display form: four hyphen-separated groups of four.
    pub fn formatted(&self) -> String {
        self.0
            .as_bytes()
            .chunks(GROUP_LEN)
            .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
            .collect::<Vec<_>>()
            .join(&SEPARATOR.to_string())
    }
}

impl fmt::Display for WarrantyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_marked_groups() {
        let code = WarrantyCode::parse("AAAC-BBBU-CCCK-DDDE").unwrap();
        assert_eq!(code.as_str(), "AAACBBBUCCCKDDDE");
        assert_eq!(code.formatted(), "AAAC-BBBU-CCCK-DDDE");
    }

    #[test]
    fn parse_accepts_digits_in_groups() {
        let code = WarrantyCode::parse("123C-456U-789K-000E").unwrap();
        assert_eq!(code.as_str(), "123C456U789K000E");
    }

    #[test]
    fn parse_rejects_wrong_markers() {
        assert_eq!(
            WarrantyCode::parse("AAAA-BBBB-CCCC-DDDD"),
            Err(FormatError::Structure)
        );
    }

    #[test]
    fn parse_rejects_short_input() {
        assert_eq!(WarrantyCode::parse("AAAC-BBBU"), Err(FormatError::Length));
        assert_eq!(WarrantyCode::parse(""), Err(FormatError::Length));
    }

    #[test]
    fn parse_rejects_long_input() {
        assert_eq!(
            WarrantyCode::parse("AAAC-BBBU-CCCK-DDDE-FFFC"),
            Err(FormatError::Length)
        );
    }

    #[test]
    fn parse_rejects_unseparated_raw_code() {
        // 16 correct characters but no group structure.
        assert_eq!(
            WarrantyCode::parse("AAACBBBUCCCKDDDE"),
            Err(FormatError::Structure)
        );
    }

    #[test]
    fn parse_rejects_lowercase() {
        assert_eq!(
            WarrantyCode::parse("aaac-bbbu-ccck-ddde"),
            Err(FormatError::Structure)
        );
    }

    #[test]
    fn parse_rejects_misplaced_separator() {
        assert_eq!(
            WarrantyCode::parse("AAACB-BBU-CCCK-DDDE"),
            Err(FormatError::Structure)
        );
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let code = WarrantyCode::parse("  AAAC-BBBU-CCCK-DDDE  ").unwrap();
        assert_eq!(code.as_str(), "AAACBBBUCCCKDDDE");
    }

    #[test]
    fn marker_must_be_last_in_each_group() {
        assert_eq!(
            WarrantyCode::parse("CAAA-UBBB-KCCC-EDDD"),
            Err(FormatError::Structure)
        );
    }

    #[test]
    fn serializes_as_raw_string() {
        let code = WarrantyCode::parse("AAAC-BBBU-CCCK-DDDE").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"AAACBBBUCCCKDDDE\"");
    }
}
