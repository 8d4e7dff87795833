//! Number format types

/// First id available to custom number formats in the style part
pub const FIRST_CUSTOM_FORMAT_ID: u32 = 164;

/// Number format for cell display
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumberFormat {
    /// General format (default)
    #[default]
    General,

    /// Built-in format by ID
    BuiltIn(u32),

    /// Custom format string
    Custom(String),
}

impl NumberFormat {
    /// 1 - 0
    pub const ID_NUMBER_INT: u32 = 1;
    /// 2 - 0.00
    pub const ID_NUMBER_DEC2: u32 = 2;
    /// 9 - 0%
    pub const ID_PERCENT_INT: u32 = 9;
    /// 10 - 0.00%
    pub const ID_PERCENT_DEC2: u32 = 10;
    /// 14 - mm-dd-yy
    pub const ID_DATE_SHORT: u32 = 14;
    /// 49 - @
    pub const ID_TEXT: u32 = 49;

    /// Create a number format from a format string
    ///
    /// A code that is one of the built-in codes becomes that built-in format,
    /// so both spellings of the same format compare equal.
    pub fn from_string<S: Into<String>>(format: S) -> Self {
        let format = format.into();
        match builtin_id_for_code(&format) {
            Some(id) => Self::from_id(id),
            None => NumberFormat::Custom(format),
        }
    }

    /// Create a built-in format by ID
    pub fn from_id(id: u32) -> Self {
        match id {
            0 => NumberFormat::General,
            id => NumberFormat::BuiltIn(id),
        }
    }

    /// Percentage (0%)
    pub fn percent() -> Self {
        NumberFormat::BuiltIn(Self::ID_PERCENT_INT)
    }

    /// Short date (mm-dd-yy)
    pub fn date_short() -> Self {
        NumberFormat::BuiltIn(Self::ID_DATE_SHORT)
    }

    /// Get the format string, if this format has one
    pub fn format_string(&self) -> Option<&str> {
        match self {
            NumberFormat::General => Some("General"),
            NumberFormat::BuiltIn(id) => builtin_format_string(*id),
            NumberFormat::Custom(s) => Some(s),
        }
    }

    /// The id this format has in the style part, if it is fixed by the format
    ///
    /// Custom formats get their id when the style sheet is assembled.
    pub fn builtin_id(&self) -> Option<u32> {
        match self {
            NumberFormat::General => Some(0),
            NumberFormat::BuiltIn(id) => Some(*id),
            NumberFormat::Custom(_) => None,
        }
    }

    pub(crate) fn unsupported_reason(&self) -> Option<String> {
        match self {
            NumberFormat::General => None,
            NumberFormat::BuiltIn(id) if builtin_format_string(*id).is_none() => {
                Some(format!("built-in number format id {id} is not defined"))
            }
            NumberFormat::BuiltIn(_) => None,
            NumberFormat::Custom(code) if code.is_empty() => {
                Some("empty custom number format code".to_string())
            }
            NumberFormat::Custom(_) => None,
        }
    }
}

/// Built-in id whose format code is exactly `code`
pub(crate) fn builtin_id_for_code(code: &str) -> Option<u32> {
    (0..=NumberFormat::ID_TEXT).find(|&id| builtin_format_string(id) == Some(code))
}

/// Format code of a built-in number format
fn builtin_format_string(id: u32) -> Option<&'static str> {
    Some(match id {
        0 => "General",
        1 => "0",
        2 => "0.00",
        3 => "#,##0",
        4 => "#,##0.00",
        9 => "0%",
        10 => "0.00%",
        11 => "0.00E+00",
        12 => "# ?/?",
        13 => "# ??/??",
        14 => "mm-dd-yy",
        15 => "d-mmm-yy",
        16 => "d-mmm",
        17 => "mmm-yy",
        18 => "h:mm AM/PM",
        19 => "h:mm:ss AM/PM",
        20 => "h:mm",
        21 => "h:mm:ss",
        22 => "m/d/yy h:mm",
        37 => "#,##0 ;(#,##0)",
        38 => "#,##0 ;[Red](#,##0)",
        39 => "#,##0.00;(#,##0.00)",
        40 => "#,##0.00;[Red](#,##0.00)",
        45 => "mm:ss",
        46 => "[h]:mm:ss",
        47 => "mmss.0",
        48 => "##0.0E+0",
        49 => "@",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_strings() {
        assert_eq!(NumberFormat::General.format_string(), Some("General"));
        assert_eq!(NumberFormat::percent().format_string(), Some("0%"));
        assert_eq!(NumberFormat::from_id(5).format_string(), None);
        assert_eq!(
            NumberFormat::from_string("0.000").format_string(),
            Some("0.000")
        );
    }

    #[test]
    fn test_builtin_id_for_code() {
        assert_eq!(builtin_id_for_code("0%"), Some(9));
        assert_eq!(builtin_id_for_code("@"), Some(49));
        assert_eq!(builtin_id_for_code("0.000"), None);
    }

    #[test]
    fn test_builtin_codes_normalize() {
        assert_eq!(NumberFormat::from_string("0%"), NumberFormat::percent());
        assert_eq!(NumberFormat::from_string("mm-dd-yy"), NumberFormat::date_short());
        assert_eq!(NumberFormat::from_string("General"), NumberFormat::General);
        assert_eq!(NumberFormat::from_id(0), NumberFormat::General);
        assert_eq!(
            NumberFormat::from_string("0.000"),
            NumberFormat::Custom("0.000".to_string())
        );
    }

    #[test]
    fn test_unsupported_ids() {
        assert!(NumberFormat::from_id(49).unsupported_reason().is_none());
        assert!(NumberFormat::from_id(23).unsupported_reason().is_some());
        assert!(NumberFormat::from_string("").unsupported_reason().is_some());
    }
}
