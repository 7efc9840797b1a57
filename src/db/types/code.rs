use crate::error::ValidationError;
use std::fmt;
use std::ops::Deref;

/// Maximum length of a chat code, in characters.
pub const CHAT_CODE_MAX_LEN: usize = 20;

/// A non-empty chat code of at most [`CHAT_CODE_MAX_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChatCode(String);

impl ChatCode {
    pub fn parse(code: impl Into<String>) -> Result<Self, ValidationError> {
        let code = code.into();
        let len = code.chars().count();

        if len == 0 {
            return Err(ValidationError::EmptyCode);
        }
        if len > CHAT_CODE_MAX_LEN {
            return Err(ValidationError::CodeTooLong {
                len,
                max: CHAT_CODE_MAX_LEN,
            });
        }

        Ok(Self(code))
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for ChatCode {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for ChatCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_code_normal() {
        let code = ChatCode::parse("abc123").unwrap();
        assert_eq!(&*code, "abc123");
    }

    #[test]
    fn test_parse_code_empty() {
        assert_eq!(ChatCode::parse(""), Err(ValidationError::EmptyCode));
    }

    #[test]
    fn test_parse_code_at_limit() {
        let code = "a".repeat(CHAT_CODE_MAX_LEN);
        assert!(ChatCode::parse(code).is_ok());
    }

    #[test]
    fn test_parse_code_too_long() {
        let result = ChatCode::parse("a".repeat(CHAT_CODE_MAX_LEN + 1));
        assert_eq!(
            result,
            Err(ValidationError::CodeTooLong { len: 21, max: 20 })
        );
    }

    #[test]
    fn test_parse_code_counts_characters_not_bytes() {
        // 20 characters, 60 bytes
        let code = "日".repeat(CHAT_CODE_MAX_LEN);
        assert!(ChatCode::parse(code).is_ok());
    }

    #[test]
    fn test_display_and_into_inner() {
        let code = ChatCode::parse("room-7").unwrap();
        assert_eq!(code.to_string(), "room-7");
        assert_eq!(code.into_inner(), "room-7");
    }
}
