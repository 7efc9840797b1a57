use crate::error::ValidationError;
use std::ops::Deref;

/// Maximum length of a chat title, in characters.
pub const CHAT_TITLE_MAX_LEN: usize = 255;

/// A chat title of at most [`CHAT_TITLE_MAX_LEN`] characters. Empty titles are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTitle(String);

impl ChatTitle {
    pub fn parse(title: impl Into<String>) -> Result<Self, ValidationError> {
        let title = title.into();
        let len = title.chars().count();

        if len > CHAT_TITLE_MAX_LEN {
            return Err(ValidationError::TitleTooLong {
                len,
                max: CHAT_TITLE_MAX_LEN,
            });
        }

        Ok(Self(title))
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for ChatTitle {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
