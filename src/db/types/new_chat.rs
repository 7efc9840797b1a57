use super::{ChatCode, ChatTitle};
use crate::error::ValidationError;

/// A chat that passed field validation and is ready to be inserted.
/// `added_at` is stamped by the entity on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChat {
    code: ChatCode,
    title: Option<ChatTitle>,
}

impl NewChat {
    pub fn new(code: impl Into<String>, title: Option<String>) -> Result<Self, ValidationError> {
        let code = ChatCode::parse(code)?;
        let title = title.map(ChatTitle::parse).transpose()?;
        Ok(Self { code, title })
    }

    pub fn code(&self) -> &ChatCode {
        &self.code
    }

    pub fn into_parts(self) -> (ChatCode, Option<ChatTitle>) {
        (self.code, self.title)
    }
}
