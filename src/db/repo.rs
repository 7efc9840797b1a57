use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set, SqlErr,
    TransactionTrait,
};
use tracing::{debug, info, warn};

use super::entities::chats;
use crate::db::types::{ChatTitle, NewChat};
use crate::error::ChatError;

pub struct Repo {
    db: DatabaseConnection,
}

impl Repo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn ping(&self) -> Result<()> {
        self.db.ping().await.context("Database ping failed")
    }

    // ==================== Chats ====================

    /// Insert a validated chat. `added_at` is assigned by the entity on insert.
    ///
    /// Fails with [`ChatError::UniquenessViolation`] when the code is taken;
    /// the transaction is rolled back and the existing row stays as it was.
    pub async fn create_chat(&self, new_chat: NewChat) -> Result<chats::Model, ChatError> {
        let (code, title) = new_chat.into_parts();
        let code = code.into_inner();

        let txn = self.db.begin().await?;

        let active = chats::ActiveModel {
            code: Set(code.clone()),
            title: Set(title.map(ChatTitle::into_inner)),
            ..Default::default()
        };

        // Go straight to the insert: a read first would take a shared lock that
        // SQLite cannot upgrade while another writer holds one
        let chat = match active.insert(&txn).await {
            Ok(chat) => chat,
            Err(err) => {
                txn.rollback().await?;
                return Err(classify_insert_error(err, code));
            }
        };

        txn.commit().await?;
        info!(code = %chat.code, added_at = %chat.added_at, "Chat created");

        Ok(chat)
    }

    /// Validate raw fields and insert them in one step.
    pub async fn create_chat_from_parts(
        &self,
        code: String,
        title: Option<String>,
    ) -> Result<chats::Model, ChatError> {
        let new_chat = NewChat::new(code, title)?;
        debug!(code = %new_chat.code(), "Chat fields validated");
        self.create_chat(new_chat).await
    }

    pub async fn get_chat(&self, code: &str) -> Result<Option<chats::Model>, ChatError> {
        chats::Entity::find_by_id(code.to_string())
            .one(&self.db)
            .await
            .map_err(Into::into)
    }

    /// All chats, oldest first.
    pub async fn list_chats(&self) -> Result<Vec<chats::Model>, ChatError> {
        chats::Entity::find()
            .order_by_asc(chats::Column::AddedAt)
            .order_by_asc(chats::Column::Code)
            .all(&self.db)
            .await
            .map_err(Into::into)
    }
}

fn classify_insert_error(err: DbErr, code: String) -> ChatError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            warn!(code = %code, "Chat code already taken");
            ChatError::UniquenessViolation { code }
        }
        _ => ChatError::Database(err),
    }
}
