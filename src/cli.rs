//! Command-line front end for the chat registry.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::db::entities::chats;
use crate::db::repo::Repo;

#[derive(Parser, Debug)]
#[command(name = "chat_registry")]
#[command(about = "Create and look up chats keyed by a unique code", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a TOML config file (default: ./config.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Create a chat
    Create {
        /// Unique chat code, at most 20 characters
        code: String,

        /// Optional title, at most 255 characters
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Show one chat by code
    Show { code: String },

    /// List all chats, oldest first
    List,
}

pub async fn run(command: Command, repo: &Repo) -> Result<()> {
    match command {
        Command::Create { code, title } => {
            let chat = repo
                .create_chat_from_parts(code, title)
                .await
                .context("Failed to create chat")?;
            println!("{}", describe(&chat));
        }
        Command::Show { code } => {
            let chat = repo
                .get_chat(&code)
                .await
                .context("Failed to get chat")?
                .ok_or_else(|| anyhow::anyhow!("Chat {} not found", code))?;
            println!("{}", describe(&chat));
        }
        Command::List => {
            let chats = repo.list_chats().await.context("Failed to list chats")?;
            for chat in &chats {
                println!("{}", describe(chat));
            }
        }
    }

    Ok(())
}

/// One line per chat: the display form followed by its creation time.
fn describe(chat: &chats::Model) -> String {
    format!("{}\tadded {}", chat, chat.added_at.to_rfc3339())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repo::tests::setup_test_db;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_parse_create_with_title() {
        let cli = Cli::try_parse_from(["chat_registry", "create", "abc123", "--title", "General"])
            .unwrap();
        assert_eq!(
            cli.command,
            Command::Create {
                code: "abc123".to_string(),
                title: Some("General".to_string()),
            }
        );
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_global_config_flag() {
        let cli = Cli::try_parse_from(["chat_registry", "list", "--config", "other.toml"])
            .unwrap();
        assert_eq!(cli.command, Command::List);
        assert_eq!(cli.config.as_deref(), Some("other.toml"));
    }

    #[test]
    fn test_parse_show_requires_code() {
        assert!(Cli::try_parse_from(["chat_registry", "show"]).is_err());
    }

    #[test]
    fn test_describe() {
        let chat = chats::Model {
            code: "abc123".to_string(),
            title: Some("General".to_string()),
            added_at: Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap(),
        };
        assert_eq!(
            describe(&chat),
            "Chat abc123 (General)\tadded 2026-10-19T08:30:00+00:00"
        );
    }

    #[tokio::test]
    async fn test_run_create_then_show_and_list() {
        let repo = setup_test_db().await.unwrap();

        run(
            Command::Create {
                code: "abc123".to_string(),
                title: Some("General".to_string()),
            },
            &repo,
        )
        .await
        .unwrap();

        let chat = repo.get_chat("abc123").await.unwrap().unwrap();
        assert_eq!(chat.title, Some("General".to_string()));

        let show = Command::Show {
            code: "abc123".to_string(),
        };
        run(show, &repo).await.unwrap();
        run(Command::List, &repo).await.unwrap();
    }

    #[tokio::test]
    async fn test_run_show_missing_fails() {
        let repo = setup_test_db().await.unwrap();

        let show = Command::Show {
            code: "nope".to_string(),
        };
        let err = run(show, &repo).await.unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[tokio::test]
    async fn test_run_create_duplicate_reports_cause() {
        let repo = setup_test_db().await.unwrap();
        let create = || Command::Create {
            code: "abc123".to_string(),
            title: None,
        };

        run(create(), &repo).await.unwrap();
        let err = run(create(), &repo).await.unwrap_err();

        // Alternate format prints the whole context chain
        let report = format!("{:#}", err);
        assert!(report.contains("Failed to create chat"));
        assert!(report.contains("already exists"));
        assert!(matches!(
            err.downcast_ref::<crate::error::ChatError>(),
            Some(crate::error::ChatError::UniquenessViolation { .. })
        ));
    }

    #[tokio::test]
    async fn test_run_create_invalid_code_fails() {
        let repo = setup_test_db().await.unwrap();

        let result = run(
            Command::Create {
                code: "x".repeat(21),
                title: None,
            },
            &repo,
        )
        .await;
        assert!(result.is_err());
        assert!(repo.list_chats().await.unwrap().is_empty());
    }
}
