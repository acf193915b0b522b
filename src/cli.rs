// src/cli.rs

//! Line-oriented command interface over the services.

use std::fmt::Write as _;

use thiserror::Error;

use crate::{error::AppError, models::comment::Comment, state::AppState};

pub const HELP: &str = "\
Commands:
  user add <username>
  user list
  post add <username> <title> <content>
  post list
  comment add <post_id> <username> <text>
  comment reply <comment_id> <username> <text>
  comment list <post_id>
  help
  quit";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    #[error("unterminated quote")]
    UnterminatedQuote,
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("not a valid id: {0}")]
    InvalidId(String),
    #[error("unknown command, try 'help'")]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddUser { username: String },
    ListUsers,
    AddPost { username: String, title: String, content: String },
    ListPosts,
    AddComment { post_id: i64, username: String, text: String },
    Reply { comment_id: i64, username: String, text: String },
    ListComments { post_id: i64 },
    Help,
    Quit,
}

/// Splits a line on whitespace; single or double quotes group words.
pub fn split_args(line: &str) -> Result<Vec<String>, CliError> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for ch in line.chars() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => current.push(ch),
            None if ch == '"' || ch == '\'' => {
                quote = Some(ch);
                in_word = true;
            }
            None if ch.is_whitespace() => {
                if in_word {
                    args.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(ch);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err(CliError::UnterminatedQuote);
    }
    if in_word {
        args.push(current);
    }
    Ok(args)
}

fn parse_id(raw: &str) -> Result<i64, CliError> {
    raw.parse().map_err(|_| CliError::InvalidId(raw.to_string()))
}

/// Parses one input line. Returns `None` for blank lines.
pub fn parse_line(line: &str) -> Result<Option<Command>, CliError> {
    let args = split_args(line)?;
    let Some((head, rest)) = args.split_first() else {
        return Ok(None);
    };
    let rest: Vec<&str> = rest.iter().map(String::as_str).collect();

    let command = match (head.to_lowercase().as_str(), rest.as_slice()) {
        ("quit" | "exit", _) => Command::Quit,
        ("help", _) => Command::Help,
        ("user", ["add", username, ..]) => Command::AddUser {
            username: (*username).to_string(),
        },
        ("user", ["list", ..]) => Command::ListUsers,
        ("user", _) => return Err(CliError::Usage("user add <username> | user list")),
        ("post", ["add", username, title, content @ ..]) if !content.is_empty() => Command::AddPost {
            username: (*username).to_string(),
            title: (*title).to_string(),
            content: content.join(" "),
        },
        ("post", ["list", ..]) => Command::ListPosts,
        ("post", _) => return Err(CliError::Usage("post add <username> <title> <content> | post list")),
        ("comment", ["add", post_id, username, text @ ..]) if !text.is_empty() => Command::AddComment {
            post_id: parse_id(post_id)?,
            username: (*username).to_string(),
            text: text.join(" "),
        },
        ("comment", ["reply", comment_id, username, text @ ..]) if !text.is_empty() => Command::Reply {
            comment_id: parse_id(comment_id)?,
            username: (*username).to_string(),
            text: text.join(" "),
        },
        ("comment", ["list", post_id, ..]) => Command::ListComments {
            post_id: parse_id(post_id)?,
        },
        ("comment", _) => {
            return Err(CliError::Usage(
                "comment add <post_id> <username> <text> | comment reply <comment_id> <username> <text> | comment list <post_id>",
            ));
        }
        _ => return Err(CliError::Unknown),
    };

    Ok(Some(command))
}

fn describe_comment(comment: &Comment) -> String {
    let mut line = format!("{} (post {})", comment.id(), comment.post_id());
    if let Some(parent_id) = comment.parent_id() {
        let _ = write!(line, " reply_to={parent_id}");
    }
    let _ = write!(line, ": {} -> {}", comment.author().username(), comment.text());
    line
}

/// Executes a command and renders its output.
/// `Quit` renders nothing; the caller decides when to stop.
pub async fn execute(command: &Command, state: &AppState) -> Result<String, AppError> {
    let output = match command {
        Command::Quit => String::new(),
        Command::Help => HELP.to_string(),
        Command::AddUser { username } => {
            let user = state.users.create_user(username).await?;
            format!("Created user: id={}, username={}", user.id(), user.username())
        }
        Command::ListUsers => state
            .users
            .list_users()
            .await?
            .iter()
            .map(|u| format!("{}: {} (created={})", u.id(), u.username(), u.created_date()))
            .collect::<Vec<_>>()
            .join("\n"),
        Command::AddPost {
            username,
            title,
            content,
        } => {
            let post = state.posts.create_post(username, title, content).await?;
            format!(
                "Published post: id={}, title={}, author={}",
                post.id(),
                post.title(),
                post.author().username()
            )
        }
        Command::ListPosts => state
            .posts
            .list_posts()
            .await?
            .iter()
            .map(|p| format!("{}: {} by {}", p.id(), p.title(), p.author().username()))
            .collect::<Vec<_>>()
            .join("\n"),
        Command::AddComment {
            post_id,
            username,
            text,
        } => {
            let comment = state.comments.add_comment_to_post(*post_id, username, text).await?;
            format!("Created comment: id={} on post {}", comment.id(), post_id)
        }
        Command::Reply {
            comment_id,
            username,
            text,
        } => {
            let reply = state.comments.reply_to_comment(*comment_id, username, text).await?;
            format!("Created reply: id={} to comment {}", reply.id(), comment_id)
        }
        Command::ListComments { post_id } => state
            .comments
            .get_comments_for_post(*post_id)
            .await?
            .flatten()
            .into_iter()
            .map(describe_comment)
            .collect::<Vec<_>>()
            .join("\n"),
    };

    Ok(output)
}
