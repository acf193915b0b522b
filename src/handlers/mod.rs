// src/handlers/mod.rs

pub mod comments;
pub mod meta;
pub mod posts;
pub mod users;
