// src/models/mod.rs

pub mod comment;
pub mod comment_tree;
pub mod post;
pub mod user;
pub mod validation;
