// src/services/mod.rs

pub mod comment_service;
pub mod post_service;
pub mod user_service;

pub use comment_service::CommentService;
pub use post_service::PostService;
pub use user_service::UserService;
