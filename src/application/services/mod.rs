//! Content retrieval services for the application layer.

pub mod post_service;
pub mod project_service;
mod selection;
pub mod talk_service;

pub use post_service::PostService;
pub use project_service::ProjectService;
pub use talk_service::TalkService;
