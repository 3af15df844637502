//! Data Transfer Objects handed to the presentation layer.
//!
//! DTOs are flat, serializable projections of the content entities, produced
//! only through `to_dto()`. Field names serialize in camelCase and unset
//! optional fields are omitted from the JSON.

pub mod post;
pub mod project;
pub mod talk;

pub use post::PostDto;
pub use project::ProjectDto;
pub use talk::TalkDto;
