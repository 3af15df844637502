//! Application layer: retrieval use cases per content kind.
//!
//! Services wrap raw repository records into entities and apply the ordering
//! and selection policy. Each offers the same four reads: all, by slug, all
//! tags and featured.
//!
//! # Available Services
//!
//! - [`services::post_service::PostService`] - Posts, newest first
//! - [`services::project_service::ProjectService`] - Projects by status priority
//! - [`services::talk_service::TalkService`] - Talks, most recent first

pub mod services;
