//! Filesystem content backend.
//!
//! Content lives in one directory per kind, one `<slug>.mdx` file per record,
//! each starting with a `---`-delimited YAML header.

pub mod front_matter;
mod fs_content_repository;

pub use fs_content_repository::{CONTENT_EXTENSION, FsContentRepository};
