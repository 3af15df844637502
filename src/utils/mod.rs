//! Helpers shared by the domain and application layers.
//!
//! - [`content_date`] - Lenient parsing of content date strings

pub mod content_date;
