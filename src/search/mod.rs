//! Name filtering and ordering for the visible list.
//!
//! The visible list is derived from scratch on every call: the catalog is
//! small and static, so there is no index to maintain.

pub mod collate;
mod filter;

pub use collate::{NameCollator, compare};
pub use filter::{match_range, matches_name, visible_list};
