//! Storage layer for recently searched terms.
//!
//! Only an in-memory store is provided; durable persistence belongs to whatever
//! implements [`RecentTermPort`](crate::ports::RecentTermPort) in the host
//! application.
//!
//! # Modules
//!
//! - `memory`: bounded most-recent-first store

pub mod memory;

pub use memory::MemoryRecentTerms;
