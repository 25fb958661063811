//! Ports the controller calls through, plus a catalog-backed search adapter.
//!
//! The controller only depends on the two traits defined here. Transport,
//! schema mapping and persistence live behind them and are not part of this
//! crate, apart from [`CatalogSearch`], which answers queries from photos held
//! in memory.
//!
//! # Modules
//!
//! - `search`: [`SearchPort`] abstraction over the photo search backend
//! - `recent`: [`RecentTermPort`] abstraction over recent search storage
//! - `catalog`: [`CatalogSearch`] in-memory `SearchPort`

pub mod catalog;
pub mod recent;
pub mod search;

pub use catalog::CatalogSearch;
pub use recent::RecentTermPort;
pub use search::SearchPort;
