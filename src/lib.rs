//! Tale Graph — an in-memory undirected graph of the entities in a tale.
//!
//! Characters, settings, and objects are stored as nodes in a keyed
//! registry and linked by symmetric adjacency. Characters additionally
//! carry named relationships that mirror between both parties.

pub mod core;
pub mod schema;
