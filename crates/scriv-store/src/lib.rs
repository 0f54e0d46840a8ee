//! Block store and document aggregate service for scriv.
//!
//! The store owns the document/block entities and the ordering contract:
//! positions are caller-supplied integers, unique or not, and the observed
//! sequence of a document's blocks is always sorted ascending by position
//! with insertion order breaking ties. Deletion leaves gaps; nothing ever
//! renumbers. The aggregate service is the thin seam the transport layer
//! talks to.

pub mod db;
pub mod error;
pub mod service;

pub use db::DocumentDb;
pub use error::{Result, StoreError};
pub use service::DocumentService;
