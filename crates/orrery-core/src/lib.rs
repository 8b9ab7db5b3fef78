//! Core types for Orrery: astronomical bodies, catalogs, and validation.
//!
//! This crate defines the data model the quiz engine plays with. It is
//! independent of any front end: a [`Catalog`] can be built in code or
//! loaded from a JSON file through a [`CatalogSource`].

/// Astronomical body records and their display attributes.
pub mod body;
/// The immutable, validated list of bodies a game draws from.
pub mod catalog;
/// Error types used throughout the crate.
pub mod error;
/// Where catalogs come from: files or in-memory lists.
pub mod source;
/// Lint-style checks over raw catalog records.
pub mod validate;

/// Re-export body types.
pub use body::{Body, BodyKind, RenderMode, Tint};
/// Re-export the catalog.
pub use catalog::Catalog;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export catalog sources.
pub use source::{CatalogSource, FileSource, StaticSource};
/// Re-export validation types.
pub use validate::{Severity, ValidationIssue, ValidationReport};
