//! Export functionality for family layouts.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! handing a computed [`FamilyLayout`] to the outside world. It is the final
//! stage of the pipeline.
//!
//! # Available Backends
//!
//! - [`json`] — JSON documents via [`json::JsonExporter`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], which converts into
//! [`KinshipError::Export`] at the crate boundary.
//!
//! [`KinshipError::Export`]: crate::KinshipError::Export

/// JSON export backend.
pub mod json;

use thiserror::Error;

use crate::layout::FamilyLayout;

/// Abstraction for layout export backends.
pub trait Exporter {
    /// Exports a family layout to the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialize`] if the layout cannot be encoded, or
    /// [`Error::Io`] if writing the output fails.
    fn export_layout(&mut self, layout: &FamilyLayout) -> Result<(), Error>;
}

/// Errors that can occur during layout export.
#[derive(Debug, Error)]
pub enum Error {
    /// The layout could not be encoded.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Writing the encoded layout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
