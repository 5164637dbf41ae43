//! Error Types
//!
//! This module defines the error type for a remapping pass.
//!
//! # Overview
//!
//! Both variants of [`RebindError`] are fatal to the pass that raised them:
//! the pass stops, every clone it registered is retracted from the store, and
//! no live component is modified. Expected conditions such as dangling curve
//! bindings or a graph that turns out unchanged are not errors; they are
//! handled inline and logged at debug level.
//!
//! # Usage
//!
//! All fallible APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, RebindError>`.

use thiserror::Error;

use crate::path::ObjectPath;

/// The error type for a remapping pass.
#[derive(Error, Debug)]
pub enum RebindError {
    /// An asset outside the supported closed set was reached while walking an
    /// animator graph.
    ///
    /// The closed set is deliberate: silently skipping an unknown kind would
    /// ship a graph that still references pre-mapping state.
    #[error("unsupported asset type `{type_name}` referenced from animator at '{at}'")]
    UnsupportedAssetType {
        /// Host-side type name of the offending asset.
        type_name: String,
        /// Hierarchy path of the component whose graph referenced it.
        at: ObjectPath,
    },

    /// An asset key reachable from an animator graph no longer resolves in
    /// the store.
    #[error("asset referenced from animator at '{at}' is no longer in the store")]
    MissingAsset {
        /// Hierarchy path of the component whose graph referenced it.
        at: ObjectPath,
    },
}

/// Alias for `Result<T, RebindError>`.
pub type Result<T> = std::result::Result<T, RebindError>;
