//! Domain vocabulary shared by the storage and HTTP layers.
//!
//! Nothing in this crate performs I/O: it defines the supported languages,
//! the resource kinds, the write payload, pagination arithmetic and the
//! write secret.

pub mod error;
pub mod language;
pub mod pagination;
pub mod resource;
pub mod secret;
