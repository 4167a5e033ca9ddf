//! Infrastructure layer module
//!
//! Cross-cutting concerns that sit outside the domain: configuration
//! loading and validation. Storage and cache adapters live under
//! `crate::adapters` and satisfy the domain's port traits.

pub mod config;
