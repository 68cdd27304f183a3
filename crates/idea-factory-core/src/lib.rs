//! Idea Factory Core Library
//!
//! Record store, collection scanning, search, index generation and concept
//! development for the idea-factory writing workspace.

pub mod config;
pub mod error;
pub mod export;
pub mod index;
pub mod logging;
pub mod promote;
pub mod query;
pub mod record;
pub mod scan;
pub mod similarity;
pub mod stats;
pub mod store;
pub mod template;
pub mod text;
pub mod validation;
