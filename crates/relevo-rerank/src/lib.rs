//! Relevance reranking over a hosted ranking API.
//!
//! [`RerankService`] takes a query and a list of candidate texts, asks a
//! [`RerankProvider`] to score them, and returns [`RankedResult`]s in the
//! provider's descending-score order, cut to the requested count.

pub mod config;
pub mod error;
pub mod factory;
pub mod providers;
pub mod service;
pub mod traits;
pub mod types;

pub use config::*;
pub use error::{ProviderError, RerankError};
pub use factory::*;
pub use service::*;
pub use traits::*;
pub use types::*;
