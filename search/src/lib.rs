//! Fuzzy search backend for typeahead widgets.
//!
//! [`FuzzyBackend`] ranks a local candidate set with nucleo. It implements
//! [`typeahead_core::Backend`], so it plugs into a
//! [`typeahead_core::WorkerClient`] like any remote backend would.

mod backend;
mod config;

pub use backend::FuzzyBackend;
pub use config::{CaseMatching, SearchConfig};
