//! Look up competitive programming profiles on Codeforces, SPOJ and AtCoder
//! and normalize them into one [`Profile`] shape.

mod client;
mod config;
mod error;
mod model;
mod scraper;

pub use client::ProfileClient;
pub use config::Endpoints;
pub use error::{LayoutError, ProfileError, Result};
pub use model::*;
