//! D400 sales overview: revenue vs. target, channel/category/state mix, top products.
//!
//! Everything here is recomputed from scratch for each filter; nothing is cached.

pub mod allocation;
pub mod filter;
pub mod service;
pub mod session;
pub mod text;

pub use service::render;
pub use session::{filter_domain, FilterSession};

#[cfg(test)]
pub(crate) mod test_support;
