pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod module;
pub mod service;

#[cfg(test)]
mod test_support;

pub use error::{WatchError, WatchResult};
