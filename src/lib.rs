pub mod config;
pub mod content;
pub mod domain;
pub mod handlers;
pub mod paths;
pub mod session;
pub mod srs;
pub mod store;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
