//! Site settings entities.

pub mod model;

pub use model::{DEFAULT_SETTINGS, SiteSetting};
