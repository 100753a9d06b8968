//! Registration, login, logout and session checks.

pub mod service;

pub use service::{AccountService, LoginInput, RegisterInput};
