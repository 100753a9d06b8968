//! HTTP request handlers, grouped by area.

pub mod admin;
pub mod auth;
pub mod character;
pub mod health;
pub mod profile;
