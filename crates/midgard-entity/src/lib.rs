//! # midgard-entity
//!
//! Domain entity models for Midgard Web. Database entities map one row of
//! the `login`, `char`, `site_settings` or `web_sessions` tables and derive
//! `sqlx::FromRow`; the rest are value objects shared by the services.

pub mod account;
pub mod character;
pub mod session;
pub mod settings;
