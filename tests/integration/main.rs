//! Router-level integration tests driven through `tower::ServiceExt::oneshot`
//! against the in-memory stores.

mod helpers;

mod admin_test;
mod auth_test;
mod character_test;
mod health_test;
mod profile_test;
