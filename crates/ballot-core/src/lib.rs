//! Core ballot client library (backend client, sign-in flows, config).

pub mod api;
pub mod auth;
pub mod config;
pub mod logging;
pub mod login;
pub mod session;
