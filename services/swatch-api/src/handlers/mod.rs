//! HTTP request handlers.
//!
//! - `image`: solid and gradient image routes
//! - `health`: health check and Prometheus metrics
//! - `common`: response builders shared by the handlers

pub mod common;
pub mod health;
pub mod image;
