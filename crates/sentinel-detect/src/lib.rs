//! # sentinel-detect
//!
//! Thin client for the external anomaly-detection model service.
//!
//! The service is a single request/response boundary: a JSON traffic
//! sample goes out, a verdict comes back. This crate does not interpret
//! the sample beyond forwarding it, and reads nothing from the verdict
//! beyond the attack indicator and its label.

pub mod client;

pub use client::{DetectionClient, Verdict};
