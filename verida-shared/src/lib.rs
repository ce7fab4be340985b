//! Shared data models for the Verida donation-tracking platform.
//!
//! Every type here mirrors the JSON the REST backend produces or consumes,
//! so the web client never works with untyped payloads.

pub mod models;
