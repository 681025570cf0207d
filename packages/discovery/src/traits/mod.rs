//! Seams the discovery library is consumed through.
//!
//! Applications implement these to hand candidates to the discovery
//! operations from whatever backing store they own.

pub mod store;
