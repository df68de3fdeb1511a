//! Business logic for Hashlab.
//!
//! This crate defines the hashing "port" (the `TextHasher` trait) that the
//! infrastructure layer implements, plus the `HashService` that drives the
//! demo. It depends only on `hashlab-types` -- never on a crypto crate.

pub mod hasher;
pub mod service;
