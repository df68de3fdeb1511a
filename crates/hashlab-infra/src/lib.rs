//! Infrastructure adapters for Hashlab.
//!
//! Implements the `TextHasher` trait from `hashlab-core` using audited
//! crypto from the RustCrypto ecosystem.

pub mod hash;
