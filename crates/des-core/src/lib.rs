//! Reference DES implementation used as the building block for Triple-DES.
//!
//! This crate intentionally mirrors the FIPS 46-3 specification and provides:
//! - The DES key schedule (PC-1, per-round rotations, PC-2).
//! - Single-block encryption and decryption over 64-bit blocks.
//! - Public types shared across the workspace.
//!
//! DES is cryptographically weak by modern standards; the implementation
//! reproduces the standardized algorithm faithfully for composition into
//! Triple-DES, and aims for clarity and testability rather than constant-time
//! guarantees.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod key;
mod round;
mod sbox;

pub use crate::block::Block;
pub use crate::cipher::{decrypt_block, derive_subkeys, encrypt_block, Des};
pub use crate::key::{DesKey, Subkeys};
