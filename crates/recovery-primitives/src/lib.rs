/// Recovery SDK - Validation primitives for crypto-asset recovery submissions.
///
/// This crate provides the pure, I/O-free building blocks of the recovery
/// pipeline:
/// - Hash functions (SHA-256)
/// - BIP-39 mnemonic validation, seed derivation, and fingerprinting

pub mod hash;
pub mod mnemonic;

mod error;
pub use error::PhraseError;
