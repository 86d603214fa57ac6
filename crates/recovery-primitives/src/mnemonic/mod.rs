//! BIP-39 recovery-phrase validation and fingerprinting.
//!
//! Validates a user-submitted recovery phrase against the BIP-39 standard
//! (word count, wordlist membership, checksum), extracts the encoded
//! entropy, and derives a short fingerprint for duplicate detection.
//! The language is fixed to English; the 2048-word table comes from the
//! `bip39` crate and is static for the lifetime of the process.

use bip39::Language;
use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha2::Sha512;

use crate::hash::sha256;
use crate::PhraseError;

/// PBKDF2 iteration count fixed by BIP-39 for seed derivation.
const SEED_ITERATIONS: u32 = 2048;

/// BIP-39 seed salt prefix; the passphrase (empty here) is appended.
const SEED_SALT: &[u8] = b"mnemonic";

/// Number of bytes of the seed disclosed as the deduplication fingerprint.
const FINGERPRINT_BYTES: usize = 4;

/// Outcome of a successful phrase validation.
///
/// Both fields are lowercase hex strings and are a pure function of the
/// input phrase, so repeated validation of the same phrase yields
/// bitwise-identical values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPhrase {
    /// The raw entropy encoded by the word indices: 16 bytes for a
    /// 12-word phrase, 32 bytes for a 24-word phrase.
    pub entropy: String,
    /// First 4 bytes of the BIP-39 seed, hex-encoded (8 characters).
    /// A deduplication key only, never key material.
    pub fingerprint: String,
}

/// Validate a recovery phrase against the BIP-39 standard.
///
/// Checks, in order: non-empty input, word count (exactly 12 or 24),
/// case-insensitive wordlist membership (collecting every offender), and
/// the embedded checksum. On success returns the hex-encoded entropy and
/// the seed-derived fingerprint.
///
/// Never panics on malformed input; every failure mode is a
/// [`PhraseError`] variant.
///
/// # Arguments
/// * `phrase` - The raw submitted phrase. Surrounding whitespace and
///   repeated separators are tolerated; casing is ignored.
///
/// # Returns
/// `Ok(ValidatedPhrase)` for a valid mnemonic, or the specific
/// [`PhraseError`] describing what the submitter must fix.
pub fn validate(phrase: &str) -> Result<ValidatedPhrase, PhraseError> {
    let raw: Vec<&str> = phrase.split_whitespace().collect();
    if raw.is_empty() {
        return Err(PhraseError::Empty);
    }
    if raw.len() != 12 && raw.len() != 24 {
        return Err(PhraseError::WordCount { found: raw.len() });
    }

    let list = Language::English.word_list();
    let mut indices: Vec<u16> = Vec::with_capacity(raw.len());
    let mut canonical: Vec<String> = Vec::with_capacity(raw.len());
    let mut unknown: Vec<String> = Vec::new();
    for word in &raw {
        let lower = word.to_lowercase();
        // The English wordlist is sorted, so membership is a binary search.
        match list.binary_search(&lower.as_str()) {
            Ok(index) => indices.push(index as u16),
            Err(_) => unknown.push((*word).to_string()),
        }
        canonical.push(lower);
    }
    if !unknown.is_empty() {
        return Err(PhraseError::UnknownWords { words: unknown });
    }

    let entropy = verify_checksum(&indices)?;
    let seed = seed_from_canonical(&canonical.join(" "));

    Ok(ValidatedPhrase {
        entropy: hex::encode(&entropy),
        fingerprint: hex::encode(&seed[..FINGERPRINT_BYTES]),
    })
}

/// Canonicalize a recovery phrase for storage.
///
/// Lowercases every word, collapses whitespace runs, and re-joins with
/// single spaces. Blank input yields the empty string. Idempotent, and
/// performs no validation; call [`validate`] first.
pub fn sanitize(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Derive the 64-byte BIP-39 seed for a phrase with an empty passphrase.
///
/// The phrase is canonicalized with [`sanitize`] before derivation, so
/// casing and spacing variants of the same mnemonic produce the same seed.
/// PBKDF2-HMAC-SHA512, salt `"mnemonic"`, 2048 iterations.
pub fn derive_seed(phrase: &str) -> [u8; 64] {
    seed_from_canonical(&sanitize(phrase))
}

fn seed_from_canonical(canonical: &str) -> [u8; 64] {
    let mut seed = [0u8; 64];
    pbkdf2::<Hmac<Sha512>>(canonical.as_bytes(), SEED_SALT, SEED_ITERATIONS, &mut seed)
        .expect("HMAC-SHA512 accepts any key length");
    seed
}

/// Verify the BIP-39 checksum over the 11-bit word indices and return the
/// raw entropy bytes.
///
/// The concatenated indices form `entropy_bits + checksum_bits` where
/// `checksum_bits = word_count / 3` (4 for 12 words, 8 for 24). The
/// checksum must equal the leading bits of SHA-256 over the entropy.
fn verify_checksum(indices: &[u16]) -> Result<Vec<u8>, PhraseError> {
    let total_bits = indices.len() * 11;
    let checksum_bits = total_bits / 33;
    let entropy_bits = total_bits - checksum_bits;

    // Pack the 11-bit indices MSB-first into a byte buffer.
    let mut buf = vec![0u8; total_bits.div_ceil(8)];
    for (i, index) in indices.iter().enumerate() {
        for bit in 0..11 {
            if index & (1 << (10 - bit)) != 0 {
                let pos = i * 11 + bit;
                buf[pos / 8] |= 1 << (7 - pos % 8);
            }
        }
    }

    let entropy = buf[..entropy_bits / 8].to_vec();
    let digest = sha256(&entropy);
    // Compare only the leading checksum_bits of both bytes.
    let shift = 8 - checksum_bits;
    if buf[entropy_bits / 8] >> shift != digest[0] >> shift {
        return Err(PhraseError::ChecksumMismatch);
    }
    Ok(entropy)
}
