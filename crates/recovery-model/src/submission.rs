//! Pure validation stage of a recovery submission.
//!
//! Runs every check that needs no store access, in the same order the
//! surrounding request handler applies them. Token lookup, duplicate
//! detection, and persistence happen after this stage, outside this crate.

use serde::Deserialize;

use recovery_primitives::mnemonic::{self, ValidatedPhrase};

use crate::wallet::WalletType;
use crate::SubmissionError;

/// Raw fields of an incoming recovery submission.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionRequest {
    /// Case-scoped auth token, as submitted.
    pub token: String,
    /// Wallet-type tag, as submitted.
    pub wallet_type: String,
    /// Recovery phrase, as submitted.
    pub phrase: String,
}

/// A submission that passed every input check.
///
/// Carries everything the storage layer needs: the trimmed token, the
/// typed wallet, the canonical phrase, and the entropy/fingerprint pair
/// for duplicate detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSubmission {
    /// The auth token with surrounding whitespace removed.
    pub token: String,
    /// The parsed wallet type.
    pub wallet_type: WalletType,
    /// Lowercase, single-spaced storage form of the phrase.
    pub sanitized_phrase: String,
    /// Entropy and fingerprint derived from the phrase.
    pub phrase: ValidatedPhrase,
}

/// Validate a recovery submission's inputs.
///
/// Checks run in the handler's order: missing token, missing wallet type,
/// missing phrase, unknown wallet type, then full BIP-39 phrase
/// validation. The first failure wins.
pub fn validate_submission(
    request: &SubmissionRequest,
) -> Result<ValidSubmission, SubmissionError> {
    let token = request.token.trim();
    if token.is_empty() {
        return Err(SubmissionError::MissingAuthToken);
    }
    if request.wallet_type.trim().is_empty() {
        return Err(SubmissionError::MissingWalletType);
    }
    if request.phrase.trim().is_empty() {
        return Err(SubmissionError::MissingRecoveryPhrase);
    }

    let wallet_type: WalletType = request.wallet_type.parse()?;
    let phrase = mnemonic::validate(&request.phrase)?;

    Ok(ValidSubmission {
        token: token.to_string(),
        wallet_type,
        sanitized_phrase: mnemonic::sanitize(&request.phrase),
        phrase,
    })
}
