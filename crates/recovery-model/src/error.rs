use recovery_primitives::PhraseError;

/// Rejection reasons for a recovery submission.
///
/// All are user-input failures. `Display` strings are the user-facing
/// form messages; [`SubmissionError::code`] gives the stable machine
/// identifier the surrounding system logs and branches on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("Auth token is required")]
    MissingAuthToken,

    #[error("Wallet type is required")]
    MissingWalletType,

    #[error("Recovery phrase is required")]
    MissingRecoveryPhrase,

    #[error("Invalid wallet type selected")]
    InvalidWalletType,

    #[error(transparent)]
    InvalidPhrase(#[from] PhraseError),
}

impl SubmissionError {
    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            SubmissionError::MissingAuthToken => "MISSING_AUTH_TOKEN",
            SubmissionError::MissingWalletType => "MISSING_WALLET_TYPE",
            SubmissionError::MissingRecoveryPhrase => "MISSING_RECOVERY_PHRASE",
            SubmissionError::InvalidWalletType => "INVALID_WALLET_TYPE",
            SubmissionError::InvalidPhrase(_) => "INVALID_RECOVERY_PHRASE_FORMAT",
        }
    }
}
