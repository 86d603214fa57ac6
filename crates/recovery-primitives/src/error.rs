/// Unified error type for recovery-phrase validation.
///
/// Every variant is a user-input failure, never a system failure. The
/// `Display` strings are the exact form-level messages surfaced to the
/// submitter, so callers can map them through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhraseError {
    #[error("Recovery phrase is required")]
    Empty,

    #[error("Recovery phrase must be exactly 12 or 24 words")]
    WordCount {
        /// The word count actually found after normalization.
        found: usize,
    },

    #[error("Invalid word(s) found: {}. All words must be from the BIP39 wordlist.", .words.join(", "))]
    UnknownWords {
        /// Every offending word, in submission order and original casing.
        words: Vec<String>,
    },

    #[error("Invalid recovery phrase checksum")]
    ChecksumMismatch,
}
