//! Wallet-type enumeration.
//!
//! Wallet types are stored as string tags. Modeling the tag set as a
//! closed enum with exhaustive matching means a typo'd tag fails at the
//! parse boundary instead of silently passing validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::SubmissionError;

/// Generates the enum, its canonical tag table, and the tag round-trip.
/// Tags are the exact stored identifiers (underscore-joined names).
macro_rules! wallet_types {
    ($($variant:ident => $tag:literal),+ $(,)?) => {
        /// A supported wallet type, identified by its stored tag
        /// (e.g. `Trust_Wallet`).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum WalletType {
            $(
                #[serde(rename = $tag)]
                #[allow(missing_docs)]
                $variant,
            )+
        }

        impl WalletType {
            /// Every supported wallet type, in tag order.
            pub const ALL: &'static [WalletType] = &[$(WalletType::$variant),+];

            /// The canonical stored tag for this wallet type.
            pub fn as_tag(&self) -> &'static str {
                match self {
                    $(WalletType::$variant => $tag),+
                }
            }
        }

        impl FromStr for WalletType {
            type Err = SubmissionError;

            /// Case-sensitive parse of a stored tag.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($tag => Ok(WalletType::$variant),)+
                    _ => Err(SubmissionError::InvalidWalletType),
                }
            }
        }
    };
}

wallet_types! {
    AirGapWallet => "AirGap_Wallet",
    AtomicWallet => "Atomic_Wallet",
    Bisq => "Bisq",
    Binance => "Binance",
    BitcoinCore => "Bitcoin_Core",
    Bither => "Bither",
    BlueWallet => "BlueWallet",
    BlockstreamGreen => "Blockstream_Green",
    Bread => "Bread",
    Cex => "Cex",
    CoboWallet => "Cobo_Wallet",
    Coinbase => "Coinbase",
    Coinomi => "Coinomi",
    Eidoo => "Eidoo",
    Electrum => "Electrum",
    EnjinWallet => "Enjin_Wallet",
    Exodus => "Exodus",
    Jaxx => "Jaxx",
    Ledger => "Ledger",
    Metamask => "Metamask",
    Mycelium => "Mycelium",
    MyCryptoWallet => "MyCryptoWallet",
    MyEtherWallet => "MyEtherWallet",
    Ownbit => "Ownbit",
    Phantom => "Phantom",
    Phoenix => "Phoenix",
    Samourai => "Samourai",
    Solflare => "Solflare",
    Trezor => "Trezor",
    TrustWallet => "Trust_Wallet",
    Unstoppable => "Unstoppable",
    Wasabi => "Wasabi",
}

impl WalletType {
    /// Human-readable name: the tag with underscores replaced by spaces.
    pub fn display_name(&self) -> String {
        self.as_tag().replace('_', " ")
    }
}

impl fmt::Display for WalletType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Check whether a string is a recognized wallet-type tag.
///
/// Case-sensitive, matching the stored enumeration exactly.
pub fn is_valid_wallet_type(value: &str) -> bool {
    value.parse::<WalletType>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_roundtrip_all_variants() {
        for wallet in WalletType::ALL {
            let parsed: WalletType = wallet.as_tag().parse().unwrap();
            assert_eq!(parsed, *wallet);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(is_valid_wallet_type("Trust_Wallet"));
        assert!(!is_valid_wallet_type("trust_wallet"));
        assert!(!is_valid_wallet_type("TRUST_WALLET"));
    }

    #[test]
    fn test_unknown_tag_rejected() {
        assert!(!is_valid_wallet_type(""));
        assert!(!is_valid_wallet_type("NotAWallet"));
        assert!(!is_valid_wallet_type("Trust Wallet"));
    }

    #[test]
    fn test_display_name_replaces_underscores() {
        assert_eq!(WalletType::TrustWallet.display_name(), "Trust Wallet");
        assert_eq!(WalletType::AirGapWallet.display_name(), "AirGap Wallet");
        assert_eq!(WalletType::Ledger.display_name(), "Ledger");
    }

    #[test]
    fn test_serde_uses_stored_tags() {
        let json = serde_json::to_string(&WalletType::BlockstreamGreen).unwrap();
        assert_eq!(json, "\"Blockstream_Green\"");
        let back: WalletType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, WalletType::BlockstreamGreen);
    }

    #[test]
    fn test_all_has_no_duplicates() {
        let mut tags: Vec<&str> = WalletType::ALL.iter().map(|w| w.as_tag()).collect();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), WalletType::ALL.len());
    }
}
