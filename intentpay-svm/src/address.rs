use intentpay::address::AddressFormat;
use intentpay::chain::ChainFamily;
use solana_pubkey::Pubkey;
use std::str::FromStr;

/// Solana address check: base58 decoding to 32 bytes, on the ed25519 curve.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolanaAddressFormat;

impl SolanaAddressFormat {
    /// Parses an on-curve public key.
    #[must_use]
    pub fn parse(address: &str) -> Option<Pubkey> {
        Pubkey::from_str(address)
            .ok()
            .filter(Pubkey::is_on_curve)
    }
}

impl AddressFormat for SolanaAddressFormat {
    fn family(&self) -> ChainFamily {
        ChainFamily::Solana
    }

    fn is_valid(&self, address: &str) -> bool {
        Self::parse(address).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::networks::USDC_SOLANA;

    #[test]
    fn test_on_curve_keys() {
        assert!(SolanaAddressFormat.is_valid("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v"));
        assert!(SolanaAddressFormat.is_valid("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA"));
        assert_eq!(
            SolanaAddressFormat::parse("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v"),
            Some(USDC_SOLANA)
        );
    }

    #[test]
    fn test_malformed() {
        assert!(!SolanaAddressFormat.is_valid(""));
        assert!(!SolanaAddressFormat.is_valid("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"));
        assert!(!SolanaAddressFormat.is_valid("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1vv"));
        assert!(!SolanaAddressFormat.is_valid("0OIl0OIl0OIl0OIl0OIl0OIl0OIl0OIl"));
    }

    #[test]
    fn test_family() {
        assert_eq!(SolanaAddressFormat.family(), ChainFamily::Solana);
    }
}
