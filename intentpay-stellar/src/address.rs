//! Strkey validation.
//!
//! Decoding, the version byte and the CRC16 checksum are handled by
//! `stellar-strkey`; the regex only rejects inputs that cannot be a `G`, `M`
//! or `C` key before decoding.

use intentpay::address::AddressFormat;
use intentpay::chain::ChainFamily;
use regex::Regex;
use std::sync::LazyLock;
use stellar_strkey::Strkey;

static STRKEY_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[GC][A-Z2-7]{55}|M[A-Z2-7]{68})$").expect("valid strkey regex")
});

static ASSET_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{1,12}$").expect("valid asset code regex"));

/// Kind of address a strkey encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrKeyKind {
    /// Ed25519 account (`G…`).
    Account,
    /// Muxed account (`M…`): an account plus a 64-bit id.
    MuxedAccount,
    /// Soroban contract (`C…`).
    Contract,
}

/// Stellar address check.
///
/// Accepts account, muxed account and contract strkeys with a correct version
/// byte and checksum.
#[derive(Debug, Clone, Copy, Default)]
pub struct StellarAddressFormat;

impl StellarAddressFormat {
    /// Returns the kind of a valid strkey, or `None` if it is malformed.
    #[must_use]
    pub fn kind(address: &str) -> Option<StrKeyKind> {
        if !STRKEY_SHAPE.is_match(address) {
            return None;
        }
        match Strkey::from_string(address).ok()? {
            Strkey::PublicKeyEd25519(_) => Some(StrKeyKind::Account),
            Strkey::MuxedAccountEd25519(_) => Some(StrKeyKind::MuxedAccount),
            Strkey::Contract(_) => Some(StrKeyKind::Contract),
            _ => None,
        }
    }

    /// Returns `true` for a valid `G…` account strkey.
    #[must_use]
    pub fn is_account(address: &str) -> bool {
        Self::kind(address) == Some(StrKeyKind::Account)
    }
}

impl AddressFormat for StellarAddressFormat {
    fn family(&self) -> ChainFamily {
        ChainFamily::Stellar
    }

    fn is_valid(&self, address: &str) -> bool {
        Self::kind(address).is_some()
    }
}

/// Splits a `CODE:ISSUER` asset identifier.
///
/// The code must be 1 to 12 alphanumeric characters and the issuer a valid
/// account strkey.
#[must_use]
pub fn parse_asset(asset: &str) -> Option<(&str, &str)> {
    let (code, issuer) = asset.split_once(':')?;
    (ASSET_CODE.is_match(code) && StellarAddressFormat::is_account(issuer)).then_some((code, issuer))
}
