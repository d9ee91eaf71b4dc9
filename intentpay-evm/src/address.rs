use alloy_primitives::Address;
use intentpay::address::AddressFormat;
use intentpay::chain::ChainFamily;

/// EVM address check.
///
/// Accepts `0x` followed by 40 hex digits. All-lowercase and all-uppercase
/// digits are accepted as is; mixed case must be a valid EIP-55 checksum.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvmAddressFormat;

impl EvmAddressFormat {
    /// Parses an address, enforcing the checksum when the input is mixed case.
    #[must_use]
    pub fn parse(address: &str) -> Option<Address> {
        let hex = address.strip_prefix("0x")?;
        if hex.len() != 40 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let has_lower = hex.bytes().any(|b| b.is_ascii_lowercase());
        let has_upper = hex.bytes().any(|b| b.is_ascii_uppercase());
        if has_lower && has_upper {
            Address::parse_checksummed(address, None).ok()
        } else {
            address.parse().ok()
        }
    }
}

impl AddressFormat for EvmAddressFormat {
    fn family(&self) -> ChainFamily {
        ChainFamily::Evm
    }

    fn is_valid(&self, address: &str) -> bool {
        Self::parse(address).is_some()
    }
}
