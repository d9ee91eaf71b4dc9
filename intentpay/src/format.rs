//! Small display helpers.

/// Shortens an address to its first and last `n` characters: `0x5aAe…eAed`.
///
/// For `0x`-prefixed addresses the prefix is kept and not counted. Addresses
/// too short to shorten are returned unchanged.
#[must_use]
pub fn contract_address(address: &str, n: usize) -> String {
    let (prefix, body) = match address.strip_prefix("0x") {
        Some(body) => ("0x", body),
        None => ("", address),
    };
    let chars: Vec<char> = body.chars().collect();
    if chars.len() <= n.saturating_mul(2) {
        return address.to_owned();
    }
    let head: String = chars[..n].iter().collect();
    let tail: String = chars[chars.len() - n..].iter().collect();
    format!("{prefix}{head}…{tail}")
}

/// Title for a payment: `"Pay 1 USDC on Base"`.
#[must_use]
pub fn intent_title(amount: &str, symbol: &str, chain_name: &str) -> String {
    format!("Pay {amount} {symbol} on {chain_name}")
}
