//! The flows behind each subcommand.
//!
//! Each function takes its collaborators explicitly so tests can run them
//! against a fixture registry and a mocked API.

use intentpay::address::AddressValidator;
use intentpay::chain::{ChainFamily, ChainId, TokenInfo};
use intentpay::format::{contract_address, intent_title};
use intentpay::proto::{PaymentDisplay, PaymentRequest};
use intentpay::registry::{StaticRegistry, TokenRegistry};
use intentpay::{BridgeResolver, CanonicalOrder, OrderHydrator, RoutingRequest, RoutingResult};
use intentpay_http::PaymentsApi;
use serde::Serialize;

use crate::cli::{PayArgs, RouteArgs};
use crate::config::DemoConfig;
use crate::error::DemoError;

/// Resolves a route without calling the API.
///
/// # Errors
///
/// Returns [`DemoError::Bridge`] if the route does not resolve.
pub fn route<R, V>(registry: &R, validator: &V, args: &RouteArgs) -> Result<RoutingResult, DemoError>
where
    R: TokenRegistry + ?Sized,
    V: AddressValidator + ?Sized,
{
    let request = RoutingRequest::from(args);
    Ok(BridgeResolver::new(registry, validator).resolve(&request)?)
}

/// Builds the creation request for a resolved route.
///
/// # Errors
///
/// Returns [`DemoError::Request`] if the route cannot be encoded.
pub fn build_request<R>(
    registry: &R,
    routing: &RoutingResult,
    args: &PayArgs,
    config: &DemoConfig,
) -> Result<PaymentRequest, DemoError>
where
    R: TokenRegistry + ?Sized,
{
    let title = args.title.clone().unwrap_or_else(|| {
        let chain_name = registry
            .chain_by_id(args.route.to_chain)
            .map_or("unknown chain", |c| c.name);
        intent_title(
            &routing.destination.amount_units,
            &routing.destination.token_symbol,
            chain_name,
        )
    });

    let mut request = PaymentRequest::from_routing(routing, PaymentDisplay::usd(title))?
        .with_fee_type(args.fee_type);
    if let Some(order_id) = &args.order_id {
        request = request.with_order_id(order_id);
    }
    if let Some(memo) = &args.memo {
        request = request.with_receiver_memo(memo);
    }
    if let Some(url) = &config.webhook_url {
        request = request.with_webhook(url, config.webhook_secret.clone());
    }
    Ok(request)
}

/// Resolves a route, creates the payment and hydrates the stored record.
///
/// # Errors
///
/// Returns [`DemoError`] if any step fails.
pub async fn pay<R, V, A>(
    registry: &R,
    validator: &V,
    api: &A,
    args: &PayArgs,
    config: &DemoConfig,
) -> Result<CanonicalOrder, DemoError>
where
    R: TokenRegistry + Sync + ?Sized,
    V: AddressValidator + Sync + ?Sized,
    A: PaymentsApi + ?Sized,
{
    let routing = route(registry, validator, &args.route)?;
    tracing::info!(
        preferred_chain = %routing.preferred.preferred_chain,
        destination_chain = %routing.destination.chain_id,
        is_intent_payment = routing.is_intent_payment,
        payee = %contract_address(&args.route.to_address, 4),
        "Route resolved"
    );

    let request = build_request(registry, &routing, args, config)?;
    let record = api.create_payment(&request).await?;
    tracing::info!(payment_id = record.id.as_deref(), "Payment created");

    Ok(OrderHydrator::new(registry).hydrate_with_fee_type(&record, args.fee_type)?)
}

/// Fetches a payment and hydrates it.
///
/// # Errors
///
/// Returns [`DemoError`] if the fetch or the hydration fails.
pub async fn status<R, A>(registry: &R, api: &A, id: &str) -> Result<CanonicalOrder, DemoError>
where
    R: TokenRegistry + Sync + ?Sized,
    A: PaymentsApi + ?Sized,
{
    let record = api.get_payment(id).await?;
    if let Some(status) = record.status {
        tracing::info!(payment_id = id, %status, "Fetched payment");
    }
    Ok(OrderHydrator::new(registry).hydrate(&record)?)
}

/// A payout chain with its payout tokens.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainListing {
    /// Chain id.
    pub chain_id: ChainId,
    /// Display name.
    pub name: &'static str,
    /// Address family.
    pub family: ChainFamily,
    /// Payout tokens on the chain.
    pub tokens: Vec<TokenInfo>,
}

/// Lists supported chains and their supported tokens, by chain id.
#[must_use]
pub fn chains(registry: &StaticRegistry) -> Vec<ChainListing> {
    registry
        .chains()
        .filter(|chain| chain.supported)
        .map(|chain| ChainListing {
            chain_id: chain.chain_id,
            name: chain.name,
            family: chain.family,
            tokens: registry
                .tokens_on(chain.chain_id)
                .iter()
                .filter(|t| t.supported)
                .copied()
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::networks::{full_registry, full_validator};
    use intentpay::chain::{BASE_MAINNET, STELLAR_MAINNET};
    use intentpay::proto::FeeType;

    fn pay_args() -> PayArgs {
        PayArgs {
            route: RouteArgs {
                to_chain: BASE_MAINNET,
                to_token: "0x833589fcd6edb6e08f4c7c32d4f71b54bda02913".into(),
                to_address: "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".into(),
                to_units: "12.5".into(),
                preferred_chain: 137,
                preferred_token: "0x3c499c542cEF5E3811e1192ce70d8cC03d5c3359".into(),
            },
            title: None,
            order_id: Some("order-1".into()),
            fee_type: FeeType::ExactIn,
            memo: None,
        }
    }

    #[test]
    fn test_build_request_default_title() {
        let registry = full_registry();
        let validator = full_validator(&registry);
        let args = pay_args();
        let routing = route(&registry, &validator, &args.route).unwrap();
        let config = DemoConfig {
            webhook_url: Some("https://shop.example/hook".into()),
            ..DemoConfig::default()
        };

        let request = build_request(&registry, &routing, &args, &config).unwrap();
        assert_eq!(request.display.title, "Pay 12.5 USDC on Base");
        assert_eq!(request.order_id.as_deref(), Some("order-1"));
        assert_eq!(request.fee_type, Some(FeeType::ExactIn));
        assert_eq!(request.source.chain_id, 137);
        assert_eq!(request.destination.chain_id, BASE_MAINNET);
        assert_eq!(
            request.destination.token_address.as_deref(),
            Some("0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913")
        );
        assert_eq!(request.webhook_url.as_deref(), Some("https://shop.example/hook"));
    }

    #[test]
    fn test_route_error_surfaces() {
        let registry = full_registry();
        let validator = full_validator(&registry);
        let mut args = pay_args();
        args.route.to_address = "not-an-address".into();
        assert!(matches!(
            route(&registry, &validator, &args.route),
            Err(DemoError::Bridge(_))
        ));
    }

    #[test]
    fn test_chains_lists_only_supported() {
        let registry = full_registry();
        let listing = chains(&registry);
        assert!(listing.iter().all(|c| c.tokens.iter().all(|t| t.supported)));
        assert!(!listing.iter().any(|c| c.name == "Avalanche"));
        let stellar = listing.iter().find(|c| c.chain_id == STELLAR_MAINNET).unwrap();
        assert_eq!(stellar.tokens.len(), 1);
        assert_eq!(stellar.tokens[0].symbol, "USDC");
        assert!(listing.windows(2).all(|w| w[0].chain_id < w[1].chain_id));
    }
}
