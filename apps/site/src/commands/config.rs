//! # Config Commands

use serde::Serialize;
use tracing::debug;

use crate::state::SiteConfig;

/// Gets the current site configuration.
///
/// ## When Used
/// - First paint (store name in navbar and footer)
/// - Free-shipping banner ("Envío gratis +$500")
/// - Currency formatting
pub fn get_config(config: &SiteConfig) -> SiteConfig {
    debug!("get_config command");
    config.clone()
}

/// Amounts the shop banner and the cart drawer print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingTerms {
    pub free_shipping_threshold: String,
    pub flat_shipping_fee: String,
}

pub fn get_shipping_terms(config: &SiteConfig) -> ShippingTerms {
    debug!("get_shipping_terms command");
    ShippingTerms {
        free_shipping_threshold: config.format_currency(config.free_shipping_threshold()),
        flat_shipping_fee: config.format_currency(config.flat_shipping_fee()),
    }
}
