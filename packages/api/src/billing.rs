//! # Payment-provider client
//!
//! The payment provider is consumed as an opaque HTTPS API: this module
//! creates customers, checkout sessions, and billing-portal sessions, and
//! hands the resulting redirect URL back to the caller. No wire format is
//! owned here beyond the form parameters sent and the `id`/`url` fields
//! read back.
//!
//! Subscription lifecycle (renewals, cancellations) is managed on the
//! provider's side through the portal; the local `subscriptions` row is a
//! cached view, not the source of truth.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::settings::Billing;

#[derive(Debug, Error)]
pub enum BillingError {
    #[error("billing is not configured: set billing.secret_key")]
    NotConfigured,
    #[error("payment provider request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("payment provider response missing field: {0}")]
    MalformedResponse(&'static str),
}

#[derive(Debug, Deserialize)]
struct CustomerResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
    #[allow(dead_code)]
    id: String,
    url: Option<String>,
}

/// Thin client over the provider's REST API.
pub struct BillingClient {
    http: Client,
    config: Billing,
}

impl BillingClient {
    /// Create a client from billing settings. Errors if no secret key is
    /// configured, so callers can surface "billing disabled" before any
    /// network call.
    pub fn new(config: Billing) -> Result<Self, BillingError> {
        if config.secret_key.is_empty() {
            return Err(BillingError::NotConfigured);
        }
        Ok(Self {
            http: Client::new(),
            config,
        })
    }

    /// Register a customer for `email` and return the provider's id.
    pub async fn create_customer(&self, email: &str) -> Result<String, BillingError> {
        let resp: CustomerResponse = self
            .http
            .post(format!("{}/customers", self.config.api_base))
            .bearer_auth(&self.config.secret_key)
            .form(&[("email", email)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(resp.id)
    }

    /// Create a subscription checkout session and return its redirect URL.
    pub async fn create_checkout_session(
        &self,
        customer_id: &str,
        price_id: &str,
    ) -> Result<String, BillingError> {
        let params = checkout_params(
            customer_id,
            price_id,
            &self.config.success_url,
            &self.config.cancel_url,
        );
        let resp: SessionResponse = self
            .http
            .post(format!("{}/checkout/sessions", self.config.api_base))
            .bearer_auth(&self.config.secret_key)
            .form(&params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        resp.url.ok_or(BillingError::MalformedResponse("url"))
    }

    /// Create a billing-portal session and return its redirect URL.
    pub async fn create_portal_session(&self, customer_id: &str) -> Result<String, BillingError> {
        let params = portal_params(customer_id, &self.config.portal_return_url);
        let resp: SessionResponse = self
            .http
            .post(format!("{}/billing_portal/sessions", self.config.api_base))
            .bearer_auth(&self.config.secret_key)
            .form(&params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        resp.url.ok_or(BillingError::MalformedResponse("url"))
    }
}

fn checkout_params<'a>(
    customer_id: &'a str,
    price_id: &'a str,
    success_url: &'a str,
    cancel_url: &'a str,
) -> Vec<(&'static str, &'a str)> {
    vec![
        ("mode", "subscription"),
        ("customer", customer_id),
        ("line_items[0][price]", price_id),
        ("line_items[0][quantity]", "1"),
        ("success_url", success_url),
        ("cancel_url", cancel_url),
    ]
}

fn portal_params<'a>(customer_id: &'a str, return_url: &'a str) -> Vec<(&'static str, &'a str)> {
    vec![("customer", customer_id), ("return_url", return_url)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret: &str) -> Billing {
        Billing {
            api_base: "https://api.example.test/v1".into(),
            secret_key: secret.into(),
            monthly_price_id: "price_monthly".into(),
            yearly_price_id: "price_yearly".into(),
            success_url: "https://app.test/pricing?status=success".into(),
            cancel_url: "https://app.test/pricing?status=cancelled".into(),
            portal_return_url: "https://app.test/pricing".into(),
        }
    }

    #[test]
    fn missing_secret_key_is_not_configured() {
        assert!(matches!(
            BillingClient::new(config("")),
            Err(BillingError::NotConfigured)
        ));
        assert!(BillingClient::new(config("sk_test_123")).is_ok());
    }

    #[test]
    fn checkout_params_shape() {
        let params = checkout_params("cus_1", "price_monthly", "https://s", "https://c");
        assert!(params.contains(&("mode", "subscription")));
        assert!(params.contains(&("customer", "cus_1")));
        assert!(params.contains(&("line_items[0][price]", "price_monthly")));
        assert!(params.contains(&("line_items[0][quantity]", "1")));
        assert!(params.contains(&("success_url", "https://s")));
        assert!(params.contains(&("cancel_url", "https://c")));
    }

    #[test]
    fn portal_params_shape() {
        let params = portal_params("cus_1", "https://r");
        assert_eq!(
            params,
            vec![("customer", "cus_1"), ("return_url", "https://r")]
        );
    }
}
