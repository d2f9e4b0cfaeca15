use serde_json::Value;

use crate::gold_price::gold_price_constants::{
    DEFAULT_GOLD_API_URL, GOLD_PRICE_FIELD, PROVIDER_TIMEOUT,
};
use crate::gold_price::gold_price_errors::{GoldPriceError, Result};
use crate::gold_price::providers::gold_price_provider::GoldPriceProvider;

/// Provider backed by the goldapi.io latest-rate endpoint, authenticated via
/// an `x-access-token` header.
pub struct GoldApiProvider {
    client: reqwest::Client,
    api_url: String,
    api_token: String,
}

impl GoldApiProvider {
    pub fn new(api_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(PROVIDER_TIMEOUT)
            .build()
            .expect("Failed to initialize HTTP client");

        GoldApiProvider {
            client,
            api_url: api_url.into(),
            api_token: api_token.into(),
        }
    }

    /// Builds a provider from `GOLD_API_URL` / `GOLD_API_TOKEN` environment
    /// variables, defaulting to the public endpoint.
    pub fn from_env() -> Self {
        let api_url =
            std::env::var("GOLD_API_URL").unwrap_or_else(|_| DEFAULT_GOLD_API_URL.to_string());
        let api_token = std::env::var("GOLD_API_TOKEN").unwrap_or_default();
        Self::new(api_url, api_token)
    }

    fn extract_price(payload: &Value) -> Result<f64> {
        payload
            .get(GOLD_PRICE_FIELD)
            .and_then(Value::as_f64)
            .ok_or_else(|| {
                GoldPriceError::InvalidData(format!(
                    "payload missing numeric field '{}'",
                    GOLD_PRICE_FIELD
                ))
            })
    }
}

#[async_trait::async_trait]
impl GoldPriceProvider for GoldApiProvider {
    async fn fetch_price_per_gram(&self) -> Result<f64> {
        let response = self
            .client
            .get(&self.api_url)
            .header("x-access-token", &self.api_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GoldPriceError::ProviderError(format!(
                "gold API returned status {}",
                status
            )));
        }

        let payload = response.json::<Value>().await?;
        Self::extract_price(&payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_price_from_valid_payload() {
        let payload = json!({ "price": 4000.5, "price_gram_24k": 130.25 });
        assert_eq!(GoldApiProvider::extract_price(&payload).unwrap(), 130.25);
    }

    #[test]
    fn test_extract_price_missing_field() {
        let payload = json!({ "price": 4000.5 });
        assert!(matches!(
            GoldApiProvider::extract_price(&payload),
            Err(GoldPriceError::InvalidData(_))
        ));
    }

    #[test]
    fn test_extract_price_non_numeric_field() {
        let payload = json!({ "price_gram_24k": "130.25" });
        assert!(matches!(
            GoldApiProvider::extract_price(&payload),
            Err(GoldPriceError::InvalidData(_))
        ));
    }
}
