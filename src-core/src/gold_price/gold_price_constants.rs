use std::time::Duration;

/// Price per gram used when no rate was ever fetched successfully
pub const FALLBACK_GOLD_PRICE_PER_GRAM: f64 = 124.0;

/// How long a fetched rate stays valid before a refresh is attempted
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60);

/// Payload field carrying the 24k per-gram price
pub const GOLD_PRICE_FIELD: &str = "price_gram_24k";

/// Upstream request timeout (the API itself imposes none)
pub const PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

/// Default upstream endpoint
pub const DEFAULT_GOLD_API_URL: &str = "https://www.goldapi.io/api/XAU/USD";
