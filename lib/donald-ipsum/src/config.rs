use derivative::Derivative;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// Root of the production API.
pub const DEFAULT_BASE_URL: &str = "https://api.donaldipsum.net/v1";

/// Client configuration, fixed for the lifetime of an [`crate::ApiClient`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_", into)]
#[non_exhaustive]
pub struct ApiConfig {
    /// Scheme, host and base path the endpoint names are appended to
    #[serde(default = "base_url_default")]
    #[derivative(Default(value = "base_url_default()"))]
    pub base_url: String,
}

fn base_url_default() -> String {
    DEFAULT_BASE_URL.to_string()
}
