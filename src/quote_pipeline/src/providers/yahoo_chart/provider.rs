use async_trait::async_trait;
use reqwest::{Client, header};
use snafu::ResultExt;
use tracing::debug;

use crate::{
    config::ProviderSettings,
    models::{bar::BarSeries, request::FetchRequest},
    providers::{
        ApiSnafu, ClientBuildSnafu, DataProvider, InternalSnafu, InvalidUserAgentSnafu,
        ProviderError, ProviderInitError, RequestSnafu,
        yahoo_chart::{
            params::{construct_params, validate_request},
            response::{ChartEnvelope, interpret},
        },
    },
};

pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Yahoo rejects requests without a browser-like user agent.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Characters of a non-JSON error body kept in the error message.
const ERROR_BODY_PREVIEW: usize = 200;

#[derive(Debug, Clone)]
pub struct YahooChartProvider {
    client: Client,
    base_url: String,
}

impl YahooChartProvider {
    /// Creates a provider against the public endpoint.
    pub fn new() -> Result<Self, ProviderInitError> {
        Self::with_settings(&ProviderSettings::default())
    }

    pub fn with_settings(settings: &ProviderSettings) -> Result<Self, ProviderInitError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&settings.user_agent).context(InvalidUserAgentSnafu)?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .context(ClientBuildSnafu)?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn chart_url(&self, symbol: &str) -> String {
        format!("{}/{}", self.base_url, symbol.trim())
    }
}

#[async_trait]
impl DataProvider for YahooChartProvider {
    async fn fetch_bars(&self, request: &FetchRequest) -> Result<BarSeries, ProviderError> {
        validate_request(request)?;

        let url = self.chart_url(&request.symbol);
        let query = construct_params(request);
        debug!(%url, ?query, "requesting chart");

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .context(RequestSnafu {
                symbol: &request.symbol,
            })?;
        let status = response.status();
        let body = response.text().await.context(RequestSnafu {
            symbol: &request.symbol,
        })?;

        // Yahoo wraps most failures (404 included) in a regular chart envelope.
        let envelope = match serde_json::from_str::<ChartEnvelope>(&body) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return ApiSnafu {
                    symbol: &request.symbol,
                    message: format!("HTTP {status}: {}", preview(&body)),
                }
                .fail();
            }
            Err(e) => {
                return InternalSnafu {
                    message: format!("failed to decode chart response for {}: {e}", request.symbol),
                }
                .fail();
            }
        };

        interpret(envelope, request)
    }
}

fn preview(body: &str) -> &str {
    match body.char_indices().nth(ERROR_BODY_PREVIEW) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
