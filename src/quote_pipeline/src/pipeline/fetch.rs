use chrono::{DateTime, Utc};
use snafu::ensure;
use tracing::info;

use crate::{
    models::{
        bar::BarSeries,
        period::Period,
        request::{FetchRequest, FetchWindow},
    },
    providers::{DataProvider, EmptySeriesSnafu, ProviderError},
};

/// Fetches `symbol` over `period`, at the period's interval.
///
/// `now` anchors the explicit window used for [`Period::OneWeek`].
pub async fn fetch(
    provider: &dyn DataProvider,
    symbol: &str,
    period: Period,
    now: DateTime<Utc>,
) -> Result<BarSeries, ProviderError> {
    fetch_request(provider, &FetchRequest::for_period(symbol, period, now)).await
}

/// Issues one provider call and rejects an empty answer.
pub async fn fetch_request(
    provider: &dyn DataProvider,
    request: &FetchRequest,
) -> Result<BarSeries, ProviderError> {
    match &request.window {
        FetchWindow::Named(range) => info!(
            symbol = %request.symbol,
            interval = %request.interval,
            %range,
            "fetching bars"
        ),
        FetchWindow::Explicit { start, end } => info!(
            symbol = %request.symbol,
            interval = %request.interval,
            %start,
            %end,
            "fetching bars"
        ),
    }

    let series = provider.fetch_bars(request).await?;
    ensure!(
        !series.is_empty(),
        EmptySeriesSnafu {
            symbol: &request.symbol
        }
    );
    Ok(series)
}
