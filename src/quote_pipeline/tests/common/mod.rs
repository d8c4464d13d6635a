#![allow(dead_code)]

use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use quote_pipeline::{
    models::{
        bar::{Bar, BarSeries, BarTime},
        request::FetchRequest,
    },
    providers::{ApiSnafu, DataProvider, InvalidSymbolSnafu, ProviderError},
};

/// What the stub answers for one symbol.
#[derive(Clone)]
pub enum Canned {
    Bars(Vec<Bar>),
    Unknown,
    Outage(String),
}

/// In-memory provider that records every request it receives.
#[derive(Default)]
pub struct StubProvider {
    answers: HashMap<String, Canned>,
    pub requests: Mutex<Vec<FetchRequest>>,
}

impl StubProvider {
    pub fn with(mut self, symbol: &str, answer: Canned) -> Self {
        self.answers.insert(symbol.to_string(), answer);
        self
    }

    pub fn set(&mut self, symbol: &str, answer: Canned) {
        self.answers.insert(symbol.to_string(), answer);
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl DataProvider for StubProvider {
    async fn fetch_bars(&self, request: &FetchRequest) -> Result<BarSeries, ProviderError> {
        self.requests.lock().unwrap().push(request.clone());
        match self.answers.get(&request.symbol) {
            Some(Canned::Bars(bars)) => Ok(BarSeries::new(
                request.symbol.clone(),
                request.interval,
                bars.clone(),
            )),
            Some(Canned::Outage(message)) => ApiSnafu {
                symbol: request.symbol.clone(),
                message: message.clone(),
            }
            .fail(),
            Some(Canned::Unknown) | None => InvalidSymbolSnafu {
                symbol: request.symbol.clone(),
            }
            .fail(),
        }
    }
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 21, 0, 0).unwrap()
}

/// One bar per day starting 2024-02-01 14:30 UTC, open = high = low = close.
pub fn daily_bars(closes: &[f64]) -> Vec<Bar> {
    let start = Utc.with_ymd_and_hms(2024, 2, 1, 14, 30, 0).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| Bar {
            timestamp: BarTime::Naive((start + Duration::days(i as i64)).naive_utc()),
            open: close,
            high: close,
            low: close,
            close,
            volume: 1_000,
        })
        .collect()
}

/// Minute bars from 14:30 UTC given as `(open, close)` pairs.
pub fn minute_bars(rows: &[(f64, f64)]) -> Vec<Bar> {
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 14, 30, 0).unwrap();
    rows.iter()
        .enumerate()
        .map(|(i, &(open, close))| Bar {
            timestamp: BarTime::Naive((start + Duration::minutes(i as i64)).naive_utc()),
            open,
            high: open.max(close),
            low: open.min(close),
            close,
            volume: 50,
        })
        .collect()
}
