use std::fmt;

use serde::Serialize;

/// Display label for prices. No conversion is ever performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Brl,
    Usd,
}

impl Currency {
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Brl => "BRL",
            Currency::Usd => "USD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// B3 (São Paulo) tickers carry a `.SA` suffix; everything else is shown in USD.
pub fn currency_of(symbol: &str) -> Currency {
    if symbol.ends_with(".SA") {
        Currency::Brl
    } else {
        Currency::Usd
    }
}
