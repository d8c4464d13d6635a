use std::fmt::Write;

use indexmap::IndexMap;

use crate::dashboard::{
    ChartSpec, QuoteStatus, Snapshot,
    display::{HISTORICAL_HEADERS, historical_rows, indicator_table, metric_tiles, quote_tile},
};

/// Chart title, metric tiles, chart traces and both tables.
pub fn snapshot_text(snapshot: &Snapshot, chart: &ChartSpec) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", chart.title);
    let _ = writeln!(out, "currency: {}", snapshot.currency);
    out.push('\n');

    for tile in metric_tiles(snapshot) {
        match tile.delta {
            Some(delta) => {
                let _ = writeln!(out, "{:<20} {:>16}  {}", tile.label, tile.value, delta);
            }
            None => {
                let _ = writeln!(out, "{:<20} {:>16}", tile.label, tile.value);
            }
        }
    }

    out.push('\n');
    let names: Vec<&str> = chart.traces.iter().map(|t| t.name()).collect();
    let _ = writeln!(
        out,
        "traces: {} (x: {}, y: {})",
        names.join(", "),
        chart.x_axis_title,
        chart.y_axis_title
    );

    out.push_str("\nHistorical Data\n");
    out.push_str(&table(
        &HISTORICAL_HEADERS.map(String::from),
        &historical_rows(snapshot),
    ));

    let (header, rows) = indicator_table(snapshot);
    out.push_str("\nTechnical Indicators\n");
    out.push_str(&table(&header, &rows));
    out
}

/// One line per symbol; symbols without data today are skipped.
pub fn watchlist_text(quotes: &IndexMap<String, QuoteStatus>) -> String {
    let mut out = String::from("Real-Time Stock Prices\n");
    for (symbol, status) in quotes {
        match status {
            QuoteStatus::Live(quote) => {
                let tile = quote_tile(quote);
                let delta = tile.delta.unwrap_or_default();
                let _ = writeln!(out, "{:<8} {:>14}  {}", tile.label, tile.value, delta);
            }
            QuoteStatus::NoData => {}
            QuoteStatus::Failed { message } => {
                let _ = writeln!(out, "{symbol:<8} unavailable: {message}");
            }
        }
    }
    out
}

fn table<const N: usize>(header: &[String; N], rows: &[[String; N]]) -> String {
    let mut widths: [usize; N] = std::array::from_fn(|i| header[i].len());
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    let line = |cells: &[String; N], out: &mut String| {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, w)| format!("{cell:>w$}"))
            .collect();
        let _ = writeln!(out, "{}", padded.join("  "));
    };
    line(header, &mut out);
    for row in rows {
        line(row, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_right_aligns_columns() {
        let header = ["a".to_string(), "bb".to_string()];
        let rows = [["100".to_string(), "-".to_string()]];
        assert_eq!(table(&header, &rows), "  a  bb\n100   -\n");
    }
}
