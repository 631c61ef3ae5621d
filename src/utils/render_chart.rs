use crate::constants::{CHART_HEADER_WIDTH, CHART_HEIGHT};
use crate::models::Stock;
use std::fmt::Write;

/// Renders the close prices of `stock` as a vertical ASCII bar chart, one column per row of
/// history, oldest on the left.
///
/// Every bar has a `#` baseline plus up to `CHART_HEIGHT` cells scaled between the lowest and
/// highest close. A flat series renders baselines only. Rows without a parsable price in
/// `close_column` get no bar and are not used for the start and end dates either. Returns
/// `None` if no row has a parsable price.
pub fn render_chart(stock: &Stock, close_column: usize) -> Option<String> {
    let points: Vec<(&str, f64)> = stock
        .history
        .iter()
        .filter_map(|row| {
            let close = row.get(close_column)?.trim().parse::<f64>().ok()?;
            Some((row.first().map_or("", String::as_str), close))
        })
        .collect();

    let (date_start, _) = *points.first()?;
    let (date_end, _) = *points.last()?;
    let closes: Vec<f64> = points.iter().map(|&(_, close)| close).collect();

    let min_value = closes.iter().copied().fold(f64::INFINITY, f64::min);
    let max_value = closes.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max_value - min_value;

    let heights: Vec<usize> = closes
        .iter()
        .map(|close| {
            if range > 0.0 {
                (((close - min_value) / range) * CHART_HEIGHT as f64) as usize
            } else {
                0
            }
        })
        .map(|height| height.min(CHART_HEIGHT))
        .collect();

    let name = format!("{} [{}]", stock.name, stock.symbol);

    let mut chart = String::new();
    let _ = writeln!(
        chart,
        "{:=^width$}",
        "| PLOT DATA |",
        width = CHART_HEADER_WIDTH
    );
    let _ = writeln!(chart, "Name: {:>24}", name);
    let _ = writeln!(chart, "Max.: {:24.2}", max_value);
    let _ = writeln!(chart, "Min.: {:24.2}", min_value);
    let _ = writeln!(chart, "Date start: {:>18}", date_start);
    let _ = writeln!(chart, "Date end: {:>20}", date_end);
    let _ = writeln!(chart);
    let _ = writeln!(chart, "{:.2}", max_value);

    // Row `level` 0 is the baseline; it is drawn last.
    for level in (0..=CHART_HEIGHT).rev() {
        chart.push_str("   |");
        for &height in &heights {
            chart.push(if level <= height { '#' } else { ' ' });
        }
        chart.push('\n');
    }

    let _ = writeln!(chart, "{:.2}", min_value);

    Some(chart)
}
