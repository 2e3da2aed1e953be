//! Hard-coded demo datasets for the showcase.
//!
//! Everything here is simulated; the showcase has no data feeds.

/// Intraday market samples behind the "Piyasa Hareketleri" chart.
pub const MARKET_DATA: [f64; 30] = [
    8200.0, 8240.0, 8220.0, 8280.0, 8350.0, 8320.0, 8400.0, 8450.0, 8420.0, 8480.0, 8550.0,
    8500.0, 8600.0, 8650.0, 8620.0, 8700.0, 8750.0, 8720.0, 8800.0, 8850.0, 8900.0, 8850.0,
    8950.0, 9050.0, 9000.0, 9100.0, 9150.0, 9120.0, 9250.0, 9450.0,
];

/// Closing price shown in the chart header when nothing is hovered.
pub const MARKET_CLOSING_LABEL: &str = "9,450.23";

/// Day-over-day change badge next to the closing price.
pub const MARKET_CHANGE_LABEL: &str = "%1.24";

/// Session hour marks along the market chart x-axis.
pub const SESSION_HOURS: [&str; 6] = ["09:00", "11:00", "13:00", "15:00", "17:00", "18:00"];

/// Cups per day for the weekly coffee bar chart, Monday first.
pub const COFFEE_CUPS: [(u32, &str); 7] = [
    (40, "Pzt"),
    (70, "Sal"),
    (45, "Çar"),
    (90, "Per"),
    (60, "Cum"),
    (30, "Cmt"),
    (80, "Paz"),
];

/// Figures for the stat cards.
pub const TOTAL_USERS_LABEL: &str = "12,450";
pub const HAPPINESS_LABEL: &str = "%98";

#[cfg(test)]
mod tests {
    use cozyui_chart::{resolve, ContainerRect, PlotArea, SeriesProjection};

    use super::*;

    #[test]
    fn market_series_resolves_at_screen_center() {
        let projection = SeriesProjection::project(&MARKET_DATA, PlotArea::default()).unwrap();
        let rect = ContainerRect {
            left: 0.0,
            width: 1000.0,
        };
        let sample = resolve(&projection, 500.0, rect).unwrap();
        assert_eq!(sample.value, 8620.0);
        assert_eq!(sample.label, "₺8,620");
    }

    #[test]
    fn closing_label_matches_the_final_sample_magnitude() {
        // The header label carries intraday decimals; the series holds
        // whole-lira samples ending on the same figure.
        assert_eq!(MARKET_DATA.len(), 30);
        assert_eq!(MARKET_DATA[29], 9450.0);
        assert!(MARKET_CLOSING_LABEL.starts_with("9,450"));
    }

    #[test]
    fn coffee_week_covers_seven_days() {
        assert_eq!(COFFEE_CUPS.len(), 7);
        assert_eq!(COFFEE_CUPS[0].1, "Pzt");
        assert_eq!(COFFEE_CUPS[6].1, "Paz");
    }
}
