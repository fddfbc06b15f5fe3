//! Plain-text rendering of the weather screen.

use std::fmt;

use cityweather_core::{ForecastRow, RenderItem};

pub const TITLE: &str = "All data from the weather service";

/// Label column width for summary and card lines.
const LABEL_WIDTH: usize = 13;

/// Displays a presented item list as static text: header, summary, then
/// one card per forecast row.
pub struct TextScreen<'a>(pub &'a [RenderItem]);

impl fmt::Display for TextScreen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE}")?;
        for item in self.0 {
            match item {
                RenderItem::Header { city, date } => {
                    writeln!(f, "City: {city}")?;
                    writeln!(f, "Date: {date}")?;
                }
                RenderItem::Summary { wendu, quality, shidu, pm25, pm10, ganmao } => {
                    writeln!(f)?;
                    let lines = summary_lines(wendu, quality, shidu, *pm25, *pm10, ganmao);
                    for (label, value) in lines {
                        writeln!(f, "{label:LABEL_WIDTH$}{value}")?;
                    }
                }
                RenderItem::ForecastRow(row) => {
                    writeln!(f)?;
                    write_card(f, row)?;
                }
            }
        }
        Ok(())
    }
}

fn write_card(f: &mut fmt::Formatter<'_>, row: &ForecastRow) -> fmt::Result {
    writeln!(f, "┌ {}", card_title(row))?;
    for (label, value) in card_lines(row) {
        writeln!(f, "│ {label:LABEL_WIDTH$}{value}")?;
    }
    writeln!(f, "└")
}

pub fn summary_lines(
    wendu: &str,
    quality: &str,
    shidu: &str,
    pm25: f64,
    pm10: f64,
    ganmao: &str,
) -> [(&'static str, String); 6] {
    [
        ("Temperature", format!("{wendu}℃")),
        ("Air quality", quality.to_string()),
        ("Humidity", shidu.to_string()),
        // Debug keeps the fractional part of whole values: 12.0, not 12.
        ("PM2.5", format!("{pm25:?}")),
        ("PM10", format!("{pm10:?}")),
        ("Health tip", ganmao.to_string()),
    ]
}

pub fn card_title(row: &ForecastRow) -> String {
    format!("{} ({})", row.date, row.week)
}

pub fn card_lines(row: &ForecastRow) -> [(&'static str, String); 5] {
    [
        ("Weather", row.kind.clone()),
        ("Temperature", format!("{} / {}", row.high, row.low)),
        ("AQI", row.aqi.to_string()),
        ("Wind", row.wind.clone()),
        ("Notice", row.notice.clone()),
    ]
}

pub fn to_text(items: &[RenderItem]) -> String {
    TextScreen(items).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cityweather_core::{decode, present};

    const PAYLOAD: &str = r#"{"message":"ok","status":1,"date":"2025-03-18","time":"08:00","cityInfo":{"city":"Beijing"},"data":{"shidu":"40%","pm25":12.0,"pm10":20.5,"quality":"Good","wendu":"18","ganmao":"Low risk","forecast":[{"date":"2025-03-19","high":"20℃","low":"10℃","week":"Wed","type":"Sunny","aqi":30,"fx":"N","fl":"3","notice":"Enjoy"},{"date":"2025-03-20","high":"18℃","low":"8℃","week":"Thu","type":"Cloudy","aqi":45,"fx":"NW","fl":"4","notice":"Take a jacket"}]}}"#;

    #[test]
    fn renders_header_summary_and_cards() {
        let text = to_text(&present(&decode(PAYLOAD).unwrap()));

        assert!(text.starts_with(TITLE));
        assert!(text.contains("City: Beijing\nDate: 2025-03-18\n"));
        assert!(text.contains("Temperature  18℃\n"));
        assert!(text.contains("PM2.5        12.0\n"));
        assert!(text.contains("PM10         20.5\n"));
        assert!(text.contains("┌ 2025-03-19 (Wed)\n"));
        assert!(text.contains("│ Temperature  20℃ / 10℃\n"));
        assert!(text.contains("│ Wind         NW 4\n"));
        assert_eq!(text.matches('┌').count(), 2);
    }

    #[test]
    fn cards_follow_input_order() {
        let text = to_text(&present(&decode(PAYLOAD).unwrap()));
        let first = text.find("2025-03-19 (Wed)").unwrap();
        let second = text.find("2025-03-20 (Thu)").unwrap();
        assert!(first < second);
    }

    #[test]
    fn empty_forecast_renders_no_cards() {
        let mut response = decode(PAYLOAD).unwrap();
        response.data.forecast.clear();

        let text = to_text(&present(&response));
        assert!(text.contains("Health tip   Low risk"));
        assert!(!text.contains('┌'));
    }
}
