use serde::Serialize;

use crate::model::{Forecast, WeatherResponse};

/// Joins wind direction and force in [`ForecastRow::wind`].
pub const WIND_SEPARATOR: &str = " ";

/// One view-ready block of the weather screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "item", rename_all = "snake_case")]
pub enum RenderItem {
    Header {
        city: String,
        date: String,
    },
    Summary {
        wendu: String,
        quality: String,
        shidu: String,
        pm25: f64,
        pm10: f64,
        ganmao: String,
    },
    ForecastRow(ForecastRow),
}

/// A forecast entry plus its derived wind label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastRow {
    pub date: String,
    pub high: String,
    pub low: String,
    pub week: String,
    pub kind: String,
    pub aqi: i64,
    pub fx: String,
    pub fl: String,
    pub notice: String,
    pub wind: String,
}

impl From<&Forecast> for ForecastRow {
    fn from(fc: &Forecast) -> Self {
        Self {
            date: fc.date.clone(),
            high: fc.high.clone(),
            low: fc.low.clone(),
            week: fc.week.clone(),
            kind: fc.kind.clone(),
            aqi: fc.aqi,
            fx: fc.fx.clone(),
            fl: fc.fl.clone(),
            notice: fc.notice.clone(),
            wind: format!("{}{WIND_SEPARATOR}{}", fc.fx, fc.fl),
        }
    }
}

/// Map a decoded response to the ordered screen items: header, summary,
/// then one row per forecast entry in document order.
pub fn present(response: &WeatherResponse) -> Vec<RenderItem> {
    let summary = &response.data;
    let mut items = Vec::with_capacity(2 + summary.forecast.len());

    items.push(RenderItem::Header {
        city: response.city_info.city.clone(),
        date: response.date.clone(),
    });
    items.push(RenderItem::Summary {
        wendu: summary.wendu.clone(),
        quality: summary.quality.clone(),
        shidu: summary.shidu.clone(),
        pm25: summary.pm25,
        pm10: summary.pm10,
        ganmao: summary.ganmao.clone(),
    });
    items.extend(summary.forecast.iter().map(|fc| RenderItem::ForecastRow(fc.into())));

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::{decode, tests::BEIJING};

    #[test]
    fn scenario_yields_header_summary_and_one_row() {
        let items = present(&decode(BEIJING).unwrap());
        assert_eq!(items.len(), 3);

        assert_eq!(
            items[0],
            RenderItem::Header { city: "Beijing".into(), date: "2025-03-18".into() }
        );
        match &items[1] {
            RenderItem::Summary { wendu, quality, shidu, pm25, pm10, ganmao } => {
                assert_eq!(wendu, "18");
                assert_eq!(quality, "Good");
                assert_eq!(shidu, "40%");
                assert_eq!(*pm25, 12.0);
                assert_eq!(*pm10, 20.0);
                assert_eq!(ganmao, "Low risk");
            }
            other => panic!("expected summary, got {other:?}"),
        }
        match &items[2] {
            RenderItem::ForecastRow(row) => {
                assert_eq!(row.wind, "N 3");
                assert_eq!(row.date, "2025-03-19");
                assert_eq!(row.kind, "Sunny");
                assert_eq!(row.aqi, 30);
                assert_eq!(row.notice, "Enjoy");
            }
            other => panic!("expected forecast row, got {other:?}"),
        }
    }

    #[test]
    fn empty_forecast_yields_two_items() {
        let raw = BEIJING.replace(
            r#""forecast":[{"date":"2025-03-19","high":"20℃","low":"10℃","week":"Wed","type":"Sunny","aqi":30,"fx":"N","fl":"3","notice":"Enjoy"}]"#,
            r#""forecast":[]"#,
        );
        let response = decode(&raw).unwrap();
        assert!(response.data.forecast.is_empty());
        assert_eq!(present(&response).len(), 2);
    }

    #[test]
    fn rows_keep_document_order() {
        let mut response = decode(BEIJING).unwrap();
        let template = response.data.forecast[0].clone();
        response.data.forecast = ["2025-03-21", "2025-03-19", "2025-03-20"]
            .into_iter()
            .map(|date| Forecast { date: date.into(), ..template.clone() })
            .collect();

        let dates: Vec<_> = present(&response)
            .into_iter()
            .filter_map(|item| match item {
                RenderItem::ForecastRow(row) => Some(row.date),
                _ => None,
            })
            .collect();
        assert_eq!(dates, ["2025-03-21", "2025-03-19", "2025-03-20"]);
    }

    #[test]
    fn length_is_two_plus_forecast_count() {
        let mut response = decode(BEIJING).unwrap();
        let template = response.data.forecast[0].clone();
        for n in [0, 1, 5, 15] {
            response.data.forecast = vec![template.clone(); n];
            assert_eq!(present(&response).len(), 2 + n);
        }
    }

    #[test]
    fn present_is_idempotent() {
        let response = decode(BEIJING).unwrap();
        assert_eq!(present(&response), present(&response));
    }

    #[test]
    fn wind_joins_multibyte_labels() {
        let mut response = decode(BEIJING).unwrap();
        response.data.forecast[0].fx = "西北风".into();
        response.data.forecast[0].fl = "3级".into();

        let RenderItem::ForecastRow(row) = &present(&response)[2] else {
            panic!("third item must be a forecast row");
        };
        assert_eq!(row.wind, "西北风 3级");
    }

    #[test]
    fn items_serialize_with_tag() {
        let items = present(&decode(BEIJING).unwrap());
        let json = serde_json::to_string(&items[0]).unwrap();
        assert_eq!(json, r#"{"item":"header","city":"Beijing","date":"2025-03-18"}"#);
    }
}
