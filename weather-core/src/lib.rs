//! Core library for the `cityweather` screen.
//!
//! This crate defines:
//! - The decoded weather model and its strict JSON decoder
//! - The presenter that turns a model into ordered screen items
//! - The data source seam (HTTP or saved file) and on-disk configuration
//!
//! It is used by `cityweather-cli`, but any other renderer can consume
//! [`RenderItem`]s the same way.

pub mod config;
pub mod decode;
pub mod model;
pub mod present;
pub mod source;

use anyhow::{Context, Result};

pub use config::Config;
pub use decode::{DecodeError, DecodeErrorKind, decode, encode, encode_pretty};
pub use model::{CityInfo, Forecast, WeatherResponse, WeatherSummary};
pub use present::{ForecastRow, RenderItem, WIND_SEPARATOR, present};
pub use source::{FileSource, HttpSource, WeatherSource, source_from_config};

/// Fetch one payload from `source` and decode it.
///
/// A [`DecodeError`] stays reachable through `downcast_ref` on the returned error.
pub async fn load_weather(source: &dyn WeatherSource) -> Result<WeatherResponse> {
    log::info!("fetching weather from {}", source.describe());
    let raw = source.fetch_raw().await?;

    decode(&raw).with_context(|| {
        format!("Payload from {} is not a weather response", source.describe())
    })
}
