//! Block view builder
//!
//! Pure mapping from (settings, snapshot, now, clock context) to the view
//! that gets rendered. No side effects, no network access: both the editor
//! preview and the static render path go through this function, so identical
//! inputs produce identical views.

use chrono::{DateTime, FixedOffset, Utc};
use chrono_tz::Tz;
use domain::entities::BlockSettings;
use domain::value_objects::Timezone;
use serde::Serialize;

use crate::ports::{HourlyEntry, WeatherReport, WeatherSnapshot};

/// Date format for the last-updated line: `Mon March 6, 2023`
const DATE_FORMAT: &str = "%a %B %-d, %Y";

/// Time format for the last-updated line and hourly entries: `11:00 AM`
const TIME_FORMAT: &str = "%-I:%M %p";

/// How timestamps are localized when building a view
///
/// The static render path shows times in the resolved location's own
/// timezone; the editor preview shows them at the viewer's UTC offset. The
/// two modes are deliberately explicit rather than unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockContext {
    /// Timestamps in the snapshot's location timezone
    LocationLocal,
    /// Timestamps at the viewer's fixed UTC offset
    ViewerLocal(FixedOffset),
}

/// The renderable state of one weather block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum BlockView {
    /// No location configured: show the required-field notice
    MissingLocation,
    /// A load is in flight
    Loading,
    /// Logical upstream failure; only the message is shown
    Error { message: String },
    /// Transport failure; show the generic apology
    Unavailable,
    /// Renderable weather data
    Weather(WeatherView),
}

/// Display-ready weather data for the block markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherView {
    pub name: String,
    pub region: String,
    pub icon: String,
    pub condition: String,
    /// Current temperature rounded to the nearest whole degree
    pub temperature: i64,
    /// Feels-like temperature rounded to the nearest whole degree
    pub feels_like: i64,
    /// Uppercase unit suffix, `F` or `C`
    pub temperature_unit: String,
    pub chance_of_rain: u8,
    pub humidity: u8,
    /// Wind speed formatted as the upstream reports it, e.g. `12.5`
    pub wind_speed: String,
    /// Speed unit suffix, `mph` or `kph`
    pub wind_unit: String,
    pub updated_date: String,
    pub updated_time: String,
    /// Hourly entries, present only when the block shows the hourly list
    pub hourly: Option<Vec<HourlyView>>,
}

/// One row of the hourly forecast list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyView {
    pub temperature: i64,
    pub icon: String,
    pub condition: String,
    pub time: String,
}

/// Build the view for a block
///
/// An empty location wins over everything else; an absent snapshot means a
/// load is in flight. Hourly entries are filtered to those strictly after
/// `now_epoch` on every call; the filtering is never cached.
#[must_use]
pub fn build_block_view(
    settings: &BlockSettings,
    snapshot: Option<&WeatherSnapshot>,
    now_epoch: i64,
    clock: ClockContext,
) -> BlockView {
    if !settings.has_location() {
        return BlockView::MissingLocation;
    }

    match snapshot {
        None => BlockView::Loading,
        Some(WeatherSnapshot::ApiError(err)) => BlockView::Error {
            message: err.message.clone(),
        },
        Some(WeatherSnapshot::Report(report)) => {
            BlockView::Weather(weather_view(report, settings, now_epoch, clock))
        }
    }
}

fn weather_view(
    report: &WeatherReport,
    settings: &BlockSettings,
    now_epoch: i64,
    clock: ClockContext,
) -> WeatherView {
    let temperature_unit = settings.measurementunit.temperature_unit();
    let speed_unit = settings.measurementunit.speed_unit();
    let timezone = &report.place.timezone;

    let hourly = settings.show_hourly.then(|| {
        report
            .today
            .hourly
            .iter()
            .filter(|hour| hour.epoch > now_epoch)
            .map(|hour| hourly_view(hour, settings, timezone, clock))
            .collect()
    });

    WeatherView {
        name: report.place.name.clone(),
        region: report.place.region.clone(),
        icon: report.current.condition.icon.clone(),
        condition: report.current.condition.text.clone(),
        temperature: round_whole(report.current.temperature.in_unit(temperature_unit)),
        feels_like: round_whole(report.current.feels_like.in_unit(temperature_unit)),
        temperature_unit: temperature_unit.suffix().to_string(),
        chance_of_rain: report.today.chance_of_rain,
        humidity: report.current.humidity,
        wind_speed: format_speed(report.current.wind.in_unit(speed_unit)),
        wind_unit: speed_unit.suffix().to_string(),
        updated_date: format_epoch(report.current.last_updated_epoch, timezone, clock, DATE_FORMAT),
        updated_time: format_epoch(report.current.last_updated_epoch, timezone, clock, TIME_FORMAT),
        hourly,
    }
}

fn hourly_view(
    hour: &HourlyEntry,
    settings: &BlockSettings,
    timezone: &Timezone,
    clock: ClockContext,
) -> HourlyView {
    let temperature_unit = settings.measurementunit.temperature_unit();
    HourlyView {
        temperature: round_whole(hour.temperature.in_unit(temperature_unit)),
        icon: hour.condition.icon.clone(),
        condition: hour.condition.text.clone(),
        time: format_epoch(hour.epoch, timezone, clock, TIME_FORMAT),
    }
}

/// Round to the nearest whole degree, ties away from zero
#[allow(clippy::cast_possible_truncation)]
fn round_whole(value: f64) -> i64 {
    value.round() as i64
}

/// Format a wind speed the way the upstream reports it: whole numbers
/// without a trailing `.0`, fractional values as-is
fn format_speed(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Format an epoch timestamp in the requested clock context
///
/// Unknown timezone identifiers fall back to UTC rather than failing the
/// render; an out-of-range epoch formats as an empty string.
fn format_epoch(epoch: i64, timezone: &Timezone, clock: ClockContext, format: &str) -> String {
    let Some(utc) = DateTime::<Utc>::from_timestamp(epoch, 0) else {
        return String::new();
    };

    match clock {
        ClockContext::LocationLocal => {
            let zone: Tz = timezone.as_str().parse().unwrap_or(Tz::UTC);
            utc.with_timezone(&zone).format(format).to_string()
        }
        ClockContext::ViewerLocal(offset) => utc.with_timezone(&offset).format(format).to_string(),
    }
}
