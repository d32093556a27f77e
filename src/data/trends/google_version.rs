use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::config::TRENDS;
use crate::data::http::{ProviderError, get_text};
use crate::data::trends::CreateInterestSeries;
use crate::domain::Timeframe;
use crate::models::{InterestPoint, InterestSeries};
use crate::utils::TimeUtils;

/*
Both API bodies start with an anti-JSON-hijacking prefix: `)]}'` (explore) or `)]}',` (widget data).

explore:
{ "widgets": [ { "id": "TIMESERIES", "token": "APP6_...", "request": { ... }, "title": "Interest over time" }, ... ] }

widgetdata/multiline:
{ "default": { "timelineData": [
    { "time": "1704067200", "formattedTime": "Jan 1, 2024", "value": [52], "hasData": [true], "formattedValue": ["52"] },
    { "time": "1704153600", "value": [0], "hasData": [false], "isPartial": true }
] } }
*/
#[derive(Deserialize, Debug)]
struct ExploreResponse {
    #[serde(default)]
    widgets: Vec<ExploreWidget>,
}

#[derive(Deserialize, Debug)]
struct ExploreWidget {
    #[serde(default)]
    id: String,
    #[serde(default)]
    token: String,
    #[serde(default)]
    request: Value,
}

/// The request + token pair that unlocks the interest-over-time data.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeseriesWidget {
    pub request: Value,
    pub token: String,
}

#[derive(Deserialize, Debug)]
struct MultilineResponse {
    default: MultilineDefault,
}

#[derive(Deserialize, Debug)]
struct MultilineDefault {
    #[serde(default, rename = "timelineData")]
    timeline_data: Vec<TimelinePoint>,
}

#[derive(Deserialize, Debug)]
struct TimelinePoint {
    time: String,
    #[serde(default)]
    value: Vec<Option<f64>>,
    #[serde(default, rename = "hasData")]
    has_data: Vec<bool>,
    #[serde(default, rename = "isPartial")]
    is_partial: bool,
}

fn strip_json_prefix(body: &str) -> Result<&str, ProviderError> {
    body.find('{')
        .map(|start| &body[start..])
        .ok_or_else(|| ProviderError::Malformed("no JSON object in trends response".to_string()))
}

pub fn parse_explore_response(body: &str) -> Result<TimeseriesWidget> {
    let explore: ExploreResponse = serde_json::from_str(strip_json_prefix(body)?)
        .map_err(|e| ProviderError::Malformed(format!("explore response: {}", e)))?;

    let widget = explore
        .widgets
        .into_iter()
        .find(|w| w.id == TRENDS.timeseries_widget_id)
        .ok_or_else(|| ProviderError::NoData(format!("{} widget", TRENDS.timeseries_widget_id)))?;

    if widget.token.is_empty() || widget.request.is_null() {
        return Err(ProviderError::Malformed(format!(
            "{} widget has no request/token",
            TRENDS.timeseries_widget_id
        ))
        .into());
    }

    Ok(TimeseriesWidget {
        request: widget.request,
        token: widget.token,
    })
}

/// Parses a widget-data body. Days flagged `hasData: false` become missing (None).
pub fn parse_multiline_response(body: &str, keyword: &str) -> Result<InterestSeries> {
    let multiline: MultilineResponse = serde_json::from_str(strip_json_prefix(body)?)
        .map_err(|e| ProviderError::Malformed(format!("multiline response: {}", e)))?;

    let timeline = multiline.default.timeline_data;
    let last_point_partial = timeline.last().is_some_and(|p| p.is_partial);

    let points = timeline
        .into_iter()
        .map(|p| -> Result<InterestPoint, ProviderError> {
            let epoch_sec: i64 = p.time.parse().map_err(|_| {
                ProviderError::Malformed(format!("timeline time '{}' is not a timestamp", p.time))
            })?;
            let date = TimeUtils::epoch_sec_to_date(epoch_sec, 0).ok_or_else(|| {
                ProviderError::Malformed(format!("timeline time {} out of range", epoch_sec))
            })?;
            let has_data = p.has_data.first().copied().unwrap_or(true);
            let value = p.value.first().copied().flatten().filter(|_| has_data);
            Ok(InterestPoint::new(date, value))
        })
        .collect::<Result<Vec<_>, ProviderError>>()?;

    Ok(InterestSeries::new(keyword, points).with_partial_tail(last_point_partial))
}

pub struct GoogleTrendsVersion {
    client: Client,
    pub hl: String,
    pub tz: i32,
}

impl GoogleTrendsVersion {
    pub fn new(client: Client, hl: impl Into<String>, tz: i32) -> Self {
        Self {
            client,
            hl: hl.into(),
            tz,
        }
    }

    /// The provider refuses API calls from sessions without its cookies.
    async fn open_session(&self) -> Result<()> {
        let response = self
            .client
            .get(TRENDS.endpoints.home_url)
            .send()
            .await
            .context("Failed to open Google Trends session")?;
        if !response.status().is_success() {
            log::warn!(
                "⚠️  Trends landing page answered {}, continuing without session cookies",
                response.status()
            );
        }
        Ok(())
    }

    fn explore_request(keyword: &str, timeframe: &Timeframe) -> Value {
        json!({
            "comparisonItem": [{ "keyword": keyword, "time": timeframe.to_request_value(), "geo": "" }],
            "category": 0,
            "property": ""
        })
    }
}

#[async_trait]
impl CreateInterestSeries for GoogleTrendsVersion {
    fn signature(&self) -> &'static str {
        "Google Trends API"
    }

    async fn create_interest_series(
        &self,
        keyword: &str,
        timeframe: &Timeframe,
    ) -> Result<InterestSeries> {
        self.open_session().await?;

        let explore_query = [
            ("hl", self.hl.clone()),
            ("tz", self.tz.to_string()),
            ("req", Self::explore_request(keyword, timeframe).to_string()),
        ];
        let explore_body = get_text(
            &self.client,
            self.signature(),
            TRENDS.endpoints.explore_url,
            &explore_query,
        )
        .await?;
        let widget = parse_explore_response(&explore_body)
            .with_context(|| format!("Trends explore failed for '{}' ({})", keyword, timeframe))?;

        let multiline_query = [
            ("hl", self.hl.clone()),
            ("tz", self.tz.to_string()),
            ("req", widget.request.to_string()),
            ("token", widget.token),
        ];
        let multiline_body = get_text(
            &self.client,
            self.signature(),
            TRENDS.endpoints.multiline_url,
            &multiline_query,
        )
        .await?;

        parse_multiline_response(&multiline_body, keyword)
            .with_context(|| format!("Trends timeline failed for '{}' ({})", keyword, timeframe))
    }
}
