// External crates
use anyhow::Context;
use binance_sdk::config::ConfigurationRestApi;
use binance_sdk::spot::{
    SpotRestApi,
    rest_api::{KlinesItemInner, KlinesParams, RestApi},
};
use binance_sdk::{errors, errors::ConnectorError as connection_error};
use tokio::runtime::{Builder, Runtime};

// Local crates
use crate::config::binance::{BINANCE, BinanceApiConfig};
use crate::data::intervals::KlineInterval;
use crate::data::provider::MarketDataProvider;
use crate::domain::{Period, PricePoint};
use crate::error::AnalysisError;
use crate::models::PriceSeries;
use crate::utils::time_utils;

#[derive(Debug, PartialEq)]
pub struct BNKline {
    pub open_timestamp_ms: i64,
    pub point: PricePoint,
}

/*
Binance sends every price as a string inside a heterogeneous enum. A missing
or unparsable value makes the whole kline unusable, so it is a validation
failure rather than a gap.
*/
fn kline_item_to_float(item: Option<KlinesItemInner>, field: &str) -> Result<f64, AnalysisError> {
    match item {
        Some(KlinesItemInner::String(s)) => s.parse::<f64>().map_err(|_| {
            AnalysisError::Validation(format!("kline {} '{}' is not a number", field, s))
        }),
        Some(_) => Err(AnalysisError::Validation(format!(
            "kline {} has an unexpected type",
            field
        ))),
        None => Err(AnalysisError::Validation(format!("kline {} is missing", field))),
    }
}

impl TryFrom<Vec<KlinesItemInner>> for BNKline {
    type Error = AnalysisError;

    fn try_from(vec_inner_klines: Vec<KlinesItemInner>) -> Result<Self, Self::Error> {
        let mut items = vec_inner_klines.into_iter();
        let open_timestamp_ms = match items.next() {
            Some(KlinesItemInner::Integer(a)) => a,
            _ => {
                return Err(AnalysisError::Validation(
                    "kline open_time is missing or not an integer".to_string(),
                ));
            }
        };

        let open = kline_item_to_float(items.next(), "open")?;
        let high = kline_item_to_float(items.next(), "high")?;
        let low = kline_item_to_float(items.next(), "low")?;
        let close = kline_item_to_float(items.next(), "close")?;
        let volume = kline_item_to_float(items.next(), "volume")?;

        Ok(BNKline {
            open_timestamp_ms,
            point: PricePoint::new(open, high, low, close, volume),
        })
    }
}

fn convert_klines(data: Vec<Vec<KlinesItemInner>>) -> Result<Vec<BNKline>, AnalysisError> {
    data.into_iter().map(BNKline::try_from).collect()
}

fn configure_binance_client() -> anyhow::Result<RestApi> {
    let config = BinanceApiConfig::default();
    let rest_conf = ConfigurationRestApi::builder()
        .timeout(config.timeout_ms)
        .retries(config.retries)
        .backoff(config.backoff_ms)
        .build()?;
    // Create the Spot REST API client
    let rest_client = SpotRestApi::production(rest_conf);
    Ok(rest_client)
}

/// Appends one page to `all_klines`, oldest first.
/// Returns the start time for the next page and whether this was the last page.
fn process_new_klines(
    new_klines: Vec<Vec<KlinesItemInner>>,
    limit_klines_returned: i32,
    all_klines: &mut Vec<BNKline>,
    request: &str,
) -> Result<(i64, bool), AnalysisError> {
    let page_len = new_klines.len();
    let bn_klines = convert_klines(new_klines).map_err(|e| match e {
        AnalysisError::Validation(msg) => AnalysisError::Validation(format!("{}: {}", request, msg)),
        other => other,
    })?;

    let last_seen = all_klines.last().map(|k| k.open_timestamp_ms);
    let fresh = bn_klines
        .into_iter()
        .filter(|k| last_seen.is_none_or(|seen| k.open_timestamp_ms > seen));
    all_klines.extend(fresh);

    let read_all_klines = page_len < limit_klines_returned as usize;
    let next_start = all_klines
        .last()
        .map(|k| k.open_timestamp_ms + 1)
        .unwrap_or_default();

    // A full page that added nothing new would loop forever
    if !read_all_klines && all_klines.last().map(|k| k.open_timestamp_ms) == last_seen {
        log::warn!("{}: page added no new klines, stopping early", request);
        return Ok((next_start, true));
    }

    Ok((next_start, read_all_klines))
}

async fn fetch_binance_klines(
    rest_client: &RestApi,
    params: KlinesParams,
    request: &str,
) -> Result<Vec<Vec<KlinesItemInner>>, AnalysisError> {
    let response_result = rest_client.klines(params).await;

    match response_result {
        Ok(r) => r.data().await.map_err(|e| {
            AnalysisError::Provider(format!("{}: unreadable kline response: {:#}", request, e))
        }),
        Err(e) => {
            if let Some(conn_err) = e.downcast_ref::<errors::ConnectorError>() {
                match conn_err {
                    connection_error::ConnectorClientError(msg) => {
                        log::error!(
                            "{} Client error: Check your request parameters. {}",
                            request,
                            msg
                        );
                    }
                    connection_error::TooManyRequestsError(msg) => {
                        log::error!("{} Rate limit exceeded. {}", request, msg);
                    }
                    connection_error::RateLimitBanError(msg) => {
                        log::error!(
                            "{} IP address banned due to excessive rate limits. {}",
                            request,
                            msg
                        );
                    }
                    errors::ConnectorError::ServerError { msg, status_code } => {
                        log::error!(
                            "{} Server error: {} (status code: {:?})",
                            request,
                            msg,
                            status_code
                        );
                    }
                    errors::ConnectorError::NetworkError(msg) => {
                        log::error!(
                            "{} Network error: Check your internet connection. {}",
                            request,
                            msg
                        );
                    }
                    errors::ConnectorError::NotFoundError(msg) => {
                        log::error!("{} Resource not found. {}", request, msg);
                    }
                    connection_error::BadRequestError(msg) => {
                        log::error!(
                            "{} Bad request: Verify the symbol and interval. {}",
                            request,
                            msg
                        );
                    }
                    other => {
                        log::error!("Unexpected ConnectionError variant: {:?}", other);
                    }
                }
                Err(AnalysisError::Provider(format!(
                    "Binance API call failed for {}: {}",
                    request, conn_err
                )))
            } else {
                Err(AnalysisError::Provider(format!(
                    "Unexpected error during API call for {}: {:#}",
                    request, e
                )))
            }
        }
    }
}

/// Pages forward from `start_time_ms` until Binance returns a short page.
async fn load_klines(
    rest_client: &RestApi,
    symbol: &str,
    interval: KlineInterval,
    start_time_ms: i64,
) -> Result<Vec<BNKline>, AnalysisError> {
    let request = format!("{} {}", symbol, interval);
    let limit_klines_returned = BINANCE.limits.klines_limit;
    let mut start_time = start_time_ms;
    let mut all_klines: Vec<BNKline> = Vec::new();

    for _ in 0..BINANCE.limits.max_pages {
        let params = KlinesParams::builder(symbol.to_string(), interval.to_binance())
            .limit(limit_klines_returned)
            .start_time(Some(start_time))
            .build()
            .map_err(|e| {
                AnalysisError::Provider(format!("{}: invalid kline request: {}", request, e))
            })?;

        let new_klines = fetch_binance_klines(rest_client, params, &request).await?;
        let (next_start, batch_read_all) = process_new_klines(
            new_klines,
            limit_klines_returned,
            &mut all_klines,
            &request,
        )?;
        if batch_read_all {
            return Ok(all_klines);
        }
        start_time = next_start;
    }

    log::warn!(
        "{}: stopped after {} pages with {} klines",
        request,
        BINANCE.limits.max_pages,
        all_klines.len()
    );
    Ok(all_klines)
}

/// Spot klines from the public Binance REST API.
///
/// The client is async; each request is driven to completion on a private
/// current-thread runtime, so callers see a plain blocking call.
pub struct BinanceProvider {
    runtime: Runtime,
    rest_client: RestApi,
}

impl BinanceProvider {
    pub fn new() -> anyhow::Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to create Tokio runtime")?;
        let rest_client = {
            let _guard = runtime.enter();
            configure_binance_client().context("Failed to configure Binance client")?
        };
        Ok(BinanceProvider {
            runtime,
            rest_client,
        })
    }
}

impl MarketDataProvider for BinanceProvider {
    fn fetch_series(
        &self,
        symbol: &str,
        interval_code: &str,
        period: &Period,
    ) -> Result<PriceSeries, AnalysisError> {
        let interval = KlineInterval::parse_code(interval_code)?;
        let start_time_ms = time_utils::now_timestamp_ms() - period.duration_ms();
        log::debug!(
            "{} {}: requesting ~{} klines since {}",
            symbol,
            interval,
            period.duration_ms() / interval.to_ms(),
            time_utils::epoch_ms_to_utc(start_time_ms)
        );

        let klines = self.runtime.block_on(load_klines(
            &self.rest_client,
            symbol,
            interval,
            start_time_ms,
        ))?;
        log::info!(
            "{} {}: Number of klines in Binance data is: {}",
            symbol,
            interval,
            klines.len()
        );

        let mut series = PriceSeries::new();
        for kline in klines {
            series.push(kline.point);
        }
        Ok(series)
    }

    fn signature(&self) -> &'static str {
        "Binance API"
    }
}
