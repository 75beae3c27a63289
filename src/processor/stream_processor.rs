//! The enrichment loop: stream lines in, temperatures and moving averages out.

use crate::config::ProcessorConfig;
use crate::geo::centroid::centroid;
use crate::http::error::HttpError;
use crate::http::{Headers, HttpClient, HttpStreamClient, LineStream};
use crate::processor::error::ProcessorError;
use crate::processor::interrupt::Interrupt;
use crate::processor::outputs::Outputs;
use crate::processor::sliding_window::SlidingWindow;
use crate::types::stream_fields::{Expansion, PlaceField, TweetField};
use crate::types::stream_record::StreamRecord;
use crate::types::weather_report::WeatherReport;
use crate::urls::stream_url::StreamUrlBuilder;
use crate::urls::weather_url::WeatherUrlBuilder;
use bon::bon;
use log::{debug, info};
use std::fmt;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessorState {
    Idle,
    Streaming,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The received-item cap was reached.
    ItemCap,
    /// The weather-read cap was reached.
    ReadCap,
    /// The interrupt flag was raised.
    Interrupted,
    /// The upstream closed the stream.
    StreamEnded,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            StopReason::ItemCap => "item cap reached",
            StopReason::ReadCap => "read cap reached",
            StopReason::Interrupted => "interrupted",
            StopReason::StreamEnded => "stream ended",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counters {
    /// Non-empty stream lines parsed.
    pub received_items: usize,
    /// Weather lookups attempted for records with a place.
    pub read_attempts: usize,
    /// Temperatures written to the outputs.
    pub successful_reads: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub counters: Counters,
    pub stop_reason: StopReason,
    pub last_average: Option<f64>,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} items received, {} weather lookups, {} temperatures written ({})",
            self.counters.received_items,
            self.counters.read_attempts,
            self.counters.successful_reads,
            self.stop_reason
        )?;
        if let Some(average) = self.last_average {
            write!(f, ", last average {:.1}°F", average)?;
        }
        Ok(())
    }
}

/// Reads the sampled stream and enriches every post that has a place with the
/// current temperature at the centre of that place.
///
/// A processor runs once: [`StreamProcessor::process`] moves it from `Idle` through
/// `Streaming` to `Stopped`, and the stream is closed exactly once on the way out,
/// whether the run ends normally or with an error.
pub struct StreamProcessor<S, H, W: Write> {
    stream_client: S,
    http_client: H,
    outputs: Outputs<W>,
    config: ProcessorConfig,
    stream_urls: StreamUrlBuilder,
    weather_urls: WeatherUrlBuilder,
    interrupt: Interrupt,
    window: SlidingWindow,
    counters: Counters,
    state: ProcessorState,
}

#[bon]
impl<S, H, W> StreamProcessor<S, H, W>
where
    S: HttpStreamClient,
    H: HttpClient,
    W: Write,
{
    /// # Errors
    ///
    /// Returns [`ProcessorError::Config`] for a zero cap or a window size outside `2..=100`.
    #[builder]
    pub fn new(
        stream_client: S,
        http_client: H,
        outputs: Outputs<W>,
        #[builder(default)] config: ProcessorConfig,
        #[builder(default)] stream_urls: StreamUrlBuilder,
        #[builder(default)] weather_urls: WeatherUrlBuilder,
        #[builder(default)] interrupt: Interrupt,
    ) -> Result<Self, ProcessorError> {
        config.validate()?;
        let window = SlidingWindow::new(config.window_size)?;
        Ok(Self {
            stream_client,
            http_client,
            outputs,
            config,
            stream_urls,
            weather_urls,
            interrupt,
            window,
            counters: Counters::default(),
            state: ProcessorState::Idle,
        })
    }

    pub fn state(&self) -> ProcessorState {
        self.state
    }

    pub fn counters(&self) -> Counters {
        self.counters
    }

    pub fn window(&self) -> &SlidingWindow {
        &self.window
    }

    pub fn into_outputs(self) -> Outputs<W> {
        self.outputs
    }

    /// Runs until a cap is reached, the interrupt is raised or the stream ends.
    ///
    /// Credentials for both endpoints are checked before any request is made.
    ///
    /// # Errors
    ///
    /// * [`ProcessorError::Credential`] if a token or key is missing.
    /// * [`ProcessorError::MalformedRecord`] if a stream line is not JSON.
    /// * [`ProcessorError::Geometry`] if a place has no usable bounding box.
    /// * [`ProcessorError::Http`] if the stream cannot be opened or read.
    /// * [`ProcessorError::OutputWrite`] if an output cannot be written.
    /// * [`ProcessorError::AlreadyStarted`] if called a second time.
    pub fn process(&mut self) -> Result<RunSummary, ProcessorError> {
        if self.state != ProcessorState::Idle {
            return Err(ProcessorError::AlreadyStarted);
        }
        let result = self.run();
        self.state = ProcessorState::Stopped;
        result
    }

    fn run(&mut self) -> Result<RunSummary, ProcessorError> {
        let url = self
            .stream_urls
            .get_url()
            .tweet_fields(vec![TweetField::Geo])
            .expansions(vec![Expansion::PlaceId])
            .place_fields(vec![
                PlaceField::Geo,
                PlaceField::FullName,
                PlaceField::PlaceType,
            ])
            .call()?;
        let headers = self.stream_urls.get_headers()?;
        self.weather_urls.api_key()?;

        info!("Connecting to {}", url);
        let mut stream = self.stream_client.get(url.as_str(), &headers)?;
        self.state = ProcessorState::Streaming;

        let outcome = self.consume(&mut stream);
        stream.close();
        let stop_reason = outcome?;

        let summary = RunSummary {
            counters: self.counters,
            stop_reason,
            last_average: self.window.mean(),
        };
        info!("Stopped: {}", summary);
        Ok(summary)
    }

    fn consume(&mut self, stream: &mut S::Stream) -> Result<StopReason, ProcessorError> {
        loop {
            if self.interrupt.is_triggered() {
                info!("Interrupt received, closing stream");
                return Ok(StopReason::Interrupted);
            }
            let line = match stream.next() {
                Some(line) => line?,
                None => return Ok(StopReason::StreamEnded),
            };
            self.handle_line(&line)?;
            if let Some(reason) = self.cap_reached() {
                return Ok(reason);
            }
        }
    }

    fn handle_line(&mut self, line: &str) -> Result<(), ProcessorError> {
        // Keep-alive
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }

        let record: StreamRecord = line
            .parse()
            .map_err(|source| ProcessorError::MalformedRecord {
                line: line.to_string(),
                source,
            })?;
        self.counters.received_items += 1;
        debug!("{}", record.value());

        if !record.has_geo_information() {
            return Ok(());
        }
        self.counters.read_attempts += 1;
        self.enrich(&record)
    }

    fn enrich(&mut self, record: &StreamRecord) -> Result<(), ProcessorError> {
        let Some(place) = record.first_place() else {
            return Ok(());
        };
        let place_name = place.full_name.as_deref().unwrap_or("unknown place");
        debug!(
            "Place {} ({}, id {})",
            place_name,
            place.place_type.as_deref().unwrap_or("unknown type"),
            place.id.as_deref().unwrap_or("?")
        );
        let location = centroid(&place.geo)?;

        let url = self.weather_urls.get_url(location)?;
        let response = match self.http_client.get(url.as_str(), &Headers::new()) {
            Ok(response) => response,
            // A lookup that times out or drops only costs this reading
            Err(e @ (HttpError::NetworkRequest(..) | HttpError::BodyRead(..))) => {
                debug!(
                    "Weather lookup for {} {} failed, skipping: {:?}",
                    place_name, location, e
                );
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        if !response.is_ok() {
            debug!(
                "Weather lookup for {} {} returned status {}, skipping",
                place_name, location, response.status
            );
            return Ok(());
        }
        let report = WeatherReport::from_body(&response.body);
        let Some((report, temperature)) =
            report.and_then(|report| report.temperature_f().map(|t| (report, t)))
        else {
            debug!(
                "Weather lookup for {} {} returned no temperature, skipping",
                place_name, location
            );
            return Ok(());
        };

        self.window.push(temperature);
        let average = self.window.mean().unwrap_or(temperature);
        self.outputs
            .record(temperature, average)
            .map_err(ProcessorError::OutputWrite)?;
        self.counters.successful_reads += 1;

        info!(
            "{} {} [post {}]: {}, average of last {}: {:.1}°F",
            place_name,
            location,
            record.id().unwrap_or("?"),
            report,
            self.window.len(),
            average
        );
        Ok(())
    }

    fn cap_reached(&self) -> Option<StopReason> {
        if self
            .config
            .item_cap
            .is_some_and(|cap| self.counters.received_items >= cap)
        {
            return Some(StopReason::ItemCap);
        }
        if self
            .config
            .read_cap
            .is_some_and(|cap| self.counters.read_attempts >= cap)
        {
            return Some(StopReason::ReadCap);
        }
        None
    }
}
