mod config;
mod error;
mod geo;
mod http;
mod processor;
mod types;
mod urls;
mod utils;

pub use config::{ConfigError, ProcessorConfig};
pub use error::GeoWeatherError;

pub use geo::centroid::{centroid, BoundingBox};
pub use geo::error::GeometryError;

pub use http::error::HttpError;
pub use http::reqwest_client::{
    ReqwestHttpClient, ReqwestLineStream, ReqwestStreamClient, DEFAULT_REQUEST_TIMEOUT,
};
pub use http::{Headers, HttpClient, HttpResponse, HttpStreamClient, LineStream};

pub use processor::error::ProcessorError;
pub use processor::interrupt::Interrupt;
pub use processor::outputs::{Outputs, DEFAULT_AVERAGE_FILE, DEFAULT_TEMPERATURE_FILE};
pub use processor::sliding_window::{
    SlidingWindow, DEFAULT_WINDOW_SIZE, MAX_WINDOW_SIZE, MIN_WINDOW_SIZE,
};
pub use processor::stream_processor::*;

pub use types::lat_lon::LatLon;
pub use types::stream_fields::{Expansion, PlaceField, TweetField};
pub use types::stream_record::{Place, StreamRecord};
pub use types::weather_report::{CurrentConditions, ReportLocation, WeatherReport};

pub use urls::error::{CredentialError, UrlError};
pub use urls::stream_url::{StreamUrlBuilder, BEARER_TOKEN_VAR, STREAM_API_ENDPOINT};
pub use urls::weather_url::{WeatherUrlBuilder, WEATHER_API_ENDPOINT, WEATHER_API_KEY_VAR};
