pub mod error;
pub mod stream_url;
pub mod weather_url;
