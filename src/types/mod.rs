pub mod lat_lon;
pub mod stream_fields;
pub mod stream_record;
pub mod weather_report;
