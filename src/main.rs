//! geostream-weather CLI
//!
//! Usage:
//!   geostream-weather -n 100
//!   geostream-weather --max-reads 20 --window-size 10 -v
//!   geostream-weather --temperature-file out/temp_f.txt --average-file out/avg.txt

use argh::FromArgs;
use geostream_weather::{
    GeoWeatherError, Interrupt, Outputs, ProcessorConfig, ReqwestHttpClient, ReqwestStreamClient,
    RunSummary, StreamProcessor, DEFAULT_AVERAGE_FILE, DEFAULT_REQUEST_TIMEOUT,
    DEFAULT_TEMPERATURE_FILE, DEFAULT_WINDOW_SIZE,
};
use log::LevelFilter;
use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

/// Enrich the sampled post stream with weather information. Requires the
/// TWITTER_BEARER_TOKEN and WEATHER_API_KEY environment variables.
#[derive(FromArgs, Debug)]
struct Args {
    /// maximum number of stream items to process
    #[argh(option, short = 'n')]
    max_items: Option<usize>,

    /// maximum number of weather reads to attempt
    #[argh(option, short = 't')]
    max_reads: Option<usize>,

    /// number of readings in the moving average, 2 to 100 (default: 5)
    #[argh(option, short = 's', default = "DEFAULT_WINDOW_SIZE")]
    window_size: usize,

    /// set the verbosity to the highest level
    #[argh(switch, short = 'v')]
    verbose: bool,

    /// log level (off, error, warn, info, debug, trace)
    #[argh(option, short = 'l', default = "LevelFilter::Info")]
    log_level: LevelFilter,

    /// file receiving the raw temperatures (default: temp_f.txt)
    #[argh(option, default = "PathBuf::from(DEFAULT_TEMPERATURE_FILE)")]
    temperature_file: PathBuf,

    /// file receiving the moving average (default: avg.txt)
    #[argh(option, default = "PathBuf::from(DEFAULT_AVERAGE_FILE)")]
    average_file: PathBuf,

    /// weather request timeout in seconds, 0 disables it (default: 30)
    #[argh(option, default = "DEFAULT_REQUEST_TIMEOUT.as_secs()")]
    timeout_secs: u64,
}

fn main() {
    let args: Args = argh::from_env();

    // Initialize logging
    let log_level = if args.verbose {
        LevelFilter::Debug
    } else {
        args.log_level
    };
    let env = env_logger::Env::default().default_filter_or(log_level.to_string());
    env_logger::init_from_env(env);

    match run(args) {
        Ok(summary) => println!("{}", summary),
        Err(e) => {
            log::error!("{}", e);
            let mut source = e.source();
            while let Some(cause) = source {
                log::error!("  caused by: {}", cause);
                source = cause.source();
            }
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<RunSummary, GeoWeatherError> {
    let config = ProcessorConfig::builder()
        .maybe_item_cap(args.max_items)
        .maybe_read_cap(args.max_reads)
        .window_size(args.window_size)
        .build();
    // Fail before the output files get truncated
    config.validate()?;

    let interrupt = Interrupt::new();
    {
        let interrupt = interrupt.clone();
        ctrlc::set_handler(move || {
            log::info!("Received Ctrl+C, stopping after the current line...");
            interrupt.trigger();
        })?;
    }

    let timeout = (args.timeout_secs > 0).then(|| Duration::from_secs(args.timeout_secs));
    let outputs = Outputs::create(&args.temperature_file, &args.average_file)?;

    let mut processor = StreamProcessor::builder()
        .stream_client(ReqwestStreamClient::new()?)
        .http_client(ReqwestHttpClient::with_timeout(timeout)?)
        .outputs(outputs)
        .config(config)
        .interrupt(interrupt)
        .build()?;

    log::info!(
        "Writing temperatures to {} and averages to {}",
        args.temperature_file.display(),
        args.average_file.display()
    );
    Ok(processor.process()?)
}
