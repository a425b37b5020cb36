use std::{io, process, sync::OnceLock};

use application::{cli, config, Args, AsError as _, Config, Service};
use common::Date;
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .init();

    if start().is_err() {
        process::exit(1);
    }
}

fn start() -> Result<(), ()> {
    let Args { config, command } = Args::parse().unwrap_or_else(|e| e.exit());

    let Config {
        service,
        catalog,
        log,
    } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {}", e.as_error());
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let service_config = service::Config::try_from(service).map_err(|e| {
        log::error!("failed to load `Config`: {}", e.as_error());
    })?;
    let catalog = config::build_catalog(catalog).map_err(|e| {
        log::error!("failed to load catalog: {}", e.as_error());
    })?;
    log::debug!("loaded catalog of {} listings", catalog.len());

    let service = Service::new(service_config, catalog);

    let output = cli::execute(&service, command, Date::today())
        .map_err(|e| log::error!("{e}"))?;
    println!("{output}");

    Ok(())
}
