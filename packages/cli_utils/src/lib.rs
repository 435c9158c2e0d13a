#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Terminal plumbing for the patrol prioritization CLI.
//!
//! [`VesselProgress`] renders the engine's [`ProgressCallback`] events as an
//! `indicatif` bar, and [`init_logger`] routes `log` output through
//! `indicatif-log-bridge` so log lines and the bar share the terminal.

use std::sync::Arc;
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use iuu_risk_engine::progress::ProgressCallback;
use log::LevelFilter;

pub use indicatif::MultiProgress;

/// Default log level when `RUST_LOG` is unset. Coercion warnings from the
/// ingest stage are emitted at `warn`, so they are visible out of the box.
const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Per-vessel scoring bar.
///
/// Starts as a spinner while the file is being read and switches to a
/// counted bar once the engine reports the fleet size.
pub struct VesselProgress {
    bar: ProgressBar,
    counted_style: ProgressStyle,
    started: Instant,
}

impl VesselProgress {
    /// Adds a new vessel bar to `multi`, labelled with `message` until the
    /// engine takes over the message line.
    #[must_use]
    pub fn attach(multi: &MultiProgress, message: &str) -> Arc<dyn ProgressCallback> {
        let bar = multi.add(ProgressBar::new_spinner());
        bar.enable_steady_tick(Duration::from_millis(80));
        bar.set_style(
            ProgressStyle::with_template("{spinner:.blue} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_owned());

        let counted_style = ProgressStyle::with_template(
            "  {msg:<28!} [{bar:32.blue/dim}] {pos:>4}/{len} vessels",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");

        Arc::new(Self {
            bar,
            counted_style,
            started: Instant::now(),
        })
    }
}

impl ProgressCallback for VesselProgress {
    fn set_total(&self, total: u64) {
        self.bar.set_style(self.counted_style.clone());
        self.bar.set_length(total);
        self.bar.set_position(0);
    }

    fn inc(&self, delta: u64) {
        self.bar.inc(delta);
    }

    fn set_message(&self, msg: String) {
        self.bar.set_message(msg);
    }

    fn finish(&self, msg: String) {
        let elapsed = self.started.elapsed().as_secs_f64();
        self.bar.finish_and_clear();
        log::debug!("{msg} in {elapsed:.3}s");
    }
}

/// Installs `pretty_env_logger` behind `indicatif-log-bridge`.
///
/// `RUST_LOG` overrides [`DEFAULT_LEVEL`]. Returns the [`MultiProgress`]
/// every progress bar must be added to.
#[must_use]
pub fn init_logger() -> MultiProgress {
    let multi = MultiProgress::new();

    let logger = pretty_env_logger::formatted_builder()
        .filter_level(DEFAULT_LEVEL)
        .parse_env("RUST_LOG")
        .build();
    let level = logger.filter();

    if indicatif_log_bridge::LogWrapper::new(multi.clone(), logger)
        .try_init()
        .is_err()
    {
        log::debug!("Logger already installed");
    }
    log::set_max_level(level);

    multi
}
