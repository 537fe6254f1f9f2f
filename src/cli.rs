// src/cli.rs
use std::ops::Range;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use crate::config::consts::*;
use crate::config::options::{ApiOptions, ExportOptions, HarvestOptions, IdRange};
use crate::error::Result;
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

/// Parsed CLI arguments.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "vk_surnames",
    version,
    about = "Scan a range of VK account ids and rank Cyrillic surnames by city and country"
)]
pub struct Args {
    /// First account id to request.
    #[arg(long, default_value_t = DEFAULT_START_ID)]
    pub start: u64,
    /// Stop before this account id.
    #[arg(long, default_value_t = DEFAULT_END_ID)]
    pub end: u64,
    /// Ids per request (1..=1000).
    #[arg(long, default_value_t = BATCH_SIZE)]
    pub step: u64,

    /// Output directory for the three artifacts.
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub out: PathBuf,

    /// Language for country and city titles.
    #[arg(long, default_value = API_LANG)]
    pub lang: String,
    /// API version sent as `v`.
    #[arg(long, default_value = API_VERSION)]
    pub api_version: String,
    /// Access token; anonymous requests are rejected by newer API versions.
    #[arg(long, env = ACCESS_TOKEN_ENV, hide_env_values = true)]
    pub token: Option<String>,
    /// HTTP timeout per request, in seconds.
    #[arg(long, default_value_t = HTTP_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Print elapsed time every N ids.
    #[arg(long, default_value_t = REPORT_EVERY_IDS)]
    pub report_every: u64,
    /// Only print the final summary.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn to_options(&self) -> Result<HarvestOptions> {
        Ok(HarvestOptions {
            range: IdRange::new(self.start, self.end, self.step)?,
            api: ApiOptions {
                version: self.api_version.clone(),
                lang: self.lang.clone(),
                access_token: self.token.clone().filter(|t| !t.is_empty()),
                timeout_secs: self.timeout,
                ..ApiOptions::default()
            },
            export: ExportOptions { out_dir: self.out.clone() },
            report_every: self.report_every.max(1),
        })
    }
}

pub fn run() -> Result<RunSummary> {
    let args = Args::parse();
    let options = args.to_options()?;

    let mut progress = CliProgress::new(options.range.start, options.report_every, args.quiet);
    let summary = runner::run(&options, Some(&mut progress))?;

    if !args.quiet {
        for path in &summary.files_written {
            eprintln!("Wrote {}", path.display());
        }
    }
    println!("Overall analyzed {} family names.", summary.distinct_surnames);
    Ok(summary)
}

/// Prints elapsed time for every `report_every` ids processed.
pub struct CliProgress {
    origin: u64,
    report_every: u64,
    next_report: u64,
    window: Instant,
    quiet: bool,
}

impl CliProgress {
    pub fn new(origin: u64, report_every: u64, quiet: bool) -> Self {
        let report_every = report_every.max(1);
        Self {
            origin,
            report_every,
            next_report: report_every,
            window: Instant::now(),
            quiet,
        }
    }

    /// True when the ids processed so far crossed the next report mark.
    fn due(&mut self, processed: u64) -> bool {
        if processed < self.next_report {
            return false;
        }
        while self.next_report <= processed {
            self.next_report += self.report_every;
        }
        true
    }
}

impl Progress for CliProgress {
    fn begin(&mut self, total_batches: usize) {
        self.window = Instant::now();
        if !self.quiet {
            eprintln!("Requesting {total_batches} batches…");
        }
    }

    fn log(&mut self, msg: &str) {
        if !self.quiet {
            eprintln!("{msg}");
        }
    }

    fn batch_done(&mut self, ids: &Range<u64>, _kept: usize) {
        if !self.due(ids.end - self.origin) {
            return;
        }
        let secs = self.window.elapsed().as_secs_f64();
        logf!("Harvest: ids<{} execution time {:.2}s", ids.end, secs);
        if !self.quiet {
            eprintln!("execution time: {secs:.2}");
        }
        self.window = Instant::now();
    }
}
