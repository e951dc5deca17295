//! GOtobe: Batch Audio Conversion CLI
//!
//! Reads directives like `mp3 to wav | all to flac` from the console (or the
//! `run` subcommand) and converts matching files with ffmpeg.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gotobe::cli::{run_directive_line, run_session, Cli, Commands};
use gotobe::pipeline::{BatchContext, Converter, ConverterConfig, FfmpegConverter};
use gotobe::report::{FileLog, LogEvent, LogSink};
use gotobe::utils::{formats_text, print_banner, print_warning};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    if let Some(Commands::Formats) = &cli.command {
        println!("{}", formats_text());
        return Ok(());
    }

    // The log is the only resource whose absence stops the program
    let mut log = FileLog::open(&cli.log_file)
        .with_context(|| format!("Failed to open log file: {}", cli.log_file.display()))?;
    log.record(LogEvent::SessionStarted);

    let converter = FfmpegConverter::new(ConverterConfig::with_ffmpeg_path(cli.ffmpeg.clone()));
    if let Err(e) = converter.validate() {
        print_warning(&format!(
            "{} is not usable ({}); conversions will fail until it is available",
            converter.name(),
            e
        ));
    }

    let result = {
        let stdout = io::stdout();
        let mut console = stdout.lock();
        let mut ctx = BatchContext::new(&cli.dir, &converter, &mut log, &mut console);

        match &cli.command {
            Some(Commands::Run { line }) => {
                run_directive_line(line, &mut ctx);
                Ok(())
            }
            _ => {
                print_banner(env!("CARGO_PKG_VERSION"));
                run_session(io::stdin().lock(), &mut ctx).map(|_| ())
            }
        }
    };

    log.record(LogEvent::SessionEnded);
    result
}
