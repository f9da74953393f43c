use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use brand_audit::audit::{AuditEvent, Auditor};
use brand_audit::cli::Cli;
use brand_audit::config::{Config, ConfigLoader, FileConfigLoader, LoadResult};
use brand_audit::output::{
    ColorMode, ErrorOutput, ScanProgress, TextFormatter, display_path, format_preamble,
};
use brand_audit::patterns::load_patterns;
use brand_audit::scanner::PathFilter;
use brand_audit::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_TOKENS_FOUND};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too and are not failures.
            let _ = e.print();
            let code = if e.use_stderr() {
                EXIT_CONFIG_ERROR
            } else {
                EXIT_SUCCESS
            };
            std::process::exit(code);
        }
    };

    init_logging(&cli);
    std::process::exit(run(&cli));
}

fn init_logging(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    let ansi = ColorMode::from(cli.color).use_colors(std::io::stderr().is_terminal());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(ansi)
        .try_init();
}

fn run(cli: &Cli) -> i32 {
    match run_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            ErrorOutput::new(cli.color.into()).print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_impl(cli: &Cli) -> brand_audit::Result<i32> {
    // 1. Load configuration
    let LoadResult {
        config,
        source: config_path,
    } = load_config(cli)?;

    // 2. Load token patterns; any failure here aborts before scanning
    let tokens_path = resolve_tokens_path(cli.tokens.as_deref(), &config);
    let patterns = load_patterns(tokens_path.as_deref())?;

    // 3. Build the path filter; the audit's own inputs are never scanned
    let mut filter = PathFilter::new(&config.scan.extra_extensions, &config.scan.exclude)?;
    for own_file in [tokens_path.as_deref(), config_path.as_deref()]
        .into_iter()
        .flatten()
    {
        filter = filter.excluding_file(&cli.root, own_file);
    }

    if !cli.quiet {
        print!("{}", format_preamble(&cli.root, &patterns));
    }

    // 4. Walk and scan
    let errors = ErrorOutput::new(cli.color.into());
    let progress = ScanProgress::new(cli.quiet);
    let started = Instant::now();

    let auditor = Auditor::new(patterns, filter);
    let result = auditor.run_with(&cli.root, |event| match event {
        AuditEvent::FileScanned { path, .. } => {
            progress.inc(&display_path(path, Some(&cli.root)));
        }
        AuditEvent::FileSkipped { error } => {
            warn!(error = %error, "skipping unreadable file");
            progress.suspend(|| errors.print_warning(error));
        }
    });
    progress.finish();
    let aggregator = result?;

    if !cli.quiet {
        println!("⏱️  Scan completed in {}ms", started.elapsed().as_millis());
    }

    // 5. Report
    let formatter = TextFormatter::new(cli.color.into()).with_root(&cli.root);
    print!("{}", formatter.format(&aggregator.report()));

    // 6. Exit code mirrors the pass/fail outcome
    if aggregator.passed() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_TOKENS_FOUND)
    }
}

fn load_config(cli: &Cli) -> brand_audit::Result<LoadResult> {
    if cli.no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new();
    let result = match &cli.config {
        Some(path) => loader.load_from_path(path)?,
        None => loader.load(&cli.root)?,
    };
    if let Some(source) = &result.source {
        info!(path = %source.display(), "loaded configuration");
    }
    Ok(result)
}

/// `--tokens` wins over the configuration file.
fn resolve_tokens_path(cli_tokens: Option<&Path>, config: &Config) -> Option<PathBuf> {
    cli_tokens
        .map(Path::to_path_buf)
        .or_else(|| config.tokens.file.clone())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
