//! Main orchestration logic.

use crate::cli::{Args, OutputFormat};
use crate::config::FileConfig;
use crate::output::{CheckSummary, FormattedDiagnostic, Formatter};
use crate::stylesheet;
use camino::{Utf8Path, Utf8PathBuf};
use globset::{Glob, GlobSet, GlobSetBuilder};
use rayon::prelude::*;
use rscss_diagnostics::{Diagnostic, RuleConfig};
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;
use walkdir::WalkDir;

/// Orchestration errors.
#[derive(Debug, Error)]
pub enum LintError {
    /// Invalid glob pattern.
    #[error("invalid glob pattern: {0}")]
    InvalidGlob(String),

    /// Configuration file error.
    #[error("{0}")]
    ConfigFile(#[from] crate::config::ConfigFileError),

    /// Rule options error.
    #[error("invalid rule options: {0}")]
    Options(#[from] rscss_diagnostics::ConfigError),

    /// Watch error.
    #[error("watch error: {0}")]
    WatchFailed(String),
}

/// Runs the check on all files.
pub fn run(args: Args) -> Result<CheckSummary, LintError> {
    let workspace = if args.workspace.is_relative() {
        std::env::current_dir()
            .map(|p| Utf8PathBuf::try_from(p).unwrap_or_default())
            .unwrap_or_default()
            .join(&args.workspace)
    } else {
        args.workspace.clone()
    };

    let file_config = FileConfig::load(&workspace, args.config.as_deref())?;
    let rule_config = RuleConfig::from_options(&file_config.rule)?;
    let ignore_set = build_ignore_set(&args.ignore, &file_config.ignore)?;
    let files = find_files(&workspace, &file_config, &ignore_set);

    if args.list_files {
        for file in &files {
            println!("{}", file.strip_prefix(&workspace).unwrap_or(file));
        }
        return Ok(CheckSummary {
            file_count: files.len(),
            error_count: 0,
        });
    }

    if args.watch {
        run_watch_mode(&args, &workspace, &file_config, &rule_config, &ignore_set)
    } else {
        run_single_check(&args, &workspace, &rule_config, files)
    }
}

/// Builds the ignore glob set from CLI patterns, config patterns, and the
/// default exclusions.
fn build_ignore_set(
    cli_patterns: &[String],
    config_patterns: &[String],
) -> Result<GlobSet, LintError> {
    let mut builder = GlobSetBuilder::new();

    for pattern in cli_patterns.iter().chain(config_patterns) {
        let glob = Glob::new(pattern).map_err(|e| LintError::InvalidGlob(e.to_string()))?;
        builder.add(glob);
    }

    for pattern in [
        "**/node_modules/**",
        "**/dist/**",
        "**/build/**",
        "**/vendor/**",
    ] {
        if let Ok(glob) = Glob::new(pattern) {
            builder.add(glob);
        }
    }

    builder
        .build()
        .map_err(|e| LintError::InvalidGlob(e.to_string()))
}

/// Finds stylesheet files under the workspace.
fn find_files(
    workspace: &Utf8Path,
    file_config: &FileConfig,
    ignore_set: &GlobSet,
) -> Vec<Utf8PathBuf> {
    let extensions = file_config.file_extensions();
    WalkDir::new(workspace)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| Utf8PathBuf::try_from(e.into_path()).ok())
        .filter(|p| {
            let file_name = p.file_name().unwrap_or("");
            extensions.iter().any(|ext| file_name.ends_with(ext))
        })
        .filter(|p| {
            let relative = p.strip_prefix(workspace).unwrap_or(p);
            !ignore_set.is_match(relative.as_str())
        })
        .collect()
}

/// Lints one stylesheet's source text.
///
/// Every selector the scanner finds is validated independently; diagnostic
/// spans come back relative to the selector and are shifted onto file
/// offsets here.
pub(crate) fn lint_source(source: &str, config: &RuleConfig) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for entry in stylesheet::scan(source) {
        for mut diagnostic in rscss_diagnostics::check(&entry.text, config) {
            diagnostic.span = diagnostic.span.shift(entry.offset);
            diagnostics.push(diagnostic);
        }
    }
    diagnostics.sort_by_key(|d| d.span.start);
    diagnostics
}

/// Runs a single check pass.
fn run_single_check(
    args: &Args,
    workspace: &Utf8Path,
    rule_config: &RuleConfig,
    files: Vec<Utf8PathBuf>,
) -> Result<CheckSummary, LintError> {
    let formatter = Formatter::new(args.output);
    let output_json = matches!(args.output, OutputFormat::Json);
    let error_count = AtomicUsize::new(0);

    struct FileOutput {
        text: Option<String>,
        json: Vec<FormattedDiagnostic>,
    }

    // The engine is a pure function of (selector, config), so files fan
    // out across threads with no shared state beyond the config.
    let outputs: Vec<FileOutput> = files
        .par_iter()
        .filter_map(|file_path| {
            let source = match fs::read_to_string(file_path) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Failed to read {}: {}", file_path, e);
                    return None;
                }
            };

            let diagnostics = lint_source(&source, rule_config);
            if diagnostics.is_empty() {
                return None;
            }
            error_count.fetch_add(diagnostics.len(), Ordering::Relaxed);

            let relative_path = file_path.strip_prefix(workspace).unwrap_or(file_path);
            Some(FileOutput {
                text: if output_json {
                    None
                } else {
                    Some(formatter.format(&diagnostics, relative_path, &source))
                },
                json: if output_json {
                    Formatter::format_json_diagnostics(&diagnostics, relative_path, &source)
                } else {
                    Vec::new()
                },
            })
        })
        .collect();

    let summary = CheckSummary {
        file_count: files.len(),
        error_count: error_count.load(Ordering::Relaxed),
    };

    if output_json {
        let mut json_output = Vec::new();
        for output in outputs {
            json_output.extend(output.json);
        }
        let json = serde_json::to_string_pretty(&json_output).unwrap_or_else(|_| "[]".to_string());
        println!("{}", json);
    } else {
        for output in outputs {
            if let Some(text) = output.text {
                print!("{}", text);
            }
        }
        println!("{}", summary.format());
    }

    Ok(summary)
}

/// Runs in watch mode, re-checking when stylesheet files change.
fn run_watch_mode(
    args: &Args,
    workspace: &Utf8Path,
    file_config: &FileConfig,
    rule_config: &RuleConfig,
    ignore_set: &GlobSet,
) -> Result<CheckSummary, LintError> {
    use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};
    use std::sync::mpsc;
    use std::time::Duration;

    println!("Starting watch mode...\n");

    let files = find_files(workspace, file_config, ignore_set);
    let _summary = run_single_check(args, workspace, rule_config, files)?;

    let (tx, rx) = mpsc::channel();
    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| {
            if let Ok(event) = res {
                let _ = tx.send(event);
            }
        },
        Config::default().with_poll_interval(Duration::from_secs(1)),
    )
    .map_err(|e| LintError::WatchFailed(e.to_string()))?;

    watcher
        .watch(workspace.as_std_path(), RecursiveMode::Recursive)
        .map_err(|e| LintError::WatchFailed(e.to_string()))?;

    println!("Watching for changes... (Ctrl+C to stop)\n");

    let extensions: Vec<String> = file_config
        .file_extensions()
        .iter()
        .map(|s| s.to_string())
        .collect();

    while let Ok(event) = rx.recv() {
        let stylesheet_changed = event.paths.iter().any(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .map(|name| extensions.iter().any(|ext| name.ends_with(ext)))
                .unwrap_or(false)
        });

        if stylesheet_changed {
            if !args.preserve_watch_output {
                // Clear screen
                print!("\x1B[2J\x1B[1;1H");
            }

            println!("File changed, re-checking...\n");

            let files = find_files(workspace, file_config, ignore_set);
            let _ = run_single_check(args, workspace, rule_config, files);
        }
    }

    Err(LintError::WatchFailed(
        "watch channel closed unexpectedly".to_string(),
    ))
}
