//! Output formatting.

use crate::cli::OutputFormat;
use camino::Utf8Path;
use indexmap::IndexMap;
use rscss_diagnostics::{Diagnostic, Severity};
use serde::Serialize;
use source_map::{LineCol, LineIndex};

/// A formatted diagnostic for output.
#[derive(Debug, Serialize)]
pub struct FormattedDiagnostic {
    /// The diagnostic type (Error, Warning, Hint).
    #[serde(rename = "type")]
    pub diagnostic_type: String,
    /// The file path.
    pub filename: String,
    /// The start position.
    pub start: Position,
    /// The end position.
    pub end: Position,
    /// The rendered message.
    pub message: String,
    /// The diagnostic code.
    pub code: String,
    /// The structured interpolation data.
    pub data: IndexMap<&'static str, String>,
}

/// A position in the source.
#[derive(Debug, Serialize)]
pub struct Position {
    /// 1-indexed line number.
    pub line: u32,
    /// 1-indexed column number.
    pub column: u32,
    /// Byte offset.
    pub offset: u32,
}

/// Formats diagnostics for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a collection of diagnostics.
    pub fn format(&self, diagnostics: &[Diagnostic], file_path: &Utf8Path, source: &str) -> String {
        match self.format {
            OutputFormat::Human => self.format_human(diagnostics, file_path, source, false),
            OutputFormat::HumanVerbose => self.format_human(diagnostics, file_path, source, true),
            OutputFormat::Json => {
                let formatted = Self::format_json_diagnostics(diagnostics, file_path, source);
                serde_json::to_string_pretty(&formatted).unwrap_or_default()
            }
            OutputFormat::Machine => self.format_machine(diagnostics, file_path, source),
        }
    }

    /// Formats as human-readable output, optionally with code snippets.
    fn format_human(
        &self,
        diagnostics: &[Diagnostic],
        file_path: &Utf8Path,
        source: &str,
        verbose: bool,
    ) -> String {
        let line_index = LineIndex::new(source);
        let lines: Vec<&str> = source.lines().collect();
        let mut output = String::new();

        for diag in diagnostics {
            let start = line_index
                .line_col(diag.span.start)
                .unwrap_or(LineCol::new(0, 0));

            output.push_str(&format!(
                "{}:{}:{}\n{}: {} ({})\n",
                file_path,
                start.line + 1,
                start.col + 1,
                severity_label(diag.severity),
                diag.message(),
                diag.code
            ));

            if verbose {
                let line_num = start.line as usize;
                if line_num < lines.len() {
                    output.push_str(&format!("  {} | {}\n", line_num + 1, lines[line_num]));
                    output.push_str(&format!(
                        "  {} | {}^\n",
                        " ".repeat((line_num + 1).to_string().len()),
                        " ".repeat(start.col as usize)
                    ));
                }
            }

            output.push('\n');
        }

        output
    }

    /// Formats diagnostics into JSON-ready structs.
    pub fn format_json_diagnostics(
        diagnostics: &[Diagnostic],
        file_path: &Utf8Path,
        source: &str,
    ) -> Vec<FormattedDiagnostic> {
        let line_index = LineIndex::new(source);
        diagnostics
            .iter()
            .map(|diag| {
                let start = line_index
                    .line_col(diag.span.start)
                    .unwrap_or(LineCol::new(0, 0));
                let end = line_index
                    .line_col(diag.span.end)
                    .unwrap_or(LineCol::new(0, 0));

                FormattedDiagnostic {
                    diagnostic_type: severity_label(diag.severity).to_string(),
                    filename: file_path.to_string(),
                    start: Position {
                        line: start.line + 1,
                        column: start.col + 1,
                        offset: u32::from(diag.span.start),
                    },
                    end: Position {
                        line: end.line + 1,
                        column: end.col + 1,
                        offset: u32::from(diag.span.end),
                    },
                    message: diag.message(),
                    code: diag.code.to_string(),
                    data: diag.data.clone(),
                }
            })
            .collect()
    }

    /// Formats as machine-readable output.
    fn format_machine(
        &self,
        diagnostics: &[Diagnostic],
        file_path: &Utf8Path,
        source: &str,
    ) -> String {
        let line_index = LineIndex::new(source);
        let mut output = String::new();

        for diag in diagnostics {
            let start = line_index
                .line_col(diag.span.start)
                .unwrap_or(LineCol::new(0, 0));
            let end = line_index
                .line_col(diag.span.end)
                .unwrap_or(LineCol::new(0, 0));

            output.push_str(&format!(
                "{} {}:{}:{}:{}:{} {} ({})\n",
                severity_label(diag.severity).to_uppercase(),
                file_path,
                start.line + 1,
                start.col + 1,
                end.line + 1,
                end.col + 1,
                diag.message(),
                diag.code
            ));
        }

        output
    }
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "Error",
        Severity::Warning => "Warning",
        Severity::Hint => "Hint",
    }
}

/// Summary of a check run.
#[derive(Debug, Default)]
pub struct CheckSummary {
    /// Number of files checked.
    pub file_count: usize,
    /// Number of errors found.
    pub error_count: usize,
}

impl CheckSummary {
    /// Formats the summary line.
    pub fn format(&self) -> String {
        let error_word = if self.error_count == 1 {
            "error"
        } else {
            "errors"
        };
        let file_word = if self.file_count == 1 { "file" } else { "files" };

        format!(
            "====================================\nrscss-check found {} {} in {} {}",
            self.error_count, error_word, self.file_count, file_word
        )
    }
}
