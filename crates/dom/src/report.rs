//! Diagnostic reporting
//!
//! Reports are purely observational: nothing in the core branches on them.
//! The reporter is injected at construction, so tests can record reports
//! instead of capturing process output.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Mutex;

/// Prefix put in front of every forwarded message
pub const MESSAGE_PREFIX: &str = "HTML-Creator >> ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Default,
    Success,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Default => "default",
            Severity::Success => "success",
            Severity::Error => "error",
        })
    }
}

/// Diagnostic sink
pub trait Reporter: Send + Sync {
    fn report(&self, severity: Severity, message: &str);
}

/// Forwards reports to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Default => tracing::info!("{}{}", MESSAGE_PREFIX, message),
            Severity::Success => tracing::info!(%severity, "{}{}", MESSAGE_PREFIX, message),
            Severity::Error => tracing::error!("{}{}", MESSAGE_PREFIX, message),
        }
    }
}

/// A recorded report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub severity: Severity,
    pub message: String,
}

/// Records every report in memory (for testing)
#[derive(Debug, Default)]
pub struct MemoryReporter {
    reports: Mutex<Vec<Report>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far
    pub fn reports(&self) -> Vec<Report> {
        self.reports
            .lock()
            .map(|reports| reports.clone())
            .unwrap_or_default()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.reports()
            .iter()
            .filter(|report| report.severity == severity)
            .count()
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, severity: Severity, message: &str) {
        if let Ok(mut reports) = self.reports.lock() {
            reports.push(Report {
                severity,
                message: message.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_reporter_records_in_order() {
        let reporter = MemoryReporter::new();
        reporter.report(Severity::Success, "done");
        reporter.report(Severity::Error, "broken");

        let reports = reporter.reports();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].message, "done");
        assert_eq!(reporter.count(Severity::Error), 1);
        assert_eq!(reporter.count(Severity::Default), 0);
    }

    #[test]
    fn test_severity_names() {
        assert_eq!(Severity::default().to_string(), "default");
        assert_eq!(serde_json::to_string(&Severity::Success).unwrap(), "\"success\"");
    }
}
