// Structured diagnostics for the SPV validator
// Validation passes construct payloads; rendering policy lives with the caller

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// Diagnostic severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "{}", "error".red().bold()),
            Severity::Warning => write!(f, "{}", "warning".yellow().bold()),
            Severity::Note => write!(f, "{}", "note".cyan().bold()),
        }
    }
}

/// Error classification, aligned with the module validator's result codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("invalid binary")]
    InvalidBinary,
    #[error("invalid id")]
    InvalidId,
    #[error("invalid capability")]
    InvalidCapability,
    #[error("invalid layout")]
    InvalidLayout,
    #[error("invalid data")]
    InvalidData,
}

/// One structured failure record for one violating instruction
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: ErrorKind,
    pub message: String,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn new(severity: Severity, kind: ErrorKind, message: String) -> Self {
        Self {
            severity,
            kind,
            message,
            notes: Vec::new(),
        }
    }

    pub fn error(kind: ErrorKind, message: String) -> Self {
        Self::new(Severity::Error, kind, message)
    }

    /// Type-rule violation, the kind every per-instruction type check emits
    pub fn invalid_data(message: String) -> Self {
        Self::error(ErrorKind::InvalidData, message)
    }

    pub fn with_note(mut self, note: String) -> Self {
        self.notes.push(note);
        self
    }

    /// Render as a single report line plus indented notes
    pub fn format(&self) -> String {
        let mut output = format!("{}[{}]: {}\n", self.severity, self.kind, self.message);
        for note in &self.notes {
            output.push_str(&format!(" {} {}\n", "=".cyan().bold(), note.cyan()));
        }
        output
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_data_constructor() {
        let diag = Diagnostic::invalid_data("Expected bool scalar type as Result Type".to_string());
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.kind, ErrorKind::InvalidData);
        assert!(diag.notes.is_empty());
    }

    #[test]
    fn test_format_contains_kind_and_message() {
        let diag = Diagnostic::invalid_data("mismatched operand types".to_string())
            .with_note("operands must share a bit width".to_string());

        let formatted = diag.format();
        assert!(formatted.contains("invalid data"));
        assert!(formatted.contains("mismatched operand types"));
        assert!(formatted.contains("operands must share a bit width"));
    }

    #[test]
    fn test_display_is_bare_message() {
        let diag = Diagnostic::invalid_data("short message".to_string());
        assert_eq!(diag.to_string(), "short message");
    }
}
