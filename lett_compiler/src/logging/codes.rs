//! Error and success codes with their classification metadata
//!
//! Every code the crate logs is declared here together with its category,
//! severity and recommended action.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Character source error codes
pub mod reader {
    use super::Code;

    pub const FILE_NOT_FOUND: Code = Code::new("E005");
    pub const PERMISSION_DENIED: Code = Code::new("E009");
    pub const IO_ERROR: Code = Code::new("E011");
    pub const INVALID_SOURCE: Code = Code::new("E012");
}

/// Lexical analysis error codes
pub mod lexical {
    use super::Code;

    pub const INVALID_CHARACTER: Code = Code::new("E020");
    pub const UNTERMINATED_STRING: Code = Code::new("E021");
    pub const INVALID_NUMBER: Code = Code::new("E022");
    pub const INVALID_ESCAPE: Code = Code::new("E023");
    pub const INVALID_CHAR_LITERAL: Code = Code::new("E024");
    pub const UNTERMINATED_COMMENT: Code = Code::new("E025");
}

/// Runtime configuration error codes
pub mod config {
    use super::Code;

    pub const CONFIG_INVALID: Code = Code::new("E030");
    pub const CONFIG_UNREADABLE: Code = Code::new("E031");
}

// ============================================================================
// SUCCESS CODE CONSTANTS
// ============================================================================

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");
    pub const SOURCE_OPENED: Code = Code::new("I006");
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I020");
}

// ============================================================================
// METADATA REGISTRY
// ============================================================================

const fn meta(
    code: &'static str,
    category: &'static str,
    severity: Severity,
    recoverable: bool,
    requires_halt: bool,
    description: &'static str,
    recommended_action: &'static str,
) -> ErrorMetadata {
    ErrorMetadata {
        code,
        category,
        severity,
        recoverable,
        requires_halt,
        description,
        recommended_action,
    }
}

const METADATA: &[ErrorMetadata] = &[
    // System
    meta(
        "ERR001",
        "System",
        Severity::Critical,
        false,
        true,
        "Critical internal error",
        "File a bug report with the input that triggered it",
    ),
    meta(
        "ERR002",
        "System",
        Severity::Critical,
        false,
        true,
        "Logging or configuration initialization failure",
        "Check runtime configuration and environment variables",
    ),
    // Reader
    meta(
        "E005",
        "Reader",
        Severity::High,
        false,
        true,
        "Source file not found at specified path",
        "Check the file path and ensure the file exists",
    ),
    meta(
        "E009",
        "Reader",
        Severity::High,
        false,
        true,
        "Permission denied while opening source file",
        "Check file permissions",
    ),
    meta(
        "E011",
        "Reader",
        Severity::High,
        false,
        true,
        "I/O error while reading source",
        "Check that the file is readable and not truncated concurrently",
    ),
    meta(
        "E012",
        "Reader",
        Severity::High,
        false,
        true,
        "Source is not a readable regular file",
        "Pass a path to a source file, not a directory or device",
    ),
    // Lexical
    meta(
        "E020",
        "Lexical",
        Severity::Medium,
        true,
        false,
        "Character sequence not recognized by the scanner",
        "Remove or replace the unsupported character",
    ),
    meta(
        "E021",
        "Lexical",
        Severity::Medium,
        true,
        false,
        "String literal not closed before end of line",
        "Add the closing double quote or escape the newline as \\n",
    ),
    meta(
        "E022",
        "Lexical",
        Severity::Medium,
        true,
        false,
        "Malformed numeric literal",
        "Check digits against the literal's radix prefix",
    ),
    meta(
        "E023",
        "Lexical",
        Severity::Medium,
        true,
        false,
        "Unsupported escape sequence in string literal",
        "Use one of \\a \\b \\f \\n \\r \\t \\v \\\" \\\\",
    ),
    meta(
        "E024",
        "Lexical",
        Severity::Medium,
        true,
        false,
        "Character literal must hold exactly one character or escape",
        "Use double quotes for multi-character text",
    ),
    meta(
        "E025",
        "Lexical",
        Severity::Medium,
        true,
        false,
        "Block comment not closed before end of input",
        "Add the closing */",
    ),
    // Configuration
    meta(
        "E030",
        "Configuration",
        Severity::High,
        false,
        true,
        "Runtime configuration is invalid",
        "Fix the reported key in the configuration file",
    ),
    meta(
        "E031",
        "Configuration",
        Severity::High,
        false,
        true,
        "Runtime configuration file cannot be read",
        "Check the --config path",
    ),
    // Success
    meta(
        "I004",
        "System",
        Severity::Low,
        true,
        false,
        "Logging system initialized",
        "No action required",
    ),
    meta(
        "I006",
        "Reader",
        Severity::Low,
        true,
        false,
        "Source opened for scanning",
        "No action required",
    ),
    meta(
        "I020",
        "Lexical",
        Severity::Low,
        true,
        false,
        "Tokenization completed",
        "No action required",
    ),
];

/// Metadata registry using OnceLock for thread safety
static ERROR_REGISTRY: OnceLock<HashMap<&'static str, &'static ErrorMetadata>> = OnceLock::new();

fn get_error_registry() -> &'static HashMap<&'static str, &'static ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| METADATA.iter().map(|m| (m.code, m)).collect())
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get metadata for a specific code
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code).copied()
}

/// Get error severity from code
pub fn get_severity(code: &str) -> Severity {
    get_error_metadata(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Get category from code
pub fn get_category(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}
