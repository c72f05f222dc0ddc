//! Condition error codes following a structured numbering system
//!
//! Error code ranges:
//! - PQ0100-PQ0199: Coercion errors (operand validation at construction)
//! - PQ0200-PQ0299: Dispatch errors (operator and builder selection)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a coercion error (0100-0199)
    pub const fn is_coercion_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is a dispatch error (0200-0299)
    pub const fn is_dispatch_error(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PQ{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Coercion errors (0100-0199)
    map.insert(
        100,
        ErrorInfo::new("Invalid operand shape").with_help("Use Between or In for several values"),
    );
    map.insert(101, ErrorInfo::new("Invalid operand type"));
    map.insert(
        102,
        ErrorInfo::new("Invalid operand value").with_help("Booleans accept true/false or 0/1"),
    );
    map.insert(103, ErrorInfo::new("Missing operands"));
    map.insert(104, ErrorInfo::new("Invalid operand count"));

    // Dispatch errors (0200-0299)
    map.insert(200, ErrorInfo::new("Unsupported operator"));
    map.insert(201, ErrorInfo::new("Unsupported operand kind"));

    map
});

// Coercion errors
pub const PQ0100: ErrorCode = ErrorCode::new(100);
pub const PQ0101: ErrorCode = ErrorCode::new(101);
pub const PQ0102: ErrorCode = ErrorCode::new(102);
pub const PQ0103: ErrorCode = ErrorCode::new(103);
pub const PQ0104: ErrorCode = ErrorCode::new(104);

// Dispatch errors
pub const PQ0200: ErrorCode = ErrorCode::new(200);
pub const PQ0201: ErrorCode = ErrorCode::new(201);
