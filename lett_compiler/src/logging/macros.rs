//! Type-safe logging macros using Code types with Display support

/// Collect `"key" => value` pairs into owned strings and hand borrowed views to `$sink`
#[doc(hidden)]
#[macro_export]
macro_rules! __log_with_pairs {
    ($sink:expr, $($key:expr => $value:expr),+) => {{
        let context_strings: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
        let context_refs: Vec<(&str, &str)> = context_strings
            .iter()
            .map(|(k, v)| (*k, v.as_str()))
            .collect();
        $sink(context_refs)
    }};
}

// ============================================================================
// ERROR LOGGING
// ============================================================================

/// Log error with Code type - accepts Display types for context values
#[macro_export]
macro_rules! log_error {
    ($code:expr, $message:expr) => {
        $crate::logging::log_error_with_context($code, $message, None, vec![])
    };

    ($code:expr, $message:expr, span = $span:expr) => {
        $crate::logging::log_error_with_context($code, $message, Some($span), vec![])
    };

    ($code:expr, $message:expr, $($key:expr => $value:expr),+) => {
        $crate::__log_with_pairs!(
            |ctx| $crate::logging::log_error_with_context($code, $message, None, ctx),
            $($key => $value),+
        )
    };

    ($code:expr, $message:expr, span = $span:expr, $($key:expr => $value:expr),+) => {
        $crate::__log_with_pairs!(
            |ctx| $crate::logging::log_error_with_context($code, $message, Some($span), ctx),
            $($key => $value),+
        )
    };
}

// ============================================================================
// SUCCESS LOGGING
// ============================================================================

/// Log success with Code type - accepts Display types for context values
#[macro_export]
macro_rules! log_success {
    ($code:expr, $message:expr) => {
        $crate::logging::log_success_with_context($code, $message, vec![])
    };

    ($code:expr, $message:expr, $($key:expr => $value:expr),+) => {
        $crate::__log_with_pairs!(
            |ctx| $crate::logging::log_success_with_context($code, $message, ctx),
            $($key => $value),+
        )
    };
}

// ============================================================================
// INFO / WARNING / DEBUG
// ============================================================================

/// Log informational message - accepts Display types for context values
#[macro_export]
macro_rules! log_info {
    ($message:expr) => {
        $crate::logging::log_info_with_context($message, vec![])
    };

    ($message:expr, $($key:expr => $value:expr),+) => {
        $crate::__log_with_pairs!(
            |ctx| $crate::logging::log_info_with_context($message, ctx),
            $($key => $value),+
        )
    };
}

/// Log warning message - accepts Display types for context values
#[macro_export]
macro_rules! log_warning {
    ($message:expr) => {
        $crate::logging::log_warning_with_context($message, vec![])
    };

    ($message:expr, $($key:expr => $value:expr),+) => {
        $crate::__log_with_pairs!(
            |ctx| $crate::logging::log_warning_with_context($message, ctx),
            $($key => $value),+
        )
    };
}

/// Log debug message; context values are only formatted when debug output is enabled
#[macro_export]
macro_rules! log_debug {
    ($message:expr) => {
        if $crate::logging::config::get_min_log_level() >= $crate::logging::LogLevel::Debug {
            $crate::logging::log_debug_with_context($message, vec![])
        }
    };

    ($message:expr, $($key:expr => $value:expr),+) => {
        if $crate::logging::config::get_min_log_level() >= $crate::logging::LogLevel::Debug {
            $crate::__log_with_pairs!(
                |ctx| $crate::logging::log_debug_with_context($message, ctx),
                $($key => $value),+
            )
        }
    };
}
