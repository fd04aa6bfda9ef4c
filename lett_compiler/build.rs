// build.rs - TOML-driven compile-time constant generation
use std::env;
use std::fs;
use std::path::Path;

#[derive(serde::Deserialize)]
struct CompileTimeConfig {
    reader: ReaderLimits,
    lexical: LexicalLimits,
    logging: LoggingLimits,
}

#[derive(serde::Deserialize)]
struct ReaderLimits {
    default_chunk_size: usize,
    min_chunk_size: usize,
    max_chunk_size: usize,
}

#[derive(serde::Deserialize)]
struct LexicalLimits {
    max_logged_lexeme_length: usize,
    max_logged_errors: usize,
}

#[derive(serde::Deserialize)]
struct LoggingLimits {
    log_buffer_size: usize,
    max_log_message_length: usize,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=LETT_BUILD_PROFILE");
    println!("cargo:rerun-if-env-changed=LETT_CONFIG_DIR");

    let profile = env::var("LETT_BUILD_PROFILE").unwrap_or_else(|_| "development".to_string());
    let config_dir = env::var("LETT_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    // Workspace root is the parent of the lett_compiler directory
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = Path::new(&manifest_dir)
        .parent()
        .expect("Could not find workspace root (parent directory)");

    let config_path = workspace_root
        .join(&config_dir)
        .join(format!("{}.toml", profile));

    println!("cargo:rerun-if-changed={}", config_path.display());

    if !config_path.exists() {
        panic!(
            "Configuration file not found: {}\nWorkspace root: {}\nLooking for: {}/{}/{}.toml",
            config_path.display(),
            workspace_root.display(),
            workspace_root.display(),
            config_dir,
            profile
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", config_path.display(), e));

    let config: CompileTimeConfig = toml::from_str(&config_content)
        .unwrap_or_else(|e| panic!("Invalid TOML in {}: {}", config_path.display(), e));

    validate_limits(&config, &profile);
    generate_constants(&config, &profile);
}

fn validate_limits(config: &CompileTimeConfig, profile: &str) {
    const ABSOLUTE_MAX_CHUNK_SIZE: usize = 1 << 30;

    let reader = &config.reader;
    if reader.min_chunk_size == 0 {
        panic!("reader.min_chunk_size must be at least 1");
    }
    if reader.min_chunk_size > reader.max_chunk_size {
        panic!("reader.min_chunk_size exceeds reader.max_chunk_size");
    }
    if reader.default_chunk_size < reader.min_chunk_size
        || reader.default_chunk_size > reader.max_chunk_size
    {
        panic!("reader.default_chunk_size must lie within [min_chunk_size, max_chunk_size]");
    }
    if reader.max_chunk_size > ABSOLUTE_MAX_CHUNK_SIZE {
        panic!("reader.max_chunk_size exceeds absolute maximum");
    }

    if config.lexical.max_logged_lexeme_length == 0 {
        panic!("lexical.max_logged_lexeme_length must be at least 1");
    }

    if config.logging.log_buffer_size < 100 || config.logging.log_buffer_size > 100_000 {
        panic!("logging.log_buffer_size must lie within [100, 100000]");
    }

    if profile == "production" && config.lexical.max_logged_errors > 1000 {
        panic!("PRODUCTION: lexical.max_logged_errors too high for production");
    }
}

fn generate_constants(config: &CompileTimeConfig, profile: &str) {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("constants.rs");

    let constants_code = format!(
        r#"
// Generated compile-time constants from TOML configuration
// Profile: {}
// DO NOT EDIT - Generated by build.rs

pub mod compile_time {{
    pub mod reader {{
        pub const DEFAULT_CHUNK_SIZE: usize = {};
        pub const MIN_CHUNK_SIZE: usize = {};
        pub const MAX_CHUNK_SIZE: usize = {};
    }}

    pub mod lexical {{
        pub const MAX_LOGGED_LEXEME_LENGTH: usize = {};
        pub const MAX_LOGGED_ERRORS: usize = {};
    }}

    pub mod logging {{
        pub const LOG_BUFFER_SIZE: usize = {};
        pub const MAX_LOG_MESSAGE_LENGTH: usize = {};
    }}
}}
"#,
        profile,
        // Reader
        config.reader.default_chunk_size,
        config.reader.min_chunk_size,
        config.reader.max_chunk_size,
        // Lexical
        config.lexical.max_logged_lexeme_length,
        config.lexical.max_logged_errors,
        // Logging
        config.logging.log_buffer_size,
        config.logging.max_log_message_length,
    );

    fs::write(output_path, constants_code).unwrap();
}
