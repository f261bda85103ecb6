// ABOUTME: Environment-based application configuration
// ABOUTME: Database location and logging settings, loaded once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 cafe-qa contributors

//! Application configuration
//!
//! Environment-only configuration: each setting has a sane default and an
//! environment variable override. Nothing is read from files.

use std::env;
use std::path::PathBuf;

use crate::logging::LoggingConfig;

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path of the SQLite database file. A file path is required; the
    /// per-call connection model cannot work against `:memory:`.
    pub path: PathBuf,
}

impl DatabaseConfig {
    /// Load from `CAFE_DATABASE_PATH`, defaulting to `data/cafe.db`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            path: PathBuf::from(env_var_or("CAFE_DATABASE_PATH", "data/cafe.db")),
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Database settings
    pub database: DatabaseConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load the full configuration from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            database: DatabaseConfig::from_env(),
            logging: LoggingConfig::from_env(),
        }
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
