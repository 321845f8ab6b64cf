// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Configuration primitives shared across Jamu crates.
//!
//! - [`Secret<T>`]: wrapper that keeps signing keys and tokens out of logs
//! - [`load_secret_env`]: reads a secret from `VAR` or `VAR_FILE`
//! - [`load_first_secret_env`]: the same, trying several variable names in order

pub mod env;
pub mod secret;

pub use env::{load_first_secret_env, load_secret_env, SecretEnvError};
pub use secret::{Secret, SecretString, REDACTED};
