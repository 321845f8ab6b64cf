// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Edge server for the Jamu storefront.
//!
//! Gates page routes by session role and serves locale metadata, navigation,
//! the outlet directory and label catalogs to the front end.

pub mod api;
pub mod error;
pub mod guard_middleware;
pub mod navigation;
pub mod outlets;
pub mod routes;
pub mod telemetry;

pub use api::{create_router, guard_rules, session_decoder, AppState};
pub use error::{ErrorResponse, ServerError};
pub use guard_middleware::route_guard_layer;
