// ABOUTME: Configuration management for the reelfit server
// ABOUTME: Environment-variable driven settings live in the environment submodule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reelfit

/// Environment-based server configuration
pub mod environment;

pub use environment::{DatabaseUrl, LogLevel, ServerConfig};
