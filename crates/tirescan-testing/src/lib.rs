//! Testing infrastructure for tirescan integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: Fluent interface for declarative test setup
//! - `assertions`: Custom assertions over `--format json` output
//! - `fixtures`: Sample photos and canned recognition API replies
//! - `client`: A scripted `AnalysisClient` that never touches the network

pub mod assertions;
pub mod client;
pub mod fixtures;
pub mod world;

pub use client::ScriptedClient;
pub use world::TestWorld;
