//! Text Summarizer - Gemini-backed summaries exported as styled PDFs
//!
//! The crate follows a hexagonal layout: pure text and layout logic in
//! `domain`, seams in `ports`, concrete backends in `adapters`, user actions
//! in `application`, and the interactive terminal in `shell`.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod shell;
pub mod telemetry;
