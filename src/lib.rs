//! # Codenames Duet board generator
//!
//! Generates the two complementary key boards that turn a standard Codenames
//! deck into a two-player duet game: each player sees their own green and
//! black tiles, and every one of those tiles looks neutral to the other
//! player. All special tiles are drawn from one shared index pool, so the
//! two boards can never claim the same cell.
//!
//! ## Modules
//!
//! - [`game`] — Core logic: tile categories, index pool, board builder,
//!   generation orchestrator
//! - [`export`] — CSV grid export of generated boards
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod export;
pub mod game;
