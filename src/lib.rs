//! # Chess Mentor
//!
//! A small imitation-learning playground for chess agents. Agents memorize
//! position → move associations with evaluation scores, learn them from
//! played game sequences, and transfer their accumulated memory to other
//! agents (teacher → student knowledge transfer).
//!
//! ## Modules
//!
//! - [`memory`] — Position normalization, the per-agent memory store, and
//!   portable memory packages
//! - [`learning`] — Sequence learning and memory transfer between stores
//! - [`agent`] — The agent type composing memory, learning, and transfer
//! - [`env`] — Environment trait and a scripted opening-line environment
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod agent;
pub mod config;
pub mod env;
pub mod error;
pub mod learning;
pub mod memory;
