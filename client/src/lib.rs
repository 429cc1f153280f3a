//! Client-side building blocks for the GIF portal.
//!
//! Includes the wallet and remote runtime abstractions, the [`portal::Portal`] event handlers
//! that tie them together, RPC helpers, and terminal rendering.

pub mod config;
pub mod logs;
pub mod mock_helpers;
pub mod portal;
pub mod render;
pub mod runtime;
pub mod transactions;
pub mod views;
pub mod wallet;

pub use logs::LogColor;
