//! Talent Protocol reputation badges.
//!
//! Fetches the Talent Protocol passport for a wallet address and maps it
//! into a flat reputation record for display: the 0-100 builder score, an
//! Elite / Rising / Rookie tier with its paired gold / silver / bronze
//! theme, and a short fixed-order list of earned badges.
//!
//! # Features
//!
//! - **Single-request lookups** - one GET per address; no retries, no cache
//! - **Threshold tiers** - Elite at score >= 80, Rising at >= 50, Rookie below
//! - **Badges** - Code Architect, Based Native, and Verified Human labels
//!   derived from credentials and verification flags
//! - **Absence on failure** - empty input, HTTP errors, and malformed bodies
//!   all collapse to `None`; diagnostic detail goes to the `tracing` sink only
//!
//! # Example
//!
//! ```no_run
//! use talent_badge::{Config, TalentClient};
//!
//! # async fn lookup() {
//! let client = TalentClient::new(Config::from_env());
//! match client.reputation("0x1234abcd").await {
//!     Some(record) => println!("{} ({})", record.tier, record.score),
//!     None => println!("no score"),
//! }
//! # }
//! ```

pub mod card;
pub mod client;
pub mod config;
pub mod reputation;

pub use client::TalentClient;
pub use config::Config;
pub use reputation::{Badge, ReputationRecord, Theme, Tier};
