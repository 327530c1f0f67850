//! Motive Assets
//!
//! Loads the dashboard's static resources (`goals.json`,
//! `past-successes.json`, the tone files) from an asset root.
//!
//! The root is either a local directory or an `http(s)://` base URL. Both are
//! exposed through [`motive_core::ResourceFetcher`], so loaders never care
//! where the bytes come from.
//!
//! # Example
//!
//! ```ignore
//! use motive_assets::AssetClient;
//! use motive_core::{fetch_json, GoalImage};
//!
//! let assets = AssetClient::new("./public")?;
//! let goals: Vec<GoalImage> = fetch_json(&assets, "goals.json").await?;
//! ```

mod client;
mod error;

pub use client::{AssetClient, AssetRoot};
pub use error::{AssetError, Result};
