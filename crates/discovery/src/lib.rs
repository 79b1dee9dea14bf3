//! Prompt inspection and remote skill discovery for the `skilltap` hook.
//!
//! This crate provides mechanisms for:
//! - Deciding whether a prompt warrants a skill discovery lookup.
//! - Querying the remote skill discovery service.
//! - Rendering discovery results into injectable context text.
//!
//! # Examples
//!
//! ```
//! use skilltap_discovery::should_check;
//!
//! assert!(should_check("please configure the server"));
//! assert!(!should_check("what is the weather"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Error type for discovery operations.
pub type Error = anyhow::Error;
/// Result type for discovery operations.
pub type Result<T> = std::result::Result<T, Error>;

/// HTTP client for the skill discovery service.
pub mod client;
/// Keyword heuristics for prompt filtering.
pub mod keywords;
/// Rendering of discovery results into context text.
pub mod render;
/// Types describing discovery responses.
pub mod types;

pub use client::{discover, discovery_api_base, DEFAULT_API_BASE};
pub use keywords::should_check;
pub use render::render_skill_context;
pub use types::{DiscoveryResult, SkillDefinition};
