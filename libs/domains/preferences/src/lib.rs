//! Preferences Domain
//!
//! Stores per-user travel preference profiles (a fixed, ordered set of
//! boolean flags) and encodes them into fixed-length numeric vectors for
//! the recommendation engine.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← Business logic
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │Models/Codec │  ← Profile entity, flag schema, vector encoding
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_preferences::{MemoryPreferenceRepository, PreferenceService};
//!
//! let repository = MemoryPreferenceRepository::new();
//! let service = PreferenceService::new(repository);
//! ```

pub mod codec;
pub mod error;
pub mod memory;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use codec::{FLAG_COUNT, PreferenceVector, VECTOR_DIMENSION, decode, encode};
pub use error::{PreferenceError, PreferenceResult};
pub use memory::MemoryPreferenceRepository;
pub use models::{PreferenceFlags, PreferenceProfile, SavePreferences};
pub use repository::PreferenceRepository;
pub use service::PreferenceService;
