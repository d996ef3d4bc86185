//! Participation domain: the lifecycle of applications to join a travel post.
//!
//! An application moves through a small state machine:
//!
//! ```text
//!             approve
//!          ┌──────────► APPROVED ─┐
//! PENDING ─┤                      ├─ reopen ──► PENDING
//!          └──────────► REJECTED ─┘
//!             reject
//! ```
//!
//! `ParticipationService` enforces the eligibility rules on `apply` (post
//! exists, no duplicate, no self-application, recruitment open) and exposes
//! queries and statistics. Storage sits behind `ApplicationRepository`;
//! travel posts are read through `TravelPostReader` and never mutated here.

pub mod error;
pub mod memory;
pub mod models;
pub mod repository;
pub mod service;

pub use error::{ParticipationError, ParticipationResult};
pub use memory::{MemoryApplicationRepository, MemoryTravelPosts};
pub use models::{
    ApplicationStatistics, ApplicationStatus, ParticipationApplication, TravelPostRef,
};
pub use repository::{ApplicationRepository, TravelPostReader};
pub use service::ParticipationService;
