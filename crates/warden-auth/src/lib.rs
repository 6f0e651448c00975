//! Action-authorization policy core for Warden.
//!
//! This crate decides whether a requesting account may perform a named
//! action, as itself or *on behalf of* another account, when the action
//! also touches reserved-namespace records carrying their own owner lists.
//!
//! # Two-Layer Decision
//!
//! ```text
//! Outcome = ActAs(requester → account) ∩ Ownership(account → namespaces)
//!              │                            │
//!       AccountFailure            ReservedNamespaceFailure
//! ```
//!
//! | Layer | Type | Decides |
//! |-------|------|---------|
//! | [`relationship`] | Bitflags facts | What holds between requester and target |
//! | [`PermissionsRequirement`] | Value type | Which relationships suffice |
//! | [`resource`] | Evaluator | OR across matching owned resources |
//! | [`ActionPolicy`] | Composition root | Short-circuit + enumeration |
//!
//! # Crate Architecture
//!
//! ```text
//! warden-types  (Account, Membership, ReservedNamespace)
//!      ↑
//! warden-auth   (facts, requirements, evaluator, ActionPolicy)  ◄── THIS CRATE
//!      ↑
//! warden-registry (NamespaceStore impl, action catalog)
//! ```
//!
//! # Design Principles
//!
//! - **Trait definitions here, implementations in consumers**: the
//!   [`NamespaceLookup`] collaborator is abstract; `warden-registry`
//!   provides the concrete store
//! - **Decisions are values**: denial is a [`PermissionsCheckResult`],
//!   never an `Err`; only infrastructure faults ([`LookupError`]) propagate
//! - **No ambient state**: every operation takes requester, target, and
//!   resources as explicit parameters; checks are pure and freely
//!   concurrent

pub mod action;
pub mod lookup;
pub mod relationship;
pub mod requirement;
pub mod resource;
mod result;

// Re-export core types
pub use action::ActionPolicy;
pub use lookup::{LookupError, NamespaceLookup, NewPackageContext};
pub use relationship::Relationship;
pub use requirement::PermissionsRequirement;
pub use resource::OwnedResource;
pub use result::PermissionsCheckResult;

// Re-export the entities for convenience
pub use warden_types::{Account, AccountId, Membership, ReservedNamespace};
