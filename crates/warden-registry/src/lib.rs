//! Registry-side implementations for Warden.
//!
//! The policy core (`warden-auth`) defines the traits; this crate provides
//! what a running registry plugs into them:
//!
//! - [`NamespaceStore`]: thread-safe in-memory reserved-namespace service
//!   implementing [`NamespaceLookup`](warden_auth::NamespaceLookup)
//! - [`actions`]: the catalog of gallery actions with their requirement
//!   pairs
//!
//! # Architecture
//!
//! ```text
//! warden-auth (traits + policy core)
//!     NamespaceLookup, ActionPolicy, PermissionsRequirement
//!         ↓
//! warden-registry (implementations)            ◄── THIS CRATE
//!     NamespaceStore, actions::*
//! ```
//!
//! # Example
//!
//! ```
//! use warden_auth::{NewPackageContext, PermissionsCheckResult};
//! use warden_registry::{actions, NamespaceStore};
//! use warden_types::{Account, ReservedNamespace};
//!
//! let mut contoso = Account::organization("Contoso", "ops@contoso.example");
//! let mut alice = Account::individual("alice", "alice@example.test");
//! contoso.add_member(&mut alice, true).expect("enroll alice");
//!
//! let store = NamespaceStore::new();
//! store
//!     .reserve(ReservedNamespace::prefix("Contoso.").with_owner(&contoso))
//!     .expect("fresh value");
//!
//! let context = NewPackageContext::new("Contoso.Utils.Logger", &store);
//! let outcome = actions::UPLOAD_NEW_PACKAGE_ID
//!     .check_new_package(&alice, &contoso, &context)
//!     .expect("lookup should answer");
//! assert_eq!(outcome, PermissionsCheckResult::Allowed);
//! ```

pub mod actions;
mod store;

pub use store::{NamespaceStore, StoreError};

// Re-export the policy core for convenience
pub use warden_auth::{
    ActionPolicy, LookupError, NamespaceLookup, NewPackageContext, PermissionsCheckResult,
    PermissionsRequirement, Relationship,
};
