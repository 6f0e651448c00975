//! Entity types for the Warden authorization engine.
//!
//! This crate holds the identity and resource types the policy core
//! evaluates: accounts, memberships, and reserved-namespace records. It
//! contains **no permission logic**; deciding what a relationship allows
//! is the job of `warden-auth`.
//!
//! # Crate Architecture
//!
//! ```text
//! warden-types   : AccountId, Account, Membership, ReservedNamespace  ◄── HERE
//!      ↑
//! warden-auth    : Relationship, PermissionsRequirement, ActionPolicy
//!      ↑
//! warden-registry: NamespaceStore, action catalog
//! ```
//!
//! # Why a Separate Types Crate?
//!
//! - **No logic dependency**: entities are pure identity/ownership data
//! - **Stable seam**: stores and policy evolve without touching each other
//! - **Serialization**: every type is serde-ready for snapshot transport
//!
//! # Example
//!
//! ```
//! use warden_types::{Account, ReservedNamespace};
//!
//! let mut contoso = Account::organization("Contoso", "ops@contoso.example");
//! let mut alice = Account::individual("alice", "alice@example.test");
//! contoso.add_member(&mut alice, true).expect("enroll alice");
//!
//! let ns = ReservedNamespace::prefix("Contoso.").with_owner(&contoso);
//! assert!(ns.matches("Contoso.Utils.Logger"));
//! ```

mod account;
mod id;
mod namespace;

pub use account::{Account, AccountError, AccountKind, Membership};
pub use id::AccountId;
pub use namespace::ReservedNamespace;
