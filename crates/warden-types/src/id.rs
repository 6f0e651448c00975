//! Identifier types for Warden.
//!
//! Account keys are UUID-based so they are safe to transmit across
//! processes and services without coordination.

use serde::{Deserialize, Serialize};
use uuid::{uuid, Uuid};

/// Warden namespace UUID for deterministic UUID v5 generation.
///
/// Used as the namespace for deriving stable account keys from
/// well-known names via UUID v5 (SHA-1 based).
const WARDEN_NAMESPACE: Uuid = uuid!("b6c1efad-6c6e-4b6e-9c7a-3f0d2a1c9e55");

/// Unique key of an [`Account`](crate::Account).
///
/// # UUID Strategy
///
/// - [`AccountId::new`] draws a random UUID v4, one per created account.
/// - [`AccountId::named`] derives a deterministic UUID v5 from a name.
///   The same name always produces the same key, across processes and
///   machines, which makes well-known accounts (fixtures, seed data,
///   service accounts) stable without a registry round-trip.
///
/// # Why No Default?
///
/// **`AccountId` does not implement `Default` intentionally.** A "default
/// account" is a bug waiting to happen: every call site must decide whether
/// it wants a fresh random key or a derived one.
///
/// # Example
///
/// ```
/// use warden_types::AccountId;
///
/// // Random: every call yields a distinct key
/// let a = AccountId::new();
/// let b = AccountId::new();
/// assert_ne!(a, b);
///
/// // Named: deterministic per name
/// let alice1 = AccountId::named("alice");
/// let alice2 = AccountId::named("alice");
/// assert_eq!(alice1, alice2);
/// assert_ne!(alice1, AccountId::named("bob"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Creates a new random account key (UUID v4).
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Derives a deterministic account key from a name (UUID v5).
    ///
    /// # Example
    ///
    /// ```
    /// use warden_types::AccountId;
    ///
    /// assert_eq!(AccountId::named("contoso"), AccountId::named("contoso"));
    /// ```
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self(Uuid::new_v5(&WARDEN_NAMESPACE, name.as_bytes()))
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "acct:{}", self.0)
    }
}
