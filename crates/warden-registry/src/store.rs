//! In-memory reserved-namespace store.
//!
//! Provides [`NamespaceStore`], a thread-safe implementation of
//! [`NamespaceLookup`] that manages the registry's reserved prefixes.
//!
//! # Architecture
//!
//! ```text
//! NamespaceLookup trait (warden-auth)   ← abstract definition
//!          │
//!          └── NamespaceStore (THIS MODULE)   ← concrete impl
//! ```
//!
//! # Matching
//!
//! `namespaces_for_id` returns the records that *restrict* a candidate id:
//! prefix records match case-insensitively by prefix, exact records by
//! equality, and shared namespaces are excluded: a candidate matched only
//! by shared namespaces is unrestricted.

use std::sync::RwLock;
use thiserror::Error;
use tracing::{debug, warn};
use warden_auth::{LookupError, NamespaceLookup};
use warden_types::{Account, AccountId, ReservedNamespace};

/// Errors from store mutations.
///
/// These indicate caller bugs or conflicts, not authorization outcomes.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A namespace with this value is already reserved.
    #[error("namespace '{value}' is already reserved")]
    AlreadyReserved {
        /// The conflicting value.
        value: String,
    },

    /// No namespace with this value is reserved.
    #[error("namespace '{value}' is not reserved")]
    NotReserved {
        /// The missing value.
        value: String,
    },

    /// Internal lock was poisoned (a thread panicked while holding it).
    #[error("namespace store lock poisoned: {context}")]
    LockPoisoned {
        /// Which lock was poisoned.
        context: String,
    },
}

/// Thread-safe, in-memory reserved-namespace service.
///
/// Holds the registry's namespace records behind an `RwLock`; lookups take
/// the read side, reservations and owner changes the write side. Lookup
/// results are snapshots; the store never hands out references into its
/// guarded state.
///
/// # Example
///
/// ```
/// use warden_auth::NamespaceLookup;
/// use warden_registry::NamespaceStore;
/// use warden_types::{Account, ReservedNamespace};
///
/// let contoso = Account::organization("Contoso", "ops@contoso.example");
/// let store = NamespaceStore::new();
/// store
///     .reserve(ReservedNamespace::prefix("Contoso.").with_owner(&contoso))
///     .expect("fresh value");
///
/// let matches = store.namespaces_for_id("Contoso.Utils.Logger").expect("lookup");
/// assert_eq!(matches.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct NamespaceStore {
    namespaces: RwLock<Vec<ReservedNamespace>>,
}

impl NamespaceStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a store from existing records (deduplicated by value).
    #[must_use]
    pub fn with_namespaces(namespaces: impl IntoIterator<Item = ReservedNamespace>) -> Self {
        let store = Self::new();
        for ns in namespaces {
            if let Err(err) = store.reserve(ns) {
                warn!(error = %err, "skipping duplicate namespace while seeding");
            }
        }
        store
    }

    /// Reserves a namespace record.
    ///
    /// # Errors
    ///
    /// [`StoreError::AlreadyReserved`] if a record with the same value
    /// (case-insensitive) exists; [`StoreError::LockPoisoned`] on a
    /// poisoned lock.
    pub fn reserve(&self, namespace: ReservedNamespace) -> Result<(), StoreError> {
        let mut guard = self.write_guard()?;
        if guard
            .iter()
            .any(|ns| ns.value().eq_ignore_ascii_case(namespace.value()))
        {
            return Err(StoreError::AlreadyReserved {
                value: namespace.value().to_string(),
            });
        }
        debug!(namespace = %namespace, shared = namespace.is_shared(), "reserved namespace");
        guard.push(namespace);
        Ok(())
    }

    /// Releases a namespace record, returning it.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotReserved`] if no record has this value.
    pub fn release(&self, value: &str) -> Result<ReservedNamespace, StoreError> {
        let mut guard = self.write_guard()?;
        let index = guard
            .iter()
            .position(|ns| ns.value().eq_ignore_ascii_case(value))
            .ok_or_else(|| StoreError::NotReserved {
                value: value.to_string(),
            })?;
        let released = guard.remove(index);
        debug!(namespace = %released, "released namespace");
        Ok(released)
    }

    /// Adds an owner to a reserved namespace. Returns `false` if the
    /// account already owned it.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotReserved`] if no record has this value.
    pub fn add_owner(&self, value: &str, owner: &Account) -> Result<bool, StoreError> {
        let mut guard = self.write_guard()?;
        let namespace = Self::find_mut(&mut guard, value)?;
        let added = namespace.add_owner(owner);
        if added {
            debug!(namespace = %namespace, owner = %owner, "added namespace owner");
        }
        Ok(added)
    }

    /// Removes an owner from a reserved namespace. Returns `false` if the
    /// account was not an owner.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotReserved`] if no record has this value.
    pub fn remove_owner(&self, value: &str, owner: &AccountId) -> Result<bool, StoreError> {
        let mut guard = self.write_guard()?;
        let namespace = Self::find_mut(&mut guard, value)?;
        let removed = namespace.remove_owner(owner);
        if removed {
            debug!(namespace = %namespace, owner = %owner, "removed namespace owner");
        }
        Ok(removed)
    }

    /// Every record matching `candidate`, shared ones included.
    ///
    /// For restriction checks use the [`NamespaceLookup`] impl instead,
    /// which excludes shared namespaces.
    ///
    /// # Errors
    ///
    /// [`StoreError::LockPoisoned`] on a poisoned lock.
    pub fn all_matching(&self, candidate: &str) -> Result<Vec<ReservedNamespace>, StoreError> {
        let guard = self.read_guard()?;
        Ok(guard.iter().filter(|ns| ns.matches(candidate)).cloned().collect())
    }

    /// Number of reserved records.
    ///
    /// # Errors
    ///
    /// [`StoreError::LockPoisoned`] on a poisoned lock.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read_guard()?.len())
    }

    /// Returns `true` if no records are reserved.
    ///
    /// # Errors
    ///
    /// [`StoreError::LockPoisoned`] on a poisoned lock.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.read_guard()?.is_empty())
    }

    fn find_mut<'a>(
        guard: &'a mut Vec<ReservedNamespace>,
        value: &str,
    ) -> Result<&'a mut ReservedNamespace, StoreError> {
        guard
            .iter_mut()
            .find(|ns| ns.value().eq_ignore_ascii_case(value))
            .ok_or_else(|| StoreError::NotReserved {
                value: value.to_string(),
            })
    }

    fn read_guard(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<ReservedNamespace>>, StoreError> {
        self.namespaces.read().map_err(|_| StoreError::LockPoisoned {
            context: "namespaces".to_string(),
        })
    }

    fn write_guard(&self) -> Result<std::sync::RwLockWriteGuard<'_, Vec<ReservedNamespace>>, StoreError> {
        self.namespaces.write().map_err(|_| StoreError::LockPoisoned {
            context: "namespaces".to_string(),
        })
    }
}

impl NamespaceLookup for NamespaceStore {
    fn namespaces_for_id(&self, package_id: &str) -> Result<Vec<ReservedNamespace>, LookupError> {
        let guard = self.namespaces.read().map_err(|_| LookupError::LockPoisoned {
            context: "namespaces".to_string(),
        })?;
        let matches: Vec<ReservedNamespace> = guard
            .iter()
            .filter(|ns| !ns.is_shared() && ns.matches(package_id))
            .cloned()
            .collect();
        debug!(
            package_id,
            matches = matches.len(),
            "resolved restricting namespaces"
        );
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contoso() -> Account {
        Account::organization("Contoso", "ops@contoso.example")
    }

    #[test]
    fn reserve_and_lookup() {
        let store = NamespaceStore::new();
        store
            .reserve(ReservedNamespace::prefix("Contoso.").with_owner(&contoso()))
            .expect("fresh value");

        let matches = store
            .namespaces_for_id("Contoso.Utils.Logger")
            .expect("lookup should answer");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].value(), "Contoso.");

        let misses = store
            .namespaces_for_id("Fabrikam.Utils")
            .expect("lookup should answer");
        assert!(misses.is_empty());
    }

    #[test]
    fn duplicate_reservation_rejected_case_insensitively() {
        let store = NamespaceStore::new();
        store
            .reserve(ReservedNamespace::prefix("Contoso."))
            .expect("fresh value");

        let err = store
            .reserve(ReservedNamespace::prefix("contoso."))
            .expect_err("duplicate must be rejected");
        assert!(matches!(err, StoreError::AlreadyReserved { .. }));
        assert_eq!(store.len().expect("len"), 1);
    }

    #[test]
    fn release_round_trip() {
        let store = NamespaceStore::new();
        store
            .reserve(ReservedNamespace::exact("Contoso.Utils"))
            .expect("fresh value");

        let released = store.release("contoso.utils").expect("present");
        assert_eq!(released.value(), "Contoso.Utils");
        assert!(store.is_empty().expect("is_empty"));

        let err = store.release("Contoso.Utils").expect_err("gone");
        assert!(matches!(err, StoreError::NotReserved { .. }));
    }

    #[test]
    fn multiple_records_can_match_one_id() {
        let store = NamespaceStore::with_namespaces([
            ReservedNamespace::prefix("Jquery."),
            ReservedNamespace::prefix("Jquery.Extensions."),
            ReservedNamespace::prefix("Fabrikam."),
        ]);

        let matches = store
            .namespaces_for_id("Jquery.Extensions.MyCoolExtension")
            .expect("lookup should answer");
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn shared_namespaces_do_not_restrict() {
        let store = NamespaceStore::with_namespaces([
            ReservedNamespace::prefix("Community.").shared(),
            ReservedNamespace::prefix("Community.Contoso.").with_owner(&contoso()),
        ]);

        // Matched only by the shared record → unrestricted.
        let matches = store
            .namespaces_for_id("Community.Anything")
            .expect("lookup should answer");
        assert!(matches.is_empty());

        // The non-shared record still restricts.
        let matches = store
            .namespaces_for_id("Community.Contoso.Tool")
            .expect("lookup should answer");
        assert_eq!(matches.len(), 1);

        // all_matching sees both.
        let all = store
            .all_matching("Community.Contoso.Tool")
            .expect("store readable");
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn owner_management() {
        let org = contoso();
        let store = NamespaceStore::new();
        store
            .reserve(ReservedNamespace::prefix("Contoso."))
            .expect("fresh value");

        assert!(store.add_owner("Contoso.", &org).expect("reserved"));
        assert!(!store.add_owner("Contoso.", &org).expect("reserved"));

        let matches = store
            .namespaces_for_id("Contoso.Utils")
            .expect("lookup should answer");
        assert!(matches[0].is_owner(org.id()));

        assert!(store.remove_owner("Contoso.", org.id()).expect("reserved"));
        assert!(!store.remove_owner("Contoso.", org.id()).expect("reserved"));

        let err = store
            .add_owner("Fabrikam.", &org)
            .expect_err("unknown value");
        assert!(matches!(err, StoreError::NotReserved { .. }));
    }

    #[test]
    fn seeding_skips_duplicates() {
        let store = NamespaceStore::with_namespaces([
            ReservedNamespace::prefix("Contoso."),
            ReservedNamespace::prefix("Contoso."),
        ]);
        assert_eq!(store.len().expect("len"), 1);
    }

    #[test]
    fn lookup_through_trait_object() {
        let store = NamespaceStore::with_namespaces([ReservedNamespace::prefix("Contoso.")]);
        let lookup: &dyn NamespaceLookup = &store;
        let matches = lookup
            .namespaces_for_id("Contoso.Utils")
            .expect("lookup should answer");
        assert_eq!(matches.len(), 1);
    }
}
