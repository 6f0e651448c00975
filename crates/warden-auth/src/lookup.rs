//! Namespace lookup collaborator.
//!
//! The only external call the policy core makes: mapping a candidate
//! package id to the reserved namespaces that restrict it.
//!
//! # Architecture
//!
//! ```text
//! NamespaceLookup trait (warden-auth)        ← abstract definition
//!          │
//!          └── NamespaceStore (warden-registry)   ← in-memory impl
//! ```
//!
//! Implementations must be deterministic for a fixed snapshot of data.
//! Returning an empty set is valid and meaningful: no namespace restricts
//! the candidate id. A backing-store failure is a [`LookupError`], never
//! an empty set; the distinction separates "you may act as no one" from
//! "the system could not determine matches".

use thiserror::Error;
use warden_types::ReservedNamespace;

/// Failure of the namespace lookup collaborator.
///
/// This is the only infrastructure fault the policy core propagates.
/// Authorization denials are values, not errors; see
/// [`PermissionsCheckResult`](crate::PermissionsCheckResult).
#[derive(Debug, Error)]
pub enum LookupError {
    /// The backing store could not be reached or could not answer.
    #[error("namespace lookup unavailable: {reason}")]
    Unavailable {
        /// Human-readable cause.
        reason: String,
    },

    /// An in-process store's lock was poisoned (a thread panicked while
    /// holding it).
    #[error("namespace store lock poisoned: {context}")]
    LockPoisoned {
        /// Which lock was poisoned.
        context: String,
    },
}

/// Maps a candidate package id to the reserved namespaces restricting it.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; the core may be called
/// concurrently from many tasks.
pub trait NamespaceLookup: Send + Sync {
    /// Returns every non-shared reserved namespace matching `package_id`.
    ///
    /// # Errors
    ///
    /// [`LookupError`] when the backing store cannot answer. Transient
    /// failures are the caller's retry concern; the core never retries.
    fn namespaces_for_id(&self, package_id: &str) -> Result<Vec<ReservedNamespace>, LookupError>;
}

/// Per-request context for an action on a new package id.
///
/// Bundles the raw candidate id with the lookup collaborator. Created per
/// request and discarded after the decision; never persisted.
///
/// # Example
///
/// ```
/// use warden_auth::{LookupError, NamespaceLookup, NewPackageContext};
/// use warden_types::ReservedNamespace;
///
/// struct NoReservations;
///
/// impl NamespaceLookup for NoReservations {
///     fn namespaces_for_id(&self, _: &str) -> Result<Vec<ReservedNamespace>, LookupError> {
///         Ok(Vec::new())
///     }
/// }
///
/// let lookup = NoReservations;
/// let context = NewPackageContext::new("Contoso.Utils.Logger", &lookup);
/// assert_eq!(context.package_id(), "Contoso.Utils.Logger");
/// assert!(context.resolve().expect("lookup should answer").is_empty());
/// ```
pub struct NewPackageContext<'a> {
    package_id: &'a str,
    lookup: &'a dyn NamespaceLookup,
}

impl<'a> NewPackageContext<'a> {
    /// Creates a context for one decision.
    #[must_use]
    pub fn new(package_id: &'a str, lookup: &'a dyn NamespaceLookup) -> Self {
        Self { package_id, lookup }
    }

    /// The candidate package id.
    #[must_use]
    pub fn package_id(&self) -> &str {
        self.package_id
    }

    /// Resolves the restricting namespaces through the collaborator.
    ///
    /// # Errors
    ///
    /// Propagates the collaborator's [`LookupError`].
    pub fn resolve(&self) -> Result<Vec<ReservedNamespace>, LookupError> {
        self.lookup.namespaces_for_id(self.package_id)
    }
}

impl std::fmt::Debug for NewPackageContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewPackageContext")
            .field("package_id", &self.package_id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingLookup;

    impl NamespaceLookup for FailingLookup {
        fn namespaces_for_id(&self, _: &str) -> Result<Vec<ReservedNamespace>, LookupError> {
            Err(LookupError::Unavailable {
                reason: "backing store offline".to_string(),
            })
        }
    }

    struct FixedLookup(Vec<ReservedNamespace>);

    impl NamespaceLookup for FixedLookup {
        fn namespaces_for_id(&self, id: &str) -> Result<Vec<ReservedNamespace>, LookupError> {
            Ok(self.0.iter().filter(|ns| ns.matches(id)).cloned().collect())
        }
    }

    #[test]
    fn context_resolves_through_collaborator() {
        let lookup = FixedLookup(vec![
            ReservedNamespace::prefix("Jquery."),
            ReservedNamespace::prefix("Fabrikam."),
        ]);
        let context = NewPackageContext::new("Jquery.Extensions.Foo", &lookup);

        let matches = context.resolve().expect("lookup should answer");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].value(), "Jquery.");
    }

    #[test]
    fn lookup_failure_propagates() {
        let lookup = FailingLookup;
        let context = NewPackageContext::new("Anything", &lookup);

        let err = context.resolve().expect_err("failure must propagate");
        assert!(matches!(err, LookupError::Unavailable { .. }));
        assert!(err.to_string().contains("backing store offline"));
    }

    #[test]
    fn lock_poisoned_display() {
        let err = LookupError::LockPoisoned {
            context: "namespaces".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("lock poisoned"), "got: {msg}");
        assert!(msg.contains("namespaces"), "got: {msg}");
    }

    #[test]
    fn trait_object_works() {
        let lookup: Box<dyn NamespaceLookup> = Box::new(FixedLookup(Vec::new()));
        assert!(lookup
            .namespaces_for_id("Anything")
            .expect("lookup should answer")
            .is_empty());
    }
}
