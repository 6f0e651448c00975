//! Reserved-namespace records.
//!
//! A [`ReservedNamespace`] claims an identifier prefix (or an exact
//! identifier) on behalf of its owner accounts. A single candidate id can
//! fall under several records at once: `Jquery.Extensions.Foo` matches both
//! `Jquery.*` and `Jquery.Extensions.*`.

use crate::{Account, AccountId};
use serde::{Deserialize, Serialize};

/// An owned identifier-prefix record.
///
/// # Owners
///
/// The owner set never contains duplicates; re-adding an existing owner is
/// a no-op. An empty owner set is valid and means the namespace is
/// unclaimed; nobody can satisfy an ownership requirement against it.
///
/// # Shared Namespaces
///
/// A shared namespace marks a prefix as community-owned: it exists for
/// bookkeeping but never restricts who may act under it. Lookup
/// implementations exclude shared records from restriction checks.
///
/// # Example
///
/// ```
/// use warden_types::{Account, ReservedNamespace};
///
/// let contoso = Account::organization("Contoso", "ops@contoso.example");
/// let ns = ReservedNamespace::prefix("Contoso.").with_owner(&contoso);
///
/// assert!(ns.matches("Contoso.Utils.Logger"));
/// assert!(!ns.matches("Fabrikam.Utils"));
/// assert!(ns.is_owner(contoso.id()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservedNamespace {
    value: String,
    prefix: bool,
    shared: bool,
    owners: Vec<Account>,
}

impl ReservedNamespace {
    /// Creates a prefix record: candidate ids match when they start with
    /// `value` (case-insensitive).
    #[must_use]
    pub fn prefix(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            prefix: true,
            shared: false,
            owners: Vec::new(),
        }
    }

    /// Creates an exact record: only the identical id matches
    /// (case-insensitive).
    #[must_use]
    pub fn exact(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            prefix: false,
            shared: false,
            owners: Vec::new(),
        }
    }

    /// Marks the record as shared (community-owned, non-restricting).
    #[must_use]
    pub fn shared(mut self) -> Self {
        self.shared = true;
        self
    }

    /// Adds an owner, keeping the set duplicate-free.
    #[must_use]
    pub fn with_owner(mut self, owner: &Account) -> Self {
        self.add_owner(owner);
        self
    }

    /// Returns the reserved value (the prefix or exact id).
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns `true` for prefix records, `false` for exact records.
    #[must_use]
    pub fn is_prefix(&self) -> bool {
        self.prefix
    }

    /// Returns `true` if the namespace is shared (non-restricting).
    #[must_use]
    pub fn is_shared(&self) -> bool {
        self.shared
    }

    /// The owner accounts, duplicate-free. Empty means unclaimed.
    #[must_use]
    pub fn owners(&self) -> &[Account] {
        &self.owners
    }

    /// Adds an owner account. Returns `false` if it was already present.
    pub fn add_owner(&mut self, owner: &Account) -> bool {
        if self.is_owner(owner.id()) {
            return false;
        }
        self.owners.push(owner.clone());
        true
    }

    /// Removes an owner by key. Returns `false` if it was not present.
    pub fn remove_owner(&mut self, owner: &AccountId) -> bool {
        let before = self.owners.len();
        self.owners.retain(|o| o.id() != owner);
        self.owners.len() != before
    }

    /// Returns `true` if `owner` appears in the owner set.
    #[must_use]
    pub fn is_owner(&self, owner: &AccountId) -> bool {
        self.owners.iter().any(|o| o.id() == owner)
    }

    /// Whether `candidate` falls under this record.
    ///
    /// Prefix records match by case-insensitive prefix, exact records by
    /// case-insensitive equality.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        if self.prefix {
            candidate
                .get(..self.value.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(&self.value))
        } else {
            candidate.eq_ignore_ascii_case(&self.value)
        }
    }
}

impl std::fmt::Display for ReservedNamespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.prefix {
            write!(f, "{}*", self.value)
        } else {
            write!(f, "{}", self.value)
        }
    }
}
