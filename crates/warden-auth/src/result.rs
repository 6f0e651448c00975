//! Permission check outcomes.
//!
//! Authorization determinations are ordinary values, never errors: callers
//! branch on [`PermissionsCheckResult`] to produce a "forbidden" response.
//! Only infrastructure faults (see [`LookupError`](crate::LookupError))
//! travel through `Result::Err`.

use serde::{Deserialize, Serialize};

/// Terminal outcome of one permission check.
///
/// # Example
///
/// ```
/// use warden_auth::PermissionsCheckResult;
///
/// let outcome = PermissionsCheckResult::AccountFailure;
/// assert!(!outcome.is_allowed());
/// assert_eq!(outcome.status_str(), "account_failure");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PermissionsCheckResult {
    /// Both the act-as check and the resource check passed.
    Allowed,
    /// The requester may not act as the target account. The resource layer
    /// was never consulted.
    AccountFailure,
    /// The act-as check passed, but no matching reserved namespace's owner
    /// set satisfied the resource requirement.
    ReservedNamespaceFailure,
    /// Indeterminate. No Warden evaluator produces this; it exists for
    /// callers that must report an outcome for a check that never ran.
    Unknown,
}

impl PermissionsCheckResult {
    /// Returns `true` if the action is allowed.
    #[must_use]
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Returns `true` if the act-as check failed.
    #[must_use]
    pub fn is_account_failure(self) -> bool {
        matches!(self, Self::AccountFailure)
    }

    /// Returns `true` if the resource-ownership check failed.
    #[must_use]
    pub fn is_namespace_failure(self) -> bool {
        matches!(self, Self::ReservedNamespaceFailure)
    }

    /// Returns the outcome as a stable label.
    #[must_use]
    pub fn status_str(self) -> &'static str {
        match self {
            Self::Allowed => "allowed",
            Self::AccountFailure => "account_failure",
            Self::ReservedNamespaceFailure => "reserved_namespace_failure",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for PermissionsCheckResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.status_str())
    }
}
