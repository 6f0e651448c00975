//! Resource-permission evaluation.
//!
//! One logical request can match several owned resources at once: a
//! candidate package id falls under every reserved namespace whose prefix
//! covers it. Rights to *any one* matching resource authorize the request,
//! so evaluation is an OR across the collection.
//!
//! # Architecture
//!
//! ```text
//! OwnedResource trait (warden-auth)   ← the seam: "has an owner set"
//!          │
//!          └── ReservedNamespace (warden-types)   ← the gallery's resource
//! ```
//!
//! Any type exposing an owner slice plugs into the same evaluator; no
//! per-resource-type policy subclassing.

use crate::{relationship, PermissionsCheckResult, PermissionsRequirement};
use warden_types::{Account, ReservedNamespace};

/// An owned object an action may touch.
pub trait OwnedResource {
    /// The owner accounts of this resource. Empty means unclaimed.
    fn owners(&self) -> &[Account];
}

impl OwnedResource for ReservedNamespace {
    fn owners(&self) -> &[Account] {
        self.owners()
    }
}

/// Evaluates whether `account` holds sufficient rights over `resources`.
///
/// - An empty collection is vacuously [`Allowed`]: no resource constrains
///   the action, so this layer does not restrict it.
/// - Otherwise the result is [`Allowed`] iff **any** resource's owner-set
///   facts satisfy `requirement`; only when all of them fail is the result
///   [`ReservedNamespaceFailure`].
///
/// [`Allowed`]: PermissionsCheckResult::Allowed
/// [`ReservedNamespaceFailure`]: PermissionsCheckResult::ReservedNamespaceFailure
///
/// # Example
///
/// ```
/// use warden_auth::{resource, PermissionsCheckResult, PermissionsRequirement};
/// use warden_types::{Account, ReservedNamespace};
///
/// let contoso = Account::organization("Contoso", "ops@contoso.example");
/// let owned = ReservedNamespace::prefix("Contoso.").with_owner(&contoso);
/// let foreign = ReservedNamespace::prefix("Contoso.Utils.");
///
/// // Rights to one of the two matching namespaces suffice.
/// let outcome = resource::evaluate(
///     &contoso,
///     PermissionsRequirement::RESOURCE_OWNER,
///     &[owned, foreign],
/// );
/// assert_eq!(outcome, PermissionsCheckResult::Allowed);
/// ```
#[must_use]
pub fn evaluate<R: OwnedResource>(
    account: &Account,
    requirement: PermissionsRequirement,
    resources: &[R],
) -> PermissionsCheckResult {
    if resources.is_empty() {
        return PermissionsCheckResult::Allowed;
    }
    let satisfied = resources.iter().any(|resource| {
        requirement.is_satisfied_by(relationship::against_owners(account, resource.owners()))
    });
    if satisfied {
        PermissionsCheckResult::Allowed
    } else {
        PermissionsCheckResult::ReservedNamespaceFailure
    }
}
