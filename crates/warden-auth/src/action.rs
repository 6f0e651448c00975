//! Action policies.
//!
//! An [`ActionPolicy`] is the composition root of one authorization
//! decision. It carries two [`PermissionsRequirement`]s (one for the
//! act-as relationship, one for resource ownership) and combines the
//! relationship resolver and the resource evaluator with fixed
//! short-circuit semantics.
//!
//! # Decision Order
//!
//! ```text
//! check_permissions(requester, account, resources)
//!     1. facts  = relationship::between(requester, account)
//!     2. act-as requirement unsatisfied        → AccountFailure (STOP)
//!     3. resource::evaluate(account, resources) → Allowed | ReservedNamespaceFailure
//! ```
//!
//! The act-as check is a hard short-circuit: when the requester cannot act
//! as the target account, resource ownership is never consulted, even if
//! the requester independently owns every matching namespace. The action
//! is "requester acting as account", not "requester acting as itself".
//!
//! # One Policy Per Action
//!
//! Policies are `const`-constructible values; a registry defines its
//! actions once as `static`s (see `warden-registry`'s catalog) rather than
//! subclassing per resource type.

use crate::{
    relationship, resource, LookupError, NewPackageContext, OwnedResource,
    PermissionsCheckResult, PermissionsRequirement,
};
use warden_types::Account;

/// The permission policy of one named action.
///
/// # Example
///
/// ```
/// use warden_auth::{ActionPolicy, PermissionsCheckResult, PermissionsRequirement};
/// use warden_types::{Account, ReservedNamespace};
///
/// static UPLOAD: ActionPolicy = ActionPolicy::new(
///     PermissionsRequirement::SELF.or(PermissionsRequirement::ORGANIZATION_ADMIN),
///     PermissionsRequirement::RESOURCE_OWNER,
/// );
///
/// let alice = Account::individual("alice", "alice@example.test");
/// let ns = ReservedNamespace::prefix("Alice.").with_owner(&alice);
///
/// // Acting as herself over a namespace she owns.
/// let outcome = UPLOAD.check_permissions(&alice, &alice, &[ns]);
/// assert_eq!(outcome, PermissionsCheckResult::Allowed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionPolicy {
    on_behalf_of: PermissionsRequirement,
    resource: PermissionsRequirement,
}

impl ActionPolicy {
    /// Creates a policy from its act-as and resource requirements.
    #[must_use]
    pub const fn new(
        on_behalf_of: PermissionsRequirement,
        resource: PermissionsRequirement,
    ) -> Self {
        Self {
            on_behalf_of,
            resource,
        }
    }

    /// The requirement governing the act-as relationship.
    #[must_use]
    pub const fn on_behalf_of_requirement(&self) -> PermissionsRequirement {
        self.on_behalf_of
    }

    /// The requirement governing resource ownership.
    #[must_use]
    pub const fn resource_requirement(&self) -> PermissionsRequirement {
        self.resource
    }

    /// Decides whether `requester`, acting as `account`, may perform this
    /// action against the already-resolved `resources`.
    ///
    /// Stateless and pure; see the module docs for the decision order.
    #[must_use]
    pub fn check_permissions<R: OwnedResource>(
        &self,
        requester: &Account,
        account: &Account,
        resources: &[R],
    ) -> PermissionsCheckResult {
        let facts = relationship::between(requester, account);
        if !self.on_behalf_of.is_satisfied_by(facts) {
            return PermissionsCheckResult::AccountFailure;
        }
        resource::evaluate(account, self.resource, resources)
    }

    /// Decides the action for a new package id, resolving the restricting
    /// namespaces through the context's lookup collaborator.
    ///
    /// The lookup runs exactly once, before any evaluation; its result is
    /// not cached here.
    ///
    /// # Errors
    ///
    /// Propagates [`LookupError`]; a backing-store failure is never
    /// silently treated as "no restricting namespaces".
    pub fn check_new_package(
        &self,
        requester: &Account,
        account: &Account,
        context: &NewPackageContext<'_>,
    ) -> Result<PermissionsCheckResult, LookupError> {
        let namespaces = context.resolve()?;
        Ok(self.check_permissions(requester, account, &namespaces))
    }

    /// Enumerates the accounts `requester` may perform this action on
    /// behalf of, for the given package-id context.
    ///
    /// Candidates are the requester itself first, then the requester's
    /// organizations in enrollment order; each is kept iff
    /// [`check_permissions`](Self::check_permissions) answers `Allowed`.
    /// `Ok(vec![])` means "you may act as no one"; `Err` means the lookup
    /// could not determine matches.
    ///
    /// # Errors
    ///
    /// Propagates [`LookupError`] from the single namespace lookup.
    pub fn accounts_allowed_on_behalf_of(
        &self,
        requester: &Account,
        context: &NewPackageContext<'_>,
    ) -> Result<Vec<Account>, LookupError> {
        let namespaces = context.resolve()?;
        let mut allowed = Vec::new();
        if self
            .check_permissions(requester, requester, &namespaces)
            .is_allowed()
        {
            allowed.push(requester.clone());
        }
        for organization in requester.organizations() {
            if self
                .check_permissions(requester, organization, &namespaces)
                .is_allowed()
            {
                allowed.push(organization.clone());
            }
        }
        Ok(allowed)
    }
}
