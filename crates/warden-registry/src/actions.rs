//! The gallery's action catalog.
//!
//! One [`ActionPolicy`] per named action, each pairing an act-as
//! requirement with a namespace requirement. Catalog entries are `static`
//! values; policies are pure data, so a single instance serves every
//! request concurrently.
//!
//! | Action | Act-as | Namespace |
//! |--------|--------|-----------|
//! | [`UPLOAD_NEW_PACKAGE_ID`] | self \| org-admin \| org-collaborator | resource-owner |
//! | [`MANAGE_NAMESPACE_OWNERSHIP`] | self \| org-admin | resource-owner \| site-admin |
//! | [`ADMIN_RESERVE_NAMESPACE`] | site-admin | unsatisfiable |

use warden_auth::{ActionPolicy, PermissionsRequirement};

/// Push a package under an id no package has used before.
///
/// Any member may act for their organization, but the account being acted
/// for must literally own one of the matching namespaces.
pub static UPLOAD_NEW_PACKAGE_ID: ActionPolicy = ActionPolicy::new(
    PermissionsRequirement::SELF
        .or(PermissionsRequirement::ORGANIZATION_ADMIN)
        .or(PermissionsRequirement::ORGANIZATION_COLLABORATOR),
    PermissionsRequirement::RESOURCE_OWNER,
);

/// Add or remove owners of a reserved namespace.
///
/// Collaborators may not act for the organization here; site
/// administrators may adjust ownership of any namespace.
pub static MANAGE_NAMESPACE_OWNERSHIP: ActionPolicy = ActionPolicy::new(
    PermissionsRequirement::SELF.or(PermissionsRequirement::ORGANIZATION_ADMIN),
    PermissionsRequirement::RESOURCE_OWNER.or(PermissionsRequirement::SITE_ADMIN),
);

/// Reserve a brand-new namespace prefix.
///
/// Site administrators only, and only for prefixes no existing record
/// already covers; any match at all denies the reservation, which is what
/// the unsatisfiable namespace requirement expresses.
pub static ADMIN_RESERVE_NAMESPACE: ActionPolicy = ActionPolicy::new(
    PermissionsRequirement::SITE_ADMIN,
    PermissionsRequirement::UNSATISFIABLE,
);

#[cfg(test)]
mod tests {
    use super::*;
    use warden_auth::{PermissionsCheckResult, Relationship};
    use warden_types::{Account, ReservedNamespace};

    #[test]
    fn upload_act_as_includes_collaborators() {
        assert!(UPLOAD_NEW_PACKAGE_ID
            .on_behalf_of_requirement()
            .is_satisfied_by(Relationship::ORGANIZATION_COLLABORATOR));
        assert!(!MANAGE_NAMESPACE_OWNERSHIP
            .on_behalf_of_requirement()
            .is_satisfied_by(Relationship::ORGANIZATION_COLLABORATOR));
    }

    #[test]
    fn admin_reserve_denied_on_any_match() {
        let ops = Account::individual("ops", "ops@example.test").with_site_admin(true);
        let existing = ReservedNamespace::prefix("Contoso.");

        let outcome = ADMIN_RESERVE_NAMESPACE.check_permissions(&ops, &ops, &[existing]);
        assert_eq!(outcome, PermissionsCheckResult::ReservedNamespaceFailure);

        let none: [ReservedNamespace; 0] = [];
        let outcome = ADMIN_RESERVE_NAMESPACE.check_permissions(&ops, &ops, &none);
        assert_eq!(outcome, PermissionsCheckResult::Allowed);
    }

    #[test]
    fn admin_reserve_requires_site_admin() {
        let alice = Account::individual("alice", "alice@example.test");
        let none: [ReservedNamespace; 0] = [];
        let outcome = ADMIN_RESERVE_NAMESPACE.check_permissions(&alice, &alice, &none);
        assert_eq!(outcome, PermissionsCheckResult::AccountFailure);
    }

    #[test]
    fn manage_ownership_allows_site_admin_over_foreign_namespace() {
        let ops = Account::individual("ops", "ops@example.test").with_site_admin(true);
        let contoso = Account::organization("Contoso", "ops@contoso.example");
        let ns = ReservedNamespace::prefix("Contoso.").with_owner(&contoso);

        let outcome = MANAGE_NAMESPACE_OWNERSHIP.check_permissions(&ops, &ops, &[ns]);
        assert_eq!(outcome, PermissionsCheckResult::Allowed);
    }
}
