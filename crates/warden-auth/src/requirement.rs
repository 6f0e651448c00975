//! Permission requirements.
//!
//! A [`PermissionsRequirement`] names which relationships are sufficient
//! for one side of an action: either the act-as side (may the requester
//! act as the target account?) or the resource side (does the account hold
//! rights over the matched namespaces?). Each action carries one
//! requirement per side, and the two usually differ: an action may let
//! any collaborator act on behalf of an organization while demanding
//! literal ownership of the namespace being touched.
//!
//! # Satisfaction
//!
//! A requirement is satisfied when at least one of its named relationships
//! actually holds:
//!
//! ```text
//! R.is_satisfied_by(F)  ⇔  R ∩ F ≠ ∅
//! ```
//!
//! The empty requirement ([`UNSATISFIABLE`](PermissionsRequirement::UNSATISFIABLE))
//! is satisfied by nothing. It expresses "this channel can never pass",
//! e.g. an action that forbids acting on behalf of anyone.
//!
//! # Composition
//!
//! Requirements are immutable values; combination is set union, comparison
//! is set equality. Both [`or`](PermissionsRequirement::or) and `|` are
//! `const`-friendly so action catalogs can live in `static`s.
//!
//! # Example
//!
//! ```
//! use warden_auth::{PermissionsRequirement, Relationship};
//!
//! const UPLOAD: PermissionsRequirement = PermissionsRequirement::SELF
//!     .or(PermissionsRequirement::ORGANIZATION_ADMIN);
//!
//! assert!(UPLOAD.is_satisfied_by(Relationship::SELF | Relationship::SITE_ADMIN));
//! assert!(!UPLOAD.is_satisfied_by(Relationship::ORGANIZATION_COLLABORATOR));
//! assert!(!PermissionsRequirement::UNSATISFIABLE.is_satisfied_by(Relationship::all()));
//! ```

use crate::Relationship;
use serde::{Deserialize, Serialize};

/// A declarative, combinable statement of which relationships suffice.
///
/// Pure value type: `Copy`, structural equality, serde-transparent over
/// the underlying [`Relationship`] set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionsRequirement(Relationship);

impl PermissionsRequirement {
    /// Satisfied by nothing. The act-as channel of an action that cannot
    /// be performed on behalf of anyone.
    pub const UNSATISFIABLE: Self = Self(Relationship::empty());

    /// Satisfied when the requester is the target account itself.
    pub const SELF: Self = Self(Relationship::SELF);

    /// Satisfied when the requester administers the target organization.
    pub const ORGANIZATION_ADMIN: Self = Self(Relationship::ORGANIZATION_ADMIN);

    /// Satisfied by any membership in the target organization.
    pub const ORGANIZATION_COLLABORATOR: Self = Self(Relationship::ORGANIZATION_COLLABORATOR);

    /// Satisfied when the requester is a site administrator.
    pub const SITE_ADMIN: Self = Self(Relationship::SITE_ADMIN);

    /// Satisfied when the account is listed as a resource owner.
    pub const RESOURCE_OWNER: Self = Self(Relationship::RESOURCE_OWNER);

    /// Builds a requirement from an explicit relationship set.
    #[must_use]
    pub const fn from_relationships(relationships: Relationship) -> Self {
        Self(relationships)
    }

    /// Union of two requirements (`const` counterpart of `|`).
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Self(self.0.union(other.0))
    }

    /// The named relationships of this requirement.
    #[must_use]
    pub const fn relationships(self) -> Relationship {
        self.0
    }

    /// Returns `true` if no relationship can satisfy this requirement.
    #[must_use]
    pub const fn is_unsatisfiable(self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` iff at least one named relationship holds in `facts`.
    #[must_use]
    pub fn is_satisfied_by(self, facts: Relationship) -> bool {
        self.0.intersects(facts)
    }
}

impl std::ops::BitOr for PermissionsRequirement {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.or(rhs)
    }
}

impl From<Relationship> for PermissionsRequirement {
    fn from(relationships: Relationship) -> Self {
        Self(relationships)
    }
}

impl std::fmt::Display for PermissionsRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            write!(f, "unsatisfiable")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn satisfaction_is_nonempty_intersection() {
        let requirement = PermissionsRequirement::SELF.or(PermissionsRequirement::SITE_ADMIN);

        assert!(requirement.is_satisfied_by(Relationship::SELF));
        assert!(requirement.is_satisfied_by(Relationship::SITE_ADMIN | Relationship::RESOURCE_OWNER));
        assert!(!requirement.is_satisfied_by(Relationship::RESOURCE_OWNER));
        assert!(!requirement.is_satisfied_by(Relationship::empty()));
    }

    #[test]
    fn unsatisfiable_rejects_every_fact_set() {
        assert!(!PermissionsRequirement::UNSATISFIABLE.is_satisfied_by(Relationship::all()));
        assert!(!PermissionsRequirement::UNSATISFIABLE.is_satisfied_by(Relationship::empty()));
        assert!(PermissionsRequirement::UNSATISFIABLE.is_unsatisfiable());
    }

    #[test]
    fn union_via_operator_and_const_fn_agree() {
        let a = PermissionsRequirement::SELF | PermissionsRequirement::ORGANIZATION_ADMIN;
        let b = PermissionsRequirement::SELF.or(PermissionsRequirement::ORGANIZATION_ADMIN);
        assert_eq!(a, b);
        assert_eq!(
            a.relationships(),
            Relationship::SELF | Relationship::ORGANIZATION_ADMIN
        );
    }

    #[test]
    fn structural_equality() {
        let a = PermissionsRequirement::SELF.or(PermissionsRequirement::SITE_ADMIN);
        let b = PermissionsRequirement::SITE_ADMIN.or(PermissionsRequirement::SELF);
        assert_eq!(a, b);
        assert_ne!(a, PermissionsRequirement::SELF);
    }

    #[test]
    fn from_relationship_set() {
        let requirement =
            PermissionsRequirement::from(Relationship::SELF | Relationship::RESOURCE_OWNER);
        assert!(requirement.is_satisfied_by(Relationship::RESOURCE_OWNER));
    }

    #[test]
    fn display_lists_members_or_unsatisfiable() {
        assert_eq!(
            format!("{}", PermissionsRequirement::UNSATISFIABLE),
            "unsatisfiable"
        );
        let shown = format!(
            "{}",
            PermissionsRequirement::SELF.or(PermissionsRequirement::ORGANIZATION_ADMIN)
        );
        assert!(shown.contains("self"), "got: {shown}");
        assert!(shown.contains("organization-admin"), "got: {shown}");
    }

    #[test]
    fn serde_is_transparent_over_relationships() {
        let requirement = PermissionsRequirement::SELF.or(PermissionsRequirement::SITE_ADMIN);
        let json = serde_json::to_string(&requirement).expect("serialize");
        assert_eq!(
            json,
            serde_json::to_string(&requirement.relationships()).expect("serialize inner")
        );
        let parsed: PermissionsRequirement = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, requirement);
    }
}
