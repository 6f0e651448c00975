//! Account and membership types.
//!
//! An [`Account`] is the identity actions target or are performed "as".
//! Individuals and organizations are both accounts; an organization
//! additionally holds [`Membership`] records. The split lives in
//! [`AccountKind`], so the invariant *an individual account has no
//! memberships of its own* is structural rather than a runtime check.
//!
//! # Snapshot Semantics
//!
//! Accounts are value types. Policy evaluation expects a consistent
//! snapshot of the account/membership graph loaded up front; Warden never
//! mutates the graph during a check. [`Account::add_member`] maintains both
//! sides of the relation (the organization's member list and the member's
//! organization list) in one call so snapshots stay coherent.
//!
//! # Example
//!
//! ```
//! use warden_types::Account;
//!
//! let mut contoso = Account::organization("Contoso", "ops@contoso.example");
//! let mut alice = Account::individual("alice", "alice@example.test");
//!
//! contoso.add_member(&mut alice, true).expect("enroll alice");
//!
//! assert!(contoso.is_organization());
//! assert!(contoso.membership_of(alice.id()).expect("member").admin);
//! assert_eq!(alice.organizations().len(), 1);
//! ```

use crate::AccountId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from account graph construction.
#[derive(Debug, Error)]
pub enum AccountError {
    /// Memberships can only be added to an organization account.
    #[error("account '{username}' is not an organization")]
    NotAnOrganization {
        /// Username of the account the membership was added to.
        username: String,
    },

    /// Organizations cannot be members of other organizations.
    #[error("account '{username}' is an organization and cannot be enrolled as a member")]
    OrganizationMember {
        /// Username of the offending member candidate.
        username: String,
    },

    /// Each (organization, member) pair is unique.
    #[error("account '{username}' is already a member of '{organization}'")]
    DuplicateMembership {
        /// Username of the member.
        username: String,
        /// Username of the organization.
        organization: String,
    },
}

/// Relates one organization account to one member account.
///
/// A member may belong to any number of organizations; an organization may
/// have any number of members; each (organization, member) pair is unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    /// Key of the member account.
    pub member: AccountId,
    /// Whether the member administers the organization.
    pub admin: bool,
}

impl Membership {
    /// Creates a membership record.
    #[must_use]
    pub fn new(member: AccountId, admin: bool) -> Self {
        Self { member, admin }
    }
}

/// What kind of account this is, and the collections only that kind carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountKind {
    /// A human (or service) identity. Carries the organizations it belongs
    /// to, in enrollment order (the order the on-behalf-of enumerator
    /// preserves).
    Individual {
        /// Organizations this account is a member of (materialized snapshot).
        organizations: Vec<Account>,
    },

    /// An organization. Carries its membership records in enrollment order.
    Organization {
        /// Membership records, one per member.
        members: Vec<Membership>,
    },
}

/// An identity that actions can target or be performed on behalf of.
///
/// # Variants of Use
///
/// | Account | `kind` | Site admin |
/// |---------|--------|------------|
/// | Regular user | `Individual` | `false` |
/// | Gallery operator | `Individual` | `true` |
/// | Organization | `Organization` | `false` (flag is meaningless for orgs) |
///
/// # Equality
///
/// Relationship checks compare accounts by [`AccountId`] only; `PartialEq`
/// on the whole value compares every field and is meant for tests and
/// snapshot assertions.
///
/// # Example
///
/// ```
/// use warden_types::Account;
///
/// let admin = Account::individual("ops", "ops@example.test").with_site_admin(true);
/// assert!(admin.is_site_admin());
/// assert!(admin.is_individual());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    username: String,
    email: String,
    site_admin: bool,
    kind: AccountKind,
}

impl Account {
    /// Creates an individual account with a deterministic key derived from
    /// the username (see [`AccountId::named`]).
    #[must_use]
    pub fn individual(username: impl Into<String>, email: impl Into<String>) -> Self {
        let username = username.into();
        Self {
            id: AccountId::named(&username),
            username,
            email: email.into(),
            site_admin: false,
            kind: AccountKind::Individual {
                organizations: Vec::new(),
            },
        }
    }

    /// Creates an organization account with a deterministic key derived
    /// from the username.
    #[must_use]
    pub fn organization(username: impl Into<String>, email: impl Into<String>) -> Self {
        let username = username.into();
        Self {
            id: AccountId::named(&username),
            username,
            email: email.into(),
            site_admin: false,
            kind: AccountKind::Organization {
                members: Vec::new(),
            },
        }
    }

    /// Sets the global site-administrator flag.
    #[must_use]
    pub fn with_site_admin(mut self, site_admin: bool) -> Self {
        self.site_admin = site_admin;
        self
    }

    /// Replaces the account key (for callers whose keys come from an
    /// external store rather than [`AccountId::named`]).
    #[must_use]
    pub fn with_id(mut self, id: AccountId) -> Self {
        self.id = id;
        self
    }

    /// Returns the unique account key.
    #[must_use]
    pub fn id(&self) -> &AccountId {
        &self.id
    }

    /// Returns the unique username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the contact address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns `true` if the account carries the global administrator flag.
    #[must_use]
    pub fn is_site_admin(&self) -> bool {
        self.site_admin
    }

    /// Returns `true` if this is an organization account.
    #[must_use]
    pub fn is_organization(&self) -> bool {
        matches!(self.kind, AccountKind::Organization { .. })
    }

    /// Returns `true` if this is an individual account.
    #[must_use]
    pub fn is_individual(&self) -> bool {
        matches!(self.kind, AccountKind::Individual { .. })
    }

    /// Membership records of an organization, in enrollment order.
    ///
    /// Empty for individual accounts: individuals hold no memberships of
    /// their own.
    #[must_use]
    pub fn members(&self) -> &[Membership] {
        match &self.kind {
            AccountKind::Organization { members } => members,
            AccountKind::Individual { .. } => &[],
        }
    }

    /// Organizations an individual belongs to, in enrollment order.
    ///
    /// Empty for organization accounts: organizations do not belong to
    /// organizations.
    #[must_use]
    pub fn organizations(&self) -> &[Account] {
        match &self.kind {
            AccountKind::Individual { organizations } => organizations,
            AccountKind::Organization { .. } => &[],
        }
    }

    /// Looks up the membership record for `member`, if this account is an
    /// organization holding one.
    #[must_use]
    pub fn membership_of(&self, member: &AccountId) -> Option<&Membership> {
        self.members().iter().find(|m| m.member == *member)
    }

    /// Enrolls `member` into this organization, maintaining both sides of
    /// the relation: this account's member list and the member's
    /// organization list (the member's snapshot includes the new record).
    ///
    /// # Errors
    ///
    /// - [`AccountError::NotAnOrganization`] if `self` is an individual.
    /// - [`AccountError::OrganizationMember`] if `member` is an organization.
    /// - [`AccountError::DuplicateMembership`] if the pair already exists.
    pub fn add_member(&mut self, member: &mut Account, admin: bool) -> Result<(), AccountError> {
        if member.is_organization() {
            return Err(AccountError::OrganizationMember {
                username: member.username.clone(),
            });
        }
        if self.membership_of(member.id()).is_some() {
            return Err(AccountError::DuplicateMembership {
                username: member.username.clone(),
                organization: self.username.clone(),
            });
        }
        match &mut self.kind {
            AccountKind::Organization { members } => {
                members.push(Membership::new(*member.id(), admin));
            }
            AccountKind::Individual { .. } => {
                return Err(AccountError::NotAnOrganization {
                    username: self.username.clone(),
                });
            }
        }
        match &mut member.kind {
            AccountKind::Individual { organizations } => {
                organizations.push(self.clone());
            }
            // Unreachable: organizations were rejected above.
            AccountKind::Organization { .. } => {}
        }
        Ok(())
    }
}

impl std::fmt::Display for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contoso_with_alice(admin: bool) -> (Account, Account) {
        let mut contoso = Account::organization("Contoso", "ops@contoso.example");
        let mut alice = Account::individual("alice", "alice@example.test");
        contoso
            .add_member(&mut alice, admin)
            .expect("enrollment should succeed");
        (contoso, alice)
    }

    #[test]
    fn individual_has_no_members() {
        let alice = Account::individual("alice", "alice@example.test");
        assert!(alice.is_individual());
        assert!(alice.members().is_empty());
        assert!(alice.membership_of(&AccountId::named("anyone")).is_none());
    }

    #[test]
    fn organization_has_no_organizations() {
        let contoso = Account::organization("Contoso", "ops@contoso.example");
        assert!(contoso.is_organization());
        assert!(contoso.organizations().is_empty());
    }

    #[test]
    fn add_member_updates_both_sides() {
        let (contoso, alice) = contoso_with_alice(true);

        let membership = contoso
            .membership_of(alice.id())
            .expect("alice should be a member");
        assert!(membership.admin);

        assert_eq!(alice.organizations().len(), 1);
        let org_snapshot = &alice.organizations()[0];
        assert_eq!(org_snapshot.id(), contoso.id());
        // The member's snapshot of the organization includes its own record.
        assert!(org_snapshot.membership_of(alice.id()).is_some());
    }

    #[test]
    fn add_member_rejects_duplicate_pair() {
        let (mut contoso, mut alice) = contoso_with_alice(false);
        let err = contoso
            .add_member(&mut alice, true)
            .expect_err("duplicate pair must be rejected");
        assert!(matches!(err, AccountError::DuplicateMembership { .. }));
        // The failed call must not have touched either side.
        assert_eq!(contoso.members().len(), 1);
        assert_eq!(alice.organizations().len(), 1);
    }

    #[test]
    fn add_member_rejects_individual_target() {
        let mut alice = Account::individual("alice", "alice@example.test");
        let mut bob = Account::individual("bob", "bob@example.test");
        let err = alice
            .add_member(&mut bob, false)
            .expect_err("individuals cannot hold members");
        assert!(matches!(err, AccountError::NotAnOrganization { .. }));
        assert!(bob.organizations().is_empty());
    }

    #[test]
    fn add_member_rejects_organization_member() {
        let mut contoso = Account::organization("Contoso", "ops@contoso.example");
        let mut fabrikam = Account::organization("Fabrikam", "ops@fabrikam.example");
        let err = contoso
            .add_member(&mut fabrikam, false)
            .expect_err("organizations cannot be members");
        assert!(matches!(err, AccountError::OrganizationMember { .. }));
        assert!(contoso.members().is_empty());
    }

    #[test]
    fn enrollment_order_preserved() {
        let mut contoso = Account::organization("Contoso", "ops@contoso.example");
        let mut a = Account::individual("a", "a@example.test");
        let mut b = Account::individual("b", "b@example.test");
        contoso.add_member(&mut a, false).expect("enroll a");
        contoso.add_member(&mut b, true).expect("enroll b");

        let members: Vec<_> = contoso.members().iter().map(|m| m.member).collect();
        assert_eq!(members, vec![*a.id(), *b.id()]);
    }

    #[test]
    fn site_admin_flag() {
        let ops = Account::individual("ops", "ops@example.test").with_site_admin(true);
        assert!(ops.is_site_admin());
        assert!(!Account::individual("alice", "a@example.test").is_site_admin());
    }

    #[test]
    fn display_is_username() {
        let alice = Account::individual("alice", "alice@example.test");
        assert_eq!(format!("{alice}"), "alice");
    }

    #[test]
    fn serde_roundtrip() {
        let (contoso, _) = contoso_with_alice(true);
        let json = serde_json::to_string(&contoso).expect("serialize");
        let parsed: Account = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, contoso);
    }
}
