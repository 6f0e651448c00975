//! Relationship facts.
//!
//! Classifies what holds between a requester and a target account, or
//! between an account and a resource's owner set. Facts are computed once
//! per decision and tested against a
//! [`PermissionsRequirement`](crate::PermissionsRequirement).
//!
//! # Two Resolvers
//!
//! | Resolver | Question it answers |
//! |----------|---------------------|
//! | [`between`] | May the requester act *as* the target account? |
//! | [`against_owners`] | Does the account hold rights over this owner set? |
//!
//! Both are pure: no side effects, no I/O, no ambient state. Every input is
//! an explicit parameter.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use warden_types::Account;

bitflags! {
    /// The relationships that can hold at decision time.
    ///
    /// A `Relationship` value is a *set*: several facts usually hold at
    /// once (every organization admin is also a collaborator; an account
    /// is always `SELF` relative to itself).
    ///
    /// | Flag | Holds when |
    /// |------|------------|
    /// | [`SELF`](Self::SELF) | requester and target are the same account |
    /// | [`ORGANIZATION_ADMIN`](Self::ORGANIZATION_ADMIN) | target org has an admin membership for the requester |
    /// | [`ORGANIZATION_COLLABORATOR`](Self::ORGANIZATION_COLLABORATOR) | target org has any membership for the requester |
    /// | [`SITE_ADMIN`](Self::SITE_ADMIN) | requester carries the global administrator flag |
    /// | [`RESOURCE_OWNER`](Self::RESOURCE_OWNER) | account appears in a resource's owner set |
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Relationship: u8 {
        /// Requester is the target account itself.
        const SELF                       = 0b0000_0001;
        /// Requester administers the target organization.
        const ORGANIZATION_ADMIN         = 0b0000_0010;
        /// Requester is a member (admin or not) of the target organization.
        const ORGANIZATION_COLLABORATOR  = 0b0000_0100;
        /// Requester is a site administrator.
        const SITE_ADMIN                 = 0b0000_1000;
        /// Account is listed as an owner of the resource.
        const RESOURCE_OWNER             = 0b0001_0000;
    }
}

impl std::fmt::Display for Relationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "(none)");
        }
        let mut first = true;
        for (name, _) in self.iter_names() {
            if !first {
                write!(f, " | ")?;
            }
            first = false;
            write!(f, "{}", name.to_ascii_lowercase().replace('_', "-"))?;
        }
        Ok(())
    }
}

/// Classifies the relationship between `requester` and `target`.
///
/// Resource context plays no part here; this is the pure act-as side.
/// The collaborator fact is inclusive: an admin membership sets both
/// `ORGANIZATION_ADMIN` and `ORGANIZATION_COLLABORATOR`.
///
/// # Example
///
/// ```
/// use warden_auth::{relationship, Relationship};
/// use warden_types::Account;
///
/// let mut contoso = Account::organization("Contoso", "ops@contoso.example");
/// let mut alice = Account::individual("alice", "alice@example.test");
/// contoso.add_member(&mut alice, true).expect("enroll alice");
///
/// let facts = relationship::between(&alice, &contoso);
/// assert!(facts.contains(Relationship::ORGANIZATION_ADMIN));
/// assert!(facts.contains(Relationship::ORGANIZATION_COLLABORATOR));
/// assert!(!facts.contains(Relationship::SELF));
/// ```
#[must_use]
pub fn between(requester: &Account, target: &Account) -> Relationship {
    let mut facts = Relationship::empty();
    if requester.id() == target.id() {
        facts |= Relationship::SELF;
    }
    if requester.is_site_admin() {
        facts |= Relationship::SITE_ADMIN;
    }
    if let Some(membership) = target.membership_of(requester.id()) {
        facts |= Relationship::ORGANIZATION_COLLABORATOR;
        if membership.admin {
            facts |= Relationship::ORGANIZATION_ADMIN;
        }
    }
    facts
}

/// Classifies what `account` holds over a resource's owner set.
///
/// `RESOURCE_OWNER` requires a literal entry in the owner set. The
/// organization facts are resolved against each owner in turn, so an
/// account that administers an owning organization still registers as an
/// `ORGANIZATION_ADMIN` at the resource layer.
///
/// An empty owner set yields at most `SITE_ADMIN`: unclaimed resources
/// satisfy no ownership requirement.
#[must_use]
pub fn against_owners<'a, I>(account: &Account, owners: I) -> Relationship
where
    I: IntoIterator<Item = &'a Account>,
{
    let mut facts = Relationship::empty();
    if account.is_site_admin() {
        facts |= Relationship::SITE_ADMIN;
    }
    for owner in owners {
        if owner.id() == account.id() {
            facts |= Relationship::RESOURCE_OWNER;
        }
        if let Some(membership) = owner.membership_of(account.id()) {
            facts |= Relationship::ORGANIZATION_COLLABORATOR;
            if membership.admin {
                facts |= Relationship::ORGANIZATION_ADMIN;
            }
        }
    }
    facts
}
