//! Upload Authorization Example
//!
//! Demonstrates the full decision path:
//! - Reserving namespaces in the in-memory store
//! - Checking an upload as-self and on behalf of an organization
//! - Enumerating the accounts a requester may act for
//!
//! # Usage
//!
//! ```bash
//! cargo run --example upload_check
//! ```

use warden_auth::NewPackageContext;
use warden_registry::{actions, NamespaceStore};
use warden_types::{Account, ReservedNamespace};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .init();

    println!("=== Upload Authorization Example ===\n");

    // Accounts: alice administers Contoso, bob is a plain collaborator.
    let mut contoso = Account::organization("Contoso", "ops@contoso.example");
    let mut alice = Account::individual("alice", "alice@example.test");
    let mut bob = Account::individual("bob", "bob@example.test");
    contoso.add_member(&mut alice, true).expect("enroll alice");
    contoso.add_member(&mut bob, false).expect("enroll bob");

    // Namespaces: Contoso.* belongs to the organization, Community.* is shared.
    let store = NamespaceStore::new();
    store
        .reserve(ReservedNamespace::prefix("Contoso.").with_owner(&contoso))
        .expect("fresh value");
    store
        .reserve(ReservedNamespace::prefix("Community.").shared())
        .expect("fresh value");

    for (requester, account, package_id) in [
        (&alice, &contoso, "Contoso.Utils.Logger"),
        (&bob, &contoso, "Contoso.Utils.Logger"),
        (&bob, &bob, "Contoso.Utils.Logger"),
        (&bob, &bob, "Community.Bob.Tool"),
    ] {
        let context = NewPackageContext::new(package_id, &store);
        let outcome = actions::UPLOAD_NEW_PACKAGE_ID
            .check_new_package(requester, account, &context)
            .expect("lookup should answer");
        println!("{requester} as {account} pushing '{package_id}': {outcome}");
    }

    let context = NewPackageContext::new("Contoso.NewThing", &store);
    let allowed = actions::UPLOAD_NEW_PACKAGE_ID
        .accounts_allowed_on_behalf_of(&alice, &context)
        .expect("lookup should answer");
    let names: Vec<&str> = allowed.iter().map(Account::username).collect();
    println!("\nalice may push 'Contoso.NewThing' as: {names:?}");
}
