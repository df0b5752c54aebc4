//! Cipher Selection Flow Example
//!
//! This example demonstrates the core selection workflow:
//!
//! 1. Load the builtin mechanism database
//! 2. Evaluate a rule string into an ordered selector
//! 3. Build the same kind of selection programmatically
//! 4. Restrict the selection to what a TLS engine supports
//!
//! Run with: cargo run --example cipher_selection_flow

use suite_policy::suites::{KeyExchange, Strength};
use suite_policy::{CipherPolicy, MechanismDatabase, Predicate, Selector, SelectorBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("suite-policy - Cipher Selection Flow");
    println!("------------------------------------");
    println!();

    // -------------------------------------------------------------------------
    // Step 1: The Mechanism Database
    // -------------------------------------------------------------------------
    // The database is an ordinary value passed by reference. Its declaration
    // order is the canonical order used to break ties.

    let db = MechanismDatabase::builtin();
    println!("Builtin catalog: {} suites", db.len());
    println!();

    // -------------------------------------------------------------------------
    // Step 2: Evaluate a Rule String
    // -------------------------------------------------------------------------
    //   HIGH       add every high-strength suite
    //   !aNULL     delete anonymous suites for good
    //   -kRSA      push static-RSA key exchange to the back
    //   @STRENGTH  stable sort by strength class

    let rule = "HIGH:!aNULL:-kRSA:@STRENGTH";
    let selector = Selector::from_rule_string(&db, rule)?;

    println!("Rule: {}", rule);
    for (i, name) in selector.openssl_names().iter().enumerate().take(5) {
        println!("  {:>2}. {}", i + 1, name);
    }
    println!("  ... {} suites total", selector.len());
    println!();

    // -------------------------------------------------------------------------
    // Step 3: The Builder API
    // -------------------------------------------------------------------------
    // Predicates compose with & | ! and feed the same evaluator.

    let forward_secret = Predicate::key_exchange([KeyExchange::Ecdhe, KeyExchange::Dhe]);
    let built = SelectorBuilder::new(&db)
        .add(forward_secret & Predicate::strength([Strength::High]))
        .delete(Predicate::authentication([suite_policy::suites::Authentication::Null]))
        .sort_by_strength()
        .build()?;

    println!("Builder rule: {}", built.rule());
    println!("  {} suites", built.len());
    println!();

    // -------------------------------------------------------------------------
    // Step 4: Policies and Engine Support
    // -------------------------------------------------------------------------

    let policy = CipherPolicy::new("modern", "TLSv1.3:ECDHE+AESGCM:ECDHE+CHACHA20")?
        .with_description("TLS 1.3 plus forward-secret AEAD");
    let selector = policy.selector(&db)?;

    let supported = ["TLS_AES_256_GCM_SHA384", "ECDHE-RSA-AES128-GCM-SHA256", "RC4-SHA"];
    println!("Policy '{}' enabled on this engine:", policy.name());
    for name in selector.evaluate(supported) {
        println!("  {}", name);
    }

    // An unusable rule string is an error, never a silent fallback
    match Selector::from_rule_string(&db, "!ALL") {
        Ok(_) => println!("unexpected selection"),
        Err(e) => println!("Rejected: {}", e),
    }

    Ok(())
}
