// Property-based tests for API-observable access-pattern behavior
//
// These run against a pool handle that never connects; any outcome
// other than a connection fault proves the operation classified before
// touching the store.

use common::config::Settings;
use common::db::{DbPool, Repository};
use common::entities::Customer;
use common::errors::StoreError;
use common::outcome::Outcome;
use proptest::prelude::*;

fn lazy_repository() -> Repository<Customer> {
    let settings = Settings::default();
    let pool = DbPool::connect_lazy(&settings).expect("lazy pool");
    Repository::new(pool)
}

fn customer_with_id(id: i32) -> Customer {
    Customer {
        id,
        first_name: "Ana".to_string(),
        last_name: "Diaz".to_string(),
        phone: "+15551234567".to_string(),
        email: "a@x.com".to_string(),
        address: "1 Main St".to_string(),
        loyalty_points: 0,
        is_active: true,
    }
}

// For any unequal path/payload identifier pair, update classifies as an
// identifier mismatch and performs no store access.
#[test]
fn property_id_mismatch_short_circuits() {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("runtime");

    proptest!(|(path in -10_000..10_000i32, payload in -10_000..10_000i32)| {
        prop_assume!(path != payload);
        let repo = rt.block_on(async { lazy_repository() });
        let outcome = rt
            .block_on(repo.update(path, &customer_with_id(payload)))
            .expect("no store access, so no fault");
        prop_assert_eq!(outcome, Outcome::IdMismatch { path, payload });
    });
}

// For any payload that fails validation, insert and update classify as
// invalid without reaching the store, and the field messages survive.
#[test]
fn property_invalid_payload_never_reaches_store() {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("runtime");

    proptest!(|(id in 1..1000i32, junk_email in "[a-z]{1,12}")| {
        let mut payload = customer_with_id(id);
        payload.email = junk_email;

        let repo = rt.block_on(async { lazy_repository() });

        let inserted = rt.block_on(repo.insert(&payload)).expect("classified early");
        match inserted {
            Outcome::Invalid(errors) => {
                prop_assert!(errors.iter().any(|e| e.field == "email"));
            }
            other => prop_assert!(false, "expected Invalid, got {:?}", other),
        }

        let updated = rt.block_on(repo.update(id, &payload)).expect("classified early");
        prop_assert!(matches!(updated, Outcome::Invalid(_)));
    });
}

// With matching identifiers and a valid payload, update proceeds to the
// store; on an unreachable store that is a fault, never a silent
// success or a misclassification.
#[test]
fn property_valid_update_attempts_store_access() {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("runtime");

    proptest!(ProptestConfig::with_cases(8), |(id in 1..1000i32)| {
        let repo = rt.block_on(async { lazy_repository() });
        let result = rt.block_on(repo.update(id, &customer_with_id(id)));
        match result {
            Err(StoreError::ConnectionFailed(_)) | Err(StoreError::ProcedureFailed { .. }) => {}
            other => prop_assert!(false, "expected a store fault, got {:?}", other),
        }
    });
}
