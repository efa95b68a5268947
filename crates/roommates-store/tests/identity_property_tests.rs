#![allow(clippy::unwrap_used, clippy::expect_used)]

// Property tests for store-assigned chore identity

mod common;

use common::TestDb;
use proptest::prelude::*;
use roommates_core::Chore;
use roommates_store::ChoreRepository;
use std::collections::HashSet;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn inserted_chores_get_unique_ids_and_round_trip(
        names in prop::collection::vec("[A-Za-z ]{1,20}", 1..8)
    ) {
        let db = TestDb::new();
        let repo = ChoreRepository::new(db.provider.clone());

        let mut ids = HashSet::new();
        for name in &names {
            let mut chore = Chore::new(name.clone());
            let id = repo.insert(&mut chore).unwrap();
            prop_assert_eq!(chore.id, id);
            prop_assert!(ids.insert(id), "id {} assigned twice", id);

            let fetched = repo.get_by_id(id).unwrap();
            prop_assert_eq!(fetched.map(|c| c.name), Some(name.clone()));
        }

        prop_assert_eq!(repo.get_all().unwrap().len(), names.len());
    }
}
