//! Clinic registry integration tests.

use chrono::NaiveDate;
use clinic_core::{normalize_name, Clinic, NewPet, Registration};
use proptest::prelude::*;

fn contact() -> (String, String) {
    ("555".to_string(), "Main St".to_string())
}

fn make_pet(name: &str) -> NewPet {
    NewPet {
        name: name.to_string(),
        species: "Dog".to_string(),
        breed: "Lab".to_string(),
        age: 3,
    }
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
}

#[test]
fn test_reregistering_owner_returns_existing() {
    let mut clinic = Clinic::new();

    let first = clinic.register_owner("ana", contact);
    let second = clinic.register_owner("ana ", contact);

    assert_eq!(first, Registration::Created(first.id()));
    assert_eq!(second, Registration::Existing(first.id()));
    assert_eq!(clinic.owner_count(), 1);
    assert_eq!(clinic.owner(first.id()).unwrap().name, "Ana");
}

#[test]
fn test_pet_registration_with_selected_owner() {
    let mut clinic = Clinic::new();
    clinic.register_owner("ana", contact);

    let ana = clinic.owner_at(1).unwrap();
    let rex = clinic.add_pet(make_pet("Rex"), ana).unwrap();

    assert_eq!(clinic.pet_count(), 1);
    let pet = clinic.pet(rex).unwrap();
    assert_eq!(pet.age, 3);
    assert_eq!(pet.owner_id(), ana);
    // Same stored record, not a copy
    assert!(std::ptr::eq(clinic.pet_owner(rex).unwrap(), clinic.owner(ana).unwrap()));
}

#[test]
fn test_visit_appends_to_end_and_keeps_prior_entries() {
    let mut clinic = Clinic::new();
    let ana = clinic.register_owner("ana", contact).id();
    let rex = clinic.add_pet(make_pet("Rex"), ana).unwrap();
    let luna = clinic.add_pet(make_pet("Luna"), ana).unwrap();

    clinic.record_visit(rex, day(1), "Checkup".into(), "Healthy".into()).unwrap();
    let before = clinic.pet(rex).unwrap().history().to_vec();

    clinic.record_visit(rex, day(2), "Limp".into(), "Sprain".into()).unwrap();
    let after = clinic.pet(rex).unwrap().history();

    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(&after[..before.len()], &before[..]);
    assert_eq!(after.last().unwrap().reason, "Limp");
    assert_eq!(after.last().unwrap().date, day(2));

    // Other pets are untouched
    assert!(clinic.pet(luna).unwrap().history().is_empty());
}

#[test]
fn test_iteration_preserves_insertion_order() {
    let mut clinic = Clinic::new();
    for name in ["zoe", "ana", "maria"] {
        clinic.register_owner(name, contact);
    }
    let names: Vec<_> = clinic.owners().map(|(_, o)| o.name.clone()).collect();
    assert_eq!(names, vec!["Zoe", "Ana", "Maria"]);

    let ana = clinic.owner_at(2).unwrap();
    for name in ["Rex", "Luna", "Kiwi"] {
        clinic.add_pet(make_pet(name), ana).unwrap();
    }
    let pets: Vec<_> = clinic.pets().map(|(_, p)| p.name.clone()).collect();
    assert_eq!(pets, vec!["Rex", "Luna", "Kiwi"]);
}

proptest! {
    #[test]
    fn prop_normalize_is_idempotent(raw in "[a-zA-Z' -]{0,24}") {
        let once = normalize_name(&raw);
        prop_assert_eq!(normalize_name(&once), once);
    }

    #[test]
    fn prop_case_and_padding_never_create_duplicates(
        name in "[a-z]{1,12}",
        pad_left in " {0,3}",
        pad_right in " {0,3}",
        upper in any::<bool>(),
    ) {
        let mut clinic = Clinic::new();
        clinic.register_owner(&name, contact);

        let variant = if upper { name.to_uppercase() } else { name.clone() };
        let again = clinic.register_owner(&format!("{pad_left}{variant}{pad_right}"), contact);

        prop_assert!(!again.is_new());
        prop_assert_eq!(clinic.owner_count(), 1);
    }
}
