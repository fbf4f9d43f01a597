use super::*;

fn movie(id: u32, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        poster_path: format!("/{}.jpg", id),
        release_date: "2010-07-16".to_string(),
    }
}

#[test]
fn test_new_library_starts_empty() {
    let lib = Library::new();
    for list in FixedList::ALL {
        assert!(lib.fixed(list).is_empty(), "{} should start empty", list);
    }
    assert_eq!(lib.custom_list_count(), 0);
}

#[test]
fn test_fixed_add_is_idempotent() {
    let mut lib = Library::new();
    let m = movie(1, "Inception");
    assert!(lib.add_to_fixed(FixedList::Favorites, m.clone()));
    assert!(!lib.add_to_fixed(FixedList::Favorites, m.clone()));
    assert_eq!(lib.fixed(FixedList::Favorites), &[m]);
}

#[test]
fn test_fixed_collections_are_independent() {
    let mut lib = Library::new();
    let m = movie(1, "Inception");
    lib.add_to_fixed(FixedList::Watching, m.clone());
    assert!(lib.fixed(FixedList::Favorites).is_empty());
    assert!(lib.fixed(FixedList::Watched).is_empty());
    assert_eq!(lib.fixed(FixedList::Watching).len(), 1);
}

#[test]
fn test_fixed_remove_absent_is_noop() {
    let mut lib = Library::new();
    lib.add_to_fixed(FixedList::Pending, movie(1, "Inception"));
    assert!(!lib.remove_from_fixed(FixedList::Pending, &movie(2, "Tenet")));
    assert_eq!(lib.fixed(FixedList::Pending).len(), 1);
}

#[test]
fn test_fixed_remove_twice() {
    let mut lib = Library::new();
    let m = movie(1, "Inception");
    lib.add_to_fixed(FixedList::Watched, m.clone());
    assert!(lib.remove_from_fixed(FixedList::Watched, &m));
    assert!(!lib.remove_from_fixed(FixedList::Watched, &m));
    assert!(lib.fixed(FixedList::Watched).is_empty());
}

#[test]
fn test_create_custom_list() {
    let mut lib = Library::new();
    lib.create_custom_list("Sci-Fi").unwrap();
    assert!(lib.has_custom_list("Sci-Fi"));
    assert!(lib.custom("Sci-Fi").unwrap().is_empty());
}

#[test]
fn test_create_duplicate_name_fails_and_leaves_registry_unchanged() {
    let mut lib = Library::new();
    lib.create_custom_list("Sci-Fi").unwrap();
    lib.add_to_custom("Sci-Fi", movie(1, "Inception")).unwrap();

    let err = lib.create_custom_list("Sci-Fi").unwrap_err();
    assert_eq!(
        err,
        RegistryError::DuplicateListName {
            name: "Sci-Fi".to_string()
        }
    );
    // the existing list and its contents survive the failed call
    assert_eq!(lib.custom_list_count(), 1);
    assert_eq!(lib.custom("Sci-Fi").unwrap().len(), 1);
}

#[test]
fn test_create_blank_name_fails() {
    let mut lib = Library::new();
    assert_eq!(
        lib.create_custom_list("").unwrap_err(),
        RegistryError::EmptyListName
    );
    assert_eq!(
        lib.create_custom_list("   ").unwrap_err(),
        RegistryError::EmptyListName
    );
    assert_eq!(lib.custom_list_count(), 0);
}

#[test]
fn test_custom_names_are_case_sensitive() {
    let mut lib = Library::new();
    lib.create_custom_list("Sci-Fi").unwrap();
    lib.create_custom_list("sci-fi").unwrap();
    assert_eq!(lib.custom_list_count(), 2);
}

#[test]
fn test_name_stored_as_given_not_trimmed() {
    let mut lib = Library::new();
    lib.create_custom_list(" Sci-Fi ").unwrap();
    assert!(lib.has_custom_list(" Sci-Fi "));
    assert!(!lib.has_custom_list("Sci-Fi"));
}

#[test]
fn test_add_to_missing_list_fails() {
    let mut lib = Library::new();
    let err = lib.add_to_custom("Sci-Fi", movie(1, "Inception")).unwrap_err();
    assert_eq!(
        err,
        RegistryError::ListNotFound {
            name: "Sci-Fi".to_string()
        }
    );
}

#[test]
fn test_duplicate_membership_is_reported_and_list_unchanged() {
    let mut lib = Library::new();
    let m = movie(1, "Inception");
    lib.create_custom_list("Sci-Fi").unwrap();
    lib.add_to_custom("Sci-Fi", m.clone()).unwrap();

    let err = lib.add_to_custom("Sci-Fi", m.clone()).unwrap_err();
    assert_eq!(
        err,
        RegistryError::DuplicateMembership {
            list: "Sci-Fi".to_string(),
            title: "Inception".to_string(),
        }
    );
    assert_eq!(lib.custom("Sci-Fi").unwrap(), &[m]);
}

#[test]
fn test_delete_custom_list_is_idempotent() {
    let mut lib = Library::new();
    lib.create_custom_list("Sci-Fi").unwrap();
    assert!(lib.delete_custom_list("Sci-Fi"));
    assert!(!lib.delete_custom_list("Sci-Fi"));
    assert!(!lib.has_custom_list("Sci-Fi"));
}

#[test]
fn test_delete_custom_list_does_not_touch_other_collections() {
    let mut lib = Library::new();
    let m = movie(1, "Inception");
    lib.add_to_fixed(FixedList::Favorites, m.clone());
    lib.create_custom_list("Sci-Fi").unwrap();
    lib.add_to_custom("Sci-Fi", m.clone()).unwrap();

    lib.delete_custom_list("Sci-Fi");

    assert!(!lib.has_custom_list("Sci-Fi"));
    assert_eq!(lib.fixed(FixedList::Favorites), &[m]);
}

#[test]
fn test_remove_from_custom_missing_list_is_noop() {
    let mut lib = Library::new();
    assert!(!lib.remove_from_custom("Sci-Fi", &movie(1, "Inception")));
}

#[test]
fn test_custom_names_sorted() {
    let mut lib = Library::new();
    lib.create_custom_list("Thrillers").unwrap();
    lib.create_custom_list("Animation").unwrap();
    lib.create_custom_list("Sci-Fi").unwrap();
    let names: Vec<&str> = lib.custom_names().collect();
    assert_eq!(names, vec!["Animation", "Sci-Fi", "Thrillers"]);
}

#[test]
fn test_list_id_parses_fixed_names_first() {
    assert_eq!(
        "favorites".parse::<ListId>().unwrap(),
        ListId::Fixed(FixedList::Favorites)
    );
    assert_eq!(
        "Sci-Fi".parse::<ListId>().unwrap(),
        ListId::Custom("Sci-Fi".to_string())
    );
}

#[test]
fn test_add_by_selector_distinguishes_noop_from_error() {
    let mut lib = Library::new();
    let m = movie(1, "Inception");
    let fav = ListId::Fixed(FixedList::Favorites);

    assert_eq!(lib.add(&fav, m.clone()), Ok(true));
    // fixed duplicate: quiet no-op
    assert_eq!(lib.add(&fav, m.clone()), Ok(false));

    lib.create_custom_list("Sci-Fi").unwrap();
    let sci = ListId::Custom("Sci-Fi".to_string());
    assert_eq!(lib.add(&sci, m.clone()), Ok(true));
    // custom duplicate: reported error
    assert!(matches!(
        lib.add(&sci, m.clone()),
        Err(RegistryError::DuplicateMembership { .. })
    ));
}

#[test]
fn test_collection_resolves_both_kinds() {
    let mut lib = Library::new();
    let m = movie(1, "Inception");
    lib.add_to_fixed(FixedList::Favorites, m.clone());
    lib.create_custom_list("Sci-Fi").unwrap();
    lib.add_to_custom("Sci-Fi", m.clone()).unwrap();

    let fav = lib
        .collection(&ListId::Fixed(FixedList::Favorites))
        .unwrap();
    assert_eq!(fav, &[m.clone()]);
    let sci = lib
        .collection(&ListId::Custom("Sci-Fi".to_string()))
        .unwrap();
    assert_eq!(sci, &[m]);
    assert!(lib
        .collection(&ListId::Custom("Horror".to_string()))
        .is_err());
}

#[test]
fn test_library_round_trips_through_json() {
    let mut lib = Library::new();
    lib.add_to_fixed(FixedList::Favorites, movie(1, "Inception"));
    lib.create_custom_list("Sci-Fi").unwrap();
    lib.add_to_custom("Sci-Fi", movie(2, "Tenet")).unwrap();

    let json = serde_json::to_string(&lib).unwrap();
    let restored: Library = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.fixed(FixedList::Favorites), lib.fixed(FixedList::Favorites));
    assert_eq!(restored.custom("Sci-Fi").unwrap(), lib.custom("Sci-Fi").unwrap());
}

// Walks the whole lifecycle: fixed add, list creation, duplicate add,
// deletion independence.
#[test]
fn test_full_session_scenario() {
    let mut lib = Library::new();
    let m1 = movie(1, "Inception");

    lib.add_to_fixed(FixedList::Favorites, m1.clone());
    assert_eq!(lib.fixed(FixedList::Favorites), std::slice::from_ref(&m1));

    lib.create_custom_list("Sci-Fi").unwrap();
    lib.add_to_custom("Sci-Fi", m1.clone()).unwrap();
    assert_eq!(lib.custom("Sci-Fi").unwrap(), std::slice::from_ref(&m1));

    let err = lib.add_to_custom("Sci-Fi", m1.clone()).unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateMembership { .. }));
    assert_eq!(lib.custom("Sci-Fi").unwrap().len(), 1);

    lib.delete_custom_list("Sci-Fi");
    assert!(!lib.has_custom_list("Sci-Fi"));
    assert_eq!(lib.fixed(FixedList::Favorites), &[m1]);
}
