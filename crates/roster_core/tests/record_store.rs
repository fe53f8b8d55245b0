use roster_core::{
    InMemoryUserRepository, RepoError, RosterConfig, RosterService, UserField, UserFields, UserId,
    UserRepository, UserValidationError,
};
use std::collections::HashSet;

fn valid_fields(name: &str) -> UserFields {
    UserFields::new(name, format!("{name}@example.com"), "555-0100", "Canada")
}

#[test]
fn create_appends_one_incomplete_record_with_unique_id() {
    let mut repo = InMemoryUserRepository::new();
    let first = repo.create(valid_fields("ann")).unwrap();
    let mut ticked = valid_fields("ben");
    ticked.completed = true;
    let second = repo.create(ticked).unwrap();

    let all = repo.list_all();
    assert_eq!(all.len(), 2);
    assert_ne!(first, second);
    assert_eq!(all[0].id, first);
    assert_eq!(all[1].id, second);
    assert!(all.iter().all(|record| !record.completed));
}

#[test]
fn many_creates_never_repeat_an_id() {
    let mut repo = InMemoryUserRepository::new();
    let ids = (0..200)
        .map(|index| repo.create(valid_fields(&format!("user{index}"))).unwrap())
        .collect::<HashSet<_>>();
    assert_eq!(ids.len(), 200);
}

#[test]
fn deleted_id_is_not_reissued() {
    let mut repo = InMemoryUserRepository::new();
    let id = repo.create(valid_fields("ann")).unwrap();
    repo.delete(&id).unwrap();
    let next = repo.create(valid_fields("ann")).unwrap();
    assert_ne!(id, next);
}

#[test]
fn blank_required_field_blocks_create_and_update() {
    let mut repo = InMemoryUserRepository::new();
    let id = repo.create(valid_fields("ann")).unwrap();
    let before = repo.list_all();

    let mut blank = valid_fields("ben");
    blank.country = "   ".to_string();
    let create_err = repo.create(blank.clone()).unwrap_err();
    assert_eq!(
        create_err,
        RepoError::Validation(UserValidationError::MissingFields(vec![UserField::Country]))
    );

    let update_err = repo.update(&id, blank).unwrap_err();
    assert!(matches!(update_err, RepoError::Validation(_)));
    assert_eq!(repo.list_all(), before);
}

#[test]
fn validation_runs_before_not_found() {
    let mut repo = InMemoryUserRepository::new();
    let err = repo.update(&UserId::new("missing"), UserFields::default()).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

#[test]
fn update_replaces_every_field_and_is_visible_immediately() {
    let mut service = RosterService::seeded(RosterConfig::default()).unwrap();
    let id = UserId::new("3");
    let fields = UserFields {
        completed: true,
        photo: "assets/new.webp".to_string(),
        ..UserFields::new("Shuhrat R.", "sr@example.com", "111", "Canada")
    };
    service.update_user(&id, fields.clone()).unwrap();

    let stored = service.get_user(&id).unwrap();
    assert_eq!(stored.id, id);
    assert_eq!(stored.fields(), fields);

    service.set_city_filter("Canada").unwrap();
    let visible = service.visible_records();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Shuhrat R.");
}

#[test]
fn update_unknown_id_reports_not_found_without_mutation() {
    let mut repo = InMemoryUserRepository::new();
    repo.create(valid_fields("ann")).unwrap();
    let before = repo.list_all();

    let missing = UserId::new("nope");
    let err = repo.update(&missing, valid_fields("ben")).unwrap_err();
    assert_eq!(err, RepoError::NotFound(missing));
    assert_eq!(repo.list_all(), before);
}

#[test]
fn toggle_flips_only_completed() {
    let mut service = RosterService::seeded(RosterConfig::default()).unwrap();
    let id = UserId::new("1");
    let before = service.get_user(&id).unwrap();

    assert!(service.toggle_completed(&id).unwrap());
    let after = service.get_user(&id).unwrap();
    assert!(after.completed);
    assert_eq!(
        UserFields {
            completed: before.completed,
            ..after.fields()
        },
        before.fields()
    );
    assert_eq!(after.id, before.id);

    assert!(!service.toggle_completed(&id).unwrap());
    assert_eq!(service.get_user(&id).unwrap(), before);
}

#[test]
fn toggle_unknown_id_reports_not_found() {
    let mut repo = InMemoryUserRepository::new();
    let err = repo.toggle_completed(&UserId::new("x")).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id.as_str() == "x"));
}

#[test]
fn delete_removes_exactly_one_and_second_delete_is_not_found() {
    let mut service = RosterService::seeded(RosterConfig::default()).unwrap();
    let id = UserId::new("2");

    service.delete_user(&id).unwrap();
    let remaining = service
        .list_all()
        .into_iter()
        .map(|record| record.id.to_string())
        .collect::<Vec<_>>();
    assert_eq!(remaining, vec!["1", "3"]);

    let err = service.delete_user(&id).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(service.list_all().len(), 2);
}
