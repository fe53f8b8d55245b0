use roster_core::{
    DraftTarget, RosterConfig, RosterService, ServiceError, StatusFilter, UserId,
};

fn config_with_photo(photo: &str) -> RosterConfig {
    RosterConfig {
        default_photo: photo.to_string(),
        ..RosterConfig::default()
    }
}

#[test]
fn add_draft_commit_creates_record_and_closes_dialog() {
    let mut service = RosterService::seeded(config_with_photo("img/blank.webp")).unwrap();

    let draft = service.begin_add();
    assert_eq!(draft.target, DraftTarget::New);
    assert_eq!(service.dialog_title(), Some("Add User"));

    {
        let draft = service.draft_mut().unwrap();
        draft.fields.name = "Lola".to_string();
        draft.fields.email = "lola@example.com".to_string();
        draft.fields.phone = "777".to_string();
        draft.fields.country = "Brasil".to_string();
    }
    let id = service.commit_draft().unwrap();

    assert!(service.draft().is_none());
    let all = service.list_all();
    assert_eq!(all.len(), 4);
    let created = all.last().unwrap();
    assert_eq!(created.id, id);
    assert_eq!(created.name, "Lola");
    assert_eq!(created.photo, "img/blank.webp");
    assert!(!created.completed);
}

#[test]
fn add_draft_honors_completed_checkbox() {
    let mut service = RosterService::empty(RosterConfig::default()).unwrap();
    service.begin_add();
    {
        let fields = &mut service.draft_mut().unwrap().fields;
        fields.name = "Kai".to_string();
        fields.email = "kai@example.com".to_string();
        fields.phone = "1".to_string();
        fields.country = "USA".to_string();
        fields.completed = true;
    }
    let id = service.commit_draft().unwrap();

    assert!(service.get_user(&id).unwrap().completed);
    service.set_status_filter(StatusFilter::Active);
    assert_eq!(service.visible_records().len(), 1);
}

#[test]
fn invalid_draft_stays_open_and_store_is_unchanged() {
    let mut service = RosterService::seeded(RosterConfig::default()).unwrap();
    let before = service.list_all();

    service.begin_add();
    service.draft_mut().unwrap().fields.name = "Only a name".to_string();
    let err = service.commit_draft().unwrap_err();

    assert!(err.is_validation());
    assert_eq!(service.list_all(), before);
    let draft = service.draft().unwrap();
    assert_eq!(draft.fields.name, "Only a name");
}

#[test]
fn edit_draft_replaces_fields_of_existing_record() {
    let mut service = RosterService::seeded(RosterConfig::default()).unwrap();
    let id = UserId::new("1");

    let draft = service.begin_edit(&id).unwrap();
    assert_eq!(draft.fields.name, "Parviz");
    assert_eq!(service.dialog_title(), Some("Edit User"));

    {
        let fields = &mut service.draft_mut().unwrap().fields;
        fields.phone = "12345".to_string();
        fields.completed = true;
    }
    let committed = service.commit_draft().unwrap();

    assert_eq!(committed, id);
    let stored = service.get_user(&id).unwrap();
    assert_eq!(stored.phone, "12345");
    assert!(stored.completed);
    assert_eq!(service.list_all()[0].id, id);
}

#[test]
fn edit_draft_for_unknown_id_is_not_found() {
    let mut service = RosterService::seeded(RosterConfig::default()).unwrap();
    let err = service.begin_edit(&UserId::new("404")).unwrap_err();
    assert!(err.is_not_found());
    assert!(service.draft().is_none());
}

#[test]
fn edit_draft_whose_record_was_deleted_closes_with_not_found() {
    let mut service = RosterService::seeded(RosterConfig::default()).unwrap();
    let id = UserId::new("2");
    service.begin_edit(&id).unwrap();
    service.delete_user(&id).unwrap();

    let err = service.commit_draft().unwrap_err();
    assert!(err.is_not_found());
    assert!(service.draft().is_none());
    assert_eq!(service.list_all().len(), 2);
}

#[test]
fn discard_closes_without_mutation() {
    let mut service = RosterService::seeded(RosterConfig::default()).unwrap();
    let before = service.list_all();

    service.begin_edit(&UserId::new("3")).unwrap();
    service.draft_mut().unwrap().fields.name = "changed".to_string();
    assert!(service.discard_draft());
    assert!(!service.discard_draft());

    assert_eq!(service.list_all(), before);
    assert_eq!(service.commit_draft().unwrap_err(), ServiceError::NoOpenDraft);
}

#[test]
fn opening_add_replaces_open_edit_draft() {
    let mut service = RosterService::seeded(RosterConfig::default()).unwrap();
    service.begin_edit(&UserId::new("1")).unwrap();
    service.begin_add();
    assert!(service.draft().unwrap().is_new());
    assert!(service.draft().unwrap().fields.name.is_empty());
}
