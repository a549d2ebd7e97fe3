use std::path::PathBuf;

use taskhub_cli::profile::{AvatarDraft, EditorMode, ProfileEditor, SaveAttempt};
use taskhub_cli::{Team, UpdateUserPayload, User, UserRole};

fn user() -> User {
    User {
        id: 4,
        username: "mara".to_string(),
        email: "mara@example.com".to_string(),
        role: UserRole::User,
        team_id: None,
        team_name: None,
        avatar_url: Some("/avatars/orbit.png".to_string()),
    }
}

fn teams() -> Vec<Team> {
    vec![Team {
        id: 1,
        name: "Alpha".to_string(),
    }]
}

#[test]
fn test_full_edit_save_cycle() {
    let mut editor = ProfileEditor::new(user(), teams());

    editor.begin_edit();
    editor.draft_mut().username = "mara2".to_string();
    editor.cycle_team(true); // Alpha

    let (payload, image) = match editor.begin_save() {
        SaveAttempt::Started { payload, image } => (payload, image),
        other => panic!("Expected Started, got {:?}", other),
    };

    assert_eq!(payload.username.as_deref(), Some("mara2"));
    assert_eq!(payload.team_id, Some(Some(1)));
    assert!(image.is_none());

    // a second save trigger while the first is in flight is ignored
    assert_eq!(editor.begin_save(), SaveAttempt::InFlight);

    let committed = User {
        username: "mara2".to_string(),
        team_id: Some(1),
        team_name: Some("Alpha".to_string()),
        ..user()
    };
    editor.save_succeeded(committed);

    assert_eq!(editor.mode(), EditorMode::Viewing);
    assert_eq!(editor.user().username, "mara2");
    assert_eq!(editor.user().team_name.as_deref(), Some("Alpha"));
}

#[test]
fn test_cleared_team_selection_means_no_team_on_every_path() {
    // The payload is built once and shared by the self and by-id update
    // calls, so the sentinel cannot diverge between them.
    let mut editor = ProfileEditor::new(user(), teams());
    editor.begin_edit();

    editor.cycle_team(true); // select Alpha
    editor.cycle_team(true); // back to "No Team"

    let (payload, _) = editor.build_update();
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["teamId"], serde_json::Value::Null);
}

#[test]
fn test_cancel_is_a_pure_rollback() {
    let mut editor = ProfileEditor::new(user(), teams());
    editor.begin_edit();

    editor.draft_mut().username = "changed".to_string();
    editor.draft_mut().email = "changed@example.com".to_string();
    editor.cycle_role();
    editor.cycle_team(true);
    editor.open_avatar_picker();
    editor.select_avatar_file(PathBuf::from("/tmp/new.png"));

    editor.cancel();

    assert_eq!(editor.mode(), EditorMode::Viewing);
    let draft = editor.draft();
    assert_eq!(draft.username, "mara");
    assert_eq!(draft.email, "mara@example.com");
    assert_eq!(draft.role, UserRole::User);
    assert_eq!(draft.team_id, None);
    assert_eq!(
        draft.avatar,
        AvatarDraft::Url("/avatars/orbit.png".to_string())
    );
}

#[test]
fn test_avatar_sources_are_mutually_exclusive_in_payload() {
    let mut editor = ProfileEditor::new(user(), teams());
    editor.begin_edit();

    // file chosen: URL absent from the JSON, file present
    editor.open_avatar_picker();
    editor.select_avatar_file(PathBuf::from("/tmp/me.png"));
    let (payload, image) = editor.build_update();
    let json = serde_json::to_value(&payload).unwrap();
    assert!(!json.as_object().unwrap().contains_key("avatarUrl"));
    assert!(image.is_some());

    // URL chosen afterwards: file gone, URL present
    editor.open_avatar_picker();
    editor.select_avatar_url("/avatars/tide.png".to_string());
    let (payload, image) = editor.build_update();
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["avatarUrl"], "/avatars/tide.png");
    assert!(image.is_none());
}

#[test]
fn test_failed_save_keeps_the_draft_for_retry() {
    let mut editor = ProfileEditor::new(user(), teams());
    editor.begin_edit();
    editor.draft_mut().email = "new@example.com".to_string();

    assert!(matches!(editor.begin_save(), SaveAttempt::Started { .. }));
    editor.save_failed();

    assert_eq!(editor.mode(), EditorMode::Editing);
    assert_eq!(editor.draft().email, "new@example.com");

    // retry succeeds
    assert!(matches!(editor.begin_save(), SaveAttempt::Started { .. }));
}

#[test]
fn test_payload_wire_shape_matches_backend_contract() {
    let payload = UpdateUserPayload {
        username: Some("mara".to_string()),
        email: Some("mara@example.com".to_string()),
        password: None,
        team_id: Some(None),
        role: Some(UserRole::Admin),
        avatar_url: Some("/avatars/orbit.png".to_string()),
    };

    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "username": "mara",
            "email": "mara@example.com",
            "teamId": null,
            "role": "ADMIN",
            "avatarUrl": "/avatars/orbit.png"
        })
    );
}
