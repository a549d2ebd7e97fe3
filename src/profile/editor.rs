use std::path::PathBuf;

use crate::models::{Team, UpdateUserPayload, User, UserRole};
use crate::profile::avatar::AvatarDraft;

/// Represents the current mode of the profile editor
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorMode {
    /// Read-only display of the committed record
    Viewing,
    /// Draft fields are live and may diverge from the committed record
    Editing,
}

/// The editable, not-yet-committed copy of the user record.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub username: String,
    pub email: String,
    pub role: UserRole,
    /// `None` means the "no team" selection.
    pub team_id: Option<i64>,
    pub avatar: AvatarDraft,
}

impl Draft {
    fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role,
            team_id: user.team_id,
            avatar: AvatarDraft::from_user(user.avatar_url.as_deref()),
        }
    }
}

/// Outcome of a save trigger.
#[derive(Debug, PartialEq)]
pub enum SaveAttempt {
    /// Save may proceed; the caller issues the request and reports back via
    /// `save_succeeded` / `save_failed`.
    Started {
        payload: UpdateUserPayload,
        image: Option<PathBuf>,
    },
    /// A save is already in flight; this trigger is ignored.
    InFlight,
    /// The draft failed local validation; nothing was sent.
    Invalid(String),
}

/// State machine behind the profile screen. Holds the committed user record,
/// the selectable teams, and the edit draft; all transitions are synchronous
/// and IO-free so the UI layer owns every network call.
pub struct ProfileEditor {
    user: User,
    teams: Vec<Team>,
    mode: EditorMode,
    draft: Draft,
    picker_open: bool,
    save_in_flight: bool,
}

impl ProfileEditor {
    pub fn new(user: User, teams: Vec<Team>) -> Self {
        let draft = Draft::from_user(&user);
        Self {
            user,
            teams,
            mode: EditorMode::Viewing,
            draft,
            picker_open: false,
            save_in_flight: false,
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == EditorMode::Editing
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    pub fn picker_open(&self) -> bool {
        self.picker_open
    }

    pub fn save_in_flight(&self) -> bool {
        self.save_in_flight
    }

    /// Display name of the drafted team selection.
    pub fn draft_team_name(&self) -> &str {
        match self.draft.team_id {
            None => "No Team",
            Some(id) => self
                .teams
                .iter()
                .find(|t| t.id == id)
                .map(|t| t.name.as_str())
                .unwrap_or("Unknown"),
        }
    }

    /// Viewing -> Editing; the draft is seeded from the committed record.
    pub fn begin_edit(&mut self) {
        if self.mode == EditorMode::Viewing {
            self.draft = Draft::from_user(&self.user);
            self.mode = EditorMode::Editing;
        }
    }

    /// Editing -> Viewing, discarding every draft change. Ignored while a
    /// save is in flight.
    pub fn cancel(&mut self) {
        if self.mode == EditorMode::Editing && !self.save_in_flight {
            self.draft = Draft::from_user(&self.user);
            self.picker_open = false;
            self.mode = EditorMode::Viewing;
        }
    }

    /// Opening while already open is a no-op.
    pub fn open_avatar_picker(&mut self) {
        if self.mode == EditorMode::Editing && !self.picker_open {
            self.picker_open = true;
        }
    }

    pub fn close_avatar_picker(&mut self) {
        self.picker_open = false;
    }

    /// Picker selection: a preset or previously-uploaded URL. Replaces any
    /// pending file and closes the picker.
    pub fn select_avatar_url(&mut self, url: String) {
        self.draft.avatar = AvatarDraft::Url(url);
        self.picker_open = false;
    }

    /// Picker selection: a local image file to upload with the save.
    pub fn select_avatar_file(&mut self, path: PathBuf) {
        self.draft.avatar = AvatarDraft::File(path);
        self.picker_open = false;
    }

    /// Cycle the drafted team through "No Team" and the team list.
    pub fn cycle_team(&mut self, forward: bool) {
        let mut options: Vec<Option<i64>> = vec![None];
        options.extend(self.teams.iter().map(|t| Some(t.id)));

        let current = options
            .iter()
            .position(|o| *o == self.draft.team_id)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % options.len()
        } else {
            (current + options.len() - 1) % options.len()
        };
        self.draft.team_id = options[next];
    }

    pub fn cycle_role(&mut self) {
        self.draft.role = match self.draft.role {
            UserRole::User => UserRole::Admin,
            UserRole::Admin => UserRole::User,
        };
    }

    /// Build the outgoing update from the draft. The team reference is always
    /// present: a cleared selection becomes the explicit null sentinel.
    /// Exactly one of {avatar URL, image file} is emitted.
    pub fn build_update(&self) -> (UpdateUserPayload, Option<PathBuf>) {
        let (avatar_url, image) = match &self.draft.avatar {
            AvatarDraft::File(path) => (None, Some(path.clone())),
            AvatarDraft::Url(url) => (Some(url.clone()), None),
            AvatarDraft::Unset => (None, None),
        };

        let payload = UpdateUserPayload {
            username: Some(self.draft.username.clone()),
            email: Some(self.draft.email.clone()),
            password: None,
            team_id: Some(self.draft.team_id),
            role: Some(self.draft.role),
            avatar_url,
        };

        (payload, image)
    }

    /// Trigger a save. Guarded: a second trigger while one is in flight is
    /// ignored, and an invalid draft is rejected before any request.
    pub fn begin_save(&mut self) -> SaveAttempt {
        if self.mode != EditorMode::Editing {
            return SaveAttempt::Invalid("not in edit mode".to_string());
        }
        if self.save_in_flight {
            return SaveAttempt::InFlight;
        }
        if self.draft.username.trim().is_empty() {
            return SaveAttempt::Invalid("username is required".to_string());
        }
        if self.draft.email.trim().is_empty() {
            return SaveAttempt::Invalid("email is required".to_string());
        }

        self.save_in_flight = true;
        let (payload, image) = self.build_update();
        SaveAttempt::Started { payload, image }
    }

    /// Commit: the server-returned record becomes the displayed source of
    /// truth and the editor returns to Viewing.
    pub fn save_succeeded(&mut self, updated: User) {
        self.user = updated;
        self.draft = Draft::from_user(&self.user);
        self.picker_open = false;
        self.save_in_flight = false;
        self.mode = EditorMode::Viewing;
    }

    /// Failure: stay in Editing with the draft intact so the user can retry.
    pub fn save_failed(&mut self) {
        self.save_in_flight = false;
    }

    /// Replace the committed record (external refresh while Viewing).
    pub fn refresh_user(&mut self, user: User) {
        if self.mode == EditorMode::Viewing {
            self.draft = Draft::from_user(&user);
            self.user = user;
        }
    }
}
