use crossterm::event::KeyCode;
use std::path::PathBuf;
use std::sync::Arc;

use crate::client::ApiClient;
use crate::logging::{log_error, log_info};
use crate::models::{Team, User};
use crate::profile::{ProfileEditor, SaveAttempt};

/// Which edit-form row has focus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusField {
    Username,
    Email,
    Role,
    Team,
    Avatar,
}

impl FocusField {
    pub const ALL: [FocusField; 5] = [
        FocusField::Username,
        FocusField::Email,
        FocusField::Role,
        FocusField::Team,
        FocusField::Avatar,
    ];

    fn next(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Terminal profile screen: wraps the editor state machine, owns the network
/// calls, and routes saves to the self / by-id endpoint.
pub struct ProfileApp {
    pub editor: ProfileEditor,
    pub client: Arc<ApiClient>,
    pub focus: FocusField,
    pub picker_index: usize,
    pub picker_path_input: String,
    pub picker_typing: bool,
    pub avatar_presets: Vec<String>,
    pub status_message: Option<String>,
    pub error_message: Option<String>,
    pub loading: bool,
    pub should_quit: bool,
}

impl ProfileApp {
    pub fn new(client: Arc<ApiClient>, user: User, teams: Vec<Team>) -> Self {
        Self {
            editor: ProfileEditor::new(user, teams),
            client,
            focus: FocusField::Username,
            picker_index: 0,
            picker_path_input: String::new(),
            picker_typing: false,
            avatar_presets: crate::profile::avatar::preset_avatars(),
            status_message: None,
            error_message: None,
            loading: false,
            should_quit: false,
        }
    }

    /// Number of picker rows: presets plus the custom-file entry.
    pub fn picker_option_count(&self) -> usize {
        self.avatar_presets.len() + 1
    }

    pub async fn handle_key(&mut self, key: KeyCode) {
        self.status_message = None;

        if self.editor.picker_open() {
            self.handle_picker_key(key);
        } else if self.editor.is_editing() {
            self.handle_editing_key(key).await;
        } else {
            self.handle_viewing_key(key).await;
        }
    }

    async fn handle_viewing_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('e') => {
                self.error_message = None;
                self.focus = FocusField::Username;
                self.editor.begin_edit();
            }
            KeyCode::Char('r') => self.refresh().await,
            _ => {}
        }
    }

    async fn handle_editing_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.error_message = None;
                self.editor.cancel();
            }
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Enter => {
                if self.focus == FocusField::Avatar {
                    self.editor.open_avatar_picker();
                    self.picker_index = 0;
                    self.picker_typing = false;
                    self.picker_path_input.clear();
                } else {
                    self.save().await;
                }
            }
            KeyCode::Left => self.cycle_focused(false),
            KeyCode::Right => self.cycle_focused(true),
            KeyCode::Char(c) => match self.focus {
                FocusField::Username => self.editor.draft_mut().username.push(c),
                FocusField::Email => self.editor.draft_mut().email.push(c),
                FocusField::Role => self.editor.cycle_role(),
                FocusField::Team => self.editor.cycle_team(true),
                FocusField::Avatar => {}
            },
            KeyCode::Backspace => match self.focus {
                FocusField::Username => {
                    self.editor.draft_mut().username.pop();
                }
                FocusField::Email => {
                    self.editor.draft_mut().email.pop();
                }
                _ => {}
            },
            _ => {}
        }
    }

    fn cycle_focused(&mut self, forward: bool) {
        match self.focus {
            FocusField::Role => self.editor.cycle_role(),
            FocusField::Team => self.editor.cycle_team(forward),
            _ => {}
        }
    }

    fn handle_picker_key(&mut self, key: KeyCode) {
        if self.picker_typing {
            match key {
                KeyCode::Esc => self.picker_typing = false,
                KeyCode::Enter => {
                    let path = self.picker_path_input.trim().to_string();
                    if !path.is_empty() {
                        self.editor.select_avatar_file(PathBuf::from(path));
                        self.picker_typing = false;
                    }
                }
                KeyCode::Char(c) => self.picker_path_input.push(c),
                KeyCode::Backspace => {
                    self.picker_path_input.pop();
                }
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Esc => self.editor.close_avatar_picker(),
            KeyCode::Char('j') | KeyCode::Down => {
                self.picker_index = (self.picker_index + 1) % self.picker_option_count();
            }
            KeyCode::Char('k') | KeyCode::Up => {
                let count = self.picker_option_count();
                self.picker_index = (self.picker_index + count - 1) % count;
            }
            KeyCode::Enter => {
                if self.picker_index < self.avatar_presets.len() {
                    let url = self.avatar_presets[self.picker_index].clone();
                    self.editor.select_avatar_url(url);
                } else {
                    self.picker_typing = true;
                }
            }
            _ => {}
        }
    }

    /// Re-fetch the displayed record. The backend has no GET by id, so other
    /// users come from the full listing.
    pub async fn refresh(&mut self) {
        self.loading = true;
        self.error_message = None;

        let id = self.editor.user().id;
        let result = if self.client.session().is_self(id) {
            self.client.current_user().await
        } else {
            self.client.users().await.and_then(|users| {
                users
                    .into_iter()
                    .find(|u| u.id == id)
                    .ok_or_else(|| crate::error::TaskHubError::Unknown(format!(
                        "user {} not found",
                        id
                    )))
            })
        };

        match result {
            Ok(user) => {
                self.editor.refresh_user(user);
                self.status_message = Some("Refreshed".to_string());
            }
            Err(e) => {
                log_error(&format!("Refresh failed: {}", e));
                self.error_message = Some(format!("Refresh failed: {}", e));
            }
        }
        self.loading = false;
    }

    /// Guarded save: a second trigger while one is in flight is ignored by
    /// the editor. Routes to the self or by-id update endpoint.
    pub async fn save(&mut self) {
        let (payload, image) = match self.editor.begin_save() {
            SaveAttempt::Started { payload, image } => (payload, image),
            SaveAttempt::InFlight => return,
            SaveAttempt::Invalid(msg) => {
                self.error_message = Some(msg);
                return;
            }
        };

        self.loading = true;
        self.error_message = None;

        let id = self.editor.user().id;
        let result = if self.client.session().is_self(id) {
            self.client
                .update_current_user(&payload, image.as_deref())
                .await
        } else {
            self.client
                .update_user_by_id(id, &payload, image.as_deref())
                .await
        };

        match result {
            Ok(updated) => {
                log_info(&format!("Profile saved for user {}", updated.id));
                self.editor.save_succeeded(updated);
                self.status_message = Some("Profile saved".to_string());
            }
            Err(e) => {
                log_error(&format!("Profile save failed: {}", e));
                self.editor.save_failed();
                self.error_message = Some(format!("Save failed: {}", e));
            }
        }
        self.loading = false;
    }
}
