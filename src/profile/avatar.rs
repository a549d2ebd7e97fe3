use std::path::PathBuf;

use crate::constants::AVATAR_PRESETS;

/// The avatar slot of an edit draft. A draft holds either a URL (preset or
/// previously uploaded) or a local file pending upload, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum AvatarDraft {
    Unset,
    Url(String),
    File(PathBuf),
}

impl AvatarDraft {
    pub fn from_user(avatar_url: Option<&str>) -> Self {
        match avatar_url {
            Some(url) => AvatarDraft::Url(url.to_string()),
            None => AvatarDraft::Unset,
        }
    }

    /// Display label for the profile card / edit form.
    pub fn label(&self) -> String {
        match self {
            AvatarDraft::Unset => "(none)".to_string(),
            AvatarDraft::Url(url) => url.clone(),
            AvatarDraft::File(path) => format!("{} (pending upload)", path.display()),
        }
    }
}

pub fn preset_avatars() -> Vec<String> {
    AVATAR_PRESETS.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_user() {
        assert_eq!(AvatarDraft::from_user(None), AvatarDraft::Unset);
        assert_eq!(
            AvatarDraft::from_user(Some("/avatars/tide.png")),
            AvatarDraft::Url("/avatars/tide.png".to_string())
        );
    }

    #[test]
    fn test_file_label_marks_pending_upload() {
        let draft = AvatarDraft::File(PathBuf::from("/tmp/me.png"));
        assert!(draft.label().contains("pending upload"));
    }
}
