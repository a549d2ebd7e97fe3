use chrono::{DateTime, Utc};
use colored::*;

pub fn format_status(status: &str) -> ColoredString {
    match status.to_uppercase().as_str() {
        "IN_PROGRESS" => status.yellow(),
        "DONE" | "COMPLETED" => status.green(),
        "CANCELED" | "CANCELLED" => status.red().dimmed(),
        "TODO" | "OPEN" => status.normal(),
        _ => status.normal(),
    }
}

pub fn format_role(role: &crate::models::UserRole) -> ColoredString {
    if role.is_admin() {
        role.as_str().magenta().bold()
    } else {
        role.as_str().normal()
    }
}

pub fn format_relative_time(timestamp: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) {
        let now = Utc::now();
        let duration = now.signed_duration_since(parsed);

        if duration.num_days() > 365 {
            format!("{}y ago", duration.num_days() / 365)
        } else if duration.num_days() > 30 {
            format!("{}mo ago", duration.num_days() / 30)
        } else if duration.num_days() > 0 {
            format!("{}d ago", duration.num_days())
        } else if duration.num_hours() > 0 {
            format!("{}h ago", duration.num_hours())
        } else if duration.num_minutes() > 0 {
            format!("{}m ago", duration.num_minutes())
        } else {
            "just now".to_string()
        }
    } else {
        "unknown".to_string()
    }
}

pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}

/// Masked token rendering for `auth show`. Short tokens are fully masked.
pub fn mask_token(token: &str) -> String {
    if token.len() > 12 {
        format!("{}...{}", &token[..8], &token[token.len() - 4..])
    } else {
        "*".repeat(token.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer string", 10), "a longe...");
    }

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token("abcdefgh12345678"), "abcdefgh...5678");
        assert_eq!(mask_token("tiny"), "****");
    }
}
