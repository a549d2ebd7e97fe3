use clap::ArgMatches;
use colored::*;
use std::path::PathBuf;

use crate::cli_context::CliContext;
use crate::error::{TaskHubError, TaskHubResult};
use crate::formatting::{print_user_details, print_users};
use crate::models::{UpdateUserPayload, UserRole};

pub async fn handle_users_list() -> TaskHubResult<()> {
    let mut context = CliContext::load();
    let client = context.client();

    let users = client.users().await?;

    if users.is_empty() {
        println!("No users found.");
    } else {
        println!("Found {} users:", users.len());
        print_users(&users);
    }

    Ok(())
}

/// Parse the `--team` flag: a team id, or `none` for the explicit
/// no-team null.
pub fn parse_team_flag(value: &str) -> TaskHubResult<Option<i64>> {
    if value.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    value
        .parse::<i64>()
        .map(Some)
        .map_err(|_| TaskHubError::InvalidInput(format!("Invalid team: {}", value)))
}

pub async fn handle_users_update(matches: &ArgMatches) -> TaskHubResult<()> {
    let id: i64 = matches
        .get_one::<String>("id")
        .ok_or_else(|| TaskHubError::InvalidInput("User ID is required".to_string()))?
        .parse()
        .map_err(|_| TaskHubError::InvalidInput("Invalid user ID".to_string()))?;

    let role = match matches.get_one::<String>("role") {
        Some(r) => Some(UserRole::parse(r).ok_or_else(|| {
            TaskHubError::InvalidInput(format!("Invalid role: {} (USER or ADMIN)", r))
        })?),
        None => None,
    };

    let team_id = match matches.get_one::<String>("team") {
        Some(t) => Some(parse_team_flag(t)?),
        None => None,
    };

    let avatar_url = matches.get_one::<String>("avatar-url").cloned();
    let image = matches.get_one::<String>("image").map(PathBuf::from);

    if avatar_url.is_some() && image.is_some() {
        return Err(TaskHubError::InvalidInput(
            "--avatar-url and --image are mutually exclusive".to_string(),
        ));
    }

    let payload = UpdateUserPayload {
        username: matches.get_one::<String>("username").cloned(),
        email: matches.get_one::<String>("email").cloned(),
        password: matches.get_one::<String>("password").cloned(),
        team_id,
        role,
        avatar_url,
    };

    if payload == UpdateUserPayload::default() && image.is_none() {
        return Err(TaskHubError::InvalidInput(
            "No fields to update. Provide at least one field to update.".to_string(),
        ));
    }

    let mut context = CliContext::load();
    let is_self = context.session().is_self(id);
    let client = context.authed_client()?;

    let updated = if is_self {
        client.update_current_user(&payload, image.as_deref()).await?
    } else {
        client.update_user_by_id(id, &payload, image.as_deref()).await?
    };

    println!("{} {}", "\u{2705}".green(), "User updated successfully!".green().bold());
    print_user_details(&updated);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_team_flag_none_sentinel() {
        assert_eq!(parse_team_flag("none").unwrap(), None);
        assert_eq!(parse_team_flag("NONE").unwrap(), None);
    }

    #[test]
    fn test_parse_team_flag_id() {
        assert_eq!(parse_team_flag("5").unwrap(), Some(5));
    }

    #[test]
    fn test_parse_team_flag_rejects_garbage() {
        assert!(matches!(
            parse_team_flag("alpha"),
            Err(TaskHubError::InvalidInput(_))
        ));
    }
}
