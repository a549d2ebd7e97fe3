use clap::ArgMatches;
use colored::*;

use crate::cli_context::CliContext;
use crate::config::load_config;
use crate::error::{TaskHubError, TaskHubResult};
use crate::formatting::utils::mask_token;
use crate::logging::log_error;
use crate::models::User;

/// The admin area is off limits for non-ADMIN accounts, even with valid
/// credentials.
pub fn check_admin(user: &User) -> TaskHubResult<()> {
    if user.role.is_admin() {
        Ok(())
    } else {
        Err(TaskHubError::AccessDenied)
    }
}

pub async fn handle_login(matches: &ArgMatches) -> TaskHubResult<()> {
    let email = matches
        .get_one::<String>("email")
        .ok_or_else(|| TaskHubError::InvalidInput("Email is required".to_string()))?;
    let password = matches
        .get_one::<String>("password")
        .ok_or_else(|| TaskHubError::InvalidInput("Password is required".to_string()))?;

    let mut context = CliContext::load();
    let client = context.client();

    // Credential and transport failures collapse into one user-facing case.
    let outcome = match client.login(email, password).await {
        Ok(outcome) => outcome,
        Err(e) => {
            log_error(&format!("Login failed: {}", e));
            return Err(TaskHubError::Unauthorized);
        }
    };

    // Nothing is persisted until the gate passes; a stale session from an
    // earlier login is dropped on the way out.
    if let Err(e) = check_admin(&outcome.current_user) {
        context.clear_session()?;
        return Err(e);
    }

    let user = outcome.current_user;
    context.persist_session(outcome.token, user.id)?;

    println!(
        "{} Logged in as: {} ({})",
        "\u{2705}".green(),
        user.username.bold(),
        user.email
    );
    Ok(())
}

pub async fn handle_register(matches: &ArgMatches) -> TaskHubResult<()> {
    let username = matches
        .get_one::<String>("username")
        .ok_or_else(|| TaskHubError::InvalidInput("Username is required".to_string()))?;
    let email = matches
        .get_one::<String>("email")
        .ok_or_else(|| TaskHubError::InvalidInput("Email is required".to_string()))?;
    let password = matches
        .get_one::<String>("password")
        .ok_or_else(|| TaskHubError::InvalidInput("Password is required".to_string()))?;

    let mut context = CliContext::load();
    let user = context.client().register(username, email, password).await?;

    println!(
        "{} Registered: {} ({})",
        "\u{2705}".green(),
        user.username.bold(),
        user.email
    );
    Ok(())
}

pub fn handle_show() -> TaskHubResult<()> {
    let config = load_config();
    match config.token {
        Some(token) => println!("Token: {}", mask_token(&token)),
        None => println!("No session token configured"),
    }
    match config.user_id {
        Some(id) => println!("User ID: {}", id),
        None => println!("No user ID configured"),
    }
    Ok(())
}

pub fn handle_logout() -> TaskHubResult<()> {
    let mut context = CliContext::load();
    context.clear_session()?;
    println!("Logged out.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;

    fn user_with_role(role: UserRole) -> User {
        User {
            id: 1,
            username: "t".to_string(),
            email: "t@x.io".to_string(),
            role,
            team_id: None,
            team_name: None,
            avatar_url: None,
        }
    }

    #[test]
    fn test_admin_passes_gate() {
        assert!(check_admin(&user_with_role(UserRole::Admin)).is_ok());
    }

    #[test]
    fn test_non_admin_rejected() {
        let result = check_admin(&user_with_role(UserRole::User));
        assert!(matches!(result, Err(TaskHubError::AccessDenied)));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Access denied. Only ADMIN role can log in here."
        );
    }
}
