use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::error::{TaskHubError, TaskHubResult};
use crate::interactive::run_profile;
use crate::logging::log_panic_info;

/// Launch the interactive profile editor for the acting user, or for another
/// user by id.
pub async fn handle_profile(matches: &ArgMatches) -> TaskHubResult<()> {
    let mut context = CliContext::load();
    let client = context.authed_client()?;

    let target_id = match matches.get_one::<String>("user") {
        Some(id) => id
            .parse::<i64>()
            .map_err(|_| TaskHubError::InvalidInput("Invalid user ID".to_string()))?,
        None => client
            .session()
            .user_id()
            .ok_or(TaskHubError::TokenMissing)?,
    };

    let user = if client.session().is_self(target_id) {
        client.current_user().await?
    } else {
        client
            .users()
            .await?
            .into_iter()
            .find(|u| u.id == target_id)
            .ok_or_else(|| TaskHubError::Unknown(format!("user {} not found", target_id)))?
    };

    let teams = client.teams().await?;

    // Panics must land in the log file, not the alternate screen.
    std::panic::set_hook(Box::new(|info| log_panic_info(info)));

    run_profile(client, user, teams).await
}
