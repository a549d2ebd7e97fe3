use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::error::{TaskHubError, TaskHubResult};
use crate::formatting::print_notifications;

pub async fn handle_notifications(matches: &ArgMatches) -> TaskHubResult<()> {
    let mut context = CliContext::load();
    let client = context.authed_client()?;

    let notifications = match matches.get_one::<String>("user") {
        Some(user_id) => {
            let user_id: i64 = user_id
                .parse()
                .map_err(|_| TaskHubError::InvalidInput("Invalid user ID".to_string()))?;
            client.notifications_by_user(user_id).await?
        }
        None => client.notifications().await?,
    };

    print_notifications(&notifications);
    Ok(())
}
