use crate::cli_context::CliContext;
use crate::error::TaskHubResult;
use crate::formatting::print_teams;

pub async fn handle_teams() -> TaskHubResult<()> {
    let mut context = CliContext::load();
    let client = context.client();

    let teams = client.teams().await?;

    if teams.is_empty() {
        println!("No teams found.");
    } else {
        println!("Found {} teams:", teams.len());
        print_teams(&teams);
    }

    Ok(())
}
