use crate::cli_context::CliContext;
use crate::error::TaskHubResult;
use crate::formatting::print_user_details;

pub async fn handle_whoami() -> TaskHubResult<()> {
    let mut context = CliContext::load();
    let client = context.authed_client()?;

    let user = client.current_user().await?;
    print_user_details(&user);

    Ok(())
}
