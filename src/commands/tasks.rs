use clap::ArgMatches;
use colored::*;

use crate::cli_context::CliContext;
use crate::error::{TaskHubError, TaskHubResult};
use crate::formatting::{print_task_details, print_tasks};

fn parse_id(matches: &ArgMatches, name: &str) -> TaskHubResult<i64> {
    matches
        .get_one::<String>(name)
        .ok_or_else(|| TaskHubError::InvalidInput(format!("{} is required", name)))?
        .parse()
        .map_err(|_| TaskHubError::InvalidInput(format!("Invalid {}", name)))
}

pub async fn handle_tasks_list() -> TaskHubResult<()> {
    let mut context = CliContext::load();
    let client = context.client();

    let tasks = client.tasks().await?;

    if tasks.is_empty() {
        println!("No tasks found.");
    } else {
        println!("Found {} tasks:", tasks.len());
        print_tasks(&tasks);
    }

    Ok(())
}

pub async fn handle_task_get(matches: &ArgMatches) -> TaskHubResult<()> {
    let id = parse_id(matches, "id")?;

    let mut context = CliContext::load();
    let client = context.authed_client()?;

    let task = client.task_by_id(id).await?;
    print_task_details(&task);

    Ok(())
}

pub async fn handle_tasks_by_user(matches: &ArgMatches) -> TaskHubResult<()> {
    let user_id = parse_id(matches, "user-id")?;

    let mut context = CliContext::load();
    let client = context.authed_client()?;

    let tasks = client.tasks_by_user(user_id).await?;
    print_tasks(&tasks);

    Ok(())
}

pub async fn handle_personal_tasks(matches: &ArgMatches) -> TaskHubResult<()> {
    let user_id = parse_id(matches, "user-id")?;

    let mut context = CliContext::load();
    let client = context.authed_client()?;

    let tasks = client.personal_tasks(user_id).await?;
    print_tasks(&tasks);

    Ok(())
}

pub async fn handle_add_personal(matches: &ArgMatches) -> TaskHubResult<()> {
    let user_id = parse_id(matches, "user-id")?;
    let name = matches
        .get_one::<String>("name")
        .ok_or_else(|| TaskHubError::InvalidInput("Task name is required".to_string()))?;

    let mut context = CliContext::load();
    let client = context.authed_client()?;

    let task = client.create_personal_task(user_id, name).await?;

    println!(
        "{} {}",
        "\u{2705}".green(),
        "Personal task created!".green().bold()
    );
    print_task_details(&task);

    Ok(())
}

/// The backend expects the full task body on update, so fetch-merge-put.
pub async fn handle_task_update(matches: &ArgMatches) -> TaskHubResult<()> {
    let id = parse_id(matches, "id")?;

    let name = matches.get_one::<String>("name");
    let description = matches.get_one::<String>("description");
    let due = matches.get_one::<String>("due");
    let status = matches.get_one::<String>("status");
    let task_type = matches.get_one::<String>("type");

    if name.is_none() && description.is_none() && due.is_none() && status.is_none()
        && task_type.is_none()
    {
        return Err(TaskHubError::InvalidInput(
            "No fields to update. Provide at least one field to update.".to_string(),
        ));
    }

    let mut context = CliContext::load();
    let client = context.authed_client()?;

    let mut task = client.task_by_id(id).await?;
    if let Some(name) = name {
        task.task_name = name.clone();
    }
    if let Some(description) = description {
        task.task_description = Some(description.clone());
    }
    if let Some(due) = due {
        task.due_date = Some(due.clone());
    }
    if let Some(status) = status {
        task.status = status.clone();
    }
    if let Some(task_type) = task_type {
        task.task_type = Some(task_type.clone());
    }

    let updated = client.update_task(&task).await?;

    println!("{} {}", "\u{2705}".green(), "Task updated successfully!".green().bold());
    print_task_details(&updated);

    Ok(())
}

pub async fn handle_task_status(matches: &ArgMatches) -> TaskHubResult<()> {
    let id = parse_id(matches, "id")?;
    let status = matches
        .get_one::<String>("status")
        .ok_or_else(|| TaskHubError::InvalidInput("Status is required".to_string()))?;

    let mut context = CliContext::load();
    let client = context.authed_client()?;

    let updated = client.update_task_status(id, status).await?;

    println!("{} Task {} is now {}", "\u{2705}".green(), updated.id, updated.status.bold());

    Ok(())
}
