use colored::*;

use super::utils::*;
use crate::models::{Notification, Task, Team, User};

pub fn print_teams(teams: &[Team]) {
    if teams.is_empty() {
        println!("{}", "No teams found.".dimmed());
        return;
    }

    println!("{}", "─".repeat(50).dimmed());
    println!("{:<8} {:<40}", "ID".bold(), "Name".bold());
    println!("{}", "─".repeat(50).dimmed());

    for team in teams {
        println!("{:<8} {:<40}", team.id, truncate(&team.name, 40));
    }
}

pub fn print_users(users: &[User]) {
    if users.is_empty() {
        println!("{}", "No users found.".dimmed());
        return;
    }

    println!("{}", "─".repeat(90).dimmed());
    println!(
        "{:<6} {:<20} {:<30} {:<8} {:<20}",
        "ID".bold(),
        "Username".bold(),
        "Email".bold(),
        "Role".bold(),
        "Team".bold()
    );
    println!("{}", "─".repeat(90).dimmed());

    for user in users {
        let team = user.team_name.as_deref().unwrap_or("None");
        println!(
            "{:<6} {:<20} {:<30} {:<8} {:<20}",
            user.id,
            truncate(&user.username, 20),
            truncate(&user.email, 30),
            format_role(&user.role),
            truncate(team, 20)
        );
    }
}

pub fn print_user_details(user: &User) {
    println!("{}: {}", "ID".bold(), user.id);
    println!("{}: {}", "Username".bold(), user.username.bright_blue().bold());
    println!("{}: {}", "Email".bold(), user.email);
    println!("{}: {}", "Role".bold(), format_role(&user.role));
    println!(
        "{}: {}",
        "Team".bold(),
        user.team_name.as_deref().unwrap_or("None").green()
    );
    println!(
        "{}: {}",
        "Avatar".bold(),
        user.avatar_url.as_deref().unwrap_or("(none)").bright_black()
    );
}

pub fn print_tasks(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("{}", "No tasks found.".dimmed());
        return;
    }

    println!("{}", "─".repeat(110).dimmed());
    println!(
        "{:<6} {:<35} {:<14} {:<8} {:<12} {:<14}",
        "ID".bold(),
        "Name".bold(),
        "Status".bold(),
        "User".bold(),
        "Type".bold(),
        "Due".bold()
    );
    println!("{}", "─".repeat(110).dimmed());

    for task in tasks {
        println!(
            "{:<6} {:<35} {:<14} {:<8} {:<12} {:<14}",
            task.id,
            truncate(&task.task_name, 35),
            format_status(&task.status),
            task.user_id,
            truncate(task.task_type.as_deref().unwrap_or("-"), 12),
            task.due_date.as_deref().map(format_relative_time).unwrap_or_else(|| "-".to_string())
        );
    }
}

pub fn print_task_details(task: &Task) {
    println!("{}: {}", "ID".bold(), task.id);
    println!("{}: {}", "Name".bold(), task.task_name.bright_blue().bold());
    if let Some(description) = &task.task_description {
        println!("{}: {}", "Description".bold(), description);
    }
    println!("{}: {}", "Status".bold(), format_status(&task.status));
    println!("{}: {}", "Assigned user".bold(), task.user_id);
    if let Some(task_type) = &task.task_type {
        println!("{}: {}", "Type".bold(), task_type);
    }
    println!(
        "{}: {}",
        "Created".bold(),
        format_relative_time(&task.created_at).bright_black()
    );
    if let Some(due) = &task.due_date {
        println!("{}: {}", "Due".bold(), due);
    }
}

pub fn print_notifications(notifications: &[Notification]) {
    if notifications.is_empty() {
        println!("{}", "No notifications.".dimmed());
        return;
    }

    for notification in notifications {
        let marker = if notification.read {
            "○".dimmed()
        } else {
            "●".cyan()
        };
        let when = format_relative_time(&notification.created_at);
        println!(
            "{} {} {}",
            marker,
            notification.description,
            format!("({})", when).bright_black()
        );
    }
}
