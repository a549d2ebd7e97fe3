use std::process;

use clap::{Arg, Command};

use taskhub_cli::commands::auth::{handle_login, handle_logout, handle_register, handle_show};
use taskhub_cli::commands::notifications::handle_notifications;
use taskhub_cli::commands::profile::handle_profile;
use taskhub_cli::commands::tasks::{
    handle_add_personal, handle_personal_tasks, handle_task_get, handle_task_status,
    handle_task_update, handle_tasks_by_user, handle_tasks_list,
};
use taskhub_cli::commands::teams::handle_teams;
use taskhub_cli::commands::users::{handle_users_list, handle_users_update};
use taskhub_cli::commands::whoami::handle_whoami;
use taskhub_cli::logging::init_logging;

#[tokio::main]
async fn main() {
    let _ = init_logging();

    let app = Command::new("taskhub")
        .version("1.0.0")
        .about("Terminal admin client for the TaskHub team/task management backend")
        .subcommand_required(true)
        .subcommand(
            Command::new("auth")
                .about("Manage the session")
                .subcommand_required(true)
                .subcommand(
                    Command::new("login")
                        .about("Log in to the admin area")
                        .arg(
                            Arg::new("email")
                                .long("email")
                                .short('e')
                                .value_name("EMAIL")
                                .help("Account email")
                                .required(true),
                        )
                        .arg(
                            Arg::new("password")
                                .long("password")
                                .short('p')
                                .value_name("PASSWORD")
                                .help("Account password")
                                .required(true),
                        ),
                )
                .subcommand(
                    Command::new("register")
                        .about("Register a new account")
                        .arg(
                            Arg::new("username")
                                .long("username")
                                .short('u')
                                .value_name("USERNAME")
                                .help("New account username")
                                .required(true),
                        )
                        .arg(
                            Arg::new("email")
                                .long("email")
                                .short('e')
                                .value_name("EMAIL")
                                .help("New account email")
                                .required(true),
                        )
                        .arg(
                            Arg::new("password")
                                .long("password")
                                .short('p')
                                .value_name("PASSWORD")
                                .help("New account password")
                                .required(true),
                        ),
                )
                .subcommand(Command::new("show").about("Show the stored session (masked)"))
                .subcommand(Command::new("logout").about("Clear the stored session")),
        )
        .subcommand(Command::new("whoami").about("Show current user information"))
        .subcommand(Command::new("teams").about("List teams"))
        .subcommand(
            Command::new("users")
                .about("Manage users")
                .subcommand_required(true)
                .subcommand(Command::new("list").about("List users"))
                .subcommand(
                    Command::new("update")
                        .about("Update a user (multipart, with optional avatar image)")
                        .arg(
                            Arg::new("id")
                                .value_name("USER_ID")
                                .help("User ID to update")
                                .required(true)
                                .index(1),
                        )
                        .arg(
                            Arg::new("username")
                                .long("username")
                                .short('u')
                                .value_name("USERNAME")
                                .help("New username"),
                        )
                        .arg(
                            Arg::new("email")
                                .long("email")
                                .short('e')
                                .value_name("EMAIL")
                                .help("New email"),
                        )
                        .arg(
                            Arg::new("password")
                                .long("password")
                                .short('p')
                                .value_name("PASSWORD")
                                .help("New password"),
                        )
                        .arg(
                            Arg::new("role")
                                .long("role")
                                .short('r')
                                .value_name("ROLE")
                                .help("New role: USER or ADMIN"),
                        )
                        .arg(
                            Arg::new("team")
                                .long("team")
                                .short('t')
                                .value_name("TEAM_ID")
                                .help("New team ID, or 'none' to clear"),
                        )
                        .arg(
                            Arg::new("avatar-url")
                                .long("avatar-url")
                                .value_name("URL")
                                .help("Avatar URL (mutually exclusive with --image)"),
                        )
                        .arg(
                            Arg::new("image")
                                .long("image")
                                .short('i')
                                .value_name("PATH")
                                .help("Avatar image file to upload"),
                        ),
                ),
        )
        .subcommand(
            Command::new("tasks")
                .about("Manage tasks")
                .subcommand_required(true)
                .subcommand(Command::new("list").about("List all tasks"))
                .subcommand(
                    Command::new("get").about("View a single task").arg(
                        Arg::new("id")
                            .value_name("TASK_ID")
                            .help("Task ID")
                            .required(true)
                            .index(1),
                    ),
                )
                .subcommand(
                    Command::new("user").about("List tasks assigned to a user").arg(
                        Arg::new("user-id")
                            .value_name("USER_ID")
                            .help("User ID")
                            .required(true)
                            .index(1),
                    ),
                )
                .subcommand(
                    Command::new("personal").about("List a user's personal tasks").arg(
                        Arg::new("user-id")
                            .value_name("USER_ID")
                            .help("User ID")
                            .required(true)
                            .index(1),
                    ),
                )
                .subcommand(
                    Command::new("add-personal")
                        .about("Create a personal task")
                        .arg(
                            Arg::new("user-id")
                                .value_name("USER_ID")
                                .help("User ID")
                                .required(true)
                                .index(1),
                        )
                        .arg(
                            Arg::new("name")
                                .value_name("NAME")
                                .help("Task name")
                                .required(true)
                                .index(2),
                        ),
                )
                .subcommand(
                    Command::new("update")
                        .about("Update an existing task")
                        .arg(
                            Arg::new("id")
                                .value_name("TASK_ID")
                                .help("Task ID to update")
                                .required(true)
                                .index(1),
                        )
                        .arg(
                            Arg::new("name")
                                .long("name")
                                .short('n')
                                .value_name("NAME")
                                .help("New task name"),
                        )
                        .arg(
                            Arg::new("description")
                                .long("description")
                                .short('d')
                                .value_name("DESCRIPTION")
                                .help("New task description"),
                        )
                        .arg(
                            Arg::new("due")
                                .long("due")
                                .value_name("DATE")
                                .help("New due date"),
                        )
                        .arg(
                            Arg::new("status")
                                .long("status")
                                .short('s')
                                .value_name("STATUS")
                                .help("New status"),
                        )
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_name("TYPE")
                                .help("New task type"),
                        ),
                )
                .subcommand(
                    Command::new("status")
                        .about("Update only a task's status")
                        .arg(
                            Arg::new("id")
                                .value_name("TASK_ID")
                                .help("Task ID")
                                .required(true)
                                .index(1),
                        )
                        .arg(
                            Arg::new("status")
                                .value_name("STATUS")
                                .help("New status")
                                .required(true)
                                .index(2),
                        ),
                ),
        )
        .subcommand(
            Command::new("notifications")
                .about("List notifications")
                .arg(
                    Arg::new("user")
                        .long("user")
                        .short('u')
                        .value_name("USER_ID")
                        .help("Only notifications for this user"),
                ),
        )
        .subcommand(
            Command::new("profile")
                .about("Open the interactive profile editor")
                .arg(
                    Arg::new("user")
                        .long("user")
                        .short('u')
                        .value_name("USER_ID")
                        .help("Edit this user instead of yourself"),
                ),
        );

    let matches = app.get_matches();

    let result = match matches.subcommand() {
        Some(("auth", sub_matches)) => match sub_matches.subcommand() {
            Some(("login", login_matches)) => handle_login(login_matches).await,
            Some(("register", register_matches)) => handle_register(register_matches).await,
            Some(("show", _)) => handle_show(),
            Some(("logout", _)) => handle_logout(),
            _ => {
                eprintln!("Unknown auth subcommand. Use 'taskhub auth --help' for available options.");
                process::exit(1);
            }
        },
        Some(("whoami", _)) => handle_whoami().await,
        Some(("teams", _)) => handle_teams().await,
        Some(("users", sub_matches)) => match sub_matches.subcommand() {
            Some(("list", _)) => handle_users_list().await,
            Some(("update", update_matches)) => handle_users_update(update_matches).await,
            _ => {
                eprintln!("Unknown users subcommand. Use 'taskhub users --help' for available options.");
                process::exit(1);
            }
        },
        Some(("tasks", sub_matches)) => match sub_matches.subcommand() {
            Some(("list", _)) => handle_tasks_list().await,
            Some(("get", get_matches)) => handle_task_get(get_matches).await,
            Some(("user", user_matches)) => handle_tasks_by_user(user_matches).await,
            Some(("personal", personal_matches)) => handle_personal_tasks(personal_matches).await,
            Some(("add-personal", add_matches)) => handle_add_personal(add_matches).await,
            Some(("update", update_matches)) => handle_task_update(update_matches).await,
            Some(("status", status_matches)) => handle_task_status(status_matches).await,
            _ => {
                eprintln!("Unknown tasks subcommand. Use 'taskhub tasks --help' for available options.");
                process::exit(1);
            }
        },
        Some(("notifications", sub_matches)) => handle_notifications(sub_matches).await,
        Some(("profile", sub_matches)) => handle_profile(sub_matches).await,
        _ => {
            eprintln!("Unknown command. Use 'taskhub --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
