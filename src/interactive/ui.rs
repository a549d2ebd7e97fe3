use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::formatting::utils::truncate;
use crate::interactive::app::{FocusField, ProfileApp};
use crate::interactive::layout::{app_layout, centered_popup};
use crate::profile::AvatarDraft;

pub fn draw(frame: &mut Frame, app: &ProfileApp) {
    let layout = app_layout(frame.size());

    draw_header(frame, layout.header, app);
    if app.editor.is_editing() {
        draw_edit_form(frame, layout.main, app);
    } else {
        draw_profile_card(frame, layout.main, app);
    }
    draw_footer(frame, layout.footer, app);

    if app.editor.picker_open() {
        draw_avatar_picker(frame, frame.size(), app);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &ProfileApp) {
    let title = if app.editor.is_editing() {
        format!(" Editing: {} ", app.editor.user().username)
    } else {
        format!(" Profile: {} ", app.editor.user().username)
    };

    let loading = if app.loading || app.editor.save_in_flight() {
        Span::styled("  saving...", Style::default().fg(Color::Yellow))
    } else {
        Span::raw("")
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(title, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        loading,
    ]))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_profile_card(frame: &mut Frame, area: Rect, app: &ProfileApp) {
    let user = app.editor.user();
    let team = user.team_name.as_deref().unwrap_or("None");
    let avatar = user.avatar_url.as_deref().unwrap_or("(none)");

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", user.username),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  {}", user.role),
            Style::default().fg(Color::Magenta),
        )),
        Line::from(format!("  {}", user.email)),
        Line::from(vec![
            Span::styled("  Team: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(team, Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::styled("  Avatar: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(avatar, Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let card = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Profile "));
    frame.render_widget(card, area);
}

fn draw_edit_form(frame: &mut Frame, area: Rect, app: &ProfileApp) {
    let draft = app.editor.draft();

    let rows: Vec<(FocusField, String, String)> = vec![
        (
            FocusField::Username,
            "Username".to_string(),
            draft.username.clone(),
        ),
        (FocusField::Email, "Email".to_string(), draft.email.clone()),
        (
            FocusField::Role,
            "Role".to_string(),
            draft.role.to_string(),
        ),
        (
            FocusField::Team,
            "Team".to_string(),
            app.editor.draft_team_name().to_string(),
        ),
        (
            FocusField::Avatar,
            "Avatar".to_string(),
            draft.avatar.label(),
        ),
    ];

    let items: Vec<ListItem> = rows
        .iter()
        .map(|(field, label, value)| {
            let focused = *field == app.focus;
            let cursor = if focused
                && matches!(field, FocusField::Username | FocusField::Email)
            {
                "_"
            } else {
                ""
            };
            let text = format!(" {:<10} {}{}", label, value, cursor);

            let style = if focused {
                Style::default()
                    .fg(Color::Rgb(0, 0, 0))
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(text, style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Edit Profile ")
            .border_style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(list, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &ProfileApp) {
    let hints = if app.editor.picker_open() {
        if app.picker_typing {
            "Type path  Enter: Select  Esc: Back"
        } else {
            "\u{2191}/\u{2193} Navigate  Enter: Select  Esc: Cancel"
        }
    } else if app.editor.is_editing() {
        "Tab: Next field  \u{2190}/\u{2192} Change  Enter: Save (Avatar row: picker)  Esc: Cancel"
    } else {
        "e: Edit  r: Refresh  q: Quit"
    };

    let line = if let Some(error) = &app.error_message {
        Line::from(Span::styled(
            format!(" {} ", error),
            Style::default().fg(Color::Red),
        ))
    } else if let Some(status) = &app.status_message {
        Line::from(Span::styled(
            format!(" {} ", status),
            Style::default().fg(Color::Green),
        ))
    } else {
        Line::from(Span::styled(
            format!(" {} ", hints),
            Style::default().fg(Color::DarkGray),
        ))
    };

    let footer = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

/// Draw the avatar picker popup: the preset list plus a custom-file row.
fn draw_avatar_picker(frame: &mut Frame, area: Rect, app: &ProfileApp) {
    let width: u16 = 44;
    let height: u16 = (app.picker_option_count() as u16 + 4).min(20);
    let popup_area = centered_popup(width, height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Choose Avatar ")
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let mut options: Vec<String> = app
        .avatar_presets
        .iter()
        .map(|p| truncate(p, (width - 4) as usize))
        .collect();
    options.push(if app.picker_typing {
        format!("Custom file: {}_", app.picker_path_input)
    } else {
        "Custom file path...".to_string()
    });

    let current = match &app.editor.draft().avatar {
        AvatarDraft::Url(url) => Some(url.clone()),
        _ => None,
    };

    let items: Vec<ListItem> = options
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let marker = if Some(name) == current.as_ref() { "\u{2713} " } else { "  " };
            let style = if i == app.picker_index {
                Style::default()
                    .fg(Color::Rgb(0, 0, 0))
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(
                format!(" {}{} ", marker, name),
                style,
            )))
        })
        .collect();

    let list_area = Rect::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(1));
    frame.render_widget(List::new(items), list_area);

    let hints_area = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1),
        inner.width,
        1,
    );
    let hints = Paragraph::new(Line::from(Span::styled(
        "\u{2191}/\u{2193} Navigate  Enter: Select  Esc: Cancel",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(hints, hints_area);
}
