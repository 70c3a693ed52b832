use crate::app::{ActiveFocus, AppState};
use crate::forms::{SettingsDraft, SettingsField};
use crate::ui::{
    layout::create_modal_area,
    styles::{countdown_style, dim_style, modal_bg_style, modal_title_style, priority_style},
};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the focus session countdown modal
pub fn render_focus_modal(f: &mut Frame, app: &AppState, focus: &ActiveFocus, area: Rect) {
    let modal_area = create_modal_area(area, 11);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let title = app.focus_title(focus.session.todo_id);
    let lines = vec![
        Line::raw(""),
        Line::raw(title),
        Line::raw(""),
        Line::from(Span::styled(focus.timer.display(), countdown_style())),
        Line::raw(""),
        Line::from(Span::styled("Stay focused on your task!", dim_style())),
        Line::raw(""),
        Line::from(vec![
            Span::styled("[Esc]", modal_title_style()),
            Span::raw(" Cancel session"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" ⏱ Focus Session ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

/// Render the settings modal
pub fn render_settings_modal(f: &mut Frame, form: &SettingsDraft, area: Rect) {
    let modal_area = create_modal_area(area, 16);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let mut lines = Vec::new();
    lines.push(Line::raw(""));

    push_field(
        &mut lines,
        form.editing_field == SettingsField::FocusDuration,
        "Default Focus Duration (minutes)",
        Span::styled(form.focus_duration.clone(), modal_title_style()),
        true,
    );
    push_field(
        &mut lines,
        form.editing_field == SettingsField::DefaultPriority,
        "Default Priority (←/→)",
        Span::styled(form.default_priority.label(), priority_style(form.default_priority)),
        false,
    );
    push_field(
        &mut lines,
        form.editing_field == SettingsField::Categories,
        "Categories (comma-separated)",
        Span::styled(form.categories.clone(), modal_title_style()),
        true,
    );

    lines.push(Line::from(vec![
        Span::styled("[Enter]", modal_title_style()),
        Span::raw(" Save Changes  "),
        Span::styled("[Esc]", modal_title_style()),
        Span::raw(" Cancel"),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" ⚙ Settings ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

/// Label line, value line with cursor when focused, blank spacer
fn push_field(
    lines: &mut Vec<Line<'static>>,
    focused: bool,
    label: &'static str,
    value: Span<'static>,
    text_input: bool,
) {
    if focused {
        lines.push(Line::raw(format!("{} (editing)", label)));
    } else {
        lines.push(Line::raw(label));
    }

    let mut spans = vec![Span::raw("> "), value];
    if focused && text_input {
        spans.push(Span::styled("█", modal_title_style())); // Cursor
    }
    lines.push(Line::from(spans));
    lines.push(Line::raw(""));
}
