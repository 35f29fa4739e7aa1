use folio_core::navigation::Page;
use folio_core::state::Role;
use folio_core::{Locale, ResearchPaper, NAV_ITEMS};
use ratatui::{
    layout::{Constraint, Layout, Margin, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

use crate::app::{App, HomeLine, InputMode};
use crate::handler::nav_shortcut;

/// Parse a line of text and convert **bold** markdown to styled spans
pub fn parse_markdown_line(text: &str) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find("**") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("**") else {
            break;
        };
        if !rest[..start].is_empty() {
            spans.push(Span::raw(rest[..start].to_string()));
        }
        if end > 0 {
            spans.push(Span::styled(
                after[..end].to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        }
        rest = &after[end + 2..];
    }

    // No closing **, the remainder stays literal
    if !rest.is_empty() {
        spans.push(Span::raw(rest.to_string()));
    }

    if spans.is_empty() {
        Line::default()
    } else {
        Line::from(spans)
    }
}

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();

    // Main layout: header, nav bar, body, footer
    let [header_area, nav_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(app, frame, header_area);
    render_nav_bar(app, frame, nav_area);

    let page_area = if app.chat_open {
        let [page_area, chat_area] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(body_area);
        render_chat(app, frame, chat_area);
        page_area
    } else {
        body_area
    };

    let lines = match app.page() {
        Page::Home => home_lines(app),
        Page::Research => research_lines(app),
        Page::Blog => blog_lines(app),
    };
    render_document(app, frame, page_area, lines);

    render_footer(app, frame, footer_area);
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let effects = app.nav.effects();
    let back = if effects.can_go_back() { "◀" } else { "◁" };
    let forward = if effects.can_go_forward() { "▶" } else { "▷" };

    let title = Line::from(vec![
        Span::styled(" folio ", Style::default().fg(Color::Cyan).bold()),
        Span::styled(format!(" {} {} ", back, forward), Style::default().fg(Color::Gray)),
        Span::styled(
            format!(" {} ", effects.address),
            Style::default().bg(Color::Black).fg(Color::White),
        ),
        Span::raw(" "),
        Span::styled(app.locale().display_name(), Style::default().fg(Color::Yellow)),
        Span::raw(" "),
        Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::Gray),
        ),
    ]);

    let header = Paragraph::new(title).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(header, area);
}

fn render_nav_bar(app: &App, frame: &mut Frame, area: Rect) {
    let locale = app.locale();
    let state = app.nav.state();
    let current = match state.page {
        Page::Home => state.active_section.as_str(),
        page => page.as_str(),
    };

    let mut spans = Vec::new();
    for (index, item) in NAV_ITEMS.iter().enumerate() {
        let label = app.content.nav_label(item.id, locale);
        let key = nav_shortcut(index).map(String::from).unwrap_or_else(|| "s".to_string());

        let mut style = if item.target_id() == current {
            Style::default().fg(Color::Black).bg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::White)
        };
        if index == app.nav_cursor {
            style = style.add_modifier(Modifier::UNDERLINED);
        }

        spans.push(Span::styled(key, Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(format!(" {} ", label), style));
        spans.push(Span::raw(" "));
    }

    let nav = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(nav, area);
}

pub fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

fn home_lines(app: &App) -> Vec<Line<'static>> {
    app.home_lines().iter().map(HomeLine::to_line).collect()
}

/// Rows `line` takes in the document once word-wrapped at `width`.
pub fn rendered_height(line: Line<'static>, width: u16) -> u16 {
    let rows = document(vec![line]).line_count(width.max(1));
    u16::try_from(rows).unwrap_or(u16::MAX).max(1)
}

/// Documents are wrapped the same way whether they are drawn or measured.
fn document(lines: Vec<Line<'static>>) -> Paragraph<'static> {
    Paragraph::new(lines).wrap(Wrap { trim: false })
}

fn format_date(date: chrono::NaiveDate, locale: Locale) -> String {
    match locale {
        Locale::En => date.format("%B %-d, %Y").to_string(),
        Locale::Bn => locale.localize_digits(&date.format("%d/%m/%Y").to_string()),
    }
}

fn paper_lines(app: &App, paper: &ResearchPaper, lines: &mut Vec<Line<'static>>) {
    let locale = app.locale();
    let labels = &app.content.labels.paper;

    lines.push(Line::from(Span::styled(
        paper.title.get(locale).clone(),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )));

    let mut meta = vec![
        Span::raw(paper.author.get(locale).clone()),
        Span::raw(" · "),
        Span::raw(format_date(paper.date, locale)),
        Span::raw(" · "),
        Span::styled(paper.category.get(locale).clone(), Style::default().fg(Color::Magenta)),
    ];
    if let Some(doi) = &paper.doi {
        meta.push(Span::raw(" · "));
        meta.push(Span::styled(format!("DOI: {}", doi), Style::default().fg(Color::Gray)));
    }
    lines.push(Line::from(meta));
    lines.push(Line::default());

    lines.push(heading(labels.keywords.get(locale)));
    lines.push(Line::from(paper.keywords.get(locale).join(" · ")));
    lines.push(Line::default());

    let body = [
        (&labels.summary, &paper.summary),
        (&labels.introduction, &paper.introduction),
        (&labels.methodology, &paper.methodology),
        (&labels.findings, &paper.findings),
        (&labels.conclusion, &paper.conclusion),
    ];
    for (label, text) in body {
        lines.push(heading(label.get(locale)));
        lines.extend(text.get(locale).lines().map(parse_markdown_line));
        lines.push(Line::default());
    }

    lines.push(heading(labels.references.get(locale)));
    for (i, reference) in paper.references.get(locale).iter().enumerate() {
        let number = locale.localize_digits(&(i + 1).to_string());
        lines.push(Line::from(format!("{}. {}", number, reference)));
    }
    lines.push(Line::default());
}

fn research_lines(app: &App) -> Vec<Line<'static>> {
    let locale = app.locale();
    let mut lines = vec![
        heading(&app.content.labels.research_title.get(locale).to_uppercase()),
        Line::default(),
    ];
    for paper in &app.content.research {
        paper_lines(app, paper, &mut lines);
    }
    lines
}

fn blog_lines(app: &App) -> Vec<Line<'static>> {
    let locale = app.locale();
    let mut lines = vec![
        heading(&app.content.labels.blog_title.get(locale).to_uppercase()),
        Line::default(),
    ];

    if app.content.blog.is_empty() {
        lines.push(Line::from(Span::styled(
            app.content.labels.blog_empty.get(locale).clone(),
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        )));
        return lines;
    }

    for post in &app.content.blog {
        lines.push(Line::from(Span::styled(
            post.title.get(locale).clone(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format_date(post.date, locale),
            Style::default().fg(Color::Gray),
        )));
        lines.extend(post.body.get(locale).lines().map(parse_markdown_line));
        lines.push(Line::default());
    }
    lines
}

fn render_document(app: &mut App, frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    let title = match app.page() {
        Page::Home => String::new(),
        _ => format!(" Esc: {} ", app.content.labels.back_home.get(app.locale())),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title);

    let inner_area = block.inner(area);
    // One column stays free for the scrollbar
    let text_width = inner_area.width.saturating_sub(1);
    app.update_layout(text_width, inner_area.height);

    let paragraph = document(lines);
    app.total_body_lines = u16::try_from(paragraph.line_count(text_width.max(1))).unwrap_or(u16::MAX);

    let scroll = app.scroll_position().min(app.max_scroll());
    let paragraph = paragraph.scroll((scroll, 0));

    frame.render_widget(block, area);
    frame.render_widget(
        paragraph,
        Rect {
            width: text_width,
            ..inner_area
        },
    );

    if app.total_body_lines > app.body_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("^"))
            .end_symbol(Some("v"));

        let mut scrollbar_state = ScrollbarState::new(app.max_scroll() as usize).position(scroll as usize);

        frame.render_stateful_widget(
            scrollbar,
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

fn render_chat(app: &mut App, frame: &mut Frame, area: Rect) {
    let locale = app.locale();
    frame.render_widget(Clear, area);

    let [chat_area, input_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(area);

    app.chat_area = Some(area);
    app.chat_height = chat_area.height.saturating_sub(2);
    app.chat_width = chat_area.width.saturating_sub(2);

    let assistant = app.content.labels.chat_title.get(locale).clone();
    let chat_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta))
        .title(format!(" {} ", assistant));

    let chat_text = if app.chat.messages().is_empty() && !app.is_thinking() {
        Text::from(Span::styled(
            app.content.labels.chat_placeholder.get(locale).clone(),
            Style::default().fg(Color::Gray),
        ))
    } else {
        let mut lines: Vec<Line> = Vec::new();

        for (index, msg) in app.chat.messages().iter().enumerate() {
            match msg.role {
                Role::User => {
                    lines.push(Line::from(Span::styled(
                        "You:",
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    )));
                }
                Role::Assistant => {
                    lines.push(Line::from(Span::styled(
                        format!("{}:", assistant),
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    )));
                }
            }
            for line in app.chat.visible_content(index).lines() {
                lines.push(parse_markdown_line(line));
            }
            lines.push(Line::default());
        }

        if app.is_thinking() {
            lines.push(Line::from(Span::styled(
                format!("{}:", assistant),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )));
            // Animated ellipsis: cycles through ".", "..", "..."
            let dots = ".".repeat((app.animation_frame as usize) + 1);
            lines.push(Line::from(Span::styled(
                format!("{}{}", app.content.labels.chat_thinking.get(locale), dots),
                Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
            )));
        }

        Text::from(lines)
    };

    let chat = Paragraph::new(chat_text)
        .block(chat_block)
        .wrap(Wrap { trim: false })
        .scroll((app.chat_scroll, 0));
    frame.render_widget(chat, chat_area);

    let editing = app.input_mode == InputMode::Editing;
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if editing { Color::Yellow } else { Color::DarkGray }));

    // Keep the cursor visible by scrolling the input horizontally
    let inner_width = input_area.width.saturating_sub(2) as usize;
    let cursor_pos = app.chat_cursor;
    let scroll_offset = if inner_width == 0 {
        0
    } else if cursor_pos >= inner_width {
        cursor_pos - inner_width + 1
    } else {
        0
    };

    let visible_text: String = app
        .chat_input
        .chars()
        .skip(scroll_offset)
        .take(inner_width)
        .collect();

    let input = Paragraph::new(visible_text)
        .style(Style::default().fg(Color::Cyan))
        .block(input_block);
    frame.render_widget(input, input_area);

    if editing {
        let cursor_x = (cursor_pos - scroll_offset) as u16;
        frame.set_cursor_position((input_area.x + cursor_x + 1, input_area.y + 1));
    }
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let mode_style = match app.input_mode {
        InputMode::Normal => Style::default().bg(Color::Blue).fg(Color::White),
        InputMode::Editing => Style::default().bg(Color::Yellow).fg(Color::Black),
    };

    let mode_text = match (app.input_mode, app.page()) {
        (InputMode::Editing, _) => " ASK ",
        (_, Page::Home) => " HOME ",
        (_, Page::Research) => " RESEARCH ",
        (_, Page::Blog) => " BLOG ",
    };

    // Key style: dark background with bright text for visibility on both light/dark terminals
    let key_style = Style::default().bg(Color::DarkGray).fg(Color::White);
    let label_style = Style::default().bg(Color::Black).fg(Color::White);

    let pairs: Vec<(&str, &str)> = match app.input_mode {
        InputMode::Editing => vec![("Enter", "send"), ("↑/↓", "scroll"), ("Esc", "stop typing")],
        InputMode::Normal => {
            let mut pairs = vec![
                ("0-9", "go"),
                ("Tab", "select"),
                ("j/k", "scroll"),
                ("[ ]", "history"),
                ("L", "language"),
            ];
            if app.chat_open {
                pairs.extend([("i", "type"), ("Esc", "close chat")]);
            } else {
                pairs.push(("a", "assistant"));
                if app.page() != Page::Home {
                    pairs.push(("Esc", "home"));
                }
            }
            pairs.push(("q", "quit"));
            pairs
        }
    };

    let hints = pairs.into_iter().flat_map(|(key, label)| {
        [
            Span::styled(format!(" {} ", key), key_style),
            Span::styled(format!(" {} ", label), label_style),
        ]
    });

    let footer_content = Line::from(
        vec![
            Span::styled(mode_text, mode_style),
            Span::styled(" ", label_style),
        ]
        .into_iter()
        .chain(hints)
        .collect::<Vec<_>>(),
    );

    let footer = Paragraph::new(footer_content).style(Style::default().bg(Color::Black));
    frame.render_widget(footer, area);
}
