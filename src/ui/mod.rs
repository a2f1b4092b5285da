use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::form::{Entry, FormState, MAX_ENTRIES};
use crate::validate::Verdict;

pub const URL_PLACEHOLDER: &str = "e.g http://drive.google.com/some-link";

pub struct UiContext<'a> {
    pub title: &'a str,
    pub heading: &'a str,
    pub blurb: &'a str,
    pub form: &'a FormState,
    pub status_message: &'a str,
    pub help: Option<&'a str>,
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(7),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], &ctx);
    render_body(frame, chunks[1], &ctx);
    render_footer(frame, chunks[2], &ctx);
}

fn render_header(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let title = Paragraph::new(Line::from(Span::styled(
        ctx.title.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_body(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let wrap_width = area.width.saturating_sub(4).max(20) as usize;
    let blurb_lines = textwrap::wrap(ctx.blurb, wrap_width);
    let intro_height = blurb_lines.len().saturating_add(1).min(u16::MAX as usize) as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(intro_height), Constraint::Min(4)])
        .split(area);

    let mut intro = vec![Line::from(Span::styled(
        ctx.heading.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for line in blurb_lines {
        intro.push(Line::from(Span::styled(
            line.into_owned(),
            Style::default().fg(Color::Gray),
        )));
    }
    frame.render_widget(Paragraph::new(intro), chunks[0]);

    render_entries(frame, chunks[1], ctx);
}

fn render_entries(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let form = ctx.form;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("URLs [{}/{}]", form.list().len(), MAX_ENTRIES));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut cursor: Option<CursorHint> = None;
    let mut focused_end = 0usize;

    for (index, entry) in form.list().iter().enumerate() {
        let focused = index == form.cursor();
        let verdict = form.entry_verdict(entry);
        let render = build_entry_render(entry, index, verdict, focused, form.can_remove());
        if focused {
            if let Some(mut hint) = render.cursor {
                hint.line_offset += lines.len();
                cursor = Some(hint);
            }
        }
        lines.extend(render.lines);
        lines.push(Line::default());
        if focused {
            focused_end = lines.len();
        }
    }

    let height = inner.height as usize;
    let total = lines.len();
    let mut offset = 0usize;
    if total > height {
        if focused_end > height {
            offset = focused_end - height;
        }
        offset = offset.min(total - height);
    }

    let paragraph = Paragraph::new(lines).scroll((offset.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(paragraph, inner);

    if let Some(hint) = cursor
        && hint.line_offset >= offset
        && hint.line_offset - offset < height
    {
        let cursor_y = inner.y.saturating_add((hint.line_offset - offset) as u16);
        let cursor_x = inner.x.saturating_add(hint.column);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

fn render_footer(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let mut status = ctx.status_message.to_string();
    status.push_str(&format!(
        " • {}/{} URLs",
        ctx.form.list().len(),
        MAX_ENTRIES
    ));
    let errors = ctx.form.error_count();
    if errors > 0 {
        status.push_str(&format!(" • {errors} error(s)"));
    }
    if ctx.form.submission_ready() {
        status.push_str(" • ready to create");
    }

    let status_widget = Paragraph::new(status)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status_widget, chunks[0]);

    let help_widget = Paragraph::new(ctx.help.unwrap_or(" ").to_string())
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Actions"));
    frame.render_widget(help_widget, chunks[1]);
}

struct EntryRender {
    lines: Vec<Line<'static>>,
    cursor: Option<CursorHint>,
}

struct CursorHint {
    line_offset: usize,
    column: u16,
}

fn build_entry_render(
    entry: &Entry,
    index: usize,
    verdict: Verdict,
    focused: bool,
    can_remove: bool,
) -> EntryRender {
    let mut lines = Vec::new();
    let error = verdict.message();

    let label_style = if error.is_some() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    };
    lines.push(Line::from(Span::styled(
        format!("Video/Folder URL {}", index + 1),
        label_style,
    )));

    let blank = entry.url.is_empty();
    let display = if blank {
        URL_PLACEHOLDER.to_string()
    } else {
        entry.url.clone()
    };
    let value_style = if blank {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    } else {
        Style::default().fg(Color::White)
    };

    let mut cursor = None;
    if focused {
        let visible_width = UnicodeWidthStr::width(display.as_str()) + 2;
        let border_line = "─".repeat(visible_width);
        let border_style = Style::default().fg(Color::Yellow);

        lines.push(Line::from(Span::styled(
            format!("┌{border_line}┐"),
            border_style,
        )));
        let value_line_index = lines.len();
        lines.push(Line::from(vec![
            Span::styled("│ ", border_style),
            Span::styled(display, value_style),
            Span::styled(" │", border_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("└{border_line}┘"),
            border_style,
        )));

        let text_width = if blank {
            0
        } else {
            UnicodeWidthStr::width(entry.url.as_str()).min(u16::MAX as usize - 2)
        };
        cursor = Some(CursorHint {
            line_offset: value_line_index,
            column: 2 + text_width as u16,
        });
    } else {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(display, value_style),
        ]));
    }

    if let Some(message) = error {
        lines.push(Line::from(Span::styled(
            format!("  ⚠ {message}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    if focused && can_remove {
        lines.push(Line::from(Span::styled(
            "  Ctrl+D removes this URL",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    EntryRender { lines, cursor }
}
