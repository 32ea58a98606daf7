//! Application rendering.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::theme::Theme;
use crate::ui::{EntryList, HelpOverlay};

use super::state::{Mode, NavigatorState, StatusKind};

/// Render context containing all the state needed for rendering.
pub struct RenderContext<'a> {
    pub state: &'a NavigatorState,
    pub theme: &'a Theme,
    pub show_help: bool,
}

/// Main render function for the application.
pub fn render_app(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let base_style = Style::default()
        .bg(ctx.theme.background)
        .fg(ctx.theme.foreground);
    buf.set_style(area, base_style);

    // Layout: header, search bar, listing, status, footer
    let [header, search, content, status, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(ctx, header, buf);
    render_search_bar(ctx, search, buf);
    render_listing(ctx, content, buf);
    render_status(ctx, status, buf);
    render_footer(ctx, footer, buf);

    if ctx.show_help {
        HelpOverlay::new(ctx.theme).render(area, buf);
    }
}

fn render_header(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let title = Span::styled(
        " CODE COLLECTOR ",
        ctx.theme.title.add_modifier(Modifier::BOLD),
    );
    let path = Span::styled(
        format!(" 📂 {} ", ctx.state.current_path().display()),
        ctx.theme.header,
    );

    Paragraph::new(Line::from(vec![title, path]))
        .style(ctx.theme.header)
        .render(area, buf);
}

fn render_search_bar(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let query = ctx.state.search_query();
    let line = match ctx.state.mode() {
        Mode::Searching => Line::from(vec![
            Span::styled(" Search: ", ctx.theme.search_label),
            Span::styled(query.to_string(), ctx.theme.search_input),
            Span::styled("█", ctx.theme.search_cursor),
        ]),
        _ if !query.is_empty() => Line::from(vec![
            Span::styled(" Filter: ", ctx.theme.search_label),
            Span::styled(query.to_string(), ctx.theme.search_input),
            Span::styled(" [Esc to clear]", Style::default().fg(ctx.theme.muted)),
        ]),
        _ => Line::styled(
            " Ctrl-w or / to search",
            Style::default().fg(ctx.theme.muted),
        ),
    };

    Paragraph::new(line).render(area, buf);
}

fn render_listing(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let entries = ctx.state.visible_entries();
    let title = if ctx.state.search_query().is_empty() {
        format!(" {} items ", entries.len())
    } else {
        format!(" {} of {} ", entries.len(), ctx.state.all_entries().len())
    };

    EntryList::new(entries, ctx.state.cursor(), ctx.theme)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(ctx.theme.border)
                .title(title)
                .title_style(ctx.theme.title),
        )
        .render(area, buf);
}

fn render_status(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let Some(status) = ctx.state.status() else {
        return;
    };

    let color = match status.kind {
        StatusKind::Info => ctx.theme.info,
        StatusKind::Success => ctx.theme.success,
        StatusKind::Failure => ctx.theme.error,
    };

    Paragraph::new(Line::styled(
        format!(" {}", status.text),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .render(area, buf);
}

fn render_footer(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let keys: Vec<(&str, &str)> = match ctx.state.mode() {
        Mode::Searching => vec![("Enter/Esc", "Done"), ("Ctrl-c", "Quit")],
        _ => vec![
            ("j/k", "Nav"),
            ("Enter", "Open"),
            ("/", "Search"),
            ("r", "Collect"),
            ("?", "Help"),
            ("q", "Quit"),
        ],
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", ctx.state.mode()),
        Style::default()
            .fg(ctx.theme.background)
            .bg(ctx.theme.info)
            .add_modifier(Modifier::BOLD),
    )];
    spans.extend(keys.iter().flat_map(|(key, desc)| {
        [
            Span::styled(format!(" {} ", key), ctx.theme.help_key),
            Span::styled(format!("{} ", desc), ctx.theme.help_desc),
        ]
    }));

    Paragraph::new(Line::from(spans))
        .style(ctx.theme.footer)
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use codedump_core::Entry;

    use crate::app::state::StatusMessage;

    fn screen_text(buf: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn render(state: &NavigatorState, show_help: bool) -> String {
        let theme = Theme::default();
        let ctx = RenderContext {
            state,
            theme: &theme,
            show_help,
        };
        let area = Rect::new(0, 0, 60, 40);
        let mut buf = Buffer::empty(area);
        render_app(&ctx, area, &mut buf);
        screen_text(&buf)
    }

    fn sample_state() -> NavigatorState {
        NavigatorState::from_entries(
            PathBuf::from("/work/demo"),
            vec![
                Entry::parent_ref(),
                Entry::directory("src"),
                Entry::file("main.rs"),
            ],
            18,
        )
    }

    #[test]
    fn test_browse_screen() {
        let text = render(&sample_state(), false);
        assert!(text.contains("CODE COLLECTOR"));
        assert!(text.contains("/work/demo"));
        assert!(text.contains("> .."));
        assert!(text.contains("src/"));
        assert!(text.contains("BROWSE"));
    }

    #[test]
    fn test_search_and_status_lines() {
        let mut state = sample_state();
        state.enter_search();
        state.push_query_char('m');
        state.set_status(StatusMessage::success("✅ Created: dump_demo.txt"));

        let text = render(&state, false);
        assert!(text.contains("Search: m"));
        assert!(text.contains("SEARCH"));
        assert!(!text.contains("src/"));

        state.finish_search();
        let text = render(&state, false);
        assert!(text.contains("Filter: m [Esc to clear]"));
        assert!(text.contains("Created: dump_demo.txt"));
    }

    #[test]
    fn test_help_overlay() {
        let text = render(&sample_state(), true);
        assert!(text.contains("Navigation"));
        assert!(text.contains("Commands"));
    }
}
