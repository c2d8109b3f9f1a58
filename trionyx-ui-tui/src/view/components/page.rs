//! 页面区：当前路径与浏览历史

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染页面区
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let is_focused = !app.focus.is_panel() || !app.panel.visible;

    let title = if app.page.path.is_empty() {
        " … ".to_string()
    } else {
        format!(" {} ", app.page.path)
    };
    let block = Block::default()
        .title(title)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(is_focused));

    let mut lines = vec![
        Line::from(Span::styled(
            "History",
            Style::default().fg(c.muted).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (i, visit) in app.page.history.iter().enumerate() {
        let style = if i == 0 {
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.muted)
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}  ", visit.at.format("%H:%M:%S")),
                Style::default().fg(c.muted),
            ),
            Span::styled(visit.path.clone(), style),
        ]));
    }

    if app.page.history.is_empty() {
        lines.push(Line::from(Span::styled(
            "Type `:go <path>` to open a page",
            Style::default().fg(c.muted),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
