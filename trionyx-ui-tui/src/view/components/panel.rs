//! 侧边面板

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::model::App;
use crate::util::html::html_to_text;
use crate::view::theme::{Styles, ThemeColors};

/// 渲染面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let Some(content) = &app.panel.content else {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border(false));
        frame.render_widget(Paragraph::new(" Loading…").block(block), area);
        return;
    };

    let c = ThemeColors::for_panel(content.theme);
    let is_focused = app.focus.is_panel();

    let block = Block::default()
        .title(format!(" {} ", content.title))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Styles::border(is_focused))
        .style(Style::default().bg(c.bg).fg(c.fg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fixed = html_to_text(&content.fixed_content);
    let fixed_height = if fixed.is_empty() {
        0
    } else {
        u16::try_from(fixed.lines().count() + 1).unwrap_or(u16::MAX)
    };
    // 没有操作时隐藏菜单
    let actions_height = if content.has_actions() {
        u16::try_from(content.actions.len() + 2).unwrap_or(u16::MAX)
    } else {
        0
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(fixed_height),
            Constraint::Min(1),
            Constraint::Length(actions_height),
        ])
        .split(inner);

    if fixed_height > 0 {
        let paragraph = Paragraph::new(fixed)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(c.border)));
        frame.render_widget(paragraph, rows[0]);
    }

    let body = Paragraph::new(html_to_text(&content.content)).wrap(Wrap { trim: false });
    frame.render_widget(body, rows[1]);

    if actions_height > 0 {
        render_actions(app, frame, rows[2], &c);
    }
}

/// 渲染操作菜单
fn render_actions(app: &App, frame: &mut Frame, area: Rect, c: &ThemeColors) {
    let Some(content) = &app.panel.content else {
        return;
    };
    let width = usize::from(area.width.saturating_sub(2));

    let items: Vec<ListItem> = content
        .actions
        .iter()
        .map(|action| {
            if action.divider && action.label.is_empty() {
                return ListItem::new(Line::from(Span::styled(
                    "─".repeat(width),
                    Style::default().fg(c.border),
                )));
            }
            let style = if action.is_runnable() {
                Style::default().fg(c.action(action.style))
            } else {
                Style::default().fg(c.muted)
            };
            ListItem::new(Line::from(Span::styled(format!("  {}", action.label), style)))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Actions ")
                .borders(Borders::TOP)
                .border_style(Style::default().fg(c.border)),
        )
        .highlight_style(
            Style::default()
                .bg(c.selected_bg)
                .fg(c.selected_fg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶");

    let mut state = ListState::default();
    state.select(app.panel.selected);

    frame.render_stateful_widget(list, area, &mut state);
}
