//! 主布局

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::model::App;

use super::components;
use super::theme::colors;

/// 面板宽度（百分比）
const PANEL_WIDTH_PERCENT: u16 = 40;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏 / 命令行
        ])
        .split(size);

    let title_area = main_layout[0];
    let content_area = main_layout[1];
    let status_area = main_layout[2];

    // 渲染标题栏
    render_title_bar(app, frame, title_area);

    // 面板可见时左右分栏
    if app.panel.visible {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(100 - PANEL_WIDTH_PERCENT),
                Constraint::Percentage(PANEL_WIDTH_PERCENT),
            ])
            .split(content_area);
        components::page::render(app, frame, columns[0]);
        components::panel::render(app, frame, columns[1]);
    } else {
        components::page::render(app, frame, content_area);
    }

    // 渲染状态栏
    components::statusbar::render(app, frame, status_area);

    // 渲染对话框（在最上层）
    components::dialog::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(
        " Trionyx v{}  {}",
        env!("CARGO_PKG_VERSION"),
        app.base_url
    ))
    .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}
