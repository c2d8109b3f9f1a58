//! 状态栏与命令行

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::App;
use crate::util::html::FieldKind;
use crate::view::theme::{colors, Styles};

/// 渲染状态栏；命令行聚焦时改为渲染输入
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    if app.command_line.active {
        let line = Line::from(vec![
            Span::styled(":", Styles::hint_key()),
            Span::raw(app.command_line.input.clone()),
            Span::raw("▎"),
        ]);
        frame.render_widget(Paragraph::new(line).style(Styles::statusbar()), area);
        return;
    }

    let mut spans = Vec::new();
    for (i, (key, desc)) in get_hints(app).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 状态消息右对齐
    if let Some(status) = &app.status_message {
        let used: usize = spans.iter().map(|s| s.content.width()).sum();
        let text = format!(" {} ", status.text);
        let padding = usize::from(area.width).saturating_sub(used + text.width());
        spans.push(Span::raw(" ".repeat(padding.max(1))));
        spans.push(Span::styled(
            text,
            Style::default()
                .bg(colors().bg)
                .fg(colors().notify(status.level)),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if let Some(view) = &app.dialog.active {
        let mut hints = vec![("Tab", "Next field")];
        if matches!(
            view.focused_field().map(|f| &f.kind),
            Some(FieldKind::Select { .. })
        ) {
            hints.push(("←→", "Option"));
        }
        if view.submit_label.is_some() {
            hints.push(("Enter", "Submit"));
        }
        hints.push(("Esc", "Close"));
        return hints;
    }

    let mut hints = vec![(":", "Command")];
    if app.panel.visible {
        hints.push(("Ctrl+p", "Switch"));
        if app.focus.is_panel() {
            hints.push(("↑↓", "Select"));
            hints.push(("Enter", "Run"));
            hints.push(("x", "Close panel"));
        }
        hints.push(("Alt+r", "Reload"));
    }
    hints.push(("q", "Quit"));
    hints
}
