//! 对话框弹窗

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use trionyx_ui_core::DialogSize;

use crate::model::{App, DialogView, SPINNER};
use crate::util::html::{FieldKind, FormInput};
use crate::view::theme::{colors, Styles, ThemeColors};

/// 渲染对话框（如果有挂载的对话框）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(view) = &app.dialog.active else {
        return;
    };
    let c = colors();

    let mut lines = body_lines(view, &c);
    for (i, field) in view.fields.iter().enumerate() {
        if field.is_editable() {
            lines.extend(field_lines(field, view.focus == Some(i), &c));
        }
    }

    let frame_area = frame.area();
    let width = dialog_width(view.size, frame_area.width);
    // 正文 + 失败横幅(1) + 页脚(2) + 边框(2)
    let wanted = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(5);
    let height = if view.size == DialogSize::Full {
        frame_area.height.saturating_sub(2)
    } else {
        wanted.clamp(7, frame_area.height.saturating_sub(2).max(7))
    };
    let area = centered_rect(width, height, frame_area);

    // 清除背景
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", view.title))
        .title_alignment(Alignment::Center)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused))
        .style(Style::default().bg(c.bg).fg(c.fg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // 正文与字段
            Constraint::Length(1), // 失败横幅
            Constraint::Length(1), // 页脚
        ])
        .split(inner);

    let body = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(body, rows[0]);

    if let Some(failure) = &view.failure {
        let banner = Paragraph::new(format!(" ✗ {failure}"))
            .style(Style::default().fg(c.error).add_modifier(Modifier::BOLD));
        frame.render_widget(banner, rows[1]);
    }

    frame.render_widget(Paragraph::new(footer_line(view, app.tick)), rows[2]);
}

fn body_lines(view: &DialogView, c: &ThemeColors) -> Vec<Line<'static>> {
    if view.loading {
        return vec![Line::from(Span::styled(
            "Loading…",
            Style::default().fg(c.muted),
        ))];
    }
    let mut lines: Vec<Line<'static>> = view.body.lines().map(|l| Line::from(l.to_string())).collect();
    if !view.fields.is_empty() {
        lines.push(Line::from(""));
    }
    lines
}

/// 一个字段占两行：标签 + 值
fn field_lines(field: &FormInput, focused: bool, c: &ThemeColors) -> Vec<Line<'static>> {
    let value_style = if focused {
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };
    let cursor = if focused { "▎" } else { "" };

    let value = match &field.kind {
        FieldKind::Password => format!("  {}{cursor}", "•".repeat(field.value.chars().count().min(20))),
        FieldKind::Checkbox { checked } => {
            format!("  [{}]", if *checked { "x" } else { " " })
        }
        FieldKind::Select { options, selected } => {
            let label = options.get(*selected).map_or("", |(_, label)| label.as_str());
            if focused {
                format!("  ◀ {label} ▶")
            } else {
                format!("    {label}")
            }
        }
        FieldKind::Text | FieldKind::TextArea | FieldKind::Hidden => {
            format!("  {}{cursor}", field.value)
        }
    };

    vec![
        Line::from(Span::styled(field.label.clone(), Style::default().fg(c.muted))),
        Line::from(Span::styled(value, value_style)),
    ]
}

/// 页脚：关闭按钮与忙碌动画始终存在，提交按钮仅在有标签时出现
fn footer_line(view: &DialogView, tick: usize) -> Line<'static> {
    let mut spans = vec![
        Span::styled("Esc", Styles::hint_key()),
        Span::raw(" Close"),
    ];

    if view.busy || view.loading {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!("{} Working", SPINNER[tick % SPINNER.len()]),
            Style::default().fg(colors().warning),
        ));
    }

    if let Some(label) = &view.submit_label {
        spans.push(Span::raw("   "));
        spans.push(Span::styled("Enter", Styles::hint_key()));
        spans.push(Span::raw(format!(" {label}")));
        spans.push(Span::raw("   "));
        spans.push(Span::styled("Tab", Styles::hint_key()));
        spans.push(Span::raw(" Next field"));
    }

    Line::from(spans)
}

/// 对话框宽度档位
fn dialog_width(size: DialogSize, available: u16) -> u16 {
    let width = match size {
        DialogSize::Small => 44,
        DialogSize::Default => 64,
        DialogSize::Large => 90,
        DialogSize::ExtraLarge => 120,
        DialogSize::Full => available.saturating_sub(4),
    };
    width.min(available.saturating_sub(2))
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_follows_size_class() {
        assert!(dialog_width(DialogSize::Small, 200) < dialog_width(DialogSize::Default, 200));
        assert!(dialog_width(DialogSize::Large, 200) < dialog_width(DialogSize::ExtraLarge, 200));
        assert_eq!(dialog_width(DialogSize::Full, 200), 196);
        assert_eq!(dialog_width(DialogSize::ExtraLarge, 80), 78);
    }

    #[test]
    fn centered_rect_stays_inside() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_rect(60, 20, area);
        assert_eq!(rect, Rect::new(0, 0, 40, 10));
        assert_eq!(centered_rect(20, 4, area), Rect::new(10, 3, 20, 4));
    }
}
