//! 对话框状态
//!
//! 对话框的生命周期完全由 DialogController 决定，
//! 这里只是把 surface 回调（BackendEvent）落到可渲染的状态上。
//!
//!     DialogMounted   → DialogState::mount()
//!     DialogLoading   → 清空正文，显示加载中
//!     DialogBody      → html_to_text() + extract_form_fields()
//!     DialogWidgets   → 焦点移到第一个可编辑字段
//!     DialogFooter    → 提交按钮标签
//!     DialogBusy      → 禁止输入并显示动画
//!     DialogFailure   → 失败横幅，内容保持不变
//!     DialogUnmounted → DialogState::close()

use trionyx_ui_core::{DialogHandle, DialogSize, FormData};

use crate::util::html::{extract_form_fields, html_to_text, FieldKind, FormInput};

/// 忙碌动画帧
pub const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

/// 一个挂载中的对话框
#[derive(Debug, Clone)]
pub struct DialogView {
    pub handle: DialogHandle,
    pub size: DialogSize,
    pub title: String,
    /// 正文纯文本（表单控件已剔除）
    pub body: String,
    pub fields: Vec<FormInput>,
    /// 获得焦点的字段在 `fields` 中的索引
    pub focus: Option<usize>,
    /// `None` 时不显示提交按钮
    pub submit_label: Option<String>,
    pub loading: bool,
    pub busy: bool,
    pub failure: Option<String>,
}

impl DialogView {
    pub fn new(handle: DialogHandle, size: DialogSize) -> Self {
        Self {
            handle,
            size,
            title: String::new(),
            body: String::new(),
            fields: Vec::new(),
            focus: None,
            submit_label: None,
            loading: false,
            busy: false,
            failure: None,
        }
    }

    pub fn show_loading(&mut self) {
        self.loading = true;
        self.body.clear();
        self.fields.clear();
        self.focus = None;
    }

    /// 替换正文；新的一步清掉上一步的失败横幅
    pub fn set_body(&mut self, html: &str) {
        self.loading = false;
        self.failure = None;
        self.body = html_to_text(html);
        self.fields = extract_form_fields(html);
        self.focus = None;
    }

    /// 控件初始化：焦点移到第一个可编辑字段
    pub fn initialize_widgets(&mut self) {
        self.focus = self.fields.iter().position(FormInput::is_editable);
    }

    /// 请求结束时加载占位也一并结束，被拒绝的首个请求不会留下占位
    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
        if !busy {
            self.loading = false;
        }
    }

    pub fn show_failure(&mut self, message: &str) {
        self.loading = false;
        self.failure = Some(message.to_string());
    }

    /// 可以提交：有提交按钮且当前没有请求
    pub fn can_submit(&self) -> bool {
        self.submit_label.is_some() && !self.busy && !self.loading
    }

    /// 是否接受编辑输入
    pub fn accepts_input(&self) -> bool {
        !self.busy && !self.loading
    }

    pub fn focused_field(&self) -> Option<&FormInput> {
        self.focus.and_then(|i| self.fields.get(i))
    }

    pub fn next_field(&mut self) {
        self.move_focus(true);
    }

    pub fn prev_field(&mut self) {
        self.move_focus(false);
    }

    fn move_focus(&mut self, forward: bool) {
        let editable: Vec<usize> = self
            .fields
            .iter()
            .enumerate()
            .filter(|(_, f)| f.is_editable())
            .map(|(i, _)| i)
            .collect();
        if editable.is_empty() {
            return;
        }
        let position = self
            .focus
            .and_then(|current| editable.iter().position(|&i| i == current));
        let next = match (position, forward) {
            (None, _) => 0,
            (Some(p), true) => (p + 1) % editable.len(),
            (Some(p), false) => (p + editable.len() - 1) % editable.len(),
        };
        self.focus = Some(editable[next]);
    }

    /// 在当前字段输入字符；复选框上的空格切换勾选
    pub fn input(&mut self, ch: char) {
        let Some(field) = self.focus.and_then(|i| self.fields.get_mut(i)) else {
            return;
        };
        match &mut field.kind {
            FieldKind::Checkbox { checked } => {
                if ch == ' ' {
                    *checked = !*checked;
                }
            }
            FieldKind::Select { .. } | FieldKind::Hidden => {}
            FieldKind::Text | FieldKind::Password | FieldKind::TextArea => field.value.push(ch),
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focus.and_then(|i| self.fields.get_mut(i)) {
            if matches!(
                field.kind,
                FieldKind::Text | FieldKind::Password | FieldKind::TextArea
            ) {
                field.value.pop();
            }
        }
    }

    /// 切换下拉框选项
    pub fn cycle_option(&mut self, forward: bool) {
        let Some(field) = self.focus.and_then(|i| self.fields.get_mut(i)) else {
            return;
        };
        if let FieldKind::Select { options, selected } = &mut field.kind {
            if options.is_empty() {
                return;
            }
            *selected = if forward {
                (*selected + 1) % options.len()
            } else {
                (*selected + options.len() - 1) % options.len()
            };
            if let Some((value, _)) = options.get(*selected) {
                field.value.clone_from(value);
            }
        }
    }

    /// 按文档顺序收集要提交的字段
    pub fn form_data(&self) -> FormData {
        let mut form = FormData::new();
        for field in &self.fields {
            if let Some(value) = field.submitted_value() {
                form.push_text(field.name.clone(), value);
            }
        }
        form
    }
}

/// 对话框状态
#[derive(Debug, Default)]
pub struct DialogState {
    /// 当前挂载的对话框
    pub active: Option<DialogView>,
}

impl DialogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 挂载新对话框（旧的已由控制器卸载）
    pub fn mount(&mut self, handle: DialogHandle, size: DialogSize) {
        self.active = Some(DialogView::new(handle, size));
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }
}
