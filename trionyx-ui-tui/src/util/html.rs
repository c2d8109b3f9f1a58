//! 服务端 HTML 片段的终端化处理
//!
//! 对话框与面板的内容都是服务端渲染好的 HTML 片段。
//! 终端里既不能渲染样式，也不需要：
//!     - `html_to_text()`         去标签，保留段落换行，解码常见实体
//!     - `extract_form_fields()`  按文档顺序提取 input / textarea / select

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

static SCRIPT_STYLE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?is)<(script|style)\b.*?</(script|style)\s*>").ok());

static FORM_CONTROLS: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?is)<select\b[^>]*>.*?</select\s*>|<textarea\b[^>]*>.*?</textarea\s*>").ok()
});

static BLOCK_BREAK: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)<br\s*/?>|</(p|div|li|tr|h[1-6]|table|ul|ol|fieldset|legend)\s*>").ok()
});

static TAG: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").ok());

static CONTROL: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?is)<input\b(?P<input>[^>]*)>|<textarea\b(?P<ta_attrs>[^>]*)>(?P<ta_body>.*?)</textarea\s*>|<select\b(?P<sel_attrs>[^>]*)>(?P<sel_body>.*?)</select\s*>",
    )
    .ok()
});

static OPTION: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?is)<option\b(?P<attrs>[^>]*)>(?P<label>[^<]*)").ok()
});

static LABEL: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?is)<label\b(?P<attrs>[^>]*)>(?P<text>.*?)</label\s*>").ok()
});

static ATTRIBUTE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)(?P<name>[A-Za-z_:][-A-Za-z0-9_:.]*)(\s*=\s*("(?P<dq>[^"]*)"|'(?P<sq>[^']*)'|(?P<bare>[^\s"'>/]+)))?"#,
    )
    .ok()
});

/// 表单控件类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Password,
    Hidden,
    TextArea,
    Checkbox { checked: bool },
    /// `(value, label)` 列表与当前选中项
    Select {
        options: Vec<(String, String)>,
        selected: usize,
    },
}

/// 从 HTML 中提取的一个表单控件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub value: String,
}

impl FormInput {
    /// 可见且可编辑（hidden 字段只随表单提交）
    pub fn is_editable(&self) -> bool {
        !matches!(self.kind, FieldKind::Hidden)
    }

    /// 提交时的值，`None` 表示不提交（未勾选的复选框）
    pub fn submitted_value(&self) -> Option<String> {
        match &self.kind {
            FieldKind::Checkbox { checked: false } => None,
            FieldKind::Checkbox { checked: true } if self.value.is_empty() => Some("on".to_string()),
            FieldKind::Select { options, selected } => {
                options.get(*selected).map(|(value, _)| value.clone())
            }
            _ => Some(self.value.clone()),
        }
    }
}

/// 将 HTML 片段转换为纯文本
pub fn html_to_text(html: &str) -> String {
    let text = replace(&SCRIPT_STYLE, html, "");
    let text = replace(&FORM_CONTROLS, &text, "");
    let text = replace(&BLOCK_BREAK, &text, "\n");
    let text = replace(&TAG, &text, "");
    let text = decode_entities(&text);

    let mut lines: Vec<String> = Vec::new();
    for line in text.lines() {
        let line = line.split_whitespace().collect::<Vec<_>>().join(" ");
        if line.is_empty() && lines.last().is_none_or(String::is_empty) {
            continue;
        }
        lines.push(line);
    }
    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines.join("\n")
}

/// 按文档顺序提取表单控件
pub fn extract_form_fields(html: &str) -> Vec<FormInput> {
    let Some(control) = CONTROL.as_ref() else {
        return Vec::new();
    };
    let labels = collect_labels(html);

    control
        .captures_iter(html)
        .filter_map(|caps| {
            if let Some(attrs) = caps.name("input") {
                parse_input(attrs.as_str(), &labels)
            } else if let Some(attrs) = caps.name("ta_attrs") {
                let body = caps.name("ta_body").map_or("", |m| m.as_str());
                parse_textarea(attrs.as_str(), body, &labels)
            } else {
                let attrs = caps.name("sel_attrs").map_or("", |m| m.as_str());
                let body = caps.name("sel_body").map_or("", |m| m.as_str());
                parse_select(attrs, body, &labels)
            }
        })
        .collect()
}

fn parse_input(raw: &str, labels: &HashMap<String, String>) -> Option<FormInput> {
    let attrs = parse_attributes(raw);
    let name = attrs.get("name")?.clone();
    let value = attrs.get("value").cloned().unwrap_or_default();
    let kind = match attrs
        .get("type")
        .map_or("text", String::as_str)
        .to_ascii_lowercase()
        .as_str()
    {
        "hidden" => FieldKind::Hidden,
        "password" => FieldKind::Password,
        "checkbox" | "radio" => FieldKind::Checkbox {
            checked: attrs.contains_key("checked"),
        },
        // 终端里无法选择文件或触发按钮
        "submit" | "button" | "reset" | "image" | "file" => return None,
        _ => FieldKind::Text,
    };
    Some(FormInput {
        label: label_for(&attrs, &name, labels),
        name,
        kind,
        value,
    })
}

fn parse_textarea(raw: &str, body: &str, labels: &HashMap<String, String>) -> Option<FormInput> {
    let attrs = parse_attributes(raw);
    let name = attrs.get("name")?.clone();
    Some(FormInput {
        label: label_for(&attrs, &name, labels),
        name,
        kind: FieldKind::TextArea,
        value: decode_entities(body.trim_start_matches(['\r', '\n'])),
    })
}

fn parse_select(raw: &str, body: &str, labels: &HashMap<String, String>) -> Option<FormInput> {
    let attrs = parse_attributes(raw);
    let name = attrs.get("name")?.clone();

    let mut options = Vec::new();
    let mut selected = 0;
    if let Some(option) = OPTION.as_ref() {
        for caps in option.captures_iter(body) {
            let option_attrs = parse_attributes(caps.name("attrs").map_or("", |m| m.as_str()));
            let label = html_to_text(caps.name("label").map_or("", |m| m.as_str()));
            let value = option_attrs.get("value").cloned().unwrap_or_else(|| label.clone());
            if option_attrs.contains_key("selected") {
                selected = options.len();
            }
            options.push((value, label));
        }
    }

    let value = options
        .get(selected)
        .map(|(value, _)| value.clone())
        .unwrap_or_default();
    Some(FormInput {
        label: label_for(&attrs, &name, labels),
        name,
        kind: FieldKind::Select { options, selected },
        value,
    })
}

/// `for` 属性 → 标签文本
fn collect_labels(html: &str) -> HashMap<String, String> {
    let Some(label) = LABEL.as_ref() else {
        return HashMap::new();
    };
    label
        .captures_iter(html)
        .filter_map(|caps| {
            let attrs = parse_attributes(caps.name("attrs").map_or("", |m| m.as_str()));
            let target = attrs.get("for")?.clone();
            let text = html_to_text(caps.name("text").map_or("", |m| m.as_str()));
            Some((target, text.trim_end_matches(['*', ':', ' ']).to_string()))
        })
        .collect()
}

fn label_for(attrs: &HashMap<String, String>, name: &str, labels: &HashMap<String, String>) -> String {
    attrs
        .get("id")
        .and_then(|id| labels.get(id))
        .filter(|label| !label.is_empty())
        .or_else(|| attrs.get("placeholder"))
        .cloned()
        .unwrap_or_else(|| name.to_string())
}

fn parse_attributes(raw: &str) -> HashMap<String, String> {
    let Some(attribute) = ATTRIBUTE.as_ref() else {
        return HashMap::new();
    };
    attribute
        .captures_iter(raw)
        .filter_map(|caps| {
            let name = caps.name("name")?.as_str().to_ascii_lowercase();
            let value = caps
                .name("dq")
                .or_else(|| caps.name("sq"))
                .or_else(|| caps.name("bare"))
                .map_or_else(String::new, |m| decode_entities(m.as_str()));
            Some((name, value))
        })
        .collect()
}

fn replace(re: &LazyLock<Option<Regex>>, text: &str, with: &str) -> String {
    match re.as_ref() {
        Some(re) => re.replace_all(text, with).into_owned(),
        None => text.to_string(),
    }
}

/// 解码常见 HTML 实体
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&times;", "×")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_FORM: &str = r#"
        <form method="POST">
          <input type="hidden" name="csrfmiddlewaretoken" value="abc">
          <div class="form-group">
            <label for="id_email">Email address*</label>
            <input type="email" name="email" value="info@trionyx.com" id="id_email">
          </div>
          <label for="id_is_active">Active</label>
          <input type="checkbox" name="is_active" id="id_is_active" checked>
          <label for="id_bio">Bio</label>
          <textarea name="bio" id="id_bio">
Hello &amp; welcome</textarea>
          <select name="language" id="id_language">
            <option value="en">English</option>
            <option value="nl" selected>Dutch</option>
          </select>
          <input type="submit" value="Save">
        </form>"#;

    #[test]
    fn text_keeps_paragraphs() {
        let text = html_to_text("<h4>Delete</h4><p>Are you sure you want to delete <b>User&nbsp;1</b>?</p><br><p></p>");
        assert_eq!(text, "Delete\nAre you sure you want to delete User 1?");
    }

    #[test]
    fn text_drops_scripts_and_form_controls() {
        let text = html_to_text(
            "<p>Pick one</p><script>var x = '<p>';</script><select name=\"a\"><option>One</option></select>",
        );
        assert_eq!(text, "Pick one");
    }

    #[test]
    fn extracts_fields_in_document_order() {
        let fields = extract_form_fields(USER_FORM);
        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            ["csrfmiddlewaretoken", "email", "is_active", "bio", "language"]
        );
    }

    #[test]
    fn field_labels_and_values() {
        let fields = extract_form_fields(USER_FORM);

        assert_eq!(fields[0].kind, FieldKind::Hidden);
        assert!(!fields[0].is_editable());

        assert_eq!(fields[1].label, "Email address");
        assert_eq!(fields[1].value, "info@trionyx.com");
        assert_eq!(fields[1].kind, FieldKind::Text);

        assert_eq!(fields[2].kind, FieldKind::Checkbox { checked: true });
        assert_eq!(fields[2].submitted_value().as_deref(), Some("on"));

        assert_eq!(fields[3].value, "Hello & welcome");

        assert_eq!(fields[4].label, "language");
        assert_eq!(fields[4].submitted_value().as_deref(), Some("nl"));
    }

    #[test]
    fn unchecked_checkbox_is_not_submitted() {
        let fields = extract_form_fields(r#"<input type="checkbox" name="notify" value="1">"#);
        assert_eq!(fields[0].submitted_value(), None);
    }

    #[test]
    fn inputs_without_name_are_skipped() {
        assert!(extract_form_fields(r#"<input type="text" placeholder="search">"#).is_empty());
    }

    #[test]
    fn single_quoted_and_bare_attributes() {
        let fields = extract_form_fields("<input type=password name='secret' value=s3cr3t>");
        assert_eq!(fields[0].kind, FieldKind::Password);
        assert_eq!(fields[0].value, "s3cr3t");
    }
}
