use serde::Serialize;
use validator::ValidationErrors;

use super::posts::{decode_checkbox, Category, PostForm, TITLE_MAX_LENGTH};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Widget {
    Text,
    Textarea,
    Checkbox,
    Select,
}

#[derive(Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub widget: Widget,
    pub required: bool,
    pub max_length: Option<u64>,
    pub choices: &'static [Category],
}

/// Field layout of the post form, in display order.
pub static POST_FORM_SCHEMA: [FieldSpec; 4] = [
    FieldSpec {
        name: "title",
        label: "Title",
        widget: Widget::Text,
        required: true,
        max_length: Some(TITLE_MAX_LENGTH),
        choices: &[],
    },
    FieldSpec {
        name: "content",
        label: "Content",
        widget: Widget::Textarea,
        required: true,
        max_length: None,
        choices: &[],
    },
    FieldSpec {
        name: "is_published",
        label: "Is published",
        widget: Widget::Checkbox,
        required: false,
        max_length: None,
        choices: &[],
    },
    FieldSpec {
        name: "category",
        label: "Category",
        widget: Widget::Select,
        required: true,
        max_length: None,
        choices: &Category::ALL,
    },
];

#[derive(Debug, Serialize)]
pub struct ChoiceView {
    pub code: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// One form field as handed to the template: its schema plus the value the
/// user entered and any errors attached to it.
#[derive(Debug, Serialize)]
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub widget: Widget,
    pub required: bool,
    pub max_length: Option<u64>,
    pub value: String,
    pub checked: bool,
    pub choices: Vec<ChoiceView>,
    pub errors: Vec<String>,
}

fn field_value<'a>(form: &'a PostForm, name: &str) -> &'a str {
    match name {
        "title" => &form.title,
        "content" => &form.content,
        "is_published" => &form.is_published,
        "category" => &form.category,
        _ => "",
    }
}

pub fn form_fields(form: &PostForm, errors: Option<&ValidationErrors>) -> Vec<FieldView> {
    let field_errors = errors.map(|errors| errors.field_errors());

    POST_FORM_SCHEMA
        .iter()
        .map(|spec| {
            let value = field_value(form, spec.name);
            let errors = field_errors
                .as_ref()
                .and_then(|field_errors| field_errors.get(spec.name))
                .map(|errors| {
                    errors
                        .iter()
                        .map(|error| match &error.message {
                            Some(message) => message.to_string(),
                            None => format!("Invalid value ({}).", error.code),
                        })
                        .collect()
                })
                .unwrap_or_default();

            FieldView {
                name: spec.name,
                label: spec.label,
                widget: spec.widget,
                required: spec.required,
                max_length: spec.max_length,
                value: value.to_string(),
                checked: spec.widget == Widget::Checkbox
                    && decode_checkbox(value).unwrap_or(false),
                choices: spec
                    .choices
                    .iter()
                    .map(|category| ChoiceView {
                        code: category.code(),
                        label: category.label(),
                        selected: category.code() == value,
                    })
                    .collect(),
                errors,
            }
        })
        .collect()
}
