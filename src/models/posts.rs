use std::{borrow::Cow, fmt};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

pub const TITLE_MAX_LENGTH: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::One, Category::Two, Category::Three];

    pub fn code(&self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::One => "Option 1",
            Self::Two => "Option 2",
            Self::Three => "Option 3",
        }
    }

    pub fn from_code(code: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|category| category.code() == code)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown category code {0:?}")]
pub struct UnknownCategory(pub String);

impl TryFrom<String> for Category {
    type Error = UnknownCategory;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Category::from_code(&code).ok_or(UnknownCategory(code))
    }
}

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone, PartialEq)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub is_published: bool,
    #[sqlx(try_from = "String")]
    pub category: Category,
    pub created_at: DateTime<Utc>,
}

/// A submission that passed validation, ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub is_published: bool,
    pub category: Category,
}

/// Decodes an HTML checkbox value. Browsers send `on` for a ticked box and
/// omit the field otherwise.
pub fn decode_checkbox(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "off" | "false" | "0" => Some(false),
        "on" | "true" | "1" => Some(true),
        _ => None,
    }
}

fn invalid_boolean() -> ValidationError {
    ValidationError::new("invalid_boolean")
        .with_message(Cow::Borrowed("Enter a valid boolean value."))
}

fn invalid_choice(code: &str) -> ValidationError {
    ValidationError::new("invalid_choice").with_message(Cow::Owned(format!(
        "Select a valid choice. {code} is not one of the available choices."
    )))
}

// Postgres rejects 0x00 inside text columns.
fn validate_no_null_characters(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        return Err(ValidationError::new("null_characters")
            .with_message(Cow::Borrowed("Null characters are not allowed.")));
    }
    Ok(())
}

/// Raw form submission. Every field defaults to empty so that a missing
/// field is reported by validation rather than rejected by the extractor.
#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct PostForm {
    #[serde(default)]
    #[validate(
        length(
            min = 1,
            max = TITLE_MAX_LENGTH,
            message = "Title is required and must be at most 100 characters."
        ),
        custom(function = "validate_no_null_characters")
    )]
    pub title: String,
    #[serde(default)]
    #[validate(
        length(min = 1, message = "Content is required."),
        custom(function = "validate_no_null_characters")
    )]
    pub content: String,
    #[serde(default)]
    pub is_published: String,
    #[serde(default)]
    pub category: String,
}

impl PostForm {
    /// Strips surrounding whitespace from the free-text fields.
    pub fn normalized(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self.content = self.content.trim().to_string();
        self
    }

    /// Validates the submission and coerces it into typed values. The
    /// checkbox and category are checked by decoding them, so every failing
    /// field is reported together with the text-field errors.
    pub fn into_new_post(self) -> Result<NewPost, ValidationErrors> {
        let form = self.normalized();
        let mut errors = match form.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        let is_published = decode_checkbox(&form.is_published);
        if is_published.is_none() {
            errors.add("is_published", invalid_boolean());
        }
        let category = Category::from_code(&form.category);
        if category.is_none() {
            errors.add("category", invalid_choice(&form.category));
        }

        match (is_published, category) {
            (Some(is_published), Some(category)) if errors.field_errors().is_empty() => {
                Ok(NewPost {
                    title: form.title,
                    content: form.content,
                    is_published,
                    category,
                })
            }
            _ => Err(errors),
        }
    }
}
