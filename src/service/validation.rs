//! Request validation for the book schema.

use crate::model::{Book, Violation};
use serde_json::{Map, Value};
use validator::ValidateUrl;

const YEAR_MAX: i64 = 9999;

pub struct BookValidator;

impl BookValidator {
    /// Validate a request body against the book schema. Every field is checked; all
    /// violations are returned together. Unknown fields are ignored.
    ///
    /// `pages` and `year` must be JSON integers: numeric strings such as `"264"` are rejected.
    pub fn validate(body: &Value) -> Result<Book, Vec<Violation>> {
        let obj = match body {
            Value::Object(m) => m,
            _ => return Err(vec![Violation::new("body", "body must be a JSON object")]),
        };

        let mut violations = Vec::new();
        let isbn = required_string(obj, "isbn", &mut violations);
        let amazon_url = required_string(obj, "amazon_url", &mut violations);
        let author = required_string(obj, "author", &mut violations);
        let language = required_string(obj, "language", &mut violations);
        let pages = required_integer(obj, "pages", 1, i32::MAX as i64, &mut violations);
        let publisher = required_string(obj, "publisher", &mut violations);
        let title = required_string(obj, "title", &mut violations);
        let year = required_integer(obj, "year", 1, YEAR_MAX, &mut violations);

        let amazon_url = amazon_url.and_then(|url| {
            if url.validate_url() && has_web_scheme(&url) {
                Some(url)
            } else {
                violations.push(Violation::new("amazon_url", "amazon_url must be a valid http(s) URL"));
                None
            }
        });

        match (isbn, amazon_url, author, language, pages, publisher, title, year) {
            (
                Some(isbn),
                Some(amazon_url),
                Some(author),
                Some(language),
                Some(pages),
                Some(publisher),
                Some(title),
                Some(year),
            ) if violations.is_empty() => Ok(Book {
                isbn,
                amazon_url,
                author,
                language,
                pages,
                publisher,
                title,
                year,
            }),
            _ => Err(violations),
        }
    }
}

/// Only `http` and `https` links are accepted; `javascript:` and similar schemes are not.
fn has_web_scheme(url: &str) -> bool {
    url.split_once(':')
        .map(|(scheme, _)| scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https"))
        .unwrap_or(false)
}

fn required_string(
    obj: &Map<String, Value>,
    field: &str,
    violations: &mut Vec<Violation>,
) -> Option<String> {
    match obj.get(field) {
        None | Some(Value::Null) => {
            violations.push(Violation::new(field, format!("{} is required", field)));
            None
        }
        Some(Value::String(s)) if s.trim().is_empty() => {
            violations.push(Violation::new(field, format!("{} must not be empty", field)));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            violations.push(Violation::new(field, format!("{} must be a string", field)));
            None
        }
    }
}

fn required_integer(
    obj: &Map<String, Value>,
    field: &str,
    min: i64,
    max: i64,
    violations: &mut Vec<Violation>,
) -> Option<i32> {
    let v = match obj.get(field) {
        None | Some(Value::Null) => {
            violations.push(Violation::new(field, format!("{} is required", field)));
            return None;
        }
        Some(v) => v,
    };
    let Some(n) = v.as_i64() else {
        violations.push(Violation::new(field, format!("{} must be an integer", field)));
        return None;
    };
    if n < min || n > max {
        violations.push(Violation::new(
            field,
            format!("{} must be between {} and {}", field, min, max),
        ));
        return None;
    }
    i32::try_from(n).ok()
}
