//! Front-matter rendering
//!
//! Each variant is an ordered table of fields. A field renders to
//! `Some(value)` when it should be emitted and `None` when it is omitted, so
//! omission never leaves a blank line and emitted fields keep table order.
//!
//! Values are written verbatim: no quoting or escaping is applied, so a value
//! containing a newline or a colon produces front matter that a YAML parser
//! may read differently.

use super::FrontMatterVariant;
use crate::domain::Record;

const DELIMITER: &str = "---";

/// A front-matter field: its key and how to render it from a record
struct FieldSpec {
    name: &'static str,
    render: fn(&Record) -> Option<String>,
}

const FIXED_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "title",
        render: title,
    },
    FieldSpec {
        name: "categories",
        render: categories_flat,
    },
    FieldSpec {
        name: "tags",
        render: tags_flat,
    },
    FieldSpec {
        name: "publishedAt",
        render: published_at,
    },
    FieldSpec {
        name: "revisedAt",
        render: revised_at,
    },
];

const OPTIONAL_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "title",
        render: title,
    },
    FieldSpec {
        name: "excerpt",
        render: excerpt,
    },
    FieldSpec {
        name: "categories",
        render: categories_list,
    },
    FieldSpec {
        name: "tags",
        render: tags_list,
    },
    FieldSpec {
        name: "publishedAt",
        render: published_at,
    },
    FieldSpec {
        name: "revisedAt",
        render: revised_at,
    },
];

fn title(r: &Record) -> Option<String> {
    Some(r.title.clone())
}

fn excerpt(r: &Record) -> Option<String> {
    r.excerpt.clone()
}

fn published_at(r: &Record) -> Option<String> {
    Some(r.published_at.clone())
}

fn revised_at(r: &Record) -> Option<String> {
    Some(r.revised_at.clone())
}

fn categories_flat(r: &Record) -> Option<String> {
    Some(join_flat(r.categories.as_deref()))
}

fn tags_flat(r: &Record) -> Option<String> {
    Some(join_flat(r.tags.as_deref()))
}

fn categories_list(r: &Record) -> Option<String> {
    bracketed(r.categories.as_deref())
}

fn tags_list(r: &Record) -> Option<String> {
    bracketed(r.tags.as_deref())
}

fn fields_for(variant: FrontMatterVariant) -> &'static [FieldSpec] {
    match variant {
        FrontMatterVariant::Fixed => FIXED_FIELDS,
        FrontMatterVariant::Optional => OPTIONAL_FIELDS,
    }
}

/// `a,b,c`, or an empty string when absent
fn join_flat(values: Option<&[String]>) -> String {
    values.map(|v| v.join(",")).unwrap_or_default()
}

/// `[a,b,c]`, or `None` when absent or empty
fn bracketed(values: Option<&[String]>) -> Option<String> {
    match values {
        Some(v) if !v.is_empty() => Some(format!("[{}]", v.join(","))),
        _ => None,
    }
}

/// Render the front-matter block, including both delimiter lines
pub fn render_front_matter(record: &Record, variant: FrontMatterVariant) -> Vec<String> {
    let mut lines = vec![DELIMITER.to_string()];
    lines.extend(
        fields_for(variant)
            .iter()
            .filter_map(|field| (field.render)(record).map(|v| format!("{}: {}", field.name, v))),
    );
    lines.push(DELIMITER.to_string());
    lines
}

/// Render the complete document: front matter, a blank line, then the raw body
///
/// Lines are joined with `\n`; no newline is appended after the body.
pub fn render_document(record: &Record, variant: FrontMatterVariant) -> String {
    let mut lines = render_front_matter(record, variant);
    lines.push(String::new());
    lines.push(record.body.clone());
    lines.join("\n")
}
