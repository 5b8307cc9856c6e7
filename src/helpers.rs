//! Small formatting helpers made available to templates.
//!
//! Each helper is registered twice with tera: as a function
//! (`markdown_link(name=title)`) and as a filter (`title | markdown_link`).

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use tera::{Tera, Value};

static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]").expect("static regex is valid"));

/// Builds a markdown link to the section heading called `name`.
///
/// Every non-word character of the lowercased name becomes one `-`; runs are
/// not collapsed. This does not reproduce every renderer's anchor rules.
pub fn markdown_link(name: &str) -> String {
    let slug = NON_WORD.replace_all(&name.to_lowercase(), "-").into_owned();
    format!("[{name}](#{slug})")
}

/// Describes an API parameter, prefixing optional ones with `**optional**`.
pub fn param_description(param: &Value) -> String {
    let description = value_as_text(param.get("description"));

    let optional = param
        .get("optional")
        .is_some_and(crate::entry::is_truthy);

    if optional {
        format!("**optional** {description}")
    } else {
        description
    }
}

fn value_as_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Registers all helpers on a tera instance.
pub fn register(tera: &mut Tera) {
    tera.register_function(
        "markdown_link",
        |args: &HashMap<String, Value>| -> tera::Result<Value> {
            Ok(Value::String(markdown_link(&value_as_text(args.get("name")))))
        },
    );
    tera.register_filter(
        "markdown_link",
        |value: &Value, _: &HashMap<String, Value>| -> tera::Result<Value> {
            Ok(Value::String(markdown_link(&value_as_text(Some(value)))))
        },
    );

    tera.register_function(
        "param_description",
        |args: &HashMap<String, Value>| -> tera::Result<Value> {
            let param = args.get("param").unwrap_or(&Value::Null);
            Ok(Value::String(param_description(param)))
        },
    );
    tera.register_filter(
        "param_description",
        |value: &Value, _: &HashMap<String, Value>| -> tera::Result<Value> {
            Ok(Value::String(param_description(value)))
        },
    );
}
