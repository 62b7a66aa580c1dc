//! `$NAME` expansion for structured theme paths
//!
//! Only `[A-Z0-9_]` names are recognized. There is no brace syntax, no
//! defaults and no nesting; an unset variable expands to nothing.

use crate::context::Environment;

fn is_name_char(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'
}

/// Substitute `$NAME` references from `env`
pub fn expand(env: &Environment, text: &str) -> String {
    let mut expanded = String::with_capacity(text.len());
    let mut name: Option<String> = None;

    for c in text.chars() {
        match name.as_mut() {
            Some(current) if is_name_char(c) => current.push(c),
            Some(_) => {
                if let Some(current) = name.take() {
                    substitute(env, &current, &mut expanded);
                }
                if c == '$' {
                    name = Some(String::new());
                } else {
                    expanded.push(c);
                }
            }
            None if c == '$' => name = Some(String::new()),
            None => expanded.push(c),
        }
    }
    // A reference running to the end of the text is still expanded
    if let Some(current) = name {
        substitute(env, &current, &mut expanded);
    }

    debug!("Expanded string: {}", expanded);
    expanded
}

fn substitute(env: &Environment, name: &str, out: &mut String) {
    let value = env.get(name).unwrap_or_default();
    debug!("Extracted env var {} = '{}'", name, value);
    out.push_str(value);
}
