use std::collections::BTreeMap;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("template '{template}' references unknown placeholder '{{{{{token}}}}}'")]
    UnknownPlaceholder { template: String, token: String },
}

/// Substitutes every `{{KEY}}` in `source` with its value from `vars`.
///
/// Runs in a single pass, so substituted values are copied verbatim and never
/// scanned again. An upper-snake-case placeholder with no value is an error.
/// Other brace sequences (JS objects, CSS blocks) pass through untouched.
pub fn render(
    template_name: &str,
    source: &str,
    vars: &BTreeMap<&'static str, String>,
) -> Result<String, RenderError> {
    let mut rendered = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(start) = rest.find("{{") {
        rendered.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let token = after
            .find("}}")
            .map(|end| &after[..end])
            .filter(|token| is_placeholder_token(token));

        match token {
            Some(token) => {
                let value = vars.get(token).ok_or_else(|| RenderError::UnknownPlaceholder {
                    template: template_name.to_string(),
                    token: token.to_string(),
                })?;
                rendered.push_str(value);
                rest = &after[token.len() + 2..];
            }
            None => {
                rendered.push_str("{{");
                rest = after;
            }
        }
    }

    rendered.push_str(rest);
    Ok(rendered)
}

fn is_placeholder_token(token: &str) -> bool {
    !token.is_empty()
        && token.starts_with(|c: char| c.is_ascii_uppercase())
        && token
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
