//! `${VAR}` and `${VAR:-default}` expansion of path-like config values.
//!
//! Values without `${` are left as written.

use crate::ConfigError;

/// Expand every set field in place, reading variables from the process
/// environment.
pub(crate) fn expand_fields(
    fields: &mut [(&str, &mut Option<String>)],
) -> Result<(), ConfigError> {
    expand_fields_with(fields, |var| std::env::var(var).ok())
}

fn expand_fields_with(
    fields: &mut [(&str, &mut Option<String>)],
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<(), ConfigError> {
    for (field, value) in fields.iter_mut() {
        let Some(raw) = value.as_deref() else {
            continue;
        };
        if raw.contains("${") {
            **value = Some(expand(raw, field, &lookup)?);
        }
    }
    Ok(())
}

fn expand(
    raw: &str,
    field: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String, ConfigError> {
    shellexpand::env_with_context(raw, |var| lookup(var).map(Some).ok_or(()))
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}
