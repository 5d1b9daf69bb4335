use crate::constant::DEFAULT_RESULT_FILE_NAME;
use crate::devops::devops_model::build::Build;
use regex::{Captures, Regex};

pub const PTN_PLACEHOLDER_BUILD_ID: &str = "{buildId}";
pub const PTN_PLACEHOLDER_BUILD_NUMBER: &str = "{buildNumber}";
pub const PTN_PLACEHOLDER_REVISION: &str = "{revision}";
const REG_STR_PLACEHOLDER: &str = r"\{[A-Za-z_][A-Za-z0-9_]*\}";
const ZIP_SUFFIX: &str = ".zip";

/// # Placeholder values
///
/// Explicit mapping of placeholder to value.
///
/// An absent value (`None`) is substituted by an empty string, which keeps
/// "no revision" distinct from "revision 0" until the very end.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderValues {
    values: Vec<(&'static str, Option<String>)>,
}

impl From<&Build> for PlaceholderValues {
    fn from(build: &Build) -> Self {
        Self {
            values: vec![
                (PTN_PLACEHOLDER_BUILD_ID, Some(build.id.to_string())),
                (
                    PTN_PLACEHOLDER_BUILD_NUMBER,
                    Some(build.build_number.clone()),
                ),
                (
                    PTN_PLACEHOLDER_REVISION,
                    build.build_number_revision.map(|r| r.to_string()),
                ),
            ],
        }
    }
}

/// # resolve
///
/// Replace every known placeholder in `template`. Other text passes through unchanged.
///
/// Single pass over the template: substituted values are never scanned again, there is
/// no escape syntax.
pub fn resolve(template: &str, values: &PlaceholderValues) -> String {
    let Ok(re) = Regex::new(REG_STR_PLACEHOLDER) else {
        return template.to_string();
    };

    re.replace_all(template, |caps: &Captures| {
        let placeholder = &caps[0];
        match values.values.iter().find(|(k, _)| *k == placeholder) {
            Some((_, value)) => value.clone().unwrap_or_default(),
            None => placeholder.to_string(),
        }
    })
    .into_owned()
}

/// # resolve output
///
/// Resolve the output file name.
///
/// * blank template: `Build.zip`, without substitution.
/// * template not ending in `.zip`: resolved template with `.zip` appended.
/// * otherwise: resolved template.
pub fn resolve_output(template: &str, values: &PlaceholderValues) -> String {
    if template.trim().is_empty() {
        return DEFAULT_RESULT_FILE_NAME.to_string();
    }

    if !template.ends_with(ZIP_SUFFIX) {
        return format!("{}{}", resolve(template, values), ZIP_SUFFIX);
    }

    resolve(template, values)
}

/// # unresolved placeholders
///
/// `{name}` shaped fragments still present in a resolved name, like a misspelled
/// `{buildNumer}`.
pub fn unresolved_placeholders(resolved: &str) -> Vec<String> {
    Regex::new(REG_STR_PLACEHOLDER)
        .map(|re| {
            re.find_iter(resolved)
                .map(|m| m.as_str().to_string())
                .collect()
        })
        .unwrap_or_default()
}
