//! Control sample disambiguation.
//!
//! Positive and negative controls reuse the same names in every run, so they
//! get the run name appended to stay unique once runs are combined.

/// Returns true if `alias` contains any control token.
pub fn is_control<S: AsRef<str>>(alias: &str, tokens: &[S]) -> bool {
    tokens.iter().any(|token| {
        let token = token.as_ref();
        !token.is_empty() && alias.contains(token)
    })
}

/// `<alias>_<run name>` for controls, `None` for regular samples.
pub fn control_alias<S: AsRef<str>>(alias: &str, run_name: &str, tokens: &[S]) -> Option<String> {
    is_control(alias, tokens).then(|| format!("{alias}_{run_name}"))
}
