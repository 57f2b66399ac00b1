//! `{placeholder}` substitution for output and command templates.

use once_cell::sync::Lazy;
use regex::Regex;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{[-\w]+\}").unwrap());

/// Replaces each `{name}` in `template` using `values`.
///
/// Placeholders are looked up in order, so an earlier pair shadows a later
/// one with the same name. Placeholders with no entry are dropped.
///
/// # Example
/// ```
/// use sift_match::expand_template;
///
/// let out = expand_template("{index}: {line}{missing}", &[("{index}", "3"), ("{line}", "vim")]);
/// assert_eq!(out, "3: vim");
/// ```
pub fn expand_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;

    for m in PLACEHOLDER.find_iter(template) {
        out.push_str(&template[last..m.start()]);
        if let Some((_, replacement)) = values.iter().find(|(key, _)| *key == m.as_str()) {
            out.push_str(replacement);
        }
        last = m.end();
    }
    out.push_str(&template[last..]);

    out
}
