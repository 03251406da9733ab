/// Convert an arbitrary path string into a root-relative asset path.
///
/// Backslashes become forward slashes, leading `./` segments are dropped and the result always
/// carries exactly one leading `/`. Returns `None` when nothing remains once the prefix noise is
/// stripped, since an empty asset path can never name a cacheable file.
pub fn to_root_relative(path: &str) -> Option<String> {
    let forward = path.trim().replace('\\', "/");
    let mut rest = forward.as_str();
    loop {
        let trimmed = rest.trim_start_matches('/');
        match trimmed.strip_prefix("./") {
            Some(next) => rest = next,
            None if trimmed == "." => rest = "",
            None => {
                rest = trimmed;
                break;
            }
        }
    }

    if rest.is_empty() {
        None
    } else {
        Some(format!("/{rest}"))
    }
}

/// Normalize the entry document name, falling back to `index.html` for blank input.
pub fn normalize_entry(entry_html: &str) -> String {
    to_root_relative(entry_html).unwrap_or_else(|| format!("/{}", super::DEFAULT_ENTRY_HTML))
}
