//! Image URL resolution.

/// Resolves a backend image path against the configured image base URL.
///
/// Absolute URLs pass through untouched. Relative paths are joined with
/// exactly one slash regardless of how base and path are delimited. An
/// empty path resolves to nothing; an empty base leaves the path as-is.
pub fn image_url(base: &str, path: &str) -> Option<String> {
    if path.is_empty() {
        return None;
    }
    if path.starts_with("http://") || path.starts_with("https://") {
        return Some(path.to_string());
    }
    if base.is_empty() {
        return Some(path.to_string());
    }
    Some(format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_urls_pass_through() {
        assert_eq!(
            image_url("https://img.example.com", "https://cdn.example.com/a.jpg").as_deref(),
            Some("https://cdn.example.com/a.jpg")
        );
    }

    #[test]
    fn joins_with_exactly_one_slash() {
        let expected = Some("https://img.example.com/uploads/a.jpg".to_string());
        assert_eq!(image_url("https://img.example.com", "/uploads/a.jpg"), expected);
        assert_eq!(image_url("https://img.example.com/", "uploads/a.jpg"), expected);
        assert_eq!(image_url("https://img.example.com/", "/uploads/a.jpg"), expected);
        assert_eq!(image_url("https://img.example.com", "uploads/a.jpg"), expected);
    }

    #[test]
    fn empty_path_is_none() {
        assert_eq!(image_url("https://img.example.com", ""), None);
    }

    #[test]
    fn empty_base_leaves_path_untouched() {
        assert_eq!(
            image_url("", "/uploads/a.jpg").as_deref(),
            Some("/uploads/a.jpg")
        );
    }
}
