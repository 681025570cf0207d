//! Slug normalization and generation.

/// Canonical form used for every slug comparison: trimmed and lowercased.
pub fn normalize_slug(slug: &str) -> String {
    slug.trim().to_lowercase()
}

/// Whether two slugs are equal after normalization.
pub fn slugs_match(a: &str, b: &str) -> bool {
    normalize_slug(a) == normalize_slug(b)
}

/// Build a URL-safe slug from a display name.
///
/// ASCII letters and digits are kept (lowercased); any other run of
/// characters becomes a single `-`. Leading and trailing separators are
/// dropped, so a name with no ASCII alphanumerics yields an empty slug.
///
/// ```
/// use discovery_core::domains::discovery::slugify;
///
/// assert_eq!(slugify(" Issaquah Cleanup! "), "issaquah-cleanup");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_slug() {
        assert_eq!(normalize_slug(" Issaquah-Cleanup "), "issaquah-cleanup");
        assert_eq!(normalize_slug("ISSAQUAH-CLEANUP"), "issaquah-cleanup");
        assert_eq!(normalize_slug("\tacme\n"), "acme");
    }

    #[test]
    fn test_slugs_match() {
        assert!(slugs_match("acme", "ACME "));
        assert!(!slugs_match("acme", "acme-2"));
    }

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("Adopt  a -- Highway"), "adopt-a-highway");
        assert_eq!(slugify("--Leading and trailing--"), "leading-and-trailing");
        assert_eq!(slugify("Seattle, WA 98101"), "seattle-wa-98101");
    }

    #[test]
    fn test_slugify_drops_non_ascii() {
        assert_eq!(slugify("Café Crew"), "caf-crew");
        assert_eq!(slugify("!!!"), "");
    }
}
