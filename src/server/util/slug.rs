/// Fallback slug for titles without any usable characters.
pub const FALLBACK_SLUG: &str = "post";

/// Builds the URL slug for a post title.
///
/// Lowercases the title, drops everything outside `[a-z0-9]`, whitespace and `-`,
/// turns whitespace runs into a single `-`, collapses repeated dashes and trims
/// leading/trailing dashes. An empty result falls back to [`FALLBACK_SLUG`].
///
/// Uniqueness is not handled here; see `PostService::unique_slug`.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '-' {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Returns the `n`-th candidate for a slug that is already taken.
pub fn numbered_slug(base: &str, n: u32) -> String {
    format!("{}-{}", base, n)
}
