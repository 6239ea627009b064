//! Input sanitizers applied before user content is persisted.
//!
//! These are simple tag-stripping filters. Plain text fields (titles,
//! names, tags) drop angle brackets entirely, while rich content (post bodies and
//! comments) keeps markup but loses scripting vectors.

use std::sync::LazyLock;

use regex::Regex;

/// Maximum number of characters kept by [`sanitize_text`].
pub const MAX_TEXT_LENGTH: usize = 1000;

static SCRIPT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?is)<script\b.*?</script\s*>"));
static IFRAME_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?is)<iframe\b.*?</iframe\s*>"));
static OBJECT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?is)<object\b.*?</object\s*>"));
static EMBED_TAG: LazyLock<Regex> = LazyLock::new(|| compile(r"(?is)<embed\b[^>]*>"));
// Browsers decode character references in attributes and drop tabs and newlines
// inside URLs, so the separator and colon may arrive encoded.
static JAVASCRIPT_SCHEME: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)javascript(?:\s|&#0*(?:9|10|13);?|&#x0*(?:9|a|d);?|&tab;|&newline;)*(?::|&#0*58;?|&#x0*3a;?|&colon;)",
    )
});
static EVENT_HANDLER: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\bon\w+\s*="));

// Patterns are constant, the tests below cover compilation.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("sanitizer pattern must compile")
}

/// Cleans a single-line text value such as a title, name or tag.
///
/// Removes `<` and `>`, trims surrounding whitespace and truncates the result to
/// [`MAX_TEXT_LENGTH`] characters.
pub fn sanitize_text(input: &str) -> String {
    let stripped: String = input.chars().filter(|c| *c != '<' && *c != '>').collect();

    stripped.trim().chars().take(MAX_TEXT_LENGTH).collect()
}

/// Removes script-capable markup from rich content.
///
/// Strips whole `<script>`, `<iframe>` and `<object>` blocks along with `<embed>`
/// tags, then neutralizes `javascript:` URLs and inline `on<event>=` handlers.
/// Other markup is left untouched.
///
/// This is a pattern filter, not an HTML parser. The scheme match covers a literal
/// or character-reference encoded colon and encoded whitespace before it, but not
/// a scheme whose letters are themselves encoded (`&#106;avascript:`) or markup
/// split so that a pattern only appears after an earlier removal. Templates render
/// the result with `|safe`, so anything stricter belongs here as an allow-list
/// sanitizer.
pub fn sanitize_html(input: &str) -> String {
    let output = SCRIPT_BLOCK.replace_all(input, "");
    let output = IFRAME_BLOCK.replace_all(&output, "");
    let output = OBJECT_BLOCK.replace_all(&output, "");
    let output = EMBED_TAG.replace_all(&output, "");
    let output = JAVASCRIPT_SCHEME.replace_all(&output, "");
    let output = EVENT_HANDLER.replace_all(&output, "");

    output.into_owned()
}
