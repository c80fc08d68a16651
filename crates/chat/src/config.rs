/// Path suffixes under which the widget bundle is served by the backend.
const WIDGET_PATH_SUFFIXES: &[&str] = &["/static/widget.js", "/widget.js"];

/// Chat endpoint path, versioned with the backend API.
const CHAT_PATH: &str = "/api/v1/chat";

/// Configuration read once from the embedding page's script tag.
///
/// Immutable for the page lifetime. A missing client key is represented as
/// an empty string; the server is responsible for rejecting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub client_key: String,
    pub base_url: String,
}

impl WidgetConfig {
    pub fn from_script_tag(src: &str, client_key: Option<String>) -> Self {
        Self {
            client_key: client_key.unwrap_or_default(),
            base_url: base_url_from_script_src(src),
        }
    }

    pub fn chat_endpoint(&self) -> String {
        format!("{}{CHAT_PATH}", self.base_url)
    }
}

/// Derives the service origin from the widget script's own `src`.
///
/// The known serving suffixes are stripped first; an unknown layout falls
/// back to dropping the final path component so the origin survives intact.
pub fn base_url_from_script_src(src: &str) -> String {
    let trimmed = src.trim().trim_end_matches('/');

    for suffix in WIDGET_PATH_SUFFIXES {
        if let Some(base) = trimmed.strip_suffix(suffix) {
            return base.trim_end_matches('/').to_string();
        }
    }

    // Only slashes after the scheme separator delimit path components.
    let authority_start = trimmed.find("://").map_or(0, |index| index + 3);
    match trimmed[authority_start..].rfind('/') {
        Some(relative) => trimmed[..authority_start + relative].to_string(),
        None => trimmed.to_string(),
    }
}
