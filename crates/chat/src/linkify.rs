/// One rendered fragment of a bot message body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSpan {
    Text(String),
    Link(String),
}

const SCHEMES: &[&str] = &["https://", "http://"];

/// Splits a bot message into literal text and clickable URL spans.
///
/// Only applied to bot messages; user text is inserted literally and never
/// pattern-matched. Surrounding text is preserved verbatim.
pub fn linkify(text: &str) -> Vec<TextSpan> {
    let mut spans: Vec<TextSpan> = Vec::new();
    let mut cursor = 0;

    while let Some((offset, scheme)) = find_next_scheme(&text[cursor..]) {
        let start = cursor + offset;
        let tail = &text[start..];
        let raw_end = tail
            .find(|c: char| c.is_whitespace() || c == '<' || c == '>')
            .unwrap_or(tail.len());
        let url = trim_url(&tail[..raw_end]);

        if url.len() <= scheme.len() {
            // A bare scheme with no authority reads as prose, not a link.
            push_text(&mut spans, &text[cursor..start + raw_end]);
            cursor = start + raw_end;
            continue;
        }

        push_text(&mut spans, &text[cursor..start]);
        spans.push(TextSpan::Link(url.to_string()));
        cursor = start + url.len();
    }

    push_text(&mut spans, &text[cursor..]);
    spans
}

fn find_next_scheme(haystack: &str) -> Option<(usize, &'static str)> {
    SCHEMES
        .iter()
        .filter_map(|scheme| haystack.find(scheme).map(|offset| (offset, *scheme)))
        .min_by_key(|(offset, _)| *offset)
}

/// Drops trailing punctuation that belongs to the sentence, not the URL.
/// A close paren stays only while the URL itself has a matching open paren.
fn trim_url(candidate: &str) -> &str {
    let mut url = candidate;
    while let Some(last) = url.chars().last() {
        let trim = match last {
            '.' | ',' | ';' | ':' | '!' | '?' | '\'' | '"' => true,
            ')' => url.matches('(').count() < url.matches(')').count(),
            _ => false,
        };
        if !trim {
            break;
        }
        url = &url[..url.len() - last.len_utf8()];
    }
    url
}

fn push_text(spans: &mut Vec<TextSpan>, text: &str) {
    if text.is_empty() {
        return;
    }
    // Adjacent text fragments collapse into one span.
    if let Some(TextSpan::Text(existing)) = spans.last_mut() {
        existing.push_str(text);
        return;
    }
    spans.push(TextSpan::Text(text.to_string()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> TextSpan {
        TextSpan::Text(value.to_string())
    }

    fn link(value: &str) -> TextSpan {
        TextSpan::Link(value.to_string())
    }

    #[test]
    fn plain_text_stays_one_span() {
        assert_eq!(linkify("no links here"), vec![text("no links here")]);
    }

    #[test]
    fn mid_sentence_url_preserves_surrounding_text() {
        assert_eq!(
            linkify("see http://x.com for more"),
            vec![text("see "), link("http://x.com"), text(" for more")]
        );
    }

    #[test]
    fn sentence_punctuation_is_not_part_of_the_url() {
        assert_eq!(
            linkify("Details: https://ex.com/shipping."),
            vec![
                text("Details: "),
                link("https://ex.com/shipping"),
                text(".")
            ]
        );
    }

    #[test]
    fn parenthesized_url_keeps_the_close_paren_outside() {
        assert_eq!(
            linkify("(see https://ex.com/faq)"),
            vec![text("(see "), link("https://ex.com/faq"), text(")")]
        );
    }

    #[test]
    fn balanced_parens_inside_the_url_survive() {
        assert_eq!(
            linkify("https://en.example.org/wiki/Rust_(language)"),
            vec![link("https://en.example.org/wiki/Rust_(language)")]
        );
    }

    #[test]
    fn multiple_urls_each_become_links() {
        assert_eq!(
            linkify("http://a.com and https://b.com"),
            vec![
                link("http://a.com"),
                text(" and "),
                link("https://b.com")
            ]
        );
    }

    #[test]
    fn bare_scheme_reads_as_prose() {
        assert_eq!(
            linkify("the http:// prefix"),
            vec![text("the http:// prefix")]
        );
    }

    #[test]
    fn markup_characters_terminate_the_url() {
        assert_eq!(
            linkify("https://ex.com<script>"),
            vec![link("https://ex.com"), text("<script>")]
        );
    }
}
