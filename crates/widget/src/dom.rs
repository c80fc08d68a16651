use starship_chat::{TextSpan, WidgetConfig};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, HtmlAnchorElement, HtmlButtonElement, HtmlElement, HtmlScriptElement,
    HtmlStyleElement, HtmlTextAreaElement, ShadowRoot, ShadowRootInit, ShadowRootMode,
};

use crate::style::STYLESHEET;

/// Element handles for the widget surface, all inside one shadow root.
pub struct Surface {
    pub host: HtmlElement,
    pub launcher: HtmlButtonElement,
    pub panel: HtmlElement,
    pub close_button: HtmlButtonElement,
    pub log: HtmlElement,
    pub input: HtmlTextAreaElement,
    pub send_button: HtmlButtonElement,
}

/// Reads configuration from the widget's own inclusion tag.
///
/// `document.currentScript` is the normal path; pages that load the bundle
/// asynchronously fall back to the first script carrying the key attribute.
pub fn read_embed_config(document: &Document) -> WidgetConfig {
    let script = document
        .current_script()
        .and_then(|element| element.dyn_into::<HtmlScriptElement>().ok())
        .or_else(|| {
            document
                .query_selector("script[data-client-key]")
                .ok()
                .flatten()
                .and_then(|element| element.dyn_into::<HtmlScriptElement>().ok())
        });

    match script {
        Some(script) => {
            WidgetConfig::from_script_tag(&script.src(), script.get_attribute("data-client-key"))
        }
        None => WidgetConfig::from_script_tag("", None),
    }
}

/// Builds the isolated rendering surface.
///
/// The host element gets an open shadow root holding the stylesheet,
/// launcher, and panel, so host-page styles cannot leak in or out. The
/// host itself is not attached here; the caller appends it to the body.
pub fn build_surface(document: &Document) -> Result<Surface, String> {
    let host = create_div(document, "")?;
    host.set_id("starship-chat-widget");

    let shadow = host
        .attach_shadow(&ShadowRootInit::new(ShadowRootMode::Open))
        .map_err(|_| "failed to attach shadow root".to_string())?;

    attach_stylesheet(document, &shadow)?;

    let launcher = create_button(document, "ss-launcher", "\u{1f4ac}")?;
    append(&shadow, &launcher)?;

    let panel = create_div(document, "ss-panel")?;

    let header = create_div(document, "ss-header")?;
    let title = create_span(document, "")?;
    title.set_text_content(Some("Starship Assistant"));
    append(&header, &title)?;
    let close_button = create_button(document, "ss-close", "\u{00d7}")?;
    append(&header, &close_button)?;
    append(&panel, &header)?;

    let log = create_div(document, "ss-log")?;
    append(&panel, &log)?;

    let composer = create_div(document, "ss-composer")?;
    let input = create_textarea(document)?;
    append(&composer, &input)?;
    let send_button = create_button(document, "ss-send", "Send")?;
    append(&composer, &send_button)?;
    append(&panel, &composer)?;

    append(&shadow, &panel)?;

    Ok(Surface {
        host,
        launcher,
        panel,
        close_button,
        log,
        input,
        send_button,
    })
}

fn attach_stylesheet(document: &Document, shadow: &ShadowRoot) -> Result<(), String> {
    let style = document
        .create_element("style")
        .map_err(|_| "failed to create style element".to_string())?
        .dyn_into::<HtmlStyleElement>()
        .map_err(|_| "style element has unexpected type".to_string())?;
    style.set_text_content(Some(STYLESHEET));
    shadow
        .append_child(&style)
        .map_err(|_| "failed to attach stylesheet".to_string())?;
    Ok(())
}

pub fn create_div(document: &Document, class: &str) -> Result<HtmlElement, String> {
    let element = document
        .create_element("div")
        .map_err(|_| "failed to create div".to_string())?
        .dyn_into::<HtmlElement>()
        .map_err(|_| "div has unexpected type".to_string())?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    Ok(element)
}

fn create_span(document: &Document, class: &str) -> Result<HtmlElement, String> {
    let element = document
        .create_element("span")
        .map_err(|_| "failed to create span".to_string())?
        .dyn_into::<HtmlElement>()
        .map_err(|_| "span has unexpected type".to_string())?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    Ok(element)
}

fn create_button(
    document: &Document,
    class: &str,
    label: &str,
) -> Result<HtmlButtonElement, String> {
    let button = document
        .create_element("button")
        .map_err(|_| "failed to create button".to_string())?
        .dyn_into::<HtmlButtonElement>()
        .map_err(|_| "button has unexpected type".to_string())?;
    button.set_class_name(class);
    button.set_type("button");
    button.set_text_content(Some(label));
    Ok(button)
}

fn create_textarea(document: &Document) -> Result<HtmlTextAreaElement, String> {
    let input = document
        .create_element("textarea")
        .map_err(|_| "failed to create textarea".to_string())?
        .dyn_into::<HtmlTextAreaElement>()
        .map_err(|_| "textarea has unexpected type".to_string())?;
    input.set_class_name("ss-input");
    input.set_placeholder("Type your question...");
    input.set_rows(1);
    Ok(input)
}

/// Renders linkify output: text nodes plus anchors that open in a new
/// browsing context with no back-reference to the opener.
pub fn render_spans(document: &Document, parent: &HtmlElement, spans: &[TextSpan]) {
    for span in spans {
        match span {
            TextSpan::Text(text) => {
                let node = document.create_text_node(text);
                let _ = parent.append_child(&node);
            }
            TextSpan::Link(url) => {
                if let Ok(anchor) = create_anchor(document, url, url) {
                    let _ = parent.append_child(&anchor);
                }
            }
        }
    }
}

pub fn create_anchor(
    document: &Document,
    href: &str,
    label: &str,
) -> Result<HtmlAnchorElement, String> {
    let anchor = document
        .create_element("a")
        .map_err(|_| "failed to create anchor".to_string())?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| "anchor has unexpected type".to_string())?;
    anchor.set_href(href);
    anchor.set_target("_blank");
    // The reverse-tabnabbing mitigation: the new context must not be able
    // to navigate the page hosting the widget.
    anchor.set_rel("noopener noreferrer");
    anchor.set_text_content(Some(label));
    Ok(anchor)
}

/// Citation line appended under a bot bubble when the backend attributes
/// a source URL to the answer.
pub fn create_citation(document: &Document, url: &str) -> Result<HtmlElement, String> {
    let citation = create_div(document, "ss-citation")?;
    let prefix = document.create_text_node("Source: ");
    citation
        .append_child(&prefix)
        .map_err(|_| "failed to build citation".to_string())?;
    let anchor = create_anchor(document, url, url)?;
    citation
        .append_child(&anchor)
        .map_err(|_| "failed to build citation".to_string())?;
    Ok(citation)
}

/// Transient three-dot placeholder shown while a request is in flight.
pub fn create_typing_indicator(document: &Document) -> Result<HtmlElement, String> {
    let indicator = create_div(document, "ss-msg ss-bot ss-typing")?;
    for _ in 0..3 {
        let dot = create_span(document, "")?;
        indicator
            .append_child(&dot)
            .map_err(|_| "failed to build typing indicator".to_string())?;
    }
    Ok(indicator)
}

fn append(parent: &web_sys::Node, child: &web_sys::Node) -> Result<(), String> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|_| "failed to append widget element".to_string())
}
