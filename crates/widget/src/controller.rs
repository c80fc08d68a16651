use std::cell::{Cell, RefCell};

use starship_chat::{
    ChatRequest, ChatResponse, ChatResult, Message, Role, SessionId, Transcript, WidgetConfig,
    compose_question, linkify, obtain_session,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlButtonElement, HtmlElement, HtmlTextAreaElement, KeyboardEvent};

use crate::dom::{self, Surface};
use crate::storage::BrowserSessionStore;
use crate::with_widget;

/// Composer stops growing past this height; the textarea scrolls instead.
const MAX_INPUT_HEIGHT_PX: i32 = 120;

/// The widget controller.
///
/// Owns the shadow-DOM subtree and the single piece of mutable state: the
/// in-flight guard. Everything else lives in the DOM itself.
pub struct ChatWidget {
    config: WidgetConfig,
    session_id: SessionId,
    sending: Cell<bool>,
    transcript: RefCell<Transcript>,
    document: Document,
    panel: HtmlElement,
    log: HtmlElement,
    input: HtmlTextAreaElement,
    send_button: HtmlButtonElement,
}

impl ChatWidget {
    /// Builds the surface, wires events, and attaches it to the page body.
    pub fn mount() -> Result<Self, String> {
        let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
        let document = window
            .document()
            .ok_or_else(|| "document is unavailable".to_string())?;
        let body = document
            .body()
            .ok_or_else(|| "document body is unavailable".to_string())?;

        let config = dom::read_embed_config(&document);
        if config.client_key.is_empty() {
            // Not fatal: the empty credential is sent and the server rejects it.
            log::warn!("no data-client-key attribute found on the widget script tag");
        }

        let session_id = obtain_session(&BrowserSessionStore::new(&window));
        log::debug!("chat session {session_id} targeting {}", config.base_url);

        let surface = dom::build_surface(&document)?;
        wire_events(&surface);
        body.append_child(&surface.host)
            .map_err(|_| "failed to attach widget host".to_string())?;

        Ok(Self {
            config,
            session_id,
            sending: Cell::new(false),
            transcript: RefCell::new(Transcript::default()),
            document,
            panel: surface.panel,
            log: surface.log,
            input: surface.input,
            send_button: surface.send_button,
        })
    }

    pub fn toggle(&self) {
        if self.panel.class_list().contains("open") {
            self.close();
        } else {
            self.open();
        }
    }

    /// Opening moves input focus into the text field.
    pub fn open(&self) {
        let _ = self.panel.class_list().add_1("open");
        let _ = self.input.focus();
    }

    pub fn close(&self) {
        let _ = self.panel.class_list().remove_1("open");
    }

    /// Grows the composer with its content up to a fixed maximum height.
    pub fn autosize_input(&self) {
        let style = self.input.style();
        let _ = style.set_property("height", "auto");
        let next = self.input.scroll_height().min(MAX_INPUT_HEIGHT_PX);
        let _ = style.set_property("height", &format!("{next}px"));
    }

    /// The one operation with a real contract.
    ///
    /// Empty input and overlapping submissions are silent no-ops. One user
    /// bubble, one request, one bot or error bubble; the guard is cleared
    /// and the send control re-enabled on every outcome.
    pub fn submit(&self) {
        let Some(question) = compose_question(&self.input.value(), self.sending.get()) else {
            return;
        };

        self.append_message(&Message::user(question.clone()));
        self.input.set_value("");
        self.autosize_input();

        self.sending.set(true);
        self.send_button.set_disabled(true);
        self.show_typing_indicator();

        let endpoint = self.config.chat_endpoint();
        let client_key = self.config.client_key.clone();
        let request = ChatRequest {
            question,
            session_id: self.session_id.to_string(),
        };

        spawn_local(async move {
            let outcome = crate::net::send_chat(&endpoint, &client_key, &request).await;
            with_widget(|widget| widget.finish_exchange(outcome));
        });
    }

    fn finish_exchange(&self, outcome: ChatResult<ChatResponse>) {
        self.remove_typing_indicator();

        match outcome {
            Ok(response) => {
                self.append_message(&Message::bot(response.answer, response.source_url));
            }
            Err(error) => {
                log::warn!("chat request failed: {error}");
                self.append_error(error.user_message());
            }
        }

        self.sending.set(false);
        self.send_button.set_disabled(false);
    }

    /// Messages rendered so far, in append order.
    pub fn message_count(&self) -> usize {
        self.transcript.borrow().len()
    }

    fn append_message(&self, message: &Message) {
        self.transcript.borrow_mut().push(message.clone());

        let class = match message.role {
            Role::User => "ss-msg ss-user",
            Role::Bot => "ss-msg ss-bot",
        };
        let Ok(bubble) = dom::create_div(&self.document, class) else {
            return;
        };

        match message.role {
            // User text is inserted literally; nothing in it is interpreted.
            Role::User => bubble.set_text_content(Some(&message.text)),
            Role::Bot => dom::render_spans(&self.document, &bubble, &linkify(&message.text)),
        }

        if let Some(url) = &message.source_url
            && let Ok(citation) = dom::create_citation(&self.document, url)
        {
            let _ = bubble.append_child(&citation);
        }

        let _ = self.log.append_child(&bubble);
        self.scroll_to_newest();
    }

    fn append_error(&self, text: &str) {
        if let Ok(bubble) = dom::create_div(&self.document, "ss-msg ss-error") {
            bubble.set_text_content(Some(text));
            let _ = self.log.append_child(&bubble);
            self.scroll_to_newest();
        }
    }

    fn show_typing_indicator(&self) {
        if let Ok(indicator) = dom::create_typing_indicator(&self.document) {
            let _ = self.log.append_child(&indicator);
            self.scroll_to_newest();
        }
    }

    fn remove_typing_indicator(&self) {
        if let Ok(Some(indicator)) = self.log.query_selector(".ss-typing") {
            indicator.remove();
        }
    }

    fn scroll_to_newest(&self) {
        self.log.set_scroll_top(self.log.scroll_height());
    }
}

/// Attaches the widget's event listeners.
///
/// Closures reach the controller through the thread-local slot, so they can
/// be installed before the controller itself is parked there. Each listener
/// lives for the page lifetime.
fn wire_events(surface: &Surface) {
    on_click(&surface.launcher, || with_widget(ChatWidget::toggle));
    on_click(&surface.close_button, || with_widget(ChatWidget::close));
    on_click(&surface.send_button, || with_widget(ChatWidget::submit));

    let keydown = Closure::<dyn FnMut(KeyboardEvent)>::wrap(Box::new(
        move |event: KeyboardEvent| {
            if submit_keystroke(&event) {
                event.prevent_default();
                with_widget(ChatWidget::submit);
            }
        },
    ));
    let _ = surface
        .input
        .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
    keydown.forget();

    let autosize = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
        with_widget(ChatWidget::autosize_input);
    }));
    let _ = surface
        .input
        .add_event_listener_with_callback("input", autosize.as_ref().unchecked_ref());
    autosize.forget();
}

/// Enter submits and suppresses the default newline.
///
/// Shift+Enter keeps the newline, and Enter that merely confirms an
/// in-progress IME composition must not submit the half-composed text.
pub fn submit_keystroke(event: &KeyboardEvent) -> bool {
    event.key() == "Enter" && !event.shift_key() && !event.is_composing()
}

fn on_click(target: &HtmlButtonElement, handler: impl Fn() + 'static) {
    let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| handler()));
    let _ = target.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref());
    callback.forget();
}
