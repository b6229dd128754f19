use crate::chat_message::Message;
use crate::language::Language;
use crate::status_indicator::StatusIndicator;

/// Greeting seeded into the conversation log at startup.
pub const GREETING: &str =
    "Hello! I'm your AI assistant. Ask me anything and I'll reply in clear, concise language. 🔍";

/// Send cycle state. `Sending` is authoritative: while it holds,
/// `begin_send` rejects re-entry, so at most one request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendState {
    Idle,
    Sending,
}

/// A message handed to the dispatcher: the trimmed draft plus the
/// language selected at the moment of sending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub message: String,
    pub lang: Language,
}

pub struct App {
    pub open: bool,
    pub messages: Vec<Message>,
    pub draft: String,
    pub language: Language,
    pub send_state: SendState,
    pub scroll: u16,
    pub status_indicator: StatusIndicator,
}

impl App {
    pub fn new() -> App {
        App {
            open: false,
            messages: vec![Message::bot(GREETING)],
            draft: String::new(),
            language: Language::default(),
            send_state: SendState::Idle,
            scroll: 0,
            status_indicator: StatusIndicator::new(),
        }
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    pub fn is_sending(&self) -> bool {
        self.send_state == SendState::Sending
    }

    pub fn cycle_language(&mut self) {
        self.language = self.language.next();
    }

    pub fn push_char(&mut self, c: char) {
        self.draft.push(c);
    }

    pub fn pop_char(&mut self) {
        self.draft.pop();
    }

    pub fn insert_newline(&mut self) {
        self.draft.push('\n');
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    /// Starts a send cycle. Returns the outbound message to dispatch, or
    /// `None` when the trimmed draft is empty or a request is already in
    /// flight — in both cases nothing changes.
    pub fn begin_send(&mut self) -> Option<OutboundMessage> {
        if self.is_sending() {
            return None;
        }

        let trimmed = self.draft.trim();
        if trimmed.is_empty() {
            return None;
        }

        let message = trimmed.to_string();
        self.messages.push(Message::user(message.clone()));
        self.send_state = SendState::Sending;
        self.status_indicator.set_thinking(true);
        self.draft.clear();
        self.scroll_to_bottom();

        Some(OutboundMessage {
            message,
            lang: self.language,
        })
    }

    /// Settles the send cycle. The caller has already collapsed every
    /// outcome into display text, so this always appends one bot message
    /// and returns to `Idle`.
    pub fn finish_send(&mut self, reply_text: String) {
        self.messages.push(Message::bot(reply_text));
        self.send_state = SendState::Idle;
        self.status_indicator.set_thinking(false);
        self.scroll_to_bottom();
    }

    fn scroll_to_bottom(&mut self) {
        // The draw pass clamps; saturating here just forces the view down.
        self.scroll = u16::MAX;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
