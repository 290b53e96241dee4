use std::{cell::Cell, rc::Rc};

use leptos::*;
use portfolio_contract::{chat::validate_question, ChatMessage, ChatValidationError, MAX_CHAT_MESSAGE_CHARS};
use system_ui::{EmptyState, Stack};

#[derive(Debug, Clone, PartialEq)]
/// Conversation state for one chat window.
struct ChatTranscript {
    /// Greeting first, then alternating questions and answers.
    messages: Vec<ChatMessage>,
    pending: bool,
    error: Option<String>,
}

impl ChatTranscript {
    fn new(greeting: String) -> Self {
        Self {
            messages: vec![ChatMessage::assistant(greeting)],
            pending: false,
            error: None,
        }
    }

    /// Records `input` as the next question and returns the history to send.
    ///
    /// Rejected input leaves the transcript untouched apart from the error text.
    fn submit(&mut self, input: &str) -> Result<Vec<ChatMessage>, ChatValidationError> {
        if let Err(err) = validate_question(input) {
            self.error = Some(err.to_string());
            return Err(err);
        }
        self.error = None;
        self.messages.push(ChatMessage::user(input));
        self.pending = true;
        Ok(self.messages.iter().skip(1).cloned().collect())
    }

    fn receive(&mut self, reply: Result<String, String>) {
        self.pending = false;
        match reply {
            Ok(answer) => self.messages.push(ChatMessage::assistant(answer)),
            Err(err) => self.error = Some(err),
        }
    }
}

fn role_token(message: &ChatMessage) -> &'static str {
    match message.role.as_deref() {
        Some("user") => "user",
        _ => "assistant",
    }
}

#[component]
/// Assistant chat. Questions go to `/api/chat`; answers render as plain text.
pub fn ChatView(
    /// First assistant message shown before any question.
    #[prop(into)]
    greeting: String,
) -> impl IntoView {
    let transcript = create_rw_signal(ChatTranscript::new(greeting));
    let input = create_rw_signal(String::new());
    let alive = Rc::new(Cell::new(true));
    on_cleanup({
        let alive = alive.clone();
        move || alive.set(false)
    });

    let submit = Callback::new(move |_: ()| {
        if transcript.with_untracked(|t| t.pending) {
            return;
        }
        let text = input.get_untracked();
        let mut outgoing = None;
        transcript.update(|t| outgoing = t.submit(&text).ok());
        let Some(history) = outgoing else {
            return;
        };
        input.set(String::new());

        let alive = alive.clone();
        spawn_local(async move {
            let reply = portfolio_web::ask_assistant(history).await.map_err(|err| {
                logging::warn!("assistant request failed: {err}");
                err.to_string()
            });
            if alive.get() {
                transcript.update(|t| t.receive(reply));
            }
        });
    });

    let char_count = move || input.with(|text| text.chars().count());

    view! {
        <Stack layout_class="chat-view">
            <ol class="chat-messages" aria-live="polite">
                {move || {
                    transcript
                        .with(|t| {
                            t.messages
                                .iter()
                                .map(|message| {
                                    view! {
                                        <li class="chat-message" data-role=role_token(message)>
                                            {message.content.clone()}
                                        </li>
                                    }
                                })
                                .collect_view()
                        })
                }}
                <Show when=move || transcript.with(|t| t.pending) fallback=|| ()>
                    <li class="chat-message" data-role="assistant" data-pending="true">
                        "Thinking..."
                    </li>
                </Show>
            </ol>
            {move || {
                transcript
                    .with(|t| t.error.clone())
                    .map(|message| view! { <EmptyState message=message tone="error" /> })
            }}
            <form
                class="chat-form"
                on:submit=move |ev: ev::SubmitEvent| {
                    ev.prevent_default();
                    submit.call(());
                }
            >
                <textarea
                    class="chat-input"
                    rows="3"
                    placeholder="Ask a question"
                    aria-label="Question"
                    data-autofocus="true"
                    maxlength=MAX_CHAT_MESSAGE_CHARS
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=move |ev: ev::KeyboardEvent| {
                        if ev.key() == "Enter" && !ev.shift_key() {
                            ev.prevent_default();
                            submit.call(());
                        }
                    }
                ></textarea>
                <div class="chat-form-footer">
                    <span
                        class="chat-counter"
                        data-over-limit=move || (char_count() > MAX_CHAT_MESSAGE_CHARS).to_string()
                    >
                        {move || format!("{}/{}", char_count(), MAX_CHAT_MESSAGE_CHARS)}
                    </span>
                    <button
                        type="submit"
                        disabled=move || transcript.with(|t| t.pending) || input.with(|text| text.is_empty())
                    >
                        "Send"
                    </button>
                </div>
            </form>
        </Stack>
    }
}
