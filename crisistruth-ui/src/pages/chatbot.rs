//! Chatbot Page
//!
//! Claim verification chat. The transcript and its idle / awaiting state
//! live in a [`ChatSession`]; this page only moves claims to `/verify` and
//! verdicts back.

use chrono::Utc;
use leptos::*;

use crisistruth::ChatSession;

use crate::api;
use crate::components::{ChatInput, ChatMessage};

const SUGGESTIONS: [&str; 3] = [
    "Drinking hot water every hour prevents COVID-19",
    "Banks will be closed for 10 days next week",
    "The government is giving free laptops to all students",
];

#[component]
pub fn Chatbot() -> impl IntoView {
    let session = create_rw_signal(ChatSession::new(Utc::now()));
    let end_ref = create_node_ref::<html::Div>();

    let on_input = Callback::new(move |text: String| {
        session.update(|s| {
            s.set_input(text);
        });
    });

    let on_send = Callback::new(move |_: ()| {
        let Some(claim) = session.try_update(|s| s.submit(Utc::now())).flatten() else {
            return;
        };

        spawn_local(async move {
            let outcome = api::verify_claim(claim).await;
            if let Err(e) = &outcome {
                web_sys::console::error_1(&format!("Verification failed: {}", e).into());
            }
            // the page may be gone by now
            session.try_update(|s| {
                s.resolve(outcome, Utc::now());
            });
        });
    });

    // Keep the newest turn in view
    create_effect(move |_| {
        session.with(|s| s.transcript().len());
        if let Some(end) = end_ref.get() {
            end.scroll_into_view();
        }
    });

    let value = Signal::derive(move || session.with(|s| s.input().to_string()));
    let locked = Signal::derive(move || session.with(ChatSession::is_awaiting));
    let can_send = Signal::derive(move || session.with(ChatSession::can_send));

    view! {
        <div class="max-w-3xl mx-auto flex flex-col h-[calc(100vh-14rem)]">
            <div class="mb-6">
                <h1 class="text-3xl font-extrabold text-slate-900">"🤖 CrisisTruth Assistant"</h1>
                <p class="text-slate-500 mt-1">
                    {move || if locked.get() {
                        "Analyzing your claim..."
                    } else {
                        "Ask me to verify any claim, headline or forwarded message"
                    }}
                </p>
            </div>

            <div class="flex-1 overflow-y-auto space-y-4 pr-2">
                <For
                    each=move || session.with(|s| s.transcript().to_vec())
                    key=|turn| turn.id
                    children=|turn| view! { <ChatMessage turn=turn /> }
                />
                <div node_ref=end_ref />
            </div>

            <Show when=move || session.with(|s| s.transcript().len() == 1)>
                <div class="flex flex-wrap gap-2 my-4">
                    {SUGGESTIONS.iter().map(|claim| view! {
                        <button
                            class="px-3 py-2 rounded-xl text-xs bg-white border border-slate-200 text-slate-600 hover:bg-slate-100"
                            on:click=move |_| on_input.call(claim.to_string())
                        >
                            {*claim}
                        </button>
                    }).collect_view()}
                </div>
            </Show>

            <div class="mt-4">
                <ChatInput
                    value=value
                    locked=locked
                    can_send=can_send
                    on_input=on_input
                    on_send=on_send
                />
            </div>
        </div>
    }
}
