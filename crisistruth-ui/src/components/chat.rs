//! Chat Components
//!
//! Transcript bubbles and the claim input.

use gloo_timers::callback::Timeout;
use leptos::*;
use wasm_bindgen::JsCast;

use crisistruth::chat::{ChatTurn, VerdictTone};
use crisistruth::markdown::render_markdown;
use crisistruth::text::format_time;

/// How long the "Copied" confirmation stays up (ms)
const COPIED_RESET_MS: u32 = 2000;

/// One transcript entry
#[component]
pub fn ChatMessage(turn: ChatTurn) -> impl IntoView {
    let (row_class, bubble_class) = if turn.is_user() {
        ("flex justify-end", "bg-blue-600 text-white rounded-2xl rounded-br-sm")
    } else if turn.is_error {
        ("flex justify-start", "bg-red-50 text-red-700 border border-red-200 rounded-2xl rounded-bl-sm")
    } else {
        ("flex justify-start", "bg-white text-slate-800 border border-slate-200 rounded-2xl rounded-bl-sm")
    };
    let copied = create_rw_signal(false);
    let copied_reset = store_value(None::<Timeout>);
    on_cleanup(move || {
        copied_reset.try_update_value(|t| *t = None);
    });
    let body = turn.body.clone();

    view! {
        <div class=row_class>
            <div class=format!("max-w-[80%] px-5 py-4 shadow-sm {}", bubble_class)>
                {turn.is_pending.then(|| view! {
                    <div class="flex items-center space-x-2 text-slate-500">
                        <span class="loading-spinner w-4 h-4" />
                        <span class="text-sm italic">{turn.body.clone()}</span>
                    </div>
                })}

                {(!turn.is_pending && turn.is_user()).then(|| view! {
                    <p class="whitespace-pre-wrap text-sm leading-relaxed">{turn.body.clone()}</p>
                })}

                // assistant replies are markdown; raw HTML is escaped by the renderer
                {(!turn.is_pending && !turn.is_user()).then(|| view! {
                    <div class="markdown-body text-sm leading-relaxed" inner_html=render_markdown(&turn.body) />
                })}

                {turn.verdict.clone().map(|verdict| {
                    let tone = verdict.tone();
                    let badge_class = match tone {
                        VerdictTone::Supported => "bg-green-100 text-green-700",
                        VerdictTone::Disputed => "bg-red-100 text-red-700",
                    };
                    view! {
                        <div class="mt-3 pt-3 border-t border-slate-100 space-y-2 text-xs">
                            <span class=format!("inline-block px-3 py-1 rounded-full font-extrabold {}", badge_class)>
                                {format!("{} {}", tone.icon(), verdict.badge_text())}
                            </span>
                            <p class="text-slate-500">
                                "Confidence: " <span class="font-bold">{verdict.confidence_score.to_string()}</span>
                            </p>
                            <p class="text-slate-500">"Sources: " {verdict.source_list.join(", ")}</p>
                        </div>
                    }
                })}

                <div class="flex items-center justify-between mt-2 text-[10px] opacity-70">
                    <span>{format_time(&turn.created_at.with_timezone(&chrono::Local))}</span>
                    {turn.has_actions().then(|| view! {
                        <button
                            class="ml-3 hover:underline"
                            on:click=move |_| {
                                copy_to_clipboard(&body);
                                copied.set(true);
                                // a newer click replaces, and so cancels, the pending reset
                                copied_reset.set_value(Some(Timeout::new(COPIED_RESET_MS, move || {
                                    copied.try_set(false);
                                })));
                            }
                        >
                            {move || if copied.get() { "Copied" } else { "Copy" }}
                        </button>
                    })}
                </div>
            </div>
        </div>
    }
}

/// Claim input. Enter sends, Shift+Enter inserts a newline.
#[component]
pub fn ChatInput(
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    locked: Signal<bool>,
    #[prop(into)]
    can_send: Signal<bool>,
    on_input: Callback<String>,
    on_send: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="flex items-end gap-3 bg-white border border-slate-200 rounded-2xl p-3">
            <textarea
                rows="2"
                class="flex-1 resize-none focus:outline-none text-sm disabled:opacity-60"
                placeholder="Paste a claim, headline or forwarded message to verify..."
                prop:value=move || value.get()
                disabled=move || locked.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
                on:keydown=move |ev: ev::KeyboardEvent| {
                    if ev.key() == "Enter" && !ev.shift_key() {
                        ev.prevent_default();
                        on_send.call(());
                    }
                }
            />
            <button
                class="px-5 py-3 rounded-xl bg-blue-600 text-white font-bold hover:bg-blue-700 disabled:opacity-50"
                disabled=move || !can_send.get()
                on:click=move |_| on_send.call(())
            >
                {move || if locked.get() { "Verifying..." } else { "Verify" }}
            </button>
        </div>
    }
}

/// `navigator.clipboard.writeText(text)`, ignored where unavailable
fn copy_to_clipboard(text: &str) {
    let navigator = window().navigator();
    let Ok(clipboard) = js_sys::Reflect::get(&navigator, &"clipboard".into()) else {
        return;
    };
    let Ok(write_text) = js_sys::Reflect::get(&clipboard, &"writeText".into()) else {
        return;
    };
    if let Ok(write_text) = write_text.dyn_into::<js_sys::Function>() {
        if let Err(e) = write_text.call1(&clipboard, &text.into()) {
            web_sys::console::warn_1(&e);
        }
    }
}
