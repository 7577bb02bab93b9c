//! Navigation Component
//!
//! Top bar with brand, links, alerts dropdown and the mobile menu. Path and
//! scroll offset are fed into the shared [`ShellState`]; every visual
//! variant is derived from it.

use leptos::*;
use leptos_router::*;

use crisistruth::shell::{NavLink, NAV_LINKS};
use crisistruth::ShellState;

use crate::state::{use_scroll_offset, use_shell};

const ALERTS_DROPDOWN: &str = "alerts";

/// Navigation header component
#[component]
pub fn Navbar() -> impl IntoView {
    let shell = use_shell();
    let location = use_location();
    let scroll = use_scroll_offset();

    create_effect(move |_| {
        let path = location.pathname.get();
        shell.update(|s| s.navigate(path));
    });
    create_effect(move |_| {
        let offset = scroll.get();
        shell.update(|s| s.set_scroll_offset(offset));
    });

    let bar_class = move || {
        if shell.with(ShellState::is_condensed) {
            "sticky top-0 z-40 bg-white/95 backdrop-blur shadow-md transition-all"
        } else {
            "sticky top-0 z-40 bg-white border-b border-slate-200 transition-all"
        }
    };
    let bar_height = move || {
        if shell.with(ShellState::is_condensed) {
            "flex items-center justify-between h-14"
        } else {
            "flex items-center justify-between h-20"
        }
    };

    view! {
        <nav class=bar_class>
            <div class="container mx-auto px-4">
                <div class=bar_height>
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-2">
                        <span class="text-2xl">"🛡️"</span>
                        <span class="text-xl font-extrabold text-slate-900">
                            "CrisisTruth " <span class="text-blue-500">"AI"</span>
                        </span>
                    </A>

                    // Desktop links
                    <div class="hidden md:flex items-center space-x-1">
                        {NAV_LINKS.iter().map(|link| view! { <NavItem link=*link /> }).collect_view()}
                        <AlertsDropdown />
                    </div>

                    // Mobile menu toggle
                    <button
                        class="md:hidden p-2 rounded-lg hover:bg-slate-100"
                        on:click=move |_| shell.update(|s| {
                            s.toggle_menu();
                        })
                    >
                        {move || if shell.with(ShellState::menu_open) { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || shell.with(ShellState::menu_open)>
                <div class="md:hidden border-t border-slate-200 px-4 py-2 space-y-1">
                    {NAV_LINKS.iter().map(|link| view! { <NavItem link=*link /> }).collect_view()}
                </div>
            </Show>
        </nav>
    }
}

/// One navigation link; its look comes from [`ShellState::link_style`]
#[component]
fn NavItem(link: NavLink) -> impl IntoView {
    let shell = use_shell();

    view! {
        <a
            href=link.path()
            class=move || shell.with(|s| s.link_style(&link).class())
            on:mouseenter=move |_| shell.update(|s| s.set_hovered(Some(link.route)))
            on:mouseleave=move |_| shell.update(|s| s.set_hovered(None))
        >
            <span class="mr-2">{link.icon}</span>
            {link.label()}
            {link.badge.filter(|count| *count > 0).map(|count| view! {
                <span class="ml-2 px-2 py-0.5 text-xs font-bold text-white bg-red-500 rounded-full">
                    {count}
                </span>
            })}
        </a>
    }
}

#[component]
fn AlertsDropdown() -> impl IntoView {
    let shell = use_shell();
    let is_open = move || shell.with(|s| s.open_dropdown() == Some(ALERTS_DROPDOWN));

    view! {
        <div class="relative ml-2">
            <button
                class="p-2 rounded-lg hover:bg-slate-100"
                on:click=move |_| shell.update(|s| s.toggle_dropdown(ALERTS_DROPDOWN))
            >
                "🔔"
            </button>
            <Show when=is_open>
                <div class="absolute right-0 mt-2 w-64 bg-white border border-slate-200 rounded-xl shadow-lg p-3 text-sm">
                    <p class="font-bold text-slate-700 mb-2">"Alerts"</p>
                    <a
                        href="/fake-news"
                        class="block text-red-600 hover:underline"
                        on:click=move |_| shell.update(ShellState::close_dropdowns)
                    >
                        "New deceptions flagged. Review the feed →"
                    </a>
                </div>
            </Show>
        </div>
    }
}

/// Floating button that appears once the page is scrolled far enough
#[component]
pub fn ScrollToTop() -> impl IntoView {
    let shell = use_shell();

    view! {
        <Show when=move || shell.with(ShellState::shows_scroll_top)>
            <button
                class="fixed bottom-20 right-6 z-50 w-12 h-12 rounded-full bg-blue-600 text-white shadow-lg hover:bg-blue-700"
                on:click=move |_| {
                    let options = web_sys::ScrollToOptions::new();
                    options.set_top(0.0);
                    options.set_behavior(web_sys::ScrollBehavior::Smooth);
                    window().scroll_to_with_scroll_to_options(&options);
                }
            >
                "↑"
            </button>
        </Show>
    }
}
