//! Side Bar
//!
//! Page list beside the routed content. Shares the shell state with the top
//! bar, so both agree on which page is current.

use leptos::*;

use crisistruth::shell::{NavLink, NAV_LINKS};

use crate::state::use_shell;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="hidden lg:block w-64 shrink-0 bg-slate-800 p-4">
            <h2 class="text-white text-lg font-bold mb-6">"CrisisTruth AI"</h2>
            <nav class="space-y-2">
                {NAV_LINKS.iter().map(|link| view! { <SidebarItem link=*link /> }).collect_view()}
            </nav>
        </aside>
    }
}

#[component]
fn SidebarItem(link: NavLink) -> impl IntoView {
    let shell = use_shell();

    view! {
        <a href=link.path() class=move || shell.with(|s| s.link_style(&link).sidebar_class())>
            <span class="mr-2">{link.icon}</span>
            {link.label()}
        </a>
    }
}
