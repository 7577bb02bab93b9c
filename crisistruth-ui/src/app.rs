//! App Root Component
//!
//! Main application component with routing and the navigation shell
//! (top bar, side bar, footer).

use leptos::*;
use leptos_router::*;

use crate::components::{Footer, Navbar, ScrollToTop, Sidebar};
use crate::pages::{Chatbot, Dashboard, FakeNews, RealNews};
use crate::state::global::provide_shell_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_shell_state();

    view! {
        <Router>
            <div class="min-h-screen bg-slate-50 text-slate-800 flex flex-col">
                <Navbar />

                <div class="flex flex-1">
                    <Sidebar />

                    <main class="flex-1 min-w-0 container mx-auto px-4 py-8 pb-24">
                        <Routes>
                            <Route path="/" view=Dashboard />
                            <Route path="/fake-news" view=FakeNews />
                            <Route path="/real-news" view=RealNews />
                            <Route path="/chatbot" view=Chatbot />
                            <Route path="/*any" view=NotFound />
                        </Routes>
                    </main>
                </div>

                <Footer />
                <ScrollToTop />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-slate-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
