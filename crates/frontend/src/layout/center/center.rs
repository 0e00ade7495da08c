use leptos::prelude::*;

/// Main content zone; holds the tab bar and the open pages.
#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <main data-zone="center" class="app-tabs" style="flex: 1; min-width: 0; overflow: auto;">
            {children()}
        </main>
    }
}
