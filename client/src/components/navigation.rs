//! Top navigation bar with section anchors and the auth entry point.

use leptos::prelude::*;

use crate::content::NAV_ITEMS;
use crate::state::session::{Session, nav_label};

/// Fixed header. The mobile menu collapses after an anchor is chosen.
#[component]
pub fn Navigation(menu_open: RwSignal<bool>, on_auth_click: Callback<()>, on_sign_out: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let signed_in = move || session.with(Session::is_signed_in);
    let label = move || session.with(|s| nav_label(s.user()));

    let links = move || {
        NAV_ITEMS
            .iter()
            .map(|item| {
                view! {
                    <a class="nav__link" href=item.href on:click=move |_| menu_open.set(false)>
                        {item.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="nav">
            <div class="nav__inner">
                <a class="nav__brand" href="#home">"WebCraft Studio"</a>
                <div class="nav__links">{links}</div>
                <div class="nav__actions">
                    <button class="btn nav__auth" on:click=move |_| on_auth_click.run(())>
                        {label}
                    </button>
                    <Show when=signed_in>
                        <button class="btn btn--ghost nav__signout" on:click=move |_| on_sign_out.run(()) title="Sign out">
                            "Sign Out"
                        </button>
                    </Show>
                    <button
                        class="nav__menu-toggle"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                        title="Toggle menu"
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <div class="nav__mobile">{links}</div>
            </Show>
        </nav>
    }
}
