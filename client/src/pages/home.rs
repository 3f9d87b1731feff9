//! Single-page portfolio: every section plus the auth modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns the UI toggles (mobile menu, modal visibility and mode) and
//! is the only writer of the session context.

use forms::auth::AuthMode;
use forms::session::User;
use leptos::prelude::*;

use crate::components::auth_modal::AuthModal;
use crate::components::contact_section::ContactSection;
use crate::components::navigation::Navigation;
use crate::components::sections::{AboutSection, ExperienceSection, HeroSection, ProjectsSection, SkillsSection};
use crate::state::session::Session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let menu_open = RwSignal::new(false);
    let modal_open = RwSignal::new(false);
    let auth_mode = RwSignal::new(AuthMode::SignIn);

    let on_auth_click = Callback::new(move |()| modal_open.set(true));
    let on_sign_out = Callback::new(move |()| session.update(Session::sign_out));
    let on_close = Callback::new(move |()| modal_open.set(false));
    let on_mode_change = Callback::new(move |mode: AuthMode| auth_mode.set(mode));
    let on_auth_success = Callback::new(move |user: User| {
        session.update(|s| s.sign_in(user));
        modal_open.set(false);
    });

    view! {
        <div class="page">
            <Navigation menu_open=menu_open on_auth_click=on_auth_click on_sign_out=on_sign_out/>
            <main class="page__main">
                <HeroSection/>
                <AboutSection/>
                <SkillsSection/>
                <ProjectsSection/>
                <ExperienceSection/>
                <ContactSection/>
            </main>
            <AuthModal
                open=modal_open
                mode=auth_mode
                on_close=on_close
                on_mode_change=on_mode_change
                on_auth_success=on_auth_success
            />
        </div>
    }
}
