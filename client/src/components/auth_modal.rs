//! Sign-in / sign-up modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns whether the modal is open and which mode it shows. The modal
//! owns its field values and status, and reports a successful sign-in back
//! through `on_auth_success` after a short confirmation delay.
//!
//! TRADE-OFFS
//! ==========
//! The modal stays mounted while closed so its state signal survives. Opening,
//! closing or switching mode resets the form, which also orphans any request
//! still in flight; its reply is then ignored.

#[cfg(test)]
#[path = "auth_modal_test.rs"]
mod auth_modal_test;

use forms::FormState;
use forms::auth::{AUTH_SUCCESS_DELAY, AuthField, AuthFields, AuthMode};
use forms::session::User;
use leptos::prelude::*;

use crate::components::status_banner::StatusBanner;
use crate::net::api::GlooAuthSubmitter;
use crate::state::form::SignalForm;
use crate::util::timer::sleep;

type AuthForm = RwSignal<FormState<AuthFields>>;

/// Label on the submit button.
#[must_use]
pub fn submit_label(mode: AuthMode, submitting: bool) -> &'static str {
    match (mode, submitting) {
        (AuthMode::SignIn, true) => "Signing In...",
        (AuthMode::SignUp, true) => "Creating Account...",
        (mode, false) => mode.title(),
    }
}

/// Heading and subheading for the mode.
#[must_use]
pub fn heading(mode: AuthMode) -> (&'static str, &'static str) {
    match mode {
        AuthMode::SignIn => ("Welcome Back", "Sign in to access your dashboard"),
        AuthMode::SignUp => ("Create Account", "Join us to explore amazing features"),
    }
}

/// Prompt text and link label for switching to the other mode.
#[must_use]
pub fn switch_prompt(mode: AuthMode) -> (&'static str, &'static str) {
    match mode {
        AuthMode::SignIn => ("Don't have an account? ", AuthMode::SignUp.title()),
        AuthMode::SignUp => ("Already have an account? ", AuthMode::SignIn.title()),
    }
}

/// Whether `form` is still the one that was live at `generation`.
fn is_current(form: AuthForm, generation: u64) -> bool {
    form.try_with_untracked(|state| state.generation()) == Some(generation)
}

#[component]
pub fn AuthModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] mode: Signal<AuthMode>,
    on_close: Callback<()>,
    on_mode_change: Callback<AuthMode>,
    on_auth_success: Callback<User>,
) -> impl IntoView {
    let form: AuthForm = RwSignal::new(FormState::new(AuthFields::new(mode.get_untracked())));
    let show_password = RwSignal::new(false);
    let show_confirm = RwSignal::new(false);

    Effect::new(move || {
        let _ = open.get();
        let mode = mode.get();
        form.update(|state| state.reset_with(AuthFields::new(mode)));
        show_password.set(false);
        show_confirm.set(false);
    });

    let submitting = move || form.with(|state| state.is_submitting());
    let status = Signal::derive(move || form.with(|state| state.status.clone()));
    let is_sign_up = move || mode.get() == AuthMode::SignUp;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        leptos::task::spawn_local(async move {
            let Some(user) = forms::run_submission(&SignalForm(form), &GlooAuthSubmitter).await else {
                return;
            };
            let Some(generation) = form.try_with_untracked(|state| state.generation()) else {
                return;
            };
            sleep(AUTH_SUCCESS_DELAY).await;
            // Closed or reopened during the delay: the success belongs to a
            // form that no longer exists.
            if !is_current(form, generation) {
                return;
            }
            on_auth_success.run(user);
            on_close.run(());
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <button class="modal__close" on:click=move |_| on_close.run(()) title="Close">
                        "✕"
                    </button>
                    <h2 class="modal__title">{move || heading(mode.get()).0}</h2>
                    <p class="modal__subtitle">{move || heading(mode.get()).1}</p>
                    <form class="modal__form" on:submit=on_submit novalidate=true>
                        <Show when=is_sign_up>
                            <AuthTextField form=form field=AuthField::Name label="Full Name" placeholder="John Doe"/>
                        </Show>
                        <AuthTextField
                            form=form
                            field=AuthField::Email
                            label="Email Address"
                            placeholder="john@example.com"
                            input_type=Signal::stored("email")
                        />
                        <PasswordInput form=form field=AuthField::Password label="Password" visible=show_password/>
                        <Show when=is_sign_up>
                            <PasswordInput
                                form=form
                                field=AuthField::ConfirmPassword
                                label="Confirm Password"
                                visible=show_confirm
                            />
                        </Show>
                        <StatusBanner status=status/>
                        <button class="btn btn--primary modal__submit" type="submit" disabled=submitting>
                            {move || submit_label(mode.get(), submitting())}
                        </button>
                    </form>
                    <p class="modal__switch">
                        {move || switch_prompt(mode.get()).0}
                        <button
                            class="modal__switch-link"
                            disabled=submitting
                            on:click=move |_| on_mode_change.run(mode.get_untracked().toggled())
                        >
                            {move || switch_prompt(mode.get()).1}
                        </button>
                    </p>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn AuthTextField(
    form: AuthForm,
    field: AuthField,
    label: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional, into)] input_type: Option<Signal<&'static str>>,
) -> impl IntoView {
    let name = field.as_str();
    let input_type = input_type.unwrap_or_else(|| Signal::stored("text"));
    let value = move || form.with(|state| state.fields.get(field).to_owned());
    let on_input = move |ev| {
        let text = event_target_value(&ev);
        form.update(|state| state.edit(|fields| fields.set(field, text)));
    };

    view! {
        <div class="field">
            <label class="field__label" for=name>
                {label}
            </label>
            <input
                id=name
                name=name
                type=move || input_type.get()
                placeholder=placeholder
                prop:value=value
                on:input=on_input
                disabled=move || form.with(|state| state.is_submitting())
            />
        </div>
    }
}

#[component]
fn PasswordInput(form: AuthForm, field: AuthField, label: &'static str, visible: RwSignal<bool>) -> impl IntoView {
    let input_type = Signal::derive(move || if visible.get() { "text" } else { "password" });

    view! {
        <div class="field field--password">
            <AuthTextField form=form field=field label=label placeholder="••••••••" input_type=input_type/>
            <button
                class="field__reveal"
                type="button"
                title=move || if visible.get() { "Hide password" } else { "Show password" }
                on:click=move |_| visible.update(|v| *v = !*v)
            >
                {move || if visible.get() { "🙈" } else { "👁" }}
            </button>
        </div>
    }
}
