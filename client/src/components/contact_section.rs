//! Contact form section.
//!
//! DESIGN
//! ======
//! The form state lives in one signal owned by this component. Submission is
//! delegated to `forms::run_submission`, so validation, the single-flight
//! guard and status bookkeeping are identical on every platform; this file
//! only wires inputs to fields and renders the result.

use forms::FormState;
use forms::contact::{ContactField, ContactFormInput};
use leptos::prelude::*;

use crate::components::status_banner::StatusBanner;
use crate::content::{CONTACT_DETAILS, SOCIAL_LINKS};
use crate::net::api::GlooContactSubmitter;
use crate::state::form::SignalForm;

type ContactForm = RwSignal<FormState<ContactFormInput>>;

#[component]
pub fn ContactSection() -> impl IntoView {
    let form: ContactForm = RwSignal::new(FormState::new(ContactFormInput::default()));
    let submitting = move || form.with(|state| state.is_submitting());
    let status = Signal::derive(move || form.with(|state| state.status.clone()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        leptos::task::spawn_local(async move {
            let _ = forms::run_submission(&SignalForm(form), &GlooContactSubmitter::default()).await;
        });
    };

    view! {
        <section id="contact" class="section contact">
            <h2>"Get In Touch"</h2>
            <p class="contact__lead">"Have a project in mind? Send a message and we will get back to you."</p>
            <ContactDetails/>
            <form class="contact__form" on:submit=on_submit novalidate=true>
                <div class="contact__row">
                    <ContactInput form=form field=ContactField::Name label="Your Name" placeholder="John Doe"/>
                    <ContactInput
                        form=form
                        field=ContactField::Email
                        label="Email Address"
                        placeholder="john@example.com"
                        input_type="email"
                    />
                </div>
                <ContactInput form=form field=ContactField::Subject label="Subject" placeholder="What's this about?"/>
                <ContactInput
                    form=form
                    field=ContactField::Message
                    label="Message"
                    placeholder="Tell me about your project or ideas..."
                    multiline=true
                />
                <StatusBanner status=status/>
                <button class="btn btn--primary contact__submit" type="submit" disabled=submitting>
                    {move || if submitting() { "Sending..." } else { "Send Message" }}
                </button>
            </form>
        </section>
    }
}

#[component]
fn ContactDetails() -> impl IntoView {
    view! {
        <div class="contact__details">
            <ul class="contact__info">
                {CONTACT_DETAILS
                    .iter()
                    .map(|detail| {
                        let value = match detail.href {
                            Some(href) => view! { <a href=href>{detail.value}</a> }.into_any(),
                            None => view! { <span>{detail.value}</span> }.into_any(),
                        };
                        view! {
                            <li class="contact__info-row">
                                <span class="contact__info-label">{detail.label}</span>
                                {value}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="contact__social">
                {SOCIAL_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a class="contact__social-link" href=link.href target="_blank" rel="noopener noreferrer">
                                {link.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ContactInput(
    form: ContactForm,
    field: ContactField,
    label: &'static str,
    placeholder: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let name = field.as_str();
    let value = move || form.with(|state| state.fields.get(field).to_owned());
    let disabled = move || form.with(|state| state.is_submitting());
    let on_input = move |ev| {
        let text = event_target_value(&ev);
        form.update(|state| state.edit(|fields| fields.set(field, text)));
    };

    let control = if multiline {
        view! {
            <textarea
                id=name
                name=name
                rows="6"
                placeholder=placeholder
                prop:value=value
                on:input=on_input
                disabled=disabled
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=name
                name=name
                type=input_type.unwrap_or("text")
                placeholder=placeholder
                prop:value=value
                on:input=on_input
                disabled=disabled
            />
        }
        .into_any()
    };

    view! {
        <div class="field">
            <label class="field__label" for=name>
                {label}
            </label>
            {control}
        </div>
    }
}
