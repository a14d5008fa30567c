use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use site_core::{ContactController, ContactStage, SubmitOutcome, TransportError, WebhookTransport};

use crate::transport::FetchWebhookTransport;

/// Contact overlay and form. Visible for every stage except `Closed`;
/// clicking the dimmed backdrop dismisses unless a request is in flight.
#[component]
pub fn ContactModal(
    contact: RwSignal<ContactController>,
    transport: FetchWebhookTransport,
) -> impl IntoView {
    view! {
        {move || {
            contact
                .with(|c| c.modal_visible())
                .then(|| {
                    let transport = transport.clone();
                    view! {
                        <div class="modal-overlay" on:click=move |_| contact.update(|c| c.dismiss())>
                            <div class="contact-modal" on:click=move |ev| ev.stop_propagation()>
                                <h3>"Contact Us"</h3>
                                {move || {
                                    if contact.with(|c| c.stage() == ContactStage::Sent) {
                                        view! { <SuccessPanel contact=contact/> }.into_any()
                                    } else {
                                        view! { <ContactForm contact=contact transport=transport.clone()/> }
                                            .into_any()
                                    }
                                }}
                            </div>
                        </div>
                    }
                })
        }}
    }
}

#[component]
fn ContactForm(
    contact: RwSignal<ContactController>,
    transport: FetchWebhookTransport,
) -> impl IntoView {
    let submitting = move || contact.with(|c| c.is_submitting());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let submission = match contact.try_update(|c| c.begin_submit()) {
            Some(Ok(submission)) => submission,
            Some(Err(err)) => {
                // The `required` inputs keep this path from user flows.
                tracing::debug!(error = %err, "submission rejected before transport");
                return;
            }
            None => return,
        };

        let transport = transport.clone();
        spawn_local(async move {
            let outcome = transport.deliver(&submission).await;
            let completion = contact.try_update(|c| c.finish_submit(outcome)).flatten();
            if let Some(SubmitOutcome::Failed(err)) = completion {
                alert_failure(&err);
            }
        });
    };

    view! {
        <form on:submit=on_submit>
            <input
                name="name"
                type="text"
                placeholder="Your name"
                required
                prop:value=move || contact.with(|c| c.name().to_string())
                on:input=move |ev| contact.update(|c| c.set_name(event_target_value(&ev)))
            />
            <input
                name="email"
                type="email"
                placeholder="Your email"
                required
                prop:value=move || contact.with(|c| c.email().to_string())
                on:input=move |ev| contact.update(|c| c.set_email(event_target_value(&ev)))
            />
            <textarea
                name="message"
                placeholder="Your message"
                rows="4"
                required
                prop:value=move || contact.with(|c| c.message().to_string())
                on:input=move |ev| contact.update(|c| c.set_message(event_target_value(&ev)))
            ></textarea>

            <button type="submit" class="btn-primary" prop:disabled=submitting>
                {move || {
                    if submitting() {
                        view! { <span class="spinner"></span> }.into_any()
                    } else {
                        "Send Message".into_any()
                    }
                }}
            </button>
        </form>
    }
}

#[component]
fn SuccessPanel(contact: RwSignal<ContactController>) -> impl IntoView {
    view! {
        <div class="form-success">
            <h4>"✅ Message sent successfully!"</h4>
            <p>"We’ll contact you shortly."</p>
            <button class="btn-primary" on:click=move |_| contact.update(|c| c.dismiss())>
                "Close"
            </button>
        </div>
    }
}

/// One blocking alert per failed attempt; the stage machine has already
/// reopened the form by the time this fires.
fn alert_failure(err: &TransportError) {
    tracing::warn!(error = %err, "surfacing transport failure to visitor");
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message("⚠️ There was a problem sending your message.");
    }
}
