use leptos::prelude::*;
use site_core::ContactController;

#[component]
pub fn Hero(contact: RwSignal<ContactController>) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-content">
                <h2>
                    "Where your company’s knowledge "
                    <span class="italic-thin">"is never lost."</span>
                </h2>

                <p>
                    "We transform your team’s know-how into an intelligent, automated onboarding experience — so every new hire becomes productive from day one."
                </p>
                <button class="btn-primary" on:click=move |_| contact.update(|c| c.open())>
                    "Get in touch"
                </button>
            </div>

            <div class="hero-animation">
                <img src="/technology.png" alt="" class="hero-illustration" loading="lazy"/>
            </div>
        </section>
    }
}
