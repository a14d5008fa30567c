//! Application shell: owns the page-level state signals and assembles the
//! sections.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use site_core::{ContactController, MenuState, RevealTracker, CONTACT_WEBHOOK_URL};

use crate::transport::FetchWebhookTransport;
use crate::ui::contact_modal::ContactModal;
use crate::ui::hero::Hero;
use crate::ui::navbar::Navbar;
use crate::ui::sections::{
    BrandsSection, ContactCtaSection, ProblemSection, ServiceModelSection, SiteFooter,
    SolutionSection, TeamSection,
};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Each piece of view state has exactly one owner; components receive
    // the signals they render from and nothing else.
    let contact = RwSignal::new(ContactController::new());
    let menu = RwSignal::new(MenuState::default());
    let reveals = RwSignal::new(RevealTracker::default());
    let transport = FetchWebhookTransport::new(CONTACT_WEBHOOK_URL);

    view! {
        <Title text="KORA — Where your company’s knowledge is never lost"/>
        <div class="landing-container">
            <Navbar menu=menu/>
            <Hero contact=contact/>
            <ContactModal contact=contact transport=transport/>

            <ProblemSection reveals=reveals/>
            <SolutionSection reveals=reveals/>
            <ServiceModelSection reveals=reveals contact=contact/>
            <BrandsSection reveals=reveals/>
            <TeamSection reveals=reveals/>
            <ContactCtaSection reveals=reveals contact=contact/>

            <SiteFooter/>
        </div>
    }
}
