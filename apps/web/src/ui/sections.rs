//! The scroll-revealed content sections, rendered from the static
//! catalogs in `site_core::content`.

use chrono::{Datelike, Local};
use leptos::prelude::*;
use site_core::content::{
    self, IconVariant, PARTNER_LOGOS, PRICING_TIERS, PROBLEM_STATS, TEAM, WORKFLOW_STEPS,
};
use site_core::{ContactController, RevealTracker, Section};

use crate::reveal::RevealSection;

// -- Problem ----------------------------------------------------------------

#[component]
pub fn ProblemSection(reveals: RwSignal<RevealTracker>) -> impl IntoView {
    view! {
        <RevealSection section=Section::Problem reveals=reveals class="section problem-section">
            <h3>"The Problem"</h3>
            <div class="problem-grid">
                {PROBLEM_STATS
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class="problem-card">
                                <span class="stat">{format!("{}%", stat.percent)}</span>
                                <p>{stat.summary}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </RevealSection>
    }
}

// -- Solution ---------------------------------------------------------------

#[component]
pub fn SolutionSection(reveals: RwSignal<RevealTracker>) -> impl IntoView {
    view! {
        <RevealSection section=Section::Solution reveals=reveals class="section solution-section">
            <div class="solution-left">
                <h3>"Our Solution"</h3>
                <h4>"KORA automates knowledge retention and onboarding with a human touch."</h4>
                <p class="quote">
                    "“Technology that understands people.”"
                    <br/>
                    <br/>
                    "Fast, human onboarding that adapts to your company’s culture and grows with your team."
                </p>
            </div>

            <div class="solution-right">
                {WORKFLOW_STEPS
                    .iter()
                    .map(|step| {
                        view! {
                            <div class="solution-card">
                                <img
                                    src=step.icon_path(IconVariant::Blue)
                                    alt=step.name
                                    class="solution-icon blue-icon"
                                    loading="lazy"
                                />
                                <img
                                    src=step.icon_path(IconVariant::White)
                                    alt=format!("{} white", step.name)
                                    class="solution-icon white-icon"
                                    loading="lazy"
                                />
                                <h5>{step.name}</h5>
                                <p>{step.summary}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </RevealSection>
    }
}

// -- Service model ----------------------------------------------------------

#[component]
pub fn ServiceModelSection(
    reveals: RwSignal<RevealTracker>,
    contact: RwSignal<ContactController>,
) -> impl IntoView {
    view! {
        <RevealSection
            section=Section::ServiceModel
            reveals=reveals
            class="section service-section centered"
        >
            <h3>"Our Service Model"</h3>
            <p class="service-description">
                "KORA operates as a " <b>"monthly subscription"</b>
                " that adapts to your company’s size and information flow. Whether you’re a startup or a large enterprise, you only pay for what you use — ensuring a scalable, transparent, and flexible experience."
            </p>

            <div class="service-cards">
                {PRICING_TIERS
                    .iter()
                    .map(|tier| {
                        view! {
                            <div class=format!("service-card {}", tier.band)>
                                <img src=tier.icon alt=tier.title class="service-icon" loading="lazy"/>
                                <div class="price-tag">
                                    <span class="amount">{tier.price_label()}</span>
                                    <span class="period">
                                        " / employee monthly for " <b>{tier.title.to_lowercase()}</b>
                                    </span>
                                </div>
                                <p>{tier.summary}</p>
                                <button class="btn-outline" on:click=move |_| contact.update(|c| c.open())>
                                    "Buy Now"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </RevealSection>
    }
}

// -- Brands -----------------------------------------------------------------

#[component]
pub fn BrandsSection(reveals: RwSignal<RevealTracker>) -> impl IntoView {
    view! {
        <RevealSection section=Section::Brands reveals=reveals class="section brands-section">
            <h3>"Trusted By"</h3>
            <div class="brands-wrapper">
                <div class="brands-slider">
                    {content::partner_logo_strip()
                        .into_iter()
                        .enumerate()
                        .map(|(index, logo)| {
                            let alt = if index < PARTNER_LOGOS.len() {
                                format!("Brand {}", index + 1)
                            } else {
                                format!("Brand duplicate {}", index % PARTNER_LOGOS.len() + 1)
                            };
                            view! {
                                <img src=format!("/{logo}") alt=alt class="brand-logo" loading="lazy"/>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="fade-left"></div>
                <div class="fade-right"></div>
            </div>
        </RevealSection>
    }
}

// -- Team -------------------------------------------------------------------

#[component]
pub fn TeamSection(reveals: RwSignal<RevealTracker>) -> impl IntoView {
    view! {
        <RevealSection section=Section::Team reveals=reveals class="section team-section">
            <div class="team-container">
                <div class="team-text">
                    <h3>"Our Team"</h3>
                    <p>
                        "We are a multidisciplinary team deeply committed to solving how organizations capture and share knowledge. Our mission is to turn experience into progress — empowering every employee to learn, grow, and contribute from day one."
                    </p>
                </div>

                <div class="team-photos">
                    {TEAM
                        .iter()
                        .map(|member| {
                            view! {
                                <div class="team-photo-card">
                                    <img src=member.photo alt=member.name class="team-photo" loading="lazy"/>
                                    <div class="overlay">
                                        <h4>{member.name}</h4>
                                        <p>{member.role}</p>
                                        <a
                                            href=member.linkedin
                                            target="_blank"
                                            rel="noreferrer"
                                            class="linkedin-icon-btn"
                                        >
                                            {linkedin_icon()}
                                        </a>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

// -- Contact CTA ------------------------------------------------------------

#[component]
pub fn ContactCtaSection(
    reveals: RwSignal<RevealTracker>,
    contact: RwSignal<ContactController>,
) -> impl IntoView {
    view! {
        <RevealSection section=Section::Contact reveals=reveals class="contact-section">
            <h3>"Let’s talk"</h3>
            <p>
                "Want to learn more about how KORA can help your team capture knowledge and improve onboarding?"
            </p>
            <button class="btn-primary" on:click=move |_| contact.update(|c| c.open())>
                "Contact Us"
            </button>

            <div class="social-icons">
                <a href=content::COMPANY_LINKEDIN_URL target="_blank" rel="noreferrer">
                    {linkedin_icon()}
                </a>
                <a href=content::COMPANY_INSTAGRAM_URL target="_blank" rel="noreferrer">
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round">
                        <rect x="2" y="2" width="20" height="20" rx="5"/>
                        <path d="M16 11.37a4 4 0 1 1-7.9 1.26 4 4 0 0 1 7.9-1.26z"/>
                        <line x1="17.5" y1="6.5" x2="17.51" y2="6.5"/>
                    </svg>
                </a>
                <a href=content::CONTACT_MAIL_URL>
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round">
                        <path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"/>
                        <polyline points="22,6 12,13 2,6"/>
                    </svg>
                </a>
            </div>
        </RevealSection>
    }
}

// -- Footer -----------------------------------------------------------------

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! { <footer class="footer">{footer_line(Local::now().year())}</footer> }
}

fn footer_line(year: i32) -> String {
    format!("© {year} KORA — Integrate. Share. Scale.")
}

fn linkedin_icon() -> impl IntoView {
    view! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round">
            <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z"/>
            <rect x="2" y="9" width="4" height="12"/>
            <circle cx="4" cy="4" r="2"/>
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::footer_line;

    #[test]
    fn footer_carries_the_tagline_and_year() {
        assert_eq!(footer_line(2025), "© 2025 KORA — Integrate. Share. Scale.");
    }
}
