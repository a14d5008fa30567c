use leptos::prelude::*;
use site_core::{content, MenuState, Section};

/// Fixed top bar: logo, hamburger toggle, and the six in-page anchor
/// links. Following any link collapses the mobile menu.
#[component]
pub fn Navbar(menu: RwSignal<MenuState>) -> impl IntoView {
    view! {
        <header class="navbar">
            <img src=content::KORA_LOGO alt="KORA logo" class="logo-img"/>

            <button
                class="menu-toggle"
                aria-label="Toggle menu"
                on:click=move |_| menu.update(|state| *state = state.toggled())
            >
                {move || {
                    if menu.get().is_open() {
                        view! {
                            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round">
                                <path d="M18 6 6 18M6 6l12 12"/>
                            </svg>
                        }
                            .into_any()
                    } else {
                        view! {
                            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round">
                                <path d="M4 6h16M4 12h16M4 18h16"/>
                            </svg>
                        }
                            .into_any()
                    }
                }}
            </button>

            <nav class="nav-links" class:open=move || menu.get().is_open()>
                {Section::ALL
                    .iter()
                    .map(|section| {
                        let section = *section;
                        view! {
                            <a
                                href=format!("#{}", section.anchor())
                                on:click=move |_| menu.set(MenuState::Closed)
                            >
                                {section.nav_label()}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
