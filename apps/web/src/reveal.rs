//! IntersectionObserver glue driving the one-shot section reveals.

use leptos::html;
use leptos::prelude::*;
use site_core::{RevealTracker, Section, REVEAL_THRESHOLD};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Wraps one top-level page section: renders the fixed anchor target and
/// flips the `revealed` class the first time the section reaches the
/// visibility threshold.
#[component]
pub fn RevealSection(
    section: Section,
    reveals: RwSignal<RevealTracker>,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Section>::new();

    Effect::new(move |registered: Option<bool>| {
        if registered.unwrap_or(false) {
            return true;
        }
        let Some(element) = node_ref.get() else {
            return false;
        };
        observe_once(&element, section, reveals);
        true
    });

    view! {
        <section
            id=section.anchor()
            node_ref=node_ref
            class=class
            class:revealed=move || reveals.with(|tracker| tracker.is_revealed(section))
        >
            {children()}
        </section>
    }
}

/// Registers a trigger-once observer for `element`. The tracker decides
/// whether a callback actually reveals; the observer is dropped from the
/// element as soon as it does.
fn observe_once(element: &web_sys::HtmlElement, section: Section, reveals: RwSignal<RevealTracker>) {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let ratio = entry.intersection_ratio();
                let newly_revealed = reveals
                    .try_update(|tracker| tracker.record_intersection(section, ratio))
                    .unwrap_or(false);
                if newly_revealed {
                    observer.unobserve(&entry.target());
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(element);
            // The callback must outlive this scope; the observer keeps
            // firing until the first reveal unobserves the element.
            callback.forget();
        }
        Err(err) => {
            tracing::warn!(?err, "IntersectionObserver unavailable; revealing section immediately");
            reveals.update(|tracker| {
                tracker.record_intersection(section, 1.0);
            });
        }
    }
}
