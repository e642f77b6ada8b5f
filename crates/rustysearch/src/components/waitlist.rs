use std::rc::Rc;

use dioxus::logger::tracing::{error, info, warn};
use dioxus::prelude::*;
use rustysearch_core::bootstrap::restore_waitlist;
use rustysearch_core::config::{SiteConfig, SUBMIT_LABEL};
use rustysearch_core::waitlist::{WaitlistState, WaitlistView};

use super::use_site_config;
use crate::platform::{create_waitlist, SiteWaitlist};
use crate::storage::create_platform_store;

/// Waitlist sign-up: the form while the visitor hasn't joined, the success
/// panel once they have (this session or an earlier one).
#[component]
pub fn WaitlistSection() -> Element {
    let config = use_site_config();
    let view = use_signal(|| WaitlistState::idle(SUBMIT_LABEL).view());
    let controller = use_signal(|| None::<Rc<SiteWaitlist>>);
    let interest = use_signal(|| config.read().default_interest().to_string());

    // Restore a previous sign-up before wiring the controller
    let mut view_signal = view;
    let mut controller_signal = controller;
    use_effect(move || {
        if controller_signal.peek().is_some() {
            return;
        }
        spawn(async move {
            let store = create_platform_store();
            let state = restore_waitlist(&store, SUBMIT_LABEL).await;
            view_signal.set(state.view());
            controller_signal.set(Some(Rc::new(create_waitlist(state, store))));
        });
    });

    // The browser still posts the form to the list service; this only drives
    // the local UI
    let handle_submit = move |_evt: FormEvent| {
        let Some(waitlist) = controller.read().clone() else {
            warn!("Waitlist submitted before storage was restored");
            return;
        };
        let interest = interest.read().clone();
        let mut view = view;

        spawn(async move {
            info!("📨 Submitting waitlist form (interest: {})", interest);
            let result = waitlist
                .submit(&interest, |next| view.set(next.clone()))
                .await;
            if let Err(e) = result {
                error!("Waitlist submission rejected: {}", e);
            }
        });
    };

    let current = view.read().clone();
    let site = config.read().clone();

    rsx! {
        section { id: "waitlist", class: "rs-section rs-waitlist",
            h2 { class: "rs-section-title", "Join the waitlist" }
            p { class: "rs-section-subtitle",
                "Be the first to try RustySearch on your own code."
            }
            WaitlistForm {
                site,
                view: current.clone(),
                interest,
                on_submit: handle_submit,
            }
            SuccessPanel { visible: current.success_visible }
        }
    }
}

#[component]
fn WaitlistForm(
    site: SiteConfig,
    view: WaitlistView,
    interest: Signal<String>,
    on_submit: EventHandler<FormEvent>,
) -> Element {
    let display = if view.form_visible { "block" } else { "none" };
    let button = view.button;

    rsx! {
        form {
            id: "waitlist-form",
            class: "rs-waitlist-form",
            style: "display: {display};",
            action: "{site.form_action}",
            method: "post",
            target: "{site.form_target}",
            onsubmit: move |evt| on_submit.call(evt),

            div { class: "rs-field",
                label { r#for: "email", "Email" }
                input {
                    id: "email",
                    name: "EMAIL",
                    r#type: "email",
                    required: true,
                    placeholder: "you@company.com",
                }
            }
            div { class: "rs-field",
                label { r#for: "interest", "I'd use RustySearch for" }
                select {
                    id: "interest",
                    name: "INTEREST",
                    value: "{interest}",
                    onchange: move |evt| interest.set(evt.value()),
                    for opt in site.interests.iter() {
                        option { key: "{opt.value}", value: "{opt.value}", "{opt.label}" }
                    }
                }
            }
            // Bot trap expected by the list service; must stay empty
            if let Some(field) = site.honeypot_field.as_ref() {
                div { class: "rs-honeypot", "aria-hidden": "true",
                    input {
                        r#type: "text",
                        name: "{field}",
                        tabindex: "-1",
                        value: "",
                    }
                }
            }
            button {
                class: "rs-btn rs-btn--primary",
                r#type: "submit",
                disabled: button.disabled,
                if button.busy {
                    span { class: "rs-spinner", "aria-hidden": "true" }
                }
                "{button.label}"
            }
        }
    }
}

#[component]
fn SuccessPanel(visible: bool) -> Element {
    let display = if visible { "block" } else { "none" };

    rsx! {
        div { id: "waitlist-success", class: "rs-waitlist-success", style: "display: {display};",
            h3 { "You're on the list! 🎉" }
            p { "We'll email you as soon as RustySearch is ready for you." }
        }
    }
}
