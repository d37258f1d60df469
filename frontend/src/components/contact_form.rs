use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::api::BackendHandle;
use crate::components::services::SERVICES;
use crate::contact::{deliver, ContactAction, ContactDesk, SubmitStatus};
use crate::models::ContactField;

fn on_text(desk: &UseReducerHandle<ContactDesk>, field: ContactField) -> Callback<InputEvent> {
    let desk = desk.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        desk.dispatch(ContactAction::Edit(field, input.value()));
    })
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let backend = use_context::<BackendHandle>().unwrap_or_else(BackendHandle::from_config);
    let desk = use_reducer(ContactDesk::default);

    let on_submit = {
        let desk = desk.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(form) = desk.outgoing() else {
                desk.dispatch(ContactAction::Incomplete);
                return;
            };
            desk.dispatch(ContactAction::Sending);
            let desk = desk.clone();
            let backend = backend.clone();
            spawn_local(async move {
                let outcome = deliver(backend.0.as_ref(), form).await;
                desk.dispatch(outcome);
            });
        })
    };

    let on_service = {
        let desk = desk.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            desk.dispatch(ContactAction::Edit(ContactField::Service, select.value()));
        })
    };

    let on_message = {
        let desk = desk.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            desk.dispatch(ContactAction::Edit(ContactField::Message, area.value()));
        })
    };

    let form = &desk.form;
    let pending = desk.is_pending();

    html! {
        <section id="contact" class="contact-section">
            <style>
                {r#"
                    .contact-section {
                        background: #0b0e13;
                        color: white;
                        padding: 5rem 0;
                    }

                    .contact-content {
                        max-width: 56rem;
                    }

                    .contact-section form {
                        margin-top: 2rem;
                        display: grid;
                        gap: 1rem;
                    }

                    @media (min-width: 640px) {
                        .contact-section form {
                            grid-template-columns: 1fr 1fr;
                        }
                        .wide {
                            grid-column: span 2;
                        }
                    }

                    .contact-section input, .contact-section select, .contact-section textarea {
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 0.25rem;
                        padding: 0.75rem 1rem;
                        color: white;
                        outline: none;
                    }

                    .contact-section input:focus, .contact-section select:focus, .contact-section textarea:focus {
                        border-color: rgb(103, 232, 249);
                    }

                    .contact-section button {
                        justify-self: start;
                    }

                    .contact-section button:disabled {
                        opacity: 0.6;
                    }

                    .status.failed {
                        color: rgb(248, 113, 113);
                    }

                    .status.sent {
                        color: rgb(52, 211, 153);
                    }
                "#}
            </style>
            <div class="container contact-content">
                <h2>{"Let's build something cinematic"}</h2>
                <form onsubmit={on_submit}>
                    <input required=true placeholder="Name" value={form.name.clone()} oninput={on_text(&desk, ContactField::Name)} />
                    <input required=true type="email" placeholder="Email" value={form.email.clone()} oninput={on_text(&desk, ContactField::Email)} />
                    <input placeholder="Company" value={form.company.clone()} oninput={on_text(&desk, ContactField::Company)} />
                    <select onchange={on_service}>
                        <option value="" selected={form.service.is_empty()}>{"Service"}</option>
                        { for SERVICES.iter().map(|service| html! {
                            <option key={service.title} value={service.title} selected={form.service == service.title}>
                                { service.title }
                            </option>
                        }) }
                    </select>
                    <input placeholder="Budget (optional)" value={form.budget.clone()} oninput={on_text(&desk, ContactField::Budget)} />
                    <textarea required=true placeholder="Project details" rows="5" class="wide" value={form.message.clone()} oninput={on_message} />
                    <button type="submit" class="wide button-primary cursor-hover" disabled={pending}>
                        { if pending { "Sending..." } else { "Send" } }
                    </button>
                    <div class={classes!(
                        "wide",
                        "status",
                        matches!(desk.status, SubmitStatus::Failed | SubmitStatus::Incomplete).then(|| "failed"),
                        (desk.status == SubmitStatus::Sent).then(|| "sent"),
                    )}>
                        { desk.status.message() }
                    </div>
                </form>
            </div>
        </section>
    }
}
