use leptos::prelude::*;
use leptos::server_fn::codec::Json;

use crate::api::errors::server_message;
use crate::app::SiteLayout;
use crate::components::hero::Hero;
use crate::components::seo::Seo;
use crate::content::leads::{LeadSubmission, OTHER_SUBJECT, SUBJECT_CHOICES};

/// Store a contact-form submission; returns the new lead's identifier.
#[server(input = Json)]
pub async fn submit_contact(submission: LeadSubmission) -> Result<String, ServerFnError> {
    let state = crate::state::app_state()?;
    crate::content::leads::submit_lead(state.leads.as_ref(), submission)
        .await
        .map_err(crate::api::errors::to_server_error)
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let form = RwSignal::new(LeadSubmission::default());
    let (status, set_status) = signal(None::<Result<String, String>>);

    let submit = Action::new(move |submission: &LeadSubmission| {
        let submission = submission.clone();
        async move {
            match submit_contact(submission).await {
                Ok(_) => {
                    form.set(LeadSubmission::default());
                    set_status.set(Some(Ok(
                        "Thank you. Your message has been received and you will hear back shortly.".to_string(),
                    )));
                }
                Err(e) => set_status.set(Some(Err(server_message(&e)))),
            }
        }
    });

    let is_other = move || form.with(|f| f.subject == OTHER_SUBJECT);

    view! {
        <SiteLayout>
            <Seo title="Contact" path="/contact" description="Book a consultation or send a question about your legal matter."/>
            <Hero
                title="Get in touch"
                subtitle="Describe your matter briefly and you will receive a reply within two working days."
            />
            <section class="container contact">
                <form
                    class="contact-form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        set_status.set(None);
                        submit.dispatch(form.get_untracked());
                    }
                >
                    <label>
                        "Name"
                        <input
                            type="text"
                            class="input"
                            required
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Email"
                        <input
                            type="email"
                            class="input"
                            required
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Phone (optional)"
                        <input
                            type="tel"
                            class="input"
                            prop:value=move || form.with(|f| f.phone.clone().unwrap_or_default())
                            on:input=move |ev| form.update(|f| f.phone = Some(event_target_value(&ev)))
                        />
                    </label>
                    <label>
                        "Subject"
                        <select
                            class="select"
                            prop:value=move || form.with(|f| f.subject.clone())
                            on:change=move |ev| form.update(|f| f.subject = event_target_value(&ev))
                        >
                            <option value="">"Select a subject"</option>
                            {SUBJECT_CHOICES
                                .iter()
                                .map(|choice| view! { <option value=*choice>{*choice}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <Show when=is_other>
                        <label>
                            "Your subject"
                            <input
                                type="text"
                                class="input"
                                required
                                prop:value=move || form.with(|f| f.custom_subject.clone().unwrap_or_default())
                                on:input=move |ev| form.update(|f| f.custom_subject = Some(event_target_value(&ev)))
                            />
                        </label>
                    </Show>
                    <label>
                        "Message"
                        <textarea
                            class="textarea"
                            rows="6"
                            required
                            prop:value=move || form.with(|f| f.message.clone())
                            on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                        ></textarea>
                    </label>
                    <button type="submit" class="btn btn-primary" prop:disabled=move || submit.pending().get()>
                        {move || if submit.pending().get() { "Sending..." } else { "Send message" }}
                    </button>
                    {move || status.get().map(|status| match status {
                        Ok(message) => view! { <p class="alert alert-success">{message}</p> }.into_any(),
                        Err(message) => view! { <p class="alert alert-error">{message}</p> }.into_any(),
                    })}
                </form>
            </section>
        </SiteLayout>
    }
}
