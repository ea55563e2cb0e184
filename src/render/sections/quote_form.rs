use leptos::prelude::*;

use crate::models::{QuoteField, ServiceKind};

pub const QUOTE_ACTION: &str = "/api/quote";

fn field_id(prefix: &str, field: QuoteField) -> String {
    format!("{prefix}{}", field.as_str())
}

/// One instance of the quote form. The page carries two; `id_prefix` keeps
/// their element ids apart while the field names stay shared, which is what
/// the script keys the common form state on.
#[component]
pub fn QuoteForm(
    id_prefix: &'static str,
    name_placeholder: &'static str,
    email_placeholder: &'static str,
    message_placeholder: &'static str,
    submit_label: &'static str,
) -> impl IntoView {
    view! {
        <form class="quote-form" action=QUOTE_ACTION method="post" data-quote-form="">
            <label class="field">
                <span class="field-label">"Full Name *"</span>
                <input
                    id=field_id(id_prefix, QuoteField::Name)
                    name=QuoteField::Name.as_str()
                    type="text"
                    required=true
                    placeholder=name_placeholder
                />
            </label>
            <label class="field">
                <span class="field-label">"Email Address *"</span>
                <input
                    id=field_id(id_prefix, QuoteField::Email)
                    name=QuoteField::Email.as_str()
                    type="email"
                    required=true
                    placeholder=email_placeholder
                />
            </label>
            <label class="field">
                <span class="field-label">"Phone Number *"</span>
                <input
                    id=field_id(id_prefix, QuoteField::Phone)
                    name=QuoteField::Phone.as_str()
                    type="tel"
                    required=true
                    placeholder="(587) 501-6994"
                />
            </label>
            <label class="field">
                <span class="field-label">"Service Needed *"</span>
                <select
                    id=field_id(id_prefix, QuoteField::Service)
                    name=QuoteField::Service.as_str()
                    required=true
                >
                    <option value="">"Select a service..."</option>
                    {ServiceKind::ALL.into_iter().map(|kind| view! {
                        <option value=kind.as_str()>{kind.label()}</option>
                    }).collect::<Vec<_>>()}
                </select>
            </label>
            <label class="field">
                <span class="field-label">"Project Details *"</span>
                <textarea
                    id=field_id(id_prefix, QuoteField::Message)
                    name=QuoteField::Message.as_str()
                    rows="4"
                    required=true
                    placeholder=message_placeholder
                ></textarea>
            </label>
            <button type="submit" class="button button-primary button-block">
                {submit_label}
            </button>
        </form>
    }
}
