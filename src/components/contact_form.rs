use gloo_timers::callback::Timeout;
use log::{debug, info};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::TOAST_LIFETIME_MS;
use crate::content::ContactContent;
use crate::validators::{
    ContactField, ContactFormAction, ContactFormErrors, ContactFormValues, ValidationError,
};

const CONFIRMATION: &str = "Thanks! We will reach out shortly.";

#[derive(Clone, Debug, PartialEq)]
struct Toast {
    serial: u32,
    message: &'static str,
}

impl Toast {
    /// The confirmation to show after `previous`. Never equal to it, so the
    /// dismiss timer always restarts.
    fn confirmation_after(previous: Option<&Toast>) -> Self {
        Self {
            serial: previous.map_or(0, |shown| shown.serial.wrapping_add(1)),
            message: CONFIRMATION,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub content: ContactContent,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let values = use_reducer(ContactFormValues::default);
    let errors = use_state(ContactFormErrors::default);
    let toast = use_state(|| None::<Toast>);

    // Every confirmation gets a fresh serial, so a repeat submit restarts
    // the clock.
    {
        let shown = (*toast).clone();
        let toast = toast.clone();
        use_effect_with_deps(
            move |shown: &Option<Toast>| {
                let timeout = shown
                    .as_ref()
                    .map(|_| Timeout::new(TOAST_LIFETIME_MS, move || toast.set(None)));
                move || drop(timeout)
            },
            shown,
        );
    }

    let on_change = |field: ContactField| {
        let values = values.clone();
        Callback::from(move |value: String| {
            values.dispatch(ContactFormAction::SetField(field, value));
        })
    };

    let onsubmit = {
        let values = values.clone();
        let errors = errors.clone();
        let toast = toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let found = values.validate();
            if !found.is_empty() {
                let invalid: Vec<&str> = found.iter().map(|(field, _)| field.id()).collect();
                debug!("contact form rejected, invalid fields: {:?}", invalid);
                errors.set(found);
                return;
            }
            info!("Contact request submitted (facility type: {})", values.facility_type);
            errors.set(ContactFormErrors::default());
            values.dispatch(ContactFormAction::Reset);
            toast.set(Some(Toast::confirmation_after((*toast).as_ref())));
        })
    };

    let on_message = {
        let on_change = on_change(ContactField::Message);
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };
    let message_error = errors.get(ContactField::Message);

    html! {
        <div class="contact-container">
            <style>{CONTACT_CSS}</style>
            <div class="contact-header">
                <div class="section-pill">{"Contact"}</div>
                <h2 id="contact-title">{&props.content.headline}</h2>
                <p class="contact-subheadline">{&props.content.subheadline}</p>
            </div>
            <form class="contact-form" onsubmit={onsubmit} novalidate=true>
                if let Some(shown) = (*toast).clone() {
                    <div class="contact-toast" role="status" aria-live="polite">{shown.message}</div>
                }
                <div class="contact-row">
                    <TextField
                        label="Name"
                        field={ContactField::Name}
                        input_type="text"
                        autocomplete="name"
                        value={values.get(ContactField::Name).to_string()}
                        error={errors.get(ContactField::Name)}
                        on_change={on_change(ContactField::Name)}
                    />
                    <TextField
                        label="Company"
                        field={ContactField::Company}
                        input_type="text"
                        autocomplete="organization"
                        value={values.get(ContactField::Company).to_string()}
                        error={errors.get(ContactField::Company)}
                        on_change={on_change(ContactField::Company)}
                    />
                </div>
                <div class="contact-row">
                    <TextField
                        label="Email"
                        field={ContactField::Email}
                        input_type="email"
                        autocomplete="email"
                        value={values.get(ContactField::Email).to_string()}
                        error={errors.get(ContactField::Email)}
                        on_change={on_change(ContactField::Email)}
                    />
                    <SelectField
                        label="Facility Type"
                        field={ContactField::FacilityType}
                        options={props.content.facility_types.clone()}
                        value={values.get(ContactField::FacilityType).to_string()}
                        error={errors.get(ContactField::FacilityType)}
                        on_change={on_change(ContactField::FacilityType)}
                    />
                </div>
                <div>
                    <label for="message">{"Message"}</label>
                    <textarea
                        id="message"
                        name="message"
                        rows="4"
                        required=true
                        value={values.get(ContactField::Message).to_string()}
                        oninput={on_message}
                        aria-invalid={message_error.is_some().to_string()}
                        aria-describedby={message_error.map(|_| error_id(ContactField::Message))}
                    />
                    { error_text(ContactField::Message, message_error) }
                </div>
                <div class="contact-footer">
                    <p class="contact-note">
                        {"We respond within two business days. Your information stays private."}
                    </p>
                    <button type="submit" class="contact-submit">{&props.content.submit_cta}</button>
                </div>
            </form>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TextFieldProps {
    label: AttrValue,
    field: ContactField,
    input_type: AttrValue,
    autocomplete: AttrValue,
    value: String,
    error: Option<ValidationError>,
    on_change: Callback<String>,
}

#[function_component(TextField)]
fn text_field(props: &TextFieldProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };
    let id = props.field.id();

    html! {
        <div>
            <label for={id}>{&props.label}</label>
            <input
                id={id}
                name={id}
                type={props.input_type.clone()}
                autocomplete={props.autocomplete.clone()}
                required=true
                value={props.value.clone()}
                {oninput}
                aria-invalid={props.error.is_some().to_string()}
                aria-describedby={props.error.map(|_| error_id(props.field))}
            />
            { error_text(props.field, props.error) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SelectFieldProps {
    label: AttrValue,
    field: ContactField,
    options: Vec<String>,
    value: String,
    error: Option<ValidationError>,
    on_change: Callback<String>,
}

#[function_component(SelectField)]
fn select_field(props: &SelectFieldProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };
    let id = props.field.id();

    html! {
        <div>
            <label for={id}>{&props.label}</label>
            <select
                id={id}
                name={id}
                required=true
                {onchange}
                aria-invalid={props.error.is_some().to_string()}
                aria-describedby={props.error.map(|_| error_id(props.field))}
            >
                <option value="" selected={props.value.is_empty()}>{"Select facility type"}</option>
                { for props.options.iter().map(|option| html! {
                    <option value={option.clone()} selected={*option == props.value}>{option}</option>
                }) }
            </select>
            { error_text(props.field, props.error) }
        </div>
    }
}

fn error_id(field: ContactField) -> String {
    format!("{}-error", field.id())
}

fn error_text(field: ContactField, error: Option<ValidationError>) -> Html {
    match error {
        Some(error) => html! {
            <p id={error_id(field)} class="field-error">{error.to_string()}</p>
        },
        None => html! {},
    }
}

const CONTACT_CSS: &str = r#"
    .contact-container {
        max-width: 56rem;
        margin: 0 auto;
        padding: 0 1.5rem;
        display: flex;
        flex-direction: column;
        gap: 2rem;
    }
    .section-pill {
        display: inline-flex;
        padding: 0.25rem 0.75rem;
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 999px;
        font-size: 0.75rem;
        letter-spacing: 0.2em;
        text-transform: uppercase;
        color: #8b98a5;
    }
    .contact-header h2 {
        font-size: 2.25rem;
        font-weight: 600;
        margin: 1rem 0;
    }
    .contact-subheadline {
        color: #8b98a5;
    }
    .contact-form {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
        padding: 1.5rem;
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 1.5rem;
        background: rgba(11, 15, 20, 0.7);
        backdrop-filter: blur(10px);
    }
    .contact-row {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1.5rem;
    }
    .contact-form label {
        display: block;
        font-size: 0.875rem;
        font-weight: 500;
        color: #e6edf3;
    }
    .contact-form input,
    .contact-form select,
    .contact-form textarea {
        width: 100%;
        margin-top: 0.5rem;
        padding: 0.75rem 1rem;
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 1rem;
        background: rgba(20, 26, 34, 0.7);
        color: #e6edf3;
        font-size: 0.875rem;
    }
    .contact-form [aria-invalid="true"] {
        border-color: #6ee7b7;
    }
    .field-error {
        margin-top: 0.5rem;
        font-size: 0.75rem;
        color: #6ee7b7;
    }
    .contact-toast {
        padding: 0.75rem 1rem;
        border: 1px solid rgba(110, 231, 183, 0.4);
        border-radius: 1rem;
        background: rgba(110, 231, 183, 0.1);
        color: #6ee7b7;
        font-size: 0.875rem;
    }
    .contact-footer {
        display: flex;
        align-items: center;
        justify-content: space-between;
        gap: 1rem;
    }
    .contact-note {
        font-size: 0.75rem;
        color: #8b98a5;
    }
    .contact-submit {
        padding: 0.75rem 1.5rem;
        border: none;
        border-radius: 999px;
        background: #6ee7b7;
        color: #0b0f14;
        font-weight: 600;
        cursor: pointer;
    }
    .contact-submit:hover {
        background: rgba(110, 231, 183, 0.9);
    }
    @media (max-width: 768px) {
        .contact-row {
            grid-template-columns: 1fr;
        }
        .contact-footer {
            flex-direction: column;
            align-items: flex-start;
        }
    }
"#;
