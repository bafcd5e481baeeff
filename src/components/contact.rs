use gloo_console::log;
use gloo_net::http::Request;
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;

/// Lifecycle of one contact-form submission. A new submit from `Success`
/// or `Error` re-enters `Loading`; the machine is reusable for the whole
/// page lifetime.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmissionStatus::Loading)
    }
}

const GENERIC_ERROR_MSG: &str = "Something went wrong. Please try again.";
const NETWORK_ERROR_MSG: &str = "Network error. Please check your connection and try again.";

/// Field values captured from the form at submit time.
struct InquiryFields {
    name: String,
    email: String,
    phone: String,
    company: String,
    message: String,
}

impl InquiryFields {
    /// Encodes the fields, plus the fixed subject line, as an
    /// `application/x-www-form-urlencoded` body for the relay.
    fn to_form_body(&self) -> String {
        let pairs = [
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("phone", self.phone.as_str()),
            ("company", self.company.as_str()),
            ("message", self.message.as_str()),
            ("_subject", config::inquiry_subject()),
        ];
        pairs
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[derive(Deserialize)]
struct RelayErrorBody {
    errors: Vec<RelayFieldError>,
}

#[derive(Deserialize)]
struct RelayFieldError {
    message: String,
}

/// Folds a rejection body from the relay into a display message. The relay
/// is expected to answer with `{"errors": [{"message": ...}, ...]}`; any
/// other shape falls back to the generic message.
fn relay_error_message(body: &str) -> String {
    match serde_json::from_str::<RelayErrorBody>(body) {
        Ok(parsed) if !parsed.errors.is_empty() => parsed
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        _ => GENERIC_ERROR_MSG.to_string(),
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let company = use_state(String::new);
    let message = use_state(String::new);
    let status = use_state(SubmissionStatus::default);
    let error_msg = use_state(String::new);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let company = company.clone();
        let message = message.clone();
        let status = status.clone();
        let error_msg = error_msg.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let fields = InquiryFields {
                name: (*name).clone(),
                email: (*email).clone(),
                phone: (*phone).clone(),
                company: (*company).clone(),
                message: (*message).clone(),
            };
            status.set(SubmissionStatus::Loading);
            error_msg.set(String::new());

            let name = name.clone();
            let email = email.clone();
            let phone = phone.clone();
            let company = company.clone();
            let message = message.clone();
            let status = status.clone();
            let error_msg = error_msg.clone();

            spawn_local(async move {
                match Request::post(config::get_relay_url())
                    .header("Content-Type", "application/x-www-form-urlencoded")
                    .header("Accept", "application/json")
                    .body(fields.to_form_body())
                    .send()
                    .await
                {
                    Ok(response) => {
                        if response.ok() {
                            status.set(SubmissionStatus::Success);
                            name.set(String::new());
                            email.set(String::new());
                            phone.set(String::new());
                            company.set(String::new());
                            message.set(String::new());
                        } else {
                            log!("Relay rejected inquiry, status:", response.status());
                            let body = response.text().await.unwrap_or_default();
                            error_msg.set(relay_error_message(&body));
                            status.set(SubmissionStatus::Error);
                        }
                    }
                    Err(e) => {
                        log!("Inquiry request failed:", e.to_string());
                        error_msg.set(NETWORK_ERROR_MSG.to_string());
                        status.set(SubmissionStatus::Error);
                    }
                }
            });
        })
    };

    html! {
        <section id="contact" class="contact-section">
            <div class="contact-content">
                <div class="contact-intro">
                    <h2>{"Let's talk"}</h2>
                    <p>{"Tell us about your goals. We'll propose a clear, cost-effective plan."}</p>
                    <div class="contact-details">
                        <p>{"✉️ sales@hemzinfotech.com"}</p>
                        <p>{"📞 +91 8015506314"}</p>
                        <p>{"📍 715A 7 Floor, Spencer Plaza Mall, Anna Salai, Chennai, Tamilnadu - 600002"}</p>
                    </div>
                </div>

                <form class="contact-form" onsubmit={onsubmit}>
                    <div class="form-grid">
                        <div class="form-field">
                            <label>{"Name"}</label>
                            <input
                                name="name"
                                required={true}
                                placeholder="Your name"
                                value={(*name).clone()}
                                onchange={let name = name.clone(); move |e: Event| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    name.set(input.value());
                                }}
                            />
                        </div>
                        <div class="form-field">
                            <label>{"Email"}</label>
                            <input
                                type="email"
                                name="email"
                                required={true}
                                placeholder="you@company.com"
                                value={(*email).clone()}
                                onchange={let email = email.clone(); move |e: Event| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    email.set(input.value());
                                }}
                            />
                        </div>
                        <div class="form-field wide">
                            <label>{"Phone"}</label>
                            <input
                                name="phone"
                                required={true}
                                inputmode="tel"
                                pattern={r"^[0-9+\-\s()]{7,20}$"}
                                title="Enter a valid phone number"
                                value={(*phone).clone()}
                                onchange={let phone = phone.clone(); move |e: Event| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    phone.set(input.value());
                                }}
                            />
                        </div>
                        <div class="form-field wide">
                            <label>{"Company"}</label>
                            <input
                                name="company"
                                placeholder="Company name"
                                value={(*company).clone()}
                                onchange={let company = company.clone(); move |e: Event| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    company.set(input.value());
                                }}
                            />
                        </div>
                        <div class="form-field wide">
                            <label>{"How can we help?"}</label>
                            <textarea
                                name="message"
                                rows="4"
                                placeholder="Cost optimization, migration, DevOps, security, etc."
                                value={(*message).clone()}
                                onchange={let message = message.clone(); move |e: Event| {
                                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                                    message.set(input.value());
                                }}
                            />
                        </div>
                    </div>

                    <button type="submit" class="submit-button" disabled={status.is_loading()}>
                        { if status.is_loading() { "Sending..." } else { "Send Inquiry" } }
                    </button>

                    {
                        match *status {
                            SubmissionStatus::Success => html! {
                                <p class="form-status success">{"✅ Thank you! Your message has been sent."}</p>
                            },
                            SubmissionStatus::Error => html! {
                                <p class="form-status error">{format!("❌ {}", *error_msg)}</p>
                            },
                            _ => html! {},
                        }
                    }

                    <p class="form-disclaimer">{"By submitting, you agree to our terms & privacy policy."}</p>
                </form>
            </div>
            <style>
                {r#"
                    .contact-section {
                        padding: 5rem 1.5rem;
                        background: #0f172a;
                        color: #fff;
                    }
                    .contact-content {
                        max-width: 1120px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2.5rem;
                        align-items: start;
                    }
                    .contact-intro h2 {
                        font-size: 2rem;
                        letter-spacing: -0.02em;
                    }
                    .contact-intro > p {
                        margin-top: 0.5rem;
                        color: #cbd5e1;
                    }
                    .contact-details {
                        margin-top: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        font-size: 0.9rem;
                        color: #e2e8f0;
                    }
                    .contact-form {
                        background: #fff;
                        color: #0f172a;
                        border-radius: 24px;
                        padding: 1.5rem;
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.25);
                    }
                    .form-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                    }
                    .form-field.wide {
                        grid-column: 1 / -1;
                    }
                    .form-field label {
                        font-size: 0.875rem;
                    }
                    .form-field input,
                    .form-field textarea {
                        margin-top: 0.25rem;
                        width: 100%;
                        border: 1px solid #cbd5e1;
                        border-radius: 12px;
                        padding: 0.5rem 0.75rem;
                        font: inherit;
                    }
                    .submit-button {
                        margin-top: 1rem;
                        border: none;
                        border-radius: 12px;
                        background: #4f46e5;
                        color: #fff;
                        padding: 0.75rem 1.25rem;
                        font-size: 0.95rem;
                        cursor: pointer;
                        box-shadow: 0 4px 12px rgba(79, 70, 229, 0.3);
                    }
                    .submit-button:hover {
                        background: #6366f1;
                    }
                    .submit-button:disabled {
                        opacity: 0.5;
                        cursor: default;
                    }
                    .form-status {
                        margin-top: 0.75rem;
                        font-size: 0.875rem;
                    }
                    .form-status.success {
                        color: #16a34a;
                    }
                    .form-status.error {
                        color: #dc2626;
                    }
                    .form-disclaimer {
                        margin-top: 0.75rem;
                        font-size: 0.75rem;
                        color: #64748b;
                    }
                    @media (max-width: 768px) {
                        .contact-content {
                            grid-template-columns: 1fr;
                        }
                        .form-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_starts_idle() {
        assert_eq!(SubmissionStatus::default(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_only_loading_disables_submit() {
        assert!(SubmissionStatus::Loading.is_loading());
        assert!(!SubmissionStatus::Idle.is_loading());
        assert!(!SubmissionStatus::Success.is_loading());
        assert!(!SubmissionStatus::Error.is_loading());
    }

    #[test]
    fn test_form_body_contains_every_field() {
        let fields = InquiryFields {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: "+1 555 0100".into(),
            company: String::new(),
            message: "Hello".into(),
        };
        let body = fields.to_form_body();
        assert_eq!(
            body,
            "name=Ada&email=ada%40example.com&phone=%2B1%20555%200100&company=&message=Hello\
             &_subject=New%20inquiry%20from%20hemzinfotech.com"
        );
    }

    #[test]
    fn test_form_body_encodes_reserved_characters() {
        let fields = InquiryFields {
            name: "A&B=C".into(),
            email: "a@b.c".into(),
            phone: "123".into(),
            company: "Hemz".into(),
            message: "x".into(),
        };
        assert!(fields.to_form_body().starts_with("name=A%26B%3DC&"));
    }

    #[test]
    fn test_relay_error_single_message() {
        let body = r#"{"errors":[{"message":"Email is invalid"}]}"#;
        assert_eq!(relay_error_message(body), "Email is invalid");
    }

    #[test]
    fn test_relay_error_joins_messages() {
        let body = r#"{"errors":[{"message":"Email is invalid"},{"message":"Phone is required"}]}"#;
        assert_eq!(
            relay_error_message(body),
            "Email is invalid, Phone is required"
        );
    }

    #[test]
    fn test_relay_error_falls_back_on_garbage() {
        assert_eq!(relay_error_message(""), GENERIC_ERROR_MSG);
        assert_eq!(relay_error_message("not json"), GENERIC_ERROR_MSG);
        assert_eq!(relay_error_message(r#"{"detail":"nope"}"#), GENERIC_ERROR_MSG);
    }

    #[test]
    fn test_relay_error_falls_back_on_empty_list() {
        assert_eq!(relay_error_message(r#"{"errors":[]}"#), GENERIC_ERROR_MSG);
    }
}
