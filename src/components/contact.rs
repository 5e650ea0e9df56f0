use gloo_console::log;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;

#[derive(Serialize)]
struct ContactPayload {
    name: String,
    email: String,
    message: String,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    errors: Option<Vec<ErrorDetail>>,
}

fn format_errors(errors: &[ErrorDetail]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Contact form that posts to the form endpoint. The submit button is
/// disabled while a request is in flight and re-enabled whichever way the
/// request ends.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let sending = use_state(|| false);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let sending = sending.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let name = name.clone();
            let email = email.clone();
            let message = message.clone();
            let sending = sending.clone();
            sending.set(true);

            spawn_local(async move {
                let payload = ContactPayload {
                    name: (*name).clone(),
                    email: (*email).clone(),
                    message: (*message).clone(),
                };

                match Request::post(config::get_form_endpoint())
                    .header("Accept", "application/json")
                    .json(&payload)
                    .unwrap()
                    .send()
                    .await
                {
                    Ok(response) => {
                        if response.ok() {
                            alert("Thank you! Your message has been sent to the Heimdahl team.");
                            name.set(String::new());
                            email.set(String::new());
                            message.set(String::new());
                        } else {
                            log!("Form submission rejected with status:", response.status());
                            match response.json::<ErrorResponse>().await {
                                Ok(ErrorResponse { errors: Some(errors) }) => {
                                    alert(&format_errors(&errors));
                                }
                                _ => {
                                    alert("Oops! There was a problem submitting your form.");
                                }
                            }
                        }
                    }
                    Err(err) => {
                        log!("Form submission failed:", err.to_string());
                        alert("Oops! There was a problem connecting to the server.");
                    }
                }

                // Re-enable the submit button no matter how the request ended.
                sending.set(false);
            });
        })
    };

    html! {
        <form class="contact-form" {onsubmit}>
            <input
                type="text"
                name="name"
                placeholder="Your name"
                required=true
                value={(*name).clone()}
                oninput={on_name}
            />
            <input
                type="email"
                name="email"
                placeholder="Your email"
                required=true
                value={(*email).clone()}
                oninput={on_email}
            />
            <textarea
                name="message"
                placeholder="How can we help?"
                required=true
                value={(*message).clone()}
                oninput={on_message}
            />
            <button id="submit-btn" type="submit" disabled={*sending}>
                { if *sending { "Sending..." } else { "Send Message" } }
            </button>
        </form>
    }
}

/// Offline variant used where no endpoint is wired up: acknowledges the
/// submission and clears the fields, nothing leaves the page.
#[function_component(BasicContactForm)]
pub fn basic_contact_form() -> Html {
    let email = use_state(String::new);
    let message = use_state(String::new);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let message = message.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            alert("Thank you for your message! We'll get back to you soon.");
            email.set(String::new());
            message.set(String::new());
        })
    };

    html! {
        <form class="contact-form contact-form-basic" {onsubmit}>
            <input
                type="email"
                name="email"
                placeholder="Your email"
                required=true
                value={(*email).clone()}
                oninput={on_email}
            />
            <textarea
                name="message"
                placeholder="Leave us a note"
                required=true
                value={(*message).clone()}
                oninput={on_message}
            />
            <button type="submit">{ "Send" }</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_error_messages_with_comma() {
        let errors = vec![
            ErrorDetail { message: "Email is required".to_string() },
            ErrorDetail { message: "Message is too short".to_string() },
        ];
        assert_eq!(
            format_errors(&errors),
            "Email is required, Message is too short"
        );
    }

    #[test]
    fn single_error_has_no_separator() {
        let errors = vec![ErrorDetail { message: "Email is required".to_string() }];
        assert_eq!(format_errors(&errors), "Email is required");
    }
}
