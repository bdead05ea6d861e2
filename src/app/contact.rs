use leptos::{either::Either, prelude::*};

use crate::{
    content::profile,
    display::{whatsapp_link, SocialKind},
    scroll::Section,
};

use super::reveal::Reveal;

/// In-page form submission. Same validation and logging as
/// `POST /api/contact`; failures carry the same messages.
#[server]
pub async fn send_message(
    first_name: String,
    last_name: String,
    email: String,
    subject: String,
    message: String,
) -> Result<String, ServerFnError> {
    use crate::contact::{accept, ContactRequest};

    accept(ContactRequest {
        first_name: Some(first_name),
        last_name: Some(last_name),
        email: Some(email),
        subject: Some(subject),
        message: Some(message),
    })
    .map(|ack| ack.message)
    .map_err(|e| ServerFnError::new(e.to_string()))
}

fn error_text(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(msg) => msg.clone(),
        _ => crate::contact::ContactError::Internal(String::new()).to_string(),
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let profile = profile();

    view! {
        <section id=Section::Contact.id() class="py-20 px-6 bg-charcoal/30">
            <div class="max-w-6xl mx-auto">
                <Reveal>
                    <h2 class="text-4xl font-bold text-center mb-4">
                        "Get In " <span class="text-gradient">"Touch"</span>
                    </h2>
                    <p class="text-gray-400 text-center mb-16 max-w-2xl mx-auto">
                        "Have a project in mind or want to collaborate? Reach out through any of the channels below."
                    </p>
                </Reveal>
                <div class="grid lg:grid-cols-2 gap-12">
                    <div class="space-y-6">
                        {profile
                            .whatsapp
                            .as_deref()
                            .map(|number| {
                                view! {
                                    <ContactCard
                                        icon="extra-whatsapp text-green-400"
                                        title="WhatsApp"
                                        value=number.to_string()
                                        href=whatsapp_link(number)
                                    />
                                }
                            })}
                        <ContactCard
                            icon=SocialKind::Email.icon_class()
                            title="Email"
                            value=profile.email.clone()
                            href=format!("mailto:{}", profile.email)
                        />
                        <Reveal class="bg-charcoal p-6 rounded-xl border border-gray-800 flex items-center gap-4">
                            <i class="extra-map-pin text-2xl text-electric" />
                            <div>
                                <h3 class="font-semibold">"Location"</h3>
                                <p class="text-gray-400">{profile.location.clone()}</p>
                            </div>
                        </Reveal>
                    </div>
                    <Reveal delay_ms=200>
                        <ContactForm />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactCard(
    icon: &'static str,
    title: &'static str,
    value: String,
    href: String,
) -> impl IntoView {
    view! {
        <Reveal class="bg-charcoal p-6 rounded-xl border border-gray-800 hover:border-electric transition-colors duration-200">
            <a
                href=href
                target="_blank"
                rel="noopener noreferrer"
                class="flex items-center gap-4"
                data-testid=format!("contact-{}", title.to_lowercase())
            >
                <i class=format!("{icon} text-2xl") />
                <div>
                    <h3 class="font-semibold">{title}</h3>
                    <p class="text-gray-400">{value}</p>
                </div>
            </a>
        </Reveal>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let send = ServerAction::<SendMessage>::new();
    let pending = send.pending();
    let result = send.value();

    let input = "w-full px-4 py-3 bg-space border border-gray-700 rounded-lg focus:border-electric focus:outline-none";

    view! {
        <div class="bg-charcoal p-8 rounded-xl border border-gray-800">
            <ActionForm action=send attr:class="space-y-4">
                <div class="grid md:grid-cols-2 gap-4">
                    <input class=input name="first_name" placeholder="First name" required />
                    <input class=input name="last_name" placeholder="Last name" required />
                </div>
                <input class=input type="email" name="email" placeholder="Email" required />
                <input class=input name="subject" placeholder="Subject" required />
                <textarea class=input name="message" rows="5" placeholder="Message" required />
                <button
                    type="submit"
                    class="w-full px-8 py-3 bg-electric text-space font-semibold rounded-lg hover:bg-neon transition-colors duration-200 disabled:opacity-50"
                    disabled=move || pending.get()
                    data-testid="button-send-message"
                >
                    {move || if pending.get() { "Sending..." } else { "Send Message" }}
                </button>
            </ActionForm>
            {move || {
                result
                    .get()
                    .map(|res| match res {
                        Ok(msg) => {
                            Either::Left(
                                view! {
                                    <p class="mt-4 text-green-400" data-testid="contact-success">
                                        {msg}
                                    </p>
                                },
                            )
                        }
                        Err(err) => {
                            Either::Right(
                                view! {
                                    <p class="mt-4 text-red-400" data-testid="contact-error">
                                        {error_text(&err)}
                                    </p>
                                },
                            )
                        }
                    })
            }}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::contact::ACCEPTED_MESSAGE;

    async fn send(first_name: &str, email: &str) -> Result<String, ServerFnError> {
        send_message(
            first_name.to_string(),
            "Doe".to_string(),
            email.to_string(),
            "Hi".to_string(),
            "Hello".to_string(),
        )
        .await
    }

    #[tokio::test]
    async fn test_send_message_accepted() {
        assert_eq!(
            send("Jane", "jane@example.com").await.unwrap(),
            ACCEPTED_MESSAGE
        );
    }

    #[tokio::test]
    async fn test_send_message_missing_field() {
        let err = send("", "jane@example.com").await.unwrap_err();
        assert!(matches!(&err, ServerFnError::ServerError(msg) if msg == "All fields are required"));
        assert_eq!(error_text(&err), "All fields are required");
    }

    #[tokio::test]
    async fn test_send_message_invalid_email() {
        let err = send("Jane", "not-an-email").await.unwrap_err();
        assert!(matches!(&err, ServerFnError::ServerError(msg) if msg == "Invalid email format"));
        assert_eq!(error_text(&err), "Invalid email format");
    }

    #[test]
    fn test_transport_errors_are_generic() {
        let err: ServerFnError = ServerFnError::Request("connection refused".to_string());
        assert_eq!(error_text(&err), "Internal server error");
    }
}
