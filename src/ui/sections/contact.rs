//! Contact section: map, business details and the consultation form
//!
//! The form never talks to a server. A valid submission is turned into a
//! `mailto:` link and handed to the visitor's mail client.

use leptos::prelude::*;

use super::{MapPanel, SectionHeading};
use crate::core::{ContactField, ContactForm, SALON, Section};
use crate::ui::common::{AlertDialog, FormField, TextAreaField};
use crate::ui::icon::{Icon, icons};

/// Black circular badge holding a white icon
#[component]
fn DetailBadge(icon: &'static str) -> impl IntoView {
    view! {
        <div class="bg-black p-3 rounded-full flex-shrink-0">
            <Icon name=icon class="h-5 w-5 invert"/>
        </div>
    }
}

#[component]
fn ContactDetails() -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 gap-8">
            <div class="space-y-6">
                <div class="flex items-start space-x-4">
                    <DetailBadge icon=icons::MAP_PIN/>
                    <div>
                        <h4 class="font-medium text-gray-900 mb-1">"VISIT US"</h4>
                        <address class="not-italic text-gray-600 leading-relaxed">
                            {SALON.street}
                            <br/>
                            {SALON.locality_line()}
                            <br/>
                            <span class="text-sm text-gray-500">{SALON.landmark}</span>
                        </address>
                        <a
                            href=SALON.directions_url()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-flex items-center space-x-1 text-xs text-gray-500 hover:text-black transition-colors mt-2"
                        >
                            <span>"Get Directions"</span>
                            <Icon name=icons::EXTERNAL_LINK class="w-3 h-3"/>
                        </a>
                    </div>
                </div>

                <div class="flex items-start space-x-4">
                    <DetailBadge icon=icons::PHONE/>
                    <div>
                        <h4 class="font-medium text-gray-900 mb-1">"CALL US"</h4>
                        <a href=SALON.tel_href() class="text-gray-600 hover:text-black transition-colors text-lg">
                            {SALON.phone_display}
                        </a>
                    </div>
                </div>

                <div class="flex items-start space-x-4">
                    <DetailBadge icon=icons::MAIL/>
                    <div>
                        <h4 class="font-medium text-gray-900 mb-1">"EMAIL"</h4>
                        <a href=SALON.mailto_href() class="text-gray-600 hover:text-black transition-colors">
                            {SALON.email}
                        </a>
                    </div>
                </div>
            </div>

            <div class="space-y-6">
                <div class="flex items-start space-x-4">
                    <DetailBadge icon=icons::CLOCK/>
                    <div class="flex-1">
                        <h4 class="font-medium text-gray-900 mb-3">"HOURS"</h4>
                        <div class="space-y-1 text-sm text-gray-600">
                            {SALON
                                .hours
                                .iter()
                                .map(|row| view! {
                                    <div class="flex justify-between gap-4">
                                        <span class="font-medium">{row.days}</span>
                                        <span>{row.hours}</span>
                                    </div>
                                })
                                .collect_view()}
                            <p class="text-xs text-gray-500 mt-2">"Appointments recommended"</p>
                        </div>
                    </div>
                </div>

                <div class="flex items-start space-x-4">
                    <DetailBadge icon=icons::INSTAGRAM/>
                    <div>
                        <h4 class="font-medium text-gray-900 mb-1">"FOLLOW US"</h4>
                        <a
                            href=SALON.instagram_url()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-gray-600 hover:text-black transition-colors"
                        >
                            {SALON.instagram_display()}
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ContactFormCard() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let alert_open = RwSignal::new(false);
    let alert_message = RwSignal::new(String::new());

    let value = move |field: ContactField| Signal::derive(move || form.with(|f| f.value(field).to_string()));
    let error = move |field: ContactField| Signal::derive(move || form.with(|f| f.error(field)));
    let on_input = move |field: ContactField| Callback::new(move |text: String| form.update(|f| f.set(field, text)));
    let in_flight = move || form.with(|f| f.is_in_flight());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(not(feature = "ssr"))]
        {
            use crate::core::{SubmitBlocked, SubmitOutcome};
            use crate::ui::browser::WindowMailHandoff;
            use leptos::logging::{error, log};

            let result = form
                .try_update(|f| f.submit(&SALON, &WindowMailHandoff))
                .unwrap_or(Err(SubmitBlocked::InFlight));

            match result {
                Ok(outcome) => {
                    if let SubmitOutcome::HandoffFailed(err) = &outcome {
                        error!("Error submitting form: {}", err);
                    }
                    alert_message.set(outcome.user_message().to_string());
                    alert_open.set(true);
                }
                Err(SubmitBlocked::InFlight) => {}
                Err(blocked @ SubmitBlocked::Invalid(_)) => log!("Submit blocked: {}", blocked),
            }
        }
    };

    view! {
        <div class="bg-white p-8 shadow-sm rounded-lg">
            <h3 class="text-xl font-light mb-6 tracking-wide">"BOOK CONSULTATION"</h3>
            <form on:submit=on_submit class="space-y-6" novalidate=true>
                <FormField
                    name="name"
                    input_type=ContactField::Name.input_type()
                    placeholder=ContactField::Name.placeholder()
                    value=value(ContactField::Name)
                    on_input=on_input(ContactField::Name)
                    error=error(ContactField::Name)
                />
                <FormField
                    name="email"
                    input_type=ContactField::Email.input_type()
                    placeholder=ContactField::Email.placeholder()
                    value=value(ContactField::Email)
                    on_input=on_input(ContactField::Email)
                    error=error(ContactField::Email)
                />
                <FormField
                    name="phone"
                    input_type=ContactField::Phone.input_type()
                    placeholder=ContactField::Phone.placeholder()
                    value=value(ContactField::Phone)
                    on_input=on_input(ContactField::Phone)
                    error=error(ContactField::Phone)
                />
                <TextAreaField
                    name="message"
                    placeholder=ContactField::Message.placeholder()
                    value=value(ContactField::Message)
                    on_input=on_input(ContactField::Message)
                    error=error(ContactField::Message)
                />

                <button
                    type="submit"
                    disabled=in_flight
                    class="w-full bg-black text-white py-4 text-sm tracking-wide hover:bg-gray-800 transition-colors rounded-sm disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {move || if in_flight() { "OPENING EMAIL..." } else { "SEND MESSAGE" }}
                </button>
            </form>

            // Quick actions
            <div class="mt-8 pt-6 border-t border-gray-100">
                <div class="grid grid-cols-2 gap-4">
                    <a
                        href=SALON.tel_href()
                        class="flex items-center justify-center space-x-2 bg-gray-100 text-black px-4 py-3 text-sm tracking-wide hover:bg-gray-200 transition-colors rounded-sm"
                    >
                        <Icon name=icons::PHONE class="h-4 w-4"/>
                        <span>"CALL NOW"</span>
                    </a>
                    <a
                        href=SALON.mailto_href()
                        class="flex items-center justify-center space-x-2 bg-gray-100 text-black px-4 py-3 text-sm tracking-wide hover:bg-gray-200 transition-colors rounded-sm"
                    >
                        <Icon name=icons::MAIL class="h-4 w-4"/>
                        <span>"EMAIL US"</span>
                    </a>
                </div>
            </div>

            <AlertDialog
                title="Consultation Request".to_string()
                message=alert_message.into()
                is_open=alert_open.into()
                on_close=Callback::new(move |_| alert_open.set(false))
            />
        </div>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id=Section::Contact.id() class="py-24 bg-gray-50">
            <div class="max-w-7xl mx-auto px-6">
                <SectionHeading
                    title="Contact"
                    intro="Call us today to discuss your beauty needs and discover the difference that expert styling and personalized care can make."
                />

                <div class="grid lg:grid-cols-2 gap-16">
                    <div class="space-y-8">
                        <div>
                            <h3 class="text-xl font-light mb-4 tracking-wide">"FIND US"</h3>
                            <MapPanel/>
                        </div>
                        <ContactDetails/>
                    </div>

                    <ContactFormCard/>
                </div>
            </div>
        </section>
    }
}
