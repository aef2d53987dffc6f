use leptos::prelude::*;

use super::SectionHeading;
use crate::core::content::{SERVICES, Service};
use crate::core::{SALON, Section};

#[component]
fn ServiceCard(service: Service) -> impl IntoView {
    view! {
        <div class="group">
            <div class="bg-white p-8 hover:shadow-lg transition-all duration-300 border border-gray-100 h-full">
                <div class="text-center">
                    <h3 class="text-xl font-light mb-4 tracking-wide">{service.name}</h3>
                    <p class="text-gray-600 mb-6 leading-relaxed">{service.description}</p>
                    <div class="text-lg font-light mb-6">{service.price}</div>
                    <a
                        href=SALON.tel_href()
                        class="text-sm tracking-wide border-b border-black hover:border-gray-400 transition-colors"
                    >
                        "CALL FOR APPOINTMENT"
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <section id=Section::Services.id() class="py-24 bg-gray-50">
            <div class="max-w-7xl mx-auto px-6">
                <SectionHeading
                    title="Our Services"
                    intro="Experience premium beauty services at Seven The Hair and Beauty Salon, Pune's trusted unisex salon offering expert styling and treatments with uncompromising attention to detail."
                />

                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {SERVICES
                        .iter()
                        .map(|service| view! { <ServiceCard service=*service/> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
