use leptos::prelude::*;

use crate::core::content::{ABOUT_MISSION, ABOUT_PARAGRAPHS, ABOUT_STATS};
use crate::core::{SALON, Section};

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="py-24">
            <div class="max-w-7xl mx-auto px-6">
                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <div>
                        <img
                            src="/images/about.jpeg"
                            alt="Seven Salon team"
                            class="w-full h-full object-cover shadow-lg"
                            loading="lazy"
                            width="600"
                            height="400"
                        />
                    </div>
                    <div class="space-y-8">
                        <div>
                            <h2 class="text-4xl font-light mb-6">{format!("About {}", SALON.name)}</h2>
                            <div class="w-20 h-px bg-black mb-8"></div>
                        </div>

                        {ABOUT_PARAGRAPHS
                            .iter()
                            .map(|paragraph| view! {
                                <p class="text-lg leading-relaxed text-gray-700">{*paragraph}</p>
                            })
                            .collect_view()}

                        <div class="bg-gray-50 p-6 rounded-lg">
                            <p class="text-base italic text-gray-600 leading-relaxed">{ABOUT_MISSION}</p>
                        </div>

                        <div class="grid grid-cols-3 gap-8 pt-8">
                            {ABOUT_STATS
                                .iter()
                                .map(|stat| view! {
                                    <div class="text-center">
                                        <div class="text-3xl font-light mb-2">{stat.value}</div>
                                        <div class="text-sm tracking-wide text-gray-600">{stat.label}</div>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
