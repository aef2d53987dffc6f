use leptos::prelude::*;

use crate::core::SALON;
use crate::core::content::{COPYRIGHT_YEAR, FOOTER_SERVICES};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-black text-white py-12">
            <div class="max-w-7xl mx-auto px-6">
                <div class="grid md:grid-cols-3 gap-8 mb-8">
                    // Brand
                    <div>
                        <div class="text-2xl font-light tracking-wider mb-4">{SALON.short_name}</div>
                        <p class="text-gray-400 mb-4">{SALON.tagline}</p>
                        <p class="text-gray-400 text-sm leading-relaxed">
                            "Your trusted unisex salon in Pradhikaran, Pune, offering premium beauty and grooming services with exceptional care."
                        </p>
                    </div>

                    // Contact
                    <div>
                        <h3 class="text-lg font-light mb-4 tracking-wide">"CONTACT INFO"</h3>
                        <div class="space-y-2 text-gray-400 text-sm">
                            <p>{format!("📍 {}", SALON.street)}</p>
                            <p>{SALON.locality_line()}</p>
                            <p>
                                <a href=SALON.tel_href() class="hover:text-white transition-colors">
                                    {format!("📞 {}", SALON.phone_display)}
                                </a>
                            </p>
                            <p>
                                <a href=SALON.mailto_href() class="hover:text-white transition-colors">
                                    {format!("✉ {}", SALON.email)}
                                </a>
                            </p>
                            <p>{format!("⭐ {}/5 Rating | {}+ Reviews", SALON.rating, SALON.review_count)}</p>
                        </div>
                    </div>

                    // Services
                    <div>
                        <h3 class="text-lg font-light mb-4 tracking-wide">"SERVICES"</h3>
                        <div class="space-y-2 text-gray-400 text-sm">
                            {FOOTER_SERVICES
                                .iter()
                                .map(|service| view! { <p>{*service}</p> })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="border-t border-gray-800 pt-8 text-center">
                    <p class="text-gray-400 text-sm">
                        {format!("© {} {}. All rights reserved.", COPYRIGHT_YEAR, SALON.name)}
                    </p>
                    <p class="text-gray-500 text-xs mt-2">
                        {format!("{}, {}, {}", SALON.landmark, SALON.locality, SALON.city)}
                    </p>
                </div>
            </div>
        </footer>
    }
}
