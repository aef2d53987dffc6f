use leptos::prelude::*;

use crate::core::{SALON, Section};
use crate::ui::icon::{Icon, icons};
use crate::ui::page_state::use_page_state;

#[component]
pub fn HeroSection() -> impl IntoView {
    let state = use_page_state();

    view! {
        <section id=Section::Home.id() class="min-h-screen flex items-center py-20">
            <div class="max-w-7xl mx-auto px-6">
                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <div class="space-y-8">
                        <h1 class="text-6xl md:text-7xl font-light leading-tight">
                            "Beauty"
                            <br/>
                            "Refined"
                        </h1>
                        <p class="text-xl font-light opacity-80 leading-relaxed max-w-lg">
                            "Experience the art of beauty at our luxury salon, where every detail is crafted to perfection and every moment is designed to inspire."
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4">
                            <a
                                href=Section::Services.href()
                                class="bg-black text-white px-8 py-4 text-sm tracking-wide hover:bg-gray-800 transition-colors flex items-center justify-center space-x-2 cursor-pointer"
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    state.navigate(Section::Services);
                                }
                            >
                                <span>"DISCOVER SERVICES"</span>
                                <Icon name=icons::ARROW_RIGHT class="h-4 w-4 invert"/>
                            </a>
                            <a
                                href=SALON.tel_href()
                                class="border border-black text-black px-8 py-4 text-sm tracking-wide hover:bg-black hover:text-white transition-colors flex items-center justify-center space-x-2"
                            >
                                <Icon name=icons::PHONE class="h-4 w-4"/>
                                <span>"CALL NOW"</span>
                            </a>
                        </div>
                    </div>

                    <div class="relative h-[400px] md:h-[500px] lg:h-[600px] w-full rounded-xl overflow-hidden shadow-2xl">
                        <img
                            src="/images/home.webp"
                            alt="Luxury salon interior"
                            class="w-full h-full object-cover"
                            width="800"
                            height="600"
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}
