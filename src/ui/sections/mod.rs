//! Page sections of the salon site, top to bottom:
//! navigation, hero, services, gallery, testimonials, about, contact, footer

mod about;
mod contact;
mod footer;
mod gallery;
mod hero;
mod map;
mod navigation;
mod services;
mod testimonials;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use footer::Footer;
pub use gallery::GallerySection;
pub use hero::HeroSection;
pub use map::MapPanel;
pub use navigation::Navigation;
pub use services::ServicesSection;
pub use testimonials::TestimonialsSection;

use leptos::prelude::*;

/// Centred section title with a rule and an intro paragraph
#[component]
fn SectionHeading(title: &'static str, intro: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-12 md:mb-16">
            <h2 class="text-3xl sm:text-4xl md:text-5xl font-light mb-4 md:mb-6">{title}</h2>
            <div class="w-16 md:w-20 h-px bg-black mx-auto mb-6 md:mb-8"></div>
            <p class="text-base md:text-lg text-gray-600 max-w-2xl mx-auto leading-relaxed">
                {intro}
            </p>
        </div>
    }
}

/// Five gold stars
#[component]
fn Stars(#[prop(default = "text-lg md:text-xl")] size: &'static str) -> impl IntoView {
    let class = format!("text-yellow-400 {}", size);
    view! {
        <span class="inline-flex" role="img" aria-label="5 out of 5 stars">
            {(0..5).map(|_| view! { <span class=class.clone() aria-hidden="true">"★"</span> }).collect_view()}
        </span>
    }
}
