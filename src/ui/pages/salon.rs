//! Salon landing page
//!
//! A single scrolling page with:
//! - SEO meta tags and JSON-LD for search engines and link previews
//! - Fixed navigation with smooth in-page scrolling
//! - Hero, services, gallery with lightbox, testimonials and about sections
//! - Contact section with map and consultation form
//! - Footer

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::SALON;
use crate::core::seo;
use crate::ui::page_state::provide_page_state;
use crate::ui::sections::{
    AboutSection, ContactSection, Footer, GallerySection, HeroSection, Navigation,
    ServicesSection, TestimonialsSection,
};

#[component]
pub fn SalonPage() -> impl IntoView {
    provide_page_state();

    view! {
        <SeoMeta />

        <div class="bg-white text-gray-900">
            <Navigation />
            <main>
                <HeroSection />
                <ServicesSection />
                <GallerySection />
                <TestimonialsSection />
                <AboutSection />
                <ContactSection />
            </main>
            <Footer />
        </div>
    }
}

/// SEO meta tags component
#[component]
fn SeoMeta() -> impl IntoView {
    let image = seo::share_image_url(&SALON);

    view! {
        // Page title
        <Title text=seo::PAGE_TITLE />

        // Basic meta tags
        <Meta name="description" content=seo::PAGE_DESCRIPTION />
        <Meta name="keywords" content=seo::keywords_content() />
        <Meta name="author" content=SALON.name />
        <Meta name="robots" content=seo::ROBOTS />
        <Meta name="googlebot" content=seo::GOOGLEBOT />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:locale" content="en_IN" />
        <Meta property="og:url" content=SALON.website />
        <Meta property="og:site_name" content=SALON.name />
        <Meta property="og:title" content=seo::SOCIAL_TITLE />
        <Meta property="og:description" content=seo::OG_DESCRIPTION />
        <Meta property="og:image" content=image.clone() />

        // Twitter
        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content=seo::SOCIAL_TITLE />
        <Meta name="twitter:description" content=seo::TWITTER_DESCRIPTION />
        <Meta name="twitter:image" content=image />
        <Meta name="twitter:site" content=SALON.instagram_display() />

        // Business contact data and location
        {seo::business_meta(&SALON)
            .into_iter()
            .map(|(property, content)| view! { <Meta property=property content=content /> })
            .collect_view()}

        // Canonical URL
        <Link rel="canonical" href=SALON.website />

        // JSON-LD structured data
        <script type="application/ld+json" inner_html=seo::structured_data(&SALON)></script>
    }
}
