//! Not found page component
//!
//! A 404 page displayed for every path other than the salon page.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::SALON;
use crate::core::content::COPYRIGHT_YEAR;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text=format!("Page Not Found | {}", SALON.name) />

        <div class="min-h-screen bg-white flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <h1 class="text-6xl font-light mb-4">"404"</h1>
                <div class="w-20 h-px bg-black mx-auto mb-8"></div>

                <h2 class="text-2xl font-light mb-2">"Page Not Found"</h2>

                <p class="text-gray-600 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A
                    href="/"
                    attr:class="inline-block bg-black text-white px-8 py-4 text-sm tracking-wide hover:bg-gray-800 transition-colors"
                >
                    "BACK TO HOME"
                </A>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-gray-500">
                    {format!("© {} {}", COPYRIGHT_YEAR, SALON.name)}
                </p>
            </div>
        </div>
    }
}
