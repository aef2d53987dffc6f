use leptos::prelude::*;

/// Circular spinner with an optional caption, centred in its container
#[component]
pub fn LoadingSpinner(
    /// Optional loading message
    #[prop(default = String::new())]
    message: String,
) -> impl IntoView {
    view! {
        <div class="text-center">
            <div
                class="animate-spin rounded-full h-8 w-8 border-b-2 border-black mx-auto mb-2"
                role="status"
                aria-live="polite"
            >
                <span class="sr-only">"Loading..."</span>
            </div>
            {(!message.is_empty()).then(|| view! {
                <p class="text-gray-500">{message.clone()}</p>
            })}
        </div>
    }
}
