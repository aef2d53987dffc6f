use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// Centred dialog over a dimmed backdrop
#[component]
pub fn BaseModal(
    /// Modal title
    title: String,
    /// Whether modal is open
    is_open: Signal<bool>,
    /// Callback to close modal
    on_close: Callback<()>,
    /// Modal content
    children: Children,
    /// Maximum width class (default: max-w-md)
    #[prop(default = "max-w-md")]
    max_width: &'static str,
    /// Whether clicking backdrop closes modal
    #[prop(default = true)]
    close_on_backdrop: bool,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.with_untracked(|v| *v) {
                on_close.run(());
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    view! {
        <div
            class=move || {
                if is_open.get() {
                    "modal-backdrop fixed inset-0 z-[60] flex items-center justify-center bg-black/50 px-4 transition-opacity duration-300"
                } else {
                    "modal-backdrop fixed inset-0 z-[60] flex items-center justify-center bg-black/50 px-4 opacity-0 pointer-events-none transition-opacity duration-300"
                }
            }
            role="dialog"
            aria-modal="true"
            on:click=move |e| {
                if close_on_backdrop {
                    #[cfg(not(feature = "ssr"))]
                    {
                        if let Some(element) = e.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
                            if element.class_list().contains("modal-backdrop") {
                                on_close.run(());
                            }
                        }
                    }
                    #[cfg(feature = "ssr")]
                    {
                        let _ = e;
                    }
                }
            }
        >
            <div class=format!("w-full {} bg-white rounded-lg shadow-xl", max_width)>
                <div class="flex items-center justify-between px-6 pt-6">
                    <h3 class="text-lg font-light tracking-wide">{title}</h3>
                    <button
                        class="p-1 text-gray-500 hover:text-black transition-colors"
                        on:click=move |_| on_close.run(())
                        title="Close"
                        aria-label="Close dialog"
                    >
                        <Icon name=icons::X class="w-5 h-5"/>
                    </button>
                </div>

                <div class="p-6">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Single-message dialog with one dismiss button
#[component]
pub fn AlertDialog(
    /// Dialog title
    title: String,
    /// Dialog message, read reactively so one dialog can show several outcomes
    message: Signal<String>,
    /// Whether dialog is open
    is_open: Signal<bool>,
    /// Callback when closed
    on_close: Callback<()>,
    /// Close button text
    #[prop(default = "OK".to_string())]
    button_text: String,
) -> impl IntoView {
    view! {
        <BaseModal
            title=title
            is_open=is_open
            on_close=on_close
        >
            <div class="space-y-4">
                <p class="text-gray-600 leading-relaxed">{move || message.get()}</p>

                <div class="flex justify-end border-t border-gray-100 pt-4">
                    <button
                        class="bg-black text-white px-6 py-2 text-sm tracking-wide hover:bg-gray-800 transition-colors rounded-sm"
                        on:click=move |_| on_close.run(())
                    >
                        {button_text.clone()}
                    </button>
                </div>
            </div>
        </BaseModal>
    }
}
