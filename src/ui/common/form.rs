use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

const INPUT_CLASS: &str = "w-full p-4 border bg-white focus:outline-none focus:border-black transition-colors rounded-sm";

/// Inline error line under a field
#[component]
fn FieldError(error: Signal<Option<&'static str>>) -> impl IntoView {
    move || {
        error.get().map(|err| {
            view! {
                <div class="flex items-center mt-1 text-red-600 text-sm" role="alert">
                    <Icon name=icons::ALERT_CIRCLE class="h-4 w-4 mr-1"/>
                    <span>{err}</span>
                </div>
            }
        })
    }
}

/// Single-line input with its validation message
#[component]
pub fn FormField(
    /// Form control name
    name: &'static str,
    /// Input type (text, email, tel)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text, doubles as the accessible label
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Current error message, if any
    error: Signal<Option<&'static str>>,
) -> impl IntoView {
    view! {
        <div>
            <input
                type=input_type
                name=name
                class=INPUT_CLASS
                class:border-red-500=move || error.get().is_some()
                class:border-gray-200=move || error.get().is_none()
                placeholder=placeholder
                aria-label=placeholder
                aria-invalid=move || error.get().is_some().to_string()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldError error=error/>
        </div>
    }
}

/// Multi-line input with its validation message
#[component]
pub fn TextAreaField(
    /// Form control name
    name: &'static str,
    /// Placeholder text, doubles as the accessible label
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Number of rows
    #[prop(default = 5)]
    rows: u32,
    /// Current error message, if any
    error: Signal<Option<&'static str>>,
) -> impl IntoView {
    view! {
        <div>
            <textarea
                name=name
                class=format!("{} resize-none", INPUT_CLASS)
                class:border-red-500=move || error.get().is_some()
                class:border-gray-200=move || error.get().is_none()
                placeholder=placeholder
                aria-label=placeholder
                aria-invalid=move || error.get().is_some().to_string()
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldError error=error/>
        </div>
    }
}
