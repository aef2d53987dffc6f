use leptos::prelude::*;

use crate::core::{SALON, Section};
use crate::ui::icon::{Icon, icons};
use crate::ui::page_state::{PageState, use_page_state};

/// In-page link that scrolls smoothly instead of jumping
#[component]
fn SectionLink(section: Section, class: &'static str, state: PageState) -> impl IntoView {
    view! {
        <a
            href=section.href()
            class=class
            on:click=move |ev| {
                ev.prevent_default();
                state.navigate(section);
            }
        >
            {section.nav_label()}
        </a>
    }
}

/// Fixed top bar; turns opaque once the page is scrolled
#[component]
pub fn Navigation() -> impl IntoView {
    let state = use_page_state();
    let scrolled = move || state.nav.with(|nav| nav.is_scrolled());
    let menu_open = move || state.nav.with(|nav| nav.is_menu_open());

    view! {
        <nav
            class=move || {
                if scrolled() {
                    "fixed w-full z-50 transition-all duration-300 bg-white/95 backdrop-blur-md shadow-sm"
                } else {
                    "fixed w-full z-50 transition-all duration-300 bg-transparent"
                }
            }
        >
            <div class="max-w-7xl mx-auto px-6">
                <div class="flex justify-between items-center py-4">
                    <a
                        href=Section::Home.href()
                        on:click=move |ev| {
                            ev.prevent_default();
                            state.navigate(Section::Home);
                        }
                    >
                        <img
                            src="/images/logo.png"
                            alt=format!("{} logo", SALON.name)
                            width="120"
                            height="40"
                            class="h-auto"
                        />
                    </a>

                    // Desktop links
                    <div class="hidden md:flex items-center space-x-8">
                        {Section::NAV_LINKS
                            .into_iter()
                            .map(|section| view! {
                                <SectionLink
                                    section=section
                                    class="text-sm tracking-wide hover:text-gray-600 transition-colors cursor-pointer"
                                    state=state
                                />
                            })
                            .collect_view()}

                        <div class="flex items-center space-x-4">
                            <div class="text-sm tracking-wide text-gray-600">
                                {SALON.phone_nav_display()}
                            </div>
                            <a
                                href=SALON.tel_href()
                                class="bg-black text-white px-6 py-2 text-sm tracking-wide hover:bg-gray-800 transition-colors"
                            >
                                "CALL NOW"
                            </a>
                        </div>
                    </div>

                    // Mobile menu button
                    <button
                        class="md:hidden"
                        on:click=move |_| state.toggle_menu()
                        aria-label="Toggle navigation menu"
                        aria-expanded=move || menu_open().to_string()
                    >
                        {move || {
                            if menu_open() {
                                view! { <Icon name=icons::X class="h-6 w-6"/> }.into_any()
                            } else {
                                view! { <Icon name=icons::MENU class="h-6 w-6"/> }.into_any()
                            }
                        }}
                    </button>
                </div>
            </div>

            // Mobile menu
            <Show when=menu_open>
                <div class="md:hidden bg-white border-t">
                    <div class="px-6 py-4 space-y-4">
                        {Section::NAV_LINKS
                            .into_iter()
                            .map(|section| view! {
                                <SectionLink
                                    section=section
                                    class="block text-sm tracking-wide cursor-pointer"
                                    state=state
                                />
                            })
                            .collect_view()}
                        <a
                            href=SALON.tel_href()
                            class="block w-full bg-black text-white px-6 py-2 text-sm tracking-wide text-center"
                        >
                            "CALL NOW"
                        </a>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
