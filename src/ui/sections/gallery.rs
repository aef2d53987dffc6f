use leptos::prelude::*;

use super::SectionHeading;
use crate::core::gallery::{TileLayout, alt_text};
use crate::core::{GALLERY, MediaItem, Section};
use crate::ui::icon::{Icon, icons};
use crate::ui::page_state::{PageState, use_page_state};

#[component]
fn GalleryTile(index: usize, item: MediaItem, state: PageState) -> impl IntoView {
    let layout = TileLayout::for_index(index);

    view! {
        <button
            type="button"
            class=format!(
                "relative overflow-hidden bg-gray-100 group cursor-pointer {}",
                layout.span_class()
            )
            style=format!("aspect-ratio: {}", layout.aspect_ratio())
            aria-label=format!("Open {}", alt_text(index))
            on:click=move |_| state.open_lightbox(index)
        >
            {if item.is_video() {
                view! {
                    <video
                        src=item.url
                        class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-500"
                        muted=true
                        preload="metadata"
                    />
                    <div class="absolute inset-0 flex items-center justify-center">
                        <div class="bg-white/80 rounded-full p-3">
                            <Icon name=icons::PLAY class="h-6 w-6"/>
                        </div>
                    </div>
                }
                .into_any()
            } else {
                view! {
                    <img
                        src=item.url
                        alt=alt_text(index)
                        class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-500"
                        loading="lazy"
                        width="600"
                        height="400"
                    />
                }
                .into_any()
            }}
            <div class="absolute inset-0 bg-black/0 group-hover:bg-black/20 transition-colors duration-300"></div>
        </button>
    }
}

/// Full-screen viewer over the gallery, driven by the shared lightbox state
#[component]
fn LightboxOverlay(state: PageState) -> impl IntoView {
    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::LightboxKey;
        use leptos::ev::keydown;

        let lightbox = state.lightbox;
        let handle_keydown = window_event_listener(keydown, move |ev| {
            let Some(key) = LightboxKey::from_key(&ev.key()) else {
                return;
            };
            if lightbox.with_untracked(|lb| lb.is_open()) {
                ev.prevent_default();
                lightbox.update(|lb| {
                    lb.handle_key(key);
                });
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    let current = move || state.lightbox.with(|lb| lb.current(GALLERY).copied().map(|item| (lb.current_index(), item)));

    view! {
        {move || current().map(|(index, item)| {
            view! {
                <div
                    class="fixed inset-0 bg-black/95 z-50 flex items-center justify-center"
                    role="dialog"
                    aria-modal="true"
                    aria-label="Gallery viewer"
                >
                    <button
                        class="absolute top-6 right-6 z-10 hover:opacity-70"
                        on:click=move |_| state.close_lightbox()
                        aria-label="Close gallery"
                    >
                        <Icon name=icons::X class="h-8 w-8 invert"/>
                    </button>

                    <button
                        class="absolute left-6 top-1/2 -translate-y-1/2 hover:opacity-70"
                        on:click=move |_| state.previous_item()
                        aria-label="Previous item"
                    >
                        <Icon name=icons::CHEVRON_LEFT class="h-8 w-8 invert"/>
                    </button>

                    <button
                        class="absolute right-6 top-1/2 -translate-y-1/2 hover:opacity-70"
                        on:click=move |_| state.next_item()
                        aria-label="Next item"
                    >
                        <Icon name=icons::CHEVRON_RIGHT class="h-8 w-8 invert"/>
                    </button>

                    <div class="max-w-4xl max-h-full p-6">
                        {if item.is_video() {
                            view! {
                                <video
                                    src=item.url
                                    controls=true
                                    autoplay=true
                                    class="max-w-full max-h-[85vh] object-contain"
                                />
                            }
                            .into_any()
                        } else {
                            view! {
                                <img
                                    src=item.url
                                    alt=alt_text(index)
                                    class="max-w-full max-h-[85vh] object-contain"
                                />
                            }
                            .into_any()
                        }}
                    </div>

                    <div class="absolute bottom-6 left-1/2 -translate-x-1/2 text-white text-sm">
                        {move || state.lightbox.with(|lb| lb.counter())}
                    </div>
                </div>
            }
        })}
    }
}

#[component]
pub fn GallerySection() -> impl IntoView {
    let state = use_page_state();

    view! {
        <section id=Section::Gallery.id() class="py-24">
            <div class="max-w-7xl mx-auto px-6">
                <SectionHeading
                    title="Gallery"
                    intro="A glimpse into our world of beauty and the artistry that defines our craft."
                />

                <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-1 md:gap-2">
                    {GALLERY
                        .iter()
                        .enumerate()
                        .map(|(index, item)| view! {
                            <GalleryTile index=index item=*item state=state/>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <LightboxOverlay state=state/>
    }
}
