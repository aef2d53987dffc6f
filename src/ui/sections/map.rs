//! Map panel showing the salon's location
//!
//! Renders a loading indicator until the map is ready, or a static address
//! panel if anything in the load chain fails. The load runs once per mount.

use leptos::prelude::*;

use crate::core::{MapState, MapWidget, SALON};
use crate::ui::common::LoadingSpinner;
use crate::ui::icon::{Icon, icons};

#[component]
fn MapFallback() -> impl IntoView {
    view! {
        <div class="absolute inset-0 flex items-center justify-center bg-gray-200">
            <div class="text-center">
                <Icon name=icons::MAP_PIN class="h-12 w-12 mx-auto mb-2 opacity-40"/>
                <p class="text-gray-500">"Error loading maps"</p>
                <p class="text-xs text-gray-400 mt-1">{SALON.fallback_address()}</p>
            </div>
        </div>
    }
}

#[component]
pub fn MapPanel() -> impl IntoView {
    let widget = RwSignal::new(MapWidget::new());
    let container = NodeRef::<leptos::html::Div>::new();

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::map::{apply_if_alive, load_map};
        use crate::core::{Liveness, MapLoadError};
        use crate::ui::browser::fetch_site_config;
        use crate::ui::google_maps::GoogleMapsProvider;
        use leptos::logging::error;
        use leptos::task::spawn_local;

        let liveness = Liveness::new();
        let provider = StoredValue::new_local(None::<GoogleMapsProvider>);
        let started = StoredValue::new(false);

        let on_marker_click = Callback::new(move |()| {
            provider.try_with_value(|maps| {
                if let Some(maps) = maps {
                    widget.try_update(|w| w.marker_clicked(maps));
                }
            });
        });
        let on_info_close = Callback::new(move |()| {
            provider.try_with_value(|maps| {
                if let Some(maps) = maps {
                    widget.try_update(|w| w.info_closed(maps));
                }
            });
        });

        let task_liveness = liveness.clone();
        Effect::new(move |_| {
            let Some(element) = container.get() else {
                return;
            };
            if started.get_value() {
                return;
            }
            started.set_value(true);

            let liveness = task_liveness.clone();
            spawn_local(async move {
                let outcome: Result<(), MapLoadError> = async {
                    let config = fetch_site_config().await?;
                    let api_key = config.require_maps_key()?.to_string();
                    let maps = GoogleMapsProvider::new(
                        element.into(),
                        api_key,
                        on_marker_click,
                        on_info_close,
                    );
                    let result = load_map(&maps, &SALON).await;
                    if liveness.is_alive() {
                        provider.try_update_value(|slot| *slot = Some(maps));
                    }
                    result
                }
                .await;

                if let Err(err) = &outcome {
                    error!("Map failed to load: {}", err);
                }
                widget.try_update(|w| apply_if_alive(&liveness, w, outcome));
            });
        });

        on_cleanup(move || liveness.revoke());
    }

    view! {
        <div class="relative h-96 w-full rounded-lg overflow-hidden shadow-lg bg-gray-200">
            <div
                node_ref=container
                class="absolute inset-0"
                role="region"
                aria-label=format!("Map showing {}", SALON.name)
            ></div>
            {move || match widget.with(|w| w.state().clone()) {
                MapState::Loading => Some(view! {
                    <div class="absolute inset-0 flex items-center justify-center bg-gray-200">
                        <LoadingSpinner message="Loading map...".to_string()/>
                    </div>
                }.into_any()),
                MapState::Error(_) => Some(view! { <MapFallback/> }.into_any()),
                MapState::Ready => None,
            }}
        </div>
    }
}
