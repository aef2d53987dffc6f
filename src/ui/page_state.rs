//! Page-level UI state shared through context
//!
//! Provides:
//! - NavState signal (scrolled flag, mobile menu flag) kept in sync with window scroll
//! - Lightbox signal for the gallery overlay
//! - Section navigation that closes the mobile menu and scrolls smoothly

use leptos::prelude::*;

use crate::core::{Lightbox, NavState, Section};

/// Reactive page state owned by the salon page
#[derive(Clone, Copy)]
pub struct PageState {
    pub nav: RwSignal<NavState>,
    pub lightbox: RwSignal<Lightbox>,
}

impl PageState {
    /// Closes the mobile menu and scrolls to `section` if it is on the page
    pub fn navigate(&self, section: Section) {
        #[cfg(not(feature = "ssr"))]
        {
            use crate::ui::browser::WindowViewport;

            let found = self
                .nav
                .try_update(|nav| nav.navigate(&WindowViewport, section))
                .unwrap_or(false);
            if !found {
                leptos::logging::warn!("No section with id '{}' on the page", section.id());
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = section;
            self.nav.update(NavState::close_menu);
        }
    }

    pub fn toggle_menu(&self) {
        self.nav.update(NavState::toggle_menu);
    }

    pub fn open_lightbox(&self, index: usize) {
        self.lightbox.update(|lightbox| lightbox.open(index));
    }

    pub fn close_lightbox(&self) {
        self.lightbox.update(Lightbox::close);
    }

    pub fn next_item(&self) {
        self.lightbox.update(Lightbox::next);
    }

    pub fn previous_item(&self) {
        self.lightbox.update(Lightbox::previous);
    }
}

/// Creates the page state, tracks window scroll and provides it as context
pub fn provide_page_state() -> PageState {
    let state = PageState {
        nav: RwSignal::new(NavState::new()),
        lightbox: RwSignal::new(Lightbox::default()),
    };

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::navigation::is_past_threshold;
        use crate::ui::browser::scroll_offset;
        use leptos::ev::scroll;

        let nav = state.nav;

        // Pick up a restored scroll position once hydrated
        Effect::new(move |_| nav.update(|n| n.on_scroll(scroll_offset())));

        let handle = window_event_listener(scroll, move |_| {
            let offset = scroll_offset();
            // Only write when the flag actually flips
            if nav.with_untracked(|n| n.is_scrolled()) != is_past_threshold(offset) {
                nav.update(|n| n.on_scroll(offset));
            }
        });

        on_cleanup(move || drop(handle));
    }

    provide_context(state);
    state
}

/// Get the page state from context
pub fn use_page_state() -> PageState {
    use_context::<PageState>().expect("PageState should be provided")
}
