//! Domain logic for the salon site: business data, the contact form, gallery
//! lightbox, navigation state and the map widget

#[cfg(feature = "ssr")]
pub mod api;
pub mod business;
#[cfg(feature = "ssr")]
pub mod config;
pub mod contact;
pub mod content;
pub mod gallery;
pub mod mailto;
pub mod map;
pub mod navigation;
pub mod seo;
#[cfg(test)]
mod tests;
pub mod validation;

pub use business::{BusinessProfile, SALON};
pub use contact::{ContactForm, HandoffError, MailHandoff, SubmitBlocked, SubmitOutcome};
pub use gallery::{GALLERY, Lightbox, LightboxKey, MediaItem};
pub use map::{Liveness, MapLoadError, MapProvider, MapState, MapWidget, PublicSiteConfig};
pub use navigation::{NavState, Section, Viewport};
pub use validation::{ContactField, FieldErrors};
