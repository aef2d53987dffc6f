#[cfg(not(feature = "ssr"))]
pub mod browser;
pub mod common;
#[cfg(not(feature = "ssr"))]
pub mod google_maps;
pub mod icon;
pub mod page_state;
pub mod pages;
pub mod sections;

pub use icon::{Icon, icons};
pub use page_state::{PageState, provide_page_state, use_page_state};
