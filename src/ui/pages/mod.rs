//! Routed pages:
//! - Salon page (home)
//! - Not found page

mod not_found;
mod salon;

pub use not_found::NotFoundPage;
pub use salon::SalonPage;
