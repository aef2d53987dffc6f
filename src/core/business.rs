//! Business profile for Seven The Hair and Beauty Salon
//!
//! Every section that shows contact details reads them from [`SALON`], so the
//! phone number, email address and location stay consistent across the page.

/// Geographic coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A row of the opening hours table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningHours {
    pub days: &'static str,
    pub hours: &'static str,
}

/// Static contact and location details for the business
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusinessProfile {
    pub name: &'static str,
    pub short_name: &'static str,
    pub tagline: &'static str,
    pub street: &'static str,
    pub locality: &'static str,
    pub city: &'static str,
    pub region: &'static str,
    pub country: &'static str,
    pub postal_code: &'static str,
    pub landmark: &'static str,
    /// Human-readable phone number
    pub phone_display: &'static str,
    /// E.164 phone number used in `tel:` links
    pub phone_e164: &'static str,
    pub email: &'static str,
    pub instagram_handle: &'static str,
    pub website: &'static str,
    pub location: GeoPoint,
    pub rating: &'static str,
    pub review_count: u32,
    pub hours: &'static [OpeningHours],
}

/// The salon this site is built for
pub const SALON: BusinessProfile = BusinessProfile {
    name: "Seven The Hair and Beauty Salon",
    short_name: "SEVEN",
    tagline: "The Hair and Beauty Salon",
    street: "Shop No. B 12/13, Regent Arcade",
    locality: "Pradhikaran",
    city: "Pune",
    region: "Maharashtra",
    country: "India",
    postal_code: "411044",
    landmark: "Opposite PanOrtho Hospital",
    phone_display: "+91 91126 64990",
    phone_e164: "+919112664990",
    email: "info@sevensalon.com",
    instagram_handle: "seven_thesalon",
    website: "https://seventhesalon.in",
    location: GeoPoint {
        lat: 18.6478,
        lng: 73.7637,
    },
    rating: "4.8",
    review_count: 320,
    hours: &[
        OpeningHours {
            days: "Mon - Sat",
            hours: "10:00 AM - 8:00 PM",
        },
        OpeningHours {
            days: "Sunday",
            hours: "10:00 AM - 6:00 PM",
        },
    ],
};

impl BusinessProfile {
    /// `tel:` URI for one-tap calling
    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.phone_e164)
    }

    /// Plain `mailto:` URI without subject or body
    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn instagram_url(&self) -> String {
        format!("https://instagram.com/{}", self.instagram_handle)
    }

    pub fn instagram_display(&self) -> String {
        format!("@{}", self.instagram_handle)
    }

    /// Second address line: "Pradhikaran, Pune 411044"
    pub fn locality_line(&self) -> String {
        format!("{}, {} {}", self.locality, self.city, self.postal_code)
    }

    /// Phone number as shown in the navigation bar: "(+91) 91126 64990"
    pub fn phone_nav_display(&self) -> String {
        match self.phone_display.split_once(' ') {
            Some((code, rest)) => format!("({}) {}", code, rest),
            None => self.phone_display.to_string(),
        }
    }

    /// Google Maps search link used for "Get Directions"
    pub fn directions_url(&self) -> String {
        format!(
            "https://maps.google.com/?q={}",
            self.fallback_address().replace(' ', "+")
        )
    }

    /// Short address used in the map error fallback
    pub fn fallback_address(&self) -> String {
        let street_tail = self
            .street
            .rsplit(", ")
            .next()
            .unwrap_or(self.street);
        format!("{}, {}, {}", street_tail, self.locality, self.city)
    }

    pub fn rating_summary(&self) -> String {
        format!("{} ({})", self.rating, self.review_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tel_href_uses_e164_number() {
        assert_eq!(SALON.tel_href(), "tel:+919112664990");
    }

    #[test]
    fn test_phone_nav_display_wraps_country_code() {
        assert_eq!(SALON.phone_nav_display(), "(+91) 91126 64990");
    }

    #[test]
    fn test_directions_url() {
        assert_eq!(
            SALON.directions_url(),
            "https://maps.google.com/?q=Regent+Arcade,+Pradhikaran,+Pune"
        );
    }

    #[test]
    fn test_fallback_address() {
        assert_eq!(SALON.fallback_address(), "Regent Arcade, Pradhikaran, Pune");
    }

    #[test]
    fn test_locality_line_and_rating() {
        assert_eq!(SALON.locality_line(), "Pradhikaran, Pune 411044");
        assert_eq!(SALON.rating_summary(), "4.8 (320)");
    }

    #[test]
    fn test_instagram_links() {
        assert_eq!(SALON.instagram_url(), "https://instagram.com/seven_thesalon");
        assert_eq!(SALON.instagram_display(), "@seven_thesalon");
    }
}
