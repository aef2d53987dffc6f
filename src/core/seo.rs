//! Search and social metadata for the salon page

use serde_json::json;

use super::business::BusinessProfile;

pub const PAGE_TITLE: &str =
    "Seven The Hair and Beauty Salon | Premium Unisex Salon in Pradhikaran, Pune";

pub const PAGE_DESCRIPTION: &str = "Experience premium hair styling, nail artistry, skincare treatments, and bridal services at Seven The Hair and Beauty Salon. Located in Pradhikaran, Pune. 4.8★ rated unisex salon with expert stylists. Book your appointment today!";

pub const KEYWORDS: &[&str] = &[
    "Seven Salon Pune",
    "hair salon Pradhikaran",
    "unisex salon Pune",
    "beauty salon Pradhikaran",
    "hair styling Pune",
    "nail art salon",
    "bridal makeup Pune",
    "hair cut Pradhikaran",
    "facial treatments Pune",
    "salon near me",
    "best salon Pune",
    "hair color Pradhikaran",
];

pub const ROBOTS: &str = "index, follow";
pub const GOOGLEBOT: &str =
    "index, follow, max-video-preview:-1, max-image-preview:large, max-snippet:-1";

pub const SOCIAL_TITLE: &str = "Seven The Hair and Beauty Salon | Premium Unisex Salon in Pune";

pub const OG_DESCRIPTION: &str = "Pune's trusted unisex salon offering premium hair styling, nail artistry, skincare, and bridal services. Located in Pradhikaran with 4.8★ rating from 320+ customers.";

pub const TWITTER_DESCRIPTION: &str = "Experience premium beauty services at Pune's highest-rated unisex salon. Hair styling, nail art, skincare & bridal services in Pradhikaran.";

/// Share image, relative to the site root
pub const SHARE_IMAGE: &str = "/images/logo.png";

pub fn keywords_content() -> String {
    KEYWORDS.join(", ")
}

/// Absolute URL of the share image
pub fn share_image_url(profile: &BusinessProfile) -> String {
    format!("{}{}", profile.website, SHARE_IMAGE)
}

/// `business:contact_data:*` and `place:location:*` meta properties
pub fn business_meta(profile: &BusinessProfile) -> Vec<(&'static str, String)> {
    vec![
        ("business:contact_data:street_address", profile.street.to_string()),
        ("business:contact_data:locality", profile.locality.to_string()),
        ("business:contact_data:region", profile.region.to_string()),
        ("business:contact_data:country_name", profile.country.to_string()),
        ("business:contact_data:postal_code", profile.postal_code.to_string()),
        ("business:contact_data:phone_number", profile.phone_display.to_string()),
        ("business:contact_data:email", profile.email.to_string()),
        ("place:location:latitude", profile.location.lat.to_string()),
        ("place:location:longitude", profile.location.lng.to_string()),
    ]
}

/// schema.org `BeautySalon` record for the page's JSON-LD script
pub fn structured_data(profile: &BusinessProfile) -> String {
    let opening_hours: Vec<String> = profile
        .hours
        .iter()
        .map(|row| format!("{} {}", row.days, row.hours))
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "BeautySalon",
        "name": profile.name,
        "url": profile.website,
        "image": share_image_url(profile),
        "telephone": profile.phone_e164,
        "email": profile.email,
        "address": {
            "@type": "PostalAddress",
            "streetAddress": profile.street,
            "addressLocality": profile.locality,
            "addressRegion": profile.region,
            "postalCode": profile.postal_code,
            "addressCountry": profile.country,
        },
        "geo": {
            "@type": "GeoCoordinates",
            "latitude": profile.location.lat,
            "longitude": profile.location.lng,
        },
        "openingHours": opening_hours,
        "aggregateRating": {
            "@type": "AggregateRating",
            "ratingValue": profile.rating,
            "reviewCount": profile.review_count,
        },
        "sameAs": [profile.instagram_url()],
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::business::SALON;

    #[test]
    fn test_structured_data_describes_salon() {
        let value: serde_json::Value = serde_json::from_str(&structured_data(&SALON)).unwrap();

        assert_eq!(value["@type"], "BeautySalon");
        assert_eq!(value["telephone"], "+919112664990");
        assert_eq!(value["address"]["postalCode"], "411044");
        assert_eq!(value["geo"]["latitude"], 18.6478);
        assert_eq!(value["aggregateRating"]["reviewCount"], 320);
        assert_eq!(value["openingHours"][1], "Sunday 10:00 AM - 6:00 PM");
    }

    #[test]
    fn test_business_meta_uses_single_contact_source() {
        let meta = business_meta(&SALON);
        let lookup = |key: &str| {
            meta.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.clone())
        };

        assert_eq!(lookup("business:contact_data:email").as_deref(), Some(SALON.email));
        assert_eq!(
            lookup("business:contact_data:phone_number").as_deref(),
            Some(SALON.phone_display)
        );
        assert_eq!(lookup("place:location:longitude").as_deref(), Some("73.7637"));
    }

    #[test]
    fn test_keywords_are_comma_separated() {
        let content = keywords_content();
        assert!(content.starts_with("Seven Salon Pune, hair salon Pradhikaran"));
        assert_eq!(content.split(", ").count(), KEYWORDS.len());
    }

    #[test]
    fn test_share_image_is_absolute() {
        assert_eq!(share_image_url(&SALON), "https://seventhesalon.in/images/logo.png");
    }
}
