//! `mailto:` link composition for appointment inquiries

use super::business::SALON;
use super::contact::ContactSubmission;

/// Subject line for an inquiry from `name`
pub fn inquiry_subject(name: &str) -> String {
    format!("Appointment Inquiry from {}", name)
}

/// Plain-text body listing all four submitted fields
pub fn inquiry_body(submission: &ContactSubmission) -> String {
    format!(
        "Hello {salon},\n\n\
         I would like to inquire about your services.\n\n\
         Name: {name}\n\
         Email: {email}\n\
         Phone: {phone}\n\n\
         Message:\n{message}\n\n\
         Best regards,\n{name}",
        salon = SALON.name,
        name = submission.name,
        email = submission.email,
        phone = submission.phone,
        message = submission.message,
    )
}

/// Builds `mailto:{to}?subject=..&body=..` with both parameters percent-encoded
pub fn compose_inquiry(submission: &ContactSubmission, to: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        to,
        urlencoding::encode(&inquiry_subject(&submission.name)),
        urlencoding::encode(&inquiry_body(submission)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Priya Sharma".to_string(),
            email: "priya+salon@example.com".to_string(),
            phone: "9112664990".to_string(),
            message: "Keratin treatment & trim?".to_string(),
        }
    }

    #[test]
    fn test_subject_is_encoded() {
        let link = compose_inquiry(&submission(), "info@sevensalon.com");
        assert!(link.starts_with(
            "mailto:info@sevensalon.com?subject=Appointment%20Inquiry%20from%20Priya%20Sharma&body="
        ));
    }

    #[test]
    fn test_body_contains_every_field() {
        let body = inquiry_body(&submission());
        assert!(body.starts_with("Hello Seven The Hair and Beauty Salon,\n\n"));
        assert!(body.contains("Name: Priya Sharma\n"));
        assert!(body.contains("Email: priya+salon@example.com\n"));
        assert!(body.contains("Phone: 9112664990\n\n"));
        assert!(body.contains("Message:\nKeratin treatment & trim?\n\n"));
        assert!(body.ends_with("Best regards,\nPriya Sharma"));
    }

    #[test]
    fn test_reserved_characters_are_escaped() {
        let link = compose_inquiry(&submission(), "info@sevensalon.com");
        let (_, query) = link.split_once('?').unwrap();

        // Only the two separators survive unescaped
        assert_eq!(query.matches('&').count(), 1);
        assert_eq!(query.matches('=').count(), 2);
        assert!(query.contains("priya%2Bsalon%40example.com"));
        assert!(query.contains("Keratin%20treatment%20%26%20trim%3F"));
        assert!(query.contains("%0A"));
    }

    #[test]
    fn test_body_round_trips_through_decoding() {
        let link = compose_inquiry(&submission(), "info@sevensalon.com");
        let encoded_body = link.split_once("&body=").unwrap().1;
        let decoded = urlencoding::decode(encoded_body).unwrap();
        assert_eq!(decoded, inquiry_body(&submission()));
    }
}
