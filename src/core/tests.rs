#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use crate::core::contact::{HANDOFF_SUCCESS_MESSAGE, clean_phone};
    use crate::core::mailto::inquiry_body;
    use crate::core::map::{MapOptions, MarkerSpec, load_map};
    use crate::core::{
        ContactField, ContactForm, GALLERY, HandoffError, Lightbox, LightboxKey, Liveness,
        MailHandoff, MapLoadError, MapProvider, MapState, MapWidget, NavState, SALON, Section,
        SubmitBlocked, SubmitOutcome, Viewport,
    };

    // ========================================================================
    // Contact form -> mail handoff
    // ========================================================================

    #[derive(Default)]
    struct CapturingHandoff {
        opened: RefCell<Option<String>>,
    }

    impl MailHandoff for CapturingHandoff {
        fn open(&self, uri: &str) -> Result<(), HandoffError> {
            *self.opened.borrow_mut() = Some(uri.to_string());
            Ok(())
        }
    }

    struct BrokenHandoff;

    impl MailHandoff for BrokenHandoff {
        fn open(&self, _uri: &str) -> Result<(), HandoffError> {
            Err(HandoffError::NoWindow)
        }
    }

    fn fill(form: &mut ContactForm, name: &str, email: &str, phone: &str, message: &str) {
        form.set(ContactField::Name, name);
        form.set(ContactField::Email, email);
        form.set(ContactField::Phone, phone);
        form.set(ContactField::Message, message);
    }

    #[test]
    fn test_valid_submit_opens_mailto_and_clears_form() {
        let mut form = ContactForm::new();
        fill(
            &mut form,
            "Anita Kulkarni",
            "anita@example.in",
            "919112664990",
            "Hair spa on Saturday morning?",
        );
        let handoff = CapturingHandoff::default();

        let outcome = form.submit(&SALON, &handoff).unwrap();

        let uri = handoff.opened.borrow().clone().unwrap();
        assert_eq!(outcome, SubmitOutcome::Sent(uri.clone()));
        assert_eq!(outcome.user_message(), HANDOFF_SUCCESS_MESSAGE);
        assert!(uri.starts_with("mailto:info@sevensalon.com?subject="));
        assert!(uri.contains("Anita%20Kulkarni"));
        assert!(uri.contains("anita%40example.in"));
        assert!(uri.contains("Phone%3A%20919112664990"));
        assert!(uri.contains("Hair%20spa%20on%20Saturday%20morning%3F"));

        for field in ContactField::ALL {
            assert_eq!(form.value(field), "");
            assert_eq!(form.error(field), None);
        }
    }

    #[test]
    fn test_spaced_phone_is_validated_as_typed() {
        // Validation sees the raw input; only the mail body uses the cleaned number
        let mut form = ContactForm::new();
        form.set(ContactField::Phone, "91126 64990");
        assert_eq!(
            form.error(ContactField::Phone),
            Some("Please enter a valid Indian phone number (10 digits starting with 6-9)")
        );
        assert_eq!(clean_phone("91126 64990"), "9112664990");
    }

    #[test]
    fn test_invalid_fields_block_submit_and_report_errors() {
        let mut form = ContactForm::new();
        fill(&mut form, "P", "not-an-email", "91126649", "short");
        let handoff = CapturingHandoff::default();

        let result = form.submit(&SALON, &handoff);

        match result {
            Err(SubmitBlocked::Invalid(errors)) => assert_eq!(errors.len(), 4),
            other => panic!("expected invalid submit, got {:?}", other),
        }
        assert!(handoff.opened.borrow().is_none());
        assert_eq!(form.value(ContactField::Message), "short");
    }

    #[test]
    fn test_failed_handoff_keeps_input_for_retry() {
        let mut form = ContactForm::new();
        fill(
            &mut form,
            "Rahul",
            "rahul@example.com",
            "+919876543210",
            "Need a beard trim this week",
        );

        let outcome = form.submit(&SALON, &BrokenHandoff).unwrap();
        assert_eq!(outcome, SubmitOutcome::HandoffFailed(HandoffError::NoWindow));
        assert_eq!(form.value(ContactField::Name), "Rahul");

        // Retry succeeds with the same input
        let handoff = CapturingHandoff::default();
        assert!(form.submit(&SALON, &handoff).unwrap().is_sent());
    }

    #[test]
    fn test_mail_body_lists_submission_in_order() {
        let mut form = ContactForm::new();
        fill(
            &mut form,
            "Meera",
            "meera@example.com",
            "9822012345",
            "Bridal package enquiry for December",
        );
        let submission = form.validate().unwrap();
        let body = inquiry_body(&submission);

        let name = body.find("Name: Meera").unwrap();
        let email = body.find("Email: meera@example.com").unwrap();
        let phone = body.find("Phone: 9822012345").unwrap();
        let message = body.find("Message:\nBridal package").unwrap();
        assert!(name < email && email < phone && phone < message);
    }

    // ========================================================================
    // Gallery lightbox
    // ========================================================================

    #[test]
    fn test_full_lightbox_walk_returns_to_start() {
        let mut lightbox = Lightbox::default();
        lightbox.open(4);

        for _ in 0..GALLERY.len() {
            lightbox.handle_key(LightboxKey::Next);
        }
        assert_eq!(lightbox.current_index(), 4);

        for _ in 0..GALLERY.len() {
            lightbox.handle_key(LightboxKey::Previous);
        }
        assert_eq!(lightbox.current_index(), 4);
        assert_eq!(lightbox.counter(), "5 / 9");
    }

    #[test]
    fn test_lightbox_keys_driven_by_dom_key_names() {
        let mut lightbox = Lightbox::default();
        lightbox.open(0);

        for key in ["ArrowLeft", "Tab", "ArrowLeft", "Escape"] {
            if let Some(key) = LightboxKey::from_key(key) {
                lightbox.handle_key(key);
            }
        }

        assert!(!lightbox.is_open());
        assert_eq!(lightbox.current_index(), 7);
    }

    // ========================================================================
    // Page navigation
    // ========================================================================

    struct PageViewport {
        calls: RefCell<Vec<String>>,
    }

    impl Viewport for PageViewport {
        fn scroll_to(&self, element_id: &str) -> bool {
            self.calls.borrow_mut().push(element_id.to_string());
            Section::NAV_LINKS
                .iter()
                .chain(std::iter::once(&Section::About))
                .any(|section| section.id() == element_id)
        }
    }

    #[test]
    fn test_every_nav_link_reaches_its_section() {
        let viewport = PageViewport {
            calls: RefCell::new(Vec::new()),
        };
        let mut nav = NavState::new();

        for section in Section::NAV_LINKS {
            nav.toggle_menu();
            assert!(nav.navigate(&viewport, section));
            assert!(!nav.is_menu_open());
        }

        assert_eq!(
            *viewport.calls.borrow(),
            vec!["home", "services", "gallery", "testimonials", "contact"]
        );
    }

    #[test]
    fn test_scroll_sequence_toggles_opaque_bar() {
        let mut nav = NavState::new();
        let observed: Vec<bool> = [0.0, 30.0, 50.0, 51.0, 400.0, 10.0]
            .into_iter()
            .map(|y| {
                nav.on_scroll(y);
                nav.is_scrolled()
            })
            .collect();

        assert_eq!(observed, vec![false, false, false, true, true, false]);
    }

    // ========================================================================
    // Map widget
    // ========================================================================

    struct UnreachableMaps;

    impl MapProvider for UnreachableMaps {
        async fn load(&self, _options: &MapOptions) -> Result<(), MapLoadError> {
            Err(MapLoadError::Script("script blocked".to_string()))
        }

        fn render_marker(&self, _marker: &MarkerSpec) -> Result<(), MapLoadError> {
            panic!("marker rendered after failed load");
        }

        fn show_info(&self) {}

        fn hide_info(&self) {}
    }

    #[tokio::test]
    async fn test_map_failure_shows_fallback_and_stays_failed() {
        let liveness = Liveness::new();
        let mut widget = MapWidget::new();

        let outcome = load_map(&UnreachableMaps, &SALON).await;
        assert!(liveness.is_alive());
        widget.finish_load(outcome);

        assert!(matches!(widget.state(), MapState::Error(MapLoadError::Script(_))));

        widget.marker_clicked(&UnreachableMaps);
        assert!(!widget.is_info_open());
        assert_eq!(SALON.fallback_address(), "Regent Arcade, Pradhikaran, Pune");
    }
}
