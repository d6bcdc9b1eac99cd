#[cfg(test)]
mod tests {
    use crate::core::submission::seconds_between;
    use crate::core::{
        FormAction, LandingConfig, ModalState, PageContext, SubmissionRecord, SubmitOutcome,
        Waitlist, WaitlistSink,
    };
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Sink that remembers every record it was handed
    #[derive(Clone, Default)]
    struct RecordingSink {
        sent: Rc<RefCell<Vec<SubmissionRecord>>>,
    }

    impl WaitlistSink for RecordingSink {
        fn notify(&self, record: SubmissionRecord) {
            self.sent.borrow_mut().push(record);
        }
    }

    /// Sink that counts records and drops them, like a request that never
    /// arrives
    struct DroppingSink {
        attempts: Rc<RefCell<u32>>,
    }

    impl WaitlistSink for DroppingSink {
        fn notify(&self, _record: SubmissionRecord) {
            *self.attempts.borrow_mut() += 1;
        }
    }

    /// Runs the form actions against a modal and counters
    #[derive(Default)]
    struct FormHarness {
        modal: ModalState,
        shakes: u32,
        resets: u32,
    }

    impl FormHarness {
        fn apply(&mut self, outcome: SubmitOutcome) {
            for action in outcome.actions() {
                match action {
                    FormAction::Shake => self.shakes += 1,
                    FormAction::ShowModal => self.modal.show(),
                    FormAction::ResetForm => self.resets += 1,
                }
            }
        }
    }

    fn loaded() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 15, 12, 0, 0).unwrap()
    }

    const SOURCE: &str = "https://cadence.example/";

    // ========================================================================
    // Form submission flow
    // ========================================================================

    #[test]
    fn test_invalid_email_shakes_without_request() {
        let sink = RecordingSink::default();
        let waitlist = Waitlist::new(Some(sink.clone()), loaded());
        let mut form = FormHarness::default();

        form.apply(waitlist.submit("a@b", SOURCE, loaded()));

        assert_eq!(form.shakes, 1);
        assert_eq!(form.resets, 0);
        assert!(form.modal.is_hidden());
        assert!(sink.sent.borrow().is_empty());
    }

    #[test]
    fn test_valid_email_sends_once_and_shows_modal() {
        let sink = RecordingSink::default();
        let waitlist = Waitlist::new(Some(sink.clone()), loaded());
        let mut form = FormHarness::default();

        let now = loaded() + Duration::seconds(75);
        form.apply(waitlist.submit("jane@cadence.example", SOURCE, now));

        assert_eq!(form.shakes, 0);
        assert_eq!(form.resets, 1);
        assert!(!form.modal.is_hidden());

        let sent = sink.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].email, "jane@cadence.example");
        assert_eq!(sent[0].source, SOURCE);
        assert_eq!(sent[0].time_on_page, 75);
    }

    #[test]
    fn test_byte_order_mark_email_is_rejected() {
        let sink = RecordingSink::default();
        let waitlist = Waitlist::new(Some(sink.clone()), loaded());
        let mut form = FormHarness::default();

        form.apply(waitlist.submit("a\u{feff}b@c.com", SOURCE, loaded()));

        assert_eq!(form.shakes, 1);
        assert!(form.modal.is_hidden());
        assert!(sink.sent.borrow().is_empty());
    }

    #[test]
    fn test_network_failure_does_not_change_outcome() {
        let attempts = Rc::new(RefCell::new(0));
        let waitlist = Waitlist::new(
            Some(DroppingSink {
                attempts: attempts.clone(),
            }),
            loaded(),
        );
        let mut form = FormHarness::default();

        form.apply(waitlist.submit("a@b.co", SOURCE, loaded()));

        assert_eq!(*attempts.borrow(), 1);
        assert!(!form.modal.is_hidden());
        assert_eq!(form.resets, 1);
    }

    #[test]
    fn test_without_endpoint_still_accepts() {
        let waitlist: Waitlist<RecordingSink> = Waitlist::new(None, loaded());
        let mut form = FormHarness::default();

        form.apply(waitlist.submit("a@b.co", SOURCE, loaded()));

        assert!(!form.modal.is_hidden());
        assert_eq!(form.resets, 1);
    }

    #[test]
    fn test_repeated_submissions_reuse_modal() {
        let sink = RecordingSink::default();
        let waitlist = Waitlist::new(Some(sink.clone()), loaded());
        let mut form = FormHarness::default();

        form.apply(waitlist.submit("one@cadence.example", SOURCE, loaded()));
        let token = form.modal.close().unwrap();
        assert!(form.modal.hide_elapsed(token));

        form.apply(waitlist.submit("two@cadence.example", SOURCE, loaded()));
        assert!(!form.modal.is_hidden());
        assert_eq!(sink.sent.borrow().len(), 2);
    }

    // ========================================================================
    // Page context
    // ========================================================================

    #[test]
    fn test_page_context_from_default_config() {
        let ctx = PageContext::new(loaded(), LandingConfig::default());
        assert!(ctx.config.waitlist_endpoint.is_some());
        assert_eq!(
            seconds_between(ctx.loaded_at, loaded() + Duration::milliseconds(2_600)),
            3
        );
    }
}
