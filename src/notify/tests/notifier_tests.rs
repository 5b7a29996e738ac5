//! Tests for the recording notifier adapter.

use crate::notify::adapters::RecordingNotifier;
use crate::notify::domain::Notice;
use crate::notify::ports::Notifier;
use crate::roster::domain::EmailAddress;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn recording_notifier_captures_notices_in_send_order() {
    let notifier = RecordingNotifier::new();
    let first_recipient = EmailAddress::new("adel@example.com").expect("valid address");
    let second_recipient = EmailAddress::new("muna@example.com").expect("valid address");

    notifier
        .notify(&first_recipient, &Notice::new("First", "first body"))
        .await
        .expect("delivery succeeds");
    notifier
        .notify(&second_recipient, &Notice::new("Second", "second body"))
        .await
        .expect("delivery succeeds");

    let sent = notifier.sent().expect("capture readable");
    assert_eq!(sent.len(), 2);
    let (recipient, notice) = sent.first().expect("first notice");
    assert_eq!(recipient, &first_recipient);
    assert_eq!(notice.subject(), "First");
}
