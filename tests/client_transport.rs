mod common;

use common::TestContext;
use portfolio_contact::client::{
    FormFields, HttpContactTransport, NotificationKind, PageController, SubmitOutcome,
};
use std::net::SocketAddr;
use std::sync::Arc;

/// Serves the app on an ephemeral port and returns the contact endpoint URL.
async fn spawn_server(ctx: &TestContext) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    let app = ctx.router();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/process_contact")
}

#[tokio::test]
async fn test_page_submits_to_server() {
    let ctx = TestContext::new();
    let endpoint = spawn_server(&ctx).await;

    let transport = HttpContactTransport::new(endpoint).unwrap();
    let mut page = PageController::new(Arc::new(transport));
    page.form_mut().set_fields(FormFields::new(
        "Ann",
        "ann@example.com",
        "Hi",
        "Hello there, nice site!",
    ));

    let outcome = page.form_mut().submit().await;

    assert!(matches!(outcome, SubmitOutcome::Accepted(_)));
    assert_eq!(page.form().fields(), &FormFields::default());

    let notification = page.notifications().current().unwrap();
    assert_eq!(notification.kind, NotificationKind::Success);
    assert_eq!(
        notification.message,
        "Thank you for your message! I will get back to you soon."
    );
    assert_eq!(ctx.mailer.sent().len(), 1);
}

#[tokio::test]
async fn test_server_rejection_is_shown() {
    let ctx = TestContext::new();
    let endpoint = spawn_server(&ctx).await;

    let transport = HttpContactTransport::new(endpoint).unwrap();
    let mut page = PageController::new(Arc::new(transport));
    page.form_mut()
        .set_fields(FormFields::new("Ann", "ann@example.com", "Hi", "Too short"));

    let outcome = page.form_mut().submit().await;

    assert!(
        matches!(outcome, SubmitOutcome::Rejected(ref m) if m == "Message must be at least 10 characters long")
    );
    assert_eq!(page.form().fields().message, "Too short");
    assert_eq!(
        page.notifications().current().unwrap().kind,
        NotificationKind::Error
    );
}

#[tokio::test]
async fn test_unreachable_server_uses_fallback() {
    // Bind and drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let transport = HttpContactTransport::new(format!("http://{addr}/process_contact")).unwrap();
    let mut page = PageController::new(Arc::new(transport));
    page.form_mut().set_fields(FormFields::new(
        "Ann",
        "ann@example.com",
        "Hi",
        "Hello there, nice site!",
    ));

    let outcome = page.form_mut().submit().await;

    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert_eq!(
        page.notifications().current().unwrap().message,
        "Sorry, there was an error sending your message. Please try again."
    );
    assert!(!page.form().control().is_disabled());
}
