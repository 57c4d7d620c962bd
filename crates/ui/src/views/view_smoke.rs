use storage::repository::Storage;

use super::test_harness::{ViewKind, hydrated_services, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_renders_fresh_defaults() {
    let services = hydrated_services(&Storage::in_memory()).await;
    let mut harness = setup_view_harness(ViewKind::Dashboard, services);

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("40%"), "missing default progress in {html}");
    assert!(
        html.contains("No sessions yet. Save some notes and add a session."),
        "missing empty summary in {html}"
    );
    assert!(html.contains("Save notes"), "missing notes button in {html}");
    assert!(!html.contains("Done"), "unexpected row in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_renders_session_rows() {
    let services = hydrated_services(&Storage::in_memory()).await;
    services.sessions().add_session("Intro call", None).await.unwrap();
    services
        .sessions()
        .add_session("Goal review", Some("2024-01-01"))
        .await
        .unwrap();
    services.progress().set_progress(72.4).await.unwrap();

    let mut harness = setup_view_harness(ViewKind::Dashboard, services);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(
        html.contains("You have 2 session(s) scheduled. Next: 2024-01-01."),
        "missing summary in {html}"
    );
    assert!(html.contains("Intro call"), "missing row in {html}");
    assert!(html.contains("No date"), "missing date placeholder in {html}");
    assert!(html.contains("Done"), "missing done action in {html}");
    assert!(html.contains("72%"), "missing progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn export_smoke_renders_all_formats() {
    let services = hydrated_services(&Storage::in_memory()).await;
    services
        .sessions()
        .add_session("Kickoff", Some("2024-06-01"))
        .await
        .unwrap();

    let mut harness = setup_view_harness(ViewKind::Export, services);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("# Mentoring sessions"), "missing markdown in {html}");
    assert!(html.contains("BEGIN:VCALENDAR"), "missing ics in {html}");
    assert!(html.contains("#,Title,Date"), "missing csv in {html}");
    assert!(html.contains("1,Kickoff,2024-06-01"), "missing csv row in {html}");
    assert!(html.contains("Kickoff"), "missing session in {html}");
    assert!(html.contains("Import sessions (JSON)"), "missing import form in {html}");
}
