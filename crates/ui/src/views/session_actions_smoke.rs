use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use storage::repository::{KeyValueStore, Storage};

use crate::context::AppContext;
use crate::vm::SessionsVm;

use super::dashboard::{SessionActions, SessionEdit, SessionsSection, use_session_actions};
use super::test_harness::{hydrated_services, test_context};

#[derive(Clone, Default)]
struct HarnessHandles {
    actions: Rc<RefCell<Option<SessionActions>>>,
}

impl HarnessHandles {
    fn actions(&self) -> SessionActions {
        let actions = *self.actions.borrow();
        actions.expect("actions registered")
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    context: AppContext,
    initial: SessionsVm,
    handles: HarnessHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for HarnessProps {}

#[component]
fn SessionsHarnessRoot(props: HarnessProps) -> Element {
    use_context_provider(|| props.context.clone());
    use_context_provider(|| props.handles.clone());
    rsx! { SessionsHarness { initial: props.initial.clone() } }
}

#[component]
fn SessionsHarness(initial: SessionsVm) -> Element {
    let handles = use_context::<HarnessHandles>();
    let view = use_signal(|| initial.clone());
    let error = use_signal(|| None::<String>);
    let actions = use_session_actions(view, error);
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *handles.actions.borrow_mut() = Some(actions);
    }
    rsx! { SessionsSection { view, error, actions } }
}

async fn drive(dom: &mut VirtualDom) {
    for _ in 0..3 {
        let _ = tokio::time::timeout(std::time::Duration::from_millis(50), dom.wait_for_work())
            .await;
        dom.render_immediate(&mut dioxus::core::NoOpMutations);
        dom.process_events();
    }
}

#[tokio::test(flavor = "current_thread")]
async fn done_removes_the_row_and_the_stored_session() {
    let storage = Storage::in_memory();
    let services = hydrated_services(&storage).await;
    let intro = services
        .sessions()
        .add_session("Intro call", None)
        .await
        .unwrap()
        .unwrap();
    let review = services
        .sessions()
        .add_session("Goal review", Some("2024-01-01"))
        .await
        .unwrap()
        .unwrap();
    let initial = SessionsVm::from(&services.sessions().view().await);

    let handles = HarnessHandles::default();
    let mut dom = VirtualDom::new_with_props(
        SessionsHarnessRoot,
        HarnessProps {
            context: test_context(services.clone()),
            initial,
            handles: handles.clone(),
        },
    );
    dom.rebuild_in_place();
    drive(&mut dom).await;

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("You have 2 session(s) scheduled."), "{html}");
    assert!(html.contains(&format!("data-id=\"{intro}\"")), "{html}");

    handles.actions().done.call(intro);
    drive(&mut dom).await;

    let html = dioxus_ssr::render(&dom);
    assert!(!html.contains("Intro call"), "row still rendered: {html}");
    assert!(!html.contains(&format!("data-id=\"{intro}\"")), "{html}");
    assert!(html.contains("Goal review"), "{html}");
    assert!(
        html.contains("You have 1 session(s) scheduled. Next: 2024-01-01."),
        "{html}"
    );

    let stored = storage
        .store
        .get("m_mentor_sessions")
        .await
        .unwrap()
        .expect("sessions stored");
    assert!(!stored.contains(&format!("\"id\":{intro},")), "{stored}");
    assert!(stored.contains(&format!("\"id\":{review},")), "{stored}");
    assert!(services.sessions().sessions().await.get(intro).is_none());
}

#[tokio::test(flavor = "current_thread")]
async fn edit_rewrites_the_row_in_place() {
    let storage = Storage::in_memory();
    let services = hydrated_services(&storage).await;
    let intro = services
        .sessions()
        .add_session("Intro call", None)
        .await
        .unwrap()
        .unwrap();
    let initial = SessionsVm::from(&services.sessions().view().await);

    let handles = HarnessHandles::default();
    let mut dom = VirtualDom::new_with_props(
        SessionsHarnessRoot,
        HarnessProps {
            context: test_context(services.clone()),
            initial,
            handles: handles.clone(),
        },
    );
    dom.rebuild_in_place();
    drive(&mut dom).await;

    handles.actions().edit.call(SessionEdit {
        id: intro,
        title: "Intro call (moved)".to_string(),
        date: "2024-03-01".to_string(),
    });
    drive(&mut dom).await;

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("Intro call (moved)"), "{html}");
    assert!(
        html.contains("You have 1 session(s) scheduled. Next: 2024-03-01."),
        "{html}"
    );
    let stored = services.sessions().sessions().await;
    assert_eq!(stored.get(intro).and_then(|s| s.date()), Some("2024-03-01"));

    // A blank title leaves the row as it was.
    handles.actions().edit.call(SessionEdit {
        id: intro,
        title: "  ".to_string(),
        date: String::new(),
    });
    drive(&mut dom).await;
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("Intro call (moved)"), "{html}");
}
