use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use mentor_core::time::fixed_clock;
use services::MentorServices;
use storage::repository::Storage;

use crate::context::{AppContext, UiApp, build_app_context};
use crate::views::{DashboardView, ExportView};

#[derive(Clone)]
struct TestApp {
    services: MentorServices,
}

impl UiApp for TestApp {
    fn services(&self) -> MentorServices {
        self.services.clone()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Dashboard,
    Export,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    match props.view {
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::Export => rsx! { ExportView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: MentorServices,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        for _ in 0..3 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn hydrated_services(storage: &Storage) -> MentorServices {
    MentorServices::hydrate(storage, fixed_clock())
        .await
        .expect("hydrate services")
}

/// Context for components rendered outside the full app shell.
pub fn test_context(services: MentorServices) -> AppContext {
    let app: Arc<dyn UiApp> = Arc::new(TestApp { services });
    build_app_context(&app)
}

pub fn setup_view_harness(view: ViewKind, services: MentorServices) -> ViewHarness {
    let app = Arc::new(TestApp {
        services: services.clone(),
    });
    let dom = VirtualDom::new_with_props(ViewHarnessRoot, ViewHarnessProps { app, view });
    ViewHarness { dom, services }
}
