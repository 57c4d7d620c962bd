use dioxus::prelude::*;
use mentor_core::model::SessionId;
use services::notes::{NOTES_SAVED_FOR, NOTES_SAVED_LABEL, SAVE_NOTES_LABEL};
use services::sessions::DONE_LABEL;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{DashboardVm, ProgressVm, SessionRowVm, SessionsVm, map_dashboard};

const EDIT_LABEL: &str = "Edit";
const SAVE_EDIT_LABEL: &str = "Save";

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let services = ctx.services();

    // Controllers hold the live state; this only seeds the panels once.
    let resource = use_resource(move || {
        let services = services.clone();
        async move {
            let snapshot = services.snapshot().await;
            Ok::<DashboardVm, ViewError>(map_dashboard(&snapshot))
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page",
            h2 { "Mentoring" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    NotesPanel { initial: data.notes.clone() }
                    SessionsPanel { initial: data.sessions.clone() }
                    ProgressPanel { initial: data.progress.clone() }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}

//
// ─── NOTES ─────────────────────────────────────────────────────────────────────
//

#[component]
fn NotesPanel(initial: String) -> Element {
    let ctx = use_context::<AppContext>();
    let mut text = use_signal(|| initial.clone());
    let mut save_label = use_signal(|| SAVE_NOTES_LABEL);
    let mut error = use_signal(|| None::<String>);

    let notes = ctx.notes();
    let save = {
        let notes = notes.clone();
        move |_: MouseEvent| {
            let notes = notes.clone();
            spawn(async move {
                let value = text.read().clone();
                match notes.save(&value).await {
                    Ok(()) => {
                        error.set(None);
                        // Not cancelled by a second save; the last timer wins.
                        save_label.set(NOTES_SAVED_LABEL);
                        tokio::time::sleep(NOTES_SAVED_FOR).await;
                        save_label.set(SAVE_NOTES_LABEL);
                    }
                    Err(err) => {
                        tracing::error!(%err, "saving notes failed");
                        error.set(Some(err.to_string()));
                    }
                }
            });
        }
    };
    let clear = move |_: MouseEvent| {
        let notes = notes.clone();
        spawn(async move {
            match notes.clear().await {
                Ok(()) => {
                    text.set(String::new());
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!(%err, "clearing notes failed");
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        section { class: "panel notes",
            h3 { "Notes" }
            textarea {
                class: "notes-input",
                rows: "6",
                value: "{text}",
                oninput: move |evt| text.set(evt.value()),
            }
            div { class: "row",
                button { onclick: save, "{save_label}" }
                button { class: "ghost", onclick: clear, "Clear notes" }
            }
            {error().map(|msg| rsx! { p { class: "error", "{msg}" } })}
        }
    }
}

//
// ─── SESSIONS ──────────────────────────────────────────────────────────────────
//

/// New title and date for an existing session, as typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SessionEdit {
    pub id: SessionId,
    pub title: String,
    pub date: String,
}

/// Row-level actions shared by every row of the sessions panel.
#[derive(Clone, Copy, PartialEq)]
pub(crate) struct SessionActions {
    pub done: Callback<SessionId>,
    pub edit: Callback<SessionEdit>,
}

/// Build the row actions. Each one writes through the controller and then
/// refreshes `view` from it; failures land in `error`.
pub(crate) fn use_session_actions(
    view: Signal<SessionsVm>,
    error: Signal<Option<String>>,
) -> SessionActions {
    let ctx = use_context::<AppContext>();

    let done = {
        let sessions = ctx.sessions();
        let mut view = view;
        let mut error = error;
        use_callback(move |id: SessionId| {
            let sessions = sessions.clone();
            spawn(async move {
                match sessions.remove_session(id).await {
                    Ok(_) => {
                        error.set(None);
                        view.set(SessionsVm::from(&sessions.view().await));
                    }
                    Err(err) => {
                        tracing::error!(%err, %id, "completing session failed");
                        error.set(Some(err.to_string()));
                    }
                }
            });
        })
    };

    let edit = {
        let sessions = ctx.sessions();
        let mut view = view;
        let mut error = error;
        use_callback(move |request: SessionEdit| {
            let sessions = sessions.clone();
            spawn(async move {
                let date = Some(request.date.as_str()).filter(|d| !d.is_empty());
                match sessions.edit_session(request.id, &request.title, date).await {
                    Ok(_) => {
                        error.set(None);
                        view.set(SessionsVm::from(&sessions.view().await));
                    }
                    Err(err) => {
                        tracing::error!(%err, id = %request.id, "editing session failed");
                        error.set(Some(err.to_string()));
                    }
                }
            });
        })
    };

    SessionActions { done, edit }
}

#[component]
fn SessionsPanel(initial: SessionsVm) -> Element {
    let view = use_signal(|| initial.clone());
    let error = use_signal(|| None::<String>);
    let actions = use_session_actions(view, error);

    rsx! {
        SessionsSection { view, error, actions }
    }
}

#[component]
pub(crate) fn SessionsSection(
    view: Signal<SessionsVm>,
    error: Signal<Option<String>>,
    actions: SessionActions,
) -> Element {
    let ctx = use_context::<AppContext>();
    let mut view = view;
    let mut error = error;
    let mut title = use_signal(String::new);
    let mut date = use_signal(String::new);

    let sessions = ctx.sessions();
    let add = {
        let sessions = sessions.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let sessions = sessions.clone();
            spawn(async move {
                let title_value = title.read().clone();
                let date_value = date.read().clone();
                let date_opt = Some(date_value.as_str()).filter(|d| !d.is_empty());
                match sessions.add_session(&title_value, date_opt).await {
                    Ok(Some(_)) => {
                        title.set(String::new());
                        date.set(String::new());
                        error.set(None);
                        view.set(SessionsVm::from(&sessions.view().await));
                    }
                    // Blank title: leave the form as typed.
                    Ok(None) => {}
                    Err(err) => {
                        tracing::error!(%err, "adding session failed");
                        error.set(Some(err.to_string()));
                    }
                }
            });
        }
    };
    let reset = move |_: MouseEvent| {
        let sessions = sessions.clone();
        spawn(async move {
            match sessions.reset_sessions().await {
                Ok(()) => {
                    error.set(None);
                    view.set(SessionsVm::from(&sessions.view().await));
                }
                Err(err) => {
                    tracing::error!(%err, "resetting sessions failed");
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    let current = view.read().clone();

    rsx! {
        section { class: "panel sessions",
            h3 { "Sessions" }
            form { class: "session-form", onsubmit: add,
                input {
                    r#type: "text",
                    placeholder: "Session title",
                    value: "{title}",
                    oninput: move |evt| title.set(evt.value()),
                }
                input {
                    r#type: "date",
                    value: "{date}",
                    oninput: move |evt| date.set(evt.value()),
                }
                button { r#type: "submit", "Add session" }
            }
            p { class: "summary", "{current.summary}" }
            ul { class: "sessions-list",
                for row in current.rows {
                    SessionRow { key: "{row.id}", row: row.clone(), actions }
                }
            }
            button { class: "ghost", onclick: reset, "Reset sessions" }
            {error().map(|msg| rsx! { p { class: "error", "{msg}" } })}
        }
    }
}

#[component]
fn SessionRow(row: SessionRowVm, actions: SessionActions) -> Element {
    let id: SessionId = row.id;
    let mut editing = use_signal(|| false);
    let mut title = use_signal(String::new);
    let mut date = use_signal(String::new);

    let start_edit = {
        let row = row.clone();
        move |_: MouseEvent| {
            title.set(row.title.clone());
            date.set(row.date.clone());
            editing.set(true);
        }
    };
    let save_edit = move |_: MouseEvent| {
        actions.edit.call(SessionEdit {
            id,
            title: title.read().clone(),
            date: date.read().clone(),
        });
        editing.set(false);
    };

    rsx! {
        li { "data-id": "{id}",
            if editing() {
                div { class: "session-edit",
                    input {
                        r#type: "text",
                        value: "{title}",
                        oninput: move |evt| title.set(evt.value()),
                    }
                    input {
                        r#type: "date",
                        value: "{date}",
                        oninput: move |evt| date.set(evt.value()),
                    }
                }
                button { onclick: save_edit, "{SAVE_EDIT_LABEL}" }
                button { class: "ghost", onclick: move |_: MouseEvent| editing.set(false), "Cancel" }
            } else {
                div {
                    strong { "{row.title}" }
                    div { class: "muted", "{row.date_label}" }
                }
                button { class: "ghost", onclick: start_edit, "{EDIT_LABEL}" }
                button { class: "ghost", onclick: move |_: MouseEvent| actions.done.call(id), "{DONE_LABEL}" }
            }
        }
    }
}

//
// ─── PROGRESS ──────────────────────────────────────────────────────────────────
//

#[component]
fn ProgressPanel(initial: ProgressVm) -> Element {
    let ctx = use_context::<AppContext>();
    let mut view = use_signal(|| initial.clone());
    let mut raw = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let progress = ctx.progress();
    let update = move |_: MouseEvent| {
        let progress = progress.clone();
        spawn(async move {
            let input = raw.read().clone();
            match progress.update_from_input(&input).await {
                Ok(next) => {
                    error.set(None);
                    view.set(ProgressVm::from(&next));
                }
                Err(err) => {
                    tracing::error!(%err, "updating progress failed");
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    let current = view.read().clone();

    rsx! {
        section { class: "panel progress",
            h3 { "Progress" }
            div {
                class: "pb",
                role: "progressbar",
                "aria-valuemin": "0",
                "aria-valuemax": "100",
                "aria-valuenow": "{current.percent}",
                div { class: "pb-fill", style: "{current.fill_style}" }
            }
            span { class: "pb-label", "{current.label}" }
            div { class: "row",
                input {
                    r#type: "number",
                    min: "0",
                    max: "100",
                    value: "{raw}",
                    oninput: move |evt| raw.set(evt.value()),
                }
                button { onclick: update, "Update" }
            }
            {error().map(|msg| rsx! { p { class: "error", "{msg}" } })}
        }
    }
}
