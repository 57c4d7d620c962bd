use dioxus::prelude::*;
use services::ExportFormat;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[derive(Clone, Debug, PartialEq, Eq)]
struct ExportData {
    markdown: String,
    ics: String,
    csv: String,
    json: String,
}

#[component]
pub fn ExportView() -> Element {
    let ctx = use_context::<AppContext>();
    let services = ctx.services();

    let mut resource = use_resource(move || {
        let services = services.clone();
        async move {
            let render = |format| {
                let services = services.clone();
                async move {
                    services.export(format).await.map_err(|err| {
                        tracing::error!(%err, ?format, "export failed");
                        ViewError::Unknown
                    })
                }
            };
            Ok::<_, ViewError>(ExportData {
                markdown: render(ExportFormat::Markdown).await?,
                ics: render(ExportFormat::Ics).await?,
                csv: render(ExportFormat::Csv).await?,
                json: render(ExportFormat::Json).await?,
            })
        }
    });

    let state = view_state_from_resource(resource);

    let mut import_text = use_signal(String::new);
    let mut import_status = use_signal(|| None::<String>);
    let importer = ctx.services();
    let import = move |_: MouseEvent| {
        let importer = importer.clone();
        spawn(async move {
            let text = import_text.read().clone();
            match importer.import_sessions(&text).await {
                Ok(count) => {
                    import_text.set(String::new());
                    import_status.set(Some(format!("Imported {count} session(s).")));
                    resource.restart();
                }
                Err(err) => {
                    tracing::warn!(%err, "import rejected");
                    import_status.set(Some(format!("Import failed: {err}")));
                }
            }
        });
    };

    rsx! {
        div { class: "page",
            h2 { "Export / Import" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    section { class: "panel",
                        h3 { "Markdown" }
                        pre { class: "export", "{data.markdown}" }
                    }
                    section { class: "panel",
                        h3 { "Calendar (ICS)" }
                        pre { class: "export", "{data.ics}" }
                    }
                    section { class: "panel",
                        h3 { "CSV" }
                        pre { class: "export", "{data.csv}" }
                    }
                    section { class: "panel",
                        h3 { "JSON" }
                        pre { class: "export", "{data.json}" }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }

            section { class: "panel import",
                h3 { "Import sessions (JSON)" }
                p { class: "muted", "Replaces the current session list." }
                textarea {
                    rows: "6",
                    value: "{import_text}",
                    oninput: move |evt| import_text.set(evt.value()),
                }
                button { onclick: import, "Import" }
                {import_status().map(|msg| rsx! { p { class: "status", "{msg}" } })}
            }
        }
    }
}
