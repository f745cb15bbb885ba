//! Email campaign generator page

use dioxus::prelude::*;

use copydeck_domain::{EmailTone, EmailType, GenerationRequest, GenerationResult};

use crate::application::workflow::{Workflow, WorkflowPhase};
use crate::presentation::components::common::{
    enum_options, CopyButton, SelectField, TextAreaField, TextField,
};
use crate::presentation::services::use_generation_service;
use crate::presentation::state::use_toast_state;
use crate::use_platform;

#[component]
pub fn EmailView() -> Element {
    let service = use_generation_service();
    let platform = use_platform();
    let mut toasts = use_toast_state();

    let mut email_type = use_signal(|| EmailType::Newsletter);
    let mut tone = use_signal(|| EmailTone::Professional);
    let mut subject = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut workflow = use_signal(Workflow::new);

    let generate = move |_| {
        let request = GenerationRequest::Email {
            email_type: email_type(),
            tone: tone(),
            subject: subject(),
            description: description(),
        };
        if let Err(err) = request.validate() {
            toasts.error(err.to_string());
            return;
        }
        let Some(ticket) = workflow.write().begin() else {
            return;
        };

        let service = service.clone();
        let platform = platform.clone();
        spawn(async move {
            match service.generate(&request).await {
                Ok(result) => {
                    if workflow.write().complete(ticket, result) {
                        toasts.success("Email content generated successfully!");
                    }
                }
                Err(err) => {
                    platform.log_error(&format!("Email generation failed: {}", err));
                    let message = "Failed to generate email content. Please try again.";
                    if workflow.write().fail(ticket, message) {
                        toasts.error(message);
                    }
                }
            }
        });
    };

    let reset = move |_| {
        subject.set(String::new());
        description.set(String::new());
        workflow.write().reset();
    };

    let phase = workflow.read().phase().clone();
    let is_loading = matches!(phase, WorkflowPhase::Loading);

    rsx! {
        div { class: "page",
            div { class: "page-columns",
                div { class: "settings-panel",
                    h2 { class: "panel-title", "Email Settings" }
                    SelectField {
                        label: "Email Type",
                        value: email_type().as_str().to_string(),
                        options: enum_options::<EmailType>(),
                        onchange: move |value: String| {
                            if let Ok(parsed) = value.parse() {
                                email_type.set(parsed);
                            }
                        },
                    }
                    SelectField {
                        label: "Tone",
                        value: tone().as_str().to_string(),
                        options: enum_options::<EmailTone>(),
                        onchange: move |value: String| {
                            if let Ok(parsed) = value.parse() {
                                tone.set(parsed);
                            }
                        },
                    }
                    TextField {
                        label: "Subject Line",
                        value: subject(),
                        placeholder: "Enter email subject",
                        oninput: move |value| subject.set(value),
                    }
                    TextAreaField {
                        label: "Content Description",
                        value: description(),
                        placeholder: "What would you like to communicate?",
                        rows: 4,
                        oninput: move |value| description.set(value),
                    }
                    div { class: "action-row",
                        button {
                            class: "btn btn-primary flex-1",
                            disabled: is_loading,
                            onclick: generate,
                            if is_loading { "Generating..." } else { "Generate" }
                        }
                        button {
                            class: "btn btn-secondary",
                            onclick: reset,
                            "Reset"
                        }
                    }
                }
                div { class: "output-panel",
                    h2 { class: "panel-title", "Generated Email" }
                    div { class: "output-body",
                        {match &phase {
                            WorkflowPhase::Loading => rsx! {
                                div { class: "output-spinner", div { class: "spinner" } }
                            },
                            WorkflowPhase::Success(GenerationResult::Email { subject, body }) => rsx! {
                                div { class: "result-card",
                                    div { class: "result-card-header",
                                        h3 { class: "result-label", "Subject" }
                                        CopyButton { field: "subject", text: subject.clone() }
                                    }
                                    p { class: "result-text", "{subject}" }
                                }
                                div { class: "result-card",
                                    div { class: "result-card-header",
                                        h3 { class: "result-label", "Body" }
                                        CopyButton { field: "body", text: body.clone() }
                                    }
                                    pre { class: "output-text", "{body}" }
                                }
                            },
                            WorkflowPhase::Success(_) => rsx! {},
                            WorkflowPhase::Error(message) => rsx! {
                                div { class: "output-error", "{message}" }
                            },
                            WorkflowPhase::Idle => rsx! {
                                div { class: "output-placeholder",
                                    "Your generated email will appear here"
                                }
                            },
                        }}
                    }
                }
            }
        }
    }
}
