//! Social media content generator page
//!
//! Owns one [`Workflow`]. The generate handler validates locally, takes
//! a ticket, and completes or fails the workflow when the backend
//! responds; a ticket that went stale (reset while loading) applies
//! nothing.

use dioxus::prelude::*;

use copydeck_domain::{GenerationRequest, GenerationResult, SocialContentType, SocialPlatform, SocialTone};

use crate::application::workflow::{Workflow, WorkflowPhase};
use crate::presentation::components::common::{
    enum_options, CopyButton, SelectField, TextAreaField,
};
use crate::presentation::services::use_generation_service;
use crate::presentation::state::use_toast_state;
use crate::use_platform;

#[component]
pub fn SocialMediaView() -> Element {
    let service = use_generation_service();
    let app_platform = use_platform();
    let mut toasts = use_toast_state();

    let mut platform = use_signal(|| SocialPlatform::Facebook);
    let mut content_type = use_signal(|| SocialContentType::Post);
    let mut tone = use_signal(|| SocialTone::Professional);
    let mut topic = use_signal(String::new);
    let mut workflow = use_signal(Workflow::new);

    let generate = move |_| {
        let request = GenerationRequest::SocialMedia {
            platform: platform(),
            content_type: content_type(),
            tone: tone(),
            topic: topic(),
        };
        if let Err(err) = request.validate() {
            toasts.error(err.to_string());
            return;
        }
        // None means a request is already in flight
        let Some(ticket) = workflow.write().begin() else {
            return;
        };

        let service = service.clone();
        let platform = app_platform.clone();
        spawn(async move {
            match service.generate(&request).await {
                Ok(result) => {
                    if workflow.write().complete(ticket, result) {
                        toasts.success("Content generated successfully!");
                    }
                }
                Err(err) => {
                    platform.log_error(&format!("Social media generation failed: {}", err));
                    let message = "Failed to generate content. Please try again.";
                    if workflow.write().fail(ticket, message) {
                        toasts.error(message);
                    }
                }
            }
        });
    };

    let reset = move |_| {
        topic.set(String::new());
        workflow.write().reset();
    };

    let phase = workflow.read().phase().clone();
    let is_loading = matches!(phase, WorkflowPhase::Loading);

    rsx! {
        div { class: "page",
            div { class: "page-columns",
                div { class: "settings-panel",
                    h2 { class: "panel-title", "Content Settings" }
                    SelectField {
                        label: "Platform",
                        value: platform().as_str().to_string(),
                        options: enum_options::<SocialPlatform>(),
                        onchange: move |value: String| {
                            if let Ok(parsed) = value.parse() {
                                platform.set(parsed);
                            }
                        },
                    }
                    SelectField {
                        label: "Content Type",
                        value: content_type().as_str().to_string(),
                        options: enum_options::<SocialContentType>(),
                        onchange: move |value: String| {
                            if let Ok(parsed) = value.parse() {
                                content_type.set(parsed);
                            }
                        },
                    }
                    SelectField {
                        label: "Tone",
                        value: tone().as_str().to_string(),
                        options: enum_options::<SocialTone>(),
                        onchange: move |value: String| {
                            if let Ok(parsed) = value.parse() {
                                tone.set(parsed);
                            }
                        },
                    }
                    TextAreaField {
                        label: "Topic or Description",
                        value: topic(),
                        placeholder: "What would you like to post about?",
                        rows: 4,
                        oninput: move |value| topic.set(value),
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
                    div { class: "output-header",
                        h2 { class: "panel-title", "Generated Content" }
                        if let WorkflowPhase::Success(GenerationResult::Social { content }) = &phase {
                            CopyButton { field: "content", text: content.clone() }
                        }
                    }
                    div { class: "output-body",
                        {match &phase {
                            WorkflowPhase::Loading => rsx! {
                                div { class: "output-spinner", div { class: "spinner" } }
                            },
                            WorkflowPhase::Success(GenerationResult::Social { content }) => rsx! {
                                pre { class: "output-text", "{content}" }
                            },
                            WorkflowPhase::Success(_) => rsx! {},
                            WorkflowPhase::Error(message) => rsx! {
                                div { class: "output-error", "{message}" }
                            },
                            WorkflowPhase::Idle => rsx! {
                                div { class: "output-placeholder",
                                    "Your generated content will appear here"
                                }
                            },
                        }}
                    }
                }
            }
        }
    }
}
