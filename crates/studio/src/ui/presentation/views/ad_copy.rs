//! Ad copy generator page
//!
//! The result is three independently copyable fields; the shared copied
//! indicator moves between them.

use dioxus::prelude::*;

use copydeck_domain::{AdObjective, AdPlatform, AdTone, GenerationRequest, GenerationResult};

use crate::application::workflow::{Workflow, WorkflowPhase};
use crate::presentation::components::common::{
    enum_options, CopyButton, SelectField, TextAreaField,
};
use crate::presentation::services::use_generation_service;
use crate::presentation::state::use_toast_state;
use crate::use_platform;

#[component]
pub fn AdCopyView() -> Element {
    let service = use_generation_service();
    let app_platform = use_platform();
    let mut toasts = use_toast_state();

    let mut platform = use_signal(|| AdPlatform::Facebook);
    let mut objective = use_signal(|| AdObjective::Awareness);
    let mut tone = use_signal(|| AdTone::Professional);
    let mut product_info = use_signal(String::new);
    let mut target_audience = use_signal(String::new);
    let mut workflow = use_signal(Workflow::new);

    let generate = move |_| {
        let request = GenerationRequest::AdCopy {
            platform: platform(),
            objective: objective(),
            tone: tone(),
            product_info: product_info(),
            target_audience: target_audience(),
        };
        if let Err(err) = request.validate() {
            toasts.error(err.to_string());
            return;
        }
        let Some(ticket) = workflow.write().begin() else {
            return;
        };

        let service = service.clone();
        let platform = app_platform.clone();
        spawn(async move {
            match service.generate(&request).await {
                Ok(result) => {
                    if workflow.write().complete(ticket, result) {
                        toasts.success("Ad copy generated successfully!");
                    }
                }
                Err(err) => {
                    platform.log_error(&format!("Ad copy generation failed: {}", err));
                    let message = "Failed to generate ad copy. Please try again.";
                    if workflow.write().fail(ticket, message) {
                        toasts.error(message);
                    }
                }
            }
        });
    };

    let reset = move |_| {
        product_info.set(String::new());
        target_audience.set(String::new());
        workflow.write().reset();
    };

    let phase = workflow.read().phase().clone();
    let is_loading = matches!(phase, WorkflowPhase::Loading);

    rsx! {
        div { class: "page",
            div { class: "page-columns",
                div { class: "settings-panel",
                    h2 { class: "panel-title", "Ad Settings" }
                    SelectField {
                        label: "Ad Platform",
                        value: platform().as_str().to_string(),
                        options: enum_options::<AdPlatform>(),
                        onchange: move |value: String| {
                            if let Ok(parsed) = value.parse() {
                                platform.set(parsed);
                            }
                        },
                    }
                    SelectField {
                        label: "Campaign Objective",
                        value: objective().as_str().to_string(),
                        options: enum_options::<AdObjective>(),
                        onchange: move |value: String| {
                            if let Ok(parsed) = value.parse() {
                                objective.set(parsed);
                            }
                        },
                    }
                    SelectField {
                        label: "Tone",
                        value: tone().as_str().to_string(),
                        options: enum_options::<AdTone>(),
                        onchange: move |value: String| {
                            if let Ok(parsed) = value.parse() {
                                tone.set(parsed);
                            }
                        },
                    }
                    TextAreaField {
                        label: "Product/Service Information",
                        value: product_info(),
                        placeholder: "Describe your product or service...",
                        rows: 3,
                        oninput: move |value| product_info.set(value),
                    }
                    TextAreaField {
                        label: "Target Audience",
                        value: target_audience(),
                        placeholder: "Describe your target audience...",
                        rows: 3,
                        oninput: move |value| target_audience.set(value),
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
                    h2 { class: "panel-title", "Generated Ad Copy" }
                    div { class: "output-body",
                        {match &phase {
                            WorkflowPhase::Loading => rsx! {
                                div { class: "output-spinner", div { class: "spinner" } }
                            },
                            WorkflowPhase::Success(GenerationResult::AdCopy {
                                headline,
                                description,
                                call_to_action,
                            }) => rsx! {
                                div { class: "result-card",
                                    div { class: "result-card-header",
                                        h3 { class: "result-label", "Headline" }
                                        CopyButton { field: "headline", text: headline.clone() }
                                    }
                                    p { class: "result-text", "{headline}" }
                                }
                                div { class: "result-card",
                                    div { class: "result-card-header",
                                        h3 { class: "result-label", "Description" }
                                        CopyButton { field: "description", text: description.clone() }
                                    }
                                    p { class: "result-text", "{description}" }
                                }
                                div { class: "result-card",
                                    div { class: "result-card-header",
                                        h3 { class: "result-label", "Call to Action" }
                                        CopyButton { field: "cta", text: call_to_action.clone() }
                                    }
                                    p { class: "result-text", "{call_to_action}" }
                                }
                            },
                            WorkflowPhase::Success(_) => rsx! {},
                            WorkflowPhase::Error(message) => rsx! {
                                div { class: "output-error", "{message}" }
                            },
                            WorkflowPhase::Idle => rsx! {
                                div { class: "output-placeholder",
                                    "Your generated ad copy will appear here"
                                }
                            },
                        }}
                    }
                }
            }
        }
    }
}
