//! Hand-curated API descriptors
//!
//! These cover vendor-prefixed and long-deprecated APIs that the bulk dataset
//! either omits or lists without deprecation detail. They are applied after
//! the bulk load and always win.

use super::{ApiStatus, CompatibilityDescriptor};

/// All curated descriptors
pub fn curated_descriptors() -> Vec<CompatibilityDescriptor> {
    let mut descriptors = Vec::new();

    descriptors.extend(clipboard());
    descriptors.extend(animation());
    descriptors.extend(media());
    descriptors.extend(constructors());
    descriptors.extend(dialogs());

    descriptors
}

fn deprecated(
    api: &str,
    suggestion: &str,
    browser_support: &str,
    description: &str,
) -> CompatibilityDescriptor {
    CompatibilityDescriptor {
        api_name: api.to_string(),
        status: ApiStatus::Deprecated,
        description: description.to_string(),
        suggestion: suggestion.to_string(),
        browser_support: browser_support.to_string(),
        feature_id: None,
    }
}

fn clipboard() -> Vec<CompatibilityDescriptor> {
    vec![deprecated(
        "document.execCommand",
        "Use the Clipboard API (navigator.clipboard)",
        "Use navigator.clipboard instead",
        "Deprecated and unreliable API for clipboard operations",
    )]
}

fn animation() -> Vec<CompatibilityDescriptor> {
    ["webkitRequestAnimationFrame", "mozRequestAnimationFrame"]
        .iter()
        .map(|api| {
            deprecated(
                api,
                "Use requestAnimationFrame",
                "Use standard requestAnimationFrame",
                "Vendor-prefixed API no longer needed",
            )
        })
        .collect()
}

fn media() -> Vec<CompatibilityDescriptor> {
    [
        "webkitGetUserMedia",
        "navigator.webkitGetUserMedia",
        "navigator.mozGetUserMedia",
    ]
    .iter()
    .map(|api| {
        deprecated(
            api,
            "Use navigator.mediaDevices.getUserMedia",
            "Use modern promise-based getUserMedia",
            "Legacy getUserMedia API",
        )
    })
    .collect()
}

fn constructors() -> Vec<CompatibilityDescriptor> {
    vec![
        deprecated(
            "webkitURL",
            "Use URL",
            "Use standard URL constructor",
            "Vendor-prefixed URL constructor",
        ),
        deprecated(
            "webkitAudioContext",
            "Use AudioContext",
            "Use standard AudioContext",
            "Vendor-prefixed AudioContext",
        ),
    ]
}

fn dialogs() -> Vec<CompatibilityDescriptor> {
    ["showModalDialog", "window.showModalDialog"]
        .iter()
        .map(|api| {
            deprecated(
                api,
                "Use the <dialog> element and HTMLDialogElement.showModal()",
                "Removed from modern browsers",
                "Legacy modal dialog API",
            )
        })
        .collect()
}
