//! Static suggestions used when the remote provider is unavailable

use crate::schema::AiSuggestion;

fn suggestion(alternative: &str, explanation: &str, code_example: &str, browser_support: &str) -> AiSuggestion {
    AiSuggestion {
        alternative: alternative.to_string(),
        explanation: explanation.to_string(),
        code_example: code_example.to_string(),
        browser_support: browser_support.to_string(),
    }
}

/// Curated suggestion for `api`, if there is one
pub fn known_suggestion(api: &str) -> Option<AiSuggestion> {
    let s = match api {
        "document.execCommand" => suggestion(
            "Clipboard API",
            "document.execCommand is deprecated and unreliable across browsers. The Clipboard API provides a modern, secure, and promise-based alternative.",
            "// Instead of: document.execCommand('copy')\n// Use:\nawait navigator.clipboard.writeText(textToCopy);\n\n// For reading:\nconst text = await navigator.clipboard.readText();",
            "Supported in Chrome 66+, Firefox 63+, Safari 13.1+",
        ),
        "webkitRequestAnimationFrame" | "mozRequestAnimationFrame" => suggestion(
            "requestAnimationFrame",
            "Vendor-prefixed APIs are no longer needed. The standard requestAnimationFrame is universally supported.",
            "// Instead of: webkitRequestAnimationFrame(callback)\n// Use:\nrequestAnimationFrame(callback);",
            "Universally supported in all modern browsers",
        ),
        "webkitGetUserMedia" | "navigator.webkitGetUserMedia" | "navigator.mozGetUserMedia" => suggestion(
            "navigator.mediaDevices.getUserMedia",
            "Legacy getUserMedia is deprecated. The modern API is promise-based and more secure.",
            "// Instead of: navigator.webkitGetUserMedia(constraints, success, error)\n// Use:\ntry {\n  const stream = await navigator.mediaDevices.getUserMedia(constraints);\n  // Handle stream\n} catch (error) {\n  // Handle error\n}",
            "Supported in all modern browsers with HTTPS requirement",
        ),
        "webkitURL" => suggestion(
            "URL",
            "The vendor-prefixed URL constructor is deprecated. Use the standard URL constructor.",
            "// Instead of: new webkitURL(url, base)\n// Use:\nnew URL(url, base);",
            "Universally supported in modern browsers",
        ),
        "webkitAudioContext" => suggestion(
            "AudioContext",
            "Vendor-prefixed AudioContext is deprecated. Use the standard AudioContext.",
            "// Instead of: new webkitAudioContext()\n// Use:\nnew AudioContext();",
            "Supported in all modern browsers",
        ),
        "showModalDialog" | "window.showModalDialog" => suggestion(
            "<dialog> element",
            "showModalDialog was removed from browsers. The <dialog> element provides native modal dialogs.",
            "// Instead of: showModalDialog(url)\n// Use:\nconst dialog = document.querySelector('dialog');\ndialog.showModal();",
            "Supported in Chrome 37+, Firefox 98+, Safari 15.4+",
        ),
        _ => return None,
    };
    Some(s)
}

/// Suggestion for any API name: curated if known, generic otherwise
pub fn fallback_suggestion(api: &str) -> AiSuggestion {
    known_suggestion(api).unwrap_or_else(|| {
        suggestion(
            "Modern alternative",
            "This API may have compatibility issues or be deprecated. Check MDN Web Docs for modern alternatives.",
            "// Check MDN documentation for modern alternatives and examples",
            "Varies - check browser compatibility tables on MDN",
        )
    })
}
