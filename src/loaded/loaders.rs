use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

/// Settings of the built-in loading and error visuals.
///
/// The defaults are a plain `loading...` heading and a loud magenta-on-green
/// `an error has occurred...` heading. The error one is meant to stand out during
/// development, it is not production UI.
///
/// # Examples
///
/// ```rust
/// use loaded_view::prelude::*;
///
/// let fallbacks: Fallbacks = serde_json::from_str(r#"{ "loading_text": "wait" }"#).unwrap();
/// assert_eq!(fallbacks.loading_text, "wait");
/// assert_eq!(fallbacks.error_background, "#ff00ff");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fallbacks {
    pub loading_text: String,
    pub error_text: String,
    pub error_background: String,
    pub error_color: String,
}

impl Default for Fallbacks {
    fn default() -> Self {
        Self {
            loading_text: "loading...".to_owned(),
            error_text: "an error has occurred...".to_owned(),
            error_background: "#ff00ff".to_owned(),
            error_color: "#00ff00".to_owned(),
        }
    }
}

/// A view type able to produce the built-in loading and error visuals.
///
/// Implemented for Dioxus [`Element`]s and for plain HTML markup in a [`String`].
pub trait FallbackView: Sized {
    fn loading(fallbacks: &Fallbacks) -> Self;
    fn error(fallbacks: &Fallbacks) -> Self;
}

impl FallbackView for Element {
    fn loading(fallbacks: &Fallbacks) -> Self {
        let text = &fallbacks.loading_text;
        rsx! {
            h1 { "{text}" }
        }
    }

    fn error(fallbacks: &Fallbacks) -> Self {
        let Fallbacks {
            error_text,
            error_background,
            error_color,
            ..
        } = fallbacks;
        rsx! {
            h1 { background_color: "{error_background}", color: "{error_color}", "{error_text}" }
        }
    }
}

impl FallbackView for String {
    fn loading(fallbacks: &Fallbacks) -> Self {
        format!("<h1>{}</h1>", escape(&fallbacks.loading_text))
    }

    fn error(fallbacks: &Fallbacks) -> Self {
        format!(
            r#"<h1 style="background-color: {}; color: {}">{}</h1>"#,
            escape(&fallbacks.error_background),
            escape(&fallbacks.error_color),
            escape(&fallbacks.error_text)
        )
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}
