//! Theme Switch Component
//!
//! Toggles the `dark` class on the document element.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Icon for the button: shows the theme a click switches to
    fn icon(self) -> &'static str {
        match self {
            Theme::Light => "☾",
            Theme::Dark => "☀",
        }
    }
}

fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let _ = root.class_list().toggle_with_force("dark", theme.is_dark());
}

#[component]
pub fn ThemeSwitch(#[prop(optional)] dark_as_default: bool) -> impl IntoView {
    let initial = if dark_as_default { Theme::Dark } else { Theme::Light };
    let (theme, set_theme) = signal(initial);

    Effect::new(move |_| apply_theme(theme.get()));

    view! {
        <button
            id="theme-toggle"
            type="button"
            class="theme-toggle"
            on:click=move |_| set_theme.update(|t| *t = t.toggled())
        >
            {move || theme.get().icon()}
        </button>
    }
}
