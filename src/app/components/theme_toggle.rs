use dioxus::prelude::*;

use crate::shared::hooks::{apply_theme, save_theme, use_theme};

/// Light/dark switch. The choice goes on `<body>` and into localStorage.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();

    let toggle_theme = move |_| {
        let next = theme().toggle();
        theme.set(next);
        apply_theme(next);
        save_theme(next);
    };

    rsx! {
        label { class: "switch",
            input {
                r#type: "checkbox",
                id: "themeToggle",
                checked: !theme().is_dark(),
                onchange: toggle_theme,
            }
        }
        span { id: "themeLabel", class: "switch-label", {theme().label()} }
    }
}
