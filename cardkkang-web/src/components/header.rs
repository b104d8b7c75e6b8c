use cardkkang_game::Theme;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_click = {
        let cb = p.on_toggle_theme.clone();
        Callback::from(move |_| cb.emit(()))
    };
    // The label names the theme the button switches to
    let (icon, label) = if p.theme.is_dark() {
        ("☀", "Switch to light theme")
    } else {
        ("☾", "Switch to dark theme")
    };
    html! {
        <header role="banner" class="header-content">
            <h1 class="text-2xl font-bold">{ "카드깡" }</h1>
            <button
                id="themeToggle"
                type="button"
                aria-label={label}
                aria-pressed={p.theme.is_dark().to_string()}
                onclick={on_click}
            >
                { icon }
            </button>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(theme: Theme) -> String {
        let props = Props {
            theme,
            on_toggle_theme: Callback::noop(),
        };
        block_on(
            LocalServerRenderer::<Header>::with_props(props)
                .hydratable(false)
                .render(),
        )
    }

    #[test]
    fn toggle_label_tracks_current_theme() {
        let light = render(Theme::Light);
        assert!(light.contains("themeToggle"));
        assert!(light.contains("Switch to dark theme"));
        assert!(light.contains(r#"aria-pressed="false""#));

        let dark = render(Theme::Dark);
        assert!(dark.contains("Switch to light theme"));
        assert!(dark.contains(r#"aria-pressed="true""#));
    }
}
