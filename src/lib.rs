pub mod components;
pub mod config;
pub mod effects;
pub mod pages;
pub mod theme;

use gloo_console::log;
use yew::prelude::*;

use crate::pages::landing::Landing;
use crate::theme::Theme;

/// Shared theme handle provided to the whole render tree. There is exactly
/// one of these, owned by [`App`]; every component reads the same value.
pub type ThemeHandle = UseStateHandle<Theme>;

#[function_component(App)]
pub fn app() -> Html {
    let theme = use_state(Theme::default);

    // Mirror the theme onto <html data-theme="..."> whenever it changes,
    // so the stylesheet's [data-theme] selectors track the toggle.
    use_effect_with_deps(
        move |theme: &Theme| {
            theme::sync_document_theme(*theme);
            || ()
        },
        *theme,
    );

    use_effect_with_deps(
        move |_| {
            config::apply_page_metadata();
            log!("RHYTM landing initialized");
            || ()
        },
        (),
    );

    html! {
        <ContextProvider<ThemeHandle> context={theme}>
            <Landing />
        </ContextProvider<ThemeHandle>>
    }
}
