use yew::prelude::*;

use crate::theme::Theme;
use crate::ThemeHandle;

/// Sticky glass header: logo, anchor navigation, theme toggle and the
/// mobile hamburger menu. The menu starts closed; any in-menu action
/// (navigation, theme toggle, CTA) closes it again.
#[function_component(Header)]
pub fn header() -> Html {
    let theme = use_context::<ThemeHandle>().unwrap();
    let menu_open = use_state(|| false);
    let classes = theme.classes();

    let logo_src = match *theme {
        Theme::Dark => "/rhytm-logo-dark.png",
        Theme::Light => "/rhytm-logo-light.png",
    };

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            theme.set((*theme).flipped());
        })
    };
    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(!*menu_open);
        })
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };
    // The in-menu toggle also collapses the menu, like every other in-menu
    // action.
    let toggle_theme_and_close = {
        let theme = theme.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            theme.set((*theme).flipped());
            menu_open.set(false);
        })
    };

    let nav_links = [
        ("#how", "How it works"),
        ("#features", "Features"),
        ("#waitlist", "Waiting list"),
    ];

    html! {
        <>
        <header class={classes!("site-header", classes.glass, classes.border)}>
            <div class={classes!("header-grid-overlay", classes.grid)}></div>
            <div class="header-glow"></div>
            <div class="header-inner">
                <div class="logo-wrap">
                    <img src={logo_src} alt="RHYTM Logo" class="nav-logo" />
                </div>

                <button
                    class="hamburger"
                    onclick={toggle_menu}
                    aria-label="Toggle mobile menu"
                >
                    <div class={classes!("menu-bar", (*menu_open).then_some("bar-top-open"))}></div>
                    <div class={classes!("menu-bar", (*menu_open).then_some("bar-mid-open"))}></div>
                    <div class={classes!("menu-bar", (*menu_open).then_some("bar-bottom-open"))}></div>
                </button>

                <nav class="desktop-nav">
                    {
                        for nav_links.iter().map(|(href, label)| html! {
                            <a href={*href} class="nav-link">
                                {*label}
                                <i class="fas fa-arrow-up-right-from-square"></i>
                            </a>
                        })
                    }
                </nav>

                <div class="desktop-controls">
                    <button class={classes!("theme-toggle", classes.control)} onclick={toggle_theme.clone()}>
                        {theme.toggle_label()}
                    </button>
                    <a href="#waitlist" class={classes!("join-beta", classes.cta)}>
                        {"Join Beta"}
                    </a>
                </div>
            </div>
        </header>
        {
            if *menu_open {
                html! {
                    <div class={classes!("mobile-menu", classes.glass, classes.border)}>
                        <div class="mobile-menu-inner">
                            {
                                for nav_links.iter().map(|(href, label)| html! {
                                    <a href={*href} class="mobile-link" onclick={close_menu.clone()}>
                                        {*label}
                                    </a>
                                })
                            }
                            <div class="mobile-extras">
                                <button
                                    class={classes!("theme-toggle", "mobile-theme-toggle", classes.control)}
                                    onclick={toggle_theme_and_close}
                                >
                                    {theme.toggle_label()}
                                </button>
                                <a
                                    href="#waitlist"
                                    class={classes!("join-beta", "mobile-join-beta", classes.cta)}
                                    onclick={close_menu.clone()}
                                >
                                    {"Join Beta"}
                                </a>
                            </div>
                        </div>
                    </div>
                }
            } else {
                html! {}
            }
        }
        <style>
            {r#"
    .site-header {
        position: sticky;
        top: 0;
        z-index: 50;
        border-bottom: 1px solid transparent;
        backdrop-filter: blur(12px);
        transition: background 0.3s ease, border-color 0.3s ease;
    }
    .header-grid-overlay {
        position: absolute;
        inset: 0;
        background-size: 20px 20px;
        opacity: 0.4;
        pointer-events: none;
    }
    .header-glow {
        position: absolute;
        inset: 0;
        background:
            radial-gradient(circle at 20% 10%, rgba(157, 78, 221, 0.25), transparent 35%),
            radial-gradient(circle at 80% 20%, rgba(16, 185, 129, 0.25), transparent 35%),
            radial-gradient(circle at 60% 80%, rgba(56, 189, 248, 0.2), transparent 35%);
        filter: blur(48px);
        opacity: 0.7;
        pointer-events: none;
    }
    .header-inner {
        position: relative;
        max-width: 80rem;
        margin: 0 auto;
        padding: 0.5rem 1.5rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo {
        height: 5.5rem;
        width: auto;
        display: block;
    }
    .desktop-nav {
        display: flex;
        align-items: center;
        gap: 1.5rem;
    }
    .nav-link {
        font-weight: 700;
        color: inherit;
        text-decoration: none;
        transition: color 0.3s ease;
    }
    .nav-link:hover {
        color: #34d399;
    }
    .nav-link i {
        font-size: 0.75rem;
        margin-left: 0.35rem;
    }
    .desktop-controls {
        display: flex;
        align-items: center;
        gap: 1rem;
    }
    .theme-toggle {
        padding: 0.375rem 0.75rem;
        border: none;
        border-radius: 8px;
        font-size: 0.875rem;
        color: inherit;
        cursor: pointer;
        transition: background 0.2s ease;
    }
    .join-beta {
        padding: 0.375rem 0.75rem;
        border: 1px solid transparent;
        border-radius: 8px;
        text-decoration: none;
        transition: all 0.2s ease;
    }
    .join-beta:hover {
        transform: translateY(-2px);
    }
    .hamburger {
        display: none;
        flex-direction: column;
        gap: 0.375rem;
        padding: 0.5rem;
        border: none;
        border-radius: 8px;
        background: transparent;
        color: inherit;
        cursor: pointer;
    }
    .hamburger:hover {
        background: rgba(255, 255, 255, 0.1);
    }
    .menu-bar {
        width: 1.5rem;
        height: 2px;
        background: currentColor;
        transition: all 0.3s ease;
    }
    .bar-top-open {
        transform: rotate(45deg) translateY(0.55rem);
    }
    .bar-mid-open {
        opacity: 0;
    }
    .bar-bottom-open {
        transform: rotate(-45deg) translateY(-0.55rem);
    }
    .mobile-menu {
        position: fixed;
        top: 7rem;
        left: 0;
        right: 0;
        z-index: 40;
        border-bottom: 1px solid transparent;
        backdrop-filter: blur(12px);
        transition: all 0.3s ease;
    }
    .mobile-menu-inner {
        max-width: 80rem;
        margin: 0 auto;
        padding: 1.5rem;
    }
    .mobile-link {
        display: block;
        font-weight: 700;
        padding: 0.5rem 0;
        color: inherit;
        text-decoration: none;
        transition: color 0.3s ease;
    }
    .mobile-link:hover {
        color: #34d399;
    }
    .mobile-extras {
        margin-top: 1rem;
        padding-top: 1rem;
        border-top: 1px solid rgba(128, 128, 128, 0.2);
    }
    .mobile-theme-toggle {
        display: block;
        width: 100%;
        text-align: left;
    }
    .mobile-join-beta {
        display: block;
        margin-top: 0.75rem;
        text-align: center;
    }
    @media (max-width: 768px) {
        .desktop-nav,
        .desktop-controls {
            display: none;
        }
        .hamburger {
            display: flex;
        }
    }
    @media (min-width: 769px) {
        .mobile-menu {
            display: none;
        }
    }
            "#}
        </style>
        </>
    }
}
