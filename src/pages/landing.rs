use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::components::header::Header;
use crate::components::waitlist::WaitlistForm;
use crate::effects::{
    grid_drift_style, hero_art_style, hero_glow_style, hero_grid_style, hero_section_style,
    hue_offset, hue_wash_style, pain_section_style, pointer_offset, CrackleAction, CrackleEffect,
    CrackleIdGen, CrackleList, ExpiryTimers, HueOffset, ParallaxOffset, CRACKLE_LIFETIME_MS,
};
use crate::ThemeHandle;

#[function_component(Landing)]
pub fn landing() -> Html {
    let theme = use_context::<ThemeHandle>().unwrap();
    let offset = use_state(ParallaxOffset::default);
    let hue = use_state(HueOffset::default);
    let scroll_y = use_state(|| 0.0_f64);
    let crackles = use_reducer(CrackleList::default);
    let crackle_ids = use_mut_ref(CrackleIdGen::new);
    // Dropping a Timeout cancels it, and the registry never hands a strong
    // handle to its own timers, so unmounting the page drops the registry
    // and with it every outstanding callback.
    let crackle_timers = use_memo(|_| ExpiryTimers::<Timeout>::new(), ());
    let classes = theme.classes();

    // Track pointer position and scroll distance over the whole viewport.
    {
        let offset = offset.clone();
        let hue = hue.clone();
        let scroll_y = scroll_y.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let mouse_callback = Closure::<dyn Fn(MouseEvent)>::new({
                        let offset = offset.clone();
                        let hue = hue.clone();
                        move |e: MouseEvent| {
                            if let Some(win) = web_sys::window() {
                                let vw = win
                                    .inner_width()
                                    .ok()
                                    .and_then(|v| v.as_f64())
                                    .unwrap_or(1.0);
                                let vh = win
                                    .inner_height()
                                    .ok()
                                    .and_then(|v| v.as_f64())
                                    .unwrap_or(1.0);
                                let x = e.client_x() as f64;
                                let y = e.client_y() as f64;
                                offset.set(pointer_offset(x, y, vw, vh));
                                hue.set(hue_offset(x, y, vw, vh));
                            }
                        }
                    });
                    let scroll_callback = Closure::<dyn Fn()>::new({
                        let scroll_y = scroll_y.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(y) = win.scroll_y() {
                                    scroll_y.set(y);
                                }
                            }
                        }
                    });
                    window
                        .add_event_listener_with_callback(
                            "mousemove",
                            mouse_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    window
                        .add_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            win.remove_event_listener_with_callback(
                                "mousemove",
                                mouse_callback.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                            win.remove_event_listener_with_callback(
                                "scroll",
                                scroll_callback.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    // Clicking the hero spawns a crackle ring at the click position,
    // expired by its own timer after exactly CRACKLE_LIFETIME_MS.
    let on_hero_click = {
        let crackles = crackles.clone();
        let crackle_ids = crackle_ids.clone();
        let crackle_timers = crackle_timers.clone();
        Callback::from(move |e: MouseEvent| {
            let target: Element = match e.current_target() {
                Some(target) => target.unchecked_into(),
                None => return,
            };
            let rect = target.get_bounding_client_rect();
            let crackle = CrackleEffect {
                id: crackle_ids.borrow_mut().next(js_sys::Date::now() as u64),
                x: e.client_x() as f64 - rect.left(),
                y: e.client_y() as f64 - rect.top(),
            };
            crackles.dispatch(CrackleAction::Spawn(crackle));

            let on_expire = {
                let crackles = crackles.clone();
                crackle_timers.on_expire(crackle.id, move |id| {
                    crackles.dispatch(CrackleAction::Expire(id));
                })
            };
            crackle_timers.insert(crackle.id, Timeout::new(CRACKLE_LIFETIME_MS, on_expire));
        })
    };

    let hero_bullets = [
        "• Cut through thousands of tracks with AI that understands your play style.",
        "• Get recommendations that match your BPM, key, genre and vibe.",
        "• Auto-sync to Beatport DJ — exporting is just the fallback.",
    ];
    let hero_notes: [(&str, &str, &str, &str); 8] = [
        ("♪", "#34d399", "top: 2rem; right: 2rem;", "0s"),
        ("♫", "#60a5fa", "top: 5rem; left: 2rem;", "0.5s"),
        ("♪", "#c084fc", "top: 1rem; left: 50%;", "1s"),
        ("♫", "#22d3ee", "top: 50%; left: -1rem;", "1.5s"),
        ("♪", "#facc15", "top: 50%; right: -1.5rem;", "2s"),
        ("♫", "#f472b6", "bottom: 3rem; left: 1rem;", "2.5s"),
        ("♪", "#fb7185", "bottom: 2rem; right: 3rem;", "3s"),
        ("♫", "#818cf8", "bottom: 4rem; left: 50%;", "3.5s"),
    ];
    let pain_points = [
        ("fas fa-clock", "Hours lost scrolling and sampling."),
        ("fas fa-magnifying-glass", "Good music buried under noise."),
        (
            "fas fa-compass",
            "Hard to explore new directions that still fit your personality.",
        ),
    ];
    let stat_tiles = [
        ("5–10h", "Time saved / wk"),
        ("−80%", "Irrelevant tracks"),
        ("+3×", "Fresh finds"),
        ("Faster", "Set readiness"),
    ];
    let steps = [
        (
            "1",
            "Connect",
            "Secure OAuth to Beatport. Sync your library & playlists.",
            "fas fa-link",
        ),
        (
            "2",
            "Tell your vibe",
            "Genres, BPM range, keys, artists you like — or just type it in natural language.",
            "fas fa-music",
        ),
        (
            "3",
            "Get the good stuff",
            "Curated tracks matched to your style. Add to Collections and auto-sync to Beatport DJ.",
            "fas fa-wand-magic-sparkles",
        ),
    ];
    let features = [
        (
            "AI Recommendations",
            "Learns your style from likes, skips, collections and vibe prompts.",
        ),
        (
            "Natural Language Search",
            "Ask for 'peak-time melodic techno 126–128 BPM, 8A' and get spot-on results.",
        ),
        (
            "Auto Sync to Beatport DJ",
            "Primary workflow: one click, your collection becomes a Beatport DJ playlist.",
        ),
        (
            "Compact Discover Table",
            "# · ▶ · Title · Artists · Genre · BPM · Key · Actions. Sticky top menus & filters.",
        ),
        (
            "Offline & Queue",
            "Work on the go. Changes sync when you're back online.",
        ),
        (
            "Export Fallbacks",
            "CSV, M3U, JSON when you need manual workflows.",
        ),
    ];
    let testimonials = [
        (
            "I save hours every week and still push my sound in the direction I want.",
            "Resident DJ",
            "/dj-portrait-1.jpg",
        ),
        (
            "It finally surfaces tracks that actually fit my style, not just what's trending.",
            "Aspiring DJ",
            "/dj-portrait-2.jpg",
        ),
        (
            "Consistent quality selections, faster — this shortens prep for every set.",
            "Newcomer DJ",
            "/dj-portrait-3.jpg",
        ),
    ];
    let benefits = [
        (
            "fas fa-circle-check",
            "Early Access",
            "Be among the first 500 to try RHYTM before public launch",
        ),
        (
            "fas fa-dollar-sign",
            "50% Discount",
            "Lifetime discount on your subscription when we launch",
        ),
        (
            "fas fa-sliders",
            "Shape the Product",
            "Your feedback directly influences our development roadmap",
        ),
    ];
    let footer_links = [
        ("About", "#"),
        ("Privacy", "/privacy"),
        ("Terms", "/terms"),
    ];

    html! {
        <div class={classes!("landing-root", classes.page)}>
            <head>
                <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css" integrity="sha512-SnH5WK+bZxgPHs44uWIX+LLJAJ9/2PkPKZ5QiAj6Ta86w+fsb2TkcmfRyVX3pBnMFcV7oQPJkl9QevSCWr3W6A==" crossorigin="anonymous" referrerpolicy="no-referrer" />
            </head>

            // Page-wide background layers, behind all content.
            <div class="global-fx">
                <div class="fx-clip">
                    <div class="fx-layer fx-slow" style={hue_wash_style(*offset, *hue, *scroll_y)}></div>
                </div>
                <div class="fx-clip">
                    <div
                        class={classes!("fx-layer", "fx-grid", classes.grid_soft)}
                        style={grid_drift_style(*offset, *scroll_y)}
                    ></div>
                </div>
            </div>

            <Header />

            <section class="hero" onclick={on_hero_click} style={hero_section_style(*scroll_y)}>
                <div class="fx-clip">
                    <div class="fx-layer fx-hero-glow" style={hero_glow_style(*offset, *hue, *scroll_y)}></div>
                    <div
                        class={classes!("fx-layer", "fx-hero-grid", classes.grid)}
                        style={hero_grid_style(*offset, *scroll_y)}
                    ></div>
                </div>

                {
                    for crackles.items.iter().map(|crackle| html! {
                        <div
                            key={crackle.id.to_string()}
                            class="crackle"
                            style={format!("left: {}px; top: {}px;", crackle.x, crackle.y)}
                        ></div>
                    })
                }

                <div class="hero-inner">
                    <div class="hero-copy">
                        <h1 class="gradient-text">
                            {"Stop wasting time."}<br />
                            {"Find the perfect tracks."}
                        </h1>
                        <p class={classes!("hero-sub", classes.text_muted)}>
                            {"AI-powered curation for aspiring and veteran DJs. Tell us your vibe, and we'll surface tracks that fit your style — fast."}
                        </p>
                        <div class="hero-ctas">
                            <a href="#waitlist" class="primary-cta">{"Join the waiting list"}</a>
                            <a href="#demo" class={classes!("secondary-cta", classes.control)}>{"Watch demo"}</a>
                        </div>
                        <ul class={classes!("hero-bullets", classes.text_muted)}>
                            {
                                for hero_bullets.iter().map(|bullet| html! {
                                    <li>{*bullet}</li>
                                })
                            }
                        </ul>
                    </div>

                    <div class="hero-art">
                        <div style={hero_art_style(*offset)}>
                            <img
                                src="/hero-headphones.png"
                                alt="DJ Headphones with vibrant colors and music elements"
                                class="hero-art-img"
                            />
                        </div>
                        {
                            for hero_notes.iter().map(|(symbol, color, position, delay)| html! {
                                <div
                                    class="note"
                                    style={format!("{} color: {}; animation-delay: {};", position, color, delay)}
                                >
                                    {*symbol}
                                </div>
                            })
                        }
                    </div>
                </div>
            </section>

            <section class="pain-section" style={pain_section_style(*scroll_y)}>
                <div class="pain-inner">
                    <div class="pain-grid">
                        <div class="pain-art pain-art-first">
                            <img
                                src="/dj frustrated looking for vynil tracks.png"
                                alt="DJ frustrated looking for vinyl tracks"
                                loading="lazy"
                            />
                        </div>
                        <div class="pain-text">
                            <h2 class="gradient-text">{"Too many tracks. Too little time."}</h2>
                            <p class={classes.text_muted}>
                                {"Sifting through endless lists wastes creative energy. Most tracks aren't right for your style — or your next set."}
                            </p>
                            <ul class="pain-bullets">
                                {
                                    for pain_points.iter().map(|(icon, text)| html! {
                                        <li class={classes!("pain-bullet", classes.text_muted)}>
                                            <div class="pain-bullet-icon"><i class={*icon}></i></div>
                                            <span>{*text}</span>
                                        </li>
                                    })
                                }
                            </ul>
                        </div>
                        <div class="pain-art">
                            <img
                                src="/dj digging for tracks online.png"
                                alt="DJ digging for tracks online"
                                loading="lazy"
                            />
                        </div>
                        <div class="pain-solution">
                            <h3 class="gradient-text">{"Beatport Curator solves this."}</h3>
                            <p class={classes.text_muted}>
                                {"Our AI learns your DJ profile and vibe instructions, filters out the noise, and puts the right tracks front and center."}
                            </p>
                            <div class="stat-grid">
                                {
                                    for stat_tiles.iter().map(|(value, label)| html! {
                                        <div class={classes!("stat-tile", classes.glass, classes.border)}>
                                            <div class="stat-value gradient-text">{*value}</div>
                                            <div class={classes!("stat-label", classes.text_muted)}>{*label}</div>
                                        </div>
                                    })
                                }
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <section id="how" class={classes!("how-section", classes.glass, classes.border)}>
                <div class="how-inner">
                    <i class={classes!("fas", "fa-record-vinyl", "how-mark", classes.accent)}></i>
                    <h2 class="gradient-text">{"How it Works"}</h2>
                    <p class={classes!("how-sub", classes.text_muted)}>
                        {"Get started in three simple steps and transform your music discovery process"}
                    </p>
                    <div class="steps">
                        {
                            for steps.iter().enumerate().map(|(i, (number, title, description, icon))| html! {
                                <div class="step-row">
                                    <div class="step-number">
                                        <div class="step-badge">{*number}</div>
                                        <div class={classes!("step-icon", classes.glass, classes.border, classes.accent)}>
                                            <i class={*icon}></i>
                                        </div>
                                        { if i < 2 { html! { <div class="step-connector"></div> } } else { html! {} } }
                                    </div>
                                    <div class="step-body">
                                        <h3>{*title}</h3>
                                        <p class={classes.text_muted}>{*description}</p>
                                    </div>
                                </div>
                            })
                        }
                    </div>
                    <div class="how-cta">
                        <a href="#waitlist" class="journey-cta">
                            {"Start Your Journey"}
                            <i class="fas fa-arrow-right"></i>
                        </a>
                        <p class={classes!("how-note", classes.text_muted)}>
                            {"Join thousands of DJs already using RHYTM"}
                        </p>
                    </div>
                </div>
            </section>

            <section id="features" class="features-section">
                <div class="features-inner">
                    <h2 class="gradient-text section-title">{"Everything you need to curate faster"}</h2>
                    <div class="features-grid">
                        {
                            for features.iter().map(|(title, description)| html! {
                                <div class={classes!("feature-card", classes.glass, classes.border)}>
                                    <h3>{*title}</h3>
                                    <p class={classes.text_muted}>{*description}</p>
                                </div>
                            })
                        }
                    </div>
                </div>
            </section>

            <section class={classes!("proof-section", classes.glass, classes.border)}>
                <div class="proof-inner">
                    <h2 class="gradient-text section-title">{"Trusted by DJs Worldwide"}</h2>
                    <p class={classes!("proof-sub", classes.text_muted)}>
                        {"Join thousands of DJs who've transformed their music discovery"}
                    </p>
                    <div class="proof-grid">
                        {
                            for testimonials.iter().map(|(quote, author, image)| html! {
                                <div class={classes!("proof-card", classes.glass, classes.border)}>
                                    <div class="proof-portrait">
                                        <img src={*image} alt={format!("{} Portrait", author)} loading="lazy" />
                                    </div>
                                    <blockquote class={classes.text_muted}>
                                        {format!("\"{}\"", quote)}
                                    </blockquote>
                                    <cite>{format!("— {}", author)}</cite>
                                </div>
                            })
                        }
                    </div>
                </div>
            </section>

            <section id="waitlist" class="waitlist-section">
                <div class="waitlist-inner">
                    <div class="beta-badge">
                        <div class="pulse-dot"></div>
                        <span>{"LIMITED BETA ACCESS"}</span>
                    </div>

                    <h1 class="waitlist-title gradient-text">
                        {"Be the First to Experience"}<br />
                        <span>{"The Future of DJ Curation"}</span>
                    </h1>
                    <p class={classes!("waitlist-sub", classes.text_muted)}>
                        {"Join the exclusive beta and get "}
                        <span class="accent-strong">{"50% off"}</span>
                        {" when we launch. Only "}
                        <span class="pink-strong">{"500 spots"}</span>
                        {" available for early access."}
                    </p>

                    <div class="benefit-grid">
                        {
                            for benefits.iter().map(|(icon, title, description)| html! {
                                <div class={classes!("benefit-card", classes.glass, classes.border)}>
                                    <i class={classes!(*icon, "benefit-icon", classes.accent)}></i>
                                    <h3>{*title}</h3>
                                    <p class={classes.text_muted}>{*description}</p>
                                </div>
                            })
                        }
                    </div>

                    <WaitlistForm />

                    <div class="trust-block">
                        <div class={classes!("trust-line", classes.text_muted)}>
                            <i class={classes!("fas", "fa-lock", classes.accent)}></i>
                            {"Your email is safe with us. No spam, ever."}
                        </div>
                        <div class="trust-dots">
                            <div class={classes!("trust-line", classes.text_muted)}>
                                <div class="dot-emerald"></div>
                                {"2,847 DJs already joined"}
                            </div>
                            <div class={classes!("trust-line", classes.text_muted)}>
                                <div class="dot-pink"></div>
                                {"Only 500 spots left"}
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <footer class={classes!("site-footer", classes.glass, classes.border)}>
                <div class={classes!("header-grid-overlay", classes.grid)}></div>
                <div class="header-glow"></div>
                <div class="footer-inner">
                    <div class={classes!("footer-copyright", classes.text_muted)}>
                        <p>{"© 2025 RHYTM"}</p>
                        <p class="footer-fine">{"A brand owned by Sky Walker Enterprise"}</p>
                    </div>
                    <nav class="footer-nav">
                        {
                            for footer_links.iter().map(|(text, href)| html! {
                                <a href={*href} class={classes!("footer-link", classes.text_muted)}>
                                    {*text}
                                </a>
                            })
                        }
                    </nav>
                </div>
            </footer>

            <style>
                {r#"
    .landing-root {
        position: relative;
        min-height: 100vh;
        transition: background-color 0.3s ease, color 0.3s ease;
    }

    /* Theme-derived style tables. */
    .page-dark { background-color: #0a0a0d; color: #ffffff; }
    .page-light { background-color: #f0e7d8; color: #1a1a17; }
    .muted-dark { color: rgba(255, 255, 255, 0.7); }
    .muted-light { color: rgba(26, 26, 23, 0.7); }
    .glass-dark { background: rgba(10, 10, 13, 0.55); }
    .glass-light { background: rgba(240, 231, 216, 0.55); }
    .border-dark { border-color: rgba(255, 255, 255, 0.1); }
    .border-light { border-color: rgba(26, 26, 23, 0.1); }
    .accent-dark { color: #34d399; }
    .accent-light { color: #059669; }
    .grid-dark {
        background-image:
            linear-gradient(transparent 95%, rgba(255, 255, 255, 0.08) 95%),
            linear-gradient(90deg, transparent 95%, rgba(255, 255, 255, 0.08) 95%);
    }
    .grid-light {
        background-image:
            linear-gradient(transparent 95%, rgba(26, 26, 23, 0.08) 95%),
            linear-gradient(90deg, transparent 95%, rgba(26, 26, 23, 0.08) 95%);
    }
    .grid-soft-dark {
        background-image:
            linear-gradient(transparent 94%, rgba(255, 255, 255, 0.025) 94%),
            linear-gradient(90deg, transparent 94%, rgba(255, 255, 255, 0.025) 94%);
    }
    .grid-soft-light {
        background-image:
            linear-gradient(transparent 94%, rgba(26, 26, 23, 0.025) 94%),
            linear-gradient(90deg, transparent 94%, rgba(26, 26, 23, 0.025) 94%);
    }
    .control-dark { background: rgba(255, 255, 255, 0.1); }
    .control-dark:hover { background: rgba(255, 255, 255, 0.2); }
    .control-light { background: rgba(26, 26, 23, 0.1); }
    .control-light:hover { background: rgba(26, 26, 23, 0.2); }
    .cta-dark {
        background: rgba(16, 185, 129, 0.2);
        border-color: rgba(52, 211, 153, 0.4);
        color: #a7f3d0;
    }
    .cta-light {
        background: rgba(5, 150, 105, 0.2);
        border-color: rgba(5, 150, 105, 0.4);
        color: #065f46;
    }
    .input-dark {
        background: rgba(255, 255, 255, 0.1);
        color: #ffffff;
        border-color: rgba(255, 255, 255, 0.2);
    }
    .input-dark::placeholder { color: rgba(255, 255, 255, 0.5); }
    .input-light {
        background: rgba(26, 26, 23, 0.1);
        color: #1a1a17;
        border-color: rgba(26, 26, 23, 0.2);
    }
    .input-light::placeholder { color: rgba(26, 26, 23, 0.5); }

    .gradient-text {
        background: linear-gradient(45deg, #9D4EDD, #10B981, #56CCF2);
        -webkit-background-clip: text;
        background-clip: text;
        -webkit-text-fill-color: transparent;
    }

    /* Page-wide background layers. */
    .global-fx {
        position: fixed;
        inset: 0;
        pointer-events: none;
        z-index: 0;
    }
    .fx-clip {
        position: absolute;
        inset: 0;
        overflow: hidden;
    }
    .fx-layer {
        position: absolute;
    }
    .fx-slow { transition: transform 0.2s ease-out, background 0.2s ease-out; }
    .fx-grid { transition: transform 0.15s ease-out; }
    .fx-hero-glow { transition: transform 0.1s ease-out, background 0.1s ease-out; }
    .fx-hero-grid { transition: transform 0.075s ease-out; opacity: 0.4; }

    /* Hero. */
    .hero {
        position: relative;
        overflow: hidden;
        display: flex;
        align-items: center;
        min-height: 81vh;
        cursor: pointer;
        transition: all 0.075s ease-out;
        z-index: 10;
    }
    .hero-inner {
        position: relative;
        max-width: 80rem;
        margin: 0 auto;
        padding: 2rem 1.5rem;
        display: grid;
        gap: 1.5rem;
        align-items: center;
    }
    .hero-copy h1 {
        font-size: clamp(1.5rem, 4vw, 2.25rem);
        font-weight: 700;
        line-height: 1.25;
        margin: 0 0 1.5rem;
    }
    .hero-sub {
        line-height: 1.7;
        margin: 0 0 1.5rem;
    }
    .hero-ctas {
        display: flex;
        flex-direction: column;
        gap: 1rem;
        padding-top: 1rem;
    }
    .primary-cta {
        background: #10B981;
        color: #000;
        padding: 0.75rem 1.25rem;
        border-radius: 12px;
        font-weight: 600;
        text-align: center;
        text-decoration: none;
        transition: transform 0.2s ease;
    }
    .primary-cta:hover {
        transform: translateY(-2px);
    }
    .secondary-cta {
        padding: 0.75rem 1.25rem;
        border-radius: 12px;
        font-weight: 600;
        text-align: center;
        text-decoration: none;
        color: inherit;
        transition: all 0.2s ease;
    }
    .secondary-cta:hover {
        transform: translateY(-2px);
    }
    .hero-bullets {
        list-style: none;
        padding: 1.5rem 0 0;
        margin: 0;
        font-size: 0.875rem;
    }
    .hero-bullets li {
        margin-bottom: 0.5rem;
    }
    .hero-art {
        position: relative;
        display: flex;
        justify-content: center;
    }
    .hero-art-img {
        width: 460px;
        height: 460px;
        max-width: 100%;
        object-fit: contain;
        filter: drop-shadow(0 25px 25px rgba(0, 0, 0, 0.2));
        transition: transform 0.3s ease;
    }
    .hero-art-img:hover {
        transform: scale(1.05);
    }
    .note {
        position: absolute;
        font-size: 1.5rem;
        pointer-events: none;
        animation: float-note 3s ease-in-out infinite;
    }
    .crackle {
        position: absolute;
        width: 1rem;
        height: 1rem;
        border: 2px solid #34d399;
        border-radius: 50%;
        pointer-events: none;
        animation: crackle 0.8s ease-out forwards;
    }
    @keyframes crackle {
        from { transform: scale(0.35); opacity: 1; }
        to { transform: scale(3); opacity: 0; }
    }
    @keyframes float-note {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(-25%); }
    }

    /* Pain point. */
    .pain-section {
        position: relative;
        padding: 1rem 0;
        z-index: 20;
        transition: transform 0.075s ease-out;
    }
    .pain-inner {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1.5rem;
    }
    .pain-grid {
        display: grid;
        gap: 1.5rem;
    }
    .pain-text h2,
    .pain-solution h3 {
        font-weight: 700;
        margin: 0 0 1.5rem;
    }
    .pain-text h2 { font-size: clamp(1.875rem, 4vw, 2.25rem); }
    .pain-solution h3 { font-size: 1.5rem; }
    .pain-text p,
    .pain-solution p {
        font-size: 1.125rem;
        line-height: 1.7;
        margin: 0 0 1.5rem;
    }
    .pain-bullets {
        list-style: none;
        padding: 0;
        margin: 0;
    }
    .pain-bullet {
        display: flex;
        align-items: center;
        gap: 1rem;
        margin-bottom: 1rem;
    }
    .pain-bullet-icon {
        width: 2rem;
        height: 2rem;
        border-radius: 12px;
        background: linear-gradient(to right, #10B981, #14B8A6);
        color: #000;
        display: flex;
        align-items: center;
        justify-content: center;
        flex-shrink: 0;
        font-size: 0.8rem;
    }
    .pain-art {
        display: flex;
        justify-content: center;
    }
    .pain-art img {
        width: 100%;
        max-width: 28rem;
        object-fit: contain;
        filter: drop-shadow(0 25px 25px rgba(0, 0, 0, 0.2));
        transition: transform 0.3s ease;
    }
    .pain-art img:hover {
        transform: scale(1.05);
    }
    .stat-grid {
        display: grid;
        grid-template-columns: repeat(2, 1fr);
        gap: 1rem;
    }
    .stat-tile {
        border: 1px solid transparent;
        border-radius: 12px;
        padding: 1rem;
        text-align: center;
    }
    .stat-value {
        font-size: 1.125rem;
        font-weight: 700;
    }
    .stat-label {
        font-size: 0.875rem;
        margin-top: 0.25rem;
    }

    /* How it works. */
    .how-section {
        position: relative;
        overflow: hidden;
        padding: 5rem 0;
        border-top: 1px solid transparent;
        border-bottom: 1px solid transparent;
        z-index: 10;
    }
    .how-inner {
        max-width: 56rem;
        margin: 0 auto;
        padding: 0 1.5rem;
        text-align: center;
    }
    .how-mark {
        font-size: 3rem;
        margin-bottom: 1rem;
    }
    .how-inner h2 {
        font-size: clamp(1.875rem, 4vw, 2.25rem);
        font-weight: 700;
        margin: 0 0 1rem;
    }
    .how-sub {
        font-size: 1.125rem;
        max-width: 42rem;
        margin: 0 auto 4rem;
    }
    .step-row {
        display: flex;
        align-items: flex-start;
        gap: 1.5rem;
        max-width: 42rem;
        margin: 0 auto 3rem;
        text-align: left;
    }
    .step-number {
        position: relative;
        flex-shrink: 0;
    }
    .step-badge {
        width: 4rem;
        height: 4rem;
        border-radius: 16px;
        background: linear-gradient(to right, #10B981, #14B8A6);
        color: #000;
        font-weight: 700;
        font-size: 1.25rem;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .step-icon {
        position: absolute;
        top: -0.5rem;
        right: -0.5rem;
        width: 2rem;
        height: 2rem;
        border: 1px solid transparent;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 0.8rem;
    }
    .step-connector {
        position: absolute;
        left: 2rem;
        top: 5rem;
        width: 2px;
        height: 4rem;
        background: linear-gradient(to bottom, rgba(52, 211, 153, 0.5), transparent);
    }
    .step-body {
        padding-top: 0.5rem;
    }
    .step-body h3 {
        font-size: 1.25rem;
        font-weight: 700;
        margin: 0 0 0.5rem;
    }
    .step-body p {
        font-size: 0.875rem;
        line-height: 1.7;
        margin: 0;
    }
    .how-cta {
        padding-top: 3rem;
    }
    .journey-cta {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        background: linear-gradient(to right, #10B981, #14B8A6);
        color: #000;
        padding: 1rem 2rem;
        border-radius: 12px;
        font-size: 1.125rem;
        font-weight: 600;
        text-decoration: none;
        transition: all 0.2s ease;
    }
    .journey-cta:hover {
        transform: translateY(-4px);
        box-shadow: 0 16px 40px rgba(16, 185, 129, 0.3);
    }
    .how-note {
        font-size: 0.875rem;
        margin-top: 1rem;
    }

    /* Features. */
    .features-section {
        position: relative;
        overflow: hidden;
        padding: 5rem 0;
        z-index: 10;
    }
    .features-inner {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1.5rem;
    }
    .section-title {
        font-size: clamp(1.875rem, 4vw, 2.25rem);
        font-weight: 700;
        text-align: center;
        margin: 0 0 4rem;
    }
    .features-grid {
        display: grid;
        gap: 1rem;
    }
    .feature-card {
        border: 1px solid transparent;
        border-radius: 16px;
        padding: 1rem;
        transition: all 0.2s ease;
    }
    .feature-card:hover {
        transform: translateY(-2px);
        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
    }
    .feature-card h3 {
        font-size: 1rem;
        font-weight: 600;
        margin: 0 0 0.5rem;
    }
    .feature-card p {
        font-size: 0.875rem;
        margin: 0;
    }

    /* Social proof. */
    .proof-section {
        position: relative;
        overflow: hidden;
        padding: 5rem 0;
        border-top: 1px solid transparent;
        border-bottom: 1px solid transparent;
        z-index: 10;
    }
    .proof-inner {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1.5rem;
        text-align: center;
    }
    .proof-sub {
        font-size: 1.125rem;
        margin: -3rem 0 4rem;
    }
    .proof-grid {
        display: grid;
        gap: 1.5rem;
    }
    .proof-card {
        border: 1px solid transparent;
        border-radius: 16px;
        padding: 1.5rem;
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 1rem;
        transition: all 0.2s ease;
    }
    .proof-card:hover {
        transform: translateY(-2px);
        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.2);
    }
    .proof-portrait {
        width: 8rem;
        height: 8rem;
        border-radius: 16px;
        overflow: hidden;
        border: 2px solid rgba(52, 211, 153, 0.2);
        transition: transform 0.3s ease;
    }
    .proof-card:hover .proof-portrait {
        transform: scale(1.05);
    }
    .proof-portrait img {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }
    .proof-card blockquote {
        font-size: 0.875rem;
        line-height: 1.7;
        margin: 0;
    }
    .proof-card cite {
        font-size: 0.875rem;
        font-weight: 600;
        font-style: normal;
    }

    /* Waitlist. */
    .waitlist-section {
        position: relative;
        overflow: hidden;
        min-height: 80vh;
        display: flex;
        align-items: center;
        padding: 5rem 0;
        z-index: 10;
    }
    .waitlist-inner {
        max-width: 64rem;
        margin: 0 auto;
        padding: 0 1.5rem;
        text-align: center;
    }
    .beta-badge {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.5rem 1rem;
        border-radius: 9999px;
        background: linear-gradient(to right, rgba(168, 85, 247, 0.2), rgba(236, 72, 153, 0.2));
        border: 1px solid rgba(192, 132, 252, 0.3);
        margin-bottom: 2rem;
        font-size: 0.875rem;
        font-weight: 600;
    }
    .pulse-dot {
        width: 0.5rem;
        height: 0.5rem;
        background: #34d399;
        border-radius: 50%;
        animation: pulse-dot 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
    }
    @keyframes pulse-dot {
        0%, 100% { opacity: 1; }
        50% { opacity: 0.4; }
    }
    .waitlist-title {
        font-size: clamp(2.25rem, 6vw, 3.75rem);
        font-weight: 700;
        line-height: 1.2;
        margin: 0 0 1rem;
    }
    .waitlist-title span {
        font-size: clamp(1.875rem, 5vw, 3rem);
    }
    .waitlist-sub {
        font-size: 1.25rem;
        max-width: 48rem;
        margin: 0 auto 3rem;
    }
    .accent-strong { color: #34d399; font-weight: 600; }
    .pink-strong { color: #f472b6; font-weight: 600; }
    .benefit-grid {
        display: grid;
        gap: 1.5rem;
        margin-bottom: 3rem;
    }
    .benefit-card {
        border: 1px solid transparent;
        border-radius: 16px;
        padding: 1.5rem;
    }
    .benefit-icon {
        font-size: 2rem;
        margin-bottom: 1rem;
    }
    .benefit-card h3 {
        font-size: 1.25rem;
        font-weight: 700;
        margin: 0 0 1rem;
    }
    .benefit-card p {
        font-size: 0.875rem;
        margin: 0;
    }
    .trust-block {
        margin-top: 2rem;
    }
    .trust-line {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        font-size: 0.875rem;
    }
    .trust-dots {
        display: flex;
        justify-content: center;
        gap: 2rem;
        margin-top: 1rem;
    }
    .dot-emerald {
        width: 0.5rem;
        height: 0.5rem;
        background: #34d399;
        border-radius: 50%;
    }
    .dot-pink {
        width: 0.5rem;
        height: 0.5rem;
        background: #f472b6;
        border-radius: 50%;
    }

    /* Footer. */
    .site-footer {
        position: relative;
        overflow: hidden;
        border-top: 1px solid transparent;
        z-index: 10;
    }
    .footer-inner {
        position: relative;
        max-width: 80rem;
        margin: 0 auto;
        padding: 2rem 1.5rem;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: space-between;
        text-align: center;
    }
    .footer-copyright {
        font-size: 0.875rem;
    }
    .footer-copyright p {
        margin: 0;
    }
    .footer-fine {
        font-size: 0.75rem;
    }
    .footer-nav {
        display: flex;
        gap: 1.5rem;
        margin-top: 1rem;
    }
    .footer-link {
        font-size: 0.875rem;
        text-decoration: none;
        transition: color 0.3s ease;
    }
    .footer-link:hover {
        color: #34d399;
    }

    /* Responsive layout. */
    @media (min-width: 640px) {
        .hero-ctas {
            flex-direction: row;
        }
        .features-grid {
            grid-template-columns: repeat(2, 1fr);
        }
    }
    @media (min-width: 768px) {
        .hero-art-img {
            width: 553px;
            height: 553px;
        }
        .proof-grid,
        .benefit-grid {
            grid-template-columns: repeat(3, 1fr);
        }
        .proof-portrait {
            width: 10rem;
            height: 10rem;
        }
        .footer-inner {
            flex-direction: row;
            text-align: left;
        }
        .footer-nav {
            margin-top: 0;
        }
    }
    @media (min-width: 1024px) {
        .hero-inner {
            grid-template-columns: 1fr 1fr;
            gap: 2.5rem;
        }
        .features-grid {
            grid-template-columns: repeat(3, 1fr);
        }
        .pain-grid {
            grid-template-columns: repeat(2, 1fr);
            gap: 3rem;
            align-items: center;
        }
        .pain-text {
            order: -1;
        }
    }
                "#}
            </style>
        </div>
    }
}
