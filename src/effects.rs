//! Pointer/scroll-driven visual effects.
//!
//! The landing page re-renders its background gradients and parallax layers
//! on every mouse move and scroll event. All of the math and the style
//! strings it produces live here as plain functions so they stay testable
//! off the browser; the page itself only wires events to state.
//!
//! Also here: the click "crackle" markers, a small self-expiring collection
//! driven by one 800 ms timer per marker.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use yew::Reducible;

/// How long a crackle ring stays in the live set. The CSS animation that
/// renders it runs for the same duration.
pub const CRACKLE_LIFETIME_MS: u32 = 800;

/// Pointer position normalized to [-1, 1] on both axes, 0 at the viewport
/// center. Drives the parallax translations.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct ParallaxOffset {
    pub x: f64,
    pub y: f64,
}

/// Pointer position mapped to gradient hue angles: x in [0, 360] degrees,
/// y in [0, 180].
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct HueOffset {
    pub x: f64,
    pub y: f64,
}

pub fn pointer_offset(client_x: f64, client_y: f64, viewport_w: f64, viewport_h: f64) -> ParallaxOffset {
    ParallaxOffset {
        x: (client_x / viewport_w - 0.5) * 2.0,
        y: (client_y / viewport_h - 0.5) * 2.0,
    }
}

pub fn hue_offset(client_x: f64, client_y: f64, viewport_w: f64, viewport_h: f64) -> HueOffset {
    HueOffset {
        x: client_x / viewport_w * 360.0,
        y: client_y / viewport_h * 180.0,
    }
}

/// Vertical lift applied to the hero as the page scrolls away under it.
pub fn hero_lift(scroll_y: f64) -> f64 {
    scroll_y * -0.4
}

/// Hero fade: fully opaque at the top, never below 0.1.
pub fn hero_opacity(scroll_y: f64) -> f64 {
    (1.0 - scroll_y / 600.0).max(0.1)
}

/// The pain-point section slides up to meet the hero, stopping at -50px.
pub fn pain_lift(scroll_y: f64) -> f64 {
    (scroll_y * -0.3 + 50.0).max(-50.0)
}

/// Scroll drift with an upper bound, used by the slow global layers.
fn capped_drift(scroll_y: f64, rate: f64, cap: f64) -> f64 {
    (scroll_y * rate).min(cap)
}

/// Style for the page-wide colored hue wash. An oversized layer that drifts
/// with the pointer and (slowly, capped) with scroll, tinted by three
/// radial gradients whose centers and hues follow the pointer.
pub fn hue_wash_style(offset: ParallaxOffset, hue: HueOffset, scroll_y: f64) -> String {
    format!(
        "left: -100%; top: -100%; width: 300%; height: 300%; \
         transform: translate3d({}px, {}px, 0); \
         background: \
         radial-gradient(circle at {}% {}%, hsl({}, 65%, 35%) 0%, transparent 40%), \
         radial-gradient(circle at {}% {}%, hsl({}, 65%, 30%) 0%, transparent 40%), \
         radial-gradient(circle at {}% {}%, hsl({}, 60%, 25%) 0%, transparent 45%); \
         opacity: 0.18;",
        offset.x * 25.0 + capped_drift(scroll_y, 0.03, 120.0),
        offset.y * 25.0 + capped_drift(scroll_y, 0.02, 80.0),
        25.0 + offset.x * 6.0,
        15.0 + offset.y * 4.0,
        280.0 + hue.x * 0.15,
        75.0 + offset.x * 4.0,
        85.0 + offset.y * 6.0,
        160.0 + hue.y * 0.2,
        50.0 + offset.x * 5.0,
        50.0 + offset.y * 5.0,
        320.0 + hue.x * 0.12,
    )
}

/// Style for the page-wide square grid layer. The pattern itself comes from
/// a theme class; this only positions and drifts it.
pub fn grid_drift_style(offset: ParallaxOffset, scroll_y: f64) -> String {
    format!(
        "left: -100%; top: -100%; width: 300%; height: 300%; \
         background-size: 24px 24px; \
         transform: translate3d({}px, {}px, 0); \
         opacity: 0.25;",
        offset.x * 12.0 + capped_drift(scroll_y, 0.025, 100.0),
        offset.y * 12.0 + capped_drift(scroll_y, 0.035, 140.0),
    )
}

/// Style for the hero section wrapper: lift and fade with scroll.
pub fn hero_section_style(scroll_y: f64) -> String {
    format!(
        "transform: translateY({}px); opacity: {};",
        hero_lift(scroll_y),
        hero_opacity(scroll_y),
    )
}

/// Style for the hero's own glow layer: a faster, uncapped drift.
pub fn hero_glow_style(offset: ParallaxOffset, hue: HueOffset, scroll_y: f64) -> String {
    format!(
        "left: -50%; top: -50%; width: 200%; height: 200%; \
         transform: translate3d({}px, {}px, 0); \
         background: \
         radial-gradient(circle at {}% {}%, hsl({}, 70%, 60%) 0%, transparent 35%), \
         radial-gradient(circle at {}% {}%, hsl({}, 70%, 55%) 0%, transparent 35%), \
         radial-gradient(circle at {}% {}%, hsl({}, 70%, 65%) 0%, transparent 35%); \
         opacity: 0.5;",
        offset.x * 40.0 + scroll_y * 0.3,
        offset.y * 40.0 + scroll_y * 0.2,
        20.0 + offset.x * 10.0,
        10.0 + offset.y * 5.0,
        280.0 + hue.x * 0.2,
        80.0 + offset.x * 5.0,
        20.0 + offset.y * 10.0,
        160.0 + hue.y * 0.3,
        60.0 + offset.x * 8.0,
        80.0 + offset.y * 6.0,
        200.0 + hue.x * 0.15,
    )
}

/// Style for the hero's grid layer.
pub fn hero_grid_style(offset: ParallaxOffset, scroll_y: f64) -> String {
    format!(
        "left: -50%; top: -50%; width: 200%; height: 200%; \
         background-size: 20px 20px; \
         transform: translate3d({}px, {}px, 0);",
        offset.x * 20.0 + scroll_y * 0.1,
        offset.y * 20.0 + scroll_y * 0.15,
    )
}

/// Style for the hero artwork, drifting gently against the pointer.
pub fn hero_art_style(offset: ParallaxOffset) -> String {
    format!(
        "transform: translate3d({}px, {}px, 0);",
        offset.x * 15.0,
        offset.y * 15.0,
    )
}

/// Style for the pain-point section wrapper.
pub fn pain_section_style(scroll_y: f64) -> String {
    format!("transform: translateY({}px);", pain_lift(scroll_y))
}

/// One transient click ring. Coordinates are relative to the hero section;
/// the caller translates from client coordinates before spawning.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CrackleEffect {
    pub id: u64,
    pub x: f64,
    pub y: f64,
}

/// Timestamp-derived id source. Clicks are serialized by the event loop, so
/// the creation time is almost always unique already; the bump covers two
/// clicks landing in the same millisecond, since expiry removes by id.
#[derive(Debug, Default)]
pub struct CrackleIdGen {
    last: u64,
}

impl CrackleIdGen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self, now_ms: u64) -> u64 {
        self.last = now_ms.max(self.last + 1);
        self.last
    }
}

/// Pending expiry timers keyed by crackle id. The view holds the only
/// strong handles; the callback built by [`ExpiryTimers::on_expire`] keeps
/// a weak one, so tearing the view down drops the map and every stored
/// timer with it. A `gloo_timers` `Timeout` cancels itself on drop, which
/// makes that the cancellation path for callbacks still in flight.
pub struct ExpiryTimers<T> {
    inner: Rc<RefCell<HashMap<u64, T>>>,
}

impl<T> Default for ExpiryTimers<T> {
    fn default() -> Self {
        Self {
            inner: Rc::default(),
        }
    }
}

impl<T> ExpiryTimers<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, id: u64, timer: T) {
        self.inner.borrow_mut().insert(id, timer);
    }

    /// Body for the timer with this id: discard the stored handle, then run
    /// `expire`. The registry is held weakly, never strongly, so a stored
    /// timer never keeps its own registry alive; if the registry is already
    /// gone the view is too, and nothing runs.
    pub fn on_expire(
        &self,
        id: u64,
        expire: impl FnOnce(u64) + 'static,
    ) -> impl FnOnce() + 'static
    where
        T: 'static,
    {
        let registry = Rc::downgrade(&self.inner);
        move || {
            if let Some(registry) = registry.upgrade() {
                registry.borrow_mut().remove(&id);
                expire(id);
            }
        }
    }

    #[cfg(test)]
    fn pending(&self) -> usize {
        self.inner.borrow().len()
    }
}

/// The live set of crackles, newest last. Updated through reducer actions so
/// an expiry timer firing after later clicks still operates on the current
/// set rather than a stale render snapshot.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct CrackleList {
    pub items: Vec<CrackleEffect>,
}

pub enum CrackleAction {
    Spawn(CrackleEffect),
    /// Remove the marker with this id, if still present. Other pending
    /// markers are untouched.
    Expire(u64),
}

impl Reducible for CrackleList {
    type Action = CrackleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut items = self.items.clone();
        match action {
            CrackleAction::Spawn(crackle) => items.push(crackle),
            CrackleAction::Expire(id) => items.retain(|c| c.id != id),
        }
        Rc::new(CrackleList { items })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn pointer_offset_is_zero_at_viewport_center() {
        let offset = pointer_offset(960.0, 540.0, 1920.0, 1080.0);
        assert!(approx(offset.x, 0.0));
        assert!(approx(offset.y, 0.0));
    }

    #[test]
    fn pointer_offset_stays_within_unit_range() {
        for &(x, y) in &[(0.0, 0.0), (1920.0, 1080.0), (1.0, 1079.0), (1337.0, 42.0)] {
            let offset = pointer_offset(x, y, 1920.0, 1080.0);
            assert!((-1.0..=1.0).contains(&offset.x), "x = {}", offset.x);
            assert!((-1.0..=1.0).contains(&offset.y), "y = {}", offset.y);
        }
    }

    #[test]
    fn pointer_offset_hits_corners() {
        let top_left = pointer_offset(0.0, 0.0, 1920.0, 1080.0);
        assert!(approx(top_left.x, -1.0) && approx(top_left.y, -1.0));
        let bottom_right = pointer_offset(1920.0, 1080.0, 1920.0, 1080.0);
        assert!(approx(bottom_right.x, 1.0) && approx(bottom_right.y, 1.0));
    }

    #[test]
    fn hue_offset_scales_to_degrees() {
        let hue = hue_offset(1920.0, 1080.0, 1920.0, 1080.0);
        assert!(approx(hue.x, 360.0));
        assert!(approx(hue.y, 180.0));
        let mid = hue_offset(960.0, 540.0, 1920.0, 1080.0);
        assert!(approx(mid.x, 180.0));
        assert!(approx(mid.y, 90.0));
    }

    #[test]
    fn hero_fade_floors_at_a_tenth() {
        assert!(approx(hero_opacity(0.0), 1.0));
        assert!(approx(hero_opacity(300.0), 0.5));
        assert!(approx(hero_opacity(10_000.0), 0.1));
    }

    #[test]
    fn hero_lift_tracks_scroll() {
        assert!(approx(hero_lift(0.0), 0.0));
        assert!(approx(hero_lift(250.0), -100.0));
    }

    #[test]
    fn pain_lift_clamps_at_minus_fifty() {
        assert!(approx(pain_lift(0.0), 50.0));
        assert!(approx(pain_lift(200.0), -10.0));
        assert!(approx(pain_lift(5_000.0), -50.0));
    }

    #[test]
    fn slow_layers_stop_drifting_past_their_caps() {
        let offset = ParallaxOffset::default();
        let hue = HueOffset::default();
        // Hue wash x-drift caps at 120px, y at 80px.
        let far = hue_wash_style(offset, hue, 100_000.0);
        assert!(far.contains("translate3d(120px, 80px, 0)"), "{far}");
        // Grid caps at 100px / 140px.
        let grid = grid_drift_style(offset, 100_000.0);
        assert!(grid.contains("translate3d(100px, 140px, 0)"), "{grid}");
    }

    #[test]
    fn hero_layers_drift_without_caps() {
        let offset = ParallaxOffset { x: 1.0, y: -1.0 };
        let hue = HueOffset::default();
        let glow = hero_glow_style(offset, hue, 1000.0);
        assert!(glow.contains("translate3d(340px, 160px, 0)"), "{glow}");
        let grid = hero_grid_style(offset, 1000.0);
        assert!(grid.contains("translate3d(120px, 130px, 0)"), "{grid}");
    }

    #[test]
    fn gradient_hues_follow_the_pointer() {
        let offset = ParallaxOffset::default();
        let hue = HueOffset { x: 100.0, y: 100.0 };
        let wash = hue_wash_style(offset, hue, 0.0);
        assert!(wash.contains("hsl(295, 65%, 35%)"), "{wash}");
        assert!(wash.contains("hsl(180, 65%, 30%)"), "{wash}");
        assert!(wash.contains("hsl(332, 60%, 25%)"), "{wash}");
    }

    #[test]
    fn hero_art_drifts_with_pointer_only() {
        let style = hero_art_style(ParallaxOffset { x: 0.5, y: -0.5 });
        assert_eq!(style, "transform: translate3d(7.5px, -7.5px, 0);");
    }

    #[test]
    fn ids_are_unique_within_one_millisecond() {
        let mut gen = CrackleIdGen::new();
        let a = gen.next(1_000);
        let b = gen.next(1_000);
        let c = gen.next(1_000);
        assert_eq!(a, 1_000);
        assert!(b > a && c > b);
        // Time moving forward takes over again.
        assert_eq!(gen.next(50_000), 50_000);
    }

    #[test]
    fn spawn_appends_and_expire_removes_only_the_matching_id() {
        let list = Rc::new(CrackleList::default());
        let first = CrackleEffect { id: 1, x: 10.0, y: 20.0 };
        let second = CrackleEffect { id: 2, x: 30.0, y: 40.0 };

        let list = list.reduce(CrackleAction::Spawn(first));
        assert_eq!(list.items.as_slice(), &[first]);

        // Two clicks coexist until their own timers fire.
        let list = list.reduce(CrackleAction::Spawn(second));
        assert_eq!(list.items.len(), 2);

        let list = list.reduce(CrackleAction::Expire(1));
        assert_eq!(list.items.as_slice(), &[second]);

        let list = list.reduce(CrackleAction::Expire(2));
        assert!(list.items.is_empty());
    }

    #[test]
    fn expiry_discards_its_own_timer_and_reports_the_id() {
        use std::cell::Cell;

        let timers = ExpiryTimers::new();
        timers.insert(5, "pending");
        timers.insert(6, "pending");

        let expired = Rc::new(Cell::new(None));
        let callback = {
            let expired = expired.clone();
            timers.on_expire(5, move |id| expired.set(Some(id)))
        };
        callback();

        assert_eq!(expired.get(), Some(5));
        assert_eq!(timers.pending(), 1);
    }

    #[test]
    fn dropping_the_registry_releases_pending_timers() {
        use std::cell::Cell;

        struct CountDrop(Rc<Cell<u32>>);
        impl Drop for CountDrop {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let drops = Rc::new(Cell::new(0));
        let fired = Rc::new(Cell::new(false));

        let timers = ExpiryTimers::new();
        timers.insert(1, CountDrop(drops.clone()));
        let callback = {
            let fired = fired.clone();
            timers.on_expire(1, move |_| fired.set(true))
        };

        // The pending callback must not keep the registry alive: view
        // teardown drops the map, and the stored timers go with it.
        drop(timers);
        assert_eq!(drops.get(), 1);

        // A callback outliving the registry finds nothing to expire.
        callback();
        assert!(!fired.get());
    }

    #[test]
    fn expiring_an_absent_id_is_a_no_op() {
        let list = Rc::new(CrackleList::default())
            .reduce(CrackleAction::Spawn(CrackleEffect { id: 7, x: 0.0, y: 0.0 }))
            .reduce(CrackleAction::Expire(99));
        assert_eq!(list.items.len(), 1);
    }
}
