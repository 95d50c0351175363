use crate::*;

use std::collections::HashMap;
use std::format;
use std::string::String;
use std::vec;
use std::vec::Vec;

use showcase_carousel::{
    Card, Filter, Frame, LiveTrack, PointerEventKind, SectionId, Span, ViewportMode, layout,
};

#[derive(Debug, Default)]
struct FakeSection {
    pristine: Vec<Card>,
    has_track: bool,
    has_container: bool,
    live: Option<LiveTrack>,
    shown: Option<bool>,
    frames: Vec<Frame>,
    motion_cleared: usize,
    counters: HashMap<CounterSlot, String>,
    listeners: Vec<(ListenerId, PointerEventKind)>,
}

/// An in-memory page: cards are laid out in a row at a fixed width.
#[derive(Debug)]
struct FakeHost {
    width: f32,
    card_width: f32,
    order: Vec<SectionId>,
    sections: HashMap<SectionId, FakeSection>,
    next_listener: ListenerId,
    attached: usize,
    detached: usize,
}

impl FakeHost {
    fn new(width: f32) -> Self {
        Self {
            width,
            card_width: 100.0,
            order: Vec::new(),
            sections: HashMap::new(),
            next_listener: 1,
            attached: 0,
            detached: 0,
        }
    }

    fn with_section(self, id: &str, cards: Vec<Card>) -> Self {
        self.with_parts(id, cards, true, true)
    }

    fn with_parts(mut self, id: &str, cards: Vec<Card>, track: bool, container: bool) -> Self {
        self.order.push(id.into());
        self.sections.insert(
            id.into(),
            FakeSection {
                pristine: cards,
                has_track: track,
                has_container: container,
                ..FakeSection::default()
            },
        );
        self
    }

    fn section(&self, id: &str) -> &FakeSection {
        &self.sections[id]
    }

    fn live(&self, id: &str) -> &LiveTrack {
        self.section(id).live.as_ref().expect("section was never rendered")
    }

    fn counter(&self, id: &str, slot: CounterSlot) -> Option<&str> {
        self.section(id).counters.get(&slot).map(String::as_str)
    }

    fn listener_ids(&self, id: &str) -> Vec<ListenerId> {
        self.section(id).listeners.iter().map(|(l, _)| *l).collect()
    }

    fn listener(&self, id: &str, kind: PointerEventKind) -> Option<ListenerId> {
        self.section(id)
            .listeners
            .iter()
            .find(|(_, k)| *k == kind)
            .map(|(l, _)| *l)
    }
}

impl GalleryHost for FakeHost {
    fn viewport_width(&self) -> f32 {
        self.width
    }

    fn section_ids(&self) -> Vec<SectionId> {
        self.order.clone()
    }

    fn read_cards(&self, section: &str) -> Option<Vec<Card>> {
        let s = self.sections.get(section)?;
        if !s.has_track {
            return None;
        }
        Some(match &s.live {
            Some(track) => (0..track.len()).filter_map(|i| track.card(i).cloned()).collect(),
            None => s.pristine.clone(),
        })
    }

    fn container_rect(&self, section: &str) -> Option<Span> {
        let s = self.sections.get(section)?;
        s.has_container.then(|| Span::new(0.0, self.width))
    }

    fn render_track(&mut self, section: &str, track: &LiveTrack) {
        if let Some(s) = self.sections.get_mut(section) {
            s.live = Some(track.clone());
        }
    }

    fn set_section_shown(&mut self, section: &str, shown: bool) {
        if let Some(s) = self.sections.get_mut(section) {
            s.shown = Some(shown);
        }
    }

    fn measure_track(&self, section: &str) -> Option<TrackMeasure> {
        let track = self.sections.get(section)?.live.as_ref()?;
        let visible = track.visible_count();
        Some(TrackMeasure {
            track_width: visible as f32 * self.card_width,
            track_left: 0.0,
            cards: (0..visible)
                .map(|i| Span::new(i as f32 * self.card_width, self.card_width))
                .collect(),
        })
    }

    fn apply_frame(&mut self, section: &str, frame: &Frame) {
        if let Some(s) = self.sections.get_mut(section) {
            s.frames.push(frame.clone());
        }
    }

    fn clear_motion(&mut self, section: &str) {
        if let Some(s) = self.sections.get_mut(section) {
            s.motion_cleared += 1;
        }
    }

    fn write_counter(&mut self, section: &str, slot: CounterSlot, text: &str) {
        if let Some(s) = self.sections.get_mut(section) {
            s.counters.insert(slot, text.into());
        }
    }

    fn add_pointer_listener(
        &mut self,
        section: &str,
        kind: PointerEventKind,
    ) -> Option<ListenerId> {
        let s = self.sections.get_mut(section)?;
        if !s.has_container {
            return None;
        }
        let id = self.next_listener;
        self.next_listener += 1;
        s.listeners.push((id, kind));
        self.attached += 1;
        Some(id)
    }

    fn remove_pointer_listener(&mut self, section: &str, id: ListenerId) {
        if let Some(s) = self.sections.get_mut(section) {
            let before = s.listeners.len();
            s.listeners.retain(|(l, _)| *l != id);
            if s.listeners.len() < before {
                self.detached += 1;
            }
        }
    }
}

/// 12 cards, 4 per category across `A`, `B`, `C`.
fn twelve_cards() -> Vec<Card> {
    (0..12)
        .map(|i| {
            let category = ["A", "B", "C"][i % 3];
            Card::new(category, format!("<article>{i}</article>"))
        })
        .collect()
}

fn two_section_host(width: f32) -> FakeHost {
    FakeHost::new(width)
        .with_section("tops", twelve_cards())
        .with_section("pants", twelve_cards())
}

fn gallery() -> Gallery {
    Gallery::new(GalleryOptions::default())
}

fn cross_to(g: &mut Gallery, host: &mut FakeHost, width: f32, now_ms: u64) -> bool {
    host.width = width;
    g.on_resize(width, now_ms);
    g.poll(host, now_ms + 250)
}

fn assert_single_pair(host: &FakeHost, id: &str) {
    let listeners = &host.section(id).listeners;
    assert_eq!(listeners.len(), 2, "{id}: expected exactly one listener pair");
    assert!(host.listener(id, PointerEventKind::Move).is_some());
    assert!(host.listener(id, PointerEventKind::Leave).is_some());
}

#[test]
fn init_wide_triples_sections_and_starts_engines() {
    let mut host = two_section_host(1200.0);
    let mut g = gallery();
    assert_eq!(g.init(&mut host), 2);
    assert_eq!(g.mode(), ViewportMode::Wide);

    for id in ["tops", "pants"] {
        assert_eq!(host.live(id).len(), 36);
        assert!(host.live(id).is_tripled());
        assert_eq!(host.section(id).shown, Some(true));
        assert_eq!(host.counter(id, CounterSlot::Total), Some("12"));
        assert_eq!(host.counter(id, CounterSlot::ItemCount), Some("12"));
        assert_single_pair(&host, id);

        let c = g.section(id).unwrap();
        assert!(c.engine().is_animating());
        assert!(c.is_pointer_bound());
        assert_eq!(c.engine().target_x(), -1200.0);
    }
    assert!(g.is_animating());
}

#[test]
fn init_narrow_uses_single_grid_without_motion() {
    let mut host = two_section_host(600.0);
    let mut g = gallery();
    g.init(&mut host);
    assert_eq!(g.mode(), ViewportMode::Narrow);

    for id in ["tops", "pants"] {
        assert_eq!(host.live(id).len(), 12);
        assert!(!host.live(id).is_tripled());
        assert!(host.section(id).listeners.is_empty());
        assert!(host.section(id).motion_cleared >= 1);
        assert!(!g.section(id).unwrap().engine().is_animating());
    }
    assert!(!g.frame(&mut host));
    assert!(host.section("tops").frames.is_empty());
}

#[test]
fn wide_filter_scenario() {
    let mut host = two_section_host(1200.0);
    let mut g = gallery();
    g.init(&mut host);

    g.select_filter(&mut host, Filter::category("B"));
    assert_eq!(g.filter(), &Filter::category("B"));
    let live = host.live("tops");
    assert_eq!(live.len(), 36);
    assert_eq!(live.visible_count(), 12);
    assert_eq!(host.counter("tops", CounterSlot::Total), Some("04"));
    assert_eq!(host.counter("tops", CounterSlot::ItemCount), Some("4"));
    assert_single_pair(&host, "tops");
    assert_single_pair(&host, "pants");
}

#[test]
fn narrow_filter_scenario() {
    let mut host = two_section_host(600.0);
    let mut g = gallery();
    g.init(&mut host);

    g.select_filter(&mut host, Filter::category("B"));
    let live = host.live("tops");
    assert_eq!(live.len(), 12);
    assert_eq!(live.visible_count(), 4);
    assert_eq!(host.counter("tops", CounterSlot::Total), Some("04"));
    assert_eq!(host.counter("tops", CounterSlot::ItemCount), Some("4"));
}

#[test]
fn narrow_hides_sections_left_empty_by_the_filter() {
    let mut host = two_section_host(600.0);
    let mut g = gallery();
    g.init(&mut host);

    g.select_filter(&mut host, Filter::category("Z"));
    assert_eq!(host.section("tops").shown, Some(false));
    assert_eq!(host.counter("tops", CounterSlot::Total), Some("00"));

    g.select_filter(&mut host, Filter::All);
    assert_eq!(host.section("tops").shown, Some(true));
}

#[test]
fn wide_keeps_empty_sections_shown() {
    let mut host = two_section_host(1200.0);
    let mut g = gallery();
    g.init(&mut host);

    g.select_filter(&mut host, Filter::category("Z"));
    assert_eq!(host.section("tops").shown, Some(true));
    assert_eq!(host.counter("tops", CounterSlot::Total), Some("01"));
    // Nothing visible: the engine keeps running but skips motion.
    assert!(g.frame(&mut host));
    assert!(host.section("tops").frames.is_empty());
}

#[test]
fn resize_is_debounced_before_crossing() {
    let mut host = two_section_host(1200.0);
    let mut g = gallery();
    g.init(&mut host);

    host.width = 700.0;
    g.on_resize(700.0, 0);
    assert!(!g.poll(&mut host, 100));
    assert_eq!(g.mode(), ViewportMode::Wide);

    host.width = 600.0;
    g.on_resize(600.0, 200);
    assert_eq!(g.resize_due_ms(), Some(450));
    assert!(!g.poll(&mut host, 449));
    assert!(g.poll(&mut host, 450));
    assert_eq!(g.mode(), ViewportMode::Narrow);

    for id in ["tops", "pants"] {
        assert_eq!(host.live(id).len(), 12);
        assert!(host.section(id).listeners.is_empty());
        assert!(!g.section(id).unwrap().engine().is_animating());
    }
    assert!(!g.poll(&mut host, 1000));
}

#[test]
fn resize_within_mode_keeps_engines() {
    let mut host = two_section_host(1200.0);
    let mut g = gallery();
    g.init(&mut host);
    let before = host.listener_ids("tops");

    assert!(!cross_to(&mut g, &mut host, 1000.0, 0));
    assert_eq!(host.listener_ids("tops"), before);
    assert_eq!(g.mode(), ViewportMode::Wide);
}

#[test]
fn crossing_mid_animation_and_back_restores_exact_tripled_layout() {
    let mut host = two_section_host(1200.0);
    let mut g = gallery();
    g.init(&mut host);

    let on_move = host.listener("tops", PointerEventKind::Move).unwrap();
    assert!(g.on_pointer(&host, "tops", on_move, 1190.0));
    for _ in 0..30 {
        assert!(g.frame(&mut host));
    }
    assert!(g.section("tops").unwrap().engine().velocity() < 0.0);

    assert!(cross_to(&mut g, &mut host, 600.0, 1_000));
    assert!(!g.is_animating());
    assert!(!g.frame(&mut host));
    assert_eq!(host.live("tops").len(), 12);

    assert!(cross_to(&mut g, &mut host, 1200.0, 2_000));
    let snapshot = g.registry().get("tops").unwrap().clone();
    let expected = layout(&snapshot, &Filter::All, ViewportMode::Wide);
    assert_eq!(host.live("tops"), &expected);
    assert_eq!(host.live("tops").len(), 36);
    assert_eq!(snapshot.len(), 12);

    let engine = g.section("tops").unwrap().engine();
    assert!(engine.is_animating());
    assert_eq!(engine.velocity(), 0.0);
    assert_eq!(engine.target_x(), -1200.0);
}

#[test]
fn rebuilds_never_leave_more_than_one_listener_pair() {
    let mut host = two_section_host(1200.0);
    let mut g = gallery();
    g.init(&mut host);

    let mut now = 0;
    for width in [600.0, 1200.0, 500.0, 900.0] {
        now += 1_000;
        assert!(cross_to(&mut g, &mut host, width, now));
        g.select_filter(&mut host, Filter::category("A"));
        g.select_filter(&mut host, Filter::All);
    }
    assert_eq!(g.mode(), ViewportMode::Wide);
    assert_single_pair(&host, "tops");
    assert_single_pair(&host, "pants");
    assert_eq!(host.attached - host.detached, 4);
}

#[test]
fn stale_listeners_are_ignored() {
    let mut host = two_section_host(1200.0);
    let mut g = gallery();
    g.init(&mut host);
    let old_move = host.listener("tops", PointerEventKind::Move).unwrap();

    g.select_filter(&mut host, Filter::category("B"));
    assert!(!g.on_pointer(&host, "tops", old_move, 1190.0));
    assert_eq!(g.section("tops").unwrap().engine().velocity(), 0.0);

    let new_move = host.listener("tops", PointerEventKind::Move).unwrap();
    assert_ne!(new_move, old_move);
    assert!(g.on_pointer(&host, "tops", new_move, 1190.0));
    assert!(!g.on_pointer(&host, "hats", new_move, 1190.0));
}

#[test]
fn pointer_events_drive_and_release_velocity() {
    let mut host = two_section_host(1200.0);
    let mut g = gallery();
    g.init(&mut host);
    let on_move = host.listener("tops", PointerEventKind::Move).unwrap();
    let on_leave = host.listener("tops", PointerEventKind::Leave).unwrap();

    assert!(g.on_pointer(&host, "tops", on_move, 1200.0));
    assert!((g.section("tops").unwrap().engine().velocity() + 135.0).abs() < 1e-3);

    assert!(g.on_pointer(&host, "tops", on_move, 600.0));
    assert_eq!(g.section("tops").unwrap().engine().velocity(), 0.0);

    assert!(g.on_pointer(&host, "tops", on_move, 0.0));
    assert!(g.section("tops").unwrap().engine().velocity() > 0.0);

    assert!(g.on_pointer(&host, "tops", on_leave, 0.0));
    assert_eq!(g.section("tops").unwrap().engine().velocity(), 0.0);
    // The other section is unaffected.
    assert_eq!(g.section("pants").unwrap().engine().velocity(), 0.0);
}

#[test]
fn frame_loop_renders_and_publishes_current_index() {
    let mut host = two_section_host(1200.0);
    let mut g = gallery();
    g.init(&mut host);

    assert!(g.frame(&mut host));
    let frames = &host.section("tops").frames;
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].translate_x, -1200.0);
    assert_eq!(frames[0].cards.len(), 12);
    // Slots 17 and 18 straddle the center; the first wins: 17 % 12 + 1.
    assert_eq!(host.counter("tops", CounterSlot::Current), Some("06"));

    g.section_mut("tops").unwrap().engine_mut().stop();
    assert!(g.frame(&mut host));
    assert_eq!(host.section("tops").frames.len(), 1);
    assert_eq!(host.section("pants").frames.len(), 2);
}

#[test]
fn sections_with_missing_parts_are_skipped() {
    let mut host = FakeHost::new(1200.0)
        .with_section("tops", twelve_cards())
        .with_parts("hats", twelve_cards(), true, false)
        .with_parts("bags", twelve_cards(), false, true);
    let mut g = gallery();
    assert_eq!(g.init(&mut host), 1);

    assert!(g.registry().is_captured("hats"));
    assert!(!g.registry().is_captured("bags"));
    assert!(g.section("hats").is_none());
    assert!(host.section("hats").live.is_none());
    assert!(host.section("hats").listeners.is_empty());
    assert_eq!(host.live("tops").len(), 36);
}

#[test]
fn reinit_uses_pristine_snapshot_not_live_content() {
    let mut host = two_section_host(1200.0);
    let mut g = gallery();
    g.init(&mut host);
    assert_eq!(host.read_cards("tops").map(|c| c.len()), Some(36));

    g.init(&mut host);
    assert_eq!(g.registry().get("tops").map(|s| s.len()), Some(12));
    assert_eq!(host.live("tops").len(), 36);
    assert_single_pair(&host, "tops");
}

#[test]
fn teardown_detaches_everything() {
    let mut host = two_section_host(1200.0);
    let mut g = gallery();
    g.init(&mut host);
    g.teardown(&mut host);

    assert!(!g.is_animating());
    assert_eq!(g.sections().count(), 0);
    assert!(host.section("tops").listeners.is_empty());
    assert!(host.section("pants").listeners.is_empty());
    assert_eq!(host.attached, host.detached);
}

#[test]
fn debouncer_settles_after_quiet_period() {
    let mut d = ResizeDebouncer::new(1000.0, 250);
    assert_eq!(d.poll(0), None);

    d.on_resize(500.0, 10);
    assert!(d.is_pending());
    assert_eq!(d.poll(259), None);
    let settled = d.poll(260).unwrap();
    assert_eq!(settled, SettledResize { from: 1000.0, to: 500.0 });
    assert!(settled.crosses(768.0));
    assert!(!d.is_pending());
    assert_eq!(d.settled_width(), 500.0);

    assert!(!SettledResize { from: 800.0, to: 900.0 }.crosses(768.0));
    assert!(SettledResize { from: 768.0, to: 769.0 }.crosses(768.0));
    assert!(!SettledResize { from: 768.0, to: 300.0 }.crosses(768.0));
}

#[test]
fn binding_replaces_its_pair_instead_of_stacking() {
    let mut host = two_section_host(1200.0);
    let mut b = PointerBinding::new("tops");

    assert!(b.bind(&mut host, true));
    assert!(b.bind(&mut host, true));
    assert_single_pair(&host, "tops");
    assert_eq!(host.attached, 4);
    assert_eq!(host.detached, 2);

    let on_leave = host.listener("tops", PointerEventKind::Leave).unwrap();
    assert_eq!(b.kind_of(on_leave), Some(PointerEventKind::Leave));
    assert_eq!(b.kind_of(9_999), None);

    assert!(!b.bind(&mut host, false));
    assert!(!b.is_bound());
    assert!(host.section("tops").listeners.is_empty());
}

#[test]
fn binding_without_container_attaches_nothing() {
    let mut host = FakeHost::new(1200.0).with_parts("hats", vec![], true, false);
    let mut b = PointerBinding::new("hats");
    assert!(!b.bind(&mut host, true));
    assert!(!b.is_bound());
    assert!(host.section("hats").listeners.is_empty());
}

#[test]
fn gallery_options_defaults() {
    let o = GalleryOptions::default();
    assert_eq!(o.breakpoint, 768.0);
    assert_eq!(o.resize_quiet_ms, 250);
    assert_eq!(o.carousel.max_speed, 135.0);

    let o = GalleryOptions::new()
        .with_breakpoint(1024.0)
        .with_resize_quiet_ms(100);
    let mut host = two_section_host(900.0);
    let mut g = Gallery::new(o);
    g.init(&mut host);
    assert_eq!(g.mode(), ViewportMode::Narrow);
    assert_eq!(g.options().resize_quiet_ms, 100);
}
