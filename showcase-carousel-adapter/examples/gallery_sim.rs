// Example: a console "page" driving a gallery through a resize across the breakpoint.
use std::collections::HashMap;

use showcase_carousel::{Card, Filter, Frame, LiveTrack, PointerEventKind, SectionId, Span};
use showcase_carousel_adapter::{
    CounterSlot, Gallery, GalleryHost, GalleryOptions, ListenerId, TrackMeasure,
};

#[derive(Default)]
struct ConsolePage {
    width: f32,
    pristine: HashMap<SectionId, Vec<Card>>,
    live: HashMap<SectionId, LiveTrack>,
    listeners: HashMap<SectionId, Vec<(ListenerId, PointerEventKind)>>,
    next_listener: ListenerId,
}

impl GalleryHost for ConsolePage {
    fn viewport_width(&self) -> f32 {
        self.width
    }

    fn section_ids(&self) -> Vec<SectionId> {
        let mut ids: Vec<_> = self.pristine.keys().cloned().collect();
        ids.sort();
        ids
    }

    fn read_cards(&self, section: &str) -> Option<Vec<Card>> {
        self.pristine.get(section).cloned()
    }

    fn container_rect(&self, section: &str) -> Option<Span> {
        self.pristine
            .contains_key(section)
            .then(|| Span::new(0.0, self.width))
    }

    fn render_track(&mut self, section: &str, track: &LiveTrack) {
        println!(
            "[{section}] render {:?} slots={} visible={}",
            track.display(),
            track.len(),
            track.visible_count()
        );
        self.live.insert(section.into(), track.clone());
    }

    fn set_section_shown(&mut self, section: &str, shown: bool) {
        println!("[{section}] shown={shown}");
    }

    fn measure_track(&self, section: &str) -> Option<TrackMeasure> {
        let visible = self.live.get(section)?.visible_count();
        Some(TrackMeasure {
            track_width: visible as f32 * 260.0,
            track_left: 0.0,
            cards: (0..visible)
                .map(|i| Span::new(i as f32 * 260.0, 260.0))
                .collect(),
        })
    }

    fn apply_frame(&mut self, _section: &str, _frame: &Frame) {}

    fn clear_motion(&mut self, section: &str) {
        println!("[{section}] clear motion");
    }

    fn write_counter(&mut self, section: &str, slot: CounterSlot, text: &str) {
        if slot != CounterSlot::Current {
            println!("[{section}] {slot:?}={text}");
        }
    }

    fn add_pointer_listener(
        &mut self,
        section: &str,
        kind: PointerEventKind,
    ) -> Option<ListenerId> {
        self.next_listener += 1;
        let id = self.next_listener;
        self.listeners
            .entry(section.into())
            .or_default()
            .push((id, kind));
        Some(id)
    }

    fn remove_pointer_listener(&mut self, section: &str, id: ListenerId) {
        if let Some(list) = self.listeners.get_mut(section) {
            list.retain(|(l, _)| *l != id);
        }
    }
}

fn main() {
    let mut page = ConsolePage {
        width: 1440.0,
        ..ConsolePage::default()
    };
    for garment in ["jackets", "knitwear"] {
        let cards = (0..6)
            .map(|i| {
                let category = if i % 2 == 0 { "archive" } else { "new" };
                Card::new(category, format!("<article>{garment}-{i}</article>"))
            })
            .collect();
        page.pristine.insert(garment.into(), cards);
    }

    let mut gallery = Gallery::new(GalleryOptions::default());
    gallery.init(&mut page);

    let on_move = page.listeners["jackets"]
        .iter()
        .find(|(_, k)| *k == PointerEventKind::Move)
        .map(|(id, _)| *id);
    if let Some(on_move) = on_move {
        gallery.on_pointer(&page, "jackets", on_move, 1400.0);
    }

    let mut now_ms = 0u64;
    while now_ms < 500 && gallery.frame(&mut page) {
        now_ms += 16;
    }
    println!(
        "jackets state={:?}",
        gallery.section("jackets").map(|s| s.engine().state())
    );

    gallery.select_filter(&mut page, Filter::parse("new"));

    // Phone rotation: a burst of resizes, one rebuild.
    for (i, width) in [1200.0, 900.0, 700.0, 390.0].into_iter().enumerate() {
        page.width = width;
        gallery.on_resize(width, now_ms + i as u64 * 40);
    }
    now_ms += 1_000;
    let crossed = gallery.poll(&mut page, now_ms);
    println!(
        "crossed={crossed} mode={:?} animating={}",
        gallery.mode(),
        gallery.is_animating()
    );

    gallery.teardown(&mut page);
}
