// Example: one section driven by a simulated pointer at the right edge.
use showcase_carousel::{
    CarouselOptions, Card, Engine, Filter, FrameGeometry, Snapshot, Span, Tick, ViewportMode,
};

fn main() {
    let snapshot = Snapshot::new((0..8).map(|i| {
        let category = if i % 2 == 0 { "tops" } else { "outerwear" };
        Card::new(category, format!("<article>{i}</article>"))
    }));

    let mut engine = Engine::new(
        &snapshot,
        &Filter::All,
        ViewportMode::Wide,
        CarouselOptions::default(),
    );
    println!(
        "live={} total={}",
        engine.track().len(),
        engine.totals().total_text()
    );

    // A real adapter would measure these from the DOM every frame.
    let card_width = 240.0;
    let spans: Vec<Span> = (0..engine.track().visible_count())
        .map(|i| Span::new(i as f32 * card_width, card_width))
        .collect();
    let track_width = spans.len() as f32 * card_width;
    let geometry = FrameGeometry {
        track_width,
        viewport_width: 1280.0,
        track_left: 0.0,
        cards: &spans,
    };

    engine.reset_position(track_width);
    engine.start();
    engine.pointer_moved(Span::new(0.0, 1280.0), 1260.0);

    for frame in 0..120 {
        if let Tick::Rendered(f) = engine.tick(&geometry) {
            if frame % 20 == 0 {
                println!(
                    "frame={frame} translate={} current={:?} styled={}",
                    f.translate_x,
                    f.current_index,
                    f.cards.len()
                );
            }
        }
    }

    engine.stop();
    println!("state={:?}", engine.state());
}
