// Example: composing the engine with demo slide content.
//
// Slide content is opaque to the engine; this demo generates an endless stream of random
// colors (a pull-based lazy sequence), takes five of them as slides, and keys the carousel
// by the color values so the render list stays stable if the slides are reordered.
use carousel::CarouselOptions;
use carousel_adapter::{Controller, ManualScheduler, PointerEvent};

/// Infinite color generator. Deterministic LCG so the demo output is reproducible.
struct ColorStream(u64);

impl Iterator for ColorStream {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut byte = |state: &mut u64| {
            *state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (*state >> 33) as u8
        };
        let (r, g, b) = (byte(&mut self.0), byte(&mut self.0), byte(&mut self.0));
        Some(format!("rgb({r}, {g}, {b})"))
    }
}

fn main() {
    let colors: Vec<String> = ColorStream(42).take(5).collect();
    let keys: Vec<String> = colors.iter().map(|c| format!("color-{c}")).collect();

    let options = CarouselOptions::new_with_key(colors.len(), move |i| keys[i].clone());
    let mut c = Controller::new(options, ManualScheduler::new());
    c.set_slide_width(Some(300.0));

    // A tap passes the click through; a swipe suppresses it.
    c.on_event(PointerEvent::MouseDown { x: 150.0 }, 0);
    c.on_event(PointerEvent::MouseUp, 0);
    println!("tap passes through: {}", c.carousel().click());

    c.on_event(PointerEvent::MouseDown { x: 150.0 }, 10);
    c.on_event(PointerEvent::MouseMove { x: 80.0 }, 18);
    c.on_event(PointerEvent::MouseUp, 26);
    println!("swipe passes through: {}", c.carousel().click());

    let mut now_ms = 26u64;
    while let Some(token) = c.pending_frame() {
        now_ms += 16;
        c.scheduler_mut().take();
        c.on_frame(token, now_ms);
    }

    let active = c.carousel().active_index();
    println!("active slide: {} ({})", active, colors[active]);

    let mut slots = Vec::new();
    c.carousel().collect_visible_slots_keyed(&mut slots);
    for slot in &slots {
        match (&slot.key, slot.slide) {
            (Some(key), Some(i)) => {
                println!("{key}: {} at {}%", colors[i], slot.left_percent)
            }
            _ => println!("(empty cell at {}%)", slot.left_percent),
        }
    }
}
