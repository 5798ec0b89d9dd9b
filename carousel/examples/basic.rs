// Example: minimal usage — a simulated mouse swipe driven by a manual clock.
use carousel::{Carousel, CarouselOptions};

fn main() {
    let mut c = Carousel::new(CarouselOptions::new(5));
    c.set_slide_width(Some(300.0));

    // Drag 80 px to the left and release.
    c.pointer_down(200.0);
    c.pointer_move(120.0);
    c.pointer_up(0);
    println!("released: offset={} target={:?}", c.offset(), c.next_slide_index());

    let mut now_ms = 0u64;
    while c.is_transitioning() {
        now_ms += 16;
        c.transition_step(now_ms);
        if now_ms % 80 == 0 {
            println!("t={now_ms} offset={:.1}", c.offset());
        }
    }

    println!("settled: index={} frame={:?}", c.committed_index(), c.frame());

    let mut slots = Vec::new();
    c.collect_visible_slots(&mut slots);
    for slot in &slots {
        println!("slot slide={:?} left={}%", slot.slide, slot.left_percent);
    }
}
