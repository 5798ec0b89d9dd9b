// Example: controller-driven swipe without holding any UI objects.
//
// An adapter would:
// - translate platform mouse/touch events into PointerEvent values
// - implement FrameScheduler on top of its frame callback (e.g. requestAnimationFrame)
// - call on_frame(token, now_ms) when the callback fires
// - apply the returned offset to the rendered slide window
use carousel::CarouselOptions;
use carousel_adapter::{Controller, ManualScheduler, PointerEvent};

fn main() {
    let options = CarouselOptions::new(5)
        .with_looping(true)
        .with_easing(carousel::smooth_step)
        .with_on_change(Some(|_: &carousel::Carousel, i: usize| {
            println!("on_change: index={i}");
        }));
    let mut c = Controller::new(options, ManualScheduler::new());
    c.set_slide_width(Some(300.0));

    c.on_event(PointerEvent::MouseDown { x: 250.0 }, 0);
    c.on_event(PointerEvent::MouseMove { x: 180.0 }, 8);
    c.on_event(PointerEvent::MouseUp, 16);

    let mut now_ms = 16u64;
    while let Some(token) = c.pending_frame() {
        now_ms += 16;
        c.scheduler_mut().take();
        if let Some(off) = c.on_frame(token, now_ms) {
            if now_ms % 80 == 0 {
                println!("t={now_ms} off={off:.1}");
            }
        }
    }

    println!(
        "done: index={} scheduled={} canceled={}",
        c.carousel().committed_index(),
        c.scheduler().scheduled_count(),
        c.scheduler().canceled_count()
    );
}
