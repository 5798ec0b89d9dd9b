use crate::*;

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use std::sync::Mutex;

use carousel::{Carousel, CarouselOptions};

fn controller_with_recorder() -> (Arc<Mutex<Vec<usize>>>, Controller<u64, ManualScheduler>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let options = CarouselOptions::new(3).with_on_change(Some(move |_: &Carousel, i: usize| {
        sink.lock().unwrap().push(i);
    }));
    let mut c = Controller::new(options, ManualScheduler::new());
    c.set_slide_width(Some(300.0));
    (calls, c)
}

/// Delivers pending frames on a 16 ms virtual clock until the animation settles.
fn run_frames<K>(c: &mut Controller<K, ManualScheduler>, mut now_ms: u64) -> u64 {
    while let Some(token) = c.pending_frame() {
        now_ms += 16;
        c.scheduler_mut().take();
        c.on_frame(token, now_ms);
    }
    now_ms
}

#[test]
fn mouse_swipe_commits_exactly_once() {
    let (calls, mut c) = controller_with_recorder();

    c.on_event(PointerEvent::MouseDown { x: 100.0 }, 0);
    c.on_event(PointerEvent::MouseMove { x: 50.0 }, 0);
    c.on_event(PointerEvent::MouseUp, 0);
    assert!(c.is_animating());
    assert!(c.pending_frame().is_some());

    run_frames(&mut c, 0);

    assert!(!c.is_animating());
    assert_eq!(c.carousel().committed_index(), 1);
    assert_eq!(*calls.lock().unwrap(), vec![1]);
}

#[test]
fn offsets_flow_back_while_running() {
    let (_, mut c) = controller_with_recorder();

    c.on_event(PointerEvent::MouseDown { x: 100.0 }, 0);
    c.on_event(PointerEvent::MouseMove { x: 40.0 }, 0);
    c.on_event(PointerEvent::MouseUp, 0);

    let token = c.pending_frame().unwrap();
    let off = c.on_frame(token, 100).unwrap();
    // end_offset = -60 + 300 = 240; offset = -60 - 240 * 0.4.
    assert!((off - (-156.0)).abs() < 1e-9);
    // The step scheduled its successor.
    assert!(c.pending_frame().is_some());
    assert_ne!(c.pending_frame(), Some(token));
}

#[test]
fn pointer_down_cancels_the_pending_frame() {
    let (calls, mut c) = controller_with_recorder();

    c.on_event(PointerEvent::MouseDown { x: 100.0 }, 0);
    c.on_event(PointerEvent::MouseMove { x: 40.0 }, 0);
    c.on_event(PointerEvent::MouseUp, 0);

    let token = c.pending_frame().unwrap();
    c.on_frame(token, 100);
    let in_flight = c.carousel().offset();
    let queued = c.pending_frame().unwrap();

    c.on_event(PointerEvent::MouseDown { x: 200.0 }, 110);
    assert_eq!(c.pending_frame(), None);
    assert_eq!(c.scheduler().canceled_count(), 1);
    assert!(!c.is_animating());
    // Continuity: the interrupted offset is the new drag's anchor.
    assert_eq!(c.carousel().offset(), in_flight);

    // The canceled callback was already queued; delivering it must change nothing.
    assert_eq!(c.on_frame(queued, 120), None);
    assert_eq!(c.carousel().offset(), in_flight);
    assert_eq!(c.carousel().committed_index(), 0);
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn mouse_leave_ends_the_interaction() {
    let (_, mut c) = controller_with_recorder();

    c.on_event(PointerEvent::MouseDown { x: 100.0 }, 0);
    c.on_event(PointerEvent::MouseMove { x: 40.0 }, 0);
    c.on_event(PointerEvent::MouseLeave, 0);
    assert!(!c.carousel().is_interacting());
    assert!(c.is_animating());

    run_frames(&mut c, 0);
    assert_eq!(c.carousel().committed_index(), 1);
}

#[test]
fn touch_swipe_commits_like_mouse() {
    let (calls, mut c) = controller_with_recorder();

    let start = PointerEvent::touch_start(&[100.0, 250.0]).unwrap();
    let moved = PointerEvent::touch_move(&[50.0]).unwrap();
    assert_eq!(start, PointerEvent::TouchStart { x: 100.0 });

    c.on_event(start, 0);
    c.on_event(moved, 0);
    c.on_event(PointerEvent::TouchEnd, 0);
    run_frames(&mut c, 0);

    assert_eq!(c.carousel().committed_index(), 1);
    assert_eq!(*calls.lock().unwrap(), vec![1]);
}

#[test]
fn empty_touch_lists_produce_no_event() {
    assert_eq!(PointerEvent::touch_start(&[]), None);
    assert_eq!(PointerEvent::touch_move(&[]), None);
    assert_eq!(first_touch_x(&[]), None);
    assert_eq!(first_touch_x(&[12.5, 90.0]), Some(12.5));
}

#[test]
fn click_passes_through_only_without_a_drag() {
    let clicks = Arc::new(Mutex::new(0usize));
    let sink = Arc::clone(&clicks);
    let options = CarouselOptions::new(3).with_on_click(Some(move |_: &Carousel| {
        *sink.lock().unwrap() += 1;
    }));
    let mut c = Controller::new(options, ManualScheduler::new());
    c.set_slide_width(Some(300.0));

    // Tap: down + up with no movement, then the browser-style click.
    c.on_event(PointerEvent::MouseDown { x: 100.0 }, 0);
    c.on_event(PointerEvent::MouseUp, 0);
    c.on_event(PointerEvent::Click, 0);
    assert_eq!(*clicks.lock().unwrap(), 1);

    // Swipe: the trailing click is suppressed.
    c.on_event(PointerEvent::MouseDown { x: 100.0 }, 10);
    c.on_event(PointerEvent::MouseMove { x: 40.0 }, 10);
    c.on_event(PointerEvent::MouseUp, 10);
    c.on_event(PointerEvent::Click, 10);
    assert_eq!(*clicks.lock().unwrap(), 1);
}

#[test]
fn programmatic_navigation_schedules_frames() {
    let (calls, mut c) = controller_with_recorder();

    c.next(0);
    assert!(c.is_animating());
    run_frames(&mut c, 0);
    assert_eq!(c.carousel().committed_index(), 1);

    c.prev(1000);
    run_frames(&mut c, 1000);
    assert_eq!(c.carousel().committed_index(), 0);

    assert_eq!(*calls.lock().unwrap(), vec![1, 0]);
}

#[test]
fn into_parts_cancels_the_pending_frame() {
    let (_, mut c) = controller_with_recorder();
    c.next(0);
    assert!(c.pending_frame().is_some());

    let (engine, scheduler) = c.into_parts();
    assert!(engine.is_transitioning());
    assert_eq!(scheduler.pending(), None);
    assert_eq!(scheduler.canceled_count(), 1);
}
