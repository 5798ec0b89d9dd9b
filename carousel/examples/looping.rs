// Example: loop policy — the window wraps around the seam and next()/prev() never clamp.
use carousel::{Carousel, CarouselOptions, resolve};

fn main() {
    let mut c = Carousel::new(CarouselOptions::new(5).with_looping(true).with_animate(false));

    for _ in 0..7 {
        c.next(0);
        print!("index={} window=[", c.active_index());
        let mut first = true;
        c.for_each_visible_slot(|slot| {
            if !first {
                print!(", ");
            }
            first = false;
            match slot.slide {
                Some(i) => print!("{i}"),
                None => print!("·"),
            }
        });
        println!("]");
    }

    // The same math is available as pure functions.
    println!("window at seam: {:?}", resolve::visible_window(5, 4, 3, true));
    println!("window at seam (no loop): {:?}", resolve::visible_window(5, 0, 3, false));
}
