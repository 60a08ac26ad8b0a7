use carousel::{Carousel, CarouselOptions, KeyCommand, LifecycleLog, PageList};

fn main() {
    // Example: a five-page carousel driven by a simulated host.
    let pages: PageList<String> = (1..=5).map(|i| format!("page-{i}")).collect();
    let mut c = Carousel::with_delegate(pages, LifecycleLog::new(), CarouselOptions::new());

    // The first layout pass tells the carousel how wide a page is.
    let cmd = c.set_page_width(320.0);
    println!("layout: cmd={cmd:?} loaded={:?}", c.window().indexes());

    // A swipe: the host reports offsets while dragging, then where it came to rest.
    c.on_drag_begin();
    for offset in [40.0, 120.0, 170.0, 240.0] {
        c.on_scroll(offset);
        println!(
            "scroll {offset}: current={:?} loaded={:?}",
            c.current_page(),
            c.window().indexes()
        );
    }
    c.on_drag_end(260.0, true);
    c.on_deceleration_end(320.0);
    println!("settled: {:?}", c.phase());

    // Keyboard and explicit navigation return animated scroll commands.
    println!("next: {:?}", c.on_key(KeyCommand::Next));
    println!("jump to 4: {:?}", c.load_view(4));
    println!("past the end: {:?}", c.on_key(KeyCommand::Next));

    for page in c.window().iter() {
        println!("  {} at {:?}", page.page, page.frame);
    }
    println!("hooks: {:?}", c.delegate().events());
}
