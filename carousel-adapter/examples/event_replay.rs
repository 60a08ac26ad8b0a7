use carousel::{CarouselOptions, KeyCommand, PageList};
use carousel_adapter::{Controller, HostEvent};

fn main() {
    // Example: replaying a recorded stream of host events.
    //
    // An adapter would:
    // - translate its toolkit's layout/drag/scroll/key callbacks into `HostEvent`s
    // - dispatch them in order
    // - apply any returned command to the real scroll container
    // - attach the pages in `carousel().window()` at their frames
    let pages: PageList<u32> = (0..6).collect();
    let mut c = Controller::new(pages, CarouselOptions::new().with_horizontal_padding(12.0));

    let events = [
        HostEvent::ContainerLayout { width: 424.0 },
        HostEvent::DragBegan,
        HostEvent::Scrolled { offset: 150.0 },
        HostEvent::Scrolled { offset: 230.0 },
        HostEvent::DragEnded {
            offset: 260.0,
            will_decelerate: true,
        },
        HostEvent::DecelerationEnded { offset: 400.0 },
        HostEvent::Key(KeyCommand::Next),
        HostEvent::ScrollAnimationEnded { offset: 800.0 },
        HostEvent::IndicatorTapped { index: 5 },
        HostEvent::ScrollAnimationEnded { offset: 2000.0 },
        HostEvent::Key(KeyCommand::Next),
    ];

    for event in events {
        let cmd = c.dispatch(event);
        println!(
            "{event:?} -> cmd={cmd:?} phase={:?} loaded={:?} host_offset={}",
            c.carousel().phase(),
            c.carousel().window().indexes(),
            c.host_offset()
        );
    }
}
