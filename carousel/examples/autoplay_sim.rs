// Example: adapter-driven autoplay with a simulated paging widget.
use carousel::{Carousel, CarouselOptions, ViewToken};

fn main() {
    let options = CarouselOptions::new(vec!["red", "green", "blue"], 320.0)
        .with_autoplay(true)
        .with_autoplay_delay_ms(Some(1000))
        .with_pagination(true)
        .with_on_snap_to_item(Some(|item: Option<&&str>| println!("snap -> {item:?}")))
        .with_get_current_index(Some(|index: i64| println!("index -> {index}")));

    let mut c = match Carousel::new(options) {
        Ok(c) => c,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };

    let mut now_ms = 0u64;
    while now_ms <= 6_000 {
        now_ms += 16;
        let Some(cmd) = c.tick(now_ms) else {
            continue;
        };
        println!("t={now_ms}ms scroll_to_index({}, animated={})", cmd.index, cmd.animated);

        // The widget animates, then reports the page that became viewable. Pages are offset by
        // one, so landing on `cmd.index` reports `cmd.index + 1`.
        let layout = c.item_layout(cmd.index + 1);
        c.on_scroll(layout.offset);
        if cmd.index + 1 >= c.len() {
            c.on_end_reached(now_ms);
        } else {
            c.on_viewable_items_changed(&[ViewToken::viewable(cmd.index + 1)], now_ms);
        }

        let dots: Vec<f32> = c.pagination_dots().iter().map(|d| d.intensity).collect();
        println!("  state={:?} dots={dots:?}", c.state());
    }

    c.teardown();
    println!("after teardown: tick={:?}", c.tick(now_ms + 10_000));
}
