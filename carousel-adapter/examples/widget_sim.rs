// Example: a fake paging widget that only reports scroll offsets.
use carousel::{CarouselOptions, ScrollCommand};
use carousel_adapter::{Controller, Frame, PagingWidget, WidgetBinding};

#[derive(Default)]
struct FakeWidget {
    item_width: f32,
    offset: f32,
    target: Option<f32>,
}

impl PagingWidget for FakeWidget {
    fn bind(&mut self, binding: &WidgetBinding) {
        println!("bind: {binding:?}");
        self.item_width = binding.item_width;
    }

    fn scroll_to_index(&mut self, command: ScrollCommand) {
        // Page `i` is reached at the offset of layout item `i + 1`.
        self.target = Some(self.item_width * command.index as f32);
    }
}

impl FakeWidget {
    /// Moves a fixed step towards the target each frame.
    fn step(&mut self) -> Option<f32> {
        let target = self.target?;
        let step = self.item_width / 8.0;
        if (target - self.offset).abs() <= step {
            self.offset = target;
            self.target = None;
        } else if target > self.offset {
            self.offset += step;
        } else {
            self.offset -= step;
        }
        Some(self.offset)
    }
}

fn main() {
    let options = CarouselOptions::new(vec![1, 2, 3, 4], 200.0)
        .with_autoplay(true)
        .with_autoplay_delay_ms(Some(800))
        .with_pagination(true);
    let mut c: Controller<i32, FakeWidget> = match Controller::mount(options, FakeWidget::default())
    {
        Ok(c) => c,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };

    let mut now_ms = 0u64;
    while now_ms < 5_000 {
        now_ms += 16;
        if let Some(cmd) = c.tick(now_ms) {
            println!("t={now_ms}ms autoplay -> {cmd:?}");
        }
        if let Some(offset) = c.widget_mut().step() {
            c.on_scroll_frame(offset, 200.0, now_ms);
        }
        if now_ms % 400 == 0 {
            if let Frame::Items {
                current_index,
                pagination,
                ..
            } = c.frame()
            {
                let dots: Vec<f32> = pagination
                    .map(|p| p.dots.iter().map(|d| d.intensity).collect())
                    .unwrap_or_default();
                println!("t={now_ms}ms index={current_index} dots={dots:?}");
            }
        }
    }

    c.unmount();
}
