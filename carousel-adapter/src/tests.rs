use crate::*;

use alloc::vec;
use alloc::vec::Vec;
use carousel::{CarouselOptions, ItemLayout, PaginationType, ScrollCommand, ViewToken};

#[derive(Debug, Default)]
struct RecordingWidget {
    bindings: Vec<WidgetBinding>,
    commands: Vec<ScrollCommand>,
}

impl PagingWidget for RecordingWidget {
    fn bind(&mut self, binding: &WidgetBinding) {
        self.bindings.push(*binding);
    }

    fn scroll_to_index(&mut self, command: ScrollCommand) {
        self.commands.push(command);
    }
}

fn three_items() -> CarouselOptions<&'static str> {
    CarouselOptions::new(vec!["a", "b", "c"], 100.0)
}

#[test]
fn mount_binds_widget_with_paging_configuration() {
    let c: Controller<_, _> =
        Controller::mount(three_items().with_bounces(false), RecordingWidget::default()).unwrap();
    let w = c.widget();
    assert_eq!(w.bindings.len(), 1);
    let b = w.bindings[0];
    assert_eq!(b.item_count, 3);
    assert_eq!(b.item_width, 100.0);
    assert_eq!(b.snap_interval, 100.0);
    assert!(b.horizontal && b.paging_enabled);
    assert!(!b.bounces);
    assert_eq!(b.end_reached_threshold, 0.5);
    assert_eq!(b.scroll_event_throttle_ms, 32);
    assert_eq!(b.viewability.view_area_coverage_percent_threshold, 70);
    assert!(b.viewability.wait_for_interaction);
    assert_eq!(b.initial_scroll_index, 0);
    assert_eq!(
        b.layout.layout(2),
        ItemLayout {
            length: 100.0,
            offset: 100.0,
            index: 2
        }
    );
}

#[test]
fn autoplay_commands_reach_the_widget() {
    let mut c: Controller<_, _> =
        Controller::mount(three_items().with_autoplay(true), RecordingWidget::default()).unwrap();
    assert_eq!(c.tick(1000), None);
    assert_eq!(c.tick(2500), Some(ScrollCommand::animated(1)));
    assert_eq!(c.widget().commands, vec![ScrollCommand::animated(1)]);

    // The widget settles on page 2 and reports it.
    c.on_viewable_items_changed(&[ViewToken::viewable(2)], 2800);
    assert_eq!(c.carousel().current_index(), 1);
    assert_eq!(c.tick(5000), None);
    assert_eq!(c.tick(5300), Some(ScrollCommand::animated(2)));

    c.on_end_reached(5400);
    assert_eq!(c.tick(7900), Some(ScrollCommand::animated(0)));
    assert_eq!(c.widget().commands.len(), 3);
}

#[test]
fn unmount_stops_pending_autoplay() {
    let mut c: Controller<_, _> =
        Controller::mount(three_items().with_autoplay(true), RecordingWidget::default()).unwrap();
    c.tick(100);
    c.unmount();
    for now in [2500u64, 5000, 60_000] {
        assert_eq!(c.tick(now), None);
    }
    assert!(!c.on_scroll(50.0, 70_000));
    assert!(c.into_widget().commands.is_empty());
}

#[test]
fn scroll_offsets_are_throttled_for_the_indicator() {
    let mut c: Controller<_, _> =
        Controller::mount(three_items().with_pagination(true), RecordingWidget::default())
            .unwrap();
    assert!(c.on_scroll(10.0, 0));
    assert!(!c.on_scroll(20.0, 16));
    assert!(!c.on_scroll(30.0, 31));
    assert_eq!(c.carousel().scroll_offset(), 10.0);

    // The held offset is released once the window passes.
    c.tick(40);
    assert_eq!(c.carousel().scroll_offset(), 30.0);
    assert!(c.on_scroll(50.0, 80));
    assert_eq!(c.carousel().scroll_offset(), 50.0);
}

#[test]
fn throttle_passes_first_offset_and_flushes_last() {
    let mut t = ScrollThrottle::default();
    assert_eq!(t.interval_ms(), DEFAULT_SCROLL_EVENT_THROTTLE_MS);
    assert_eq!(t.push(1.0, 100), Some(1.0));
    assert_eq!(t.push(2.0, 110), None);
    assert_eq!(t.push(3.0, 120), None);
    assert_eq!(t.flush(120), None);
    assert_eq!(t.flush(132), Some(3.0));
    assert_eq!(t.flush(200), None);
    assert_eq!(t.push(4.0, 150), None);
    t.reset();
    assert_eq!(t.pending(), None);
    assert_eq!(t.push(5.0, 151), Some(5.0));
}

#[test]
fn end_reached_detector_fires_once_per_approach() {
    let mut d = EndReachedDetector::default();
    // 3 items of 100 with a 100 viewport: fires past offset 150.
    assert!(!d.on_scroll(100.0, 100.0, 300.0));
    assert!(d.on_scroll(160.0, 100.0, 300.0));
    assert!(!d.on_scroll(200.0, 100.0, 300.0));
    assert!(!d.on_scroll(0.0, 100.0, 300.0));
    assert!(d.on_scroll(200.0, 100.0, 300.0));
    assert!(!d.on_scroll(200.0, 0.0, 300.0));
}

#[test]
fn scroll_frames_drive_index_without_widget_callbacks() {
    let mut c: Controller<_, _> =
        Controller::mount(three_items(), RecordingWidget::default()).unwrap();
    // Nothing is reported before the first interaction.
    assert!(!c.on_scroll_frame(100.0, 100.0, 0).any());

    c.on_scroll_begin_drag();
    let t = c.on_scroll_frame(100.0, 100.0, 40);
    assert!(t.index_changed);
    assert_eq!(c.carousel().raw_current_index(), 1);
    assert!(!c.carousel().end_reached());

    let t = c.on_scroll_frame(200.0, 100.0, 80);
    assert!(t.end_reached_changed);
    assert!(c.carousel().end_reached());
    assert_eq!(c.carousel().scroll_offset(), 200.0);
}

#[test]
fn empty_data_renders_placeholder_without_indicator() {
    let c = Controller::mount(
        CarouselOptions::new(Vec::<&str>::new(), 120.0).with_pagination(true),
        RecordingWidget::default(),
    )
    .unwrap()
    .with_placeholder("nothing here");
    let frame = c.frame();
    assert!(frame.is_placeholder());
    assert!(frame.pagination().is_none());
    assert_eq!(
        frame,
        Frame::Placeholder {
            item_width: 120.0,
            content: Some(&"nothing here"),
        }
    );
}

#[test]
fn frame_lists_layouts_and_indicator() {
    let mut c: Controller<_, _> = Controller::mount(
        three_items()
            .with_pagination(true)
            .with_pagination_type(PaginationType::Circle)
            .with_pagination_color("#f00"),
        RecordingWidget::default(),
    )
    .unwrap();
    c.on_scroll(100.0, 0);
    let frame = c.frame();
    let Frame::Items {
        layouts,
        current_index,
        pagination,
    } = &frame
    else {
        panic!("expected items");
    };
    assert_eq!(layouts.len(), 3);
    assert_eq!(layouts[0].offset, -100.0);
    assert_eq!(*current_index, 0);
    let p = pagination.as_ref().unwrap();
    assert_eq!(p.kind, PaginationType::Circle);
    assert_eq!(p.color, "#f00");
    assert_eq!(p.dots.len(), 3);
    assert_eq!(p.dots[1].intensity, 1.0);
}

#[test]
fn for_each_item_pairs_items_with_layouts() {
    let c: Controller<_, _> =
        Controller::mount(three_items(), RecordingWidget::default()).unwrap();
    let mut seen = Vec::new();
    c.for_each_item(|item, layout| seen.push((*item, layout.index, layout.offset)));
    assert_eq!(seen, vec![("a", 0, -100.0), ("b", 1, 0.0), ("c", 2, 100.0)]);
}

#[test]
fn widget_can_be_borrowed() {
    let mut w = RecordingWidget::default();
    {
        let mut c: Controller<_, _> =
            Controller::mount(three_items().with_autoplay(true), &mut w).unwrap();
        c.tick(2500);
    }
    assert_eq!(w.bindings.len(), 1);
    assert_eq!(w.commands, vec![ScrollCommand::animated(1)]);
}

#[test]
fn invalid_width_fails_before_binding() {
    let mut w = RecordingWidget::default();
    let r: Result<Controller<_, _>, _> =
        Controller::mount(CarouselOptions::new(vec![1u8], 0.0), &mut w);
    assert!(r.is_err());
    assert!(w.bindings.is_empty());
}
