use gap_chart::api::{
    BAR_POSITION_IN_ROW, DEFAULT_RIGHT_MARGIN_PX, GapChartConfig, LayoutServices,
    SCROLL_RIGHT_MARGIN_PX, SCROLLED_BAR_POSITION_IN_ROW, SCROLLED_ROWS_CONTAINER_WIDTH_PX, Frame,
    apply_scroll_policy, layout_frame, resolve_format_info,
};
use gap_chart::core::{CategoricalDataset, ValueSeries, Viewport};

fn frame(width: u32) -> Frame {
    let dataset = CategoricalDataset::new(
        vec!["Team morale".to_owned(), "Tooling".to_owned()],
        vec![
            ValueSeries::new("2015", "Score", vec![0.4, 0.7]),
            ValueSeries::new("2016", "Score", vec![0.5, 0.6]),
        ],
    );
    let format_info = resolve_format_info(&dataset, None, Some("0%"));
    layout_frame(
        &dataset,
        Viewport::new(width, 600),
        &format_info,
        &GapChartConfig::default(),
        &LayoutServices::new(),
    )
    .expect("frame layout")
}

#[test]
fn content_that_fits_does_not_scroll() {
    let (frame, scroll) = apply_scroll_policy(frame(900), 300.0, 300.0).expect("scroll policy");

    assert!(!scroll.vertical);
    assert!(!scroll.horizontal);
    assert_eq!(scroll.right_margin, DEFAULT_RIGHT_MARGIN_PX);
    assert_eq!(scroll.rows_container_width, None);
    assert_eq!(frame.bar_position, BAR_POSITION_IN_ROW);
}

#[test]
fn one_pixel_overflow_enables_vertical_scroll() {
    let (frame, scroll) = apply_scroll_policy(frame(900), 301.0, 300.0).expect("scroll policy");

    assert!(scroll.vertical);
    assert_eq!(scroll.right_margin, SCROLL_RIGHT_MARGIN_PX);
    assert_eq!(frame.right_margin, SCROLL_RIGHT_MARGIN_PX);
    assert_eq!(scroll.content_height, 301.0);
    assert_eq!(scroll.available_height, 300.0);
}

#[test]
fn bar_floor_enables_horizontal_scroll() {
    let (frame, scroll) = apply_scroll_policy(frame(180), 100.0, 300.0).expect("scroll policy");

    assert!(scroll.horizontal);
    assert!(!scroll.vertical);
    assert_eq!(scroll.rows_container_width, Some(SCROLLED_ROWS_CONTAINER_WIDTH_PX));
    assert_eq!(frame.bar_position, SCROLLED_BAR_POSITION_IN_ROW);
}

#[test]
fn vertical_margin_can_trigger_horizontal_scroll() {
    let base = frame(900);
    let fitting_width =
        base.left_margin + base.max_label_width + DEFAULT_RIGHT_MARGIN_PX + 160.0;
    let width = fitting_width.ceil() as u32;

    let (_, without_overflow) =
        apply_scroll_policy(frame(width), 100.0, 300.0).expect("scroll policy");
    assert!(!without_overflow.horizontal);

    let (_, with_overflow) =
        apply_scroll_policy(frame(width), 400.0, 300.0).expect("scroll policy");
    assert!(with_overflow.vertical);
    assert!(with_overflow.horizontal);
}
