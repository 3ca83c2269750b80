use egui_bargraph::axis::{layout_y_axis, YAxisParams};
use egui_bargraph::geometry::max_axis_value;
use egui_bargraph::{
    AxisModel, BarFrame, BarGraphModel, BarModel, CanvasState, DrawCall, GraphError, Orientation,
    Point, RecordedColor, RecordingSurface, VerticalBarGraph,
};

const DEMO: [(f32, f32); 5] = [(0.0, 8.0), (1.0, 4.0), (2.0, 2.0), (3.0, 6.0), (4.0, 10.0)];

fn demo_model() -> BarGraphModel {
    let items = DEMO
        .into_iter()
        .map(|(x, y)| BarModel::new(Point::new(x, y)))
        .collect();
    let x_axis = AxisModel::builder()
        .label_data(|index| format!("B{index}"))
        .build();
    let y_axis = AxisModel::builder()
        .steps(5)
        .label_data(|index| (index * 20).to_string())
        .build();

    BarGraphModel::new(items, x_axis, y_axis)
}

fn wide_model(bars: usize) -> BarGraphModel {
    let items = (0..bars)
        .map(|i| BarModel::new(Point::new(i as f32, (i % 7 + 1) as f32)))
        .collect();

    BarGraphModel::new(items, AxisModel::default(), AxisModel::builder().steps(4).build())
}

fn render(model: &BarGraphModel, state: &mut CanvasState) -> (RecordingSurface, BarFrame) {
    let mut surface = RecordingSurface::new(400, 300);
    let frame = VerticalBarGraph::new(model)
        .render(&mut surface, state)
        .unwrap();

    (surface, frame)
}

#[test]
fn demo_axis_labels() {
    assert_eq!(max_axis_value(10.0, 5).unwrap(), 10);

    let (surface, frame) = render(&demo_model(), &mut CanvasState::new());
    let y_labels: Vec<&str> = frame
        .y_axis
        .as_ref()
        .unwrap()
        .ticks
        .iter()
        .map(|tick| tick.label.text.as_str())
        .collect();
    assert_eq!(y_labels, vec!["0", "20", "40", "60", "80", "100"]);

    let texts = surface.texts();
    assert!(texts.contains(&"B0"));
    assert!(texts.contains(&"100"));
}

#[test]
fn two_step_formatter_reads_value_ticks() {
    let surface = RecordingSurface::new(400, 300);
    let axis = AxisModel::builder()
        .steps(2)
        .label_data(|index| (index * 50).to_string())
        .build();
    let points: Vec<Point> = [0.0, 5.0, 10.0].map(|y| Point::new(0.0, y)).to_vec();

    let layout = layout_y_axis(
        &surface,
        &axis,
        &points,
        &YAxisParams {
            canvas_height: 300.0,
            y_start: 0.0,
            scroll_offset: 0.0,
            zoom_scale: 1.0,
            data_category_width: 0.0,
            bar_width: 30.0,
        },
    )
    .unwrap();

    let labels: Vec<&str> = layout.ticks.iter().map(|t| t.label.text.as_str()).collect();
    assert_eq!(labels, vec!["0", "50", "100"]);
}

#[test]
fn bars_sit_on_the_baseline_in_data_order() {
    let model = demo_model();
    let (surface, frame) = render(&model, &mut CanvasState::new());

    assert_eq!(frame.bars.len(), DEMO.len());
    let baseline = frame.x_axis.as_ref().unwrap().top;
    for (bar, (_, value)) in frame.bars.iter().zip(DEMO) {
        assert!((bar.offset.y + bar.height - baseline).abs() < 1e-3);
        assert!(bar.height > 0.0 || value == 0.0);
    }
    for pair in frame.bars.windows(2) {
        assert!((pair[1].offset.x - pair[0].offset.x - model.bar_style.step()).abs() < 1e-3);
    }

    // the tallest value reaches the highest bar
    let tallest = frame
        .bars
        .iter()
        .min_by(|a, b| a.offset.y.total_cmp(&b.offset.y))
        .unwrap();
    assert_eq!(tallest.index, 4);

    let polygons = surface
        .calls()
        .iter()
        .filter(|call| matches!(call, DrawCall::Polygon { .. }))
        .count();
    assert_eq!(polygons, DEMO.len());
}

#[test]
fn bars_are_drawn_before_mask_and_axes() {
    let (surface, _) = render(&demo_model(), &mut CanvasState::new());
    let calls = surface.calls();

    let last_polygon = calls
        .iter()
        .rposition(|call| matches!(call, DrawCall::Polygon { .. }))
        .unwrap();
    let white = RecordedColor {
        rgb: (255, 255, 255),
        alpha: 1.0,
    };
    let mask = calls
        .iter()
        .position(|call| matches!(call, DrawCall::Rect { color, filled: true, .. } if *color == white))
        .unwrap();
    let first_text = calls
        .iter()
        .position(|call| matches!(call, DrawCall::Text { .. }))
        .unwrap();

    assert!(last_polygon < mask);
    assert!(mask < first_text);
}

#[test]
fn tap_on_bar_top_selects_only_that_bar() {
    let model = demo_model();
    let mut state = CanvasState::new();
    let (_, frame) = render(&model, &mut state);

    for bar in &frame.bars {
        state.tap_at(bar.top_center(model.bar_style.bar_width));
        let (surface, tapped) = render(&model, &mut state);

        assert_eq!(tapped.selected, Some(bar.index));
        // highlight outline
        assert!(surface
            .calls()
            .iter()
            .any(|call| matches!(call, DrawCall::Rect { filled: false, .. })));
    }
}

#[test]
fn tap_between_bars_selects_nothing() {
    let model = demo_model();
    let mut state = CanvasState::new();
    let (_, frame) = render(&model, &mut state);

    let first = frame.bars[0].top_center(model.bar_style.bar_width);
    let gap = model.bar_style.step() / 2.0;
    state.tap_at(egui_bargraph::Offset::new(first.x + gap, first.y));

    let (_, tapped) = render(&model, &mut state);
    assert_eq!(tapped.selected, None);
}

#[test]
fn tap_below_baseline_selects_nothing() {
    let model = demo_model();
    let mut state = CanvasState::new();
    let (_, frame) = render(&model, &mut state);

    let baseline = frame.x_axis.as_ref().unwrap().top;
    let center = frame.bars[0].top_center(model.bar_style.bar_width);
    state.tap_at(egui_bargraph::Offset::new(center.x, baseline + 1.0));

    let (_, tapped) = render(&model, &mut state);
    assert_eq!(tapped.selected, None);
}

#[test]
fn drags_clamp_to_scroll_bounds() {
    let model = wide_model(20);
    let mut state = CanvasState::new();
    render(&model, &mut state);

    let max = state.max_scroll_offset;
    assert!(max > 0.0);

    state.scroll_by(-(max + 50.0));
    assert_eq!(state.scroll_offset, max);
    state.scroll_by(max + 50.0);
    assert_eq!(state.scroll_offset, 0.0);
}

#[test]
fn scrolling_moves_bars_left() {
    let model = wide_model(20);
    let mut state = CanvasState::new();
    let (_, before) = render(&model, &mut state);

    state.scroll_by(-60.0);
    state.release();
    let (_, after) = render(&model, &mut state);

    for (a, b) in before.bars.iter().zip(&after.bars) {
        assert!((a.offset.x - b.offset.x - 60.0).abs() < 1e-3);
        assert_eq!(a.offset.y, b.offset.y);
    }
}

#[test]
fn zooming_widens_bar_spacing_and_scroll_range() {
    let model = wide_model(20);
    let mut state = CanvasState::new();
    let (_, before) = render(&model, &mut state);
    let max_before = state.max_scroll_offset;

    state.zoom_by(2.0);
    let (_, after) = render(&model, &mut state);

    let spacing = |frame: &BarFrame| frame.bars[1].offset.x - frame.bars[0].offset.x;
    assert!((spacing(&after) - 2.0 * spacing(&before)).abs() < 1e-3);
    assert!(state.max_scroll_offset > max_before);
}

#[test]
fn empty_graph_draws_axes_only() {
    let model = BarGraphModel::new(vec![], AxisModel::default(), AxisModel::default());
    let (surface, frame) = render(&model, &mut CanvasState::new());

    assert!(frame.bars.is_empty());
    assert!(frame.y_axis.is_some());
    assert!(!surface
        .calls()
        .iter()
        .any(|call| matches!(call, DrawCall::Polygon { .. })));
}

#[test]
fn horizontal_graphs_are_rejected() {
    let model = demo_model().orientation(Orientation::Horizontal);
    let mut surface = RecordingSurface::new(400, 300);

    let err = VerticalBarGraph::new(&model)
        .render(&mut surface, &mut CanvasState::new())
        .unwrap_err();

    assert_eq!(err, GraphError::UnsupportedOrientation(Orientation::Horizontal));
    assert!(surface.calls().is_empty());
}

#[test]
fn zero_y_steps_is_a_config_error() {
    let mut model = demo_model();
    model.y_axis = model.y_axis.with_steps(0);
    let mut surface = RecordingSurface::new(400, 300);

    let err = VerticalBarGraph::new(&model)
        .render(&mut surface, &mut CanvasState::new())
        .unwrap_err();

    assert!(matches!(err, GraphError::InvalidAxisConfig(_)));
}
