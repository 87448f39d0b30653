use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_abs_diff_eq;
use chart_viewport::api::{ChartEngine, ChartEngineConfig, ChartEvent};
use chart_viewport::core::{Padding, SelectedValue, SelectedValueKind};
use chart_viewport::interaction::{SelectionMode, TouchEvent};
use chart_viewport::render::{Line, LineChartRenderer, PieChartRenderer, PointValue, SliceValue};

const MIDDLE_POINT: SelectedValue = SelectedValue::new(0, 1, SelectedValueKind::Line);

type EventLog = Rc<RefCell<Vec<ChartEvent>>>;

fn line_engine(mode: SelectionMode) -> (ChartEngine<LineChartRenderer>, EventLog) {
    let renderer = LineChartRenderer::new(vec![Line::new(vec![
        PointValue::new(0.0, 0.0),
        PointValue::new(50.0, 50.0),
        PointValue::new(100.0, 100.0),
    ])]);
    let config = ChartEngineConfig::default().with_selection_mode(mode);
    let mut engine = ChartEngine::new(renderer, config).expect("engine init");
    engine.on_size_changed(1000.0, 500.0, Padding::default());

    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    engine.set_listener(Some(Box::new(move |event| sink.borrow_mut().push(event))));
    (engine, events)
}

fn tap(engine: &mut ChartEngine<LineChartRenderer>, x: f64, y: f64, time_ms: f64) {
    engine.handle_touch(&TouchEvent::down(x, y, time_ms));
    engine.handle_touch(&TouchEvent::up(x, y, time_ms + 50.0));
}

#[test]
fn point_overdraw_shrinks_the_content_rect() {
    let (engine, _) = line_engine(SelectionMode::Momentary);
    let rect = engine.content_rect();
    assert_eq!((rect.left, rect.top, rect.right, rect.bottom), (10.0, 10.0, 990.0, 490.0));
    assert_abs_diff_eq!(engine.computator().to_screen_x(50.0), 500.0, epsilon = 1e-9);
    assert_abs_diff_eq!(engine.computator().to_screen_y(50.0), 250.0, epsilon = 1e-9);
}

#[test]
fn momentary_taps_notify_every_time_and_release_the_highlight() {
    let (mut engine, events) = line_engine(SelectionMode::Momentary);

    assert!(engine.handle_touch(&TouchEvent::down(503.0, 248.0, 0.0)));
    assert_eq!(engine.selected_value(), MIDDLE_POINT);
    assert!(engine.handle_touch(&TouchEvent::up(503.0, 248.0, 50.0)));
    assert!(!engine.selected_value().is_set());

    tap(&mut engine, 500.0, 250.0, 1_000.0);
    assert_eq!(
        events.borrow().as_slice(),
        &[
            ChartEvent::ValueSelected(MIDDLE_POINT),
            ChartEvent::ValueSelected(MIDDLE_POINT),
        ]
    );
}

#[test]
fn persistent_taps_notify_once_until_deselected() {
    let (mut engine, events) = line_engine(SelectionMode::Persistent);

    tap(&mut engine, 500.0, 250.0, 0.0);
    assert_eq!(engine.selected_value(), MIDDLE_POINT);
    tap(&mut engine, 500.0, 250.0, 1_000.0);
    tap(&mut engine, 800.0, 400.0, 2_000.0);
    assert!(!engine.selected_value().is_set());
    tap(&mut engine, 500.0, 250.0, 3_000.0);

    assert_eq!(
        events.borrow().as_slice(),
        &[
            ChartEvent::ValueSelected(MIDDLE_POINT),
            ChartEvent::ValueDeselected,
            ChartEvent::ValueSelected(MIDDLE_POINT),
        ]
    );
}

#[test]
fn sliding_off_the_value_cancels_the_tap() {
    let (mut engine, events) = line_engine(SelectionMode::Momentary);

    engine.handle_touch(&TouchEvent::down(500.0, 250.0, 0.0));
    assert!(engine.handle_touch(&TouchEvent::moved(700.0, 250.0, 16.0)));
    assert!(!engine.selected_value().is_set());
    engine.handle_touch(&TouchEvent::up(700.0, 250.0, 500.0));

    assert!(events.borrow().is_empty());
}

#[test]
fn cancel_drops_the_held_value_silently() {
    let (mut engine, events) = line_engine(SelectionMode::Momentary);

    engine.handle_touch(&TouchEvent::down(500.0, 250.0, 0.0));
    assert!(engine.handle_touch(&TouchEvent::cancel(10.0)));
    assert!(!engine.selected_value().is_set());
    assert!(events.borrow().is_empty());
}

#[test]
fn programmatic_selection_is_idempotent() {
    let (mut engine, events) = line_engine(SelectionMode::Persistent);

    assert!(engine.select_value(MIDDLE_POINT));
    assert!(!engine.select_value(MIDDLE_POINT));
    assert!(engine.clear_selection());
    assert!(!engine.clear_selection());

    assert_eq!(
        events.borrow().as_slice(),
        &[ChartEvent::ValueSelected(MIDDLE_POINT), ChartEvent::ValueDeselected]
    );
}

#[test]
fn data_change_and_mode_switch_clear_the_selection() {
    let (mut engine, _) = line_engine(SelectionMode::Persistent);

    tap(&mut engine, 500.0, 250.0, 0.0);
    assert!(engine.selected_value().is_set());
    engine.renderer_mut().lines[0].points.push(PointValue::new(200.0, 0.0));
    engine.data_changed();
    assert!(!engine.selected_value().is_set());
    assert_eq!(engine.maximum_viewport().right, 200.0);

    engine.select_value(MIDDLE_POINT);
    engine.set_selection_mode(SelectionMode::Momentary);
    assert_eq!(engine.selection_mode(), SelectionMode::Momentary);
    assert!(!engine.selected_value().is_set());
}

#[test]
fn disabled_value_touch_never_selects() {
    let renderer = LineChartRenderer::new(vec![Line::new(vec![
        PointValue::new(0.0, 0.0),
        PointValue::new(50.0, 50.0),
        PointValue::new(100.0, 100.0),
    ])]);
    let mut config = ChartEngineConfig::default();
    config.interaction.value_touch_enabled = false;
    let mut engine = ChartEngine::new(renderer, config).expect("engine init");
    engine.on_size_changed(1000.0, 500.0, Padding::default());

    engine.handle_touch(&TouchEvent::down(500.0, 250.0, 0.0));
    assert!(!engine.selected_value().is_set());
}

#[test]
fn pie_tap_selects_the_slice_under_the_finger() {
    let renderer = PieChartRenderer::new(vec![SliceValue::new(1.0); 4]);
    let mut engine =
        ChartEngine::new(renderer, ChartEngineConfig::default()).expect("engine init");
    engine.on_size_changed(200.0, 200.0, Padding::default());

    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    engine.set_listener(Some(Box::new(move |event| sink.borrow_mut().push(event))));

    engine.handle_touch(&TouchEvent::down(65.0, 135.0, 0.0));
    engine.handle_touch(&TouchEvent::up(65.0, 135.0, 50.0));
    engine.set_rotation_degrees(90.0);
    engine.handle_touch(&TouchEvent::down(65.0, 135.0, 1_000.0));
    engine.handle_touch(&TouchEvent::up(65.0, 135.0, 1_050.0));

    assert_eq!(
        events.borrow().as_slice(),
        &[
            ChartEvent::ValueSelected(SelectedValue::new(1, 1, SelectedValueKind::None)),
            ChartEvent::ValueSelected(SelectedValue::new(0, 0, SelectedValueKind::None)),
        ]
    );
}
