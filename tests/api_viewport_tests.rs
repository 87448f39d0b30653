use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_abs_diff_eq;
use chart_viewport::ChartError;
use chart_viewport::api::{ChartEngine, ChartEngineConfig, ChartEvent};
use chart_viewport::core::{Padding, Viewport, ZoomType};
use chart_viewport::render::NullRenderer;

fn engine(config: ChartEngineConfig) -> ChartEngine<NullRenderer> {
    let renderer = NullRenderer::with_maximum_viewport(Viewport::new(0.0, 100.0, 100.0, 0.0));
    let mut engine = ChartEngine::new(renderer, config).expect("engine init");
    engine.on_size_changed(1000.0, 500.0, Padding::default());
    engine
}

fn recorded(engine: &mut ChartEngine<NullRenderer>) -> Rc<RefCell<Vec<ChartEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    engine.set_listener(Some(Box::new(move |event| sink.borrow_mut().push(event))));
    events
}

#[test]
fn new_engine_starts_fully_zoomed_out() {
    let engine = engine(ChartEngineConfig::default());
    assert_eq!(engine.maximum_viewport(), Viewport::new(0.0, 100.0, 100.0, 0.0));
    assert_eq!(engine.current_viewport(), engine.maximum_viewport());
    assert_eq!(engine.visible_viewport(), engine.current_viewport());
    assert_eq!(engine.zoom_level(), 1.0);
}

#[test]
fn current_viewport_is_clipped_and_notified_once() {
    let mut engine = engine(ChartEngineConfig::default());
    let events = recorded(&mut engine);

    engine
        .set_current_viewport(Viewport::new(-20.0, 60.0, 40.0, 10.0))
        .expect("set viewport");
    assert_eq!(engine.current_viewport(), Viewport::new(0.0, 60.0, 40.0, 10.0));
    assert_eq!(
        events.borrow().as_slice(),
        &[ChartEvent::ViewportChanged(Viewport::new(0.0, 60.0, 40.0, 10.0))]
    );

    engine
        .set_current_viewport(Viewport::new(0.0, 60.0, 40.0, 10.0))
        .expect("same viewport");
    assert_eq!(events.borrow().len(), 1);
}

#[test]
fn non_finite_viewports_are_rejected() {
    let mut engine = engine(ChartEngineConfig::default());
    let err = engine
        .set_current_viewport(Viewport::new(f64::NAN, 1.0, 2.0, 0.0))
        .expect_err("nan must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = engine
        .set_maximum_viewport(Viewport::new(0.0, f64::INFINITY, 2.0, 0.0))
        .expect_err("infinite must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert_eq!(engine.maximum_viewport(), Viewport::new(0.0, 100.0, 100.0, 0.0));
}

#[test]
fn max_zoom_limits_how_small_the_viewport_gets() {
    let mut engine = engine(ChartEngineConfig::default().with_max_zoom(10.0));
    engine
        .set_current_viewport(Viewport::new(50.0, 50.0, 51.0, 49.0))
        .expect("set viewport");
    let current = engine.current_viewport();
    assert_abs_diff_eq!(current.width(), 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(current.height(), 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(engine.zoom_level(), 10.0, epsilon = 1e-9);

    engine.set_max_zoom(0.5);
    assert_eq!(engine.max_zoom(), 1.0);
    assert_eq!(engine.current_viewport(), engine.maximum_viewport());
}

#[test]
fn zoom_level_centres_on_point_and_respects_bounds() {
    let mut engine = engine(ChartEngineConfig::default());

    engine.set_zoom_level(50.0, 50.0, 4.0);
    assert_eq!(engine.current_viewport(), Viewport::new(37.5, 62.5, 62.5, 37.5));

    engine.set_zoom_level(5.0, 5.0, 4.0);
    assert_eq!(engine.current_viewport(), Viewport::new(0.0, 25.0, 25.0, 0.0));

    engine.set_zoom_level(50.0, 50.0, 1_000.0);
    assert_abs_diff_eq!(engine.current_viewport().width(), 5.0, epsilon = 1e-9);
}

#[test]
fn horizontal_zoom_type_keeps_vertical_extent() {
    let mut engine = engine(ChartEngineConfig::default().with_zoom_type(ZoomType::Horizontal));
    engine.set_zoom_level(50.0, 50.0, 4.0);
    assert_eq!(engine.current_viewport(), Viewport::new(37.5, 100.0, 62.5, 0.0));
}

#[test]
fn move_to_centres_without_resizing() {
    let mut engine = engine(ChartEngineConfig::default());
    engine.set_zoom_level(5.0, 5.0, 4.0);

    engine.move_to(90.0, 90.0);
    assert_eq!(engine.current_viewport(), Viewport::new(75.0, 100.0, 100.0, 75.0));

    engine.move_to(150.0, 50.0);
    assert_eq!(engine.current_viewport(), Viewport::new(75.0, 100.0, 100.0, 75.0));

    engine.move_to(50.0, 50.0);
    assert_eq!(engine.current_viewport(), Viewport::new(37.5, 62.5, 62.5, 37.5));
}

#[test]
fn animated_viewport_lands_exactly_on_target() {
    let mut engine = engine(ChartEngineConfig::default());
    let events = recorded(&mut engine);
    let target = Viewport::new(50.0, 100.0, 100.0, 50.0);

    engine
        .set_current_viewport_animated(target, 300.0)
        .expect("start animation");
    assert!(engine.is_animating());

    assert!(engine.tick(1_000.0));
    assert_eq!(engine.current_viewport(), engine.maximum_viewport());

    assert!(engine.tick(1_150.0));
    let halfway = engine.current_viewport();
    assert_abs_diff_eq!(halfway.left, 37.5, epsilon = 1e-9);
    assert_abs_diff_eq!(halfway.bottom, 37.5, epsilon = 1e-9);

    assert!(engine.tick(1_300.0));
    assert_eq!(engine.current_viewport(), target);
    assert!(!engine.tick(1_316.0));
    assert!(!engine.is_animating());

    let changes = events
        .borrow()
        .iter()
        .filter(|event| matches!(event, ChartEvent::ViewportChanged(_)))
        .count();
    assert_eq!(changes, 2);
}

#[test]
fn reset_viewports_zooms_fully_out() {
    let mut engine = engine(ChartEngineConfig::default());
    engine.set_zoom_level(20.0, 20.0, 5.0);
    assert!(engine.zoom_level() > 1.0);

    engine.reset_viewports();
    assert_eq!(engine.current_viewport(), engine.maximum_viewport());
}

#[test]
fn content_rect_insets_accumulate_until_resize() {
    let renderer = NullRenderer::with_maximum_viewport(Viewport::new(0.0, 100.0, 100.0, 0.0));
    let mut engine =
        ChartEngine::new(renderer, ChartEngineConfig::default()).expect("engine init");

    engine.on_size_changed(1000.0, 500.0, Padding::uniform(10.0));
    let rect = engine.content_rect();
    assert_eq!((rect.left, rect.top, rect.right, rect.bottom), (10.0, 10.0, 990.0, 490.0));

    engine.inset_content_rect(30.0, 0.0, 0.0, 20.0);
    engine.inset_content_rect(5.0, 0.0, 0.0, 0.0);
    let rect = engine.content_rect();
    assert_eq!((rect.left, rect.bottom), (45.0, 470.0));

    engine.data_changed();
    assert_eq!(engine.content_rect(), rect);

    engine.on_size_changed(1000.0, 500.0, Padding::uniform(10.0));
    assert_eq!(engine.content_rect().left, 10.0);
}

#[test]
fn listener_given_at_construction_hears_data_changes() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    let renderer = NullRenderer::with_maximum_viewport(Viewport::new(0.0, 100.0, 100.0, 0.0));
    let mut engine = ChartEngine::with_listener(
        renderer,
        ChartEngineConfig::default(),
        Box::new(move |event| sink.borrow_mut().push(event)),
    )
    .expect("engine init");
    engine.on_size_changed(1000.0, 500.0, Padding::default());

    engine.renderer_mut().maximum_viewport = Some(Viewport::new(0.0, 50.0, 200.0, -50.0));
    engine.data_changed();
    assert_eq!(
        events.borrow().as_slice(),
        &[ChartEvent::ViewportChanged(Viewport::new(0.0, 50.0, 200.0, -50.0))]
    );

    engine.set_viewport_calculation_enabled(false);
    engine.renderer_mut().maximum_viewport = Some(Viewport::new(0.0, 10.0, 10.0, 0.0));
    engine.data_changed();
    assert_eq!(engine.maximum_viewport(), Viewport::new(0.0, 50.0, 200.0, -50.0));
    assert_eq!(events.borrow().len(), 1);
}
