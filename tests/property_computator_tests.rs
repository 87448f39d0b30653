use chart_viewport::core::{ChartComputator, Padding, Viewport};
use proptest::prelude::*;

fn computator(maximum: Viewport, current: Viewport) -> ChartComputator {
    let mut computator = ChartComputator::new();
    computator.set_content_rect(1000.0, 500.0, Padding::default());
    computator.set_maximum_viewport(maximum);
    computator.set_current_viewport(current);
    computator
}

fn tolerance(viewport: Viewport) -> f64 {
    1e-9 * (1.0 + viewport.left.abs().max(viewport.right.abs()).max(viewport.top.abs()))
}

proptest! {
    #[test]
    fn pan_keeps_size_and_stays_inside_maximum(
        max_left in -1_000.0f64..1_000.0,
        max_bottom in -1_000.0f64..1_000.0,
        max_width in 1.0f64..1_000.0,
        max_height in 1.0f64..1_000.0,
        width_fraction in 0.06f64..1.0,
        height_fraction in 0.06f64..1.0,
        offset_fraction_x in 0.0f64..1.0,
        offset_fraction_y in 0.0f64..1.0,
        pan_x in -5_000.0f64..5_000.0,
        pan_y in -5_000.0f64..5_000.0
    ) {
        let maximum = Viewport::new(
            max_left,
            max_bottom + max_height,
            max_left + max_width,
            max_bottom,
        );
        let width = max_width * width_fraction;
        let height = max_height * height_fraction;
        let left = max_left + (max_width - width) * offset_fraction_x;
        let bottom = max_bottom + (max_height - height) * offset_fraction_y;
        let mut computator = computator(
            maximum,
            Viewport::new(left, bottom + height, left + width, bottom),
        );

        let before = computator.current_viewport();
        computator.set_viewport_top_left(before.left + pan_x, before.top + pan_y);
        let after = computator.current_viewport();
        let eps = tolerance(maximum);

        prop_assert!((after.width() - before.width()).abs() <= eps);
        prop_assert!((after.height() - before.height()).abs() <= eps);
        prop_assert!(after.left >= maximum.left - eps);
        prop_assert!(after.right <= maximum.right + eps);
        prop_assert!(after.bottom >= maximum.bottom - eps);
        prop_assert!(after.top <= maximum.top + eps);
    }

    #[test]
    fn rescale_preserves_focal_fraction(
        left in -1_000.0f64..1_000.0,
        bottom in -1_000.0f64..1_000.0,
        width in 0.5f64..1_000.0,
        height in 0.5f64..1_000.0,
        focal_fraction_x in 0.01f64..0.99,
        focal_fraction_y in 0.01f64..0.99,
        factor in 0.05f64..4.0
    ) {
        let viewport = Viewport::new(left, bottom + height, left + width, bottom);
        let focal_x = left + width * focal_fraction_x;
        let focal_y = bottom + height * focal_fraction_y;

        let rescaled = viewport.rescaled_around(focal_x, focal_y, width * factor, height * factor);

        let before_x = (focal_x - viewport.left) / viewport.width();
        let after_x = (focal_x - rescaled.left) / rescaled.width();
        let before_y = (focal_y - viewport.bottom) / viewport.height();
        let after_y = (focal_y - rescaled.bottom) / rescaled.height();
        prop_assert!((before_x - after_x).abs() <= 1e-6);
        prop_assert!((before_y - after_y).abs() <= 1e-6);
    }

    #[test]
    fn screen_round_trip_stays_within_one_pixel(
        max_left in -1_000.0f64..1_000.0,
        max_width in 1.0f64..1_000.0,
        max_height in 1.0f64..1_000.0,
        zoom in 1.0f64..20.0,
        point_fraction_x in 0.0f64..0.999,
        point_fraction_y in 0.001f64..1.0
    ) {
        let maximum = Viewport::new(max_left, max_height, max_left + max_width, 0.0);
        let current = Viewport::new(
            max_left,
            max_height / zoom,
            max_left + max_width / zoom,
            0.0,
        );
        let computator = computator(maximum, current);
        let visible = computator.visible_viewport();
        let x = visible.left + visible.width() * point_fraction_x;
        let y = visible.bottom + visible.height() * point_fraction_y;

        let (data_x, data_y) = computator
            .to_data_point(computator.to_screen_x(x), computator.to_screen_y(y))
            .expect("point maps inside content rect");
        prop_assert!((data_x - x).abs() <= visible.width() / 1000.0);
        prop_assert!((data_y - y).abs() <= visible.height() / 500.0);
    }
}
