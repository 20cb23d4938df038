//! Tests for resolved grid plans and paint command generation

#[cfg(test)]
mod tests {
    use gridglue::io::configuration::{MIN_EXPORT_HEIGHT, MIN_EXPORT_WIDTH};
    use gridglue::layout::{GridPlan, LayoutConfig, Rect, Size};
    use gridglue::model::CollageModel;
    use gridglue::render::CellStyle;
    use image::Rgba;

    fn config(columns: usize, spacing: u32, base: u32) -> LayoutConfig {
        LayoutConfig {
            columns,
            spacing,
            base_cell_size: base,
            ..LayoutConfig::default()
        }
    }

    fn style() -> CellStyle {
        CellStyle {
            corner_radius: 0,
            border_width: 0,
            border_color: Rgba([0, 0, 0, 255]),
            background: Rgba([255, 255, 255, 255]),
        }
    }

    // Tests seven items in auto mode fill a 3x3 grid with two empty slots
    // Verified by stretching the last row across the canvas
    #[test]
    fn test_seven_items_auto() {
        let plan = GridPlan::new(7, &config(0, 10, 100));

        assert_eq!(plan.columns(), 3);
        assert_eq!(plan.rows(), 3);
        assert_eq!(plan.empty_cells(), 2);
        assert_eq!(plan.cells().count(), 7);
        assert_eq!(plan.cell(6), Some(Rect::new(10, 230, 100, 100)));
        assert_eq!(plan.cell(7), None);
    }

    // Tests an empty plan exports the canvas floor
    // Verified by sizing the canvas from one row minimum
    #[test]
    fn test_empty_plan_uses_floor() {
        for spacing in [0, 10, 50] {
            for base in [1, 100, 300] {
                let plan = GridPlan::new(0, &config(0, spacing, base));
                assert_eq!(
                    plan.canvas(),
                    Size::new(MIN_EXPORT_WIDTH, MIN_EXPORT_HEIGHT)
                );
                assert_eq!(plan.rows(), 0);
                assert_eq!(plan.cells().count(), 0);
                assert_eq!(plan.empty_cells(), 0);
            }
        }
    }

    // Tests every filled cell lies inside the canvas when the width floor widens cells
    // Verified by keeping the height from the unscaled base cell size
    #[test]
    fn test_cells_fit_floored_canvas() {
        let cases = [
            (5, config(1, 8, 100)),
            (1, config(0, 8, 300)),
            (1, config(0, 10, 20)),
            (7, config(2, 4, 50)),
            (19, config(0, 2, 10)),
        ];
        for (items, layout) in cases {
            let plan = GridPlan::new(items, &layout);
            let canvas = plan.canvas();
            assert_eq!(plan.cells().count(), items);
            for rect in plan.cells() {
                assert!(rect.right() <= canvas.width, "{items} items: {rect:?} in {canvas:?}");
                assert!(rect.bottom() <= canvas.height, "{items} items: {rect:?} in {canvas:?}");
            }
        }

        let plan = GridPlan::new(5, &config(1, 8, 100));
        assert_eq!(plan.cell_edge(), 384);
        assert_eq!(plan.canvas(), Size::new(400, 1968));
        assert_eq!(plan.cell(4), Some(Rect::new(8, 1576, 384, 384)));

        let single = GridPlan::new(1, &config(0, 8, 300));
        assert_eq!(single.canvas(), Size::new(400, 400));
    }

    // Tests export scale multiplies spacing and cell size before sizing
    // Verified by scaling only the final canvas
    #[test]
    fn test_plan_applies_scale() {
        let scaled = LayoutConfig {
            export_scale: 2.0,
            ..config(2, 10, 200)
        };
        let plan = GridPlan::new(4, &scaled);

        assert_eq!(plan.spacing(), 20);
        assert_eq!(plan.cell_edge(), 400);
        assert_eq!(plan.canvas(), Size::new(860, 860));
        assert_eq!(plan.cell(3), Some(Rect::new(440, 440, 400, 400)));
    }

    // Tests canvas size never shrinks as items are added with fixed columns
    // Verified by deriving rows with floor division
    #[test]
    fn test_canvas_monotonic_in_items() {
        let layout = config(4, 6, 80);
        let mut previous = GridPlan::new(0, &layout).canvas();
        for items in 1..60 {
            let current = GridPlan::new(items, &layout).canvas();
            assert!(current.height >= previous.height);
            assert!(current.width >= previous.width);
            previous = current;
        }
    }

    // Tests commands pair entries with cells in model order
    // Verified by iterating the model in reverse
    #[test]
    fn test_commands_follow_model_order() {
        let mut model = CollageModel::new();
        for label in ["a", "b", "c", "d"] {
            model.add(label);
        }
        model.move_entry(0, 4);

        let plan = GridPlan::new(model.len(), &config(0, 10, 100));
        let commands = plan.commands(&model, &style());

        let order: Vec<&str> = commands.iter().map(|c| *c.image).collect();
        assert_eq!(order, vec!["b", "c", "d", "a"]);
        let rects: Vec<Rect> = commands.iter().map(|c| c.rect).collect();
        assert_eq!(rects, plan.cells().collect::<Vec<_>>());
        assert!(commands.iter().enumerate().all(|(i, c)| c.index == i));
    }

    // Tests a stale plan never paints entries it was not sized for
    // Verified by generating commands from the model length
    #[test]
    fn test_commands_ignore_entries_past_plan() {
        let mut model = CollageModel::new();
        for n in 0..5 {
            model.add(n);
        }
        let plan = GridPlan::new(3, &config(0, 10, 100));

        assert_eq!(plan.commands(&model, &style()).len(), 3);
    }
}
