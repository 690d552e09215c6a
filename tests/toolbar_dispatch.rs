use doodle_pad::event::{EventLog, EventRecorder, ToolBarEvent};
use doodle_pad::scene::{ScaleKind, Shape, TapAction};
use doodle_pad::util::time::current_time_secs;
use doodle_pad::{
    Brush, Canvas, Color, Drawable, DrawableId, DrawingConfig, InputMode, PickerKind, Point, SceneModel,
    ToolBar,
};
use egui::pos2;

fn default_toolbar() -> (ToolBar, SceneModel, EventLog) {
    let config = DrawingConfig::default();
    toolbar_with(Brush::default_set(&config), config)
}

fn toolbar_with(brushes: Vec<Brush>, config: DrawingConfig) -> (ToolBar, SceneModel, EventLog) {
    let mut scene = SceneModel::new();
    let toolbar = ToolBar::new(brushes, config, &mut scene).unwrap();
    let recorder = EventRecorder::new();
    let log = recorder.log();
    toolbar.subscribe(Box::new(recorder));
    (toolbar, scene, log)
}

/// Centre of the first drawable carrying `action`
fn tap_point(scene: &SceneModel, action: TapAction) -> Point {
    scene
        .drawables()
        .iter()
        .find(|d| d.on_tap == Some(action))
        .map(|d| d.position)
        .unwrap_or_else(|| panic!("no drawable for {:?}", action))
}

#[test]
fn pen_places_one_circle_per_move() {
    let (mut toolbar, mut scene, _) = default_toolbar();
    let before = scene.len();
    let points = [pos2(0.0, 0.0), pos2(10.0, 5.0), pos2(-300.0, 200.0)];

    for p in points {
        toolbar.handle_pointer_move(&mut scene, p);
    }

    let marks: Vec<_> = scene.marks().collect();
    assert_eq!(scene.len(), before + points.len());
    assert_eq!(marks.len(), points.len());
    for (mark, p) in marks.iter().zip(points) {
        assert_eq!(mark.position, p);
        assert_eq!(mark.shape, Shape::Circle { radius: 2.0 });
    }
}

#[test]
fn tapping_brush_icon_switches_active_brush() {
    let (mut toolbar, mut scene, log) = default_toolbar();

    let eraser_icon = tap_point(&scene, TapAction::SelectBrush(3));
    toolbar.handle_tap(&mut scene, eraser_icon);

    assert_eq!(toolbar.active_index(), Some(3));
    assert_eq!(toolbar.active_brush().name(), "Eraser");
    let pulsing = |id| scene.drawable(id).and_then(|d| d.animation).map(|a| a.kind);
    assert_eq!(toolbar.brush_icon(3).and_then(pulsing), Some(ScaleKind::Pulse));
    assert_eq!(toolbar.brush_icon(0).and_then(pulsing), None);
    let fill = |i| toolbar.brush_icon(i).and_then(|id| scene.drawable(id)).map(|d| d.fill);
    assert_eq!(fill(0), Some(Color::BLACK));
    assert_eq!(fill(3), Some(Color::SELECTED_TINT));
    assert_eq!(
        *log.lock(),
        vec![ToolBarEvent::BrushSelected { index: 3, name: "Eraser" }]
    );
}

#[test]
fn most_recent_tap_wins_mid_stroke() {
    let (mut toolbar, mut scene, _) = default_toolbar();

    toolbar.handle_pointer_move(&mut scene, pos2(0.0, 0.0));
    let lines = tap_point(&scene, TapAction::SelectBrush(1));
    toolbar.handle_tap(&mut scene, lines);
    let spray = tap_point(&scene, TapAction::SelectBrush(2));
    toolbar.handle_tap(&mut scene, spray);
    toolbar.handle_pointer_move(&mut scene, pos2(50.0, 0.0));

    assert_eq!(toolbar.active_brush().name(), "SprayPaint");
    assert!(scene.marks().count() > 10);
}

#[test]
fn pen_then_eraser_scenario() {
    let config = DrawingConfig::default();
    let brushes = vec![Brush::pen(&config), Brush::eraser(&config)];
    let (mut toolbar, mut scene, _) = toolbar_with(brushes, config);

    for p in [pos2(-5.0, 0.0), pos2(5.0, 5.0), pos2(0.0, -10.0)] {
        toolbar.handle_pointer_move(&mut scene, p);
    }
    let far = scene.place(Drawable::circle(2.0, Color::BLACK), pos2(300.0, 300.0));
    let chrome_before = scene.len() - scene.marks().count();
    assert_eq!(scene.marks().count(), 4);

    let eraser_icon = tap_point(&scene, TapAction::SelectBrush(1));
    toolbar.handle_tap(&mut scene, eraser_icon);
    assert_eq!(toolbar.active_brush().name(), "Eraser");

    toolbar.handle_pointer_move(&mut scene, pos2(0.0, 0.0));

    let marks: Vec<_> = scene.marks().map(|d| d.id).collect();
    assert_eq!(marks, vec![far]);
    assert_eq!(scene.len() - scene.marks().count(), chrome_before);
}

#[test]
fn thickness_picker_third_swatch_scenario() {
    let (mut toolbar, mut scene, log) = default_toolbar();
    let chrome = scene.len();

    let icon = tap_point(&scene, TapAction::OpenThicknessPicker);
    toolbar.handle_tap(&mut scene, icon);
    assert!(toolbar.thickness_picker().is_open());
    assert_eq!(toolbar.mode(), InputMode::PickerOpen(PickerKind::Thickness));

    let third = tap_point(&scene, TapAction::PickThickness(9));
    assert_eq!(third.x, toolbar.thickness_anchor().x + 25.0 + 80.0);
    toolbar.handle_tap(&mut scene, third);

    let selections = log
        .lock()
        .iter()
        .filter(|e| matches!(e, ToolBarEvent::ThicknessSelected(_)))
        .count();
    assert_eq!(selections, 1);
    assert!(log.lock().contains(&ToolBarEvent::ThicknessSelected(9)));
    assert!(toolbar.brushes().iter().all(|b| b.thickness() == 9));
    assert!(!toolbar.thickness_picker().is_open());
    assert_eq!(toolbar.mode(), InputMode::Draw);

    // the tapped bar scales up after the picker has closed, then goes away
    let acked: Vec<_> = scene
        .drawables()
        .iter()
        .filter(|d| matches!(d.animation.map(|a| a.kind), Some(ScaleKind::To { scale, .. }) if scale == 1.5))
        .collect();
    assert_eq!(acked.len(), 1);
    assert_eq!(acked[0].shape, Shape::Bar { length: 40.0, thickness: 9.0 });
    assert_eq!(scene.len(), chrome + 1);
    scene.prune_expired(current_time_secs() + 1.0);
    assert_eq!(scene.len(), chrome);

    // the icon shows the new thickness
    let icon = toolbar
        .thickness_picker()
        .icon
        .and_then(|id| scene.drawable(id))
        .map(|d| d.unrotated_size().y);
    assert_eq!(icon, Some(9.0));
}

#[test]
fn color_choice_reaches_every_brush() {
    let config = DrawingConfig::default();
    let mut brushes = Brush::default_set(&config);
    // two extras beyond the six the toolbar can show
    brushes.extend((0..4).map(|_| Brush::pen(&config)));
    let (mut toolbar, mut scene, _) = toolbar_with(brushes, config);
    assert_eq!(toolbar.brushes().len(), 8);
    assert_eq!(toolbar.reachable_brush_count(), 6);

    let icon = tap_point(&scene, TapAction::OpenColorPicker);
    toolbar.handle_tap(&mut scene, icon);
    let green = toolbar.color_picker().palette()[4];
    let swatch = tap_point(&scene, TapAction::PickColor(green));
    toolbar.handle_tap(&mut scene, swatch);

    assert!(toolbar.brushes().iter().all(|b| b.color() == green));
    let icon_fill = toolbar.color_picker().icon.and_then(|id| scene.drawable(id)).map(|d| d.fill);
    assert_eq!(icon_fill, Some(green));
    assert_eq!(toolbar.mode(), InputMode::Draw);
}

#[test]
fn brushes_beyond_limit_are_unreachable() {
    let config = DrawingConfig::default();
    let brushes = (0..8).map(|_| Brush::pen(&config)).collect();
    let (mut toolbar, mut scene, _) = toolbar_with(brushes, config);

    assert!(toolbar.brush_icon(5).is_some());
    assert!(toolbar.brush_icon(6).is_none());
    assert!(!toolbar.select_brush(&mut scene, 7));
    assert_eq!(toolbar.active_index(), Some(0));
}

#[test]
fn tap_elsewhere_cancels_without_changing_values() {
    let (mut toolbar, mut scene, log) = default_toolbar();
    let chrome = scene.len();

    let icon = tap_point(&scene, TapAction::OpenColorPicker);
    toolbar.handle_tap(&mut scene, icon);
    assert!(scene.len() > chrome);

    toolbar.handle_tap(&mut scene, pos2(300.0, -300.0));

    assert!(!toolbar.is_picker_open());
    assert_eq!(scene.len(), chrome);
    assert_eq!(toolbar.mode(), InputMode::Draw);
    assert!(toolbar.brushes()[..3].iter().all(|b| b.color() == Color::BLACK));
    assert!(log.lock().contains(&ToolBarEvent::PickerDismissed(PickerKind::Color)));
    assert!(!log.lock().iter().any(|e| matches!(e, ToolBarEvent::ColorSelected(_))));
}

#[test]
fn tapping_picker_panel_background_cancels() {
    let (mut toolbar, mut scene, _) = default_toolbar();
    let icon = tap_point(&scene, TapAction::OpenThicknessPicker);
    toolbar.handle_tap(&mut scene, icon);

    // inside the panel, below the row of hit circles
    let anchor = toolbar.thickness_anchor();
    toolbar.handle_tap(&mut scene, pos2(anchor.x + 200.0, anchor.y - 27.0));

    assert!(!toolbar.thickness_picker().is_open());
    assert_eq!(toolbar.mode(), InputMode::Draw);
    assert!(toolbar.brushes().iter().all(|b| b.thickness() != 3));
}

#[test]
fn drawing_is_suspended_while_picker_open() {
    let (mut toolbar, mut scene, _) = default_toolbar();
    let icon = tap_point(&scene, TapAction::OpenColorPicker);
    toolbar.handle_tap(&mut scene, icon);

    for i in 0..20 {
        toolbar.handle_pointer_move(&mut scene, pos2(i as f32 * 10.0, 100.0));
    }
    assert_eq!(scene.marks().count(), 0);

    toolbar.handle_tap(&mut scene, pos2(400.0, 400.0));
    toolbar.handle_pointer_move(&mut scene, pos2(0.0, 100.0));
    assert_eq!(scene.marks().count(), 1);
}

#[test]
fn at_most_one_picker_open() {
    let (mut toolbar, mut scene, _) = default_toolbar();

    let color_icon = tap_point(&scene, TapAction::OpenColorPicker);

    toolbar.handle_tap(&mut scene, color_icon);
    let pulse_of = |scene: &SceneModel, icon: Option<DrawableId>| {
        icon.and_then(|id| scene.drawable(id)).and_then(|d| d.animation).map(|a| a.kind)
    };
    assert_eq!(pulse_of(&scene, toolbar.color_picker().icon), Some(ScaleKind::Pulse));

    toolbar.open_thickness_picker(&mut scene);
    assert_eq!(pulse_of(&scene, toolbar.thickness_picker().icon), Some(ScaleKind::Pulse));
    assert!(toolbar.thickness_picker().is_open());
    assert!(!toolbar.color_picker().is_open());
    assert_eq!(scene.tagged("ColorPicker").count(), 0);

    toolbar.open_color_picker(&mut scene);
    assert!(toolbar.color_picker().is_open());
    assert!(!toolbar.thickness_picker().is_open());
    assert_eq!(scene.tagged("ThicknessPicker").count(), 0);
}

#[test]
fn mode_never_draws_while_picker_reports_open() {
    let (mut toolbar, mut scene, log) = default_toolbar();
    let color_icon = tap_point(&scene, TapAction::OpenColorPicker);
    let thickness_icon = tap_point(&scene, TapAction::OpenThicknessPicker);

    // scripted trace mixing drags, opens, picks and cancels
    enum Step {
        Move(Point),
        Tap(Point),
        ChooseThickness(u32),
    }
    let trace = [
        Step::Move(pos2(10.0, 10.0)),
        Step::Tap(color_icon),
        Step::Move(pos2(20.0, 20.0)),
        Step::Tap(thickness_icon),
        Step::Move(pos2(30.0, 30.0)),
        Step::Tap(pos2(450.0, 450.0)),
        Step::Move(pos2(40.0, 40.0)),
        Step::ChooseThickness(12),
        Step::Move(pos2(50.0, 50.0)),
    ];

    for step in trace {
        let marks_before = scene.marks().count();
        let open_before = toolbar.is_picker_open();
        match step {
            Step::Move(p) => toolbar.handle_pointer_move(&mut scene, p),
            Step::Tap(p) => toolbar.handle_tap(&mut scene, p),
            Step::ChooseThickness(t) => toolbar.choose_thickness(&mut scene, t),
        }
        if open_before && toolbar.is_picker_open() {
            assert_eq!(scene.marks().count(), marks_before);
        }
        assert_eq!(toolbar.mode().is_drawing(), !toolbar.is_picker_open());
    }

    // choose_thickness while closed fired nothing
    assert!(!log.lock().iter().any(|e| matches!(e, ToolBarEvent::ThicknessSelected(_))));
    assert_eq!(scene.marks().count(), 3);
}

#[test]
fn default_pen_draws_when_no_brushes() {
    let (mut toolbar, mut scene, _) = toolbar_with(Vec::new(), DrawingConfig::default());
    toolbar.handle_pointer_move(&mut scene, pos2(0.0, 0.0));
    assert_eq!(scene.marks().count(), 1);
    assert_eq!(toolbar.active_index(), None);
}
