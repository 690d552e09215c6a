use crate::config::{DrawingConfig, ToolSettings};
use crate::error::{ToolBarError, ToolBarResult};
use crate::event::{EventBus, EventHandler, ToolBarEvent};
use crate::geometry::{Color, Point};
use crate::input::{InputMode, PointerMoveHandler};
use crate::picker::{ColorPicker, PickerKind, ThicknessPicker};
use crate::scene::{Canvas, Drawable, DrawableId, TapAction};
use crate::tool::Brush;
use eframe::egui::{pos2, vec2};

/// The brush receiving pointer-move events
#[derive(Debug, Clone)]
enum ActiveBrush {
    /// Index into the toolbar's brush list
    Listed(usize),
    /// Stand-in Pen used when the toolbar was built without brushes
    Default(Box<Brush>),
}

/// Side panel owning the brushes and pickers, and the single source of truth
/// for what a pointer-move on the canvas does.
///
/// Every routing change goes through [`ToolBar::set_mode`], which replaces the
/// installed pointer-move handler, so exactly one handler is live at a time.
#[derive(Debug)]
pub struct ToolBar {
    config: DrawingConfig,
    brushes: Vec<Brush>,
    active: ActiveBrush,
    color_picker: ColorPicker,
    thickness_picker: ThicknessPicker,
    panel_height: f32,
    color_anchor: Point,
    thickness_anchor: Point,
    mode: InputMode,
    pointer_move: PointerMoveHandler,
    settings: ToolSettings,
    events: EventBus,
}

impl ToolBar {
    /// Builds the side panel, places every icon on `canvas` and enables drawing.
    ///
    /// Only the first `max_brushes` brushes get an icon. Extras stay in the
    /// list, so they still receive color and thickness changes, but can never
    /// be selected. With `strict_brush_limit` they are rejected instead.
    pub fn new(
        brushes: Vec<Brush>,
        config: DrawingConfig,
        canvas: &mut dyn Canvas,
    ) -> ToolBarResult<Self> {
        if brushes.len() > config.max_brushes {
            if config.strict_brush_limit {
                return Err(ToolBarError::TooManyBrushes {
                    supplied: brushes.len(),
                    max: config.max_brushes,
                });
            }
            log::warn!(
                "{} brushes supplied, only the first {} are shown",
                brushes.len(),
                config.max_brushes
            );
        }

        let height = panel_height(&config, brushes.len());
        if height <= 0 {
            return Err(ToolBarError::InvalidPanelHeight {
                brushes: brushes.len(),
                height,
            });
        }

        let active = if brushes.is_empty() {
            ActiveBrush::Default(Box::new(Brush::pen(&config)))
        } else {
            ActiveBrush::Listed(0)
        };

        let mut toolbar = Self {
            color_picker: ColorPicker::new(config.palette.clone(), config.picker.clone()),
            thickness_picker: ThicknessPicker::new(config.picker.clone()),
            brushes,
            active,
            panel_height: height as f32,
            color_anchor: Point::ZERO,
            thickness_anchor: Point::ZERO,
            mode: InputMode::Idle,
            pointer_move: PointerMoveHandler::Ignore,
            settings: ToolSettings::default(),
            events: EventBus::new(),
            config,
        };

        toolbar.set_up_side_bar(canvas);
        toolbar.enable_drawing();
        log::info!(
            "Toolbar ready with {} brushes, active: {}",
            toolbar.brushes.len(),
            toolbar.active_brush().name()
        );
        Ok(toolbar)
    }

    fn set_up_side_bar(&mut self, canvas: &mut dyn Canvas) {
        let panel = &self.config.panel;
        let side_rect = Drawable::rectangle(
            panel.width,
            self.panel_height,
            panel.corner_radius,
            Color::PANEL_GRAY,
        )
        .chrome();
        canvas.place(side_rect, pos2(panel.center_x, 0.0));

        let mut position = pos2(panel.center_x, self.panel_height / 2.0 - panel.top_inset);
        let spacing = panel.icon_spacing;
        let icon_size = panel.icon_size;
        let shown = self.reachable_brush_count();

        for (index, brush) in self.brushes.iter_mut().take(shown).enumerate() {
            let tint = if index == 0 { Color::SELECTED_TINT } else { Color::BLACK };
            let icon = Drawable::icon(brush.glyph(), icon_size, tint)
                .chrome()
                .on_tap(TapAction::SelectBrush(index));
            brush.icon = Some(canvas.place(icon, position));
            position.y -= spacing;
        }

        let color_icon = self.color_picker.icon_drawable(self.config.default_color);
        self.color_picker.icon = Some(canvas.place(color_icon, position));
        self.color_anchor = position;

        position.y -= spacing;
        let thickness_icon = self.thickness_picker.icon_drawable();
        self.thickness_picker.icon = Some(canvas.place(thickness_icon, position));
        canvas.place(self.thickness_picker.icon_hit_area(), position);
        self.thickness_anchor = position;
    }

    /// Subscribe a handler to toolbar events
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.events.subscribe(handler);
    }

    /// The one place input routing changes.
    pub fn set_mode(&mut self, mode: InputMode) {
        let from = self.mode;
        self.mode = mode;
        self.pointer_move = mode.pointer_move_handler();
        if from != mode {
            log::debug!("Input mode {:?} -> {:?}", from, mode);
            self.events.emit(ToolBarEvent::ModeChanged { from, to: mode });
        }
    }

    /// Routes pointer moves to the active brush.
    pub fn enable_drawing(&mut self) {
        self.set_mode(InputMode::Draw);
    }

    /// Drops pointer moves until drawing is enabled again.
    pub fn disable_drawing(&mut self) {
        self.set_mode(InputMode::Idle);
    }

    /// Canvas-wide pointer-move entry point.
    pub fn handle_pointer_move(&mut self, canvas: &mut dyn Canvas, pos: Point) {
        match self.pointer_move {
            PointerMoveHandler::Ignore => {}
            PointerMoveHandler::ActiveBrush => {
                // Events over the toolbar never draw
                if pos.x <= self.config.toolbar_boundary_x {
                    return;
                }
                self.active_brush_mut().handle_pointer_move(canvas, pos);
            }
        }
    }

    /// End of a drag.
    pub fn handle_pointer_up(&mut self) {
        self.active_brush_mut().end_stroke();
    }

    /// Canvas-wide tap entry point: icon and picker taps, or cancel.
    pub fn handle_tap(&mut self, canvas: &mut dyn Canvas, pos: Point) {
        match canvas.tap_target(pos) {
            Some((_, action)) => self.dispatch_tap(canvas, action),
            None => self.dismiss_pickers(canvas),
        }
    }

    fn dispatch_tap(&mut self, canvas: &mut dyn Canvas, action: TapAction) {
        match action {
            TapAction::SelectBrush(index) => {
                self.select_brush(canvas, index);
            }
            TapAction::OpenColorPicker => self.open_color_picker(canvas),
            TapAction::OpenThicknessPicker => self.open_thickness_picker(canvas),
            TapAction::PickColor(color) => self.choose_color(canvas, color),
            TapAction::PickThickness(thickness) => self.choose_thickness(canvas, thickness),
        }
    }

    /// Makes the brush at `index` active. Returns false if it has no icon.
    pub fn select_brush(&mut self, canvas: &mut dyn Canvas, index: usize) -> bool {
        if index >= self.reachable_brush_count() {
            log::debug!("Ignoring selection of unreachable brush {}", index);
            return false;
        }

        if let Some(icon) = self.brushes[index].icon {
            canvas.pulse(icon);
        }
        if let Some(previous) = self.active_brush().icon {
            canvas.set_fill(previous, Color::BLACK);
        }
        if let Some(icon) = self.brushes[index].icon {
            canvas.set_fill(icon, Color::SELECTED_TINT);
        }

        self.active = ActiveBrush::Listed(index);
        let name = self.brushes[index].name();
        log::info!("Brush selected: {}", name);
        self.events.emit(ToolBarEvent::BrushSelected { index, name });
        true
    }

    /// Opens the color picker at its icon and suspends drawing.
    pub fn open_color_picker(&mut self, canvas: &mut dyn Canvas) {
        if let Some(icon) = self.color_picker.icon {
            canvas.pulse(icon);
        }
        if self.thickness_picker.dismiss(canvas) {
            self.events.emit(ToolBarEvent::PickerDismissed(PickerKind::Thickness));
        }
        self.set_mode(InputMode::PickerOpen(PickerKind::Color));
        self.color_picker.draw(canvas, self.color_anchor);
        log::info!("Color picker opened");
        self.events.emit(ToolBarEvent::PickerOpened(PickerKind::Color));
    }

    /// Opens the thickness picker at its icon and suspends drawing.
    pub fn open_thickness_picker(&mut self, canvas: &mut dyn Canvas) {
        if let Some(icon) = self.thickness_picker.icon {
            canvas.pulse(icon);
        }
        if self.color_picker.dismiss(canvas) {
            self.events.emit(ToolBarEvent::PickerDismissed(PickerKind::Color));
        }
        self.set_mode(InputMode::PickerOpen(PickerKind::Thickness));
        self.thickness_picker.draw(canvas, self.thickness_anchor);
        log::info!("Thickness picker opened");
        self.events.emit(ToolBarEvent::PickerOpened(PickerKind::Thickness));
    }

    /// Completion of the color picker: applies `color` to every brush.
    /// Ignored unless the color picker is open.
    pub fn choose_color(&mut self, canvas: &mut dyn Canvas, color: Color) {
        let Some(color) = self.color_picker.select(canvas, color) else {
            return;
        };
        self.apply_color(canvas, color);
        log::info!("Color {:?} applied to {} brushes", color, self.brushes.len());
        self.events.emit(ToolBarEvent::ColorSelected(color));
        self.enable_drawing();
    }

    /// Completion of the thickness picker: applies `thickness` to every brush.
    /// Ignored unless the thickness picker is open.
    pub fn choose_thickness(&mut self, canvas: &mut dyn Canvas, thickness: u32) {
        let Some(thickness) = self.thickness_picker.select(canvas, thickness) else {
            return;
        };
        self.apply_thickness(canvas, thickness);
        log::info!("Thickness {} applied to {} brushes", thickness, self.brushes.len());
        self.events.emit(ToolBarEvent::ThicknessSelected(thickness));
        self.enable_drawing();
    }

    /// Closes both pickers without a selection and resumes drawing.
    pub fn dismiss_pickers(&mut self, canvas: &mut dyn Canvas) {
        if self.thickness_picker.dismiss(canvas) {
            self.events.emit(ToolBarEvent::PickerDismissed(PickerKind::Thickness));
        }
        if self.color_picker.dismiss(canvas) {
            self.events.emit(ToolBarEvent::PickerDismissed(PickerKind::Color));
        }
        self.enable_drawing();
    }

    /// Reapplies previously picked settings, e.g. restored from storage.
    pub fn apply_settings(&mut self, canvas: &mut dyn Canvas, settings: ToolSettings) {
        if let Some(color) = settings.color {
            self.apply_color(canvas, color);
        }
        if let Some(thickness) = settings.thickness.filter(|t| *t > 0) {
            self.apply_thickness(canvas, thickness);
        }
    }

    fn apply_color(&mut self, canvas: &mut dyn Canvas, color: Color) {
        if let Some(icon) = self.color_picker.icon {
            canvas.set_fill(icon, color);
        }
        for brush in &mut self.brushes {
            brush.set_color(color);
        }
        self.settings.color = Some(color);
    }

    fn apply_thickness(&mut self, canvas: &mut dyn Canvas, thickness: u32) {
        for brush in &mut self.brushes {
            brush.set_thickness(thickness);
        }
        if let Some(icon) = self.thickness_picker.icon {
            canvas.set_size(icon, vec2(self.thickness_picker.icon_length(), thickness as f32));
        }
        self.settings.thickness = Some(thickness);
    }

    pub fn brushes(&self) -> &[Brush] {
        &self.brushes
    }

    /// Number of brushes that have an icon and can be selected.
    pub fn reachable_brush_count(&self) -> usize {
        self.brushes.len().min(self.config.max_brushes)
    }

    pub fn active_brush(&self) -> &Brush {
        match &self.active {
            ActiveBrush::Listed(index) => &self.brushes[*index],
            ActiveBrush::Default(brush) => &**brush,
        }
    }

    fn active_brush_mut(&mut self) -> &mut Brush {
        match &mut self.active {
            ActiveBrush::Listed(index) => &mut self.brushes[*index],
            ActiveBrush::Default(brush) => &mut **brush,
        }
    }

    /// Index of the active brush, `None` for the stand-in Pen.
    pub fn active_index(&self) -> Option<usize> {
        match self.active {
            ActiveBrush::Listed(index) => Some(index),
            ActiveBrush::Default(_) => None,
        }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn pointer_move_handler(&self) -> PointerMoveHandler {
        self.pointer_move
    }

    pub fn color_picker(&self) -> &ColorPicker {
        &self.color_picker
    }

    pub fn thickness_picker(&self) -> &ThicknessPicker {
        &self.thickness_picker
    }

    pub fn is_picker_open(&self) -> bool {
        self.color_picker.is_open() || self.thickness_picker.is_open()
    }

    pub fn panel_height(&self) -> f32 {
        self.panel_height
    }

    /// Where the color picker opens
    pub fn color_anchor(&self) -> Point {
        self.color_anchor
    }

    /// Where the thickness picker opens
    pub fn thickness_anchor(&self) -> Point {
        self.thickness_anchor
    }

    pub fn config(&self) -> &DrawingConfig {
        &self.config
    }

    /// What has been picked so far, for persistence.
    pub fn settings(&self) -> ToolSettings {
        self.settings
    }

    /// Icon of the brush at `index`, if it was given one.
    pub fn brush_icon(&self, index: usize) -> Option<DrawableId> {
        self.brushes.get(index).and_then(|b| b.icon)
    }
}

/// Panel height grows with the number of supplied brushes, extras included.
fn panel_height(config: &DrawingConfig, brush_count: usize) -> i64 {
    i64::from(config.panel.base_height)
        + i64::from(config.panel.height_per_brush) * brush_count as i64
}
