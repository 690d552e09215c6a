use crate::config::{DrawingConfig, ToolSettings};
use crate::error::ToolBarResult;
use crate::event::{EventLog, EventRecorder, LoggingEventHandler};
use crate::panels::{ToolBar, central_panel};
use crate::renderer::Renderer;
use crate::scene::SceneModel;
use crate::tool::Brush;

/// Storage key for the last picked color and thickness
pub const SETTINGS_KEY: &str = "doodle_pad_tool_settings";

/// Number of recent toolbar events listed in the debug window
const RECENT_EVENTS: usize = 6;

pub struct DoodleApp {
    pub(crate) scene: SceneModel,
    pub(crate) toolbar: ToolBar,
    pub(crate) renderer: Renderer,
    event_log: EventLog,
    show_debug: bool,
}

impl DoodleApp {
    /// Called once before the first frame.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: DrawingConfig,
        brushes: Vec<Brush>,
    ) -> ToolBarResult<Self> {
        let settings = cc
            .storage
            .and_then(|storage| eframe::get_value::<ToolSettings>(storage, SETTINGS_KEY))
            .unwrap_or_default();
        Self::with_settings(config, brushes, settings)
    }

    /// Builds the app without an eframe context, applying `settings` to every brush.
    pub fn with_settings(
        config: DrawingConfig,
        brushes: Vec<Brush>,
        settings: ToolSettings,
    ) -> ToolBarResult<Self> {
        let mut scene = SceneModel::new();
        let mut toolbar = ToolBar::new(brushes, config, &mut scene)?;
        toolbar.apply_settings(&mut scene, settings);

        let recorder = EventRecorder::new();
        let event_log = recorder.log();
        toolbar.subscribe(Box::new(recorder));
        toolbar.subscribe(Box::new(LoggingEventHandler));

        Ok(Self {
            scene,
            toolbar,
            renderer: Renderer::new(),
            event_log,
            show_debug: cfg!(debug_assertions),
        })
    }

    pub fn toolbar(&self) -> &ToolBar {
        &self.toolbar
    }

    pub fn scene(&self) -> &SceneModel {
        &self.scene
    }

    fn debug_window(&mut self, ctx: &egui::Context) {
        egui::Window::new("Toolbar Debug")
            .open(&mut self.show_debug)
            .default_pos(egui::pos2(20.0, 20.0))
            .show(ctx, |ui| {
                ui.label(format!("Mode: {:?}", self.toolbar.mode()));
                ui.label(format!("Active brush: {}", self.toolbar.active_brush().name()));
                ui.label(format!("Marks: {}", self.scene.marks().count()));
                ui.separator();
                let events = self.event_log.lock();
                for event in events.iter().rev().take(RECENT_EVENTS) {
                    ui.label(format!("{:?}", event));
                }
            });
    }
}

impl eframe::App for DoodleApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, SETTINGS_KEY, &self.toolbar.settings());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        central_panel(self, ctx);
        if self.show_debug {
            self.debug_window(ctx);
        }
    }
}
