//! Standalone sandbox window backed by winit.
//!
//! ```no_run
//! # use sylva::Viewer;
//! Viewer::builder()
//!     .with_scene("scenes/courtyard.toml")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use web_time::Instant;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::engine::RenderEngine;
use crate::error::SylvaError;
use crate::input::InputState;
use crate::options::Options;
use crate::scene::SceneSpec;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    scene_path: Option<PathBuf>,
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with defaults (title "Sylva", built-in demo
    /// scene, default options).
    fn new() -> Self {
        Self {
            scene_path: None,
            options: None,
            title: "Sylva".into(),
        }
    }

    /// Set the scene table file (TOML). Without one, the built-in demo
    /// scene is used.
    #[must_use]
    pub fn with_scene(mut self, path: impl Into<PathBuf>) -> Self {
        self.scene_path = Some(path.into());
        self
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            scene_path: self.scene_path,
            options: self.options,
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window running the sandbox frame loop.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    scene_path: Option<PathBuf>,
    options: Option<Options>,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window
    /// is closed.
    ///
    /// The scene file (if any) is read up front so a bad path fails
    /// here rather than mid-loop.
    pub fn run(self) -> Result<(), SylvaError> {
        let (spec, base_dir) = match &self.scene_path {
            Some(path) => {
                let spec = SceneSpec::load(path)?;
                let base_dir = path
                    .parent()
                    .map_or_else(|| PathBuf::from("."), PathBuf::from);
                (spec, base_dir)
            }
            None => (SceneSpec::demo(), PathBuf::from("assets/models")),
        };

        let event_loop =
            EventLoop::new().map_err(|e| SylvaError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            input: InputState::new(),
            last_frame_time: Instant::now(),
            spec,
            base_dir,
            options: self.options.unwrap_or_default(),
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| SylvaError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<RenderEngine>,
    input: InputState,
    last_frame_time: Instant,
    spec: SceneSpec,
    base_dir: PathBuf,
    options: Options,
    title: String,
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        let engine = pollster::block_on(RenderEngine::new(
            window.clone(),
            (size.width, size.height),
            self.options.clone(),
            &self.spec,
            &self.base_dir,
        ));
        match engine {
            Ok(engine) => {
                log::info!(
                    "scene ready: {} models, {} placements",
                    engine.scene().model_count(),
                    engine.scene().placements().len()
                );
                window.request_redraw();
                self.window = Some(window);
                self.engine = Some(engine);
            }
            Err(e) => {
                log::error!("engine initialization failed: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(engine) = &mut self.engine {
                    engine.resize(size.width, size.height);
                }
            }

            WindowEvent::RedrawRequested => {
                if let (Some(window), Some(engine)) =
                    (&self.window, &mut self.engine)
                {
                    let now = Instant::now();
                    let dt = now
                        .duration_since(self.last_frame_time)
                        .as_secs_f32();
                    self.last_frame_time = now;

                    let camera_options = engine.options().camera.clone();
                    self.input.apply(
                        engine.rig_mut(),
                        dt,
                        &camera_options,
                    );

                    match engine.render() {
                        Ok(()) => {}
                        Err(
                            wgpu::SurfaceError::Outdated
                            | wgpu::SurfaceError::Lost,
                        ) => {
                            let inner = window.inner_size();
                            engine.resize(inner.width, inner.height);
                        }
                        Err(e) => {
                            log::error!("render error: {e:?}");
                        }
                    }
                    window.request_redraw();
                }
            }

            other => {
                let _ = self.input.handle_window_event(&other);
            }
        }
    }
}
