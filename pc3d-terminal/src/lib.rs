/// Terminal viewer host for the product configurator
use crossterm::{
    cursor,
    event::{self, Event as TermEvent, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use pc3d_core::{Camera, Event, Lighting, Mesh, RotationState, Session};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use tracing::{error, info};

pub mod config;
pub mod input;
pub mod panel;
pub mod renderer;

pub use config::ViewerConfig;
pub use input::{action_for_key, Action};
pub use renderer::AsciiRenderer;

/// Main application struct for the terminal configurator
pub struct TerminalApp {
    config: ViewerConfig,
    session: Session,
    mesh: Mesh,
    rotation: RotationState,
    camera: Camera,
    lighting: Lighting,
    renderer: AsciiRenderer,
    running: bool,
    dirty: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(config: ViewerConfig) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let session = Session::new();

        let mut app = Self {
            config,
            session,
            mesh: Mesh::product_proxy(),
            rotation: RotationState::new(0.3, 0.3, 0.0),
            camera: Camera::default(),
            lighting: Lighting::default(),
            renderer: AsciiRenderer::new(0, 0),
            running: true,
            dirty: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        };
        app.resize(width, height);
        Ok(app)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn resize(&mut self, width: u16, height: u16) {
        // one header row above the viewport
        let viewport_height = height.saturating_sub(self.config.panel_height + 1).max(1);
        self.renderer = AsciiRenderer::new(width as usize, viewport_height as usize);
        self.camera.aspect =
            width as f32 / (viewport_height as f32 * self.config.cell_aspect).max(1.0);
        self.dirty = true;
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = self.config.frame_time();

        while self.running {
            let frame_start = Instant::now();

            while event::poll(Duration::from_millis(0))? {
                self.handle_event(event::read()?);
            }

            self.update();

            if self.dirty || !self.renderer.is_current(&self.session.render_params()) {
                self.render()?;
                self.dirty = false;
            }

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: TermEvent) {
        match event {
            TermEvent::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => {
                if let Some(action) = action_for_key(code, &self.config) {
                    self.apply(action);
                }
            }
            TermEvent::Resize(width, height) => self.resize(width, height),
            _ => {}
        }
    }

    /// Apply one user action to the session and viewer
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::NextTab => {
                self.dispatch(Event::ActivateTab(self.session.tabs().active().next()));
            }
            Action::PreviousTab => {
                self.dispatch(Event::ActivateTab(self.session.tabs().active().previous()));
            }
            Action::SelectOption(index) => {
                let category = self.session.tabs().active();
                // keys past the end of the panel select nothing
                if let Some(entry) = self.session.panel().get(index) {
                    self.dispatch(Event::select(category, entry.option.id));
                }
            }
            Action::Rotate { dx, dy, dz } => {
                self.rotation.rotate(dx, dy, dz);
                self.dirty = true;
            }
            Action::ToggleAutoRotate => {
                self.config.auto_rotate = !self.config.auto_rotate;
                info!(auto_rotate = self.config.auto_rotate, "toggled auto-rotation");
            }
        }
    }

    fn dispatch(&mut self, event: Event) {
        match self.session.dispatch(event) {
            Ok(_) => self.dirty = true,
            Err(err) => {
                // panel entries come from the catalog, so this is a bug
                error!(error = %err, "catalog option rejected");
                debug_assert!(false, "catalog option rejected: {err}");
            }
        }
    }

    fn update(&mut self) {
        if self.config.auto_rotate {
            let (dx, dy) = self.config.auto_rotate_speed;
            self.rotation.rotate(dx, dy, 0.0);
            self.dirty = true;
        }
    }

    fn render(&mut self) -> io::Result<()> {
        let params = self.session.render_params();
        let model = params.model_matrix(&self.rotation);

        self.renderer.clear();
        self.renderer
            .render_mesh(&self.mesh, &model, &self.camera, &self.lighting, &params);

        let mut stdout = stdout();
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            Clear(ClearType::CurrentLine),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "Product Configuration | FPS: {:.1} | Tab=Switch 1-4=Select WASD=Rotate Space=Spin Q=Quit",
                self.fps
            )),
            ResetColor
        )?;

        self.renderer.draw(&mut stdout, 1)?;
        panel::draw_panel(&mut stdout, &self.session, 1 + self.renderer.height() as u16)?;

        stdout.flush()?;
        Ok(())
    }
}
