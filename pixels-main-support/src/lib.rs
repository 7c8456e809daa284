#![deny(clippy::all)]
#![forbid(unsafe_code)]

use log::{error, info};
use pixels::wgpu::Color;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::error::EventLoopError;
use winit::event::{ElementState, KeyEvent, StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};
use world_grid::World;

const BACKGROUND_COLOR: Color = Color::WHITE;
const ALIVE_RGBA: [u8; 4] = [0x20, 0x20, 0x20, 0xff];
const DEAD_RGBA: [u8; 4] = [0xff, 0xff, 0xff, 0xff];

#[derive(Clone, Copy, Debug)]
pub struct AnimationSettings {
    pub title: &'static str,
    pub time_step: Duration,
    pub cell_pixel_width: u32,
}

/// Shows `world` in a window, calling `World::update` once per time step until the world
/// is over. The window stays open until it is closed or Escape, Q or X is pressed.
pub fn animate<W: World>(world: W, settings: AnimationSettings) -> Result<(), EventLoopError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);
    event_loop.run_app(&mut AppEventHandler::new(world, settings))
}

pub fn cell_color_rgba(alive: bool) -> [u8; 4] {
    if alive { ALIVE_RGBA } else { DEAD_RGBA }
}

struct App {
    window: Arc<Window>,
    pixels: Pixels<'static>,
    next_update: Instant,
}

impl App {
    fn new<W: World>(
        event_loop: &ActiveEventLoop,
        world: &W,
        settings: &AnimationSettings,
    ) -> anyhow::Result<Self> {
        let window = Arc::new(Self::build_window(event_loop, world, settings)?);
        let pixels = Self::build_pixels(&window, world.width(), world.height())?;
        Ok(Self {
            window,
            pixels,
            next_update: Instant::now() + settings.time_step,
        })
    }

    fn build_window<W: World>(
        event_loop: &ActiveEventLoop,
        world: &W,
        settings: &AnimationSettings,
    ) -> anyhow::Result<Window> {
        let size = LogicalSize::new(
            world.width() * settings.cell_pixel_width,
            world.height() * settings.cell_pixel_width,
        );
        let window_attributes = Window::default_attributes()
            .with_title(settings.title)
            .with_inner_size(size)
            .with_min_inner_size(size)
            .with_visible(false);
        Ok(event_loop.create_window(window_attributes)?)
    }

    fn build_pixels(
        window: &Arc<Window>,
        width: u32,
        height: u32,
    ) -> anyhow::Result<Pixels<'static>> {
        let window_size = window.inner_size();
        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, window.clone());
        Ok(PixelsBuilder::new(width, height, surface_texture)
            .clear_color(BACKGROUND_COLOR)
            .build()?)
    }

    fn on_create(&mut self) {
        self.window.request_redraw();
        self.window.set_visible(true);
    }

    fn on_time_step<W: World>(&mut self, world: &mut W, time_step: Duration) {
        if world.is_over() {
            return;
        }
        world.update();
        if world.is_over() {
            info!("world is over; close the window to exit");
        }
        self.window.request_redraw();

        while self.next_update < Instant::now() {
            self.next_update += time_step;
        }
    }

    fn on_redraw<W: World>(&mut self, world: &W) -> Result<(), pixels::Error> {
        let screen = self.pixels.frame_mut();
        debug_assert_eq!(screen.len(), 4 * world.num_cells());

        for (&alive, pixel) in world.cells_iter().zip(screen.chunks_exact_mut(4)) {
            pixel.copy_from_slice(&cell_color_rgba(alive));
        }
        self.pixels.render()
    }

    fn on_resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.pixels.resize_surface(width, height)
    }
}

struct AppEventHandler<W: World> {
    world: W,
    settings: AnimationSettings,
    app: Option<App>,
}

impl<W: World> AppEventHandler<W> {
    fn new(world: W, settings: AnimationSettings) -> Self {
        Self {
            world,
            settings,
            app: None,
        }
    }
}

impl<W: World> ApplicationHandler for AppEventHandler<W> {
    fn new_events(&mut self, _event_loop: &ActiveEventLoop, cause: StartCause) {
        if let (StartCause::ResumeTimeReached { .. }, Some(app)) = (cause, self.app.as_mut()) {
            app.on_time_step(&mut self.world, self.settings.time_step);
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.is_some() {
            return;
        }
        match App::new(event_loop, &self.world, &self.settings) {
            Ok(mut app) => {
                app.on_create();
                self.app = Some(app);
            }
            Err(err) => {
                error!("could not open window: {err:#}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(app) = self.app.as_mut() else {
            return;
        };
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Released,
                        repeat: false,
                        ..
                    },
                ..
            } => match code {
                KeyCode::Escape | KeyCode::KeyQ | KeyCode::KeyX => {
                    event_loop.exit();
                }
                _ => (),
            },
            WindowEvent::Resized(size) => {
                if let Err(err) = app.on_resize(size.width, size.height) {
                    error!("resize failed: {err}");
                    event_loop.exit();
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = app.on_redraw(&self.world) {
                    error!("render failed: {err}");
                    event_loop.exit();
                }
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        match self.app.as_ref() {
            Some(app) if !self.world.is_over() => {
                event_loop.set_control_flow(ControlFlow::WaitUntil(app.next_update));
            }
            _ => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }
}
