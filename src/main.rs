//! Telon demo entry point.
//!
//! A small interactive scene exercising the whole stack:
//! - window configuration from `config.ini`
//! - stage entities (text, optional sprite-sheet actor) with Y-up
//!   coordinates and the 0-50 transparency scale
//! - a CPU canvas uploaded as a texture
//! - event dispatch with hotkeys (Alt+Q quit, Alt+P pause, F4 screenshot)
//! - mouse tracking in stage coordinates
//! - sound playback on a dedicated audio thread
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --image assets/sheet.png --columns 4 --rows 2
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::{Path, PathBuf};

use clap::Parser;
use log::{debug, info, warn};

use telon::audio::{AudioMessage, setup_audio, shutdown_audio};
use telon::backend::Backend;
use telon::backend::config::WindowConfig;
use telon::backend::event::Signal;
use telon::backend::keys::{ControlKey, KeyBindings};
use telon::canvas::Canvas;
use telon::color::Color;
use telon::grid::Grid;
use telon::runner::{Window, draw_actor, draw_canvas, draw_circle_stage, draw_text_entity};
use telon::stage::{Actor, Anchored, Text};

/// Telon 2D stage
#[derive(Parser)]
#[command(version, about = "Telon 2D stage demo")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Window title override.
    #[arg(long)]
    title: Option<String>,

    /// Skip centering the window on the desktop.
    #[arg(long)]
    no_center: bool,

    /// Key bindings JSON file.
    #[arg(long, value_name = "PATH")]
    bindings: Option<PathBuf>,

    /// Sprite sheet for the demo actor.
    #[arg(long, value_name = "PATH")]
    image: Option<String>,

    /// Sheet columns, used with --image.
    #[arg(long, default_value_t = 1)]
    columns: u32,

    /// Sheet rows, used with --image.
    #[arg(long, default_value_t = 1)]
    rows: u32,

    /// Sound played on mouse clicks.
    #[arg(long, value_name = "PATH")]
    sound: Option<String>,
}

const ACTOR_SPEED: f32 = 120.0;
const FRAME_STEP: f32 = 0.15;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = WindowConfig::with_path(&cli.config);
    config.load_from_file().ok(); // ignore errors, use defaults
    if let Some(title) = &cli.title {
        config.title = title.clone();
    }

    let mut window = Window::open(&config);
    if !cli.no_center {
        window.center();
    }

    let mut backend = Backend::from_config(&config);
    if let Some(path) = &cli.bindings {
        match KeyBindings::load_from_file(path) {
            Ok(bindings) => *backend.bindings_mut() = bindings,
            Err(e) => warn!("key bindings not loaded: {e}"),
        }
    }

    let audio = setup_audio();
    if let Some(path) = &cli.sound {
        audio.load_sound("click", path.clone());
    }

    // --------------- Scene ---------------
    let measurer = window.measurer();
    let mut title_text = Text::new(config.title.clone(), &measurer);
    title_text.set_position(0.0, 160.0);
    let mut typed = Text::new("type something", &measurer);
    typed.set_position(0.0, -160.0);
    typed.set_transparency(25);

    // Optional animated actor driven by a sprite-sheet grid.
    let mut actor_scene = match &cli.image {
        Some(path) => match window.load_image(path) {
            Ok(handle) => {
                let grid = Grid::new(handle.clone(), cli.columns, cli.rows);
                let mut actor = Actor::new(handle);
                grid.apply_to(&mut actor);
                Some((actor, grid, 0.0_f32))
            }
            Err(e) => {
                warn!("{e}");
                None
            }
        },
        None => None,
    };

    let mut canvas = Canvas::new(160, 120);
    paint_backdrop(&mut canvas);
    let canvas_texture = window
        .create_canvas_texture(&canvas)
        .expect("Failed to create canvas texture");

    let mut paused = false;
    let mut running = true;
    let mut input_buffer = String::new();

    while running {
        let events = window.poll_events();
        for signal in backend.process_events(events) {
            match signal {
                Signal::Quit => running = false,
                Signal::TogglePause => {
                    paused = !paused;
                    info!("paused: {paused}");
                }
                Signal::SaveScreenshot => match window.capture_screenshot(Path::new(".")) {
                    Ok(path) => info!("screenshot at {}", path.display()),
                    Err(e) => warn!("{e}"),
                },
                Signal::ListActors => {
                    info!("actors: title, typed{}", if actor_scene.is_some() { ", sheet" } else { "" });
                }
                Signal::PrintHandlers => info!("handlers: click -> sound"),
                Signal::DebugKey(key) => debug!("debug key {key:?}"),
                Signal::Escape => {
                    paused = !paused;
                    info!("paused: {paused}");
                }
                Signal::KeyCharacter(ch) => {
                    input_buffer.push(ch);
                    typed.set_content(input_buffer.clone(), &measurer);
                }
                Signal::MouseMoved { x, y, dx, dy } => {
                    debug!("mouse at ({x:.1}, {y:.1}) delta ({dx:.1}, {dy:.1})");
                }
                Signal::MouseDown { x, y, .. } => {
                    audio.play_sound("click");
                    if let Some((actor, _, _)) = &actor_scene
                        && actor.hits_point(x, y)
                    {
                        info!("actor clicked");
                    }
                }
                Signal::MouseUp { .. } => {}
                Signal::MouseWheel { delta } => {
                    let size = (title_text.font_size() + delta * 2.0).clamp(8.0, 80.0);
                    title_text.set_font_size(size, &measurer);
                }
            }
        }

        for message in audio.poll_messages() {
            match message {
                AudioMessage::SoundLoaded { id } => info!("sound '{id}' ready"),
                AudioMessage::SoundLoadFailed { id, error } => {
                    warn!("sound '{id}' failed: {error}")
                }
            }
        }

        let dt = window.frame_time();
        if !paused
            && let Some((actor, grid, timer)) = &mut actor_scene
        {
            let (mut x, mut y) = actor.position();
            if window.control_held(backend.bindings(), ControlKey::Left) {
                x -= ACTOR_SPEED * dt;
            }
            if window.control_held(backend.bindings(), ControlKey::Right) {
                x += ACTOR_SPEED * dt;
            }
            if window.control_held(backend.bindings(), ControlKey::Down) {
                y -= ACTOR_SPEED * dt;
            }
            if window.control_held(backend.bindings(), ControlKey::Up) {
                y += ACTOR_SPEED * dt;
            }
            actor.set_position(x, y);

            *timer += dt;
            if *timer >= FRAME_STEP {
                *timer -= FRAME_STEP;
                if grid.advance() {
                    debug!("sheet loop complete");
                }
                grid.apply_to(actor);
            }
        }

        let (mouse_x, mouse_y) = backend.mouse_position();
        window.frame(&backend, Color::GRAY, |d2, assets| {
            draw_canvas(d2, &canvas_texture, -80.0, 60.0);
            if let Some((actor, _, _)) = &actor_scene {
                draw_actor(d2, assets, actor);
            }
            draw_text_entity(d2, assets, &title_text);
            draw_text_entity(d2, assets, &typed);
            draw_circle_stage(d2, mouse_x, mouse_y, 6.0, Color::RED, Color::BLACK);
        });
    }

    shutdown_audio(audio);
    info!("bye");
}

/// Fill the demo canvas with a frame, a diagonal cross and a circle.
fn paint_backdrop(canvas: &mut Canvas) {
    let (w, h) = (canvas.width() as i32, canvas.height() as i32);
    let ctx = canvas.context_mut();
    ctx.set_color(Color {
        r: 24,
        g: 24,
        b: 48,
        a: 255,
    });
    ctx.fill();
    ctx.set_color(Color::WHITE);
    ctx.line(0, 0, w - 1, 0);
    ctx.line(0, h - 1, w - 1, h - 1);
    ctx.line(0, 0, 0, h - 1);
    ctx.line(w - 1, 0, w - 1, h - 1);
    ctx.set_color(Color::GREEN);
    ctx.line(0, 0, w - 1, h - 1);
    ctx.line(w - 1, 0, 0, h - 1);
    ctx.set_color(Color::RED);
    ctx.stroke_circle(w / 2, h / 2, (h / 3) as u32);
    canvas.refresh();
}
