// main.rs
use anyhow::{Context, Result, anyhow};
use raylib::core::texture::RaylibTexture2D;
use raylib::prelude::*;
use tracing::{info, warn};

use raycast_maze::config::GameConfig;
use raycast_maze::core::player::MoveIntent;
use raycast_maze::core::session::Session;
use raycast_maze::logging::init_tracing;
use raycast_maze::render::casters::TEXTURE_SIZE;
use raycast_maze::render::framebuffer::{Color as Rgba, Framebuffer};
use raycast_maze::render::minimap::draw_minimap;
use raycast_maze::render::render3d::render_scene;
use raycast_maze::render::textures::WallTexture;

fn load_config() -> Result<GameConfig> {
    match std::env::args().nth(1) {
        Some(path) => GameConfig::load(&path).with_context(|| format!("loading config {path}")),
        None => Ok(GameConfig::default()),
    }
}

fn read_intent(rl: &RaylibHandle) -> MoveIntent {
    MoveIntent {
        forward: rl.is_key_down(KeyboardKey::KEY_UP) || rl.is_key_down(KeyboardKey::KEY_W),
        backward: rl.is_key_down(KeyboardKey::KEY_DOWN) || rl.is_key_down(KeyboardKey::KEY_S),
        rotate_left: rl.is_key_down(KeyboardKey::KEY_LEFT) || rl.is_key_down(KeyboardKey::KEY_A),
        rotate_right: rl.is_key_down(KeyboardKey::KEY_RIGHT) || rl.is_key_down(KeyboardKey::KEY_D),
    }
}

fn make_target(rl: &mut RaylibHandle, thread: &RaylibThread, w: u32, h: u32) -> Result<Texture2D> {
    let img = Image::gen_image_color(w as i32, h as i32, Color::BLACK);
    rl.load_texture_from_image(thread, &img).map_err(|e| anyhow!("creating frame texture: {e}"))
}

fn main() -> Result<()> {
    init_tracing();
    let config = load_config()?;
    let mut session = Session::new(config)?;
    let (w, h) = (session.config().width, session.config().height);

    let (mut window, raylib_thread) = raylib::init()
        .size(w as i32, h as i32)
        .title("Raycast Maze")
        .resizable()
        .build();
    window.set_target_fps(60);

    let texture = WallTexture::stripes(TEXTURE_SIZE, TEXTURE_SIZE);
    let mut framebuffer = Framebuffer::new(w, h);
    let mut target = make_target(&mut window, &raylib_thread, w, h)?;

    while !window.window_should_close() {
        // Cambio de tamaño: caster, framebuffer y textura destino
        if window.is_window_resized() {
            let nw = window.get_screen_width().max(1) as u32;
            let nh = window.get_screen_height().max(1) as u32;
            session.resize(nw, nh)?;
            framebuffer.resize(nw, nh);
            target = make_target(&mut window, &raylib_thread, nw, nh)?;
        }

        let dt = window.get_frame_time();
        session.tick(read_intent(&window), dt);

        let columns = session.render();
        render_scene(&mut framebuffer, &columns, &texture);
        draw_minimap(&mut framebuffer, &session.occupancy(), session.player(), session.enemies());
        if let Some(alpha) = session.idle_effect_alpha() {
            framebuffer.blend_overlay(Rgba::BLUE, alpha);
        }
        if let Err(e) = target.update_texture(framebuffer.as_rgba_bytes()) {
            // se salta el frame; el anterior queda en pantalla
            warn!(error = ?e, "frame upload failed");
        }

        let fps_now = window.get_fps();
        {
            let mut d = window.begin_drawing(&raylib_thread);
            d.clear_background(Color::BLACK);
            d.draw_texture(&target, 0, 0, Color::WHITE);
            d.draw_text(&format!("FPS: {}", fps_now), 10, framebuffer.height as i32 - 30, 20, Color::WHITE);
        }
    }

    info!(seconds = session.clock(), "session ended");
    Ok(())
}
