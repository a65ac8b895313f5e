use terrastep_render_raylib::RaylibCanvas;
use terrastep_runtime::{GameConfig, Session, TickOutcome};

use crate::input::KeyboardInput;

/// Opens the window and runs the frame loop until a quit request.
/// raylib panics from `build()` when no window can be created.
pub fn run(config: GameConfig) {
    let view = config.view.clone();
    let (mut rl, thread) = raylib::init()
        .size(view.screen_width, view.screen_height)
        .title("terrastep")
        .build();
    rl.set_target_fps(view.target_fps);
    log::info!(
        "world seed {} on a {}x{} grid of {}px tiles",
        config.world.seed,
        view.grid_width(),
        view.grid_height(),
        view.tile_size
    );
    if config.world.color_seed.is_none() {
        log::info!("no color seed; biome colors are random for this run");
    }

    let mut session = Session::new(config);
    loop {
        let outcome = session.step(&mut KeyboardInput::new(&rl));
        if outcome == TickOutcome::Quit {
            break;
        }
        let mut canvas = RaylibCanvas::begin(&mut rl, &thread);
        session.render(&mut canvas);
        if view.show_hud {
            canvas.draw_fps(12, 40);
        }
        canvas.present();
    }

    let stats = session.store().stats();
    let marks = session.markers().stats();
    log::info!(
        "session ended after {} tick(s): {} tiles stored over {} ensure call(s), {} unclaimed attempts, {} marker(s) on {} tile(s)",
        session.tick_count(),
        stats.tiles,
        stats.ensure_calls,
        stats.unclaimed_total,
        marks.markers,
        marks.distinct_tiles
    );
}
