//! Stick Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::f64::consts::TAU;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use stick_dash::consts::*;
    use stick_dash::platform::InputState;
    use stick_dash::sim::{AnimState, Facing, FixedStep, GameEvent, GameState, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        clock: FixedStep,
        input: InputState,
        ctx: CanvasRenderingContext2d,
        last_time: f64,
    }

    impl Game {
        fn new(seed: u64, ctx: CanvasRenderingContext2d) -> Self {
            Self {
                state: GameState::new(seed),
                clock: FixedStep::default(),
                input: InputState::new(),
                ctx,
                last_time: 0.0,
            }
        }

        /// Run however many fixed ticks this frame's delta covers
        fn update(&mut self, dt: f32) {
            for _ in 0..self.clock.advance(dt) {
                let input = self.input.tick_input();
                for event in tick(&mut self.state, &input) {
                    match event {
                        GameEvent::GoalReached { .. } => {
                            log::info!("Level {} complete, press R", self.state.level)
                        }
                        GameEvent::LevelAdvanced { level } => log::info!("Level {}", level),
                        _ => {}
                    }
                }
            }
        }

        /// Draw the current frame
        fn render(&self) {
            let ctx = &self.ctx;
            let state = &self.state;

            ctx.set_fill_style_str("#87CEEB");
            ctx.fill_rect(0.0, 0.0, WORLD_WIDTH as f64, WORLD_HEIGHT as f64);

            ctx.set_fill_style_str("#FFFFFF");
            for cloud in &state.clouds {
                let r = cloud.rect;
                ctx.begin_path();
                let _ = ctx.ellipse(
                    (r.x + r.width / 2.0) as f64,
                    (r.y + r.height / 2.0) as f64,
                    (r.width / 2.0) as f64,
                    (r.height / 2.0) as f64,
                    0.0,
                    0.0,
                    TAU,
                );
                ctx.fill();
            }

            for platform in &state.platforms {
                let r = platform.rect;
                ctx.set_fill_style_str("#8B4513");
                ctx.fill_rect(r.x as f64, r.y as f64, r.width as f64, r.height as f64);
                ctx.set_fill_style_str("#A0522D");
                ctx.fill_rect(r.x as f64, r.y as f64, r.width as f64, 5.0);
            }

            ctx.set_fill_style_str("#FFD700");
            for coin in state.coins.iter().filter(|c| !c.collected) {
                let r = coin.rect;
                let half_width = (r.width / 2.0 * coin.rotation.cos().abs()).max(0.5);
                ctx.begin_path();
                let _ = ctx.ellipse(
                    (r.x + r.width / 2.0) as f64,
                    (r.y + r.height / 2.0) as f64,
                    half_width as f64,
                    (r.height / 2.0) as f64,
                    0.0,
                    0.0,
                    TAU,
                );
                ctx.fill();
            }

            self.draw_goal();
            self.draw_player();

            for p in state.particles.iter() {
                let (r, g, b) = p.color.rgb();
                ctx.set_fill_style_str(&format!("rgba({}, {}, {}, {})", r, g, b, p.alpha.max(0.0)));
                ctx.begin_path();
                let _ = ctx.arc(p.pos.x as f64, p.pos.y as f64, p.size as f64, 0.0, TAU);
                ctx.fill();
            }

            self.draw_hud();
        }

        fn draw_goal(&self) {
            let ctx = &self.ctx;
            let goal = &self.state.goal;
            let (x, y) = (goal.rect.x as f64, goal.rect.y as f64);
            let wave = (goal.waving.sin() * 5.0) as f64;

            ctx.set_fill_style_str("#8B4513");
            ctx.fill_rect(x, y, 5.0, goal.rect.height as f64);
            ctx.set_fill_style_str("#FF0000");
            ctx.begin_path();
            ctx.move_to(x + 5.0, y);
            ctx.line_to(x + 30.0, y + 15.0 + wave);
            ctx.line_to(x + 5.0, y + 30.0);
            ctx.fill();
        }

        fn draw_player(&self) {
            let ctx = &self.ctx;
            let player = &self.state.player;
            let cx = (player.pos.x + player.size.x / 2.0) as f64;
            let top = player.pos.y as f64;
            // Limb swing cycles every 5 ticks through 4 poses
            let pose = ((self.state.frame_count / 5) % 4) as f64;
            let swing = (pose * std::f64::consts::FRAC_PI_2).sin() * 5.0;
            let facing = match player.facing {
                Facing::Right => 1.0,
                Facing::Left => -1.0,
            };

            ctx.set_fill_style_str("#000000");
            ctx.set_stroke_style_str("#000000");
            ctx.set_line_width(2.0);

            ctx.begin_path();
            let _ = ctx.arc(cx, top + 10.0, 10.0, 0.0, TAU);
            ctx.fill();

            ctx.begin_path();
            ctx.move_to(cx, top + 20.0);
            ctx.line_to(cx, top + 35.0);
            match player.anim_state() {
                AnimState::Run => {
                    ctx.move_to(cx, top + 25.0);
                    ctx.line_to(cx - 10.0 * facing, top + 30.0 + swing);
                    ctx.move_to(cx, top + 25.0);
                    ctx.line_to(cx + 10.0 * facing, top + 30.0 - swing);
                    ctx.move_to(cx, top + 35.0);
                    ctx.line_to(cx - 10.0 * facing, top + 50.0 - swing);
                    ctx.move_to(cx, top + 35.0);
                    ctx.line_to(cx + 10.0 * facing, top + 50.0 + swing);
                }
                AnimState::Jump => {
                    ctx.move_to(cx, top + 25.0);
                    ctx.line_to(cx - 8.0, top + 20.0);
                    ctx.move_to(cx, top + 25.0);
                    ctx.line_to(cx + 8.0, top + 20.0);
                    ctx.move_to(cx, top + 35.0);
                    ctx.line_to(cx - 12.0, top + 45.0);
                    ctx.move_to(cx, top + 35.0);
                    ctx.line_to(cx + 12.0, top + 45.0);
                }
                AnimState::Idle => {
                    ctx.move_to(cx, top + 25.0);
                    ctx.line_to(cx - 10.0, top + 30.0);
                    ctx.move_to(cx, top + 25.0);
                    ctx.line_to(cx + 10.0, top + 30.0);
                    ctx.move_to(cx, top + 35.0);
                    ctx.line_to(cx - 10.0, top + 50.0);
                    ctx.move_to(cx, top + 35.0);
                    ctx.line_to(cx + 10.0, top + 50.0);
                }
            }
            ctx.stroke();
        }

        fn draw_hud(&self) {
            let ctx = &self.ctx;
            let state = &self.state;

            ctx.set_fill_style_str("#FFFFFF");
            ctx.set_font("22px Arial");
            let _ = ctx.fill_text(&format!("Score: {}", state.score), 20.0, 30.0);
            let _ = ctx.fill_text(&format!("Level: {}", state.level), 20.0, 60.0);

            if state.goal_reached() {
                ctx.set_fill_style_str("rgba(0, 0, 0, 0.7)");
                ctx.fill_rect(0.0, 0.0, WORLD_WIDTH as f64, WORLD_HEIGHT as f64);
                ctx.set_fill_style_str("#FFFFFF");
                ctx.set_text_align("center");
                let mid_x = (WORLD_WIDTH / 2.0) as f64;
                let mid_y = (WORLD_HEIGHT / 2.0) as f64;
                ctx.set_font("40px Arial");
                let _ = ctx.fill_text(&format!("Level {} Complete!", state.level), mid_x, mid_y - 30.0);
                ctx.set_font("25px Arial");
                let _ = ctx.fill_text(&format!("Score: {}", state.score), mid_x, mid_y + 20.0);
                ctx.set_font("20px Arial");
                let _ = ctx.fill_text("Press R to play next level", mid_x, mid_y + 60.0);
                ctx.set_text_align("left");
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Stick Dash starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document");
            return;
        };

        let canvas: HtmlCanvasElement = match document
            .get_element_by_id("game-canvas")
            .and_then(|el| el.dyn_into().ok())
        {
            Some(canvas) => canvas,
            None => {
                log::error!("No #game-canvas element");
                return;
            }
        };
        canvas.set_width(WORLD_WIDTH as u32);
        canvas.set_height(WORLD_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = match canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into().ok())
        {
            Some(ctx) => ctx,
            None => {
                log::error!("Canvas 2D context unavailable");
                return;
            }
        };

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, ctx)));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone());
        request_animation_frame(game);

        log::info!("Stick Dash running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().input.key_down(&event.key()) {
                    // Keep arrow keys from scrolling the page
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().input.key_up(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: key-ups are lost, so drop held keys
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().input.release_all();
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless run: plays a scripted session and prints the final state as JSON
///
/// Usage: `stick-dash [TUNING_JSON] [TICKS]`
#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use stick_dash::Tuning;
    use stick_dash::platform::InputState;
    use stick_dash::sim::{GameEvent, GameState, tick};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Stick Dash (native) starting...");

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read tuning file {}", path))?;
            Tuning::from_json(&json).with_context(|| format!("Invalid tuning file {}", path))?
        }
        None => Tuning::default(),
    };
    let ticks: u64 = match args.next() {
        Some(n) => n.parse().with_context(|| format!("Invalid tick count {:?}", n))?,
        None => 1200,
    };

    let mut state = GameState::with_tuning(0x5715_DA54, tuning);
    let mut input = InputState::new();
    let mut completed_at = None;

    // Run right, hop every so often, and move on a second after each goal
    input.key_down("ArrowRight");
    for t in 0..ticks {
        if t % 45 == 0 {
            input.key_down("ArrowUp");
        } else {
            input.key_up("ArrowUp");
        }
        if completed_at.is_some_and(|done| t >= done + 60) {
            input.key_down("r");
            completed_at = None;
        } else {
            input.key_up("r");
        }

        let tick_input = input.tick_input();
        for event in tick(&mut state, &tick_input) {
            match event {
                GameEvent::GoalReached { .. } => completed_at = Some(t),
                GameEvent::CoinCollected { index, .. } => {
                    log::info!("tick {}: coin {} (score {})", t, index, state.score)
                }
                _ => {}
            }
        }
    }

    log::info!(
        "Finished {} ticks: level {}, score {}, {} particles live",
        ticks,
        state.level,
        state.score,
        state.particles.len()
    );
    let snapshot = serde_json::to_string_pretty(&state).context("Failed to serialize state")?;
    println!("{}", snapshot);
    Ok(())
}
