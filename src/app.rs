use std::time::{Duration, Instant};

use sdl2::{AudioSubsystem, Sdl};
use tracing::{debug, info, warn};

use crate::constants::{LOOP_TIME, WINDOW_SIZE};
use crate::error::{GameError, GameResult};
use crate::game::Game;

/// Main application wrapper that manages SDL initialization, window lifecycle, and the game loop.
pub struct App {
    pub game: Game,
    last_tick: Instant,
    // Keep SDL alive for the app lifetime so subsystems (audio) are not shut down
    _sdl_context: Sdl,
    _audio_subsystem: AudioSubsystem,
}

impl App {
    /// Initializes SDL subsystems, creates the game window, and sets up the game state.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Sdl` if any SDL initialization step fails.
    pub fn new() -> GameResult<Self> {
        info!("Initializing SDL2 application");
        let sdl_context = sdl2::init().map_err(GameError::Sdl)?;
        let video_subsystem = sdl_context.video().map_err(GameError::Sdl)?;
        let audio_subsystem = sdl_context.audio().map_err(GameError::Sdl)?;
        let event_pump = sdl_context.event_pump().map_err(GameError::Sdl)?;

        debug!(width = WINDOW_SIZE.x, height = WINDOW_SIZE.y, "Creating game window");
        let window = video_subsystem
            .window("Bug Squasher", WINDOW_SIZE.x, WINDOW_SIZE.y)
            .position_centered()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        // Pointer deltas drive the look controls.
        sdl_context.mouse().set_relative_mouse_mode(true);

        info!("Starting game initialization");
        let game = Game::new(canvas, event_pump, &audio_subsystem);

        info!("Application initialization completed successfully");
        Ok(App {
            game,
            last_tick: Instant::now(),
            _sdl_context: sdl_context,
            _audio_subsystem: audio_subsystem,
        })
    }

    /// Executes a single frame of the game loop with consistent timing and optional sleep.
    ///
    /// # Returns
    ///
    /// `true` if the game should continue running, `false` if the game requested exit.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();

        let dt = self.last_tick.elapsed().as_secs_f32();
        self.last_tick = start;

        let exit = self.game.tick(dt);
        if exit {
            return false;
        }

        // Sleep if we still have time left
        if start.elapsed() < LOOP_TIME {
            let time = LOOP_TIME.saturating_sub(start.elapsed());
            if time != Duration::ZERO {
                spin_sleep::sleep(time);
            }
        } else {
            warn!("Game loop behind schedule by: {:?}", start.elapsed() - LOOP_TIME);
        }

        true
    }
}
