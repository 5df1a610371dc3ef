use std::thread;
use std::time::Duration;

use log::debug;

use crate::error::AppError;
use crate::input::{Direction, PolledInput};
use crate::session::{Session, Snapshot};

/// Draws frames for the running session.
pub trait RenderSurface {
    /// Called once before the first tick and once after every tick.
    fn draw_frame(&mut self, snapshot: &Snapshot) -> Result<(), AppError>;

    /// Called exactly once, after the session has terminated.
    fn draw_game_over(&mut self, snapshot: &Snapshot) -> Result<(), AppError>;
}

/// Non-blocking input polled once per tick.
pub trait InputSource {
    /// `heading` is the snake's direction at the start of the tick, used to
    /// collapse several key presses into one valid request.
    fn poll(&mut self, heading: Direction) -> Result<PolledInput, AppError>;
}

/// Performs the fixed wall-clock pause between ticks.
pub trait Pacer {
    fn wait(&mut self, duration: Duration);
}

/// Sleeps the current thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn wait(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Loop timing.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Timing {
    pub tick_interval: Duration,
    pub game_over_hold: Duration,
}

/// Plays `session` to completion: poll, tick, draw, wait, repeat until
/// terminated, then draw the game-over frame once and hold it.
///
/// Returns the final snapshot.
pub fn run<S, I, P>(
    session: &mut Session,
    surface: &mut S,
    input: &mut I,
    pacer: &mut P,
    timing: Timing,
) -> Result<Snapshot, AppError>
where
    S: RenderSurface + ?Sized,
    I: InputSource + ?Sized,
    P: Pacer + ?Sized,
{
    surface.draw_frame(&session.snapshot())?;

    while session.is_active() {
        let polled = input.poll(session.heading())?;
        if polled.quit {
            debug!("quit requested before tick {}", session.tick_count + 1);
            session.quit();
            break;
        }

        let outcome = session.tick(polled.direction);
        surface.draw_frame(&outcome.snapshot)?;

        if outcome.snapshot.is_active() {
            pacer.wait(timing.tick_interval);
        }
    }

    let final_snapshot = match session.take_game_over() {
        Some(snapshot) => {
            surface.draw_game_over(&snapshot)?;
            pacer.wait(timing.game_over_hold);
            snapshot
        }
        None => session.snapshot(),
    };

    Ok(final_snapshot)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::time::Duration;

    use crate::error::AppError;
    use crate::grid::{Cell, Field};
    use crate::input::{Direction, PolledInput};
    use crate::session::{Session, Snapshot, TerminationCause};

    use super::{run, InputSource, Pacer, RenderSurface, Timing};

    #[derive(Default)]
    struct Recorder {
        frames: Vec<Snapshot>,
        game_overs: Vec<Snapshot>,
    }

    impl RenderSurface for Recorder {
        fn draw_frame(&mut self, snapshot: &Snapshot) -> Result<(), AppError> {
            self.frames.push(snapshot.clone());
            Ok(())
        }

        fn draw_game_over(&mut self, snapshot: &Snapshot) -> Result<(), AppError> {
            self.game_overs.push(snapshot.clone());
            Ok(())
        }
    }

    struct Script(VecDeque<PolledInput>);

    impl InputSource for Script {
        fn poll(&mut self, _heading: Direction) -> Result<PolledInput, AppError> {
            Ok(self.0.pop_front().unwrap_or_default())
        }
    }

    #[derive(Default)]
    struct CountingPacer(Vec<Duration>);

    impl Pacer for CountingPacer {
        fn wait(&mut self, duration: Duration) {
            self.0.push(duration);
        }
    }

    const TIMING: Timing = Timing {
        tick_interval: Duration::from_millis(100),
        game_over_hold: Duration::from_millis(2_000),
    };

    #[test]
    fn runs_until_wall_and_reports_game_over_once() {
        let mut session = Session::new_with_seed(Field::CLASSIC, 11);
        session.fruit.place(Cell::new(0, 0));
        let mut surface = Recorder::default();
        let mut pacer = CountingPacer::default();

        let final_snapshot = run(
            &mut session,
            &mut surface,
            &mut Script(VecDeque::new()),
            &mut pacer,
            TIMING,
        )
        .expect("scripted run should not fail");

        // Head starts at y = 300 and dies on the sixteenth step up (y = -20).
        assert_eq!(final_snapshot.tick, 16);
        assert_eq!(final_snapshot.cause, Some(TerminationCause::Wall));
        assert_eq!(surface.frames.len(), 17);
        assert_eq!(surface.game_overs, vec![final_snapshot]);
        assert_eq!(pacer.0.len(), 16);
        assert_eq!(pacer.0.last(), Some(&TIMING.game_over_hold));
    }

    #[test]
    fn quit_stops_before_advancing() {
        let mut session = Session::new_with_seed(Field::CLASSIC, 12);
        session.fruit.place(Cell::new(0, 0));
        let mut surface = Recorder::default();
        let script = VecDeque::from([
            PolledInput::default(),
            PolledInput {
                direction: Some(Direction::Left),
                quit: true,
            },
        ]);

        let final_snapshot = run(
            &mut session,
            &mut surface,
            &mut Script(script),
            &mut CountingPacer::default(),
            TIMING,
        )
        .expect("scripted run should not fail");

        assert_eq!(final_snapshot.tick, 1);
        assert_eq!(final_snapshot.heading, Direction::Up);
        assert_eq!(final_snapshot.cause, Some(TerminationCause::Quit));
        assert_eq!(surface.game_overs.len(), 1);
    }
}
