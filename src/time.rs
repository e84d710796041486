//! Simulation clock and the per-frame driver that advances it.
//!
//! The clock integrates simulated days from host frame timestamps. The
//! [`FrameDriver`] resource is the frame-loop subscription: it is acquired at
//! startup and released when the app exits, and the clock only advances while
//! it is held.

use bevy::prelude::*;
use bevy::time::Real;

use crate::orbit::OrbitalState;
pub use crate::types::ClockError;
use crate::types::{MILLIS_PER_SECOND, SpeedLevel};

/// Plugin providing the simulation clock and its frame driver.
pub struct ClockPlugin;

impl Plugin for ClockPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationClock>()
            .add_systems(Startup, acquire_frame_driver)
            .add_systems(Update, advance_clock.run_if(resource_exists::<FrameDriver>))
            .add_systems(Last, release_frame_driver.run_if(resource_exists::<FrameDriver>));
    }
}

/// Simulated time for the running session.
///
/// Single writer: the frame driver calls [`SimulationClock::tick`] once per
/// frame; controls mutate speed, pause and rotation between frames.
#[derive(Resource, Clone, Debug)]
pub struct SimulationClock {
    /// Simulated days since the epoch. Never negative.
    elapsed_days: f64,
    speed: SpeedLevel,
    paused: bool,
    rotation_enabled: bool,
    /// Timestamp of the previous frame in ms; `None` until the first frame
    /// after a (re)start.
    last_millis: Option<f64>,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self {
            elapsed_days: 0.0,
            speed: SpeedLevel::default(),
            paused: false,
            rotation_enabled: true,
            last_millis: None,
        }
    }
}

impl SimulationClock {
    /// Advance from a host frame timestamp in milliseconds.
    ///
    /// The first frame after a (re)start only records the reference. Later
    /// frames advance by the full real delta times the speed multiplier,
    /// unless paused. Timestamps at or before the reference advance nothing.
    pub fn tick(&mut self, now_millis: f64) {
        if !now_millis.is_finite() {
            warn!("Ignoring non-finite frame timestamp: {now_millis}");
            return;
        }

        let Some(last_millis) = self.last_millis.replace(now_millis) else {
            return;
        };

        if self.paused {
            return;
        }

        let delta_seconds = ((now_millis - last_millis) / MILLIS_PER_SECOND).max(0.0);
        self.elapsed_days += delta_seconds * self.speed.days_per_second();
    }

    /// Select a speed level.
    pub fn set_speed_level(&mut self, level: SpeedLevel) {
        if self.speed != level {
            info!("Speed: {}", level.label());
        }
        self.speed = level;
    }

    /// Select a speed level by index (0–3).
    pub fn set_speed_index(&mut self, index: usize) -> Result<(), ClockError> {
        let level = SpeedLevel::from_index(index)?;
        self.set_speed_level(level);
        Ok(())
    }

    /// Pause or resume. The reference timestamp keeps updating while paused,
    /// so resuming does not jump.
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            info!("Simulation {}", if paused { "paused" } else { "running" });
        }
        self.paused = paused;
    }

    /// Flip the pause state.
    pub fn toggle_paused(&mut self) {
        self.set_paused(!self.paused);
    }

    /// Enable or disable axial rotation.
    pub fn set_rotation_enabled(&mut self, enabled: bool) {
        if self.rotation_enabled != enabled {
            info!("Earth rotation {}", if enabled { "enabled" } else { "disabled" });
        }
        self.rotation_enabled = enabled;
    }

    /// Flip the rotation flag.
    pub fn toggle_rotation(&mut self) {
        self.set_rotation_enabled(!self.rotation_enabled);
    }

    /// Back to the epoch. Controls keep their current values.
    pub fn reset(&mut self) {
        self.elapsed_days = 0.0;
        self.last_millis = None;
        info!("Simulation reset to epoch");
    }

    /// Forget the reference timestamp; the next frame starts a new delta chain.
    pub fn restart(&mut self) {
        self.last_millis = None;
    }

    pub fn elapsed_days(&self) -> f64 {
        self.elapsed_days
    }

    pub fn speed(&self) -> SpeedLevel {
        self.speed
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn rotation_enabled(&self) -> bool {
        self.rotation_enabled
    }

    /// Evaluate the orbit model at the current time.
    pub fn orbital_state(&self) -> OrbitalState {
        OrbitalState::at(self.elapsed_days, self.rotation_enabled)
    }
}

/// Held while the frame loop drives the clock.
///
/// Dropping it (on exit, or when the world is torn down on any other path)
/// releases the subscription.
#[derive(Resource, Debug, Default)]
pub struct FrameDriver {
    /// Frames delivered to the clock since acquisition.
    pub frames: u64,
}

impl Drop for FrameDriver {
    fn drop(&mut self) {
        info!("Frame driver released after {} frames", self.frames);
    }
}

/// Acquire the frame subscription at session start.
pub fn acquire_frame_driver(mut commands: Commands, mut clock: ResMut<SimulationClock>) {
    clock.restart();
    commands.insert_resource(FrameDriver::default());
    info!("Frame driver acquired");
}

/// Feed the host frame timestamp into the clock.
///
/// Real time is used so the clock integrates wall-clock deltas, not the
/// virtual time Bevy may scale or clamp.
fn advance_clock(
    mut clock: ResMut<SimulationClock>,
    mut driver: ResMut<FrameDriver>,
    time: Res<Time<Real>>,
) {
    clock.tick(time.elapsed_secs_f64() * MILLIS_PER_SECOND);
    driver.frames += 1;
}

/// Release the frame subscription once the app has been asked to exit.
fn release_frame_driver(mut commands: Commands, mut exits: MessageReader<AppExit>) {
    if exits.read().next().is_some() {
        commands.remove_resource::<FrameDriver>();
    }
}
