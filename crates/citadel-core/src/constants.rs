//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz). Speeds below are displacements per tick.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Playfield ---

/// Logical playfield width.
pub const GAME_WIDTH: f64 = 800.0;

/// Logical playfield height.
pub const GAME_HEIGHT: f64 = 600.0;

/// Height of the ground strip at the bottom of the playfield.
pub const GROUND_MARGIN: f64 = 20.0;

/// The ground line. Rockets at or below this y have struck ground.
pub const GROUND_Y: f64 = GAME_HEIGHT - GROUND_MARGIN;

// --- Rockets ---

/// Minimum base rocket speed (units per tick), before level scaling.
pub const ROCKET_SPEED_MIN: f64 = 0.5;

/// Maximum base rocket speed (units per tick), before level scaling.
pub const ROCKET_SPEED_MAX: f64 = 0.5;

/// Additional rocket speed per level.
pub const ROCKET_LEVEL_SPEED_GAIN: f64 = 0.2;

/// Per-tick spawn probability at level 0 (the base rate).
pub const SPAWN_BASE_RATE: f64 = 0.0075;

/// Additional per-tick spawn probability per level.
pub const SPAWN_LEVEL_RATE: f64 = 0.004;

/// Vertical margin for detonation at the intended target: a rocket within
/// this many units above its target y counts as having reached it.
pub const TARGET_VICINITY_MARGIN: f64 = 5.0;

/// Horizontal threshold for detonation at the intended target.
pub const TARGET_VICINITY_RANGE: f64 = 10.0;

// --- Interceptors ---

/// Interceptor speed (units per tick). Faster than any rocket.
pub const INTERCEPTOR_SPEED: f64 = 14.0;

/// Radius around the aim point within which an interceptor detonates.
pub const ARRIVAL_EPSILON: f64 = 5.0;

/// Fire commands aimed within this many units of the bottom edge are
/// rejected (no degenerate near-instant shots).
pub const NO_FIRE_BAND: f64 = 80.0;

// --- Explosions ---

/// Maximum radius of an interceptor detonation.
pub const EXPLOSION_MAX_RADIUS: f64 = 55.0;

/// Ground-impact explosions are scaled down by this factor.
pub const GROUND_EXPLOSION_SCALE: f64 = 0.8;

/// Radius growth per tick while an explosion is growing.
pub const EXPLOSION_GROW_SPEED: f64 = 2.0;

/// Alpha decay per tick while an explosion is fading.
pub const EXPLOSION_FADE_SPEED: f64 = 0.02;

// --- Damage ---

/// Ground strikes destroy cities and batteries within this radius.
pub const GROUND_DAMAGE_RADIUS: f64 = 30.0;

// --- Scoring & progression ---

/// Score awarded per rocket destroyed by an explosion.
pub const SCORE_PER_ROCKET: u32 = 20;

/// Score at which the game is won.
pub const WIN_SCORE: u32 = 500;

/// Score threshold per level: level N is cleared at N * this.
pub const LEVEL_SCORE_STEP: u32 = 100;

// --- Defended assets ---

/// Horizontal positions of the six cities, on the ground line.
pub const CITY_POSITIONS_X: [f64; 6] = [120.0, 200.0, 280.0, 520.0, 600.0, 680.0];

/// Horizontal positions of the three batteries (left, middle, right).
pub const BATTERY_POSITIONS_X: [f64; 3] = [40.0, 400.0, 760.0];

/// Ammo loadout per battery (left, middle, right).
pub const BATTERY_AMMO: [u32; 3] = [60, 80, 60];
