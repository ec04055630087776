//! Generator constants and runtime configuration defaults

/// Default grid width in cells
pub const DEFAULT_WIDTH: i32 = 8;
/// Default grid height in cells
pub const DEFAULT_HEIGHT: i32 = 8;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default step budget for a single attempt
pub const DEFAULT_MAX_STEPS: usize = 1_000_000;

/// Default number of attempts, each with a fresh seed, before giving up
pub const DEFAULT_ATTEMPTS: usize = 1;

// Every search node holds its own copy of the tiling, so memory grows with
// the square of the cell count along a deep search path
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: i32 = 256;

// Rendering settings
/// Side length of one grid cell in pixels
pub const DEFAULT_CELL_SIZE: u32 = 16;
/// Largest accepted cell size in pixels
pub const MAX_CELL_SIZE: u32 = 256;
/// Fill colours cycled by tile tag
pub const TILE_PALETTE: [[u8; 4]; 2] = [[192, 192, 192, 255], [128, 128, 128, 255]];
/// Outline colour drawn around each tile
pub const BORDER_COLOR: [u8; 4] = [0, 0, 0, 255];
/// Background colour of free cells
pub const EMPTY_COLOR: [u8; 4] = [255, 255, 255, 255];

// Visualization settings
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 10;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;
/// Upper bound on captured frames; older steps are thinned beyond this
pub const MAX_CAPTURED_FRAMES: usize = 2_000;

/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Steps between progress bar refreshes
pub const PROGRESS_REFRESH_INTERVAL: usize = 64;
