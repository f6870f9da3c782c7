use crate::color::Rgb;
use crate::numeric::{DensitySpec, Spread};
use crate::wind::WindTuning;

// Per-season tuning. Attribute ranges are `min + random * span` and are part
// of each season's look.

// Responsive sizing
pub const SIZE_REFERENCE_WIDTH: f32 = 768.0; // viewport width at multiplier 1.0
pub const SIZE_MULTIPLIER_MIN: f32 = 0.6;
pub const SIZE_MULTIPLIER_MAX: f32 = 1.2;

// ---------------- Rain ----------------
pub const RAIN_DENSITY: DensitySpec = DensitySpec::new(2.5, 0, 600);
pub const RAIN_WIND: WindTuning = WindTuning::new(3000.0, 0.05, 2.0);
pub const RAIN_WIND_WEIGHT: f32 = 1.0;
pub const RAIN_MARGIN: f32 = 20.0;
pub const RAIN_LENGTH: Spread = Spread::new(10.0, 20.0);
pub const RAIN_SPEED: Spread = Spread::new(6.0, 6.0);
pub const RAIN_DRIFT: Spread = Spread::new(-0.5, 1.0);
pub const RAIN_OPACITY: Spread = Spread::new(0.1, 0.3);
pub const RAIN_WIDTH: Spread = Spread::new(0.5, 1.0);
pub const RAIN_LEAN: f32 = 2.0; // horizontal lean of the streak per unit of wind
pub const RAIN_HEADROOM: f32 = 100.0; // spawn band above the viewport
pub const RAIN_COLOR: Rgb = [174, 194, 224];

// ---------------- Snow ----------------
pub const SNOW_DENSITY: DensitySpec = DensitySpec::new(6.0, 20, 250);
pub const SNOW_WIND: WindTuning = WindTuning::new(4000.0, 0.01, 0.5);
pub const SNOW_WIND_WEIGHT: f32 = 1.0;
pub const SNOW_MARGIN: f32 = 10.0;
pub const SNOW_SIZE: Spread = Spread::new(1.0, 5.0);
pub const SNOW_SPEED: Spread = Spread::new(0.5, 1.5);
pub const SNOW_DRIFT: Spread = Spread::new(-0.3, 0.6);
pub const SNOW_OPACITY: Spread = Spread::new(0.4, 0.6);
pub const SNOW_SPIN: Spread = Spread::new(-0.01, 0.02);
pub const SNOW_HEADROOM: f32 = 50.0;
pub const SNOW_STAR_MIN_SIZE: f32 = 4.0; // flakes above this are drawn as stars
pub const SNOW_SPIKES: usize = 6;
pub const SNOW_INNER_RATIO: f32 = 0.5; // inner / outer star radius
pub const SNOW_PALETTE: [Rgb; 3] = [[255, 255, 255], [240, 248, 255], [230, 240, 250]];

// ---------------- Sakura ----------------
pub const SAKURA_DENSITY: DensitySpec = DensitySpec::new(25.0, 10, 60);
pub const SAKURA_WIND: WindTuning = WindTuning::new(4000.0, 0.015, 2.5);
pub const SAKURA_WIND_WEIGHT: f32 = 0.6;
pub const SAKURA_MARGIN: f32 = 20.0;
pub const SAKURA_SIZE: Spread = Spread::new(8.0, 6.0);
pub const SAKURA_SPEED: Spread = Spread::new(0.6, 1.0);
pub const SAKURA_DRIFT: Spread = Spread::new(-0.4, 0.8);
pub const SAKURA_OPACITY: Spread = Spread::new(0.6, 0.4);
pub const SAKURA_SPIN: Spread = Spread::new(-0.02, 0.04);
pub const SAKURA_SWAY_AMPLITUDE: Spread = Spread::new(0.3, 0.9);
pub const SAKURA_SWAY_SPEED: Spread = Spread::new(0.001, 0.002); // radians per ms
pub const SAKURA_FLUTTER: f32 = 0.25; // vertical bob from the sway phase
pub const SAKURA_HEADROOM: f32 = 60.0;
pub const SAKURA_VEIN_MIN_SIZE: f32 = 6.0;
pub const SAKURA_PALETTE: [Rgb; 4] = [
    [255, 183, 197],
    [255, 192, 203],
    [255, 209, 220],
    [252, 228, 236],
];

// ---------------- Autumn leaves ----------------
pub const AUTUMN_DENSITY: DensitySpec = DensitySpec::new(30.0, 8, 45);
pub const AUTUMN_WIND: WindTuning = WindTuning::new(3500.0, 0.015, 1.5);
pub const AUTUMN_WIND_WEIGHT: f32 = 0.5;
pub const AUTUMN_MARGIN: f32 = 30.0;
pub const AUTUMN_SIZE: Spread = Spread::new(15.0, 15.0);
pub const AUTUMN_SPEED: Spread = Spread::new(0.6, 1.2);
pub const AUTUMN_DRIFT: Spread = Spread::new(-0.3, 0.6);
pub const AUTUMN_OPACITY: Spread = Spread::new(0.7, 0.3);
pub const AUTUMN_SPIN: Spread = Spread::new(-0.025, 0.05);
pub const AUTUMN_SWAY_AMPLITUDE: Spread = Spread::new(0.4, 1.0);
pub const AUTUMN_SWAY_SPEED: Spread = Spread::new(0.0008, 0.0015);
pub const AUTUMN_TURBULENCE: Spread = Spread::new(0.0, 0.5);
pub const AUTUMN_HEADROOM: f32 = 80.0;
pub const AUTUMN_MAPLE_SHARE: f32 = 0.6; // probability a new leaf is a maple
pub const AUTUMN_MAPLE_PALETTE: [Rgb; 5] = [
    [204, 85, 0],
    [178, 34, 34],
    [218, 112, 34],
    [139, 69, 19],
    [255, 140, 0],
];
pub const AUTUMN_GINKGO_PALETTE: [Rgb; 3] = [[255, 215, 0], [240, 190, 40], [218, 165, 32]];

// ---------------- Willow ----------------
pub const WILLOW_DENSITY: DensitySpec = DensitySpec::new(35.0, 8, 40);
pub const WILLOW_WIND: WindTuning = WindTuning::new(4000.0, 0.015, 2.0);
pub const WILLOW_WIND_WEIGHT: f32 = 0.5;
pub const WILLOW_MARGIN: f32 = 40.0;
pub const WILLOW_LENGTH: Spread = Spread::new(20.0, 25.0);
pub const WILLOW_WIDTH: Spread = Spread::new(3.0, 3.0);
pub const WILLOW_CURVATURE: Spread = Spread::new(-0.3, 0.6);
pub const WILLOW_SPEED: Spread = Spread::new(0.4, 0.8);
pub const WILLOW_DRIFT: Spread = Spread::new(-0.3, 0.6);
pub const WILLOW_OPACITY: Spread = Spread::new(0.5, 0.4);
pub const WILLOW_TILT: Spread = Spread::new(-0.6, 1.2); // initial rotation around vertical
pub const WILLOW_SPIN: Spread = Spread::new(-0.01, 0.02);
pub const WILLOW_SWAY_SPIN: f32 = 0.002; // rotation per px of sway
pub const WILLOW_SWAY_AMPLITUDE: Spread = Spread::new(0.5, 1.0);
pub const WILLOW_SWAY_SPEED: Spread = Spread::new(0.0005, 0.001);
pub const WILLOW_HEADROOM: f32 = 80.0;
pub const WILLOW_PALETTE: [Rgb; 4] = [
    [124, 168, 82],
    [143, 188, 100],
    [107, 142, 35],
    [154, 205, 50],
];
