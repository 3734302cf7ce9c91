//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 120
//! vsync = true
//! fullscreen = false
//!
//! [dash]
//! max_stamina = 5.0
//! speed_multiplier = 1.5
//!
//! [character]
//! max_walk_speed = 600.0
//! max_acceleration = 2048.0
//! braking_deceleration = 2048.0
//! rotation_rate = 540.0
//! jump_z_velocity = 600.0
//! air_control = 0.2
//! capsule_radius = 42.0
//! capsule_half_height = 96.0
//! base_turn_rate = 45.0
//! base_look_up_rate = 45.0
//!
//! [camera]
//! arm_length = 300.0
//! fovy = 60.0
//! mouse_sensitivity = 0.1
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::components::camerarig::{DEFAULT_ARM_LENGTH, DEFAULT_FOVY};
use crate::components::capsule::{DEFAULT_CAPSULE_HALF_HEIGHT, DEFAULT_CAPSULE_RADIUS};
use crate::components::charactermovement::{
    DEFAULT_AIR_CONTROL, DEFAULT_BRAKING_DECELERATION, DEFAULT_JUMP_Z_VELOCITY,
    DEFAULT_MAX_ACCELERATION, DEFAULT_MAX_WALK_SPEED, DEFAULT_ROTATION_RATE,
};
use crate::components::controller::DEFAULT_INPUT_SCALE;
use crate::components::dash::{DASH_SPEED_MULTIPLIER, MAX_DASH_STAMINA};
use crate::components::inputcontrolled::{DEFAULT_BASE_LOOK_UP_RATE, DEFAULT_BASE_TURN_RATE};

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_FULLSCREEN: bool = false;
pub const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Smallest reservoir accepted from a config file.
const MIN_MAX_STAMINA: f32 = 0.01;

/// Game configuration resource.
///
/// Window settings are read once when the window opens. Dash, character and
/// camera settings are pushed onto spawned pawns by
/// [`apply_gameconfig_changes`] whenever the resource changes.
///
/// [`apply_gameconfig_changes`]: crate::systems::gameconfig::apply_gameconfig_changes
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Start in fullscreen mode.
    pub fullscreen: bool,

    /// Stamina reservoir in seconds of dashing.
    pub max_stamina: f32,
    /// Speed and acceleration multiplier while dashing.
    pub dash_speed_multiplier: f32,

    pub max_walk_speed: f32,
    pub max_acceleration: f32,
    pub braking_deceleration: f32,
    /// Yaw degrees per second when turning towards movement.
    pub rotation_rate: f32,
    pub jump_z_velocity: f32,
    pub air_control: f32,
    pub capsule_radius: f32,
    pub capsule_half_height: f32,
    /// Degrees per second at full turn-rate input.
    pub base_turn_rate: f32,
    /// Degrees per second at full look-up-rate input.
    pub base_look_up_rate: f32,

    /// Spring arm length in world units.
    pub arm_length: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Degrees of look rotation per pixel of mouse movement.
    pub mouse_sensitivity: f32,

    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            fullscreen: DEFAULT_FULLSCREEN,
            max_stamina: MAX_DASH_STAMINA,
            dash_speed_multiplier: DASH_SPEED_MULTIPLIER,
            max_walk_speed: DEFAULT_MAX_WALK_SPEED,
            max_acceleration: DEFAULT_MAX_ACCELERATION,
            braking_deceleration: DEFAULT_BRAKING_DECELERATION,
            rotation_rate: DEFAULT_ROTATION_RATE,
            jump_z_velocity: DEFAULT_JUMP_Z_VELOCITY,
            air_control: DEFAULT_AIR_CONTROL,
            capsule_radius: DEFAULT_CAPSULE_RADIUS,
            capsule_half_height: DEFAULT_CAPSULE_HALF_HEIGHT,
            base_turn_rate: DEFAULT_BASE_TURN_RATE,
            base_look_up_rate: DEFAULT_BASE_LOOK_UP_RATE,
            arm_length: DEFAULT_ARM_LENGTH,
            fovy: DEFAULT_FOVY,
            mouse_sensitivity: DEFAULT_INPUT_SCALE,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values; out-of-range
    /// values are clamped. Returns an error if the file cannot be read or
    /// parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }
        if let Some(fullscreen) = config.getbool("window", "fullscreen").ok().flatten() {
            self.fullscreen = fullscreen;
        }

        let float = |section: &str, key: &str, target: &mut f32| {
            match config.getfloat(section, key) {
                Ok(Some(value)) => *target = value as f32,
                Ok(None) => {}
                Err(e) => warn!("Ignoring [{}] {}: {}", section, key, e),
            }
        };

        // [dash] section
        float("dash", "max_stamina", &mut self.max_stamina);
        float("dash", "speed_multiplier", &mut self.dash_speed_multiplier);

        // [character] section
        float("character", "max_walk_speed", &mut self.max_walk_speed);
        float("character", "max_acceleration", &mut self.max_acceleration);
        float(
            "character",
            "braking_deceleration",
            &mut self.braking_deceleration,
        );
        float("character", "rotation_rate", &mut self.rotation_rate);
        float("character", "jump_z_velocity", &mut self.jump_z_velocity);
        float("character", "air_control", &mut self.air_control);
        float("character", "capsule_radius", &mut self.capsule_radius);
        float(
            "character",
            "capsule_half_height",
            &mut self.capsule_half_height,
        );
        float("character", "base_turn_rate", &mut self.base_turn_rate);
        float("character", "base_look_up_rate", &mut self.base_look_up_rate);

        // [camera] section
        float("camera", "arm_length", &mut self.arm_length);
        float("camera", "fovy", &mut self.fovy);
        float("camera", "mouse_sensitivity", &mut self.mouse_sensitivity);

        self.sanitize();

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, fullscreen={}, stamina={}, dash x{}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.fullscreen,
            self.max_stamina,
            self.dash_speed_multiplier
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));
        config.set("window", "fullscreen", Some(self.fullscreen.to_string()));

        // [dash] section
        config.set("dash", "max_stamina", Some(self.max_stamina.to_string()));
        config.set(
            "dash",
            "speed_multiplier",
            Some(self.dash_speed_multiplier.to_string()),
        );

        // [character] section
        let character = [
            ("max_walk_speed", self.max_walk_speed),
            ("max_acceleration", self.max_acceleration),
            ("braking_deceleration", self.braking_deceleration),
            ("rotation_rate", self.rotation_rate),
            ("jump_z_velocity", self.jump_z_velocity),
            ("air_control", self.air_control),
            ("capsule_radius", self.capsule_radius),
            ("capsule_half_height", self.capsule_half_height),
            ("base_turn_rate", self.base_turn_rate),
            ("base_look_up_rate", self.base_look_up_rate),
        ];
        for (key, value) in character {
            config.set("character", key, Some(value.to_string()));
        }

        // [camera] section
        config.set("camera", "arm_length", Some(self.arm_length.to_string()));
        config.set("camera", "fovy", Some(self.fovy.to_string()));
        config.set(
            "camera",
            "mouse_sensitivity",
            Some(self.mouse_sensitivity.to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Clamp values into ranges the pawn can work with.
    pub fn sanitize(&mut self) {
        if self.max_stamina < MIN_MAX_STAMINA {
            warn!(
                "max_stamina {} too small, using {}",
                self.max_stamina, MIN_MAX_STAMINA
            );
            self.max_stamina = MIN_MAX_STAMINA;
        }
        let non_negative = [
            &mut self.dash_speed_multiplier,
            &mut self.max_walk_speed,
            &mut self.max_acceleration,
            &mut self.braking_deceleration,
            &mut self.rotation_rate,
            &mut self.jump_z_velocity,
            &mut self.capsule_radius,
            &mut self.capsule_half_height,
            &mut self.base_turn_rate,
            &mut self.base_look_up_rate,
            &mut self.arm_length,
        ];
        for value in non_negative {
            if *value < 0.0 {
                *value = 0.0;
            }
        }
        self.air_control = self.air_control.clamp(0.0, 1.0);
        self.fovy = self.fovy.clamp(1.0, 179.0);
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
