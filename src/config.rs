//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`NEON_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;
use neonfield_core::{
    BodyMaterial, BodySettings, BodyShape, ExplosionSettings, FieldSettings, LineSettings,
    NeonColor, Palette, SceneError, SceneSettings, Vec3,
};
use neonfield_input::HoverRegion;
use neonfield_render::{LayerMask, PerspectiveCamera};
use crate::host::{HostSettings, InteractionEffects};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Particle field configuration
    #[serde(default)]
    pub field: FieldConfig,
    /// Floating body configuration
    #[serde(default)]
    pub bodies: BodiesConfig,
    /// Connector line configuration
    #[serde(default)]
    pub lines: LinesConfig,
    /// Explosion configuration
    #[serde(default)]
    pub effects: EffectsConfig,
    /// Pointer, scroll and hover configuration
    #[serde(default)]
    pub interaction: InteractionConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Feature switches
    #[serde(default)]
    pub features: FeaturesConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`NEON_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // NEON_FIELD__COUNT=500 -> field.count = 500
        figment = figment.merge(Env::prefixed("NEON_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Convert the content sections into scene construction settings
    ///
    /// Fails on empty palettes only; [`AppConfig::to_host_settings`] also
    /// checks counts and ranges.
    pub fn to_scene_settings(&self) -> Result<SceneSettings, SceneError> {
        let field = if self.features.particles {
            Some(FieldSettings {
                count: self.field.count,
                extent: self.field.extent,
                palette: Palette::new(self.field.colors.clone(), "particle colour")?,
                spin: Vec3::from(self.field.spin),
                scroll_roll: self.field.scroll_roll,
                opacity: self.field.opacity,
            })
        } else {
            None
        };

        Ok(SceneSettings {
            field,
            bodies: BodySettings {
                count: self.bodies.count,
                extent: self.bodies.extent,
                shapes: Palette::new(self.bodies.shapes.clone(), "body shape")?,
                materials: Palette::new(self.bodies.materials.clone(), "body material")?,
                rotation_speed_range: self.bodies.rotation_speed_range,
                float_speed: self.bodies.float_speed,
                float_amplitude: self.bodies.float_amplitude,
                scroll_drift: self.bodies.scroll_drift,
                scroll_phase: self.bodies.scroll_phase,
            },
            lines: LineSettings {
                count: self.lines.count,
                min_points: self.lines.min_points,
                max_points: self.lines.max_points,
                extent: self.lines.extent,
                palette: Palette::new(self.lines.colors.clone(), "line colour")?,
                opacity: self.lines.opacity,
            },
            effects: ExplosionSettings {
                particle_count: self.effects.particle_count,
                velocity_range: self.effects.velocity_range,
                initial_opacity: self.effects.initial_opacity,
                opacity_decrement: self.effects.opacity_decrement,
                point_size: self.effects.point_size,
            },
            max_concurrent_effects: self.effects.max_concurrent,
        })
    }

    /// Camera described by the camera section
    pub fn to_camera(&self) -> PerspectiveCamera {
        PerspectiveCamera::new(
            self.camera.fov,
            self.camera.near,
            self.camera.far,
            Vec3::new(0.0, 0.0, self.camera.distance),
        )
    }

    /// Everything the scene host needs, fully validated
    ///
    /// Counts, ranges, palettes and camera parameters are all checked here,
    /// before any window surface is handed to a host.
    pub fn to_host_settings(&self) -> Result<HostSettings, SceneError> {
        let scene = self.to_scene_settings()?;
        scene.validate()?;
        let camera = self.to_camera();
        camera.validate()?;

        Ok(HostSettings {
            scene,
            camera,
            layers: self.rendering.layer_mask(),
            interaction: InteractionEffects {
                click_color: self.effects.click_color,
                click_scale: self.effects.click_scale,
                hover_color: self.effects.hover_color,
                hover_scale: self.effects.hover_scale,
            },
            seed: self.rendering.seed,
        })
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Neonfield".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Distance from the origin along +Z
    pub distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 75.0,
            near: 0.1,
            far: 1000.0,
            distance: 5.0,
        }
    }
}

/// Particle field configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Number of particles
    pub count: usize,
    /// Edge length of the spawn cube
    pub extent: f32,
    /// Particle colours
    pub colors: Vec<NeonColor>,
    /// Rotation per tick [x, y, z] in radians
    pub spin: [f32; 3],
    /// Roll per pixel of scroll
    pub scroll_roll: f32,
    /// Point opacity
    pub opacity: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        let defaults = FieldSettings::default();
        Self {
            count: defaults.count,
            extent: defaults.extent,
            colors: defaults.palette.into(),
            spin: defaults.spin.to_array(),
            scroll_roll: defaults.scroll_roll,
            opacity: defaults.opacity,
        }
    }
}

/// Floating body configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BodiesConfig {
    /// Number of bodies
    pub count: usize,
    /// Edge length of the placement cube
    pub extent: f32,
    /// Shapes bodies are drawn from
    pub shapes: Vec<BodyShape>,
    /// Materials bodies are drawn from
    pub materials: Vec<BodyMaterial>,
    /// Full width of the symmetric rotation speed range
    pub rotation_speed_range: f32,
    /// [min, max) vertical float speed
    pub float_speed: [f32; 2],
    /// [min, max) vertical float amplitude
    pub float_amplitude: [f32; 2],
    /// Vertical nudge per scroll event
    pub scroll_drift: f32,
    /// Scroll-to-phase factor of the nudge
    pub scroll_phase: f32,
}

impl Default for BodiesConfig {
    fn default() -> Self {
        let defaults = BodySettings::default();
        Self {
            count: defaults.count,
            extent: defaults.extent,
            shapes: defaults.shapes.into(),
            materials: defaults.materials.into(),
            rotation_speed_range: defaults.rotation_speed_range,
            float_speed: defaults.float_speed,
            float_amplitude: defaults.float_amplitude,
            scroll_drift: defaults.scroll_drift,
            scroll_phase: defaults.scroll_phase,
        }
    }
}

/// Connector line configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinesConfig {
    /// Number of lines
    pub count: usize,
    /// Fewest points per line
    pub min_points: usize,
    /// Most points per line (inclusive)
    pub max_points: usize,
    /// Edge length of the placement cube
    pub extent: f32,
    /// Line colours
    pub colors: Vec<NeonColor>,
    /// Line opacity
    pub opacity: f32,
}

impl Default for LinesConfig {
    fn default() -> Self {
        let defaults = LineSettings::default();
        Self {
            count: defaults.count,
            min_points: defaults.min_points,
            max_points: defaults.max_points,
            extent: defaults.extent,
            colors: defaults.palette.into(),
            opacity: defaults.opacity,
        }
    }
}

/// Explosion configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Points per burst
    pub particle_count: usize,
    /// Full width of the symmetric velocity range
    pub velocity_range: f32,
    /// Starting opacity
    pub initial_opacity: f32,
    /// Opacity lost per tick
    pub opacity_decrement: f32,
    /// Point size in world units
    pub point_size: f32,
    /// Colour of click bursts
    pub click_color: NeonColor,
    /// Scale applied to the unprojected click position
    pub click_scale: f32,
    /// Colour of hover bursts
    pub hover_color: NeonColor,
    /// Scale applied to the unprojected hover position
    pub hover_scale: f32,
    /// Cap on concurrent bursts (unset = unbounded)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrent: Option<usize>,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        let defaults = ExplosionSettings::default();
        let interaction = InteractionEffects::default();
        Self {
            particle_count: defaults.particle_count,
            velocity_range: defaults.velocity_range,
            initial_opacity: defaults.initial_opacity,
            opacity_decrement: defaults.opacity_decrement,
            point_size: defaults.point_size,
            click_color: interaction.click_color,
            click_scale: interaction.click_scale,
            hover_color: interaction.hover_color,
            hover_scale: interaction.hover_scale,
            max_concurrent: None,
        }
    }
}

/// Pointer, scroll and hover configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Pixels scrolled per wheel line
    pub scroll_line_height: f32,
    /// Largest scroll offset in pixels (unset = unbounded)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_scroll: Option<f32>,
    /// Interactive page elements that burst on hover
    pub hover_regions: Vec<HoverRegion>,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            scroll_line_height: neonfield_input::DEFAULT_LINE_HEIGHT,
            max_scroll: None,
            hover_regions: Vec::new(),
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Draw the particle field
    pub draw_field: bool,
    /// Draw floating body wireframes
    pub draw_bodies: bool,
    /// Draw connector lines
    pub draw_lines: bool,
    /// Draw explosion bursts
    pub draw_effects: bool,
    /// Fixed RNG seed for reproducible scenes (unset = random)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.0, 0.0, 0.02, 1.0],
            draw_field: true,
            draw_bodies: true,
            draw_lines: true,
            draw_effects: true,
            seed: None,
        }
    }
}

impl RenderingConfig {
    /// Layers enabled by the draw switches
    pub fn layer_mask(&self) -> LayerMask {
        let mut mask = LayerMask::empty();
        mask.set(LayerMask::FIELD, self.draw_field);
        mask.set(LayerMask::BODIES, self.draw_bodies);
        mask.set(LayerMask::LINES, self.draw_lines);
        mask.set(LayerMask::EFFECTS, self.draw_effects);
        mask
    }
}

/// Feature switches
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturesConfig {
    /// Run the animated backdrop at all
    pub animations: bool,
    /// Build the particle field
    pub particles: bool,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            animations: true,
            particles: true,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Log tick reports every this many frames (0 = never)
    pub report_interval: u64,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            report_interval: 0,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.camera.fov, 75.0);
        assert_eq!(config.field.count, 1000);
        assert_eq!(config.bodies.count, 20);
        assert_eq!(config.lines.count, 50);
        assert_eq!(config.effects.particle_count, 50);
        assert!(config.features.animations);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("opacity_decrement"));
        assert!(toml.contains("magenta"));
    }

    #[test]
    fn test_default_scene_settings_match_core_defaults() {
        let settings = AppConfig::default().to_scene_settings().unwrap();
        assert_eq!(settings, SceneSettings::default());
    }

    #[test]
    fn test_particles_feature_skips_field() {
        let mut config = AppConfig::default();
        config.features.particles = false;
        assert!(config.to_scene_settings().unwrap().field.is_none());
    }

    #[test]
    fn test_empty_palette_is_config_error() {
        let mut config = AppConfig::default();
        config.lines.colors.clear();
        assert_eq!(
            config.to_scene_settings().unwrap_err(),
            SceneError::EmptyPalette { what: "line colour" }
        );
    }

    #[test]
    fn test_layer_mask() {
        let mut rendering = RenderingConfig::default();
        assert_eq!(rendering.layer_mask(), LayerMask::all());
        rendering.draw_lines = false;
        assert!(!rendering.layer_mask().contains(LayerMask::LINES));
        assert!(rendering.layer_mask().contains(LayerMask::FIELD));
    }

    #[test]
    fn test_camera_from_config() {
        let camera = AppConfig::default().to_camera();
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(camera.far, 1000.0);
    }

    #[test]
    fn test_invalid_camera_is_config_error() {
        let mut config = AppConfig::default();
        config.camera.fov = 0.0;
        assert!(matches!(
            config.to_host_settings(),
            Err(SceneError::InvalidRange { what: "camera fov", .. })
        ));

        let mut config = AppConfig::default();
        config.camera.near = 10.0;
        config.camera.far = 1.0;
        assert!(matches!(
            config.to_host_settings(),
            Err(SceneError::InvalidRange { what: "camera clip plane", .. })
        ));
    }

    #[test]
    fn test_host_settings_check_counts() {
        let mut config = AppConfig::default();
        config.bodies.count = 0;
        // Palettes are fine, so conversion alone succeeds
        assert!(config.to_scene_settings().is_ok());
        assert_eq!(
            config.to_host_settings().unwrap_err(),
            SceneError::InvalidCount { what: "floating body count" }
        );
    }
}
