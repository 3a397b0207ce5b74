//! Scene host
//!
//! Owns the camera, the scene and a render target, and is the only thing the
//! event loop talks to. Every handler takes `&mut self`; nothing is global.

use std::time::Instant;
use rand::{rngs::StdRng, SeedableRng};
use neonfield_core::{EffectKey, NeonColor, Scene, SceneError, SceneSettings, TickReport, Vec3};
use neonfield_input::viewport_to_ndc;
use neonfield_render::{
    FrameGeometry, LayerMask, PerspectiveCamera, RenderError, RenderTarget, StartupError,
};

/// Colour and unprojection scale of pointer-driven explosions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionEffects {
    pub click_color: NeonColor,
    pub click_scale: f32,
    pub hover_color: NeonColor,
    pub hover_scale: f32,
}

impl Default for InteractionEffects {
    fn default() -> Self {
        Self {
            click_color: NeonColor::Cyan,
            click_scale: 2.0,
            hover_color: NeonColor::Green,
            hover_scale: 1.0,
        }
    }
}

/// Everything needed to start a host
#[derive(Clone, Debug, Default)]
pub struct HostSettings {
    pub scene: SceneSettings,
    pub camera: PerspectiveCamera,
    pub layers: LayerMask,
    pub interaction: InteractionEffects,
    /// Fixed RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
}

/// Why a host declined to start
#[derive(Debug)]
pub enum HostError {
    /// No usable surface
    Startup(StartupError),
    /// Scene settings were rejected
    Config(SceneError),
}

impl std::fmt::Display for HostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostError::Startup(e) => write!(f, "Startup failed: {}", e),
            HostError::Config(e) => write!(f, "Invalid scene configuration: {}", e),
        }
    }
}

impl std::error::Error for HostError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HostError::Startup(e) => Some(e),
            HostError::Config(e) => Some(e),
        }
    }
}

impl From<StartupError> for HostError {
    fn from(e: StartupError) -> Self {
        HostError::Startup(e)
    }
}

impl From<SceneError> for HostError {
    fn from(e: SceneError) -> Self {
        HostError::Config(e)
    }
}

/// The running backdrop: scene, camera and the target it draws to
pub struct SceneHost<T: RenderTarget> {
    target: T,
    camera: PerspectiveCamera,
    scene: Scene,
    rng: StdRng,
    layers: LayerMask,
    interaction: InteractionEffects,
    started: Instant,
}

impl<T: RenderTarget> SceneHost<T> {
    /// Size the target and camera to the viewport and build the scene
    ///
    /// The target's capability is checked before any content is built, so a
    /// failed start never leaves a partial scene behind.
    pub fn initialize(mut target: T, width: u32, height: u32, settings: &HostSettings) -> Result<Self, HostError> {
        target.check_capability()?;
        if width == 0 || height == 0 {
            return Err(StartupError::InvalidViewport { width, height }.into());
        }

        settings.camera.validate()?;
        let mut camera = settings.camera.clone();
        camera.resize(width, height);
        target.resize(width, height);

        let mut rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let scene = Scene::build(&settings.scene, &mut rng)?;

        log::info!("Scene host started at {}x{}", width, height);

        Ok(Self {
            target,
            camera,
            scene,
            rng,
            layers: settings.layers,
            interaction: settings.interaction,
            started: Instant::now(),
        })
    }

    /// Advance and draw one frame at the wall-clock time since start
    pub fn tick(&mut self) -> Result<TickReport, RenderError> {
        let time = self.started.elapsed().as_secs_f32();
        self.tick_at(time)
    }

    /// Advance and draw one frame at `time` seconds
    pub fn tick_at(&mut self, time: f32) -> Result<TickReport, RenderError> {
        let report = self.scene.update(time);
        let frame = FrameGeometry::from_scene(&self.scene, self.layers);
        self.target.render(&frame, &self.camera)?;
        Ok(report)
    }

    /// Track a new viewport size; repeated identical sizes change nothing
    pub fn on_resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::debug!("Ignoring resize to {}x{}", width, height);
            return;
        }
        self.camera.resize(width, height);
        self.target.resize(width, height);
    }

    /// Apply the page scroll offset in pixels
    pub fn on_scroll(&mut self, scroll_offset: f32) {
        self.scene.apply_scroll(scroll_offset);
    }

    /// Burst at a clicked viewport pixel
    pub fn on_click(&mut self, px: f64, py: f64) -> Option<EffectKey> {
        let InteractionEffects { click_color, click_scale, .. } = self.interaction;
        self.spawn_at_pixel(px, py, click_scale, click_color)
    }

    /// Burst at the centre of a hovered region, in viewport pixels
    pub fn on_hover_enter(&mut self, cx: f32, cy: f32) -> Option<EffectKey> {
        let InteractionEffects { hover_color, hover_scale, .. } = self.interaction;
        self.spawn_at_pixel(cx as f64, cy as f64, hover_scale, hover_color)
    }

    fn spawn_at_pixel(&mut self, px: f64, py: f64, scale: f32, color: NeonColor) -> Option<EffectKey> {
        let origin = self.pixel_to_world(px, py) * scale;
        self.scene.spawn_explosion(origin, color, &mut self.rng)
    }

    /// Unproject a viewport pixel at NDC depth 0
    pub fn pixel_to_world(&self, px: f64, py: f64) -> Vec3 {
        let (width, height) = self.target.size();
        self.camera.unproject(viewport_to_ndc(px, py, width, height))
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    pub fn layers(&self) -> LayerMask {
        self.layers
    }

    /// Enable or disable drawn layers without touching the simulation
    pub fn set_layers(&mut self, layers: LayerMask) {
        self.layers = layers;
    }
}
