//! Scene host scenarios against a headless render target

use neonfield::{HostError, HostSettings, SceneHost};
use neonfield_core::{NeonColor, SceneError, Vec3};
use neonfield_render::{
    FrameGeometry, LayerMask, PerspectiveCamera, RenderError, RenderTarget, StartupError,
};

/// Records what the host asked it to do
#[derive(Default)]
struct RecordingTarget {
    size: (u32, u32),
    resizes: Vec<(u32, u32)>,
    frames: Vec<(usize, usize)>,
    aspects: Vec<f32>,
    capable: bool,
}

impl RecordingTarget {
    fn new() -> Self {
        Self { capable: true, ..Default::default() }
    }

    fn incapable() -> Self {
        Self::default()
    }
}

impl RenderTarget for RecordingTarget {
    fn check_capability(&self) -> Result<(), StartupError> {
        if self.capable {
            Ok(())
        } else {
            Err(StartupError::Unsupported("headless".to_string()))
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
        self.resizes.push((width, height));
    }

    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn render(&mut self, frame: &FrameGeometry, camera: &PerspectiveCamera) -> Result<(), RenderError> {
        self.frames.push((frame.point_count(), frame.segment_count()));
        self.aspects.push(camera.aspect());
        Ok(())
    }
}

fn settings() -> HostSettings {
    HostSettings { seed: Some(2024), ..Default::default() }
}

fn host() -> SceneHost<RecordingTarget> {
    SceneHost::initialize(RecordingTarget::new(), 1280, 720, &settings()).unwrap()
}

#[test]
fn test_initialize_builds_full_scene() {
    let host = host();
    let scene = host.scene();
    assert_eq!(scene.field().map(|f| f.len()), Some(1000));
    assert_eq!(scene.bodies().len(), 20);
    assert_eq!(scene.lines().len(), 50);
    assert_eq!(scene.effect_count(), 0);
    assert_eq!(host.target().resizes, vec![(1280, 720)]);
}

#[test]
fn test_incapable_target_declines_to_start() {
    let result = SceneHost::initialize(RecordingTarget::incapable(), 1280, 720, &settings());
    assert!(matches!(result, Err(HostError::Startup(StartupError::Unsupported(_)))));
}

#[test]
fn test_invalid_scene_is_config_error() {
    let mut settings = settings();
    settings.scene.bodies.count = 0;
    let result = SceneHost::initialize(RecordingTarget::new(), 1280, 720, &settings);
    assert!(matches!(
        result,
        Err(HostError::Config(SceneError::InvalidCount { .. }))
    ));
}

#[test]
fn test_resize_is_idempotent() {
    let mut host = host();
    host.on_resize(1920, 1080);
    let camera = host.camera().clone();
    host.on_resize(1920, 1080);

    assert_eq!(host.camera(), &camera);
    assert_eq!(host.target().size(), (1920, 1080));
    assert!((host.camera().aspect() - 16.0 / 9.0).abs() < 1e-6);

    // Minimized windows report zero sizes
    host.on_resize(0, 0);
    assert_eq!(host.target().size(), (1920, 1080));
}

#[test]
fn test_tick_renders_every_layer() {
    let mut host = host();
    let report = host.tick_at(0.0).unwrap();
    assert_eq!(report.live, 0);

    let (points, segments) = host.target().frames[0];
    assert_eq!(points, 1000);
    // 50 lines with 3..=7 points, plus body wireframes
    assert!(segments >= 50 * 2);
}

#[test]
fn test_field_rotation_after_100_ticks() {
    let mut host = host();
    let before: Vec<Vec3> = host.scene().field().unwrap().positions().to_vec();
    for frame in 0..100 {
        host.tick_at(frame as f32 / 60.0).unwrap();
    }
    let field = host.scene().field().unwrap();
    let rotation = field.rotation().as_vec3();
    assert!((rotation.x - 0.1).abs() < 1e-4);
    assert!((rotation.y - 0.2).abs() < 1e-4);
    assert_eq!(rotation.z, 0.0);
    assert_eq!(field.positions(), &before[..]);
}

#[test]
fn test_click_spawns_cyan_burst_that_fades() {
    let mut host = host();
    let key = host.on_click(640.0, 360.0).unwrap();
    assert_eq!(host.scene().effect(key).unwrap().color(), NeonColor::Cyan);

    host.tick_at(0.0).unwrap();
    let (points, _) = host.target().frames[0];
    assert_eq!(points, 1000 + 50);

    for tick in 1..50 {
        host.tick_at(tick as f32 / 60.0).unwrap();
    }
    assert!(host.scene().effect(key).is_none());
}

#[test]
fn test_three_concurrent_explosions() {
    let mut host = host();
    let keys: Vec<_> = [(100.0, 100.0), (640.0, 360.0), (1200.0, 700.0)]
        .into_iter()
        .map(|(x, y)| host.on_click(x, y).unwrap())
        .collect();

    for tick in 0..25 {
        host.tick_at(tick as f32 / 60.0).unwrap();
    }
    for &key in &keys {
        let opacity = host.scene().effect(key).unwrap().opacity();
        assert!((opacity - 0.5).abs() < 1e-4, "opacity {}", opacity);
    }

    let mut removed = 0;
    for tick in 25..50 {
        removed += host.tick_at(tick as f32 / 60.0).unwrap().removed;
    }
    assert_eq!(removed, 3);
    assert_eq!(host.scene().effect_count(), 0);
}

#[test]
fn test_hover_burst_is_green_and_unscaled() {
    let mut host = host();
    let key = host.on_hover_enter(320.0, 180.0).unwrap();
    let effect = host.scene().effect(key).unwrap();
    assert_eq!(effect.color(), NeonColor::Green);
    let expected = host.pixel_to_world(320.0, 180.0);
    assert!((effect.origin() - expected).length() < 1e-5);
}

#[test]
fn test_click_is_scaled_by_two() {
    let mut host = host();
    let key = host.on_click(320.0, 180.0).unwrap();
    let expected = host.pixel_to_world(320.0, 180.0) * 2.0;
    assert!((host.scene().effect(key).unwrap().origin() - expected).length() < 1e-5);
}

#[test]
fn test_explosion_cap() {
    let mut settings = settings();
    settings.scene.max_concurrent_effects = Some(2);
    let mut host = SceneHost::initialize(RecordingTarget::new(), 800, 600, &settings).unwrap();

    assert!(host.on_click(10.0, 10.0).is_some());
    assert!(host.on_click(20.0, 20.0).is_some());
    assert!(host.on_click(30.0, 30.0).is_none());
    assert_eq!(host.scene().effect_count(), 2);
}

#[test]
fn test_scroll_rolls_field() {
    let mut host = host();
    host.on_scroll(1000.0);
    let roll = host.scene().field().unwrap().rotation().as_vec3().z;
    assert!((roll - 0.1).abs() < 1e-6);

    host.on_scroll(0.0);
    assert_eq!(host.scene().field().unwrap().rotation().as_vec3().z, 0.0);
}

#[test]
fn test_disabled_particles_and_layers() {
    let mut settings = settings();
    settings.scene.field = None;
    settings.layers = LayerMask::EFFECTS;
    let mut host = SceneHost::initialize(RecordingTarget::new(), 800, 600, &settings).unwrap();
    assert!(host.scene().field().is_none());

    host.on_click(400.0, 300.0);
    host.tick_at(0.0).unwrap();
    assert_eq!(host.target().frames[0], (50, 0));
}

#[test]
fn test_camera_follows_resize_into_render() {
    let mut host = host();
    host.tick_at(0.0).unwrap();
    host.on_resize(600, 600);
    host.tick_at(0.1).unwrap();
    let aspects = &host.target().aspects;
    assert!((aspects[0] - 1280.0 / 720.0).abs() < 1e-6);
    assert_eq!(aspects[1], 1.0);
}
