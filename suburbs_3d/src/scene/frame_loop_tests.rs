use glam::{Mat4, Vec3};
use winit::event::ElementState::{Pressed, Released};
use winit::keyboard::KeyCode;
use crate::config::SceneConfig;
use crate::error::{Error, Result};
use crate::graphics_device::{GraphicsDevice, PolygonMode};
use crate::graphics_device::mock_graphics_device::{MockCommand, MockGraphicsDevice};
use crate::input::ControlEvent;
use crate::shadow::{DrawPass, SceneDrawer};
use super::*;

#[derive(Default)]
struct CountingDrawer {
    draws: usize,
    rain_drops: Vec<usize>,
}

impl SceneDrawer for CountingDrawer {
    fn draw(&mut self, _device: &mut dyn GraphicsDevice, _pass: &DrawPass) -> Result<()> {
        self.draws += 1;
        Ok(())
    }

    fn draw_rain(&mut self, _device: &mut dyn GraphicsDevice, pass: &DrawPass, drops: &[Mat4]) -> Result<()> {
        assert!(!pass.depth_only);
        self.rain_drops.push(drops.len());
        Ok(())
    }
}

fn setup() -> (MockGraphicsDevice, FrameLoop) {
    let mut device = MockGraphicsDevice::new();
    let frame_loop = FrameLoop::new(&mut device, &SceneConfig::default(), 0.0).unwrap();
    (device, frame_loop)
}

fn finish_intro(device: &mut MockGraphicsDevice, frame_loop: &mut FrameLoop) {
    let mut drawer = CountingDrawer::default();
    frame_loop.frame(device, &mut drawer, 7.0).unwrap();
    assert!(frame_loop.mode().is_interactive());
}

#[test]
fn test_new_sets_fill_mode() {
    let (device, frame_loop) = setup();

    assert_eq!(device.commands, vec![MockCommand::SetPolygonMode(PolygonMode::Fill)]);
    assert!(!frame_loop.mode().is_interactive());
    assert_eq!(frame_loop.pipeline().shadow_map().resolution(), 2048);
}

#[test]
fn test_new_fails_on_program_error() {
    let mut device = MockGraphicsDevice::new();
    device.failing_program = Some("basic".to_string());

    let result = FrameLoop::new(&mut device, &SceneConfig::default(), 0.0);
    assert!(matches!(result, Err(Error::InitializationFailed(_))));
}

#[test]
fn test_new_fails_on_degenerate_camera() {
    let mut device = MockGraphicsDevice::new();
    let config = SceneConfig {
        camera_position: Vec3::ZERO,
        ..SceneConfig::default()
    };

    assert_eq!(FrameLoop::new(&mut device, &config, 0.0).err(), Some(Error::DegenerateCameraBasis));
}

#[test]
fn test_intro_moves_camera_then_hands_over() {
    let (mut device, mut frame_loop) = setup();
    let mut drawer = CountingDrawer::default();

    frame_loop.frame(&mut device, &mut drawer, 1.0).unwrap();
    assert!((frame_loop.camera().position().x - 74.8).abs() < 1e-4);

    frame_loop.frame(&mut device, &mut drawer, 6.5).unwrap();
    assert!(frame_loop.mode().is_interactive());
    assert_eq!(drawer.draws, 4);
}

#[test]
fn test_input_ignored_during_intro() {
    let (mut device, mut frame_loop) = setup();

    assert_eq!(frame_loop.key_event(&mut device, KeyCode::Escape, Pressed), None);
    assert!(!frame_loop.close_requested());

    let front = frame_loop.camera().front();
    frame_loop.cursor_moved(0.0, 0.0);
    frame_loop.cursor_moved(500.0, 300.0);
    assert_eq!(frame_loop.camera().front(), front);
}

#[test]
fn test_mouse_look_continues_from_intro_orientation() {
    let (mut device, mut frame_loop) = setup();
    finish_intro(&mut device, &mut frame_loop);
    let front = frame_loop.camera().front();

    // First event only records the cursor; a zero offset keeps the view
    frame_loop.cursor_moved(100.0, 100.0);
    frame_loop.cursor_moved(100.0, 100.0);

    assert!((frame_loop.camera().front() - front).length() < 1e-4);

    frame_loop.cursor_moved(200.0, 100.0);
    assert!((frame_loop.camera().front() - front).length() > 1e-3);
}

#[test]
fn test_escape_requests_close() {
    let (mut device, mut frame_loop) = setup();
    finish_intro(&mut device, &mut frame_loop);

    assert_eq!(frame_loop.key_event(&mut device, KeyCode::Escape, Pressed), Some(ControlEvent::CloseRequested));
    assert!(frame_loop.close_requested());
}

#[test]
fn test_polygon_mode_forwarded_to_device() {
    let (mut device, mut frame_loop) = setup();
    finish_intro(&mut device, &mut frame_loop);

    frame_loop.key_event(&mut device, KeyCode::KeyP, Pressed);

    assert_eq!(device.commands.last(), Some(&MockCommand::SetPolygonMode(PolygonMode::Line)));
}

#[test]
fn test_held_key_moves_each_frame() {
    let (mut device, mut frame_loop) = setup();
    finish_intro(&mut device, &mut frame_loop);
    let mut drawer = CountingDrawer::default();
    let start = frame_loop.camera().position();

    frame_loop.key_event(&mut device, KeyCode::KeyW, Pressed);
    frame_loop.frame(&mut device, &mut drawer, 7.1).unwrap();
    frame_loop.frame(&mut device, &mut drawer, 7.2).unwrap();
    frame_loop.key_event(&mut device, KeyCode::KeyW, Released);
    frame_loop.frame(&mut device, &mut drawer, 7.3).unwrap();

    let travelled = (frame_loop.camera().position() - start).length();
    assert!((travelled - 0.6).abs() < 1e-4);
}

#[test]
fn test_focus_lost_releases_keys() {
    let (mut device, mut frame_loop) = setup();
    finish_intro(&mut device, &mut frame_loop);
    let mut drawer = CountingDrawer::default();

    frame_loop.key_event(&mut device, KeyCode::KeyW, Pressed);
    frame_loop.focus_lost();
    let start = frame_loop.camera().position();
    frame_loop.frame(&mut device, &mut drawer, 7.1).unwrap();

    assert_eq!(frame_loop.camera().position(), start);
    assert!(!frame_loop.context().keys.is_pressed(KeyCode::KeyW));
}

#[test]
fn test_rain_drawn_when_enabled() {
    let (mut device, mut frame_loop) = setup();
    finish_intro(&mut device, &mut frame_loop);
    let mut drawer = CountingDrawer::default();

    frame_loop.frame(&mut device, &mut drawer, 7.1).unwrap();
    assert!(drawer.rain_drops.is_empty());

    frame_loop.key_event(&mut device, KeyCode::KeyR, Pressed);
    frame_loop.frame(&mut device, &mut drawer, 7.2).unwrap();
    frame_loop.frame(&mut device, &mut drawer, 7.3).unwrap();

    assert_eq!(drawer.rain_drops, vec![6000, 6000]);
    assert!(frame_loop.rain().height() < -50.0);
}

#[test]
fn test_resize_forwarded() {
    let (_device, mut frame_loop) = setup();

    assert!(frame_loop.resize(1280, 720));
    assert!(!frame_loop.resize(0, 0));
    assert_eq!(frame_loop.context().window_viewport.width, 1280);
}
