/// Unit tests for MockGraphicsDevice.

use crate::graphics_device::{
    GraphicsDevice, DepthTargetDesc, DepthFormat, SamplerDesc, ProgramDesc,
    RenderTargetBinding, Viewport, ClearFlags, DeviceError,
};
use super::*;

fn shadow_desc() -> DepthTargetDesc {
    DepthTargetDesc {
        width: 2048,
        height: 2048,
        format: DepthFormat::D32_FLOAT,
        sampler: SamplerDesc::shadow_border(),
    }
}

#[test]
fn test_mock_depth_target_creation() {
    let mut device = MockGraphicsDevice::new();
    let target = device.create_depth_target(&shadow_desc()).unwrap();

    assert_eq!(target.width(), 2048);
    assert_eq!(target.height(), 2048);
    assert_eq!(target.sampler().border_color, [1.0; 4]);
}

#[test]
fn test_mock_depth_target_failure() {
    let mut device = MockGraphicsDevice::new();
    device.fail_depth_target = true;
    assert!(device.create_depth_target(&shadow_desc()).is_err());
}

#[test]
fn test_mock_records_state_calls_in_order() {
    let mut device = MockGraphicsDevice::new();
    let target = device.create_depth_target(&shadow_desc()).unwrap();
    let program = device.create_program(&ProgramDesc::depth_map()).unwrap();

    device.bind_render_target(RenderTargetBinding::Offscreen(target.as_ref()));
    device.set_viewport(Viewport::from_size(2048, 2048));
    device.clear(ClearFlags::DEPTH);
    device.use_program(program);
    device.bind_render_target(RenderTargetBinding::Window);

    assert_eq!(device.commands, vec![
        MockCommand::BindOffscreen { width: 2048, height: 2048 },
        MockCommand::SetViewport(Viewport::from_size(2048, 2048)),
        MockCommand::Clear(ClearFlags::DEPTH),
        MockCommand::UseProgram(program),
        MockCommand::BindWindow,
    ]);
}

#[test]
fn test_mock_error_queue_is_fifo() {
    let mut device = MockGraphicsDevice::new();
    device.push_error(DeviceError::InvalidEnum);
    device.push_error(DeviceError::OutOfMemory);

    assert_eq!(device.poll_error(), Some(DeviceError::InvalidEnum));
    assert_eq!(device.poll_error(), Some(DeviceError::OutOfMemory));
    assert_eq!(device.poll_error(), None);
}
