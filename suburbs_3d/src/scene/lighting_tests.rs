use glam::Vec3;
use super::*;

#[test]
fn test_default_lighting_is_day() {
    let lighting = SceneLighting::default();

    assert_eq!(lighting.light_color, Vec3::ONE);
    assert_eq!(lighting.point_light_color, Vec3::ZERO);
    assert_eq!(lighting.fog_density, 0.0);
    assert_eq!(lighting.point_lights.len(), POINT_LIGHT_COUNT);
    assert!(!lighting.is_night());
    assert_eq!(lighting.skybox(), SkyboxVariant::Day);
}

#[test]
fn test_brighten_clamps_to_max() {
    let mut lighting = SceneLighting::default();

    assert_eq!(lighting.brighten(), None);
    assert_eq!(lighting.light_color, Vec3::splat(LIGHT_COLOR_MAX));
}

#[test]
fn test_dim_until_night() {
    let mut lighting = SceneLighting::default();

    // 1.0 -> 0.5 -> 0.25 -> 0.125 -> 0.0625 -> 0.03125
    for _ in 0..4 {
        assert_eq!(lighting.dim(), None);
    }
    assert_eq!(lighting.dim(), Some(SkyboxVariant::Night));
    assert!(lighting.is_night());
    assert_eq!(lighting.point_light_color, NIGHT_POINT_LIGHT_COLOR);

    // Already night: no second transition
    assert_eq!(lighting.dim(), None);
}

#[test]
fn test_dim_clamps_to_min() {
    let mut lighting = SceneLighting::default();
    for _ in 0..20 {
        lighting.dim();
    }

    assert_eq!(lighting.light_color, Vec3::splat(LIGHT_COLOR_MIN));
}

#[test]
fn test_brighten_returns_to_day() {
    let mut lighting = SceneLighting::default();
    for _ in 0..5 {
        lighting.dim();
    }
    assert!(lighting.is_night());

    // 0.03125 * 1.6 = 0.05, not yet above the threshold
    assert_eq!(lighting.brighten(), None);
    assert_eq!(lighting.brighten(), Some(SkyboxVariant::Day));
    assert!(!lighting.is_night());
    assert_eq!(lighting.point_light_color, Vec3::ZERO);
}

#[test]
fn test_fog_bounds() {
    let mut lighting = SceneLighting::default();

    lighting.decrease_fog();
    assert_eq!(lighting.fog_density, 0.0);

    for _ in 0..20 {
        lighting.increase_fog();
    }
    assert_eq!(lighting.fog_density, FOG_MAX);

    lighting.decrease_fog();
    assert!((lighting.fog_density - (FOG_MAX - FOG_STEP)).abs() < 1e-6);
}
