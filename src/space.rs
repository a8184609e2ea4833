//! Stage/native coordinate and attribute transforms.
//!
//! Stage space puts the origin at the window center with Y growing upwards
//! and rotation in counter-clockwise degrees. Raylib (like most screen
//! APIs) is Y-down with clockwise-positive rotation. Every conversion the
//! backend performs lives here as a pure function, so the arithmetic can be
//! tested without opening a window.

/// Convert a stage Y coordinate into native (Y-down) space.
pub fn to_native_y(y: f32) -> f32 {
    -y
}

/// Convert a native Y coordinate into stage (Y-up) space.
///
/// A native y of exactly 0 reports stage 0.0, never -0.0.
pub fn from_native_y(y: f32) -> f32 {
    if y == 0.0 { 0.0 } else { -y }
}

/// Convert counter-clockwise stage degrees into clockwise native degrees,
/// normalized into [0, 360).
pub fn to_native_rotation(degrees: f32) -> f32 {
    (-degrees).rem_euclid(360.0)
}

/// Convert clockwise native degrees back into counter-clockwise stage
/// degrees, normalized into [0, 360).
pub fn from_native_rotation(degrees: f32) -> f32 {
    (-degrees).rem_euclid(360.0)
}

/// Map the stage's 0-50 transparency level onto a native 0-255 alpha.
///
/// alpha = clamp(255 - level * 128 / 50, 0, 255) with truncating integer
/// division. The nonlinear curve is a compatibility contract: 0 -> 255,
/// 25 -> 191, 50 -> 127, and anything >= 100 clamps to 0.
pub fn alpha_for_transparency(level: i32) -> u8 {
    (255 - level * 128 / 50).clamp(0, 255) as u8
}

/// Upper bound for normalized mouse X, lower bound for normalized mouse Y.
///
/// These assume a fixed 640x480 reference window (half-extents 320/240).
/// Known hardcoded behavior inherited from the engine contract; resizable
/// windows still clamp against these values on purpose.
pub const MOUSE_MAX_X: f32 = 320.0;
pub const MOUSE_MIN_Y: f32 = -240.0;

/// Clamp a stage-space mouse position into the reference window bounds.
pub fn clamp_mouse(x: f32, y: f32) -> (f32, f32) {
    (x.min(MOUSE_MAX_X), y.max(MOUSE_MIN_Y))
}

/// Top-left window position that centers a window on the desktop.
pub fn centered_window_position(
    desktop_w: i32,
    desktop_h: i32,
    window_w: i32,
    window_h: i32,
) -> (i32, i32) {
    (desktop_w / 2 - window_w / 2, desktop_h / 2 - window_h / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_y_round_trip() {
        for y in [-240.0, -1.5, 3.25, 479.0] {
            assert_eq!(from_native_y(to_native_y(y)), y);
        }
    }

    #[test]
    fn test_native_y_zero_is_positive_zero() {
        let y = from_native_y(0.0);
        assert_eq!(y, 0.0);
        assert!(y.is_sign_positive());
        let y = from_native_y(to_native_y(0.0));
        assert!(y.is_sign_positive());
    }

    #[test]
    fn test_rotation_round_trip_mod_360() {
        for r in [0.0, 45.0, 90.0, 180.0, 359.0, 360.0, 725.0, -90.0] {
            let got = from_native_rotation(to_native_rotation(r));
            assert!((got - r.rem_euclid(360.0)).abs() < 1e-4, "r={r} got={got}");
        }
    }

    #[test]
    fn test_rotation_native_is_clockwise() {
        // 90 degrees counter-clockwise on stage is 270 clockwise natively.
        assert_eq!(to_native_rotation(90.0), 270.0);
    }

    #[test]
    fn test_alpha_curve_endpoints() {
        assert_eq!(alpha_for_transparency(0), 255);
        assert_eq!(alpha_for_transparency(25), 191);
        assert_eq!(alpha_for_transparency(50), 127);
        assert_eq!(alpha_for_transparency(100), 0);
        assert_eq!(alpha_for_transparency(10_000), 0);
        assert_eq!(alpha_for_transparency(-10), 255);
    }

    #[test]
    fn test_alpha_uses_truncating_division() {
        // 255 - 13*128/50 = 255 - 33.28 -> 255 - 33
        assert_eq!(alpha_for_transparency(13), 222);
    }

    #[test]
    fn test_clamp_mouse_bounds() {
        assert_eq!(clamp_mouse(500.0, 10.0), (320.0, 10.0));
        assert_eq!(clamp_mouse(-500.0, -500.0), (-500.0, -240.0));
        assert_eq!(clamp_mouse(100.0, 100.0), (100.0, 100.0));
    }

    #[test]
    fn test_centered_window_position() {
        assert_eq!(centered_window_position(1920, 1080, 640, 480), (640, 300));
    }
}
