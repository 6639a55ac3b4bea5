//! Named colors used by the demo scene and as configuration defaults.

use crate::Color;

pub const DARK_GREY: Color = Color::splat(0.5);
pub const GREY: Color = Color::splat(0.7);
pub const LIGHT_GREY: Color = Color::splat(0.8);
pub const WHITE: Color = Color::ONE;

pub const RED: Color = Color::new(1.0, 0.0, 0.0);
pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);
pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);
pub const CYAN: Color = Color::new(0.0, 1.0, 1.0);
pub const DARK_BLUE: Color = Color::new(0.0, 0.0, 0.3);
