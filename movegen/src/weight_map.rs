use serde::{Deserialize, Serialize};
use util::{color::Color, mapping::Mapping2D};

/// Biases a search can be asked to honour when choosing its route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightSettings {
    pub avoid_white: bool,
    pub avoid_black: bool,
    pub avoid_center: bool,
    pub avoid_corners: bool,
}

/// Weight of every square under `settings`.
///
/// Each square starts at `1.0`. If the biases push any square below `1.0`
/// the whole map is lifted so the cheapest square costs exactly `1.0`, which
/// keeps every weight positive.
pub fn create_weight_map(height: usize, width: usize, settings: &WeightSettings) -> Mapping2D<f64> {
    let mut ans = Mapping2D::new(height, width, 1.0);

    if settings.avoid_black {
        ans = ans.map(|value, pos| match pos.color() {
            Color::Black => value + 1.0,
            Color::White => *value,
        });
    }
    if settings.avoid_white {
        ans = ans.map(|value, pos| match pos.color() {
            Color::White => value + 1.0,
            Color::Black => *value,
        });
    }
    if settings.avoid_corners {
        ans = ans.map(|value, pos| value + pos.offset_from_center(width, height));
    }
    if settings.avoid_center {
        ans = ans.map(|value, pos| value - pos.offset_from_center(width, height));
    }

    let min = ans.iter().map(|(_, w)| *w).reduce(f64::min).unwrap_or(1.0);
    if min < 1.0 {
        ans = ans.map(|value, _| value + (1.0 - min));
    }
    ans
}
