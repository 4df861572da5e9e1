//! Colours used by the charts.

/// Ordered colours for categorical slices. Index `i` uses `CATEGORY_PALETTE[i % len]`.
pub const CATEGORY_PALETTE: [&str; 7] = [
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899", "#84cc16",
];

pub fn palette_color(index: usize) -> &'static str {
    CATEGORY_PALETTE[index % CATEGORY_PALETTE.len()]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient, 0.0 to 1.0.
    pub offset: f64,
    pub color: &'static str,
}

/// A multi-stop linear gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub angle_deg: u16,
    pub stops: &'static [GradientStop],
}

const fn stop(offset: f64, color: &'static str) -> GradientStop {
    GradientStop { offset, color }
}

pub const BAR_GRADIENT: Gradient = Gradient {
    angle_deg: 180,
    stops: &[stop(0.0, "#10b981"), stop(0.5, "#059669"), stop(1.0, "#047857")],
};

pub const BAR_HOVER_GRADIENT: Gradient = Gradient {
    angle_deg: 180,
    stops: &[stop(0.0, "#34d399"), stop(0.5, "#10b981"), stop(1.0, "#059669")],
};

pub const LINE_GRADIENT: Gradient = Gradient {
    angle_deg: 90,
    stops: &[stop(0.0, "#3b82f6"), stop(0.5, "#6366f1"), stop(1.0, "#8b5cf6")],
};

impl Gradient {
    /// The colour a single-colour surface should use for this gradient.
    pub fn primary(&self) -> &'static str {
        self.stops.first().map(|s| s.color).unwrap_or("#000000")
    }

    /// CSS `linear-gradient(...)` for HTML surfaces such as the tooltip swatch.
    pub fn css(&self) -> String {
        let stops: Vec<String> = self
            .stops
            .iter()
            .map(|s| format!("{} {}%", s.color, (s.offset * 100.0).round()))
            .collect();
        format!("linear-gradient({}deg, {})", self.angle_deg, stops.join(", "))
    }

    /// Colour at position `t` (clamped to 0..=1), interpolated between stops.
    pub fn sample(&self, t: f64) -> String {
        let t = t.clamp(0.0, 1.0);
        let Some(first) = self.stops.first() else {
            return "#000000".to_string();
        };

        let mut lower = *first;
        for upper in self.stops.iter().skip(1) {
            if t <= upper.offset {
                let span = upper.offset - lower.offset;
                let local = if span > 0.0 { (t - lower.offset) / span } else { 0.0 };
                return mix(lower.color, upper.color, local);
            }
            lower = *upper;
        }
        lower.color.to_string()
    }
}

fn parse_hex(color: &str) -> Option<[u8; 3]> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

fn mix(from: &str, to: &str, t: f64) -> String {
    match (parse_hex(from), parse_hex(to)) {
        (Some(a), Some(b)) => {
            let lerp = |i: usize| (a[i] as f64 + (b[i] as f64 - a[i] as f64) * t).round() as u8;
            format!("#{:02x}{:02x}{:02x}", lerp(0), lerp(1), lerp(2))
        }
        _ => from.to_string(),
    }
}

/// `rgba(r, g, b, alpha)` for a `#rrggbb` colour; unknown formats pass through.
pub fn with_alpha(color: &str, alpha: f64) -> String {
    match parse_hex(color) {
        Some([r, g, b]) => format!("rgba({}, {}, {}, {})", r, g, b, alpha),
        None => color.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_wraps() {
        assert_eq!(palette_color(0), "#3b82f6");
        assert_eq!(palette_color(6), "#84cc16");
        assert_eq!(palette_color(7), "#3b82f6");
        assert_eq!(palette_color(15), palette_color(1));
    }

    #[test]
    fn test_gradient_css() {
        assert_eq!(
            BAR_GRADIENT.css(),
            "linear-gradient(180deg, #10b981 0%, #059669 50%, #047857 100%)"
        );
    }

    #[test]
    fn test_gradient_sample() {
        assert_eq!(LINE_GRADIENT.sample(0.0), "#3b82f6");
        assert_eq!(LINE_GRADIENT.sample(0.5), "#6366f1");
        assert_eq!(LINE_GRADIENT.sample(1.0), "#8b5cf6");
        assert_eq!(LINE_GRADIENT.sample(7.0), "#8b5cf6");

        let mid = LINE_GRADIENT.sample(0.25);
        assert_ne!(mid, "#3b82f6");
        assert_ne!(mid, "#6366f1");
    }

    #[test]
    fn test_primary_and_hover_differ() {
        assert_eq!(BAR_GRADIENT.primary(), "#10b981");
        assert_ne!(BAR_GRADIENT.primary(), BAR_HOVER_GRADIENT.primary());
    }

    #[test]
    fn test_with_alpha() {
        assert_eq!(with_alpha("#3b82f6", 0.2), "rgba(59, 130, 246, 0.2)");
        assert_eq!(with_alpha("red", 0.2), "red");
    }
}
