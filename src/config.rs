use bon::Builder;
use std::path::PathBuf;
use std::time::Duration;

/// Color representation for wheel and panel elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn as_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Mix towards `other` by `t` in [0, 1]; used for disabled controls.
    pub fn mix(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color::new(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
        )
    }
}

/// Slice colors, picked by `index % PALETTE.len()`.
pub const PALETTE: [Color; 7] = [
    Color::new(0xee, 0x3a, 0x4b),
    Color::new(0x00, 0xc9, 0x8a),
    Color::new(0x9b, 0x6b, 0xff),
    Color::new(0x70, 0xc4, 0x00),
    Color::new(0xf6, 0x62, 0x34),
    Color::new(0xd8, 0x8a, 0x00),
    Color::new(0xb0, 0xb8, 0x00),
];

pub const WHITE: Color = Color::new(0xff, 0xff, 0xff);
pub const POINTER_RED: Color = Color::new(0xef, 0x44, 0x44);
pub const BUTTON_BLUE: Color = Color::new(0x25, 0x63, 0xeb);
pub const BUTTON_GREEN: Color = Color::new(0x16, 0xa3, 0x4a);
pub const MUTED_TEXT: Color = Color::new(0x9c, 0xa3, 0xaf);

/// Palette color for the slice (and list swatch) at `index`.
pub fn slice_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

pub const DEFAULT_ITEMS: [&str; 8] = [
    "Peroni",
    "Amstel",
    "Golden Brau",
    "Neumarkt",
    "Madri",
    "Tuborg",
    "🤡 Joker 🤡",
    "💀 Faliment 💀",
];

pub fn default_items() -> Vec<String> {
    DEFAULT_ITEMS.iter().map(|s| s.to_string()).collect()
}

/// House rules printed under the wheel for the two special seed items.
pub const DEFAULT_RULES: [&str; 4] = [
    "🤡 Joker: pick whatever you want to drink.",
    "💀 Faliment: a shot of spirits or a whole beer, bottoms up.",
    "You can dodge it with 15 supervised push-ups.",
    "Every option has equal odds 🍻",
];

pub fn default_rules() -> Vec<String> {
    DEFAULT_RULES.iter().map(|s| s.to_string()).collect()
}

/// Environment variable consulted for a font file when `font_path` is unset.
pub const FONT_ENV_VAR: &str = "WHEEL_FONT";

/// Common locations probed for a usable font, in order.
pub const FONT_SEARCH_PATHS: [&str; 8] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

#[derive(Debug, Clone, Builder)]
pub struct WheelConfig {
    #[builder(default = "Wheel of Fortune".to_string())]
    pub title: String,
    #[builder(default = default_items())]
    pub items: Vec<String>,

    // Window configuration
    #[builder(default = 640)]
    pub window_width: u32,
    #[builder(default = 520)]
    pub window_height: u32,
    #[builder(default = 60.0)]
    pub max_framerate: f64,

    // Wheel surface
    #[builder(default = 300)]
    pub wheel_size: u32,
    #[builder(default = (20, 20))]
    pub wheel_origin: (i32, i32),
    #[builder(default = 5.0)]
    pub rim_margin: f64,
    #[builder(default = 2.0)]
    pub stroke_width: f32,
    #[builder(default = 14.0)]
    pub label_font_size: f32,
    #[builder(default = 1.6)]
    pub label_radius_divisor: f64,
    #[builder(default = 20)]
    pub hub_radius: i32,
    #[builder(default = 3)]
    pub hub_border: i32,
    #[builder(default = 30)]
    pub pointer_width: i32,
    #[builder(default = 25)]
    pub pointer_height: i32,
    #[builder(default = 8)]
    pub pointer_overhang: i32,

    // Panel
    #[builder(default = 16.0)]
    pub ui_font_size: f32,
    #[builder(default = 20)]
    pub max_label_chars: usize,
    #[builder(default = Duration::from_secs(3))]
    pub notice_duration: Duration,
    /// Footer lines under the wheel; empty hides the footer.
    #[builder(default = default_rules())]
    pub rules: Vec<String>,

    // Colors
    #[builder(default = Color::new(0x03, 0x07, 0x12))]
    pub background_color: Color,
    #[builder(default = Color::new(0x11, 0x18, 0x27))]
    pub panel_color: Color,
    #[builder(default = Color::new(0x1f, 0x29, 0x37))]
    pub row_color: Color,
    #[builder(default = Color::new(0xf3, 0xf4, 0xf6))]
    pub text_color: Color,

    // Font configuration
    pub font_path: Option<PathBuf>,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl WheelConfig {
    /// Radius of the wheel inside its square surface.
    pub fn wheel_radius(&self) -> f64 {
        let half = self.wheel_size as f64 / 2.0;
        half - self.rim_margin
    }

    /// Center of the wheel in window coordinates.
    pub fn wheel_center(&self) -> (i32, i32) {
        let half = self.wheel_size as i32 / 2;
        (self.wheel_origin.0 + half, self.wheel_origin.1 + half)
    }
}
