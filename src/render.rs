use crate::config::{slice_color, WheelConfig, POINTER_RED, WHITE};
use crate::spin::slice_width;
use rusttype::{point, Font, PositionedGlyph, Scale};

// ============================================================================
// CANVAS
// ============================================================================

/// RGBA8 framebuffer view, row-major, `width * height * 4` bytes.
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> Canvas<'a> {
    pub fn new(frame: &'a mut [u8], width: usize, height: usize) -> Self {
        debug_assert_eq!(frame.len(), width * height * 4);
        Self {
            frame,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 4;
        let mut out = [0; 4];
        out.copy_from_slice(&self.frame[idx..idx + 4]);
        Some(out)
    }

    pub fn clear(&mut self, color: (u8, u8, u8)) {
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&[color.0, color.1, color.2, 0xff]);
        }
    }

    /// Alpha-blend `color` over the pixel at (x, y). Out-of-bounds is a no-op.
    fn blend(&mut self, x: i32, y: i32, color: (u8, u8, u8), alpha: f32) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let idx = (y as usize * self.width + x as usize) * 4;
        let a = alpha.clamp(0.0, 1.0);
        let mix = |src: u8, dst: u8| (src as f32 * a + dst as f32 * (1.0 - a)).round() as u8;
        let out = [
            mix(color.0, self.frame[idx]),
            mix(color.1, self.frame[idx + 1]),
            mix(color.2, self.frame[idx + 2]),
            0xff,
        ];
        self.frame[idx..idx + 4].copy_from_slice(&out);
    }
}

// ============================================================================
// RETAINED MODE ABSTRACTIONS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear((u8, u8, u8)),
    /// Filled pie slice; angles in degrees, 0° = +x, clockwise on screen.
    Wedge {
        cx: f64,
        cy: f64,
        radius: f64,
        start_deg: f64,
        span_deg: f64,
        color: (u8, u8, u8),
    },
    Line {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        thickness: f32,
        color: (u8, u8, u8),
    },
    /// Annulus between `r - thickness` and `r`.
    Ring {
        cx: i32,
        cy: i32,
        r: i32,
        thickness: i32,
        color: (u8, u8, u8),
    },
    Disc {
        cx: i32,
        cy: i32,
        radius: i32,
        color: (u8, u8, u8),
    },
    Triangle {
        points: [(f64, f64); 3],
        color: (u8, u8, u8),
    },
    Rect {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: (u8, u8, u8),
    },
    Text {
        x: i32,
        y: i32,
        text: String,
        font_size: f32,
        align: TextAlign,
        color: (u8, u8, u8),
    },
    /// Text centred at `offset` along the ray from (cx, cy) at `angle` radians,
    /// rotated so it reads along the ray.
    RadialText {
        cx: f64,
        cy: f64,
        angle: f64,
        offset: f64,
        text: String,
        font_size: f32,
        color: (u8, u8, u8),
    },
}

#[derive(Debug, Default)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_command(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn render(&self, canvas: &mut Canvas, font: Option<&Font<'static>>) {
        for command in &self.commands {
            match command {
                DrawCommand::Clear(color) => canvas.clear(*color),
                DrawCommand::Wedge {
                    cx,
                    cy,
                    radius,
                    start_deg,
                    span_deg,
                    color,
                } => fill_wedge(canvas, *cx, *cy, *radius, *start_deg, *span_deg, *color),
                DrawCommand::Line {
                    x0,
                    y0,
                    x1,
                    y1,
                    thickness,
                    color,
                } => draw_thick_line_aa(canvas, *x0, *y0, *x1, *y1, *thickness, *color),
                DrawCommand::Ring {
                    cx,
                    cy,
                    r,
                    thickness,
                    color,
                } => draw_ring(canvas, *cx, *cy, *r, *thickness, *color),
                DrawCommand::Disc {
                    cx,
                    cy,
                    radius,
                    color,
                } => draw_circle(canvas, *cx, *cy, *radius, *color),
                DrawCommand::Triangle { points, color } => fill_triangle(canvas, points, *color),
                DrawCommand::Rect { x, y, w, h, color } => fill_rect(canvas, *x, *y, *w, *h, *color),
                DrawCommand::Text {
                    x,
                    y,
                    text,
                    font_size,
                    align,
                    color,
                } => {
                    if let Some(font) = font {
                        let scale = Scale::uniform(*font_size);
                        draw_text(canvas, *x, *y, text, font, scale, *align, *color);
                    }
                }
                DrawCommand::RadialText {
                    cx,
                    cy,
                    angle,
                    offset,
                    text,
                    font_size,
                    color,
                } => {
                    if let Some(font) = font {
                        let scale = Scale::uniform(*font_size);
                        draw_radial_text(canvas, *cx, *cy, *angle, *offset, text, font, scale, *color);
                    }
                }
            }
        }
    }
}

// ============================================================================
// WHEEL
// ============================================================================

/// Angular span `[start, start + width)` of each slice in degrees, before
/// any rotation. The spans tile the full circle.
pub fn slice_spans(count: usize) -> Vec<(f64, f64)> {
    let width = slice_width(count);
    (0..count).map(|i| (i as f64 * width, width)).collect()
}

/// Queue the wheel (slices, separators, labels, rim, hub) turned by
/// `rotation` degrees.
pub fn add_wheel<S: AsRef<str>>(
    scene: &mut Scene,
    labels: &[S],
    rotation: f64,
    config: &WheelConfig,
) {
    if labels.is_empty() {
        return;
    }
    let (cx, cy) = config.wheel_center();
    let radius = config.wheel_radius();
    let stroke = WHITE.as_tuple();

    for (index, (start, span)) in slice_spans(labels.len()).into_iter().enumerate() {
        scene.add_command(DrawCommand::Wedge {
            cx: cx as f64,
            cy: cy as f64,
            radius,
            start_deg: start + rotation,
            span_deg: span,
            color: slice_color(index).as_tuple(),
        });
    }

    for (start, _) in slice_spans(labels.len()) {
        let edge = (start + rotation).to_radians();
        scene.add_command(DrawCommand::Line {
            x0: cx,
            y0: cy,
            x1: (cx as f64 + edge.cos() * radius).round() as i32,
            y1: (cy as f64 + edge.sin() * radius).round() as i32,
            thickness: config.stroke_width,
            color: stroke,
        });
    }
    scene.add_command(DrawCommand::Ring {
        cx,
        cy,
        r: radius.round() as i32 + 1,
        thickness: config.stroke_width.round() as i32,
        color: stroke,
    });

    for (label, (start, span)) in labels.iter().zip(slice_spans(labels.len())) {
        scene.add_command(DrawCommand::RadialText {
            cx: cx as f64,
            cy: cy as f64,
            angle: (start + rotation + span / 2.0).to_radians(),
            offset: radius / config.label_radius_divisor,
            text: label.as_ref().to_string(),
            font_size: config.label_font_size,
            color: WHITE.as_tuple(),
        });
    }

    scene.add_command(DrawCommand::Disc {
        cx,
        cy,
        radius: config.hub_radius,
        color: WHITE.as_tuple(),
    });
    scene.add_command(DrawCommand::Ring {
        cx,
        cy,
        r: config.hub_radius + config.hub_border / 2 + 1,
        thickness: config.hub_border,
        color: slice_color(0).as_tuple(),
    });
}

/// Downward-pointing marker above the top of the wheel.
pub fn add_pointer(scene: &mut Scene, config: &WheelConfig) {
    let (cx, _) = config.wheel_center();
    let top = (config.wheel_origin.1 - config.pointer_overhang) as f64;
    let half = config.pointer_width as f64 / 2.0;
    scene.add_command(DrawCommand::Triangle {
        points: [
            (cx as f64 - half, top),
            (cx as f64 + half, top),
            (cx as f64, top + config.pointer_height as f64),
        ],
        color: POINTER_RED.as_tuple(),
    });
}

/// Clear the surface and draw the wheel with its pointer. Output depends
/// only on the arguments.
pub fn draw_wheel<S: AsRef<str>>(
    canvas: &mut Canvas,
    labels: &[S],
    rotation: f64,
    config: &WheelConfig,
    font: Option<&Font<'static>>,
) {
    let mut scene = Scene::new();
    scene.add_command(DrawCommand::Clear(config.background_color.as_tuple()));
    add_wheel(&mut scene, labels, rotation, config);
    add_pointer(&mut scene, config);
    scene.render(canvas, font);
}

// ============================================================================
// DRAWING PRIMITIVES
// ============================================================================

fn fill_wedge(
    canvas: &mut Canvas,
    cx: f64,
    cy: f64,
    radius: f64,
    start_deg: f64,
    span_deg: f64,
    color: (u8, u8, u8),
) {
    let (min_x, min_y, max_x, max_y) = wedge_bounds(cx, cy, radius, start_deg, span_deg);
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist > radius + 1.0 {
                continue;
            }
            let angle = dy.atan2(dx).to_degrees();
            let relative = (angle - start_deg).rem_euclid(360.0);
            if relative >= span_deg && span_deg < 360.0 {
                continue;
            }
            let aa = if dist > radius {
                1.0 - (dist - radius).min(1.0)
            } else {
                1.0
            };
            if aa > 0.0 {
                canvas.blend(x, y, color, aa as f32);
            }
        }
    }
}

/// Pixel box covering a wedge plus one pixel of anti-aliasing: the center,
/// both arc ends and any axis extreme the arc sweeps through.
fn wedge_bounds(cx: f64, cy: f64, radius: f64, start_deg: f64, span_deg: f64) -> (i32, i32, i32, i32) {
    if span_deg >= 360.0 {
        return (
            (cx - radius - 1.0).floor() as i32,
            (cy - radius - 1.0).floor() as i32,
            (cx + radius + 1.0).ceil() as i32,
            (cy + radius + 1.0).ceil() as i32,
        );
    }
    let start_deg = start_deg.rem_euclid(360.0);
    let on_arc = |deg: f64| {
        let rad = deg.to_radians();
        (cx + rad.cos() * radius, cy + rad.sin() * radius)
    };
    let extremes = [0.0, 90.0, 180.0, 270.0]
        .into_iter()
        .filter(|axis: &f64| (axis - start_deg).rem_euclid(360.0) < span_deg)
        .map(on_arc);
    let points = [(cx, cy), on_arc(start_deg), on_arc(start_deg + span_deg)]
        .into_iter()
        .chain(extremes);

    let (mut min_x, mut min_y) = (f64::MAX, f64::MAX);
    let (mut max_x, mut max_y) = (f64::MIN, f64::MIN);
    for (x, y) in points {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }
    (
        min_x.floor() as i32 - 1,
        min_y.floor() as i32 - 1,
        max_x.ceil() as i32 + 1,
        max_y.ceil() as i32 + 1,
    )
}

fn draw_thick_line_aa(
    canvas: &mut Canvas,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    thickness: f32,
    color: (u8, u8, u8),
) {
    let pad = thickness.ceil() as i32 + 1;
    let dx = (x1 - x0) as f32;
    let dy = (y1 - y0) as f32;
    let len_sq = (dx * dx + dy * dy).max(f32::EPSILON);
    for y in y0.min(y1) - pad..=y0.max(y1) + pad {
        for x in x0.min(x1) - pad..=x0.max(x1) + pad {
            let px = (x - x0) as f32;
            let py = (y - y0) as f32;
            let t = ((px * dx + py * dy) / len_sq).clamp(0.0, 1.0);
            let lx = x0 as f32 + t * dx;
            let ly = y0 as f32 + t * dy;
            let dist = ((lx - x as f32).powi(2) + (ly - y as f32).powi(2)).sqrt();
            let aa = (1.0 - (dist - thickness / 2.0).clamp(0.0, 1.0)).clamp(0.0, 1.0);
            if aa > 0.01 {
                canvas.blend(x, y, color, aa);
            }
        }
    }
}

fn draw_ring(canvas: &mut Canvas, cx: i32, cy: i32, r: i32, thickness: i32, color: (u8, u8, u8)) {
    let inner = (r - thickness) as f64;
    let outer = r as f64;
    for y in cy - r - 1..=cy + r + 1 {
        for x in cx - r - 1..=cx + r + 1 {
            let dx = (x - cx) as f64;
            let dy = (y - cy) as f64;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist < inner - 1.0 || dist > outer + 1.0 {
                continue;
            }
            let aa = if dist > outer {
                1.0 - (dist - outer).min(1.0)
            } else if dist < inner {
                1.0 - (inner - dist).min(1.0)
            } else {
                1.0
            };
            if aa > 0.0 {
                canvas.blend(x, y, color, aa as f32);
            }
        }
    }
}

fn draw_circle(canvas: &mut Canvas, cx: i32, cy: i32, radius: i32, color: (u8, u8, u8)) {
    for y in -radius - 1..=radius + 1 {
        for x in -radius - 1..=radius + 1 {
            let dist = ((x * x + y * y) as f64).sqrt();
            let aa = if dist > radius as f64 {
                1.0 - (dist - radius as f64).min(1.0)
            } else {
                1.0
            };
            if aa > 0.0 {
                canvas.blend(cx + x, cy + y, color, aa as f32);
            }
        }
    }
}

fn fill_triangle(canvas: &mut Canvas, points: &[(f64, f64); 3], color: (u8, u8, u8)) {
    let min_x = points.iter().map(|p| p.0).fold(f64::MAX, f64::min).floor() as i32 - 1;
    let max_x = points.iter().map(|p| p.0).fold(f64::MIN, f64::max).ceil() as i32 + 1;
    let min_y = points.iter().map(|p| p.1).fold(f64::MAX, f64::min).floor() as i32 - 1;
    let max_y = points.iter().map(|p| p.1).fold(f64::MIN, f64::max).ceil() as i32 + 1;

    // Signed area decides the winding, so edges can be oriented inward.
    let [a, b, c] = *points;
    let area = (b.0 - a.0) * (c.1 - a.1) - (b.1 - a.1) * (c.0 - a.0);
    if area.abs() < f64::EPSILON {
        return;
    }
    let sign = area.signum();
    let edges = [(a, b), (b, c), (c, a)];

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let (px, py) = (x as f64, y as f64);
            let inside = edges
                .iter()
                .map(|(p, q)| {
                    let (ex, ey) = (q.0 - p.0, q.1 - p.1);
                    let len = (ex * ex + ey * ey).sqrt();
                    sign * (ex * (py - p.1) - ey * (px - p.0)) / len
                })
                .fold(f64::MAX, f64::min);
            let aa = (inside + 0.5).clamp(0.0, 1.0);
            if aa > 0.0 {
                canvas.blend(x, y, color, aa as f32);
            }
        }
    }
}

fn fill_rect(canvas: &mut Canvas, x: i32, y: i32, w: i32, h: i32, color: (u8, u8, u8)) {
    for py in y..y + h {
        for px in x..x + w {
            canvas.blend(px, py, color, 1.0);
        }
    }
}

/// Pixel width of `text` at `scale`.
pub fn text_width(text: &str, font: &Font, scale: Scale) -> i32 {
    let glyphs: Vec<PositionedGlyph> = font.layout(text, scale, point(0.0, 0.0)).collect();
    match (glyphs.first(), glyphs.last()) {
        (Some(first), Some(last)) => (last.position().x - first.position().x
            + last.unpositioned().h_metrics().advance_width)
            .ceil() as i32,
        _ => 0,
    }
}

/// Draw `text` vertically centred on `y`; `x` is the left edge or the centre
/// depending on `align`.
fn draw_text(
    canvas: &mut Canvas,
    x: i32,
    y: i32,
    text: &str,
    font: &Font,
    scale: Scale,
    align: TextAlign,
    color: (u8, u8, u8),
) {
    let v_metrics = font.v_metrics(scale);
    let glyphs: Vec<PositionedGlyph> = font
        .layout(text, scale, point(0.0, v_metrics.ascent))
        .collect();
    let line_height = (v_metrics.ascent - v_metrics.descent).round() as i32;
    let offset_x = match align {
        TextAlign::Left => x,
        TextAlign::Center => x - text_width(text, font, scale) / 2,
    };
    let offset_y = y - line_height / 2;
    for glyph in glyphs {
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, v| {
                let px = offset_x + bb.min.x + gx as i32;
                let py = offset_y + bb.min.y + gy as i32;
                canvas.blend(px, py, color, v);
            });
        }
    }
}

fn draw_radial_text(
    canvas: &mut Canvas,
    cx: f64,
    cy: f64,
    angle: f64,
    offset: f64,
    text: &str,
    font: &Font,
    scale: Scale,
    color: (u8, u8, u8),
) {
    let glyphs: Vec<PositionedGlyph> = font.layout(text, scale, point(0.0, 0.0)).collect();
    if glyphs.is_empty() {
        return;
    }
    let half_width = text_width(text, font, scale) as f64 / 2.0;
    let (sin_r, cos_r) = angle.sin_cos();

    for glyph in &glyphs {
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, v| {
                if v > 0.001 {
                    // Baseline sits on the ray, text centred on `offset`.
                    let local_x = (bb.min.x + gx as i32) as f64 + offset - half_width;
                    let local_y = (bb.min.y + gy as i32) as f64;
                    let x = cx + local_x * cos_r - local_y * sin_r;
                    let y = cy + local_x * sin_r + local_y * cos_r;
                    draw_antialiased_pixel(canvas, x, y, color, v);
                }
            });
        }
    }
}

fn draw_antialiased_pixel(canvas: &mut Canvas, x: f64, y: f64, color: (u8, u8, u8), alpha: f32) {
    let x_floor = x.floor() as i32;
    let y_floor = y.floor() as i32;
    let x_frac = x - x_floor as f64;
    let y_frac = y - y_floor as f64;

    let samples = [
        (x_floor, y_floor, (1.0 - x_frac) * (1.0 - y_frac)),
        (x_floor + 1, y_floor, x_frac * (1.0 - y_frac)),
        (x_floor, y_floor + 1, (1.0 - x_frac) * y_frac),
        (x_floor + 1, y_floor + 1, x_frac * y_frac),
    ];
    for (px, py, weight) in samples {
        let a = alpha * weight as f32;
        if a > 0.001 {
            canvas.blend(px, py, color, a);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("item {i}")).collect()
    }

    fn wedges(scene: &Scene) -> Vec<(f64, f64)> {
        scene
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Wedge {
                    start_deg,
                    span_deg,
                    ..
                } => Some((*start_deg, *span_deg)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn slices_tile_the_circle() {
        let config = WheelConfig::default();
        for n in 2..=12 {
            let mut scene = Scene::new();
            add_wheel(&mut scene, &labels(n), 0.0, &config);
            let spans = wedges(&scene);
            assert_eq!(spans.len(), n);
            let total: f64 = spans.iter().map(|(_, s)| s).sum();
            assert!((total - 360.0).abs() < 1e-9);
            for pair in spans.windows(2) {
                assert!((pair[0].0 + pair[0].1 - pair[1].0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn rotation_offsets_every_slice() {
        let config = WheelConfig::default();
        let mut scene = Scene::new();
        add_wheel(&mut scene, &labels(4), 30.0, &config);
        let starts: Vec<f64> = wedges(&scene).iter().map(|(s, _)| *s).collect();
        assert_eq!(starts, vec![30.0, 120.0, 210.0, 300.0]);
    }

    #[test]
    fn slice_colors_cycle_palette() {
        let config = WheelConfig::default();
        let mut scene = Scene::new();
        add_wheel(&mut scene, &labels(9), 0.0, &config);
        let colors: Vec<(u8, u8, u8)> = scene
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Wedge { color, .. } => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(colors[7], colors[0]);
        assert_eq!(colors[8], colors[1]);
    }

    #[test]
    fn one_label_per_slice() {
        let config = WheelConfig::default();
        let mut scene = Scene::new();
        add_wheel(&mut scene, &labels(5), 0.0, &config);
        let texts = scene
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::RadialText { .. }))
            .count();
        assert_eq!(texts, 5);
    }

    #[test]
    fn labels_sit_on_slice_bisectors() {
        let config = WheelConfig::default();
        let mut scene = Scene::new();
        add_wheel(&mut scene, &labels(4), 30.0, &config);
        let placed: Vec<(f64, f64, String)> = scene
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::RadialText {
                    angle, offset, text, ..
                } => Some((*angle, *offset, text.clone())),
                _ => None,
            })
            .collect();
        assert_eq!(placed.len(), 4);
        for (i, (angle, offset, text)) in placed.iter().enumerate() {
            let bisector = (30.0 + i as f64 * 90.0 + 45.0).to_radians();
            assert!((angle - bisector).abs() < 1e-12, "label {i}: {angle} vs {bisector}");
            assert_eq!(*offset, config.wheel_radius() / 1.6);
            assert_eq!(text, &format!("item {i}"));
        }
    }

    #[test]
    fn hub_border_uses_first_palette_color() {
        let config = WheelConfig::default();
        let mut scene = Scene::new();
        add_wheel(&mut scene, &labels(4), 0.0, &config);
        let rings: Vec<(i32, (u8, u8, u8))> = scene
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Ring { r, color, .. } => Some((*r, *color)),
                _ => None,
            })
            .collect();
        let (r, color) = *rings.last().unwrap();
        assert!(r < config.wheel_radius() as i32);
        assert_eq!(color, slice_color(0).as_tuple());
    }

    #[test]
    fn wedge_scan_is_limited_to_its_quadrant() {
        assert_eq!(wedge_bounds(100.0, 100.0, 50.0, 0.0, 90.0), (99, 99, 151, 151));
        // 45°..135° sweeps through the bottom extreme at 90°
        let (_, min_y, _, max_y) = wedge_bounds(100.0, 100.0, 50.0, 45.0, 90.0);
        assert_eq!((min_y, max_y), (99, 151));
        // Angles past a full turn wrap
        assert_eq!(
            wedge_bounds(100.0, 100.0, 50.0, 720.0, 90.0),
            wedge_bounds(100.0, 100.0, 50.0, 0.0, 90.0)
        );
        assert_eq!(wedge_bounds(100.0, 100.0, 50.0, 0.0, 360.0), (49, 49, 151, 151));
    }

    #[test]
    fn quarter_wedge_leaves_other_quadrants_untouched() {
        let mut frame = vec![0u8; 200 * 200 * 4];
        let mut canvas = Canvas::new(&mut frame, 200, 200);
        fill_wedge(&mut canvas, 100.0, 100.0, 50.0, 0.0, 90.0, (0xff, 0, 0));
        assert_eq!(canvas.pixel(120, 120), Some([0xff, 0, 0, 0xff]));
        assert_eq!(canvas.pixel(80, 80), Some([0, 0, 0, 0]));
        assert_eq!(canvas.pixel(80, 120), Some([0, 0, 0, 0]));
        assert_eq!(canvas.pixel(120, 80), Some([0, 0, 0, 0]));
    }

    fn render(n: usize, rotation: f64, config: &WheelConfig) -> Vec<u8> {
        let (w, h) = (config.window_width as usize, config.window_height as usize);
        let mut frame = vec![0u8; w * h * 4];
        let mut canvas = Canvas::new(&mut frame, w, h);
        draw_wheel(&mut canvas, &labels(n), rotation, config, None);
        frame
    }

    #[test]
    fn drawing_is_repeatable() {
        let config = WheelConfig::builder().window_width(340).window_height(340).build();
        assert_eq!(render(6, 77.0, &config), render(6, 77.0, &config));
    }

    #[test]
    fn redraw_with_fewer_items_leaves_no_stale_slices() {
        let config = WheelConfig::builder().window_width(340).window_height(340).build();
        let fresh = render(3, 10.0, &config);

        let (w, h) = (340, 340);
        let mut frame = vec![0u8; w * h * 4];
        {
            let mut canvas = Canvas::new(&mut frame, w, h);
            draw_wheel(&mut canvas, &labels(12), 10.0, &config, None);
        }
        {
            let mut canvas = Canvas::new(&mut frame, w, h);
            draw_wheel(&mut canvas, &labels(3), 10.0, &config, None);
        }
        assert_eq!(frame, fresh);
    }

    #[test]
    fn hub_center_is_white() {
        let config = WheelConfig::builder().window_width(340).window_height(340).build();
        let (w, h) = (340, 340);
        let mut frame = vec![0u8; w * h * 4];
        let mut canvas = Canvas::new(&mut frame, w, h);
        draw_wheel(&mut canvas, &labels(4), 0.0, &config, None);
        let (cx, cy) = config.wheel_center();
        assert_eq!(canvas.pixel(cx as usize, cy as usize), Some([0xff, 0xff, 0xff, 0xff]));
    }

    #[test]
    fn slice_interior_uses_palette_color() {
        let config = WheelConfig::builder().window_width(340).window_height(340).build();
        let (w, h) = (340, 340);
        let mut frame = vec![0u8; w * h * 4];
        let mut canvas = Canvas::new(&mut frame, w, h);
        draw_wheel(&mut canvas, &labels(4), 0.0, &config, None);
        let (cx, cy) = config.wheel_center();
        // Slice 0 spans 0°..90°, i.e. the lower-right quadrant on screen.
        let inside = (cx + 80, cy + 40);
        let c = slice_color(0);
        assert_eq!(
            canvas.pixel(inside.0 as usize, inside.1 as usize),
            Some([c.r, c.g, c.b, 0xff])
        );
    }

    #[test]
    fn pointer_sits_above_the_wheel() {
        let config = WheelConfig::builder().window_width(340).window_height(340).build();
        let (w, h) = (340, 340);
        let mut frame = vec![0u8; w * h * 4];
        let mut canvas = Canvas::new(&mut frame, w, h);
        draw_wheel(&mut canvas, &labels(4), 0.0, &config, None);
        let (cx, _) = config.wheel_center();
        let y = config.wheel_origin.1 - config.pointer_overhang + 4;
        let red = POINTER_RED;
        assert_eq!(
            canvas.pixel(cx as usize, y as usize),
            Some([red.r, red.g, red.b, 0xff])
        );
    }
}
