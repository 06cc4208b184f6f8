//! Controls around the wheel: spin button, item entry, item rows, winner
//! banner and refusal notice. Everything is drawn into the same framebuffer
//! as the wheel and hit-tested in buffer coordinates.

use crate::config::{slice_color, Color, WheelConfig, BUTTON_BLUE, BUTTON_GREEN, MUTED_TEXT, POINTER_RED, WHITE};
use crate::error::ItemError;
use crate::render::{add_pointer, add_wheel, DrawCommand, Scene, TextAlign};
use crate::state::WheelState;
use std::time::{Duration, Instant};

const PANEL_GAP: i32 = 20;
const ROW_HEIGHT: i32 = 24;
const ROW_GAP: i32 = 2;
const BUTTON_HEIGHT: i32 = 40;
const INPUT_HEIGHT: i32 = 32;
const DELETE_SIZE: i32 = 20;
const FOOTER_LINE_HEIGHT: i32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    fn fill(&self, scene: &mut Scene, color: Color) {
        scene.add_command(DrawCommand::Rect {
            x: self.x,
            y: self.y,
            w: self.w,
            h: self.h,
            color: color.as_tuple(),
        });
    }

    fn outline(&self, scene: &mut Scene, thickness: f32, color: Color) {
        let (l, t, r, b) = (self.x, self.y, self.x + self.w - 1, self.y + self.h - 1);
        for (x0, y0, x1, y1) in [(l, t, r, t), (l, b, r, b), (l, t, l, b), (r, t, r, b)] {
            scene.add_command(DrawCommand::Line {
                x0,
                y0,
                x1,
                y1,
                thickness,
                color: color.as_tuple(),
            });
        }
    }
}

/// Fixed positions of every control, derived from the wheel surface.
#[derive(Debug, Clone)]
pub struct Layout {
    pub spin_button: Rect,
    pub winner_line: (i32, i32),
    pub notice_line: (i32, i32),
    pub panel: Rect,
    pub header: (i32, i32),
    pub input: Rect,
    pub add_button: Rect,
    /// Center of the first footer line.
    pub footer: (i32, i32),
    rows_top: i32,
}

impl Layout {
    pub fn new(config: &WheelConfig) -> Self {
        let (ox, oy) = config.wheel_origin;
        let size = config.wheel_size as i32;
        let bottom = oy + size;

        let spin_button = Rect::new(ox, bottom + 15, size, BUTTON_HEIGHT);
        let winner_line = (ox + size / 2, spin_button.y + spin_button.h + 20);
        let notice_line = (ox + size / 2, winner_line.1 + 26);
        let footer = (config.window_width as i32 / 2, notice_line.1 + 32);

        let panel_x = ox + size + PANEL_GAP;
        let panel_w = (config.window_width as i32 - panel_x - PANEL_GAP).max(200);
        let panel_h = footer.1 - FOOTER_LINE_HEIGHT - oy;
        let panel = Rect::new(panel_x, oy, panel_w, panel_h);

        let inner_x = panel_x + 12;
        let inner_w = panel_w - 24;
        let header = (inner_x, oy + 18);
        let input = Rect::new(inner_x, oy + 36, inner_w - INPUT_HEIGHT - 8, INPUT_HEIGHT);
        let add_button = Rect::new(input.x + input.w + 8, input.y, INPUT_HEIGHT, INPUT_HEIGHT);

        Self {
            spin_button,
            winner_line,
            notice_line,
            panel,
            header,
            input,
            add_button,
            footer,
            rows_top: input.y + INPUT_HEIGHT + 10,
        }
    }

    pub fn row(&self, index: usize) -> Rect {
        let y = self.rows_top + index as i32 * (ROW_HEIGHT + ROW_GAP);
        Rect::new(self.input.x, y, self.add_button.x + self.add_button.w - self.input.x, ROW_HEIGHT)
    }

    pub fn footer_line(&self, index: usize) -> (i32, i32) {
        (self.footer.0, self.footer.1 + index as i32 * FOOTER_LINE_HEIGHT)
    }

    pub fn delete_button(&self, index: usize) -> Rect {
        let row = self.row(index);
        Rect::new(
            row.x + row.w - DELETE_SIZE - 2,
            row.y + (ROW_HEIGHT - DELETE_SIZE) / 2,
            DELETE_SIZE,
            DELETE_SIZE,
        )
    }
}

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Spin,
    Add,
    Remove(usize),
}

#[derive(Debug, Clone)]
struct Notice {
    message: String,
    until: Instant,
}

/// Presentation state that is not part of the wheel itself.
#[derive(Debug, Clone)]
pub struct Shell {
    layout: Layout,
    input: String,
    focused: bool,
    max_input_chars: usize,
    notice_duration: Duration,
    notice: Option<Notice>,
}

impl Shell {
    pub fn new(config: &WheelConfig) -> Self {
        Self {
            layout: Layout::new(config),
            input: String::new(),
            focused: false,
            max_input_chars: config.max_label_chars,
            notice_duration: config.notice_duration,
            notice: None,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Append typed text, dropping control characters and anything past
    /// the length cap. Ignored unless the input has focus.
    pub fn type_text(&mut self, text: &str) {
        if !self.focused {
            return;
        }
        for ch in text.chars().filter(|c| !c.is_control()) {
            if self.input.chars().count() >= self.max_input_chars {
                break;
            }
            self.input.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        if self.focused {
            self.input.pop();
        }
    }

    pub fn notice(&self, now: Instant) -> Option<&str> {
        self.notice
            .as_ref()
            .filter(|n| now < n.until)
            .map(|n| n.message.as_str())
    }

    pub fn can_submit(&self, state: &WheelState) -> bool {
        state.items().can_add(&self.input)
    }

    pub fn hit_test(&self, state: &WheelState, x: i32, y: i32) -> Option<Action> {
        if self.layout.spin_button.contains(x, y) {
            return Some(Action::Spin);
        }
        if self.layout.add_button.contains(x, y) {
            return Some(Action::Add);
        }
        (0..state.items().len())
            .find(|&i| self.layout.delete_button(i).contains(x, y))
            .map(Action::Remove)
    }

    /// A click on the text input focuses it; any other click blurs it.
    pub fn click(&mut self, state: &mut WheelState, x: i32, y: i32, now: Instant) {
        self.focused = self.layout.input.contains(x, y);
        if let Some(action) = self.hit_test(state, x, y) {
            self.apply(action, state, now);
        }
    }

    /// Enter in the text field. Ignored unless the input has focus.
    pub fn submit(&mut self, state: &mut WheelState, now: Instant) {
        if self.focused {
            self.apply(Action::Add, state, now);
        }
    }

    pub fn apply(&mut self, action: Action, state: &mut WheelState, now: Instant) {
        match action {
            Action::Spin => {
                // Disabled while spinning; the refusal is silent.
                state.spin(now);
            }
            Action::Add => {
                if !self.can_submit(state) {
                    return;
                }
                match state.add_item(&self.input) {
                    Ok(()) => {
                        log::info!("added item {:?}", self.input.trim());
                        self.input.clear();
                    }
                    Err(err) => log::debug!("add refused: {err}"),
                }
            }
            Action::Remove(index) => match state.remove_item(index) {
                Ok(label) => log::info!("removed item {label:?}"),
                Err(err @ ItemError::TooFew { .. }) => {
                    log::info!("remove refused: {err}");
                    self.notice = Some(Notice {
                        message: format!("Keep at least {} items on the wheel!", crate::items::MIN_ITEMS),
                        until: now + self.notice_duration,
                    });
                }
                Err(err) => log::debug!("remove refused: {err}"),
            },
        }
    }

    /// The whole window: background, wheel, pointer and controls.
    pub fn scene(&self, state: &WheelState, config: &WheelConfig, now: Instant) -> Scene {
        let mut scene = Scene::new();
        scene.add_command(DrawCommand::Clear(config.background_color.as_tuple()));

        add_wheel(&mut scene, state.items().as_slice(), state.rotation(), config);
        add_pointer(&mut scene, config);
        self.add_spin_controls(&mut scene, state, config, now);
        self.add_item_panel(&mut scene, state, config);
        self.add_footer(&mut scene, config);
        scene
    }

    fn add_spin_controls(&self, scene: &mut Scene, state: &WheelState, config: &WheelConfig, now: Instant) {
        let button = self.layout.spin_button;
        let (caption, color) = if state.is_spinning() {
            ("Spinning...", BUTTON_BLUE.mix(config.background_color, 0.5))
        } else {
            ("Spin!", BUTTON_BLUE)
        };
        button.fill(scene, color);
        let (bx, by) = button.center();
        text(scene, bx, by, caption, config.ui_font_size + 2.0, TextAlign::Center, WHITE);

        if let Some(winner) = state.winner() {
            let (x, y) = self.layout.winner_line;
            text(
                scene,
                x,
                y,
                &format!("Winner: {winner}"),
                config.ui_font_size + 2.0,
                TextAlign::Center,
                config.text_color,
            );
        }
        if let Some(message) = self.notice(now) {
            let (x, y) = self.layout.notice_line;
            text(scene, x, y, message, config.ui_font_size, TextAlign::Center, POINTER_RED);
        }
    }

    fn add_item_panel(&self, scene: &mut Scene, state: &WheelState, config: &WheelConfig) {
        let layout = &self.layout;
        layout.panel.fill(scene, config.panel_color);
        let (hx, hy) = layout.header;
        text(scene, hx, hy, "Manage Items", config.ui_font_size + 4.0, TextAlign::Left, config.text_color);

        layout.input.fill(scene, config.row_color);
        let outline = if self.focused {
            BUTTON_BLUE
        } else {
            MUTED_TEXT.mix(config.row_color, 0.5)
        };
        layout.input.outline(scene, 1.0, outline);
        let (_, iy) = layout.input.center();
        if self.input.is_empty() {
            text(scene, layout.input.x + 8, iy, "Add item...", config.ui_font_size, TextAlign::Left, MUTED_TEXT);
        } else {
            text(scene, layout.input.x + 8, iy, &self.input, config.ui_font_size, TextAlign::Left, config.text_color);
        }

        let add_color = if self.can_submit(state) {
            BUTTON_GREEN
        } else {
            BUTTON_GREEN.mix(config.panel_color, 0.5)
        };
        layout.add_button.fill(scene, add_color);
        let (ax, ay) = layout.add_button.center();
        cross(scene, ax, ay, 7, 0.0, WHITE);

        for (index, label) in state.items().iter().enumerate() {
            let row = layout.row(index);
            row.fill(scene, config.row_color);
            let (_, ry) = row.center();
            scene.add_command(DrawCommand::Disc {
                cx: row.x + 12,
                cy: ry,
                radius: 6,
                color: slice_color(index).as_tuple(),
            });
            text(scene, row.x + 26, ry, label, config.ui_font_size, TextAlign::Left, config.text_color);
            let (dx, dy) = layout.delete_button(index).center();
            cross(scene, dx, dy, 5, std::f64::consts::FRAC_PI_4, POINTER_RED);
        }
    }

    fn add_footer(&self, scene: &mut Scene, config: &WheelConfig) {
        for (index, line) in config.rules.iter().enumerate() {
            let (x, y) = self.layout.footer_line(index);
            text(scene, x, y, line, config.ui_font_size - 2.0, TextAlign::Center, MUTED_TEXT);
        }
    }
}

fn text(scene: &mut Scene, x: i32, y: i32, content: &str, size: f32, align: TextAlign, color: Color) {
    scene.add_command(DrawCommand::Text {
        x,
        y,
        text: content.to_string(),
        font_size: size,
        align,
        color: color.as_tuple(),
    });
}

/// Two crossing strokes: a plus at angle 0, an "x" at 45°.
fn cross(scene: &mut Scene, cx: i32, cy: i32, arm: i32, angle: f64, color: Color) {
    for a in [angle, angle + std::f64::consts::FRAC_PI_2] {
        let (dx, dy) = ((a.cos() * arm as f64).round() as i32, (a.sin() * arm as f64).round() as i32);
        scene.add_command(DrawCommand::Line {
            x0: cx - dx,
            y0: cy - dy,
            x1: cx + dx,
            y1: cy + dy,
            thickness: 2.0,
            color: color.as_tuple(),
        });
    }
}
