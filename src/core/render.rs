//=========================================================================
// Render Surface & Canvas
//=========================================================================
//
// Drawing and surface contracts the scene renders through.
//
// Architecture:
//   GameScene::draw() → &mut dyn Canvas → DrawList (recorded per frame)
//   InputTranslator   → &mut dyn Surface (render size, displayed rect)
//
// The render surface has a fixed logical size; the displayed rect is
// whatever the window currently occupies on screen. Pointer coordinates
// arrive in displayed space and are remapped into render space.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::str::FromStr;

//=== Internal Dependencies ===============================================

use crate::core::assets::ImageHandle;

//=== Color ===============================================================

/// 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Error returned when a `#rrggbb` / `#rrggbbaa` string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The string does not start with `#`.
    MissingHash,

    /// The digit count is neither 6 nor 8.
    InvalidLength(usize),

    /// A character is not a hexadecimal digit.
    InvalidDigit(String),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHash => write!(f, "Colour must start with '#'"),
            Self::InvalidLength(n) => write!(f, "Colour must have 6 or 8 hex digits, got {}", n),
            Self::InvalidDigit(s) => write!(f, "Invalid hex digits in colour: {}", s),
        }
    }
}

impl std::error::Error for ColorParseError {}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').ok_or(ColorParseError::MissingHash)?;
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorParseError::InvalidLength(digits.len()));
        }

        let channel = |i: usize| {
            digits
                .get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| ColorParseError::InvalidDigit(digits.to_string()))
        };

        let alpha = if digits.len() == 8 { channel(6)? } else { 0xff };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

//=== Geometry ============================================================

/// Axis-aligned rectangle in render space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

/// Where the render surface currently sits on the display, in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

//=== Canvas ==============================================================

/// Immediate-mode drawing target for one frame.
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn draw_image(&mut self, image: &ImageHandle, x: f32, y: f32);

    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Color);
}

//=== Surface =============================================================

/// The render surface as seen by input translation.
pub trait Surface {
    /// Logical drawing size (width, height).
    fn render_size(&self) -> (f32, f32);

    /// Displayed rect, or `None` if there is no backing surface right now.
    fn display_rect(&self) -> Option<DisplayRect>;

    /// Asks the host to toggle fullscreen presentation.
    fn request_fullscreen(&mut self);
}

//=== Viewport ============================================================

/// [`Surface`] fed by platform resize events.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    render_width: f32,
    render_height: f32,
    display: Option<DisplayRect>,
    fullscreen_requested: bool,
}

impl Viewport {
    /// Creates a viewport displayed 1:1 at the origin.
    pub fn new(render_width: f32, render_height: f32) -> Self {
        Self {
            render_width,
            render_height,
            display: Some(DisplayRect {
                left: 0.0,
                top: 0.0,
                width: render_width,
                height: render_height,
            }),
            fullscreen_requested: false,
        }
    }

    /// Records the new displayed size. A zero dimension (minimised window)
    /// leaves the viewport without a backing surface.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.display = if width == 0 || height == 0 {
            None
        } else {
            Some(DisplayRect {
                left: 0.0,
                top: 0.0,
                width: width as f32,
                height: height as f32,
            })
        };
    }

    pub fn set_display_rect(&mut self, rect: Option<DisplayRect>) {
        self.display = rect;
    }

    /// Returns and clears a pending fullscreen request.
    pub fn take_fullscreen_request(&mut self) -> bool {
        std::mem::take(&mut self.fullscreen_requested)
    }
}

impl Surface for Viewport {
    fn render_size(&self) -> (f32, f32) {
        (self.render_width, self.render_height)
    }

    fn display_rect(&self) -> Option<DisplayRect> {
        self.display
    }

    fn request_fullscreen(&mut self) {
        self.fullscreen_requested = true;
    }
}

//=== DrawList ============================================================

/// A recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect { rect: Rect, color: Color },
    Image { path: &'static str, x: f32, y: f32 },
    Text { text: String, x: f32, y: f32, color: Color },
}

/// [`Canvas`] that records commands in submission order (back to front).
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Canvas for DrawList {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn draw_image(&mut self, image: &ImageHandle, x: f32, y: f32) {
        self.commands.push(DrawCommand::Image { path: image.path(), x, y });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            color,
        });
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
