//! Cell: The atomic unit of terminal display.
//!
//! A cell stores one grapheme cluster inline as UTF-8, together with its
//! display width and colors. Combining sequences ("e\u{301}") stay intact
//! in the cell that carries their base character. Wide (CJK) glyphs occupy
//! two columns: the glyph cell is followed by a zero-width continuation
//! cell.

use bitflags::bitflags;

/// Inline grapheme storage in bytes.
///
/// Covers every single `char`, combining sequences, and flag emoji; a
/// longer cluster is truncated on a character boundary.
const GRAPHEME_CAPACITY: usize = 12;

/// True-color RGB representation.
///
/// Uses 3 bytes for 24-bit color depth.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Default foreground (white)
    pub const DEFAULT_FG: Self = Self::WHITE;
    /// Default background (black)
    pub const DEFAULT_BG: Self = Self::BLACK;

    /// Create from a 24-bit hex color (e.g., 0x3F51B5).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<u32> for Rgb {
    /// Convert from a 24-bit hex color (e.g., 0x3F51B5)
    #[inline]
    fn from(hex: u32) -> Self {
        Self::from_u32(hex)
    }
}

bitflags! {
    /// Text style modifiers.
    ///
    /// These can be combined using bitwise OR.
    ///
    /// # Example
    /// ```
    /// use slideline::Modifiers;
    /// let style = Modifiers::BOLD | Modifiers::UNDERLINE;
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Dim/faint text
        const DIM = 0b0000_0010;
        /// Italic text
        const ITALIC = 0b0000_0100;
        /// Underlined text
        const UNDERLINE = 0b0000_1000;
        /// Reversed colors (fg/bg swapped)
        const REVERSED = 0b0001_0000;
    }
}

impl std::fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// A single terminal cell.
///
/// Each cell contains the grapheme cluster to display (stored inline as
/// UTF-8), its display width, foreground and background colors, and style
/// modifiers. A `display_width` of 0 with an empty cluster marks the
/// continuation column of a wide glyph to its left.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Inline UTF-8 cluster storage; unused bytes stay zeroed so derived
    /// equality compares the whole array safely.
    grapheme: [u8; GRAPHEME_CAPACITY],
    /// Byte length of the stored cluster.
    grapheme_len: u8,
    /// Display width of the cluster (0=continuation, 1=normal, 2=wide CJK).
    display_width: u8,
    /// Foreground color.
    fg: Rgb,
    /// Background color.
    bg: Rgb,
    /// Text modifiers (bold, dim, etc.).
    modifiers: Modifiers,
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Cell {
    /// An empty cell (space character with default colors).
    pub const EMPTY: Self = Self {
        grapheme: [b' ', 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        grapheme_len: 1,
        display_width: 1,
        fg: Rgb::DEFAULT_FG,
        bg: Rgb::DEFAULT_BG,
        modifiers: Modifiers::empty(),
    };

    /// Create a new cell from a single character.
    ///
    /// The display width is derived from the character; control characters
    /// and bare combining marks come out as width 0 and are never rendered.
    #[inline]
    #[allow(clippy::missing_panics_doc)]
    pub fn new(symbol: char) -> Self {
        let mut grapheme = [0u8; GRAPHEME_CAPACITY];
        let len = symbol.encode_utf8(&mut grapheme).len();
        let width = unicode_width::UnicodeWidthChar::width(symbol).unwrap_or(0);
        Self {
            grapheme,
            grapheme_len: u8::try_from(len).unwrap(),
            display_width: u8::try_from(width).unwrap_or(0),
            fg: Rgb::DEFAULT_FG,
            bg: Rgb::DEFAULT_BG,
            modifiers: Modifiers::empty(),
        }
    }

    /// Create a cell from a grapheme cluster.
    ///
    /// The whole cluster is stored, so a base character keeps its combining
    /// marks. A cluster longer than the inline capacity is truncated on a
    /// character boundary; its display width is still that of the full
    /// cluster.
    #[inline]
    #[allow(clippy::missing_panics_doc)]
    pub fn from_grapheme(cluster: &str) -> Self {
        let width = unicode_width::UnicodeWidthStr::width(cluster);
        let mut len = cluster.len().min(GRAPHEME_CAPACITY);
        while !cluster.is_char_boundary(len) {
            len -= 1;
        }
        let mut grapheme = [0u8; GRAPHEME_CAPACITY];
        grapheme[..len].copy_from_slice(&cluster.as_bytes()[..len]);
        Self {
            grapheme,
            grapheme_len: u8::try_from(len).unwrap(),
            display_width: u8::try_from(width).unwrap_or(1),
            fg: Rgb::DEFAULT_FG,
            bg: Rgb::DEFAULT_BG,
            modifiers: Modifiers::empty(),
        }
    }

    /// Create a continuation cell for the second column of a wide glyph.
    #[inline]
    pub const fn wide_continuation() -> Self {
        Self {
            grapheme: [0; GRAPHEME_CAPACITY],
            grapheme_len: 0,
            display_width: 0,
            fg: Rgb::DEFAULT_FG,
            bg: Rgb::DEFAULT_BG,
            modifiers: Modifiers::empty(),
        }
    }

    /// Get the grapheme cluster.
    #[inline]
    pub fn symbol(&self) -> &str {
        let bytes = &self.grapheme[..self.grapheme_len as usize];
        // Bytes only ever come from &str / char::encode_utf8.
        std::str::from_utf8(bytes).unwrap_or(" ")
    }

    /// Get the display width (0 for continuation cells).
    #[inline]
    pub const fn display_width(&self) -> u8 {
        self.display_width
    }

    /// Check if this cell is the continuation of a wide glyph.
    #[inline]
    pub const fn is_wide_continuation(&self) -> bool {
        self.display_width == 0 && self.grapheme_len == 0
    }

    /// Get the foreground color.
    #[inline]
    pub const fn fg(&self) -> Rgb {
        self.fg
    }

    /// Get the background color.
    #[inline]
    pub const fn bg(&self) -> Rgb {
        self.bg
    }

    /// Get the modifiers.
    #[inline]
    pub const fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Set the foreground color (builder style).
    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background color (builder style).
    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    /// Set the modifiers (builder style).
    #[inline]
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("symbol", &self.symbol())
            .field("width", &self.display_width)
            .field("fg", &self.fg)
            .field("bg", &self.bg)
            .field("modifiers", &self.modifiers)
            .finish()
    }
}
