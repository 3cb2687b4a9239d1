//! Character-cell framebuffer
//!
//! In-memory mirror of the intended on-screen content. Drivers mutate it
//! through the drawing primitives and retransmit it in full on flush;
//! nothing here talks to the device.

use heapless::Vec;

/// Largest cell grid any supported module uses (40x4)
pub const MAX_CELLS: usize = 160;

/// The cell value a cleared framebuffer holds
pub const BLANK: u8 = b' ';

/// Flat byte grid of `height` rows by `width` columns
///
/// Dimensions are fixed at construction. Cell `(x, y)` (0-based) lives at
/// linear index `y * width + x`.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u16,
    height: u16,
    cells: Vec<u8, MAX_CELLS>,
}

impl Framebuffer {
    /// Create a framebuffer filled with spaces
    ///
    /// Returns `None` if `width * height` exceeds the backing capacity.
    pub fn new(width: u16, height: u16) -> Option<Self> {
        let count = width as usize * height as usize;
        if count > MAX_CELLS {
            return None;
        }
        let mut cells = Vec::new();
        cells.resize(count, BLANK).ok()?;
        Some(Self {
            width,
            height,
            cells,
        })
    }

    /// Grid width in cells
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Grid height in cells
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Fill every cell with a space
    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    /// Store a byte at 0-based `(x, y)`
    ///
    /// Returns `false` without writing if the coordinates are outside the
    /// grid.
    pub fn set(&mut self, x: u16, y: u16, value: u8) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.cells[y as usize * self.width as usize + x as usize] = value;
        true
    }

    /// Store a byte at a linear cell index
    ///
    /// String writes run linearly from their start offset and stop at the
    /// end of the grid. Returns `false` without writing if the index is
    /// past the last cell.
    pub fn set_linear(&mut self, index: usize, value: u8) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// One row of cells, left to right
    ///
    /// Returns an empty slice for a row outside the grid.
    pub fn row(&self, y: u16) -> &[u8] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// The whole grid, row-major
    pub fn as_bytes(&self) -> &[u8] {
        &self.cells
    }
}
