use super::TextDirection;

/// A point inside a box, from `-1.0` (left/top) to `1.0` (right/bottom).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Alignment {
    pub x: f32,
    pub y: f32,
}

impl Alignment {
    pub const CENTER_LEFT: Alignment = Alignment::new(-1.0, 0.0);
    pub const CENTER: Alignment = Alignment::new(0.0, 0.0);
    pub const CENTER_RIGHT: Alignment = Alignment::new(1.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Offset of a child of size `child` inside a box of size `outer`.
    ///
    /// Returns `(dx, dy)`; a child larger than the box gets a negative offset.
    pub fn offset(&self, outer: (f32, f32), child: (f32, f32)) -> (f32, f32) {
        let free_x = outer.0 - child.0;
        let free_y = outer.1 - child.1;
        (free_x * (self.x + 1.0) / 2.0, free_y * (self.y + 1.0) / 2.0)
    }
}

/// Like [`Alignment`], but the horizontal axis runs from the start edge
/// (`-1.0`) to the end edge (`1.0`) of the reading direction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AlignmentDirectional {
    pub start: f32,
    pub y: f32,
}

impl AlignmentDirectional {
    pub const CENTER_START: AlignmentDirectional = AlignmentDirectional::new(-1.0, 0.0);
    pub const CENTER_END: AlignmentDirectional = AlignmentDirectional::new(1.0, 0.0);

    pub const fn new(start: f32, y: f32) -> Self {
        Self { start, y }
    }

    pub fn resolve(self, direction: TextDirection) -> Alignment {
        match direction {
            TextDirection::Ltr => Alignment::new(self.start, self.y),
            TextDirection::Rtl => Alignment::new(-self.start, self.y),
        }
    }
}

/// Placement of a cell's content box, either absolute or direction-aware.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlockAlignment {
    Absolute(Alignment),
    Directional(AlignmentDirectional),
}

impl BlockAlignment {
    pub fn resolve(self, direction: TextDirection) -> Alignment {
        match self {
            BlockAlignment::Absolute(alignment) => alignment,
            BlockAlignment::Directional(alignment) => alignment.resolve(direction),
        }
    }

    /// True when the content sits centered on the horizontal axis.
    pub fn is_horizontally_centered(&self) -> bool {
        match self {
            BlockAlignment::Absolute(a) => a.x == 0.0,
            BlockAlignment::Directional(a) => a.start == 0.0,
        }
    }

    /// True when the content sits centered on the vertical axis.
    pub fn is_vertically_centered(&self) -> bool {
        match self {
            BlockAlignment::Absolute(a) => a.y == 0.0,
            BlockAlignment::Directional(a) => a.y == 0.0,
        }
    }
}

impl From<Alignment> for BlockAlignment {
    fn from(alignment: Alignment) -> Self {
        BlockAlignment::Absolute(alignment)
    }
}

impl From<AlignmentDirectional> for BlockAlignment {
    fn from(alignment: AlignmentDirectional) -> Self {
        BlockAlignment::Directional(alignment)
    }
}
