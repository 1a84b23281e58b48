use crate::core::Quadrilateral;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rectangle {
    width: i32,
    height: i32,
}

impl Rectangle {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Quadrilateral for Rectangle {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn set_width(&mut self, width: i32) {
        self.width = width;
    }

    fn set_height(&mut self, height: i32) {
        self.height = height;
    }
}

/// A rectangle whose sides always match. Either setter resizes both sides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Square {
    width: i32,
    height: i32,
}

impl Square {
    pub fn new(side: i32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    pub fn side(&self) -> i32 {
        self.width
    }

    /// Sets both stored sides in one step; the only way a square is resized.
    pub fn set_side(&mut self, side: i32) {
        self.width = side;
        self.height = side;
    }
}

impl Quadrilateral for Square {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn set_width(&mut self, width: i32) {
        self.set_side(width);
    }

    fn set_height(&mut self, height: i32) {
        self.set_side(height);
    }
}
