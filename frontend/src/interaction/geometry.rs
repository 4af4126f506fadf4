use web_sys::Element;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    pub fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    pub fn scale(self, factor: f64) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// `None` for zero-sized or non-finite boxes, which count as unmeasured.
    pub fn measured(width: f64, height: f64) -> Option<Self> {
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            Some(Self { width, height })
        } else {
            None
        }
    }

    pub fn from_element(element: &Element) -> Option<Self> {
        Rect::from_element(element).map(|rect| rect.size())
    }
}

/// A bounding box in client (viewport) coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn measured(left: f64, top: f64, width: f64, height: f64) -> Option<Self> {
        if !left.is_finite() || !top.is_finite() {
            return None;
        }
        Size::measured(width, height).map(|_| Self { left, top, width, height })
    }

    /// Reads the live layout box. Layout can shift between events, so callers
    /// measure on every event instead of keeping the result around.
    pub fn from_element(element: &Element) -> Option<Self> {
        let rect = element.get_bounding_client_rect();
        Self::measured(rect.left(), rect.top(), rect.width(), rect.height())
    }

    pub fn size(&self) -> Size {
        Size { width: self.width, height: self.height }
    }

    /// Client coordinates relative to the top-left corner.
    pub fn local(&self, client_x: f64, client_y: f64) -> Point {
        Point::new(client_x - self.left, client_y - self.top)
    }

    /// Client coordinates relative to the centre.
    pub fn from_center(&self, client_x: f64, client_y: f64) -> Point {
        let local = self.local(client_x, client_y);
        Point::new(local.x - self.width / 2.0, local.y - self.height / 2.0)
    }
}

pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Fraction of `extent` covered by `offset`, as a 0-100 percentage.
pub fn percent_of(offset: f64, extent: f64) -> f64 {
    clamp(offset / extent * 100.0, 0.0, 100.0)
}
