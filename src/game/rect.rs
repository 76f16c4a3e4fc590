//! Axis-aligned rectangle shared by tiles and the player hitbox
//!
//! Anchored at the bottom-left corner with +y pointing up. Every edge,
//! corner and center accessor is derived from position + size, and the
//! matching setter translates the box rigidly so it keeps its size.

use macroquad::math::Vec2;

/// A rectangle defined by its bottom-left corner and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Bottom-left corner in world units
    pub pos: Vec2,
    /// Width and height, both expected > 0
    pub size: Vec2,
}

impl Rect {
    pub const fn new(left: f32, bottom: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(left, bottom),
            size: Vec2::new(width, height),
        }
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    // x values

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn mid_x(&self) -> f32 {
        self.pos.x + self.size.x * 0.5
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    // y values

    pub fn bottom(&self) -> f32 {
        self.pos.y
    }

    pub fn mid_y(&self) -> f32 {
        self.pos.y + self.size.y * 0.5
    }

    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y
    }

    // corners and center

    pub fn bottom_left(&self) -> Vec2 {
        self.pos
    }

    pub fn bottom_right(&self) -> Vec2 {
        Vec2::new(self.right(), self.bottom())
    }

    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.left(), self.top())
    }

    pub fn top_right(&self) -> Vec2 {
        Vec2::new(self.right(), self.top())
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.mid_x(), self.mid_y())
    }

    // Setters translate the whole box so the requested edge or point lands
    // at the given coordinate.

    pub fn set_left(&mut self, x: f32) {
        self.pos.x = x;
    }

    pub fn set_mid_x(&mut self, x: f32) {
        self.pos.x = x - self.size.x * 0.5;
    }

    pub fn set_right(&mut self, x: f32) {
        self.pos.x = x - self.size.x;
    }

    pub fn set_bottom(&mut self, y: f32) {
        self.pos.y = y;
    }

    pub fn set_mid_y(&mut self, y: f32) {
        self.pos.y = y - self.size.y * 0.5;
    }

    pub fn set_top(&mut self, y: f32) {
        self.pos.y = y - self.size.y;
    }

    pub fn set_bottom_left(&mut self, p: Vec2) {
        self.pos = p;
    }

    pub fn set_bottom_right(&mut self, p: Vec2) {
        self.pos = Vec2::new(p.x - self.size.x, p.y);
    }

    pub fn set_top_left(&mut self, p: Vec2) {
        self.pos = Vec2::new(p.x, p.y - self.size.y);
    }

    pub fn set_top_right(&mut self, p: Vec2) {
        self.pos = Vec2::new(p.x - self.size.x, p.y - self.size.y);
    }

    pub fn set_center(&mut self, p: Vec2) {
        self.pos = p - self.size * 0.5;
    }
}

/// Check whether two rectangles overlap.
///
/// Touching vertical edges never count as overlap. The vertical test is
/// asymmetric on purpose: a box whose bottom sits exactly on another's top
/// is NOT overlapping (that is how the player rests on a floor), while a
/// box whose top exactly reaches another's bottom IS. Changing either
/// bound lets the player sink into floors or stick to ceilings.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    // a rectangle never collides with itself
    if std::ptr::eq(a, b) {
        return false;
    }
    // separated horizontally
    if a.left() >= b.right() || a.right() <= b.left() {
        return false;
    }
    // separated vertically
    if a.top() < b.bottom() || a.bottom() >= b.top() {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_accessors() {
        let r = Rect::new(2.0, 3.0, 4.0, 6.0);
        assert_eq!(r.left(), 2.0);
        assert_eq!(r.right(), 6.0);
        assert_eq!(r.bottom(), 3.0);
        assert_eq!(r.top(), 9.0);
        assert_eq!(r.center(), Vec2::new(4.0, 6.0));
        assert_eq!(r.top_right(), Vec2::new(6.0, 9.0));
    }

    #[test]
    fn test_setters_preserve_size() {
        let mut r = Rect::new(0.0, 0.0, 4.0, 6.0);
        r.set_right(10.0);
        assert_eq!(r.left(), 6.0);
        assert_eq!(r.width(), 4.0);
        r.set_top(3.0);
        assert_eq!(r.bottom(), -3.0);
        assert_eq!(r.height(), 6.0);
        r.set_center(Vec2::new(0.0, 0.0));
        assert_eq!(r.bottom_left(), Vec2::new(-2.0, -3.0));
        assert_eq!(r.size, Vec2::new(4.0, 6.0));
    }

    #[test]
    fn test_overlaps_irreflexive() {
        let r = Rect::new(1.0, 1.0, 2.0, 2.0);
        assert!(!overlaps(&r, &r));
    }

    #[test]
    fn test_overlaps_basic() {
        let a = Rect::new(0.0, 0.0, 2.0, 2.0);
        let b = Rect::new(1.0, 1.0, 2.0, 2.0);
        let c = Rect::new(5.0, 0.0, 1.0, 1.0);
        assert!(overlaps(&a, &b));
        assert!(overlaps(&b, &a));
        assert!(!overlaps(&a, &c));
    }

    #[test]
    fn test_touching_sides_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        let right = Rect::new(1.0, 0.0, 1.0, 1.0);
        assert!(!overlaps(&a, &right));
        assert!(!overlaps(&right, &a));
    }

    #[test]
    fn test_vertical_bound_asymmetry() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        // b directly above a, sharing the edge y = 1: a's top equals b's
        // bottom, which still counts as overlap
        let above = Rect::new(0.0, 1.0, 1.0, 1.0);
        assert!(overlaps(&a, &above));
        // b directly below a: a's bottom equals b's top, no overlap (this
        // is the resting-on-a-floor configuration)
        let below = Rect::new(0.0, -1.0, 1.0, 1.0);
        assert!(!overlaps(&a, &below));
    }
}
