//! Badge and page geometry
//!
//! All coordinates are in PDF points (1/72 inch) with the origin at the
//! bottom-left of the page, y increasing upward.

/// One inch in PDF points
pub const INCH: f32 = 72.0;

/// US Letter page width (8.5in)
pub const PAGE_WIDTH: f32 = 8.5 * INCH;

/// US Letter page height (11in)
pub const PAGE_HEIGHT: f32 = 11.0 * INCH;

/// Badge width (4.25in)
pub const BADGE_WIDTH: f32 = 4.25 * INCH;

/// Badge height (6in)
pub const BADGE_HEIGHT: f32 = 6.0 * INCH;

/// Number of badge slots per page
pub const SLOTS_PER_PAGE: usize = 2;

/// A badge-sized rectangle on a page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeRect {
    /// Bottom-left x of the badge
    pub x: f32,
    /// Bottom-left y of the badge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BadgeRect {
    /// The bounding box reserved for the logo: 70% of the badge width by
    /// 30% of the badge height, centered horizontally, 1in above the
    /// badge bottom.
    pub fn logo_box(&self) -> (f32, f32, f32, f32) {
        let w = self.width * 0.7;
        let h = self.height * 0.3;
        let x = self.x + (self.width - w) / 2.0;
        let y = self.y + INCH;
        (x, y, w, h)
    }

    /// Width budget for the attendee name (90% of the badge width)
    pub fn name_width_budget(&self) -> f32 {
        self.width * 0.9
    }
}

/// Map an attendee index to its (page, slot) pair
pub fn page_and_slot(index: usize) -> (usize, usize) {
    (index / SLOTS_PER_PAGE, index % SLOTS_PER_PAGE)
}

/// The badge rectangle for a slot on a page
///
/// Slot 0 is the top-left quadrant, slot 1 the bottom area shifted right
/// by one badge width. The right side of the page above slot 1 is unused
/// whitespace by this layout.
pub fn slot_rect(slot: usize) -> BadgeRect {
    debug_assert!(slot < SLOTS_PER_PAGE);
    let (x, y) = if slot == 0 {
        (0.0, PAGE_HEIGHT - BADGE_HEIGHT)
    } else {
        (BADGE_WIDTH, 0.0)
    };
    BadgeRect {
        x,
        y,
        width: BADGE_WIDTH,
        height: BADGE_HEIGHT,
    }
}

/// Number of pages needed for `attendee_count` badges
pub fn page_count(attendee_count: usize) -> usize {
    attendee_count.div_ceil(SLOTS_PER_PAGE)
}

/// Uniform scale that fits an intrinsic size into a target box while
/// preserving aspect ratio
pub fn fit_scale(width: f32, height: f32, target_width: f32, target_height: f32) -> f32 {
    (target_width / width).min(target_height / height)
}
