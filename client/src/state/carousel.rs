//! Slide rotator state.
//!
//! DESIGN
//! ======
//! The rotator is a wrap-around index over a fixed, compile-time slide list.
//! The automatic timer and the manual controls write the same value; the
//! last write wins. The index is private so every transition keeps it in
//! `1..=SLIDE_COUNT`.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Automatic advance period.
pub const ROTATION_INTERVAL_MS: u64 = 3000;

/// Opacity fade between slides. Cosmetic only.
pub const FADE_DURATION_MS: u32 = 1000;

/// Number of slides; ids run `1..=SLIDE_COUNT`.
pub const SLIDE_COUNT: u8 = 4;

/// One carousel image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slide {
    pub id: u8,
    pub src: &'static str,
}

/// Fixed slide list, in display order.
pub const SLIDES: [Slide; SLIDE_COUNT as usize] = [
    Slide { id: 1, src: "https://picsum.photos/800/400?random=1" },
    Slide { id: 2, src: "https://picsum.photos/800/400?random=2" },
    Slide { id: 3, src: "https://picsum.photos/800/400?random=3" },
    Slide { id: 4, src: "https://picsum.photos/800/400?random=4" },
];

/// Which slide is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    active: u8,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self { active: 1 }
    }
}

impl CarouselState {
    #[cfg(test)]
    pub(crate) fn active(self) -> u8 {
        self.active
    }

    #[must_use]
    pub fn is_active(self, id: u8) -> bool {
        self.active == id
    }

    /// Timer advance; identical to [`CarouselState::next`].
    pub fn tick(&mut self) {
        self.next();
    }

    pub fn next(&mut self) {
        self.active = if self.active == SLIDE_COUNT { 1 } else { self.active + 1 };
    }

    pub fn previous(&mut self) {
        self.active = if self.active == 1 { SLIDE_COUNT } else { self.active - 1 };
    }

    /// Jump straight to slide `id`. Ids outside the slide list are ignored.
    ///
    /// Returns `true` when the selection was applied.
    pub fn select(&mut self, id: u8) -> bool {
        if !(1..=SLIDE_COUNT).contains(&id) {
            return false;
        }
        self.active = id;
        true
    }
}
