//! Geometry behind the active-section indicator and the pointer glow.

use log::warn;
use web_sys::Window;

use crate::config::GLOW_DIAMETER;
use crate::content::Section;

/// Vertical span of a section in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionExtent {
    pub section: Section,
    pub top: f64,
    pub height: f64,
}

impl SectionExtent {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Closed interval, so both edges count as inside.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y <= self.bottom()
    }
}

/// Pointer position in viewport (client) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

/// Picks the section holding the viewport's vertical midpoint.
///
/// `extents` are checked in `Section::ALL` order regardless of how they were
/// passed in, so on a shared edge the earlier section wins.
pub fn active_section(
    scroll_y: f64,
    viewport_height: f64,
    extents: &[SectionExtent],
) -> Option<Section> {
    let midpoint = scroll_y + viewport_height / 2.0;
    Section::ALL.into_iter().find(|section| {
        extents
            .iter()
            .any(|extent| extent.section == *section && extent.contains(midpoint))
    })
}

/// Top-left corner of the glow so that its centre sits on the pointer.
pub fn glow_origin(pointer: Pointer) -> (f64, f64) {
    let radius = GLOW_DIAMETER / 2.0;
    (pointer.x - radius, pointer.y - radius)
}

/// Reads the current document extents of every rendered section.
/// Sections missing from the DOM are skipped.
pub fn measure_sections(window: &Window) -> Vec<SectionExtent> {
    let Some(document) = window.document() else {
        warn!("No document available, skipping section measurement");
        return Vec::new();
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);

    Section::ALL
        .into_iter()
        .filter_map(|section| {
            let element = document.get_element_by_id(section.id())?;
            let rect = element.get_bounding_client_rect();
            Some(SectionExtent {
                section,
                top: rect.top() + scroll_y,
                height: rect.height(),
            })
        })
        .collect()
}

/// Viewport height in CSS pixels, zero when the window can't report it.
pub fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 800.0;

    fn stacked(heights: [f64; 4]) -> Vec<SectionExtent> {
        let mut top = 0.0;
        Section::ALL
            .into_iter()
            .zip(heights)
            .map(|(section, height)| {
                let extent = SectionExtent { section, top, height };
                top += height;
                extent
            })
            .collect()
    }

    #[test]
    fn midpoint_inside_a_section_selects_it() {
        let extents = stacked([1000.0, 1200.0, 900.0, 1100.0]);

        // midpoint 400 -> home
        assert_eq!(active_section(0.0, VIEWPORT, &extents), Some(Section::Home));
        // midpoint 1500 -> about (1000..2200)
        assert_eq!(active_section(1100.0, VIEWPORT, &extents), Some(Section::About));
        // midpoint 2600 -> features (2200..3100)
        assert_eq!(active_section(2200.0, VIEWPORT, &extents), Some(Section::Features));
        // midpoint 3500 -> pricing (3100..4200)
        assert_eq!(active_section(3100.0, VIEWPORT, &extents), Some(Section::Pricing));
    }

    #[test]
    fn every_offset_strictly_inside_reports_that_section() {
        let extents = stacked([1000.0, 1200.0, 900.0, 1100.0]);
        for extent in &extents {
            let mut midpoint = extent.top + 1.0;
            while midpoint < extent.bottom() {
                let scroll_y = midpoint - VIEWPORT / 2.0;
                assert_eq!(
                    active_section(scroll_y, VIEWPORT, &extents),
                    Some(extent.section),
                    "midpoint {midpoint}"
                );
                midpoint += 37.0;
            }
        }
    }

    #[test]
    fn shared_boundary_goes_to_the_earlier_section() {
        let extents = stacked([1000.0, 1000.0, 1000.0, 1000.0]);
        for (boundary, expected) in [
            (1000.0, Section::Home),
            (2000.0, Section::About),
            (3000.0, Section::Features),
        ] {
            let scroll_y = boundary - VIEWPORT / 2.0;
            assert_eq!(active_section(scroll_y, VIEWPORT, &extents), Some(expected));
        }
    }

    #[test]
    fn priority_order_does_not_depend_on_input_order() {
        let mut extents = stacked([1000.0, 1000.0, 1000.0, 1000.0]);
        extents.reverse();
        let scroll_y = 2000.0 - VIEWPORT / 2.0;
        assert_eq!(active_section(scroll_y, VIEWPORT, &extents), Some(Section::About));
    }

    #[test]
    fn midpoint_outside_every_section_is_none() {
        let extents = stacked([500.0, 500.0, 500.0, 500.0]);
        assert_eq!(active_section(5000.0, VIEWPORT, &extents), None);
        assert_eq!(active_section(0.0, VIEWPORT, &[]), None);
    }

    #[test]
    fn glow_is_centred_on_pointer() {
        for pointer in [
            Pointer { x: 0.0, y: 0.0 },
            Pointer { x: 640.5, y: 12.25 },
            Pointer { x: 1919.0, y: 1079.0 },
        ] {
            let (left, top) = glow_origin(pointer);
            let centre_x = left + GLOW_DIAMETER / 2.0;
            let centre_y = top + GLOW_DIAMETER / 2.0;
            assert!((centre_x - pointer.x).abs() <= 1.0);
            assert!((centre_y - pointer.y).abs() <= 1.0);
        }
    }

    #[test]
    fn glow_origin_matches_fixed_radius_offset() {
        assert_eq!(glow_origin(Pointer { x: 300.0, y: 400.0 }), (50.0, 150.0));
    }
}
