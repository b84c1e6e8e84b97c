//! Geometry of the sectioned contact list.
//!
//! The list is a flat sequence of section headers and contact rows, each with
//! a fixed height per kind. Everything the view needs to virtualize the list
//! and pin the current section header is derived from the scroll offset:
//! the first visible item, the window of items worth materializing, and how
//! much of the pinned header is still on screen while the next section's
//! header pushes it out.

use crate::grouping::ContactGroups;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListMetrics {
    pub header_height: f32,
    pub row_height: f32,
    /// Extra items materialized above and below the visible range.
    pub overscan: usize,
}

/// One entry of the flattened list, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListItem {
    Header(char),
    Row { section: char, member: usize },
}

impl ListItem {
    pub fn section(self) -> char {
        match self {
            ListItem::Header(section) | ListItem::Row { section, .. } => section,
        }
    }
}

/// Items to materialize plus the spacer heights standing in for the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct VirtualWindow {
    pub items: Range<usize>,
    pub top_space: f32,
    pub bottom_space: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinnedHeader {
    pub section: char,
    /// Visible part of the pinned header, in `0.0..=header_height`.
    pub visible_height: f32,
}

#[derive(Debug, Clone)]
pub struct StickyListLayout {
    metrics: ListMetrics,
    items: Vec<ListItem>,
    /// `starts[i]` is the top of item `i`; the last entry is the total height.
    starts: Vec<f32>,
    headers: Vec<usize>,
}

impl StickyListLayout {
    pub fn new(groups: &ContactGroups, metrics: ListMetrics) -> Self {
        let mut items = Vec::with_capacity(groups.len() + crate::grouping::total_members(groups));
        let mut headers = Vec::with_capacity(groups.len());
        for (&section, members) in groups {
            headers.push(items.len());
            items.push(ListItem::Header(section));
            items.extend((0..members.len()).map(|member| ListItem::Row { section, member }));
        }

        let mut starts = Vec::with_capacity(items.len() + 1);
        let mut y = 0.0f32;
        starts.push(y);
        for item in &items {
            y += match item {
                ListItem::Header(_) => metrics.header_height,
                ListItem::Row { .. } => metrics.row_height,
            };
            starts.push(y);
        }

        Self {
            metrics,
            items,
            starts,
            headers,
        }
    }

    pub fn metrics(&self) -> ListMetrics {
        self.metrics
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, index: usize) -> Option<ListItem> {
        self.items.get(index).copied()
    }

    pub fn total_height(&self) -> f32 {
        self.starts.last().copied().unwrap_or(0.0)
    }

    /// Top coordinate of item `index`; indices past the end map to the total height.
    pub fn offset_of(&self, index: usize) -> f32 {
        self.starts[index.min(self.items.len())]
    }

    /// Index of the item whose vertical span contains `offset_y`.
    pub fn first_visible_index(&self, offset_y: f32) -> usize {
        if self.items.is_empty() {
            return 0;
        }
        let y = if offset_y.is_finite() {
            offset_y.max(0.0)
        } else {
            0.0
        };
        let after = self.starts[..self.items.len()].partition_point(|start| *start <= y);
        after.saturating_sub(1)
    }

    pub fn window(&self, offset_y: f32, viewport_height: f32) -> VirtualWindow {
        if self.items.is_empty() {
            return VirtualWindow {
                items: 0..0,
                top_space: 0.0,
                bottom_space: 0.0,
            };
        }

        let viewport_height = if viewport_height.is_finite() {
            viewport_height.max(0.0)
        } else {
            0.0
        };
        let first_visible = self.first_visible_index(offset_y);
        let last_visible = self.first_visible_index(offset_y.max(0.0) + viewport_height);

        let first = first_visible.saturating_sub(self.metrics.overscan);
        let last = (last_visible + 1 + self.metrics.overscan).min(self.items.len());

        VirtualWindow {
            items: first..last,
            top_space: self.offset_of(first),
            bottom_space: (self.total_height() - self.offset_of(last)).max(0.0),
        }
    }

    pub fn pinned_header(&self, offset_y: f32) -> Option<PinnedHeader> {
        let first = self.first_visible_index(offset_y);
        let section_pos = self
            .headers
            .partition_point(|header| *header <= first)
            .checked_sub(1)?;
        let section = self.items[self.headers[section_pos]].section();

        let y = offset_y.max(0.0);
        let visible_height = match self.headers.get(section_pos + 1) {
            Some(&next) => (self.offset_of(next) - y).clamp(0.0, self.metrics.header_height),
            None => self.metrics.header_height,
        };

        Some(PinnedHeader {
            section,
            visible_height,
        })
    }
}

/// Whether the scroll-to-top control should be offered.
pub fn is_past_threshold(first_visible_index: usize, threshold: usize) -> bool {
    first_visible_index > threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contacts::generate_contacts;
    use crate::grouping::group_by_initial;

    const METRICS: ListMetrics = ListMetrics {
        header_height: 52.0,
        row_height: 64.0,
        overscan: 2,
    };

    // Ten sections of five rows: each section spans 52 + 5 * 64 = 372.
    fn fifty_contact_layout() -> StickyListLayout {
        StickyListLayout::new(&group_by_initial(generate_contacts(50)), METRICS)
    }

    #[test]
    fn flattens_each_section_into_header_then_rows() {
        let layout = fifty_contact_layout();
        assert_eq!(layout.len(), 60);
        assert_eq!(layout.item(0), Some(ListItem::Header('A')));
        assert_eq!(
            layout.item(5),
            Some(ListItem::Row {
                section: 'A',
                member: 4
            })
        );
        assert_eq!(layout.item(6), Some(ListItem::Header('B')));
        assert_eq!(layout.item(60), None);
        assert_eq!(layout.total_height(), 3720.0);
    }

    #[test]
    fn first_visible_index_follows_item_spans() {
        let layout = fifty_contact_layout();
        assert_eq!(layout.first_visible_index(0.0), 0);
        assert_eq!(layout.first_visible_index(51.9), 0);
        assert_eq!(layout.first_visible_index(52.0), 1);
        assert_eq!(layout.first_visible_index(372.0), 6);
        assert_eq!(layout.first_visible_index(-40.0), 0);
        assert_eq!(layout.first_visible_index(f32::NAN), 0);
        assert_eq!(layout.first_visible_index(1.0e9), 59);
    }

    #[test]
    fn threshold_is_exclusive() {
        assert!(!is_past_threshold(0, 10));
        assert!(!is_past_threshold(10, 10));
        assert!(is_past_threshold(11, 10));
    }

    #[test]
    fn threshold_flips_at_the_twelfth_item() {
        let layout = fifty_contact_layout();
        let eleventh = layout.offset_of(11);
        assert_eq!(eleventh, 680.0);
        assert!(!is_past_threshold(layout.first_visible_index(eleventh - 0.5), 10));
        assert!(is_past_threshold(layout.first_visible_index(eleventh), 10));
    }

    #[test]
    fn window_covers_viewport_with_overscan() {
        let layout = fifty_contact_layout();
        let window = layout.window(700.0, 300.0);
        // Visible: items 11 (680..744) through 16 (988..1052).
        assert_eq!(window.items, 9..19);
        assert_eq!(window.top_space, layout.offset_of(9));

        let materialized = layout.offset_of(window.items.end) - layout.offset_of(window.items.start);
        let total = window.top_space + materialized + window.bottom_space;
        assert!((total - layout.total_height()).abs() < 1e-3);
    }

    #[test]
    fn window_clamps_at_both_ends() {
        let layout = fifty_contact_layout();
        assert_eq!(layout.window(0.0, 100.0).items.start, 0);
        let bottom = layout.window(layout.total_height(), 400.0);
        assert_eq!(bottom.items.end, layout.len());
        assert_eq!(bottom.bottom_space, 0.0);
    }

    #[test]
    fn empty_layout_has_nothing_to_render() {
        let layout = StickyListLayout::new(&ContactGroups::new(), METRICS);
        assert!(layout.is_empty());
        assert_eq!(layout.first_visible_index(120.0), 0);
        assert_eq!(layout.window(0.0, 500.0).items, 0..0);
        assert_eq!(layout.pinned_header(0.0), None);
    }

    #[test]
    fn pinned_header_tracks_section_of_first_visible_item() {
        let layout = fifty_contact_layout();
        let top = layout.pinned_header(0.0).expect("pinned header at top");
        assert_eq!(top.section, 'A');
        assert_eq!(top.visible_height, 52.0);

        let in_b = layout.pinned_header(500.0).expect("pinned header in B");
        assert_eq!(in_b.section, 'B');
        assert_eq!(in_b.visible_height, 52.0);
    }

    #[test]
    fn next_header_pushes_pinned_header_out() {
        let layout = fifty_contact_layout();
        let pushed = layout.pinned_header(342.0).expect("pinned header");
        assert_eq!(pushed.section, 'A');
        assert!((pushed.visible_height - 30.0).abs() < 1e-3);

        let replaced = layout.pinned_header(372.0).expect("pinned header");
        assert_eq!(replaced.section, 'B');
        assert_eq!(replaced.visible_height, 52.0);
    }

    #[test]
    fn last_section_stays_fully_pinned() {
        let layout = fifty_contact_layout();
        let last = layout
            .pinned_header(layout.total_height() - 10.0)
            .expect("pinned header");
        assert_eq!(last.section, 'J');
        assert_eq!(last.visible_height, 52.0);
    }
}
