//! Virtual-document layout.
//!
//! The portfolio renders as one tall column of rows; the terminal shows a
//! window into it at the current scroll offset. This module owns the
//! geometry: section extents, the bounding measurements fed to the
//! progress controller, and the intersection ratios fed to the reveal
//! watcher.

use folio_core::{models::section_types::SectionType, progress::SectionMetrics};

/// Vertical extent of one section within the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionExtent {
    pub section: SectionType,
    /// First document row of the section.
    pub top: usize,
    /// Height in rows.
    pub height: usize,
}

/// Stacked section extents for one terminal width.
#[derive(Debug, Clone, Default)]
pub struct DocumentLayout {
    extents: Vec<SectionExtent>,
    total_height: usize,
}

impl DocumentLayout {
    /// Stack sections in order from their measured heights.
    pub fn build(heights: &[(SectionType, usize)]) -> Self {
        let mut extents = Vec::with_capacity(heights.len());
        let mut top = 0;
        for (section, height) in heights {
            extents.push(SectionExtent {
                section: *section,
                top,
                height: *height,
            });
            top += height;
        }
        Self {
            extents,
            total_height: top,
        }
    }

    /// Extent of a section, if it is part of the document.
    pub fn extent(&self, section: SectionType) -> Option<SectionExtent> {
        self.extents.iter().copied().find(|e| e.section == section)
    }

    /// All extents in document order.
    pub fn extents(&self) -> &[SectionExtent] {
        &self.extents
    }

    /// Total document height in rows.
    pub fn total_height(&self) -> usize {
        self.total_height
    }

    /// Largest useful scroll offset for a viewport.
    pub fn max_scroll(&self, viewport_height: usize) -> usize {
        self.total_height.saturating_sub(viewport_height)
    }

    /// Bounding measurements of a section relative to the viewport at the
    /// given scroll offset, in the form the progress controller consumes.
    /// `None` when the section is not part of the document.
    pub fn metrics_for(
        &self,
        section: SectionType,
        scroll: usize,
        viewport_height: usize,
    ) -> Option<SectionMetrics> {
        let extent = self.extent(section)?;
        Some(SectionMetrics {
            top: extent.top as f64 - scroll as f64,
            height: extent.height as f64,
            viewport_height: viewport_height as f64,
        })
    }

    /// Fraction of a section currently visible in the viewport, in
    /// [0, 1]. Zero-height sections report 0.
    pub fn visible_ratio(
        &self,
        section: SectionType,
        scroll: usize,
        viewport_height: usize,
    ) -> f64 {
        let Some(extent) = self.extent(section) else {
            return 0.0;
        };
        if extent.height == 0 {
            return 0.0;
        }

        let view_top = scroll;
        let view_bottom = scroll + viewport_height;
        let top = extent.top;
        let bottom = extent.top + extent.height;

        let overlap = bottom.min(view_bottom).saturating_sub(top.max(view_top));
        overlap as f64 / extent.height as f64
    }

    /// Section whose extent contains the given document row; used to
    /// highlight the active nav tab.
    pub fn section_at(&self, row: usize) -> Option<SectionType> {
        self.extents
            .iter()
            .find(|e| row >= e.top && row < e.top + e.height)
            .map(|e| e.section)
    }
}
