use thiserror::Error;

use crate::models::roadmap::{Roadmap, RoadmapItem, RoadmapSection};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoadmapError {
    #[error("Section {0} not found")]
    SectionNotFound(u32),

    #[error("Item {item} not found in section {section}")]
    ItemNotFound { section: u32, item: u32 },
}

impl Roadmap {
    fn section_mut(&mut self, section_id: u32) -> Result<&mut RoadmapSection, RoadmapError> {
        self.sections
            .iter_mut()
            .find(|s| s.id == section_id)
            .ok_or(RoadmapError::SectionNotFound(section_id))
    }

    /// Flips expansion only; completion is untouched.
    pub fn toggle_section_expanded(&mut self, section_id: u32) -> Result<&RoadmapSection, RoadmapError> {
        let section = self.section_mut(section_id)?;
        section.expanded = !section.expanded;
        Ok(&*section)
    }

    /// Flips the section and pushes the new value down to every item.
    pub fn toggle_section_completed(&mut self, section_id: u32) -> Result<&RoadmapSection, RoadmapError> {
        let section = self.section_mut(section_id)?;
        let completed = !section.completed;
        section.completed = completed;
        for item in &mut section.sub_items {
            item.completed = completed;
        }
        Ok(&*section)
    }

    /// Flips one item, then recomputes the section as the AND of its items.
    pub fn toggle_item_completed(
        &mut self,
        section_id: u32,
        item_id: u32,
    ) -> Result<&RoadmapSection, RoadmapError> {
        let section = self.section_mut(section_id)?;
        let item: &mut RoadmapItem = section
            .sub_items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or(RoadmapError::ItemNotFound {
                section: section_id,
                item: item_id,
            })?;
        item.completed = !item.completed;
        section.completed = section.sub_items.iter().all(|i| i.completed);
        Ok(&*section)
    }

    /// Percentage of completed items across all sections, rounded. Zero when
    /// the roadmap has no items.
    pub fn progress(&self) -> u8 {
        let (done, total) = self
            .sections
            .iter()
            .flat_map(|s| &s.sub_items)
            .fold((0usize, 0usize), |(done, total), item| {
                (done + usize::from(item.completed), total + 1)
            });
        if total == 0 {
            return 0;
        }
        ((done as f64 / total as f64) * 100.0).round() as u8
    }
}
