//! Units and the lessons inside them.
//!
//! Cards only refer to units and lessons by ID. Removing a unit or lesson here
//! leaves its cards in place.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

type Result<T> = std::result::Result<T, CatalogError>;

/// A lesson inside a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: Uuid,
    pub name: String,
}

/// A named group of lessons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

impl Unit {
    pub fn lesson_ids(&self) -> impl Iterator<Item = Uuid> + '_ {
        self.lessons.iter().map(|lesson| lesson.id)
    }

    pub fn lesson(&self, lesson_id: Uuid) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| lesson.id == lesson_id)
    }
}

/// Ordered list of units, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    units: Vec<Unit>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_units(units: Vec<Unit>) -> Self {
        Self { units }
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn unit(&self, unit_id: Uuid) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.id == unit_id)
    }

    /// Whether `lesson_id` exists inside `unit_id`.
    pub fn contains_lesson(&self, unit_id: Uuid, lesson_id: Uuid) -> bool {
        self.unit(unit_id)
            .is_some_and(|unit| unit.lesson(lesson_id).is_some())
    }

    pub fn add_unit(&mut self, name: &str) -> Result<&Unit> {
        let name = clean_name(name)?;
        self.units.push(Unit {
            id: Uuid::new_v4(),
            name,
            lessons: Vec::new(),
        });
        Ok(&self.units[self.units.len() - 1])
    }

    pub fn rename_unit(&mut self, unit_id: Uuid, name: &str) -> Result<&Unit> {
        let name = clean_name(name)?;
        let unit = self.unit_mut(unit_id)?;
        unit.name = name;
        Ok(unit)
    }

    /// Remove a unit with all of its lessons.
    pub fn delete_unit(&mut self, unit_id: Uuid) -> Result<Unit> {
        let position = self
            .units
            .iter()
            .position(|unit| unit.id == unit_id)
            .ok_or(CatalogError::UnitNotFound(unit_id))?;
        Ok(self.units.remove(position))
    }

    pub fn add_lesson(&mut self, unit_id: Uuid, name: &str) -> Result<&Lesson> {
        let name = clean_name(name)?;
        let unit = self.unit_mut(unit_id)?;
        unit.lessons.push(Lesson {
            id: Uuid::new_v4(),
            name,
        });
        Ok(&unit.lessons[unit.lessons.len() - 1])
    }

    pub fn rename_lesson(&mut self, unit_id: Uuid, lesson_id: Uuid, name: &str) -> Result<&Lesson> {
        let name = clean_name(name)?;
        let unit = self.unit_mut(unit_id)?;
        let lesson = unit
            .lessons
            .iter_mut()
            .find(|lesson| lesson.id == lesson_id)
            .ok_or(CatalogError::LessonNotFound { unit_id, lesson_id })?;
        lesson.name = name;
        Ok(lesson)
    }

    pub fn delete_lesson(&mut self, unit_id: Uuid, lesson_id: Uuid) -> Result<Lesson> {
        let unit = self.unit_mut(unit_id)?;
        let position = unit
            .lessons
            .iter()
            .position(|lesson| lesson.id == lesson_id)
            .ok_or(CatalogError::LessonNotFound { unit_id, lesson_id })?;
        Ok(unit.lessons.remove(position))
    }

    fn unit_mut(&mut self, unit_id: Uuid) -> Result<&mut Unit> {
        self.units
            .iter_mut()
            .find(|unit| unit.id == unit_id)
            .ok_or(CatalogError::UnitNotFound(unit_id))
    }
}

fn clean_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::EmptyName);
    }
    Ok(trimmed.to_string())
}
