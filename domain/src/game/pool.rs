//! Item pool entity

use super::rules::CHOICES_PER_ROUND;
use crate::core::error::QuizError;
use crate::core::item::Item;
use std::collections::HashSet;

/// Ordered set of distinct items the rounds are drawn from
///
/// Always holds at least [`CHOICES_PER_ROUND`] items with pairwise
/// distinct, non-blank names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemPool {
    items: Vec<Item>,
}

impl ItemPool {
    pub fn new(items: Vec<Item>) -> Result<Self, QuizError> {
        if items.len() < CHOICES_PER_ROUND {
            return Err(QuizError::PoolTooSmall {
                size: items.len(),
                required: CHOICES_PER_ROUND,
            });
        }

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.name().trim().is_empty() {
                return Err(QuizError::EmptyItemName);
            }
            if !seen.insert(item.name()) {
                return Err(QuizError::DuplicateItem(item.name().to_string()));
            }
        }

        Ok(Self { items })
    }

    /// Build a pool from bare names
    pub fn from_names<I, S>(names: I) -> Result<Self, QuizError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = names
            .into_iter()
            .map(|name| Item::try_new(name).ok_or(QuizError::EmptyItemName))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(items)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name() == name)
    }

    /// Look up an item by name
    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name() == name)
    }

    pub(crate) fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }
}
