use std::collections::VecDeque;

use tracing::debug;

use crate::models::Category;
use crate::planner::config::PlanConfig;

/// Bounded FIFO of recently used food ids.
///
/// Ids in the window are kept out of selection; the oldest id is evicted
/// once the window grows past its capacity.
#[derive(Debug, Clone)]
pub struct UsedWindow {
    capacity: usize,
    ids: VecDeque<String>,
}

impl UsedWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ids: VecDeque::with_capacity(capacity + 1),
        }
    }

    pub fn push(&mut self, id: &str) {
        self.ids.push_back(id.to_string());
        while self.ids.len() > self.capacity {
            if let Some(evicted) = self.ids.pop_front() {
                debug!(id = %evicted, "evicted from rotation window");
            }
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|used| used == id)
    }

    /// Ids currently excluded, oldest first.
    pub fn ids(&self) -> Vec<&str> {
        self.ids.iter().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// One used-id window per catalog category.
#[derive(Debug, Clone)]
pub struct RotationState {
    proteins: UsedWindow,
    carbs: UsedWindow,
    vegetables: UsedWindow,
}

impl RotationState {
    pub fn new(config: &PlanConfig) -> Self {
        Self {
            proteins: UsedWindow::new(config.protein_window),
            carbs: UsedWindow::new(config.carb_window),
            vegetables: UsedWindow::new(config.vegetable_window),
        }
    }

    pub fn window(&self, category: Category) -> &UsedWindow {
        match category {
            Category::Protein => &self.proteins,
            Category::Carb => &self.carbs,
            Category::Vegetable => &self.vegetables,
        }
    }

    pub fn record(&mut self, category: Category, id: &str) {
        let window = match category {
            Category::Protein => &mut self.proteins,
            Category::Carb => &mut self.carbs,
            Category::Vegetable => &mut self.vegetables,
        };
        window.push(id);
    }
}
