use crate::config::Config;
use crate::domain::{Entry, Goal};

/// Renders records as the human-readable lines shown by the menu.
#[derive(Debug, Clone, Copy)]
pub struct CliFormatters {
    precision: usize,
}

impl Default for CliFormatters {
    fn default() -> Self {
        Self { precision: 2 }
    }
}

impl CliFormatters {
    pub fn new(precision: u8) -> Self {
        Self {
            precision: precision as usize,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.currency_precision)
    }

    pub fn amount(&self, value: f64) -> String {
        format!("{value:.prec$}", prec = self.precision)
    }

    pub fn entry(&self, entry: &Entry) -> String {
        format!(
            "Name: {}, Category: {}, Amount: {}",
            entry.name,
            entry.category,
            self.amount(entry.amount)
        )
    }

    /// Category-filtered listings omit the category.
    pub fn entry_in_category(&self, entry: &Entry) -> String {
        format!("Name: {}, Amount: {}", entry.name, self.amount(entry.amount))
    }

    pub fn goal(&self, goal: &Goal) -> String {
        format!(
            "[{}] Goal: {}, Target: {}, Progress: {}",
            goal.id,
            goal.description,
            self.amount(goal.target),
            self.amount(goal.progress)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EntryKind;

    fn coffee() -> Entry {
        Entry {
            id: 1,
            kind: EntryKind::Expense,
            name: "Coffee".into(),
            category: "Food".into(),
            amount: 4.5,
        }
    }

    #[test]
    fn entry_lines_use_configured_precision() {
        let formatters = CliFormatters::default();
        assert_eq!(
            formatters.entry(&coffee()),
            "Name: Coffee, Category: Food, Amount: 4.50"
        );
        let refill = Entry {
            amount: 12.0,
            ..coffee()
        };
        assert_eq!(
            CliFormatters::new(0).entry_in_category(&refill),
            "Name: Coffee, Amount: 12"
        );
    }

    #[test]
    fn goal_line_shows_id() {
        let goal = Goal {
            id: 3,
            description: "Vacation".into(),
            target: 1200.0,
            progress: 300.0,
        };
        assert_eq!(
            CliFormatters::default().goal(&goal),
            "[3] Goal: Vacation, Target: 1200.00, Progress: 300.00"
        );
    }
}
