use chrono::{Datelike, Months, NaiveDate};
use std::collections::BTreeMap;

use crate::domain::priority::Priority;
use crate::domain::project::Project;
use crate::domain::task::Task;

/// A displayed calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarMonth {
    first_day: NaiveDate,
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first_day| Self { first_day })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn last_day(&self) -> NaiveDate {
        self.next().first_day.pred_opt().unwrap_or(self.first_day)
    }

    pub fn previous(&self) -> Self {
        Self {
            first_day: self.first_day.checked_sub_months(Months::new(1)).unwrap_or(self.first_day),
        }
    }

    pub fn next(&self) -> Self {
        Self {
            first_day: self.first_day.checked_add_months(Months::new(1)).unwrap_or(self.first_day),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first_day && date <= self.last_day()
    }

    pub fn title(&self) -> String {
        self.first_day.format("%B %Y").to_string()
    }

    /// Weeks of the month grid, Sunday first. Days outside the month are `None`.
    pub fn weeks(&self) -> Vec<[Option<NaiveDate>; 7]> {
        let leading = self.first_day.weekday().num_days_from_sunday() as usize;
        let mut cells: Vec<Option<NaiveDate>> = vec![None; leading];
        cells.extend(self.first_day.iter_days().take_while(|d| self.contains(*d)).map(Some));
        while cells.len() % 7 != 0 {
            cells.push(None);
        }
        cells
            .chunks(7)
            .map(|week| {
                let mut row = [None; 7];
                row.copy_from_slice(week);
                row
            })
            .collect()
    }
}

/// A project or task with its due date.
#[derive(Debug, Clone, PartialEq)]
pub enum DueItem {
    Project(Project),
    Task(Task),
}

impl DueItem {
    pub fn due_date(&self) -> NaiveDate {
        match self {
            DueItem::Project(p) => p.due_date,
            DueItem::Task(t) => t.due_date,
        }
    }

    pub fn priority(&self) -> Priority {
        match self {
            DueItem::Project(p) => p.priority,
            DueItem::Task(t) => t.priority,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            DueItem::Project(p) => &p.name,
            DueItem::Task(t) => &t.title,
        }
    }

    pub fn kind_label(&self) -> &'static str {
        match self {
            DueItem::Project(_) => "Project",
            DueItem::Task(_) => "Task",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayBucket {
    pub items: Vec<DueItem>,
    pub has_high_priority: bool,
}

/// Projects, then tasks, due within the month (both ends inclusive).
pub fn due_items<'a, P, T>(month: CalendarMonth, projects: P, tasks: T) -> Vec<DueItem>
where
    P: IntoIterator<Item = &'a Project>,
    T: IntoIterator<Item = &'a Task>,
{
    let project_items = projects
        .into_iter()
        .filter(|p| month.contains(p.due_date))
        .map(|p| DueItem::Project(p.clone()));
    let task_items = tasks
        .into_iter()
        .filter(|t| month.contains(t.due_date))
        .map(|t| DueItem::Task(t.clone()));
    project_items.chain(task_items).collect()
}

/// Groups due items by day.
pub fn day_buckets(items: &[DueItem]) -> BTreeMap<NaiveDate, DayBucket> {
    let mut buckets: BTreeMap<NaiveDate, DayBucket> = BTreeMap::new();
    for item in items {
        let bucket = buckets.entry(item.due_date()).or_default();
        bucket.has_high_priority |= item.priority() == Priority::High;
        bucket.items.push(item.clone());
    }
    buckets
}

pub fn items_on(items: &[DueItem], date: NaiveDate) -> Vec<DueItem> {
    items.iter().filter(|i| i.due_date() == date).cloned().collect()
}

/// Feedback shown when a selected day has nothing due.
pub fn empty_day_message(date: NaiveDate) -> String {
    format!("No deadlines on {}", date.format("%B %-d, %Y"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::Repository;
    use chrono::Utc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_bounds() {
        let feb = CalendarMonth::new(2024, 2).unwrap();
        assert_eq!(feb.first_day(), date(2024, 2, 1));
        assert_eq!(feb.last_day(), date(2024, 2, 29));
        assert_eq!(feb.previous(), CalendarMonth::new(2024, 1).unwrap());
        assert_eq!(CalendarMonth::new(2024, 12).unwrap().next(), CalendarMonth::new(2025, 1).unwrap());
        assert_eq!(CalendarMonth::containing(date(2024, 2, 17)), feb);
        assert!(CalendarMonth::new(2024, 13).is_none());
        assert_eq!(feb.title(), "February 2024");
    }

    #[test]
    fn test_weeks_grid() {
        // June 2024 starts on a Saturday.
        let weeks = CalendarMonth::new(2024, 6).unwrap().weeks();
        assert_eq!(weeks.len(), 6);
        assert_eq!(weeks[0][5], None);
        assert_eq!(weeks[0][6], Some(date(2024, 6, 1)));
        assert_eq!(weeks[5][0], Some(date(2024, 6, 30)));
        assert_eq!(weeks.iter().flatten().flatten().count(), 30);
    }

    #[test]
    fn test_due_items_and_buckets() {
        let today = date(2024, 3, 1);
        let repo = Repository::with_sample_data(today, Utc::now());
        let month = CalendarMonth::containing(today);

        let items = due_items(month, repo.projects.values(), repo.tasks.values());
        // Project 1 (+14), tasks 2 (+3), 3 (+7), 4 (+12), 5 (+16).
        let titles: Vec<_> = items.iter().map(|i| i.title().to_string()).collect();
        assert_eq!(
            titles,
            vec![
                "Website Redesign",
                "Implement responsive design",
                "Content migration",
                "UI/UX Design",
                "API Integration",
            ]
        );
        assert_eq!(items[0].kind_label(), "Project");

        let buckets = day_buckets(&items);
        assert_eq!(buckets.len(), 5);
        assert!(buckets[&date(2024, 3, 4)].has_high_priority);
        assert!(!buckets[&date(2024, 3, 8)].has_high_priority);

        assert_eq!(items_on(&items, date(2024, 3, 15)).len(), 1);
        assert!(items_on(&items, date(2024, 3, 2)).is_empty());
    }

    #[test]
    fn test_empty_day_message() {
        assert_eq!(empty_day_message(date(2024, 6, 5)), "No deadlines on June 5, 2024");
    }
}
