use super::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "STATUS", "PRIORITY", "DUE", "RECURS"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.title,
                if task.completed { "completed" } else { "pending" },
                task.priority,
                Self::date_part(task.due_date.as_deref()),
                task.recurrence_pattern.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string()),
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn task(task: &Task) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", task.id]);
        table.add_row(row!["TITLE", task.title]);
        table.add_row(row!["DESCRIPTION", task.description.as_deref().unwrap_or("-")]);
        table.add_row(row!["STATUS", if task.completed { "completed" } else { "pending" }]);
        table.add_row(row!["PRIORITY", task.priority]);
        table.add_row(row!["DUE", task.due_date.as_deref().unwrap_or("-")]);
        table.add_row(row![
            "RECURS",
            task.recurrence_pattern.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string())
        ]);
        table.add_row(row!["REMINDER", task.reminder_time.as_deref().unwrap_or("-")]);
        table.add_row(row!["CREATED", task.created_at]);
        table.printstd();

        Ok(())
    }

    // Server timestamps are RFC 3339; the list view only needs the date.
    fn date_part(value: Option<&str>) -> String {
        match value {
            Some(ts) => ts.split('T').next().unwrap_or(ts).to_string(),
            None => "-".to_string(),
        }
    }
}
