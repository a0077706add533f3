//! Demonstration driver.
//!
//! Builds a manager, adds a handful of tasks with due dates relative to
//! now, tags them, completes one, then walks the query surface and prints
//! what it finds. Illustrative only; the reusable core is the library.

use chrono::{Duration, Utc};
use tickbox::{NewTask, Priority, TaskManager};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut manager = TaskManager::new();
    let now = Utc::now();

    let report = manager
        .add_task(
            "Ship the quarterly report",
            NewTask {
                due_date: Some(now - Duration::days(1)),
                priority: Some(Priority::High),
            },
        )
        .expect("title is non-empty");
    let groceries = manager
        .add_task(
            "Buy groceries",
            NewTask {
                due_date: Some(now + Duration::hours(2)),
                priority: None,
            },
        )
        .expect("title is non-empty");
    let reviews = manager
        .add_task(
            "Review open pull requests",
            NewTask {
                due_date: None,
                priority: Some(Priority::High),
            },
        )
        .expect("title is non-empty");
    let plants = manager
        .add_task(
            "Water the plants",
            NewTask {
                due_date: None,
                priority: Some(Priority::Low),
            },
        )
        .expect("title is non-empty");

    manager.tag_task(report.id, "work").expect("task exists");
    manager.tag_task(reviews.id, "work").expect("task exists");
    manager.tag_task(groceries.id, "errands").expect("task exists");
    manager.tag_task(plants.id, "home").expect("task exists");
    manager.complete_task(plants.id).expect("task exists");

    println!("Total tasks:     {}", manager.len());
    println!("Pending tasks:   {}", manager.pending_tasks().len());
    println!("Completed tasks: {}", manager.completed_tasks().len());

    let stats = manager.statistics();
    println!(
        "\nStatistics:\n{}",
        serde_json::to_string_pretty(&stats).expect("statistics serialize")
    );

    println!("\nBy priority (high first):");
    for task in manager.sort_by_priority(false) {
        println!("  [{}] {} ({})", task.status, task.title, task.priority);
    }

    println!("\nTagged 'work':");
    for task in manager.filter_by_tag("work") {
        println!("  {}", task.title);
    }

    println!("\nOverdue:");
    for task in manager.overdue_tasks() {
        if let Some(due) = task.due_date {
            println!("  {} (was due {})", task.title, due.format("%Y-%m-%d %H:%M UTC"));
        }
    }
}
