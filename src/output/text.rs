use crate::project::ProgressReport;
use crate::scenario::event::StatusEvent;
use crate::scenario::Scenario;

pub fn print_events(events: &[StatusEvent]) {
    for e in events {
        println!("{e}");
    }
}

pub fn print_report(r: &ProgressReport) {
    println!();
    print!("{r}");
}

pub fn print_check(s: &Scenario) {
    println!("Scenario for project \"{}\" is valid.", s.project.objectives);
    println!(
        "  users={} tasks={} steps={}",
        s.users.len(),
        s.tasks.len(),
        s.steps.len()
    );
}
