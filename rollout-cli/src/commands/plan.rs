//! Plan command - compute and render the implementation timeline

use clap::Args;
use rollout_core::{format_weeks, generate, Config, ItemId, OutputFormat, Plan, SelectionSet};

/// Columns per week in the text chart
const WEEK_COLS: usize = 2;

/// Compute and print the implementation timeline
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Select an optional work item (repeatable); see `rollout catalog`
    #[arg(short, long, value_name = "ITEM")]
    include: Vec<ItemId>,

    /// Drop a work item selected by default (repeatable)
    #[arg(short = 'x', long, value_name = "ITEM")]
    exclude: Vec<ItemId>,
}

impl PlanArgs {
    /// Execute the plan command
    pub fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        let mut selection = SelectionSet::mandatory_only();
        for id in config.defaults.include.iter().chain(&self.include) {
            selection.select(*id);
        }
        for id in &self.exclude {
            if !selection.deselect(*id) {
                anyhow::bail!("{} is mandatory and cannot be excluded", id);
            }
        }

        let employees = config.employees();
        let plan = generate(employees, &selection);

        if verbose {
            tracing::info!(employees, tier = %plan.tier, total_weeks = plan.total_weeks, "Plan generated");
        }

        match config.defaults.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
            OutputFormat::Text => print_plan(&plan, employees),
        }

        Ok(())
    }
}

/// Render the plan as a summary plus a week-scaled text chart
fn print_plan(plan: &Plan, employees: u32) {
    println!("Implementation Plan");
    println!("===================");
    println!();
    println!("Organization: {} employees ({})", employees, plan.tier);
    println!("Complexity factor: {}x", plan.tier.multiplier());
    println!(
        "Estimated duration: {} ({} weeks)",
        format_weeks(plan.total_weeks),
        plan.total_weeks
    );
    println!();

    let name_width = plan
        .phases
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(0);

    println!("  {:<width$}  {}", "", week_ruler(plan.total_weeks), width = name_width);
    for phase in &plan.phases {
        println!(
            "  {:<width$}  {}",
            phase.name,
            phase_bar(phase.start, phase.duration),
            width = name_width
        );
    }
}

/// Week-number ruler, one mark every four weeks
fn week_ruler(total_weeks: u32) -> String {
    let mut ruler = String::new();
    let mut week = 0;
    while week <= total_weeks {
        ruler.push_str(&format!("{:<cols$}", week, cols = 4 * WEEK_COLS));
        week += 4;
    }
    ruler.trim_end().to_string()
}

/// Bar for a single phase; zero-width phases get an explicit marker
fn phase_bar(start: u32, duration: u32) -> String {
    let offset = " ".repeat(start as usize * WEEK_COLS);
    if duration == 0 {
        return format!("{}| 0w", offset);
    }
    format!(
        "{}{} {}w",
        offset,
        "#".repeat(duration as usize * WEEK_COLS),
        duration
    )
}
