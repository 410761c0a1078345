//! Solves a small nurse scheduling instance and prints every best schedule
//! the search passed through.
//!
//! ```text
//! cargo run --example nurse_schedule
//! cargo run --example nurse_schedule -- shift_reqs.csv preferences.csv
//! ```
//!
//! With no arguments the built-in 3 employees × 3 days × 4 shifts instance
//! is used. With two CSV paths the instance is read from them and its
//! shape is asked for on standard input.

use u_cuckoo::cs::{CsConfig, CsRunner};
use u_cuckoo::nurse::{NurseScheduling, ScheduleParams};
use u_cuckoo::ui::{read_integer_csv, ConsoleUi, OptimizationUi};
use u_cuckoo::Problem;

fn cycling_row(first: i64, len: i64) -> Vec<i64> {
    (0..len).map(|i| (first - 1 + i) % 4 + 1).collect()
}

fn built_in() -> Result<NurseScheduling, Box<dyn std::error::Error>> {
    let params = ScheduleParams::new(3, 3, 4, 5)
        .with_max_shifts_a_day(4)
        .with_min_shifts(4);
    let problem = NurseScheduling::new(
        params,
        vec![vec![1, 1, 1, 0]; 3],
        vec![cycling_row(1, 12), cycling_row(4, 12), cycling_row(3, 12)],
    )?;
    Ok(problem)
}

fn from_files<U: OptimizationUi>(
    ui: &mut U,
    shift_reqs: &str,
    preferences: &str,
) -> Result<NurseScheduling, Box<dyn std::error::Error>> {
    let params = ScheduleParams::new(
        ui.usize_input("number of employees")?,
        ui.usize_input("number of days")?,
        ui.usize_input("number of shifts")?,
        ui.usize_input("max shifts in a row")?,
    );
    let problem = NurseScheduling::new(
        params,
        read_integer_csv(shift_reqs)?,
        read_integer_csv(preferences)?,
    )?;
    Ok(problem)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut ui = ConsoleUi::stdio();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let problem = match args.as_slice() {
        [shift_reqs, preferences] => from_files(&mut ui, shift_reqs, preferences)?,
        [] => built_in()?,
        _ => return Err("usage: nurse_schedule [shift_reqs.csv preferences.csv]".into()),
    };

    let config = CsConfig::default()
        .with_population_size(25)
        .with_max_iterations(200)
        .with_clamp_to_bounds(true)
        .with_record_snapshots(true)
        .with_seed(42);
    let result = CsRunner::run(&problem, &config);

    for change in result.best_changes() {
        ui.display(&problem.format_schedule(&change.solution))?;
        ui.display(&format!(
            "iteration {} (stable {}) fitness {}",
            change.first_iteration, change.stable_iterations, change.fitness
        ))?;
        ui.display("")?;
    }

    let slot = result.population.best_index(&problem);
    ui.display(&format!(
        "fittest final nest: slot {} with fitness {}",
        slot, result.population_fitness[slot]
    ))?;
    ui.display(&format!(
        "best fitness {} after {} iterations, coverage {}",
        result.best_fitness,
        result.iterations,
        if problem.is_feasible(&result.best) {
            "met"
        } else {
            "not met"
        }
    ))?;
    Ok(())
}
