//! Cuckoo Search execution loop.
//!
//! [`CuckooSearch`] holds the state of one run and exposes its two phases
//! (Lévy perturbation with greedy replacement, then abandonment) so they can
//! be driven and inspected one at a time. [`CsRunner`] drives it for the
//! configured budget and collects a [`CsResult`].

use super::config::{CsConfig, FeasibilityPolicy};
use super::history::{best_changes, BestChange};
use super::levy::LevyFlight;
use crate::population::{rank_ascending, Population};
use crate::problem::{Constraint, Problem};
use crate::random::create_rng;
use crate::solution::Solution;
use rand::rngs::StdRng;
use std::cmp::Ordering as CmpOrdering;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Fitness and feasibility of one evaluated solution.
#[derive(Debug, Clone, Copy)]
struct Score {
    fitness: f64,
    feasible: bool,
}

impl Score {
    fn of<P: Problem>(problem: &P, solution: &Solution, policy: FeasibilityPolicy) -> Self {
        let feasible = match policy {
            FeasibilityPolicy::FitnessOnly => true,
            FeasibilityPolicy::FeasibleFirst => problem.is_feasible(solution),
        };
        Self {
            fitness: problem.fitness(solution),
            feasible,
        }
    }
}

/// Greedy acceptance: may `candidate` overwrite `incumbent`?
///
/// Ties favor the candidate.
fn accepts(policy: FeasibilityPolicy, candidate: Score, incumbent: Score) -> bool {
    match policy {
        FeasibilityPolicy::FitnessOnly => candidate.fitness >= incumbent.fitness,
        FeasibilityPolicy::FeasibleFirst => match (candidate.feasible, incumbent.feasible) {
            (true, false) => true,
            (false, true) => false,
            _ => candidate.fitness >= incumbent.fitness,
        },
    }
}

/// Strict improvement, used for best-so-far tracking.
fn improves(policy: FeasibilityPolicy, candidate: Score, best: Score) -> bool {
    match policy {
        FeasibilityPolicy::FitnessOnly => candidate.fitness > best.fitness,
        FeasibilityPolicy::FeasibleFirst => match (candidate.feasible, best.feasible) {
            (true, false) => true,
            (false, true) => false,
            _ => candidate.fitness > best.fitness,
        },
    }
}

fn score_all<P: Problem>(
    problem: &P,
    solutions: &[Solution],
    policy: FeasibilityPolicy,
    parallel: bool,
) -> Vec<Score> {
    #[cfg(feature = "parallel")]
    if parallel {
        use rayon::prelude::*;
        return solutions
            .par_iter()
            .map(|s| Score::of(problem, s, policy))
            .collect();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    solutions
        .iter()
        .map(|s| Score::of(problem, s, policy))
        .collect()
}

/// One accepted replacement made during the perturbation phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Replacement {
    /// Nest whose perturbation produced the candidate.
    pub source: usize,
    /// Slot that was overwritten.
    pub slot: usize,
    /// Fitness of the overwritten nest.
    pub previous_fitness: f64,
    /// Fitness of the candidate now in `slot`.
    pub new_fitness: f64,
}

/// What happened during one iteration.
#[derive(Debug, Clone)]
pub struct IterationReport {
    /// 1-based iteration number.
    pub iteration: usize,
    /// Accepted replacements, in acceptance order.
    pub replacements: Vec<Replacement>,
    /// Slots reseeded by the abandonment phase, least fit first.
    pub abandoned: Vec<usize>,
    /// Best fitness found so far.
    pub best_fitness: f64,
    /// Whether the best-so-far solution changed this iteration.
    pub improved: bool,
}

/// The state of a single Cuckoo Search run.
///
/// # Usage
///
/// ```
/// use u_cuckoo::cs::{CsConfig, CuckooSearch};
/// use u_cuckoo::{Problem, Solution};
///
/// struct OneMax;
/// impl Problem for OneMax {
///     fn dimensionality(&self) -> usize { 8 }
///     fn fitness(&self, s: &Solution) -> f64 { s.count_ones() as f64 }
/// }
///
/// let config = CsConfig::default().with_population_size(10).with_seed(3);
/// let mut search = CuckooSearch::new(&OneMax, &config);
/// let before = search.best_fitness();
/// search.step();
/// assert!(search.best_fitness() >= before);
/// ```
pub struct CuckooSearch<'a, P: Problem> {
    problem: &'a P,
    config: CsConfig,
    rng: StdRng,
    levy: LevyFlight,
    bounds: Vec<Option<Constraint>>,
    population: Population,
    scores: Vec<Score>,
    best: Solution,
    best_score: Score,
    iteration: usize,
    accepted_moves: usize,
    abandoned_nests: usize,
}

impl<'a, P: Problem> CuckooSearch<'a, P> {
    /// Initializes a random population against `problem`.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`CsConfig::validate`]
    /// first to get a descriptive error).
    pub fn new(problem: &'a P, config: &CsConfig) -> Self {
        config.validate().expect("invalid CsConfig");

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let dim = problem.dimensionality();
        let mut bounds = vec![None; dim];
        if config.clamp_to_bounds {
            for c in problem.constraints() {
                if c.index < dim {
                    bounds[c.index] = Some(*c);
                }
            }
        }

        let population = Population::random(problem, config.population_size, &mut rng);
        let scores = score_all(
            problem,
            population.solutions(),
            config.feasibility,
            config.parallel,
        );

        let best_idx = best_slot(config.feasibility, &scores);
        let best = population[best_idx].clone();
        let best_score = scores[best_idx];

        Self {
            problem,
            config: config.clone(),
            rng,
            levy: LevyFlight::new(config.levy_beta),
            bounds,
            population,
            scores,
            best,
            best_score,
            iteration: 0,
            accepted_moves: 0,
            abandoned_nests: 0,
        }
    }

    /// Runs one full iteration: perturbation, then abandonment when due.
    pub fn step(&mut self) -> IterationReport {
        let best_before = self.best_score;
        let replacements = self.perturbation_phase();

        let abandoned = if (self.iteration + 1) % self.config.abandon_interval == 0 {
            self.abandonment_phase()
        } else {
            Vec::new()
        };

        self.iteration += 1;
        let improved = improves(self.config.feasibility, self.best_score, best_before);
        self.problem
            .on_iteration(self.iteration, self.best_score.fitness);

        debug!(
            iteration = self.iteration,
            best_fitness = self.best_score.fitness,
            accepted = replacements.len(),
            abandoned = abandoned.len(),
            improved,
            "cuckoo search iteration"
        );

        IterationReport {
            iteration: self.iteration,
            replacements,
            abandoned,
            best_fitness: self.best_score.fitness,
            improved,
        }
    }

    /// Lévy-flight perturbation with greedy replacement.
    ///
    /// Every nest lays one candidate: its vector plus `step_size` times a
    /// vector of Lévy steps. All candidates are built from the population as
    /// it stood at the start of the phase, then evaluated, then offered in
    /// nest order to a uniformly drawn slot. A candidate replaces that slot
    /// only if it is no worse (ties favor the candidate). An accepted
    /// candidate that beats the best-so-far becomes the new best at once.
    pub fn perturbation_phase(&mut self) -> Vec<Replacement> {
        let step = self.config.step_size;
        let candidates: Vec<Solution> = self
            .population
            .iter()
            .map(|nest| {
                let mut egg = nest.clone();
                for (k, v) in egg.vector_mut().iter_mut().enumerate() {
                    *v += step * self.levy.sample(&mut self.rng);
                    if let Some(bound) = self.bounds[k] {
                        *v = bound.clamp(*v);
                    }
                }
                egg
            })
            .collect();

        let scores = score_all(
            self.problem,
            &candidates,
            self.config.feasibility,
            self.config.parallel,
        );

        let mut replacements = Vec::new();
        for (source, (egg, score)) in candidates.into_iter().zip(scores).enumerate() {
            let slot = self.population.random_index(&mut self.rng);
            let incumbent = self.scores[slot];
            if accepts(self.config.feasibility, score, incumbent) {
                self.population.replace(slot, egg);
                self.scores[slot] = score;
                self.track_best(slot);
                replacements.push(Replacement {
                    source,
                    slot,
                    previous_fitness: incumbent.fitness,
                    new_fitness: score.fitness,
                });
            }
        }

        self.accepted_moves += replacements.len();
        replacements
    }

    /// Reseeds the weakest `floor(abandonment_ratio × size)` nests.
    ///
    /// Under [`FeasibilityPolicy::FeasibleFirst`] infeasible nests rank
    /// below feasible ones; otherwise the ranking is by fitness alone.
    /// Only the reseeded nests can change the best-so-far here.
    pub fn abandonment_phase(&mut self) -> Vec<usize> {
        let ranking = match self.config.feasibility {
            FeasibilityPolicy::FitnessOnly => {
                let fitness: Vec<f64> = self.scores.iter().map(|s| s.fitness).collect();
                rank_ascending(&fitness)
            }
            FeasibilityPolicy::FeasibleFirst => {
                let mut order: Vec<usize> = (0..self.scores.len()).collect();
                order.sort_by(|&a, &b| compare(self.scores[a], self.scores[b]));
                order
            }
        };

        let abandoned = self.population.abandon_ranked(
            self.problem,
            &ranking,
            self.config.abandonment_ratio,
            &mut self.rng,
        );
        for &i in &abandoned {
            self.scores[i] = Score::of(self.problem, &self.population[i], self.config.feasibility);
            self.track_best(i);
        }

        self.abandoned_nests += abandoned.len();
        abandoned
    }

    /// Promotes the nest in `slot` to best-so-far on strict improvement.
    fn track_best(&mut self, slot: usize) {
        if improves(self.config.feasibility, self.scores[slot], self.best_score) {
            self.best = self.population[slot].clone();
            self.best_score = self.scores[slot];
        }
    }

    /// The best solution found so far.
    pub fn best(&self) -> &Solution {
        &self.best
    }

    /// Fitness of [`best`](Self::best).
    pub fn best_fitness(&self) -> f64 {
        self.best_score.fitness
    }

    /// Current nests.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Cached fitness of each nest, in slot order.
    pub fn population_fitness(&self) -> Vec<f64> {
        self.scores.iter().map(|s| s.fitness).collect()
    }

    /// Iterations completed so far.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    fn into_result(
        self,
        fitness_history: Vec<f64>,
        snapshots: Vec<Solution>,
        cancelled: bool,
    ) -> CsResult {
        let population_fitness = self.population_fitness();
        let best_feasible = self.problem.is_feasible(&self.best);
        CsResult {
            best: self.best,
            best_fitness: self.best_score.fitness,
            best_feasible,
            iterations: self.iteration,
            cancelled,
            accepted_moves: self.accepted_moves,
            abandoned_nests: self.abandoned_nests,
            fitness_history,
            snapshots,
            population: self.population,
            population_fitness,
        }
    }
}

/// Ascending order: infeasible before feasible, then by fitness.
fn compare(a: Score, b: Score) -> CmpOrdering {
    a.feasible
        .cmp(&b.feasible)
        .then_with(|| a.fitness.total_cmp(&b.fitness))
}

/// First slot holding the best score under `policy`.
fn best_slot(policy: FeasibilityPolicy, scores: &[Score]) -> usize {
    let mut best = 0;
    for (i, &s) in scores.iter().enumerate().skip(1) {
        if improves(policy, s, scores[best]) {
            best = i;
        }
    }
    best
}

/// Result of a Cuckoo Search run.
#[derive(Debug, Clone)]
pub struct CsResult {
    /// The best solution found during the entire run.
    pub best: Solution,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Whether `best` satisfies [`Problem::is_feasible`].
    pub best_feasible: bool,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Candidates accepted into the population across the run.
    pub accepted_moves: usize,

    /// Nests reseeded by abandonment across the run.
    pub abandoned_nests: usize,

    /// Best-so-far fitness; index 0 is the initial population.
    pub fitness_history: Vec<f64>,

    /// Best-so-far solution after each iteration, aligned with
    /// `fitness_history`. Empty unless [`CsConfig::record_snapshots`] is set.
    pub snapshots: Vec<Solution>,

    /// The final nests.
    pub population: Population,

    /// Fitness of each final nest, in slot order.
    pub population_fitness: Vec<f64>,
}

impl CsResult {
    /// Collapses the snapshot history into one entry per distinct best
    /// solution, with how long each one stayed best.
    pub fn best_changes(&self) -> Vec<BestChange> {
        best_changes(&self.snapshots, &self.fitness_history)
    }
}

/// Executes the Cuckoo Search algorithm.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = CsConfig::default().with_seed(42);
/// let result = CsRunner::run(&problem, &config);
/// println!("Best fitness: {}", result.best_fitness);
/// ```
pub struct CsRunner;

impl CsRunner {
    /// Runs Cuckoo Search for the configured iteration budget.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`CsConfig::validate`]
    /// first to get a descriptive error).
    pub fn run<P: Problem>(problem: &P, config: &CsConfig) -> CsResult {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs Cuckoo Search with an optional cancellation token.
    ///
    /// The flag is checked between iterations only, never during an
    /// evaluation. A cancelled run returns the best solution found so far.
    #[instrument(
        level = "info",
        skip_all,
        fields(
            nests = config.population_size,
            max_iterations = config.max_iterations,
            seed = ?config.seed
        )
    )]
    pub fn run_with_cancel<P: Problem>(
        problem: &P,
        config: &CsConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> CsResult {
        let mut search = CuckooSearch::new(problem, config);
        info!(
            dimensionality = problem.dimensionality(),
            abandon_per_phase = config.abandon_count(),
            initial_best = search.best_fitness(),
            "cuckoo search started"
        );

        let mut fitness_history = Vec::with_capacity(config.max_iterations + 1);
        fitness_history.push(search.best_fitness());
        let mut snapshots = Vec::new();
        if config.record_snapshots {
            snapshots.reserve(config.max_iterations + 1);
            snapshots.push(search.best().clone());
        }

        let mut cancelled = false;
        for _ in 0..config.max_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let report = search.step();
            fitness_history.push(report.best_fitness);
            if config.record_snapshots {
                snapshots.push(search.best().clone());
            }
        }

        info!(
            iterations = search.iteration(),
            best_fitness = search.best_fitness(),
            cancelled,
            "cuckoo search finished"
        );

        search.into_result(fitness_history, snapshots, cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::Rng;
    use std::sync::atomic::AtomicUsize;

    // ---- OneMax over [0, 1] variables ----

    struct OneMax {
        n: usize,
        constraints: Vec<Constraint>,
    }

    impl OneMax {
        fn new(n: usize) -> Self {
            Self {
                n,
                constraints: (0..n).map(Constraint::binary).collect(),
            }
        }
    }

    impl Problem for OneMax {
        fn dimensionality(&self) -> usize {
            self.n
        }

        fn constraints(&self) -> &[Constraint] {
            &self.constraints
        }

        fn fitness(&self, s: &Solution) -> f64 {
            s.count_ones() as f64
        }
    }

    // ---- Sphere, maximized as its negation ----

    struct NegSphere {
        dim: usize,
    }

    impl Problem for NegSphere {
        fn dimensionality(&self) -> usize {
            self.dim
        }

        fn random_solution<R: Rng>(&self, rng: &mut R) -> Solution {
            Solution::from_vec((0..self.dim).map(|_| rng.random_range(-5.0..5.0)).collect())
        }

        fn fitness(&self, s: &Solution) -> f64 {
            -s.vector().iter().map(|x| x * x).sum::<f64>()
        }
    }

    // ---- Feasible only with an even number of ones ----

    struct EvenOnes {
        n: usize,
    }

    impl Problem for EvenOnes {
        fn dimensionality(&self) -> usize {
            self.n
        }

        fn fitness(&self, s: &Solution) -> f64 {
            s.count_ones() as f64
        }

        fn is_feasible(&self, s: &Solution) -> bool {
            s.count_ones() % 2 == 0
        }
    }

    fn small_config(seed: u64) -> CsConfig {
        CsConfig::default()
            .with_population_size(15)
            .with_max_iterations(60)
            .with_seed(seed)
    }

    #[test]
    fn test_onemax_improves() {
        let problem = OneMax::new(20);
        let config = small_config(42)
            .with_max_iterations(200)
            .with_step_size(0.3)
            .with_clamp_to_bounds(true);

        let result = CsRunner::run(&problem, &config);

        assert!(
            result.best_fitness >= 16.0,
            "expected at least 16 ones, got {}",
            result.best_fitness
        );
        assert!(result.best_fitness >= result.fitness_history[0]);
        assert_eq!(result.iterations, 200);
        assert!(!result.cancelled);
    }

    #[test]
    fn test_sphere_improves() {
        let problem = NegSphere { dim: 3 };
        let config = small_config(7).with_max_iterations(300).with_step_size(0.5);

        let result = CsRunner::run(&problem, &config);

        assert!(
            result.best_fitness > result.fitness_history[0],
            "no improvement over the initial population"
        );
        assert!(result.best_fitness > -1.0, "got {}", result.best_fitness);
    }

    #[test]
    fn test_history_is_non_decreasing() {
        let problem = OneMax::new(12);
        let result = CsRunner::run(&problem, &small_config(1));

        assert_eq!(result.fitness_history.len(), result.iterations + 1);
        for window in result.fitness_history.windows(2) {
            assert!(
                window[1] >= window[0],
                "best-so-far should never decrease: {} < {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_same_seed_same_run() {
        let problem = OneMax::new(16);
        let config = small_config(99).with_record_snapshots(true);

        let a = CsRunner::run(&problem, &config);
        let b = CsRunner::run(&problem, &config);

        assert_eq!(a.fitness_history, b.fitness_history);
        assert_eq!(a.population_fitness, b.population_fitness);
        for (x, y) in a.population.iter().zip(b.population.iter()) {
            assert_eq!(x.vector(), y.vector());
        }
        assert_eq!(a.snapshots, b.snapshots);
    }

    #[test]
    fn test_population_size_constant() {
        let problem = OneMax::new(8);
        let config = small_config(3).with_abandonment_ratio(0.6);
        let result = CsRunner::run(&problem, &config);
        assert_eq!(result.population.size(), 15);
        assert_eq!(result.population_fitness.len(), 15);
    }

    #[test]
    fn test_cached_fitness_matches_population() {
        let problem = NegSphere { dim: 4 };
        let result = CsRunner::run(&problem, &small_config(5));
        for (nest, &f) in result.population.iter().zip(&result.population_fitness) {
            assert_eq!(problem.fitness(nest), f);
        }
    }

    #[test]
    fn test_abandonment_counts() {
        let problem = OneMax::new(8);
        let config = small_config(3)
            .with_population_size(10)
            .with_max_iterations(12)
            .with_abandonment_ratio(0.3)
            .with_abandon_interval(4);

        let result = CsRunner::run(&problem, &config);

        // iterations 4, 8 and 12, three nests each
        assert_eq!(result.abandoned_nests, 9);
    }

    #[test]
    fn test_abandonment_disabled_with_zero_ratio() {
        let problem = OneMax::new(8);
        let config = small_config(3).with_abandonment_ratio(0.0);
        let result = CsRunner::run(&problem, &config);
        assert_eq!(result.abandoned_nests, 0);
    }

    #[test]
    fn test_step_reports_abandoned_weakest() {
        let problem = NegSphere { dim: 2 };
        let config = small_config(11).with_abandonment_ratio(0.4);
        let mut search = CuckooSearch::new(&problem, &config);

        search.perturbation_phase();
        let before = search.population_fitness();
        let abandoned = search.abandonment_phase();

        assert_eq!(abandoned.len(), 6);
        let expected: Vec<usize> = rank_ascending(&before)[..6].to_vec();
        assert_eq!(abandoned, expected);
    }

    #[test]
    fn test_full_abandonment_keeps_accepted_best() {
        let problem = NegSphere { dim: 3 };
        for seed in 0..50 {
            let config = CsConfig::default()
                .with_population_size(10)
                .with_abandonment_ratio(1.0)
                .with_step_size(1.0)
                .with_seed(seed);
            let mut search = CuckooSearch::new(&problem, &config);

            for _ in 0..20 {
                let before = search.best_fitness();
                let report = search.step();
                for r in &report.replacements {
                    assert!(
                        search.best_fitness() >= r.new_fitness,
                        "seed {seed}, iteration {}: accepted {} but best is {}",
                        report.iteration,
                        r.new_fitness,
                        search.best_fitness()
                    );
                }
                assert_eq!(report.improved, search.best_fitness() > before);
            }
        }
    }

    #[test]
    fn test_clamp_keeps_values_in_bounds() {
        let problem = OneMax::new(10);
        let config = small_config(21)
            .with_step_size(5.0)
            .with_clamp_to_bounds(true);
        let result = CsRunner::run(&problem, &config);
        for nest in result.population.iter() {
            assert!(nest.vector().iter().all(|v| (0.0..=1.0).contains(v)));
        }
    }

    #[test]
    fn test_cancellation() {
        let problem = OneMax::new(10);
        let config = small_config(42).with_max_iterations(1_000);

        // Set before running so the first between-iterations check fires.
        let cancel = Arc::new(AtomicBool::new(true));
        let result = CsRunner::run_with_cancel(&problem, &config, Some(cancel));

        assert!(result.cancelled);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.fitness_history.len(), 1);
    }

    #[test]
    fn test_on_iteration_called_every_iteration() {
        struct Counting {
            inner: OneMax,
            calls: AtomicUsize,
        }

        impl Problem for Counting {
            fn dimensionality(&self) -> usize {
                self.inner.dimensionality()
            }

            fn fitness(&self, s: &Solution) -> f64 {
                self.inner.fitness(s)
            }

            fn on_iteration(&self, iteration: usize, _best: f64) {
                let prev = self.calls.fetch_add(1, Ordering::Relaxed);
                assert_eq!(prev + 1, iteration);
            }
        }

        let problem = Counting {
            inner: OneMax::new(6),
            calls: AtomicUsize::new(0),
        };
        let result = CsRunner::run(&problem, &small_config(2).with_max_iterations(17));
        assert_eq!(result.iterations, 17);
        assert_eq!(problem.calls.load(Ordering::Relaxed), 17);
    }

    #[test]
    fn test_feasible_first_prefers_feasible_best() {
        let problem = EvenOnes { n: 9 };
        let config = small_config(13)
            .with_max_iterations(100)
            .with_feasibility(FeasibilityPolicy::FeasibleFirst);

        let result = CsRunner::run(&problem, &config);

        assert!(result.best_feasible);
        assert_eq!(result.best.count_ones() % 2, 0);
    }

    #[test]
    fn test_snapshots_aligned_with_history() {
        let problem = OneMax::new(10);
        let config = small_config(4).with_record_snapshots(true);
        let result = CsRunner::run(&problem, &config);

        assert_eq!(result.snapshots.len(), result.fitness_history.len());
        for (s, &f) in result.snapshots.iter().zip(&result.fitness_history) {
            assert_eq!(problem.fitness(s), f);
        }
        assert_eq!(result.snapshots.last(), Some(&result.best));

        let changes = result.best_changes();
        assert!(!changes.is_empty());
        let covered: usize = changes.iter().map(|c| c.stable_iterations + 1).sum();
        assert_eq!(covered, result.snapshots.len());
    }

    #[test]
    fn test_no_snapshots_by_default() {
        let problem = OneMax::new(10);
        let result = CsRunner::run(&problem, &small_config(4));
        assert!(result.snapshots.is_empty());
        assert!(result.best_changes().is_empty());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_serial() {
        let problem = NegSphere { dim: 5 };
        let serial = CsRunner::run(&problem, &small_config(8));
        let parallel = CsRunner::run(&problem, &small_config(8).with_parallel(true));
        assert_eq!(serial.fitness_history, parallel.fitness_history);
        assert_eq!(serial.population_fitness, parallel.population_fitness);
    }

    #[test]
    #[should_panic(expected = "invalid CsConfig")]
    fn test_invalid_config_panics() {
        let problem = OneMax::new(4);
        CsRunner::run(&problem, &CsConfig::default().with_abandonment_ratio(2.0));
    }

    #[test]
    fn test_acceptance_tie_favors_candidate() {
        let a = Score {
            fitness: 1.0,
            feasible: true,
        };
        assert!(accepts(FeasibilityPolicy::FitnessOnly, a, a));
        assert!(!improves(FeasibilityPolicy::FitnessOnly, a, a));
    }

    #[test]
    fn test_feasible_first_ordering() {
        let feasible_low = Score {
            fitness: -10.0,
            feasible: true,
        };
        let infeasible_high = Score {
            fitness: 10.0,
            feasible: false,
        };
        let policy = FeasibilityPolicy::FeasibleFirst;
        assert!(accepts(policy, feasible_low, infeasible_high));
        assert!(!accepts(policy, infeasible_high, feasible_low));
        assert_eq!(compare(infeasible_high, feasible_low), CmpOrdering::Less);

        // FitnessOnly ignores feasibility entirely
        assert!(accepts(FeasibilityPolicy::FitnessOnly, infeasible_high, feasible_low));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_accepted_replacements_never_worsen(seed in any::<u64>(), n in 4usize..24) {
            let problem = NegSphere { dim: 3 };
            let config = CsConfig::default()
                .with_population_size(n)
                .with_step_size(1.0)
                .with_seed(seed);
            let mut search = CuckooSearch::new(&problem, &config);

            for _ in 0..5 {
                let report = search.step();
                for r in &report.replacements {
                    prop_assert!(r.new_fitness >= r.previous_fitness);
                }
            }
        }

        #[test]
        fn prop_abandonment_reseeds_floor_ratio(seed in any::<u64>(), ratio in 0.0f64..=1.0) {
            let problem = OneMax::new(6);
            let config = CsConfig::default()
                .with_population_size(13)
                .with_abandonment_ratio(ratio)
                .with_seed(seed);
            let mut search = CuckooSearch::new(&problem, &config);

            let abandoned = search.abandonment_phase();
            prop_assert_eq!(abandoned.len(), (ratio * 13.0).floor() as usize);
        }
    }
}
