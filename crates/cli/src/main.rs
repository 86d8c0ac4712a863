use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tetra::api::{
    estimate, run_canned, run_random, valid_permutations, Algorithm, Design, Estimate,
    SamplerCfg,
};
use tetra::cfg::{CHECK_RANGE, CHECK_SEED, CHECK_TRIALS};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod provenance;

#[derive(Parser)]
#[command(name = "tetra")]
#[command(about = "Tetrahedron feasibility checks and Monte Carlo estimates")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Estimate a probability by repeated parallel sampling
    Estimate(EstimateArgs),
    /// Cross-check the predicates on canned and random inputs
    Check {
        /// Seed of the random cross-check
        #[arg(long, default_value_t = CHECK_SEED)]
        seed: u64,
        /// Random inputs drawn from [0, 100)^6
        #[arg(long, default_value_t = CHECK_TRIALS)]
        trials: usize,
    },
    /// Print the verdict-preserving argument permutations
    Perms,
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Debug)]
struct EstimateArgs {
    /// conditional (min/max edges opposite among feasible) or direct (feasibility)
    #[arg(long, default_value = "conditional")]
    design: Design,
    /// Oracle predicate: cm, fold, or closed
    #[arg(long, default_value = "closed")]
    algo: Algorithm,
    /// Trials per worker per run
    #[arg(long)]
    trials: Option<u64>,
    /// Worker threads per run (default: hardware parallelism)
    #[arg(long)]
    workers: Option<usize>,
    /// Number of repeated runs
    #[arg(long)]
    repeat: Option<usize>,
    /// Fixed seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
    /// Divide draws by their longest edge (default depends on design)
    #[arg(long)]
    normalize: Option<bool>,
    /// Also write the estimate as JSON plus a provenance sidecar
    #[arg(long)]
    out: Option<PathBuf>,
}

impl EstimateArgs {
    fn sampler_cfg(&self) -> SamplerCfg {
        let base = match self.design {
            Design::Conditional => SamplerCfg::conditional(),
            Design::Direct => SamplerCfg::direct(),
        };
        SamplerCfg {
            algorithm: self.algo,
            trials_per_worker: self.trials.unwrap_or(base.trials_per_worker),
            workers: self.workers.unwrap_or(base.workers),
            repetitions: self.repeat.unwrap_or(base.repetitions),
            normalize: self.normalize.unwrap_or(base.normalize),
            seed: self.seed,
            ..base
        }
    }
}

fn main() -> Result<ExitCode> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Estimate(args) => {
            run_estimate(&args.sampler_cfg(), args.out.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
        Action::Check { seed, trials } => check(seed, trials),
        Action::Perms => {
            perms();
            Ok(ExitCode::SUCCESS)
        }
        Action::Report => {
            report()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[derive(Serialize)]
struct EstimateRecord<'a> {
    design: &'a str,
    algorithm: &'a str,
    trials_per_worker: u64,
    workers: usize,
    repetitions: usize,
    normalize: bool,
    range: (f64, f64),
    seed: Option<u64>,
    runs: &'a [f64],
    average: f64,
    tolerance: f64,
}

impl<'a> EstimateRecord<'a> {
    fn new(cfg: &'a SamplerCfg, est: &'a Estimate) -> Self {
        Self {
            design: cfg.design.name(),
            algorithm: cfg.algorithm.name(),
            trials_per_worker: cfg.trials_per_worker,
            workers: cfg.workers,
            repetitions: cfg.repetitions,
            normalize: cfg.normalize,
            range: cfg.range,
            seed: cfg.seed,
            runs: &est.runs,
            average: est.average,
            tolerance: est.tolerance,
        }
    }
}

fn run_estimate(cfg: &SamplerCfg, out: Option<&Path>) -> Result<()> {
    tracing::info!(design = %cfg.design, algo = %cfg.algorithm, out = ?out, "estimate");
    let est = estimate(cfg, |_, value| println!("{value:.5}%")).context("estimation aborted")?;
    println!("{est}");
    if let Some(out) = out {
        write_estimate(cfg, &est, out)?;
    }
    Ok(())
}

fn write_estimate(cfg: &SamplerCfg, est: &Estimate, out: &Path) -> Result<PathBuf> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let record = EstimateRecord::new(cfg, est);
    std::fs::write(out, serde_json::to_vec_pretty(&record)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let mut params = serde_json::to_value(&record)?;
    if let Some(obj) = params.as_object_mut() {
        obj.remove("runs");
        obj.remove("average");
        obj.remove("tolerance");
    }
    provenance::write_sidecar(out, provenance::Payload::new(params))
}

fn check(seed: u64, trials: usize) -> Result<ExitCode> {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    tracing::info!(seed, trials, "check");
    let mut tally = run_canned(&valid_permutations());
    let mut rng = StdRng::seed_from_u64(seed);
    tally.merge(run_random(&mut rng, trials, CHECK_RANGE));
    for m in &tally.mismatches {
        println!("{m}");
    }
    println!("{tally}");
    Ok(if tally.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn perms() {
    for p in valid_permutations() {
        println!("{p}");
    }
}

fn report() -> Result<()> {
    let doc = provenance::document(
        serde_json::json!({
            "reference": {
                "trials_per_worker": tetra::cfg::TRIALS_PER_WORKER,
                "repetitions": tetra::cfg::REPETITIONS,
                "workers": tetra::cfg::default_workers(),
            }
        }),
        &[],
    );
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn cli_definition_is_consistent() {
        Cmd::command().debug_assert();
    }

    fn estimate_args(argv: &[&str]) -> EstimateArgs {
        let mut full = vec!["tetra", "estimate"];
        full.extend_from_slice(argv);
        match Cmd::try_parse_from(full).unwrap().action {
            Action::Estimate(args) => args,
            _ => panic!("expected estimate"),
        }
    }

    #[test]
    fn estimate_flags_map_onto_cfg() {
        let cfg = estimate_args(&[
            "--design", "direct", "--algo", "fold", "--trials", "100", "--workers", "2",
            "--repeat", "3", "--seed", "9",
        ])
        .sampler_cfg();
        assert_eq!(cfg.design, Design::Direct);
        assert_eq!(cfg.algorithm, Algorithm::Fold);
        assert_eq!(cfg.trials_per_worker, 100);
        assert_eq!(cfg.workers, 2);
        assert_eq!(cfg.repetitions, 3);
        assert_eq!(cfg.seed, Some(9));
        assert!(!cfg.normalize);
    }

    #[test]
    fn defaults_are_the_reference_conditional_run() {
        let cfg = estimate_args(&[]).sampler_cfg();
        assert_eq!(cfg.design, Design::Conditional);
        assert_eq!(cfg.algorithm, Algorithm::ClosedForm);
        assert_eq!(cfg.trials_per_worker, tetra::cfg::TRIALS_PER_WORKER);
        assert!(cfg.normalize);
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn normalize_overrides_design_default() {
        let cfg = estimate_args(&["--normalize", "false"]).sampler_cfg();
        assert_eq!(cfg.design, Design::Conditional);
        assert!(!cfg.normalize);
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        assert!(Cmd::try_parse_from(["tetra", "estimate", "--algo", "heron"]).is_err());
    }

    #[test]
    fn write_estimate_emits_record_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("runs").join("direct.json");
        let cfg = estimate_args(&[
            "--design", "direct", "--trials", "1000", "--workers", "2", "--repeat", "2",
            "--seed", "1",
        ])
        .sampler_cfg();
        let est = estimate(&cfg, |_, _| {}).unwrap();
        let sidecar = write_estimate(&cfg, &est, &out).unwrap();

        let record: Value = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(record["design"], "direct");
        assert_eq!(record["runs"].as_array().unwrap().len(), 2);
        assert!((record["average"].as_f64().unwrap() - est.average).abs() < 1e-9);

        let prov: Value = serde_json::from_slice(&std::fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(prov["params"]["seed"], 1);
        assert!(prov["params"].get("runs").is_none());
    }
}
