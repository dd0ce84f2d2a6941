//! Condom Use and AIDS – M-Adjustment with Missing Covariates
//! ===========================================================
//! Estimate the effect of condom use on AIDS when the number of partners,
//! drug use and condom use itself are only partially recorded.
//!
//! The same causal structure is searched twice: once with every indicator
//! missing completely at random, and once with indicators driven by the
//! variables they mask. Only the first admits an adjustment set.
//!
//! ```bash
//! cargo run --release --example aids_graph
//! ```

use madjust::criterion::{JsonIO, MAdjProblem, SearchConfig};
use madjust::{MGraph, Variable};
use std::error::Error;

const NODES: [&str; 9] = [
    "Age",
    "Partners",
    "Income",
    "Drug",
    "Condom",
    "AIDS",
    "R_Partners",
    "R_Drug",
    "R_Condom",
];

const EDGES: [(&str, &str); 11] = [
    ("Age", "Partners"),
    ("Age", "Income"),
    ("Age", "Drug"),
    ("Age", "Condom"),
    ("Partners", "AIDS"),
    ("Income", "AIDS"),
    ("Income", "Drug"),
    ("Income", "Condom"),
    ("Drug", "AIDS"),
    ("Drug", "Condom"),
    ("Condom", "AIDS"),
];

const MNAR_EDGES: [(&str, &str); 4] = [
    ("Partners", "R_Partners"),
    ("Drug", "R_Drug"),
    ("Condom", "R_Condom"),
    ("Age", "R_Condom"),
];

fn variables() -> Vec<Variable> {
    vec![
        Variable::observed("Age"),
        Variable::partially_observed("Partners", "R_Partners"),
        Variable::observed("Income"),
        Variable::partially_observed("Drug", "R_Drug"),
        Variable::partially_observed("Condom", "R_Condom"),
        Variable::observed("AIDS"),
    ]
}

fn report(label: &str, problem: &MAdjProblem) -> Result<(), Box<dyn Error>> {
    let evaluator = problem.evaluator()?;
    println!("\n{label}");
    println!("  proper causal paths:");
    for path in evaluator.paths() {
        println!("    {path}");
    }
    println!("  excluded: {:?}", evaluator.exclusion_set());

    let result = problem.solve(&SearchConfig::default())?;
    println!(
        "  {} candidates, {} valid",
        result.stats.candidates,
        result.valid_sets.len()
    );
    for set in &result.valid_sets {
        println!("    {set:?}");
    }
    match &result.best_set {
        Some(best) => println!("  best: {best:?}"),
        None => println!(
            "  no valid set (rejections: c1={}, c2={}, c3={}, c4={})",
            result.stats.path_exclusion,
            result.stats.proper_backdoor,
            result.stats.outcome_missingness,
            result.stats.ancestral
        ),
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // ------------------------------------------------------------------
    // 1. Indicators missing completely at random
    // ------------------------------------------------------------------
    let mcar = MAdjProblem::new(MGraph::from_edges(NODES, &EDGES)?, "Condom", "AIDS", variables());
    report("Indicators independent of every variable", &mcar)?;

    // ------------------------------------------------------------------
    // 2. Self-masking indicators
    // ------------------------------------------------------------------
    let mut graph = MGraph::from_edges(NODES, &EDGES)?;
    for (source, sink) in MNAR_EDGES {
        graph.add_edge(source, sink)?;
    }
    let mnar = MAdjProblem::new(graph, "Condom", "AIDS", variables());
    report("Indicators caused by the variables they mask", &mnar)?;

    // ------------------------------------------------------------------
    // 3. The problem definition round-trips through JSON
    // ------------------------------------------------------------------
    let json = mnar.json_dump()?;
    let reloaded = MAdjProblem::from_json(&json)?;
    println!("\nReloaded problem has {} edges.", reloaded.graph.edge_count());
    Ok(())
}
