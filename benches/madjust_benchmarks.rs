use criterion::{black_box, criterion_group, criterion_main, Criterion};
use madjust::criterion::{MAdjustment, SearchConfig};
use madjust::graph::MGraph;
use madjust::paths::proper_causal_paths;
use madjust::separation::{BayesBall, DSeparation};
use madjust::variable::Variable;
use std::time::Duration;

const MEDIATOR_NODES: [&str; 9] = ["A", "M1", "M2", "Y", "C1", "C2", "C3", "C4", "C5"];

fn mediator_graph() -> MGraph {
    MGraph::from_edges(
        MEDIATOR_NODES,
        &[
            ("A", "M1"),
            ("A", "M2"),
            ("M1", "Y"),
            ("M2", "Y"),
            ("C1", "C3"),
            ("C1", "C4"),
            ("C2", "C4"),
            ("C2", "C5"),
            ("C3", "A"),
            ("C4", "A"),
            ("C4", "M1"),
            ("C4", "Y"),
            ("C5", "Y"),
            ("M1", "M2"),
        ],
    )
    .unwrap()
}

/// Layered graph with `width` confounders per layer and an indicator on every confounder.
fn layered_graph(width: usize) -> (MGraph, Vec<Variable>) {
    let mut g = MGraph::new();
    g.add_node("X").unwrap();
    g.add_node("Y").unwrap();
    g.add_edge("X", "Y").unwrap();
    let mut variables = vec![Variable::observed("X"), Variable::observed("Y")];
    for i in 0..width {
        let (upper, lower, r) = (format!("U{i}"), format!("L{i}"), format!("R_L{i}"));
        g.add_node(upper.as_str()).unwrap();
        g.add_node(lower.as_str()).unwrap();
        g.add_node(r.as_str()).unwrap();
        g.add_edge(&upper, &lower).unwrap();
        g.add_edge(&lower, "X").unwrap();
        g.add_edge(&lower, "Y").unwrap();
        g.add_edge(&upper, &r).unwrap();
        variables.push(Variable::observed(upper));
        variables.push(Variable::partially_observed(lower, r));
    }
    (g, variables)
}

pub fn madjust_benchmarks(c: &mut Criterion) {
    let g = mediator_graph();
    let variables: Vec<Variable> = MEDIATOR_NODES.iter().map(|n| Variable::observed(*n)).collect();

    c.bench_function("proper causal paths", |b| {
        b.iter(|| proper_causal_paths(black_box(&g), black_box("A"), black_box("Y")).unwrap())
    });
    c.bench_function("bayes ball", |b| {
        b.iter(|| {
            BayesBall
                .d_separated(black_box(&g), &["A"], &["Y"], black_box(&["C4", "M1", "M2"][..]))
                .unwrap()
        })
    });

    let evaluator = MAdjustment::new(&g, "A", "Y", &variables).unwrap();
    c.bench_function("mediator search", |b| b.iter(|| evaluator.search().unwrap()));

    let (layered, layered_variables) = layered_graph(6);
    let sequential = MAdjustment::new(&layered, "X", "Y", &layered_variables).unwrap();
    let parallel = MAdjustment::new(&layered, "X", "Y", &layered_variables)
        .unwrap()
        .with_config(SearchConfig::default().set_parallel(true));

    let mut group = c.benchmark_group("layered_search");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(20));
    group.bench_function("sequential", |b| b.iter(|| sequential.search().unwrap()));
    group.bench_function("parallel", |b| b.iter(|| parallel.search().unwrap()));
    group.finish();
}

criterion_group!(benches, madjust_benchmarks);
criterion_main!(benches);
