use std::io::Read;
use std::process::ExitCode;

use mincut::{
    min_cut_degree_biased, min_cut_fixed_order, min_cut_random, min_cut_random_trials,
};

enum Strategy {
    DegreeBiased,
    FixedOrder,
    Random { seed: u64 },
    Trials { trials: usize, seed: u64 },
}

struct TestCase {
    name: &'static str,
    n: usize,
    edges: &'static [(usize, usize)],
    expected: usize,
}

const CASES: &[TestCase] = &[
    TestCase {
        name: "Triangle",
        n: 3,
        edges: &[(0, 1), (1, 2), (0, 2)],
        expected: 2,
    },
    TestCase {
        name: "Star",
        n: 5,
        edges: &[(0, 1), (0, 2), (0, 3), (0, 4)],
        expected: 1,
    },
    TestCase {
        name: "Two triangles with bridge",
        n: 6,
        edges: &[(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5), (2, 3)],
        expected: 1,
    },
    TestCase {
        name: "Barbell - double bridge",
        n: 6,
        edges: &[(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5), (2, 3), (2, 3)],
        expected: 2,
    },
    TestCase {
        name: "Square with diagonal",
        n: 4,
        edges: &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)],
        expected: 2,
    },
    TestCase {
        name: "Parallel edges (multiplicity 3)",
        n: 2,
        edges: &[(0, 1), (0, 1), (0, 1)],
        expected: 3,
    },
    TestCase {
        name: "Disconnected graph",
        n: 3,
        edges: &[],
        expected: 0,
    },
    TestCase {
        name: "Graph with isolated vertices",
        n: 5,
        edges: &[(0, 1), (1, 2), (0, 2)],
        expected: 0,
    },
    TestCase {
        name: "Lollipop - K3 + path",
        n: 5,
        edges: &[(0, 1), (1, 2), (0, 2), (2, 3), (3, 4)],
        expected: 1,
    },
    TestCase {
        name: "C4 with one diagonal",
        n: 4,
        edges: &[(0, 1), (1, 2), (2, 3), (3, 0), (1, 3)],
        expected: 2,
    },
    TestCase {
        name: "C5 with one chord",
        n: 5,
        edges: &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0), (0, 2)],
        expected: 2,
    },
    TestCase {
        name: "C6 with symmetric chords",
        n: 6,
        edges: &[
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 5),
            (5, 0),
            (0, 3),
            (1, 4),
        ],
        expected: 2,
    },
    TestCase {
        name: "Complete K4",
        n: 4,
        edges: &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)],
        expected: 3,
    },
    TestCase {
        name: "Complete K5",
        n: 5,
        edges: &[
            (0, 1),
            (0, 2),
            (0, 3),
            (0, 4),
            (1, 2),
            (1, 3),
            (1, 4),
            (2, 3),
            (2, 4),
            (3, 4),
        ],
        expected: 4,
    },
    TestCase {
        name: "K5 minus one edge",
        n: 5,
        edges: &[
            (0, 1),
            (0, 2),
            (0, 3),
            (0, 4),
            (1, 2),
            (1, 3),
            (1, 4),
            (2, 3),
            (2, 4),
        ],
        expected: 3,
    },
    TestCase {
        name: "Triangle with asymmetric multiplicities",
        n: 3,
        edges: &[(0, 1), (0, 1), (0, 1), (1, 2), (2, 0)],
        expected: 2,
    },
    TestCase {
        name: "K4 with pendant via 2 edges",
        n: 5,
        edges: &[
            (0, 1),
            (0, 2),
            (0, 3),
            (1, 2),
            (1, 3),
            (2, 3),
            (3, 4),
            (3, 4),
        ],
        expected: 2,
    },
    TestCase {
        name: "Weighted star graph",
        n: 5,
        edges: &[(0, 1), (0, 1), (0, 2), (0, 2), (0, 2), (0, 3), (0, 4)],
        expected: 1,
    },
    TestCase {
        name: "Dual-path bottleneck",
        n: 8,
        edges: &[
            (0, 1),
            (1, 0),
            (2, 3),
            (3, 2),
            (0, 4),
            (4, 5),
            (5, 2),
            (1, 6),
            (6, 7),
            (7, 3),
        ],
        expected: 2,
    },
    TestCase {
        name: "Bowtie (two triangles, shared vertex)",
        n: 5,
        edges: &[(0, 1), (1, 2), (0, 2), (2, 3), (3, 4), (2, 4)],
        expected: 2,
    },
];

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let strategy = match args.first().map(String::as_str) {
        None => Strategy::DegreeBiased,
        Some("--test") => return run_tests(),
        Some("--fixed") => Strategy::FixedOrder,
        Some("--random") => {
            let Some(seed) = args.get(1).and_then(|s| s.parse().ok()) else {
                return usage("--random needs a numeric seed");
            };
            Strategy::Random { seed }
        }
        Some("--trials") => {
            let trials = args.get(1).and_then(|s| s.parse().ok());
            let seed = args.get(2).and_then(|s| s.parse().ok());
            let (Some(trials), Some(seed)) = (trials, seed) else {
                return usage("--trials needs a trial count and a seed");
            };
            Strategy::Trials { trials, seed }
        }
        Some(other) => return usage(&format!("unknown option {other}")),
    };
    run_stdin(strategy)
}

fn usage(message: &str) -> ExitCode {
    eprintln!("mincut: {message}");
    eprintln!("usage: mincut [--test | --fixed | --random <seed> | --trials <k> <seed>]");
    eprintln!("reads `n m` then m `u v` pairs from stdin, prints the cut value");
    ExitCode::FAILURE
}

/// Reads `n`, `m` and `m` whitespace-separated `u v` pairs from stdin.
fn read_graph() -> Result<(usize, Vec<(usize, usize)>), String> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(|err| format!("cannot read stdin: {err}"))?;
    let mut tokens = input.split_whitespace();

    let n = next_usize(&mut tokens, "vertex count")?;
    let m = next_usize(&mut tokens, "edge count")?;
    let mut edges = Vec::with_capacity(m);
    for _ in 0..m {
        let u = next_usize(&mut tokens, "edge endpoint")?;
        let v = next_usize(&mut tokens, "edge endpoint")?;
        edges.push((u, v));
    }
    Ok((n, edges))
}

fn next_usize<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> Result<usize, String> {
    let token = tokens.next().ok_or_else(|| format!("missing {what}"))?;
    token
        .parse()
        .map_err(|_| format!("invalid {what}: {token}"))
}

fn run_stdin(strategy: Strategy) -> ExitCode {
    let (n, edges) = match read_graph() {
        Ok(graph) => graph,
        Err(message) => {
            eprintln!("mincut: {message}");
            return ExitCode::FAILURE;
        }
    };
    let result = match strategy {
        Strategy::DegreeBiased => min_cut_degree_biased(n, &edges),
        Strategy::FixedOrder => min_cut_fixed_order(n, &edges),
        Strategy::Random { seed } => min_cut_random(n, &edges, seed),
        Strategy::Trials { trials, seed } => min_cut_random_trials(n, &edges, trials, seed),
    };
    match result {
        Ok(cut) => {
            println!("{cut}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("mincut: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_tests() -> ExitCode {
    println!("Running self-test\n");
    let mut failures = 0;
    for case in CASES {
        let result = min_cut_degree_biased(case.n, case.edges);
        let passed = matches!(result.as_ref(), Ok(&cut) if cut == case.expected);
        println!("[{}] {}", if passed { "PASS" } else { "FAIL" }, case.name);
        match result {
            Ok(cut) => println!("  expected: {}, got: {}", case.expected, cut),
            Err(err) => println!("  expected: {}, got error: {err}", case.expected),
        }
        if !passed {
            failures += 1;
        }
    }
    println!("{}", "-".repeat(50));
    if failures == 0 {
        println!("All {} tests PASSED", CASES.len());
        ExitCode::SUCCESS
    } else {
        println!("{failures} tests FAILED");
        ExitCode::FAILURE
    }
}
