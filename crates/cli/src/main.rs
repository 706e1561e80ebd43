use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use rayon::prelude::*;
use safezone::api::{compute_hull_par, compute_hull_with, Hull, HullCfg};
use safezone::Vec2;
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod points;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex-hull safe zones: build hulls and classify query points")]
struct Cmd {
    /// Log at DEBUG instead of INFO
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull of a point file and write it as JSON
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[command(flatten)]
        hull: HullArgs,
    },
    /// Compute the hull of the sites, then classify every query point against it
    Classify {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        queries: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[command(flatten)]
        hull: HullArgs,
    },
    /// Print the provenance header (code revision, library version)
    Report,
}

#[derive(Args, Clone, Copy, Debug)]
struct HullArgs {
    /// Orientation tolerance; 0 means exact
    #[arg(long, default_value_t = 0.0)]
    eps: f64,
    /// Partition size solved by brute force
    #[arg(long, default_value_t = 5)]
    leaf_size: usize,
    /// Fork the divide-and-conquer branches onto the rayon pool
    #[arg(long)]
    parallel: bool,
}

impl HullArgs {
    fn cfg(&self) -> HullCfg {
        HullCfg {
            eps_orient: self.eps,
            leaf_size: self.leaf_size,
        }
    }

    fn params(&self) -> serde_json::Value {
        json!({
            "eps": self.eps,
            "leaf_size": self.leaf_size,
            "parallel": self.parallel,
        })
    }

    fn build(&self, sites: &[Vec2<f64>]) -> Result<Hull> {
        let hull = if self.parallel {
            compute_hull_par(sites, self.cfg())?
        } else {
            compute_hull_with(sites, self.cfg())?
        };
        Ok(hull)
    }
}

#[derive(Serialize)]
struct HullDoc {
    vertices: Vec<[f64; 2]>,
    ring: Vec<[f64; 2]>,
    area: f64,
    degenerate: bool,
}

impl From<&Hull> for HullDoc {
    fn from(h: &Hull) -> Self {
        let xy = |p: &Vec2<f64>| [p.x, p.y];
        Self {
            vertices: h.vertices().iter().map(xy).collect(),
            ring: h.ring().iter().map(xy).collect(),
            area: h.area(),
            degenerate: h.is_degenerate(),
        }
    }
}

#[derive(Serialize)]
struct QueryResult {
    x: f64,
    y: f64,
    inside: bool,
}

#[derive(Serialize)]
struct ClassifyDoc {
    hull: HullDoc,
    queries: Vec<QueryResult>,
    inside_count: usize,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Hull { input, out, hull } => run_hull(&input, &out, hull),
        Action::Classify {
            input,
            queries,
            out,
            hull,
        } => run_classify(&input, &queries, &out, hull),
        Action::Report => report(),
    }
}

fn run_hull(input: &Path, out: &Path, args: HullArgs) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), ?args, "hull");
    let sites = points::read_points(input)?;
    let hull = args.build(&sites)?;
    tracing::info!(
        sites = sites.len(),
        vertices = hull.len(),
        degenerate = hull.is_degenerate(),
        "hull_done"
    );

    write_json(out, &HullDoc::from(&hull))?;
    provenance::write_sidecar(
        out,
        provenance::Payload::new(args.params()).with_input(input.to_string_lossy()),
    )?;
    Ok(())
}

fn run_classify(input: &Path, queries: &Path, out: &Path, args: HullArgs) -> Result<()> {
    tracing::info!(
        input = %input.display(),
        queries = %queries.display(),
        out = %out.display(),
        ?args,
        "classify"
    );
    let sites = points::read_points(input)?;
    let hull = args.build(&sites)?;
    if hull.is_degenerate() {
        tracing::warn!(vertices = hull.len(), "hull encloses no area; every query is outside");
    }
    let qs = points::read_points(queries)?;
    let results: Vec<QueryResult> = qs
        .par_iter()
        .map(|&q| QueryResult {
            x: q.x,
            y: q.y,
            inside: hull.contains(q),
        })
        .collect();
    let inside_count = results.iter().filter(|r| r.inside).count();
    tracing::info!(queries = results.len(), inside_count, "classify_done");

    let doc = ClassifyDoc {
        hull: HullDoc::from(&hull),
        queries: results,
        inside_count,
    };
    write_json(out, &doc)?;
    provenance::write_sidecar(
        out,
        provenance::Payload::new(args.params())
            .with_input(input.to_string_lossy())
            .with_input(queries.to_string_lossy()),
    )?;
    Ok(())
}

fn report() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&provenance::header())?);
    Ok(())
}

fn write_json<T: Serialize>(out: &Path, doc: &T) -> Result<()> {
    if out.is_dir() {
        bail!("output path {} is a directory", out.display());
    }
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::fs;
    use tempfile::tempdir;

    const SITES: &str = "x,y\n0,0\n0,10\n10,10\n10,0\n5,5\n";

    fn defaults() -> HullArgs {
        HullArgs {
            eps: 0.0,
            leaf_size: 5,
            parallel: false,
        }
    }

    #[test]
    fn hull_command_writes_document_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("sites.csv");
        fs::write(&input, SITES).unwrap();
        let out = dir.path().join("out/hull.json");
        run_hull(&input, &out, defaults()).unwrap();

        let doc: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(doc["vertices"].as_array().unwrap().len(), 4);
        assert_eq!(doc["ring"][1], json!([10.0, 0.0]));
        assert_eq!(doc["area"], 100.0);
        assert_eq!(doc["degenerate"], false);
        assert!(dir.path().join("out/hull.provenance.json").exists());
    }

    #[test]
    fn classify_command_counts_inside_queries() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("sites.csv");
        let queries = dir.path().join("queries.csv");
        fs::write(&input, SITES).unwrap();
        fs::write(&queries, "x,y\n5,5\n15,15\n1,9\n-3,4\n").unwrap();
        let out = dir.path().join("classified.json");
        let args = HullArgs {
            parallel: true,
            ..defaults()
        };
        run_classify(&input, &queries, &out, args).unwrap();

        let doc: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        let inside: Vec<bool> = doc["queries"]
            .as_array()
            .unwrap()
            .iter()
            .map(|q| q["inside"].as_bool().unwrap())
            .collect();
        assert_eq!(inside, vec![true, false, true, false]);
        assert_eq!(doc["inside_count"], 2);
        let prov: Value = serde_json::from_slice(
            &fs::read(dir.path().join("classified.provenance.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(prov["inputs"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn negative_eps_is_reported() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("sites.csv");
        fs::write(&input, SITES).unwrap();
        let args = HullArgs {
            eps: -1.0,
            ..defaults()
        };
        let err = run_hull(&input, &dir.path().join("h.json"), args).unwrap_err();
        assert!(err.to_string().contains("tolerance"), "{err}");
    }

    #[test]
    fn cli_parses_flattened_hull_flags() {
        let cmd = Cmd::try_parse_from([
            "cli", "hull", "--input", "a.csv", "--out", "b.json", "--eps", "1e-9", "--parallel",
        ])
        .unwrap();
        match cmd.action {
            Action::Hull { hull, .. } => {
                assert_eq!(hull.eps, 1e-9);
                assert_eq!(hull.leaf_size, 5);
                assert!(hull.parallel);
            }
            _ => panic!("expected hull"),
        }
    }
}
