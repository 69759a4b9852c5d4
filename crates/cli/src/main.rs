use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::{json, Value};
use shapebench::api;
use shapebench::document::ShapeDocument;
use shapebench::random::{generate, GenCfg};
use shapebench::{
    ComposedShape, Encoding, EngineError, ExecCfg, FlatShape, GenericShape, Representation,
    ShapeError, ShapeKind,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod provenance;
mod sweep;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Batch shape operations under different layouts and thread counts")]
struct Cmd {
    /// Optional run label; propagated to provenance sidecars and logs
    #[arg(long, global = true)]
    label: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Write a seeded random shape document
    Generate(GenerateArgs),
    /// Run one operation over a shape document
    Run(RunArgs),
    /// Time every operation across thread counts and write a table
    Sweep(SweepArgs),
    /// Rewrite a shape document in another layout
    Convert(ConvertArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args)]
struct GenerateArgs {
    #[arg(long, default_value_t = 1000)]
    count: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value = "flat")]
    mode: Representation,
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Op {
    Filter,
    Mutate,
    Occupation,
}

#[derive(Args)]
struct RunArgs {
    #[arg(long, value_enum)]
    op: Op,
    #[arg(long, default_value = "flat")]
    mode: Representation,
    /// 0 runs pipelined on the calling thread; N >= 1 uses N workers
    #[arg(long, default_value_t = 0)]
    threads: usize,
    /// Kind kept by `filter` (circle or rectangle)
    #[arg(long)]
    kind: Option<ShapeKind>,
    #[arg(long)]
    input: PathBuf,
    /// Result JSON path; printed to stdout when absent
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args)]
struct SweepArgs {
    #[arg(long)]
    input: PathBuf,
    #[arg(long, default_value = "flat")]
    mode: Representation,
    #[arg(long, value_delimiter = ',', default_value = "0,1,2,4")]
    threads: Vec<usize>,
    #[arg(long, default_value_t = 3)]
    repeat: usize,
    #[arg(long, default_value = "circle")]
    kind: ShapeKind,
    /// Table path (.csv or .parquet)
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args)]
struct ConvertArgs {
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    from: Representation,
    #[arg(long)]
    to: Representation,
    #[arg(long)]
    out: PathBuf,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Generate(args) => generate_cmd(&args),
        Action::Run(args) => run_cmd(&args, cmd.label),
        Action::Sweep(args) => sweep_cmd(&args, cmd.label),
        Action::Convert(args) => convert_cmd(&args),
        Action::Report => report(cmd.label),
    }
}

fn generate_cmd(args: &GenerateArgs) -> Result<()> {
    let cfg = GenCfg {
        count: args.count,
        ..GenCfg::default()
    };
    let shapes = generate(&cfg, args.seed)?;
    match args.mode {
        Representation::Flat => ShapeDocument::<FlatShape>::from_shapes(&shapes).save(&args.out),
        Representation::Composed => {
            ShapeDocument::<ComposedShape>::from_shapes(&shapes).save(&args.out)
        }
        Representation::Generic => {
            ShapeDocument::<GenericShape>::from_shapes(&shapes).save(&args.out)
        }
    }?;
    tracing::info!(count = args.count, seed = args.seed, mode = %args.mode, out = %args.out.display(), "generate");
    Ok(())
}

fn run_cmd(args: &RunArgs, label: Option<String>) -> Result<()> {
    match args.mode {
        Representation::Flat => run_in::<FlatShape>(args, label),
        Representation::Composed => run_in::<ComposedShape>(args, label),
        Representation::Generic => run_in::<GenericShape>(args, label),
    }
}

fn load<E: Encoding>(path: &Path) -> Result<ShapeDocument<E>> {
    ShapeDocument::<E>::load(path)
        .with_context(|| format!("loading {} as {} shapes", path.display(), E::REPR))
}

fn run_in<E: Encoding>(args: &RunArgs, label: Option<String>) -> Result<()> {
    let doc = load::<E>(&args.input)?;
    let cfg = ExecCfg::parallel(args.threads);
    let ctx = || format!("{:?} over {} ({} threads)", args.op, args.input.display(), args.threads);
    let (result, elapsed_ms) = match args.op {
        Op::Filter => {
            let kind = args.kind.context("--kind is required for --op filter")?;
            let r = api::filter(&doc.shapes, kind, cfg).map_err(|e| engine_failure(e, ctx()))?;
            (serde_json::to_value(&r)?, r.elapsed_ms)
        }
        Op::Mutate => {
            let r = api::mutation(&doc.shapes, cfg).map_err(|e| engine_failure(e, ctx()))?;
            (serde_json::to_value(&r)?, r.elapsed_ms)
        }
        Op::Occupation => {
            let r = api::occupation(&doc.shapes, cfg).map_err(|e| engine_failure(e, ctx()))?;
            (serde_json::to_value(&r)?, r.elapsed_ms)
        }
    };
    let mode = E::REPR;
    tracing::info!(
        op = ?args.op,
        mode = %mode,
        threads = args.threads,
        shapes = doc.len(),
        elapsed_ms,
        label = ?label,
        "run"
    );

    match &args.out {
        Some(out) => {
            write_json(out, &result)?;
            let payload = Payload::new("run", mode, &args.input, doc.len())
                .threads(&[args.threads])
                .extra(json!({
                    "op": format!("{:?}", args.op).to_lowercase(),
                    "kind": args.kind.map(|k| k.to_string()),
                }))
                .with_label(label);
            provenance::write_sidecar(out, &payload)?;
        }
        None => println!("{}", serde_json::to_string_pretty(&result)?),
    }
    Ok(())
}

fn sweep_cmd(args: &SweepArgs, label: Option<String>) -> Result<()> {
    let (rows, shapes) = match args.mode {
        Representation::Flat => sweep_in::<FlatShape>(args)?,
        Representation::Composed => sweep_in::<ComposedShape>(args)?,
        Representation::Generic => sweep_in::<GenericShape>(args)?,
    };
    let mut df = sweep::to_frame(args.mode.name(), &rows)?;
    sweep::write_table(&mut df, &args.out)?;
    let summary = sweep::summarize(&df)?;
    println!("{summary}");
    tracing::info!(rows = df.height(), out = %args.out.display(), "sweep");

    let payload = Payload::new("sweep", args.mode, &args.input, shapes)
        .threads(&args.threads)
        .extra(json!({ "repeat": args.repeat, "kind": args.kind.to_string() }))
        .with_label(label);
    provenance::write_sidecar(&args.out, &payload)?;
    Ok(())
}

fn sweep_in<E: Encoding>(args: &SweepArgs) -> Result<(Vec<sweep::SweepRow>, usize)> {
    let doc = load::<E>(&args.input)?;
    let rows = sweep::sweep(&doc.shapes, &args.threads, args.repeat, args.kind)
        .map_err(|e| engine_failure(e, format!("sweeping {}", args.input.display())))?;
    Ok((rows, doc.len()))
}

fn convert_cmd(args: &ConvertArgs) -> Result<()> {
    match args.from {
        Representation::Flat => convert_from::<FlatShape>(args),
        Representation::Composed => convert_from::<ComposedShape>(args),
        Representation::Generic => convert_from::<GenericShape>(args),
    }
}

fn convert_from<A: Encoding>(args: &ConvertArgs) -> Result<()> {
    let doc = load::<A>(&args.input)?;
    match args.to {
        Representation::Flat => convert_to::<A, FlatShape>(&doc, &args.out),
        Representation::Composed => convert_to::<A, ComposedShape>(&doc, &args.out),
        Representation::Generic => convert_to::<A, GenericShape>(&doc, &args.out),
    }
}

fn convert_to<A: Encoding, B: Encoding>(doc: &ShapeDocument<A>, out: &Path) -> Result<()> {
    let converted: ShapeDocument<B> = doc
        .transcode()
        .with_context(|| format!("converting {} to {}", A::REPR, B::REPR))?;
    converted.save(out)?;
    let (from, to) = (A::REPR, B::REPR);
    tracing::info!(from = %from, to = %to, shapes = converted.len(), "convert");
    Ok(())
}

fn report(label: Option<String>) -> Result<()> {
    let obj = provenance::block(label.as_deref());
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

/// Log which input shape was rejected, then attach `what` as context.
fn engine_failure(err: EngineError, what: String) -> anyhow::Error {
    if let Some(index) = err.shape_error().and_then(ShapeError::index) {
        tracing::error!(index, error = %err, "rejected shape");
    }
    anyhow::Error::new(err).context(what)
}

/// Write to a sibling temp file first so a failed write never clobbers a previous result.
fn write_json(out: &Path, value: &Value) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let tmp = out.with_extension("json.tmp");
    std::fs::write(&tmp, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", tmp.display()))?;
    std::fs::rename(&tmp, out).with_context(|| format!("replacing {}", out.display()))?;
    Ok(())
}
