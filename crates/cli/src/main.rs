use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use figures::api::{
    describe, draw_many, parse_shape, reference_gallery, svg_document, AreaSummary, DrawCfg,
    KindChoice, RawShape, SampleCfg, Shape, ShapeKind,
};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod batch;
mod provenance;
mod report;

use provenance::{write_sidecar, Payload};
use report::{Rejected, Report};

#[derive(Parser)]
#[command(name = "figures")]
#[command(about = "Evaluate, list, and draw geometric figures")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Validate one figure and print its summary line
    Eval {
        #[command(flatten)]
        shape: ShapeArgs,
    },
    /// Print an area summary for a CSV listing (or the reference gallery)
    Summary {
        /// CSV with header kind,color,width,height,side_a,side_b,side_c,radius
        #[arg(long)]
        input: Option<PathBuf>,
        /// Write a JSON report (plus provenance sidecar) here
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Render one figure as an SVG document
    Draw {
        #[command(flatten)]
        shape: ShapeArgs,
        #[arg(long)]
        out: PathBuf,
        /// Border around the figure, in pixels
        #[arg(long, default_value_t = 10.0)]
        margin: f64,
    },
    /// Print reproducible random figures
    Sample {
        #[arg(long, default_value_t = 5)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Restrict to one kind (rectangle, triangle, circle)
        #[arg(long)]
        kind: Option<String>,
    },
}

/// Raw figure fields as typed by the user; parsing happens in the shape model.
#[derive(Args)]
struct ShapeArgs {
    /// rectangle, triangle, or circle
    #[arg(long)]
    kind: Option<String>,
    /// Display color (defaults to burgundy)
    #[arg(long)]
    color: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    width: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    height: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    side_a: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    side_b: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    side_c: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    radius: Option<String>,
}

impl ShapeArgs {
    fn to_raw(&self) -> RawShape {
        let mut raw = RawShape {
            kind: self.kind.clone(),
            color: self.color.clone().unwrap_or_default(),
            ..RawShape::default()
        };
        let fields = [
            ("width", &self.width),
            ("height", &self.height),
            ("side_a", &self.side_a),
            ("side_b", &self.side_b),
            ("side_c", &self.side_c),
            ("radius", &self.radius),
        ];
        for (name, value) in fields {
            if let Some(v) = value {
                raw.fields.insert(name.to_string(), v.clone());
            }
        }
        raw
    }

    fn parse(&self) -> Result<Shape> {
        match parse_shape(&self.to_raw()) {
            Ok(shape) => Ok(shape),
            Err(err) => {
                tracing::warn!(error = %err, "figure rejected");
                bail!(err)
            }
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Eval { shape } => eval(&shape),
        Action::Summary { input, out } => summary(input, out),
        Action::Draw { shape, out, margin } => draw(&shape, out, margin),
        Action::Sample { count, seed, kind } => sample(count, seed, kind),
    }
}

fn eval(args: &ShapeArgs) -> Result<()> {
    let shape = args.parse()?;
    tracing::info!(kind = %shape.kind(), "eval");
    println!("{}", describe(&shape));
    Ok(())
}

fn summary(input: Option<PathBuf>, out: Option<PathBuf>) -> Result<()> {
    let mut rejected = Vec::new();
    let shapes = match &input {
        Some(path) => {
            tracing::info!(input = %path.display(), "summary");
            let mut shapes = Vec::new();
            for outcome in batch::load_csv(path)? {
                match outcome.result {
                    Ok(shape) => shapes.push(shape),
                    Err(err) => {
                        tracing::warn!(row = outcome.row, error = %err, "row rejected");
                        rejected.push(Rejected {
                            row: outcome.row,
                            error: err.to_string(),
                        });
                    }
                }
            }
            shapes
        }
        None => {
            tracing::info!("summary of reference gallery");
            reference_gallery()
        }
    };

    let area_summary = AreaSummary::from_shapes(&shapes);
    print!("{area_summary}");

    if let Some(out) = out {
        let n_rejected = rejected.len();
        let report = Report::new(&area_summary, &shapes, rejected);
        create_parent(&out)?;
        std::fs::write(&out, serde_json::to_vec_pretty(&report)?)
            .with_context(|| format!("writing {}", out.display()))?;
        let params = json!({
            "input": input.as_ref().map(|p| p.to_string_lossy().into_owned()),
            "accepted": shapes.len(),
            "rejected": n_rejected
        });
        write_sidecar(&out, Payload::new("summary", &shapes, params))?;
        tracing::info!(out = %out.display(), "report written");
    }
    Ok(())
}

fn draw(args: &ShapeArgs, out: PathBuf, margin: f64) -> Result<()> {
    let shape = args.parse()?;
    let cfg = DrawCfg {
        margin_px: margin,
        ..DrawCfg::default()
    };
    create_parent(&out)?;
    std::fs::write(&out, svg_document(&shape, &cfg))
        .with_context(|| format!("writing {}", out.display()))?;
    let params = json!({
        "figure": describe(&shape),
        "margin_px": margin
    });
    write_sidecar(&out, Payload::new("draw", std::slice::from_ref(&shape), params))?;
    tracing::info!(kind = %shape.kind(), out = %out.display(), "draw");
    Ok(())
}

fn sample(count: usize, seed: u64, kind: Option<String>) -> Result<()> {
    let kind = match kind {
        Some(k) => KindChoice::Fixed(k.parse::<ShapeKind>()?),
        None => KindChoice::Uniform,
    };
    let cfg = SampleCfg {
        kind,
        ..SampleCfg::default()
    };
    tracing::info!(count, seed, "sample");
    for shape in draw_many(cfg, seed, count) {
        println!("{}", describe(&shape));
    }
    Ok(())
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}
