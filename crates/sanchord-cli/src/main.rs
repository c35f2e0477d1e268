use sanchord::path::fmt_path;
use sanchord::shape::{
    AnnularArc, ArrowTarget, ChordRibbon, DirectionArrow, DropKind, DropWedge, NodeArc, SpanKind,
    ThroughputLens,
};
use sanchord::{ChordConfig, ChordLayout, ComputedLayout, FlowMatrix, PathData};
use serde::Deserialize;
use std::fmt::Write as _;
use std::io::{Read, Write as _};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
    Layout(sanchord::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Layout(err) => write!(f, "{err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<sanchord::Error> for CliError {
    fn from(value: sanchord::Error) -> Self {
        Self::Layout(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Layout,
    Render,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    out: Option<String>,
}

/// Document accepted on stdin or from a file.
#[derive(Deserialize)]
struct Input {
    matrix: FlowMatrix,
    #[serde(default)]
    config: ChordConfig,
}

fn usage() -> &'static str {
    "sanchord-cli\n\
\n\
USAGE:\n\
  sanchord-cli [layout] [--pretty] [--out <path>] [<path>|-]\n\
  sanchord-cli render [--out <path>] [<path>|-]\n\
\n\
INPUT:\n\
  A JSON object {\"matrix\": [[...], ...], \"config\": {...}}. `config` is optional;\n\
  see ChordConfig for the accepted keys (nodePadding, ioPadding, sortNodes, radius, ...).\n\
\n\
NOTES:\n\
  - Input defaults to stdin when no path is provided.\n\
  - `layout` prints the computed node and chord angles as JSON.\n\
  - `render` prints a standalone SVG document."
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "layout" => args.command = Command::Layout,
            "render" => args.command = Command::Render,
            "--pretty" => args.pretty = true,
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_output(out: Option<&str>, text: &str) -> Result<(), CliError> {
    match out {
        Some(path) => std::fs::write(path, text)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

fn compute(matrix: FlowMatrix, cfg: &ChordConfig) -> Result<ChordLayout, CliError> {
    Ok(ChordLayout::with_config(matrix, cfg.layout_config()?)?)
}

fn render_svg(layout: &ComputedLayout, cfg: &ChordConfig) -> String {
    let ring_outer = cfg.radius + cfg.ring_width;
    let extent = ring_outer.max(cfg.drop_outer_radius) + 8.0;
    let size = fmt_path(extent * 2.0);

    let ring = NodeArc::new()
        .with_radius(ring_outer)
        .with_kind(SpanKind::Total)
        .with_primitive(AnnularArc::new(cfg.ring_width));
    let ribbon = ChordRibbon::new().with_radius(cfg.radius);
    let lens = ThroughputLens::new()
        .with_radius(cfg.radius)
        .with_io_radius(cfg.io_radius)
        .with_style(cfg.lens_style);
    let drop_off = DropWedge::new(DropKind::DropOff)
        .with_inner_radius(cfg.drop_inner_radius)
        .with_outer_radius(cfg.drop_outer_radius);
    let drop_in = drop_off.with_kind(DropKind::DropIn);
    let arrows = DirectionArrow::new()
        .with_inner_radius(cfg.radius)
        .with_outer_radius(ring_outer)
        .with_min_angle(cfg.arrow_min_angle)
        .with_max_angle(cfg.arrow_max_angle)
        .with_fraction(cfg.arrow_fraction)
        .with_target(ArrowTarget::Both);

    let mut out = String::new();
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="{min} {min} {size} {size}">"#,
        min = fmt_path(-extent),
    );

    out.push_str(r#"<g class="chords">"#);
    for chord in &layout.chords {
        let _ = write!(
            out,
            r#"<path class="chord" data-source="{}" data-target="{}" d="{}"/>"#,
            chord.source.out_index,
            chord.target.in_index,
            ribbon.path(chord)
        );
    }
    out.push_str("</g>");

    out.push_str(r#"<g class="nodes">"#);
    for node in &layout.nodes {
        let _ = write!(out, r#"<g class="node" data-index="{}">"#, node.index);
        push_path(&mut out, "ring", Some(ring.path(node)));
        push_path(&mut out, "lens", lens.path(node));
        push_path(&mut out, "drop-off", drop_off.path(node));
        push_path(&mut out, "drop-in", drop_in.path(node));
        push_path(&mut out, "arrows", arrows.path(node));
        out.push_str("</g>");
    }
    out.push_str("</g></svg>");
    out
}

fn push_path(out: &mut String, class: &str, path: Option<PathData>) {
    let Some(path) = path else {
        return;
    };
    if path.is_empty() {
        return;
    }
    let _ = write!(out, r#"<path class="{class}" d="{path}"/>"#);
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let Input { matrix, config } = serde_json::from_str(&text)?;
    let chord_layout = compute(matrix, &config)?;
    let layout = chord_layout.layout();

    match args.command {
        Command::Layout => {
            let json = if args.pretty {
                serde_json::to_string_pretty(layout)?
            } else {
                serde_json::to_string(layout)?
            };
            write_output(args.out.as_deref(), &json)
        }
        Command::Render => {
            let svg = render_svg(layout, &config);
            write_output(args.out.as_deref(), &svg)
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
