#[cfg(feature = "cairo-backend")]
use dashboard_charts::api::{ChartConfig, ChartEngine, ProgressRing, ProgressRingConfig};
#[cfg(feature = "cairo-backend")]
use dashboard_charts::core::{ChartKind, DataPoint, ProgressSize};
#[cfg(feature = "cairo-backend")]
use dashboard_charts::render::CairoRenderer;
#[cfg(feature = "cairo-backend")]
use std::fs;
#[cfg(feature = "cairo-backend")]
use std::path::PathBuf;
#[cfg(feature = "cairo-backend")]
use tracing::info;

#[cfg(feature = "cairo-backend")]
const DEFAULT_OUTPUT_DIR: &str = "target/dashboard-pngs";

#[cfg(feature = "cairo-backend")]
fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cairo-backend"))]
fn main() {
    eprintln!("this tool requires feature `cairo-backend`");
    std::process::exit(1);
}

#[cfg(feature = "cairo-backend")]
struct CliArgs {
    out_dir: PathBuf,
    hover: Option<(f64, f64)>,
}

#[cfg(feature = "cairo-backend")]
fn run() -> Result<(), String> {
    let _ = dashboard_charts::telemetry::init_default_tracing();
    let args = parse_args()?;
    fs::create_dir_all(&args.out_dir)
        .map_err(|err| format!("failed to create {}: {err}", args.out_dir.display()))?;

    let monthly = vec![
        DataPoint::new("Jan", 120.0),
        DataPoint::new("Feb", 180.0),
        DataPoint::new("Mar", 150.0),
        DataPoint::new("Apr", 210.0),
        DataPoint::new("May", 260.0),
        DataPoint::new("Jun", 240.0),
        DataPoint::new("Jul", 310.0),
    ];
    let traffic = vec![
        DataPoint::new("Direct", 45.0),
        DataPoint::new("Search", 30.0),
        DataPoint::new("Social", 15.0),
        DataPoint::new("Referral", 10.0),
    ];

    for (kind, name, points) in [
        (ChartKind::Line, "line.png", monthly.clone()),
        (ChartKind::Bar, "bar.png", monthly),
        (ChartKind::Pie, "pie.png", traffic),
    ] {
        render_chart(kind, points, args.hover, &args.out_dir.join(name))?;
    }

    let ring = ProgressRing::new(
        ProgressRingConfig::new(68.0, 100.0)
            .with_label("Storage")
            .with_size(ProgressSize::Large),
    )
    .map_err(|err| err.to_string())?;
    let mut renderer = CairoRenderer::for_viewport(ring.viewport()).map_err(|err| err.to_string())?;
    ring.render(&mut renderer).map_err(|err| err.to_string())?;
    let path = args.out_dir.join("progress.png");
    renderer.write_png(&path).map_err(|err| err.to_string())?;
    info!(path = %path.display(), "wrote progress ring");

    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn render_chart(
    kind: ChartKind,
    points: Vec<DataPoint>,
    hover: Option<(f64, f64)>,
    path: &std::path::Path,
) -> Result<(), String> {
    let config = ChartConfig::default_for(kind);
    let renderer = CairoRenderer::for_viewport(config.viewport).map_err(|err| err.to_string())?;
    let mut engine = ChartEngine::new(renderer, kind, config).map_err(|err| err.to_string())?;
    engine.set_data(points).map_err(|err| err.to_string())?;
    if let Some((x, y)) = hover {
        engine.pointer_move(x, y).map_err(|err| err.to_string())?;
    }
    if !engine.render().map_err(|err| err.to_string())? {
        return Err(format!("{kind:?} chart had nothing to draw"));
    }

    let Some(renderer) = engine.renderer() else {
        return Err("renderer unmounted".to_owned());
    };
    renderer.write_png(path).map_err(|err| err.to_string())?;
    info!(
        path = %path.display(),
        backend = renderer.backend_name(),
        lines = renderer.last_stats().lines_drawn,
        texts = renderer.last_stats().texts_drawn,
        "wrote chart"
    );
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn parse_args() -> Result<CliArgs, String> {
    let mut out_dir = PathBuf::from(DEFAULT_OUTPUT_DIR);
    let mut hover = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--out-dir" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for `--out-dir`".to_owned())?;
                out_dir = PathBuf::from(value);
            }
            "--hover" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for `--hover`".to_owned())?;
                hover = Some(parse_point(&value)?);
            }
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    Ok(CliArgs { out_dir, hover })
}

#[cfg(feature = "cairo-backend")]
fn parse_point(value: &str) -> Result<(f64, f64), String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{value}`"))?;
    let x = x
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("invalid x `{x}`: {err}"))?;
    let y = y
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("invalid y `{y}`: {err}"))?;
    Ok((x, y))
}

#[cfg(feature = "cairo-backend")]
fn usage_message() -> String {
    format!(
        "usage: render_dashboard_pngs [--out-dir <dir>] [--hover <x,y>]\n\
         \n\
         Renders sample line, bar, pie and progress-ring charts to PNG.\n\
         Defaults: --out-dir {DEFAULT_OUTPUT_DIR}"
    )
}
