use std::error::Error;
use std::fs;

use gnuplot::*;
use tracing::info;
use tracing_subscriber::EnvFilter;
use trajectory_paths::figure::{accelerated_path_figure, stretched_curve_figure, Figure as Plot};
use trajectory_paths::scenario::{
    cases_from_json, default_accelerated_case, default_stretched_cases, StretchedCase,
};

fn draw(plot: &Plot) -> Result<(), Box<dyn Error>> {
    let mut fg = Figure::new();
    {
        let axes = fg.axes2d();
        axes.set_title(&plot.title, &[]);
        axes.set_x_label(&plot.x_label, &[]);
        axes.set_y_label(&plot.y_label, &[]);
        axes.set_x_grid(plot.grid);
        axes.set_y_grid(plot.grid);

        for series in &plot.series {
            let caption = series.label.as_deref().unwrap_or("");
            axes.lines_points(
                &series.trajectory.x,
                &series.trajectory.y,
                &[Caption(caption), PointSymbol('O'), PointSize(0.5)],
            );
        }

        for markers in &plot.markers {
            let xs: Vec<f64> = markers.points.iter().map(|p| p.x).collect();
            let ys: Vec<f64> = markers.points.iter().map(|p| p.y).collect();
            axes.points(
                &xs,
                &ys,
                &[Caption(&markers.label), Color(markers.color.as_str().into()), PointSymbol('O')],
            );
        }
    }

    fg.show().map_err(|e| format!("Failed to display plot: {e}"))?;
    Ok(())
}

/// Optional first argument: a JSON file holding a list of stretched curve cases.
fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cases: Vec<StretchedCase> = match std::env::args().nth(1) {
        Some(path) => cases_from_json(&fs::read_to_string(path)?)
            .map_err(|e| format!("Failed to read cases: {e}"))?,
        None => default_stretched_cases(),
    };

    let curves = stretched_curve_figure(&cases);
    info!(series = curves.series.len(), "drawing stretched curves");
    draw(&curves)?;

    let parabola = accelerated_path_figure(&default_accelerated_case());
    let json = parabola
        .to_json()
        .map_err(|e| format!("Failed to encode figure: {e}"))?;
    info!(%json, "drawing accelerated path");
    draw(&parabola)?;

    Ok(())
}
