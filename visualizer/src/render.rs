use std::fmt::Display;
use std::path::Path;

use plotters::prelude::*;
use regression::LinearModel;

use crate::errors::VisualizerError;
use crate::surface::{axis_range, feature_pairs, linspace, PlaneSection, PlotData};

const PANEL_WIDTH: u32 = 640;
const PANEL_HEIGHT: u32 = 560;
const GRID_STEPS: usize = 30;

fn render_error<E: Display>(err: E) -> VisualizerError {
    VisualizerError::Render(err.to_string())
}

/// Renders one 3-D panel per pair of features into a PNG at `path`.
///
/// Each panel scatters the points against the pair and draws the fitted plane
/// over their observed range, every other feature held at its mean.
pub fn render_model(
    path: &Path,
    data: &PlotData<'_>,
    model: &LinearModel,
) -> Result<(), VisualizerError> {
    data.validate(model)?;

    let pairs = feature_pairs(data.labels.len());
    let means = data.means();
    let price_range = axis_range(data.target);

    let root = BitMapBackend::new(path, (PANEL_WIDTH * pairs.len() as u32, PANEL_HEIGHT))
        .into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;
    let panels = root.split_evenly((1, pairs.len()));

    for (&(a, b), panel) in pairs.iter().zip(panels.iter()) {
        let xs = data.column(a);
        let zs = data.column(b);
        let x_range = axis_range(&xs);
        let z_range = axis_range(&zs);

        let plane = PlaneSection::new(model, a, b, means.clone());
        let heights = [
            plane.height(x_range.start, z_range.start),
            plane.height(x_range.start, z_range.end),
            plane.height(x_range.end, z_range.start),
            plane.height(x_range.end, z_range.end),
        ];
        let mut y_values = heights.to_vec();
        y_values.extend_from_slice(data.target);
        let y_range = if heights.iter().all(|h| h.is_finite()) {
            axis_range(&y_values)
        } else {
            price_range.clone()
        };

        let mut chart = ChartBuilder::on(panel)
            .caption(
                format!("Price vs {} vs {}", data.labels[a], data.labels[b]),
                ("sans-serif", 20),
            )
            .margin(10)
            .build_cartesian_3d(x_range.clone(), y_range, z_range.clone())
            .map_err(render_error)?;
        chart.with_projection(|mut projection| {
            projection.yaw = 0.6;
            projection.pitch = 0.3;
            projection.scale = 0.85;
            projection.into_matrix()
        });
        chart.configure_axes().draw().map_err(render_error)?;

        chart
            .draw_series(
                SurfaceSeries::xoz(
                    linspace(&x_range, GRID_STEPS).into_iter(),
                    linspace(&z_range, GRID_STEPS).into_iter(),
                    |x, z| plane.height(x, z),
                )
                .style(RED.mix(0.5).filled()),
            )
            .map_err(render_error)?;

        chart
            .draw_series(
                xs.iter()
                    .zip(data.target)
                    .zip(&zs)
                    .map(|((x, price), z)| Circle::new((*x, *price, *z), 2, BLUE.filled())),
            )
            .map_err(render_error)?;
    }

    root.present().map_err(render_error)?;
    Ok(())
}
