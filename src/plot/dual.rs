use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use crate::error::Error;
use crate::process::WideTable;

use super::{CHART_SIZE, FONT};

/// Render one country's dual-axis chart: unemployment level on the left
/// axis, wage annual % change on the right, as a PNG + SVG pair under
/// `out_dir`.
pub fn render(
    unemployment: &WideTable,
    wage_change: &WideTable,
    entity: &str,
    out_dir: &Path,
    stem: &str,
) -> Result<Vec<PathBuf>> {
    let unemp = points_for(unemployment, entity)?;
    let change = points_for(wage_change, entity)?;
    fs::create_dir_all(out_dir)?;

    let png = out_dir.join(format!("{stem}.png"));
    {
        let root = BitMapBackend::new(&png, CHART_SIZE).into_drawing_area();
        draw(&root, entity, &unemp, &change)?;
    }
    info!(path = %png.display(), "saved chart");

    let svg = out_dir.join(format!("{stem}.svg"));
    {
        let root = SVGBackend::new(&svg, CHART_SIZE).into_drawing_area();
        draw(&root, entity, &unemp, &change)?;
    }
    info!(path = %svg.display(), "saved chart");

    Ok(vec![png, svg])
}

fn points_for(table: &WideTable, entity: &str) -> crate::error::Result<Vec<(i32, f64)>> {
    table.points(entity).ok_or_else(|| Error::SchemaMismatch {
        column: entity.to_string(),
    })
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    entity: &str,
    unemp: &[(i32, f64)],
    change: &[(i32, f64)],
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let xs = unemp.iter().chain(change).map(|(x, _)| *x);
    let (x_min, x_max) = match (xs.clone().min(), xs.max()) {
        (Some(lo), Some(hi)) => (lo, hi),
        _ => bail!("no values to plot for {entity}"),
    };
    let x_range = x_min..x_max + 1;

    let unemp_max = unemp.iter().map(|(_, y)| *y).fold(0.0, f64::max);
    let (change_lo, change_hi) = change
        .iter()
        .map(|(_, y)| *y)
        .fold((0.0f64, 0.0f64), |(lo, hi), y| (lo.min(y), hi.max(y)));
    let pad = ((change_hi - change_lo) * 0.1).max(0.5);

    let title = format!(
        "Youth Unemployment and Minimum Wage Changes: {entity}, {x_min}\u{2013}{x_max}"
    );
    let mut chart = ChartBuilder::on(root)
        .margin(24)
        .caption(title, (FONT, 26))
        .x_label_area_size(56)
        .y_label_area_size(72)
        .right_y_label_area_size(72)
        .build_cartesian_2d(x_range.clone(), 0.0..unemp_max * 1.1)?
        .set_secondary_coord(x_range, change_lo - pad..change_hi + pad);

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(&RGBColor(235, 235, 235))
        .bold_line_style(&RGBColor(235, 235, 235))
        .x_labels(6)
        .x_desc("Year")
        .y_desc("Youth unemployment rate (15\u{2013}24), %")
        .label_style((FONT, 18))
        .axis_desc_style((FONT, 20))
        .draw()?;

    chart
        .configure_secondary_axes()
        .y_desc("Minimum wage annual change, %")
        .label_style((FONT, 18))
        .axis_desc_style((FONT, 20))
        .draw()?;

    chart
        .draw_series(
            LineSeries::new(unemp.iter().copied(), BLACK.stroke_width(2)).point_size(4),
        )?
        .label("Youth unemployment")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], BLACK.stroke_width(2)));

    // zero reference for the change axis
    chart.draw_secondary_series(LineSeries::new(
        [(x_min, 0.0), (x_max, 0.0)],
        RED.mix(0.4).stroke_width(1),
    ))?;

    chart
        .draw_secondary_series(DashedLineSeries::new(
            change.iter().copied(),
            8,
            5,
            RED.stroke_width(2),
        ))?
        .label("Min wage change")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], RED.stroke_width(2)));
    chart.draw_secondary_series(PointSeries::of_element(
        change.iter().copied(),
        4,
        RED.filled(),
        &|coord, size, style| {
            EmptyElement::at(coord) + Rectangle::new([(-size, -size), (size, size)], style)
        },
    ))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .border_style(&TRANSPARENT)
        .label_font((FONT, 18))
        .draw()?;

    root.present()?;
    Ok(())
}
