use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use crate::error::Error;
use crate::process::WideTable;

use super::{CHART_SIZE, FONT};

/// Default line colors (tab10-ish, print friendly).
const SERIES_COLORS: &[RGBColor] = &[
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
];

/// Render a single-axis line chart of the requested entities as a PNG + SVG
/// pair under `out_dir`. Years where any requested entity has no value are
/// dropped so every line covers the same span.
pub fn render(
    table: &WideTable,
    entities: &[&str],
    title: &str,
    y_desc: &str,
    out_dir: &Path,
    stem: &str,
) -> Result<Vec<PathBuf>> {
    let series = aligned_series(table, entities)?;
    fs::create_dir_all(out_dir)?;

    let png = out_dir.join(format!("{stem}.png"));
    {
        let root = BitMapBackend::new(&png, CHART_SIZE).into_drawing_area();
        draw(&root, title, y_desc, &series)?;
    }
    info!(path = %png.display(), "saved chart");

    let svg = out_dir.join(format!("{stem}.svg"));
    {
        let root = SVGBackend::new(&svg, CHART_SIZE).into_drawing_area();
        draw(&root, title, y_desc, &series)?;
    }
    info!(path = %svg.display(), "saved chart");

    Ok(vec![png, svg])
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    title: &str,
    y_desc: &str,
    series: &[(String, Vec<(i32, f64)>)],
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;
    let (x_range, y_range) = ranges(series)?;

    let mut chart = ChartBuilder::on(root)
        .margin(24)
        .caption(title, (FONT, 28))
        .x_label_area_size(56)
        .y_label_area_size(72)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(&RGBColor(235, 235, 235))
        .bold_line_style(&RGBColor(235, 235, 235))
        .x_labels(6)
        .x_desc("Year")
        .y_desc(y_desc)
        .label_style((FONT, 18))
        .axis_desc_style((FONT, 20))
        .draw()?;

    for (idx, (name, points)) in series.iter().enumerate() {
        let color = SERIES_COLORS[idx % SERIES_COLORS.len()];
        chart
            .draw_series(
                LineSeries::new(points.iter().copied(), color.stroke_width(2)).point_size(4),
            )?
            .label(name.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .border_style(&TRANSPARENT)
        .label_font((FONT, 18))
        .draw()?;

    root.present()?;
    Ok(())
}

/// One `(year, value)` sequence per requested entity, restricted to years
/// where every entity has a value.
fn aligned_series(
    table: &WideTable,
    entities: &[&str],
) -> crate::error::Result<Vec<(String, Vec<(i32, f64)>)>> {
    let mut all = Vec::with_capacity(entities.len());
    for entity in entities {
        let values = table.series(entity).ok_or_else(|| Error::SchemaMismatch {
            column: entity.to_string(),
        })?;
        all.push((entity.to_string(), values));
    }

    let mut out: Vec<(String, Vec<(i32, f64)>)> = all
        .iter()
        .map(|(name, _)| (name.clone(), Vec::new()))
        .collect();
    for (idx, year) in table.years().iter().enumerate() {
        if all.iter().all(|(_, values)| values[idx].is_some()) {
            for (slot, (_, values)) in out.iter_mut().zip(&all) {
                slot.1.push((*year, values[idx].unwrap()));
            }
        }
    }
    Ok(out)
}

fn ranges(series: &[(String, Vec<(i32, f64)>)]) -> Result<(Range<i32>, Range<f64>)> {
    let mut x_min = i32::MAX;
    let mut x_max = i32::MIN;
    let mut y_max = f64::MIN;
    for (_, points) in series {
        for (x, y) in points {
            x_min = x_min.min(*x);
            x_max = x_max.max(*x);
            y_max = y_max.max(*y);
        }
    }
    if x_min > x_max {
        bail!("no overlapping years with values to plot");
    }
    Ok((x_min..x_max + 1, 0.0..y_max * 1.08))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::{pivot, Dataset};

    fn table() -> WideTable {
        let ds = Dataset::new(
            vec!["Entity".into(), "Year".into(), "Rate".into()],
            vec![
                vec!["France".into(), "2000".into(), "20.0".into()],
                vec!["France".into(), "2001".into(), "21.0".into()],
                vec!["France".into(), "2002".into(), "19.0".into()],
                vec!["United Kingdom".into(), "2000".into(), "12.0".into()],
                // 2001 missing for the UK
                vec!["United Kingdom".into(), "2002".into(), "11.0".into()],
            ],
        );
        pivot(&ds, "Rate").unwrap()
    }

    #[test]
    fn aligned_series_drops_years_with_any_gap() {
        let series = aligned_series(&table(), &["France", "United Kingdom"]).unwrap();
        assert_eq!(series[0].1, vec![(2000, 20.0), (2002, 19.0)]);
        assert_eq!(series[1].1, vec![(2000, 12.0), (2002, 11.0)]);
    }

    #[test]
    fn unknown_entity_is_a_schema_mismatch() {
        match aligned_series(&table(), &["France", "Italy"]) {
            Err(Error::SchemaMismatch { column }) => assert_eq!(column, "Italy"),
            other => panic!("expected SchemaMismatch, got {other:?}"),
        }
    }

    #[test]
    fn ranges_cover_all_points() {
        let series = aligned_series(&table(), &["France", "United Kingdom"]).unwrap();
        let (xs, ys) = ranges(&series).unwrap();
        assert_eq!(xs, 2000..2003);
        assert!(ys.end > 20.0);
        assert_eq!(ys.start, 0.0);
    }
}
