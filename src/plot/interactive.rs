use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use plotly::common::color::NamedColor;
use plotly::common::{Line, Marker, Mode, Title};
use plotly::layout::{Axis, HoverMode, Layout, Legend};
use plotly::{Plot, Scatter};
use tracing::info;

use crate::error::Error;
use crate::process::WideTable;

/// Write an interactive HTML line chart with hover tooltips showing the
/// exact percentages. Open the file in a browser to explore it. Trace colors
/// follow the convention used across this project: France in red, the
/// United Kingdom in blue.
pub fn youth_unemployment(table: &WideTable, out_path: &Path) -> Result<PathBuf> {
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let traces = [
        ("France", NamedColor::Red),
        ("United Kingdom", NamedColor::Blue),
    ];

    let mut plot = Plot::new();
    for (entity, color) in traces {
        let points = table.points(entity).ok_or_else(|| Error::SchemaMismatch {
            column: entity.to_string(),
        })?;
        let (years, values): (Vec<i32>, Vec<f64>) = points.into_iter().unzip();
        let hover = format!(
            "<b>{entity}</b><br>Year: %{{x}}<br>Unemployment Rate: %{{y:.2f}}%<extra></extra>"
        );
        let trace = Scatter::new(years, values)
            .name(entity)
            .mode(Mode::LinesMarkers)
            .line(Line::new().color(color).width(2.0))
            .marker(Marker::new().size(6))
            .hover_template(&hover);
        plot.add_trace(trace);
    }

    plot.set_layout(
        Layout::new()
            .title(Title::new(
                "Youth Unemployment Rate (Ages 15\u{2013}24), France vs UK, 2000\u{2013}2024",
            ))
            .x_axis(Axis::new().title(Title::new("Year")))
            .y_axis(Axis::new().title(Title::new("Youth unemployment rate (15\u{2013}24, %)")))
            .hover_mode(HoverMode::XUnified)
            .width(1000)
            .height(600)
            .legend(Legend::new().x(0.02).y(0.98)),
    );

    plot.write_html(out_path);
    info!(path = %out_path.display(), "saved interactive chart");
    Ok(out_path.to_path_buf())
}
