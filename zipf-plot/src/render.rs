//! PNG rendering of the three diagnostic charts

use crate::series::{
    frequency_function_series, letter_frequency_series, reciprocal_series, ReciprocalSeries,
};
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use tracing::info;
use zipf_core::{Result, ZipfError};
use zipf_estimate::ReciprocalEstimator;
use zipf_stats::RankTable;

pub const LETTER_FREQUENCY_FILE: &str = "plot-frequency-against-letter.png";
pub const FREQUENCY_FUNCTION_FILE: &str = "plot-frequency-function.png";
pub const RECIPROCAL_FILE: &str = "plot-r-est.png";

const ROYAL_BLUE: RGBColor = RGBColor(65, 105, 225);
const LIGHT_GREY: RGBColor = RGBColor(211, 211, 211);
const SIZE: (u32, u32) = (1280, 960);

fn render_err(e: impl std::fmt::Display) -> ZipfError {
    ZipfError::render(e.to_string())
}

/// Write all three charts into `dir`, returning the written paths
pub fn render_all(
    dir: &Path,
    table: &RankTable,
    estimator: &ReciprocalEstimator,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .map_err(|e| ZipfError::render(format!("cannot create {}: {}", dir.display(), e)))?;

    let paths = vec![
        render_letter_frequencies(&dir.join(LETTER_FREQUENCY_FILE), table)?,
        render_frequency_function(&dir.join(FREQUENCY_FUNCTION_FILE), table)?,
        render_reciprocal(&dir.join(RECIPROCAL_FILE), &reciprocal_series(estimator)?)?,
    ];
    for path in &paths {
        info!(path = %path.display(), "wrote chart");
    }
    Ok(paths)
}

/// Bar chart of letter counts, most frequent first
pub fn render_letter_frequencies(path: &Path, table: &RankTable) -> Result<PathBuf> {
    let bars = letter_frequency_series(table);
    let letters: Vec<char> = bars.iter().map(|&(c, _)| c).collect();
    let y_max = bars.iter().map(|&(_, n)| n).max().unwrap_or(1) * 11 / 10 + 1;

    let root = BitMapBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    {
        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .caption("Letter frequencies in The Tau Manifesto", ("sans-serif", 36.0))
            .set_label_area_size(LabelAreaPosition::Left, 90)
            .set_label_area_size(LabelAreaPosition::Bottom, 60)
            .build_cartesian_2d((0u32..bars.len() as u32).into_segmented(), 0u64..y_max)
            .map_err(render_err)?;

        let label = |v: &SegmentValue<u32>| match v {
            SegmentValue::CenterOf(i) => letters
                .get(*i as usize)
                .map(|c| c.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        };
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(bars.len())
            .x_label_formatter(&label)
            .x_desc("Letter")
            .y_desc("Number of appearances")
            .draw()
            .map_err(render_err)?;

        chart
            .draw_series(
                Histogram::vertical(&chart)
                    .style(ROYAL_BLUE.filled())
                    .margin(6)
                    .data(bars.iter().enumerate().map(|(i, &(_, n))| (i as u32, n))),
            )
            .map_err(render_err)?;
    }

    root.present().map_err(render_err)?;
    Ok(path.to_path_buf())
}

/// Scatter of the discrete frequency function `f(r)`
pub fn render_frequency_function(path: &Path, table: &RankTable) -> Result<PathBuf> {
    let points = frequency_function_series(table);
    let x_max = points.len() as f64 + 1.0;
    let y_max = points.iter().map(|&(_, y)| y).fold(1.0, f64::max) * 1.1;

    let root = BitMapBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    {
        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .caption("The frequency function f(r)", ("sans-serif", 36.0))
            .set_label_area_size(LabelAreaPosition::Left, 90)
            .set_label_area_size(LabelAreaPosition::Bottom, 60)
            .build_cartesian_2d(0f64..x_max, 0f64..y_max)
            .map_err(render_err)?;

        chart
            .configure_mesh()
            .x_desc("r")
            .y_desc("f(r)")
            .draw()
            .map_err(render_err)?;

        chart
            .draw_series(
                points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 6, ROYAL_BLUE.filled())),
            )
            .map_err(render_err)?;
    }

    root.present().map_err(render_err)?;
    Ok(path.to_path_buf())
}

/// `y = r_est(r)` against the reference curve `y = 1/r`
pub fn render_reciprocal(path: &Path, series: &ReciprocalSeries) -> Result<PathBuf> {
    let x_max = series.reference.last().map(|&(t, _)| t).unwrap_or(1.0) + 1.0;
    let y_max = series
        .reference
        .iter()
        .chain(series.estimate.iter())
        .map(|&(_, y)| y)
        .fold(1.0, f64::max)
        * 1.05;

    let root = BitMapBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    {
        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .caption(
                "Comparing the graphs of y = R_est(r) and y = 1/r",
                ("sans-serif", 36.0),
            )
            .set_label_area_size(LabelAreaPosition::Left, 90)
            .set_label_area_size(LabelAreaPosition::Bottom, 60)
            .build_cartesian_2d(0f64..x_max, 0f64..y_max)
            .map_err(render_err)?;

        chart
            .configure_mesh()
            .x_desc("r")
            .y_desc("y")
            .draw()
            .map_err(render_err)?;

        chart
            .draw_series(LineSeries::new(
                series.reference.iter().copied(),
                LIGHT_GREY.stroke_width(3),
            ))
            .map_err(render_err)?
            .label("y = 1/r")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], LIGHT_GREY.stroke_width(3)));

        chart
            .draw_series(LineSeries::new(
                series.estimate.iter().copied(),
                ROYAL_BLUE.stroke_width(3),
            ))
            .map_err(render_err)?
            .label("y = R_est(r) where r >= 1 + beta")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], ROYAL_BLUE.stroke_width(3)));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(render_err)?;
    }

    root.present().map_err(render_err)?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use zipf_estimate::FrequencyFunction;

    #[test]
    fn test_render_all_writes_three_files() {
        let counts: Vec<u64> = (1..=26).map(|r| 10_000 / r).collect();
        let table = Arc::new(RankTable::from_counts_desc(&counts).unwrap());
        let estimator = ReciprocalEstimator::new(Arc::new(FrequencyFunction::new(table.clone())), 0.2);

        let dir = tempfile::tempdir().unwrap();
        let paths = render_all(dir.path(), &table, &estimator).unwrap();
        assert_eq!(paths.len(), 3);
        for (path, name) in paths.iter().zip([LETTER_FREQUENCY_FILE, FREQUENCY_FUNCTION_FILE, RECIPROCAL_FILE]) {
            assert!(path.ends_with(name));
            let size = std::fs::metadata(path).unwrap().len();
            assert!(size > 0, "{} is empty", path.display());
        }
    }

    #[test]
    fn test_render_err_is_render_code() {
        assert_eq!(render_err("boom").code, zipf_core::codes::RENDER_ERROR);
    }
}
