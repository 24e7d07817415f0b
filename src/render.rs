use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use simple_error::{try_with, SimpleResult};

use crate::{
    experiment::ExperimentResult,
    params::{ALZHEIMERS, HEALTHY},
};

pub const CHART_SIZE: (u32, u32) = (1200, 700);

const TITLE: &str = "Impact of Alzheimer’s Pathology on Schaffer Collateral Plasticity";
const X_DESC: &str = "Time (s)";
const Y_DESC: &str = "Synaptic Weight (Arbitrary Units)";
const Y_MAX: f64 = 3.0;

const HFS_LABEL: &str = "High-Frequency Stimulation (LTP)";
const LFS_LABEL: &str = "Low-Frequency Stimulation (LTD)";
const WINDOW_ALPHA: f64 = 0.15;
const LINE_WIDTH: u32 = 3;
const DASH_SIZE: u32 = 12;
const DASH_SPACING: u32 = 8;

const ROYAL_BLUE: RGBColor = RGBColor(65, 105, 225);
const FIREBRICK: RGBColor = RGBColor(178, 34, 34);
const FALLBACK_COLORS: [RGBColor; 4] = [
    RGBColor(46, 139, 87),
    RGBColor(255, 140, 0),
    RGBColor(106, 90, 205),
    RGBColor(112, 128, 144),
];

struct SeriesStyle {
    label: String,
    color: RGBColor,
    dashed: bool,
}

fn get_series_style(name: &str, run_idx: usize) -> SeriesStyle {
    match name {
        HEALTHY => SeriesStyle {
            label: "Healthy Control".to_string(),
            color: ROYAL_BLUE,
            dashed: false,
        },
        ALZHEIMERS => SeriesStyle {
            label: "Alzheimer's Disease (Aβ Pathology)".to_string(),
            color: FIREBRICK,
            dashed: true,
        },
        _ => SeriesStyle {
            label: name.to_string(),
            color: FALLBACK_COLORS[run_idx % FALLBACK_COLORS.len()],
            dashed: false,
        },
    }
}

pub fn render_svg_to_string(result: &ExperimentResult) -> SimpleResult<String> {
    let mut svg = String::new();

    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        draw_chart(&root, result)?;
    }

    Ok(svg)
}

pub fn render_svg_file<P: AsRef<Path>>(result: &ExperimentResult, path: P) -> SimpleResult<()> {
    let root = SVGBackend::new(path.as_ref(), CHART_SIZE).into_drawing_area();
    draw_chart(&root, result)
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    result: &ExperimentResult,
) -> SimpleResult<()> {
    let schedule = result.get_schedule();

    try_with!(root.fill(&WHITE), "failed to clear chart area");

    let mut chart = try_with!(
        ChartBuilder::on(root)
            .caption(TITLE, ("sans-serif", 28).into_font())
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(0.0..schedule.total_time, 0.0..Y_MAX),
        "failed to build chart coordinates"
    );

    try_with!(
        chart
            .configure_mesh()
            .x_desc(X_DESC)
            .y_desc(Y_DESC)
            .draw(),
        "failed to draw chart mesh"
    );

    let windows = [
        (schedule.hfs_start, schedule.hfs_end, GREEN, HFS_LABEL),
        (schedule.lfs_start, schedule.lfs_end, RED, LFS_LABEL),
    ];

    for (start, end, color, label) in windows {
        try_with!(
            chart.draw_series(std::iter::once(Rectangle::new(
                [(start, 0.0), (end, Y_MAX)],
                color.mix(WINDOW_ALPHA).filled(),
            ))),
            "failed to draw stimulation window {}",
            label
        )
        .label(label)
        .legend(move |(x, y)| {
            Rectangle::new(
                [(x, y - 6), (x + 20, y + 6)],
                color.mix(WINDOW_ALPHA).filled(),
            )
        });
    }

    for (run_idx, (name, run)) in result.get_runs().iter().enumerate() {
        let style = get_series_style(name, run_idx);
        let color = style.color;

        let series = if style.dashed {
            try_with!(
                chart.draw_series(DashedLineSeries::new(
                    run.samples(),
                    DASH_SIZE,
                    DASH_SPACING,
                    color.stroke_width(LINE_WIDTH),
                )),
                "failed to draw weight series of condition {}",
                name
            )
        } else {
            try_with!(
                chart.draw_series(LineSeries::new(run.samples(), color.stroke_width(LINE_WIDTH))),
                "failed to draw weight series of condition {}",
                name
            )
        };

        series
            .label(style.label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH))
            });
    }

    try_with!(
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw(),
        "failed to draw chart legend"
    );

    try_with!(root.present(), "failed to write chart");

    Ok(())
}
