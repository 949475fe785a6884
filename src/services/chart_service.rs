use std::path::PathBuf;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::{debug, info};

use crate::models::{ChartFiles, ChartOptions, Dataset, Series};
use crate::utils::errors::ChartError;

/// The two charts produced for a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    PageFaults,
    FaultRates,
}

impl ChartKind {
    pub const ALL: [ChartKind; 2] = [ChartKind::PageFaults, ChartKind::FaultRates];

    pub fn file_stem(&self) -> &'static str {
        match self {
            ChartKind::PageFaults => "page_faults",
            ChartKind::FaultRates => "fault_rates",
        }
    }
}

/// Fault rate drawn as the reference line on the rate chart
const REFERENCE_RATE: f64 = 1.0;

/// Parse a comma-separated colour list: names (`green`, `orange`, ...) or `#rrggbb`
pub fn parse_colors(raw: &str) -> Result<Vec<(u8, u8, u8)>, String> {
    let colors = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_color)
        .collect::<Result<Vec<_>, _>>()?;

    if colors.is_empty() {
        return Err("at least one colour is required".to_string());
    }
    Ok(colors)
}

fn parse_color(name: &str) -> Result<(u8, u8, u8), String> {
    if let Some(hex) = name.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("'{}' is not a #rrggbb colour", name));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| format!("'{}' is not a #rrggbb colour", name))
        };
        return Ok((channel(0)?, channel(2)?, channel(4)?));
    }

    match name.to_lowercase().as_str() {
        "black" => Ok((0, 0, 0)),
        "white" => Ok((255, 255, 255)),
        "red" => Ok((255, 0, 0)),
        "green" => Ok((0, 128, 0)),
        "blue" => Ok((0, 0, 255)),
        "orange" => Ok((255, 165, 0)),
        "yellow" => Ok((255, 255, 0)),
        "purple" => Ok((128, 0, 128)),
        "cyan" => Ok((0, 255, 255)),
        "magenta" => Ok((255, 0, 255)),
        "gray" | "grey" => Ok((128, 128, 128)),
        other => Err(format!("unknown colour '{}'", other)),
    }
}

/// Colour for the `index`-th bar, cycling through the list
fn color_at(colors: &[(u8, u8, u8)], index: usize) -> RGBColor {
    match colors.get(index % colors.len().max(1)) {
        Some(&(r, g, b)) => RGBColor(r, g, b),
        None => BLUE,
    }
}

fn render_err<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError::Render(e.to_string())
}

/// Render both charts as PNG and SVG into `options.output_dir`
pub async fn generate_charts(dataset: &Dataset, options: &ChartOptions) -> Result<ChartFiles, ChartError> {
    tokio::fs::create_dir_all(&options.output_dir).await?;

    let dataset = dataset.clone();
    let options = options.clone();

    // plotters is blocking; keep it off the runtime threads
    let files = tokio::task::spawn_blocking(move || draw_all(&dataset, &options))
        .await
        .map_err(|e| ChartError::Worker(e.to_string()))??;

    info!("Wrote {} chart files to {}", files.written.len(), dir_display(&files));
    Ok(files)
}

fn dir_display(files: &ChartFiles) -> String {
    files
        .written
        .first()
        .and_then(|p| p.parent())
        .map(|p| p.display().to_string())
        .unwrap_or_default()
}

fn draw_all(dataset: &Dataset, options: &ChartOptions) -> Result<ChartFiles, ChartError> {
    let mut files = ChartFiles::default();
    let size = (options.width, options.height);

    for kind in ChartKind::ALL {
        let png: PathBuf = options.output_dir.join(format!("{}.png", kind.file_stem()));
        {
            let root = BitMapBackend::new(&png, size).into_drawing_area();
            draw_chart(&root, kind, dataset, &options.colors)?;
        }
        debug!("Rendered {}", png.display());
        files.written.push(png);

        let svg: PathBuf = options.output_dir.join(format!("{}.svg", kind.file_stem()));
        {
            let root = SVGBackend::new(&svg, size).into_drawing_area();
            draw_chart(&root, kind, dataset, &options.colors)?;
        }
        debug!("Rendered {}", svg.display());
        files.written.push(svg);
    }

    Ok(files)
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    kind: ChartKind,
    dataset: &Dataset,
    colors: &[(u8, u8, u8)],
) -> Result<(), ChartError> {
    root.fill(&WHITE).map_err(render_err)?;

    match kind {
        ChartKind::PageFaults => draw_page_faults(root, &dataset.title, &dataset.page_faults)?,
        ChartKind::FaultRates => draw_fault_rates(root, &dataset.fault_rates, colors)?,
    }

    root.present().map_err(render_err)?;
    Ok(())
}

fn series_max(series: &Series) -> f64 {
    series.values().into_iter().fold(0.0, f64::max)
}

fn center_label(labels: &[String], x: &SegmentValue<usize>) -> String {
    match x {
        SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
        _ => String::new(),
    }
}

fn draw_page_faults<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    title: &str,
    series: &Series,
) -> Result<(), ChartError> {
    let labels = series.labels();
    let n = series.len();
    let max = series_max(series);
    let y_max = if max > 0.0 { max * 1.15 } else { 1.0 };

    let mut chart = ChartBuilder::on(root)
        .caption(
            &format!("Page Faults vs Page Size ({})", title),
            ("sans-serif", 32.0).into_font(),
        )
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((0..n).into_segmented(), 0f64..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_labels(n)
        .x_label_formatter(&|x| center_label(&labels, x))
        .x_desc("Page Size (bytes)")
        .y_desc(&format!("Page Faults ({})", series.unit))
        .draw()
        .map_err(render_err)?;

    let points: Vec<(SegmentValue<usize>, f64)> = series
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| (SegmentValue::CenterOf(i), p.value))
        .collect();

    chart
        .draw_series(LineSeries::new(points.clone(), BLUE.stroke_width(2)).point_size(5))
        .map_err(render_err)?
        .label(series.name.as_str())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    let annotation = TextStyle::from(("sans-serif", 16.0).into_font())
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart
        .draw_series(points.iter().map(|(x, y)| {
            Text::new(format!("{}", y), (x.clone(), *y + y_max * 0.02), annotation.clone())
        }))
        .map_err(render_err)?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_err)?;

    Ok(())
}

fn draw_fault_rates<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    series: &Series,
    colors: &[(u8, u8, u8)],
) -> Result<(), ChartError> {
    let labels = series.labels();
    let n = series.len();
    let y_max = series_max(series).max(REFERENCE_RATE) * 1.2;

    let mut chart = ChartBuilder::on(root)
        .caption(&series.name, ("sans-serif", 32.0).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((0..n).into_segmented(), 0f64..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n)
        .x_label_formatter(&|x| center_label(&labels, x))
        .x_desc("Configuration")
        .y_desc(&format!("Fault Rate ({})", series.unit))
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(series.points.iter().enumerate().map(|(i, p)| {
            let mut bar = Rectangle::new(
                [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), p.value)],
                color_at(colors, i).mix(0.7).filled(),
            );
            bar.set_margin(0, 0, 12, 12);
            bar
        }))
        .map_err(render_err)?;

    chart
        .draw_series(series.points.iter().enumerate().map(|(i, p)| {
            let mut outline = Rectangle::new(
                [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), p.value)],
                BLACK.stroke_width(1),
            );
            outline.set_margin(0, 0, 12, 12);
            outline
        }))
        .map_err(render_err)?;

    let annotation = TextStyle::from(("sans-serif", 16.0).into_font())
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart
        .draw_series(series.points.iter().enumerate().map(|(i, p)| {
            Text::new(
                format!("{}{}", p.value, series.unit),
                (SegmentValue::CenterOf(i), p.value + y_max * 0.01),
                annotation.clone(),
            )
        }))
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(
            vec![
                (SegmentValue::Exact(0), REFERENCE_RATE),
                (SegmentValue::Exact(n), REFERENCE_RATE),
            ],
            RED.mix(0.5).stroke_width(2),
        ))
        .map_err(render_err)?
        .label(format!("Reference line ({}{})", REFERENCE_RATE, series.unit))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_err)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_colors() {
        let colors = parse_colors("green,orange,blue,red").unwrap();
        assert_eq!(
            colors,
            vec![(0, 128, 0), (255, 165, 0), (0, 0, 255), (255, 0, 0)]
        );
    }

    #[test]
    fn test_parse_hex_and_whitespace() {
        let colors = parse_colors(" #1a2B3c , Grey ,").unwrap();
        assert_eq!(colors, vec![(0x1a, 0x2b, 0x3c), (128, 128, 128)]);
    }

    #[test]
    fn test_parse_rejects_bad_colors() {
        assert!(parse_colors("chartreuse").is_err());
        assert!(parse_colors("#12345").is_err());
        assert!(parse_colors("#gg0000").is_err());
        assert!(parse_colors(" , ").is_err());
    }

    #[test]
    fn test_colors_cycle() {
        let colors = vec![(1, 1, 1), (2, 2, 2)];
        assert_eq!(color_at(&colors, 0), RGBColor(1, 1, 1));
        assert_eq!(color_at(&colors, 3), RGBColor(2, 2, 2));
        assert_eq!(color_at(&[], 3), BLUE);
    }

    #[test]
    fn test_center_labels() {
        let labels = vec!["256".to_string(), "512".to_string()];
        assert_eq!(center_label(&labels, &SegmentValue::CenterOf(1)), "512");
        assert_eq!(center_label(&labels, &SegmentValue::Exact(1)), "");
        assert_eq!(center_label(&labels, &SegmentValue::CenterOf(5)), "");
    }

    #[test]
    fn test_file_stems_are_distinct() {
        let stems: Vec<&str> = ChartKind::ALL.iter().map(|k| k.file_stem()).collect();
        assert_eq!(stems, vec!["page_faults", "fault_rates"]);
    }

    #[tokio::test]
    async fn test_generate_charts_writes_png_and_svg() {
        let dir = std::env::temp_dir().join(format!("pagefault_charts_render_{}", std::process::id()));
        let options = ChartOptions {
            output_dir: dir.clone(),
            width: 600,
            height: 300,
            colors: parse_colors("green,orange,blue,red").unwrap(),
        };

        let files = generate_charts(&crate::services::dataset_service::default_dataset(), &options)
            .await
            .unwrap();

        let expected: Vec<PathBuf> = ["page_faults.png", "page_faults.svg", "fault_rates.png", "fault_rates.svg"]
            .iter()
            .map(|name| dir.join(name))
            .collect();
        assert_eq!(files.written, expected);
        for path in &expected {
            let meta = tokio::fs::metadata(path).await.unwrap();
            assert!(meta.len() > 0, "{} is empty", path.display());
        }

        let _ = tokio::fs::remove_dir_all(&dir).await;
    }
}
