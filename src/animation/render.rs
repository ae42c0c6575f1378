use std::path::Path;

use image::{ImageFormat, RgbImage};
use plotters::prelude::*;

use super::{AnimationError, AxisHandle, Figure, LineHandle};

const GRID_DIVISIONS: u32 = 5;

fn render_error<E: std::fmt::Display>(e: E) -> AnimationError {
    AnimationError::Render(e.to_string())
}

// plotters는 폭이 0인 범위를 그릴 수 없다.
fn nonsingular((lo, hi): (f64, f64)) -> (f64, f64) {
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    if lo != hi {
        return (lo, hi);
    }
    let pad = if lo == 0.0 { 0.5 } else { lo.abs() * 0.05 };
    (lo - pad, hi + pad)
}

/// 현재 선/축 상태를 한 장의 RGB 이미지로 그린다.
///
/// 픽셀 크기는 `figure.pixel_size(dpi)`이며 선 두께와 마커 크기는 100 dpi 기준
/// 값을 dpi에 비례해 키운다. 축 눈금 글자는 그리지 않는다.
pub fn render_frame(
    figure: &Figure,
    dpi: u32,
    line: &dyn LineHandle,
    axis: &dyn AxisHandle,
) -> Result<RgbImage, AnimationError> {
    let (w, h) = figure.pixel_size(dpi);
    let mut buf = vec![0u8; w as usize * h as usize * 3];
    let scale = |px: u32| (px * dpi / 100).max(1);

    {
        let root = BitMapBackend::with_buffer(&mut buf, (w, h)).into_drawing_area();
        root.fill(&figure.background).map_err(render_error)?;

        let (x0, x1) = nonsingular(axis.xlim());
        let (y0, y1) = nonsingular(axis.ylim());
        let mut chart = ChartBuilder::on(&root)
            .margin(w.min(h) / 20)
            .build_cartesian_2d(x0..x1, y0..y1)
            .map_err(render_error)?;

        if axis.grid() {
            let grid_style = BLACK.mix(0.2).stroke_width(1);
            for i in 1..GRID_DIVISIONS {
                let t = f64::from(i) / f64::from(GRID_DIVISIONS);
                let gx = x0 + (x1 - x0) * t;
                let gy = y0 + (y1 - y0) * t;
                chart
                    .draw_series(LineSeries::new([(gx, y0), (gx, y1)], grid_style))
                    .map_err(render_error)?;
                chart
                    .draw_series(LineSeries::new([(x0, gy), (x1, gy)], grid_style))
                    .map_err(render_error)?;
            }
        }

        let style = line.style();
        let (xs, ys) = line.xy_data();
        let points: Vec<(f64, f64)> = xs.into_iter().zip(ys).collect();

        chart
            .draw_series(LineSeries::new(
                points.iter().copied(),
                style.color.stroke_width(scale(style.width)),
            ))
            .map_err(render_error)?;

        if style.markers {
            let radius = scale(style.width * 2) as i32;
            chart
                .draw_series(
                    points
                        .iter()
                        .map(|&p| Circle::new(p, radius, style.color.filled())),
                )
                .map_err(render_error)?;
        }

        root.present().map_err(render_error)?;
    }

    RgbImage::from_raw(w, h, buf)
        .ok_or_else(|| AnimationError::Render(format!("frame buffer does not match {w}x{h}")))
}

/// 현재 상태를 PNG 한 장으로 저장한다.
pub fn save_png(
    path: impl AsRef<Path>,
    figure: &Figure,
    dpi: u32,
    line: &dyn LineHandle,
    axis: &dyn AxisHandle,
) -> Result<(), AnimationError> {
    let frame = render_frame(figure, dpi, line, axis)?;
    frame.save_with_format(path.as_ref(), ImageFormat::Png)?;
    log::debug!("saved still frame to {}", path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{Axis, Line2D};

    #[test]
    fn degenerate_limits_are_widened() {
        assert_eq!(nonsingular((0.0, 0.0)), (-0.5, 0.5));
        assert_eq!(nonsingular((f64::NAN, 1.0)), (0.0, 1.0));
        assert_eq!(nonsingular((1.0, 2.0)), (1.0, 2.0));
    }

    #[test]
    fn frame_has_figure_pixel_size() {
        let figure = Figure::new(1.0, 0.5);
        let mut axis = Axis::default();
        axis.grid = true;
        let line = axis.plot(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 0.5]);
        let img = render_frame(&figure, 60, &line, &axis).unwrap();
        assert_eq!(img.dimensions(), (60, 30));
    }

    #[test]
    fn line_pixels_differ_from_background() {
        let figure = Figure::new(1.0, 1.0);
        let mut axis = Axis::default();
        let line = axis.plot(vec![0.0, 1.0], vec![0.0, 1.0]);
        let img = render_frame(&figure, 80, &line, &axis).unwrap();
        let colored = img.pixels().filter(|p| p.0 != [255, 255, 255]).count();
        assert!(colored > 0);

        let empty = Line2D::new(Vec::<f64>::new(), Vec::<f64>::new());
        let blank = render_frame(&figure, 80, &empty, &axis).unwrap();
        assert!(blank.pixels().all(|p| p.0 == [255, 255, 255]));
    }
}
