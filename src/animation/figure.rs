use plotters::style::{RGBColor, WHITE};

use super::driver::margin_limits;
use super::{AxisHandle, LineHandle};

/// 자동 축 범위 여백 비율.
const AUTOSCALE_MARGIN: f64 = 0.05;

/// 그림(캔버스) 설정. 크기는 인치 단위이며 픽셀 크기는 dpi로 정해진다.
#[derive(Debug, Clone)]
pub struct Figure {
    pub width_in: f64,
    pub height_in: f64,
    pub background: RGBColor,
}

impl Default for Figure {
    fn default() -> Self {
        Self {
            width_in: 6.4,
            height_in: 4.8,
            background: WHITE,
        }
    }
}

impl Figure {
    pub fn new(width_in: f64, height_in: f64) -> Self {
        Self {
            width_in,
            height_in,
            ..Default::default()
        }
    }

    /// 주어진 dpi에서의 픽셀 크기 (최소 1x1).
    pub fn pixel_size(&self, dpi: u32) -> (u32, u32) {
        let px = |inches: f64| (inches * f64::from(dpi)).round().max(1.0) as u32;
        (px(self.width_in), px(self.height_in))
    }
}

/// 선 스타일.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: RGBColor,
    /// 100 dpi 기준 선 두께 [px]
    pub width: u32,
    /// 각 데이터 점에 원형 마커 표시
    pub markers: bool,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: RGBColor(31, 119, 180),
            width: 2,
            markers: false,
        }
    }
}

/// 메모리상의 x/y 선 데이터.
#[derive(Debug, Clone, PartialEq)]
pub struct Line2D {
    x: Vec<f64>,
    y: Vec<f64>,
    pub style: LineStyle,
}

impl Line2D {
    pub fn new(x: impl Into<Vec<f64>>, y: impl Into<Vec<f64>>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            style: LineStyle::default(),
        }
    }

    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn x_data(&self) -> &[f64] {
        &self.x
    }

    pub fn y_data(&self) -> &[f64] {
        &self.y
    }
}

impl LineHandle for Line2D {
    fn xy_data(&self) -> (Vec<f64>, Vec<f64>) {
        (self.x.clone(), self.y.clone())
    }

    fn set_data(&mut self, x: &[f64], y: &[f64]) {
        self.x = x.to_vec();
        self.y = y.to_vec();
    }

    fn style(&self) -> LineStyle {
        self.style
    }
}

/// 축 범위와 격자 설정.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    xlim: (f64, f64),
    ylim: (f64, f64),
    pub grid: bool,
}

impl Default for Axis {
    fn default() -> Self {
        Self {
            xlim: (0.0, 1.0),
            ylim: (0.0, 1.0),
            grid: false,
        }
    }
}

impl Axis {
    /// 데이터로 선을 만들고 축 범위를 데이터에 맞춘다 (양쪽 5 % 여백).
    pub fn plot(&mut self, x: impl Into<Vec<f64>>, y: impl Into<Vec<f64>>) -> Line2D {
        let line = Line2D::new(x, y);
        if let Some(lim) = margin_limits(line.x_data(), AUTOSCALE_MARGIN) {
            self.xlim = lim;
        }
        if let Some(lim) = margin_limits(line.y_data(), AUTOSCALE_MARGIN) {
            self.ylim = lim;
        }
        line
    }
}

impl AxisHandle for Axis {
    fn set_xlim(&mut self, lim: (f64, f64)) {
        self.xlim = lim;
    }

    fn set_ylim(&mut self, lim: (f64, f64)) {
        self.ylim = lim;
    }

    fn xlim(&self) -> (f64, f64) {
        self.xlim
    }

    fn ylim(&self) -> (f64, f64) {
        self.ylim
    }

    fn grid(&self) -> bool {
        self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_size_scales_with_dpi() {
        let fig = Figure::default();
        assert_eq!(fig.pixel_size(100), (640, 480));
        assert_eq!(fig.pixel_size(300), (1920, 1440));
        assert_eq!(Figure::new(0.0, 0.0).pixel_size(300), (1, 1));
    }

    #[test]
    fn plot_autoscales_axis() {
        let mut axis = Axis::default();
        let line = axis.plot(vec![0.0, 10.0], vec![-1.0, 1.0]);
        assert_eq!(line.x_data(), &[0.0, 10.0]);
        let (x0, x1) = axis.xlim();
        assert!((x0 + 0.5).abs() < 1e-12 && (x1 - 10.5).abs() < 1e-12);
        let (y0, y1) = axis.ylim();
        assert!((y0 + 1.1).abs() < 1e-12 && (y1 - 1.1).abs() < 1e-12);
    }

    #[test]
    fn set_data_replaces_visible_points() {
        let mut line = Line2D::new(vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]);
        line.set_data(&[1.0], &[4.0]);
        assert_eq!(line.xy_data(), (vec![1.0], vec![4.0]));
    }
}
