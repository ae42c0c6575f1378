//! 미리 그려진 2D 선 그래프를 점 단위로 재생하는 애니메이션 드라이버.
//!
//! 렌더링 백엔드는 [`LineHandle`], [`AxisHandle`], [`FrameWriter`] 트레이트로
//! 주입된다. 드라이버([`animate`])는 데이터의 점진적 노출, 축 여백, 내보내기
//! 프레임 속도만 책임지며 실제 그리기는 백엔드가 담당한다.
//!
//! ```rust,ignore
//! use atmos_chem_toolbox::animation::{animate, AnimateOptions, Axis, Figure};
//!
//! let figure = Figure::default();
//! let mut axis = Axis::default();
//! let mut line = axis.plot(x, y);
//! let options = AnimateOptions {
//!     filename: Some("animation.gif".into()),
//!     length_secs: 10.0,
//!     set_margins: true,
//!     margin_fraction: 0.2,
//!     ..Default::default()
//! };
//! let anim = animate(&mut line, &figure, &mut axis, &options)?;
//! ```

pub mod driver;
pub mod figure;
pub mod gif;
pub mod render;

pub use driver::{animate, animate_first, margin_limits, AnimateOptions, Animation};
pub use figure::{Axis, Figure, Line2D, LineStyle};
pub use gif::{writer_for_path, GifWriter};
pub use render::{render_frame, save_png};

/// 좌표 데이터를 읽고 표시 구간을 바꿀 수 있는 선 객체.
pub trait LineHandle {
    /// 현재 표시 중인 x/y 좌표.
    fn xy_data(&self) -> (Vec<f64>, Vec<f64>);

    /// 표시할 x/y 좌표를 교체한다.
    fn set_data(&mut self, x: &[f64], y: &[f64]);

    fn style(&self) -> LineStyle {
        LineStyle::default()
    }
}

/// 축 범위를 가진 그리기 영역.
pub trait AxisHandle {
    fn set_xlim(&mut self, lim: (f64, f64));
    fn set_ylim(&mut self, lim: (f64, f64));
    fn xlim(&self) -> (f64, f64);
    fn ylim(&self) -> (f64, f64);

    fn grid(&self) -> bool {
        false
    }
}

/// 프레임을 순서대로 받아 기록하는 내보내기 대상.
pub trait FrameWriter {
    /// `index`번째 프레임을 현재 선/축 상태로 기록한다.
    fn write_frame(
        &mut self,
        index: usize,
        line: &dyn LineHandle,
        axis: &dyn AxisHandle,
    ) -> Result<(), AnimationError>;

    /// 모든 프레임을 기록한 뒤 호출한다.
    fn finish(&mut self) -> Result<(), AnimationError>;
}

/// 애니메이션 구성/내보내기 중 발생 가능한 오류.
#[derive(Debug)]
pub enum AnimationError {
    /// 애니메이션할 선이 없음
    NoLine,
    /// 내보낼 데이터 점이 없음
    EmptyData,
    /// 확장자로 내보내기 형식을 정할 수 없음
    UnsupportedFormat(String),
    /// 이미 닫힌 writer에 프레임을 기록하려 함
    WriterClosed,
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 이미지 인코딩 오류
    Image(image::ImageError),
    /// 래스터 렌더링 오류
    Render(String),
}

impl std::fmt::Display for AnimationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnimationError::NoLine => write!(f, "애니메이션할 선이 없음"),
            AnimationError::EmptyData => write!(f, "내보낼 데이터 점이 없음"),
            AnimationError::UnsupportedFormat(path) => {
                write!(f, "지원하지 않는 애니메이션 파일 형식: {path} (.gif 사용)")
            }
            AnimationError::WriterClosed => write!(f, "이미 종료된 writer에 프레임 기록 시도"),
            AnimationError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            AnimationError::Image(e) => write!(f, "이미지 인코딩 오류: {e}"),
            AnimationError::Render(msg) => write!(f, "렌더링 오류: {msg}"),
        }
    }
}

impl std::error::Error for AnimationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnimationError::Io(e) => Some(e),
            AnimationError::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AnimationError {
    fn from(value: std::io::Error) -> Self {
        AnimationError::Io(value)
    }
}

impl From<image::ImageError> for AnimationError {
    fn from(value: image::ImageError) -> Self {
        AnimationError::Image(value)
    }
}
