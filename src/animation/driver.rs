use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{gif, AnimationError, AxisHandle, Figure, FrameWriter, LineHandle};

/// 화면 재생 시 프레임 간격 [ms]. 내보내기 속도와는 무관하다.
pub const DEFAULT_INTERVAL_MS: u64 = 200;
/// 내보내기 해상도.
pub const DEFAULT_EXPORT_DPI: u32 = 300;

/// [`animate`] 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimateOptions {
    /// 지정하면 애니메이션을 이 경로로 내보낸다 (`.gif`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<PathBuf>,
    /// 내보낸 애니메이션의 전체 재생 시간 [s]
    pub length_secs: f64,
    /// `true`이면 데이터 범위로 축 범위를 다시 잡는다.
    pub set_margins: bool,
    /// 축 여백 비율. `set_margins`일 때만 사용한다.
    pub margin_fraction: f64,
    pub interval_ms: u64,
    pub dpi: u32,
}

impl Default for AnimateOptions {
    fn default() -> Self {
        Self {
            filename: None,
            length_secs: 5.0,
            set_margins: false,
            margin_fraction: 0.05,
            interval_ms: DEFAULT_INTERVAL_MS,
            dpi: DEFAULT_EXPORT_DPI,
        }
    }
}

/// `[min - f*ptp, max + f*ptp]`. 값이 없으면 `None`.
pub fn margin_limits(values: &[f64], fraction: f64) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let pad = fraction * (max - min);
    Some((min - pad, max + pad))
}

/// 선 데이터를 프레임마다 한 점씩 드러내는 애니메이션 핸들.
///
/// 생성 시점의 전체 x/y 데이터를 보관하고, 프레임 `f`에서 선의 표시 데이터를
/// 앞쪽 `f + 1`개 점으로 바꾼다. 선은 핸들이 살아 있는 동안 빌려진다.
pub struct Animation<'a, L: LineHandle> {
    line: &'a mut L,
    x_vals: Vec<f64>,
    y_vals: Vec<f64>,
    interval_ms: u64,
}

impl<'a, L: LineHandle> Animation<'a, L> {
    pub fn new(line: &'a mut L, interval_ms: u64) -> Self {
        let (x_vals, y_vals) = line.xy_data();
        if x_vals.len() != y_vals.len() {
            log::warn!(
                "x/y length mismatch ({} vs {}), frames will show the shorter prefix",
                x_vals.len(),
                y_vals.len()
            );
        }
        Self {
            line,
            x_vals,
            y_vals,
            interval_ms,
        }
    }

    /// 프레임 수 = x 데이터 점 개수.
    pub fn frame_count(&self) -> usize {
        self.x_vals.len()
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// 재생 시간이 `length_secs`가 되도록 하는 내보내기 프레임 속도.
    pub fn export_fps(&self, length_secs: f64) -> f64 {
        self.frame_count() as f64 / length_secs
    }

    pub fn line(&self) -> &L {
        &*self.line
    }

    /// 전체 데이터 기준으로 축 범위를 여백과 함께 설정한다.
    pub fn apply_margins<A: AxisHandle + ?Sized>(&self, axis: &mut A, fraction: f64) {
        if let Some(lim) = margin_limits(&self.x_vals, fraction) {
            axis.set_xlim(lim);
        }
        if let Some(lim) = margin_limits(&self.y_vals, fraction) {
            axis.set_ylim(lim);
        }
    }

    /// 선의 표시 데이터를 앞쪽 `frame + 1`개 점으로 바꾼다.
    pub fn draw_frame(&mut self, frame: usize) {
        let end = (frame + 1).min(self.x_vals.len()).min(self.y_vals.len());
        self.line.set_data(&self.x_vals[..end], &self.y_vals[..end]);
    }

    /// 프레임 `0..N`을 순서대로 그려 `writer`에 기록한다.
    pub fn play(
        &mut self,
        axis: &dyn AxisHandle,
        writer: &mut dyn FrameWriter,
    ) -> Result<(), AnimationError> {
        for frame in 0..self.frame_count() {
            self.draw_frame(frame);
            writer.write_frame(frame, &*self.line, axis)?;
        }
        writer.finish()
    }

    /// 확장자에 맞는 writer로 전체 프레임을 내보낸다.
    pub fn save(
        &mut self,
        path: &Path,
        figure: &Figure,
        axis: &dyn AxisHandle,
        length_secs: f64,
        dpi: u32,
    ) -> Result<(), AnimationError> {
        if self.frame_count() == 0 {
            return Err(AnimationError::EmptyData);
        }
        let fps = self.export_fps(length_secs);
        let mut writer = gif::writer_for_path(path, figure, fps, dpi)?;
        log::info!(
            "exporting {} frames to {} at {fps:.3} fps",
            self.frame_count(),
            path.display()
        );
        self.play_or_discard(path, axis, writer.as_mut())
    }

    // 실패하면 쓰다 만 파일을 남기지 않는다.
    fn play_or_discard(
        &mut self,
        path: &Path,
        axis: &dyn AxisHandle,
        writer: &mut dyn FrameWriter,
    ) -> Result<(), AnimationError> {
        let result = self.play(axis, writer);
        if result.is_err() {
            if let Err(e) = std::fs::remove_file(path) {
                log::warn!("could not remove partial export {}: {e}", path.display());
            }
        }
        result
    }
}

/// 선을 한 점씩 그려 나가는 애니메이션을 만든다.
///
/// `set_margins`이면 재생 전에 한 번 축 범위를 조정하고, `filename`이 있으면
/// 전체 프레임을 `N / length_secs` fps로 내보낸다. 반환된 핸들로 화면 재생을
/// 이어서 구동할 수 있다.
pub fn animate<'a, L, A>(
    line: &'a mut L,
    figure: &Figure,
    axis: &mut A,
    options: &AnimateOptions,
) -> Result<Animation<'a, L>, AnimationError>
where
    L: LineHandle,
    A: AxisHandle,
{
    let mut animation = Animation::new(line, options.interval_ms);
    log::debug!(
        "animating {} points (interval {} ms)",
        animation.frame_count(),
        animation.interval_ms()
    );

    if options.set_margins {
        animation.apply_margins(axis, options.margin_fraction);
    }

    if let Some(path) = &options.filename {
        animation.save(path, figure, &*axis, options.length_secs, options.dpi)?;
    }

    Ok(animation)
}

/// 여러 선 중 첫 번째 선만 애니메이션한다.
pub fn animate_first<'a, L, A>(
    lines: &'a mut [L],
    figure: &Figure,
    axis: &mut A,
    options: &AnimateOptions,
) -> Result<Animation<'a, L>, AnimationError>
where
    L: LineHandle,
    A: AxisHandle,
{
    let line = lines.first_mut().ok_or(AnimationError::NoLine)?;
    animate(line, figure, axis, options)
}
