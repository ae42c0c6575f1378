use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::Duration;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, DynamicImage, Frame};

use super::render::render_frame;
use super::{AnimationError, AxisHandle, Figure, FrameWriter, LineHandle};

/// 프레임 속도에 해당하는 프레임 간 지연. 유효하지 않은 fps는 0 지연.
pub fn frame_delay(fps: f64) -> Delay {
    let secs = 1.0 / fps;
    let duration = if secs.is_finite() && secs > 0.0 {
        Duration::from_secs_f64(secs)
    } else {
        Duration::ZERO
    };
    Delay::from_saturating_duration(duration)
}

/// 무한 반복 GIF로 프레임을 기록하는 writer.
pub struct GifWriter {
    encoder: Option<GifEncoder<BufWriter<File>>>,
    figure: Figure,
    dpi: u32,
    delay: Delay,
    frames: usize,
}

impl GifWriter {
    pub fn create(
        path: impl AsRef<Path>,
        figure: &Figure,
        fps: f64,
        dpi: u32,
    ) -> Result<Self, AnimationError> {
        let file = File::create(path.as_ref())?;
        let mut encoder = GifEncoder::new(BufWriter::new(file));
        encoder.set_repeat(Repeat::Infinite)?;
        Ok(Self {
            encoder: Some(encoder),
            figure: figure.clone(),
            dpi,
            delay: frame_delay(fps),
            frames: 0,
        })
    }

    pub fn frames_written(&self) -> usize {
        self.frames
    }
}

impl FrameWriter for GifWriter {
    fn write_frame(
        &mut self,
        index: usize,
        line: &dyn LineHandle,
        axis: &dyn AxisHandle,
    ) -> Result<(), AnimationError> {
        let encoder = self.encoder.as_mut().ok_or(AnimationError::WriterClosed)?;
        let rgb = render_frame(&self.figure, self.dpi, line, axis)?;
        let rgba = DynamicImage::ImageRgb8(rgb).into_rgba8();
        encoder.encode_frame(Frame::from_parts(rgba, 0, 0, self.delay))?;
        self.frames += 1;
        log::trace!("encoded gif frame {index}");
        Ok(())
    }

    fn finish(&mut self) -> Result<(), AnimationError> {
        // GIF trailer는 encoder drop 시 기록되며, 이때의 입출력 오류는 전달되지 않는다.
        if self.encoder.take().is_some() {
            log::debug!("gif finished with {} frames", self.frames);
        }
        Ok(())
    }
}

/// 파일 확장자로 writer를 고른다. 현재는 `.gif`만 지원한다.
pub fn writer_for_path(
    path: &Path,
    figure: &Figure,
    fps: f64,
    dpi: u32,
) -> Result<Box<dyn FrameWriter>, AnimationError> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "gif" => Ok(Box::new(GifWriter::create(path, figure, fps, dpi)?)),
        _ => Err(AnimationError::UnsupportedFormat(path.display().to_string())),
    }
}
