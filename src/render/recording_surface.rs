use crate::core::{DrawRect, PixelPoint};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawingSurface, FontSpec, TextBaseline, TextHAlign};

/// One call made against a `RecordingSurface`.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    ClearRect(DrawRect),
    BeginPath,
    MoveTo(PixelPoint),
    LineTo(PixelPoint),
    BezierCurveTo {
        cp1: PixelPoint,
        cp2: PixelPoint,
        end: PixelPoint,
    },
    Arc {
        center: PixelPoint,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    Stroke {
        color: Color,
        width: f64,
    },
    Fill {
        color: Color,
    },
    Text {
        text: String,
        at: PixelPoint,
        align: TextHAlign,
        baseline: TextBaseline,
        color: Color,
    },
    SaveFrame,
    RestoreFrame,
}

/// Headless surface that records every drawing call.
///
/// Used by tests and by hosts that want the chart's output as data. It still
/// validates coordinates so invalid geometry is caught without a real backend.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<SurfaceCommand>,
    stroke_color: Color,
    fill_color: Color,
    line_width: f64,
    font: FontSpec,
    align: Option<TextHAlign>,
    baseline: Option<TextBaseline>,
    has_frame: bool,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self {
            line_width: 1.0,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// Drains the command log, keeping any saved frame.
    pub fn take_commands(&mut self) -> Vec<SurfaceCommand> {
        std::mem::take(&mut self.commands)
    }

    #[must_use]
    pub fn has_frame(&self) -> bool {
        self.has_frame
    }

    #[must_use]
    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    /// Texts drawn so far, in order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                SurfaceCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn count(&self, predicate: impl Fn(&SurfaceCommand) -> bool) -> usize {
        self.commands.iter().filter(|command| predicate(command)).count()
    }

    fn push_point(&mut self, point: PixelPoint, make: fn(PixelPoint) -> SurfaceCommand) {
        debug_assert!(
            point.x.is_finite() && point.y.is_finite(),
            "non-finite path coordinate"
        );
        self.commands.push(make(point));
    }
}

impl DrawingSurface for RecordingSurface {
    fn clear_rect(&mut self, rect: DrawRect) -> ChartResult<()> {
        if !rect.width.is_finite() || !rect.height.is_finite() {
            return Err(ChartError::InvalidGeometry(
                "clear rect must be finite".to_owned(),
            ));
        }
        self.commands.push(SurfaceCommand::ClearRect(rect));
        Ok(())
    }

    fn begin_path(&mut self) {
        self.commands.push(SurfaceCommand::BeginPath);
    }

    fn move_to(&mut self, point: PixelPoint) {
        self.push_point(point, SurfaceCommand::MoveTo);
    }

    fn line_to(&mut self, point: PixelPoint) {
        self.push_point(point, SurfaceCommand::LineTo);
    }

    fn bezier_curve_to(&mut self, cp1: PixelPoint, cp2: PixelPoint, end: PixelPoint) {
        self.commands
            .push(SurfaceCommand::BezierCurveTo { cp1, cp2, end });
    }

    fn arc(&mut self, center: PixelPoint, radius: f64, start_angle: f64, end_angle: f64) {
        self.commands.push(SurfaceCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn stroke(&mut self) -> ChartResult<()> {
        self.stroke_color.validate()?;
        self.commands.push(SurfaceCommand::Stroke {
            color: self.stroke_color,
            width: self.line_width,
        });
        Ok(())
    }

    fn fill(&mut self) -> ChartResult<()> {
        self.fill_color.validate()?;
        self.commands.push(SurfaceCommand::Fill {
            color: self.fill_color,
        });
        Ok(())
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn set_font(&mut self, font: &FontSpec) {
        self.font = font.clone();
    }

    fn set_text_align(&mut self, align: TextHAlign) {
        self.align = Some(align);
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.baseline = Some(baseline);
    }

    fn fill_text(&mut self, text: &str, at: PixelPoint) -> ChartResult<()> {
        if !at.x.is_finite() || !at.y.is_finite() {
            return Err(ChartError::InvalidGeometry(
                "text coordinates must be finite".to_owned(),
            ));
        }
        self.commands.push(SurfaceCommand::Text {
            text: text.to_owned(),
            at,
            align: self.align.unwrap_or(TextHAlign::Left),
            baseline: self.baseline.unwrap_or(TextBaseline::Alphabetic),
            color: self.fill_color,
        });
        Ok(())
    }

    fn save_frame(&mut self) -> ChartResult<()> {
        self.has_frame = true;
        self.commands.push(SurfaceCommand::SaveFrame);
        Ok(())
    }

    fn restore_frame(&mut self) -> ChartResult<()> {
        if !self.has_frame {
            return Err(ChartError::NoCachedFrame);
        }
        self.commands.push(SurfaceCommand::RestoreFrame);
        Ok(())
    }

    fn discard_frame(&mut self) {
        self.has_frame = false;
    }
}
