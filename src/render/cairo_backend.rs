use cairo::{Context, Format, ImageSurface, LineJoin, Operator};
use pango::FontDescription;

use crate::core::{DrawRect, PixelPoint};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawingSurface, FontSpec, TextBaseline, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub strokes: usize,
    pub fills: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango + PangoCairo drawing surface.
///
/// Wraps either an offscreen image surface (`CairoSurface::offscreen`) or an
/// external context such as a GTK `DrawingArea` callback
/// (`CairoSurface::from_context`). Painting follows 2D-canvas semantics: the
/// current path survives `stroke`/`fill` until the next `begin_path`.
#[derive(Debug)]
pub struct CairoSurface {
    context: Context,
    width: i32,
    height: i32,
    stroke_color: Color,
    fill_color: Color,
    line_width: f64,
    font: FontDescription,
    align: TextHAlign,
    baseline: TextBaseline,
    frame: Option<ImageSurface>,
    stats: CairoRenderStats,
}

impl CairoSurface {
    pub fn offscreen(width: i32, height: i32) -> ChartResult<(Self, ImageSurface)> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidGeometry(
                "cairo surface size must be > 0".to_owned(),
            ));
        }
        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        Ok((Self::from_context(context, width, height), surface))
    }

    #[must_use]
    pub fn from_context(context: Context, width: i32, height: i32) -> Self {
        context.set_line_join(LineJoin::Bevel);
        Self {
            context,
            width,
            height,
            stroke_color: Color::BLACK,
            fill_color: Color::BLACK,
            line_width: 1.0,
            font: font_description(&FontSpec::default()),
            align: TextHAlign::Left,
            baseline: TextBaseline::Alphabetic,
            frame: None,
            stats: CairoRenderStats::default(),
        }
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn context(&self) -> &Context {
        &self.context
    }

    #[must_use]
    pub fn stats(&self) -> CairoRenderStats {
        self.stats
    }
}

impl DrawingSurface for CairoSurface {
    fn clear_rect(&mut self, rect: DrawRect) -> ChartResult<()> {
        let context = &self.context;
        context
            .save()
            .map_err(|err| map_backend_error("failed to save cairo state", err))?;
        context.new_path();
        context.set_operator(Operator::Clear);
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        let filled = context.fill();
        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore cairo state", err))?;
        filled.map_err(|err| map_backend_error("failed to clear rectangle", err))
    }

    fn begin_path(&mut self) {
        self.context.new_path();
    }

    fn move_to(&mut self, point: PixelPoint) {
        self.context.move_to(point.x, point.y);
    }

    fn line_to(&mut self, point: PixelPoint) {
        self.context.line_to(point.x, point.y);
    }

    fn bezier_curve_to(&mut self, cp1: PixelPoint, cp2: PixelPoint, end: PixelPoint) {
        self.context
            .curve_to(cp1.x, cp1.y, cp2.x, cp2.y, end.x, end.y);
    }

    fn arc(&mut self, center: PixelPoint, radius: f64, start_angle: f64, end_angle: f64) {
        self.context
            .arc(center.x, center.y, radius, start_angle, end_angle);
    }

    fn stroke(&mut self) -> ChartResult<()> {
        apply_color(&self.context, self.stroke_color);
        self.context.set_line_width(self.line_width);
        self.context
            .stroke_preserve()
            .map_err(|err| map_backend_error("failed to stroke path", err))?;
        self.stats.strokes += 1;
        Ok(())
    }

    fn fill(&mut self) -> ChartResult<()> {
        apply_color(&self.context, self.fill_color);
        self.context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill path", err))?;
        self.stats.fills += 1;
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
        self.font = font_description(font);
    }

    fn set_text_align(&mut self, align: TextHAlign) {
        self.align = align;
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.baseline = baseline;
    }

    fn fill_text(&mut self, text: &str, at: PixelPoint) -> ChartResult<()> {
        let layout = pangocairo::functions::create_layout(&self.context);
        layout.set_font_description(Some(&self.font));
        layout.set_text(text);

        let (text_width, text_height) = layout.pixel_size();
        let x = match self.align {
            TextHAlign::Left => at.x,
            TextHAlign::Center => at.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => at.x - f64::from(text_width),
        };
        let y = match self.baseline {
            TextBaseline::Top => at.y,
            TextBaseline::Middle => at.y - f64::from(text_height) / 2.0,
            TextBaseline::Alphabetic => at.y - f64::from(layout.baseline()) / f64::from(pango::SCALE),
        };

        self.context.new_path();
        apply_color(&self.context, self.fill_color);
        self.context.move_to(x, y);
        pangocairo::functions::show_layout(&self.context, &layout);
        self.context.new_path();
        self.stats.texts_drawn += 1;
        Ok(())
    }

    fn save_frame(&mut self) -> ChartResult<()> {
        let snapshot = ImageSurface::create(Format::ARgb32, self.width, self.height)
            .map_err(|err| map_backend_error("failed to allocate frame cache", err))?;
        let snapshot_context = Context::new(&snapshot)
            .map_err(|err| map_backend_error("failed to create frame cache context", err))?;
        snapshot_context
            .set_source_surface(self.context.target(), 0.0, 0.0)
            .map_err(|err| map_backend_error("failed to read frame", err))?;
        snapshot_context
            .paint()
            .map_err(|err| map_backend_error("failed to copy frame", err))?;
        drop(snapshot_context);
        self.frame = Some(snapshot);
        Ok(())
    }

    fn restore_frame(&mut self) -> ChartResult<()> {
        let Some(frame) = &self.frame else {
            return Err(ChartError::NoCachedFrame);
        };
        let context = &self.context;
        context
            .save()
            .map_err(|err| map_backend_error("failed to save cairo state", err))?;
        context.new_path();
        context.set_operator(Operator::Source);
        let painted = context
            .set_source_surface(frame, 0.0, 0.0)
            .and_then(|()| context.paint());
        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore cairo state", err))?;
        painted.map_err(|err| map_backend_error("failed to restore frame", err))
    }

    fn discard_frame(&mut self) {
        self.frame = None;
    }
}

fn font_description(font: &FontSpec) -> FontDescription {
    FontDescription::from_string(&format!("{} {}", font.family, font.size_pt))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
