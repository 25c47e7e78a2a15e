use crate::foundation::error::{ThumbError, ThumbResult};

/// Stateful helper for building Parley text layouts from raw font bytes.
///
/// The brush is unit: glyph colors are chosen at paint time (stroke then fill), not per-run.
pub struct TextShaper {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    family_name: Option<String>,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    /// Construct a shaper with fresh Parley contexts and no registered font.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            family_name: None,
        }
    }

    /// Register the font used for all subsequent layouts.
    pub fn register_font(&mut self, font_bytes: &[u8]) -> ThumbResult<()> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| ThumbError::validation("no font families registered from font bytes"))?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| ThumbError::validation("registered font family has no name"))?
            .to_string();

        self.family_name = Some(family_name);
        Ok(())
    }

    /// Return `true` once a font has been registered.
    pub fn has_font(&self) -> bool {
        self.family_name.is_some()
    }

    /// Shape and lay out a single line of text at the given size.
    ///
    /// No line breaking is applied: thumbnail text is a single run measured as one line.
    pub fn layout(&mut self, text: &str, size_px: f32, bold: bool) -> ThumbResult<parley::Layout<()>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(ThumbError::validation("text size_px must be finite and > 0"));
        }
        let family_name = self
            .family_name
            .clone()
            .ok_or_else(|| ThumbError::validation("no font registered; call register_font first"))?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        if bold {
            builder.push_default(parley::style::StyleProperty::FontWeight(
                parley::style::FontWeight::BOLD,
            ));
        }

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}
