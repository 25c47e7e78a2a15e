use crate::render::surface::RenderedSurface;

/// Platform title length limit in characters.
pub const TITLE_MAX_LEN: usize = 100;

/// Placeholder shown in the preview card while the title is empty.
pub const TITLE_PLACEHOLDER: &str = "Your Video Title Will Appear Here";

/// Truncate a title for card display.
///
/// Titles of at most `max_len` characters pass through unchanged; longer ones are cut to
/// `max_len - 3` characters plus `"..."`, so the result is exactly `max_len` characters.
pub fn truncate_title(title: &str, max_len: usize) -> String {
    if title.chars().count() <= max_len {
        return title.to_string();
    }
    let keep = max_len.saturating_sub(3);
    let mut out: String = title.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Circular channel identity badge next to the preview title.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelChip {
    /// First character of the channel name, uppercased.
    pub initial: String,
    /// Channel display name.
    pub name: String,
    /// Static relative timestamp shown under the name.
    pub posted_label: &'static str,
}

impl ChannelChip {
    /// Build the chip for a channel name.
    pub fn new(channel_name: &str) -> Self {
        let initial = channel_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default();
        Self {
            initial,
            name: channel_name.to_string(),
            posted_label: "Just now",
        }
    }
}

/// Display-only mirror of the latest rendered surface, styled like the platform's video card.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewCard {
    /// Pixel-for-pixel copy of the source surface, same 1280x720 dimensions.
    pub surface: RenderedSurface,
    /// Truncated title line (or the placeholder while the title is empty).
    pub display_title: String,
    /// Character count of the actual title, before truncation or placeholder substitution.
    pub char_count: usize,
    /// Whether the title exceeds the platform limit; switches the card to error styling.
    pub over_length: bool,
    /// Channel identity badge.
    pub channel: ChannelChip,
}

impl PreviewCard {
    /// Character-count caption, `"{n}/100 characters"`, flagged when over the limit.
    pub fn length_label(&self) -> String {
        if self.over_length {
            format!("(Too long) {}/{} characters", self.char_count, TITLE_MAX_LEN)
        } else {
            format!("{}/{} characters", self.char_count, TITLE_MAX_LEN)
        }
    }
}

/// Mirror the latest surface into a preview card.
///
/// Invoked whenever the source surface changes; the copy is display-only and carries the
/// derived title-length metadata along with it.
pub fn mirror_to_preview(
    surface: &RenderedSurface,
    title: &str,
    channel_name: &str,
) -> PreviewCard {
    let char_count = title.chars().count();
    let display_title = if title.is_empty() {
        TITLE_PLACEHOLDER.to_string()
    } else {
        truncate_title(title, TITLE_MAX_LEN)
    };

    PreviewCard {
        surface: surface.clone(),
        display_title,
        char_count,
        over_length: char_count > TITLE_MAX_LEN,
        channel: ChannelChip::new(channel_name),
    }
}

#[cfg(test)]
#[path = "../tests/unit/preview.rs"]
mod tests;
