use egui::{pos2, vec2, Align2, FontId, Id, Rect, Ui};

use super::a11y;
use crate::services::ambient::decor::motto_word_opacity;
use crate::ui_egui::theme::{with_alpha, FestivalTheme};

/// Screen-reader name for the motto row.
pub const MOTTO_LABEL: &str = "Festival Motto";

/// Motto words laid out in a centred row near the top of the screen.
pub fn paint_motto(ui: &mut Ui, screen: Rect, words: &[String], theme: &FestivalTheme, t: f32) {
    if words.is_empty() {
        return;
    }

    let painter = ui.painter().clone();
    let size = (screen.width() * 0.025).clamp(14.0, 28.0);
    let font = FontId::proportional(size);
    let gap = size * 0.9;
    let y = screen.top() + screen.height() * 0.05 + size * 0.5;

    let widths: Vec<f32> = words
        .iter()
        .map(|word| {
            painter
                .layout_no_wrap(word.clone(), font.clone(), theme.text_primary)
                .size()
                .x
        })
        .collect();
    let total = widths.iter().sum::<f32>() + gap * (words.len() - 1) as f32;

    let left = screen.center().x - total * 0.5;
    let row = Rect::from_min_size(pos2(left, y - size * 0.6), vec2(total, size * 1.2));
    a11y::group(ui, Id::new("festival_motto"), row, MOTTO_LABEL);

    let mut x = left;
    for (index, (word, width)) in words.iter().zip(&widths).enumerate() {
        let opacity = motto_word_opacity(index, t);
        painter.text(
            pos2(x, y),
            Align2::LEFT_CENTER,
            word,
            font.clone(),
            with_alpha(theme.accent, opacity),
        );
        x += width + gap;
    }
}
