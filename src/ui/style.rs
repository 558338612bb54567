use crate::geometry::Color;

/// Compile-time layout tokens — not user-overridable
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleTokens {
    pub window_width: i32,
    pub window_height: i32,
    pub spacing_5: i32,
    pub entry_font_size: u16,
    pub trigger_font_size: u16,
    pub trigger_canvas_width: i32,
    pub trigger_canvas_height: i32,
    pub trigger_rect_x1: f64,
    pub trigger_rect_y1: f64,
    pub trigger_rect_x2: f64,
    pub trigger_rect_y2: f64,
    pub trigger_corner_radius: f64,
    pub trigger_smoothing_steps: usize,
}

pub const LAYOUT_TOKENS: StyleTokens = StyleTokens {
    window_width: 400,
    window_height: 300,
    spacing_5: 5,
    entry_font_size: 12,
    trigger_font_size: 14,
    trigger_canvas_width: 200,
    trigger_canvas_height: 50,
    trigger_rect_x1: 10.0,
    trigger_rect_y1: 10.0,
    trigger_rect_x2: 190.0,
    trigger_rect_y2: 40.0,
    trigger_corner_radius: 10.0,
    trigger_smoothing_steps: 12,
};

pub const FONT_NAME: &str = "Candara";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTokens {
    pub app_background: Color,
    pub trigger_fill: Color,
    pub trigger_fill_hover: Color,
    pub trigger_text: Color,
    pub entry_hint_foreground: Color,
    pub entry_foreground: Color,
}

pub const COLOR_TOKENS: ColorTokens = ColorTokens {
    app_background: Color::new(0xF4, 0xBF, 0xC3),
    trigger_fill: Color::new(0xF0, 0x6A, 0x85),
    trigger_fill_hover: Color::new(0xD3, 0x58, 0x74),
    trigger_text: Color::new(0xFF, 0xFF, 0xFF),
    entry_hint_foreground: Color::new(0x80, 0x80, 0x80),
    entry_foreground: Color::new(0x00, 0x00, 0x00),
};

#[cfg(test)]
mod tests {
    use super::{COLOR_TOKENS, LAYOUT_TOKENS};

    #[test]
    fn layout_tokens_keep_the_fixed_window_size() {
        assert_eq!(LAYOUT_TOKENS.window_width, 400);
        assert_eq!(LAYOUT_TOKENS.window_height, 300);
    }

    #[test]
    fn trigger_rect_fits_inside_its_canvas() {
        let tokens = LAYOUT_TOKENS;
        assert!(tokens.trigger_rect_x2 <= f64::from(tokens.trigger_canvas_width));
        assert!(tokens.trigger_rect_y2 <= f64::from(tokens.trigger_canvas_height));
        let shorter_side = (tokens.trigger_rect_x2 - tokens.trigger_rect_x1)
            .min(tokens.trigger_rect_y2 - tokens.trigger_rect_y1);
        assert!(tokens.trigger_corner_radius <= shorter_side / 2.0);
    }

    #[test]
    fn color_tokens_match_the_trigger_palette() {
        assert_eq!(COLOR_TOKENS.trigger_fill.to_css_hex(), "#F06A85");
        assert_eq!(COLOR_TOKENS.trigger_fill_hover.to_css_hex(), "#D35874");
        assert_eq!(COLOR_TOKENS.app_background.to_css_hex(), "#F4BFC3");
    }
}
