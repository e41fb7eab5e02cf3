use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub surface: Color,
    pub border: Color,
    pub border_focused: Color,
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub positive: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            surface: Color::Rgb(20, 26, 32),
            border: Color::Rgb(60, 70, 80),
            border_focused: Color::Rgb(80, 160, 160),
            text: Color::Rgb(220, 220, 220),
            dim: Color::Rgb(140, 140, 140),
            accent: Color::Rgb(80, 160, 160),
            positive: Color::Rgb(90, 180, 110),
            error: Color::Rgb(200, 80, 80),
        }
    }
}
