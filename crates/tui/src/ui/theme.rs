use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub surface: Color,
    pub text: Color,
    pub text_muted: Color,
    pub dim: Color,
    pub accent: Color,
    pub on_accent: Color,
    pub positive: Color,
    pub danger: Color,
    pub error: Color,
    pub border: Color,
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            surface: Color::Rgb(20, 20, 20),
            text: Color::Rgb(230, 230, 230),
            text_muted: Color::Rgb(170, 170, 170),
            dim: Color::Rgb(110, 110, 110),
            accent: Color::Rgb(244, 81, 30),
            on_accent: Color::Rgb(255, 255, 255),
            positive: Color::Rgb(90, 180, 110),
            danger: Color::Rgb(255, 59, 48),
            error: Color::Rgb(200, 80, 80),
            border: Color::Rgb(70, 70, 70),
            border_focused: Color::Rgb(244, 81, 30),
        }
    }
}
