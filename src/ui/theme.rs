use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub title: Color,
    pub weekday_header: Color,
    pub day: Color,
    pub filler_day: Color,
    pub today: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub footer: Color,
    pub status_bar: Color,
    pub help_section: Color,
    pub error: Color,
}

const fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            name: "default",
            title: Color::Cyan,
            weekday_header: Color::Yellow,
            day: Color::White,
            filler_day: Color::DarkGray,
            today: Color::Green,
            selected_bg: Color::Blue,
            selected_fg: Color::White,
            footer: Color::Gray,
            status_bar: Color::White,
            help_section: Color::Yellow,
            error: Color::Red,
        }
    }

    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox",
            title: rgb(0xfabd2f),
            weekday_header: rgb(0xfe8019),
            day: rgb(0xebdbb2),
            filler_day: rgb(0x928374),
            today: rgb(0xb8bb26),
            selected_bg: rgb(0x3c3836),
            selected_fg: rgb(0xebdbb2),
            footer: rgb(0xa89984),
            status_bar: rgb(0xebdbb2),
            help_section: rgb(0xfe8019),
            error: rgb(0xfb4934),
        }
    }

    pub fn nord() -> Self {
        Self {
            name: "nord",
            title: rgb(0x88c0d0),
            weekday_header: rgb(0xebcb8b),
            day: rgb(0xeceff4),
            filler_day: rgb(0x4c566a),
            today: rgb(0xa3be8c),
            selected_bg: rgb(0x3b4252),
            selected_fg: rgb(0xeceff4),
            footer: rgb(0xd8dee9),
            status_bar: rgb(0xd8dee9),
            help_section: rgb(0xebcb8b),
            error: rgb(0xbf616a),
        }
    }

    pub fn dracula() -> Self {
        Self {
            name: "dracula",
            title: rgb(0x8be9fd),
            weekday_header: rgb(0xf1fa8c),
            day: rgb(0xf8f8f2),
            filler_day: rgb(0x6272a4),
            today: rgb(0x50fa7b),
            selected_bg: rgb(0x44475a),
            selected_fg: rgb(0xf8f8f2),
            footer: rgb(0xbd93f9),
            status_bar: rgb(0xf8f8f2),
            help_section: rgb(0xf1fa8c),
            error: rgb(0xff5555),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            title: rgb(0x268bd2),
            weekday_header: rgb(0xb58900),
            day: rgb(0x93a1a1),
            filler_day: rgb(0x586e75),
            today: rgb(0x859900),
            selected_bg: rgb(0x073642),
            selected_fg: rgb(0x93a1a1),
            footer: rgb(0x839496),
            status_bar: rgb(0x93a1a1),
            help_section: rgb(0xb58900),
            error: rgb(0xdc322f),
        }
    }

    pub fn monokai() -> Self {
        Self {
            name: "monokai",
            title: rgb(0x66d9ef),
            weekday_header: rgb(0xe6db74),
            day: rgb(0xf8f8f0),
            filler_day: rgb(0x75715e),
            today: rgb(0xa6e22e),
            selected_bg: rgb(0x49483e),
            selected_fg: rgb(0xf8f8f0),
            footer: rgb(0xae81ff),
            status_bar: rgb(0xf8f8f0),
            help_section: rgb(0xe6db74),
            error: rgb(0xf92672),
        }
    }

    /// Looks up a theme by name, falling back to the default palette.
    pub fn get_by_name(name: &str) -> Self {
        Self::find(name).unwrap_or_else(Self::default_theme)
    }

    pub fn find(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "default" => Some(Self::default_theme()),
            "gruvbox" => Some(Self::gruvbox()),
            "nord" => Some(Self::nord()),
            "dracula" => Some(Self::dracula()),
            "solarized-dark" | "solarized" => Some(Self::solarized_dark()),
            "monokai" => Some(Self::monokai()),
            _ => None,
        }
    }

    pub fn available_themes() -> Vec<&'static str> {
        vec!["default", "gruvbox", "nord", "dracula", "solarized-dark", "monokai"]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
