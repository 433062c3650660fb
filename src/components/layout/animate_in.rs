use dioxus::prelude::*;

/// Where an element travels from while it fades in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
    /// Opacity only
    Fade,
}

impl Direction {
    pub fn class(self) -> &'static str {
        match self {
            Direction::Up => "animate-in animate-in-up",
            Direction::Down => "animate-in animate-in-down",
            Direction::Left => "animate-in animate-in-left",
            Direction::Right => "animate-in animate-in-right",
            Direction::Fade => "animate-in",
        }
    }
}

/// Entrance transition driven entirely by CSS keyframes in `main.css`.
#[component]
pub fn AnimateIn(
    #[props(default)] delay: u32,
    #[props(default)] direction: Direction,
    children: Element,
) -> Element {
    let class = direction.class();

    rsx! {
        div {
            class: "{class}",
            style: "animation-delay: {delay}ms;",
            {children}
        }
    }
}
