use iced::widget::{button, container, svg};
use iced::{Border, Color, Element, Length, alignment};

use crate::theme::{StyleOverrides, ThemeProps};

/// UI events emitted by an icon button.
#[derive(Debug, Clone)]
pub(crate) enum IconButtonEvent {
    Pressed,
}

/// Props for rendering an icon button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IconButtonProps<'a> {
    pub(crate) icon: &'static [u8],
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) size: f32,
    pub(crate) icon_size: f32,
}

const ICON_BUTTON_PADDING: f32 = 0.0;

/// Render a round icon button.
pub(crate) fn view<'a>(
    props: IconButtonProps<'a>,
) -> Element<'a, IconButtonEvent> {
    let palette = props.theme.theme.iced_palette();
    let (base_color, hover_color) = resolve_colors(
        palette.dim_foreground,
        palette.primary,
        props.theme.overrides,
    );
    let hover_background = palette.hover;

    let icon = svg::Svg::new(svg::Handle::from_memory(props.icon))
        .width(Length::Fixed(props.icon_size))
        .height(Length::Fixed(props.icon_size))
        .style(move |_, status| {
            let color = if matches!(status, svg::Status::Hovered) {
                hover_color
            } else {
                base_color
            };

            svg::Style { color: Some(color) }
        });

    let icon_container = container(icon)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let radius = props.size / 2.0;
    button(icon_container)
        .on_press(IconButtonEvent::Pressed)
        .padding(ICON_BUTTON_PADDING)
        .width(Length::Fixed(props.size))
        .height(Length::Fixed(props.size))
        .style(move |_, status| button::Style {
            background: matches!(
                status,
                button::Status::Hovered | button::Status::Pressed
            )
            .then_some(hover_background.into()),
            border: Border {
                radius: radius.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

/// Idle and hover icon colors.
fn resolve_colors(
    default_base: Color,
    accent: Color,
    overrides: Option<StyleOverrides>,
) -> (Color, Color) {
    match overrides.and_then(|overrides| overrides.foreground) {
        Some(color) => (color, color),
        None => (default_base, accent),
    }
}
