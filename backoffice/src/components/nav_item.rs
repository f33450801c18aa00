use iced::widget::button::Status as ButtonStatus;
use iced::widget::{Space, button, container, row, svg, text};
use iced::{Border, Color, Element, Length, alignment};

use crate::theme::{IcedColorPalette, ThemeProps};

const NAV_ITEM_HEIGHT: f32 = 48.0;
const NAV_ICON_SIZE: f32 = 24.0;
/// Icon slot width; equals the closed drawer width minus its border.
const NAV_ICON_SLOT_WIDTH: f32 = 64.0;
const NAV_LABEL_SPACING: f32 = 8.0;

/// UI events emitted by a navigation item.
#[derive(Debug, Clone)]
pub(crate) enum NavItemEvent {
    Pressed,
}

/// Props for rendering a drawer navigation item.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NavItemProps<'a> {
    pub(crate) icon: &'static [u8],
    pub(crate) label: &'a str,
    pub(crate) font: iced::Font,
    pub(crate) font_size: f32,
    pub(crate) selected: bool,
    /// Render the label next to the icon.
    pub(crate) expanded: bool,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render a single drawer row.
pub(crate) fn view<'a>(props: NavItemProps<'a>) -> Element<'a, NavItemEvent> {
    let palette = props.theme.theme.iced_palette();
    let selected = props.selected;
    let selected_background = props
        .theme
        .overrides
        .and_then(|overrides| overrides.background)
        .unwrap_or(palette.selected);
    let icon_color = icon_color(palette, selected);

    let icon = svg::Svg::new(svg::Handle::from_memory(props.icon))
        .width(Length::Fixed(NAV_ICON_SIZE))
        .height(Length::Fixed(NAV_ICON_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(icon_color),
        });

    let icon_slot = container(icon)
        .width(Length::Fixed(NAV_ICON_SLOT_WIDTH))
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let content: Element<'a, NavItemEvent> = if props.expanded {
        let label = text(props.label)
            .size(props.font_size)
            .font(props.font)
            .width(Length::Fill)
            .align_y(alignment::Vertical::Center);

        row![icon_slot, label, Space::new().width(NAV_LABEL_SPACING)]
            .height(Length::Fill)
            .align_y(alignment::Vertical::Center)
            .into()
    } else {
        icon_slot.into()
    };

    button(content)
        .padding(0)
        .width(Length::Fill)
        .height(Length::Fixed(NAV_ITEM_HEIGHT))
        .style(move |_, status| {
            nav_button_style(palette, selected_background, selected, status)
        })
        .on_press(NavItemEvent::Pressed)
        .into()
}

fn icon_color(palette: &IcedColorPalette, selected: bool) -> Color {
    if selected {
        palette.primary
    } else {
        palette.dim_foreground
    }
}

fn nav_button_style(
    palette: &IcedColorPalette,
    selected_background: Color,
    selected: bool,
    status: ButtonStatus,
) -> button::Style {
    let background = match (selected, status) {
        (true, _) => Some(selected_background.into()),
        (false, ButtonStatus::Hovered | ButtonStatus::Pressed) => {
            Some(palette.hover.into())
        },
        _ => None,
    };

    let text_color = if selected {
        palette.primary
    } else {
        palette.foreground
    };

    button::Style {
        background,
        text_color,
        border: Border {
            width: 0.0,
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use iced::Background;
    use iced::widget::button::Status as ButtonStatus;

    use super::{icon_color, nav_button_style};
    use crate::theme::AppTheme;

    #[test]
    fn given_selected_item_when_building_style_then_uses_selected_colors() {
        let theme = AppTheme::default();
        let palette = theme.iced_palette();

        let style =
            nav_button_style(palette, palette.selected, true, ButtonStatus::Active);

        assert_eq!(style.text_color, palette.primary);
        assert_eq!(style.background, Some(Background::Color(palette.selected)));
        assert_eq!(icon_color(palette, true), palette.primary);
    }

    #[test]
    fn given_hovered_item_when_building_style_then_uses_hover_background() {
        let theme = AppTheme::default();
        let palette = theme.iced_palette();

        let style = nav_button_style(
            palette,
            palette.selected,
            false,
            ButtonStatus::Hovered,
        );

        assert_eq!(style.text_color, palette.foreground);
        assert_eq!(style.background, Some(Background::Color(palette.hover)));
    }

    #[test]
    fn given_idle_item_when_building_style_then_background_is_transparent() {
        let theme = AppTheme::default();
        let palette = theme.iced_palette();

        let style =
            nav_button_style(palette, palette.selected, false, ButtonStatus::Active);

        assert_eq!(style.background, None);
        assert_eq!(icon_color(palette, false), palette.dim_foreground);
    }
}
