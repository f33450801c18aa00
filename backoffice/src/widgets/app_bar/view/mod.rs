use iced::widget::{Space, container, row, text};
use iced::{Element, Length, alignment};

use super::event::AppBarIntent;
use super::model::AppBarViewModel;
use crate::components::icon_button::{
    IconButtonEvent, IconButtonProps, view as icon_button_view,
};
use crate::fonts::FontsConfig;
use crate::icons;
use crate::theme::{StyleOverrides, ThemeProps};

const MENU_BUTTON_SIZE: f32 = 40.0;
const MENU_ICON_SIZE: f32 = 24.0;
const APP_BAR_HORIZONTAL_PADDING: f32 = 16.0;
const MENU_BUTTON_MARGIN: f32 = 20.0;
const SUBTITLE_SEPARATOR: &str = "  /  ";

/// Props for rendering the app bar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AppBarProps<'a> {
    pub(crate) vm: AppBarViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the fixed top bar. Its height follows the viewport class; the root
/// view measures the laid-out result.
pub(crate) fn view<'a>(props: AppBarProps<'a>) -> Element<'a, AppBarIntent> {
    let palette = props.theme.theme.iced_palette();
    let background = palette.primary;
    let on_primary = palette.on_primary;

    // Icons sit on the primary color.
    let button_theme = props.theme.with_overrides(StyleOverrides {
        background: None,
        foreground: Some(on_primary),
    });

    let mut content = row![].align_y(alignment::Vertical::Center);

    if props.vm.show_mobile_toggle {
        content = content
            .push(menu_button(button_theme).map(|_| AppBarIntent::OpenMobileDrawer))
            .push(Space::new().width(MENU_BUTTON_MARGIN));
    }
    if props.vm.show_desktop_toggle {
        content = content
            .push(
                menu_button(button_theme).map(|_| AppBarIntent::OpenDesktopDrawer),
            )
            .push(Space::new().width(MENU_BUTTON_MARGIN));
    }

    let heading = match props.vm.subtitle {
        Some(subtitle) => {
            format!("{}{SUBTITLE_SEPARATOR}{subtitle}", props.vm.title)
        },
        None => props.vm.title.to_string(),
    };
    content = content.push(
        text(heading)
            .size(props.fonts.title.size)
            .font(props.fonts.title.font_type)
            .wrapping(text::Wrapping::None),
    );

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(props.vm.toolbar_height))
        .padding([0.0, APP_BAR_HORIZONTAL_PADDING])
        .align_y(alignment::Vertical::Center)
        .clip(true)
        .style(move |_| container::Style {
            background: Some(background.into()),
            text_color: Some(on_primary),
            ..Default::default()
        })
        .into()
}

fn menu_button(theme: ThemeProps<'_>) -> Element<'_, IconButtonEvent> {
    icon_button_view(IconButtonProps {
        icon: icons::MENU,
        theme,
        size: MENU_BUTTON_SIZE,
        icon_size: MENU_ICON_SIZE,
    })
}
