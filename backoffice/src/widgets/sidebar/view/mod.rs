use iced::widget::{Column, Space, column, container, row, scrollable};
use iced::{Element, Length, alignment};

use super::event::SidebarIntent;
use super::model::SidebarViewModel;
use crate::components::icon_button::{
    IconButtonProps, view as icon_button_view,
};
use crate::components::nav_item::{NavItemProps, view as nav_item_view};
use crate::fonts::FontsConfig;
use crate::icons;
use crate::theme::ThemeProps;

const HEADER_BUTTON_SIZE: f32 = 40.0;
const HEADER_ICON_SIZE: f32 = 24.0;
const HEADER_PADDING: f32 = 8.0;
const DIVIDER_HEIGHT: f32 = 1.0;
const LIST_PADDING: f32 = 8.0;

/// Props for the drawer view.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarViewProps<'a> {
    pub(crate) vm: SidebarViewModel<'a>,
    pub(crate) width: f32,
    /// Header height; matches the app bar so the divider lines up with it.
    pub(crate) header_height: f32,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the navigation drawer: header, divider and route list.
pub(crate) fn view(props: SidebarViewProps<'_>) -> Element<'_, SidebarIntent> {
    let palette = props.theme.theme.iced_palette();
    let surface = palette.surface;
    let divider_color = palette.divider;

    let content = column![
        header(props),
        divider(divider_color),
        items(props)
    ]
    .width(Length::Fill)
    .height(Length::Fill);

    container(content)
        .width(Length::Fixed(props.width))
        .height(Length::Fill)
        .clip(true)
        .style(move |_| container::Style {
            background: Some(surface.into()),
            border: iced::Border {
                color: divider_color,
                width: DIVIDER_HEIGHT,
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

fn header(props: SidebarViewProps<'_>) -> Element<'_, SidebarIntent> {
    let mut header = row![Space::new().width(Length::Fill)]
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center);

    // The mini drawer has no room for the close button; the app bar menu
    // button reopens it.
    if props.vm.variant.shows_labels() {
        header = header.push(
            icon_button_view(IconButtonProps {
                icon: icons::CHEVRON_LEFT,
                theme: props.theme,
                size: HEADER_BUTTON_SIZE,
                icon_size: HEADER_ICON_SIZE,
            })
            .map(|_| SidebarIntent::Close),
        );
    }

    container(header)
        .width(Length::Fill)
        .height(Length::Fixed(props.header_height))
        .padding([0.0, HEADER_PADDING])
        .into()
}

fn divider<'a>(color: iced::Color) -> Element<'a, SidebarIntent> {
    container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(DIVIDER_HEIGHT))
        .style(move |_| container::Style {
            background: Some(color.into()),
            ..Default::default()
        })
        .into()
}

fn items(props: SidebarViewProps<'_>) -> Element<'_, SidebarIntent> {
    let expanded = props.vm.variant.shows_labels();

    let list = props.vm.items.iter().fold(
        Column::new().padding([LIST_PADDING, 0.0]),
        |list, item| {
            let route = item.route;
            list.push(
                nav_item_view(NavItemProps {
                    icon: item.icon,
                    label: item.label,
                    font: props.fonts.ui.font_type,
                    font_size: props.fonts.ui.size,
                    selected: props.vm.active_route == Some(route),
                    expanded,
                    theme: props.theme,
                })
                .map(move |_| SidebarIntent::Select(route)),
            )
        },
    );

    scrollable(list)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
