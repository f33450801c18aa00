use iced::widget::{Space, Stack, column, container, mouse_area, row};
use iced::{Element, Length, Padding, Theme};

use super::{App, AppEvent};
use crate::layout::measure_app_bar;
use crate::navigation::NavigationViewModel;
use crate::pages::{self, PageProps};
use crate::theme::ThemeProps;
use crate::widgets::app_bar::AppBarEvent;
use crate::widgets::app_bar::view::{self as app_bar_view, AppBarProps};
use crate::widgets::sidebar::view::{self as sidebar_view, SidebarViewProps};
use crate::widgets::sidebar::{
    DrawerVariant, SidebarEvent, SidebarIntent, SidebarViewModel,
};

/// Render the root application view.
///
/// Layers, bottom to top: drawer and routed page side by side, the app bar
/// (shifted right of an open desktop drawer), and on narrow viewports the
/// open temporary drawer above a scrim.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme_props = ThemeProps::new(app.theme_manager.current());
    let navigation = app.navigation.vm();
    let sidebar_vm = app
        .widgets
        .sidebar
        .vm(&navigation, app.router.active_route());

    let mut layers: Vec<Element<'_, AppEvent, Theme, iced::Renderer>> = vec![
        view_body(app, sidebar_vm, theme_props),
        view_app_bar(app, &navigation, theme_props),
    ];

    if sidebar_vm.variant == DrawerVariant::Temporary {
        layers.push(view_scrim(theme_props));
        layers.push(view_drawer(
            app,
            sidebar_vm,
            app.layout.open_drawer_width(),
            theme_props,
        ));
    }

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_body<'a>(
    app: &'a App,
    sidebar_vm: SidebarViewModel<'a>,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let layout = &app.layout;
    let palette = theme_props.theme.iced_palette();
    let background = palette.background;
    let foreground = palette.foreground;

    let page = pages::view(PageProps {
        page: app.router.current_page(),
        path: app.router.current_path(),
        can_go_back: app.router.can_go_back(),
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(AppEvent::Page);

    let main = column![
        Space::new().height(layout.app_bar_height()),
        container(page)
            .width(Length::Fill)
            .height(Length::Fixed(layout.content_min_height())),
    ]
    .width(Length::Fill)
    .height(Length::Fill);

    let rail = SidebarViewModel {
        variant: sidebar_vm.variant.in_flow(),
        ..sidebar_vm
    };
    let width = layout.drawer_flow_width(app.navigation.is_open_desktop());
    let body = row![view_drawer(app, rail, width, theme_props), main];

    container(body.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(background.into()),
            text_color: Some(foreground),
            ..Default::default()
        })
        .into()
}

fn view_app_bar<'a>(
    app: &'a App,
    navigation: &NavigationViewModel,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let layout = &app.layout;
    let vm = app
        .widgets
        .app_bar
        .vm(navigation, layout.viewport_class());

    let app_bar = app_bar_view::view(AppBarProps {
        vm,
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(|intent| AppEvent::AppBar(AppBarEvent::Intent(intent)));
    let app_bar = measure_app_bar(
        app_bar,
        layout.app_bar_measure_key(),
        AppEvent::Layout,
    );

    container(app_bar)
        .width(Length::Fill)
        .padding(Padding {
            left: layout.app_bar_offset(app.navigation.is_open_desktop()),
            ..Padding::ZERO
        })
        .into()
}

fn view_drawer<'a>(
    app: &'a App,
    vm: SidebarViewModel<'a>,
    width: f32,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    sidebar_view::view(SidebarViewProps {
        vm,
        width,
        header_height: app.layout.viewport_class().toolbar_height(),
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(|intent| AppEvent::Sidebar(SidebarEvent::Intent(intent)))
}

fn view_scrim<'a>(
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let scrim = theme_props.theme.iced_palette().scrim;

    mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| container::Style {
                background: Some(scrim.into()),
                ..Default::default()
            }),
    )
    .on_press(AppEvent::Sidebar(SidebarEvent::Intent(SidebarIntent::Close)))
    .into()
}
