use iced::widget::{Space, button, column, container, row, text};
use iced::{Element, Length, alignment};

use crate::fonts::FontsConfig;
use crate::theme::{IcedColorPalette, ThemeProps};

const PAGE_PADDING: f32 = 24.0;
const PAGE_SPACING: f32 = 12.0;
const PAGE_BODY_SIZE: f32 = 14.0;
const NOT_FOUND_CODE_SIZE: f32 = 48.0;
const ACTION_PADDING: [f32; 2] = [6.0, 16.0];
const ACTION_RADIUS: f32 = 4.0;

/// Route targets. Page bodies are owned by the management modules; the
/// shell only renders their frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Page {
    ServiceRequests,
    PhoneConsultations,
    RegistrationRequests,
    Customers,
    Companies,
    Employees,
    NotFound,
}

impl Page {
    pub(crate) fn title(self) -> &'static str {
        match self {
            Page::ServiceRequests => "Service requests",
            Page::PhoneConsultations => "Phone consultations",
            Page::RegistrationRequests => "Registration requests",
            Page::Customers => "Customers",
            Page::Companies => "Companies",
            Page::Employees => "Employees",
            Page::NotFound => "Page not found",
        }
    }

    fn summary(self) -> &'static str {
        match self {
            Page::ServiceRequests => "Incoming service requests and their status.",
            Page::PhoneConsultations => "Scheduled and completed phone consultations.",
            Page::RegistrationRequests => "Pending account registration requests.",
            Page::Customers => "Customer directory.",
            Page::Companies => "Registered companies.",
            Page::Employees => "Employee list.",
            Page::NotFound => "The requested address does not exist.",
        }
    }
}

/// Events emitted by page frames.
#[derive(Debug, Clone)]
pub(crate) enum PageEvent {
    GoHome,
    GoBack,
}

/// Props for rendering the routed page.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PageProps<'a> {
    pub(crate) page: Page,
    pub(crate) path: &'a str,
    pub(crate) can_go_back: bool,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the routed page.
pub(crate) fn view<'a>(props: PageProps<'a>) -> Element<'a, PageEvent> {
    match props.page {
        Page::NotFound => not_found(props),
        page => management_page(page, props),
    }
}

fn management_page<'a>(page: Page, props: PageProps<'a>) -> Element<'a, PageEvent> {
    let palette = props.theme.theme.iced_palette();
    let dim_foreground = palette.dim_foreground;

    let title = text(page.title())
        .size(props.fonts.title.size)
        .font(props.fonts.title.font_type);
    let summary = text(page.summary())
        .size(PAGE_BODY_SIZE)
        .font(props.fonts.ui.font_type)
        .style(move |_| text::Style {
            color: Some(dim_foreground),
        });

    container(column![title, summary].spacing(PAGE_SPACING))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(PAGE_PADDING)
        .into()
}

fn not_found<'a>(props: PageProps<'a>) -> Element<'a, PageEvent> {
    let palette = props.theme.theme.iced_palette();
    let dim_foreground = palette.dim_foreground;

    let code = text("404")
        .size(NOT_FOUND_CODE_SIZE)
        .font(props.fonts.title.font_type);
    let title = text(Page::NotFound.title())
        .size(props.fonts.title.size)
        .font(props.fonts.title.font_type);
    let detail = text(format!("No page is registered for {}.", props.path))
        .size(PAGE_BODY_SIZE)
        .font(props.fonts.ui.font_type)
        .style(move |_| text::Style {
            color: Some(dim_foreground),
        });

    let mut actions = row![action_button("Go to home", palette, PageEvent::GoHome)]
        .spacing(PAGE_SPACING);
    if props.can_go_back {
        actions = actions.push(action_button("Back", palette, PageEvent::GoBack));
    }

    let content = column![code, title, detail, Space::new().height(PAGE_SPACING), actions]
        .spacing(PAGE_SPACING)
        .align_x(alignment::Horizontal::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(PAGE_PADDING)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn action_button<'a>(
    label: &'a str,
    palette: &'a IcedColorPalette,
    on_press: PageEvent,
) -> Element<'a, PageEvent> {
    button(text(label).size(PAGE_BODY_SIZE))
        .padding(ACTION_PADDING)
        .on_press(on_press)
        .style(move |_, status| action_button_style(palette, status))
        .into()
}

fn action_button_style(
    palette: &IcedColorPalette,
    status: button::Status,
) -> button::Style {
    let mut background = palette.primary;
    if matches!(status, button::Status::Hovered | button::Status::Pressed) {
        background.a = 0.85;
    }

    button::Style {
        background: Some(background.into()),
        text_color: palette.on_primary,
        border: iced::Border {
            radius: ACTION_RADIUS.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
