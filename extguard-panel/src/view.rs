//! View code for the blocklist panel.

use iced::widget::{
    Space, button, center, checkbox, column, container, mouse_area, opaque,
    row, scrollable, stack, text, text_input,
};
use iced::{Alignment, Element, Length, Padding};

use extguard_model::{AddControl, ExtensionName, MAX_LABEL_EXTENSIONS};

use crate::message::Message;
use crate::state::State;
use crate::theme;
use crate::toast::Toast;

/// Tags per row in the custom-extension grid.
const TAGS_PER_ROW: usize = 6;

pub fn view(state: &State) -> Element<'_, Message> {
    if state.loading {
        return center(
            text("Loading extension blocklist...")
                .size(16)
                .color(theme::PanelTheme::TEXT_SECONDARY),
        )
        .into();
    }

    let content = column![
        text("Blocked file extensions").size(24),
        text("Uploads with a blocked extension are refused by the server.")
            .size(13)
            .color(theme::PanelTheme::TEXT_SECONDARY),
        view_fixed_section(state),
        view_custom_section(state),
    ]
    .spacing(16)
    .max_width(760);

    let base = scrollable(
        container(content).width(Length::Fill).padding(24).center_x(Length::Fill),
    );

    let mut layers = stack![container(base).width(Length::Fill).height(Length::Fill)];

    if let Some(name) = &state.pending_remove {
        layers = layers.push(view_confirm_modal(name));
    }

    if let Some(toast) = state.toasts.current() {
        layers = layers.push(view_toast_overlay(toast));
    }

    layers.into()
}

/// The checkbox group for the seven fixed extensions.
fn view_fixed_section(state: &State) -> Element<'_, Message> {
    let mut checkboxes = row![].spacing(16);
    for fixed in &state.fixed {
        let name = fixed.name.clone();
        checkboxes = checkboxes.push(
            checkbox(fixed.name.as_str(), fixed.checked)
                .on_toggle(move |checked| {
                    Message::FixedToggled(name.clone(), checked)
                })
                .size(18)
                .spacing(6),
        );
    }

    container(
        column![
            text("Fixed extensions").size(16),
            text("Always available; ticking one blocks it immediately.")
                .size(12)
                .color(theme::PanelTheme::TEXT_DIMMED),
            checkboxes,
        ]
        .spacing(10),
    )
    .padding(16)
    .width(Length::Fill)
    .style(theme::Container::Card.style())
    .into()
}

/// The custom-extension editor: add field, tag grid, count display.
fn view_custom_section(state: &State) -> Element<'_, Message> {
    let control = state.add_control();

    let input = text_input("Extension name (e.g. sh)", &state.input_value)
        .on_input(Message::InputChanged)
        .on_submit(Message::AddPressed)
        .padding(10)
        .size(14)
        .style(input_style(control).style())
        .width(Length::Fixed(260.0));

    let add_button = match control {
        AddControl::Normal => button(text("+ Add").size(14))
            .on_press(Message::AddPressed)
            .style(theme::Button::Primary.style()),
        AddControl::Blocked => button(text("Reserved").size(14))
            .style(theme::Button::Warning.style()),
        AddControl::AtCapacity => button(text("Limit reached").size(14))
            .style(theme::Button::Danger.style()),
    }
    .padding(Padding { top: 10.0, right: 16.0, bottom: 10.0, left: 16.0 });

    let count = text(format!(
        "{} / {}",
        state.label_count, MAX_LABEL_EXTENSIONS
    ))
    .size(13)
    .color(theme::PanelTheme::TEXT_SECONDARY);

    let mut section = column![
        text("Custom extensions").size(16),
        row![input, add_button, Space::with_width(Length::Fill), count]
            .spacing(10)
            .align_y(Alignment::Center),
    ]
    .spacing(12);

    if state.labels.is_empty() {
        section = section.push(
            text("No custom extensions yet.")
                .size(13)
                .color(theme::PanelTheme::TEXT_DIMMED),
        );
    } else {
        let mut grid = column![].spacing(8);
        for chunk in state.labels.chunks(TAGS_PER_ROW) {
            let mut tags = row![].spacing(8);
            for name in chunk {
                tags = tags.push(view_tag(name));
            }
            grid = grid.push(tags);
        }
        section = section.push(grid);
    }

    container(section)
        .padding(16)
        .width(Length::Fill)
        .style(theme::Container::Card.style())
        .into()
}

fn input_style(control: AddControl) -> theme::TextInput {
    match control {
        AddControl::Normal => theme::TextInput::Normal,
        AddControl::Blocked => theme::TextInput::Warning,
        AddControl::AtCapacity => theme::TextInput::Danger,
    }
}

/// One removable tag.
fn view_tag(name: &ExtensionName) -> Element<'_, Message> {
    let remove = button(text("\u{00d7}").size(14))
        .padding(Padding { top: 0.0, right: 4.0, bottom: 0.0, left: 4.0 })
        .style(theme::Button::TagRemove.style())
        .on_press(Message::RemoveRequested(name.clone()));

    container(
        row![text(name.as_str()).size(13), remove]
            .spacing(4)
            .align_y(Alignment::Center),
    )
    .padding(Padding { top: 4.0, right: 6.0, bottom: 4.0, left: 10.0 })
    .style(theme::Container::Tag.style())
    .into()
}

/// Removal confirmation: dimmed backdrop plus a centered card. Clicking the
/// backdrop cancels, same as the Cancel button.
fn view_confirm_modal(name: &ExtensionName) -> Element<'_, Message> {
    let card = container(
        column![
            text(format!("Remove '{name}' from the blocklist?")).size(16),
            text("Files with this extension will no longer be refused.")
                .size(12)
                .color(theme::PanelTheme::TEXT_SECONDARY),
            row![
                button(text("Cancel").size(14))
                    .on_press(Message::RemoveCancelled)
                    .style(theme::Button::Secondary.style())
                    .padding(Padding {
                        top: 8.0,
                        right: 14.0,
                        bottom: 8.0,
                        left: 14.0
                    }),
                button(text("Remove").size(14))
                    .on_press(Message::RemoveConfirmed)
                    .style(theme::Button::Danger.style())
                    .padding(Padding {
                        top: 8.0,
                        right: 14.0,
                        bottom: 8.0,
                        left: 14.0
                    }),
            ]
            .spacing(10),
        ]
        .spacing(14),
    )
    .padding(24)
    .max_width(420)
    .style(theme::Container::Modal.style());

    opaque(
        mouse_area(
            center(opaque(card))
                .style(theme::Container::ModalOverlay.style()),
        )
        .on_press(Message::RemoveCancelled),
    )
}

/// Render the active toast in the top-right corner.
fn view_toast_overlay(toast: &Toast) -> Element<'_, Message> {
    let dismiss = button(text("\u{00d7}").size(14))
        .padding(4)
        .style(theme::Button::TagRemove.style())
        .on_press(Message::ToastDismissed);

    let body = container(
        row![
            text(toast.message.as_str()).size(13),
            Space::with_width(12),
            dismiss,
        ]
        .align_y(Alignment::Center),
    )
    .padding(Padding { top: 10.0, right: 10.0, bottom: 10.0, left: 14.0 })
    .style(theme::toast_container(toast.level));

    container(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding { top: 20.0, right: 20.0, bottom: 20.0, left: 20.0 })
        .align_x(Alignment::End)
        .align_y(Alignment::Start)
        .into()
}
