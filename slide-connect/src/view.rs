use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length};

use crate::message::Message;
use crate::state::State;
use crate::theme;
use crate::widgets::slide_card;

const SECTION_GAP: f32 = 40.0;

pub fn view(state: &State) -> Element<'_, Message> {
    let start = button(text("Start Animation"))
        .padding([8, 20])
        .style(theme::Button::Primary.style())
        .on_press(Message::StartAnimation);

    let reset = button(text("Reset Animation"))
        .padding([8, 20])
        .style(theme::Button::Secondary.style())
        .on_press(Message::ResetAnimation);

    let content = column![
        start,
        reset,
        slide_card(state.frame, state.avatar.clone())
    ]
    .spacing(SECTION_GAP)
    .align_x(Alignment::Center);

    container(content)
        .center(Length::Fill)
        .style(theme::Container::Page.style())
        .into()
}
