// SPDX-License-Identifier: MPL-2.0
//! Modal prompt asking for the file name of an exported image.

use crate::export;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::widget::{button, text_input, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    Submit,
    Cancel,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Saved(PathBuf),
    Cancelled,
    /// Writing failed; carries the i18n key of the error.
    Failed(&'static str),
}

#[derive(Debug, Clone)]
pub struct State {
    image: image_rs::RgbaImage,
    dir: PathBuf,
    input: String,
    invalid: bool,
}

impl State {
    pub fn new(image: image_rs::RgbaImage, dir: PathBuf) -> Self {
        Self {
            image,
            dir,
            input: String::new(),
            invalid: false,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::InputChanged(value) => {
                self.input = value;
                self.invalid = false;
                Event::None
            }
            Message::Cancel => Event::Cancelled,
            Message::Submit => {
                let path = match export::validate_file_name(&self.input, &self.dir) {
                    Ok(path) => path,
                    Err(_) => {
                        // The prompt stays open until a usable name is given.
                        self.invalid = true;
                        return Event::None;
                    }
                };
                match export::save_jpeg(&self.image, &path) {
                    Ok(()) => Event::Saved(path),
                    Err(err) => {
                        log::error!("Failed to save {}: {err}", path.display());
                        Event::Failed(err.i18n_key())
                    }
                }
            }
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let input = text_input(&i18n.tr("save-prompt-placeholder"), &self.input)
            .on_input(Message::InputChanged)
            .on_submit(Message::Submit)
            .padding(spacing::XS)
            .size(typography::BODY);

        let suffix = Text::new(format!(".{}", export::EXTENSION)).size(typography::BODY);

        let mut column = Column::new()
            .spacing(spacing::SM)
            .push(Text::new(i18n.tr("save-prompt-title")).size(typography::TITLE_SM))
            .push(
                Text::new(i18n.tr_with_args(
                    "save-prompt-directory",
                    &[("dir", &self.dir.display().to_string())],
                ))
                .size(typography::CAPTION)
                .color(theme::muted_text_color()),
            )
            .push(
                Row::new()
                    .spacing(spacing::XS)
                    .align_y(alignment::Vertical::Center)
                    .push(input)
                    .push(suffix),
            );

        if self.invalid {
            column = column.push(
                Text::new(i18n.tr("error-invalid-file-name"))
                    .size(typography::BODY_SM)
                    .color(theme::error_text_color()),
            );
        }

        let buttons = Row::new()
            .spacing(spacing::XS)
            .push(Space::new().width(Length::Fill))
            .push(
                button(Text::new(i18n.tr("save-prompt-cancel")))
                    .style(styles::button::unselected)
                    .on_press(Message::Cancel),
            )
            .push(
                button(Text::new(i18n.tr("save-prompt-save")))
                    .style(styles::button::primary)
                    .on_press(Message::Submit),
            );

        let dialog = Container::new(column.push(buttons))
            .width(Length::Fixed(sizing::PROMPT_WIDTH))
            .padding(spacing::MD)
            .style(styles::container::panel);

        Container::new(dialog)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::backdrop)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn image() -> image_rs::RgbaImage {
        image_rs::RgbaImage::from_pixel(4, 3, image_rs::Rgba([10, 20, 30, 255]))
    }

    #[test]
    fn blank_name_keeps_prompt_open_with_error() {
        let dir = tempdir().expect("temp dir");
        let mut state = State::new(image(), dir.path().to_path_buf());
        state.update(Message::InputChanged("   ".into()));
        assert_eq!(state.update(Message::Submit), Event::None);
        assert!(state.is_invalid());

        // Typing clears the error.
        state.update(Message::InputChanged("page".into()));
        assert!(!state.is_invalid());
    }

    #[test]
    fn valid_name_writes_the_image() {
        let dir = tempdir().expect("temp dir");
        let mut state = State::new(image(), dir.path().to_path_buf());
        state.update(Message::InputChanged("notes".into()));

        let expected = dir.path().join("notes.jpg");
        assert_eq!(state.update(Message::Submit), Event::Saved(expected.clone()));
        assert!(expected.exists());
    }

    #[test]
    fn existing_file_is_rejected() {
        let dir = tempdir().expect("temp dir");
        std::fs::write(dir.path().join("taken.jpg"), b"x").expect("write");
        let mut state = State::new(image(), dir.path().to_path_buf());
        state.update(Message::InputChanged("taken".into()));
        assert_eq!(state.update(Message::Submit), Event::None);
        assert!(state.is_invalid());
    }

    #[test]
    fn cancel_is_reported() {
        let dir = tempdir().expect("temp dir");
        let mut state = State::new(image(), dir.path().to_path_buf());
        assert_eq!(state.update(Message::Cancel), Event::Cancelled);
    }
}
