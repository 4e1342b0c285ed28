// SPDX-License-Identifier: MPL-2.0
//! Editor toolbar: tools, tray, line weights, palette and document actions.

use super::{State, ToolbarMessage, ViewEnv};
use crate::annotation::{LineWeight, Tool};
use crate::capture::Handedness;
use crate::ui::components::icon_button;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons::Glyph;
use crate::ui::styles;
use iced::widget::{button, tooltip, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

fn tool_glyph(tool: Tool) -> Glyph {
    match tool {
        Tool::Move => Glyph::Move,
        Tool::Line => Glyph::Line,
        Tool::Pen => Glyph::Pencil,
        Tool::Highlighter => Glyph::Highlighter,
    }
}

pub fn view<'a>(state: &'a State, env: &ViewEnv<'a>) -> Element<'a, ToolbarMessage> {
    let i18n = env.i18n;
    let annotator = state.annotator();

    // The tray shows whatever the next toggle would activate.
    let tray_glyph = if annotator.tool() == Tool::Move {
        tool_glyph(annotator.tray_tool())
    } else {
        Glyph::Move
    };
    let tray = icon_button(
        tray_glyph,
        i18n.tr("editor-tray-tooltip"),
        Some(ToolbarMessage::ToggleTray),
        annotator.tool() == Tool::Move,
        env.is_dark,
    );

    let tools = Tool::DRAWING.iter().fold(Row::new().spacing(spacing::XXS), |row, &tool| {
        row.push(icon_button(
            tool_glyph(tool),
            i18n.tr(tool.i18n_key()),
            Some(ToolbarMessage::SelectTool(tool)),
            annotator.tool() == tool,
            env.is_dark,
        ))
    });

    let weights = LineWeight::ALL.iter().fold(Row::new().spacing(spacing::XXS), |row, &weight| {
        row.push(
            button(Text::new(i18n.tr(weight.i18n_key())).size(typography::BODY_SM))
                .padding([spacing::XS, spacing::SM])
                .style(if annotator.weight() == weight {
                    styles::button::selected
                } else {
                    styles::button::unselected
                })
                .on_press(ToolbarMessage::SetWeight(weight)),
        )
    });

    let current = annotator.stroke().color;
    let swatches = annotator
        .palette_tool()
        .palette()
        .iter()
        .fold(Row::new().spacing(spacing::XXS), |row, swatch| {
            let selected = swatch.color.r == current.r && swatch.color.g == current.g && swatch.color.b == current.b;
            let chip = button(Space::new().width(Length::Fixed(sizing::SWATCH)).height(Length::Fixed(sizing::SWATCH)))
                .padding(0)
                .style(styles::button::swatch(swatch.color.into(), selected))
                .on_press(ToolbarMessage::SetColor(swatch.color));
            let tip = Container::new(Text::new(i18n.tr(swatch.name_key)).size(typography::BODY_SM))
                .padding(spacing::XS)
                .style(styles::container::tooltip);
            row.push(tooltip(chip, tip, tooltip::Position::Bottom).gap(spacing::XS))
        });

    let undo = icon_button(
        Glyph::Undo,
        i18n.tr("editor-undo-tooltip"),
        (!annotator.edits().is_empty()).then_some(ToolbarMessage::Undo),
        false,
        env.is_dark,
    );
    let save = icon_button(
        Glyph::Download,
        i18n.tr("editor-save-tooltip"),
        Some(ToolbarMessage::Save),
        false,
        env.is_dark,
    );
    let back = icon_button(
        Glyph::ArrowLeft,
        i18n.tr("editor-back-tooltip"),
        Some(ToolbarMessage::BackToViewer),
        false,
        env.is_dark,
    );

    let middle = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(back)
        .push(tools)
        .push(weights)
        .push(swatches)
        .push(Space::new().width(Length::Fill))
        .push(undo)
        .push(save);

    // Keep the tray under the dominant hand.
    let row = match state.handedness() {
        Handedness::Left => Row::new().push(tray).push(middle),
        Handedness::Right => Row::new().push(middle).push(tray),
    };

    Container::new(row.spacing(spacing::MD).align_y(alignment::Vertical::Center))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TOOLBAR_HEIGHT))
        .padding([spacing::XS, spacing::SM])
        .align_y(alignment::Vertical::Center)
        .style(styles::container::toolbar)
        .into()
}
