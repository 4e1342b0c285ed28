// SPDX-License-Identifier: MPL-2.0
//! Editor state machine: active tool, tool tray, stroke and edit stack.

use super::{Edit, LineWeight, Rgba, Shape, Stroke, Tool, BLACK, YELLOW_HIGHLIGHT};
use crate::config::HIGHLIGHTER_ALPHA;
use iced::{Point, Vector};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Gesture {
    Pan { last: Point },
    Draw,
}

#[derive(Debug, Clone)]
pub struct Annotator {
    tool: Tool,
    tray: Tool,
    weight: LineWeight,
    stroke: Stroke,
    edits: Vec<Edit>,
    pan: Vector,
    gesture: Option<Gesture>,
}

impl Default for Annotator {
    fn default() -> Self {
        Self::new(Vector::ZERO)
    }
}

impl Annotator {
    /// Starts with the pen active, the move tool in the tray and the page at `pan`.
    pub fn new(pan: Vector) -> Self {
        Self {
            tool: Tool::Pen,
            tray: Tool::Move,
            weight: LineWeight::Light,
            stroke: Stroke::default(),
            edits: Vec::new(),
            pan,
            gesture: None,
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn tray_tool(&self) -> Tool {
        self.tray
    }

    pub fn weight(&self) -> LineWeight {
        self.weight
    }

    pub fn stroke(&self) -> Stroke {
        self.stroke
    }

    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    pub fn pan(&self) -> Vector {
        self.pan
    }

    pub fn is_gesture_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Drawing tool whose palette is shown, even while panning through the tray.
    pub fn palette_tool(&self) -> Tool {
        if self.tool == Tool::Move {
            self.tray
        } else {
            self.tool
        }
    }

    /// Activates a tool from the tool menu and empties the tray.
    pub fn select_tool(&mut self, tool: Tool) {
        self.tool = tool;
        self.tray = Tool::Move;
        match tool {
            Tool::Pen => {
                self.set_weight(LineWeight::Light);
                self.stroke.color = BLACK;
            }
            Tool::Line => self.stroke.color = BLACK,
            Tool::Highlighter => self.stroke.color = YELLOW_HIGHLIGHT,
            Tool::Move => {}
        }
    }

    /// Swaps the active tool with the tray.
    pub fn toggle_tray(&mut self) {
        if self.tray == Tool::Move {
            self.tray = self.tool;
            self.tool = Tool::Move;
        } else {
            self.tool = self.tray;
            self.tray = Tool::Move;
        }
    }

    pub fn set_weight(&mut self, weight: LineWeight) {
        self.weight = weight;
        self.stroke.width = weight.width();
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.stroke.color = if self.palette_tool() == Tool::Highlighter {
            color.with_alpha(HIGHLIGHTER_ALPHA)
        } else {
            color
        };
    }

    /// Pointer pressed at `point` (view coordinates).
    pub fn press(&mut self, point: Point) {
        let local = point - self.pan;
        let gesture = match self.tool {
            Tool::Move => Gesture::Pan { last: point },
            Tool::Line | Tool::Highlighter => {
                self.push(Shape::Line {
                    from: local,
                    to: local,
                });
                Gesture::Draw
            }
            Tool::Pen => {
                self.push(Shape::Freehand {
                    points: vec![local],
                });
                Gesture::Draw
            }
        };
        self.gesture = Some(gesture);
    }

    /// Pointer moved to `point` while pressed.
    pub fn drag(&mut self, point: Point) {
        match self.gesture {
            Some(Gesture::Pan { last }) => {
                self.pan = self.pan + (point - last);
                self.gesture = Some(Gesture::Pan { last: point });
            }
            Some(Gesture::Draw) => {
                let local = point - self.pan;
                match self.edits.last_mut().map(|edit| &mut edit.shape) {
                    Some(Shape::Line { to, .. }) => *to = local,
                    Some(Shape::Freehand { points }) => points.push(local),
                    None => {}
                }
            }
            None => {}
        }
    }

    pub fn release(&mut self) {
        self.gesture = None;
    }

    /// Removes the most recent edit. Returns `false` if there was none.
    pub fn undo(&mut self) -> bool {
        self.edits.pop().is_some()
    }

    fn push(&mut self, shape: Shape) {
        self.edits.push(Edit {
            shape,
            stroke: self.stroke,
            translation: self.pan,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::Swatch;

    fn color_named(tool: Tool, key: &str) -> Rgba {
        tool.palette()
            .iter()
            .find(|s: &&Swatch| s.name_key == key)
            .map(|s| s.color)
            .expect("swatch exists")
    }

    #[test]
    fn defaults_to_pen_with_move_in_tray() {
        let annotator = Annotator::default();
        assert_eq!(annotator.tool(), Tool::Pen);
        assert_eq!(annotator.tray_tool(), Tool::Move);
        assert_eq!(annotator.weight(), LineWeight::Light);
        assert_eq!(annotator.stroke(), Stroke::default());
    }

    #[test]
    fn tray_toggles_both_ways() {
        let mut annotator = Annotator::default();
        annotator.select_tool(Tool::Line);

        annotator.toggle_tray();
        assert_eq!(annotator.tool(), Tool::Move);
        assert_eq!(annotator.tray_tool(), Tool::Line);
        assert_eq!(annotator.palette_tool(), Tool::Line);

        annotator.toggle_tray();
        assert_eq!(annotator.tool(), Tool::Line);
        assert_eq!(annotator.tray_tool(), Tool::Move);
    }

    #[test]
    fn selecting_a_tool_empties_the_tray() {
        let mut annotator = Annotator::default();
        annotator.toggle_tray();
        annotator.select_tool(Tool::Highlighter);
        assert_eq!(annotator.tool(), Tool::Highlighter);
        assert_eq!(annotator.tray_tool(), Tool::Move);
    }

    #[test]
    fn pen_resets_weight_and_color() {
        let mut annotator = Annotator::default();
        annotator.set_weight(LineWeight::Heavy);
        annotator.set_color(color_named(Tool::Pen, "color-red"));

        annotator.select_tool(Tool::Pen);
        assert_eq!(annotator.weight(), LineWeight::Light);
        assert_eq!(annotator.stroke(), Stroke::default());
    }

    #[test]
    fn line_keeps_weight_but_resets_color() {
        let mut annotator = Annotator::default();
        annotator.set_weight(LineWeight::Medium);
        annotator.set_color(color_named(Tool::Pen, "color-blue"));

        annotator.select_tool(Tool::Line);
        assert_eq!(annotator.weight(), LineWeight::Medium);
        assert_eq!(annotator.stroke().color, BLACK);
    }

    #[test]
    fn highlighter_defaults_to_translucent_yellow() {
        let mut annotator = Annotator::default();
        annotator.select_tool(Tool::Highlighter);
        assert_eq!(annotator.stroke().color, YELLOW_HIGHLIGHT);
    }

    #[test]
    fn highlighter_colors_keep_their_alpha() {
        let mut annotator = Annotator::default();
        annotator.select_tool(Tool::Highlighter);
        annotator.set_color(Rgba::opaque(0, 255, 255));
        assert_eq!(annotator.stroke().color.a, HIGHLIGHTER_ALPHA);
    }

    #[test]
    fn line_gesture_is_relative_to_pan() {
        let mut annotator = Annotator::new(Vector::new(10.0, 20.0));
        annotator.select_tool(Tool::Line);
        annotator.press(Point::new(15.0, 25.0));
        annotator.drag(Point::new(40.0, 20.0));
        annotator.drag(Point::new(60.0, 70.0));
        annotator.release();

        assert_eq!(annotator.edits().len(), 1);
        assert_eq!(
            annotator.edits()[0].shape,
            Shape::Line {
                from: Point::new(5.0, 5.0),
                to: Point::new(50.0, 50.0)
            }
        );
        assert_eq!(annotator.edits()[0].translation, Vector::new(10.0, 20.0));
    }

    #[test]
    fn pen_gesture_collects_points() {
        let mut annotator = Annotator::default();
        annotator.press(Point::new(1.0, 1.0));
        annotator.drag(Point::new(2.0, 3.0));
        annotator.drag(Point::new(4.0, 5.0));
        annotator.release();
        // Moving without a press adds nothing.
        annotator.drag(Point::new(9.0, 9.0));

        match &annotator.edits()[0].shape {
            Shape::Freehand { points } => assert_eq!(
                points,
                &vec![Point::new(1.0, 1.0), Point::new(2.0, 3.0), Point::new(4.0, 5.0)]
            ),
            other => panic!("expected freehand, got {other:?}"),
        }
    }

    #[test]
    fn edits_keep_the_stroke_they_were_drawn_with() {
        let mut annotator = Annotator::default();
        annotator.press(Point::ORIGIN);
        annotator.release();
        annotator.set_weight(LineWeight::Heavy);
        annotator.press(Point::ORIGIN);
        annotator.release();

        assert_eq!(annotator.edits()[0].stroke.width, 8.0);
        assert_eq!(annotator.edits()[1].stroke.width, 24.0);
    }

    #[test]
    fn move_gesture_pans_by_the_pointer_delta() {
        let mut annotator = Annotator::new(Vector::new(5.0, 5.0));
        annotator.toggle_tray();
        annotator.press(Point::new(100.0, 100.0));
        annotator.drag(Point::new(110.0, 90.0));
        annotator.drag(Point::new(130.0, 95.0));
        annotator.release();

        assert_eq!(annotator.pan(), Vector::new(35.0, 0.0));
        assert!(annotator.edits().is_empty());
    }

    #[test]
    fn undo_pops_the_latest_edit() {
        let mut annotator = Annotator::default();
        assert!(!annotator.undo());
        for x in [1.0, 2.0] {
            annotator.press(Point::new(x, x));
            annotator.release();
        }
        assert!(annotator.undo());
        assert_eq!(annotator.edits().len(), 1);
        assert_eq!(
            annotator.edits()[0].shape,
            Shape::Freehand {
                points: vec![Point::new(1.0, 1.0)]
            }
        );
    }
}
