//! The slide-to-connect card, painted on a canvas
//!
//! The card is drawn rather than laid out with widgets because its rotation
//! has to carry every child with it, and because the track's children are
//! stacked by their animated z-index rather than by layout order.
//!
//! Geometry follows a 384px card: 16px padding around a 56px pill track,
//! then the bank name and account number beneath it. Animated widths are
//! percentages of the track; animated x offsets are pixels.

use iced::widget::canvas::{self, Canvas, Geometry, Path, Program, Stroke};
use iced::widget::svg;
use iced::{
    Color, Element, Font, Length, Point, Radians, Rectangle, Renderer, Size, Theme, Vector,
    alignment, font, mouse,
};
use slide_motion::{ElementId, Snapshot};

use crate::theme::SlideConnectTheme;

pub const CARD_WIDTH: f32 = 384.0;
const CARD_RADIUS: f32 = 24.0;
const BORDER_WIDTH: f32 = 1.0;
const PADDING: f32 = 16.0;
const GAP: f32 = 16.0;
const INSET: f32 = PADDING + BORDER_WIDTH;

pub const TRACK_WIDTH: f32 = CARD_WIDTH - 2.0 * INSET;
pub const TRACK_HEIGHT: f32 = 56.0;
const KNOB_SIZE: f32 = 56.0;

const LINE_THICKNESS: f32 = 2.0;
const LINE_INDENT: f32 = 16.0;
const LINE_LIFT: f32 = 4.0;

const TITLE_HEIGHT: f32 = 40.0;
const TITLE_SIZE: f32 = 20.0;
const ROW_HEIGHT: f32 = 24.0;
const BODY_SIZE: f32 = 16.0;

pub const CARD_HEIGHT: f32 = 2.0 * INSET + TRACK_HEIGHT + GAP + TITLE_HEIGHT + ROW_HEIGHT;

/// Room for the card to swing through its wobble without being clipped.
const SWING_MARGIN: f32 = 48.0;
pub const CANVAS_WIDTH: f32 = CARD_WIDTH + 2.0 * SWING_MARGIN;
pub const CANVAS_HEIGHT: f32 = CARD_HEIGHT + 2.0 * (SWING_MARGIN + 32.0);

/// Check mark in a 17x16 box
const CHECK_GLYPH: [(f32, f32); 6] = [
    (6.79237, 12.6385),
    (1.94511, 9.27961),
    (0.799545, 10.9204),
    (7.29743, 15.423),
    (16.9632, 1.47407),
    (15.3242, 0.338343),
];
const CHECK_SIZE: Size = Size::new(17.0, 16.0);

/// Something painted inside the track, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Pill,
    Swipe,
    Knob,
    Avatar,
    TopLine,
    BottomLine,
}

impl Layer {
    pub const DOCUMENT_ORDER: [Layer; 6] = [
        Layer::Pill,
        Layer::Swipe,
        Layer::Knob,
        Layer::Avatar,
        Layer::TopLine,
        Layer::BottomLine,
    ];

    pub fn z_index(self, frame: &Snapshot) -> i32 {
        match self {
            // the pill is never animated and sits at the base of the stack
            Layer::Pill => 0,
            Layer::Swipe => frame[ElementId::Swipe].z_index,
            Layer::Knob => frame[ElementId::Circle].z_index,
            Layer::Avatar => frame[ElementId::Avatar].z_index,
            Layer::TopLine | Layer::BottomLine => frame[ElementId::Line].z_index,
        }
    }
}

/// Track layers from bottom to top. Equal z-indices keep document order.
pub fn paint_order(frame: &Snapshot) -> Vec<Layer> {
    let mut layers = Layer::DOCUMENT_ORDER.to_vec();
    layers.sort_by_key(|layer| layer.z_index(frame));
    layers
}

/// Pixel width of an element whose width is animated as a track percentage.
pub fn track_percent(percent: f32) -> f32 {
    TRACK_WIDTH * percent.max(0.0) / 100.0
}

fn faded(color: Color, opacity: f32) -> Color {
    color.scale_alpha(opacity.clamp(0.0, 1.0))
}

fn pill(top_left: Point, width: f32, height: f32) -> Path {
    Path::rounded_rectangle(top_left, Size::new(width, height), (width.min(height) / 2.0).into())
}

fn check_glyph(origin: Point) -> Path {
    Path::new(|builder| {
        let [first, rest @ ..] = CHECK_GLYPH;
        builder.move_to(Point::new(origin.x + first.0, origin.y + first.1));
        for (x, y) in rest {
            builder.line_to(Point::new(origin.x + x, origin.y + y));
        }
        builder.close();
    })
}

fn label(content: &str, position: Point, size: f32, font: Font) -> canvas::Text {
    canvas::Text {
        content: content.to_string(),
        position,
        color: SlideConnectTheme::TEXT_PRIMARY,
        size: size.into(),
        font,
        align_y: alignment::Vertical::Center,
        ..canvas::Text::default()
    }
}

#[derive(Debug, Clone)]
pub struct SlideCard {
    frame: Snapshot,
    avatar: svg::Handle,
}

impl SlideCard {
    pub fn new(frame: Snapshot, avatar: svg::Handle) -> Self {
        Self { frame, avatar }
    }

    fn draw_card(&self, frame: &mut canvas::Frame) {
        let outline = Path::rounded_rectangle(
            Point::ORIGIN,
            Size::new(CARD_WIDTH, CARD_HEIGHT),
            CARD_RADIUS.into(),
        );
        frame.fill(&outline, SlideConnectTheme::BACKGROUND);
        frame.stroke(
            &outline,
            Stroke::default()
                .with_width(BORDER_WIDTH)
                .with_color(SlideConnectTheme::GRAY_200),
        );

        let track = Point::new(INSET, INSET);
        for layer in paint_order(&self.frame) {
            self.draw_layer(frame, layer, track);
        }

        self.draw_details(frame, track.y + TRACK_HEIGHT + GAP);
    }

    fn draw_layer(&self, frame: &mut canvas::Frame, layer: Layer, track: Point) {
        match layer {
            Layer::Pill => {
                frame.fill(
                    &pill(track, TRACK_WIDTH, TRACK_HEIGHT),
                    SlideConnectTheme::GRAY_200,
                );
                frame.fill_text(canvas::Text {
                    align_x: alignment::Horizontal::Center.into(),
                    ..label(
                        "Slide to connect",
                        Point::new(track.x + TRACK_WIDTH / 2.0, track.y + TRACK_HEIGHT / 2.0),
                        BODY_SIZE,
                        Font::DEFAULT,
                    )
                });
            }
            Layer::Swipe => {
                let swipe = self.frame[ElementId::Swipe];
                let width = track_percent(swipe.width);
                if width > 0.0 {
                    frame.fill(
                        &pill(Point::new(track.x + swipe.x, track.y), width, TRACK_HEIGHT),
                        faded(SlideConnectTheme::GREEN_400, swipe.opacity),
                    );
                }
            }
            Layer::Knob => {
                let circle = self.frame[ElementId::Circle];
                let icon = self.frame[ElementId::Icon];
                let center = Point::new(
                    track.x + circle.x + KNOB_SIZE / 2.0,
                    track.y + TRACK_HEIGHT / 2.0,
                );

                frame.fill(
                    &Path::circle(center, KNOB_SIZE / 2.0),
                    faded(SlideConnectTheme::GREEN_700, circle.opacity),
                );

                if icon.opacity > 0.0 {
                    let origin = Point::new(
                        center.x + icon.x - CHECK_SIZE.width / 2.0,
                        center.y - CHECK_SIZE.height / 2.0,
                    );
                    frame.fill(&check_glyph(origin), faded(Color::WHITE, icon.opacity));
                }
            }
            Layer::Avatar => {
                let avatar = self.frame[ElementId::Avatar];
                if avatar.opacity <= 0.0 {
                    return;
                }

                let top_left = Point::new(track.x + avatar.x, track.y);
                let center = top_left + Vector::new(KNOB_SIZE / 2.0, KNOB_SIZE / 2.0);
                frame.fill(
                    &Path::circle(center, KNOB_SIZE / 2.0),
                    faded(SlideConnectTheme::GRAY_100, avatar.opacity),
                );
                frame.draw_svg(
                    Rectangle::new(top_left, Size::new(KNOB_SIZE, KNOB_SIZE)),
                    iced::advanced::svg::Svg::new(self.avatar.clone())
                        .opacity(avatar.opacity.clamp(0.0, 1.0)),
                );
            }
            Layer::TopLine | Layer::BottomLine => {
                let line = self.frame[ElementId::Line];
                let width = track_percent(line.width);
                if width <= 0.0 || line.opacity <= 0.0 {
                    return;
                }

                let y = match layer {
                    Layer::TopLine => track.y - LINE_LIFT,
                    _ => track.y + TRACK_HEIGHT,
                };
                frame.fill_rectangle(
                    Point::new(track.x + LINE_INDENT + line.x, y),
                    Size::new(width, LINE_THICKNESS),
                    faded(SlideConnectTheme::PINK_900, line.opacity),
                );
            }
        }
    }

    fn draw_details(&self, frame: &mut canvas::Frame, top: f32) {
        let bold = Font {
            weight: font::Weight::Bold,
            ..Font::DEFAULT
        };
        frame.fill_text(label(
            "ICICI Bank",
            Point::new(INSET, top + TITLE_HEIGHT / 2.0),
            TITLE_SIZE,
            bold,
        ));

        let row = top + TITLE_HEIGHT + ROW_HEIGHT / 2.0;
        frame.fill_text(label(
            "ACCOUNT NUMBER",
            Point::new(INSET, row),
            BODY_SIZE,
            Font::DEFAULT,
        ));
        frame.fill_text(canvas::Text {
            align_x: alignment::Horizontal::Right.into(),
            ..label(
                "****5286",
                Point::new(INSET + TRACK_WIDTH, row),
                BODY_SIZE,
                Font::DEFAULT,
            )
        });
    }
}

impl<Message> Program<Message> for SlideCard {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let rotation = self.frame[ElementId::Card].rotate;

        // rotate about the card's centre, like a CSS transform
        frame.with_save(|frame| {
            frame.translate(Vector::new(bounds.width / 2.0, bounds.height / 2.0));
            frame.rotate(Radians(rotation.to_radians()));
            frame.translate(Vector::new(-CARD_WIDTH / 2.0, -CARD_HEIGHT / 2.0));
            self.draw_card(frame);
        });

        vec![frame.into_geometry()]
    }
}

/// Create the card for one animation frame
pub fn slide_card<'a, Message: 'a>(frame: Snapshot, avatar: svg::Handle) -> Element<'a, Message> {
    Canvas::new(SlideCard::new(frame, avatar))
        .width(Length::Fixed(CANVAS_WIDTH))
        .height(Length::Fixed(CANVAS_HEIGHT))
        .into()
}
